//! roster_core - Character archetypes for duel battles
//!
//! Provides the three selectable archetypes, their fixed base stats and
//! the special attack each one owns. Contains no combat rules.

mod stats;
mod types;

pub use stats::{ArchetypeInfo, ArchetypeStats};
pub use types::{Archetype, SpecialKind};

use thiserror::Error;

/// Error resolving an archetype selection
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RosterError {
    #[error("Unknown archetype: {0}")]
    UnknownArchetype(String),
}
