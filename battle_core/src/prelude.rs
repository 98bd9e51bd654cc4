//! Prelude module for convenient imports
//!
//! ```rust
//! use battle_core::prelude::*;
//! ```

// Core types
pub use crate::combatant::Combatant;
pub use crate::participant::Participant;
pub use crate::types::{Action, ActionOutcome, ParticipantId};

// Engine
pub use crate::engine::{ActionReport, BattleEngine, BattlePhase};
pub use crate::error::BattleError;

// Snapshots
pub use crate::snapshot::{BattleStatistics, GameState};

// Config
pub use crate::config::{BattleConstants, MatchConfig};

// Re-exports from roster_core
pub use roster_core::{Archetype, SpecialKind};
