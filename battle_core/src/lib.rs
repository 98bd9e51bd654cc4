//! battle_core - Turn-based two-player battle resolution
//!
//! This library provides:
//! - Combatant: per-archetype stats, HP/MP and the attack/special/defend/heal math
//! - Participant: a player seat wrapping a combatant and a win/loss record
//! - BattleEngine: turn order, action dispatch, win detection and the battle log
//! - Snapshots: `GameState` and `BattleStatistics` views for rendering
//!
//! # Quick Start
//!
//! ```rust
//! use battle_core::prelude::*;
//!
//! let alice = Participant::with_archetype(ParticipantId::One, "Alice", Archetype::Warrior);
//! let bob = Participant::with_archetype(ParticipantId::Two, "Bob", Archetype::Mage);
//! let mut engine = BattleEngine::with_seed(alice, bob, 42).unwrap();
//!
//! // The mage is faster and acts first
//! assert_eq!(engine.current_participant().name(), "Bob");
//!
//! while !engine.is_game_over() {
//!     engine.execute_action("attack").unwrap();
//! }
//! let stats = engine.battle_statistics().unwrap();
//! println!("{:?} won after {} rounds", stats.winner, stats.rounds);
//! ```

pub mod combatant;
pub mod config;
pub mod engine;
pub mod error;
pub mod participant;
pub mod prelude;
pub mod snapshot;
pub mod types;

// Core API - what most users need
pub use combatant::Combatant;
pub use engine::{ActionReport, BattleEngine, BattleLog, BattlePhase, LogEntry};
pub use error::BattleError;
pub use participant::Participant;
pub use types::{Action, ActionOutcome, ParticipantId};

// Snapshots
pub use snapshot::{BattleStatistics, CombatantStatistics, GameState, ParticipantStatus};

// Configuration
pub use config::{BattleConstants, ConfigError, MatchConfig};

// Re-export commonly needed roster_core types
pub use roster_core::{Archetype, ArchetypeStats, SpecialKind};
