//! Rejection reasons for battle actions

use thiserror::Error;

/// Why an action was refused
///
/// Every variant is recoverable. The engine and the combatants never mutate
/// state before returning one of these.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BattleError {
    /// Action token is not one of attack, special, defend, heal
    #[error("Invalid action: {0}")]
    InvalidAction(String),
    /// The battle already has a winner
    #[error("Game is over")]
    GameOver,
    /// The actor cannot pay the MP cost of a special or heal
    #[error("Not enough MP")]
    InsufficientMp {
        /// MP cost of the attempted action
        required: u32,
        /// MP the actor had when it tried
        available: u32,
    },
    /// The acting (or targeted) combatant is unset or dead
    #[error("Character not available")]
    CharacterUnavailable,
}
