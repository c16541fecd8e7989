//! Core guessing game: state machine, difficulty policy, and hints.

pub mod logic;
pub mod types;

pub use logic::{abandon, attempt_budget_for, evaluate, pick_secret, proximity_for, start_session};
pub use types::{
    Comparison, Difficulty, GameSession, GuessOutcome, Proximity, SessionStatus, TerminalState,
};
