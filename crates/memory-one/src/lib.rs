//! Memory-one strategies for the Iterated Prisoner's Dilemma
//!
//! A memory-one player conditions its next move only on the previous
//! round's outcome, through a four-entry table of cooperation
//! probabilities. This crate provides:
//! - the validated probability table ([`FourVector`])
//! - closed-form derivations for the named strategies, including the
//!   zero-determinant family ([`strategy`], [`zd`])
//! - the seeded decision engine that turns a table into reproducible play
//!   ([`MemoryOnePlayer`], [`SeededRng`])
//!
//! Match orchestration, scoring and the opponent abstraction live outside
//! this crate; per round, a caller asks the player to decide, then records
//! both actions back into it.
//!
//! ```
//! use memory_one::{Action, MemoryOnePlayer, SeededRng};
//!
//! let mut player = MemoryOnePlayer::win_stay_lose_shift()?;
//! let mut rng = SeededRng::new(&[7u8; 32], 0);
//!
//! let own = player.decide(&mut rng)?;
//! assert_eq!(own, Action::Cooperate);
//! player.record_round(own, Action::Defect);
//! # Ok::<(), memory_one::StrategyError>(())
//! ```

mod error;
mod game;
mod player;
mod random;
mod vector;

pub mod strategy;
pub mod zd;

pub use error::StrategyError;
pub use game::Payoffs;
pub use player::{
    decide, AllCOrAllD, Classifier, LinearRelationPlayer, MemoryOnePlayer, OpeningMove,
};
pub use random::SeededRng;
pub use vector::{Action, FourVector, Outcome};
