//! Solves Wordle-style puzzles by accumulating the result of each guess into a set of
//! restrictions, filtering a word bank down to the words that are still possible, and guessing
//! the first of them.
//!
//! The puzzle itself is reached through a [`PuzzleDriver`], so the same solver works against a
//! simulated puzzle, a person at a terminal, or anything else that can report results.

mod data;
mod engine;
mod feedback;
mod restrictions;
mod results;

pub use data::*;
pub use engine::*;
pub use feedback::*;
pub use restrictions::WordRestrictions;
pub use results::*;
