//! Decoders for the different ways a puzzle can report the result of a guess.
//!
//! The solver only ever works with [`LetterResult`]s. Each decoder turns one site's (or one
//! person's) way of writing feedback into that form.

use crate::results::LetterResult;
use crate::results::WordleError;
use crate::results::WORD_LENGTH;
use std::result::Result;

/// Turns raw feedback for a single guess into one [`LetterResult`] per letter.
pub trait FeedbackDecoder {
    /// Decodes the given feedback. Fails if any tile can't be understood, or if there is not
    /// exactly one tile per letter.
    fn decode(&self, raw: &str) -> Result<Vec<LetterResult>, WordleError>;
}

/// One character per letter, as typed at a terminal.
///
/// * `g` or `2`: correct
/// * `y` or `1`: present, but not here
/// * `.`, `b`, `x`, `-` or `0`: not present
///
/// ```
/// use rs_wordle_autosolver::FeedbackDecoder;
/// use rs_wordle_autosolver::LetterCodes;
/// use rs_wordle_autosolver::LetterResult;
///
/// let results = LetterCodes.decode("g.y..").unwrap();
/// assert_eq!(results[0], LetterResult::Correct);
/// assert_eq!(results[2], LetterResult::PresentNotHere);
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct LetterCodes;

impl FeedbackDecoder for LetterCodes {
    fn decode(&self, raw: &str) -> Result<Vec<LetterResult>, WordleError> {
        let results = raw
            .trim()
            .chars()
            .map(|code| match code.to_ascii_lowercase() {
                'g' | '2' => Ok(LetterResult::Correct),
                'y' | '1' => Ok(LetterResult::PresentNotHere),
                '.' | 'b' | 'x' | '-' | '0' => Ok(LetterResult::NotPresent),
                _ => Err(WordleError::InvalidFeedback(format!(
                    "'{}' is not one of 'g', 'y' or '.'",
                    code
                ))),
            })
            .collect::<Result<Vec<LetterResult>, WordleError>>()?;
        check_length(results)
    }
}

/// Whitespace-separated tile states, as found in the `data-state` attribute of each tile on the
/// puzzle's web page: `correct`, `present` or `absent`.
#[derive(Debug, Clone, Copy, Default)]
pub struct TileStates;

impl TileStates {
    /// Decodes a single tile state.
    pub fn decode_tile(state: &str) -> Option<LetterResult> {
        match state.trim().to_ascii_lowercase().as_str() {
            "correct" => Some(LetterResult::Correct),
            "present" => Some(LetterResult::PresentNotHere),
            "absent" => Some(LetterResult::NotPresent),
            _ => None,
        }
    }
}

impl FeedbackDecoder for TileStates {
    fn decode(&self, raw: &str) -> Result<Vec<LetterResult>, WordleError> {
        let results = raw
            .split(|c: char| c.is_whitespace() || c == ',')
            .filter(|state| !state.is_empty())
            .map(|state| {
                TileStates::decode_tile(state).ok_or_else(|| {
                    WordleError::InvalidFeedback(format!("unknown tile state \"{}\"", state))
                })
            })
            .collect::<Result<Vec<LetterResult>, WordleError>>()?;
        check_length(results)
    }
}

/// The coloured squares used when sharing results: 🟩, 🟨, and ⬛ or ⬜.
#[derive(Debug, Clone, Copy, Default)]
pub struct EmojiSquares;

impl FeedbackDecoder for EmojiSquares {
    fn decode(&self, raw: &str) -> Result<Vec<LetterResult>, WordleError> {
        let results = raw
            .chars()
            // Skip spacing and emoji variation selectors.
            .filter(|c| !c.is_whitespace() && *c != '\u{fe0f}')
            .map(|square| match square {
                '🟩' => Ok(LetterResult::Correct),
                '🟨' => Ok(LetterResult::PresentNotHere),
                '⬛' | '⬜' => Ok(LetterResult::NotPresent),
                _ => Err(WordleError::InvalidFeedback(format!(
                    "'{}' is not a result square",
                    square
                ))),
            })
            .collect::<Result<Vec<LetterResult>, WordleError>>()?;
        check_length(results)
    }
}

fn check_length(results: Vec<LetterResult>) -> Result<Vec<LetterResult>, WordleError> {
    if results.len() != WORD_LENGTH {
        return Err(WordleError::WordLength(results.len()));
    }
    Ok(results)
}
