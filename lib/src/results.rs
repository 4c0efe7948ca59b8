use std::sync::Arc;
use thiserror::Error;

/// The number of letters in every word of the puzzle.
pub const WORD_LENGTH: usize = 5;

/// The number of guesses the puzzle allows.
pub const MAX_ATTEMPTS: usize = 6;

/// The answer reported when a game ends without identifying the word.
pub const NOT_FOUND_ANSWER: &str = "sorry, not found.";

/// The result of a given letter at a specific location.
#[derive(Debug, Eq, PartialEq, Clone, Copy, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum LetterResult {
    /// The letter is in the word at exactly this location.
    Correct,
    /// The letter is in the word, but not at this location.
    PresentNotHere,
    /// The letter does not occur in the word beyond any already-confirmed occurrences.
    NotPresent,
}

/// Indicates that an error occurred while trying to guess the objective word.
#[derive(Debug, Error)]
pub enum WordleError {
    /// A word or list of letter results did not have the expected length. Contains the length
    /// that was found.
    #[error("expected 5 letters, but found {0}")]
    WordLength(usize),

    /// Feedback could not be decoded into letter results.
    #[error("could not understand the feedback: {0}")]
    InvalidFeedback(String),

    /// The word contains characters other than lowercase ASCII letters.
    #[error("the word \"{0}\" must only contain lowercase letters a-z")]
    InvalidWord(String),

    /// No word in the word bank is consistent with the results seen so far. Either the objective
    /// word is not in the word bank, or the results were inconsistent.
    #[error("no word in the word bank matches the results so far")]
    NoCandidates,

    #[error("general IO error")]
    Io(#[from] std::io::Error),
}

/// The result of a single word guess.
#[derive(Debug, PartialEq, Eq, Clone)]
pub struct GuessResult<'a> {
    pub guess: &'a str,
    /// The result of each letter, provided in the same letter order as in the guess.
    pub results: Vec<LetterResult>,
}

impl<'a> GuessResult<'a> {
    /// Returns `true` iff every letter in the guess was correct.
    pub fn is_all_correct(&self) -> bool {
        self.results
            .iter()
            .all(|result| *result == LetterResult::Correct)
    }
}

/// Whether the game was won or lost by the guesser.
#[derive(Debug, Eq, PartialEq, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum GameResult {
    /// Every location became known. Provides the answer and the guesses that were given.
    Success {
        answer: Arc<str>,
        guesses: Vec<Arc<str>>,
    },
    /// The guesser ran out of attempts. Provides the guesses that were given.
    Failure { guesses: Vec<Arc<str>> },
}

impl GameResult {
    /// The guesses that were submitted, in order.
    pub fn guesses(&self) -> &[Arc<str>] {
        match self {
            GameResult::Success { guesses, .. } => guesses,
            GameResult::Failure { guesses } => guesses,
        }
    }

    /// The solved word, or [`NOT_FOUND_ANSWER`] if the game was lost.
    pub fn answer(&self) -> &str {
        match self {
            GameResult::Success { answer, .. } => answer,
            GameResult::Failure { .. } => NOT_FOUND_ANSWER,
        }
    }
}

/// The single-field report for a finished game, e.g. `{"answer":"candy"}`.
#[cfg(feature = "serde")]
#[derive(Debug, PartialEq, Eq, Clone, serde::Serialize, serde::Deserialize)]
pub struct Answer {
    pub answer: String,
}

#[cfg(feature = "serde")]
impl From<&GameResult> for Answer {
    fn from(result: &GameResult) -> Answer {
        Answer {
            answer: result.answer().to_string(),
        }
    }
}

/// Determines the result of the given `guess` when applied to the given `objective`.
///
/// Repeated letters follow the usual puzzle rules: exact matches are marked first, then each
/// remaining copy of a letter is marked as present only while unmatched copies remain in the
/// objective.
///
/// ```
/// use rs_wordle_autosolver::get_result_for_guess;
/// use rs_wordle_autosolver::LetterResult;
///
/// let result = get_result_for_guess("mesas", "sassy").unwrap();
/// assert_eq!(result.results[2], LetterResult::Correct);
/// assert_eq!(result.results[3], LetterResult::NotPresent);
/// ```
pub fn get_result_for_guess<'a>(
    objective: &str,
    guess: &'a str,
) -> Result<GuessResult<'a>, WordleError> {
    let objective_letters: Vec<char> = objective.chars().collect();
    let guess_letters: Vec<char> = guess.chars().collect();
    if objective_letters.len() != WORD_LENGTH {
        return Err(WordleError::WordLength(objective_letters.len()));
    }
    if guess_letters.len() != WORD_LENGTH {
        return Err(WordleError::WordLength(guess_letters.len()));
    }

    let mut results = vec![LetterResult::NotPresent; WORD_LENGTH];
    let mut unmatched: Vec<Option<char>> = Vec::with_capacity(WORD_LENGTH);
    for (index, (objective_letter, guess_letter)) in
        objective_letters.iter().zip(&guess_letters).enumerate()
    {
        if objective_letter == guess_letter {
            results[index] = LetterResult::Correct;
            unmatched.push(None);
        } else {
            unmatched.push(Some(*objective_letter));
        }
    }
    for (index, letter) in guess_letters.iter().enumerate() {
        if results[index] == LetterResult::Correct {
            continue;
        }
        if let Some(slot) = unmatched.iter_mut().find(|slot| **slot == Some(*letter)) {
            *slot = None;
            results[index] = LetterResult::PresentNotHere;
        }
    }

    Ok(GuessResult { guess, results })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn game_result_answer_success() {
        let result = GameResult::Success {
            answer: Arc::from("candy"),
            guesses: vec![Arc::from("arise"), Arc::from("candy")],
        };

        assert_eq!(result.answer(), "candy");
        assert_eq!(result.guesses().len(), 2);
    }

    #[test]
    fn game_result_answer_failure_is_sentinel() {
        let result = GameResult::Failure {
            guesses: vec![Arc::from("arise")],
        };

        assert_eq!(result.answer(), NOT_FOUND_ANSWER);
    }

    #[test]
    fn guess_result_is_all_correct() {
        let result = GuessResult {
            guess: "candy",
            results: vec![LetterResult::Correct; WORD_LENGTH],
        };
        assert!(result.is_all_correct());

        let result = GuessResult {
            guess: "candy",
            results: vec![
                LetterResult::Correct,
                LetterResult::Correct,
                LetterResult::Correct,
                LetterResult::Correct,
                LetterResult::NotPresent,
            ],
        };
        assert!(!result.is_all_correct());
    }

    #[test]
    fn word_length_error_message() {
        assert_eq!(
            WordleError::WordLength(4).to_string(),
            "expected 5 letters, but found 4"
        );
    }
}
