use crate::restrictions::WordRestrictions;
use crate::results::WordleError;
use crate::results::WORD_LENGTH;
use log::debug;
use std::io::BufRead;
use std::ops::Deref;
use std::result::Result;
use std::sync::Arc;

/// Contains all the possible words for this Wordle game, in the order they were given.
///
/// The order matters: when several words remain possible, the earliest one is guessed first.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WordBank {
    all_words: Vec<Arc<str>>,
}

impl WordBank {
    /// Constructs a new `WordBank` struct by reading words from the given reader.
    ///
    /// The reader should provide one word per line. Each word is trimmed and converted to lower
    /// case, and blank lines are skipped. Every word must have [`WORD_LENGTH`] letters.
    pub fn from_reader<R: BufRead>(word_reader: R) -> Result<Self, WordleError> {
        let mut all_words = Vec::new();
        for maybe_word in word_reader.lines() {
            if let Some(word) = WordBank::clean_word(&maybe_word?)? {
                all_words.push(word);
            }
        }
        Ok(WordBank { all_words })
    }

    /// Constructs a new `WordBank` struct using the words from the given iterator.
    ///
    /// Each word is trimmed and converted to lower case, and empty words are skipped.
    pub fn from_iterator<S>(words: impl IntoIterator<Item = S>) -> Result<Self, WordleError>
    where
        S: AsRef<str>,
    {
        let mut all_words = Vec::new();
        for word in words {
            if let Some(word) = WordBank::clean_word(word.as_ref())? {
                all_words.push(word);
            }
        }
        Ok(WordBank { all_words })
    }

    /// Returns the number of letters in each word.
    pub fn word_length(&self) -> usize {
        WORD_LENGTH
    }

    fn clean_word(word: &str) -> Result<Option<Arc<str>>, WordleError> {
        let word = word.trim().to_lowercase();
        if word.is_empty() {
            return Ok(None);
        }
        let length = word.chars().count();
        if length != WORD_LENGTH {
            return Err(WordleError::WordLength(length));
        }
        if !word.chars().all(|letter| letter.is_ascii_lowercase()) {
            return Err(WordleError::InvalidWord(word));
        }
        Ok(Some(Arc::from(word)))
    }
}

impl Deref for WordBank {
    type Target = [Arc<str>];

    fn deref(&self) -> &Self::Target {
        &self.all_words
    }
}

/// Gets the list of words in the word bank that meet the given restrictions, in word bank order.
///
/// The words are always filtered from the full bank, never from an earlier result. Each kind of
/// restriction is applied as a separate pass, and later passes are skipped once no words remain.
pub fn get_possible_words(restrictions: &WordRestrictions, bank: &WordBank) -> Vec<Arc<str>> {
    let mut possible_words: Vec<Arc<str>> = bank
        .iter()
        .filter(|word| restrictions.matches_known_letters(word))
        .cloned()
        .collect();
    if !possible_words.is_empty() {
        possible_words.retain(|word| restrictions.matches_present_letters(word));
    }
    if !possible_words.is_empty() {
        possible_words.retain(|word| restrictions.matches_not_present_letters(word));
    }
    debug!(
        "{} of {} words are still possible",
        possible_words.len(),
        bank.len()
    );
    possible_words
}
