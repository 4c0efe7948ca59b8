use crate::results::GuessResult;
use crate::results::LetterResult;
use crate::results::WordleError;
use crate::results::WORD_LENGTH;
use std::collections::BTreeMap;
use std::collections::BTreeSet;
use std::iter::zip;
use std::result::Result;

/// Defines letter restrictions that a word must adhere to, accumulated from every guess result
/// seen so far.
///
/// Restrictions only ever grow: a location, once known, keeps its letter, and letters are never
/// removed from the present or not-present sets.
#[derive(Debug, Default, PartialEq, Eq, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct WordRestrictions {
    /// The letter known to be at each location, if any.
    known_letters: [Option<char>; WORD_LENGTH],
    /// Letters that must be present, along with the locations where they must not be.
    present_not_here: BTreeMap<char, BTreeSet<usize>>,
    /// Letters that were marked as not present at least once.
    not_present_letters: BTreeSet<char>,
}

impl WordRestrictions {
    /// Creates a `WordRestrictions` object with all letters unknown.
    pub fn new() -> WordRestrictions {
        WordRestrictions::default()
    }

    /// Returns the restrictions imposed by the given result.
    pub fn from_result(result: &GuessResult) -> Result<WordRestrictions, WordleError> {
        let mut restrictions = WordRestrictions::new();
        restrictions.update(result)?;
        Ok(restrictions)
    }

    /// Adds restrictions arising from the given guess result.
    ///
    /// Returns [`WordleError::WordLength`] without modifying the restrictions if either the guess
    /// or its results do not have exactly [`WORD_LENGTH`] entries.
    pub fn update(&mut self, guess_result: &GuessResult) -> Result<(), WordleError> {
        let guess_length = guess_result.guess.chars().count();
        if guess_length != WORD_LENGTH {
            return Err(WordleError::WordLength(guess_length));
        }
        if guess_result.results.len() != WORD_LENGTH {
            return Err(WordleError::WordLength(guess_result.results.len()));
        }

        for ((index, letter), result) in
            zip(guess_result.guess.chars().enumerate(), &guess_result.results)
        {
            match result {
                LetterResult::Correct => {
                    // The first correct letter for a location wins.
                    self.known_letters[index].get_or_insert(letter);
                }
                LetterResult::PresentNotHere => {
                    self.present_not_here
                        .entry(letter)
                        .or_default()
                        .insert(index);
                }
                LetterResult::NotPresent => {
                    self.not_present_letters.insert(letter);
                }
            }
        }
        Ok(())
    }

    /// Returns the letter known to be at the given location, if any.
    pub fn known_letter(&self, index: usize) -> Option<char> {
        self.known_letters.get(index).copied().flatten()
    }

    /// Returns the locations where the given letter was marked as present but not here. The set
    /// is empty if the letter was never marked this way.
    pub fn present_not_here(&self, letter: char) -> impl Iterator<Item = usize> + '_ {
        self.present_not_here
            .get(&letter)
            .into_iter()
            .flat_map(|locations| locations.iter().copied())
    }

    /// Returns `true` iff the given letter was marked as not present in any result.
    pub fn is_excluded(&self, letter: char) -> bool {
        self.not_present_letters.contains(&letter)
    }

    /// Returns `true` iff the word is known to contain the letter, either because it is known to
    /// be at some location, or because it was marked as present elsewhere.
    pub fn has_confirmed_occurrence(&self, letter: char) -> bool {
        self.known_letters.contains(&Some(letter))
            || self
                .present_not_here
                .get(&letter)
                .map_or(false, |locations| !locations.is_empty())
    }

    /// Returns `true` iff the letter at every location is known.
    pub fn is_solved(&self) -> bool {
        self.known_letters.iter().all(Option::is_some)
    }

    /// Returns the objective word if every location is known.
    pub fn solution(&self) -> Option<String> {
        self.known_letters.iter().copied().collect()
    }

    /// Returns `true` iff the given word satisfies these restrictions.
    pub fn is_satisfied_by(&self, word: &str) -> bool {
        self.matches_known_letters(word)
            && self.matches_present_letters(word)
            && self.matches_not_present_letters(word)
    }

    /// Checks that the word has each known letter at its location.
    pub(crate) fn matches_known_letters(&self, word: &str) -> bool {
        let mut letters = word.chars();
        self.known_letters.iter().all(|known| {
            let letter = letters.next();
            known.map_or(true, |known| letter == Some(known))
        })
    }

    /// Checks that the word contains each present letter, and never at a location where that
    /// letter was marked as present but not here.
    pub(crate) fn matches_present_letters(&self, word: &str) -> bool {
        self.present_not_here.iter().all(|(letter, locations)| {
            word.contains(*letter)
                && word
                    .chars()
                    .enumerate()
                    .all(|(index, other)| other != *letter || !locations.contains(&index))
        })
    }

    /// Checks the letters that were marked as not present.
    ///
    /// If the letter is also known to be in the word, then a not present result means that it was
    /// guessed more times than it occurs, so the word must contain it exactly once. Otherwise the
    /// word must not contain it at all.
    pub(crate) fn matches_not_present_letters(&self, word: &str) -> bool {
        self.not_present_letters.iter().all(|letter| {
            let count = word.chars().filter(|other| other == letter).count();
            if self.has_confirmed_occurrence(*letter) {
                count == 1
            } else {
                count == 0
            }
        })
    }
}
