use crate::data::*;
use crate::restrictions::WordRestrictions;
use crate::results::*;
use log::{debug, info, warn};
use rayon::prelude::*;
use std::result::Result;
use std::sync::Arc;

/// The first guess made in every game. It covers several of the most common letters.
pub const DEFAULT_OPENING_WORD: &str = "arise";

/// Guesses words in order to solve a single Wordle.
pub trait Guesser {
    /// Updates this guesser with information about a word.
    fn update(&mut self, result: &GuessResult) -> Result<(), WordleError>;

    /// Selects a new guess for the Wordle.
    ///
    /// Returns [`WordleError::NoCandidates`] if no known words are possible given the known
    /// restrictions imposed by previous calls to [`Self::update()`].
    fn select_next_guess(&self) -> Result<Arc<str>, WordleError>;

    /// The restrictions accumulated from every result given to [`Self::update()`].
    fn restrictions(&self) -> &WordRestrictions;
}

/// Opens with a fixed word, then always guesses the first possible word in word bank order.
///
/// This never guesses randomly, so the same objective word and word bank always lead to the same
/// sequence of guesses.
///
/// ```
/// use rs_wordle_autosolver::FirstCandidateGuesser;
/// use rs_wordle_autosolver::Guesser;
/// use rs_wordle_autosolver::WordBank;
///
/// let bank = WordBank::from_iterator(vec!["crane", "candy"]).unwrap();
/// let guesser = FirstCandidateGuesser::new(&bank);
///
/// assert_eq!(guesser.select_next_guess().unwrap().as_ref(), "arise");
/// ```
#[derive(Debug, Clone)]
pub struct FirstCandidateGuesser<'a> {
    bank: &'a WordBank,
    opening_word: Arc<str>,
    restrictions: WordRestrictions,
    possible_words: Vec<Arc<str>>,
    num_rounds: usize,
}

impl<'a> FirstCandidateGuesser<'a> {
    /// Constructs a guesser that opens with [`DEFAULT_OPENING_WORD`].
    pub fn new(bank: &'a WordBank) -> FirstCandidateGuesser<'a> {
        FirstCandidateGuesser {
            bank,
            opening_word: Arc::from(DEFAULT_OPENING_WORD),
            restrictions: WordRestrictions::new(),
            possible_words: bank.to_vec(),
            num_rounds: 0,
        }
    }

    /// Constructs a guesser that opens with the given word. The word doesn't need to be in the
    /// word bank, but must be made of [`WORD_LENGTH`] lowercase letters.
    pub fn with_opening_word(
        bank: &'a WordBank,
        opening_word: &str,
    ) -> Result<FirstCandidateGuesser<'a>, WordleError> {
        let length = opening_word.chars().count();
        if length != WORD_LENGTH {
            return Err(WordleError::WordLength(length));
        }
        if !opening_word
            .chars()
            .all(|letter| letter.is_ascii_lowercase())
        {
            return Err(WordleError::InvalidWord(opening_word.to_string()));
        }
        let mut guesser = FirstCandidateGuesser::new(bank);
        guesser.opening_word = Arc::from(opening_word);
        Ok(guesser)
    }

    /// The words that are still possible, in word bank order.
    pub fn possible_words(&self) -> &[Arc<str>] {
        &self.possible_words
    }
}

impl<'a> Guesser for FirstCandidateGuesser<'a> {
    fn update(&mut self, result: &GuessResult) -> Result<(), WordleError> {
        self.restrictions.update(result)?;
        self.num_rounds += 1;
        self.possible_words = get_possible_words(&self.restrictions, self.bank);
        Ok(())
    }

    fn select_next_guess(&self) -> Result<Arc<str>, WordleError> {
        if self.num_rounds == 0 {
            return Ok(Arc::clone(&self.opening_word));
        }
        self.possible_words
            .first()
            .map(Arc::clone)
            .ok_or(WordleError::NoCandidates)
    }

    fn restrictions(&self) -> &WordRestrictions {
        &self.restrictions
    }
}

/// Connects a game to the puzzle being solved: submits guesses to it, and reads back results.
///
/// Any waiting for the puzzle to show its results belongs in the implementation, so that the
/// solver itself never blocks.
pub trait PuzzleDriver {
    /// Enters the given guess into the puzzle.
    fn submit_guess(&mut self, guess: &str) -> Result<(), WordleError>;

    /// Reads the result of the most recently submitted guess, one entry per letter.
    fn read_feedback(&mut self, guess: &str) -> Result<Vec<LetterResult>, WordleError>;
}

/// A puzzle with a known objective word, that computes results with [`get_result_for_guess`].
#[derive(Debug, Clone)]
pub struct SimulatedPuzzle {
    objective: Arc<str>,
}

impl SimulatedPuzzle {
    pub fn new(objective: &str) -> SimulatedPuzzle {
        SimulatedPuzzle {
            objective: Arc::from(objective),
        }
    }
}

impl PuzzleDriver for SimulatedPuzzle {
    fn submit_guess(&mut self, _guess: &str) -> Result<(), WordleError> {
        Ok(())
    }

    fn read_feedback(&mut self, guess: &str) -> Result<Vec<LetterResult>, WordleError> {
        Ok(get_result_for_guess(&self.objective, guess)?.results)
    }
}

/// Where a game is up to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionState {
    /// Still guessing. `attempt` is the zero-based index of the next guess.
    Guessing { attempt: usize },
    /// Every location is known.
    Solved(Arc<str>),
    /// All [`MAX_ATTEMPTS`] guesses were used without solving the puzzle.
    Exhausted,
}

/// A single game: one [`Guesser`] working through up to [`MAX_ATTEMPTS`] guesses.
pub struct Session<G: Guesser> {
    guesser: G,
    state: SessionState,
    guesses: Vec<Arc<str>>,
}

impl<G: Guesser> Session<G> {
    pub fn new(guesser: G) -> Session<G> {
        Session {
            guesser,
            state: SessionState::Guessing { attempt: 0 },
            guesses: Vec::new(),
        }
    }

    pub fn state(&self) -> &SessionState {
        &self.state
    }

    /// The guesses submitted so far.
    pub fn guesses(&self) -> &[Arc<str>] {
        &self.guesses
    }

    pub fn guesser(&self) -> &G {
        &self.guesser
    }

    pub fn is_finished(&self) -> bool {
        !matches!(self.state, SessionState::Guessing { .. })
    }

    /// Plays one round: selects a guess, submits it, and learns from its result.
    ///
    /// Does nothing if the session is already finished.
    pub fn play_round<D>(&mut self, driver: &mut D) -> Result<&SessionState, WordleError>
    where
        D: PuzzleDriver + ?Sized,
    {
        let attempt = match self.state {
            SessionState::Guessing { attempt } => attempt,
            _ => return Ok(&self.state),
        };

        let guess = match self.guesser.select_next_guess() {
            Ok(guess) => guess,
            Err(error) => {
                warn!("no possible words left after {} guesses", attempt);
                return Err(error);
            }
        };
        driver.submit_guess(&guess)?;
        let results = driver.read_feedback(&guess)?;
        let result = GuessResult {
            guess: &guess,
            results,
        };
        self.guesser.update(&result)?;
        debug!("guess {}: {} -> {:?}", attempt + 1, guess, result.results);
        self.guesses.push(Arc::clone(&guess));

        self.state = match self.guesser.restrictions().solution() {
            Some(answer) => SessionState::Solved(Arc::from(answer)),
            None if attempt + 1 >= MAX_ATTEMPTS => SessionState::Exhausted,
            None => SessionState::Guessing {
                attempt: attempt + 1,
            },
        };
        Ok(&self.state)
    }

    /// Returns the result of the game. A game that was abandoned before it finished counts as a
    /// failure.
    pub fn into_game_result(self) -> GameResult {
        match self.state {
            SessionState::Solved(answer) => GameResult::Success {
                answer,
                guesses: self.guesses,
            },
            SessionState::Guessing { .. } | SessionState::Exhausted => GameResult::Failure {
                guesses: self.guesses,
            },
        }
    }
}

/// Plays a full game against the given puzzle, using the given guesser.
///
/// Running out of guesses is a [`GameResult::Failure`], not an error. Errors are reserved for
/// problems with the puzzle driver or the feedback, and for running out of possible words.
pub fn play_game_with_guesser<G, D>(driver: &mut D, guesser: G) -> Result<GameResult, WordleError>
where
    G: Guesser,
    D: PuzzleDriver + ?Sized,
{
    let mut session = Session::new(guesser);
    while !session.is_finished() {
        session.play_round(driver)?;
    }
    let game_result = session.into_game_result();
    info!(
        "game finished after {} guesses: {}",
        game_result.guesses().len(),
        game_result.answer()
    );
    Ok(game_result)
}

/// Attempts to guess the given word within [`MAX_ATTEMPTS`] guesses, using words from the word
/// bank and opening with [`DEFAULT_OPENING_WORD`].
///
/// ```
/// use rs_wordle_autosolver::play_game;
/// use rs_wordle_autosolver::WordBank;
///
/// let bank = WordBank::from_iterator(vec!["crane", "candy", "slate"]).unwrap();
///
/// let result = play_game("candy", &bank).unwrap();
/// assert_eq!(result.answer(), "candy");
/// ```
pub fn play_game(objective: &str, bank: &WordBank) -> Result<GameResult, WordleError> {
    play_game_with_guesser(
        &mut SimulatedPuzzle::new(objective),
        FirstCandidateGuesser::new(bank),
    )
}

/// Plays one independent game for every word in the bank, in parallel.
///
/// The results are returned in word bank order. Each game has its own restrictions; only the word
/// bank is shared.
pub fn play_all_games(
    bank: &WordBank,
    opening_word: &str,
) -> Result<Vec<Result<GameResult, WordleError>>, WordleError> {
    // A bad opening word fails the whole run, not each game.
    FirstCandidateGuesser::with_opening_word(bank, opening_word)?;
    Ok(bank
        .par_iter()
        .map(|objective| {
            let guesser = FirstCandidateGuesser::with_opening_word(bank, opening_word)?;
            play_game_with_guesser(&mut SimulatedPuzzle::new(objective), guesser)
        })
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn create_word_bank(words: Vec<&str>) -> WordBank {
        WordBank::from_iterator(words).unwrap()
    }

    #[test]
    fn first_candidate_guesser_opens_with_default_word() {
        let bank = create_word_bank(vec!["crane", "candy"]);
        let guesser = FirstCandidateGuesser::new(&bank);

        assert_eq!(guesser.select_next_guess().unwrap().as_ref(), "arise");
    }

    #[test]
    fn first_candidate_guesser_opening_word_is_constant() -> Result<(), WordleError> {
        let bank = create_word_bank(vec!["crane", "candy"]);
        let first = FirstCandidateGuesser::with_opening_word(&bank, "slate")?;
        let second = FirstCandidateGuesser::with_opening_word(&bank, "slate")?;

        assert_eq!(first.select_next_guess()?, second.select_next_guess()?);
        assert_eq!(first.select_next_guess()?.as_ref(), "slate");
        Ok(())
    }

    #[test]
    fn first_candidate_guesser_rejects_bad_opening_word() {
        let bank = create_word_bank(vec!["crane"]);

        assert!(matches!(
            FirstCandidateGuesser::with_opening_word(&bank, "cranes"),
            Err(WordleError::WordLength(6))
        ));
        assert!(matches!(
            FirstCandidateGuesser::with_opening_word(&bank, "CRANE"),
            Err(WordleError::InvalidWord(_))
        ));
    }

    #[test]
    fn first_candidate_guesser_guesses_first_possible_word() -> Result<(), WordleError> {
        let bank = create_word_bank(vec!["crane", "slate", "aloft", "abbot"]);
        let mut guesser = FirstCandidateGuesser::new(&bank);

        guesser.update(&GuessResult {
            guess: "arise",
            results: vec![
                LetterResult::Correct,
                LetterResult::NotPresent,
                LetterResult::NotPresent,
                LetterResult::NotPresent,
                LetterResult::NotPresent,
            ],
        })?;

        assert_eq!(guesser.possible_words().len(), 2);
        assert_eq!(guesser.select_next_guess()?.as_ref(), "aloft");
        Ok(())
    }

    #[test]
    fn first_candidate_guesser_no_candidates() -> Result<(), WordleError> {
        let bank = create_word_bank(vec!["crane", "slate"]);
        let mut guesser = FirstCandidateGuesser::new(&bank);

        guesser.update(&GuessResult {
            guess: "arise",
            results: vec![LetterResult::NotPresent; WORD_LENGTH],
        })?;

        assert!(matches!(
            guesser.select_next_guess(),
            Err(WordleError::NoCandidates)
        ));
        Ok(())
    }

    #[test]
    fn session_moves_through_states() -> Result<(), WordleError> {
        let bank = create_word_bank(vec!["crane", "candy", "slate"]);
        let mut session = Session::new(FirstCandidateGuesser::new(&bank));
        let mut puzzle = SimulatedPuzzle::new("candy");

        assert_eq!(session.state(), &SessionState::Guessing { attempt: 0 });
        // "arise" only tells us about the 'a'.
        assert_eq!(
            session.play_round(&mut puzzle)?,
            &SessionState::Guessing { attempt: 1 }
        );
        assert_eq!(
            session.play_round(&mut puzzle)?,
            &SessionState::Solved(Arc::from("candy"))
        );
        assert!(session.is_finished());
        // Finished sessions don't guess again.
        session.play_round(&mut puzzle)?;
        assert_eq!(session.guesses().len(), 2);
        Ok(())
    }

    #[test]
    fn session_abandoned_counts_as_failure() {
        let bank = create_word_bank(vec!["crane"]);
        let session = Session::new(FirstCandidateGuesser::new(&bank));

        assert_eq!(
            session.into_game_result(),
            GameResult::Failure { guesses: vec![] }
        );
    }
}
