use clap::{ArgEnum, Parser, Subcommand};
use log::{info, warn};
use rand::seq::SliceRandom;
use rs_wordle_autosolver::*;
use std::collections::BTreeMap;
use std::error::Error;
use std::fs::File;
use std::io;
use std::io::BufRead;
use std::io::Write;
use std::time::Instant;

/// Simple program to run a Wordle game in reverse, where the computer guesses the word.
#[derive(Parser, Debug)]
#[clap(author, version, about)]
struct Args {
    /// Path to a file that contains a list of possible words, with one word on each line.
    #[clap(short = 'f', long)]
    words_file: String,

    /// The first word to guess in every game.
    #[clap(long, default_value_t = DEFAULT_OPENING_WORD.to_string())]
    opening_word: String,

    /// Print each answer as a JSON object, e.g. {"answer":"candy"}, instead of a summary.
    #[clap(long)]
    json: bool,

    #[clap(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Benchmark the solver against every word in the given words file.
    Benchmark,
    /// Run a single game with the given word.
    Single { word: String },
    /// Run a single game with a word chosen at random from the words file.
    Random,
    /// Run an interactive game against the solver.
    Interactive {
        /// How you will describe the result of each guess.
        #[clap(long, arg_enum, default_value = "letters")]
        encoding: Encoding,
    },
}

#[derive(ArgEnum, Clone, Copy, Debug)]
enum Encoding {
    /// One character per letter: 'g', 'y' or '.'.
    Letters,
    /// One word per letter: "correct", "present" or "absent".
    States,
    /// One square per letter: 🟩, 🟨 or ⬛.
    Emoji,
}

impl Encoding {
    fn decoder(self) -> Box<dyn FeedbackDecoder> {
        match self {
            Encoding::Letters => Box::new(LetterCodes),
            Encoding::States => Box::new(TileStates),
            Encoding::Emoji => Box::new(EmojiSquares),
        }
    }

    fn instructions(self) -> &'static str {
        match self {
            Encoding::Letters => {
                "For each guess, enter the correctness of each letter as:\n\n\
                   * '.' = this letter is not in the word\n\
                   * 'y' = this letter is in the word, but not in this location\n\
                   * 'g' = this letter is in the word and in the right location.\n\n\
                 For example, if your word was \"spade\" and the guess was \"soapy\", you would enter \"g.gy.\""
            }
            Encoding::States => {
                "For each guess, enter 'correct', 'present' or 'absent' for each letter, separated \
                 by spaces.\n\n\
                 For example, if your word was \"spade\" and the guess was \"soapy\", you would enter \
                 \"correct absent correct present absent\""
            }
            Encoding::Emoji => {
                "For each guess, paste the row of squares: 🟩 for the right location, 🟨 for the \
                 wrong location, and ⬛ for not in the word.\n\n\
                 For example, if your word was \"spade\" and the guess was \"soapy\", you would enter \
                 \"🟩⬛🟩🟨⬛\""
            }
        }
    }
}

fn main() -> Result<(), Box<dyn Error>> {
    env_logger::init();
    let start_time = Instant::now();
    let args = Args::parse();
    info!("File: {}", args.words_file);

    let words_reader = io::BufReader::new(File::open(&args.words_file)?);
    let word_bank = WordBank::from_reader(words_reader)?;
    info!("There are {} possible words.", word_bank.len());
    // Check the opening word before playing anything.
    FirstCandidateGuesser::with_opening_word(&word_bank, &args.opening_word)?;

    match args.command {
        Command::Benchmark => run_benchmark(&word_bank, &args)?,
        Command::Single { ref word } => play_single_game(word, &word_bank, &args)?,
        Command::Random => {
            let word = word_bank
                .choose(&mut rand::thread_rng())
                .ok_or(WordleError::NoCandidates)?;
            info!("Chose the word: {}", word);
            play_single_game(word, &word_bank, &args)?
        }
        Command::Interactive { encoding } => play_interactive_game(&word_bank, &args, encoding)?,
    }

    info!(
        "Command executed in {:.3}s.",
        start_time.elapsed().as_secs_f64()
    );

    Ok(())
}

fn run_benchmark(word_bank: &WordBank, args: &Args) -> Result<(), Box<dyn Error>> {
    let results = play_all_games(word_bank, &args.opening_word)?;

    if args.json {
        let answers = results
            .iter()
            .map(|result| match result {
                Ok(result) => Answer::from(result),
                Err(_) => Answer {
                    answer: NOT_FOUND_ANSWER.to_string(),
                },
            })
            .collect::<Vec<Answer>>();
        println!("{}", serde_json::to_string(&answers)?);
        return Ok(());
    }

    let mut num_guesses_per_game: Vec<usize> = Vec::new();
    let mut num_failures = 0;
    let mut num_errors = 0;
    for (word, result) in word_bank.iter().zip(results.iter()) {
        match result {
            Ok(GameResult::Success { guesses, .. }) => num_guesses_per_game.push(guesses.len()),
            Ok(GameResult::Failure { .. }) => num_failures += 1,
            Err(error) => {
                warn!("Could not solve {}: {}", word, error);
                num_errors += 1;
            }
        }
    }
    println!(
        "Solved {} of {} words. Results:",
        num_guesses_per_game.len(),
        word_bank.len()
    );

    let mut num_games_per_round: BTreeMap<usize, u32> = BTreeMap::new();
    for num_guesses in num_guesses_per_game.iter() {
        *(num_games_per_round.entry(*num_guesses).or_insert(0)) += 1;
    }

    println!("|Num guesses|Num games|");
    println!("|-----------|---------|");
    for (num_round, num_games) in num_games_per_round.iter() {
        println!("|{}|{}|", num_round, num_games);
    }
    println!("|not found|{}|", num_failures);
    println!("|no candidates|{}|", num_errors);

    if num_guesses_per_game.is_empty() {
        return Ok(());
    }
    let average: f64 =
        num_guesses_per_game.iter().sum::<usize>() as f64 / num_guesses_per_game.len() as f64;
    let std_dev: f64 = (num_guesses_per_game
        .iter()
        .map(|num_guesses| (*num_guesses as f64 - average).powi(2))
        .sum::<f64>()
        / num_guesses_per_game.len() as f64)
        .sqrt();

    println!(
        "\n**Average number of guesses:** {:.2} +/- {:.2}",
        average, std_dev
    );
    Ok(())
}

fn play_single_game(word: &str, word_bank: &WordBank, args: &Args) -> Result<(), Box<dyn Error>> {
    if !word_bank.iter().any(|other| other.as_ref() == word) {
        eprintln!("Error: given word not in the word list.");
        std::process::exit(1);
    }
    let guesser = FirstCandidateGuesser::with_opening_word(word_bank, &args.opening_word)?;
    let result = play_game_with_guesser(&mut SimulatedPuzzle::new(word), guesser)?;
    print_game_result(&result, args.json)
}

fn print_game_result(result: &GameResult, json: bool) -> Result<(), Box<dyn Error>> {
    if json {
        println!("{}", serde_json::to_string(&Answer::from(result))?);
        return Ok(());
    }
    match result {
        GameResult::Success { answer, guesses } => {
            println!(
                "Solved it! The word is {}. It took me {} guesses.",
                answer,
                guesses.len()
            );
        }
        GameResult::Failure { guesses } => {
            println!(
                "I still couldn't solve it after {} guesses :(",
                guesses.len()
            );
        }
    }
    for guess in result.guesses().iter() {
        println!("\t{}", guess);
    }
    Ok(())
}

/// Asks the person at the terminal to type in the result of each guess.
struct InteractivePuzzle {
    decoder: Box<dyn FeedbackDecoder>,
}

impl PuzzleDriver for InteractivePuzzle {
    fn submit_guess(&mut self, guess: &str) -> Result<(), WordleError> {
        println!("I'm guessing: {}. How did I do?", guess);
        io::stdout().flush()?;
        Ok(())
    }

    fn read_feedback(&mut self, _guess: &str) -> Result<Vec<LetterResult>, WordleError> {
        loop {
            let mut buffer = String::new();
            if io::stdin().lock().read_line(&mut buffer)? == 0 {
                return Err(io::Error::from(io::ErrorKind::UnexpectedEof).into());
            }
            match self.decoder.decode(&buffer) {
                Ok(results) => return Ok(results),
                Err(error) => println!("{}. Try again.", error),
            }
        }
    }
}

fn play_interactive_game(
    word_bank: &WordBank,
    args: &Args,
    encoding: Encoding,
) -> Result<(), Box<dyn Error>> {
    println!("Choose a word from the word-list. Press enter once you've chosen.");

    {
        let mut buffer = String::new();
        io::stdin().read_line(&mut buffer)?;
    }

    println!(
        "I will now try to guess your word.\n\n{}",
        encoding.instructions()
    );

    let guesser = FirstCandidateGuesser::with_opening_word(word_bank, &args.opening_word)?;
    let mut puzzle = InteractivePuzzle {
        decoder: encoding.decoder(),
    };
    match play_game_with_guesser(&mut puzzle, guesser) {
        Ok(result) => print_game_result(&result, args.json),
        Err(WordleError::NoCandidates) => {
            println!("None of my words match those results. Is your word in the word list?");
            Ok(())
        }
        Err(error) => Err(error.into()),
    }
}
