#[macro_use]
extern crate assert_matches;

use rs_wordle_autosolver::*;

#[test]
fn get_result_for_guess_correct() {
    let result = get_result_for_guess("abcbd", "abcbd");

    assert_matches!(
        result,
        Ok(GuessResult {
            guess: "abcbd",
            results: _,
        })
    );
    assert_eq!(result.unwrap().results, vec![LetterResult::Correct; 5]);
}

#[test]
fn get_result_for_guess_partial() {
    let result = get_result_for_guess("mesas", "sassy");
    assert_matches!(
        result,
        Ok(GuessResult {
            guess: "sassy",
            results: _
        })
    );
    assert_eq!(
        result.unwrap().results,
        vec![
            LetterResult::PresentNotHere,
            LetterResult::PresentNotHere,
            LetterResult::Correct,
            LetterResult::NotPresent,
            LetterResult::NotPresent
        ]
    );

    let result = get_result_for_guess("abbey", "babes");
    assert_eq!(
        result.unwrap().results,
        vec![
            LetterResult::PresentNotHere,
            LetterResult::PresentNotHere,
            LetterResult::Correct,
            LetterResult::Correct,
            LetterResult::NotPresent
        ]
    );

    let result = get_result_for_guess("sweet", "eerie");
    assert_eq!(
        result.unwrap().results,
        vec![
            LetterResult::PresentNotHere,
            LetterResult::PresentNotHere,
            LetterResult::NotPresent,
            LetterResult::NotPresent,
            LetterResult::NotPresent
        ]
    );
}

#[test]
fn get_result_for_guess_none_match() {
    let result = get_result_for_guess("abcbd", "zywxv");
    assert_matches!(
        result,
        Ok(GuessResult {
            guess: "zywxv",
            results: _,
        })
    );
    assert_eq!(result.unwrap().results, vec![LetterResult::NotPresent; 5]);
}

#[test]
fn get_result_for_guess_invalid_guess() {
    assert_matches!(
        get_result_for_guess("goals", "guesses"),
        Err(WordleError::WordLength(7))
    );
    assert_matches!(
        get_result_for_guess("goal", "guess"),
        Err(WordleError::WordLength(4))
    );
}
