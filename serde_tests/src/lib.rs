#[cfg(test)]
mod tests {

    use std::error::Error;

    use ron;
    use rs_wordle_autosolver::*;

    #[test]
    fn word_restrictions_serde() -> Result<(), Box<dyn Error>> {
        let mut restrictions = WordRestrictions::new();
        restrictions.update(&get_result_for_guess("candy", "arise")?)?;
        restrictions.update(&get_result_for_guess("candy", "canal")?)?;

        let ser = ron::to_string(&restrictions)?;
        let deser = ron::from_str::<WordRestrictions>(&ser)?;

        assert_eq!(deser, restrictions);
        assert_eq!(deser.known_letter(0), Some('c'));
        assert!(deser.is_satisfied_by("candy"));
        Ok(())
    }

    #[test]
    fn game_result_serde() -> Result<(), Box<dyn Error>> {
        let bank = WordBank::from_iterator(vec!["crane", "candy", "slate"])?;
        let result = play_game("candy", &bank)?;

        let ser = ron::to_string(&result)?;
        let deser = ron::from_str::<GameResult>(&ser)?;

        assert_eq!(deser, result);
        Ok(())
    }

    #[test]
    fn answer_json_success() -> Result<(), Box<dyn Error>> {
        let bank = WordBank::from_iterator(vec!["crane", "candy", "slate"])?;
        let result = play_game("candy", &bank)?;

        let json = serde_json::to_string(&Answer::from(&result))?;

        assert_eq!(json, r#"{"answer":"candy"}"#);
        Ok(())
    }

    #[test]
    fn answer_json_not_found() -> Result<(), Box<dyn Error>> {
        let bank = WordBank::from_iterator(vec!["bbbbb", "ccccc", "ddddd", "fffff", "ggggg"])?;
        let result = play_game("zzzzz", &bank)?;

        let json = serde_json::to_string(&Answer::from(&result))?;

        assert_eq!(json, r#"{"answer":"sorry, not found."}"#);
        Ok(())
    }
}
