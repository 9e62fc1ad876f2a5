//! Tests for the hangman game state machine.

use strictly_hangman::{Game, WordError};

/// Asserts mistake count and mask together.
fn expect_game(game: &Game, mistakes: u32, mask: &str) {
    assert_eq!(game.mistake_count(), mistakes, "mistake count");
    assert_eq!(game.masked_word(), mask, "mask");
}

#[test]
fn test_without_guesses() {
    let game = Game::new("HeLlO").expect("Valid word");
    expect_game(&game, 0, "_ _ _ _ _");
    assert!(!game.is_solved());
}

#[test]
fn test_initial_mask_matches_length() {
    for word in ["a", "ab", "Rust", "Galgenmaennchen"] {
        let game = Game::new(word).expect("Valid word");
        let expected = vec!["_"; word.len()].join(" ");
        assert_eq!(game.masked_word(), expected);
    }
}

#[test]
fn test_with_one_guess() {
    let mut game = Game::new("HeLlO").expect("Valid word");
    assert!(game.guess('e'));
    expect_game(&game, 0, "_ E _ _ _");
}

#[test]
fn test_with_one_multi_guess() {
    let mut game = Game::new("HeLlO").expect("Valid word");
    assert!(game.guess('l'));
    expect_game(&game, 0, "_ _ L L _");
}

#[test]
fn test_with_multiple_guesses() {
    let mut game = Game::new("HeLlO").expect("Valid word");
    assert!(game.guess('H'));
    assert!(game.guess('l'));
    expect_game(&game, 0, "H _ L L _");
}

#[test]
fn test_with_one_wrong_guess() {
    let mut game = Game::new("HeLlO").expect("Valid word");
    assert!(!game.guess('a'));
    expect_game(&game, 1, "_ _ _ _ _");
}

#[test]
fn test_with_mixed_wrong_and_correct_guesses() {
    let mut game = Game::new("HeLlO").expect("Valid word");
    assert!(game.guess('e'));
    assert!(game.guess('l'));
    assert!(!game.guess('a'));
    assert!(!game.guess('i'));
    expect_game(&game, 2, "_ E L L _");
}

#[test]
fn test_repeated_hit_changes_nothing() {
    let mut game = Game::new("HeLlO").expect("Valid word");
    assert!(game.guess('e'));
    let before = game.clone();
    assert!(game.guess('E'));
    assert!(game.guess('e'));
    assert_eq!(game, before);
    expect_game(&game, 0, "_ E _ _ _");
}

#[test]
fn test_repeated_miss_counts_every_time() {
    let mut game = Game::new("HeLlO").expect("Valid word");
    assert!(!game.guess('a'));
    assert!(!game.guess('a'));
    assert!(!game.guess('A'));
    expect_game(&game, 3, "_ _ _ _ _");
}

#[test]
fn test_non_letter_guess_is_a_miss() {
    let mut game = Game::new("HeLlO").expect("Valid word");
    assert!(!game.guess('1'));
    assert!(!game.guess('ä'));
    expect_game(&game, 2, "_ _ _ _ _");
}

#[test]
fn test_hello_scenario_until_solved() {
    let mut game = Game::new("HELLO").expect("Valid word");
    expect_game(&game, 0, "_ _ _ _ _");

    assert!(game.guess('e'));
    expect_game(&game, 0, "_ E _ _ _");

    assert!(game.guess('l'));
    expect_game(&game, 0, "_ E L L _");

    assert!(!game.guess('a'));
    assert_eq!(game.mistake_count(), 1);
    assert!(!game.guess('a'));
    assert_eq!(game.mistake_count(), 2);

    assert!(game.guess('h'));
    assert!(!game.is_solved());
    assert!(game.guess('o'));
    expect_game(&game, 2, "H E L L O");
    assert!(game.is_solved());
    assert_eq!(game.guessed_letters(), ['E', 'L', 'H', 'O']);
}

#[test]
fn test_solved_never_reverts() {
    let mut game = Game::new("ab").expect("Valid word");
    game.guess('a');
    game.guess('b');
    assert!(game.is_solved());

    assert!(!game.guess('z'));
    assert!(game.guess('a'));
    assert!(game.is_solved());
    assert_eq!(game.mistake_count(), 1);
}

#[test]
fn test_word_with_digit_rejected() {
    let result = Game::new("hello2");
    assert_eq!(result, Err(WordError::NonAlphabetic { character: '2' }));
}

#[test]
fn test_empty_word_rejected() {
    assert_eq!(Game::new(""), Err(WordError::Empty));
}

#[test]
fn test_non_ascii_and_whitespace_rejected() {
    assert!(Game::new("Mädchen").is_err());
    assert!(Game::new("two words").is_err());
    assert!(Game::new("word\n").is_err());
}

#[test]
fn test_each_game_gets_distinct_id() {
    let a = Game::new("same").expect("Valid word");
    let b = Game::new("same").expect("Valid word");
    assert_ne!(a.id(), b.id());
}
