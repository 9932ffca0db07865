//! Tokenizer tests.

use parley_engine::{Token, Tokenizer};

#[test]
fn offsets_survive_irregular_whitespace() {
    let tokens = Tokenizer::tokenize("  a \t bb   ccc");
    assert_eq!(
        tokens,
        vec![
            Token::new("a", 2),
            Token::new("bb", 6),
            Token::new("ccc", 11),
        ]
    );
}

#[test]
fn quoted_token_starts_at_the_quote() {
    let tokens = Tokenizer::tokenize("say \"two words\"");
    assert_eq!(tokens[1], Token::new("two words", 4));
}

#[test]
fn empty_quotes_form_an_empty_token() {
    let tokens = Tokenizer::tokenize("set \"\"");
    assert_eq!(tokens[1], Token::new("", 4));
}

#[test]
fn completion_split_mid_word_vs_fresh() {
    let (complete, partial) = Tokenizer::split_for_completion("give al");
    assert_eq!(complete.len(), 1);
    assert_eq!(partial, Token::new("al", 5));

    let (complete, partial) = Tokenizer::split_for_completion("give al ");
    assert_eq!(complete.len(), 2);
    assert_eq!(partial, Token::new("", 8));
}
