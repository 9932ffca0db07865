//! Offset-preserving input tokenization.
//!
//! Splits a command line into whitespace-separated tokens, keeping the
//! byte offset of each so parse errors and completions can point back into
//! the raw input. Double-quoted spans form a single token with the quotes
//! stripped.

/// One input token and where it starts.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Token {
    /// The token text, with any surrounding quotes stripped.
    pub text: String,
    /// Byte offset of the token's first character in the raw input.
    pub start: usize,
}

impl Token {
    /// Creates a token.
    #[must_use]
    pub fn new(text: impl Into<String>, start: usize) -> Self {
        Self {
            text: text.into(),
            start,
        }
    }
}

/// Tokenizes raw command input.
pub struct Tokenizer;

impl Tokenizer {
    /// Tokenizes a raw input line.
    ///
    /// - Tokens are separated by runs of whitespace
    /// - A double-quoted span is one token; the quotes are stripped and an
    ///   unterminated quote runs to the end of input
    /// - Case is preserved
    #[must_use]
    pub fn tokenize(input: &str) -> Vec<Token> {
        let mut tokens = Vec::new();
        let mut chars = input.char_indices().peekable();

        while let Some(&(start, ch)) = chars.peek() {
            if ch.is_whitespace() {
                chars.next();
            } else if ch == '"' {
                chars.next();
                let mut text = String::new();
                for (_, c) in chars.by_ref() {
                    if c == '"' {
                        break;
                    }
                    text.push(c);
                }
                tokens.push(Token { text, start });
            } else {
                let mut text = String::new();
                while let Some(&(_, c)) = chars.peek() {
                    if c.is_whitespace() {
                        break;
                    }
                    text.push(c);
                    chars.next();
                }
                tokens.push(Token { text, start });
            }
        }

        tokens
    }

    /// Splits input for a completion request: the tokens already complete,
    /// plus the partial token being typed.
    ///
    /// Input ending in whitespace (or empty input) is completing a fresh
    /// token at the end of the line.
    #[must_use]
    pub fn split_for_completion(input: &str) -> (Vec<Token>, Token) {
        let mut tokens = Self::tokenize(input);
        if input.is_empty() || input.ends_with(char::is_whitespace) {
            (tokens, Token::new("", input.len()))
        } else {
            let partial = tokens.pop().unwrap_or_else(|| Token::new("", 0));
            (tokens, partial)
        }
    }
}
