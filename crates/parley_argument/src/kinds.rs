//! Built-in argument kinds.

use parley_foundation::{Error, ErrorContext, Result, Type, Value};

use crate::kind::{ArgumentKind, ParseContext};
use crate::suggestions::{SuggestionInfo, Suggestion, Suggestions};

fn syntax_at(message: String, ctx: &ParseContext<'_>) -> Error {
    Error::syntax(message).with_context(
        ErrorContext::new()
            .with_input(ctx.input)
            .with_cursor(ctx.cursor),
    )
}

/// A fixed word that must appear verbatim.
///
/// Literals shape the command path but are unlisted: executors never
/// receive them as values.
#[derive(Clone, Debug)]
pub struct LiteralKind {
    word: String,
}

impl LiteralKind {
    /// Creates a literal for the given word.
    #[must_use]
    pub fn new(word: impl Into<String>) -> Self {
        Self { word: word.into() }
    }

    /// The word this literal matches.
    #[must_use]
    pub fn word(&self) -> &str {
        &self.word
    }
}

impl ArgumentKind for LiteralKind {
    fn parse(&self, raw: &str, ctx: &ParseContext<'_>) -> Result<Value> {
        if raw == self.word {
            Ok(Value::string(&self.word))
        } else {
            Err(syntax_at(format!("expected literal {:?}", self.word), ctx))
        }
    }

    fn primitive_type(&self) -> Type {
        Type::String
    }

    fn default_suggestions(&self, _info: &SuggestionInfo<'_>) -> Suggestions {
        Suggestions::ready(vec![Suggestion::new(self.word.clone())])
    }

    fn is_literal(&self) -> bool {
        true
    }

    fn is_listed(&self) -> bool {
        false
    }
}

/// A single unquoted token.
#[derive(Clone, Debug, Default)]
pub struct WordKind;

impl WordKind {
    /// Creates a word kind.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl ArgumentKind for WordKind {
    fn parse(&self, raw: &str, ctx: &ParseContext<'_>) -> Result<Value> {
        if raw.is_empty() {
            return Err(syntax_at("expected a word".to_string(), ctx));
        }
        Ok(Value::string(raw))
    }

    fn primitive_type(&self) -> Type {
        Type::String
    }
}

/// A string token that may have been quoted in the input.
///
/// The tokenizer strips the quotes; this kind accepts whatever single token
/// it is handed, including the empty string produced by `""`.
#[derive(Clone, Debug, Default)]
pub struct QuotedStringKind;

impl QuotedStringKind {
    /// Creates a quoted string kind.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl ArgumentKind for QuotedStringKind {
    fn parse(&self, raw: &str, _ctx: &ParseContext<'_>) -> Result<Value> {
        Ok(Value::string(raw))
    }

    fn primitive_type(&self) -> Type {
        Type::String
    }
}

/// Consumes the remainder of the input line as one string.
#[derive(Clone, Debug, Default)]
pub struct GreedyStringKind;

impl GreedyStringKind {
    /// Creates a greedy string kind.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl ArgumentKind for GreedyStringKind {
    fn parse(&self, raw: &str, ctx: &ParseContext<'_>) -> Result<Value> {
        if raw.is_empty() {
            return Err(syntax_at("expected text".to_string(), ctx));
        }
        Ok(Value::string(raw))
    }

    fn primitive_type(&self) -> Type {
        Type::String
    }

    fn is_greedy(&self) -> bool {
        true
    }
}

/// A 64-bit integer with optional inclusive bounds.
#[derive(Clone, Debug, Default)]
pub struct IntegerKind {
    min: Option<i64>,
    max: Option<i64>,
}

impl IntegerKind {
    /// Creates an unbounded integer kind.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            min: None,
            max: None,
        }
    }

    /// Sets the inclusive minimum.
    #[must_use]
    pub const fn min(mut self, min: i64) -> Self {
        self.min = Some(min);
        self
    }

    /// Sets the inclusive maximum.
    #[must_use]
    pub const fn max(mut self, max: i64) -> Self {
        self.max = Some(max);
        self
    }
}

impl ArgumentKind for IntegerKind {
    fn parse(&self, raw: &str, ctx: &ParseContext<'_>) -> Result<Value> {
        let value: i64 = raw
            .parse()
            .map_err(|_| syntax_at(format!("expected integer, got {raw:?}"), ctx))?;
        if let Some(min) = self.min {
            if value < min {
                return Err(syntax_at(format!("integer must not be less than {min}"), ctx));
            }
        }
        if let Some(max) = self.max {
            if value > max {
                return Err(syntax_at(format!("integer must not be more than {max}"), ctx));
            }
        }
        Ok(Value::Int(value))
    }

    fn primitive_type(&self) -> Type {
        Type::Int
    }
}

/// A 64-bit float with optional inclusive bounds.
#[derive(Clone, Debug, Default)]
pub struct FloatKind {
    min: Option<f64>,
    max: Option<f64>,
}

impl FloatKind {
    /// Creates an unbounded float kind.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            min: None,
            max: None,
        }
    }

    /// Sets the inclusive minimum.
    #[must_use]
    pub const fn min(mut self, min: f64) -> Self {
        self.min = Some(min);
        self
    }

    /// Sets the inclusive maximum.
    #[must_use]
    pub const fn max(mut self, max: f64) -> Self {
        self.max = Some(max);
        self
    }
}

impl ArgumentKind for FloatKind {
    fn parse(&self, raw: &str, ctx: &ParseContext<'_>) -> Result<Value> {
        let value: f64 = raw
            .parse()
            .map_err(|_| syntax_at(format!("expected number, got {raw:?}"), ctx))?;
        if let Some(min) = self.min {
            if value < min {
                return Err(syntax_at(format!("number must not be less than {min}"), ctx));
            }
        }
        if let Some(max) = self.max {
            if value > max {
                return Err(syntax_at(format!("number must not be more than {max}"), ctx));
            }
        }
        Ok(Value::Float(value))
    }

    fn primitive_type(&self) -> Type {
        Type::Float
    }
}

/// `true` or `false`.
#[derive(Clone, Debug, Default)]
pub struct BoolKind;

impl BoolKind {
    /// Creates a boolean kind.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl ArgumentKind for BoolKind {
    fn parse(&self, raw: &str, ctx: &ParseContext<'_>) -> Result<Value> {
        match raw {
            "true" => Ok(Value::Bool(true)),
            "false" => Ok(Value::Bool(false)),
            _ => Err(syntax_at(format!("expected true or false, got {raw:?}"), ctx)),
        }
    }

    fn primitive_type(&self) -> Type {
        Type::Bool
    }

    fn default_suggestions(&self, _info: &SuggestionInfo<'_>) -> Suggestions {
        Suggestions::ready(vec![Suggestion::new("true"), Suggestion::new("false")])
    }
}
