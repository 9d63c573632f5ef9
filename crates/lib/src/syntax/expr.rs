//! Raw expressions and the expression sub-parser.
//!
//! Values the document model cannot decompose (function calls, constants,
//! interpolated strings) are carried as [`RawExpr`]:
//! verbatim source text validated to be exactly one well-formed expression.
//! Validation is structural, not grammatical: it guarantees the text can be
//! embedded in a rendered document and survive a reload unchanged, not that
//! the expression would evaluate.

use std::fmt;
use std::str::FromStr;

use super::errors::SyntaxError;
use super::parse;
use crate::doc::Value;

/// A verbatim source expression.
///
/// Construction validates the text: it must be non-empty, with balanced and
/// matching `[ ( {` delimiters, terminated strings and comments, and no
/// top-level `,`, `;`, or `=>` (any of those would change the document's
/// structure when the rendered text is parsed again).
///
/// # Examples
///
/// ```
/// use retcon::syntax::RawExpr;
///
/// let raw = RawExpr::new("env(\"APP_KEY\")")?;
/// assert_eq!(raw.as_str(), "env(\"APP_KEY\")");
///
/// assert!(RawExpr::new("").is_err());
/// assert!(RawExpr::new("foo(, bar").is_err());
/// assert!(RawExpr::new("1, 2").is_err());
/// # Ok::<(), retcon::syntax::SyntaxError>(())
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct RawExpr {
    source: String,
}

impl RawExpr {
    /// Creates a raw expression from source text, trimming surrounding
    /// whitespace.
    pub fn new(code: impl Into<String>) -> Result<Self, SyntaxError> {
        let code = code.into();
        let trimmed = code.trim();
        validate(trimmed)?;
        Ok(RawExpr {
            source: trimmed.to_string(),
        })
    }

    /// Returns the expression source text.
    pub fn as_str(&self) -> &str {
        &self.source
    }
}

impl fmt::Display for RawExpr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.source)
    }
}

impl FromStr for RawExpr {
    type Err = SyntaxError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        RawExpr::new(s)
    }
}

impl TryFrom<&str> for RawExpr {
    type Error = SyntaxError;

    fn try_from(s: &str) -> Result<Self, Self::Error> {
        RawExpr::new(s)
    }
}

/// Parses source code as exactly one expression.
///
/// Literals parse to their typed values: a raw `"redis"` is
/// indistinguishable from setting the string directly, and a raw `[1, 2]`
/// becomes a real container that merges as one. Anything else wraps as
/// [`Value::Raw`].
///
/// # Examples
///
/// ```
/// use retcon::Value;
/// use retcon::syntax::parse_expression;
///
/// assert_eq!(parse_expression("42")?, Value::Int(42));
/// assert!(matches!(parse_expression("env(\"HOME\")")?, Value::Raw(_)));
/// assert!(parse_expression("1; 2").is_err());
/// # Ok::<(), retcon::syntax::SyntaxError>(())
/// ```
pub fn parse_expression(code: &str) -> Result<Value, SyntaxError> {
    let code = code.trim();
    validate(code)?;
    parse::value_text(code).map_err(as_expression_error)
}

fn validate(code: &str) -> Result<(), SyntaxError> {
    if code.is_empty() {
        return Err(invalid("empty expression"));
    }
    let mut cur = parse::Cursor::new(code);
    let mut depth: Vec<u8> = Vec::new();
    loop {
        let Some(b) = cur.peek() else { break };
        match b {
            b'"' | b'\'' => cur.skip_string().map_err(as_expression_error)?,
            b'#' => cur.skip_line(),
            b'/' if cur.peek_at(1) == Some(b'/') => cur.skip_line(),
            b'/' if cur.peek_at(1) == Some(b'*') => {
                cur.skip_block_comment().map_err(as_expression_error)?;
            }
            b'[' | b'(' | b'{' => {
                depth.push(b);
                cur.bump();
            }
            b']' | b')' | b'}' => {
                match (depth.pop(), b) {
                    (Some(b'['), b']') | (Some(b'('), b')') | (Some(b'{'), b'}') => {}
                    _ => return Err(invalid("unbalanced delimiters")),
                }
                cur.bump();
            }
            b',' if depth.is_empty() => {
                return Err(invalid("multiple expressions separated by ','"));
            }
            b';' if depth.is_empty() => {
                return Err(invalid("statement separator ';' in expression"));
            }
            b'=' if depth.is_empty()
                && cur.peek_at(1) == Some(b'>')
                && !matches!(cur.prev_byte(), Some(b'<' | b'=' | b'>' | b'!' | b'+' | b'-')) =>
            {
                // arrow-function returns (`fn (...) => ...`) are the one
                // place a top-level `=>` is legitimate
                if cur.prev_significant_byte() == Some(b')') {
                    cur.bump();
                    cur.bump();
                } else {
                    return Err(invalid("'=>' outside an array literal"));
                }
            }
            _ => cur.bump(),
        }
    }
    if !depth.is_empty() {
        return Err(invalid("unclosed delimiter"));
    }
    Ok(())
}

fn invalid(reason: &str) -> SyntaxError {
    SyntaxError::InvalidExpression {
        reason: reason.to_string(),
    }
}

fn as_expression_error(err: SyntaxError) -> SyntaxError {
    SyntaxError::InvalidExpression {
        reason: err.reason().to_string(),
    }
}
