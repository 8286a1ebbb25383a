mod lexer;
mod parser;

pub use parser::{Filters, Intent};

use thiserror::Error;

/// The query text violates the flag grammar.
///
/// Queries arrive one keystroke at a time, so a syntax error usually means
/// "the user is mid-flag" rather than a real mistake. Callers map this to an
/// empty result set, never to a visible failure.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("malformed search query: {reason}")]
pub struct QuerySyntaxError {
    reason: String,
}

impl QuerySyntaxError {
    fn new(reason: impl Into<String>) -> Self {
        Self {
            reason: reason.into(),
        }
    }
}

/// Parse a raw query string into a search [`Intent`].
///
/// Behavior:
/// - Empty/whitespace-only → `Specific` with every field unset (match all)
/// - Bare words → `Global` free-text search, words joined with one space
/// - `-n/--name`, `-u/--url`, `-d/--desc`, `-t/--tags` → consume one or more
///   following non-flag tokens; a flag with no value is an error
/// - `-un/--unread`, `-p/--public` → presence means true; an optional
///   following `true/false/yes/no/1/0` sets the value explicitly
/// - Unknown flags (`-x`, `--foo`) → error
/// - Bare words mixed with field flags (`hello -t work`) → error; a query is
///   either global or field-scoped, never both
pub fn parse(input: &str) -> Result<Intent, QuerySyntaxError> {
    let tokens = lexer::tokenize(input)?;
    parser::parse(tokens)
}
