use std::fmt;

use super::QuerySyntaxError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flag {
    Name,
    Url,
    Desc,
    Tags,
    Unread,
    Public,
}

impl fmt::Display for Flag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Flag::Name => "-n/--name",
            Flag::Url => "-u/--url",
            Flag::Desc => "-d/--desc",
            Flag::Tags => "-t/--tags",
            Flag::Unread => "-un/--unread",
            Flag::Public => "-p/--public",
        };
        write!(f, "{}", s)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Token {
    Flag(Flag),
    Word(String),
}

/// Split the query on whitespace and classify each token.
///
/// Anything that starts with `-` and is longer than one character must be a
/// recognized flag; a lone `-` is an ordinary word.
pub fn tokenize(input: &str) -> Result<Vec<Token>, QuerySyntaxError> {
    input
        .split_whitespace()
        .map(|tok| match tok {
            "-n" | "--name" => Ok(Token::Flag(Flag::Name)),
            "-u" | "--url" => Ok(Token::Flag(Flag::Url)),
            "-d" | "--desc" => Ok(Token::Flag(Flag::Desc)),
            "-t" | "--tags" => Ok(Token::Flag(Flag::Tags)),
            "-un" | "--unread" => Ok(Token::Flag(Flag::Unread)),
            "-p" | "--public" => Ok(Token::Flag(Flag::Public)),
            _ if tok.starts_with('-') && tok.len() > 1 => Err(QuerySyntaxError::new(format!(
                "unrecognized flag `{tok}`"
            ))),
            _ => Ok(Token::Word(tok.to_string())),
        })
        .collect()
}
