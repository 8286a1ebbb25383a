use super::lexer::{Flag, Token};
use super::QuerySyntaxError;

/// A parsed search query. Exactly one variant is ever active: a query is
/// either free text matched across every field, or a set of field filters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Intent {
    Global { terms: String },
    Specific(Filters),
}

/// Field-scoped filters. All fields unset is legal and means "no filter".
/// `tags`, when present, is non-empty; the parser rejects a `-t` with no
/// value before a `Filters` is ever built.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Filters {
    pub name: Option<String>,
    pub url: Option<String>,
    pub desc: Option<String>,
    pub tags: Option<Vec<String>>,
    pub unread: Option<bool>,
    pub public: Option<bool>,
}

fn parse_bool(word: &str) -> Option<bool> {
    match word.to_lowercase().as_str() {
        "true" | "yes" | "1" => Some(true),
        "false" | "no" | "0" => Some(false),
        _ => None,
    }
}

/// State machine over the token stream.
///
/// A textual flag stays active until the next flag or end of input and
/// greedily collects every word in between. A boolean flag is true on sight
/// and may be overridden by exactly one following boolean literal; any other
/// word falls through to the free-text value sequence.
pub fn parse(tokens: Vec<Token>) -> Result<Intent, QuerySyntaxError> {
    let mut value: Vec<String> = Vec::new();
    let mut name: Vec<String> = Vec::new();
    let mut url: Vec<String> = Vec::new();
    let mut desc: Vec<String> = Vec::new();
    let mut tags: Vec<String> = Vec::new();
    let mut unread: Option<bool> = None;
    let mut public: Option<bool> = None;

    // Textual flag currently collecting values.
    let mut current: Option<Flag> = None;
    // Textual flag that has not received its first value yet.
    let mut awaiting: Option<Flag> = None;
    // Boolean flag that may still consume one literal.
    let mut bool_pending: Option<Flag> = None;

    for token in tokens {
        match token {
            Token::Flag(flag) => {
                if let Some(prev) = awaiting {
                    return Err(QuerySyntaxError::new(format!("{prev} expects a value")));
                }
                bool_pending = None;
                match flag {
                    Flag::Unread => {
                        unread = Some(true);
                        bool_pending = Some(flag);
                        current = None;
                    }
                    Flag::Public => {
                        public = Some(true);
                        bool_pending = Some(flag);
                        current = None;
                    }
                    _ => {
                        current = Some(flag);
                        awaiting = Some(flag);
                    }
                }
            }
            Token::Word(word) => {
                if let Some(flag) = bool_pending.take() {
                    if let Some(explicit) = parse_bool(&word) {
                        match flag {
                            Flag::Unread => unread = Some(explicit),
                            Flag::Public => public = Some(explicit),
                            _ => unreachable!("only boolean flags are held pending"),
                        }
                        continue;
                    }
                }
                match current {
                    Some(Flag::Name) => name.push(word),
                    Some(Flag::Url) => url.push(word),
                    Some(Flag::Desc) => desc.push(word),
                    Some(Flag::Tags) => tags.push(word),
                    Some(_) | None => {
                        value.push(word);
                        continue;
                    }
                }
                awaiting = None;
            }
        }
    }

    if let Some(flag) = awaiting {
        return Err(QuerySyntaxError::new(format!("{flag} expects a value")));
    }

    let has_fields = !name.is_empty()
        || !url.is_empty()
        || !desc.is_empty()
        || !tags.is_empty()
        || unread.is_some()
        || public.is_some();

    if !value.is_empty() {
        if has_fields {
            return Err(QuerySyntaxError::new(
                "free-text terms cannot be mixed with field flags",
            ));
        }
        return Ok(Intent::Global {
            terms: value.join(" "),
        });
    }

    Ok(Intent::Specific(Filters {
        name: join_words(name),
        url: join_words(url),
        desc: join_words(desc),
        tags: if tags.is_empty() { None } else { Some(tags) },
        unread,
        public,
    }))
}

fn join_words(words: Vec<String>) -> Option<String> {
    if words.is_empty() {
        None
    } else {
        Some(words.join(" "))
    }
}
