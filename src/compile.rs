//! Turns a parsed [`Intent`] into a parametrized SQL statement against the
//! host application's bookmark store.
//!
//! Every filter becomes a full SELECT over the non-deleted posts and the
//! filters are combined with INTERSECT, so multiple words or tags all have
//! to match. User input only ever travels through bound parameters.

use crate::query::{Filters, Intent};

/// A compiled statement plus its parameter bindings, in positional order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompiledQuery {
    pub sql: String,
    pub params: Vec<Param>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Param {
    Text(String),
    Bool(bool),
}

// The post title contains the term.
const NAME_QUERY: &str = "SELECT title, url, identifier, date FROM posts \
     WHERE deleting = 0 AND title LIKE ? COLLATE NOCASE";

// The post url contains the term.
const URL_QUERY: &str = "SELECT title, url, identifier, date FROM posts \
     WHERE deleting = 0 AND url LIKE ? COLLATE NOCASE";

// The post description contains the term.
const DESC_QUERY: &str = "SELECT title, url, identifier, date FROM posts \
     WHERE deleting = 0 AND \"desc\" LIKE ? COLLATE NOCASE";

// The post carries a tag whose name is exactly the term.
const TAG_QUERY: &str = "SELECT title, url, identifier, date FROM posts \
     WHERE deleting = 0 AND id IN (SELECT post_id FROM posts_tags \
     WHERE tag_id IN (SELECT id FROM tags WHERE title = ? COLLATE NOCASE))";

// Any textual field contains the term, or a tag name is exactly the term.
const FULL_QUERY: &str = "SELECT title, url, identifier, date FROM posts \
     WHERE deleting = 0 AND (title LIKE ? COLLATE NOCASE \
     OR url LIKE ? COLLATE NOCASE \
     OR \"desc\" LIKE ? COLLATE NOCASE \
     OR id IN (SELECT post_id FROM posts_tags \
     WHERE tag_id IN (SELECT id FROM tags WHERE title = ? COLLATE NOCASE)))";

const UNREAD_QUERY: &str = "SELECT title, url, identifier, date FROM posts \
     WHERE deleting = 0 AND unread = ?";

const PUBLIC_QUERY: &str = "SELECT title, url, identifier, date FROM posts \
     WHERE deleting = 0 AND public = ?";

// Every non-deleted post; used when no filter is populated so that the
// intersection-of-nothing case still yields a well-formed statement.
const UNFILTERED_QUERY: &str =
    "SELECT title, url, identifier, date FROM posts WHERE deleting = 0";

const ORDER_BY: &str = " ORDER BY date DESC";

fn wildcard(term: &str) -> Param {
    Param::Text(format!("%{term}%"))
}

/// Compile an intent into one SQL statement. Infallible: the worst case is
/// the unfiltered non-deleted set. Output is deterministic for equal intents.
pub fn compile(intent: &Intent) -> CompiledQuery {
    let mut fragments: Vec<&str> = Vec::new();
    let mut params: Vec<Param> = Vec::new();

    match intent {
        Intent::Global { terms } => {
            // One full-scan fragment per word; every word has to match
            // somewhere, not necessarily in the same field.
            for word in terms.split_whitespace() {
                fragments.push(FULL_QUERY);
                params.push(wildcard(word)); // title
                params.push(wildcard(word)); // url
                params.push(wildcard(word)); // desc
                params.push(Param::Text(word.to_string())); // tag
            }
        }
        Intent::Specific(filters) => {
            let Filters {
                name,
                url,
                desc,
                tags,
                unread,
                public,
            } = filters;

            if let Some(name) = name {
                fragments.push(NAME_QUERY);
                params.push(wildcard(name));
            }
            if let Some(url) = url {
                fragments.push(URL_QUERY);
                params.push(wildcard(url));
            }
            if let Some(desc) = desc {
                fragments.push(DESC_QUERY);
                params.push(wildcard(desc));
            }
            if let Some(tags) = tags {
                // One fragment per tag: a bookmark must carry every tag.
                for tag in tags {
                    fragments.push(TAG_QUERY);
                    params.push(Param::Text(tag.clone()));
                }
            }
            if let Some(unread) = unread {
                fragments.push(UNREAD_QUERY);
                params.push(Param::Bool(*unread));
            }
            if let Some(public) = public {
                fragments.push(PUBLIC_QUERY);
                params.push(Param::Bool(*public));
            }
        }
    }

    let sql = if fragments.is_empty() {
        format!("{UNFILTERED_QUERY}{ORDER_BY}")
    } else {
        format!("{}{}", fragments.join(" INTERSECT "), ORDER_BY)
    };

    CompiledQuery { sql, params }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::query::parse;

    fn compiled(query: &str) -> CompiledQuery {
        compile(&parse(query).unwrap())
    }

    #[test]
    fn test_empty_query_compiles_to_unfiltered_set() {
        let c = compiled("");
        assert_eq!(
            c.sql,
            "SELECT title, url, identifier, date FROM posts WHERE deleting = 0 \
             ORDER BY date DESC"
        );
        assert!(c.params.is_empty());
    }

    #[test]
    fn test_global_emits_one_fragment_per_word() {
        let c = compiled("hello world");
        assert_eq!(c.sql.matches("INTERSECT").count(), 1);
        assert_eq!(c.sql.matches("SELECT title").count(), 2);
        assert!(c.sql.ends_with("ORDER BY date DESC"));
        assert_eq!(
            c.params,
            vec![
                Param::Text("%hello%".into()),
                Param::Text("%hello%".into()),
                Param::Text("%hello%".into()),
                Param::Text("hello".into()),
                Param::Text("%world%".into()),
                Param::Text("%world%".into()),
                Param::Text("%world%".into()),
                Param::Text("world".into()),
            ]
        );
    }

    #[test]
    fn test_tags_intersect_not_union() {
        let c = compiled("-t work -t urgent");
        assert_eq!(c.sql.matches("INTERSECT").count(), 1);
        assert_eq!(c.sql.matches("tag_id IN").count(), 2);
        assert_eq!(
            c.params,
            vec![Param::Text("work".into()), Param::Text("urgent".into())]
        );
    }

    #[test]
    fn test_name_phrase_is_a_single_wildcard_param() {
        let c = compiled("-n foo bar");
        assert_eq!(c.params, vec![Param::Text("%foo bar%".into())]);
        assert!(c.sql.contains("title LIKE ?"));
        assert!(!c.sql.contains("INTERSECT"));
    }

    #[test]
    fn test_boolean_filters_bind_parameters() {
        let c = compiled("-un -p false");
        assert!(c.sql.contains("unread = ?"));
        assert!(c.sql.contains("public = ?"));
        assert_eq!(c.params, vec![Param::Bool(true), Param::Bool(false)]);
    }

    #[test]
    fn test_all_filters_combine_in_field_order() {
        let c = compiled("-n a -u b -d c -t d -un -p");
        assert_eq!(c.sql.matches("INTERSECT").count(), 5);
        assert_eq!(
            c.params,
            vec![
                Param::Text("%a%".into()),
                Param::Text("%b%".into()),
                Param::Text("%c%".into()),
                Param::Text("d".into()),
                Param::Bool(true),
                Param::Bool(true),
            ]
        );
    }

    #[test]
    fn test_user_text_never_lands_in_the_statement() {
        // Hostile input stays inside parameter bindings.
        let c = compiled("-t ');drop_table_posts;--");
        assert!(!c.sql.contains("drop"));
        assert_eq!(
            c.params,
            vec![Param::Text("');drop_table_posts;--".into())]
        );
    }

    #[test]
    fn test_compilation_is_deterministic() {
        let intent = parse("-n foo -t a -t b -un").unwrap();
        assert_eq!(compile(&intent), compile(&intent));
    }
}
