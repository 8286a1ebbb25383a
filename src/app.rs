//! Single-shot search pipeline: parse, compile, query. One invocation does
//! exactly one of each, holds the store handle only for its own query and
//! shares nothing with the next invocation.

use std::path::Path;

use crate::compile;
use crate::query;
use crate::store::{Bookmark, Store, StoreError};

/// What an invocation produced for the emitter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// The query text did not parse. Queries are typed incrementally, so
    /// this is an expected in-progress state, not a failure.
    Empty,
    /// Matches ordered by creation time, newest first. May be empty.
    Bookmarks(Vec<Bookmark>),
}

pub fn run_search(store_path: &Path, raw: &str) -> Result<Outcome, StoreError> {
    let intent = match query::parse(raw) {
        Ok(intent) => intent,
        Err(err) => {
            log::debug!("query not parseable yet, emitting no results: {err}");
            return Ok(Outcome::Empty);
        }
    };

    let compiled = compile::compile(&intent);
    log::debug!("compiled query: {}", compiled.sql);

    let store = Store::open(store_path)?;
    let bookmarks = store.search(&compiled)?;
    Ok(Outcome::Bookmarks(bookmarks))
}
