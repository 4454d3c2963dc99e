//! The reelnorm normalization pipeline.
//!
//! Three stages run strictly in sequence:
//! 1. [`movies::normalize_movies`] — titles dump -> `movies.csv`, plus the
//!    [`MovieIdSet`] the linker filters against,
//! 2. [`persons::normalize_persons`] — names dump -> `persons.csv`,
//! 3. [`principals::link_credits`] — chunked scan of the principals dump ->
//!    `movie_principals.csv`.
//!
//! The movie-id set is an explicit value handed from stage 1 to stage 3;
//! there is no shared or static state. Stage 2 is independent of both.

pub mod movies;
pub mod persons;
pub mod principals;

pub use movies::normalize_movies;
pub use persons::normalize_persons;
pub use principals::{link_credits, CreditCategory, LinkSummary};
pub use reelnorm_tsv::{Result, TableError};

use std::collections::HashSet;

/// Fixed input filenames (tab-separated, `\N` sentinel).
pub const TITLE_BASICS: &str = "title.basics.tsv";
pub const NAME_BASICS: &str = "name.basics.tsv";
pub const TITLE_PRINCIPALS: &str = "title.principals.tsv";

/// Fixed output filenames (comma-separated, header row).
pub const MOVIES_OUT: &str = "movies.csv";
pub const PERSONS_OUT: &str = "persons.csv";
pub const PRINCIPALS_OUT: &str = "movie_principals.csv";

/// Default rows per chunk for the principals scan. Tunable; correctness does
/// not depend on it, only peak memory does.
pub const DEFAULT_CHUNK_ROWS: usize = 1_000_000;

/// The movie identifiers that survived stage 1.
///
/// Built once by [`normalize_movies`] and consumed read-only by
/// [`link_credits`]; never persisted, never mutated after construction.
#[derive(Debug, Clone, Default)]
pub struct MovieIdSet(HashSet<String>);

impl MovieIdSet {
    pub fn insert(&mut self, movie_id: String) -> bool {
        self.0.insert(movie_id)
    }

    pub fn contains(&self, movie_id: &str) -> bool {
        self.0.contains(movie_id)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl FromIterator<String> for MovieIdSet {
    fn from_iter<I: IntoIterator<Item = String>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}
