//! Stage 3, the core: stream the principals dump and write the linking table.
//!
//! The principals dump is far too large to load whole, so it is read in
//! fixed-size row chunks. Each chunk is filtered independently against the
//! stage-1 movie-id set and the fixed category allow-list; surviving chunks
//! are accumulated in arrival order, concatenated, deduplicated as
//! (movie_id, person_id, category) triples, and written out.

use std::collections::HashSet;
use std::path::Path;
use tracing::debug;

use reelnorm_tsv::{create_table_writer, open_tsv, ChunkedReader, PrincipalRecord, Result};

use crate::MovieIdSet;

/// The fixed set of credit categories that make it into the linking table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CreditCategory {
    Actor,
    Actress,
    Director,
}

impl CreditCategory {
    /// Parse a raw category token; anything outside the allow-list is `None`.
    pub fn parse(raw: &str) -> Option<Self> {
        match raw {
            "actor" => Some(Self::Actor),
            "actress" => Some(Self::Actress),
            "director" => Some(Self::Director),
            _ => None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Actor => "actor",
            Self::Actress => "actress",
            Self::Director => "director",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
struct Credit {
    movie_id: String,
    person_id: String,
    category: CreditCategory,
}

/// What the linker did, for progress reporting.
#[derive(Debug, Clone, Copy)]
pub struct LinkSummary {
    /// Chunks read from the dump (including ones that filtered to empty).
    pub chunks: usize,
    /// Rows surviving both filters, before dedup.
    pub rows_kept: usize,
    /// Unique triples written.
    pub written: usize,
}

/// Stream the principals dump and write `movie_principals.csv`.
///
/// `chunk_rows` bounds peak memory during the scan; it never affects the
/// output rows. `on_chunk` is called with the 1-based chunk number as each
/// chunk is read, so the caller can report progress. An empty `movie_ids`
/// set is not an error: every chunk filters to nothing and the output is a
/// header-only table.
///
/// Membership in `movie_ids` is tested before the category allow-list; the
/// two predicates are independent, but the set test is the more selective
/// one on real dumps.
///
/// `person_id` is deliberately not checked against the person table; credits
/// and person identity are independent concerns here.
pub fn link_credits(
    input: &Path,
    output: &Path,
    movie_ids: &MovieIdSet,
    chunk_rows: usize,
    mut on_chunk: impl FnMut(usize),
) -> Result<LinkSummary> {
    let reader = open_tsv(input)?;

    let mut kept_chunks: Vec<Vec<Credit>> = Vec::new();
    let mut chunks = 0usize;
    for chunk in ChunkedReader::<_, PrincipalRecord>::new(reader, chunk_rows) {
        let chunk = chunk?;
        chunks += 1;
        on_chunk(chunks);

        let kept: Vec<Credit> = chunk
            .into_iter()
            .filter(|row| movie_ids.contains(&row.tconst))
            .filter_map(|row| {
                let category = row.category.as_deref().and_then(CreditCategory::parse)?;
                Some(Credit {
                    movie_id: row.tconst,
                    person_id: row.nconst,
                    category,
                })
            })
            .collect();
        debug!(chunk = chunks, kept = kept.len(), "chunk filtered");
        if !kept.is_empty() {
            kept_chunks.push(kept);
        }
    }

    // Concatenate in chunk-arrival order, then collapse duplicate triples
    // keeping the first occurrence.
    let mut credits: Vec<Credit> = kept_chunks.into_iter().flatten().collect();
    let rows_kept = credits.len();
    let mut seen: HashSet<Credit> = HashSet::with_capacity(credits.len());
    credits.retain(|credit| seen.insert(credit.clone()));
    drop(seen);

    let mut writer =
        create_table_writer(output, &["movie_id", "person_id", "category"])?;
    for credit in &credits {
        writer.write_record([
            credit.movie_id.as_str(),
            credit.person_id.as_str(),
            credit.category.as_str(),
        ])?;
    }
    writer.flush()?;

    let written = credits.len();
    debug!(chunks, rows_kept, written, "linking table written");
    Ok(LinkSummary {
        chunks,
        rows_kept,
        written,
    })
}
