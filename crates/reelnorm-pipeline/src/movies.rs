//! Stage 1: normalize the titles dump into `movies.csv`.

use serde::Serialize;
use std::path::Path;
use tracing::debug;

use reelnorm_tsv::{create_table_writer, open_tsv, Result, TitleRecord};

use crate::MovieIdSet;

#[derive(Debug, Serialize)]
struct MovieRow {
    movie_id: String,
    title: Option<String>,
    year: i64,
}

/// Filter the titles dump to movies with a parseable release year and write
/// the movie table.
///
/// Keeps rows with `titleType == "movie"`, then applies the two-pass year
/// drop: rows whose `startYear` is the missing sentinel go first, then rows
/// whose non-missing year fails integer parsing. Returns the set of surviving
/// movie ids (consumed by the credit linker) and the row count written.
///
/// The input is opened before the output is created, so a missing dump
/// aborts without leaving a partial `movies.csv` behind.
pub fn normalize_movies(input: &Path, output: &Path) -> Result<(MovieIdSet, usize)> {
    let mut reader = open_tsv(input)?;
    let mut writer = create_table_writer(output, &["movie_id", "title", "year"])?;

    let mut movie_ids = MovieIdSet::default();
    let mut written = 0usize;
    for record in reader.deserialize::<TitleRecord>() {
        let record = record?;
        if record.title_type != "movie" {
            continue;
        }
        let Some(raw_year) = record.start_year else {
            continue;
        };
        let Ok(year) = raw_year.parse::<i64>() else {
            continue;
        };
        writer.serialize(MovieRow {
            movie_id: record.tconst.clone(),
            title: record.primary_title,
            year,
        })?;
        movie_ids.insert(record.tconst);
        written += 1;
    }
    writer.flush()?;

    debug!(movies = written, "movie table written");
    Ok((movie_ids, written))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn unparseable_year_is_dropped_even_when_present() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("title.basics.tsv");
        fs::write(
            &input,
            "tconst\ttitleType\tprimaryTitle\tstartYear\n\
             tt1\tmovie\tGood Year\t2001\n\
             tt2\tmovie\tBad Year\tnineteen-eighty\n\
             tt3\tmovie\tNo Year\t\\N\n",
        )
        .unwrap();
        let output = dir.path().join("movies.csv");

        let (ids, written) = normalize_movies(&input, &output).unwrap();
        assert_eq!(written, 1);
        assert!(ids.contains("tt1"));
        assert!(!ids.contains("tt2"));
        assert!(!ids.contains("tt3"));
        let text = fs::read_to_string(&output).unwrap();
        assert_eq!(text, "movie_id,title,year\ntt1,Good Year,2001\n");
    }
}
