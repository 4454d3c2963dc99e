//! Typed rows for the three IMDb dumps.
//!
//! Columns that may carry the `\N` missing-value sentinel are modelled as
//! `Option<String>` via [`imdb_null`]; downstream code never compares against
//! the sentinel string itself. The dumps have more columns than we project;
//! serde matches fields by header name and ignores the rest.

use serde::{Deserialize, Deserializer};

/// The literal token IMDb dumps use for a missing value.
pub const MISSING_SENTINEL: &str = "\\N";

/// Deserialize a field that uses the IMDb `\N` sentinel into an `Option`.
pub fn imdb_null<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = String::deserialize(deserializer)?;
    if raw == MISSING_SENTINEL {
        Ok(None)
    } else {
        Ok(Some(raw))
    }
}

/// One row of `title.basics.tsv`.
#[derive(Debug, Clone, Deserialize)]
pub struct TitleRecord {
    pub tconst: String,
    #[serde(rename = "titleType")]
    pub title_type: String,
    #[serde(rename = "primaryTitle", deserialize_with = "imdb_null")]
    pub primary_title: Option<String>,
    #[serde(rename = "startYear", deserialize_with = "imdb_null")]
    pub start_year: Option<String>,
}

/// One row of `name.basics.tsv`.
#[derive(Debug, Clone, Deserialize)]
pub struct NameRecord {
    pub nconst: String,
    #[serde(rename = "primaryName", deserialize_with = "imdb_null")]
    pub primary_name: Option<String>,
}

/// One row of `title.principals.tsv`.
#[derive(Debug, Clone, Deserialize)]
pub struct PrincipalRecord {
    pub tconst: String,
    pub nconst: String,
    #[serde(deserialize_with = "imdb_null")]
    pub category: Option<String>,
}
