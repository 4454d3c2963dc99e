//! Stage 2: normalize the names dump into `persons.csv`.

use serde::Serialize;
use std::path::Path;
use tracing::debug;

use reelnorm_tsv::{create_table_writer, open_tsv, NameRecord, Result};

#[derive(Debug, Serialize)]
struct PersonRow {
    person_id: String,
    person_name: String,
}

/// Write the person table: every row of the names dump whose `primaryName`
/// is non-missing, projected to (person_id, person_name).
///
/// Independent of the other stages. Returns the row count written.
pub fn normalize_persons(input: &Path, output: &Path) -> Result<usize> {
    let mut reader = open_tsv(input)?;
    let mut writer = create_table_writer(output, &["person_id", "person_name"])?;

    let mut written = 0usize;
    for record in reader.deserialize::<NameRecord>() {
        let record = record?;
        let Some(name) = record.primary_name else {
            continue;
        };
        writer.serialize(PersonRow {
            person_id: record.nconst,
            person_name: name,
        })?;
        written += 1;
    }
    writer.flush()?;

    debug!(persons = written, "person table written");
    Ok(written)
}
