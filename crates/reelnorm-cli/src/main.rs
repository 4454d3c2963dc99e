//! reelnorm CLI
//!
//! Runs the three normalization stages in order over the IMDb dumps in the
//! input directory and writes the three relational tables to the output
//! directory. Exits non-zero on the first missing input file; tables from
//! stages that already completed are left on disk.

use anyhow::{Context, Result};
use clap::Parser;
use colored::Colorize;
use std::fs;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

use reelnorm_pipeline::{
    link_credits, normalize_movies, normalize_persons, DEFAULT_CHUNK_ROWS, MOVIES_OUT,
    NAME_BASICS, PERSONS_OUT, PRINCIPALS_OUT, TITLE_BASICS, TITLE_PRINCIPALS,
};

#[derive(Parser)]
#[command(name = "reelnorm")]
#[command(
    author,
    version,
    about = "Normalize IMDb flat-file dumps into relational CSV tables"
)]
struct Cli {
    /// Directory containing title.basics.tsv, name.basics.tsv and
    /// title.principals.tsv.
    #[arg(long, default_value = ".")]
    input_dir: PathBuf,

    /// Directory the normalized tables are written to (created if absent).
    #[arg(long, default_value = "1_data_normalized")]
    out_dir: PathBuf,

    /// Rows per chunk when streaming title.principals.tsv. Bounds peak
    /// memory; has no effect on the output rows.
    #[arg(long, default_value_t = DEFAULT_CHUNK_ROWS)]
    chunk_rows: usize,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();
    let cli = Cli::parse();

    println!("--- IMDb raw data normalization ---");

    if !cli.out_dir.exists() {
        fs::create_dir_all(&cli.out_dir)
            .with_context(|| format!("creating output directory {}", cli.out_dir.display()))?;
        println!("created output directory: {}", cli.out_dir.display());
    }

    println!("\n[1/3] processing '{TITLE_BASICS}' -> '{MOVIES_OUT}'");
    let (movie_ids, movie_count) = normalize_movies(
        &cli.input_dir.join(TITLE_BASICS),
        &cli.out_dir.join(MOVIES_OUT),
    )
    .context("movie normalizer failed")?;
    eprintln!(
        "{} {} ({movie_count} movies)",
        "wrote".green().bold(),
        MOVIES_OUT.bold()
    );

    println!("\n[2/3] processing '{NAME_BASICS}' -> '{PERSONS_OUT}'");
    let person_count = normalize_persons(
        &cli.input_dir.join(NAME_BASICS),
        &cli.out_dir.join(PERSONS_OUT),
    )
    .context("person normalizer failed")?;
    eprintln!(
        "{} {} ({person_count} people)",
        "wrote".green().bold(),
        PERSONS_OUT.bold()
    );

    println!("\n[3/3] processing '{TITLE_PRINCIPALS}' -> '{PRINCIPALS_OUT}'");
    let summary = link_credits(
        &cli.input_dir.join(TITLE_PRINCIPALS),
        &cli.out_dir.join(PRINCIPALS_OUT),
        &movie_ids,
        cli.chunk_rows,
        |n| println!("  ... processing chunk {n}"),
    )
    .context("credit linker failed")?;
    eprintln!(
        "{} {} ({} unique relations from {} surviving rows, {} chunks)",
        "wrote".green().bold(),
        PRINCIPALS_OUT.bold(),
        summary.written,
        summary.rows_kept,
        summary.chunks
    );

    println!(
        "\n--- normalization complete; tables are in '{}' ---",
        cli.out_dir.display()
    );
    Ok(())
}
