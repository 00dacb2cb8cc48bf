use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use engine::{Occurrence, SearchEngine, MAX_RESULTS};
use serde::Serialize;
use std::io::Write;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "indexer")]
#[command(about = "Build a keyword index over a document list and query it", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Args)]
pub struct IndexInputs {
    /// File listing document paths, whitespace separated
    #[arg(long)]
    pub docs: PathBuf,
    /// File listing noise words, whitespace separated
    #[arg(long)]
    pub noise: PathBuf,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Find documents containing either keyword, most frequent first
    Search {
        #[command(flatten)]
        inputs: IndexInputs,
        kw1: String,
        kw2: String,
        /// Maximum number of documents to return
        #[arg(long, default_value_t = MAX_RESULTS)]
        limit: usize,
        #[arg(long, default_value_t = false)]
        json: bool,
    },
    /// Print keywords with their ranked occurrences
    Keywords {
        #[command(flatten)]
        inputs: IndexInputs,
        /// Only print this keyword
        #[arg(long)]
        keyword: Option<String>,
        #[arg(long, default_value_t = false)]
        json: bool,
    },
}

#[derive(Serialize)]
struct SearchOutput<'a> {
    kw1: &'a str,
    kw2: &'a str,
    results: Vec<String>,
}

#[derive(Serialize)]
struct KeywordEntry<'a> {
    keyword: &'a str,
    occurrences: &'a [Occurrence],
}

/// Run one command, writing its results to `out`.
pub fn run<W: Write>(cli: Cli, out: &mut W) -> Result<()> {
    match cli.command {
        Commands::Search { inputs, kw1, kw2, limit, json } => {
            let engine = build_engine(&inputs)?;
            let results = engine.search_top(&kw1, &kw2, limit);
            if json {
                let report = SearchOutput { kw1: &kw1, kw2: &kw2, results };
                writeln!(out, "{}", serde_json::to_string_pretty(&report)?)?;
            } else {
                for doc in results {
                    writeln!(out, "{doc}")?;
                }
            }
            Ok(())
        }
        Commands::Keywords { inputs, keyword, json } => {
            let engine = build_engine(&inputs)?;
            dump_keywords(&engine, keyword.as_deref(), json, out)
        }
    }
}

fn build_engine(inputs: &IndexInputs) -> Result<SearchEngine> {
    let mut engine = SearchEngine::new();
    engine
        .make_index(&inputs.docs, &inputs.noise)
        .with_context(|| format!("building index from {}", inputs.docs.display()))?;
    Ok(engine)
}

fn dump_keywords<W: Write>(engine: &SearchEngine, only: Option<&str>, json: bool, out: &mut W) -> Result<()> {
    let only = only.map(str::to_lowercase);
    let keywords: Vec<&str> = match only.as_deref() {
        Some(kw) => vec![kw],
        None => engine.index().sorted_keywords(),
    };
    let entries: Vec<KeywordEntry> = keywords
        .into_iter()
        .filter_map(|kw| engine.occurrences(kw).map(|occurrences| KeywordEntry { keyword: kw, occurrences }))
        .collect();

    if json {
        writeln!(out, "{}", serde_json::to_string_pretty(&entries)?)?;
        return Ok(());
    }
    for entry in entries {
        let occs: Vec<String> = entry
            .occurrences
            .iter()
            .map(|o| format!("{}({})", o.document, o.frequency))
            .collect();
        writeln!(out, "{}: {}", entry.keyword, occs.join(", "))?;
    }
    Ok(())
}
