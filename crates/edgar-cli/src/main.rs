//! edgar - Extract item sections from SEC EDGAR filings.
//!
//! Three commands: `extract` runs the section extraction engine over a
//! local filing or an archive URL, `search` maps a company name to CIK
//! numbers, and `filings` lists an issuer's filing history with document
//! URLs that `extract` accepts directly.

use anyhow::{bail, Context, Result};
use chrono::Utc;
use clap::{Parser, Subcommand};
use colored::Colorize;
use edgar_client::{DocumentFetcher, RateLimitTracker, SearchClient, MINIMUM_SEARCH_START_DATE};
use edgar_core::{RawDocument, SectionKey, SectionMap};
use edgar_extract::SectionExtractor;
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(name = "edgar", version, about = "SEC EDGAR filing section extractor")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Extract item sections from a filing into JSON
    Extract {
        /// Local .htm/.html/.txt filing, or an https:// archive URL
        source: String,

        /// Restrict output to these section keys (e.g. item1,item7a)
        #[arg(long, value_delimiter = ',')]
        sections: Vec<String>,

        /// Emit the plain-text rendering only, dropping the markup
        #[arg(long)]
        text_only: bool,

        /// Write JSON to this file instead of stdout
        #[arg(long, short)]
        output: Option<PathBuf>,
    },

    /// Search EDGAR for companies matching a name
    Search {
        /// Company name or fragment to search for
        company: String,
    },

    /// List an issuer's filings with document URLs
    Filings {
        /// CIK identifier, zero-padded (CIK##########) or bare digits
        cik: String,

        /// Form types to include
        #[arg(long, default_value = "10-K")]
        form: Vec<String>,

        /// Earliest filing date (ISO)
        #[arg(long, default_value = MINIMUM_SEARCH_START_DATE)]
        from: String,

        /// Latest filing date (ISO); defaults to today
        #[arg(long)]
        to: Option<String>,
    },
}

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    match cli.command {
        Command::Extract {
            source,
            sections,
            text_only,
            output,
        } => extract(&source, &sections, text_only, output.as_deref()),
        Command::Search { company } => search(&company),
        Command::Filings { cik, form, from, to } => filings(&cik, &form, &from, to.as_deref()),
    }
}

fn extract(source: &str, sections: &[String], text_only: bool, output: Option<&Path>) -> Result<()> {
    let doc = load_document(source)?;

    let mut builder = SectionExtractor::builder();
    if !sections.is_empty() {
        let keys = sections
            .iter()
            .map(|s| {
                SectionKey::from_canonical(&s.to_lowercase())
                    .with_context(|| format!("unknown section key: '{s}'"))
            })
            .collect::<Result<Vec<_>>>()?;
        builder = builder.extracted(keys);
    }
    let extracted = builder.build().extract(&doc)?;

    eprintln!(
        "{} {} section(s) extracted",
        "ok:".green().bold(),
        extracted.len()
    );

    let json = render_sections(&extracted, text_only)?;
    match output {
        Some(path) => std::fs::write(path, json)
            .with_context(|| format!("failed to write {}", path.display()))?,
        None => println!("{json}"),
    }
    Ok(())
}

fn load_document(source: &str) -> Result<RawDocument> {
    if source.starts_with("http://") || source.starts_with("https://") {
        let fetcher = DocumentFetcher::new(RateLimitTracker::default())?;
        Ok(fetcher.fetch(source)?)
    } else {
        Ok(RawDocument::from_path(Path::new(source))?)
    }
}

fn render_sections(sections: &SectionMap, text_only: bool) -> Result<String> {
    let value = if text_only {
        let texts: std::collections::BTreeMap<_, _> = sections
            .iter()
            .map(|(key, section)| (*key, section.text.as_str()))
            .collect();
        serde_json::to_value(texts)?
    } else {
        serde_json::to_value(sections)?
    };
    Ok(serde_json::to_string_pretty(&value)?)
}

fn search(company: &str) -> Result<()> {
    let client = SearchClient::new(RateLimitTracker::default())?;
    let matches = client.search(company)?;
    if matches.is_empty() {
        bail!("no entities match '{company}'");
    }
    for m in matches {
        println!("{}  {}", m.cik.cyan(), m.entity);
    }
    Ok(())
}

fn filings(cik: &str, forms: &[String], from: &str, to: Option<&str>) -> Result<()> {
    let cik = normalize_cik(cik);
    let today = Utc::now().date_naive().to_string();
    let to = to.unwrap_or(&today);
    let forms: Vec<&str> = forms.iter().map(String::as_str).collect();

    let client = SearchClient::new(RateLimitTracker::default())?;
    let history = client.filings(&cik, &forms, from, to)?;

    println!(
        "{} ({}){}",
        history.issuing_entity.bold(),
        history.cik,
        history
            .state_of_incorporation
            .as_deref()
            .filter(|s| !s.is_empty())
            .map(|s| format!(", incorporated in {s}"))
            .unwrap_or_default()
    );
    if history.filings.is_empty() {
        println!("no filings in the requested window");
    }
    for filing in &history.filings {
        println!(
            "{}  {:6}  {}",
            filing.filing_date,
            filing.form,
            filing.document.cyan()
        );
    }
    Ok(())
}

/// Accept bare digits as well as the zero-padded query form.
fn normalize_cik(cik: &str) -> String {
    let upper = cik.to_uppercase();
    if upper.starts_with("CIK") {
        upper
    } else {
        edgar_client::format_cik(&upper)
    }
}
