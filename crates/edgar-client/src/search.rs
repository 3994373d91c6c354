//! EDGAR company search and filing-history retrieval.
//!
//! Two endpoints back this module: the full-text search index, which maps a
//! typed company name to CIK numbers, and the submissions API, which lists
//! an issuer's filing history. Older history is paginated into continuation
//! documents that are walked transparently.

use crate::rate_limit::RateLimitTracker;
use chrono::{NaiveDate, Utc};
use edgar_core::{EdgarError, Result};
use reqwest::blocking::Client;
use serde::{Deserialize, Serialize};

/// Full-text company search endpoint.
pub const SEARCH_URL: &str = "https://efts.sec.gov/LATEST/search-index";

/// Filing-history (submissions) endpoint prefix.
pub const SUBMISSIONS_URL: &str = "https://data.sec.gov/submissions";

/// EDGAR's full-text index does not reach further back than this date.
pub const MINIMUM_SEARCH_START_DATE: &str = "1994-01-01";

/// One company matched by the full-text search, in score order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EntityMatch {
    /// Zero-padded CIK identifier, e.g. `CIK0000037996`.
    pub cik: String,
    /// Registered entity name.
    pub entity: String,
}

/// One filing in an issuer's history.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FilingRecord {
    /// Period the report covers (ISO date).
    pub report_date: String,
    /// Date the filing was submitted (ISO date).
    pub filing_date: String,
    /// Form type, e.g. `10-K`.
    pub form: String,
    /// Archive URL of the primary document, or of the SGML full-submission
    /// container when no primary document is listed.
    pub document: String,
    /// Whether the filing carries XBRL data.
    pub is_xbrl: bool,
    /// Whether the filing carries inline XBRL data.
    pub is_inline_xbrl: bool,
}

/// An issuer's metadata plus its filings inside the requested window.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FilingHistory {
    /// Zero-padded CIK identifier.
    pub cik: String,
    /// Exact name of the issuing entity.
    pub issuing_entity: String,
    /// State of incorporation, when EDGAR reports one.
    pub state_of_incorporation: Option<String>,
    /// IRS employer identification number, when reported.
    pub ein: Option<String>,
    /// Matching filings, newest first.
    pub filings: Vec<FilingRecord>,
}

/// Format a numeric CIK as the zero-padded query form `CIK##########`.
#[must_use = "returns the formatted CIK string"]
pub fn format_cik(cik: &str) -> String {
    format!("CIK{cik:0>10}")
}

// Wire models for the two endpoints.

#[derive(Deserialize)]
struct SearchResponse {
    hits: Option<SearchHits>,
}

#[derive(Deserialize)]
struct SearchHits {
    #[serde(default)]
    hits: Vec<SearchHit>,
}

#[derive(Deserialize)]
struct SearchHit {
    #[serde(rename = "_id")]
    id: serde_json::Value,
    #[serde(rename = "_source")]
    source: SearchSource,
}

#[derive(Deserialize)]
struct SearchSource {
    entity: String,
}

#[derive(Deserialize)]
struct Submissions {
    name: String,
    #[serde(rename = "stateOfIncorporation", default)]
    state_of_incorporation: Option<String>,
    #[serde(default)]
    ein: Option<String>,
    filings: FilingsIndex,
}

#[derive(Deserialize)]
struct FilingsIndex {
    recent: FilingColumns,
    #[serde(default)]
    files: Vec<ContinuationFile>,
}

/// Column-oriented filing rows, as the submissions API serves them.
#[derive(Deserialize, Default)]
struct FilingColumns {
    #[serde(rename = "accessionNumber", default)]
    accession_number: Vec<String>,
    #[serde(rename = "filingDate", default)]
    filing_date: Vec<String>,
    #[serde(rename = "reportDate", default)]
    report_date: Vec<String>,
    #[serde(default)]
    form: Vec<String>,
    #[serde(rename = "primaryDocument", default)]
    primary_document: Vec<String>,
    #[serde(rename = "isXBRL", default)]
    is_xbrl: Vec<u8>,
    #[serde(rename = "isInlineXBRL", default)]
    is_inline_xbrl: Vec<u8>,
}

#[derive(Deserialize)]
struct ContinuationFile {
    name: String,
    #[serde(rename = "filingTo")]
    filing_to: String,
}

/// Client for the EDGAR search and submissions endpoints.
#[derive(Debug, Clone)]
pub struct SearchClient {
    client: Client,
    limiter: RateLimitTracker,
}

impl SearchClient {
    /// Create a search client sharing `limiter` with other EDGAR clients.
    ///
    /// # Errors
    ///
    /// Returns [`EdgarError::Connection`] if the HTTP client cannot be
    /// constructed.
    pub fn new(limiter: RateLimitTracker) -> Result<Self> {
        let client = Client::builder()
            .user_agent(crate::fetch::DEFAULT_USER_AGENT)
            .build()
            .map_err(|e| EdgarError::Connection(e.to_string()))?;
        Ok(Self { client, limiter })
    }

    /// Search the EDGAR database for entities matching `key`.
    ///
    /// Results arrive in descending match-score order.
    ///
    /// # Errors
    ///
    /// [`EdgarError::InvalidInput`] for an empty key; the usual transport
    /// taxonomy otherwise.
    pub fn search(&self, key: &str) -> Result<Vec<EntityMatch>> {
        let key = key.trim();
        if key.is_empty() {
            return Err(EdgarError::InvalidInput(
                "company name must not be empty".to_string(),
            ));
        }

        self.limiter.acquire();
        let response = self
            .client
            .post(SEARCH_URL)
            .json(&serde_json::json!({ "keysTyped": key }))
            .send()
            .map_err(|e| EdgarError::Connection(e.to_string()))?;
        if !response.status().is_success() {
            return Err(EdgarError::Server(response.status().as_u16()));
        }
        let body = response
            .text()
            .map_err(|e| EdgarError::Decode(e.to_string()))?;
        parse_search_response(&body)
    }

    /// Retrieve an issuer's filing history, filtered to `forms` and the
    /// `[start, end]` filing-date window (ISO dates).
    ///
    /// # Errors
    ///
    /// [`EdgarError::InvalidInput`] when the CIK is malformed or the window
    /// is inverted, precedes the index floor, or runs past today.
    pub fn filings(
        &self,
        cik: &str,
        forms: &[&str],
        start: &str,
        end: &str,
    ) -> Result<FilingHistory> {
        let cik = cik.to_uppercase();
        validate_cik(&cik)?;
        validate_window(start, end)?;
        let forms: Vec<String> = forms.iter().map(|f| f.to_uppercase()).collect();

        let submissions: Submissions =
            serde_json::from_str(&self.get_json(&format!("{SUBMISSIONS_URL}/{cik}.json"))?)?;

        let mut filings = collect_filings(&submissions.filings.recent, &cik, &forms, start, end);
        for file in &submissions.filings.files {
            if file.filing_to.as_str() >= start {
                log::debug!("walking continuation document {}", file.name);
                let columns: FilingColumns =
                    serde_json::from_str(&self.get_json(&format!("{SUBMISSIONS_URL}/{}", file.name))?)?;
                filings.extend(collect_filings(&columns, &cik, &forms, start, end));
            }
        }

        Ok(FilingHistory {
            cik,
            issuing_entity: submissions.name,
            state_of_incorporation: submissions.state_of_incorporation,
            ein: submissions.ein,
            filings,
        })
    }

    fn get_json(&self, url: &str) -> Result<String> {
        self.limiter.acquire();
        let response = self
            .client
            .get(url)
            .send()
            .map_err(|e| EdgarError::Connection(e.to_string()))?;
        match response.status() {
            status if status.as_u16() == 404 => Err(EdgarError::NotFound(url.to_string())),
            status if !status.is_success() => Err(EdgarError::Server(status.as_u16())),
            _ => response
                .text()
                .map_err(|e| EdgarError::Decode(e.to_string())),
        }
    }
}

fn validate_cik(cik: &str) -> Result<()> {
    let digits = cik.strip_prefix("CIK");
    match digits {
        Some(d) if d.len() == 10 && d.bytes().all(|b| b.is_ascii_digit()) => Ok(()),
        _ => Err(EdgarError::InvalidInput(format!(
            "CIK number not in the expected CIK########## form: {cik}"
        ))),
    }
}

fn validate_window(start: &str, end: &str) -> Result<()> {
    let parse = |s: &str| {
        NaiveDate::parse_from_str(s, "%Y-%m-%d")
            .map_err(|_| EdgarError::InvalidInput(format!("not an ISO date: {s}")))
    };
    let start_date = parse(start)?;
    let end_date = parse(end)?;

    if start < MINIMUM_SEARCH_START_DATE {
        return Err(EdgarError::InvalidInput(format!(
            "start date cannot precede {MINIMUM_SEARCH_START_DATE}"
        )));
    }
    if end_date > Utc::now().date_naive() {
        return Err(EdgarError::InvalidInput(
            "end date cannot be later than today".to_string(),
        ));
    }
    if start_date > end_date {
        return Err(EdgarError::InvalidInput(
            "start date cannot be greater than end date".to_string(),
        ));
    }
    Ok(())
}

fn parse_search_response(body: &str) -> Result<Vec<EntityMatch>> {
    let response: SearchResponse = serde_json::from_str(body)?;
    let hits = response.hits.map(|h| h.hits).unwrap_or_default();
    Ok(hits
        .into_iter()
        .filter_map(|hit| {
            let digits = match &hit.id {
                serde_json::Value::String(s) => s.clone(),
                serde_json::Value::Number(n) => n.to_string(),
                _ => return None,
            };
            Some(EntityMatch {
                cik: format_cik(&digits),
                entity: hit.source.entity,
            })
        })
        .collect())
}

/// Filter one column block down to the requested forms and date window.
///
/// Rows arrive newest first, so iteration stops at the first row older than
/// the window; rows newer than it are skipped.
fn collect_filings(
    columns: &FilingColumns,
    cik: &str,
    forms: &[String],
    start: &str,
    end: &str,
) -> Vec<FilingRecord> {
    let cik_digits = cik.trim_start_matches("CIK").trim_start_matches('0');
    let mut records = Vec::new();

    for i in 0..columns.accession_number.len() {
        let filing_date = columns.filing_date.get(i).map_or("", String::as_str);
        if filing_date < start {
            break;
        }
        if filing_date > end {
            continue;
        }
        let form = columns.form.get(i).map_or("", String::as_str);
        if !forms.iter().any(|f| f == form) {
            continue;
        }

        let accession = &columns.accession_number[i];
        let primary = columns.primary_document.get(i).map_or("", String::as_str);
        let document = if primary.is_empty() {
            // Older filings have no primary document; fall back to the SGML
            // full-submission container.
            format!(
                "https://www.sec.gov/Archives/edgar/data/{cik_digits}/{}/{accession}.txt",
                accession.replace('-', "")
            )
        } else {
            format!(
                "https://www.sec.gov/Archives/edgar/data/{cik_digits}/{}/{primary}",
                accession.replace('-', "")
            )
        };

        records.push(FilingRecord {
            report_date: columns.report_date.get(i).cloned().unwrap_or_default(),
            filing_date: filing_date.to_string(),
            form: form.to_string(),
            document,
            is_xbrl: columns.is_xbrl.get(i).copied().unwrap_or(0) != 0,
            is_inline_xbrl: columns.is_inline_xbrl.get(i).copied().unwrap_or(0) != 0,
        });
    }
    records
}
