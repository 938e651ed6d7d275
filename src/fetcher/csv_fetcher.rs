use thiserror::Error;
use tracing::info;
use wreq::Client;
use wreq_util::Emulation;

use crate::models::RawCaseRow;

/// The single failure the ingestion step can raise. Individual bad cells are
/// absorbed by the normalizer; only losing the whole table is an error.
#[derive(Debug, Error)]
pub enum IngestError {
    #[error("source unavailable: {reason}")]
    SourceUnavailable { reason: String },
}

impl IngestError {
    fn unavailable(reason: impl ToString) -> Self {
        IngestError::SourceUnavailable {
            reason: reason.to_string(),
        }
    }
}

/// Fetches the published spreadsheet as CSV.
///
/// Google's CSV export endpoint is picky about bare default user agents, so
/// the client emulates a browser the same way the rest of our fetchers do.
pub struct CsvFetcher {
    client: Client,
}

impl CsvFetcher {
    pub fn new() -> Result<Self, IngestError> {
        let client = Client::builder()
            .emulation(Emulation::Firefox139)
            .build()
            .map_err(IngestError::unavailable)?;

        Ok(CsvFetcher { client })
    }

    /// GET the CSV and parse it into raw rows. Transport errors, non-2xx
    /// responses and a malformed CSV envelope all surface as
    /// `SourceUnavailable`; no retries happen here.
    pub async fn fetch_rows(&self, url: &str) -> Result<Vec<RawCaseRow>, IngestError> {
        info!("Fetching spreadsheet CSV from {}", url);

        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(IngestError::unavailable)?;

        if !response.status().is_success() {
            return Err(IngestError::unavailable(format!(
                "HTTP {} from source",
                response.status()
            )));
        }

        let body = response.text().await.map_err(IngestError::unavailable)?;
        let rows = parse_rows(&body)?;
        info!("Fetched {} raw rows", rows.len());

        Ok(rows)
    }
}

/// Parse a CSV body into raw rows, preserving source order.
///
/// Ragged records or a broken header row are envelope failures and abort the
/// whole load; per-cell content is never judged here.
pub fn parse_rows(body: &str) -> Result<Vec<RawCaseRow>, IngestError> {
    let mut reader = csv::Reader::from_reader(body.as_bytes());
    let mut rows = Vec::new();
    for record in reader.deserialize::<RawCaseRow>() {
        rows.push(record.map_err(IngestError::unavailable)?);
    }
    Ok(rows)
}
