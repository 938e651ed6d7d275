use std::collections::HashMap;
use std::sync::Arc;
use tracing::info;

use crate::config::SourceConfig;
use crate::fetcher::{CsvFetcher, IngestError};
use crate::models::CaseRecord;
use crate::processor::CaseNormalizer;

/// Fetch + normalize, in that order. Stateless apart from the HTTP client;
/// repeated loads of an unchanged source produce the same table.
pub struct CasePipeline {
    fetcher: CsvFetcher,
    normalizer: CaseNormalizer,
}

impl CasePipeline {
    pub fn new() -> Result<Self, IngestError> {
        Ok(CasePipeline {
            fetcher: CsvFetcher::new()?,
            normalizer: CaseNormalizer,
        })
    }

    pub async fn load(&self, config: &SourceConfig) -> Result<Vec<CaseRecord>, IngestError> {
        let raw_rows = self.fetcher.fetch_rows(&config.source.url).await?;
        let records = self.normalizer.normalize_rows(raw_rows);
        info!(
            "Normalized {} case records for source {}",
            records.len(),
            config.source.name
        );
        Ok(records)
    }
}

/// Caller-owned memoization of loaded tables, keyed by source URL.
///
/// Entries never expire on their own; the owner invalidates a key when it
/// knows the source changed. Tables are shared as `Arc` since every consumer
/// reads the same immutable data.
#[derive(Debug, Default)]
pub struct TableCache {
    entries: HashMap<String, Arc<Vec<CaseRecord>>>,
}

impl TableCache {
    pub fn new() -> Self {
        TableCache::default()
    }

    pub fn get(&self, url: &str) -> Option<Arc<Vec<CaseRecord>>> {
        self.entries.get(url).cloned()
    }

    pub fn store(&mut self, url: &str, table: Vec<CaseRecord>) -> Arc<Vec<CaseRecord>> {
        let table = Arc::new(table);
        self.entries.insert(url.to_string(), Arc::clone(&table));
        table
    }

    pub fn invalidate(&mut self, url: &str) {
        self.entries.remove(url);
    }
}
