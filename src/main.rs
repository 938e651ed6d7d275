use anyhow::{Context, Result};
use serde::Serialize;
use tracing::info;

mod config;
mod fetcher;
mod models;
mod pipeline;
mod processor;

use config::SourceConfig;
use models::CaseRecord;
use pipeline::{CasePipeline, TableCache};
use processor::{
    aggregate, estado_options, evolucao_financeira, filter, protocolado_options, top_processos,
    volume_por_estado, Aggregates, FilterSelections, RankingEntry, RANKING_SIZE,
};

/// Everything the presentation layer needs to draw the dashboard, as plain
/// data. Currency formatting (`R$ 1.234,56`) is its job, not ours.
#[derive(Debug, Serialize)]
struct DashboardPayload {
    source: String,
    estado_options: Vec<String>,
    protocolado_options: Vec<String>,
    table: Vec<CaseRecord>,
    filtered: Vec<CaseRecord>,
    aggregates: Aggregates,
    ranking: Vec<RankingEntry>,
    evolucao_financeira: Vec<(chrono::NaiveDate, f64)>,
    volume_por_estado: Vec<(String, f64)>,
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt::init();

    let config_path = std::env::args()
        .nth(1)
        .unwrap_or_else(|| "src/configs/juros_abusivos.toml".to_string());

    info!("🚀 Starting legal-case dashboard pipeline");

    let config = SourceConfig::from_file(&config_path)
        .with_context(|| format!("Failed to load source config from {}", config_path))?;
    info!("Loaded source config: {}", config.source.name);

    let pipeline = CasePipeline::new().context("Failed to initialize pipeline")?;
    let mut cache = TableCache::new();

    // Load through the cache; a second load of the same URL in this session
    // reuses the table instead of refetching.
    let table = match cache.get(&config.source.url) {
        Some(table) => table,
        None => {
            let loaded = pipeline
                .load(&config)
                .await
                .context("Failed to load case table")?;
            cache.store(&config.source.url, loaded)
        }
    };

    // First render: every estado and protocolado value selected, the way the
    // dashboard seeds its sidebar.
    let selections = FilterSelections::all_for(&table);
    let filtered = filter(&table, &selections);
    info!("Filtered view has {} of {} rows", filtered.len(), table.len());

    let aggregates = aggregate(&filtered);
    info!(
        "💰 Valor total geral: {:.2} | escritório: {:.2} | {} processos, {} protocolados",
        aggregates.valor_total_geral,
        aggregates.total_escritorio,
        aggregates.qtd_processos,
        aggregates.qtd_protocolados
    );

    let payload = DashboardPayload {
        source: config.source.name.clone(),
        estado_options: estado_options(&table),
        protocolado_options: protocolado_options(&table),
        ranking: top_processos(&filtered, RANKING_SIZE),
        evolucao_financeira: evolucao_financeira(&filtered),
        volume_por_estado: volume_por_estado(&filtered),
        aggregates,
        table: table.as_ref().clone(),
        filtered,
    };

    println!("{}", serde_json::to_string_pretty(&payload)?);
    info!("✅ Dashboard payload emitted");

    Ok(())
}
