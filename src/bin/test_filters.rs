use anyhow::Result;
use std::collections::HashSet;

#[path = "../models/mod.rs"]
mod models;

#[path = "../processor/normalizer.rs"]
mod normalizer;

#[path = "../processor/filter.rs"]
mod filter;

#[path = "../processor/aggregator.rs"]
mod aggregator;

use aggregator::{aggregate, top_processos, RANKING_SIZE};
use filter::{estado_options, filter, protocolado_options, FilterSelections};
use models::RawCaseRow;
use normalizer::CaseNormalizer;

fn raw(numero: &str, estado: &str, protocolado: &str, valor: &str) -> RawCaseRow {
    RawCaseRow {
        numero_processo: Some(numero.to_string()),
        estado: Some(estado.to_string()),
        protocolado: Some(protocolado.to_string()),
        valor_total: Some(valor.to_string()),
        ..Default::default()
    }
}

fn main() -> Result<()> {
    println!("=== TESTING FILTER + AGGREGATION ===\n");

    let normalizer = CaseNormalizer;
    let table = normalizer.normalize_rows(vec![
        raw("proc-1", "SP", "Sim", "R$ 1.000,00"),
        raw("proc-2", "RJ", "Não", "R$ 500,50"),
        raw("proc-3", "SP", "Não", "R$ 2.300,00"),
        raw("proc-4", "MG", "Sim", "R$ 150,75"),
    ]);

    println!("Sidebar options:");
    println!("  Estados: {:?}", estado_options(&table));
    println!("  Protocolado: {:?}\n", protocolado_options(&table));

    // Everything selected, as on first render
    let selections = FilterSelections::all_for(&table);
    let view = filter(&table, &selections);
    let kpis = aggregate(&view);
    println!("Unfiltered KPIs:");
    println!("  Valor total geral: {:.2}", kpis.valor_total_geral);
    println!("  Processos: {} | Protocolados: {}\n", kpis.qtd_processos, kpis.qtd_protocolados);

    // Narrow to SP only
    let mut sp_only = FilterSelections::all_for(&table);
    sp_only.estados = HashSet::from(["SP".to_string()]);
    let view = filter(&table, &sp_only);
    println!("SP only -> {} rows", view.len());

    let kpis = aggregate(&view);
    println!("  Valor total geral: {:.2} (expected 3300.00)", kpis.valor_total_geral);

    println!("\nRanking (top {}):", RANKING_SIZE);
    for (i, entry) in top_processos(&view, RANKING_SIZE).iter().enumerate() {
        println!(
            "  {}. {} ({}) -> {:.2}",
            i + 1,
            entry.numero_processo,
            entry.estado,
            entry.valor_total
        );
    }

    Ok(())
}
