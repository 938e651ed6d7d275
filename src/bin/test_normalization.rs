use anyhow::Result;

#[path = "../models/mod.rs"]
mod models;

#[path = "../processor/normalizer.rs"]
mod normalizer;

use models::RawCaseRow;
use normalizer::CaseNormalizer;

fn main() -> Result<()> {
    println!("=== TESTING CASE ROW NORMALIZATION ===\n");

    // Rows mirroring the messy shapes seen in the real sheet
    let raw_rows = vec![
        RawCaseRow {
            numero_processo: Some("0001234-56.2024.8.26.0100".to_string()),
            estado: Some("SP".to_string()),
            protocolado: Some("Sim".to_string()),
            valor_total: Some("R$ 15.750,90".to_string()),
            valor_escritorio: Some("R$ 1.575,09".to_string()),
            data_protocolo: Some("05/03/2024".to_string()),
            ..Default::default()
        },
        RawCaseRow {
            numero_processo: Some("0009876-12.2023.8.19.0001".to_string()),
            estado: Some("RJ".to_string()),
            valor_total: Some("500,50".to_string()),
            data_protocolo: Some("31/02/2024".to_string()), // impossible date
            ..Default::default()
        },
        RawCaseRow {
            numero_processo: Some("0005555-00.2024.8.13.0024".to_string()),
            valor_total: Some("-".to_string()),
            valor_honorarios: Some("a combinar".to_string()),
            ..Default::default()
        },
    ];

    let normalizer = CaseNormalizer;
    let records = normalizer.normalize_rows(raw_rows);

    for record in &records {
        println!("Processo: {}", record.numero_processo);
        println!("  Estado: {} | Protocolado: {}", record.estado, record.protocolado);
        println!(
            "  Valor Total: {:.2} | Escritório: {:.2} | Honorários: {:.2}",
            record.valor_total, record.valor_escritorio, record.valor_honorarios
        );
        match record.data_protocolo {
            Some(date) => println!("  Data do Protocolo: {}", date),
            None => println!("  Data do Protocolo: (ausente)"),
        }
        println!();
    }

    println!("=== EXPECTED BEHAVIOR ===");
    println!("✅ \"R$ 15.750,90\" -> 15750.90 (symbol and thousands dot stripped)");
    println!("✅ \"05/03/2024\" -> 2024-03-05 (day-first, not May 3rd)");
    println!("✅ \"31/02/2024\" -> absent (impossible date coerced, not an error)");
    println!("✅ \"-\" and \"a combinar\" -> 0.00 (never aborts the table)");
    println!("✅ Missing Estado -> \"N/A\", missing Protocolado -> \"Não\"");

    Ok(())
}
