use chrono::NaiveDate;
use std::str::FromStr;

use crate::models::{CaseRecord, RawCaseRow};

/// Rule-based normalization of raw spreadsheet rows into typed case records.
///
/// The sheet is maintained by hand in pt-BR locale: currency cells look like
/// `R$ 12.345,67`, dates are day-first, and categorical cells may be blank.
/// Normalization never fails on a cell; bad financial data becomes 0 so it
/// contributes nothing to the sums, and bad dates become absent.
pub struct CaseNormalizer;

impl CaseNormalizer {
    /// Normalize all rows, preserving source order. Row count in == row count out.
    pub fn normalize_rows(&self, raw_rows: Vec<RawCaseRow>) -> Vec<CaseRecord> {
        raw_rows.into_iter().map(|row| self.normalize_row(row)).collect()
    }

    pub fn normalize_row(&self, row: RawCaseRow) -> CaseRecord {
        CaseRecord {
            numero_processo: passthrough(row.numero_processo),
            estado: default_if_blank(row.estado, "N/A"),
            protocolado: default_if_blank(row.protocolado, "Não"),
            valor_total: parse_currency(row.valor_total.as_deref()),
            valor_escritorio: parse_currency(row.valor_escritorio.as_deref()),
            valor_honorarios: parse_currency(row.valor_honorarios.as_deref()),
            valor_principal: parse_currency(row.valor_principal.as_deref()),
            data_protocolo: parse_date_dayfirst(row.data_protocolo.as_deref()),
            data_mle_manifestacao: parse_date_dayfirst(row.data_mle_manifestacao.as_deref()),
            data_recebimento: parse_date_dayfirst(row.data_recebimento.as_deref()),
            inserido_no_astrea: passthrough(row.inserido_no_astrea),
            pagto_nos_autos: passthrough(row.pagto_nos_autos),
            mle_manifestacao: passthrough(row.mle_manifestacao),
            pagto_recebido: passthrough(row.pagto_recebido),
            cliente_atualizado: passthrough(row.cliente_atualizado),
        }
    }
}

/// Clean a pt-BR currency cell and parse it as f64.
///
/// Steps: drop the literal `R$`, remove thousands dots, swap the decimal
/// comma for a dot, trim. Whatever still does not parse (empty cell, "-",
/// leftover text) resolves to exactly 0.0.
pub fn parse_currency(cell: Option<&str>) -> f64 {
    let cleaned = cell
        .unwrap_or("")
        .replace("R$", "")
        .replace('.', "")
        .replace(',', ".");
    f64::from_str(cleaned.trim()).unwrap_or(0.0)
}

/// Parse a day-first date cell (`05/03/2024` is March 5th, not May 3rd).
/// The sheet occasionally carries two-digit years; chrono's `%Y` would read
/// `24` as year 0024, so the format is picked by the width of the year token.
pub fn parse_date_dayfirst(cell: Option<&str>) -> Option<NaiveDate> {
    let text = cell?.trim();
    if text.is_empty() {
        return None;
    }
    let format = match text.rsplit('/').next() {
        Some(year) if year.trim().len() == 2 => "%d/%m/%y",
        _ => "%d/%m/%Y",
    };
    NaiveDate::parse_from_str(text, format).ok()
}

// Blank detection trims, but the stored value stays exactly as the sheet
// wrote it; only truly blank cells get the default.
fn default_if_blank(cell: Option<String>, default: &str) -> String {
    match cell {
        Some(value) if !value.trim().is_empty() => value,
        _ => default.to_string(),
    }
}

fn passthrough(cell: Option<String>) -> String {
    cell.unwrap_or_default()
}
