use chrono::NaiveDate;
use serde::Serialize;
use std::collections::HashSet;

use crate::models::CaseRecord;

/// Filter on a free-form status column: either everything or one exact value.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub enum StatusFilter {
    #[default]
    All,
    Only(String),
}

impl StatusFilter {
    fn matches(&self, value: &str) -> bool {
        match self {
            StatusFilter::All => true,
            StatusFilter::Only(wanted) => value == wanted,
        }
    }
}

/// Inclusive `[start, end]` date bound.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct DateRange {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

impl DateRange {
    /// A row with an absent date never matches an active range.
    fn matches(&self, value: Option<NaiveDate>) -> bool {
        match value {
            Some(date) => date >= self.start && date <= self.end,
            None => false,
        }
    }
}

/// The sidebar state: every active criterion must hold for a row to pass.
///
/// `estados` and `protocolado` are literal membership sets. An empty set
/// matches nothing; callers that want "everything" seed the full domain with
/// [`FilterSelections::all_for`], the way the dashboard seeds its
/// multiselects on first render.
#[derive(Debug, Clone, Default, Serialize)]
pub struct FilterSelections {
    pub estados: HashSet<String>,
    pub protocolado: HashSet<String>,
    pub inserido_no_astrea: StatusFilter,
    pub pagto_nos_autos: StatusFilter,
    pub mle_manifestacao: StatusFilter,
    pub pagto_recebido: StatusFilter,
    pub cliente_atualizado: StatusFilter,
    pub data_protocolo: Option<DateRange>,
    pub data_mle_manifestacao: Option<DateRange>,
    pub data_recebimento: Option<DateRange>,
}

impl FilterSelections {
    /// Selections that pass every row of `table`: full estado/protocolado
    /// domains, all statuses, no date bounds.
    pub fn all_for(table: &[CaseRecord]) -> Self {
        FilterSelections {
            estados: table.iter().map(|r| r.estado.clone()).collect(),
            protocolado: table.iter().map(|r| r.protocolado.clone()).collect(),
            ..Default::default()
        }
    }

    fn matches(&self, record: &CaseRecord) -> bool {
        self.estados.contains(&record.estado)
            && self.protocolado.contains(&record.protocolado)
            && self.inserido_no_astrea.matches(&record.inserido_no_astrea)
            && self.pagto_nos_autos.matches(&record.pagto_nos_autos)
            && self.mle_manifestacao.matches(&record.mle_manifestacao)
            && self.pagto_recebido.matches(&record.pagto_recebido)
            && self.cliente_atualizado.matches(&record.cliente_atualizado)
            && self
                .data_protocolo
                .map_or(true, |range| range.matches(record.data_protocolo))
            && self
                .data_mle_manifestacao
                .map_or(true, |range| range.matches(record.data_mle_manifestacao))
            && self
                .data_recebimento
                .map_or(true, |range| range.matches(record.data_recebimento))
    }
}

/// Derive the filtered view: a fresh table with only the matching rows, in
/// source order. Pure; the input table is untouched.
pub fn filter(table: &[CaseRecord], selections: &FilterSelections) -> Vec<CaseRecord> {
    table
        .iter()
        .filter(|record| selections.matches(record))
        .cloned()
        .collect()
}

/// Distinct estado values of the unfiltered table, sorted, for the sidebar.
pub fn estado_options(table: &[CaseRecord]) -> Vec<String> {
    let mut options = distinct(table, |r| Some(r.estado.as_str()));
    options.sort();
    options
}

/// Distinct protocolado values in first-appearance order.
pub fn protocolado_options(table: &[CaseRecord]) -> Vec<String> {
    distinct(table, |r| Some(r.protocolado.as_str()))
}

/// Distinct non-empty values of one status column, first-appearance order.
pub fn status_options<F>(table: &[CaseRecord], column: F) -> Vec<String>
where
    F: Fn(&CaseRecord) -> &str,
{
    distinct(table, |r| {
        let value = column(r);
        (!value.is_empty()).then_some(value)
    })
}

fn distinct<'a, F>(table: &'a [CaseRecord], extract: F) -> Vec<String>
where
    F: Fn(&'a CaseRecord) -> Option<&'a str>,
{
    let mut seen = HashSet::new();
    table
        .iter()
        .filter_map(|record| extract(record))
        .filter(|value| seen.insert(value.to_string()))
        .map(|value| value.to_string())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(numero: &str, estado: &str, protocolado: &str, valor: f64) -> CaseRecord {
        CaseRecord {
            numero_processo: numero.to_string(),
            estado: estado.to_string(),
            protocolado: protocolado.to_string(),
            valor_total: valor,
            valor_escritorio: 0.0,
            valor_honorarios: 0.0,
            valor_principal: 0.0,
            data_protocolo: None,
            data_mle_manifestacao: None,
            data_recebimento: None,
            inserido_no_astrea: String::new(),
            pagto_nos_autos: String::new(),
            mle_manifestacao: String::new(),
            pagto_recebido: String::new(),
            cliente_atualizado: String::new(),
        }
    }

    fn sample_table() -> Vec<CaseRecord> {
        vec![
            record("p1", "SP", "Sim", 1000.0),
            record("p2", "RJ", "Não", 500.50),
            record("p3", "SP", "Não", 250.0),
            record("p4", "N/A", "Não", 0.0),
        ]
    }

    #[test]
    fn test_state_membership() {
        let table = sample_table();
        let mut selections = FilterSelections::all_for(&table);
        selections.estados = HashSet::from(["SP".to_string()]);

        let view = filter(&table, &selections);
        assert_eq!(view.len(), 2);
        assert_eq!(view[0].numero_processo, "p1");
        assert_eq!(view[1].numero_processo, "p3");
    }

    #[test]
    fn test_empty_selection_matches_nothing() {
        let table = sample_table();
        let selections = FilterSelections::default();
        assert!(filter(&table, &selections).is_empty());
    }

    #[test]
    fn test_all_for_passes_every_row() {
        let table = sample_table();
        let selections = FilterSelections::all_for(&table);
        assert_eq!(filter(&table, &selections).len(), table.len());
    }

    #[test]
    fn test_na_state_is_filterable() {
        let table = sample_table();
        let mut selections = FilterSelections::all_for(&table);

        selections.estados = HashSet::from(["N/A".to_string()]);
        let view = filter(&table, &selections);
        assert_eq!(view.len(), 1);
        assert_eq!(view[0].numero_processo, "p4");

        selections.estados = HashSet::from(["SP".to_string(), "RJ".to_string()]);
        let view = filter(&table, &selections);
        assert!(view.iter().all(|r| r.estado != "N/A"));
    }

    #[test]
    fn test_status_filter_exact_match() {
        let mut table = sample_table();
        table[0].pagto_recebido = "Sim".to_string();
        table[1].pagto_recebido = "Parcial".to_string();

        let mut selections = FilterSelections::all_for(&table);
        selections.pagto_recebido = StatusFilter::Only("Parcial".to_string());

        let view = filter(&table, &selections);
        assert_eq!(view.len(), 1);
        assert_eq!(view[0].numero_processo, "p2");
    }

    #[test]
    fn test_date_range_excludes_absent_dates() {
        let mut table = sample_table();
        table[0].data_protocolo = NaiveDate::from_ymd_opt(2024, 3, 5);
        table[1].data_protocolo = NaiveDate::from_ymd_opt(2024, 6, 1);
        // p3 and p4 keep data_protocolo = None

        let mut selections = FilterSelections::all_for(&table);
        selections.data_protocolo = Some(DateRange {
            start: NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
            end: NaiveDate::from_ymd_opt(2024, 3, 31).unwrap(),
        });

        let view = filter(&table, &selections);
        assert_eq!(view.len(), 1);
        assert_eq!(view[0].numero_processo, "p1");
    }

    #[test]
    fn test_filter_is_pure() {
        let table = sample_table();
        let before = table.clone();
        let mut selections = FilterSelections::all_for(&table);
        selections.protocolado = HashSet::from(["Sim".to_string()]);

        let first = filter(&table, &selections);
        let second = filter(&table, &selections);
        assert_eq!(first, second);
        assert_eq!(table, before);
    }

    #[test]
    fn test_option_lists() {
        let table = sample_table();
        assert_eq!(estado_options(&table), vec!["N/A", "RJ", "SP"]);
        assert_eq!(protocolado_options(&table), vec!["Sim", "Não"]);

        let mut table = table;
        table[2].pagto_recebido = "Sim".to_string();
        table[0].pagto_recebido = "Sim".to_string();
        assert_eq!(
            status_options(&table, |r| r.pagto_recebido.as_str()),
            vec!["Sim"]
        );
    }
}
