use chrono::NaiveDate;
use serde::Serialize;

use crate::models::CaseRecord;

/// The dashboard's four headline KPIs.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Aggregates {
    pub valor_total_geral: f64,
    pub total_escritorio: f64,
    pub qtd_processos: usize,
    pub qtd_protocolados: usize,
}

/// One row of the "Top 10 Maiores Valores" ranking table.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RankingEntry {
    pub numero_processo: String,
    pub estado: String,
    pub valor_total: f64,
}

pub const RANKING_SIZE: usize = 10;

/// Compute the KPIs over a filtered view. An empty view yields all zeros.
pub fn aggregate(view: &[CaseRecord]) -> Aggregates {
    Aggregates {
        valor_total_geral: view.iter().map(|r| r.valor_total).sum(),
        total_escritorio: view.iter().map(|r| r.valor_escritorio).sum(),
        qtd_processos: view.len(),
        qtd_protocolados: view.iter().filter(|r| r.foi_protocolado()).count(),
    }
}

/// Rank the view by `valor_total` descending, ties keeping source order,
/// truncated to `limit` entries.
pub fn top_processos(view: &[CaseRecord], limit: usize) -> Vec<RankingEntry> {
    let mut ranked: Vec<&CaseRecord> = view.iter().collect();
    // sort_by is stable, so equal values stay in source order
    ranked.sort_by(|a, b| b.valor_total.total_cmp(&a.valor_total));
    ranked
        .into_iter()
        .take(limit)
        .map(|r| RankingEntry {
            numero_processo: r.numero_processo.clone(),
            estado: r.estado.clone(),
            valor_total: r.valor_total,
        })
        .collect()
}

/// Line-chart series: (data_protocolo, valor_total) pairs for the rows that
/// have a protocol date, sorted by date ascending.
pub fn evolucao_financeira(view: &[CaseRecord]) -> Vec<(NaiveDate, f64)> {
    let mut points: Vec<(NaiveDate, f64)> = view
        .iter()
        .filter_map(|r| r.data_protocolo.map(|date| (date, r.valor_total)))
        .collect();
    points.sort_by_key(|(date, _)| *date);
    points
}

/// Bar-chart series: total value per estado, states in first-appearance order.
pub fn volume_por_estado(view: &[CaseRecord]) -> Vec<(String, f64)> {
    let mut totals: Vec<(String, f64)> = Vec::new();
    for record in view {
        match totals.iter_mut().find(|(estado, _)| *estado == record.estado) {
            Some((_, total)) => *total += record.valor_total,
            None => totals.push((record.estado.clone(), record.valor_total)),
        }
    }
    totals
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
            valor_escritorio: valor / 10.0,
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

    #[test]
    fn test_kpis() {
        let view = vec![
            record("p1", "SP", "Sim", 1000.0),
            record("p2", "RJ", "Não", 500.50),
        ];

        let kpis = aggregate(&view);
        assert_eq!(kpis.valor_total_geral, 1500.50);
        assert_eq!(kpis.total_escritorio, 150.05);
        assert_eq!(kpis.qtd_processos, 2);
        assert_eq!(kpis.qtd_protocolados, 1);
    }

    #[test]
    fn test_empty_view_degrades_gracefully() {
        let kpis = aggregate(&[]);
        assert_eq!(kpis, Aggregates::default());
        assert!(top_processos(&[], RANKING_SIZE).is_empty());
        assert!(evolucao_financeira(&[]).is_empty());
        assert!(volume_por_estado(&[]).is_empty());
    }

    #[test]
    fn test_ranking_order_and_truncation() {
        let view: Vec<CaseRecord> = (0..12)
            .map(|i| record(&format!("p{i}"), "SP", "Sim", f64::from(i * 100)))
            .collect();

        let ranking = top_processos(&view, RANKING_SIZE);
        assert_eq!(ranking.len(), RANKING_SIZE);
        assert_eq!(ranking[0].numero_processo, "p11");
        assert_eq!(ranking[0].valor_total, 1100.0);
        assert_eq!(ranking[9].numero_processo, "p2");
    }

    #[test]
    fn test_ranking_ties_keep_source_order() {
        let view = vec![
            record("first", "SP", "Sim", 100.0),
            record("second", "RJ", "Sim", 100.0),
            record("third", "MG", "Sim", 200.0),
        ];

        let ranking = top_processos(&view, RANKING_SIZE);
        assert_eq!(ranking[0].numero_processo, "third");
        assert_eq!(ranking[1].numero_processo, "first");
        assert_eq!(ranking[2].numero_processo, "second");
    }

    #[test]
    fn test_evolucao_drops_absent_dates_and_sorts() {
        let mut view = vec![
            record("p1", "SP", "Sim", 10.0),
            record("p2", "SP", "Sim", 20.0),
            record("p3", "SP", "Sim", 30.0),
        ];
        view[0].data_protocolo = NaiveDate::from_ymd_opt(2024, 6, 1);
        view[2].data_protocolo = NaiveDate::from_ymd_opt(2024, 1, 15);
        // p2 has no date and must not appear

        let series = evolucao_financeira(&view);
        assert_eq!(series.len(), 2);
        assert_eq!(series[0], (NaiveDate::from_ymd_opt(2024, 1, 15).unwrap(), 30.0));
        assert_eq!(series[1], (NaiveDate::from_ymd_opt(2024, 6, 1).unwrap(), 10.0));
    }

    #[test]
    fn test_volume_por_estado_groups_sums() {
        let view = vec![
            record("p1", "SP", "Sim", 100.0),
            record("p2", "RJ", "Sim", 50.0),
            record("p3", "SP", "Sim", 25.0),
        ];

        let series = volume_por_estado(&view);
        assert_eq!(
            series,
            vec![("SP".to_string(), 125.0), ("RJ".to_string(), 50.0)]
        );
    }
}
