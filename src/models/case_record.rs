use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// One spreadsheet row exactly as it comes off the published CSV.
///
/// Every column is optional text: the sheet is hand-maintained and columns
/// come and go between exports. Missing headers deserialize to `None` via the
/// serde defaults, so nothing downstream ever checks for column presence.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawCaseRow {
    #[serde(rename = "Número do processo", default)]
    pub numero_processo: Option<String>,
    #[serde(rename = "Estado", default)]
    pub estado: Option<String>,
    #[serde(rename = "Protocolado", default)]
    pub protocolado: Option<String>,
    #[serde(rename = "Valor Total", default)]
    pub valor_total: Option<String>,
    #[serde(rename = "Valor Escritório", default)]
    pub valor_escritorio: Option<String>,
    #[serde(rename = "Valor Honorários", default)]
    pub valor_honorarios: Option<String>,
    #[serde(rename = "Valor Principal", default)]
    pub valor_principal: Option<String>,
    #[serde(rename = "Data do Protocolo", default)]
    pub data_protocolo: Option<String>,
    #[serde(rename = "Data MLE/Manifestação", default)]
    pub data_mle_manifestacao: Option<String>,
    #[serde(rename = "Data do recebimento", default)]
    pub data_recebimento: Option<String>,
    #[serde(rename = "Inserido no Astrea", default)]
    pub inserido_no_astrea: Option<String>,
    #[serde(rename = "Pagto nos autos", default)]
    pub pagto_nos_autos: Option<String>,
    #[serde(rename = "MLE / Manifestação", default)]
    pub mle_manifestacao: Option<String>,
    #[serde(rename = "Pagto Recebido", default)]
    pub pagto_recebido: Option<String>,
    #[serde(rename = "cliente atualizado", default)]
    pub cliente_atualizado: Option<String>,
}

/// A fully normalized case row.
///
/// Invariants guaranteed by the normalizer:
/// - currency fields are always well-defined numbers (unparseable input is 0);
/// - date fields are a valid date or `None`, never raw text;
/// - `estado` and `protocolado` are never empty.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CaseRecord {
    pub numero_processo: String,
    pub estado: String,
    pub protocolado: String,
    pub valor_total: f64,
    pub valor_escritorio: f64,
    pub valor_honorarios: f64,
    pub valor_principal: f64,
    pub data_protocolo: Option<NaiveDate>,
    pub data_mle_manifestacao: Option<NaiveDate>,
    pub data_recebimento: Option<NaiveDate>,
    pub inserido_no_astrea: String,
    pub pagto_nos_autos: String,
    pub mle_manifestacao: String,
    pub pagto_recebido: String,
    pub cliente_atualizado: String,
}

impl CaseRecord {
    pub fn foi_protocolado(&self) -> bool {
        self.protocolado == "Sim"
    }
}
