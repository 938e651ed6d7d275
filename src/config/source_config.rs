use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SourceConfig {
    pub source: SourceSection,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SourceSection {
    pub name: String,
    pub url: String,
}

impl SourceConfig {
    pub fn from_file(path: &str) -> Result<Self, anyhow::Error> {
        let content = std::fs::read_to_string(path)?;
        let config: SourceConfig = toml::from_str(&content)?;
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_source_config() {
        let raw = r#"
[source]
name = "juros_abusivos"
url = "https://docs.google.com/spreadsheets/d/e/EXAMPLE/pub?output=csv"
"#;
        let config: SourceConfig = toml::from_str(raw).unwrap();
        assert_eq!(config.source.name, "juros_abusivos");
        assert!(config.source.url.ends_with("output=csv"));
    }
}
