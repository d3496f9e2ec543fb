use serde::{Deserialize, Serialize};

pub const DEFAULT_ROW_NAME: &str = "result";
pub const DEFAULT_ROW_NAME_HEADER: &str = "_rowName";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Row name given to the single row of a query without FROM.
    pub default_row_name: String,
    /// Label of the row-name column in rendered table results.
    pub row_name_header: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            default_row_name: DEFAULT_ROW_NAME.to_string(),
            row_name_header: DEFAULT_ROW_NAME_HEADER.to_string(),
        }
    }
}

impl Config {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from(default_row_name: &str, row_name_header: &str) -> Self {
        Self {
            default_row_name: default_row_name.to_string(),
            row_name_header: row_name_header.to_string(),
        }
    }

    pub fn with_default_row_name(mut self, name: &str) -> Self {
        self.default_row_name = name.to_string();
        self
    }

    pub fn with_row_name_header(mut self, header: &str) -> Self {
        self.row_name_header = header.to_string();
        self
    }
}

#[cfg(test)]
mod tests {
    use super::Config;

    #[test]
    fn test_config_defaults() {
        let config = Config::default();
        assert_eq!(config.default_row_name, "result");
        assert_eq!(config.row_name_header, "_rowName");
    }

    #[test]
    fn test_config_partial_deserialize() {
        let config: Config = serde_json::from_str(r#"{"default_row_name": "only"}"#).expect("valid config");
        assert_eq!(config.default_row_name, "only");
        assert_eq!(config.row_name_header, "_rowName");
    }
}
