use crate::utils::error::{Result, SubmitError};
use crate::utils::validation::{validate_url, Validate};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Endpoint profile loaded from a TOML file, e.g.:
///
/// ```toml
/// [endpoint]
/// url = "https://staging.example.com/submit-order"
/// timeout_seconds = 30
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EndpointProfile {
    pub endpoint: EndpointSection,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EndpointSection {
    pub url: String,
    pub timeout_seconds: Option<u64>,
}

impl EndpointProfile {
    /// 從 TOML 檔案載入設定檔
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(SubmitError::IoError)?;
        Self::from_toml_str(&content)
    }

    /// 從 TOML 字串解析設定檔
    pub fn from_toml_str(content: &str) -> Result<Self> {
        // 處理環境變數替換
        let processed_content = Self::substitute_env_vars(content)?;

        toml::from_str(&processed_content).map_err(|e| SubmitError::ConfigError {
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// 替換環境變數 (例如 ${API_BASE})，未定義的變數原樣保留
    fn substitute_env_vars(content: &str) -> Result<String> {
        use regex::Regex;
        let re = Regex::new(r"\$\{([^}]+)\}").unwrap();

        let result = re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        Ok(result.to_string())
    }
}

impl Validate for EndpointProfile {
    fn validate(&self) -> Result<()> {
        validate_url("endpoint.url", &self.endpoint.url)
    }
}
