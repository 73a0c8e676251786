use crate::error::{BimTrackError, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

pub const DEFAULT_ANALYSIS_URL: &str = "http://localhost:5000/processar-projeto";
pub const DEFAULT_API_BASE_URL: &str = "http://localhost:8081/api";

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Endpoint multipart do serviço de análise
    pub analysis_url: String,
    /// Base da API de autenticação/conta
    pub api_base_url: String,
    /// Pasta do armazenamento local (obras, sessão)
    pub data_dir: Option<PathBuf>,
    pub timeout_seconds: u64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            analysis_url: DEFAULT_ANALYSIS_URL.into(),
            api_base_url: DEFAULT_API_BASE_URL.into(),
            data_dir: None,
            timeout_seconds: 300,
        }
    }
}

impl Config {
    pub fn load() -> Result<Self> {
        let mut config = Self::load_from(&Self::config_path()?)?;
        config.apply_env(|name| std::env::var(name).ok());
        Ok(config)
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        if path.exists() {
            let content = std::fs::read_to_string(path)?;
            let config: Config = serde_json::from_str(&content)?;
            tracing::debug!(path = %path.display(), "configuração carregada");
            Ok(config)
        } else {
            Ok(Self::default())
        }
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }

    pub fn config_path() -> Result<PathBuf> {
        let home = dirs::home_dir()
            .ok_or_else(|| BimTrackError::Config("pasta home não encontrada".into()))?;
        Ok(home.join(".config").join("bimtrack").join("config.json"))
    }

    /// Variáveis de ambiente têm prioridade sobre o arquivo
    pub fn apply_env<F>(&mut self, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(url) = lookup("BIMTRACK_ANALYSIS_URL") {
            self.analysis_url = url;
        }
        if let Some(url) = lookup("BIMTRACK_API_URL") {
            self.api_base_url = url;
        }
        if let Some(dir) = lookup("BIMTRACK_DATA_DIR") {
            self.data_dir = Some(PathBuf::from(dir));
        }
    }

    pub fn data_dir(&self) -> Result<PathBuf> {
        if let Some(dir) = &self.data_dir {
            return Ok(dir.clone());
        }
        let base = dirs::data_dir()
            .ok_or_else(|| BimTrackError::Config("pasta de dados não encontrada".into()))?;
        Ok(base.join("bimtrack"))
    }

    pub fn timeout(&self) -> std::time::Duration {
        std::time::Duration::from_secs(self.timeout_seconds)
    }
}
