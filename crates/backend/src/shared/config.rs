use once_cell::sync::OnceCell;
use serde::Deserialize;
use std::path::{Path, PathBuf};

static CONFIG: OnceCell<Config> = OnceCell::new();

/// Dejar la configuración cargada disponible para los handlers
pub fn init_config(config: Config) {
    let _ = CONFIG.set(config);
}

pub fn get_config() -> &'static Config {
    CONFIG.get().expect("Config has not been initialized")
}

#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    pub database: DatabaseConfig,
    #[serde(default)]
    pub apisperu: ApisPeruConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct DatabaseConfig {
    pub path: String,
}

/// Credenciales y URLs de los servicios de apisperu.com
///
/// `consulta_url` es el servicio de consulta DNI/RUC; `facturacion_url` el
/// de envío de comprobantes a SUNAT. Los tokens son bearer tokens.
#[derive(Debug, Deserialize, Clone, Default)]
pub struct ApisPeruConfig {
    #[serde(default = "default_consulta_url")]
    pub consulta_url: String,
    #[serde(default)]
    pub consulta_token: String,
    #[serde(default = "default_facturacion_url")]
    pub facturacion_url: String,
    #[serde(default)]
    pub facturacion_token: String,
}

fn default_consulta_url() -> String {
    "https://dniruc.apisperu.com/api/v1".to_string()
}

fn default_facturacion_url() -> String {
    "https://facturacion.apisperu.com/api/v1".to_string()
}

/// Default configuration embedded in the binary
const DEFAULT_CONFIG: &str = r#"
[database]
path = "target/db/almacen.db"

[apisperu]
consulta_url = "https://dniruc.apisperu.com/api/v1"
consulta_token = ""
facturacion_url = "https://facturacion.apisperu.com/api/v1"
facturacion_token = ""
"#;

/// Load configuration from config.toml file
///
/// Search order:
/// 1. Next to the executable (for production)
/// 2. Falls back to embedded default config
pub fn load_config() -> anyhow::Result<Config> {
    // Try to find config.toml next to the executable
    if let Ok(exe_path) = std::env::current_exe() {
        if let Some(exe_dir) = exe_path.parent() {
            let config_path = exe_dir.join("config.toml");

            if config_path.exists() {
                tracing::info!("Loading config from: {}", config_path.display());
                let contents = std::fs::read_to_string(&config_path)?;
                let config: Config = toml::from_str(&contents)?;
                return Ok(config);
            } else {
                tracing::warn!("config.toml not found at: {}", config_path.display());
            }
        }
    }

    // Fall back to default config
    tracing::info!("Using default embedded configuration");
    let config: Config = toml::from_str(DEFAULT_CONFIG)?;
    Ok(config)
}

/// Get the database file path from configuration
/// Resolves relative paths relative to the executable directory
pub fn get_database_path(config: &Config) -> anyhow::Result<PathBuf> {
    let db_path_str = &config.database.path;
    let db_path = Path::new(db_path_str);

    // If absolute path, use as is
    if db_path.is_absolute() {
        return Ok(db_path.to_path_buf());
    }

    // If relative path, resolve it relative to the executable directory
    if let Ok(exe_path) = std::env::current_exe() {
        if let Some(exe_dir) = exe_path.parent() {
            let resolved_path = exe_dir.join(db_path);
            return Ok(resolved_path);
        }
    }

    // Fallback: use relative to current directory
    Ok(PathBuf::from(db_path_str))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_loads() {
        let config: Result<Config, _> = toml::from_str(DEFAULT_CONFIG);
        assert!(config.is_ok());
        let config = config.unwrap();
        assert_eq!(config.database.path, "target/db/almacen.db");
        assert!(config.apisperu.consulta_url.contains("dniruc"));
    }

    #[test]
    fn test_config_sin_seccion_apisperu() {
        // la sección es opcional; las URLs caen a los valores por defecto
        let config: Config = toml::from_str("[database]\npath = \"x.db\"\n").unwrap();
        assert_eq!(config.apisperu.consulta_token, "");
    }
}
