use serde::Deserialize;

/// Runtime configuration of the HTTP server.
///
/// Loaded from `config/default.yaml` and `APP_*` environment variables.
#[derive(Clone, Debug, Deserialize)]
pub struct ServerConfig {
    /// Interface the HTTP server binds to.
    pub address: String,
    /// TCP port the HTTP server listens on.
    pub port: u16,
    /// Path of the SQLite database file.
    pub database_url: String,
    /// Directory holding the Tera templates.
    pub templates_dir: String,
    /// Category names created at startup when missing.
    #[serde(default)]
    pub categories: Vec<String>,
}
