use serde::Deserialize;
use std::net::{IpAddr, Ipv4Addr};
use std::ops::{Deref, DerefMut};
use std::path::PathBuf;
use std::sync::Arc;

/// Top-level service configuration.
#[derive(Default, Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ApiConfigInner {
    pub server: ServerConfig,
    pub logging: LoggingConfig,
    pub cors: CorsConfig,
    pub orders: OrdersConfig,
    pub shipments: ShipmentsConfig,
}

/// Arc-wrapped config, cheap to clone into every slice.
#[derive(Default, Debug, Clone, Deserialize)]
pub struct ApiConfig {
    #[serde(flatten, default)]
    inner: Arc<ApiConfigInner>,
}

impl Deref for ApiConfig {
    type Target = ApiConfigInner;

    fn deref(&self) -> &Self::Target {
        &self.inner
    }
}

impl DerefMut for ApiConfig {
    fn deref_mut(&mut self) -> &mut ApiConfigInner {
        Arc::make_mut(&mut self.inner)
    }
}

/// HTTP listener.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    pub address: IpAddr,
    pub port: u16,
    pub ssl: Option<SslConfig>,
}

/// PEM certificate/key pair; presence switches the listener to HTTPS.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct SslConfig {
    pub cert: PathBuf,
    pub key: PathBuf,
}

/// Subscriber settings consumed by the server binary.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    pub level: String,
    pub env_filter: Option<String>,
    pub console: bool,
    /// Rolling file sink; no directory means console only.
    pub directory: Option<PathBuf>,
    pub rotation: String,
    pub max_files: usize,
    pub json: bool,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct CorsConfig {
    /// `["*"]` allows any origin.
    pub allow_origins: Vec<String>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct OrdersConfig {
    /// Declared order value per kilogram.
    pub price_per_kg: f64,
    /// Length of the destination leaderboard.
    pub top_destinations: usize,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ShipmentsConfig {
    /// Days added to the creation time for `estimated_delivery`.
    pub default_transit_days: u32,
    /// Weather condition assumed by the offline conditions provider.
    pub default_weather: String,
}

// --- Default ---

impl Default for ServerConfig {
    fn default() -> Self {
        Self { address: IpAddr::V4(Ipv4Addr::UNSPECIFIED), port: 8000, ssl: None }
    }
}

impl Default for SslConfig {
    fn default() -> Self {
        Self { cert: PathBuf::from("cert.pem"), key: PathBuf::from("key.pem") }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_owned(),
            env_filter: None,
            console: true,
            directory: None,
            rotation: "daily".to_owned(),
            max_files: 10,
            json: false,
        }
    }
}

impl Default for CorsConfig {
    fn default() -> Self {
        Self { allow_origins: vec!["*".to_owned()] }
    }
}

impl CorsConfig {
    #[must_use]
    pub fn allows_any_origin(&self) -> bool {
        self.allow_origins.is_empty() || self.allow_origins.iter().any(|origin| origin == "*")
    }
}

impl Default for OrdersConfig {
    fn default() -> Self {
        Self { price_per_kg: 100.0, top_destinations: 5 }
    }
}

impl Default for ShipmentsConfig {
    fn default() -> Self {
        Self { default_transit_days: 5, default_weather: "Clear".to_owned() }
    }
}
