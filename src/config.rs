use std::env;
use std::net::{Ipv4Addr, SocketAddr};

/// Environment variable holding the version reported by `/health`
pub const VERSION_ENV: &str = "APP_VERSION";

/// Version reported when `APP_VERSION` is unset or empty
pub const DEFAULT_VERSION: &str = "1.0.0";

pub const PORT: u16 = 8080;

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub version: String,
}

impl AppConfig {
    pub fn from_env() -> Self {
        Self {
            version: resolve_version(
                env::var_os(VERSION_ENV).map(|raw| raw.to_string_lossy().into_owned()),
            ),
        }
    }

    /// Listen on all interfaces
    pub fn bind_addr(&self) -> SocketAddr {
        SocketAddr::from((Ipv4Addr::UNSPECIFIED, PORT))
    }
}

/// Resolves the reported version, falling back to the default for a missing or empty value
pub fn resolve_version(raw: Option<String>) -> String {
    match raw {
        Some(version) if !version.is_empty() => version,
        _ => DEFAULT_VERSION.to_string(),
    }
}
