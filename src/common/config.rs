// src/common/config.rs
//! Server configuration read from the environment

use axum::http::HeaderValue;
use std::env;
use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use tracing::warn;

const DEFAULT_PORT: u16 = 8085;

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub host: IpAddr,
    pub port: u16,
    pub cors_origins: Vec<HeaderValue>,
}

impl AppConfig {
    pub fn from_env() -> Self {
        Self::from_vars(
            env::var("HOST").ok(),
            env::var("PORT").ok(),
            env::var("CORS_ORIGINS").ok(),
        )
    }

    fn from_vars(host: Option<String>, port: Option<String>, cors: Option<String>) -> Self {
        let host = match host {
            Some(raw) => raw.trim().parse::<IpAddr>().unwrap_or_else(|_| {
                warn!(host = %raw, "Invalid HOST, falling back to 0.0.0.0");
                IpAddr::V4(Ipv4Addr::UNSPECIFIED)
            }),
            None => IpAddr::V4(Ipv4Addr::UNSPECIFIED),
        };

        let port = match port {
            Some(raw) => raw.trim().parse::<u16>().unwrap_or_else(|_| {
                warn!(port = %raw, default = DEFAULT_PORT, "Invalid PORT, using default");
                DEFAULT_PORT
            }),
            None => DEFAULT_PORT,
        };

        let cors_origins = cors
            .unwrap_or_default()
            .split(',')
            .map(str::trim)
            .filter(|origin| !origin.is_empty())
            .filter(|origin| {
                if *origin == "*" {
                    warn!("Wildcard CORS origin is not supported, ignoring");
                    return false;
                }
                true
            })
            .filter_map(|origin| origin.parse().ok())
            .collect();

        Self {
            host,
            port,
            cors_origins,
        }
    }

    pub fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_defaults() {
        let config = AppConfig::from_vars(None, None, None);
        assert_eq!(config.port, 8085);
        assert_eq!(config.socket_addr().to_string(), "0.0.0.0:8085");
        assert!(config.cors_origins.is_empty());
    }

    #[test]
    fn test_config_invalid_port_falls_back() {
        let config = AppConfig::from_vars(None, Some("not-a-port".to_string()), None);
        assert_eq!(config.port, 8085);
    }

    #[test]
    fn test_config_parses_values() {
        let config = AppConfig::from_vars(
            Some("127.0.0.1".to_string()),
            Some("9000".to_string()),
            Some("http://localhost:3000, ,*,http://localhost:5173".to_string()),
        );
        assert_eq!(config.socket_addr().to_string(), "127.0.0.1:9000");
        assert_eq!(config.cors_origins.len(), 2);
    }
}
