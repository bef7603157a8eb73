//! Server configuration from environment variables.

use std::net::SocketAddr;

const DEFAULT_HOST: &str = "0.0.0.0";
const DEFAULT_PORT: u16 = 3000;

/// Allowed CORS origins.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CorsOrigins {
    Any,
    List(Vec<String>),
}

/// Runtime configuration for the HTTP server.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    /// `None` means no CORS layer is installed.
    pub cors: Option<CorsOrigins>,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
            cors: None,
        }
    }
}

impl ServerConfig {
    /// Load from the process environment.
    ///
    /// - `SERVER_HOST` (default `0.0.0.0`)
    /// - `SERVER_PORT`, falling back to `PORT` (default `3000`)
    /// - `CORS_ALLOWED_ORIGINS`: `*` or a comma-separated list
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let host = lookup("SERVER_HOST")
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .unwrap_or_else(|| DEFAULT_HOST.to_string());

        let port = match lookup("SERVER_PORT").or_else(|| lookup("PORT")) {
            Some(raw) => raw.trim().parse().unwrap_or_else(|_| {
                tracing::warn!(value = %raw, default = DEFAULT_PORT, "Invalid server port, using default");
                DEFAULT_PORT
            }),
            None => DEFAULT_PORT,
        };

        let cors = lookup("CORS_ALLOWED_ORIGINS").and_then(|raw| parse_cors_origins(&raw));

        Self { host, port, cors }
    }

    pub fn socket_addr(&self) -> anyhow::Result<SocketAddr> {
        let addr = format!("{}:{}", self.host, self.port).parse()?;
        Ok(addr)
    }
}

fn parse_cors_origins(raw: &str) -> Option<CorsOrigins> {
    let raw = raw.trim();
    if raw.is_empty() {
        return None;
    }
    if raw == "*" {
        return Some(CorsOrigins::Any);
    }

    let origins: Vec<String> = raw
        .split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect();

    if origins.is_empty() {
        None
    } else {
        Some(CorsOrigins::List(origins))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config(vars: &[(&str, &str)]) -> ServerConfig {
        let map: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        ServerConfig::from_lookup(|key| map.get(key).cloned())
    }

    #[test]
    fn defaults_when_unset() {
        assert_eq!(config(&[]), ServerConfig::default());
    }

    #[test]
    fn server_port_wins_over_port() {
        let cfg = config(&[("SERVER_PORT", "8080"), ("PORT", "9090")]);
        assert_eq!(cfg.port, 8080);

        let cfg = config(&[("PORT", "9090")]);
        assert_eq!(cfg.port, 9090);
    }

    #[test]
    fn invalid_port_falls_back_to_default() {
        let cfg = config(&[("SERVER_PORT", "not-a-port")]);
        assert_eq!(cfg.port, DEFAULT_PORT);
    }

    #[test]
    fn cors_wildcard_and_list() {
        assert_eq!(
            config(&[("CORS_ALLOWED_ORIGINS", "*")]).cors,
            Some(CorsOrigins::Any)
        );
        assert_eq!(
            config(&[("CORS_ALLOWED_ORIGINS", "http://a.test, ,http://b.test")]).cors,
            Some(CorsOrigins::List(vec![
                "http://a.test".to_string(),
                "http://b.test".to_string()
            ]))
        );
        assert_eq!(config(&[("CORS_ALLOWED_ORIGINS", " , ")]).cors, None);
        assert_eq!(config(&[("CORS_ALLOWED_ORIGINS", "")]).cors, None);
    }

    #[test]
    fn socket_addr_parses() {
        let cfg = config(&[("SERVER_HOST", "127.0.0.1"), ("SERVER_PORT", "4000")]);
        assert_eq!(cfg.socket_addr().unwrap().to_string(), "127.0.0.1:4000");
    }
}
