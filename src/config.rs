use log::warn;
use std::env;

pub const HOST_VAR: &str = "TAIL_CHASER_HOST";
pub const PORT_VAR: &str = "TAIL_CHASER_PORT";

pub const DEFAULT_HOST: &str = "127.0.0.1";
pub const DEFAULT_PORT: u16 = 8080;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
        }
    }
}

impl ServerConfig {
    pub fn from_env() -> Self {
        Self::from_vars(env::var(HOST_VAR).ok(), env::var(PORT_VAR).ok())
    }

    /// Unset or empty values keep the defaults; a bad port is logged and ignored.
    pub fn from_vars(host: Option<String>, port: Option<String>) -> Self {
        let mut config = Self::default();

        if let Some(host) = host.filter(|h| !h.trim().is_empty()) {
            config.host = host.trim().to_string();
        }

        if let Some(port) = port.filter(|p| !p.trim().is_empty()) {
            match port.trim().parse::<u16>() {
                Ok(p) => config.port = p,
                Err(e) => warn!(
                    "ignoring {}={:?} ({}), using {}",
                    PORT_VAR, port, e, DEFAULT_PORT
                ),
            }
        }

        config
    }

    pub fn address(&self) -> (&str, u16) {
        (self.host.as_str(), self.port)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_when_unset() {
        assert_eq!(ServerConfig::from_vars(None, None), ServerConfig::default());
        assert_eq!(ServerConfig::default().address(), ("127.0.0.1", 8080));
    }

    #[test]
    fn reads_host_and_port() {
        let c = ServerConfig::from_vars(Some("0.0.0.0".into()), Some("9000".into()));
        assert_eq!(c.address(), ("0.0.0.0", 9000));
    }

    #[test]
    fn bad_port_falls_back() {
        let c = ServerConfig::from_vars(None, Some("eighty".into()));
        assert_eq!(c.port, DEFAULT_PORT);

        let c = ServerConfig::from_vars(None, Some("70000".into()));
        assert_eq!(c.port, DEFAULT_PORT);
    }

    #[test]
    fn blank_values_are_ignored() {
        let c = ServerConfig::from_vars(Some("  ".into()), Some("".into()));
        assert_eq!(c, ServerConfig::default());
    }
}
