use anyhow::{Context, Result};
use std::net::IpAddr;

pub const PORT_ENV: &str = "WCD_PORT";
pub const BIND_ENV: &str = "WCD_BIND";

#[derive(Debug, Clone)]
pub struct ServerSettings {
    pub port: u16,
    pub bind_address: IpAddr,
}

impl Default for ServerSettings {
    fn default() -> Self {
        Self {
            port: 8050,
            bind_address: IpAddr::from([0, 0, 0, 0]),
        }
    }
}

#[derive(Debug, Clone)]
pub struct MapSettings {
    pub title: String,
    pub color_scale: String,
    pub location_mode: String,
    pub value_label: String,
    pub top_margin: u32,
}

impl Default for MapSettings {
    fn default() -> Self {
        Self {
            title: "FIFA World Cup Wins by Country".to_string(),
            color_scale: "Plasma".to_string(),
            location_mode: "country names".to_string(),
            value_label: "Times Won".to_string(),
            top_margin: 50,
        }
    }
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub server: ServerSettings,
    pub map: MapSettings,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self::new()
    }
}

impl AppConfig {
    pub fn new() -> Self {
        Self {
            server: ServerSettings::default(),
            map: MapSettings::default(),
        }
    }

    /// Applies `WCD_PORT` and `WCD_BIND` from the process environment.
    pub fn with_env_overrides(self) -> Result<Self> {
        self.with_overrides_from(|key| std::env::var(key).ok())
    }

    pub fn with_overrides_from<F>(mut self, lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(port) = lookup(PORT_ENV) {
            self.server.port = port
                .trim()
                .parse()
                .with_context(|| format!("Invalid {}: {}", PORT_ENV, port))?;
        }
        if let Some(bind) = lookup(BIND_ENV) {
            self.server.bind_address = bind
                .trim()
                .parse()
                .with_context(|| format!("Invalid {}: {}", BIND_ENV, bind))?;
        }
        Ok(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_in(vars: HashMap<&'static str, &'static str>) -> impl Fn(&str) -> Option<String> {
        move |key| vars.get(key).map(|v| v.to_string())
    }

    #[test]
    fn test_defaults_match_original_dashboard() {
        let config = AppConfig::new();
        assert_eq!(config.server.port, 8050);
        assert_eq!(config.map.color_scale, "Plasma");
        assert_eq!(config.map.location_mode, "country names");
    }

    #[test]
    fn test_overrides_applied() {
        let vars = HashMap::from([(PORT_ENV, "9001"), (BIND_ENV, "127.0.0.1")]);
        let config = AppConfig::new().with_overrides_from(lookup_in(vars)).unwrap();

        assert_eq!(config.server.port, 9001);
        assert_eq!(config.server.bind_address, IpAddr::from([127, 0, 0, 1]));
    }

    #[test]
    fn test_invalid_port_is_an_error() {
        let vars = HashMap::from([(PORT_ENV, "not-a-port")]);
        let err = AppConfig::new().with_overrides_from(lookup_in(vars)).unwrap_err();

        assert!(err.to_string().contains(PORT_ENV));
    }
}
