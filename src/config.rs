use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use std::path::{Path, PathBuf};
use std::time::Duration;

use anyhow::Context;
use serde::Deserialize;

/// Environment variable naming the YAML config file.
pub const CONFIG_ENV: &str = "PI_IN_THE_SKY_CONFIG";
/// Config file looked up in the working directory when `CONFIG_ENV` is unset.
pub const DEFAULT_CONFIG_FILE: &str = "pi-in-the-sky.yaml";
/// Environment override for the listen address, as `ip:port`.
pub const LISTEN_ENV: &str = "LISTEN";

#[derive(Debug, Clone, PartialEq, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    pub server: ServerConfig,
    pub wifi: WifiConfig,
    pub display: DisplayConfig,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    pub port: u16,
    /// Pending connections queued by the OS while one is being served.
    pub backlog: u32,
    /// Upper bound on the bytes read for one request head.
    pub max_request_bytes: usize,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            port: 80,
            backlog: 1,
            max_request_bytes: 1024,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct WifiConfig {
    /// Network name shown on the error screen.
    pub ssid: String,
    /// Address the device is expected to hold once connected.
    pub address: IpAddr,
    pub connect_timeout_secs: u64,
}

impl Default for WifiConfig {
    fn default() -> Self {
        Self {
            ssid: "status-net".to_string(),
            address: IpAddr::V4(Ipv4Addr::LOCALHOST),
            connect_timeout_secs: 10,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct DisplayConfig {
    pub boot_delay_ms: u64,
    pub retry_delay_ms: u64,
    pub button_poll_ms: u64,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            boot_delay_ms: 2000,
            retry_delay_ms: 2000,
            button_poll_ms: 50,
        }
    }
}

impl Config {
    /// Loads the config file (if any) and applies the `LISTEN` override.
    pub fn load() -> anyhow::Result<Self> {
        let path = std::env::var_os(CONFIG_ENV).map(PathBuf::from).or_else(|| {
            let fallback = Path::new(DEFAULT_CONFIG_FILE);
            fallback.exists().then(|| fallback.to_path_buf())
        });

        let yaml = match &path {
            Some(path) => Some(
                std::fs::read_to_string(path)
                    .with_context(|| format!("reading config file {}", path.display()))?,
            ),
            None => None,
        };

        let listen = std::env::var(LISTEN_ENV).ok();
        let cfg = Self::from_sources(yaml.as_deref(), listen.as_deref())?;

        match &path {
            Some(path) => tracing::info!(path = %path.display(), "Loaded config"),
            None => tracing::info!("No config file, using defaults"),
        }
        Ok(cfg)
    }

    /// Builds a config from YAML text and an optional `ip:port` override.
    pub fn from_sources(yaml: Option<&str>, listen: Option<&str>) -> anyhow::Result<Self> {
        let mut cfg: Config = match yaml {
            Some(text) if !text.trim().is_empty() => {
                serde_yaml::from_str(text).context("parsing config YAML")?
            }
            _ => Config::default(),
        };

        if let Some(listen) = listen {
            let addr: SocketAddr = listen
                .parse()
                .with_context(|| format!("invalid {LISTEN_ENV} address {listen:?}"))?;
            cfg.wifi.address = addr.ip();
            cfg.server.port = addr.port();
        }

        Ok(cfg)
    }

    pub fn listen_addr(&self) -> SocketAddr {
        SocketAddr::new(self.wifi.address, self.server.port)
    }

    pub fn connect_timeout(&self) -> Duration {
        Duration::from_secs(self.wifi.connect_timeout_secs)
    }

    pub fn boot_delay(&self) -> Duration {
        Duration::from_millis(self.display.boot_delay_ms)
    }

    pub fn retry_delay(&self) -> Duration {
        Duration::from_millis(self.display.retry_delay_ms)
    }

    pub fn button_poll(&self) -> Duration {
        Duration::from_millis(self.display.button_poll_ms)
    }
}
