use std::env;
use std::net::{IpAddr, SocketAddr};

use anyhow::{Context, Result};

const DEFAULT_PORT: u16 = 3000;
const DEFAULT_FLXPOINT_URL: &str = "https://api.flxpoint.com/listing/parents";

pub struct AppConfig {
    pub listen_addr: SocketAddr,
    pub flxpoint_token: Option<String>,
    pub flxpoint_base_url: String,
}

impl AppConfig {
    pub fn from_env() -> Result<Self> {
        let host: IpAddr = env::var("FLXRELAY_HOST")
            .unwrap_or_else(|_| "127.0.0.1".to_string())
            .parse()
            .context("invalid FLXRELAY_HOST")?;

        let port = parse_port("FLXRELAY_PORT", DEFAULT_PORT)?;

        // An unset or blank token does not block startup; /attributes reports
        // it per request instead.
        let flxpoint_token = env::var("FLXPOINT_TOKEN")
            .ok()
            .filter(|token| !token.trim().is_empty());

        let flxpoint_base_url =
            env::var("FLXPOINT_BASE_URL").unwrap_or_else(|_| DEFAULT_FLXPOINT_URL.to_string());

        Ok(Self {
            listen_addr: SocketAddr::from((host, port)),
            flxpoint_token,
            flxpoint_base_url,
        })
    }

    pub fn listen_addr(&self) -> SocketAddr {
        self.listen_addr
    }
}

fn parse_port(env_key: &str, default: u16) -> Result<u16> {
    let raw = env::var(env_key).unwrap_or_else(|_| default.to_string());
    raw.parse()
        .with_context(|| format!("{env_key} must be a port number"))
}
