use std::time::Duration;

use anyhow::{Context, Result};

pub const DEFAULT_BOOKING_LIST_URL: &str =
    "https://66876cc30bc7155dc017a662.mockapi.io/api/dummy-data/bookingList";
pub const DEFAULT_CONSUMPTION_MASTER_URL: &str =
    "https://6686cb5583c983911b03a7f3.mockapi.io/api/dummy-data/masterJenisKonsumsi";

const DEFAULT_UPSTREAM_TIMEOUT_SECS: u64 = 10;
const DEFAULT_HOST: &str = "0.0.0.0";
const DEFAULT_PORT: u16 = 8000;

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub upstream: UpstreamConfig,
    pub server: ServerConfig,
}

impl AppConfig {
    pub fn new() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds the config from an arbitrary key lookup; `new` passes the process environment.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let timeout_secs = match lookup("UPSTREAM_TIMEOUT_SECS") {
            Some(raw) => raw
                .trim()
                .parse::<u64>()
                .with_context(|| format!("UPSTREAM_TIMEOUT_SECS is not a number: {raw}"))?,
            None => DEFAULT_UPSTREAM_TIMEOUT_SECS,
        };
        let port = match lookup("PORT") {
            Some(raw) => raw
                .trim()
                .parse::<u16>()
                .with_context(|| format!("PORT is not a valid port: {raw}"))?,
            None => DEFAULT_PORT,
        };

        let upstream = UpstreamConfig {
            booking_list_url: lookup("BOOKING_LIST_URL")
                .unwrap_or_else(|| DEFAULT_BOOKING_LIST_URL.into()),
            consumption_master_url: lookup("CONSUMPTION_MASTER_URL")
                .unwrap_or_else(|| DEFAULT_CONSUMPTION_MASTER_URL.into()),
            timeout: Duration::from_secs(timeout_secs),
        };
        let server = ServerConfig {
            host: lookup("HOST").unwrap_or_else(|| DEFAULT_HOST.into()),
            port,
        };

        Ok(Self { upstream, server })
    }
}

#[derive(Debug, Clone)]
pub struct UpstreamConfig {
    pub booking_list_url: String,
    pub consumption_master_url: String,
    pub timeout: Duration,
}

#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}
