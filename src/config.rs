//! Host configuration parsed from environment variables.

use std::net::{IpAddr, Ipv4Addr, SocketAddr};

use leptos::prelude::{LeptosOptions, get_configuration};

use crate::error::ServerError;

pub const DEFAULT_HOST: IpAddr = IpAddr::V4(Ipv4Addr::UNSPECIFIED);
pub const DEFAULT_PORT: u16 = 3000;

#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub addr: SocketAddr,
    pub leptos: LeptosOptions,
}

impl ServerConfig {
    /// Build host config from environment variables.
    ///
    /// Optional:
    /// - `HOST`: listen address, default `0.0.0.0`
    /// - `PORT`: listen port, default 3000
    /// - `LEPTOS_*`: site root, output name, etc. (set by `cargo leptos`)
    ///
    /// # Errors
    ///
    /// Returns [`ServerError::ConfigParse`] for a malformed `HOST`/`PORT` and
    /// [`ServerError::Leptos`] if the Leptos options cannot be loaded.
    pub fn from_env() -> Result<Self, ServerError> {
        let conf = get_configuration(None).map_err(|e| ServerError::Leptos(e.to_string()))?;
        let host = parse_host(std::env::var("HOST").ok().as_deref())?;
        let port = parse_port(std::env::var("PORT").ok().as_deref())?;
        Ok(Self { addr: SocketAddr::new(host, port), leptos: conf.leptos_options })
    }
}

pub(crate) fn parse_host(raw: Option<&str>) -> Result<IpAddr, ServerError> {
    match raw.map(str::trim) {
        None | Some("") => Ok(DEFAULT_HOST),
        Some(value) => value
            .parse()
            .map_err(|_| ServerError::ConfigParse(format!("invalid HOST: {value}"))),
    }
}

pub(crate) fn parse_port(raw: Option<&str>) -> Result<u16, ServerError> {
    match raw.map(str::trim) {
        None | Some("") => Ok(DEFAULT_PORT),
        Some(value) => value
            .parse()
            .map_err(|_| ServerError::ConfigParse(format!("invalid PORT: {value}"))),
    }
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
