//! Serves the handler over plain HTTP, outside the hosting platform.

use hyper::server::conn::AddrStream;
use hyper::service::make_service_fn;
use hyper::Server;

use std::convert::Infallible;
use std::future::Future;
use std::net::SocketAddr;

use crate::Greeter;

/// Environment variable holding the bind address.
pub const ADDR_VAR: &str = "GREETING_ADDR";

pub const DEFAULT_ADDR: &str = "127.0.0.1:3000";

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("invalid {var} {value:?}: {source}")]
    InvalidAddr {
        var: &'static str,
        value: String,
        source: std::net::AddrParseError,
    },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub addr: SocketAddr,
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_value(std::env::var(ADDR_VAR).ok())
    }

    fn from_value(value: Option<String>) -> Result<Self, ConfigError> {
        let value = value.unwrap_or_else(|| DEFAULT_ADDR.to_owned());
        let addr = value.parse().map_err(|source| ConfigError::InvalidAddr {
            var: ADDR_VAR,
            value: value.clone(),
            source,
        })?;
        Ok(Config { addr })
    }
}

/// Binds `addr` and returns the address actually bound together with the
/// future that serves `greeter` on it. Port `0` picks a free port.
///
/// Once `shutdown` completes the server stops accepting connections and the
/// serving future resolves after in-flight requests are answered.
pub fn bind<F>(
    addr: SocketAddr,
    greeter: Greeter,
    shutdown: F,
) -> Result<(SocketAddr, impl Future<Output = Result<(), hyper::Error>>), hyper::Error>
where
    F: Future<Output = ()> + Send + 'static,
{
    let make_service = make_service_fn(move |conn: &AddrStream| {
        tracing::trace!(remote = %conn.remote_addr(), "connection");
        async move { Ok::<_, Infallible>(greeter) }
    });

    let server = Server::try_bind(&addr)?.serve(make_service);
    let addr = server.local_addr();
    Ok((addr, server.with_graceful_shutdown(shutdown)))
}
