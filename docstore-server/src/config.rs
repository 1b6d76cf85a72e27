//! Command-line and environment configuration for the server.

use std::{net::SocketAddr, time::Duration};

use clap::{Parser, ValueEnum};
use docstore::actor::{DEFAULT_MAILBOX_CAPACITY, StoreActor, StoreActorBuilder};

/// Which access discipline guards the document map.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Mode {
    /// Every request handler accesses one lock-guarded map directly.
    Lock,
    /// Every request is serialized through a single store actor.
    Actor,
}

#[derive(Debug, Clone, Parser)]
#[command(name = "docstore-server", version, about = "Serve an in-memory document store over HTTP")]
pub struct Config {
    #[arg(long, env = "DOCSTORE_BIND", default_value = "127.0.0.1:8080", help = "Address to listen on")]
    pub bind: SocketAddr,
    #[arg(long, env = "DOCSTORE_MODE", value_enum, default_value_t = Mode::Actor, help = "Access discipline for the document map")]
    pub mode: Mode,
    #[arg(
        long,
        env = "DOCSTORE_MAILBOX_CAPACITY",
        default_value_t = DEFAULT_MAILBOX_CAPACITY,
        help = "Requests that may queue for the store actor before senders wait (actor mode)"
    )]
    pub mailbox_capacity: usize,
    #[arg(
        long,
        env = "DOCSTORE_REQUEST_TIMEOUT_MS",
        help = "Upper bound in milliseconds on waiting for the store actor (actor mode)"
    )]
    pub request_timeout_ms: Option<u64>,
}

impl Config {
    /// Returns an actor builder configured from these options.
    pub fn actor_builder(&self) -> StoreActorBuilder {
        let builder = StoreActor::builder().with_mailbox_capacity(self.mailbox_capacity);

        match self.request_timeout_ms {
            Some(millis) => builder.with_request_timeout(Duration::from_millis(millis)),
            None => builder,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let config = Config::try_parse_from(["docstore-server"]).unwrap();
        assert_eq!(config.mode, Mode::Actor);
        assert_eq!(config.bind, "127.0.0.1:8080".parse().unwrap());
        assert_eq!(config.mailbox_capacity, DEFAULT_MAILBOX_CAPACITY);
        assert_eq!(config.request_timeout_ms, None);
    }

    #[test]
    fn lock_mode_from_flags() {
        let config = Config::try_parse_from([
            "docstore-server",
            "--mode",
            "lock",
            "--bind",
            "0.0.0.0:9000",
            "--request-timeout-ms",
            "250",
        ])
        .unwrap();
        assert_eq!(config.mode, Mode::Lock);
        assert_eq!(config.bind.port(), 9000);
        assert_eq!(config.request_timeout_ms, Some(250));
    }
}
