use std::net::SocketAddr;

use clap::Parser;

/// GraphQL API over the in-memory game review catalog.
#[derive(Debug, Parser)]
#[command(name = "gamedex", version)]
pub(crate) struct Args {
    /// IP address and port on which the server listens for incoming
    /// connections.
    #[arg(short, long, env = "GAMEDEX_LISTEN_ADDRESS", default_value = "127.0.0.1:8000")]
    pub listen_address: SocketAddr,
    /// Log filter directives, e.g. `info` or `gamedex=debug,tower_http=warn`.
    #[arg(long = "log", env = "GAMEDEX_LOG", default_value = "info")]
    pub log_filter: String,
}
