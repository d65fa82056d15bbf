#![cfg_attr(test, allow(unused_crate_dependencies))]

mod args;
mod server;

use args::Args;
use clap::{crate_version, Parser};

const THREAD_NAME: &str = "gamedex-server";

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let filter = tracing_subscriber::EnvFilter::try_new(&args.log_filter)?;
    tracing_subscriber::fmt().with_env_filter(filter).init();

    tracing::info!("Gamedex GraphQL server {}", crate_version!());

    let runtime = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .thread_name(THREAD_NAME)
        .build()?;

    runtime.block_on(server::serve(args.listen_address))
}
