#[macro_use]
extern crate tracing;

use anyhow::Result;

use config::LaunchConfig;
use dev_server::Outcome;

mod announce;
mod config;
mod dev_server;

fn init_log() {
    use std::env;
    use tracing_subscriber::{fmt, prelude::*, EnvFilter};

    if env::var("RUST_LOG").is_err() {
        env::set_var("RUST_LOG", "launcher=info");
    }

    tracing_subscriber::registry()
        .with(fmt::layer())
        .with(EnvFilter::from_default_env())
        .init();
}

#[tokio::main]
async fn main() -> Result<()> {
    init_log();

    let config = LaunchConfig::default();

    // VR headsets open the page from another device, so 127.0.0.1 is useless
    // to print. We want the LAN address the OS routes outbound traffic through.
    let host = util::resolve_host(&config.probe_target);
    let url = announce::service_url(&host, config.port);

    print!("{}", announce::banner(&url));

    dev_server::install_http_client(&config).await;

    match dev_server::run(&config).await? {
        Outcome::Interrupted => {
            println!("{}", announce::farewell());
        }
        Outcome::Exited(status) => {
            info!("dev server exited: {}", status);
        }
    }

    Ok(())
}
