//! Log subscriber setup.
//!
//! Logs go to stderr so reports on stdout stay clean. `RUST_LOG` takes
//! precedence over `-v`.

use eyre::{Result, eyre};
use tracing_subscriber::EnvFilter;

pub fn init(verbosity: u8) -> Result<()> {
    let default = match verbosity {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init()
        .map_err(|err| eyre!("failed to install log subscriber: {err}"))
}
