use anyhow::Result;
use school_helper::Config;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();

    let config = Config::load().unwrap_or_else(|e| {
        tracing::warn!(error = %e, "ignoring unusable config, using defaults");
        Config::default().with_env_overrides()
    });

    school_helper::menu::start(config)
}
