use anyhow::Result;
use timedock::config::HostConfig;
use timedock::{logger, ui};

#[tokio::main]
async fn main() -> Result<()> {
    // `timedock --init-config` writes a starter config and exits
    if std::env::args().any(|arg| arg == "--init-config") {
        let path = HostConfig::get_default_config_path()?;
        HostConfig::generate_default_config(&path)?;
        return Ok(());
    }

    let config = HostConfig::load()?;
    logger::init(config.logging.enabled)?;

    ui::run_app(&config).await?;

    Ok(())
}
