use anyhow::{Context, Result};

#[tokio::main]
async fn main() -> Result<()> {
    wallet_core::init_logging().context("initializing logging")?;

    wallet_core::run().await
}
