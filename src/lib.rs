mod app;
mod args;
pub mod config;
pub mod error;
pub mod nfts;
pub mod price;
pub mod utils;

pub use app::Application;
pub use config::PoapConfig;
pub use error::FetchError;
pub use nfts::poap::PoapProvider;
pub use nfts::{Nft, NftCollection, NftProvider, NftsWithPagesResponse};
pub use price::{PriceDetails, PriceDetailsView};

/// Parses the command line, then runs the selected command.
pub async fn run() -> anyhow::Result<()> {
    let app = Application::init()?;
    app.run().await
}

/// Installs the crate's default `tracing` subscriber.
pub fn init_logging() -> anyhow::Result<()> {
    utils::logging::init_logging()
}
