use crate::args::{Cli, CollectionArgs, Command, NftsArgs, PriceArgs};
use crate::config::PoapConfig;
use crate::nfts::poap::PoapProvider;
use crate::nfts::NftProvider;
use crate::price::PriceDetails;
use anyhow::{Context, Result};
use clap::Parser;
use serde::Serialize;
use tracing::debug;

pub enum Application {
    Nfts {
        provider: PoapProvider,
        address: String,
        strict: bool,
    },
    Collection {
        provider: PoapProvider,
        address: String,
    },
    Price(PriceDetails),
}

impl Application {
    pub fn init() -> Result<Application> {
        let cli = Cli::parse();

        if let Err(err) = dotenvy::from_filename(&cli.env_file) {
            debug!(env_file = %cli.env_file.display(), "env file not loaded: {err}");
        }

        let application = match cli.cmd {
            Command::Nfts(NftsArgs { address, strict }) => Application::Nfts {
                provider: poap_provider()?,
                address,
                strict,
            },
            Command::Collection(CollectionArgs { address }) => Application::Collection {
                provider: poap_provider()?,
                address,
            },
            Command::Price(args) => Application::Price(price_details(args)),
        };

        Ok(application)
    }

    pub async fn run(&self) -> Result<()> {
        match self {
            Self::Nfts {
                provider,
                address,
                strict,
            } => {
                let page = if *strict {
                    provider
                        .fetch_nfts(address)
                        .await
                        .with_context(|| format!("Failed to fetch POAPs for {address}"))?
                } else {
                    provider.get_nfts(address).await
                };
                print_json(&page)
            }
            Self::Collection { provider, address } => {
                print_json(&provider.get_collections(address).await)
            }
            Self::Price(details) => print_json(&details.render()),
        }
    }
}

fn poap_provider() -> Result<PoapProvider> {
    let config = PoapConfig::from_env()?;
    Ok(PoapProvider::new(config))
}

fn price_details(args: PriceArgs) -> PriceDetails {
    PriceDetails::new(args.amount, args.impact, !args.loading)
}

fn print_json<T: Serialize>(value: &T) -> Result<()> {
    let json = serde_json::to_string_pretty(value).context("Failed to serialize output")?;
    println!("{json}");
    Ok(())
}
