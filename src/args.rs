use clap::ValueHint;
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(author, version, about)]
pub struct Cli {
    /// Path to environment file (default: ./.env). Can also use APP_ENV_FILE.
    #[arg(
        long,
        value_hint = ValueHint::FilePath,
        default_value = ".env",
        env = "APP_ENV_FILE",
        global = true
    )]
    pub(crate) env_file: PathBuf,

    #[command(subcommand)]
    pub(crate) cmd: Command,
}

#[derive(Subcommand, Debug)]
pub(crate) enum Command {
    /// List the POAPs held by an address
    Nfts(NftsArgs),

    /// Show the POAP collection summary for an address
    Collection(CollectionArgs),

    /// Render the price details widget for the given inputs
    Price(PriceArgs),
}

#[derive(Args, Debug)]
pub(crate) struct NftsArgs {
    /// Wallet address to look up
    pub(crate) address: String,

    /// Print the failure instead of an empty result when the fetch fails
    #[arg(long)]
    pub(crate) strict: bool,
}

#[derive(Args, Debug)]
pub(crate) struct CollectionArgs {
    /// Wallet address the collection belongs to
    pub(crate) address: String,
}

#[derive(Args, Debug)]
pub(crate) struct PriceArgs {
    /// Amount in the main currency; omit when unknown
    #[arg(long)]
    pub(crate) amount: Option<String>,

    /// Price impact in percent
    #[arg(long, allow_hyphen_values = true)]
    pub(crate) impact: Option<f64>,

    /// Render as if price details are still loading
    #[arg(long)]
    pub(crate) loading: bool,
}
