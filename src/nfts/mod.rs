//! Wallet-side NFT representation and the provider seam.
//!
//! Providers translate whatever their upstream API returns into [`Nft`] and
//! [`NftCollection`] so the rest of the wallet never sees provider shapes.

pub mod poap;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Network {
    pub name: String,
    pub base_asset: String,
    #[serde(rename = "chainID")]
    pub chain_id: String,
    pub family: String,
}

impl Network {
    pub fn ethereum() -> Self {
        Self {
            name: "Ethereum".into(),
            base_asset: "ETH".into(),
            chain_id: "1".into(),
            family: "EVM".into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NftAttribute {
    #[serde(rename = "trait")]
    pub trait_name: String,
    pub value: Option<String>,
}

impl NftAttribute {
    pub fn new(trait_name: &str, value: Option<String>) -> Self {
        Self {
            trait_name: trait_name.to_string(),
            value,
        }
    }
}

/// External "view achievement" link for badge-like NFTs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NftAchievement {
    pub url: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Nft {
    pub id: String,
    pub name: Option<String>,
    pub description: Option<String>,
    pub thumbnail: Option<String>,
    pub transfer_date: Option<String>,
    pub attributes: Vec<NftAttribute>,
    #[serde(rename = "collectionID")]
    pub collection_id: String,
    pub contract: String,
    pub owner: String,
    pub network: Network,
    pub achievement: Option<NftAchievement>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NftCollection {
    pub id: String,
    pub name: String,
    pub nft_count: Option<u64>,
    pub owner: String,
    pub network: Network,
    pub floor_price: Option<FloorPrice>,
    pub thumbnail: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FloorPrice {
    pub value: f64,
    pub token: String,
}

/// One page of NFTs. `next_page_url` is `None` when there are no more pages.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NftsWithPagesResponse {
    pub nfts: Vec<Nft>,
    #[serde(rename = "nextPageURL")]
    pub next_page_url: Option<String>,
}

impl NftsWithPagesResponse {
    /// The envelope returned when a fetch fails or nothing is owned.
    pub fn empty() -> Self {
        Self::default()
    }
}

#[async_trait]
pub trait NftProvider: Send + Sync {
    fn name(&self) -> &str;

    /// Lists NFTs owned by `address`. Failures are logged and reported as an
    /// empty page.
    async fn get_nfts(&self, address: &str) -> NftsWithPagesResponse;

    /// Collections this provider groups the address's NFTs into.
    async fn get_collections(&self, address: &str) -> Vec<NftCollection>;
}
