//! POAP provenance adapter.
//!
//! Lists the POAPs held by an address using the scan endpoint
//! (<https://documentation.poap.tech/reference/getactionsscan-5>). The chain
//! is ignored: most POAPs live on Gnosis and a few on Ethereum mainnet, and
//! the wallet shows all of them regardless of where they were minted.

use crate::config::PoapConfig;
use crate::error::FetchError;
use crate::nfts::{
    Network, Nft, NftAchievement, NftAttribute, NftCollection, NftProvider, NftsWithPagesResponse,
};
use crate::utils::fetching::fetch_with_timeout;
use async_trait::async_trait;
use reqwest::header::{HeaderMap, HeaderValue};
use reqwest::{Client, Url};
use serde::Deserialize;
use tracing::{debug, error};

/// POAP has no collections of its own, so every POAP lands in this one.
pub const POAP_COLLECTION_ID: &str = "POAP";
/// Contract addresses are meaningless for POAPs.
pub const POAP_CONTRACT: &str = "poap_contract";

const API_KEY_HEADER: &str = "x-api-key";

/// The part of a POAP event the wallet shows. Other event fields are ignored.
#[derive(Debug, Clone, Deserialize)]
pub struct PoapEvent {
    pub name: Option<String>,
    pub image_url: Option<String>,
    pub country: Option<String>,
    pub city: Option<String>,
    pub description: Option<String>,
    pub year: Option<f64>,
}

/// One entry of the scan response.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PoapNftModel {
    pub event: PoapEvent,
    pub token_id: String,
    pub owner: Option<String>,
    pub chain: Option<String>,
    pub created: Option<String>,
}

/// Maps a scan entry to the wallet representation.
///
/// `owner` is the address that was scanned, not the record's own owner field.
pub fn poap_nft_to_nft(original: PoapNftModel, owner: &str, achievement_url: &str) -> Nft {
    let PoapNftModel {
        token_id,
        created,
        event,
        ..
    } = original;
    let PoapEvent {
        name: event_name,
        image_url: thumbnail,
        description,
        country,
        city,
        year,
    } = event;

    let achievement = NftAchievement {
        url: format!("{achievement_url}{token_id}"),
    };

    Nft {
        id: token_id,
        name: event_name.clone(),
        description,
        thumbnail,
        transfer_date: created,
        attributes: vec![
            NftAttribute::new("Event", event_name),
            NftAttribute::new("Country", country),
            NftAttribute::new("City", city),
            // f64 displays whole numbers without a fraction: 2021.0 -> "2021"
            NftAttribute::new("Year", year.map(|y| y.to_string())),
        ],
        collection_id: POAP_COLLECTION_ID.to_string(),
        contract: POAP_CONTRACT.to_string(),
        owner: owner.to_string(),
        network: Network::ethereum(),
        achievement: Some(achievement),
    }
}

#[derive(Clone)]
pub struct PoapProvider {
    client: Client,
    config: PoapConfig,
}

impl PoapProvider {
    pub fn new(config: PoapConfig) -> Self {
        Self::with_client(Client::new(), config)
    }

    pub fn with_client(client: Client, config: PoapConfig) -> Self {
        Self { client, config }
    }

    fn scan_url(&self, address: &str) -> Result<Url, FetchError> {
        let mut url = self.config.api_url.clone();
        url.path_segments_mut()
            .map_err(|_| FetchError::InvalidUrl(self.config.api_url.to_string()))?
            .pop_if_empty()
            .extend(["actions", "scan", address]);
        Ok(url)
    }

    /// Fetches every POAP held by `address` and hands failures back to the
    /// caller. The scan endpoint does not paginate, so the cursor is always
    /// `None`.
    pub async fn fetch_nfts(&self, address: &str) -> Result<NftsWithPagesResponse, FetchError> {
        let url = self.scan_url(address)?;

        let mut headers = HeaderMap::new();
        headers.insert(API_KEY_HEADER, HeaderValue::from_str(&self.config.api_key)?);

        let response = fetch_with_timeout(&self.client, url, headers, self.config.timeout).await?;
        let body = response.bytes().await.map_err(FetchError::Body)?;

        let records: Vec<PoapNftModel> = serde_json::from_slice(&body)?;
        debug!(%address, count = records.len(), "received POAP scan");

        let nfts = records
            .into_iter()
            .map(|record| poap_nft_to_nft(record, address, &self.config.achievement_url))
            .collect();

        Ok(NftsWithPagesResponse {
            nfts,
            next_page_url: None,
        })
    }

    /// The synthetic collection every POAP of `address` belongs to.
    ///
    /// The scan endpoint reports neither counts nor prices, so those stay
    /// unknown.
    pub fn collection(&self, address: &str) -> NftCollection {
        NftCollection {
            id: POAP_COLLECTION_ID.to_string(),
            name: POAP_COLLECTION_ID.to_string(),
            nft_count: None,
            owner: address.to_string(),
            network: Network::ethereum(),
            floor_price: None,
            // TODO: point at a POAP logo once the wallet ships one
            thumbnail: None,
        }
    }
}

#[async_trait]
impl NftProvider for PoapProvider {
    fn name(&self) -> &str {
        "POAP"
    }

    async fn get_nfts(&self, address: &str) -> NftsWithPagesResponse {
        match self.fetch_nfts(address).await {
            Ok(page) => page,
            Err(err) => {
                error!(provider = self.name(), %address, "Error retrieving NFTs: {err}");
                NftsWithPagesResponse::empty()
            }
        }
    }

    async fn get_collections(&self, address: &str) -> Vec<NftCollection> {
        vec![self.collection(address)]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::DEFAULT_ACHIEVEMENT_URL;
    use serde_json::json;

    fn record(value: serde_json::Value) -> PoapNftModel {
        serde_json::from_value(value).unwrap()
    }

    fn sample() -> serde_json::Value {
        json!({
            "event": {
                "id": 3,
                "fancy_id": "devcon-2021",
                "name": "Devcon",
                "event_url": "https://devcon.org",
                "image_url": "https://assets.poap.xyz/devcon.png",
                "country": "Colombia",
                "city": "Bogota",
                "description": "Attended Devcon",
                "year": 2022,
                "start_date": "11-Oct-2022",
                "end_date": "14-Oct-2022",
                "expiry_date": "14-Nov-2022",
                "supply": 1200
            },
            "tokenId": "4211",
            "owner": "0xrecordowner",
            "chain": "xdai",
            "created": "2022-10-12 10:00:00"
        })
    }

    #[test]
    fn maps_every_field() {
        let nft = poap_nft_to_nft(record(sample()), "0xscanned", DEFAULT_ACHIEVEMENT_URL);

        assert_eq!(nft.id, "4211");
        assert_eq!(nft.name.as_deref(), Some("Devcon"));
        assert_eq!(nft.description.as_deref(), Some("Attended Devcon"));
        assert_eq!(nft.thumbnail.as_deref(), Some("https://assets.poap.xyz/devcon.png"));
        assert_eq!(nft.transfer_date.as_deref(), Some("2022-10-12 10:00:00"));
        assert_eq!(
            nft.attributes,
            vec![
                NftAttribute::new("Event", Some("Devcon".into())),
                NftAttribute::new("Country", Some("Colombia".into())),
                NftAttribute::new("City", Some("Bogota".into())),
                NftAttribute::new("Year", Some("2022".into())),
            ]
        );
        assert_eq!(nft.collection_id, POAP_COLLECTION_ID);
        assert_eq!(nft.contract, POAP_CONTRACT);
        assert_eq!(nft.achievement.unwrap().url, "https://app.poap.xyz/token/4211");
    }

    #[test]
    fn owner_and_network_ignore_record_fields() {
        let nft = poap_nft_to_nft(record(sample()), "0xscanned", DEFAULT_ACHIEVEMENT_URL);

        assert_eq!(nft.owner, "0xscanned");
        assert_eq!(nft.network, Network::ethereum());
    }

    #[test]
    fn missing_year_leaves_year_trait_empty() {
        let mut value = sample();
        value["event"].as_object_mut().unwrap().remove("year");

        let nft = poap_nft_to_nft(record(value), "0xscanned", DEFAULT_ACHIEVEMENT_URL);

        assert_eq!(nft.attributes.len(), 4);
        assert_eq!(nft.attributes[3], NftAttribute::new("Year", None));
    }

    #[test]
    fn missing_descriptive_fields_become_none() {
        let nft = poap_nft_to_nft(
            record(json!({ "tokenId": "1", "event": {} })),
            "0xscanned",
            DEFAULT_ACHIEVEMENT_URL,
        );

        assert!(nft.name.is_none());
        assert!(nft.description.is_none());
        assert!(nft.thumbnail.is_none());
        assert!(nft.transfer_date.is_none());
        assert!(nft.attributes.iter().all(|a| a.value.is_none()));
    }

    #[test]
    fn fractional_year_and_unknown_event_fields_are_accepted() {
        let mut value = sample();
        value["event"]["year"] = json!(2021.0);
        value["event"]["supply"] = json!("unlimited");
        value["event"]["id"] = json!("abc");

        let nft = poap_nft_to_nft(record(value), "0xscanned", DEFAULT_ACHIEVEMENT_URL);

        assert_eq!(nft.attributes[3], NftAttribute::new("Year", Some("2021".into())));
    }

    #[test]
    fn wrong_field_types_are_rejected() {
        let mut value = sample();
        value["event"]["year"] = json!("2022");
        assert!(serde_json::from_value::<PoapNftModel>(value).is_err());

        let mut value = sample();
        value["tokenId"] = json!(4211);
        assert!(serde_json::from_value::<PoapNftModel>(value).is_err());

        assert!(serde_json::from_value::<PoapNftModel>(json!({ "tokenId": "1" })).is_err());
    }

    #[test]
    fn collection_is_constant_shape() {
        let provider = PoapProvider::new(PoapConfig::default());
        let collection = provider.collection("0xscanned");

        assert_eq!(collection.id, POAP_COLLECTION_ID);
        assert_eq!(collection.name, POAP_COLLECTION_ID);
        assert_eq!(collection.owner, "0xscanned");
        assert_eq!(collection.network, Network::ethereum());
        assert!(collection.nft_count.is_none());
        assert!(collection.floor_price.is_none());
        assert!(collection.thumbnail.is_none());
    }

    #[test]
    fn scan_url_appends_address() {
        let provider = PoapProvider::new(PoapConfig::default());

        assert_eq!(
            provider.scan_url("0xabc").unwrap().as_str(),
            "https://api.poap.tech/actions/scan/0xabc"
        );
    }

    #[test]
    fn nft_serializes_with_wallet_field_names() {
        let nft = poap_nft_to_nft(record(sample()), "0xscanned", DEFAULT_ACHIEVEMENT_URL);
        let value = serde_json::to_value(&nft).unwrap();

        assert_eq!(value["collectionID"], "POAP");
        assert_eq!(value["transferDate"], "2022-10-12 10:00:00");
        assert_eq!(value["attributes"][0]["trait"], "Event");
        assert_eq!(value["network"]["chainID"], "1");
    }
}
