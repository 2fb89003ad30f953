use serde::{Deserialize, Serialize};

/// Subset of `GET /v1/getinfo` the presentation layer cares about.
#[derive(Serialize, Deserialize, Debug)]
pub struct GetInfo {
    #[serde(default)]
    pub identity_pubkey: String,
    #[serde(default)]
    pub alias: String,
    #[serde(default)]
    pub version: String,
    #[serde(default)]
    pub block_height: u32,
    #[serde(default)]
    pub synced_to_chain: bool,
    #[serde(default)]
    pub num_active_channels: u32,
    #[serde(default)]
    pub num_peers: u32,
}
