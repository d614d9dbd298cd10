// SPDX-License-Identifier: Apache-2.0

use std::num::NonZeroUsize;
use std::str::FromStr;

use hedera::{
    AccountId,
    Client,
    PrivateKey,
};

use crate::Error;

/// Largest number of characters put in a single file create or append.
pub const DEFAULT_CHUNK_SIZE: NonZeroUsize = match NonZeroUsize::new(5500) {
    Some(it) => it,
    None => unreachable!(),
};

/// Content larger than this many bytes is chunked.
pub const DEFAULT_CHUNK_THRESHOLD: usize = 5500;

const NETWORK_VAR: &str = "HEDERA_NETWORK";
const OPERATOR_ACCOUNT_ID_VAR: &str = "OPERATOR_ACCOUNT_ID";
const OPERATOR_KEY_VAR: &str = "OPERATOR_KEY";

/// Controls how [`ChunkedPublisher`](crate::ChunkedPublisher) splits content.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde_derive::Deserialize))]
#[cfg_attr(feature = "serde", serde(default, rename_all = "camelCase"))]
pub struct PublisherConfig {
    /// Maximum number of characters per chunk.
    pub chunk_size: NonZeroUsize,

    /// Content whose UTF-8 length exceeds this is chunked.
    pub threshold: usize,
}

impl Default for PublisherConfig {
    fn default() -> Self {
        Self { chunk_size: DEFAULT_CHUNK_SIZE, threshold: DEFAULT_CHUNK_THRESHOLD }
    }
}

/// Everything needed to build a [`Client`] that can pay for and sign transactions.
///
/// The client is built once by the caller and passed by reference to every service function.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Network name, as accepted by [`Client::for_name`] (`mainnet`, `testnet`, `previewnet`, `localhost`).
    pub network: String,

    /// The account that pays for transactions.
    pub operator_account_id: AccountId,

    /// The key of the operator account.
    pub operator_key: PrivateKey,
}

impl ClientConfig {
    /// Read the configuration from the process environment.
    ///
    /// `HEDERA_NETWORK` defaults to `testnet`; `OPERATOR_ACCOUNT_ID` and `OPERATOR_KEY` are required.
    ///
    /// # Errors
    /// - [`Error::MissingEnv`] if a required variable is unset.
    /// - [`Error::InvalidConfig`] if a variable fails to parse.
    pub fn from_env() -> crate::Result<Self> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> crate::Result<Self> {
        let network = lookup(NETWORK_VAR).unwrap_or_else(|| "testnet".to_owned());

        let operator_account_id = lookup(OPERATOR_ACCOUNT_ID_VAR)
            .ok_or(Error::MissingEnv(OPERATOR_ACCOUNT_ID_VAR))?;

        let operator_key = lookup(OPERATOR_KEY_VAR).ok_or(Error::MissingEnv(OPERATOR_KEY_VAR))?;

        Self::parse(network, &operator_account_id, &operator_key)
    }

    /// Parse the configuration from a JSON document.
    ///
    /// ```json
    /// { "network": "testnet", "operatorAccountId": "0.0.1001", "operatorKey": "302e..." }
    /// ```
    ///
    /// # Errors
    /// - [`Error::Json`] if the document is malformed.
    /// - [`Error::InvalidConfig`] if the account id or key fails to parse.
    #[cfg(feature = "serde")]
    pub fn from_json(json: &str) -> crate::Result<Self> {
        #[derive(serde_derive::Deserialize)]
        #[serde(rename_all = "camelCase")]
        struct Raw {
            #[serde(default = "default_network")]
            network: String,
            operator_account_id: String,
            operator_key: String,
        }

        fn default_network() -> String {
            "testnet".to_owned()
        }

        let raw: Raw = serde_json::from_str(json)?;

        Self::parse(raw.network, &raw.operator_account_id, &raw.operator_key)
    }

    fn parse(network: String, operator_account_id: &str, operator_key: &str) -> crate::Result<Self> {
        let operator_account_id = AccountId::from_str(operator_account_id.trim())
            .map_err(|source| Error::InvalidConfig { field: "operator_account_id", source })?;

        let operator_key = PrivateKey::from_str(operator_key.trim())
            .map_err(|source| Error::InvalidConfig { field: "operator_key", source })?;

        Ok(Self { network, operator_account_id, operator_key })
    }

    /// Build a client for the configured network with the operator set.
    ///
    /// # Errors
    /// - [`Error::Remote`] if the network name is not recognized.
    pub fn into_client(self) -> crate::Result<Client> {
        let client = Client::for_name(&self.network)?;

        log::debug!("built client for {} with operator `{}`", self.network, self.operator_account_id);

        client.set_operator(self.operator_account_id, self.operator_key);

        Ok(client)
    }
}
