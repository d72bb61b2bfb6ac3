use serde::Serialize;
use thiserror::Error;

pub mod address;

pub use address::{is_base58check_address, validate_address};

/// Failure categories for a wallet lookup against the Tron node.
///
/// Anything the transport layer can throw (timeout, refused connection,
/// garbled body) is folded into `Transport`; no attempt is made to tell
/// those apart. `Unexpected` is reserved for a node that answered but
/// rejected the request at the application level.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TronError {
    #[error("Invalid Tron address format")]
    InvalidAddress,

    #[error("Wallet address not found in Tron network")]
    AccountNotFound,

    #[error("{0}")]
    Transport(String),

    #[error("{0}")]
    Unexpected(String),
}

/// Balance and resource limits reported by the chain for one address.
/// A field is `None` when the node's response omitted it.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct WalletInfo {
    pub wallet_address: String,
    pub balance: Option<i64>,
    pub energy: Option<i64>,
    pub bandwidth: Option<i64>,
}

/// Seam over the chain gateway so handlers can be exercised against a stub.
#[async_trait::async_trait]
pub trait WalletInfoProvider: Send + Sync {
    async fn get_wallet_info(&self, address: &str) -> Result<WalletInfo, TronError>;
}

/// Tron full-node HTTP client
pub struct TronClient {
    api_url: String,
    api_key: Option<String>,
    client: reqwest::Client,
}

impl TronClient {
    pub fn new(api_url: String, api_key: Option<String>) -> Self {
        Self {
            api_url: api_url.trim_end_matches('/').to_string(),
            api_key,
            client: reqwest::Client::new(),
        }
    }

    async fn call(&self, path: &str, wallet_address: &str) -> Result<serde_json::Value, TronError> {
        let request = serde_json::json!({
            "address": wallet_address,
            "visible": true
        });

        let mut builder = self
            .client
            .post(format!("{}/{}", self.api_url, path))
            .json(&request);
        if let Some(key) = &self.api_key {
            builder = builder.header("TRON-PRO-API-KEY", key);
        }

        let response = builder
            .send()
            .await
            .map_err(|e| TronError::Transport(e.to_string()))?
            .error_for_status()
            .map_err(|e| TronError::Transport(e.to_string()))?;

        let body: serde_json::Value = response
            .json()
            .await
            .map_err(|e| TronError::Transport(e.to_string()))?;

        // The node answered but refused the request (e.g. a payload it
        // considers invalid). Not a transport problem, so not retriable
        // as one.
        if let Some(message) = body.get("Error").and_then(|v| v.as_str()) {
            return Err(TronError::Unexpected(message.to_string()));
        }

        Ok(body)
    }
}

#[async_trait::async_trait]
impl WalletInfoProvider for TronClient {
    /// Retrieve balance, energy and bandwidth for a Tron wallet address.
    ///
    /// The address is re-validated here even though the handler already
    /// checked it; the gateway never trusts its caller on format.
    async fn get_wallet_info(&self, wallet_address: &str) -> Result<WalletInfo, TronError> {
        validate_address(wallet_address)?;

        let account = self.call("wallet/getaccount", wallet_address).await?;
        if account_is_missing(&account) {
            return Err(TronError::AccountNotFound);
        }

        let resource = self.call("wallet/getaccountresource", wallet_address).await?;

        tracing::debug!(address = wallet_address, "fetched wallet info from node");
        Ok(wallet_info_from_payloads(wallet_address, &account, &resource))
    }
}

/// The node reports an address with no on-chain account record as an
/// empty JSON object rather than an error.
fn account_is_missing(account: &serde_json::Value) -> bool {
    account.as_object().map(|o| o.is_empty()).unwrap_or(true)
}

fn wallet_info_from_payloads(
    wallet_address: &str,
    account: &serde_json::Value,
    resource: &serde_json::Value,
) -> WalletInfo {
    WalletInfo {
        wallet_address: wallet_address.to_string(),
        balance: account.get("balance").and_then(|v| v.as_i64()),
        energy: resource.get("EnergyLimit").and_then(|v| v.as_i64()),
        bandwidth: resource.get("freeNetLimit").and_then(|v| v.as_i64()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn empty_account_object_means_missing() {
        assert!(account_is_missing(&json!({})));
        assert!(account_is_missing(&json!(null)));
        assert!(!account_is_missing(&json!({"balance": 1})));
    }

    #[test]
    fn payloads_map_onto_wallet_info_fields() {
        let account = json!({"address": "T...", "balance": 9_999_999});
        let resource = json!({"EnergyLimit": 1111, "freeNetLimit": 2222});

        let info = wallet_info_from_payloads("T...", &account, &resource);
        assert_eq!(info.balance, Some(9_999_999));
        assert_eq!(info.energy, Some(1111));
        assert_eq!(info.bandwidth, Some(2222));
    }

    #[test]
    fn omitted_fields_stay_none() {
        // A freshly activated account can have a balance but no resource
        // limits yet; those must come back as null, not zero.
        let account = json!({"create_time": 1_700_000_000});
        let resource = json!({"TotalNetLimit": 43_200_000_000i64});

        let info = wallet_info_from_payloads("T...", &account, &resource);
        assert_eq!(info.balance, None);
        assert_eq!(info.energy, None);
        assert_eq!(info.bandwidth, None);
    }

    #[test]
    fn non_integer_metric_values_are_ignored() {
        let account = json!({"balance": "not-a-number"});
        let resource = json!({"EnergyLimit": 12.5});

        let info = wallet_info_from_payloads("T...", &account, &resource);
        assert_eq!(info.balance, None);
        assert_eq!(info.energy, None);
    }

    #[tokio::test]
    async fn gateway_rejects_malformed_address_before_any_network_call() {
        // Points at an unroutable endpoint; validation must fail first.
        let client = TronClient::new("http://127.0.0.1:1".to_string(), None);
        let err = client.get_wallet_info("123").await.unwrap_err();
        assert_eq!(err, TronError::InvalidAddress);
    }
}
