use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use crate::tron::WalletInfo;

// ==================== WALLET REQUEST LOG ====================

/// One stored lookup attempt, successful or failed. Immutable once written.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct WalletRecord {
    pub id: i64,
    pub wallet_address: String,
    pub balance: Option<i64>,
    pub energy: Option<i64>,
    pub bandwidth: Option<i64>,
    pub success: bool,
    pub error_message: Option<String>,
    pub created_at: DateTime<Utc>,
}

/// Column values for a row about to be inserted. `id` and `created_at`
/// are assigned by the database.
#[derive(Debug, Clone)]
pub struct NewWalletRecord {
    pub wallet_address: String,
    pub balance: Option<i64>,
    pub energy: Option<i64>,
    pub bandwidth: Option<i64>,
    pub success: bool,
    pub error_message: Option<String>,
}

impl NewWalletRecord {
    /// A successful fetch stores exactly what the chain reported; a field
    /// the node omitted stays null.
    pub fn fetched(info: &WalletInfo) -> Self {
        Self {
            wallet_address: info.wallet_address.clone(),
            balance: info.balance,
            energy: info.energy,
            bandwidth: info.bandwidth,
            success: true,
            error_message: None,
        }
    }

    /// A failed attempt stores zeros for all three metrics (no data was
    /// obtained, zero is the placeholder) together with the cause.
    pub fn failed(wallet_address: &str, error_message: String) -> Self {
        Self {
            wallet_address: wallet_address.to_string(),
            balance: Some(0),
            energy: Some(0),
            bandwidth: Some(0),
            success: false,
            error_message: Some(error_message),
        }
    }
}

// ==================== REQUEST SCHEMAS ====================

#[derive(Debug, Deserialize)]
pub struct WalletIn {
    pub wallet_address: String,
}

#[derive(Debug, Deserialize)]
pub struct RecordsQuery {
    pub limit: Option<i64>,
    pub offset: Option<i64>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn fetched_record_keeps_nulls_from_chain() {
        let info = WalletInfo {
            wallet_address: "TR7NHqjeKQxGTCi8q8ZY4pL8otSzgjLj6t".to_string(),
            balance: Some(9_999_999),
            energy: None,
            bandwidth: Some(2222),
        };
        let record = NewWalletRecord::fetched(&info);
        assert!(record.success);
        assert_eq!(record.balance, Some(9_999_999));
        assert_eq!(record.energy, None);
        assert_eq!(record.error_message, None);
    }

    #[test]
    fn failed_record_stores_zeros_not_nulls() {
        let record = NewWalletRecord::failed("123", "Invalid Tron address format".to_string());
        assert!(!record.success);
        assert_eq!(record.balance, Some(0));
        assert_eq!(record.energy, Some(0));
        assert_eq!(record.bandwidth, Some(0));
        assert_eq!(
            record.error_message.as_deref(),
            Some("Invalid Tron address format")
        );
    }

    #[test]
    fn record_serializes_with_snake_case_fields_and_explicit_nulls() {
        let record = WalletRecord {
            id: 7,
            wallet_address: "TR7NHqjeKQxGTCi8q8ZY4pL8otSzgjLj6t".to_string(),
            balance: Some(1),
            energy: None,
            bandwidth: None,
            success: true,
            error_message: None,
            created_at: Utc.timestamp_opt(1_700_000_000, 0).unwrap(),
        };

        let value = serde_json::to_value(&record).unwrap();
        assert_eq!(value["id"], 7);
        assert_eq!(value["wallet_address"], "TR7NHqjeKQxGTCi8q8ZY4pL8otSzgjLj6t");
        assert_eq!(value["balance"], 1);
        assert!(value["energy"].is_null());
        assert!(value["error_message"].is_null());
        assert_eq!(value["success"], true);
        assert!(value["created_at"].as_str().unwrap().starts_with("2023-11-14T"));
    }
}
