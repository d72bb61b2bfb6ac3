/// Application constants

pub const API_VERSION: &str = "v1";

// Tron address format: base58check-encoded 21-byte payload, 0x41 prefix.
pub const TRON_ADDRESS_PREFIX: u8 = 0x41;
pub const TRON_ADDRESS_PAYLOAD_LEN: usize = 21;

// Pagination
pub const DEFAULT_RECORDS_LIMIT: i64 = 10;

// Public Tron HTTP endpoint used when TRON_API_URL is not configured.
pub const DEFAULT_TRON_API_URL: &str = "https://api.trongrid.io";
