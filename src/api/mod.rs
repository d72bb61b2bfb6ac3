pub mod address;
pub mod health;

use std::sync::Arc;

use crate::{config::Config, db::Database, tron::WalletInfoProvider};

/// Shared per-process state: one connection pool, one chain client
/// (constructed once at startup, stateless across requests), immutable
/// config.
#[derive(Clone)]
pub struct AppState {
    pub db: Database,
    pub tron: Arc<dyn WalletInfoProvider>,
    pub config: Config,
}
