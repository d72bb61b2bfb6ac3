use sqlx::{postgres::PgPoolOptions, PgPool};

use crate::{
    config::Config,
    error::Result,
    models::{NewWalletRecord, WalletRecord},
};

#[derive(Clone)]
pub struct Database {
    pool: PgPool,
}

impl Database {
    pub async fn new(config: &Config) -> anyhow::Result<Self> {
        let pool = PgPoolOptions::new()
            .max_connections(config.database_max_connections)
            .connect(&config.database_url)
            .await?;

        Ok(Self { pool })
    }

    pub async fn run_migrations(&self) -> anyhow::Result<()> {
        // migrations live at the crate root: ./migrations
        sqlx::migrate!("./migrations").run(&self.pool).await?;
        Ok(())
    }

    pub fn pool(&self) -> &PgPool {
        &self.pool
    }

    /// Pool that defers connecting until first use, so handler tests can
    /// build an `AppState` without a running Postgres.
    #[cfg(test)]
    pub(crate) fn connect_lazy(database_url: &str) -> Self {
        let pool = PgPoolOptions::new()
            .max_connections(1)
            .acquire_timeout(std::time::Duration::from_secs(5))
            .connect_lazy(database_url)
            .expect("valid database url");
        Self { pool }
    }
}

// ==================== WALLET REQUEST QUERIES ====================
impl Database {
    /// Append one lookup attempt. The table is insert-only; nothing in the
    /// crate updates or deletes these rows.
    pub async fn create_wallet_record(&self, record: &NewWalletRecord) -> Result<WalletRecord> {
        let row = sqlx::query_as::<_, WalletRecord>(
            r#"
            INSERT INTO wallet_requests
                (wallet_address, balance, energy, bandwidth, success, error_message)
            VALUES ($1, $2, $3, $4, $5, $6)
            RETURNING id, wallet_address, balance, energy, bandwidth,
                      success, error_message, created_at
            "#,
        )
        .bind(&record.wallet_address)
        .bind(record.balance)
        .bind(record.energy)
        .bind(record.bandwidth)
        .bind(record.success)
        .bind(&record.error_message)
        .fetch_one(&self.pool)
        .await?;
        Ok(row)
    }

    /// Most recent first; ties on `created_at` break by `id` so pagination
    /// stays deterministic under concurrent inserts.
    pub async fn get_wallet_records(&self, limit: i64, offset: i64) -> Result<Vec<WalletRecord>> {
        let rows = sqlx::query_as::<_, WalletRecord>(
            "SELECT id, wallet_address, balance, energy, bandwidth,
                    success, error_message, created_at
             FROM wallet_requests
             ORDER BY created_at DESC, id DESC
             OFFSET $1 LIMIT $2",
        )
        .bind(offset)
        .bind(limit)
        .fetch_all(&self.pool)
        .await?;
        Ok(rows)
    }
}
