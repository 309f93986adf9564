//! Player record persistence.
//!
//! `ensure` has upsert-on-first-contact semantics: the insert writes
//! the game defaults and `ON CONFLICT DO NOTHING` keeps an existing
//! record untouched, so repeated first contacts are idempotent. All
//! later writes go through `update` (whole mutable state, safe because
//! the caller holds the per-player lock) or `increment_stars` (a
//! single-counter atomic increment).

use chrono::{DateTime, Utc};
use sqlx::PgPool;

use oakgrove_types::{CompanionStatus, PlayerId, PlayerRecord};

use crate::error::DbError;

/// Operations on the `players` table.
pub struct PlayerStore<'a> {
    pool: &'a PgPool,
}

impl<'a> PlayerStore<'a> {
    /// Create a new player store bound to a connection pool.
    pub const fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// Get-or-create the record for `id` with first-contact defaults.
    ///
    /// A fresh identity gets the default record (0 acorns, 0 stars,
    /// level 1, energy 10, healthy companion, one oak, one squirrel).
    /// An existing identity is returned unchanged; the stored display
    /// name is not overwritten.
    ///
    /// # Errors
    ///
    /// Returns [`DbError::Postgres`] if a query fails, or
    /// [`DbError::Corrupt`] if the stored row cannot be decoded.
    pub async fn ensure(
        &self,
        id: PlayerId,
        display_name: Option<&str>,
        now: DateTime<Utc>,
    ) -> Result<PlayerRecord, DbError> {
        let defaults = PlayerRecord::new(id, display_name.map(ToOwned::to_owned), now);

        sqlx::query(
            r"INSERT INTO players
              (id, display_name, acorns, stars, level, energy, last_energy_update,
               companion_status, companion_recovery_at, trees, companions)
              VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11)
              ON CONFLICT (id) DO NOTHING",
        )
        .bind(defaults.id.into_inner())
        .bind(&defaults.display_name)
        .bind(to_db_counter(defaults.acorns))
        .bind(to_db_counter(defaults.stars))
        .bind(to_db_counter(defaults.level))
        .bind(to_db_counter(defaults.energy))
        .bind(defaults.last_energy_update)
        .bind(defaults.companion_status.as_str())
        .bind(defaults.companion_recovery_at)
        .bind(serde_json::to_value(&defaults.trees)?)
        .bind(serde_json::to_value(&defaults.companions)?)
        .execute(self.pool)
        .await?;

        tracing::debug!(player = %id, "Ensured player record");

        self.fetch(id).await?.ok_or_else(|| {
            DbError::Corrupt(format!("player {id} missing immediately after upsert"))
        })
    }

    /// Fetch the record for `id`, if the identity has made contact.
    ///
    /// # Errors
    ///
    /// Returns [`DbError::Postgres`] if the query fails, or
    /// [`DbError::Corrupt`] if the stored row cannot be decoded.
    pub async fn fetch(&self, id: PlayerId) -> Result<Option<PlayerRecord>, DbError> {
        let row = sqlx::query_as::<_, PlayerRow>(
            r"SELECT id, display_name, acorns, stars, level, energy,
                     last_energy_update, companion_status, companion_recovery_at,
                     trees, companions, created_at
              FROM players
              WHERE id = $1",
        )
        .bind(id.into_inner())
        .fetch_optional(self.pool)
        .await?;

        row.map(PlayerRecord::try_from).transpose()
    }

    /// Write the record's full mutable state back.
    ///
    /// The caller must hold the per-player lock: with exclusivity
    /// guaranteed outside, a plain read-modify-write is race-free.
    ///
    /// # Errors
    ///
    /// Returns [`DbError::Postgres`] if the update fails, or
    /// [`DbError::Corrupt`] if the record does not exist.
    pub async fn update(&self, record: &PlayerRecord) -> Result<(), DbError> {
        let result = sqlx::query(
            r"UPDATE players SET
                acorns = $2,
                stars = $3,
                level = $4,
                energy = $5,
                last_energy_update = $6,
                companion_status = $7,
                companion_recovery_at = $8,
                trees = $9,
                companions = $10
              WHERE id = $1",
        )
        .bind(record.id.into_inner())
        .bind(to_db_counter(record.acorns))
        .bind(to_db_counter(record.stars))
        .bind(to_db_counter(record.level))
        .bind(to_db_counter(record.energy))
        .bind(record.last_energy_update)
        .bind(record.companion_status.as_str())
        .bind(record.companion_recovery_at)
        .bind(serde_json::to_value(&record.trees)?)
        .bind(serde_json::to_value(&record.companions)?)
        .execute(self.pool)
        .await?;

        if result.rows_affected() == 0 {
            return Err(DbError::Corrupt(format!(
                "update for player {} matched no row",
                record.id
            )));
        }

        tracing::debug!(player = %record.id, "Updated player record");
        Ok(())
    }

    /// Atomically increment the star counter by one.
    ///
    /// Returns the new star total, or `None` if the identity has never
    /// made contact.
    ///
    /// # Errors
    ///
    /// Returns [`DbError::Postgres`] if the update fails.
    pub async fn increment_stars(&self, id: PlayerId) -> Result<Option<u32>, DbError> {
        let row: Option<(i32,)> =
            sqlx::query_as(r"UPDATE players SET stars = stars + 1 WHERE id = $1 RETURNING stars")
                .bind(id.into_inner())
                .fetch_optional(self.pool)
                .await?;

        Ok(row.map(|(stars,)| from_db_counter(stars)))
    }
}

/// A row from the `players` table.
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct PlayerRow {
    /// Platform-assigned player identity.
    pub id: i64,
    /// Display name captured at first contact.
    pub display_name: Option<String>,
    /// Acorns gathered so far.
    pub acorns: i32,
    /// Stars caught so far.
    pub stars: i32,
    /// Current level.
    pub level: i32,
    /// Current energy.
    pub energy: i32,
    /// When energy was last recalculated.
    pub last_energy_update: DateTime<Utc>,
    /// Companion status string (`healthy` / `injured`).
    pub companion_status: String,
    /// When an injured companion becomes healthy again.
    pub companion_recovery_at: Option<DateTime<Utc>>,
    /// Owned tree identifiers as a JSON array.
    pub trees: serde_json::Value,
    /// Owned companion identifiers as a JSON array.
    pub companions: serde_json::Value,
    /// When the record was created.
    pub created_at: DateTime<Utc>,
}

impl TryFrom<PlayerRow> for PlayerRecord {
    type Error = DbError;

    fn try_from(row: PlayerRow) -> Result<Self, DbError> {
        let companion_status = CompanionStatus::parse(&row.companion_status)
            .map_err(|e| DbError::Corrupt(e.to_string()))?;
        let trees: Vec<String> = serde_json::from_value(row.trees)?;
        let companions: Vec<String> = serde_json::from_value(row.companions)?;

        Ok(Self {
            id: PlayerId::new(row.id),
            display_name: row.display_name,
            acorns: from_db_counter(row.acorns),
            stars: from_db_counter(row.stars),
            level: from_db_counter(row.level),
            energy: from_db_counter(row.energy),
            last_energy_update: row.last_energy_update,
            companion_status,
            companion_recovery_at: row.companion_recovery_at,
            trees,
            companions,
        })
    }
}

/// Narrow a domain counter into the `INTEGER` column type.
fn to_db_counter(value: u32) -> i32 {
    i32::try_from(value).unwrap_or(i32::MAX)
}

/// Widen an `INTEGER` column back into a domain counter.
///
/// Negative values (which the transitions never write) clamp to zero.
fn from_db_counter(value: i32) -> u32 {
    u32::try_from(value).unwrap_or(0)
}
