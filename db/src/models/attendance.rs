//! Attendance scan rows and the scan cooldown policy.
//!
//! Every accepted scan appends a row; the newest row per `uid` is that
//! worker's current presence record and the older rows are its scan history.
//! Scans arriving inside the cooldown window of the newest row are
//! deduplicated without touching the store.

use std::collections::HashSet;

use chrono::{DateTime, Duration, Utc};
use sea_orm::entity::prelude::*;
use sea_orm::{
    ActiveValue::{NotSet, Set},
    DatabaseConnection, QueryFilter, QueryOrder, TransactionTrait,
};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, serde::Serialize)]
#[sea_orm(table_name = "attendance")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub uid: String,
    pub name: String,
    pub timestamp: DateTime<Utc>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

/// Result of applying the cooldown policy to one scan.
#[derive(Debug, Clone, PartialEq)]
pub enum ScanOutcome {
    /// First scan ever seen for this uid.
    Inserted(Model),
    /// Previously-seen uid outside its cooldown; a fresh row was appended.
    Updated(Model),
    /// The newest row for this uid is still inside the cooldown window;
    /// carries that row's timestamp so the caller can report it.
    Deduplicated(DateTime<Utc>),
}

impl Model {
    /// Applies the scan policy for one `(uid, name)` event.
    ///
    /// The lookup and the insert run inside a single transaction, so two
    /// concurrent scans of the same uid cannot both pass the cooldown check:
    /// SQLite serializes the write transactions and the loser re-reads the
    /// winner's row. At most one store mutation happens per call, none in the
    /// deduplicated case.
    pub async fn record_scan(
        db: &DatabaseConnection,
        uid: &str,
        name: &str,
        cooldown: Duration,
    ) -> Result<ScanOutcome, DbErr> {
        let txn = db.begin().await?;
        let now = Utc::now();

        let previous = Entity::find()
            .filter(Column::Uid.eq(uid))
            .order_by_desc(Column::Timestamp)
            .order_by_desc(Column::Id)
            .one(&txn)
            .await?;

        if let Some(prev) = &previous {
            if now - prev.timestamp < cooldown {
                txn.commit().await?;
                return Ok(ScanOutcome::Deduplicated(prev.timestamp));
            }
        }

        let row = ActiveModel {
            id: NotSet,
            uid: Set(uid.to_owned()),
            name: Set(name.to_owned()),
            timestamp: Set(now),
        }
        .insert(&txn)
        .await?;
        txn.commit().await?;

        Ok(if previous.is_some() {
            ScanOutcome::Updated(row)
        } else {
            ScanOutcome::Inserted(row)
        })
    }

    /// Every scan row, newest first.
    pub async fn all(db: &DatabaseConnection) -> Result<Vec<Model>, DbErr> {
        Entity::find()
            .order_by_desc(Column::Timestamp)
            .order_by_desc(Column::Id)
            .all(db)
            .await
    }

    /// One row per uid, the one with the most recent timestamp.
    pub async fn latest_per_uid(db: &DatabaseConnection) -> Result<Vec<Model>, DbErr> {
        let rows = Self::all(db).await?;
        let mut seen = HashSet::new();
        Ok(rows
            .into_iter()
            .filter(|r| seen.insert(r.uid.clone()))
            .collect())
    }

    /// Full scan history for one uid, newest first. Unknown uid yields an
    /// empty list, not an error.
    pub async fn history_for_uid(
        db: &DatabaseConnection,
        uid: &str,
    ) -> Result<Vec<Model>, DbErr> {
        Entity::find()
            .filter(Column::Uid.eq(uid))
            .order_by_desc(Column::Timestamp)
            .order_by_desc(Column::Id)
            .all(db)
            .await
    }
}
