// src/repositories/subscription_repository.rs

use chrono::NaiveDate;
use rusqlite::{params, Connection, Row};
use std::sync::Arc;

use super::{parse_text_column, CrudRepository};
use crate::db::ConnectionPool;
use crate::domain::subscription::{Subscription, TypeSubscription};
use crate::error::{AppError, AppResult};

pub trait SubscriptionRepository: CrudRepository<Subscription> {
    /// Subscriptions of one type, oldest start date first
    fn find_by_type_ordered_by_start_date(
        &self,
        type_sub: TypeSubscription,
    ) -> AppResult<Vec<Subscription>>;

    /// Subscriptions whose start date lies in `[start, end]`
    fn find_by_start_date_between(
        &self,
        start: NaiveDate,
        end: NaiveDate,
    ) -> AppResult<Vec<Subscription>>;
}

pub struct SqliteSubscriptionRepository {
    pool: Arc<ConnectionPool>,
}

impl SqliteSubscriptionRepository {
    pub fn new(pool: Arc<ConnectionPool>) -> Self {
        Self { pool }
    }

    fn row_to_subscription(row: &Row) -> Result<Subscription, rusqlite::Error> {
        let type_sub: String = row.get("type_sub")?;

        Ok(Subscription {
            num_sub: Some(row.get("num_sub")?),
            start_date: row.get("start_date")?,
            end_date: row.get("end_date")?,
            price: row.get("price")?,
            type_sub: parse_text_column(4, &type_sub)?,
        })
    }
}

/// Upsert on a caller-provided connection, so it can join a wider transaction
pub(crate) fn write_subscription(conn: &Connection, subscription: &Subscription) -> AppResult<i64> {
    conn.execute(
        "INSERT INTO subscription (num_sub, start_date, end_date, price, type_sub)
         VALUES (?1, ?2, ?3, ?4, ?5)
         ON CONFLICT (num_sub) DO UPDATE SET
            start_date = excluded.start_date,
            end_date = excluded.end_date,
            price = excluded.price,
            type_sub = excluded.type_sub",
        params![
            subscription.num_sub,
            subscription.start_date,
            subscription.end_date,
            subscription.price,
            subscription.type_sub.to_string(),
        ],
    )?;

    Ok(subscription.num_sub.unwrap_or_else(|| conn.last_insert_rowid()))
}

impl CrudRepository<Subscription> for SqliteSubscriptionRepository {
    fn save(&self, subscription: &Subscription) -> AppResult<Subscription> {
        let conn = self.pool.get()?;

        let id = write_subscription(&conn, subscription)?;
        Ok(subscription.clone().with_id(id))
    }

    fn find_by_id(&self, id: i64) -> AppResult<Option<Subscription>> {
        let conn = self.pool.get()?;

        let mut stmt = conn.prepare(
            "SELECT num_sub, start_date, end_date, price, type_sub
             FROM subscription WHERE num_sub = ?1",
        )?;

        match stmt.query_row(params![id], Self::row_to_subscription) {
            Ok(subscription) => Ok(Some(subscription)),
            Err(rusqlite::Error::QueryReturnedNoRows) => Ok(None),
            Err(e) => Err(AppError::Database(e)),
        }
    }

    fn find_all(&self) -> AppResult<Vec<Subscription>> {
        let conn = self.pool.get()?;

        let mut stmt = conn.prepare(
            "SELECT num_sub, start_date, end_date, price, type_sub
             FROM subscription
             ORDER BY num_sub",
        )?;

        let subscriptions = stmt
            .query_map([], Self::row_to_subscription)?
            .collect::<Result<Vec<_>, _>>()?;

        Ok(subscriptions)
    }

    fn delete_by_id(&self, id: i64) -> AppResult<()> {
        let conn = self.pool.get()?;

        let rows_affected =
            conn.execute("DELETE FROM subscription WHERE num_sub = ?1", params![id])?;

        if rows_affected == 0 {
            return Err(AppError::not_found("Subscription", id));
        }

        Ok(())
    }
}

impl SubscriptionRepository for SqliteSubscriptionRepository {
    fn find_by_type_ordered_by_start_date(
        &self,
        type_sub: TypeSubscription,
    ) -> AppResult<Vec<Subscription>> {
        let conn = self.pool.get()?;

        let mut stmt = conn.prepare(
            "SELECT num_sub, start_date, end_date, price, type_sub
             FROM subscription
             WHERE type_sub = ?1
             ORDER BY start_date ASC, num_sub ASC",
        )?;

        let subscriptions = stmt
            .query_map(params![type_sub.to_string()], Self::row_to_subscription)?
            .collect::<Result<Vec<_>, _>>()?;

        Ok(subscriptions)
    }

    fn find_by_start_date_between(
        &self,
        start: NaiveDate,
        end: NaiveDate,
    ) -> AppResult<Vec<Subscription>> {
        let conn = self.pool.get()?;

        let mut stmt = conn.prepare(
            "SELECT num_sub, start_date, end_date, price, type_sub
             FROM subscription
             WHERE start_date BETWEEN ?1 AND ?2
             ORDER BY start_date ASC, num_sub ASC",
        )?;

        let subscriptions = stmt
            .query_map(params![start, end], Self::row_to_subscription)?
            .collect::<Result<Vec<_>, _>>()?;

        Ok(subscriptions)
    }
}
