// src/repositories/skier_repository.rs
//
// Skiers, their subscription (by reference) and assigned pistes (skier_piste).
// `save` links a subscription by id only. `save_with_registrations` writes a
// new skier together with its subscription and registrations in one
// transaction.

use rusqlite::{params, Connection, Row};
use std::sync::Arc;

use super::registration_repository::write_registration;
use super::subscription_repository::write_subscription;
use super::{parse_text_column, CrudRepository};
use crate::db::ConnectionPool;
use crate::domain::registration::Registration;
use crate::domain::skier::Skier;
use crate::domain::subscription::{Subscription, TypeSubscription};
use crate::error::{AppError, AppResult};

pub trait SkierRepository: CrudRepository<Skier> {
    fn find_by_subscription_type(&self, type_sub: TypeSubscription) -> AppResult<Vec<Skier>>;

    /// Persist a skier, the subscription it carries and `registrations`
    /// (linked to the skier's id) atomically. Nothing is kept if any write fails.
    fn save_with_registrations(
        &self,
        skier: &Skier,
        registrations: &[Registration],
    ) -> AppResult<Skier>;
}

const SELECT_SKIER: &str = "SELECT sk.num_skier AS num_skier,
            sk.first_name AS first_name,
            sk.last_name AS last_name,
            sk.date_of_birth AS date_of_birth,
            sk.city AS city,
            sub.num_sub AS sub_num,
            sub.start_date AS sub_start,
            sub.end_date AS sub_end,
            sub.price AS sub_price,
            sub.type_sub AS sub_type
     FROM skier sk
     LEFT JOIN subscription sub ON sub.num_sub = sk.subscription_id";

pub struct SqliteSkierRepository {
    pool: Arc<ConnectionPool>,
}

impl SqliteSkierRepository {
    pub fn new(pool: Arc<ConnectionPool>) -> Self {
        Self { pool }
    }

    /// Map a skier row joined with its subscription; pistes are loaded separately
    fn row_to_skier(row: &Row) -> Result<Skier, rusqlite::Error> {
        let sub_num: Option<i64> = row.get("sub_num")?;
        let subscription = match sub_num {
            Some(num_sub) => {
                let type_sub: String = row.get("sub_type")?;
                Some(Subscription {
                    num_sub: Some(num_sub),
                    start_date: row.get("sub_start")?,
                    end_date: row.get("sub_end")?,
                    price: row.get("sub_price")?,
                    type_sub: parse_text_column(9, &type_sub)?,
                })
            }
            None => None,
        };

        Ok(Skier {
            num_skier: Some(row.get("num_skier")?),
            first_name: row.get("first_name")?,
            last_name: row.get("last_name")?,
            date_of_birth: row.get("date_of_birth")?,
            city: row.get("city")?,
            subscription,
            pistes: Vec::new(),
        })
    }

    fn load_pistes(conn: &Connection, skier_id: i64) -> AppResult<Vec<i64>> {
        let mut stmt = conn.prepare(
            "SELECT piste_id FROM skier_piste
             WHERE skier_id = ?1
             ORDER BY piste_id",
        )?;

        let pistes = stmt
            .query_map(params![skier_id], |row| row.get(0))?
            .collect::<Result<Vec<i64>, _>>()?;

        Ok(pistes)
    }

    /// Upsert the skier row and rewrite its piste links
    fn write_skier(conn: &Connection, skier: &Skier) -> AppResult<i64> {
        let subscription_id = skier.subscription.as_ref().and_then(|s| s.num_sub);

        conn.execute(
            "INSERT INTO skier (num_skier, first_name, last_name, date_of_birth, city, subscription_id)
             VALUES (?1, ?2, ?3, ?4, ?5, ?6)
             ON CONFLICT (num_skier) DO UPDATE SET
                first_name = excluded.first_name,
                last_name = excluded.last_name,
                date_of_birth = excluded.date_of_birth,
                city = excluded.city,
                subscription_id = excluded.subscription_id",
            params![
                skier.num_skier,
                skier.first_name,
                skier.last_name,
                skier.date_of_birth,
                skier.city,
                subscription_id,
            ],
        )?;
        let id = skier.num_skier.unwrap_or_else(|| conn.last_insert_rowid());

        conn.execute("DELETE FROM skier_piste WHERE skier_id = ?1", params![id])?;
        for piste_id in &skier.pistes {
            conn.execute(
                "INSERT INTO skier_piste (skier_id, piste_id) VALUES (?1, ?2)",
                params![id, piste_id],
            )?;
        }

        Ok(id)
    }

    fn query_skiers(
        conn: &Connection,
        sql: &str,
        params: impl rusqlite::Params,
    ) -> AppResult<Vec<Skier>> {
        let mut stmt = conn.prepare(sql)?;

        let mut skiers = stmt
            .query_map(params, Self::row_to_skier)?
            .collect::<Result<Vec<_>, _>>()?;

        for skier in &mut skiers {
            if let Some(id) = skier.num_skier {
                skier.pistes = Self::load_pistes(conn, id)?;
            }
        }

        Ok(skiers)
    }
}

impl CrudRepository<Skier> for SqliteSkierRepository {
    fn save(&self, skier: &Skier) -> AppResult<Skier> {
        let mut conn = self.pool.get()?;
        let tx = conn.transaction()?;

        let id = Self::write_skier(&tx, skier)?;

        tx.commit()?;
        Ok(skier.clone().with_id(id))
    }

    fn find_by_id(&self, id: i64) -> AppResult<Option<Skier>> {
        let conn = self.pool.get()?;

        let sql = format!("{} WHERE sk.num_skier = ?1", SELECT_SKIER);
        let mut stmt = conn.prepare(&sql)?;

        let mut skier = match stmt.query_row(params![id], Self::row_to_skier) {
            Ok(skier) => skier,
            Err(rusqlite::Error::QueryReturnedNoRows) => return Ok(None),
            Err(e) => return Err(AppError::Database(e)),
        };
        skier.pistes = Self::load_pistes(&conn, id)?;

        Ok(Some(skier))
    }

    fn find_all(&self) -> AppResult<Vec<Skier>> {
        let conn = self.pool.get()?;

        let sql = format!("{} ORDER BY sk.num_skier", SELECT_SKIER);
        Self::query_skiers(&conn, &sql, [])
    }

    fn delete_by_id(&self, id: i64) -> AppResult<()> {
        let conn = self.pool.get()?;

        let rows_affected = conn.execute("DELETE FROM skier WHERE num_skier = ?1", params![id])?;

        if rows_affected == 0 {
            return Err(AppError::not_found("Skier", id));
        }

        Ok(())
    }
}

impl SkierRepository for SqliteSkierRepository {
    fn find_by_subscription_type(&self, type_sub: TypeSubscription) -> AppResult<Vec<Skier>> {
        let conn = self.pool.get()?;

        let sql = format!(
            "{} WHERE sub.type_sub = ?1 ORDER BY sk.num_skier",
            SELECT_SKIER
        );
        Self::query_skiers(&conn, &sql, params![type_sub.to_string()])
    }

    fn save_with_registrations(
        &self,
        skier: &Skier,
        registrations: &[Registration],
    ) -> AppResult<Skier> {
        let mut conn = self.pool.get()?;
        let tx = conn.transaction()?;

        let mut saved = skier.clone();
        if let Some(subscription) = saved.subscription.as_mut() {
            let num_sub = write_subscription(&tx, subscription)?;
            subscription.num_sub = Some(num_sub);
        }

        let id = Self::write_skier(&tx, &saved)?;
        for registration in registrations {
            let mut registration = registration.clone();
            registration.assign_skier(id);
            write_registration(&tx, &registration)?;
        }

        // Dropping an uncommitted transaction rolls it back
        tx.commit()?;
        Ok(saved.with_id(id))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::open_memory_database;
    use crate::domain::piste::{Color, Piste};
    use crate::domain::course::{Course, Support, TypeCourse};
    use crate::repositories::{
        RegistrationRepository, SqliteCourseRepository, SqlitePisteRepository,
        SqliteRegistrationRepository, SqliteSubscriptionRepository,
    };
    use chrono::NaiveDate;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_skier_with_subscription_and_pistes() {
        let pool = Arc::new(open_memory_database().unwrap());
        let subscriptions = SqliteSubscriptionRepository::new(pool.clone());
        let pistes = SqlitePisteRepository::new(pool.clone());
        let repo = SqliteSkierRepository::new(pool);

        let sub = subscriptions
            .save(&Subscription::starting(date(2024, 1, 1), 1200.0, TypeSubscription::Annual).unwrap())
            .unwrap();
        let piste = pistes.save(&Piste::new("Piste 1", Color::Red, 900, 30)).unwrap();

        let mut skier = Skier::new("Sami", "Trabelsi", date(1995, 4, 12), "Sousse");
        skier.subscription = Some(sub.clone());
        skier.assign_piste(piste.num_piste.unwrap());

        let saved = repo.save(&skier).unwrap();
        let found = repo.find_by_id(saved.num_skier.unwrap()).unwrap().unwrap();

        assert_eq!(found.subscription, Some(sub));
        assert_eq!(found.pistes, vec![piste.num_piste.unwrap()]);
        assert_eq!(found.date_of_birth, date(1995, 4, 12));
    }

    #[test]
    fn test_find_by_subscription_type() {
        let pool = Arc::new(open_memory_database().unwrap());
        let subscriptions = SqliteSubscriptionRepository::new(pool.clone());
        let repo = SqliteSkierRepository::new(pool);

        let annual = subscriptions
            .save(&Subscription::starting(date(2024, 1, 1), 1200.0, TypeSubscription::Annual).unwrap())
            .unwrap();

        let mut with_pass = Skier::new("Sami", "Trabelsi", date(1995, 4, 12), "Sousse");
        with_pass.subscription = Some(annual);
        repo.save(&with_pass).unwrap();
        repo.save(&Skier::new("Ines", "Haddad", date(2001, 9, 3), "Tunis"))
            .unwrap();

        let found = repo.find_by_subscription_type(TypeSubscription::Annual).unwrap();
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].last_name, "Trabelsi");

        assert!(repo
            .find_by_subscription_type(TypeSubscription::Monthly)
            .unwrap()
            .is_empty());
        assert_eq!(repo.find_all().unwrap().len(), 2);
    }

    #[test]
    fn test_delete_missing_skier() {
        let repo = SqliteSkierRepository::new(Arc::new(open_memory_database().unwrap()));
        assert!(matches!(
            repo.delete_by_id(5),
            Err(AppError::NotFound { entity: "Skier", id: 5 })
        ));
    }

    fn week_of(course_id: i64, week: u32) -> Registration {
        let mut registration = Registration::new(week);
        registration.assign_course(course_id);
        registration
    }

    #[test]
    fn test_save_with_registrations() {
        let pool = Arc::new(open_memory_database().unwrap());
        let course = SqliteCourseRepository::new(pool.clone())
            .save(&Course::new(1, TypeCourse::Individual, Support::Ski, 40.0, 1))
            .unwrap();
        let course_id = course.num_course.unwrap();
        let registrations = SqliteRegistrationRepository::new(pool.clone());
        let repo = SqliteSkierRepository::new(pool);

        let mut skier = Skier::new("Sami", "Trabelsi", date(1995, 4, 12), "Sousse");
        skier.subscription =
            Some(Subscription::starting(date(2024, 1, 1), 100.0, TypeSubscription::Monthly).unwrap());

        let saved = repo
            .save_with_registrations(&skier, &[week_of(course_id, 2), week_of(course_id, 7)])
            .unwrap();
        let num_skier = saved.num_skier.unwrap();

        assert!(saved.subscription.unwrap().num_sub.is_some());
        assert_eq!(
            registrations
                .count_distinct_by_week_skier_course(7, num_skier, course_id)
                .unwrap(),
            1
        );
        assert_eq!(registrations.find_all().unwrap().len(), 2);
    }

    #[test]
    fn test_failed_registration_rolls_back_skier_and_subscription() {
        let pool = Arc::new(open_memory_database().unwrap());
        let course = SqliteCourseRepository::new(pool.clone())
            .save(&Course::new(1, TypeCourse::Individual, Support::Ski, 40.0, 1))
            .unwrap();
        let course_id = course.num_course.unwrap();
        let registrations = SqliteRegistrationRepository::new(pool.clone());
        let subscriptions = SqliteSubscriptionRepository::new(pool.clone());
        let repo = SqliteSkierRepository::new(pool);

        let mut skier = Skier::new("Sami", "Trabelsi", date(1995, 4, 12), "Sousse");
        skier.subscription =
            Some(Subscription::starting(date(2024, 1, 1), 100.0, TypeSubscription::Monthly).unwrap());

        // Week 3 twice violates UNIQUE(num_week, skier_id, course_id)
        let result =
            repo.save_with_registrations(&skier, &[week_of(course_id, 3), week_of(course_id, 3)]);

        assert!(matches!(result, Err(AppError::Database(_))));
        assert!(repo.find_all().unwrap().is_empty());
        assert!(registrations.find_all().unwrap().is_empty());
        assert!(subscriptions.find_all().unwrap().is_empty());
    }
}
