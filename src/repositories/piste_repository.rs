// src/repositories/piste_repository.rs

use rusqlite::{params, Row};
use std::sync::Arc;

use super::{parse_text_column, CrudRepository};
use crate::db::ConnectionPool;
use crate::domain::piste::Piste;
use crate::error::{AppError, AppResult};

pub trait PisteRepository: CrudRepository<Piste> {}

pub struct SqlitePisteRepository {
    pool: Arc<ConnectionPool>,
}

impl SqlitePisteRepository {
    pub fn new(pool: Arc<ConnectionPool>) -> Self {
        Self { pool }
    }

    fn row_to_piste(row: &Row) -> Result<Piste, rusqlite::Error> {
        let color: String = row.get("color")?;

        Ok(Piste {
            num_piste: Some(row.get("num_piste")?),
            name_piste: row.get("name_piste")?,
            color: parse_text_column(2, &color)?,
            length: row.get("length")?,
            slope: row.get("slope")?,
        })
    }
}

impl CrudRepository<Piste> for SqlitePisteRepository {
    fn save(&self, piste: &Piste) -> AppResult<Piste> {
        let conn = self.pool.get()?;

        conn.execute(
            "INSERT INTO piste (num_piste, name_piste, color, length, slope)
             VALUES (?1, ?2, ?3, ?4, ?5)
             ON CONFLICT (num_piste) DO UPDATE SET
                name_piste = excluded.name_piste,
                color = excluded.color,
                length = excluded.length,
                slope = excluded.slope",
            params![
                piste.num_piste,
                piste.name_piste,
                piste.color.to_string(),
                piste.length,
                piste.slope,
            ],
        )?;

        let id = piste.num_piste.unwrap_or_else(|| conn.last_insert_rowid());
        Ok(piste.clone().with_id(id))
    }

    fn find_by_id(&self, id: i64) -> AppResult<Option<Piste>> {
        let conn = self.pool.get()?;

        let mut stmt = conn.prepare(
            "SELECT num_piste, name_piste, color, length, slope
             FROM piste WHERE num_piste = ?1",
        )?;

        match stmt.query_row(params![id], Self::row_to_piste) {
            Ok(piste) => Ok(Some(piste)),
            Err(rusqlite::Error::QueryReturnedNoRows) => Ok(None),
            Err(e) => Err(AppError::Database(e)),
        }
    }

    fn find_all(&self) -> AppResult<Vec<Piste>> {
        let conn = self.pool.get()?;

        let mut stmt = conn.prepare(
            "SELECT num_piste, name_piste, color, length, slope
             FROM piste
             ORDER BY num_piste",
        )?;

        let pistes = stmt
            .query_map([], Self::row_to_piste)?
            .collect::<Result<Vec<_>, _>>()?;

        Ok(pistes)
    }

    fn delete_by_id(&self, id: i64) -> AppResult<()> {
        let conn = self.pool.get()?;

        let rows_affected = conn.execute("DELETE FROM piste WHERE num_piste = ?1", params![id])?;

        if rows_affected == 0 {
            return Err(AppError::not_found("Piste", id));
        }

        Ok(())
    }
}

impl PisteRepository for SqlitePisteRepository {}
