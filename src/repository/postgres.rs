//! PostgreSQL gateway
//!
//! One generic implementation serves all four tables. The table layout and
//! the struct -> row binding come from [`PgRecord`]; rows are read back
//! through each entity's `FromRow` implementation (see `mapping`).

use std::marker::PhantomData;

use async_trait::async_trait;
use sqlx::{
    postgres::{PgArguments, PgRow},
    query::QueryAs,
    FromRow, Pool, Postgres,
};

use super::{AppointmentGateway, Gateway, Owner};
use crate::{
    error::{AppError, AppResult},
    models::{Appointment, Entity},
};

pub type PgQueryAs<'q, E> = QueryAs<'q, Postgres, E, PgArguments>;

/// Table metadata and column binding for an entity stored in PostgreSQL
pub trait PgRecord: Entity + for<'r> FromRow<'r, PgRow> + Unpin {
    const TABLE: &'static str;
    const ID_COLUMN: &'static str;
    /// Every column except the id, in binding order
    const COLUMNS: &'static [&'static str];

    /// Bind the values of [`Self::COLUMNS`] in order
    fn bind_columns<'q>(&'q self, query: PgQueryAs<'q, Self>) -> PgQueryAs<'q, Self>;
}

fn select_all_sql<E: PgRecord>() -> String {
    format!("SELECT * FROM {} ORDER BY {}", E::TABLE, E::ID_COLUMN)
}

fn select_one_sql<E: PgRecord>() -> String {
    format!("SELECT * FROM {} WHERE {} = $1", E::TABLE, E::ID_COLUMN)
}

fn exists_sql<E: PgRecord>() -> String {
    format!(
        "SELECT EXISTS(SELECT 1 FROM {} WHERE {} = $1)",
        E::TABLE,
        E::ID_COLUMN
    )
}

fn insert_sql<E: PgRecord>() -> String {
    let placeholders: Vec<String> = (1..=E::COLUMNS.len()).map(|i| format!("${}", i)).collect();
    format!(
        "INSERT INTO {} ({}) VALUES ({}) RETURNING *",
        E::TABLE,
        E::COLUMNS.join(", "),
        placeholders.join(", ")
    )
}

fn update_sql<E: PgRecord>() -> String {
    let sets: Vec<String> = E::COLUMNS
        .iter()
        .enumerate()
        .map(|(i, column)| format!("{} = ${}", column, i + 1))
        .collect();
    format!(
        "UPDATE {} SET {} WHERE {} = ${} RETURNING *",
        E::TABLE,
        sets.join(", "),
        E::ID_COLUMN,
        E::COLUMNS.len() + 1
    )
}

fn delete_sql<E: PgRecord>() -> String {
    format!("DELETE FROM {} WHERE {} = $1", E::TABLE, E::ID_COLUMN)
}

pub struct PgGateway<E> {
    pool: Pool<Postgres>,
    _entity: PhantomData<fn() -> E>,
}

impl<E> PgGateway<E> {
    pub fn new(pool: Pool<Postgres>) -> Self {
        Self {
            pool,
            _entity: PhantomData,
        }
    }
}

impl<E> Clone for PgGateway<E> {
    fn clone(&self) -> Self {
        Self::new(self.pool.clone())
    }
}

#[async_trait]
impl<E: PgRecord> Gateway<E> for PgGateway<E> {
    async fn find_all(&self) -> AppResult<Vec<E>> {
        let sql = select_all_sql::<E>();
        let rows = sqlx::query_as::<_, E>(&sql).fetch_all(&self.pool).await?;
        Ok(rows)
    }

    async fn find_by_id(&self, id: i32) -> AppResult<Option<E>> {
        let sql = select_one_sql::<E>();
        let row = sqlx::query_as::<_, E>(&sql)
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;
        Ok(row)
    }

    async fn exists_by_id(&self, id: i32) -> AppResult<bool> {
        let sql = exists_sql::<E>();
        let exists: bool = sqlx::query_scalar(&sql)
            .bind(id)
            .fetch_one(&self.pool)
            .await?;
        Ok(exists)
    }

    async fn save(&self, entity: E) -> AppResult<E> {
        if let Some(id) = entity.id() {
            let sql = update_sql::<E>();
            let updated = entity
                .bind_columns(sqlx::query_as::<_, E>(&sql))
                .bind(id)
                .fetch_optional(&self.pool)
                .await?;
            if let Some(row) = updated {
                tracing::debug!("Updated {} {}", E::NAME, id);
                return Ok(row);
            }
            tracing::debug!("{} {} absent, inserting as new row", E::NAME, id);
        }

        let sql = insert_sql::<E>();
        let row = entity
            .bind_columns(sqlx::query_as::<_, E>(&sql))
            .fetch_one(&self.pool)
            .await?;
        tracing::debug!("Inserted {} {:?}", E::NAME, row.id());
        Ok(row)
    }

    async fn delete_by_id(&self, id: i32) -> AppResult<()> {
        let sql = delete_sql::<E>();
        let result = sqlx::query(&sql).bind(id).execute(&self.pool).await?;
        if result.rows_affected() == 0 {
            return Err(AppError::NotFound(format!("{} {} not found", E::NAME, id)));
        }
        Ok(())
    }
}

#[async_trait]
impl AppointmentGateway for PgGateway<Appointment> {
    async fn find_by_owner(&self, owner: Owner, id: i32) -> AppResult<Vec<Appointment>> {
        let sql = format!(
            "SELECT * FROM {} WHERE {} = $1 ORDER BY {}",
            Appointment::TABLE,
            owner.column(),
            Appointment::ID_COLUMN
        );
        let rows = sqlx::query_as::<_, Appointment>(&sql)
            .bind(id)
            .fetch_all(&self.pool)
            .await?;
        Ok(rows)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Barber, Client};

    #[test]
    fn insert_lists_every_column() {
        assert_eq!(
            insert_sql::<Client>(),
            "INSERT INTO cliente (nombre, telefono) VALUES ($1, $2) RETURNING *"
        );
    }

    #[test]
    fn update_binds_id_after_columns() {
        assert_eq!(
            update_sql::<Appointment>(),
            "UPDATE citas SET fecha = $1, hora = $2, id_barbero = $3, id_cliente = $4, \
             id_servicio = $5 WHERE id_cita = $6 RETURNING *"
        );
    }

    #[test]
    fn lookups_use_id_column() {
        assert_eq!(
            select_one_sql::<Barber>(),
            "SELECT * FROM barbero WHERE id_barbero = $1"
        );
        assert_eq!(
            delete_sql::<Barber>(),
            "DELETE FROM barbero WHERE id_barbero = $1"
        );
        assert_eq!(
            select_all_sql::<Barber>(),
            "SELECT * FROM barbero ORDER BY id_barbero"
        );
    }
}
