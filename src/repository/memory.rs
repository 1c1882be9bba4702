//! In-memory gateway
//!
//! All four tables live in one arena behind a single lock. Rows are keyed by
//! id and relations are resolved by id lookup. The same rules the SQL schema
//! enforces are applied here: column lengths, foreign keys on write and
//! `ON DELETE RESTRICT` for referenced rows.

use std::{collections::BTreeMap, marker::PhantomData, sync::Arc};

use async_trait::async_trait;
use tokio::sync::RwLock;
use validator::Validate;

use super::{AppointmentGateway, Gateway, Owner};
use crate::{
    error::{AppError, AppResult},
    models::{Appointment, Barber, Client, Entity, Service},
};

/// One table: rows by id plus the identity counter
#[derive(Debug)]
pub struct Table<E> {
    rows: BTreeMap<i32, E>,
    last_id: i32,
}

impl<E> Default for Table<E> {
    fn default() -> Self {
        Self {
            rows: BTreeMap::new(),
            last_id: 0,
        }
    }
}

impl<E> Table<E> {
    fn next_id(&mut self) -> i32 {
        self.last_id += 1;
        self.last_id
    }

    fn contains(&self, id: i32) -> bool {
        self.rows.contains_key(&id)
    }
}

#[derive(Debug, Default)]
pub struct Tables {
    barbers: Table<Barber>,
    clients: Table<Client>,
    services: Table<Service>,
    appointments: Table<Appointment>,
}

impl Tables {
    fn referenced_by_appointments(&self, owner: Owner, id: i32) -> bool {
        self.appointments
            .rows
            .values()
            .any(|appointment| owner.owns(appointment, id))
    }
}

#[derive(Debug, Default)]
pub struct MemoryDatabase {
    tables: RwLock<Tables>,
}

/// Where an entity lives in the arena and which relations guard it
pub trait MemoryRecord: Entity {
    fn table(tables: &Tables) -> &Table<Self>;

    fn table_mut(tables: &mut Tables) -> &mut Table<Self>;

    /// Reject rows pointing at ids that do not exist
    fn check_references(&self, _tables: &Tables) -> AppResult<()> {
        Ok(())
    }

    /// Whether other rows still point at the row with this id
    fn is_referenced(_id: i32, _tables: &Tables) -> bool {
        false
    }
}

impl MemoryRecord for Barber {
    fn table(tables: &Tables) -> &Table<Self> {
        &tables.barbers
    }

    fn table_mut(tables: &mut Tables) -> &mut Table<Self> {
        &mut tables.barbers
    }

    fn is_referenced(id: i32, tables: &Tables) -> bool {
        tables.referenced_by_appointments(Owner::Barber, id)
    }
}

impl MemoryRecord for Client {
    fn table(tables: &Tables) -> &Table<Self> {
        &tables.clients
    }

    fn table_mut(tables: &mut Tables) -> &mut Table<Self> {
        &mut tables.clients
    }

    fn is_referenced(id: i32, tables: &Tables) -> bool {
        tables.referenced_by_appointments(Owner::Client, id)
    }
}

impl MemoryRecord for Service {
    fn table(tables: &Tables) -> &Table<Self> {
        &tables.services
    }

    fn table_mut(tables: &mut Tables) -> &mut Table<Self> {
        &mut tables.services
    }

    fn is_referenced(id: i32, tables: &Tables) -> bool {
        tables.referenced_by_appointments(Owner::Service, id)
    }
}

impl MemoryRecord for Appointment {
    fn table(tables: &Tables) -> &Table<Self> {
        &tables.appointments
    }

    fn table_mut(tables: &mut Tables) -> &mut Table<Self> {
        &mut tables.appointments
    }

    fn check_references(&self, tables: &Tables) -> AppResult<()> {
        let missing = if !tables.barbers.contains(self.barber.id) {
            Some((Owner::Barber, self.barber.id))
        } else if !tables.clients.contains(self.client.id) {
            Some((Owner::Client, self.client.id))
        } else if !tables.services.contains(self.service.id) {
            Some((Owner::Service, self.service.id))
        } else {
            None
        };

        match missing {
            Some((owner, id)) => Err(AppError::Constraint(format!(
                "insert or update on table \"citas\" violates foreign key \"{}\": {} {} does not exist",
                owner.column(),
                owner.name(),
                id
            ))),
            None => Ok(()),
        }
    }
}

pub struct MemoryGateway<E> {
    db: Arc<MemoryDatabase>,
    _entity: PhantomData<fn() -> E>,
}

impl<E> MemoryGateway<E> {
    pub fn new(db: Arc<MemoryDatabase>) -> Self {
        Self {
            db,
            _entity: PhantomData,
        }
    }
}

impl<E> Clone for MemoryGateway<E> {
    fn clone(&self) -> Self {
        Self::new(self.db.clone())
    }
}

#[async_trait]
impl<E: MemoryRecord> Gateway<E> for MemoryGateway<E> {
    async fn find_all(&self) -> AppResult<Vec<E>> {
        let tables = self.db.tables.read().await;
        Ok(E::table(&tables).rows.values().cloned().collect())
    }

    async fn find_by_id(&self, id: i32) -> AppResult<Option<E>> {
        let tables = self.db.tables.read().await;
        Ok(E::table(&tables).rows.get(&id).cloned())
    }

    async fn exists_by_id(&self, id: i32) -> AppResult<bool> {
        let tables = self.db.tables.read().await;
        Ok(E::table(&tables).contains(id))
    }

    async fn save(&self, mut entity: E) -> AppResult<E> {
        entity
            .validate()
            .map_err(|e| AppError::Constraint(e.to_string()))?;

        let mut tables = self.db.tables.write().await;
        entity.check_references(&tables)?;

        let table = E::table_mut(&mut tables);
        let id = match entity.id() {
            Some(id) if table.contains(id) => id,
            _ => table.next_id(),
        };
        entity.set_id(id);
        table.rows.insert(id, entity.clone());
        tracing::debug!("Saved {} {}", E::NAME, id);
        Ok(entity)
    }

    async fn delete_by_id(&self, id: i32) -> AppResult<()> {
        let mut tables = self.db.tables.write().await;
        if E::is_referenced(id, &tables) {
            return Err(AppError::Conflict(format!(
                "{} {} is still referenced by appointments",
                E::NAME,
                id
            )));
        }
        E::table_mut(&mut tables)
            .rows
            .remove(&id)
            .map(|_| ())
            .ok_or_else(|| AppError::NotFound(format!("{} {} not found", E::NAME, id)))
    }
}

#[async_trait]
impl AppointmentGateway for MemoryGateway<Appointment> {
    async fn find_by_owner(&self, owner: Owner, id: i32) -> AppResult<Vec<Appointment>> {
        let tables = self.db.tables.read().await;
        Ok(tables
            .appointments
            .rows
            .values()
            .filter(|appointment| owner.owns(appointment, id))
            .cloned()
            .collect())
    }
}
