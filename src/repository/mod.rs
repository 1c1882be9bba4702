//! Repository layer for database operations
//!
//! Every entity type is reached through a [`Gateway`]. Two backends exist:
//! PostgreSQL through sqlx, and an in-process arena used for local runs
//! and tests. [`Repository`] bundles one gateway per entity.

pub mod mapping;
pub mod memory;
pub mod postgres;

use std::sync::Arc;

use async_trait::async_trait;
use sqlx::{Pool, Postgres};

use crate::{
    error::AppResult,
    models::{Appointment, Barber, Client, Entity, Service},
};

/// Generic store access for one entity type.
///
/// `save` covers both create and update: a record without id is inserted
/// with a generated id, a record with an id replaces the stored row with
/// that id, or is inserted under a fresh id when no such row exists.
#[async_trait]
pub trait Gateway<E>: Send + Sync {
    async fn find_all(&self) -> AppResult<Vec<E>>;

    async fn find_by_id(&self, id: i32) -> AppResult<Option<E>>;

    async fn exists_by_id(&self, id: i32) -> AppResult<bool>;

    async fn save(&self, entity: E) -> AppResult<E>;

    /// Fails with `NotFound` when no row was removed
    async fn delete_by_id(&self, id: i32) -> AppResult<()>;
}

/// Side of an appointment's many-to-one relations
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Owner {
    Barber,
    Client,
    Service,
}

impl Owner {
    /// Foreign key column on `citas`
    pub fn column(self) -> &'static str {
        match self {
            Owner::Barber => "id_barbero",
            Owner::Client => "id_cliente",
            Owner::Service => "id_servicio",
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Owner::Barber => Barber::NAME,
            Owner::Client => Client::NAME,
            Owner::Service => Service::NAME,
        }
    }

    /// Whether `appointment` belongs to the owner with id `id`
    pub fn owns(self, appointment: &Appointment, id: i32) -> bool {
        match self {
            Owner::Barber => appointment.barber.id == id,
            Owner::Client => appointment.client.id == id,
            Owner::Service => appointment.service.id == id,
        }
    }
}

/// Appointment gateway with the query-time join used for back references
#[async_trait]
pub trait AppointmentGateway: Gateway<Appointment> {
    /// Appointments of one barber, client or service, ordered by id
    async fn find_by_owner(&self, owner: Owner, id: i32) -> AppResult<Vec<Appointment>>;
}

/// Main repository struct holding one gateway per entity
#[derive(Clone)]
pub struct Repository {
    pub pool: Option<Pool<Postgres>>,
    pub barbers: Arc<dyn Gateway<Barber>>,
    pub clients: Arc<dyn Gateway<Client>>,
    pub catalog: Arc<dyn Gateway<Service>>,
    pub appointments: Arc<dyn AppointmentGateway>,
}

impl Repository {
    /// Create a repository backed by the given database pool
    pub fn new(pool: Pool<Postgres>) -> Self {
        Self {
            barbers: Arc::new(postgres::PgGateway::<Barber>::new(pool.clone())),
            clients: Arc::new(postgres::PgGateway::<Client>::new(pool.clone())),
            catalog: Arc::new(postgres::PgGateway::<Service>::new(pool.clone())),
            appointments: Arc::new(postgres::PgGateway::<Appointment>::new(pool.clone())),
            pool: Some(pool),
        }
    }

    /// Create a repository backed by a fresh in-memory store
    pub fn in_memory() -> Self {
        let db = Arc::new(memory::MemoryDatabase::default());
        Self {
            pool: None,
            barbers: Arc::new(memory::MemoryGateway::<Barber>::new(db.clone())),
            clients: Arc::new(memory::MemoryGateway::<Client>::new(db.clone())),
            catalog: Arc::new(memory::MemoryGateway::<Service>::new(db.clone())),
            appointments: Arc::new(memory::MemoryGateway::<Appointment>::new(db)),
        }
    }

    /// Whether the barber, client or service with `id` exists
    pub async fn owner_exists(&self, owner: Owner, id: i32) -> AppResult<bool> {
        match owner {
            Owner::Barber => self.barbers.exists_by_id(id).await,
            Owner::Client => self.clients.exists_by_id(id).await,
            Owner::Service => self.catalog.exists_by_id(id).await,
        }
    }

    /// Round-trip to the store (no-op for the in-memory backend)
    pub async fn ping(&self) -> AppResult<()> {
        if let Some(pool) = &self.pool {
            sqlx::query("SELECT 1").execute(pool).await?;
        }
        Ok(())
    }
}
