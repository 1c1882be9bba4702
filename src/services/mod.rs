//! Business logic services

pub mod appointments;
pub mod crud;

use crate::{
    models::{Barber, Client, Service},
    repository::Repository,
};

pub use crud::CrudService;

/// Container for all services
#[derive(Clone)]
pub struct Services {
    pub barbers: CrudService<Barber>,
    pub clients: CrudService<Client>,
    /// Services offered by the shop
    pub catalog: CrudService<Service>,
    pub appointments: appointments::AppointmentsService,
    pub repository: Repository,
}

impl Services {
    /// Create all services with the given repository
    pub fn new(repository: Repository) -> Self {
        Self {
            barbers: CrudService::new(repository.barbers.clone()),
            clients: CrudService::new(repository.clients.clone()),
            catalog: CrudService::new(repository.catalog.clone()),
            appointments: appointments::AppointmentsService::new(repository.clone()),
            repository,
        }
    }
}
