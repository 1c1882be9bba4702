//! Appointments service

use crate::{
    error::{AppError, AppResult},
    models::Appointment,
    repository::{AppointmentGateway, Owner, Repository},
};

use super::crud::CrudService;

#[derive(Clone)]
pub struct AppointmentsService {
    pub crud: CrudService<Appointment, dyn AppointmentGateway>,
    repository: Repository,
}

impl AppointmentsService {
    pub fn new(repository: Repository) -> Self {
        Self {
            crud: CrudService::new(repository.appointments.clone()),
            repository,
        }
    }

    /// Appointments of one barber, client or service
    pub async fn list_for(&self, owner: Owner, id: i32) -> AppResult<Vec<Appointment>> {
        if !self.repository.owner_exists(owner, id).await? {
            return Err(AppError::NotFound(format!(
                "{} {} not found",
                owner.name(),
                id
            )));
        }
        self.crud.gateway().find_by_owner(owner, id).await
    }
}
