//! Data models for Bigoton

pub mod appointment;
pub mod barber;
pub mod client;
pub mod service;

use validator::Validate;

// Re-export commonly used types
pub use appointment::{Appointment, BarberRef, ClientRef, ServiceRef};
pub use barber::Barber;
pub use client::Client;
pub use service::Service;

/// A record with a server-assigned surrogate id, persisted in one table.
///
/// The id is `None` until the record has been saved. Length limits are
/// declared with `validator` attributes and mirror the column sizes.
pub trait Entity: Validate + Clone + Send + Sync + 'static {
    /// Name used in log lines and error messages
    const NAME: &'static str;

    fn id(&self) -> Option<i32>;

    fn set_id(&mut self, id: i32);
}
