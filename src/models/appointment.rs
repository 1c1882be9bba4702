//! Appointment model
//!
//! An appointment points at its barber, client and service by id only.
//! The related records are never embedded, neither on read nor on write;
//! each reference travels as a one-field object keyed like the related
//! record's own id (`{"barbero": {"idBarbero": 1}}`).

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use super::Entity;

/// Foreign key to a barber
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct BarberRef {
    #[serde(rename = "idBarbero")]
    pub id: i32,
}

/// Foreign key to a client
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct ClientRef {
    #[serde(rename = "idCliente")]
    pub id: i32,
}

/// Foreign key to a service
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct ServiceRef {
    #[serde(rename = "idServicio")]
    pub id: i32,
}

/// Appointment record
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate, ToSchema)]
pub struct Appointment {
    #[serde(rename = "idCita", default)]
    pub id: Option<i32>,
    /// Free-form date text, e.g. "2024-05-01"
    #[serde(rename = "fecha")]
    #[validate(length(max = 45, message = "fecha must be at most 45 characters"))]
    pub date: String,
    /// Free-form time text, e.g. "10:00"
    #[serde(rename = "hora")]
    #[validate(length(max = 45, message = "hora must be at most 45 characters"))]
    pub time: String,
    #[serde(rename = "barbero")]
    pub barber: BarberRef,
    #[serde(rename = "cliente")]
    pub client: ClientRef,
    #[serde(rename = "servicio")]
    pub service: ServiceRef,
}

impl Entity for Appointment {
    const NAME: &'static str = "Cita";

    fn id(&self) -> Option<i32> {
        self.id
    }

    fn set_id(&mut self, id: i32) {
        self.id = Some(id);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn payload() -> serde_json::Value {
        json!({
            "fecha": "2024-05-01",
            "hora": "10:00",
            "barbero": {"idBarbero": 1},
            "cliente": {"idCliente": 2},
            "servicio": {"idServicio": 3}
        })
    }

    #[test]
    fn reads_references_by_id() {
        let appointment: Appointment = serde_json::from_value(payload()).unwrap();
        assert_eq!(appointment.barber.id, 1);
        assert_eq!(appointment.client.id, 2);
        assert_eq!(appointment.service.id, 3);
    }

    #[test]
    fn extra_fields_of_embedded_records_are_ignored() {
        let mut body = payload();
        body["barbero"] = json!({"idBarbero": 1, "nombre": "Luis"});
        let appointment: Appointment = serde_json::from_value(body).unwrap();
        assert_eq!(appointment.barber, BarberRef { id: 1 });
    }

    #[test]
    fn references_are_required() {
        let mut body = payload();
        body.as_object_mut().unwrap().remove("servicio");
        assert!(serde_json::from_value::<Appointment>(body).is_err());
    }

    #[test]
    fn serializes_back_to_request_shape() {
        let mut appointment: Appointment = serde_json::from_value(payload()).unwrap();
        appointment.set_id(9);

        let mut expected = payload();
        expected["idCita"] = json!(9);
        assert_eq!(serde_json::to_value(&appointment).unwrap(), expected);
    }
}
