//! Barber model

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use super::Entity;

/// Barber record
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate, ToSchema)]
pub struct Barber {
    #[serde(rename = "idBarbero", default)]
    pub id: Option<i32>,
    /// Full name
    #[serde(rename = "nombre")]
    #[validate(length(max = 200, message = "nombre must be at most 200 characters"))]
    pub name: String,
}

impl Entity for Barber {
    const NAME: &'static str = "Barbero";

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

    #[test]
    fn uses_front_end_field_names() {
        let barber = Barber {
            id: Some(3),
            name: "Luis".to_string(),
        };
        assert_eq!(
            serde_json::to_value(&barber).unwrap(),
            json!({"idBarbero": 3, "nombre": "Luis"})
        );
    }

    #[test]
    fn id_is_optional_on_input() {
        let barber: Barber = serde_json::from_value(json!({"nombre": "Luis"})).unwrap();
        assert_eq!(barber.id, None);

        let barber: Barber =
            serde_json::from_value(json!({"idBarbero": null, "nombre": "Luis"})).unwrap();
        assert_eq!(barber.id, None);
    }

    #[test]
    fn name_is_required() {
        assert!(serde_json::from_value::<Barber>(json!({})).is_err());
        assert!(serde_json::from_value::<Barber>(json!({"nombre": null})).is_err());
    }

    #[test]
    fn name_longer_than_column_is_rejected() {
        let barber = Barber {
            id: None,
            name: "x".repeat(201),
        };
        assert!(barber.validate().is_err());
    }
}
