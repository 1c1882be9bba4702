//! Service model (a haircut, shave, ... offered by the shop)

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use super::Entity;

/// Service record
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate, ToSchema)]
pub struct Service {
    #[serde(rename = "idServicio", default)]
    pub id: Option<i32>,
    #[serde(rename = "descripcion")]
    #[validate(length(max = 200, message = "descripcion must be at most 200 characters"))]
    pub description: String,
    /// Price; no sign check is applied
    #[serde(rename = "costo")]
    pub cost: f64,
}

impl Entity for Service {
    const NAME: &'static str = "Servicio";

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
    fn parses_front_end_payload() {
        let service: Service =
            serde_json::from_value(json!({"descripcion": "Corte clásico", "costo": 150.0}))
                .unwrap();
        assert_eq!(service.description, "Corte clásico");
        assert_eq!(service.cost, 150.0);
        assert_eq!(service.id, None);
    }

    #[test]
    fn negative_cost_is_accepted() {
        let service = Service {
            id: None,
            description: "Descuento".to_string(),
            cost: -10.0,
        };
        assert!(service.validate().is_ok());
    }
}
