//! Client model

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use super::Entity;

/// Client record
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate, ToSchema)]
pub struct Client {
    #[serde(rename = "idCliente", default)]
    pub id: Option<i32>,
    #[serde(rename = "nombre")]
    #[validate(length(max = 200, message = "nombre must be at most 200 characters"))]
    pub name: String,
    /// Contact phone, stored as entered
    #[serde(rename = "telefono")]
    #[validate(length(max = 45, message = "telefono must be at most 45 characters"))]
    pub phone: String,
}

impl Entity for Client {
    const NAME: &'static str = "Cliente";

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
    fn phone_is_required() {
        let result = serde_json::from_value::<Client>(json!({"nombre": "Ana"}));
        assert!(result.is_err());
    }

    #[test]
    fn phone_limit_is_45_characters() {
        let mut client = Client {
            id: None,
            name: "Ana".to_string(),
            phone: "5".repeat(45),
        };
        assert!(client.validate().is_ok());

        client.phone.push('5');
        assert!(client.validate().is_err());
    }
}
