use serde::{Deserialize, Serialize};

use crate::domain::common::Resource;
use crate::shared::validation::{
    check_email_shape, check_letters_only, check_min_length, FieldErrors, Validate,
};

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct Role {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    pub name: String,
}

impl Resource for Role {
    fn collection_name() -> &'static str {
        "roles"
    }

    fn element_name() -> &'static str {
        "Role"
    }

    fn list_name() -> &'static str {
        "Roles"
    }

    fn id(&self) -> Option<i64> {
        self.id
    }

    fn search_text(&self) -> &str {
        &self.name
    }
}

/// A dashboard account. The password field is write-only: the backend never
/// returns it, and it stays empty when editing unless the operator types a
/// replacement.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct User {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,

    pub name: String,
    pub email: String,

    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub password: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub role_id: Option<i64>,

    #[serde(default, skip_serializing)]
    pub role: Option<Role>,
}

impl User {
    pub fn role_name(&self) -> &str {
        self.role.as_ref().map(|r| r.name.as_str()).unwrap_or("-")
    }
}

impl Resource for User {
    fn collection_name() -> &'static str {
        "users"
    }

    fn element_name() -> &'static str {
        "User"
    }

    fn list_name() -> &'static str {
        "Users"
    }

    fn id(&self) -> Option<i64> {
        self.id
    }

    fn search_text(&self) -> &str {
        &self.name
    }
}

impl Validate for User {
    fn validate(&self) -> Result<(), FieldErrors> {
        let mut errors = FieldErrors::new();
        check_min_length(&mut errors, "name", &self.name, 3, "Name");
        if errors.get("name").is_none() {
            check_letters_only(&mut errors, "name", &self.name, "Name");
        }
        check_email_shape(&mut errors, "email", &self.email);
        // Password required on create; optional on edit (empty = unchanged).
        if self.id.is_none() || !self.password.is_empty() {
            check_min_length(&mut errors, "password", &self.password, 5, "Password");
        }
        errors.into_result()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_user() -> User {
        User {
            name: "Carla".into(),
            email: "carla@example.com".into(),
            password: "secret".into(),
            role_id: Some(1),
            ..Default::default()
        }
    }

    #[test]
    fn create_requires_password() {
        let mut user = valid_user();
        user.password = String::new();
        let errors = user.validate().unwrap_err();
        assert!(errors.get("password").is_some());
    }

    #[test]
    fn edit_allows_empty_password() {
        let mut user = valid_user();
        user.id = Some(9);
        user.password = String::new();
        assert!(user.validate().is_ok());
    }

    #[test]
    fn short_or_numeric_name_is_rejected() {
        let mut user = valid_user();
        user.name = "Jo".into();
        assert!(user.validate().unwrap_err().get("name").is_some());

        user.name = "Jo3y".into();
        assert!(user.validate().unwrap_err().get("name").is_some());
    }

    #[test]
    fn malformed_email_is_rejected() {
        let mut user = valid_user();
        user.email = "not-an-email".into();
        assert!(user.validate().unwrap_err().get("email").is_some());
    }

    #[test]
    fn empty_password_is_omitted_from_payload() {
        let mut user = valid_user();
        user.id = Some(9);
        user.password = String::new();
        let json = serde_json::to_value(&user).unwrap();
        assert!(json.get("password").is_none());
    }
}
