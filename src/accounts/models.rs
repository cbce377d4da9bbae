//! Account data models

use serde::{Deserialize, Serialize};

use crate::rules::{FieldConstraint, FieldDescriptor, Record, PASSWORD_VALID, USERNAME_VALID};

/// Account submission, validated and echoed back unchanged
#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
pub struct Account {
    pub username: String,
    pub password: String,
}

/// Field metadata for `Account`, in declaration order
pub static ACCOUNT_FIELDS: [FieldDescriptor; 2] = [
    FieldDescriptor {
        id: "Username",
        form_alias: Some("username"),
        json_alias: None,
        constraint: FieldConstraint {
            required: true,
            max_length: 16,
            rule_name: USERNAME_VALID,
        },
    },
    FieldDescriptor {
        id: "Password",
        form_alias: Some("password"),
        json_alias: None,
        constraint: FieldConstraint {
            required: true,
            max_length: 10,
            rule_name: PASSWORD_VALID,
        },
    },
];

impl Record for Account {
    fn descriptors() -> &'static [FieldDescriptor] {
        &ACCOUNT_FIELDS
    }

    fn value(&self, id: &str) -> Option<&str> {
        match id {
            "Username" => Some(&self.username),
            "Password" => Some(&self.password),
            _ => None,
        }
    }
}

/// Raw request body. Absent fields bind to "" so they are reported as
/// missing by validation rather than rejected while decoding.
#[derive(Deserialize, Debug, Default, PartialEq, Eq)]
#[serde(default)]
pub struct AccountPayload {
    pub username: String,
    pub password: String,
}

impl AccountPayload {
    /// Binds from form key/value pairs. The first value of a repeated key wins.
    pub fn from_pairs<I>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (String, String)>,
    {
        let mut username = None;
        let mut password = None;

        for (key, value) in pairs {
            let slot = match key.as_str() {
                "username" => &mut username,
                "password" => &mut password,
                _ => continue,
            };
            if slot.is_none() {
                *slot = Some(value);
            }
        }

        Self {
            username: username.unwrap_or_default(),
            password: password.unwrap_or_default(),
        }
    }
}
