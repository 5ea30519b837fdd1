use async_graphql::SimpleObject;
use serde::Serialize;
use serde_json::Value;

use crate::normalize::fields::{int_field, str_field};

#[derive(Debug, Clone, Default, PartialEq, Serialize, SimpleObject)]
pub struct UserType {
    pub id: i32,
    pub username: String,
    pub email: String,
}

impl UserType {
    /// Reads a user from either the Go struct spelling (`ID`, `Username`)
    /// or the JSON-tag spelling (`id`, `username`).
    pub fn from_backend(raw: &Value) -> Self {
        Self {
            id: int_field(raw, &["id", "ID", "Id", "user_id"]).unwrap_or(0),
            username: str_field(raw, &["username", "Username"]).unwrap_or_default(),
            email: str_field(raw, &["email", "Email"]).unwrap_or_default(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, SimpleObject)]
pub struct LoginResponse {
    pub user: UserType,
    pub token: String,
}

impl LoginResponse {
    /// The backend has answered both flat (`{ID, Username, Email, Token}`)
    /// and nested (`{user: {...}, token}`); either maps onto the same shape.
    pub fn from_backend(raw: &Value) -> Self {
        let user = raw
            .get("user")
            .or_else(|| raw.get("User"))
            .filter(|u| u.is_object())
            .unwrap_or(raw);

        Self {
            user: UserType::from_backend(user),
            token: str_field(raw, &["token", "Token"]).unwrap_or_default(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, SimpleObject)]
pub struct RegisterResponse {
    pub id: String,
    pub username: String,
    pub email: String,
}

impl RegisterResponse {
    pub fn from_backend(raw: &Value) -> Self {
        let user = UserType::from_backend(raw);
        Self {
            id: str_field(raw, &["id", "ID", "Id"]).unwrap_or_else(|| user.id.to_string()),
            username: user.username,
            email: user.email,
        }
    }
}
