use chrono::{DateTime, Utc};
use sledger_derive::api_model;

#[api_model]
#[derive(Clone, PartialEq, Eq)]
pub struct User {
    pub id: u64,
    pub email: String,
    pub name: String,
    pub company_name: Option<String>,
    pub phone: Option<String>,
    pub address: Option<String>,
    pub account_type: String,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Registration request. Credentials are handled outside this service.
#[api_model]
#[derive(Clone, PartialEq, Eq)]
pub struct NewUser {
    pub email: String,
    pub name: String,
    #[serde(default)]
    pub company_name: Option<String>,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub address: Option<String>,
}

/// Profile edit; absent or empty fields keep their current value.
#[api_model]
#[derive(Clone, PartialEq, Eq, Default)]
pub struct ProfilePatch {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub company_name: Option<String>,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub address: Option<String>,
}

#[api_model]
#[derive(Clone, PartialEq, Eq, Default)]
pub struct EmailQuery {
    #[serde(default)]
    pub email: Option<String>,
}
