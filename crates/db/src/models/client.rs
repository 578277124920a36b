//! Billing client model and DTOs.

use atelier_core::status::ClientType;
use atelier_core::types::{DbId, Timestamp, UserId};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row from the `clients` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Client {
    pub id: DbId,
    pub user_id: UserId,
    #[sqlx(rename = "type", try_from = "String")]
    #[serde(rename = "type")]
    pub client_type: ClientType,
    pub company_name: Option<String>,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub billing_email: String,
    pub billing_phone: Option<String>,
    pub billing_address: Option<String>,
    pub billing_city: Option<String>,
    pub billing_postal: Option<String>,
    pub billing_country: Option<String>,
    pub siret: Option<String>,
    pub tax_id: Option<String>,
    pub iban: Option<String>,
    pub bic: Option<String>,
    pub notes: Option<String>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for inserting a client.
///
/// `company_name` is set for companies only; `first_name`/`last_name` for
/// individuals only. `siret` and `tax_id` only apply to companies.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewClient {
    pub user_id: UserId,
    #[serde(rename = "type")]
    pub client_type: ClientType,
    pub company_name: Option<String>,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub billing_email: String,
    pub billing_phone: String,
    pub billing_address: String,
    pub billing_city: String,
    pub billing_postal: String,
    pub billing_country: String,
    pub siret: Option<String>,
    pub tax_id: Option<String>,
    pub iban: String,
    pub bic: String,
    pub notes: Option<String>,
}
