//! Repository for the `clients` table.

use atelier_core::types::UserId;
use sqlx::PgPool;

use crate::models::client::{Client, NewClient};

/// Columns returned from inserts.
const COLUMNS: &str = "id, user_id, type, company_name, first_name, last_name, \
     billing_email, billing_phone, billing_address, billing_city, billing_postal, \
     billing_country, siret, tax_id, iban, bic, notes, created_at, updated_at";

/// Provides bulk insertion of billing clients.
pub struct ClientRepo;

impl ClientRepo {
    /// Batch-insert clients in a single statement, returning the created rows.
    pub async fn create_batch(
        pool: &PgPool,
        clients: &[NewClient],
    ) -> Result<Vec<Client>, sqlx::Error> {
        if clients.is_empty() {
            return Ok(vec![]);
        }

        let user_ids: Vec<UserId> = clients.iter().map(|c| c.user_id).collect();
        let types: Vec<&str> = clients.iter().map(|c| c.client_type.as_str()).collect();
        let company_names: Vec<Option<String>> =
            clients.iter().map(|c| c.company_name.clone()).collect();
        let first_names: Vec<Option<String>> =
            clients.iter().map(|c| c.first_name.clone()).collect();
        let last_names: Vec<Option<String>> = clients.iter().map(|c| c.last_name.clone()).collect();
        let emails: Vec<String> = clients.iter().map(|c| c.billing_email.clone()).collect();
        let phones: Vec<String> = clients.iter().map(|c| c.billing_phone.clone()).collect();
        let addresses: Vec<String> = clients.iter().map(|c| c.billing_address.clone()).collect();
        let cities: Vec<String> = clients.iter().map(|c| c.billing_city.clone()).collect();
        let postals: Vec<String> = clients.iter().map(|c| c.billing_postal.clone()).collect();
        let countries: Vec<String> = clients.iter().map(|c| c.billing_country.clone()).collect();
        let sirets: Vec<Option<String>> = clients.iter().map(|c| c.siret.clone()).collect();
        let tax_ids: Vec<Option<String>> = clients.iter().map(|c| c.tax_id.clone()).collect();
        let ibans: Vec<String> = clients.iter().map(|c| c.iban.clone()).collect();
        let bics: Vec<String> = clients.iter().map(|c| c.bic.clone()).collect();
        let notes: Vec<Option<String>> = clients.iter().map(|c| c.notes.clone()).collect();

        let query = format!(
            "INSERT INTO clients \
                (user_id, type, company_name, first_name, last_name, \
                 billing_email, billing_phone, billing_address, billing_city, billing_postal, \
                 billing_country, siret, tax_id, iban, bic, notes) \
             SELECT * FROM UNNEST( \
                $1::uuid[], $2::text[], $3::text[], $4::text[], $5::text[], \
                $6::text[], $7::text[], $8::text[], $9::text[], $10::text[], \
                $11::text[], $12::text[], $13::text[], $14::text[], $15::text[], $16::text[]) \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Client>(&query)
            .bind(&user_ids)
            .bind(&types)
            .bind(&company_names)
            .bind(&first_names)
            .bind(&last_names)
            .bind(&emails)
            .bind(&phones)
            .bind(&addresses)
            .bind(&cities)
            .bind(&postals)
            .bind(&countries)
            .bind(&sirets)
            .bind(&tax_ids)
            .bind(&ibans)
            .bind(&bics)
            .bind(&notes)
            .fetch_all(pool)
            .await
    }
}
