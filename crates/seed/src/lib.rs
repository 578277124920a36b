//! One-shot seeding of synthetic billing clients.
//!
//! [`seed_clients`] generates a batch with a [`ClientGenerator`] and hands it
//! to a [`ClientStore`] in a single insert. A store failure is logged and
//! swallowed; the run simply ends.

pub mod config;
pub mod generator;

use atelier_core::types::UserId;
use atelier_db::ClientStore;
use rand::Rng;

pub use config::{ConfigError, SeedConfig};
pub use generator::ClientGenerator;

/// Number of clients generated when the caller does not say.
pub const DEFAULT_COUNT: usize = 10;

/// Generate `count` clients for `user_id` and insert them in one batch.
pub async fn seed_clients<S, R>(
    store: &S,
    generator: &ClientGenerator,
    rng: &mut R,
    user_id: UserId,
    count: usize,
) where
    S: ClientStore + ?Sized,
    R: Rng + ?Sized,
{
    let clients = generator.generate_batch(rng, user_id, count);
    tracing::debug!(%user_id, count = clients.len(), "Generated clients");

    match store.insert_clients(&clients).await {
        Ok(created) => {
            tracing::info!(%user_id, count = created.len(), "Successfully created clients");
        }
        Err(err) => {
            tracing::error!(%user_id, error = %err, "Error seeding clients");
        }
    }
}
