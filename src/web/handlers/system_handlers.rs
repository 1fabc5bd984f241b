// src/web/handlers/system_handlers.rs
use crate::store::CvStore;

use rocket::serde::json::Json;
use tracing::info;

pub async fn health_handler(store: &CvStore) -> Json<&'static str> {
    info!(
        "Health check ({} CV sections loaded)",
        store.record().as_map().len()
    );
    Json("OK")
}
