// src/web/handlers/section_handlers.rs
use crate::store::CvStore;
use crate::types::Section;
use crate::web::types::ErrorResponse;

use rocket::response::status::NotFound;
use rocket::serde::json::{Json, Value};
use tracing::{info, warn};

/// Serve one CV section as stored, or the section's 404 envelope when absent
pub fn fetch_section(
    store: &CvStore,
    section: Section,
) -> Result<Json<Value>, NotFound<Json<ErrorResponse>>> {
    match store.section(section) {
        Some(content) => {
            info!("Serving section: {}", section.key());
            Ok(Json(content.clone()))
        }
        None => {
            warn!("Section not found: {}", section.key());
            Err(NotFound(Json(ErrorResponse::new(
                section.not_found_message(),
            ))))
        }
    }
}
