// src/web/mod.rs

pub mod handlers;
pub mod types;

pub use handlers::*;
pub use types::*;

use crate::config::AppConfig;
use crate::store::CvStore;
use crate::types::Section;
use anyhow::Result;
use rocket::fairing::{Fairing, Info, Kind};
use rocket::http::{Header, Status};
use rocket::response::status::NotFound;
use rocket::serde::json::{Json, Value};
use rocket::{catchers, get, options, routes, Build, Request, Response, Rocket, State};
use tracing::info;

// CORS Fairing
pub struct Cors;

#[rocket::async_trait]
impl Fairing for Cors {
    fn info(&self) -> Info {
        Info {
            name: "Add CORS headers to responses",
            kind: Kind::Response,
        }
    }

    async fn on_response<'r>(&self, _request: &'r Request<'_>, response: &mut Response<'r>) {
        response.set_header(Header::new("Access-Control-Allow-Origin", "*"));
        response.set_header(Header::new("Access-Control-Allow-Methods", "GET, OPTIONS"));
        response.set_header(Header::new("Access-Control-Allow-Headers", "*"));
    }
}

type SectionResult = Result<Json<Value>, NotFound<Json<ErrorResponse>>>;

#[get("/personal")]
pub fn get_personal(store: &State<CvStore>) -> SectionResult {
    handlers::fetch_section(store, Section::Personal)
}

#[get("/competencies")]
pub fn get_competencies(store: &State<CvStore>) -> SectionResult {
    handlers::fetch_section(store, Section::CoreCompetencies)
}

#[get("/experience")]
pub fn get_experience(store: &State<CvStore>) -> SectionResult {
    handlers::fetch_section(store, Section::ProfessionalExperience)
}

#[get("/projects")]
pub fn get_projects(store: &State<CvStore>) -> SectionResult {
    handlers::fetch_section(store, Section::PersonalProjects)
}

#[get("/education")]
pub fn get_education(store: &State<CvStore>) -> SectionResult {
    handlers::fetch_section(store, Section::Education)
}

#[get("/health")]
pub async fn health(store: &State<CvStore>) -> Json<&'static str> {
    handlers::health_handler(store).await
}

#[options("/<_..>")]
pub async fn options() -> Status {
    Status::Ok
}

// Error catchers
#[rocket::catch(404)]
pub fn not_found(request: &Request<'_>) -> Json<ErrorResponse> {
    Json(ErrorResponse::new(format!("No route for {}", request.uri())))
}

#[rocket::catch(500)]
pub fn internal_error() -> Json<ErrorResponse> {
    Json(ErrorResponse::new("Internal server error"))
}

/// Assemble the API around an already loaded store
pub fn build_rocket(store: CvStore, config: &AppConfig) -> Rocket<Build> {
    let figment = rocket::Config::figment()
        .merge(("address", config.address.clone()))
        .merge(("port", config.port))
        .merge(("log_level", "off"));

    rocket::custom(figment)
        .attach(Cors)
        .manage(store)
        .register("/", catchers![not_found, internal_error])
        .mount(
            "/",
            routes![
                get_personal,
                get_competencies,
                get_experience,
                get_projects,
                get_education,
                health,
                options,
            ],
        )
}

// Main server start function
pub async fn start_web_server(store: CvStore, config: &AppConfig) -> Result<()> {
    info!("Starting CV API server");
    info!("Server: http://{}:{}", config.address, config.port);

    build_rocket(store, config)
        .launch()
        .await
        .map_err(|e| anyhow::anyhow!("Web server failed: {}", e))?;

    Ok(())
}
