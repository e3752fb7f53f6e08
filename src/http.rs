use std::sync::Mutex;

use actix_web::{middleware, web, App, HttpResponse, HttpServer, Responder};
use serde::{Deserialize, Serialize};

use crate::config::ResolutionConfiguration;
use crate::error::ResolverError;
use crate::keys::VALUE_SEPARATOR;
use crate::record::Individual;
use crate::resolver::resolve;
use crate::state::ResolverState;

/// Shared application state behind one coarse lock, per §5: every `Resolve`
/// call and every read (`GetEntity`, `Stats`) runs with the lock held end to
/// end, and none of them is cancelled mid-call.
pub struct AppState {
    pub config: ResolutionConfiguration,
    pub state: Mutex<ResolverState>,
}

impl AppState {
    pub fn new(config: ResolutionConfiguration) -> Self {
        Self {
            config,
            state: Mutex::new(ResolverState::new()),
        }
    }
}

/// Request body for `POST /resolve/individual`.
#[derive(Debug, Deserialize)]
pub struct IndividualDto {
    pub id: String,
    #[serde(default)]
    pub prefix: Option<String>,
    #[serde(default)]
    pub first_name: Option<String>,
    #[serde(default)]
    pub middle_name: Option<String>,
    #[serde(default)]
    pub last_name: Option<String>,
    #[serde(default)]
    pub suffix: Option<String>,
    #[serde(default)]
    pub birth_date: Option<String>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ResolveResponse {
    pub entity_id: String,
}

#[derive(Debug, Serialize)]
struct ErrorBody {
    error: String,
}

fn error_response(err: &ResolverError) -> HttpResponse {
    match err {
        ResolverError::InvalidInput(msg) => {
            log::warn!("rejected request: {msg}");
            HttpResponse::BadRequest().json(ErrorBody { error: msg.clone() })
        }
        ResolverError::NotFound(msg) => {
            HttpResponse::NotFound().json(ErrorBody { error: msg.clone() })
        }
    }
}

/// Validates a DTO and converts it into the core's `Individual` record.
/// Missing id and any attribute containing the blocking-key value separator
/// (§6's "bit-exact contracts") are rejected here — the core never sees
/// either.
fn validate(dto: IndividualDto) -> Result<Individual, ResolverError> {
    if dto.id.trim().is_empty() {
        return Err(ResolverError::InvalidInput("record id must not be empty".to_string()));
    }

    for (name, value) in [
        ("prefix", &dto.prefix),
        ("first_name", &dto.first_name),
        ("middle_name", &dto.middle_name),
        ("last_name", &dto.last_name),
        ("suffix", &dto.suffix),
        ("birth_date", &dto.birth_date),
    ] {
        if let Some(v) = value {
            if v.contains(VALUE_SEPARATOR) {
                return Err(ResolverError::InvalidInput(format!(
                    "attribute {name} must not contain U+00AC"
                )));
            }
        }
    }

    Ok(Individual {
        id: dto.id,
        prefix: dto.prefix,
        first_name: dto.first_name,
        middle_name: dto.middle_name,
        last_name: dto.last_name,
        suffix: dto.suffix,
        birth_date: dto.birth_date,
    })
}

async fn resolve_individual(
    dto: web::Json<IndividualDto>,
    app: web::Data<AppState>,
) -> impl Responder {
    let rec = match validate(dto.into_inner()) {
        Ok(rec) => rec,
        Err(err) => return error_response(&err),
    };

    let entity_id = {
        let mut state = app.state.lock().unwrap();
        match resolve(&app.config, &mut state, &rec) {
            Ok(id) => id,
            Err(err) => return error_response(&err),
        }
    };

    log::info!("resolved record {} to entity {entity_id}", rec.id);
    HttpResponse::Ok().json(ResolveResponse { entity_id })
}

async fn get_entity(path: web::Path<String>, app: web::Data<AppState>) -> impl Responder {
    let id = path.into_inner();
    let mut state = app.state.lock().unwrap();
    match state.get_entity(&id) {
        Ok(view) => HttpResponse::Ok().json(view),
        Err(err) => error_response(&err),
    }
}

async fn stats(app: web::Data<AppState>) -> impl Responder {
    let state = app.state.lock().unwrap();
    HttpResponse::Ok().json(state.stats())
}

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.route("/resolve/individual", web::post().to(resolve_individual))
        .route("/entity/{id}", web::get().to(get_entity))
        .route("/stats", web::get().to(stats));
}

/// Binds and runs the HTTP server to completion. Mirrors the bootstrap
/// shape of a single-threaded tokio runtime driving an actix `HttpServer`.
#[tokio::main(flavor = "current_thread")]
pub async fn run(bind: String, app_state: web::Data<AppState>) -> std::io::Result<()> {
    HttpServer::new(move || {
        App::new()
            .wrap(middleware::Logger::default())
            .app_data(app_state.clone())
            .configure(configure)
    })
    .bind(bind)?
        .workers(4)
        .run()
        .await
}
