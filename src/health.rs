use actix_web::{get, web, HttpResponse, Responder};
use serde::Serialize;
use std::sync::Arc;
use tracing::warn;

use crate::shared::persistence::probe::StorageProbe;
use crate::shared::persistence::{bounded, DeadlineExceeded, SINGLE_RECORD};

#[derive(Debug, thiserror::Error)]
enum PingFailure {
    #[error("{0}")]
    Refused(String),

    #[error(transparent)]
    TimedOut(#[from] DeadlineExceeded),
}

#[derive(Serialize)]
struct HealthResponse {
    status: &'static str,
}

#[derive(Serialize)]
struct ReadinessResponse {
    status: &'static str,
    storage: &'static str,
    backend: &'static str,
}

/// LIVENESS PROBE
/// - No I/O
#[get("/health")]
pub async fn health() -> impl Responder {
    HttpResponse::Ok().json(HealthResponse { status: "ok" })
}

/// READINESS PROBE
/// - Pings whichever storage backend is active
#[get("/ready")]
pub async fn readiness(probe: web::Data<Arc<dyn StorageProbe>>) -> impl Responder {
    let backend = probe.backend().as_str();

    let ping = async { probe.ping().await.map_err(PingFailure::Refused) };

    let storage_status = match bounded(SINGLE_RECORD, ping).await {
        Ok(()) => "ok",
        Err(e) => {
            warn!(backend, error = %e, "Storage ping failed");
            "unhealthy"
        }
    };

    if storage_status == "ok" {
        HttpResponse::Ok().json(ReadinessResponse {
            status: "ok",
            storage: storage_status,
            backend,
        })
    } else {
        HttpResponse::ServiceUnavailable().json(ReadinessResponse {
            status: "unhealthy",
            storage: storage_status,
            backend,
        })
    }
}
