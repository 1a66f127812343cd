use actix_web::{get, web, HttpResponse, Responder};
use serde_json::json;

use super::RqApi;

/// Readiness check - the portal is only useful while the collector answers
#[get("/ready")]
pub async fn readiness_check(api: RqApi) -> impl Responder {
    match api.sources().list().await {
        Ok(_) => HttpResponse::Ok().json(json!({
            "status": "ready",
            "collector": "connected"
        })),
        Err(err) => {
            tracing::warn!(error = %err, "Readiness check failed");
            HttpResponse::ServiceUnavailable().json(json!({
                "status": "not_ready",
                "collector": "unreachable"
            }))
        }
    }
}

/// Liveness check - simple check to see if the app is alive
#[get("/live")]
pub async fn liveness_check() -> impl Responder {
    HttpResponse::Ok().json(json!({
        "status": "alive",
        "version": env!("CARGO_PKG_VERSION")
    }))
}

pub fn routes() -> actix_web::Scope {
    web::scope("/health")
        .service(readiness_check)
        .service(liveness_check)
}
