use actix_cors::Cors;
use actix_web::{web, HttpResponse};

use super::handlers;
use super::identity::ADMIN_HEADER;
use super::{ApiError, ApiResult};

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg
        // Health checks
        .route("/health", web::get().to(health_check))
        .route("/metrics", web::get().to(metrics_endpoint))

        // API v1
        .service(
            web::scope("/api/v1")
                .wrap(
                    Cors::default()
                        .allowed_origin_fn(|origin, _req_head| {
                            origin.as_bytes().starts_with(b"http://localhost") ||
                            origin.as_bytes().starts_with(b"https://")
                        })
                        .allowed_methods(vec!["GET", "POST"])
                        .allowed_headers(vec!["Content-Type", ADMIN_HEADER])
                        .expose_headers(vec!["Content-Disposition"])
                        .max_age(3600)
                )
                .route("/claims/finalize", web::post().to(handlers::finalize_claim))
                .service(
                    web::scope("/clients")
                        .route("", web::get().to(handlers::list_clients))
                        .route("", web::post().to(handlers::add_client))
                )
        );
}

async fn health_check() -> HttpResponse {
    HttpResponse::Ok().json(serde_json::json!({
        "status": "healthy"
    }))
}

async fn metrics_endpoint() -> ApiResult<HttpResponse> {
    use prometheus::{Encoder, TextEncoder};

    let encoder = TextEncoder::new();
    let metric_families = prometheus::gather();
    let mut buffer = vec![];

    encoder
        .encode(&metric_families, &mut buffer)
        .map_err(|e| ApiError::internal_server_error(e.to_string()))?;

    Ok(HttpResponse::Ok()
        .content_type("text/plain; version=0.0.4")
        .body(buffer))
}
