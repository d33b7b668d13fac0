use actix_web::http::header::{ContentDisposition, DispositionParam, DispositionType};
use actix_web::{web, HttpResponse};
use serde::Deserialize;
use serde_json::json;

use crate::models::{ClaimSubmission, ClientFilter};
use super::error::ApiResult;
use super::identity::AdminId;
use super::state::ApiState;

/// Generate the claim pair and stream the PDF back as a download
pub async fn finalize_claim(
    admin: AdminId,
    submission: web::Json<ClaimSubmission>,
    state: web::Data<ApiState>,
) -> ApiResult<HttpResponse> {
    let service = state.service.clone();
    let uploader = admin.0;

    // Typst and xlsx writing are blocking work
    let finalized = web::block(move || service.finalize(submission.into_inner(), &uploader)).await??;

    let document = &finalized.artifacts.document;
    let bytes = tokio::fs::read(document).await?;
    let file_name = document
        .file_name()
        .map(|name| name.to_string_lossy().to_string())
        .unwrap_or_default();

    Ok(HttpResponse::Ok()
        .content_type("application/pdf")
        .insert_header(ContentDisposition {
            disposition: DispositionType::Attachment,
            parameters: vec![DispositionParam::Filename(file_name)],
        })
        .body(bytes))
}

/// Files and client-addition events visible to admins
pub async fn list_clients(
    _admin: AdminId,
    filter: web::Query<ClientFilter>,
    state: web::Data<ApiState>,
) -> ApiResult<HttpResponse> {
    let filter = filter.into_inner();
    let files = state.service.list_files(&filter)?;
    let additions = state.service.list_additions(&filter)?;

    Ok(HttpResponse::Ok().json(json!({
        "files": files,
        "additions": additions,
    })))
}

#[derive(Debug, Deserialize)]
pub struct NewClient {
    pub client_name: String,
}

pub async fn add_client(
    admin: AdminId,
    body: web::Json<NewClient>,
    state: web::Data<ApiState>,
) -> ApiResult<HttpResponse> {
    let addition = state.service.add_client(&body.client_name, admin.as_str())?;
    Ok(HttpResponse::Created().json(addition))
}
