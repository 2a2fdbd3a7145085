use axum::{
    extract::{
        rejection::{JsonRejection, PathRejection},
        Path, State,
    },
    response::{IntoResponse, Json},
};

use crate::{
    dto::response::MessageBody, error::Result, models::recruitment_notice::NoticeFields,
    AppState,
};

/// A request without a JSON content type carries no fields. Malformed JSON
/// is still rejected.
fn fields_or_empty(
    payload: std::result::Result<Json<NoticeFields>, JsonRejection>,
) -> Result<NoticeFields> {
    match payload {
        Ok(Json(fields)) => Ok(fields),
        Err(JsonRejection::MissingJsonContentType(_)) => Ok(NoticeFields::default()),
        Err(rejection) => Err(rejection.into()),
    }
}

#[utoipa::path(
    post,
    path = "/api/company/recruitment",
    request_body = NoticeFields,
    responses(
        (status = 200, description = "Recruitment notice created", body = MessageBody),
        (status = 500, description = "Recruitment notice could not be stored", body = MessageBody)
    )
)]
#[axum::debug_handler]
pub async fn post_notice(
    State(state): State<AppState>,
    payload: std::result::Result<Json<NoticeFields>, JsonRejection>,
) -> Result<impl IntoResponse> {
    let fields = fields_or_empty(payload)?;
    Ok(state.company_service.post_notice(fields).await)
}

#[utoipa::path(
    put,
    path = "/api/company/recruitment/{id}",
    params(
        ("id" = i32, Path, description = "Recruitment notice ID")
    ),
    request_body = NoticeFields,
    responses(
        (status = 200, description = "Recruitment notice updated", body = MessageBody),
        (status = 404, description = "Recruitment notice not found", body = MessageBody),
        (status = 500, description = "Recruitment notice could not be updated", body = MessageBody)
    )
)]
#[axum::debug_handler]
pub async fn update_notice(
    State(state): State<AppState>,
    path: std::result::Result<Path<i32>, PathRejection>,
    payload: std::result::Result<Json<NoticeFields>, JsonRejection>,
) -> Result<impl IntoResponse> {
    let Path(id) = path?;
    let fields = fields_or_empty(payload)?;
    Ok(state
        .company_service
        .update_notice(id, fields.supplied_only())
        .await)
}

#[utoipa::path(
    delete,
    path = "/api/company/recruitment/{id}",
    params(
        ("id" = i32, Path, description = "Recruitment notice ID")
    ),
    responses(
        (status = 200, description = "Recruitment notice deleted", body = MessageBody),
        (status = 404, description = "Recruitment notice not found", body = MessageBody),
        (status = 500, description = "Recruitment notice could not be deleted", body = MessageBody)
    )
)]
#[axum::debug_handler]
pub async fn delete_notice(
    State(state): State<AppState>,
    path: std::result::Result<Path<i32>, PathRejection>,
) -> Result<impl IntoResponse> {
    let Path(id) = path?;
    Ok(state.company_service.delete_notice(id).await)
}
