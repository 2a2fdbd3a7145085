use axum::{
    extract::{
        rejection::{PathRejection, QueryRejection},
        Path, Query, State,
    },
    response::IntoResponse,
};

use crate::{
    dto::{
        recruitment_dto::{NoticeDetailBody, NoticeListBody, SearchQuery},
        response::MessageBody,
    },
    error::Result,
    middleware::identity::CurrentUser,
    AppState,
};

#[utoipa::path(
    get,
    path = "/api/user/recruitment",
    responses(
        (status = 200, description = "All recruitment notices, without detail", body = NoticeListBody),
        (status = 500, description = "Notices could not be loaded", body = MessageBody)
    )
)]
#[axum::debug_handler]
pub async fn list_notices(State(state): State<AppState>) -> Result<impl IntoResponse> {
    Ok(state.user_service.list_notices().await)
}

#[utoipa::path(
    get,
    path = "/api/user/recruitment/search",
    params(SearchQuery),
    responses(
        (status = 200, description = "Matching recruitment notices", body = NoticeListBody),
        (status = 404, description = "No keyword given", body = MessageBody),
        (status = 500, description = "Search failed", body = MessageBody)
    )
)]
#[axum::debug_handler]
pub async fn search_notices(
    State(state): State<AppState>,
    query: std::result::Result<Query<SearchQuery>, QueryRejection>,
) -> Result<impl IntoResponse> {
    let Query(query) = query?;
    Ok(state.user_service.search(query.keyword).await)
}

#[utoipa::path(
    get,
    path = "/api/user/recruitment/{id}",
    params(
        ("id" = i32, Path, description = "Recruitment notice ID")
    ),
    responses(
        (status = 200, description = "Notice detail and the company's other notices", body = NoticeDetailBody),
        (status = 404, description = "Recruitment notice not found", body = MessageBody),
        (status = 500, description = "Detail could not be loaded", body = MessageBody)
    )
)]
#[axum::debug_handler]
pub async fn get_notice_detail(
    State(state): State<AppState>,
    path: std::result::Result<Path<i32>, PathRejection>,
) -> Result<impl IntoResponse> {
    let Path(id) = path?;
    Ok(state.user_service.get_detail(id).await)
}

#[utoipa::path(
    post,
    path = "/api/user/recruitment/{id}",
    params(
        ("id" = i32, Path, description = "Recruitment notice ID")
    ),
    responses(
        (status = 200, description = "Application submitted", body = MessageBody),
        (status = 404, description = "Recruitment notice not found", body = MessageBody),
        (status = 409, description = "Already applied", body = MessageBody),
        (status = 500, description = "Application failed", body = MessageBody)
    )
)]
#[axum::debug_handler]
pub async fn apply_to_notice(
    State(state): State<AppState>,
    CurrentUser(user_id): CurrentUser,
    path: std::result::Result<Path<i32>, PathRejection>,
) -> Result<impl IntoResponse> {
    let Path(id) = path?;
    Ok(state.user_service.apply(id, user_id).await)
}
