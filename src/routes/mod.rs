pub mod company;
pub mod health;
pub mod user;

use axum::{
    response::Json,
    routing::{get, post, put},
    Router,
};
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use utoipa::OpenApi;

use crate::{
    dto::{
        recruitment_dto::{NoticeDetailBody, NoticeDetailData, NoticeListBody},
        response::MessageBody,
    },
    models::recruitment_notice::{NoticeDetail, NoticeFields, NoticeSummary},
    AppState,
};

#[derive(OpenApi)]
#[openapi(
    paths(
        company::post_notice,
        company::update_notice,
        company::delete_notice,
        user::list_notices,
        user::search_notices,
        user::get_notice_detail,
        user::apply_to_notice,
        health::health,
    ),
    components(schemas(
        NoticeFields,
        NoticeSummary,
        NoticeDetail,
        NoticeDetailData,
        NoticeListBody,
        NoticeDetailBody,
        MessageBody,
    ))
)]
pub struct ApiDoc;

async fn openapi_json() -> Json<utoipa::openapi::OpenApi> {
    Json(ApiDoc::openapi())
}

pub fn app_router(state: AppState) -> Router {
    let company_api = Router::new()
        .route("/recruitment", post(company::post_notice))
        .route(
            "/recruitment/:id",
            put(company::update_notice).delete(company::delete_notice),
        );

    let user_api = Router::new()
        .route("/recruitment", get(user::list_notices))
        .route("/recruitment/search", get(user::search_notices))
        .route(
            "/recruitment/:id",
            get(user::get_notice_detail).post(user::apply_to_notice),
        );

    Router::new()
        .route("/health", get(health::health))
        .route("/api-docs/openapi.json", get(openapi_json))
        .nest("/api/company", company_api)
        .nest("/api/user", user_api)
        .with_state(state)
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
}
