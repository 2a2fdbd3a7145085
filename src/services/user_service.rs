use std::sync::Arc;

use axum::http::StatusCode;

use crate::dto::recruitment_dto::NoticeDetailData;
use crate::dto::response::ServiceResponse;
use crate::error::{Error, Result};
use crate::models::recruitment_notice::NoticeSummary;
use crate::repositories::application_repository::ApplicationRepository;
use crate::repositories::existence_repository::ExistenceChecker;
use crate::repositories::notice_repository::NoticeRepository;
use crate::services::NOTICE_NOT_FOUND;

const LIST_FAILED: &str = "채용공고 불러오기에 실패하였습니다.";
const SEARCH_NOT_FOUND: &str = "찾는 채용공고가 없습니다.";
const SEARCH_FAILED: &str = "채용공고 검색에 실패하였습니다.";
const DETAIL_FAILED: &str = "채용공고 상세 페이지 불러오기에 실패하였습니다.";
const ALREADY_APPLIED: &str = "이미 지원한 공고입니다.";
const APPLY_OK: &str = "지원 완료되었습니다.";
const APPLY_FAILED: &str = "지원에 실패하였습니다.";

/// Read and apply workflows on the user side of the board.
#[derive(Clone)]
pub struct UserService {
    notices: Arc<dyn NoticeRepository>,
    applications: Arc<dyn ApplicationRepository>,
    existence: Arc<dyn ExistenceChecker>,
}

impl UserService {
    pub fn new(
        notices: Arc<dyn NoticeRepository>,
        applications: Arc<dyn ApplicationRepository>,
        existence: Arc<dyn ExistenceChecker>,
    ) -> Self {
        Self {
            notices,
            applications,
            existence,
        }
    }

    pub async fn list_notices(&self) -> ServiceResponse<Vec<NoticeSummary>> {
        match self.notices.list_all().await {
            Ok(items) => ServiceResponse::data(StatusCode::OK, items),
            Err(e) => {
                tracing::error!(error = ?e, "failed to list recruitment notices");
                ServiceResponse::message(StatusCode::INTERNAL_SERVER_ERROR, LIST_FAILED)
            }
        }
    }

    pub async fn search(&self, query: Option<String>) -> ServiceResponse<Vec<NoticeSummary>> {
        match self.notices.search(query).await {
            Ok(Some(items)) => ServiceResponse::data(StatusCode::OK, items),
            Ok(None) => ServiceResponse::message(StatusCode::NOT_FOUND, SEARCH_NOT_FOUND),
            Err(e) => {
                tracing::error!(error = ?e, "failed to search recruitment notices");
                ServiceResponse::message(StatusCode::INTERNAL_SERVER_ERROR, SEARCH_FAILED)
            }
        }
    }

    pub async fn get_detail(&self, id: i32) -> ServiceResponse<NoticeDetailData> {
        match self.try_get_detail(id).await {
            Ok(response) => response,
            Err(e) => {
                tracing::error!(error = ?e, recruitment_id = id, "failed to load recruitment notice detail");
                ServiceResponse::message(StatusCode::INTERNAL_SERVER_ERROR, DETAIL_FAILED)
            }
        }
    }

    /// Notice must exist, the user must not have applied yet, then the
    /// application is stored. The first failing step decides the response.
    pub async fn apply(&self, recruitment_id: i32, user_id: i32) -> ServiceResponse {
        match self.try_apply(recruitment_id, user_id).await {
            Ok(response) => response,
            Err(Error::Conflict(_)) => {
                tracing::info!(recruitment_id, user_id, "concurrent duplicate application rejected");
                ServiceResponse::message(StatusCode::CONFLICT, ALREADY_APPLIED)
            }
            Err(e) => {
                tracing::error!(error = ?e, recruitment_id, user_id, "failed to apply to recruitment notice");
                ServiceResponse::message(StatusCode::INTERNAL_SERVER_ERROR, APPLY_FAILED)
            }
        }
    }

    async fn try_get_detail(&self, id: i32) -> Result<ServiceResponse<NoticeDetailData>> {
        let Some(recruitment_detail) = self.notices.get_by_id(id).await? else {
            return Ok(ServiceResponse::message(StatusCode::NOT_FOUND, NOTICE_NOT_FOUND));
        };

        let recruitment_notices_by_company = self
            .notices
            .list_ids_by_company(recruitment_detail.company_name.clone())
            .await?;

        Ok(ServiceResponse::data(
            StatusCode::OK,
            NoticeDetailData {
                recruitment_detail,
                recruitment_notices_by_company,
            },
        ))
    }

    async fn try_apply(&self, recruitment_id: i32, user_id: i32) -> Result<ServiceResponse> {
        if !self.existence.exists(recruitment_id).await? {
            return Ok(ServiceResponse::message(StatusCode::NOT_FOUND, NOTICE_NOT_FOUND));
        }

        if self.applications.check_applied(recruitment_id, user_id).await {
            return Ok(ServiceResponse::message(StatusCode::CONFLICT, ALREADY_APPLIED));
        }

        self.applications.create(user_id, recruitment_id).await?;
        tracing::info!(recruitment_id, user_id, "application submitted");
        Ok(ServiceResponse::message(StatusCode::OK, APPLY_OK))
    }
}
