use std::sync::Arc;

use axum::http::StatusCode;

use crate::dto::response::ServiceResponse;
use crate::error::Result;
use crate::models::recruitment_notice::NoticeFields;
use crate::repositories::existence_repository::ExistenceChecker;
use crate::repositories::notice_repository::NoticeRepository;
use crate::services::NOTICE_NOT_FOUND;

const POST_OK: &str = "채용공고 등록 완료";
const POST_FAILED: &str = "채용공고 등록 실패";
const UPDATE_OK: &str = "채용공고 수정 완료.";
const UPDATE_FAILED: &str = "채용공고 수정 실패";
const DELETE_OK: &str = "채용공고 삭제 완료.";
const DELETE_FAILED: &str = "채용공고 삭제 실패.";

/// Company-side mutations of recruitment notices.
#[derive(Clone)]
pub struct CompanyService {
    notices: Arc<dyn NoticeRepository>,
    existence: Arc<dyn ExistenceChecker>,
}

impl CompanyService {
    pub fn new(notices: Arc<dyn NoticeRepository>, existence: Arc<dyn ExistenceChecker>) -> Self {
        Self { notices, existence }
    }

    pub async fn post_notice(&self, fields: NoticeFields) -> ServiceResponse {
        match self.notices.create(fields).await {
            Ok(id) => {
                tracing::info!(recruitment_id = id, "recruitment notice created");
                ServiceResponse::message(StatusCode::OK, POST_OK)
            }
            Err(e) => {
                tracing::error!(error = ?e, "failed to create recruitment notice");
                ServiceResponse::message(StatusCode::INTERNAL_SERVER_ERROR, POST_FAILED)
            }
        }
    }

    pub async fn update_notice(&self, id: i32, fields: NoticeFields) -> ServiceResponse {
        match self.try_update(id, fields).await {
            Ok(response) => response,
            Err(e) => {
                tracing::error!(error = ?e, recruitment_id = id, "failed to update recruitment notice");
                ServiceResponse::message(StatusCode::INTERNAL_SERVER_ERROR, UPDATE_FAILED)
            }
        }
    }

    pub async fn delete_notice(&self, id: i32) -> ServiceResponse {
        match self.try_delete(id).await {
            Ok(response) => response,
            Err(e) => {
                tracing::error!(error = ?e, recruitment_id = id, "failed to delete recruitment notice");
                ServiceResponse::message(StatusCode::INTERNAL_SERVER_ERROR, DELETE_FAILED)
            }
        }
    }

    async fn try_update(&self, id: i32, fields: NoticeFields) -> Result<ServiceResponse> {
        if !self.existence.exists(id).await? {
            return Ok(ServiceResponse::message(StatusCode::NOT_FOUND, NOTICE_NOT_FOUND));
        }

        self.notices.update(id, fields).await?;
        tracing::info!(recruitment_id = id, "recruitment notice updated");
        Ok(ServiceResponse::message(StatusCode::OK, UPDATE_OK))
    }

    async fn try_delete(&self, id: i32) -> Result<ServiceResponse> {
        if !self.existence.exists(id).await? {
            return Ok(ServiceResponse::message(StatusCode::NOT_FOUND, NOTICE_NOT_FOUND));
        }

        self.notices.delete(id).await?;
        tracing::info!(recruitment_id = id, "recruitment notice deleted");
        Ok(ServiceResponse::message(StatusCode::OK, DELETE_OK))
    }
}
