#![allow(dead_code)]

use std::sync::{
    atomic::{AtomicBool, Ordering},
    Arc, Mutex,
};

use async_trait::async_trait;
use axum::{
    body::{to_bytes, Body},
    http::{request::Parts, Request, StatusCode},
    Router,
};
use chrono::Utc;
use recruitment_board::{
    error::{Error, Result},
    middleware::identity::{IdentityProvider, PlaceholderIdentity},
    models::{
        application::{Application, DEFAULT_APPLICATION_STATUS},
        recruitment_notice::{NoticeDetail, NoticeFields, NoticeSummary, RecruitmentNotice},
    },
    repositories::{
        application_repository::ApplicationRepository, existence_repository::ExistenceChecker,
        notice_repository::NoticeRepository,
    },
    routes::app_router,
    AppState,
};
use serde_json::Value as JsonValue;
use tower::ServiceExt;

/// Record store kept in memory, shared by all three repository seams.
#[derive(Default)]
pub struct MemoryStore {
    notices: Mutex<Vec<RecruitmentNotice>>,
    applications: Mutex<Vec<Application>>,
    failing: AtomicBool,
    lookups_failing: AtomicBool,
}

impl MemoryStore {
    pub fn fail_from_now_on(&self) {
        self.failing.store(true, Ordering::SeqCst);
    }

    /// Only `check_applied` sees a broken store; every other call still works.
    pub fn fail_application_lookups(&self) {
        self.lookups_failing.store(true, Ordering::SeqCst);
    }

    pub fn applications(&self) -> Vec<Application> {
        self.applications.lock().unwrap().clone()
    }

    pub fn notice_ids(&self) -> Vec<i32> {
        self.notices.lock().unwrap().iter().map(|n| n.id).collect()
    }

    fn check(&self) -> Result<()> {
        if self.failing.load(Ordering::SeqCst) {
            return Err(Error::Database(sqlx::Error::PoolTimedOut));
        }
        Ok(())
    }
}

fn contains(field: &Option<String>, needle: &str) -> bool {
    field
        .as_deref()
        .map(|value| value.to_lowercase().contains(needle))
        .unwrap_or(false)
}

#[async_trait]
impl NoticeRepository for MemoryStore {
    async fn create(&self, fields: NoticeFields) -> Result<i32> {
        self.check()?;
        let mut notices = self.notices.lock().unwrap();
        let id = notices.iter().map(|n| n.id).max().unwrap_or(0) + 1;
        let now = Utc::now();
        notices.push(RecruitmentNotice {
            id,
            company_name: fields.company_name,
            country: fields.country,
            area: fields.area,
            position: fields.position,
            compensation: fields.compensation,
            skill: fields.skill,
            detail: fields.detail,
            created_at: now,
            updated_at: now,
        });
        Ok(id)
    }

    async fn update(&self, id: i32, fields: NoticeFields) -> Result<()> {
        self.check()?;
        let mut notices = self.notices.lock().unwrap();
        if let Some(notice) = notices.iter_mut().find(|n| n.id == id) {
            let NoticeFields {
                company_name,
                country,
                area,
                position,
                compensation,
                skill,
                detail,
            } = fields;
            notice.company_name = company_name.or(notice.company_name.take());
            notice.country = country.or(notice.country.take());
            notice.area = area.or(notice.area.take());
            notice.position = position.or(notice.position.take());
            notice.compensation = compensation.or(notice.compensation.take());
            notice.skill = skill.or(notice.skill.take());
            notice.detail = detail.or(notice.detail.take());
            notice.updated_at = Utc::now();
        }
        Ok(())
    }

    async fn delete(&self, id: i32) -> Result<()> {
        self.check()?;
        self.notices.lock().unwrap().retain(|n| n.id != id);
        Ok(())
    }

    async fn list_all(&self) -> Result<Vec<NoticeSummary>> {
        self.check()?;
        let notices = self.notices.lock().unwrap();
        Ok(notices.iter().cloned().map(Into::into).collect())
    }

    async fn search(&self, query: Option<String>) -> Result<Option<Vec<NoticeSummary>>> {
        self.check()?;
        let Some(query) = query else {
            return Ok(None);
        };
        let needle = query.to_lowercase();
        let notices = self.notices.lock().unwrap();
        Ok(Some(
            notices
                .iter()
                .filter(|n| {
                    contains(&n.company_name, &needle)
                        || contains(&n.country, &needle)
                        || contains(&n.area, &needle)
                        || contains(&n.position, &needle)
                        || contains(&n.compensation, &needle)
                        || contains(&n.skill, &needle)
                })
                .cloned()
                .map(Into::into)
                .collect(),
        ))
    }

    async fn get_by_id(&self, id: i32) -> Result<Option<NoticeDetail>> {
        self.check()?;
        let notices = self.notices.lock().unwrap();
        Ok(notices.iter().find(|n| n.id == id).cloned().map(Into::into))
    }

    async fn list_ids_by_company(&self, company_name: Option<String>) -> Result<Vec<i32>> {
        self.check()?;
        let notices = self.notices.lock().unwrap();
        Ok(notices
            .iter()
            .filter(|n| n.company_name == company_name)
            .map(|n| n.id)
            .collect())
    }
}

#[async_trait]
impl ExistenceChecker for MemoryStore {
    async fn exists(&self, notice_id: i32) -> Result<bool> {
        self.check()?;
        Ok(self.notices.lock().unwrap().iter().any(|n| n.id == notice_id))
    }
}

#[async_trait]
impl ApplicationRepository for MemoryStore {
    async fn create(&self, user_id: i32, recruitment_id: i32) -> Result<()> {
        self.check()?;
        let mut applications = self.applications.lock().unwrap();
        if applications
            .iter()
            .any(|a| a.user_id == user_id && a.recruitment_id == recruitment_id)
        {
            return Err(Error::Conflict("applications_user_recruitment_unique".into()));
        }
        let id = applications.len() as i32 + 1;
        let now = Utc::now();
        applications.push(Application {
            id,
            user_id,
            recruitment_id,
            status: DEFAULT_APPLICATION_STATUS.to_string(),
            created_at: now,
            updated_at: now,
        });
        Ok(())
    }

    async fn check_applied(&self, recruitment_id: i32, user_id: i32) -> bool {
        if self.check().is_err() || self.lookups_failing.load(Ordering::SeqCst) {
            return false;
        }
        self.applications
            .lock()
            .unwrap()
            .iter()
            .any(|a| a.user_id == user_id && a.recruitment_id == recruitment_id)
    }
}

/// Reads the caller from an `x-user-id` header, falling back to user 1.
pub struct HeaderIdentity;

impl IdentityProvider for HeaderIdentity {
    fn current_user_id(&self, parts: &Parts) -> Result<i32> {
        match parts.headers.get("x-user-id") {
            Some(value) => value
                .to_str()
                .ok()
                .and_then(|raw| raw.parse().ok())
                .ok_or_else(|| Error::BadRequest("invalid x-user-id".into())),
            None => Ok(1),
        }
    }
}

pub fn setup_app_with(identity: Arc<dyn IdentityProvider>) -> (Router, Arc<MemoryStore>) {
    let store = Arc::new(MemoryStore::default());
    let state = AppState::from_parts(store.clone(), store.clone(), store.clone(), identity);
    (app_router(state), store)
}

pub fn setup_app() -> (Router, Arc<MemoryStore>) {
    setup_app_with(Arc::new(PlaceholderIdentity::new(1)))
}

pub async fn send(
    app: &Router,
    method: &str,
    uri: &str,
    body: Option<JsonValue>,
) -> (StatusCode, JsonValue) {
    send_as(app, method, uri, body, None).await
}

pub async fn send_as(
    app: &Router,
    method: &str,
    uri: &str,
    body: Option<JsonValue>,
    user_id: Option<&str>,
) -> (StatusCode, JsonValue) {
    let mut builder = Request::builder().method(method).uri(uri);
    if let Some(user_id) = user_id {
        builder = builder.header("x-user-id", user_id);
    }
    let req = match body {
        Some(json) => builder
            .header("content-type", "application/json")
            .body(Body::from(json.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };

    read_response(app, req).await
}

/// Sends `body` verbatim with the given content type, if any.
pub async fn send_raw(
    app: &Router,
    method: &str,
    uri: &str,
    content_type: Option<&str>,
    body: &str,
) -> (StatusCode, JsonValue) {
    let mut builder = Request::builder().method(method).uri(uri);
    if let Some(content_type) = content_type {
        builder = builder.header("content-type", content_type);
    }
    let req = builder.body(Body::from(body.to_string())).unwrap();
    read_response(app, req).await
}

async fn read_response(app: &Router, req: Request<Body>) -> (StatusCode, JsonValue) {
    let resp = app.clone().oneshot(req).await.unwrap();
    let status = resp.status();
    let bytes = to_bytes(resp.into_body(), 1024 * 1024).await.unwrap();
    let body = if bytes.is_empty() {
        JsonValue::Null
    } else {
        serde_json::from_slice(&bytes).unwrap_or(JsonValue::Null)
    };
    (status, body)
}
