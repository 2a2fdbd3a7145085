pub mod config;
pub mod database;
pub mod dto;
pub mod error;
pub mod middleware;
pub mod models;
pub mod repositories;
pub mod routes;
pub mod services;

use std::sync::Arc;

use crate::config::Config;
use crate::middleware::identity::{IdentityProvider, PlaceholderIdentity};
use crate::repositories::{
    application_repository::{ApplicationRepository, PgApplicationRepository},
    existence_repository::{ExistenceChecker, PgExistenceChecker},
    notice_repository::{NoticeRepository, PgNoticeRepository},
};
use crate::services::{company_service::CompanyService, user_service::UserService};
use sqlx::PgPool;

#[derive(Clone)]
pub struct AppState {
    pub company_service: CompanyService,
    pub user_service: UserService,
    pub identity: Arc<dyn IdentityProvider>,
}

impl AppState {
    /// Wires the PostgreSQL repositories. Each repository is built once and
    /// shared by the services that need it.
    pub fn new(pool: PgPool, config: &Config) -> Self {
        let notices: Arc<dyn NoticeRepository> = Arc::new(PgNoticeRepository::new(pool.clone()));
        let applications: Arc<dyn ApplicationRepository> =
            Arc::new(PgApplicationRepository::new(pool.clone()));
        let existence: Arc<dyn ExistenceChecker> = Arc::new(PgExistenceChecker::new(pool));
        let identity = Arc::new(PlaceholderIdentity::new(config.placeholder_user_id));

        Self::from_parts(notices, applications, existence, identity)
    }

    pub fn from_parts(
        notices: Arc<dyn NoticeRepository>,
        applications: Arc<dyn ApplicationRepository>,
        existence: Arc<dyn ExistenceChecker>,
        identity: Arc<dyn IdentityProvider>,
    ) -> Self {
        let company_service = CompanyService::new(notices.clone(), existence.clone());
        let user_service = UserService::new(notices, applications, existence);

        Self {
            company_service,
            user_service,
            identity,
        }
    }
}
