pub mod company_service;
pub mod user_service;

pub(crate) const NOTICE_NOT_FOUND: &str = "채용공고가 존재하지 않습니다.";
