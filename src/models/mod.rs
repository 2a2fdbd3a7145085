pub mod application;
pub mod recruitment_notice;
