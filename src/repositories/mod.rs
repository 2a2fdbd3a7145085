pub mod application_repository;
pub mod existence_repository;
pub mod notice_repository;
