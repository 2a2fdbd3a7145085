pub mod recruitment_dto;
pub mod response;
