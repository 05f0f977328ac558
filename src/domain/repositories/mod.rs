pub mod question_repository;
pub mod user_repository;
