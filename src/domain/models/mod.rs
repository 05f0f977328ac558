pub mod password;
pub mod question;
pub mod registration;
pub mod user;
