pub mod authentication;
pub mod task;
pub mod user;
