// src/services/auth_service/mod.rs
pub mod login;
pub mod logout;
pub mod register_user;
