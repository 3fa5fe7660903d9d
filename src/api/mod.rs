// src/api/mod.rs

pub mod client;
pub mod interceptors;

pub use client::ApiClient;
