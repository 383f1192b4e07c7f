pub mod api;
pub mod app;
pub mod config;
pub mod models;
pub mod redirect;
pub mod short_code;
pub mod storage;
pub mod validation;

pub use app::create_app_router;
