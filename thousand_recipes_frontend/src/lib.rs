pub mod api;
pub mod app_config;
mod components;
mod detail_page;
mod list_page;
pub mod request;
pub mod router;

pub use app_config::FrontendConfig;
pub use router::Router;
