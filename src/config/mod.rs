pub mod app_config;
pub mod model;

pub use app_config::load_config;
