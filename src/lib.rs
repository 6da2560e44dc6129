pub mod api;
pub mod config;
pub mod error;
pub mod model;
pub mod upstream;

pub use api::{router, AppState};
pub use config::AppConfig;
pub use error::AppError;
pub use upstream::FlxpointClient;
