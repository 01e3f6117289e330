mod build_info;
mod loader;
mod types;

pub use build_info::BuildInfo;
pub use loader::ConfigError;
pub use types::{ApiConfig, AppConfig, Config, Mode, UiConfig};
