use crate::config::Mode;

const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Build-time facts the store is seeded from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BuildInfo {
    pub mode: Mode,
    /// Package version injected at compile time.
    pub version: String,
}

impl BuildInfo {
    pub fn new(mode: Mode) -> Self {
        Self {
            mode,
            version: VERSION.to_string(),
        }
    }

    /// Version as displayed to users: `-dev` is appended in development.
    pub fn version_string(&self) -> String {
        if self.mode.is_development() {
            format!("{}-dev", self.version)
        } else {
            self.version.clone()
        }
    }
}
