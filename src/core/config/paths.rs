use std::path::PathBuf;

/// Where settings are read from.
#[derive(Debug, Clone)]
pub struct ConfigPaths {
    pub rc_path: Option<PathBuf>,
    /// A path given on the command line must exist; the default may not.
    pub required: bool,
}

impl ConfigPaths {
    /// `~/.bshrc`, skipped quietly when missing.
    pub fn new() -> Self {
        Self {
            rc_path: dirs::home_dir().map(|home| home.join(".bshrc")),
            required: false,
        }
    }

    pub fn explicit(path: PathBuf) -> Self {
        Self {
            rc_path: Some(path),
            required: true,
        }
    }
}

impl Default for ConfigPaths {
    fn default() -> Self {
        Self::new()
    }
}
