//! Default file locations

use secrets_fs::NormalizedPath;
use std::path::PathBuf;

use crate::error::{CliError, Result};

/// Configuration file name, both in the home directory and as a template
pub const CONFIG_FILE: &str = ".claude.json";

/// Default secrets file, relative to the working directory
pub const SECRETS_FILE: &str = "secrets.env";

/// `~/.claude.json`, or the explicit override.
pub fn config_path(explicit: Option<PathBuf>) -> Result<NormalizedPath> {
    if let Some(path) = explicit {
        return Ok(NormalizedPath::new(path));
    }
    let home = dirs::home_dir()
        .ok_or_else(|| CliError::user("Could not determine the home directory"))?;
    Ok(NormalizedPath::new(home).join(CONFIG_FILE))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_explicit_config_path_wins() {
        let path = config_path(Some(PathBuf::from("/tmp/custom.json"))).unwrap();
        assert_eq!(path.as_str(), "/tmp/custom.json");
    }
}
