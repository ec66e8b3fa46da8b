use crate::error::{CelestoError, Result};
use std::path::Path;

/// Default env file looked up in the working directory.
pub const DEFAULT_ENV_FILE: &str = ".env";

/// Loads variables from an env file, overriding anything already set.
///
/// With an explicit `path` the file must exist and parse. Without one,
/// `./.env` is loaded when present and skipped otherwise. Returns whether a
/// file was loaded.
pub fn load_env(path: Option<&Path>) -> Result<bool> {
    match path {
        Some(path) => {
            dotenvy::from_path_override(path).map_err(|e| {
                tracing::debug!(path = %path.display(), error = %e, "env file load failed");
                CelestoError::Env(format!(
                    "Failed to load environment variables from path: {}",
                    path.display()
                ))
            })?;
            tracing::debug!(path = %path.display(), "loaded env file");
            Ok(true)
        }
        None => {
            let default = Path::new(DEFAULT_ENV_FILE);
            if !default.exists() {
                return Ok(false);
            }
            load_env(Some(default))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn loads_file_and_overrides() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(".env.test");
        fs::write(&path, "CELESTO_ENV_TEST_VALUE=from-file\n").unwrap();
        std::env::set_var("CELESTO_ENV_TEST_VALUE", "from-process");

        assert!(load_env(Some(&path)).unwrap());
        assert_eq!(
            std::env::var("CELESTO_ENV_TEST_VALUE").unwrap(),
            "from-file"
        );
    }

    #[test]
    fn missing_explicit_file_fails() {
        let err = load_env(Some(Path::new("/invalid/path/.env"))).unwrap_err();
        assert_eq!(
            err.to_string(),
            "Failed to load environment variables from path: /invalid/path/.env"
        );
    }
}
