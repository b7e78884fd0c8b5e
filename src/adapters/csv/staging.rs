//! Seed staging
//!
//! Copies a configured seed file into place when the dataset path does
//! not exist yet. Lets a container image ship with a bundled dataset that
//! lands in the working directory on first run.

use crate::config::SourceConfig;
use crate::domain::{CohortError, Result};
use std::fs;
use std::path::Path;

/// Stage the input file from the seed if necessary
///
/// No-op when the dataset path already exists or no seed is configured.
/// When the seed itself is missing the copy is skipped; the missing
/// dataset surfaces later as a source-not-found error from the reader.
///
/// # Errors
///
/// Returns [`CohortError::Io`] when creating directories or copying fails
pub fn stage_input(config: &SourceConfig) -> Result<()> {
    let target = Path::new(&config.path);

    if target.exists() {
        tracing::debug!(path = %target.display(), "Dataset already in place, skipping staging");
        return Ok(());
    }

    let Some(seed) = config.seed_path.as_deref() else {
        return Ok(());
    };

    let seed = Path::new(seed);
    if !seed.exists() {
        tracing::debug!(seed = %seed.display(), "Seed file not found, skipping staging");
        return Ok(());
    }

    if let Some(parent) = target.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent).map_err(|e| {
                CohortError::Io(format!(
                    "Failed to create directory {}: {}",
                    parent.display(),
                    e
                ))
            })?;
        }
    }

    fs::copy(seed, target).map_err(|e| {
        CohortError::Io(format!(
            "Failed to copy seed {} to {}: {}",
            seed.display(),
            target.display(),
            e
        ))
    })?;

    tracing::info!(
        seed = %seed.display(),
        path = %target.display(),
        "Staged dataset from seed file"
    );

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn source_config(seed_path: Option<String>, path: String) -> SourceConfig {
        SourceConfig {
            seed_path,
            path,
            ..SourceConfig::default()
        }
    }

    #[test]
    fn test_stage_input_copies_seed_when_target_missing() {
        let dir = TempDir::new().unwrap();
        let seed = dir.path().join("seed.csv");
        fs::write(&seed, "Name,Age\nAlice,34\n").unwrap();
        let target = dir.path().join("data/input.csv");

        let config = source_config(
            Some(seed.to_string_lossy().into_owned()),
            target.to_string_lossy().into_owned(),
        );

        stage_input(&config).unwrap();

        assert_eq!(fs::read_to_string(&target).unwrap(), "Name,Age\nAlice,34\n");
    }

    #[test]
    fn test_stage_input_leaves_existing_target_untouched() {
        let dir = TempDir::new().unwrap();
        let seed = dir.path().join("seed.csv");
        fs::write(&seed, "seed-contents").unwrap();
        let target = dir.path().join("input.csv");
        fs::write(&target, "existing-contents").unwrap();

        let config = source_config(
            Some(seed.to_string_lossy().into_owned()),
            target.to_string_lossy().into_owned(),
        );

        stage_input(&config).unwrap();

        assert_eq!(fs::read_to_string(&target).unwrap(), "existing-contents");
    }

    #[test]
    fn test_stage_input_without_seed_is_noop() {
        let dir = TempDir::new().unwrap();
        let target = dir.path().join("input.csv");

        let config = source_config(None, target.to_string_lossy().into_owned());

        stage_input(&config).unwrap();

        assert!(!target.exists());
    }

    #[test]
    fn test_stage_input_missing_seed_is_noop() {
        let dir = TempDir::new().unwrap();
        let target = dir.path().join("input.csv");

        let config = source_config(
            Some(dir.path().join("no-seed.csv").to_string_lossy().into_owned()),
            target.to_string_lossy().into_owned(),
        );

        stage_input(&config).unwrap();

        assert!(!target.exists());
    }

    #[test]
    fn test_stage_input_creates_parent_directories() {
        let dir = TempDir::new().unwrap();
        let seed = dir.path().join("seed.csv");
        fs::write(&seed, "x").unwrap();
        let target = dir.path().join("a/b/c/input.csv");

        let config = source_config(
            Some(seed.to_string_lossy().into_owned()),
            target.to_string_lossy().into_owned(),
        );

        stage_input(&config).unwrap();

        assert!(target.exists());
    }
}
