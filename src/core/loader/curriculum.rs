//! Curriculum JSON loading

use crate::core::config::Config;
use crate::core::error::LoadError;
use crate::core::models::Curriculum;
use std::fs;
use std::path::Path;

/// Load a curriculum from a JSON file mapping course codes to definitions
///
/// # Errors
/// Returns an error if the file cannot be read or is not a valid curriculum map
pub fn load_curriculum_file<P: AsRef<Path>>(path: P) -> Result<Curriculum, LoadError> {
    let path = path.as_ref();
    let content = fs::read_to_string(path)?;
    let curriculum = Curriculum::from_json_str(&content)?;
    crate::debug!(
        "Loaded {} courses from {}",
        curriculum.len(),
        path.display()
    );
    Ok(curriculum)
}

/// Pick the curriculum selected by the configuration
///
/// A non-empty `paths.curriculum` file wins; otherwise the bundled curriculum
/// of `grading.faculty` is used.
///
/// # Errors
/// Returns an error if the configured file cannot be loaded
pub fn resolve_curriculum(config: &Config) -> Result<Curriculum, LoadError> {
    let path = config.paths.curriculum.trim();
    if path.is_empty() {
        let faculty = config.faculty();
        crate::debug!("Using bundled curriculum for {}", faculty.title());
        Curriculum::bundled(faculty)
    } else {
        load_curriculum_file(path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_load_curriculum_file() {
        let mut file = NamedTempFile::new().unwrap();
        write!(
            file,
            r#"{{"A101": {{"name": "Intro", "credit_hours": 3, "prerequisites": [], "level": "First Level"}}}}"#
        )
        .unwrap();

        let curriculum = load_curriculum_file(file.path()).unwrap();
        assert_eq!(curriculum.len(), 1);
        assert_eq!(curriculum.get("A101").unwrap().name, "Intro");
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let result = load_curriculum_file("/definitely/not/here.json");
        assert!(matches!(result, Err(LoadError::Io(_))));
    }

    #[test]
    fn test_resolve_prefers_configured_file() {
        let mut file = NamedTempFile::new().unwrap();
        write!(
            file,
            r#"{{"Z999": {{"name": "Only", "credit_hours": 1, "prerequisites": []}}}}"#
        )
        .unwrap();

        let mut config = Config::from_defaults();
        config.paths.curriculum = file.path().to_string_lossy().into_owned();
        let curriculum = resolve_curriculum(&config).unwrap();
        assert!(curriculum.contains("Z999"));

        config.paths.curriculum.clear();
        config.grading.faculty = "engineering".to_string();
        assert!(resolve_curriculum(&config).unwrap().contains("ENG101"));
    }
}
