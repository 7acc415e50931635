use std::path::{Path, PathBuf};

use crate::error::{Error, Result};

/// Ensures the output path can hold the generated files.
///
/// The directory may already exist; it is created on first write otherwise.
pub fn get_output_dir<P: AsRef<Path>>(output_dir: P) -> Result<PathBuf> {
    let output_dir = output_dir.as_ref();
    if output_dir.exists() && !output_dir.is_dir() {
        return Err(Error::OutputDirectoryError {
            output_dir: output_dir.display().to_string(),
        });
    }
    Ok(output_dir.to_path_buf())
}

/// Base name of the destination directory, offered as the default package name.
pub fn default_package_name<P: AsRef<Path>>(output_dir: P) -> String {
    let output_dir = output_dir.as_ref();
    let resolved = output_dir
        .canonicalize()
        .or_else(|_| std::path::absolute(output_dir))
        .unwrap_or_else(|_| output_dir.to_path_buf());

    resolved
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn existing_directory_is_accepted() {
        let dir = tempfile::tempdir().unwrap();
        assert_eq!(get_output_dir(dir.path()).unwrap(), dir.path());
        assert!(get_output_dir(dir.path().join("new")).is_ok());
    }

    #[test]
    fn file_is_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let file = dir.path().join("file");
        std::fs::write(&file, "").unwrap();
        assert!(matches!(get_output_dir(&file), Err(Error::OutputDirectoryError { .. })));
    }

    #[test]
    fn default_name_is_base_name() {
        let dir = tempfile::tempdir().unwrap();
        let project = dir.path().join("my-lib");
        std::fs::create_dir(&project).unwrap();
        assert_eq!(default_package_name(&project), "my-lib");
        assert_eq!(default_package_name(project.join("..").join("my-lib")), "my-lib");
        assert_eq!(default_package_name(dir.path().join("not-yet")), "not-yet");
    }
}
