//! Controller file discovery and loading.
//!
//! This service centralizes controller file operations so discovery order,
//! error messages, and file handling stay consistent between the generate
//! and inspect commands.

use crate::config::ControllerSource;
use crate::models::AnimatorController;
use crate::parser;
use anyhow::{bail, Context, Result};
use std::path::{Path, PathBuf};

/// Service for locating and loading `.controller` files.
pub struct ControllerService;

impl ControllerService {
    /// Loads a single controller file.
    pub fn load(path: &Path) -> Result<AnimatorController> {
        parser::parse_controller_file(path)
            .with_context(|| format!("Failed to load controller from {}", path.display()))
    }

    /// Resolves a controller source into an ordered list of files.
    ///
    /// Folder sources are scanned recursively and sorted by path so the
    /// generated file is stable across runs; explicit lists keep the order
    /// given. An empty result is an error because the generated file would
    /// be an empty class.
    pub fn resolve(source: &ControllerSource) -> Result<Vec<PathBuf>> {
        let paths = match source {
            ControllerSource::Folder { path } => {
                if !path.is_dir() {
                    bail!("Controller folder does not exist: {}", path.display());
                }

                let mut found = Vec::new();
                Self::scan_folder(path, &mut found)?;
                found.sort();
                found
            }
            ControllerSource::Controllers { paths } => {
                for path in paths {
                    if !path.is_file() {
                        bail!("Controller file does not exist: {}", path.display());
                    }
                }
                paths.clone()
            }
        };

        if paths.is_empty() {
            match source {
                ControllerSource::Folder { path } => {
                    bail!("No .controller files found under {}", path.display())
                }
                ControllerSource::Controllers { .. } => {
                    bail!("No controller files specified")
                }
            }
        }

        Ok(paths)
    }

    /// Resolves a source and loads every controller in it.
    pub fn load_all(source: &ControllerSource) -> Result<Vec<AnimatorController>> {
        Self::resolve(source)?
            .iter()
            .map(|path| Self::load(path))
            .collect()
    }

    fn scan_folder(dir: &Path, found: &mut Vec<PathBuf>) -> Result<()> {
        let entries = std::fs::read_dir(dir)
            .with_context(|| format!("Failed to read directory: {}", dir.display()))?;

        for entry in entries {
            let entry = entry
                .with_context(|| format!("Failed to read directory entry in {}", dir.display()))?;
            let path = entry.path();

            if path.is_dir() {
                Self::scan_folder(&path, found)?;
            } else if path.extension().is_some_and(|ext| ext == "controller") {
                found.push(path);
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn write_controller(dir: &Path, name: &str) -> PathBuf {
        let content = format!(
            "--- !u!91 &9100000\nAnimatorController:\n  m_Name: {name}\n"
        );
        let path = dir.join(format!("{name}.controller"));
        fs::write(&path, content).unwrap();
        path
    }

    #[test]
    fn folder_scan_is_recursive_and_sorted() {
        let dir = TempDir::new().unwrap();
        let nested = dir.path().join("enemies");
        fs::create_dir(&nested).unwrap();

        write_controller(dir.path(), "Zebra");
        write_controller(&nested, "Goblin");
        fs::write(dir.path().join("notes.txt"), "ignore me").unwrap();

        let source = ControllerSource::Folder {
            path: dir.path().to_path_buf(),
        };
        let paths = ControllerService::resolve(&source).unwrap();
        assert_eq!(paths.len(), 2);
        // Sorted by full path ("Zebra" < "enemies" in byte order)
        assert!(paths[0].ends_with("Zebra.controller"));
        assert!(paths[1].ends_with("enemies/Goblin.controller"));
    }

    #[test]
    fn empty_folder_is_an_error() {
        let dir = TempDir::new().unwrap();
        let source = ControllerSource::Folder {
            path: dir.path().to_path_buf(),
        };
        assert!(ControllerService::resolve(&source).is_err());
    }

    #[test]
    fn missing_explicit_file_is_an_error() {
        let source = ControllerSource::Controllers {
            paths: vec![PathBuf::from("/nonexistent/Foo.controller")],
        };
        assert!(ControllerService::resolve(&source).is_err());
    }

    #[test]
    fn explicit_list_keeps_given_order() {
        let dir = TempDir::new().unwrap();
        let zebra = write_controller(dir.path(), "Zebra");
        let goblin = write_controller(dir.path(), "Goblin");

        let source = ControllerSource::Controllers {
            paths: vec![zebra.clone(), goblin.clone()],
        };
        let paths = ControllerService::resolve(&source).unwrap();
        assert_eq!(paths, vec![zebra, goblin]);
    }

    #[test]
    fn load_all_parses_each_controller() {
        let dir = TempDir::new().unwrap();
        write_controller(dir.path(), "Player");

        let source = ControllerSource::Folder {
            path: dir.path().to_path_buf(),
        };
        let controllers = ControllerService::load_all(&source).unwrap();
        assert_eq!(controllers.len(), 1);
        assert_eq!(controllers[0].name, "Player");
    }
}
