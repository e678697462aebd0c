//! [`TestProject`]: a temporary game project.

use std::fs;
use std::path::{Path, PathBuf};

use tempfile::TempDir;

/// A project directory `<tmp>/<name>` holding `<name>.sln`.
pub struct TestProject {
    _temp_dir: TempDir,
    root: PathBuf,
    solution: PathBuf,
}

impl Default for TestProject {
    fn default() -> Self {
        Self::new("TestProject")
    }
}

impl TestProject {
    pub fn new(name: &str) -> Self {
        let temp_dir = TempDir::new().unwrap();
        let root = temp_dir.path().join(name);
        fs::create_dir_all(root.join("Assets")).unwrap();

        let solution = root.join(format!("{name}.sln"));
        fs::write(
            &solution,
            "Microsoft Visual Studio Solution File, Format Version 12.00\n",
        )
        .unwrap();

        Self {
            _temp_dir: temp_dir,
            root,
            solution,
        }
    }

    /// Project directory.
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Path of the solution file.
    pub fn solution(&self) -> &Path {
        &self.solution
    }

    /// Write `content` to `path` relative to the project, creating parents.
    pub fn write_file(&self, path: &str, content: &str) -> PathBuf {
        let full_path = self.root.join(path);
        fs::create_dir_all(full_path.parent().unwrap()).unwrap();
        fs::write(&full_path, content).unwrap();
        full_path
    }

    /// Add a C# script under `Assets/` and return its path.
    pub fn add_script(&self, name: &str) -> PathBuf {
        self.write_file(
            &format!("Assets/{name}"),
            "using UnityEngine;\n\npublic class Test : MonoBehaviour {}\n",
        )
    }

    /// Read a file relative to the project.
    ///
    /// # Panics
    /// Panics if the file cannot be read.
    pub fn read(&self, path: &str) -> String {
        let full_path = self.root.join(path);
        fs::read_to_string(&full_path)
            .unwrap_or_else(|_| panic!("Could not read file: {}", full_path.display()))
    }

    /// Assert that `path` (relative to the project) exists.
    pub fn assert_file_exists(&self, path: &str) {
        let full_path = self.root.join(path);
        assert!(
            full_path.exists(),
            "Expected file to exist: {}",
            full_path.display()
        );
    }

    /// Assert that the file at `path` contains `content`.
    pub fn assert_file_contains(&self, path: &str, content: &str) {
        let file_content = self.read(path);
        assert!(
            file_content.contains(content),
            "File {path} does not contain expected content.\nExpected: {content}\nActual: {file_content}"
        );
    }
}
