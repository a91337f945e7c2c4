mod error;

use std::path::{Path, PathBuf};

use tempfile::TempDir;

/// A config directory holding config.toml and a desired-state file.
pub(crate) struct Deployment {
    pub(crate) dir: TempDir,
}

impl Deployment {
    pub(crate) fn new(auto_migrate: bool) -> Self {
        let dir = TempDir::new().unwrap();
        std::fs::write(
            dir.path().join("config.toml"),
            format!(
                "[database]\npath = \"app.sqlite3\"\nauto_migrate = {auto_migrate}\n\n\
                 [users]\ndesired_state = \"users.json\"\n"
            ),
        )
        .unwrap();
        Self { dir }
    }

    pub(crate) fn config_file(&self) -> PathBuf {
        self.dir.path().join("config.toml")
    }

    pub(crate) fn database_file(&self) -> PathBuf {
        self.dir.path().join("app.sqlite3")
    }

    pub(crate) fn write_users(&self, json: &str) {
        std::fs::write(self.dir.path().join("users.json"), json).unwrap();
    }

    pub(crate) fn write_secret(&self, name: &str, value: &str) -> PathBuf {
        let path = self.dir.path().join(name);
        std::fs::write(&path, format!("{value}\n")).unwrap();
        path
    }
}

pub(crate) fn json_path(path: &Path) -> String {
    path.display().to_string()
}
