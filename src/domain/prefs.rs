use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

/// User-adjustable settings, persisted alongside the internship data.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserPrefs {
    /// Path of the internship data file, resolved relative to the
    /// application's data directory when not absolute.
    data_file: PathBuf,
}

impl Default for UserPrefs {
    fn default() -> Self {
        Self {
            data_file: PathBuf::from("internships.json"),
        }
    }
}

impl UserPrefs {
    /// The configured data file path.
    #[must_use]
    pub fn data_file(&self) -> &Path {
        &self.data_file
    }

    /// Resolves the data file path against a root directory.
    ///
    /// An absolute configured path is used as-is.
    #[must_use]
    pub fn data_file_in(&self, root: &Path) -> PathBuf {
        if self.data_file.is_absolute() {
            self.data_file.clone()
        } else {
            root.join(&self.data_file)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_points_at_internships_json() {
        assert_eq!(
            UserPrefs::default().data_file(),
            Path::new("internships.json")
        );
    }

    #[test]
    fn relative_data_file_resolves_against_root() {
        let prefs = UserPrefs::default();
        assert_eq!(
            prefs.data_file_in(Path::new("data")),
            PathBuf::from("data/internships.json")
        );
    }

    #[test]
    fn round_trips_through_json() {
        let prefs = UserPrefs::default();
        let json = serde_json::to_string(&prefs).unwrap();
        let back: UserPrefs = serde_json::from_str(&json).unwrap();
        assert_eq!(prefs, back);
    }
}
