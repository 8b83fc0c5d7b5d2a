use std::{
    fs, io,
    path::{Path, PathBuf},
};

use tracing::debug;

use super::{data::BookData, LoadError, SaveError, Storage};
use crate::domain::{InternshipBook, UserPrefs};

/// File-backed [`Storage`] writing pretty-printed JSON.
#[derive(Debug, Clone)]
pub struct JsonStorage {
    prefs_file: PathBuf,
    data_file: PathBuf,
}

impl JsonStorage {
    /// Creates a storage handle over the given preference and data files.
    ///
    /// Nothing is touched on disk until a load or save is requested.
    #[must_use]
    pub const fn new(prefs_file: PathBuf, data_file: PathBuf) -> Self {
        Self {
            prefs_file,
            data_file,
        }
    }

    /// The path of the internship data file.
    #[must_use]
    pub fn data_file(&self) -> &Path {
        &self.data_file
    }

    fn write(&self, path: &Path, contents: &str) -> Result<(), SaveError> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).map_err(|source| classify(source, path))?;
        }
        fs::write(path, contents).map_err(|source| classify(source, path))
    }
}

fn classify(source: io::Error, path: &Path) -> SaveError {
    if source.kind() == io::ErrorKind::PermissionDenied {
        SaveError::PermissionDenied {
            path: path.to_path_buf(),
            source,
        }
    } else {
        SaveError::Io(source)
    }
}

fn read_json<T: serde::de::DeserializeOwned>(path: &Path) -> Result<Option<T>, LoadError> {
    debug!(path = %path.display(), "reading data file");
    let contents = match fs::read_to_string(path) {
        Ok(contents) => contents,
        Err(source) if source.kind() == io::ErrorKind::NotFound => return Ok(None),
        Err(source) => {
            return Err(LoadError::Io {
                path: path.to_path_buf(),
                source,
            })
        }
    };
    let value = serde_json::from_str(&contents).map_err(|source| LoadError::Malformed {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(Some(value))
}

impl Storage for JsonStorage {
    fn load_book(&self) -> Result<Option<InternshipBook>, LoadError> {
        let Some(data) = read_json::<BookData>(&self.data_file)? else {
            return Ok(None);
        };
        Ok(Some(data.try_into_book()?))
    }

    fn save_book(&self, book: &InternshipBook) -> Result<(), SaveError> {
        debug!(path = %self.data_file.display(), "writing data file");
        let contents = serde_json::to_string_pretty(&BookData::from(book))?;
        self.write(&self.data_file, &contents)
    }

    fn load_prefs(&self) -> Result<Option<UserPrefs>, LoadError> {
        read_json(&self.prefs_file)
    }

    fn save_prefs(&self, prefs: &UserPrefs) -> Result<(), SaveError> {
        debug!(path = %self.prefs_file.display(), "writing preferences file");
        let contents = serde_json::to_string_pretty(prefs)?;
        self.write(&self.prefs_file, &contents)
    }
}

#[cfg(test)]
mod tests {
    use tempfile::tempdir;

    use super::*;
    use crate::domain::internship::tests::sample;

    fn storage_in(dir: &Path) -> JsonStorage {
        JsonStorage::new(dir.join("preferences.json"), dir.join("internships.json"))
    }

    #[test]
    fn book_save_and_load_round_trip() {
        let tmp = tempdir().unwrap();
        let storage = storage_in(tmp.path());

        let mut book = InternshipBook::new();
        book.add(sample("Acme", "SWE"));
        book.add(sample("Initech", "Data Analyst"));
        storage.save_book(&book).unwrap();

        let loaded = storage.load_book().unwrap().expect("book was saved");
        assert_eq!(loaded.internships(), book.internships());
    }

    #[test]
    fn missing_files_load_as_none() {
        let tmp = tempdir().unwrap();
        let storage = storage_in(tmp.path());

        assert!(storage.load_book().unwrap().is_none());
        assert!(storage.load_prefs().unwrap().is_none());
    }

    #[test]
    fn malformed_data_file_is_a_distinct_error() {
        let tmp = tempdir().unwrap();
        let storage = storage_in(tmp.path());
        fs::write(storage.data_file(), "not json").unwrap();

        assert!(matches!(
            storage.load_book().unwrap_err(),
            LoadError::Malformed { .. }
        ));
    }

    #[test]
    fn invalid_stored_field_is_a_distinct_error() {
        let tmp = tempdir().unwrap();
        let storage = storage_in(tmp.path());
        fs::write(
            storage.data_file(),
            r#"{"internships": [{
                "company_name": " ",
                "contact_name": "John",
                "contact_email": "john@example.com",
                "contact_number": "91234567",
                "location": "Remote",
                "application_status": "Applied",
                "description": "Backend",
                "role": "SWE"
            }]}"#,
        )
        .unwrap();

        assert!(matches!(
            storage.load_book().unwrap_err(),
            LoadError::Invalid(_)
        ));
    }

    #[test]
    fn prefs_save_and_load_round_trip() {
        let tmp = tempdir().unwrap();
        let storage = storage_in(tmp.path());

        let prefs = UserPrefs::default();
        storage.save_prefs(&prefs).unwrap();
        assert_eq!(storage.load_prefs().unwrap(), Some(prefs));
    }

    #[test]
    fn save_creates_missing_parent_directories() {
        let tmp = tempdir().unwrap();
        let storage = JsonStorage::new(
            tmp.path().join("nested/prefs.json"),
            tmp.path().join("nested/deeper/internships.json"),
        );

        storage.save_book(&InternshipBook::new()).unwrap();
        assert!(storage.data_file().exists());
    }
}
