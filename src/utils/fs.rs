use std::fs::{self, File, OpenOptions};
use std::io::{self, BufReader, Write};
use std::path::{Path, PathBuf};
use std::sync::LazyLock;

use regex::Regex;

static DATA_FILE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^user_(.+)_data\.txt$").expect("valid data file pattern"));

/// Locations of every file the tracker reads or writes
#[derive(Debug, Clone)]
pub struct DataPaths {
    root: PathBuf,
    catalog: PathBuf,
}

impl DataPaths {
    /// `catalog_file` is resolved against `root` unless it is absolute
    pub fn new(root: &Path, catalog_file: &Path) -> Self {
        DataPaths {
            root: root.to_path_buf(),
            catalog: root.join(catalog_file),
        }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Get the path to the shared food catalog
    pub fn catalog(&self) -> &Path {
        &self.catalog
    }

    /// Get the path to the credential store
    pub fn credentials(&self) -> PathBuf {
        self.root.join("users.txt")
    }

    /// Get the path to a user's journal (profile + logs)
    pub fn user_data(&self, username: &str) -> PathBuf {
        self.root.join(data_file_name(username))
    }

    /// Get the path to a user's custom food catalog
    pub fn custom_foods(&self, username: &str) -> PathBuf {
        self.root.join(format!("user_{}_custom_foods.txt", username))
    }
}

/// File name of a user's journal, also stored as the credential record's data reference
pub fn data_file_name(username: &str) -> String {
    format!("user_{}_data.txt", username)
}

/// Infer the account name from a journal path named `user_<username>_data.txt`
pub fn username_from_data_file(path: &Path) -> Option<String> {
    let name = path.file_name()?.to_str()?;
    let caps = DATA_FILE_RE.captures(name)?;
    Some(caps[1].to_string())
}

/// Open a file for buffered reading, or `None` if it does not exist
pub fn open_if_exists(path: &Path) -> io::Result<Option<BufReader<File>>> {
    match File::open(path) {
        Ok(file) => Ok(Some(BufReader::new(file))),
        Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(None),
        Err(e) => Err(e),
    }
}

/// Append text to a file, creating it when missing
pub fn append_to(path: &Path, text: &str) -> io::Result<()> {
    let mut file = OpenOptions::new().create(true).append(true).open(path)?;
    file.write_all(text.as_bytes())?;
    file.flush()
}

/// Replace a file's contents by writing a sibling temp file and renaming it over the original
pub fn replace_file(path: &Path, contents: &str) -> io::Result<()> {
    let file_name = path
        .file_name()
        .ok_or_else(|| io::Error::new(io::ErrorKind::InvalidInput, "path has no file name"))?;
    let mut tmp_name = file_name.to_os_string();
    tmp_name.push(".tmp");
    let tmp_path = path.with_file_name(tmp_name);

    fs::write(&tmp_path, contents)?;
    fs::rename(&tmp_path, path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_paths() {
        let paths = DataPaths::new(Path::new("data"), Path::new("foods.txt"));
        assert_eq!(paths.catalog(), Path::new("data/foods.txt"));
        assert_eq!(paths.credentials(), PathBuf::from("data/users.txt"));
        assert_eq!(paths.user_data("ada"), PathBuf::from("data/user_ada_data.txt"));
        assert_eq!(
            paths.custom_foods("ada"),
            PathBuf::from("data/user_ada_custom_foods.txt")
        );
    }

    #[test]
    fn test_absolute_catalog_path() {
        let paths = DataPaths::new(Path::new("data"), Path::new("/srv/foods.txt"));
        assert_eq!(paths.catalog(), Path::new("/srv/foods.txt"));
    }

    #[test]
    fn test_username_from_data_file() {
        assert_eq!(
            username_from_data_file(Path::new("/tmp/user_ada_data.txt")),
            Some("ada".to_string())
        );
        assert_eq!(
            username_from_data_file(Path::new("user_mary_ann_data.txt")),
            Some("mary_ann".to_string())
        );
        assert_eq!(username_from_data_file(Path::new("journal.txt")), None);
        assert_eq!(username_from_data_file(Path::new("user__data.txt")), None);
    }

    #[test]
    fn test_open_if_exists_missing() {
        let dir = tempdir().unwrap();
        assert!(open_if_exists(&dir.path().join("absent.txt")).unwrap().is_none());
    }

    #[test]
    fn test_append_creates_and_extends() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("log.txt");

        append_to(&path, "one\n").unwrap();
        append_to(&path, "two\n").unwrap();

        assert_eq!(fs::read_to_string(&path).unwrap(), "one\ntwo\n");
    }

    #[test]
    fn test_replace_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("user_ada_data.txt");
        fs::write(&path, "a much longer original body\n").unwrap();

        replace_file(&path, "short\n").unwrap();

        assert_eq!(fs::read_to_string(&path).unwrap(), "short\n");
        assert!(!dir.path().join("user_ada_data.txt.tmp").exists());
    }
}
