//! JSON file persistence for directory records
//!
//! Each collection (users, accounts) lives in its own file as a pretty-printed
//! JSON array with 4-space indentation.
//!
//! # Write Strategy
//!
//! Saves always rewrite the whole collection. The new content is written to a
//! temporary file in the same directory, flushed to disk, and then renamed over
//! the target. A crash mid-write leaves the previous file untouched.
//!
//! The replacement keeps the permissions of the file it replaces. A file
//! written for the first time gets the same mode a plain `File::create` would
//! give it under the current umask.
//!
//! # Error Handling
//!
//! - A missing file loads as an empty collection
//! - Unreadable or malformed files are reported as `BankError::Persistence`

use crate::core::traits::RecordStore;
use crate::types::BankError;
use log::debug;
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::ser::PrettyFormatter;
use std::fs::{self, File};
use std::io::{BufReader, BufWriter, ErrorKind, Write};
use std::marker::PhantomData;
use std::path::{Path, PathBuf};
use tempfile::{Builder, NamedTempFile};

/// File-backed store for a collection of `T`
///
/// # Examples
///
/// ```no_run
/// use bank_shell::core::traits::RecordStore;
/// use bank_shell::io::JsonStore;
/// use bank_shell::types::User;
///
/// let store: JsonStore<User> = JsonStore::new("usuarios.json");
/// let users = store.load().expect("corrupt user file");
/// println!("{} registered users", users.len());
/// ```
#[derive(Debug)]
pub struct JsonStore<T> {
    path: PathBuf,
    _records: PhantomData<fn() -> T>,
}

impl<T> JsonStore<T> {
    /// Create a store backed by the file at `path`
    ///
    /// The file does not need to exist yet.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        JsonStore {
            path: path.into(),
            _records: PhantomData,
        }
    }

    /// Path of the backing file
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn parent_dir(&self) -> &Path {
        match self.path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent,
            _ => Path::new("."),
        }
    }

    /// Temp file next to the target
    ///
    /// `NamedTempFile` defaults to 0600 on unix; ask for 0666 so the umask
    /// applies as it would for a regular new file.
    fn temp_file(&self) -> std::io::Result<NamedTempFile> {
        #[allow(unused_mut)]
        let mut builder = Builder::new();
        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            builder.permissions(fs::Permissions::from_mode(0o666));
        }
        builder.tempfile_in(self.parent_dir())
    }
}

impl<T> RecordStore<T> for JsonStore<T>
where
    T: Serialize + DeserializeOwned,
{
    fn load(&self) -> Result<Vec<T>, BankError> {
        let file = match File::open(&self.path) {
            Ok(file) => file,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                debug!("{} not found, starting empty", self.path.display());
                return Ok(Vec::new());
            }
            Err(e) => return Err(BankError::persistence(&self.path, e)),
        };

        let records: Vec<T> = serde_json::from_reader(BufReader::new(file))
            .map_err(|e| BankError::persistence(&self.path, e))?;

        debug!("loaded {} records from {}", records.len(), self.path.display());
        Ok(records)
    }

    fn save(&mut self, records: &[T]) -> Result<(), BankError> {
        let to_error = |e: std::io::Error| BankError::persistence(&self.path, e);

        let mut temp = self.temp_file().map_err(to_error)?;
        {
            let mut writer = BufWriter::new(temp.as_file_mut());
            let formatter = PrettyFormatter::with_indent(b"    ");
            let mut serializer = serde_json::Serializer::with_formatter(&mut writer, formatter);
            records
                .serialize(&mut serializer)
                .map_err(|e| BankError::persistence(&self.path, e))?;
            writer.write_all(b"\n").map_err(to_error)?;
            writer.flush().map_err(to_error)?;
        }
        if let Ok(existing) = fs::metadata(&self.path) {
            temp.as_file()
                .set_permissions(existing.permissions())
                .map_err(to_error)?;
        }
        temp.as_file().sync_all().map_err(to_error)?;
        temp.persist(&self.path).map_err(|e| to_error(e.error))?;

        debug!("saved {} records to {}", records.len(), self.path.display());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{Account, User};
    use rstest::rstest;
    use std::fs;
    use tempfile::TempDir;

    fn sample_users() -> Vec<User> {
        vec![
            User::new("Ana Souza", "01-02-1990", "111", "Rua A, 1 - Centro - SP/SP"),
            User::new("Bruno Lima", "31-12-1985", "222", "Av. B, 200 - Bairro - RJ/RJ"),
            User::new("Carla Dias", "15-06-2000", "333", "Praça C, 3 - Vila - MG/BH"),
        ]
    }

    #[test]
    fn test_load_missing_file_returns_empty() {
        let dir = TempDir::new().unwrap();
        let store: JsonStore<User> = JsonStore::new(dir.path().join("usuarios.json"));

        let users = store.load().unwrap();

        assert!(users.is_empty());
        assert!(!store.path().exists());
    }

    #[test]
    fn test_save_then_load_preserves_order_and_fields() {
        let dir = TempDir::new().unwrap();
        let mut store: JsonStore<User> = JsonStore::new(dir.path().join("usuarios.json"));
        let users = sample_users();

        store.save(&users).unwrap();
        let loaded = store.load().unwrap();

        assert_eq!(loaded, users);
    }

    #[test]
    fn test_save_overwrites_whole_collection() {
        let dir = TempDir::new().unwrap();
        let mut store: JsonStore<User> = JsonStore::new(dir.path().join("usuarios.json"));
        let users = sample_users();

        store.save(&users).unwrap();
        store.save(&users[..1]).unwrap();

        assert_eq!(store.load().unwrap(), users[..1].to_vec());
    }

    #[test]
    fn test_save_uses_four_space_indentation() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("contas.json");
        let mut store: JsonStore<Account> = JsonStore::new(&path);
        let owner = User::new("Ana", "01-01-2000", "111", "Rua A");

        store.save(&[Account::new("0001", 1, owner)]).unwrap();
        let content = fs::read_to_string(&path).unwrap();

        assert!(content.starts_with("[\n    {\n        \"agencia\": \"0001\","));
        assert!(content.contains("        \"usuario\": {\n            \"nome\": \"Ana\","));
        assert!(content.ends_with("]\n"));
    }

    #[test]
    fn test_save_leaves_no_temp_files_behind() {
        let dir = TempDir::new().unwrap();
        let mut store: JsonStore<User> = JsonStore::new(dir.path().join("usuarios.json"));

        store.save(&sample_users()).unwrap();

        let entries: Vec<_> = fs::read_dir(dir.path()).unwrap().collect();
        assert_eq!(entries.len(), 1);
    }

    #[cfg(unix)]
    #[rstest]
    #[case::world_readable(0o644)]
    #[case::group_only(0o640)]
    #[case::owner_only(0o600)]
    fn test_save_keeps_existing_file_mode(#[case] mode: u32) {
        use std::os::unix::fs::PermissionsExt;

        let dir = TempDir::new().unwrap();
        let path = dir.path().join("usuarios.json");
        fs::write(&path, "[]\n").unwrap();
        fs::set_permissions(&path, fs::Permissions::from_mode(mode)).unwrap();
        let mut store: JsonStore<User> = JsonStore::new(&path);

        store.save(&sample_users()).unwrap();

        let saved = fs::metadata(&path).unwrap().permissions().mode() & 0o777;
        assert_eq!(saved, mode);
    }

    #[cfg(unix)]
    #[test]
    fn test_new_file_gets_regular_create_mode() {
        use std::os::unix::fs::PermissionsExt;

        let dir = TempDir::new().unwrap();
        let plain = dir.path().join("plain.json");
        fs::write(&plain, "[]\n").unwrap();
        let path = dir.path().join("usuarios.json");
        let mut store: JsonStore<User> = JsonStore::new(&path);

        store.save(&sample_users()).unwrap();

        let mode_of = |p: &Path| fs::metadata(p).unwrap().permissions().mode() & 0o777;
        assert_eq!(mode_of(&path), mode_of(&plain));
    }

    #[test]
    fn test_load_malformed_file_is_persistence_error() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("usuarios.json");
        fs::write(&path, "[{\"nome\": ").unwrap();
        let store: JsonStore<User> = JsonStore::new(&path);

        let result = store.load();

        assert!(matches!(result, Err(BankError::Persistence { .. })));
    }

    #[test]
    fn test_load_wrong_shape_is_persistence_error() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("usuarios.json");
        fs::write(&path, "{\"nome\": \"Ana\"}").unwrap();
        let store: JsonStore<User> = JsonStore::new(&path);

        assert!(matches!(store.load(), Err(BankError::Persistence { .. })));
    }

    #[test]
    fn test_save_into_missing_directory_fails() {
        let dir = TempDir::new().unwrap();
        let mut store: JsonStore<User> =
            JsonStore::new(dir.path().join("missing").join("usuarios.json"));

        let result = store.save(&sample_users());

        assert!(matches!(result, Err(BankError::Persistence { .. })));
    }
}
