use super::traits::AddressBookStorage;
use super::JsonSerializableAddressBook;
use crate::address_book::AddressBook;
use crate::error::{StorageError, StorageResult};
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

/// Address book storage backed by a single JSON file.
///
/// Reads parse the whole file at once; saves serialize the whole book and
/// overwrite the file in one write.
#[derive(Debug, Clone)]
pub struct JsonAddressBookStorage {
    file_path: PathBuf,
}

impl JsonAddressBookStorage {
    /// Create storage for the document at `file_path`.
    pub fn new(file_path: impl Into<PathBuf>) -> Self {
        Self {
            file_path: file_path.into(),
        }
    }

    fn io_error(&self, source: std::io::Error) -> StorageError {
        StorageError::Io {
            path: self.file_path.clone(),
            source,
        }
    }
}

impl AddressBookStorage for JsonAddressBookStorage {
    fn file_path(&self) -> &Path {
        &self.file_path
    }

    fn read_address_book(&self) -> StorageResult<Option<AddressBook>> {
        let content = match fs::read_to_string(&self.file_path) {
            Ok(content) => content,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                tracing::info!(path = %self.file_path.display(), "Data file not found");
                return Ok(None);
            }
            Err(e) => return Err(self.io_error(e)),
        };

        let document: JsonSerializableAddressBook = serde_json::from_str(&content)?;
        let address_book = document.to_model_type().map_err(|e| {
            tracing::warn!(
                path = %self.file_path.display(),
                error = %e,
                "Illegal values found in data file"
            );
            e
        })?;

        tracing::info!(
            path = %self.file_path.display(),
            records = address_book.len(),
            "Address book loaded"
        );
        Ok(Some(address_book))
    }

    fn save_address_book(&self, address_book: &AddressBook) -> StorageResult<()> {
        if let Some(parent) = self.file_path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent).map_err(|e| self.io_error(e))?;
            }
        }

        let document = JsonSerializableAddressBook::from(address_book);
        let json = serde_json::to_string_pretty(&document)?;
        fs::write(&self.file_path, json).map_err(|e| self.io_error(e))?;

        tracing::debug!(
            path = %self.file_path.display(),
            records = address_book.len(),
            "Address book saved"
        );
        Ok(())
    }
}
