use crate::address_book::AddressBook;
use crate::error::StorageResult;
use std::path::Path;

/// Storage for the address book document.
///
/// Provides abstraction over where the address book lives, enabling
/// different implementations (JSON file, in-memory, failing stubs in tests).
pub trait AddressBookStorage {
    /// Location of the backing document.
    fn file_path(&self) -> &Path;

    /// Read the whole address book.
    ///
    /// Returns `Ok(None)` when no document exists yet.
    fn read_address_book(&self) -> StorageResult<Option<AddressBook>>;

    /// Overwrite the stored document with `address_book`.
    fn save_address_book(&self, address_book: &AddressBook) -> StorageResult<()>;
}
