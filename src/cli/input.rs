//! Loading of locally saved API responses.

use std::{fs, path::Path};

use serde::{de::DeserializeOwned, Deserialize};

use finbti_domain::{LedgerItem, LedgerPage};

use crate::errors::{FinbtiError, Result};

/// Reads and deserializes a JSON document.
pub fn read_json<T: DeserializeOwned>(path: &Path) -> Result<T> {
    let data = fs::read_to_string(path)
        .map_err(|err| FinbtiError::StorageError(format!("{}: {err}", path.display())))?;
    serde_json::from_str(&data)
        .map_err(|err| FinbtiError::InvalidInput(format!("{}: {err}", path.display())))
}

#[derive(Deserialize)]
#[serde(untagged)]
enum LedgerPayload {
    Items(Vec<LedgerItem>),
    Page(LedgerPage),
}

/// Accepts either a bare array of records or a paginated `{ "content": [...] }` page.
pub fn load_ledger_items(path: &Path) -> Result<Vec<LedgerItem>> {
    let items = match read_json::<LedgerPayload>(path)? {
        LedgerPayload::Items(items) => items,
        LedgerPayload::Page(page) => page.content,
    };
    Ok(items)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn loads_array_and_page_shapes() {
        let dir = tempdir().expect("tempdir");
        let item = r#"{"id": 1, "type": "INCOME", "amount": 100, "transactionAt": "2025-03-01"}"#;

        let array = dir.path().join("array.json");
        fs::write(&array, format!("[{item}]")).expect("write array");
        assert_eq!(load_ledger_items(&array).expect("array").len(), 1);

        let page = dir.path().join("page.json");
        fs::write(&page, format!(r#"{{"content": [{item}, {item}], "hasNext": false}}"#))
            .expect("write page");
        assert_eq!(load_ledger_items(&page).expect("page").len(), 2);
    }

    #[test]
    fn missing_file_is_a_storage_error() {
        let dir = tempdir().expect("tempdir");
        let err = load_ledger_items(&dir.path().join("nope.json")).expect_err("missing");
        assert!(matches!(err, FinbtiError::StorageError(_)));
    }
}
