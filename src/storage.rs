use crate::errors::AppError;
use crate::store::TallyStore;
use std::collections::BTreeMap;
use std::{
    env, fmt,
    path::{Path, PathBuf},
};
use tokio::fs;
use tracing::error;

const KEY_PREFIX: &str = "drink";
const KEY_DELIMITER: char = '_';

/// Per-entry restore failure. Bad entries are skipped, never fatal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RestoreError {
    MalformedStorageEntry,
    InvalidCountValue,
}

impl fmt::Display for RestoreError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RestoreError::MalformedStorageEntry => {
                write!(f, "key does not match drink_<date>_<type>")
            }
            RestoreError::InvalidCountValue => write!(f, "count is not a non-negative integer"),
        }
    }
}

pub fn storage_key(date: &str, drink_type: &str) -> String {
    format!("{KEY_PREFIX}{KEY_DELIMITER}{date}{KEY_DELIMITER}{drink_type}")
}

/// Splits a persisted key into (date, type) and parses the count. Keys are
/// exactly three `_`-separated parts; the ISO date never contains the
/// delimiter, so the split is unambiguous.
pub fn parse_entry(key: &str, raw_count: &str) -> Result<(String, String, u64), RestoreError> {
    let parts: Vec<&str> = key.split(KEY_DELIMITER).collect();
    let (date, drink_type) = match parts.as_slice() {
        [KEY_PREFIX, date, drink_type] if !date.is_empty() && !drink_type.is_empty() => {
            (*date, *drink_type)
        }
        _ => return Err(RestoreError::MalformedStorageEntry),
    };

    let count = raw_count
        .trim()
        .parse::<u64>()
        .map_err(|_| RestoreError::InvalidCountValue)?;

    Ok((date.to_string(), drink_type.to_string(), count))
}

pub fn resolve_data_path() -> Result<PathBuf, std::io::Error> {
    if let Ok(path) = env::var("APP_DATA_PATH") {
        return Ok(PathBuf::from(path));
    }

    Ok(PathBuf::from("data/state.json"))
}

/// One-shot startup restore. A missing or unreadable file yields an empty
/// store; it never aborts startup.
pub async fn load_store(path: &Path) -> TallyStore {
    let entries = match fs::read(path).await {
        Ok(bytes) => match serde_json::from_slice::<BTreeMap<String, String>>(&bytes) {
            Ok(entries) => entries,
            Err(err) => {
                error!("failed to parse data file: {err}");
                BTreeMap::new()
            }
        },
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => BTreeMap::new(),
        Err(err) => {
            error!("failed to read data file: {err}");
            BTreeMap::new()
        }
    };

    let mut store = TallyStore::default();
    store.restore(entries);
    store
}

/// Writes the aggregate back as the flat key-value layout: one
/// `drink_<date>_<type>` key per pair, decimal string count.
pub async fn persist_data(path: &Path, store: &TallyStore) -> Result<(), AppError> {
    let entries: BTreeMap<String, String> = store
        .aggregate_by_date()
        .into_iter()
        .map(|record| {
            (
                storage_key(&record.date, &record.drink_type),
                record.count.to_string(),
            )
        })
        .collect();

    let payload = serde_json::to_vec_pretty(&entries)?;
    fs::write(path, payload).await?;
    Ok(())
}
