//! Loading benchmark files into the dataset store
//!
//! A benchmark file is a JSON array of records (see [`BenchmarkRecord`]).
//! Its dataset key is the file name without the final extension, so
//! `results/jacobi.json` is loaded as `jacobi`.
//!
//! [`BenchmarkRecord`]: super::BenchmarkRecord

use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use crate::error::{Error, Result};
use super::store::DatasetStore;
use super::table::BenchmarkTable;

/// Dataset key for an input path: base name with the last extension stripped
///
/// # Example
///
/// ```rust
/// use nodescale::data::dataset_key;
///
/// assert_eq!(dataset_key("results/jacobi.json"), "jacobi");
/// assert_eq!(dataset_key("matvec.2021.json"), "matvec.2021");
/// ```
pub fn dataset_key(path: impl AsRef<Path>) -> String {
    path.as_ref()
        .file_stem()
        .map(|stem| stem.to_string_lossy().into_owned())
        .unwrap_or_default()
}

/// Parse a JSON array of records from `reader`
///
/// `key` only labels the error if the content is malformed.
pub fn load_reader<R: Read>(reader: R, key: &str) -> Result<BenchmarkTable> {
    serde_json::from_reader(reader).map_err(|source| {
        if source.is_io() {
            // The handle opened fine but reading it failed
            Error::inaccessible(key, std::io::Error::from(source))
        } else {
            Error::Json {
                key: key.to_string(),
                source,
            }
        }
    })
}

/// Open `path`, parse it and insert the table into `store`
///
/// Prints `Loading: <key>` and returns the key the table was stored under.
///
/// # Errors
///
/// - [`Error::Inaccessible`] if the file cannot be opened or read
/// - [`Error::Json`] if the content is not a valid record array
pub fn load_file(store: &mut DatasetStore, path: impl AsRef<Path>) -> Result<String> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|e| Error::inaccessible(path, e))?;

    let key = dataset_key(path);
    println!("Loading: {}", key);

    let table = load_reader(BufReader::new(file), &key).map_err(|e| match e {
        Error::Inaccessible { source, .. } => Error::inaccessible(path, source),
        other => other,
    })?;
    log::debug!("dataset '{}':\n{}", key, table);

    store.insert(key.clone(), table);
    Ok(key)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::TempDir;

    const TWO_RECORDS: &str = r#"[
        {"Rows": 1024, "Tasksize": 32, "worldsize": 1, "Iterations": 10,
         "Algorithm time": 1000.0, "Algorithm time stdev": 10.0,
         "Total time": 1200.0, "Total time stdev": 12.0, "executions": 4},
        {"Rows": 1024, "Tasksize": 32, "worldsize": 2, "Iterations": 10,
         "Algorithm time": 600.0, "Algorithm time stdev": 8.0,
         "Total time": 800.0, "Total time stdev": 9.0, "executions": 4}
    ]"#;

    #[test]
    fn test_dataset_key_strips_directory_and_extension() {
        assert_eq!(dataset_key("/tmp/out/jacobi_ompss2.json"), "jacobi_ompss2");
        assert_eq!(dataset_key("noext"), "noext");
    }

    #[test]
    fn test_load_reader_parses_array() {
        let table = load_reader(TWO_RECORDS.as_bytes(), "jacobi").unwrap();
        assert_eq!(table.len(), 2);
        assert_eq!(table.records()[1].worldsize, 2);
    }

    #[test]
    fn test_load_reader_malformed_is_json_error() {
        let err = load_reader("{ not json".as_bytes(), "broken").unwrap_err();
        assert!(matches!(err, Error::Json { ref key, .. } if key == "broken"));
        assert!(!err.is_inaccessible());
    }

    #[test]
    fn test_load_file_inserts_under_stem() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("matvec.json");
        let mut file = File::create(&path).unwrap();
        file.write_all(TWO_RECORDS.as_bytes()).unwrap();

        let mut store = DatasetStore::new();
        let key = load_file(&mut store, &path).unwrap();

        assert_eq!(key, "matvec");
        assert_eq!(store.get("matvec").unwrap().len(), 2);
    }

    #[test]
    fn test_load_file_missing_is_inaccessible() {
        let dir = TempDir::new().unwrap();
        let mut store = DatasetStore::new();

        let err = load_file(&mut store, dir.path().join("absent.json")).unwrap_err();

        assert!(err.is_inaccessible());
        assert!(store.is_empty());
    }
}
