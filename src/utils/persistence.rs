//! JSON file helpers for the ~/.dreamforge/ data directory.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// Get the ~/.dreamforge/ directory path, creating it if needed.
pub fn dreamforge_dir() -> io::Result<PathBuf> {
    let home_dir = dirs::home_dir().ok_or_else(|| {
        io::Error::new(
            io::ErrorKind::NotFound,
            "Could not determine home directory",
        )
    })?;
    let dir = home_dir.join(".dreamforge");
    fs::create_dir_all(&dir)?;
    Ok(dir)
}

/// Get the full path for a file in ~/.dreamforge/.
pub fn data_path(filename: &str) -> io::Result<PathBuf> {
    Ok(dreamforge_dir()?.join(filename))
}

/// Save a value as pretty-printed JSON into `dir`, returning the written path.
pub fn save_json_in<T: serde::Serialize>(
    dir: &Path,
    filename: &str,
    data: &T,
) -> io::Result<PathBuf> {
    fs::create_dir_all(dir)?;
    let path = dir.join(filename);
    let json = serde_json::to_string_pretty(data)
        .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?;
    fs::write(&path, json)?;
    Ok(path)
}

/// Save a value as pretty-printed JSON to ~/.dreamforge/.
pub fn save_json<T: serde::Serialize>(filename: &str, data: &T) -> io::Result<PathBuf> {
    save_json_in(&dreamforge_dir()?, filename, data)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_save_json_in_writes_pretty_json() {
        let dir = std::env::temp_dir().join(format!("dreamforge_test_{}", std::process::id()));
        let data = vec!["hello".to_string(), "world".to_string()];

        let path = save_json_in(&dir, "persistence_test.json", &data).expect("save should succeed");
        let written = fs::read_to_string(&path).unwrap();
        let loaded: Vec<String> = serde_json::from_str(&written).unwrap();
        assert_eq!(loaded, data);
        assert!(written.contains('\n'));

        // Cleanup
        fs::remove_dir_all(dir).ok();
    }
}
