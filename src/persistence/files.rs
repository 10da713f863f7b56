use anyhow::{Context, Result};
use std::env;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;

/// Get the nook directory - checks for a local .nook first, then falls back to global ~/.nook
pub fn get_nook_dir() -> Result<PathBuf> {
    // Check for local .nook directory
    let current_dir = env::current_dir().context("Could not determine current directory")?;
    let local_nook = find_local_nook(&current_dir);

    if let Some(local_dir) = local_nook {
        return Ok(local_dir);
    }

    // Fall back to global ~/.nook
    let home = dirs::home_dir().context("Could not determine home directory")?;
    Ok(home.join(".nook"))
}

/// Find a local .nook directory by walking up the directory tree
fn find_local_nook(start_dir: &Path) -> Option<PathBuf> {
    let mut current = start_dir;

    loop {
        let nook_dir = current.join(".nook");
        if nook_dir.exists() && nook_dir.is_dir() {
            return Some(nook_dir);
        }

        current = current.parent()?;
    }
}

/// Ensure the nook directory exists
pub fn ensure_nook_dir() -> Result<PathBuf> {
    let dir = get_nook_dir()?;
    if !dir.exists() {
        fs::create_dir_all(&dir)
            .with_context(|| format!("Failed to create directory: {}", dir.display()))?;
    }
    Ok(dir)
}

/// Initialize a local .nook directory in the current directory
pub fn init_local_nook() -> Result<PathBuf> {
    let current_dir = env::current_dir().context("Could not determine current directory")?;
    let nook_dir = current_dir.join(".nook");

    if nook_dir.exists() {
        anyhow::bail!("Nook directory already exists: {}", nook_dir.display());
    }

    fs::create_dir_all(&nook_dir)
        .with_context(|| format!("Failed to create directory: {}", nook_dir.display()))?;

    Ok(nook_dir)
}

/// Atomically write content to a file using temp file + rename
pub fn atomic_write<P: AsRef<Path>>(path: P, content: &str) -> Result<()> {
    let path = path.as_ref();
    let dir = path
        .parent()
        .context("File path has no parent directory")?;

    // Create temp file in the same directory
    let mut temp_file = NamedTempFile::new_in(dir)
        .context("Failed to create temporary file")?;

    // Write content
    temp_file
        .write_all(content.as_bytes())
        .context("Failed to write to temporary file")?;

    // Sync to disk
    temp_file
        .as_file()
        .sync_all()
        .context("Failed to sync temporary file")?;

    // Atomically rename temp file to target
    temp_file
        .persist(path)
        .with_context(|| format!("Failed to persist file: {}", path.display()))?;

    Ok(())
}

/// Read file content, return None if the file doesn't exist
pub fn read_file<P: AsRef<Path>>(path: P) -> Result<Option<String>> {
    let path = path.as_ref();
    if !path.exists() {
        return Ok(None);
    }
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read file: {}", path.display()))?;
    Ok(Some(content))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_get_nook_dir() {
        let dir = get_nook_dir().unwrap();
        assert!(dir.to_string_lossy().contains(".nook"));
    }

    #[test]
    fn test_atomic_write_and_read() {
        let temp_dir = tempfile::tempdir().unwrap();
        let test_file = temp_dir.path().join("test.json");

        let content = "{\"learn\":\"rust\"}";
        atomic_write(&test_file, content).unwrap();

        let read_content = read_file(&test_file).unwrap();
        assert_eq!(read_content.as_deref(), Some(content));
    }

    #[test]
    fn test_read_nonexistent_file() {
        let temp_dir = tempfile::tempdir().unwrap();
        let test_file = temp_dir.path().join("nonexistent.json");

        let content = read_file(&test_file).unwrap();
        assert_eq!(content, None);
    }

    #[test]
    fn test_atomic_write_overwrites() {
        let temp_dir = tempfile::tempdir().unwrap();
        let test_file = temp_dir.path().join("test.json");

        atomic_write(&test_file, "[1]").unwrap();
        atomic_write(&test_file, "[1,2]").unwrap();

        let content = read_file(&test_file).unwrap();
        assert_eq!(content.as_deref(), Some("[1,2]"));
    }

    #[test]
    fn test_find_local_nook_walks_up() {
        let temp_dir = tempfile::tempdir().unwrap();
        let nook = temp_dir.path().join(".nook");
        fs::create_dir_all(&nook).unwrap();
        let nested = temp_dir.path().join("a").join("b");
        fs::create_dir_all(&nested).unwrap();

        let found = find_local_nook(&nested).unwrap();
        assert_eq!(found, nook);
    }
}
