use anyhow::{Context, Result};
use log::debug;
use std::fs;
use std::path::{Path, PathBuf};

/// Regular files directly under `dir` whose extension is `ext`, sorted by path.
pub fn list_files(dir: &Path, ext: &str) -> Result<Vec<PathBuf>> {
    let mut files = Vec::new();
    for ent in fs::read_dir(dir).with_context(|| format!("failed to list {}", dir.display()))? {
        let p = ent?.path();
        if p.is_file() && p.extension().map_or(false, |e| e == ext) {
            files.push(p);
        }
    }
    files.sort();
    debug!("found {} .{} files in {:?}", files.len(), ext, dir);
    Ok(files)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_list_files() {
        let dir = TempDir::new().unwrap();
        let p = dir.path();
        fs::write(p.join("b.txt"), "b").unwrap();
        fs::write(p.join("a.txt"), "a").unwrap();
        fs::write(p.join("notes.md"), "md").unwrap();
        fs::write(p.join("txt"), "no extension").unwrap();
        fs::create_dir(p.join("sub.txt")).unwrap();

        let files = list_files(p, "txt").unwrap();
        assert_eq!(files, vec![p.join("a.txt"), p.join("b.txt")]);
    }

    #[test]
    fn test_missing_dir() {
        let dir = TempDir::new().unwrap();
        assert!(list_files(&dir.path().join("nope"), "txt").is_err());
    }
}
