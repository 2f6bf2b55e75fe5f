// src/store.rs
//
// Local bulletin cache: `<root>/<year>/<month>.<ext>`, one file per bulletin.
// Files are written once and never deleted; a present file is never re-fetched.

use std::{fs, io, path::{Path, PathBuf}};

use crate::bulletin::{BulletinKey, Month};

/// Suffix for in-progress writes; `scan` and `exists` never see these.
const PARTIAL_EXT: &str = "part";

#[derive(Clone, Debug)]
pub struct BulletinStore {
    root: PathBuf,
    ext: String,
}

impl BulletinStore {
    pub fn new(root: impl Into<PathBuf>, ext: &str) -> Self {
        Self { root: root.into(), ext: s!(ext.trim_start_matches('.')) }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn path_for(&self, key: &BulletinKey) -> PathBuf {
        self.root
            .join(key.year.to_string())
            .join(format!("{}.{}", key.month.name(), self.ext))
    }

    pub fn exists(&self, key: &BulletinKey) -> bool {
        self.path_for(key).is_file()
    }

    pub fn read(&self, key: &BulletinKey) -> io::Result<String> {
        let bytes = fs::read(self.path_for(key))?;
        // Some bulletin pages carry stray Windows-1252 bytes; don't lose the page over it.
        Ok(String::from_utf8_lossy(&bytes).into_owned())
    }

    /// Writes beside the final path, then renames into place, so an
    /// interrupted write never leaves a partial page under the real name.
    pub fn save(&self, key: &BulletinKey, doc: &str) -> io::Result<PathBuf> {
        let path = self.path_for(key);
        if let Some(parent) = path.parent() {
            ensure_directory(parent)?;
        }
        let tmp = path.with_extension(format!("{}.{PARTIAL_EXT}", self.ext));
        if let Err(e) = fs::write(&tmp, doc).and_then(|_| fs::rename(&tmp, &path)) {
            let _ = fs::remove_file(&tmp);
            return Err(e);
        }
        Ok(path)
    }

    /// Every stored bulletin, in no particular order. Entries that don't look
    /// like `<year>/<month>.<ext>` are skipped without complaint.
    pub fn scan(&self) -> io::Result<Vec<(BulletinKey, PathBuf)>> {
        let mut out = Vec::new();
        if !self.root.is_dir() {
            return Ok(out);
        }

        for year_entry in fs::read_dir(&self.root)? {
            let year_dir = year_entry?.path();
            if !year_dir.is_dir() { continue; }
            let Some(year) = year_dir
                .file_name()
                .and_then(|s| s.to_str())
                .filter(|s| !s.is_empty() && s.bytes().all(|b| b.is_ascii_digit()))
                .and_then(|s| s.parse::<i32>().ok())
            else {
                logd!("Store: Skipping {}", year_dir.display());
                continue;
            };

            for entry in fs::read_dir(&year_dir)? {
                let path = entry?.path();
                if !path.is_file() { continue; }
                if path.extension().and_then(|s| s.to_str()) != Some(self.ext.as_str()) { continue; }
                let Some(month) = path
                    .file_stem()
                    .and_then(|s| s.to_str())
                    .and_then(Month::from_name)
                else {
                    logd!("Store: Skipping {}", path.display());
                    continue;
                };
                out.push((BulletinKey::new(year, month), path));
            }
        }
        Ok(out)
    }
}

pub fn ensure_directory(dir: &Path) -> io::Result<()> {
    if dir.exists() && !dir.is_dir() {
        return Err(io::Error::other(format!(
            "Path exists but is not a directory: {}",
            dir.display()
        )));
    }
    if !dir.exists() { fs::create_dir_all(dir)?; }
    Ok(())
}
