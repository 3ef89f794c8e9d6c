//! The store module reads and writes the JSON and CSV artifacts of a run.
//! Writes land in a temporary sibling file that is renamed into place, so an
//! interrupted run leaves earlier outputs untouched.

use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result, anyhow};
use log::{debug, warn};
use serde::Serialize;

use crate::page::Page;

/// How new pages are combined with pages already in a content file.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum MergeMode {
    /// Replace the page with the same URL, append otherwise.
    #[default]
    Upsert,
    /// Append every page, keeping duplicates.
    Append,
}

/// Outcome of a merge.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub struct MergeStats {
    pub added: usize,
    pub replaced: usize,
}

fn temp_sibling(path: &Path) -> PathBuf {
    let name = path
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_default();
    path.with_file_name(format!(".{name}.tmp"))
}

/// Writes bytes to `path` through a temporary sibling file.
///
/// # Errors
///
/// Returns an error if the parent directory cannot be created or the file cannot be written or renamed.
pub fn write_atomic(path: &Path, bytes: &[u8]) -> Result<()> {
    if let Some(parent) = path.parent().filter(|parent| !parent.as_os_str().is_empty()) {
        fs::create_dir_all(parent)
            .context(format!("Failed to create directory: {}", parent.display()))?;
    }

    let temp = temp_sibling(path);
    fs::write(&temp, bytes).context(format!("Failed to write file: {}", temp.display()))?;
    fs::rename(&temp, path).context(format!("Failed to move {} into place", path.display()))?;
    debug!("Wrote {} bytes to {}", bytes.len(), path.display());
    Ok(())
}

/// Serializes a value as pretty JSON.
///
/// # Errors
///
/// Returns an error if serialization or writing fails.
pub fn save_json<T: Serialize + ?Sized>(path: &Path, value: &T) -> Result<()> {
    let json = serde_json::to_string_pretty(value)
        .context(format!("Failed to serialize {}", path.display()))?;
    write_atomic(path, json.as_bytes())
}

/// Writes serde rows as CSV with a header line.
///
/// # Errors
///
/// Returns an error if a row cannot be serialized or the file cannot be written.
pub fn save_csv<T: Serialize>(path: &Path, rows: &[T]) -> Result<()> {
    let mut writer = csv::Writer::from_writer(Vec::new());
    for row in rows {
        writer
            .serialize(row)
            .context(format!("Failed to serialize CSV row for {}", path.display()))?;
    }
    let bytes = writer
        .into_inner()
        .map_err(|error| anyhow!("Failed to flush CSV for {}: {}", path.display(), error))?;
    write_atomic(path, &bytes)
}

/// Loads a page file, recovering structural keys from URLs where missing.
///
/// # Arguments
///
/// * `path` - Path of a JSON array of pages
///
/// # Errors
///
/// Returns an error if the file is missing, unreadable or not a page array.
pub fn load_pages(path: &Path) -> Result<Vec<Page>> {
    let content = fs::read_to_string(path)
        .context(format!("Failed to read page file: {}", path.display()))?;
    let mut pages: Vec<Page> = serde_json::from_str(&content)
        .context(format!("Failed to parse page file: {}", path.display()))?;

    for page in &mut pages {
        if !page.resolve_key() {
            warn!("Cannot derive page key from URL: {}", page.url);
        }
    }
    debug!("Loaded {} pages from {}", pages.len(), path.display());
    Ok(pages)
}

/// Loads a page file, treating a missing file as empty.
///
/// # Errors
///
/// Returns an error if the file exists but cannot be read or parsed.
pub fn load_pages_or_empty(path: &Path) -> Result<Vec<Page>> {
    if path.exists() {
        load_pages(path)
    } else {
        debug!("{} does not exist, starting empty", path.display());
        Ok(Vec::new())
    }
}

/// Merges `additions` into `pages`.
///
/// In upsert mode a page whose URL is already present replaces the existing
/// record in place; new URLs are appended in order. In append mode every page
/// is appended.
pub fn merge_pages(pages: &mut Vec<Page>, additions: Vec<Page>, mode: MergeMode) -> MergeStats {
    let mut stats = MergeStats::default();

    match mode {
        MergeMode::Append => {
            stats.added = additions.len();
            pages.extend(additions);
        }
        MergeMode::Upsert => {
            let mut positions: HashMap<String, usize> = pages
                .iter()
                .enumerate()
                .map(|(index, page)| (page.url.clone(), index))
                .collect();

            for page in additions {
                match positions.get(&page.url).and_then(|&index| pages.get_mut(index)) {
                    Some(existing) => {
                        *existing = page;
                        stats.replaced += 1;
                    }
                    None => {
                        positions.insert(page.url.clone(), pages.len());
                        pages.push(page);
                        stats.added += 1;
                    }
                }
            }
        }
    }

    stats
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Catalog;
    use crate::manifest::{ManifestScope, generate_manifest};

    fn sample() -> Vec<Page> {
        generate_manifest(&Catalog::builtin(), &ManifestScope::default())
    }

    #[test]
    fn upsert_replaces_same_url() {
        let mut pages = sample();
        let count = pages.len();
        let mut changed = sample();
        for page in &mut changed {
            page.title = "changed".to_string();
        }

        let stats = merge_pages(&mut pages, changed, MergeMode::Upsert);
        assert_eq!(stats, MergeStats { added: 0, replaced: count });
        assert_eq!(pages.len(), count);
        assert!(pages.iter().all(|page| page.title == "changed"));
    }

    #[test]
    fn append_keeps_duplicates() {
        let mut pages = sample();
        let count = pages.len();
        let stats = merge_pages(&mut pages, sample(), MergeMode::Append);
        assert_eq!(stats.added, count);
        assert_eq!(pages.len(), count * 2);
    }

    #[test]
    fn saved_pages_load_back() {
        let dir = tempfile::tempdir().expect("temp dir");
        let path = dir.path().join("nested").join("pages.json");
        let pages = sample();

        save_json(&path, &pages).expect("saved");
        assert!(!temp_sibling(&path).exists());
        assert_eq!(load_pages(&path).expect("loaded"), pages);
    }

    #[test]
    fn missing_optional_file_is_empty() {
        let dir = tempfile::tempdir().expect("temp dir");
        let pages = load_pages_or_empty(&dir.path().join("absent.json")).expect("empty");
        assert!(pages.is_empty());
        assert!(load_pages(&dir.path().join("absent.json")).is_err());
    }
}
