//! Per-master on-disk specification store.
//!
//! Files live at `<yaml_dir>/<docName>_<port>` and hold the canonical
//! document body followed by the `hash`/`time`/`masters` trailer
//! (§ [`crate::document::trailer`]). Because the trailer is itself valid
//! YAML appended after the body, a stored file parses as one document:
//! `document::parse` sees the trailer fields as ordinary top-level keys.

use md5::{Digest, Md5};
use std::collections::{HashMap, HashSet};
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};
use std::time::{SystemTime, UNIX_EPOCH};
use tracing::debug;

use crate::document::{append_trailer, parse, split_trailer};
use crate::errors::{Error, Result};
use crate::peer::own_hostname;

/// Metadata produced by a successful [`Store::write`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoredRecord {
    /// Hex-encoded MD5 of the document body (trailer excluded).
    pub hash: String,
    /// Monotonic nanosecond timestamp recorded for this write.
    pub time: i64,
    /// Sorted, deduplicated master set recorded for this write.
    pub masters: Vec<String>,
}

/// A per-master directory of named specification documents.
#[derive(Debug, Clone)]
pub struct Store {
    yaml_dir: PathBuf,
    locks: Arc<Mutex<HashMap<PathBuf, Arc<std::sync::Mutex<()>>>>>,
}

impl Store {
    /// Open a store rooted at `yaml_dir`, creating it if missing.
    pub fn new(yaml_dir: PathBuf) -> Result<Self> {
        std::fs::create_dir_all(&yaml_dir).map_err(|e| Error::io("create yaml directory", e))?;
        Ok(Self {
            yaml_dir,
            locks: Arc::new(Mutex::new(HashMap::new())),
        })
    }

    fn doc_path(&self, doc_name: &str, current_port: &str) -> PathBuf {
        self.yaml_dir.join(format!("{doc_name}_{current_port}"))
    }

    fn lock_for(&self, path: &Path) -> Arc<std::sync::Mutex<()>> {
        let mut locks = self.locks.lock().expect("lock table poisoned");
        locks
            .entry(path.to_path_buf())
            .or_insert_with(|| Arc::new(std::sync::Mutex::new(())))
            .clone()
    }

    /// Write `body` as `<docName>_<currentPort>`, stamping it with a
    /// content hash, a monotonic time (unless `force_time != 0`), and the
    /// union of the file's prior masters, `extra_masters`, and this host.
    pub fn write(
        &self,
        doc_name: &str,
        body: &str,
        current_port: &str,
        extra_masters: &[String],
        force_time: i64,
    ) -> Result<StoredRecord> {
        let path = self.doc_path(doc_name, current_port);
        let file_lock = self.lock_for(&path);
        let _guard = file_lock.lock().expect("per-file lock poisoned");

        // Validate parseability before committing to disk.
        parse(body)?;

        let mut hasher = Md5::new();
        hasher.update(body.as_bytes());
        let hash = hex_encode(&hasher.finalize());

        let time = if force_time != 0 {
            force_time
        } else {
            now_ns()
        };

        let mut masters: Vec<String> = extra_masters.to_vec();
        if let Ok(existing) = std::fs::read_to_string(&path) {
            if let Ok(old_doc) = parse(&existing) {
                masters.extend(old_doc.masters);
            }
        }
        masters.push(format!("{}:{current_port}", own_hostname()));
        let masters = dedupe_sorted(masters);

        let content = append_trailer(body, &hash, time, &masters);
        write_atomic(&path, &content)?;

        debug!(path = %path.display(), %hash, time, "wrote document");
        Ok(StoredRecord {
            hash,
            time,
            masters,
        })
    }

    /// Overwrite `<docName>_<currentPort>` with an already-trailered document
    /// fetched verbatim from a peer (used by the refresh loop, which never
    /// recomputes hash/time/masters locally — it adopts the peer's).
    pub fn overwrite_raw(&self, doc_name: &str, current_port: &str, content: &str) -> Result<()> {
        let path = self.doc_path(doc_name, current_port);
        let file_lock = self.lock_for(&path);
        let _guard = file_lock.lock().expect("per-file lock poisoned");
        write_atomic(&path, content)
    }

    /// Read the stored bytes for `<docName>_<currentPort>`.
    pub fn read(&self, doc_name: &str, current_port: &str) -> Result<String> {
        let path = self.doc_path(doc_name, current_port);
        std::fs::read_to_string(&path)
            .map_err(|_| Error::FileNotExist(path.display().to_string()))
    }

    /// Union `extra_masters` into the `masters` trailer of every file for
    /// `current_port`, leaving each file's body/hash/time untouched.
    pub fn add_master(&self, extra_masters: &[String], current_port: &str) -> Result<()> {
        for path in self.files_for_port(current_port)? {
            let file_lock = self.lock_for(&path);
            let _guard = file_lock.lock().expect("per-file lock poisoned");

            let Ok(content) = std::fs::read_to_string(&path) else {
                continue;
            };
            let Ok(old_doc) = parse(&content) else {
                continue;
            };
            let (body, _trailer) = split_trailer(&content);

            let mut masters = extra_masters.to_vec();
            masters.extend(old_doc.masters);
            let masters = dedupe_sorted(masters);

            let content = append_trailer(body, &old_doc.hash, old_doc.time, &masters);
            write_atomic(&path, &content)?;
        }
        Ok(())
    }

    /// List the document names (e.g. `default.yml`) known for `current_port`.
    pub fn list(&self, current_port: &str) -> Result<Vec<String>> {
        let suffix = format!("_{current_port}");
        let mut names = Vec::new();
        for path in self.files_for_port(current_port)? {
            if let Some(file_name) = path.file_name().and_then(|n| n.to_str()) {
                if let Some(name) = file_name.strip_suffix(&suffix) {
                    names.push(name.to_string());
                }
            }
        }
        names.sort();
        Ok(names)
    }

    fn files_for_port(&self, current_port: &str) -> Result<Vec<PathBuf>> {
        let suffix = format!(".yml_{current_port}");
        let entries = std::fs::read_dir(&self.yaml_dir)
            .map_err(|e| Error::io("read yaml directory", e))?;
        let mut paths = Vec::new();
        for entry in entries {
            let entry = entry.map_err(|e| Error::io("read yaml directory entry", e))?;
            let file_name = entry.file_name();
            if file_name.to_string_lossy().ends_with(&suffix) {
                paths.push(entry.path());
            }
        }
        Ok(paths)
    }

    /// Remove every `*.yml_<port>` file; used when freshly joining a ring.
    pub fn remove_all(&self, current_port: &str) -> Result<()> {
        for path in self.files_for_port(current_port)? {
            let _ = std::fs::remove_file(path);
        }
        Ok(())
    }
}

fn dedupe_sorted(masters: Vec<String>) -> Vec<String> {
    let unique: HashSet<String> = masters.into_iter().filter(|m| !m.is_empty()).collect();
    let mut out: Vec<String> = unique.into_iter().collect();
    out.sort();
    out
}

fn now_ns() -> i64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .expect("system clock before epoch")
        .as_nanos() as i64
}

fn write_atomic(path: &Path, content: &str) -> Result<()> {
    let file_name = path
        .file_name()
        .expect("doc path always has a file name")
        .to_string_lossy();
    let tmp_path = path.with_file_name(format!("{file_name}.tmp"));
    std::fs::write(&tmp_path, content).map_err(|e| Error::io("write temp file", e))?;
    std::fs::rename(&tmp_path, path).map_err(|e| Error::io("rename temp file", e))?;
    Ok(())
}

fn hex_encode(bytes: &[u8]) -> String {
    bytes.iter().map(|b| format!("{b:02x}")).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    const BODY: &str = "version: \"1\"\nservices:\n  hello:\n    ports:\n      - 80:80\n    containers:\n      - image: nginx\n        tag: latest\n";

    #[test]
    fn write_then_read_round_trips() {
        let dir = tempdir().unwrap();
        let store = Store::new(dir.path().to_path_buf()).unwrap();
        let record = store.write("default.yml", BODY, "1207", &[], 0).unwrap();
        assert_eq!(record.hash.len(), 32);
        assert!(record.time > 0);

        let stored = store.read("default.yml", "1207").unwrap();
        assert!(stored.starts_with(BODY.trim_end()) || stored.starts_with(BODY));
        assert!(stored.contains(&format!("hash: {}", record.hash)));
    }

    #[test]
    fn second_write_has_strictly_greater_time() {
        let dir = tempdir().unwrap();
        let store = Store::new(dir.path().to_path_buf()).unwrap();
        let first = store.write("default.yml", BODY, "1207", &[], 0).unwrap();
        let second = store.write("default.yml", BODY, "1207", &[], 0).unwrap();
        assert!(second.time > first.time);
    }

    #[test]
    fn masters_are_sorted_and_deduplicated() {
        let dir = tempdir().unwrap();
        let store = Store::new(dir.path().to_path_buf()).unwrap();
        store.write("default.yml", BODY, "1207", &[], 0).unwrap();
        store
            .add_master(
                &["ok".into(), "ok2".into(), "host1:1207".into(), "ahost:1".into()],
                "1207",
            )
            .unwrap();
        let stored = store.read("default.yml", "1207").unwrap();
        let doc = parse(&stored).unwrap();
        let mut sorted = doc.masters.clone();
        sorted.sort();
        assert_eq!(doc.masters, sorted);
        assert!(doc.masters.contains(&"ahost:1".to_string()));
        assert!(doc.masters.contains(&"ok".to_string()));
    }

    #[test]
    fn list_returns_doc_names_for_port() {
        let dir = tempdir().unwrap();
        let store = Store::new(dir.path().to_path_buf()).unwrap();
        store.write("default.yml", BODY, "1207", &[], 0).unwrap();
        store.write("other.yml", BODY, "1207", &[], 0).unwrap();
        store.write("default.yml", BODY, "1208", &[], 0).unwrap();
        let names = store.list("1207").unwrap();
        assert_eq!(names, vec!["default.yml".to_string(), "other.yml".to_string()]);
    }

    #[test]
    fn force_time_is_preserved() {
        let dir = tempdir().unwrap();
        let store = Store::new(dir.path().to_path_buf()).unwrap();
        let record = store.write("default.yml", BODY, "1207", &[], 123456).unwrap();
        assert_eq!(record.time, 123456);
    }
}
