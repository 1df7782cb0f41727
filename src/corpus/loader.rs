// Knowledge-base loading.
//
// Walks the knowledge-base root for .txt files and builds a Corpus snapshot
// keyed by relative path. Loading is best-effort: a file that cannot be
// read or decoded is logged and skipped, and an unreadable root produces an
// empty corpus. The retrieval engine answers that case with its
// "not loaded" sentinel instead of failing.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use tracing::{debug, info, warn};

use super::decode::decode_bytes;
use super::store::{Corpus, Document};

/// Load every .txt document under `root` into a fresh snapshot.
pub fn load_corpus(root: &Path) -> Corpus {
    if !root.is_dir() {
        warn!(root = %root.display(), "Knowledge base root missing, corpus is empty");
        return Corpus::default();
    }

    let mut docs = Vec::new();
    collect(root, root, &mut docs);

    info!(documents = docs.len(), root = %root.display(), "Knowledge base loaded");
    Corpus::new(docs)
}

fn collect(root: &Path, dir: &Path, docs: &mut Vec<Document>) {
    let entries = match fs::read_dir(dir) {
        Ok(entries) => entries,
        Err(err) => {
            warn!(dir = %dir.display(), error = %err, "Skipping unreadable directory");
            return;
        }
    };

    for entry in entries {
        let path = match entry {
            Ok(entry) => entry.path(),
            Err(err) => {
                warn!(dir = %dir.display(), error = %err, "Skipping unreadable entry");
                continue;
            }
        };

        if path.is_dir() {
            collect(root, &path, docs);
        } else if path.extension().is_some_and(|ext| ext == "txt") {
            match load_document(root, &path) {
                Ok(doc) => {
                    debug!(id = %doc.id, chars = doc.text.chars().count(), "Loaded document");
                    docs.push(doc);
                }
                Err(err) => {
                    warn!(path = %path.display(), error = %err, "Skipping document");
                }
            }
        }
    }
}

fn load_document(root: &Path, path: &Path) -> Result<Document> {
    let raw = fs::read(path).with_context(|| format!("reading {}", path.display()))?;
    let text = decode_bytes(&raw)?;
    let id = path
        .strip_prefix(root)
        .unwrap_or(path)
        .to_string_lossy()
        .into_owned();
    Ok(Document { id, text })
}
