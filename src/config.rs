use std::env;
use std::path::PathBuf;

use anyhow::Result;

/// Central configuration loaded from environment variables.
///
/// The .env file is loaded automatically at startup via dotenvy. Only the
/// knowledge-base path has a default; the lexicon tables fall back to the
/// built-in company defaults when no override file is given.
pub struct Config {
    /// Root directory of the knowledge base (.txt policy documents).
    pub kb_path: PathBuf,
    /// Optional JSON file overriding the built-in lexicon
    /// (vocabulary, quality keywords, department table).
    pub lexicon_path: Option<PathBuf>,
}

impl Config {
    /// Load configuration from environment variables.
    pub fn load() -> Result<Self> {
        let kb_path = env::var("CERULEAN_KB_PATH")
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from("./knowledge-base"));

        let lexicon_path = env::var("CERULEAN_LEXICON").ok().map(PathBuf::from);

        Ok(Self {
            kb_path,
            lexicon_path,
        })
    }

    /// Check that the knowledge-base root exists.
    /// Call this before operations that expect documents to be loadable;
    /// a missing root is not fatal for the core (it yields an empty corpus),
    /// but the CLI wants to tell the operator up front.
    pub fn require_kb(&self) -> Result<()> {
        if !self.kb_path.is_dir() {
            anyhow::bail!(
                "Knowledge base directory not found: {}\n\
                 Set CERULEAN_KB_PATH in your .env file or create the directory.",
                self.kb_path.display()
            );
        }
        Ok(())
    }
}
