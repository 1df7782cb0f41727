// System status display — knowledge-base size and lexicon shape.

use crate::config::Config;
use crate::corpus::store::Corpus;
use crate::lexicon::Lexicon;

/// Display system status to the terminal.
pub fn show(config: &Config, corpus: &Corpus, lexicon: &Lexicon) {
    println!("Knowledge base: {}", config.kb_path.display());
    if corpus.is_empty() {
        println!("  No documents loaded.");
        println!("  Put .txt policy files under the root above, or set CERULEAN_KB_PATH.");
    } else {
        println!(
            "  {} documents, {} characters",
            corpus.len(),
            corpus.total_chars()
        );
    }

    match &config.lexicon_path {
        Some(path) => println!("Lexicon: {}", path.display()),
        None => println!("Lexicon: built-in defaults"),
    }
    println!(
        "  {} vocabulary terms, {} departments",
        lexicon.vocabulary.len(),
        lexicon.departments.len()
    );
}
