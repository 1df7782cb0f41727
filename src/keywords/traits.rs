// Keyword extractor trait — swap-ready abstraction.
//
// Two implementations exist: the jieba-backed segmenter and the degenerate
// Han-run scanner it falls back to. Both sit behind this trait so the
// retrieval engine never cares which one produced the terms.

use anyhow::Result;

/// A salient term with its extraction weight.
#[derive(Debug, Clone, PartialEq)]
pub struct Keyword {
    pub term: String,
    pub weight: f64,
}

/// Trait for ranking the salient terms of a text.
pub trait KeywordExtractor {
    /// Extract up to `top_k` keywords, ordered by weight descending.
    fn extract(&self, text: &str, top_k: usize) -> Result<Vec<Keyword>>;
}
