// Keyword extraction — dictionary-augmented segmentation with a silent
// fallback.
//
// Questions and documents are Chinese text without word separators, so
// extraction needs a segmenter rather than whitespace splitting. The
// primary extractor may fail on degenerate input; the engine recovers by
// scanning for raw Han-character runs, so extraction as seen by callers is
// total.

pub mod scan;
pub mod segmenter;
pub mod traits;

use tracing::warn;

pub use traits::{Keyword, KeywordExtractor};

use scan::HanRunExtractor;
use segmenter::SegmenterExtractor;

/// Total keyword extraction: segmenter first, Han-run scan on failure.
pub struct KeywordEngine {
    primary: SegmenterExtractor,
    fallback: HanRunExtractor,
}

impl KeywordEngine {
    /// Build an engine with the organization vocabulary registered in the
    /// segmenter dictionary.
    pub fn new<'a, I>(vocabulary: I) -> Self
    where
        I: IntoIterator<Item = &'a str>,
    {
        Self {
            primary: SegmenterExtractor::new(vocabulary),
            fallback: HanRunExtractor::default(),
        }
    }

    /// Extract up to `top_k` keywords, weight descending. Never fails:
    /// a primary-extractor error is converted into the degraded scan and
    /// logged, not propagated.
    pub fn extract(&self, text: &str, top_k: usize) -> Vec<Keyword> {
        match self.primary.extract(text, top_k) {
            Ok(keywords) => keywords,
            Err(err) => {
                warn!(error = %err, "Segmentation degraded, falling back to Han-run scan");
                self.fallback.extract(text, top_k).unwrap_or_default()
            }
        }
    }
}
