// Degenerate fallback extractor — raw Han-character runs.
//
// No segmentation, no salience: every run of 2+ Han characters comes back
// at weight 1.0. Retrieval still works in this mode because occurrence
// counts and term lengths carry the content score.

use anyhow::Result;
use regex_lite::Regex;

use super::traits::{Keyword, KeywordExtractor};

pub struct HanRunExtractor {
    pattern: Regex,
}

impl Default for HanRunExtractor {
    fn default() -> Self {
        let pattern = Regex::new("[\u{4e00}-\u{9fa5}]{2,}").expect("Han run pattern is valid");
        Self { pattern }
    }
}

impl KeywordExtractor for HanRunExtractor {
    fn extract(&self, text: &str, top_k: usize) -> Result<Vec<Keyword>> {
        Ok(self
            .pattern
            .find_iter(text)
            .take(top_k)
            .map(|m| Keyword {
                term: m.as_str().to_string(),
                weight: 1.0,
            })
            .collect())
    }
}
