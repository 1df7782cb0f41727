// Primary keyword extractor — jieba segmentation with TF-IDF ranking.
//
// The organization vocabulary (department names, domain terms) is
// registered in the dictionary at elevated frequency so the segmenter
// keeps them as atomic units instead of splitting them into generic
// subwords. Weights come from jieba's TF-IDF statistic: term frequency in
// the input combined with corpus-wide rarity.

use anyhow::Result;
use jieba_rs::{Jieba, KeywordExtract, TfIdf};
use tracing::debug;

use super::traits::{Keyword, KeywordExtractor};

/// Dictionary frequency for registered vocabulary. High enough that the
/// segmenter prefers a registered term over any competing split.
const VOCABULARY_FREQ: usize = 1000;

pub struct SegmenterExtractor {
    jieba: Jieba,
    ranker: TfIdf,
}

impl SegmenterExtractor {
    pub fn new<'a, I>(vocabulary: I) -> Self
    where
        I: IntoIterator<Item = &'a str>,
    {
        let mut jieba = Jieba::new();
        for word in vocabulary {
            jieba.add_word(word, Some(VOCABULARY_FREQ), Some("n"));
        }
        Self {
            jieba,
            ranker: TfIdf::default(),
        }
    }
}

impl KeywordExtractor for SegmenterExtractor {
    fn extract(&self, text: &str, top_k: usize) -> Result<Vec<Keyword>> {
        let ranked = self.ranker.extract_keywords(&self.jieba, text, top_k, vec![]);

        if ranked.is_empty() {
            anyhow::bail!(
                "segmentation produced no keywords from {} chars",
                text.chars().count()
            );
        }

        debug!(
            keywords = ranked.len(),
            top = %ranked[0].keyword,
            "Extracted question keywords"
        );

        Ok(ranked
            .into_iter()
            .map(|k| Keyword {
                term: k.keyword,
                weight: k.weight,
            })
            .collect())
    }
}
