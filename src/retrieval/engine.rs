// The retrieval engine: filename fast path, then content scoring.
//
// Two stages, in strict order:
//   1. Filename fast path — a question keyword appearing inside a document
//      id wins outright. "Tell me about X" questions usually name a file.
//   2. Content scoring — occurrence count × keyword weight × term length,
//      summed per document, best snippet returned.
// Both misses resolve to fixed sentinel messages; the only error a caller
// can see is a blank question.

use std::cmp::Ordering;

use tracing::debug;

use crate::corpus::store::Corpus;
use crate::error::AnalysisError;
use crate::keywords::{Keyword, KeywordEngine};
use crate::output::truncate_chars;

/// How many question keywords feed the search.
const QUESTION_TOP_K: usize = 5;
/// Characters of document text cited on a filename fast-path hit.
const CITATION_CHARS: usize = 300;
/// Snippet window around a content match, in characters.
const SNIPPET_BEFORE: usize = 50;
const SNIPPET_AFTER: usize = 150;

/// Returned when the corpus holds no documents.
pub const NOT_LOADED: &str = "知识库未加载，请先加载知识库后再提问";
/// Returned when no document matches any question keyword.
pub const NOT_FOUND: &str =
    "未在知识库中找到相关信息。您可以尝试询问关于公司愿景、各部门职责、招聘政策、薪酬福利、假期制度等方面的问题。";

struct ScoredDocument<'a> {
    id: &'a str,
    score: f64,
    snippet: String,
}

/// Answer a question against one corpus snapshot.
pub fn search(
    question: &str,
    corpus: &Corpus,
    keywords: &KeywordEngine,
) -> Result<String, AnalysisError> {
    if question.trim().is_empty() {
        return Err(AnalysisError::EmptyInput);
    }
    if corpus.is_empty() {
        return Ok(NOT_LOADED.to_string());
    }

    let question_keywords = keywords.extract(question, QUESTION_TOP_K);
    debug!(
        terms = ?question_keywords.iter().map(|k| k.term.as_str()).collect::<Vec<_>>(),
        "Question keywords"
    );

    // Stage 1: filename fast path. First hit wins, no scoring.
    for doc in corpus.iter() {
        for keyword in &question_keywords {
            if !keyword.term.is_empty() && doc.id.contains(&keyword.term) {
                debug!(id = %doc.id, keyword = %keyword.term, "Filename fast path hit");
                return Ok(cite(&doc.id, &truncate_chars(&doc.text, CITATION_CHARS)));
            }
        }
    }

    // Stage 2: content scoring over every document.
    let mut scored: Vec<ScoredDocument> = Vec::new();
    for doc in corpus.iter() {
        let body = doc.text.to_lowercase();

        let mut score = 0.0;
        for keyword in &question_keywords {
            let term = keyword.term.to_lowercase();
            if term.is_empty() {
                continue;
            }
            let count = body.matches(&term).count();
            if count > 0 {
                score += count as f64 * keyword.weight * keyword.term.chars().count() as f64;
            }
        }

        if score > 0.0 {
            if let Some(snippet) = first_snippet(&doc.text, &body, &question_keywords) {
                debug!(id = %doc.id, score, "Document scored");
                scored.push(ScoredDocument {
                    id: &doc.id,
                    score,
                    snippet,
                });
            }
        }
    }

    // Stable sort by score descending; ties keep corpus iteration order.
    scored.sort_by(|a, b| b.score.partial_cmp(&a.score).unwrap_or(Ordering::Equal));

    match scored.first() {
        Some(best) => Ok(format!("{}...", cite(best.id, &best.snippet))),
        None => Ok(NOT_FOUND.to_string()),
    }
}

fn cite(id: &str, body: &str) -> String {
    format!("根据「{id}」中的信息：{body}")
}

/// The snippet around the first question keyword present in the body.
/// Keywords arrive weight-descending, so the first present one is also the
/// most salient one.
fn first_snippet(text: &str, body: &str, keywords: &[Keyword]) -> Option<String> {
    for keyword in keywords {
        let term = keyword.term.to_lowercase();
        if term.is_empty() {
            continue;
        }
        if let Some(byte_pos) = body.find(&term) {
            let char_pos = body[..byte_pos].chars().count();
            return Some(window(text, char_pos));
        }
    }
    None
}

/// Up to SNIPPET_BEFORE chars before the match and SNIPPET_AFTER after it,
/// with line breaks collapsed to spaces.
fn window(text: &str, center: usize) -> String {
    let start = center.saturating_sub(SNIPPET_BEFORE);
    text.chars()
        .skip(start)
        .take(center - start + SNIPPET_AFTER)
        .map(|c| if c == '\n' || c == '\r' { ' ' } else { c })
        .collect()
}
