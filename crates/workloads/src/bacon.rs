//! The memory and IO bound workload: count the word "bacon" in fetched text.

use tracing::instrument;

use crate::{path_info, Result, TextSource, Upstream};

/// The paragraph count used when the request does not name one.
pub const DEFAULT_PARAGRAPHS: i64 = 1000;

const WORD: &str = "bacon";

/// How many upstream calls cover a requested paragraph count.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChunkPlan {
    /// Number of sequential upstream calls.
    pub calls: u64,
    /// Paragraphs requested by every call.
    pub paragraphs_per_call: u32,
}

impl ChunkPlan {
    /// Plans the calls for `paragraphs`, each requesting `paragraphs_per_call`.
    ///
    /// A count that fits one call (zero and negative counts included) takes
    /// one call. Larger counts round up, so the last call may over-fetch.
    pub fn new(paragraphs: i64, paragraphs_per_call: u32) -> Self {
        let per_call = u64::from(paragraphs_per_call.max(1));
        let calls = match u64::try_from(paragraphs) {
            Ok(paragraphs) if paragraphs > per_call => paragraphs.div_ceil(per_call),
            _ => 1,
        };
        Self {
            calls,
            paragraphs_per_call: paragraphs_per_call.max(1),
        }
    }
}

/// The outcome of one bacon count.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Report {
    /// The paragraph count that was requested.
    pub paragraphs: i64,
    /// Occurrences of the word in the fetched text.
    pub bacon: usize,
}

impl Report {
    /// Renders the response body.
    pub fn render(&self) -> String {
        format!(
            "paragraph count = {}\nbacon count = {}\n",
            self.paragraphs, self.bacon
        )
    }
}

/// Counts whitespace-separated tokens exactly equal to `word`.
pub fn count_word(text: &str, word: &str) -> usize {
    text.split_whitespace().filter(|token| *token == word).count()
}

/// Runs the workload for a request's path info.
pub async fn run(path_info: &str, upstream: &Upstream, source: &dyn TextSource) -> Result<Report> {
    let paragraphs = path_info::param_or(path_info, DEFAULT_PARAGRAPHS);
    count(paragraphs, upstream, source).await
}

/// Fetches enough text for `paragraphs` and counts the word "bacon" in it.
///
/// Chunks are fetched one after the other and concatenated as-is. The first
/// failing chunk fails the whole count.
#[instrument(name = "bacon_count", skip(upstream, source))]
pub async fn count(paragraphs: i64, upstream: &Upstream, source: &dyn TextSource) -> Result<Report> {
    let plan = ChunkPlan::new(paragraphs, upstream.paragraphs_per_call());
    let url = upstream.chunk_url();

    tracing::info!(
        "Calculating the number of instances of the word '{WORD}' within {paragraphs} paragraphs"
    );

    let mut text = String::new();
    for chunk in 0..plan.calls {
        tracing::debug!(chunk, calls = plan.calls, %url, "fetching chunk");
        text.push_str(&source.fetch(&url).await?);
    }

    Ok(Report {
        paragraphs,
        bacon: count_word(&text, WORD),
    })
}
