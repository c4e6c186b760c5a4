//! Corpus-level summarization
//!
//! Reduces a batch of per-document results into the aggregate a dashboard
//! renders: mean polarity, positive/negative counts, and the top-K extreme
//! documents in either direction.

use tracing::debug;

use crate::error::{CoreError, Result};
use crate::types::{CorpusSummary, DocumentSummary};

/// Default number of extreme documents kept per direction
pub const DEFAULT_TOP_K: usize = 3;

/// Summarize a corpus of scored documents.
///
/// `positive_count` and `negative_count` use strict inequalities, so
/// documents at exactly `0.0` are counted by neither. `top_positive` is
/// stable-sorted descending by polarity and `top_negative` ascending, ties
/// keeping input order; both are truncated to `top_k`. A `top_k` larger
/// than the corpus returns every document.
///
/// An empty corpus yields [`CorpusSummary::empty`] for any valid `top_k` -
/// the defined empty policy, not an error. `top_k == 0` is a caller error
/// ([`CoreError::InvalidArgument`]); negative values are unrepresentable.
pub fn summarize(documents: &[DocumentSummary], top_k: usize) -> Result<CorpusSummary> {
    if top_k == 0 {
        return Err(CoreError::InvalidArgument {
            reason: "top_k must be at least 1".to_string(),
        });
    }

    if documents.is_empty() {
        return Ok(CorpusSummary::empty());
    }

    let mean_polarity =
        documents.iter().map(|d| d.polarity).sum::<f64>() / documents.len() as f64;
    let positive_count = documents.iter().filter(|d| d.polarity > 0.0).count();
    let negative_count = documents.iter().filter(|d| d.polarity < 0.0).count();

    // two independent stable sorts over the input order, so that ties break
    // the same way in both directions
    let mut by_descending: Vec<&DocumentSummary> = documents.iter().collect();
    by_descending.sort_by(|a, b| b.polarity.total_cmp(&a.polarity));

    let mut by_ascending: Vec<&DocumentSummary> = documents.iter().collect();
    by_ascending.sort_by(|a, b| a.polarity.total_cmp(&b.polarity));

    let top_positive: Vec<DocumentSummary> =
        by_descending.into_iter().take(top_k).cloned().collect();
    let top_negative: Vec<DocumentSummary> =
        by_ascending.into_iter().take(top_k).cloned().collect();

    debug!(
        documents = documents.len(),
        mean_polarity, positive_count, negative_count, "summarized corpus"
    );

    Ok(CorpusSummary {
        mean_polarity,
        positive_count,
        negative_count,
        top_positive,
        top_negative,
    })
}
