//! Property tests for the aggregation invariants

use chrono::{TimeZone, Utc};
use moodwire_core::{
    summarize, DocumentSummary, LexiconScorer, SentenceScorer, SentenceSplitter,
    SentimentAggregator,
};
use proptest::prelude::*;

fn doc(index: usize, polarity: f64) -> DocumentSummary {
    DocumentSummary {
        id: index.to_string(),
        title: format!("Article {index}"),
        polarity,
        subjectivity: 0.5,
        source_url: format!("https://news.example/{index}"),
        published_at: Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap(),
    }
}

proptest! {
    #[test]
    fn analyze_scores_every_split_sentence(text in ".{0,200}") {
        let aggregator = SentimentAggregator::new();
        let splitter = SentenceSplitter::new();
        let scorer = LexiconScorer::new();

        let document = aggregator.analyze(&text, &scorer).unwrap();

        prop_assert_eq!(document.sentence_scores.len(), splitter.split(&text).len());
    }

    #[test]
    fn overall_scores_stay_in_range(text in ".{0,200}") {
        let aggregator = SentimentAggregator::new();
        let scorer = LexiconScorer::new();

        let document = aggregator.analyze(&text, &scorer).unwrap();

        prop_assert!((-1.0..=1.0).contains(&document.overall_polarity));
        prop_assert!((0.0..=1.0).contains(&document.overall_subjectivity));
    }

    #[test]
    fn lexicon_scoring_is_idempotent(sentence in ".{0,120}") {
        let scorer = LexiconScorer::new();

        prop_assert_eq!(
            scorer.score(&sentence).unwrap(),
            scorer.score(&sentence).unwrap()
        );
    }

    #[test]
    fn splitting_is_deterministic(text in ".{0,200}") {
        let splitter = SentenceSplitter::new();

        prop_assert_eq!(splitter.split(&text), splitter.split(&text));
    }

    #[test]
    fn summary_respects_counts_and_bounds(
        polarities in prop::collection::vec(-1.0f64..=1.0, 0..20),
        top_k in 1usize..8,
    ) {
        let documents: Vec<DocumentSummary> = polarities
            .iter()
            .enumerate()
            .map(|(i, &p)| doc(i, p))
            .collect();

        let summary = summarize(&documents, top_k).unwrap();

        let expected_len = top_k.min(documents.len());
        prop_assert_eq!(summary.top_positive.len(), expected_len);
        prop_assert_eq!(summary.top_negative.len(), expected_len);
        prop_assert!(summary.positive_count + summary.negative_count <= documents.len());
        prop_assert!((-1.0..=1.0).contains(&summary.mean_polarity));

        // extremes are monotone in their documented directions
        for pair in summary.top_positive.windows(2) {
            prop_assert!(pair[0].polarity >= pair[1].polarity);
        }
        for pair in summary.top_negative.windows(2) {
            prop_assert!(pair[0].polarity <= pair[1].polarity);
        }
    }
}
