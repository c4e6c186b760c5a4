//! Basic usage example for the two-crate architecture

use chrono::{TimeZone, Utc};
use moodwire_api::{analyze_text, Article, Config, Mood, SentimentAnalyzer};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Method 1: Simplest usage with convenience function
    println!("=== Method 1: Convenience Function ===");
    let analysis = analyze_text("The launch was a great success. Critics were furious. Time will tell.")?;

    println!(
        "Overall polarity {:.2}, subjectivity {:.2}",
        analysis.document.overall_polarity, analysis.document.overall_subjectivity
    );
    for score in &analysis.document.sentence_scores {
        println!("  {:+.2} | {}", score.polarity, score.text);
    }
    println!("Processing took {}ms\n", analysis.metadata.processing_time_ms);

    // Method 2: Custom configuration
    println!("=== Method 2: Custom Configuration ===");
    let config = Config::builder()
        .top_k(2)
        .mood_threshold(0.2)
        .extra_abbreviation("Pty")
        .build()?;
    let analyzer = SentimentAnalyzer::with_config(config)?;

    let analysis = analyzer.analyze_text("Acme Pty. beat expectations. Investors were thrilled.")?;
    println!(
        "{} sentences, mood: {}",
        analysis.document.sentence_scores.len(),
        analyzer.mood(analysis.document.overall_polarity)
    );

    // Method 3: Analyzing an article batch
    println!("\n=== Method 3: Article Batch ===");
    let articles = vec![
        Article::new(
            "wire-1",
            "Markets rally on strong earnings",
            "Stocks surged as quarterly results beat forecasts.",
            "https://news.example/rally",
            Utc.with_ymd_and_hms(2024, 7, 15, 9, 0, 0).unwrap(),
        ),
        Article::new(
            "wire-2",
            "Factory shutdown sparks layoffs",
            "Thousands face job losses after the sudden closure.",
            "https://news.example/shutdown",
            Utc.with_ymd_and_hms(2024, 7, 15, 11, 30, 0).unwrap(),
        ),
        Article::new(
            "wire-3",
            "Committee schedules hearing",
            "",
            "https://news.example/hearing",
            Utc.with_ymd_and_hms(2024, 7, 15, 13, 45, 0).unwrap(),
        ),
    ];

    let report = analyzer.analyze_articles(&articles)?;
    println!(
        "Mean polarity {:.2} ({} positive, {} negative)",
        report.summary.mean_polarity, report.summary.positive_count, report.summary.negative_count
    );
    for doc in &report.summary.top_positive {
        println!("  most positive: {} ({:+.2})", doc.title, doc.polarity);
    }
    for doc in &report.summary.top_negative {
        println!("  most negative: {} ({:+.2})", doc.title, doc.polarity);
    }

    // Method 4: Threshold labeling is caller policy
    println!("\n=== Method 4: Mood Labels ===");
    for doc in &report.documents {
        let mood = Mood::from_polarity(doc.polarity, 0.1);
        println!("  [{}] {}", mood, doc.title);
    }

    Ok(())
}
