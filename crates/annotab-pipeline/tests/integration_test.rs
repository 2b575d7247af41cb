//! End-to-end tests for the annotation pipeline

use annotab_classifiers::{AnnotatorConfig, CategoryClassifier, SentimentClassifier};
use annotab_core::{Result as CoreResult, Taxonomy};
use annotab_pipeline::{AnnotationPipeline, BatchCoordinator};
use annotab_report::{write_report, CsvRenderer};
use async_trait::async_trait;
use std::sync::Arc;

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter("annotab=debug")
        .with_test_writer()
        .try_init();
}

/// Fixture classifier reproducing the documented example scenario
struct FixtureSentiment;

#[async_trait]
impl SentimentClassifier for FixtureSentiment {
    async fn sentiment(&self, text: &str) -> CoreResult<String> {
        Ok(match text {
            "great goal" => "positive",
            "terrible decision" => "negative",
            _ => "neutral",
        }
        .to_string())
    }

    fn name(&self) -> &str {
        "fixture-sentiment"
    }
}

struct FixtureCategory;

#[async_trait]
impl CategoryClassifier for FixtureCategory {
    async fn category(&self, text: &str, taxonomy: &Taxonomy) -> CoreResult<String> {
        Ok(match text {
            "great goal" => "CORONARY INTERVENTION DEVICES".to_string(),
            _ => taxonomy.fallback().to_string(),
        })
    }

    fn name(&self) -> &str {
        "fixture-category"
    }
}

fn fixture_pipeline() -> AnnotationPipeline {
    let coordinator = BatchCoordinator::new(
        Arc::new(FixtureSentiment),
        Arc::new(FixtureCategory),
        Taxonomy::default(),
    );
    AnnotationPipeline::new(coordinator, Arc::new(CsvRenderer::new()))
}

#[tokio::test(flavor = "multi_thread")]
async fn example_scenario_round_trip() -> anyhow::Result<()> {
    init_tracing();
    let pipeline = fixture_pipeline();

    let texts = vec!["great goal".to_string(), "terrible decision".to_string()];
    let records = pipeline.annotate("Twitter", &texts).await?;

    assert_eq!(records.len(), 2);
    let goal = records
        .iter()
        .find(|r| r.text == "great goal")
        .expect("goal record present");
    assert_eq!(goal.sentiment, "positive");
    assert_eq!(goal.category, "CORONARY INTERVENTION DEVICES");

    let decision = records
        .iter()
        .find(|r| r.text == "terrible decision")
        .expect("decision record present");
    assert_eq!(decision.sentiment, "negative");
    assert_eq!(decision.category, "Other");

    Ok(())
}

#[tokio::test(flavor = "multi_thread")]
async fn report_has_fixed_schema_and_row_per_text() -> anyhow::Result<()> {
    init_tracing();
    let pipeline = fixture_pipeline();

    let texts = vec!["great goal".to_string(), "terrible decision".to_string()];
    let bytes = pipeline.report("Twitter", &texts).await?;
    let report = String::from_utf8(bytes)?;
    let lines: Vec<&str> = report.lines().collect();

    assert_eq!(lines[0], "Platform,Text,Sentiment,Category,Emotion");
    assert_eq!(lines.len(), 3);
    assert!(lines[1..].iter().any(|line| {
        *line == "Twitter,great goal,positive,CORONARY INTERVENTION DEVICES,emotion"
    }));
    assert!(lines[1..]
        .iter()
        .any(|line| *line == "Twitter,terrible decision,negative,Other,emotion"));

    Ok(())
}

#[tokio::test(flavor = "multi_thread")]
async fn empty_batch_report_is_header_only() -> anyhow::Result<()> {
    let pipeline = fixture_pipeline();
    let bytes = pipeline.report("Twitter", &[]).await?;
    let report = String::from_utf8(bytes)?;

    assert_eq!(report.trim_end(), "Platform,Text,Sentiment,Category,Emotion");
    Ok(())
}

#[tokio::test(flavor = "multi_thread")]
async fn large_batch_is_complete_under_contention() -> anyhow::Result<()> {
    let pipeline = fixture_pipeline();
    let texts: Vec<String> = (0..250).map(|i| format!("item {i}")).collect();

    let records = pipeline.annotate("Reddit", &texts).await?;

    assert_eq!(records.len(), texts.len());
    assert!(records.iter().all(|r| r.source == "Reddit"));
    Ok(())
}

#[tokio::test(flavor = "multi_thread")]
async fn config_assembled_pipeline_writes_a_report() -> anyhow::Result<()> {
    init_tracing();
    let pipeline = AnnotationPipeline::from_config(&AnnotatorConfig::default())?;

    let texts = vec![
        "a great coronary stent result".to_string(),
        "terrible catheter recall".to_string(),
        "the match kicks off at noon".to_string(),
    ];
    let bytes = pipeline.report("Twitter", &texts).await?;

    let dir = tempfile::tempdir()?;
    let path = dir.path().join("results.csv");
    write_report(&path, &bytes)?;

    let report = std::fs::read_to_string(&path)?;
    assert_eq!(report.lines().count(), 4);

    let taxonomy = pipeline.coordinator().taxonomy();
    let mut reader = csv::Reader::from_reader(report.as_bytes());
    for row in reader.records() {
        let row = row?;
        assert!(taxonomy.contains(&row[3]));
    }

    Ok(())
}
