//! CLI `capture` and `classify` commands.

use anyhow::Result;
use minddump::classify::create_classifier;
use minddump::config::MindDumpConfig;
use minddump::thoughts::store::capture_thought;

/// Classify a thought and store it for the configured user.
pub async fn capture(config: &MindDumpConfig, text: &str) -> Result<()> {
    let classifier = create_classifier(&config.classifier)?;
    let mut conn = super::open(config)?;

    let result = capture_thought(
        &mut conn,
        classifier.as_ref(),
        &config.storage.default_user,
        text,
    )
    .await?;

    println!("Captured {}", result.id);
    println!("  Category:    {}", result.category);
    println!("  Type:        {}", result.thought_type);
    println!("  Status:      {}", result.status);
    println!("  Provenance:  {}", result.provenance.as_str());
    Ok(())
}

/// Dry run: classify without storing and show where the answer came from.
pub async fn classify(config: &MindDumpConfig, text: &str) -> Result<()> {
    let classifier = create_classifier(&config.classifier)?;
    let result = classifier.classify(text.trim()).await;

    println!("Classifier:  {}", classifier.name());
    println!("Category:    {}", result.category);
    println!("Type:        {}", result.thought_type);
    println!("Provenance:  {}", serde_json::to_string(&result.provenance)?);
    Ok(())
}
