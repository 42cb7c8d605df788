use wordlens_core::{extract_top_keywords, Config, KeywordCount};

use crate::cli::InputArgs;
use crate::input::read_text;

pub fn run(
    config: &Config,
    count: Option<i64>,
    input: &InputArgs,
    json: bool,
) -> anyhow::Result<()> {
    let count = resolve_count(config, count)?;
    let text = read_text(input)?;
    println!("{}", render(&text, count, json));
    Ok(())
}

/// Explicit count if given (rejecting negatives), else the configured one
fn resolve_count(config: &Config, count: Option<i64>) -> anyhow::Result<KeywordCount> {
    match count {
        Some(n) => Ok(KeywordCount::try_from(n)?),
        None => Ok(config.keyword_count),
    }
}

fn render(text: &str, count: KeywordCount, json: bool) -> String {
    let summary = extract_top_keywords(text, count);
    if json {
        serde_json::json!({
            "count": count.get(),
            "keywords": summary,
        })
        .to_string()
    } else {
        summary
    }
}
