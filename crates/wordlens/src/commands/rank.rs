use wordlens_core::{rank_keywords, RankedKeyword};

use crate::cli::InputArgs;
use crate::input::read_text;

pub fn run(input: &InputArgs, json: bool) -> anyhow::Result<()> {
    let text = read_text(input)?;
    let ranked = rank_keywords(&text);

    if json {
        println!("{}", serde_json::to_string_pretty(&ranked)?);
        return Ok(());
    }

    if ranked.is_empty() {
        println!("No words found.");
        return Ok(());
    }

    print!("{}", format_table(&ranked));
    Ok(())
}

fn format_table(ranked: &[RankedKeyword]) -> String {
    let width = ranked.iter().map(|k| k.token.len()).max().unwrap_or(0);
    let mut out = String::new();
    for kw in ranked {
        out.push_str(&format!("{:<width$}  {}\n", kw.token, kw.count, width = width));
    }
    out
}
