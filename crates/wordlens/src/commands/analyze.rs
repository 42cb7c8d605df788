use wordlens_core::Config;
use wordlens_services::{TextAnalysis, Workbench};

use crate::cli::InputArgs;
use crate::input::read_text;

pub fn run(config: Config, input: &InputArgs, json: bool) -> anyhow::Result<()> {
    let text = read_text(input)?;
    let bench = Workbench::new(config);
    let outcome = bench.text_analysis(&text)?;

    if json {
        println!("{}", serde_json::to_string_pretty(&outcome)?);
    } else {
        print!("{}", format_report(&outcome));
    }

    for warning in &outcome.warnings {
        eprintln!("warning: {}", warning);
    }
    Ok(())
}

fn format_report(outcome: &TextAnalysis) -> String {
    let mut out = String::new();
    out.push_str("Text Analysis\n");
    out.push_str("=============\n");
    out.push_str(&format!("Summary: {}\n", outcome.summary));
    out.push_str("Top keywords:\n");
    for kw in &outcome.keywords {
        out.push_str(&format!("  {} ({})\n", kw.token, kw.count));
    }

    match &outcome.report {
        Some(report) => {
            out.push_str(&format!("Length of text: {}\n", report.text_length));
            out.push_str(&format!("Vowels: {}\n", report.vowels));
            out.push_str(&format!("Consonants: {}\n", report.consonants));
            out.push_str(&format!("Stopwords: {}\n", report.stopword_count));
        }
        None => out.push_str("Linguistic statistics: no analyzer configured\n"),
    }
    out
}
