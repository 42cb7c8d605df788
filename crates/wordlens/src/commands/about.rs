use wordlens_services::Activity;

pub fn run() -> anyhow::Result<()> {
    println!("wordlens: a small text analysis toolkit");
    println!();
    println!("Activities:");
    for activity in Activity::ALL {
        println!("  - {}", activity.label());
    }
    println!();
    println!("Linguistic statistics, sentiment, translation and word clouds");
    println!("are provided by pluggable backends.");
    Ok(())
}
