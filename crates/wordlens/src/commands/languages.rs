use wordlens_services::TargetLanguage;

pub fn run() -> anyhow::Result<()> {
    println!("Translation targets:");
    for lang in TargetLanguage::ALL {
        println!("  {:<6} {}", lang.code(), lang.label());
    }
    Ok(())
}
