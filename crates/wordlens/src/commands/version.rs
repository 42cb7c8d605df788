pub fn run() -> anyhow::Result<()> {
    println!("wordlens {}", env!("CARGO_PKG_VERSION"));
    println!("Frequency-based keyword extraction");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version_output() {
        let result = run();
        assert!(result.is_ok());
    }
}
