//! Versions command implementation

use anyhow::Result;
use verse_search::registry::{self, Language};

fn parse_language(name: &str) -> Result<Language> {
    match name.to_ascii_lowercase().as_str() {
        "english" | "en" => Ok(Language::English),
        "spanish" | "es" => Ok(Language::Spanish),
        _ => anyhow::bail!("Unknown language {name:?}; expected \"english\" or \"spanish\""),
    }
}

pub fn run(language: Option<String>) -> Result<()> {
    let language = language.as_deref().map(parse_language).transpose()?;
    for info in registry::VERSIONS.iter() {
        if language.is_some_and(|l| l != info.language) {
            continue;
        }
        let family = info.family.map(|f| f.name()).unwrap_or("-");
        println!("{:<10} {:<8} {}", info.name, info.language, family);
    }
    Ok(())
}
