//! Tokenize command implementation

use anyhow::Result;
use verse_text_index::{AsciiWordTokenizer, Tokenizer};

pub fn run(text: String) -> Result<()> {
    let tokenizer = AsciiWordTokenizer::new();
    let terms = tokenizer.tokenize(&text).collect::<Vec<_>>();
    println!("{} terms ({})", terms.len(), tokenizer.name());
    for term in terms {
        println!("{term}");
    }
    Ok(())
}
