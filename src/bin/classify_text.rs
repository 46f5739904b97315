//! Prints the surprise analysis of a text as JSON.
//!
//! ```text
//! classify_text "No way, this is incredible"
//! echo "It was fine." | classify_text
//! ```

use anyhow::Result;
use std::io::BufRead;

use feedback_analyzer::classifier::SurpriseClassifier;

fn main() -> Result<()> {
    let classifier = SurpriseClassifier::default();
    let args: Vec<String> = std::env::args().skip(1).collect();

    if !args.is_empty() {
        let text = args.join(" ");
        println!("{}", serde_json::to_string(&classifier.classify(&text))?);
        return Ok(());
    }

    for line in std::io::stdin().lock().lines() {
        let line = line?;
        println!("{}", serde_json::to_string(&classifier.classify(&line))?);
    }
    Ok(())
}
