use anyhow::{Context, Result};
use revision_diff::{DiffResponse, InterpreterConfig};

const SAMPLE: &str = r#"{
    "diff": [
        {"type": 0, "lineNumber": 1, "text": "The Eiffel Tower is in Paris."},
        {"type": 2, "lineNumber": 2, "text": "It was built in 1887."},
        {"type": 1, "lineNumber": 2, "text": "It was completed in 1889."},
        {
            "type": 3,
            "lineNumber": 3,
            "text": "Its designer was Gustave Eiffel's café-owning cousin.",
            "highlightRanges": [{"start": 34, "length": 19, "type": 1}]
        },
        {"type": 4, "text": "See also: Champ de Mars."},
        {"type": 5, "lineNumber": 5, "text": "See also: Champ de Mars."}
    ]
}"#;

fn main() -> Result<()> {
    env_logger::init();

    // Read a compare body from the path given on the command line, or use the sample
    let body = match std::env::args().nth(1) {
        Some(path) => std::fs::read_to_string(&path)
            .with_context(|| format!("Failed to read diff body from {}", path))?,
        None => SAMPLE.to_string(),
    };

    let response = DiffResponse::from_json(&body)?;

    println!("Entries:");
    for entry in &response.diff {
        println!(
            "  {:>18}  {:>3} ranges  {:?}",
            entry.kind.to_string(),
            entry.highlight_ranges.len(),
            entry.text
        );
    }

    let details = response.edit_details();
    println!("\nSize delta: {:+}", details.size_delta);
    println!("Change text:");
    for fragment in &details.change_text {
        println!("  \x1b[33m{}\x1b[0m", fragment);
    }

    // Only the fine-grained highlights
    let fine = InterpreterConfig::default()
        .line_fragments(false)
        .interpret(&response.diff);
    println!("\nHighlights only:");
    print!("{}", fine.render());

    Ok(())
}
