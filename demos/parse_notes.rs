use std::env;
use transaction_notes_rs::NoteParserBuilder;

const SAMPLE_NOTES: &str = "Salary +5000
Pizza -12
Coffee -4.50
Uber -25
just a reminder, not a transaction
Freelance work +800";

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Notes can be piped in from a file path; otherwise a built-in sample is
    // used.
    let args: Vec<String> = env::args().collect();

    let content = if args.len() > 1 {
        std::fs::read_to_string(&args[1])?
    } else {
        println!("Using built-in sample notes\n");
        SAMPLE_NOTES.to_string()
    };

    let report = NoteParserBuilder::new()
        .text(&content)
        .date("2024-01-15")
        .parse_with_report()?;

    println!("Parsed {} transactions\n", report.transactions.len());

    for tx in &report.transactions {
        println!("Transaction {}:", tx.id);
        println!("  {} {}", tx.emoji, tx.description);
        println!("  Amount: {}", tx.amount);
        println!("  Kind: {:?}", tx.kind);
        println!("  Category: {}", tx.category);
        println!();
    }

    if !report.skipped.is_empty() {
        println!("Skipped {} line(s) with no amount token:", report.skipped.len());
        for skip in &report.skipped {
            println!("  line {}: {}", skip.line_index, skip.text);
        }
    }

    Ok(())
}
