use transaction_notes_rs::{
    calculate_summary, category_breakdown, daily_trend, parse_batches, Period, RawRecord,
};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // A few stored batches, the shape the remote storage service returns.
    let records = vec![
        RawRecord {
            raw_text: "Salary +5000\nPizza -12\nCoffee -4.50".to_string(),
            date: chrono::Local::now().format("%Y-%m-%d").to_string(),
        },
        RawRecord {
            raw_text: "Uber -25\nNetflix -15".to_string(),
            date: (chrono::Local::now() - chrono::Duration::days(2))
                .format("%Y-%m-%d")
                .to_string(),
        },
        RawRecord {
            raw_text: "Freelance work +800".to_string(),
            date: (chrono::Local::now() - chrono::Duration::days(10))
                .format("%Y-%m-%d")
                .to_string(),
        },
    ];

    let transactions = parse_batches(&records);
    println!("Merged {} transactions, newest first\n", transactions.len());

    for period in ["today", "week", "month"] {
        let summary = calculate_summary(&transactions, period.parse::<Period>()?);
        println!("{period}: {}", serde_json::to_string(&summary)?);
    }

    println!("\nCategory breakdown:");
    for entry in category_breakdown(&transactions) {
        println!(
            "  {} {}: {} across {} transaction(s)",
            entry.emoji, entry.category, entry.amount, entry.count
        );
    }

    println!("\n7-day trend:");
    for point in daily_trend(&transactions) {
        println!(
            "  {}: +{} -{} (net {})",
            point.date, point.income, point.expenses, point.net
        );
    }

    Ok(())
}
