//! Print the symbol combinations and pays of a paytable CSV.
//!
//! ```bash
//! cargo run -p cellsheet --example paytable -- tests/fixtures/reels.csv
//! ```

use cellsheet::prelude::*;

fn main() -> Result<()> {
    let path = std::env::args()
        .nth(1)
        .unwrap_or_else(|| "tests/fixtures/reels.csv".to_string());
    let sheet = Worksheet::open(&path)?;

    println!("Game: {}", sheet.cell("C2")?);

    // Combos start below the "Symbol Combos" heading in column P
    let combos = sheet.column("P3")?;
    let first = combos.keys().next().copied().unwrap_or(3);
    let last = combos.keys().last().copied().unwrap_or(first);

    let rows = sheet.row_data(&format!("{}-{}", first, last), "P", Some("U"))?;
    for (row, values) in &rows {
        let symbols: Vec<&str> = values
            .iter()
            .filter(|(letter, value)| *letter != "U" && !value.is_empty())
            .map(|(_, value)| value)
            .collect();
        println!(
            "{:>3}  {:<30} {}",
            row,
            symbols.join(" "),
            values.get("U").unwrap_or("")
        );
    }

    Ok(())
}
