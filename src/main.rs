use std::io::Read;

use portfolio_holdings::config::app_config::CONFIG;
use portfolio_holdings::{extract_summary, HoldingsExtractor};

/// Reads saved page text from a file argument (or stdin) and prints the
/// current holdings. `--json` switches to machine-readable output.
fn main() -> anyhow::Result<()> {
    env_logger::init();

    let mut json = false;
    let mut path = None;
    for arg in std::env::args().skip(1) {
        match arg.as_str() {
            "--json" => json = true,
            other => path = Some(other.to_owned()),
        }
    }

    let text = match path {
        Some(path) => std::fs::read_to_string(&path)
            .map_err(|error| anyhow::anyhow!("Failed to read {}: {}", path, error))?,
        None => {
            let mut buffer = String::new();
            std::io::stdin().read_to_string(&mut buffer)?;
            buffer
        }
    };

    let extractor = HoldingsExtractor::new(CONFIG.extractor);
    let holdings = extractor.extract(&text);
    let summary = extract_summary(&text);

    if json {
        let output = serde_json::json!({
            "holdings": holdings,
            "summary": summary,
        });
        println!("{}", serde_json::to_string_pretty(&output)?);
        return Ok(());
    }

    if holdings.is_empty() {
        println!("No current holdings detected");
    } else {
        println!("Current holdings:");
        for holding in &holdings {
            println!("  - {}", holding);
        }
    }

    if let Some(net_worth) = &summary.net_worth {
        println!("Net worth: {}", net_worth);
    }
    if let Some(holdings_pnl) = &summary.holdings_pnl {
        println!("Holdings PnL: {}", holdings_pnl);
    }
    if let Some(total_pnl) = &summary.total_pnl {
        println!("Total PnL: {}", total_pnl);
    }
    if let Some(win_rate) = &summary.win_rate {
        println!("Win rate: {}", win_rate);
    }
    if let Some(realised_pnl) = &summary.realised_pnl {
        println!("Realised PnL: {}", realised_pnl);
    }

    Ok(())
}
