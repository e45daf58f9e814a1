/// Page-level figures shown above the holdings table. Every field is the
/// rendered string from the line following its label; absent labels stay
/// `None`.
#[derive(Debug, Clone, Default, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct PortfolioSummary {
    pub net_worth: Option<String>,
    pub holdings_pnl: Option<String>,
    pub total_holdings: Option<String>,
    pub total_pnl: Option<String>,
    pub win_rate: Option<String>,
    pub realised_pnl: Option<String>,
}

impl PortfolioSummary {
    pub fn is_empty(&self) -> bool {
        self.net_worth.is_none()
            && self.holdings_pnl.is_none()
            && self.total_holdings.is_none()
            && self.total_pnl.is_none()
            && self.win_rate.is_none()
            && self.realised_pnl.is_none()
    }
}

/// Pulls the summary figures out of rendered page text. Each label's value is
/// the next line; a label repeated on the page keeps its last value.
pub fn extract_summary(text: &str) -> PortfolioSummary {
    let lines: Vec<&str> = text.lines().collect();
    let mut summary = PortfolioSummary::default();

    for (index, line) in lines.iter().enumerate() {
        let Some(value) = lines.get(index + 1).map(|next| next.trim()) else {
            break;
        };

        // "Holdings PnL" must be tested before the bare "Holdings" label; the
        // bare label additionally needs a dollar figure on the next line to
        // tell it apart from the table section header.
        if line.contains("Net Worth") {
            summary.net_worth = Some(value.to_owned());
        } else if line.contains("Holdings PnL") {
            summary.holdings_pnl = Some(value.to_owned());
        } else if line.contains("Total PnL") {
            summary.total_pnl = Some(value.to_owned());
        } else if line.contains("Win Rate") {
            summary.win_rate = Some(value.to_owned());
        } else if line.contains("Realised PnL") {
            summary.realised_pnl = Some(value.to_owned());
        } else if line.contains("Holdings") && value.contains('$') {
            summary.total_holdings = Some(value.to_owned());
        }
    }

    summary
}
