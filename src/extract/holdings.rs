use std::collections::HashSet;
use std::sync::LazyLock;

use regex::Regex;

use crate::config::extractor_config::{BalanceMatchMode, ExtractorConfig};
use crate::constants::{RESERVED_WORDS, SOLD_MARKER, SYMBOL_MAX_LEN, SYMBOL_MIN_LEN};
use crate::extract::amount::parse_display_amount;
use crate::holding::HoldingRecord;

// The whole-line rule rejects PnL delta lines ("+$111.88" / "-$46.79"), which
// the loose rule happily matches.
static WHOLE_LINE_BALANCE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\$[0-9,.]+[KMB]?$").expect("Should compile balance pattern"));
static ANYWHERE_BALANCE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\$[0-9,.]+[KMB]?").expect("Should compile balance pattern"));

/// Scans the visible text of a portfolio page for tokens that currently hold
/// a non-dust, non-liquidated balance.
#[derive(Debug, Clone, Default)]
pub struct HoldingsExtractor {
    config: ExtractorConfig,
}

/// How a candidate symbol's lookahead window resolved.
#[derive(Debug, Clone, PartialEq)]
enum CandidateOutcome {
    /// The window contains the sold marker; the position was liquidated.
    Liquidated,
    /// First balance line in the window that converts and clears the dust
    /// threshold.
    Holding { display: String, value: f64 },
    /// Neither a sold marker nor a qualifying balance in the window.
    Indeterminate,
}

fn is_candidate_symbol(line: &str) -> bool {
    (SYMBOL_MIN_LEN..=SYMBOL_MAX_LEN).contains(&line.len())
        && line.bytes().all(|byte| byte.is_ascii_uppercase())
        && !RESERVED_WORDS.contains(&line)
}

impl HoldingsExtractor {
    pub fn new(config: ExtractorConfig) -> Self {
        HoldingsExtractor { config }
    }

    /// Extracts current holdings from a block of rendered page text.
    ///
    /// Total over arbitrary input: malformed lines are skipped, never
    /// surfaced. Exact (symbol, displayed balance) duplicates collapse to the
    /// first occurrence; repeated symbols with different displayed balances
    /// are kept as separate records.
    pub fn extract(&self, text: &str) -> Vec<HoldingRecord> {
        self.extract_lines(&text.lines().collect::<Vec<_>>())
    }

    pub fn extract_lines(&self, lines: &[&str]) -> Vec<HoldingRecord> {
        let mut seen = HashSet::new();
        let mut holdings = Vec::new();

        for (index, line) in lines.iter().enumerate() {
            let symbol = line.trim();
            if !is_candidate_symbol(symbol) {
                continue;
            }

            // Window is clamped at end of input so tail candidates still
            // resolve against whatever lines remain.
            let window_end = lines.len().min(index + 1 + self.config.lookahead_window);
            let window = &lines[index + 1..window_end];

            match self.resolve_candidate(symbol, window) {
                CandidateOutcome::Holding { display, value } => {
                    log::debug!("{}: current balance {} ({})", symbol, display, value);
                    if seen.insert((symbol.to_owned(), display.clone())) {
                        holdings.push(HoldingRecord {
                            symbol: symbol.to_owned(),
                            display_amount: display,
                            numeric_value: value,
                        });
                    }
                }
                CandidateOutcome::Liquidated => {
                    log::debug!("Ignoring sold position: {}", symbol);
                }
                CandidateOutcome::Indeterminate => {
                    log::trace!("No current balance found for candidate {}", symbol);
                }
            }
        }

        holdings
    }

    fn resolve_candidate(&self, symbol: &str, window: &[&str]) -> CandidateOutcome {
        // The sold marker wins over any balance-looking line in the window.
        if window
            .iter()
            .any(|line| line.to_lowercase().contains(SOLD_MARKER))
        {
            return CandidateOutcome::Liquidated;
        }

        for line in window {
            let Some(display) = self.match_balance(line.trim()) else {
                continue;
            };

            match parse_display_amount(&display) {
                Ok(value) if value > self.config.dust_threshold => {
                    return CandidateOutcome::Holding { display, value };
                }
                Ok(value) => {
                    log::trace!("{}: {} is dust ({})", symbol, display, value);
                }
                Err(error) => {
                    log::trace!("{}: skipping balance-looking line: {}", symbol, error);
                }
            }
        }

        CandidateOutcome::Indeterminate
    }

    fn match_balance(&self, line: &str) -> Option<String> {
        match self.config.balance_match_mode {
            BalanceMatchMode::WholeLine => WHOLE_LINE_BALANCE
                .is_match(line)
                .then(|| line.to_owned()),
            BalanceMatchMode::AnywhereInLine => ANYWHERE_BALANCE
                .find(line)
                .map(|found| found.as_str().to_owned()),
        }
    }
}
