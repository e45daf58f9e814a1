use crate::constants::{DEFAULT_DUST_THRESHOLD, DEFAULT_LOOKAHEAD_WINDOW};

/// How a window line qualifies as the balance column.
#[derive(serde::Deserialize, Debug, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "kebab-case")]
pub enum BalanceMatchMode {
    /// The whole trimmed line must be `$<number><optional suffix>`.
    #[default]
    WholeLine,
    /// First `$<number><optional suffix>` substring anywhere in the line.
    /// Prone to picking up PnL deltas; kept for comparison runs.
    AnywhereInLine,
}

#[derive(serde::Deserialize, Debug, Clone, Copy, PartialEq)]
#[serde(default)]
pub struct ExtractorConfig {
    pub lookahead_window: usize,
    pub dust_threshold: f64,
    pub balance_match_mode: BalanceMatchMode,
}

impl Default for ExtractorConfig {
    fn default() -> Self {
        ExtractorConfig {
            lookahead_window: DEFAULT_LOOKAHEAD_WINDOW,
            dust_threshold: DEFAULT_DUST_THRESHOLD,
            balance_match_mode: BalanceMatchMode::default(),
        }
    }
}
