/// Column headers and status labels that render as standalone uppercase lines
/// inside the holdings table. A real token symbol colliding with one of these
/// is silently dropped, so the set only grows when a new header is confirmed
/// on the page.
pub const RESERVED_WORDS: [&str; 9] = [
    "BALANCE", "TOTAL", "SOLD", "PRICE", "LAST", "HOLDING", "NEW", "ALL", "USD",
];

/// Phrase the page shows on fully liquidated positions.
pub const SOLD_MARKER: &str = "sold all";

/// A token symbol cell is 2 to 10 uppercase letters.
pub const SYMBOL_MIN_LEN: usize = 2;
pub const SYMBOL_MAX_LEN: usize = 10;

/// Lines inspected after a symbol cell to resolve its status. One token row
/// spans roughly 15 rendered lines, so 20 always reaches the balance column.
pub const DEFAULT_LOOKAHEAD_WINDOW: usize = 20;

/// Balances at or below this USD value are treated as dust, not holdings.
pub const DEFAULT_DUST_THRESHOLD: f64 = 50.0;
