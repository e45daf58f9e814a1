/// A token position that currently holds a meaningful balance.
///
/// `display_amount` is the balance exactly as rendered on the page (e.g.
/// `$2.62K`); `numeric_value` is its expanded USD value.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct HoldingRecord {
    pub symbol: String,
    pub display_amount: String,
    pub numeric_value: f64,
}

impl std::fmt::Display for HoldingRecord {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.symbol, self.display_amount)
    }
}
