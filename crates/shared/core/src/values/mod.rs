use rust_decimal::Decimal;

/// Price value - uses Decimal for precision
/// Always strictly positive for a live product
pub type Price = Decimal;

/// Agent cash balance - signed, uses Decimal for precision
pub type Balance = Decimal;

/// Per-mille tax coefficient (5 = 0.5% price impact per trade)
pub type TaxRate = Decimal;

/// Percentage value (1 = 1%)
pub type Percent = Decimal;
