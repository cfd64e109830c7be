pub mod currency;
pub mod date;

pub use currency::format_currency;
pub use date::format_date;

/// Shown wherever a value is absent.
pub const PLACEHOLDER: &str = "—";
