/// Ledger monetary units
///
/// Amounts travel as integer factoshis; a factoid is 10^8 factoshis. The
/// helpers here render factoshi amounts the way the ledger's own tools print
/// them: no trailing zeros and no decimal point for whole amounts.
///
/// Number of factoshis in one factoid
pub const FACTOSHIS_PER_FACTOID: u64 = 100_000_000;

/// Digits after the decimal point in a factoid amount
pub const FACTOID_DECIMALS: usize = 8;

/// Utility functions for monetary conversions
pub mod conversions {
    use super::*;

    /// Format a factoshi amount as factoids
    ///
    /// # Examples
    /// ```
    /// use factom_ack::core::monetary::conversions::factoshi_to_factoid;
    /// assert_eq!(factoshi_to_factoid(150_000_000), "1.5");
    /// assert_eq!(factoshi_to_factoid(100_000_000), "1");
    /// assert_eq!(factoshi_to_factoid(1), "0.00000001");
    /// ```
    pub fn factoshi_to_factoid(factoshis: u64) -> String {
        let whole = factoshis / FACTOSHIS_PER_FACTOID;
        let fraction = factoshis % FACTOSHIS_PER_FACTOID;
        let digits = format!("{fraction:0width$}", width = FACTOID_DECIMALS);
        let digits = digits.trim_end_matches('0');
        if digits.is_empty() {
            whole.to_string()
        } else {
            format!("{whole}.{digits}")
        }
    }

    /// Format a factoshi amount given as text; unparsable input renders empty
    pub fn factoshi_str_to_factoid(factoshis: &str) -> String {
        match factoshis.parse::<u64>() {
            Ok(value) => factoshi_to_factoid(value),
            Err(_) => String::new(),
        }
    }
}
