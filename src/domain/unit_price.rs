//! UnitPrice value object.

use super::errors::ValidationError;
use once_cell::sync::Lazy;
use regex::Regex;

static UNIT_PRICE_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[0-9]+(?:\.[0-9]{1,2})?$").expect("Failed to compile unit price regex")
});

/// The price of one unit of a product.
///
/// The value is kept exactly as entered (so `"4.5"` stays `"4.5"`), and
/// [`UnitPrice::cents`] gives the amount in the smallest currency unit.
///
/// # Example
///
/// ```
/// use sellah::domain::UnitPrice;
///
/// let price = UnitPrice::new("4.56").unwrap();
/// assert_eq!(price.cents(), 456);
/// assert_eq!(price.to_string(), "4.56");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct UnitPrice(String);

impl UnitPrice {
    pub const MESSAGE_CONSTRAINTS: &'static str =
        "Unit prices should be non-negative numbers with at most 2 decimal places";

    /// Create a new UnitPrice.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::InvalidUnitPrice` if the value is not a
    /// non-negative decimal with at most two fractional digits, or is too
    /// large to be counted in cents.
    pub fn new(unit_price: impl Into<String>) -> Result<Self, ValidationError> {
        let unit_price = unit_price.into();

        if !Self::is_valid(&unit_price) {
            return Err(ValidationError::InvalidUnitPrice(unit_price));
        }

        Ok(Self(unit_price))
    }

    /// Returns true if the given string is a valid unit price.
    pub fn is_valid(test: &str) -> bool {
        UNIT_PRICE_REGEX.is_match(test) && Self::parse_cents(test).is_some()
    }

    /// The price in cents.
    pub fn cents(&self) -> u64 {
        // validated on construction
        Self::parse_cents(&self.0).unwrap_or_default()
    }

    fn parse_cents(value: &str) -> Option<u64> {
        let (whole, fraction) = value.split_once('.').unwrap_or((value, ""));
        let whole: u64 = whole.parse().ok()?;
        let fraction: u64 = match fraction.len() {
            0 => 0,
            1 => fraction.parse::<u64>().ok()? * 10,
            _ => fraction.parse().ok()?,
        };
        whole.checked_mul(100)?.checked_add(fraction)
    }
}

string_value_object!(UnitPrice);
