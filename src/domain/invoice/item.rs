//! Invoice line items.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::domain::foundation::ValidationError;

/// One line on an invoice.
///
/// Name case is preserved for display; merging compares names
/// case-insensitively. Monetary values keep full precision internally and
/// are rounded to 2 decimal places only when a total is computed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InvoiceItem {
    pub name: String,
    pub quantity: Decimal,
    pub unit_price: Decimal,
}

impl InvoiceItem {
    /// Creates an item, enforcing a non-empty name, positive quantity and
    /// non-negative unit price.
    pub fn new(
        name: impl Into<String>,
        quantity: Decimal,
        unit_price: Decimal,
    ) -> Result<Self, ValidationError> {
        let name = name.into().trim().to_string();
        if name.is_empty() {
            return Err(ValidationError::empty_field("item.name"));
        }
        if quantity <= Decimal::ZERO {
            return Err(ValidationError::invalid_format(
                "item.quantity",
                format!("must be positive, got {}", quantity),
            ));
        }
        if unit_price < Decimal::ZERO {
            return Err(ValidationError::negative("item.unit_price", unit_price));
        }
        Ok(Self {
            name,
            quantity,
            unit_price,
        })
    }

    /// `quantity * unit_price` rounded to 2 decimal places (half-to-even).
    pub fn line_total(&self) -> Decimal {
        (self.quantity * self.unit_price).round_dp(2)
    }

    /// True when `other` names the same product, ignoring case and
    /// surrounding whitespace.
    pub fn same_product(&self, other_name: &str) -> bool {
        self.name.trim().to_lowercase() == other_name.trim().to_lowercase()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    #[test]
    fn line_total_rounds_to_two_places() {
        let item = InvoiceItem::new("Widget", dec("3"), dec("0.333")).unwrap();
        assert_eq!(item.line_total(), dec("1.00"));
    }

    #[test]
    fn line_total_uses_half_to_even_rounding() {
        // 1 * 0.125 rounds down to the even digit, 1 * 0.135 rounds up.
        let down = InvoiceItem::new("A", dec("1"), dec("0.125")).unwrap();
        let up = InvoiceItem::new("B", dec("1"), dec("0.135")).unwrap();
        assert_eq!(down.line_total(), dec("0.12"));
        assert_eq!(up.line_total(), dec("0.14"));
    }

    #[test]
    fn rejects_blank_name() {
        assert!(InvoiceItem::new("   ", dec("1"), dec("10")).is_err());
    }

    #[test]
    fn rejects_zero_or_negative_quantity() {
        assert!(InvoiceItem::new("Widget", dec("0"), dec("10")).is_err());
        assert!(InvoiceItem::new("Widget", dec("-2"), dec("10")).is_err());
    }

    #[test]
    fn rejects_negative_price_but_allows_free_items() {
        assert!(InvoiceItem::new("Widget", dec("1"), dec("-0.01")).is_err());
        assert!(InvoiceItem::new("Sample", dec("1"), dec("0")).is_ok());
    }

    #[test]
    fn name_is_trimmed_but_case_preserved() {
        let item = InvoiceItem::new("  Coffee Beans ", dec("2"), dec("450")).unwrap();
        assert_eq!(item.name, "Coffee Beans");
        assert!(item.same_product("coffee beans"));
        assert!(!item.same_product("grinder"));
    }
}
