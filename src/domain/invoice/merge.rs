//! Name-keyed aggregation of line items.

use super::item::InvoiceItem;

/// Merges newly extracted items into an existing list.
///
/// Matching is by case-insensitive, whitespace-trimmed name. A match adds
/// the new quantity to the existing one and overwrites the unit price
/// (last write wins - "add 2 more of the same shirt at the new price"),
/// keeping the display case of the first-seen name. Unmatched items are
/// appended, so first-seen ordering is stable.
pub fn merge_items(existing: &[InvoiceItem], incoming: &[InvoiceItem]) -> Vec<InvoiceItem> {
    let mut merged = existing.to_vec();
    for item in incoming {
        match merged.iter_mut().find(|m| m.same_product(&item.name)) {
            Some(found) => {
                found.quantity += item.quantity;
                found.unit_price = item.unit_price;
            }
            None => merged.push(item.clone()),
        }
    }
    merged
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal::Decimal;
    use std::str::FromStr;

    fn item(name: &str, qty: &str, price: &str) -> InvoiceItem {
        InvoiceItem::new(
            name,
            Decimal::from_str(qty).unwrap(),
            Decimal::from_str(price).unwrap(),
        )
        .unwrap()
    }

    #[test]
    fn same_name_aggregates_quantity_and_overwrites_price() {
        let existing = vec![item("shirt", "3", "450")];
        let merged = merge_items(&existing, &[item("Shirt", "2", "500")]);

        assert_eq!(merged.len(), 1);
        assert_eq!(merged[0].name, "shirt");
        assert_eq!(merged[0].quantity, Decimal::from(5));
        assert_eq!(merged[0].unit_price, Decimal::from(500));
    }

    #[test]
    fn unmatched_items_append_in_first_seen_order() {
        let existing = vec![item("Laptop", "1", "50000")];
        let merged = merge_items(
            &existing,
            &[item("Mouse", "2", "700"), item("Laptop", "1", "48000")],
        );

        let names: Vec<&str> = merged.iter().map(|i| i.name.as_str()).collect();
        assert_eq!(names, ["Laptop", "Mouse"]);
        assert_eq!(merged[0].quantity, Decimal::from(2));
        assert_eq!(merged[0].unit_price, Decimal::from(48000));
    }

    #[test]
    fn whitespace_around_names_is_ignored_for_matching() {
        let existing = vec![item("Coffee Beans", "1", "450")];
        // Constructor trims, so simulate an incoming list built elsewhere.
        let incoming = vec![InvoiceItem {
            name: " coffee beans".to_string(),
            quantity: Decimal::from(2),
            unit_price: Decimal::from(475),
        }];
        let merged = merge_items(&existing, &incoming);
        assert_eq!(merged.len(), 1);
        assert_eq!(merged[0].quantity, Decimal::from(3));
    }

    #[test]
    fn duplicates_inside_the_incoming_list_also_aggregate() {
        let merged = merge_items(&[], &[item("Pen", "1", "10"), item("pen", "2", "12")]);
        assert_eq!(merged.len(), 1);
        assert_eq!(merged[0].quantity, Decimal::from(3));
        assert_eq!(merged[0].unit_price, Decimal::from(12));
    }

    #[test]
    fn empty_inputs_are_fine() {
        assert!(merge_items(&[], &[]).is_empty());
        let existing = vec![item("Pen", "1", "10")];
        assert_eq!(merge_items(&existing, &[]), existing);
    }
}
