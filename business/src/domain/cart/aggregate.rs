use bigdecimal::BigDecimal;
use num_traits::Zero;

use super::model::Cart;

/// Cart lines of one customer together with the total amount to pay.
///
/// The total is supplied by whoever builds the value and is kept as given:
/// nothing here recomputes it from the lines, rounds it or rejects negative
/// amounts. A fresh value holds no lines and a zero total.
#[derive(Debug, Clone, PartialEq)]
pub struct CartAggregate {
    items: Vec<Cart>,
    total_amount: BigDecimal,
}

impl Default for CartAggregate {
    fn default() -> Self {
        Self {
            items: Vec::new(),
            total_amount: BigDecimal::zero(),
        }
    }
}

impl CartAggregate {
    pub fn new(items: Vec<Cart>, total_amount: BigDecimal) -> Self {
        Self {
            items,
            total_amount,
        }
    }

    /// Lines in the order they were last set.
    pub fn items(&self) -> &[Cart] {
        &self.items
    }

    pub fn total_amount(&self) -> &BigDecimal {
        &self.total_amount
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Replaces every line at once.
    pub fn set_items(&mut self, items: Vec<Cart>) {
        self.items = items;
    }

    pub fn set_total_amount(&mut self, total_amount: BigDecimal) {
        self.total_amount = total_amount;
    }

    pub fn with_items(mut self, items: Vec<Cart>) -> Self {
        self.set_items(items);
        self
    }

    pub fn with_total_amount(mut self, total_amount: BigDecimal) -> Self {
        self.set_total_amount(total_amount);
        self
    }

    pub fn into_parts(self) -> (Vec<Cart>, BigDecimal) {
        (self.items, self.total_amount)
    }
}

#[cfg(test)]
mod tests {
    use std::str::FromStr;

    use chrono::Utc;
    use proptest::prelude::*;
    use uuid::Uuid;

    use super::*;
    use crate::domain::cart::model::CartProduct;
    use crate::domain::shared::value_objects::UserId;

    fn cart(name: &str, quantity: u32) -> Cart {
        Cart::from_repository(
            Uuid::new_v4(),
            UserId::new("customer-1"),
            CartProduct {
                id: Uuid::new_v4(),
                name: name.to_string(),
                price: BigDecimal::from_str("4.99").unwrap(),
                seller_id: Uuid::new_v4(),
            },
            quantity,
            Utc::now(),
        )
    }

    fn decimal(mantissa: i64, scale: u8) -> BigDecimal {
        BigDecimal::from_str(&format!("{mantissa}e-{scale}")).unwrap()
    }

    #[test]
    fn should_start_empty_with_zero_total() {
        // Act
        let aggregate = CartAggregate::default();

        // Assert
        assert!(aggregate.items().is_empty());
        assert!(aggregate.is_empty());
        assert!(aggregate.total_amount().is_zero());
        assert_eq!(*aggregate.total_amount(), BigDecimal::from(0));
    }

    #[test]
    fn should_keep_total_independent_from_items() {
        // Arrange
        let lines = vec![cart("Keyboard", 2)];

        // Act
        let aggregate = CartAggregate::new(lines, BigDecimal::from_str("1.00").unwrap());

        // Assert
        assert_eq!(aggregate.items().len(), 1);
        assert_eq!(
            *aggregate.total_amount(),
            BigDecimal::from_str("1.00").unwrap()
        );
    }

    #[test]
    fn should_accept_empty_items_after_populated() {
        // Arrange
        let aggregate =
            CartAggregate::default().with_items(vec![cart("Keyboard", 1), cart("Mouse", 1)]);

        // Act
        let aggregate = aggregate.with_items(Vec::new());

        // Assert
        assert!(aggregate.is_empty());
    }

    #[test]
    fn should_accept_negative_total() {
        // Arrange
        let mut aggregate = CartAggregate::default();

        // Act
        aggregate.set_total_amount(BigDecimal::from_str("-5.25").unwrap());

        // Assert
        assert_eq!(
            *aggregate.total_amount(),
            BigDecimal::from_str("-5.25").unwrap()
        );
    }

    #[test]
    fn should_keep_duplicate_lines() {
        // Arrange
        let line = cart("Keyboard", 1);

        // Act
        let aggregate = CartAggregate::default().with_items(vec![line.clone(), line.clone()]);

        // Assert
        assert_eq!(aggregate.items(), &[line.clone(), line][..]);
    }

    #[test]
    fn should_split_into_parts() {
        // Arrange
        let lines = vec![cart("Monitor", 1)];
        let aggregate = CartAggregate::new(lines.clone(), BigDecimal::from_str("199.90").unwrap());

        // Act
        let (items, total) = aggregate.into_parts();

        // Assert
        assert_eq!(items, lines);
        assert_eq!(total, BigDecimal::from_str("199.90").unwrap());
    }

    proptest! {
        #[test]
        fn should_return_items_in_order_last_set(
            lines in prop::collection::vec(("[a-zA-Z ]{1,16}", 0u32..50), 0..12)
        ) {
            // Arrange
            let items: Vec<Cart> = lines
                .iter()
                .map(|(name, quantity)| cart(name, *quantity))
                .collect();

            let mut aggregate = CartAggregate::default();

            // Act
            aggregate.set_items(items.clone());

            // Assert
            prop_assert_eq!(aggregate.items(), &items[..]);
        }

        #[test]
        fn should_return_total_exactly_as_set(mantissa in any::<i64>(), scale in 0u8..18) {
            // Arrange
            let amount = decimal(mantissa, scale);

            // Act
            let aggregate = CartAggregate::default().with_total_amount(amount.clone());

            // Assert
            prop_assert_eq!(aggregate.total_amount(), &amount);
            prop_assert_eq!(
                aggregate.total_amount().as_bigint_and_exponent(),
                amount.as_bigint_and_exponent()
            );
        }
    }
}
