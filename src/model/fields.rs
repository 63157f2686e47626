//! Validated field types.
//!
//! Every value that reaches a [`Dish`](crate::model::Dish) or an
//! [`Order`](crate::model::Order) goes through one of these constructors, so
//! the entities themselves never hold a blank name or a non-positive number.

use crate::order_manager::OrderError;
use std::fmt::{self, Display};

/// Unwraps an optional payload field, failing with InvalidArgument when absent.
pub fn required<T>(value: Option<T>, field: &str) -> Result<T, OrderError> {
    value.ok_or_else(|| OrderError::invalid(format!("{field} cannot be missing")))
}

fn positive_u32(value: i64, field: &str) -> Result<u32, OrderError> {
    if value <= 0 {
        return Err(OrderError::invalid(format!("{field} must be positive")));
    }
    u32::try_from(value).map_err(|_| OrderError::invalid(format!("{field} is too large")))
}

/// Coerces a textual identifier (e.g. a path segment) into a positive integer.
pub(crate) fn positive_from_str(raw: &str, field: &str) -> Result<u32, OrderError> {
    let value: i64 = raw
        .trim()
        .parse()
        .map_err(|_| OrderError::invalid(format!("{field} must be an integer")))?;
    positive_u32(value, field)
}

/// A non-empty name with surrounding whitespace removed.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Name(String);

impl Name {
    pub fn parse(value: &str, field: &str) -> Result<Self, OrderError> {
        let trimmed = value.trim();
        if trimmed.is_empty() {
            return Err(OrderError::invalid(format!("{field} cannot be empty")));
        }
        Ok(Self(trimmed.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Display for Name {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Strictly positive item count.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Quantity(u32);

impl Quantity {
    pub fn parse(value: i64) -> Result<Self, OrderError> {
        positive_u32(value, "quantity").map(Self)
    }

    pub fn get(self) -> u32 {
        self.0
    }
}

/// Strictly positive, finite price of a single unit.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub struct UnitPrice(f64);

impl UnitPrice {
    pub fn parse(value: f64) -> Result<Self, OrderError> {
        if !value.is_finite() {
            return Err(OrderError::invalid("unit price must be a finite number"));
        }
        if value <= 0.0 {
            return Err(OrderError::invalid("unit price must be positive"));
        }
        Ok(Self(value))
    }

    pub fn get(self) -> f64 {
        self.0
    }
}

/// Positive table number.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TableNumber(u32);

impl TableNumber {
    pub fn parse(value: i64) -> Result<Self, OrderError> {
        positive_u32(value, "table number").map(Self)
    }

    pub fn get(self) -> u32 {
        self.0
    }
}

impl Display for TableNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Identifier assigned by the [`OrderManager`](crate::order_manager::OrderManager).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct OrderId(u32);

impl OrderId {
    pub fn parse(value: i64) -> Result<Self, OrderError> {
        positive_u32(value, "id").map(Self)
    }

    pub fn get(self) -> u32 {
        self.0
    }

    /// Ids come from the manager's creation counter, which starts at 1.
    pub(crate) fn from_counter(counter: u32) -> Self {
        Self(counter)
    }
}

impl Display for OrderId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::order_manager::ErrorKind;

    #[test]
    fn test_name_is_trimmed() {
        let name = Name::parse("  Soup ", "name").unwrap();
        assert_eq!(name.as_str(), "Soup");
    }

    #[test]
    fn test_blank_name_rejected() {
        let err = Name::parse("   ", "customer name").unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidArgument);
        assert_eq!(err.to_string(), "customer name cannot be empty");
    }

    #[test]
    fn test_non_positive_numbers_rejected() {
        assert!(Quantity::parse(0).is_err());
        assert!(Quantity::parse(-3).is_err());
        assert!(TableNumber::parse(0).is_err());
        assert!(OrderId::parse(-1).is_err());
        assert!(UnitPrice::parse(0.0).is_err());
        assert!(UnitPrice::parse(-2.5).is_err());
        assert!(UnitPrice::parse(f64::NAN).is_err());
        assert_eq!(Quantity::parse(4).unwrap().get(), 4);
    }

    #[test]
    fn test_missing_value_rejected() {
        let err = required::<i64>(None, "quantity").unwrap_err();
        assert_eq!(err.to_string(), "quantity cannot be missing");
    }

    #[test]
    fn test_positive_from_str() {
        assert_eq!(positive_from_str(" 7 ", "table number").unwrap(), 7);
        assert!(positive_from_str("seven", "table number").is_err());
        assert!(positive_from_str("0", "id").is_err());
    }
}
