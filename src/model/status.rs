//! Dish and order status enums, plus the filters used by aggregate queries.

use crate::order_manager::OrderError;
use serde::{Deserialize, Serialize};
use std::fmt::{self, Display};
use std::str::FromStr;

/// Kitchen state of a single dish.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DishStatus {
    Pending,
    Served,
}

/// Aggregate state of an order.
///
/// `Pending` and `Served` are derived from the dishes; `Done` is only ever set
/// by closing the order and is never recomputed afterwards.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum OrderStatus {
    Pending,
    Served,
    Done,
}

/// Dish selector: one status or every dish.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DishFilter {
    Pending,
    Served,
    All,
}

/// Order selector: one status or every order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OrderFilter {
    Pending,
    Served,
    Done,
    All,
}

impl DishStatus {
    pub fn as_str(self) -> &'static str {
        match self {
            DishStatus::Pending => "Pending",
            DishStatus::Served => "Served",
        }
    }
}

impl OrderStatus {
    pub fn as_str(self) -> &'static str {
        match self {
            OrderStatus::Pending => "Pending",
            OrderStatus::Served => "Served",
            OrderStatus::Done => "Done",
        }
    }

    /// Status implied by a set of dish statuses; an empty order counts as served.
    pub fn derive_from<I>(dishes: I) -> Self
    where
        I: IntoIterator<Item = DishStatus>,
    {
        if dishes.into_iter().any(|s| s == DishStatus::Pending) {
            OrderStatus::Pending
        } else {
            OrderStatus::Served
        }
    }
}

impl DishFilter {
    pub fn matches(self, status: DishStatus) -> bool {
        match self {
            DishFilter::All => true,
            DishFilter::Pending => status == DishStatus::Pending,
            DishFilter::Served => status == DishStatus::Served,
        }
    }
}

impl OrderFilter {
    pub fn matches(self, status: OrderStatus) -> bool {
        match self {
            OrderFilter::All => true,
            OrderFilter::Pending => status == OrderStatus::Pending,
            OrderFilter::Served => status == OrderStatus::Served,
            OrderFilter::Done => status == OrderStatus::Done,
        }
    }
}

impl From<DishStatus> for DishFilter {
    fn from(status: DishStatus) -> Self {
        match status {
            DishStatus::Pending => DishFilter::Pending,
            DishStatus::Served => DishFilter::Served,
        }
    }
}

impl From<OrderStatus> for OrderFilter {
    fn from(status: OrderStatus) -> Self {
        match status {
            OrderStatus::Pending => OrderFilter::Pending,
            OrderStatus::Served => OrderFilter::Served,
            OrderStatus::Done => OrderFilter::Done,
        }
    }
}

impl FromStr for DishStatus {
    type Err = OrderError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Pending" => Ok(DishStatus::Pending),
            "Served" => Ok(DishStatus::Served),
            _ => Err(OrderError::invalid("status must be 'Pending' or 'Served'")),
        }
    }
}

impl FromStr for OrderStatus {
    type Err = OrderError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Pending" => Ok(OrderStatus::Pending),
            "Served" => Ok(OrderStatus::Served),
            "Done" => Ok(OrderStatus::Done),
            _ => Err(OrderError::invalid(
                "status must be 'Pending' or 'Served' or 'Done'",
            )),
        }
    }
}

impl FromStr for DishFilter {
    type Err = OrderError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "all" => Ok(DishFilter::All),
            _ => s.parse::<DishStatus>().map(DishFilter::from).map_err(|_| {
                OrderError::invalid("status must be 'Pending' or 'Served' or 'all'")
            }),
        }
    }
}

impl FromStr for OrderFilter {
    type Err = OrderError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "all" => Ok(OrderFilter::All),
            _ => s
                .parse::<OrderStatus>()
                .map(OrderFilter::from)
                .map_err(|_| OrderError::invalid("status is not valid")),
        }
    }
}

impl Display for DishStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Display for OrderStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_is_case_sensitive() {
        assert_eq!("Served".parse::<DishStatus>().unwrap(), DishStatus::Served);
        assert!("served".parse::<DishStatus>().is_err());
        assert!("Done".parse::<DishStatus>().is_err());
        assert_eq!("Done".parse::<OrderStatus>().unwrap(), OrderStatus::Done);
    }

    #[test]
    fn test_all_only_parses_as_filter() {
        assert!("all".parse::<OrderStatus>().is_err());
        assert_eq!("all".parse::<OrderFilter>().unwrap(), OrderFilter::All);
        assert_eq!("all".parse::<DishFilter>().unwrap(), DishFilter::All);
        assert!("Done".parse::<DishFilter>().is_err());
    }

    #[test]
    fn test_derive_from_dishes() {
        assert_eq!(OrderStatus::derive_from(std::iter::empty()), OrderStatus::Served);
        assert_eq!(
            OrderStatus::derive_from([DishStatus::Served, DishStatus::Pending]),
            OrderStatus::Pending
        );
        assert_eq!(
            OrderStatus::derive_from([DishStatus::Served, DishStatus::Served]),
            OrderStatus::Served
        );
    }
}
