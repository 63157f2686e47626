//! The three ways an order can be identified.

use crate::model::fields::{positive_from_str, Name, OrderId, TableNumber};
use crate::model::Order;
use crate::order_manager::OrderError;
use std::fmt::{self, Display};

/// Key used to resolve an order inside the manager.
///
/// Table lookups only see orders that are still active; a closed order keeps
/// its table number but is invisible here, so the table can be reused.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OrderLookup {
    Table(TableNumber),
    Id(OrderId),
    Customer(Name),
}

impl OrderLookup {
    /// Parses a `(kind, value)` pair as received from a path.
    ///
    /// `kind` is trimmed and case-insensitive (`table`, `id`, `customer`).
    /// Table and id values must be positive integers; customer values must be
    /// non-empty after trimming.
    pub fn parse(kind: &str, value: &str) -> Result<Self, OrderError> {
        match kind.trim().to_lowercase().as_str() {
            "table" => {
                let table = positive_from_str(value, "identifier value")?;
                TableNumber::parse(i64::from(table)).map(OrderLookup::Table)
            }
            "id" => {
                let id = positive_from_str(value, "identifier value")?;
                OrderId::parse(i64::from(id)).map(OrderLookup::Id)
            }
            "customer" => Name::parse(value, "identifier value").map(OrderLookup::Customer),
            _ => Err(OrderError::invalid(
                "identifier type must be 'table' or 'id' or 'customer'",
            )),
        }
    }

    pub fn matches(&self, order: &Order) -> bool {
        match self {
            OrderLookup::Table(table) => order.table_number() == *table && order.is_active(),
            OrderLookup::Id(id) => order.id() == *id,
            OrderLookup::Customer(name) => order.customer_name() == name,
        }
    }
}

impl From<TableNumber> for OrderLookup {
    fn from(table: TableNumber) -> Self {
        OrderLookup::Table(table)
    }
}

impl From<OrderId> for OrderLookup {
    fn from(id: OrderId) -> Self {
        OrderLookup::Id(id)
    }
}

impl Display for OrderLookup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OrderLookup::Table(table) => write!(f, "table {table}"),
            OrderLookup::Id(id) => write!(f, "id {id}"),
            OrderLookup::Customer(name) => write!(f, "customer {name}"),
        }
    }
}
