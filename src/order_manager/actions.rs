//! Actions understood by the order manager actor.
//!
//! Every public operation of [`OrderManager`](crate::order_manager::OrderManager) has one
//! [`ManagerAction`] variant. Arguments are already validated model types, so the actor
//! never sees raw input. Results match the actions 1:1.

use crate::model::{
    Dish, DishFilter, DishStatus, Name, Order, OrderCreate, OrderFilter, OrderId, OrderLookup,
    OrderStatus, Quantity, TableNumber, UnitPrice,
};
use crate::order_manager::OrderCounters;

#[derive(Debug, Clone)]
pub enum ManagerAction {
    Counters,
    FindOrder(OrderLookup),
    AddOrder(OrderCreate),
    RemoveOrder(OrderLookup),
    /// Marks the active order at a table as `Done` and returns its bill.
    CloseOrder(TableNumber),
    AddDish {
        table: TableNumber,
        dish: Dish,
    },
    /// Result is `true` when the emptied order was removed as well.
    RemoveDish {
        table: TableNumber,
        dish_name: Name,
    },
    UpdateDishQuantity {
        table: TableNumber,
        dish_name: Name,
        quantity: Quantity,
    },
    UpdateDishStatus {
        table: TableNumber,
        dish_name: Name,
        status: DishStatus,
    },
    GetOrderPrice(TableNumber),
    GetOrderStatus(TableNumber),
    GetCustomerName(TableNumber),
    ChangeCustomerName {
        table: TableNumber,
        name: Name,
    },
    GetDishPrice {
        table: TableNumber,
        dish_name: Name,
    },
    GetDishStatus {
        table: TableNumber,
        dish_name: Name,
    },
    TablesByOrderStatus(OrderStatus),
    TotalPriceByStatus(OrderFilter),
    AllDishesByStatus(DishFilter),
    TableDishesByStatus {
        table: TableNumber,
        filter: DishFilter,
    },
}

/// Results from ManagerActions - variants match 1:1 with ManagerAction
#[derive(Debug, Clone)]
pub enum ManagerActionResult {
    Counters(OrderCounters),
    FindOrder(Order),
    AddOrder(OrderId),
    RemoveOrder(Order),
    CloseOrder(f64),
    AddDish(()),
    RemoveDish(bool),
    UpdateDishQuantity(()),
    UpdateDishStatus(()),
    GetOrderPrice(f64),
    GetOrderStatus(OrderStatus),
    GetCustomerName(Name),
    ChangeCustomerName(()),
    GetDishPrice(UnitPrice),
    GetDishStatus(DishStatus),
    TablesByOrderStatus(Vec<TableNumber>),
    TotalPriceByStatus(f64),
    AllDishesByStatus(Vec<Dish>),
    TableDishesByStatus(Vec<Dish>),
}
