//! The synchronous order store.
//!
//! [`OrderManager`] owns every [`Order`], hands out ids, and resolves orders by
//! table, id, or customer. It has no interior mutability and no locking; the
//! [`StateActor`](crate::framework::StateActor) that wraps it provides the
//! one-mutation-at-a-time guarantee.

use crate::model::{
    Dish, DishFilter, DishStatus, Name, Order, OrderCreate, OrderFilter, OrderId, OrderLookup,
    OrderStatus, OrderView, Quantity, TableNumber, UnitPrice,
};
use crate::order_manager::OrderError;
use serde::Serialize;
use tracing::debug;

#[derive(Debug, Clone, Default)]
pub struct OrderManager {
    orders: Vec<Order>,
    /// Never decremented; the latest value is also the latest assigned id.
    created_orders_num: u32,
    stored_orders_num: usize,
    active_orders_num: usize,
}

/// The three counters, read together.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct OrderCounters {
    pub created_orders_num: u32,
    pub stored_orders_num: usize,
    pub active_orders_num: usize,
}

/// Serializable projection of the whole manager.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ManagerView {
    pub created_orders_num: u32,
    pub stored_orders_num: usize,
    pub active_orders_num: usize,
    pub orders: Vec<OrderView>,
}

impl OrderManager {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn created_orders_num(&self) -> u32 {
        self.created_orders_num
    }

    pub fn stored_orders_num(&self) -> usize {
        self.stored_orders_num
    }

    pub fn active_orders_num(&self) -> usize {
        self.active_orders_num
    }

    pub fn counters(&self) -> OrderCounters {
        OrderCounters {
            created_orders_num: self.created_orders_num,
            stored_orders_num: self.stored_orders_num,
            active_orders_num: self.active_orders_num,
        }
    }

    pub fn orders(&self) -> &[Order] {
        &self.orders
    }

    // --- Lookup ---

    fn position(&self, lookup: &OrderLookup) -> Result<usize, OrderError> {
        self.orders
            .iter()
            .position(|order| lookup.matches(order))
            .ok_or_else(|| OrderError::not_found("Order is not found"))
    }

    /// Resolves an order. Table lookups skip orders that are already `Done`.
    pub fn find_order(&self, lookup: &OrderLookup) -> Result<&Order, OrderError> {
        let index = self.position(lookup)?;
        Ok(&self.orders[index])
    }

    fn table_order_mut(&mut self, table: TableNumber) -> Result<&mut Order, OrderError> {
        let index = self.position(&OrderLookup::Table(table))?;
        Ok(&mut self.orders[index])
    }

    fn table_order(&self, table: TableNumber) -> Result<&Order, OrderError> {
        self.find_order(&OrderLookup::Table(table))
    }

    // --- Order lifecycle ---

    /// Validates the payload and stores a new order, returning its id.
    pub fn add_order(&mut self, params: OrderCreate) -> Result<OrderId, OrderError> {
        let (customer_name, table_number) = params.validate()?;
        Ok(self.open_order(customer_name, table_number))
    }

    /// Stores a new order for already validated values.
    ///
    /// No duplicate-table check happens here; a table is only "taken" in the
    /// sense that table lookups return the first active order found.
    pub fn open_order(&mut self, customer_name: Name, table_number: TableNumber) -> OrderId {
        self.created_orders_num += 1;
        let id = OrderId::from_counter(self.created_orders_num);
        self.orders.push(Order::new(id, customer_name, table_number));
        self.stored_orders_num += 1;
        self.active_orders_num += 1;
        debug!(%id, %table_number, stored = self.stored_orders_num, "Order added");
        id
    }

    fn remove_at(&mut self, index: usize) -> Order {
        let order = self.orders.remove(index);
        self.stored_orders_num -= 1;
        if order.is_active() {
            self.active_orders_num -= 1;
        }
        debug!(
            id = %order.id(),
            stored = self.stored_orders_num,
            active = self.active_orders_num,
            "Order removed"
        );
        order
    }

    /// Removes the resolved order and returns it.
    ///
    /// The active counter only moves when the removed order was not yet closed.
    pub fn remove_order(&mut self, lookup: &OrderLookup) -> Result<Order, OrderError> {
        let index = self.position(lookup)?;
        Ok(self.remove_at(index))
    }

    /// Marks the active order at `table` as `Done` and returns its bill.
    ///
    /// The order stays stored and remains reachable by id or customer.
    pub fn close_order(&mut self, table: TableNumber) -> Result<f64, OrderError> {
        let order = self.table_order_mut(table)?;
        order.close();
        let total = order.total_price();
        let id = order.id();
        self.active_orders_num -= 1;
        debug!(%id, %table, total, active = self.active_orders_num, "Order closed");
        Ok(total)
    }

    // --- Dish operations (resolved by table) ---

    pub fn add_dish_to_order(&mut self, table: TableNumber, dish: Dish) -> Result<(), OrderError> {
        self.table_order_mut(table)?.add_dish(dish)
    }

    /// Removes a dish. Returns `true` when the order became empty and was removed too.
    pub fn remove_dish_from_order(
        &mut self,
        table: TableNumber,
        dish_name: &Name,
    ) -> Result<bool, OrderError> {
        let index = self.position(&OrderLookup::Table(table))?;
        self.orders[index].remove_dish(dish_name)?;
        if self.orders[index].dishes().is_empty() {
            self.remove_at(index);
            return Ok(true);
        }
        Ok(false)
    }

    pub fn update_dish_quantity(
        &mut self,
        table: TableNumber,
        dish_name: &Name,
        quantity: Quantity,
    ) -> Result<(), OrderError> {
        self.table_order_mut(table)?
            .update_dish_quantity(dish_name, quantity)
    }

    pub fn update_dish_status(
        &mut self,
        table: TableNumber,
        dish_name: &Name,
        status: DishStatus,
    ) -> Result<(), OrderError> {
        self.table_order_mut(table)?
            .update_dish_status(dish_name, status)
    }

    // --- Table-resolved getters and setters ---

    pub fn get_order_price(&self, table: TableNumber) -> Result<f64, OrderError> {
        self.table_order(table).map(Order::total_price)
    }

    pub fn get_order_status(&self, table: TableNumber) -> Result<OrderStatus, OrderError> {
        self.table_order(table).map(Order::status)
    }

    pub fn get_customer_name(&self, table: TableNumber) -> Result<Name, OrderError> {
        self.table_order(table)
            .map(|order| order.customer_name().clone())
    }

    pub fn change_customer_name(&mut self, table: TableNumber, name: Name) -> Result<(), OrderError> {
        self.table_order_mut(table)?.set_customer_name(name);
        Ok(())
    }

    pub fn get_dish_price(&self, table: TableNumber, dish_name: &Name) -> Result<UnitPrice, OrderError> {
        self.table_order(table)?.dish_price(dish_name)
    }

    pub fn get_dish_status(&self, table: TableNumber, dish_name: &Name) -> Result<DishStatus, OrderError> {
        self.table_order(table)?.dish_status(dish_name)
    }

    // --- Aggregates ---

    /// Table numbers of every stored order with exactly this status.
    pub fn get_table_numbers_by_order_status(&self, status: OrderStatus) -> Vec<TableNumber> {
        self.orders
            .iter()
            .filter(|order| order.status() == status)
            .map(Order::table_number)
            .collect()
    }

    pub fn total_orders_price_by_status(&self, filter: OrderFilter) -> f64 {
        self.orders
            .iter()
            .filter(|order| filter.matches(order.status()))
            .map(Order::total_price)
            .sum()
    }

    /// Matching dishes of every order, order by order, each in insertion order.
    pub fn get_all_dishes_by_status(&self, filter: DishFilter) -> Vec<Dish> {
        self.orders
            .iter()
            .flat_map(|order| order.dishes_by_status(filter))
            .collect()
    }

    pub fn get_table_dishes_by_status(
        &self,
        table: TableNumber,
        filter: DishFilter,
    ) -> Result<Vec<Dish>, OrderError> {
        self.table_order(table)
            .map(|order| order.dishes_by_status(filter))
    }

    pub fn to_view(&self) -> ManagerView {
        ManagerView {
            created_orders_num: self.created_orders_num,
            stored_orders_num: self.stored_orders_num,
            active_orders_num: self.active_orders_num,
            orders: self.orders.iter().map(Order::to_view).collect(),
        }
    }
}
