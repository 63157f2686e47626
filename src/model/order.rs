use crate::model::fields::{required, Name, OrderId, TableNumber, UnitPrice};
use crate::model::{Dish, DishFilter, DishStatus, DishView, OrderStatus, Quantity};
use crate::order_manager::OrderError;
use serde::{Deserialize, Serialize};

/// Represents the order of one table.
///
/// # Status
/// The order caches a status derived from its dishes: `Pending` while any dish
/// is pending, `Served` otherwise (an empty order is `Served`). `Done` is set by
/// [`Order::close`] and is kept by every later recomputation; only the explicit
/// "force pending" paths (adding a dish, raising a quantity, re-queueing a dish)
/// overwrite it.
#[derive(Debug, Clone, PartialEq)]
pub struct Order {
    id: OrderId,
    customer_name: Name,
    table_number: TableNumber,
    dishes: Vec<Dish>,
    status: OrderStatus,
}

/// Payload for opening a new order.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct OrderCreate {
    pub customer_name: Option<String>,
    pub table_number: Option<i64>,
}

/// Serializable projection of an [`Order`].
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OrderView {
    pub id: u32,
    pub customer_name: String,
    pub table_number: u32,
    pub dishes: Vec<DishView>,
    pub status: OrderStatus,
    pub total_price: f64,
}

impl OrderCreate {
    /// Checks presence and validity of both fields, customer name first.
    pub fn validate(self) -> Result<(Name, TableNumber), OrderError> {
        let customer_name = required(self.customer_name, "customer name")?;
        let customer_name = Name::parse(&customer_name, "customer name")?;
        let table_number = required(self.table_number, "table number")?;
        let table_number = TableNumber::parse(table_number)?;
        Ok((customer_name, table_number))
    }
}

impl Order {
    /// Creates an empty order. With no dishes the order starts out `Served`.
    pub fn new(id: OrderId, customer_name: Name, table_number: TableNumber) -> Self {
        Self {
            id,
            customer_name,
            table_number,
            dishes: Vec::new(),
            status: OrderStatus::Served,
        }
    }

    pub fn id(&self) -> OrderId {
        self.id
    }

    pub fn customer_name(&self) -> &Name {
        &self.customer_name
    }

    pub fn table_number(&self) -> TableNumber {
        self.table_number
    }

    pub fn dishes(&self) -> &[Dish] {
        &self.dishes
    }

    pub fn status(&self) -> OrderStatus {
        self.status
    }

    pub fn is_active(&self) -> bool {
        self.status != OrderStatus::Done
    }

    pub fn set_customer_name(&mut self, customer_name: Name) {
        self.customer_name = customer_name;
    }

    /// Marks the order as billed. Dish statuses are not checked.
    pub fn close(&mut self) {
        self.status = OrderStatus::Done;
    }

    pub fn find_dish(&self, name: &Name) -> Result<&Dish, OrderError> {
        self.dishes
            .iter()
            .find(|dish| dish.name() == name)
            .ok_or_else(|| Self::dish_not_found(name))
    }

    fn find_dish_mut(&mut self, name: &Name) -> Result<&mut Dish, OrderError> {
        self.dishes
            .iter_mut()
            .find(|dish| dish.name() == name)
            .ok_or_else(|| Self::dish_not_found(name))
    }

    fn dish_not_found(name: &Name) -> OrderError {
        OrderError::not_found(format!("{name} is not found in that order"))
    }

    pub fn dish_exists(&self, name: &Name) -> bool {
        self.dishes.iter().any(|dish| dish.name() == name)
    }

    pub fn dish_price(&self, name: &Name) -> Result<UnitPrice, OrderError> {
        self.find_dish(name).map(Dish::unit_price)
    }

    pub fn dish_status(&self, name: &Name) -> Result<DishStatus, OrderError> {
        self.find_dish(name).map(Dish::status)
    }

    /// Appends a dish, re-queued as `Pending`, and marks the order `Pending`.
    pub fn add_dish(&mut self, mut dish: Dish) -> Result<(), OrderError> {
        if self.dish_exists(dish.name()) {
            return Err(OrderError::Conflict(format!(
                "the dish '{}' already exists in the order",
                dish.name()
            )));
        }
        dish.set_status(DishStatus::Pending);
        self.dishes.push(dish);
        self.status = OrderStatus::Pending;
        Ok(())
    }

    /// Removes a dish and recomputes the order status.
    pub fn remove_dish(&mut self, name: &Name) -> Result<Dish, OrderError> {
        let index = self
            .dishes
            .iter()
            .position(|dish| dish.name() == name)
            .ok_or_else(|| Self::dish_not_found(name))?;
        let removed = self.dishes.remove(index);
        self.refresh_status();
        Ok(removed)
    }

    /// Sets a new quantity. Asking for more of a dish sends it back to the kitchen.
    pub fn update_dish_quantity(&mut self, name: &Name, quantity: Quantity) -> Result<(), OrderError> {
        let dish = self.find_dish_mut(name)?;
        let requeue = quantity > dish.quantity();
        if requeue {
            dish.set_status(DishStatus::Pending);
        }
        dish.set_quantity(quantity);
        if requeue {
            self.status = OrderStatus::Pending;
        }
        Ok(())
    }

    pub fn update_dish_status(&mut self, name: &Name, status: DishStatus) -> Result<(), OrderError> {
        self.find_dish_mut(name)?.set_status(status);
        match status {
            DishStatus::Pending => self.status = OrderStatus::Pending,
            DishStatus::Served => self.refresh_status(),
        }
        Ok(())
    }

    /// Dishes matching `filter`, in insertion order.
    pub fn dishes_by_status(&self, filter: DishFilter) -> Vec<Dish> {
        self.dishes
            .iter()
            .filter(|dish| filter.matches(dish.status()))
            .cloned()
            .collect()
    }

    pub fn total_price(&self) -> f64 {
        self.dishes.iter().map(Dish::total_price).sum()
    }

    fn refresh_status(&mut self) {
        if self.status == OrderStatus::Done {
            return;
        }
        self.status = OrderStatus::derive_from(self.dishes.iter().map(Dish::status));
    }

    pub fn to_view(&self) -> OrderView {
        OrderView {
            id: self.id.get(),
            customer_name: self.customer_name.to_string(),
            table_number: self.table_number.get(),
            dishes: self.dishes.iter().map(Dish::to_view).collect(),
            status: self.status,
            total_price: self.total_price(),
        }
    }
}
