use crate::model::fields::{required, Name, Quantity, UnitPrice};
use crate::model::DishStatus;
use crate::order_manager::OrderError;
use serde::{Deserialize, Serialize};

/// One line item of an order.
///
/// A `Dish` is built from validated field types, so once it exists every field
/// holds a legal value. Setters take the same validated types and therefore
/// cannot leave the dish half-updated.
#[derive(Debug, Clone, PartialEq)]
pub struct Dish {
    name: Name,
    quantity: Quantity,
    unit_price: UnitPrice,
    status: DishStatus,
}

/// Payload for adding a dish to an order.
///
/// Fields are optional so a missing value surfaces as an InvalidArgument
/// instead of a decoding failure. `price` is accepted for `unit_price`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DishCreate {
    pub name: Option<String>,
    pub quantity: Option<i64>,
    #[serde(alias = "price")]
    pub unit_price: Option<f64>,
}

/// Serializable projection of a [`Dish`].
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DishView {
    pub name: String,
    pub unit_price: f64,
    pub quantity: u32,
    pub status: DishStatus,
    pub total_price: f64,
}

impl Dish {
    /// Creates a new dish. New dishes always start `Pending`.
    pub fn new(name: Name, quantity: Quantity, unit_price: UnitPrice) -> Self {
        Self {
            name,
            quantity,
            unit_price,
            status: DishStatus::Pending,
        }
    }

    /// Validates raw values in field order (name, quantity, unit price).
    pub fn parse(name: &str, quantity: i64, unit_price: f64) -> Result<Self, OrderError> {
        let name = Name::parse(name, "name")?;
        let quantity = Quantity::parse(quantity)?;
        let unit_price = UnitPrice::parse(unit_price)?;
        Ok(Self::new(name, quantity, unit_price))
    }

    pub fn name(&self) -> &Name {
        &self.name
    }

    pub fn quantity(&self) -> Quantity {
        self.quantity
    }

    pub fn unit_price(&self) -> UnitPrice {
        self.unit_price
    }

    pub fn status(&self) -> DishStatus {
        self.status
    }

    pub fn set_name(&mut self, name: Name) {
        self.name = name;
    }

    pub fn set_quantity(&mut self, quantity: Quantity) {
        self.quantity = quantity;
    }

    pub fn set_unit_price(&mut self, unit_price: UnitPrice) {
        self.unit_price = unit_price;
    }

    pub fn set_status(&mut self, status: DishStatus) {
        self.status = status;
    }

    pub fn total_price(&self) -> f64 {
        f64::from(self.quantity.get()) * self.unit_price.get()
    }

    pub fn to_view(&self) -> DishView {
        DishView {
            name: self.name.to_string(),
            unit_price: self.unit_price.get(),
            quantity: self.quantity.get(),
            status: self.status,
            total_price: self.total_price(),
        }
    }
}

impl TryFrom<DishCreate> for Dish {
    type Error = OrderError;

    fn try_from(params: DishCreate) -> Result<Self, Self::Error> {
        let name = required(params.name, "name")?;
        let quantity = required(params.quantity, "quantity")?;
        let unit_price = required(params.unit_price, "unit price")?;
        Dish::parse(&name, quantity, unit_price)
    }
}
