//! # Order Client
//!
//! Provides a high‑level API for interacting with the order manager actor.
//! It wraps a `StateClient<OrderManager>` and exposes one async method per
//! manager operation.
use crate::clients::actor_client::ActorClient;
use crate::framework::StateClient;
use crate::model::{
    Dish, DishFilter, DishStatus, Name, Order, OrderCreate, OrderFilter, OrderId, OrderLookup,
    OrderStatus, Quantity, TableNumber, UnitPrice,
};
use crate::order_manager::{
    ManagerAction, ManagerActionResult, OrderCounters, OrderError, OrderManager,
};
use async_trait::async_trait;
use tracing::{debug, instrument};

/// Client for interacting with the order manager actor.
///
/// Cheap to clone; every clone talks to the same actor, which applies
/// requests one at a time.
#[derive(Clone)]
pub struct OrderClient {
    inner: StateClient<OrderManager>,
}

impl OrderClient {
    pub fn new(inner: StateClient<OrderManager>) -> Self {
        Self { inner }
    }
}

#[async_trait]
impl ActorClient<OrderManager> for OrderClient {
    type Error = OrderError;

    fn inner(&self) -> &StateClient<OrderManager> {
        &self.inner
    }
}

/// Sends `$action` and unwraps the `$variant` result.
macro_rules! perform {
    ($self:ident, $action:expr, $variant:ident) => {
        match $self.inner.perform_action($action).await? {
            ManagerActionResult::$variant(value) => Ok(value),
            _ => unreachable!(concat!(
                stringify!($variant),
                " action must return ",
                stringify!($variant),
                " result"
            )),
        }
    };
}

impl OrderClient {
    #[instrument(skip(self))]
    pub async fn counters(&self) -> Result<OrderCounters, OrderError> {
        debug!("Sending request");
        perform!(self, ManagerAction::Counters, Counters)
    }

    /// Returns a copy of the resolved order.
    #[instrument(skip(self))]
    pub async fn find_order(&self, lookup: OrderLookup) -> Result<Order, OrderError> {
        debug!("Sending request");
        perform!(self, ManagerAction::FindOrder(lookup), FindOrder)
    }

    #[instrument(skip(self))]
    pub async fn add_order(&self, params: OrderCreate) -> Result<OrderId, OrderError> {
        debug!("Sending request");
        perform!(self, ManagerAction::AddOrder(params), AddOrder)
    }

    #[instrument(skip(self))]
    pub async fn remove_order(&self, lookup: OrderLookup) -> Result<Order, OrderError> {
        debug!("Sending request");
        perform!(self, ManagerAction::RemoveOrder(lookup), RemoveOrder)
    }

    /// Closes the active order at `table` and returns the bill.
    #[instrument(skip(self))]
    pub async fn close_order(&self, table: TableNumber) -> Result<f64, OrderError> {
        debug!("Sending request");
        perform!(self, ManagerAction::CloseOrder(table), CloseOrder)
    }

    #[instrument(skip(self, dish), fields(dish = %dish.name()))]
    pub async fn add_dish_to_order(&self, table: TableNumber, dish: Dish) -> Result<(), OrderError> {
        debug!(?dish, "Sending request");
        perform!(self, ManagerAction::AddDish { table, dish }, AddDish)
    }

    /// Returns `true` when removing the dish emptied the order and it was removed too.
    #[instrument(skip(self))]
    pub async fn remove_dish_from_order(
        &self,
        table: TableNumber,
        dish_name: Name,
    ) -> Result<bool, OrderError> {
        debug!("Sending request");
        perform!(self, ManagerAction::RemoveDish { table, dish_name }, RemoveDish)
    }

    #[instrument(skip(self))]
    pub async fn update_dish_quantity(
        &self,
        table: TableNumber,
        dish_name: Name,
        quantity: Quantity,
    ) -> Result<(), OrderError> {
        debug!("Sending request");
        perform!(
            self,
            ManagerAction::UpdateDishQuantity {
                table,
                dish_name,
                quantity,
            },
            UpdateDishQuantity
        )
    }

    #[instrument(skip(self))]
    pub async fn update_dish_status(
        &self,
        table: TableNumber,
        dish_name: Name,
        status: DishStatus,
    ) -> Result<(), OrderError> {
        debug!("Sending request");
        perform!(
            self,
            ManagerAction::UpdateDishStatus {
                table,
                dish_name,
                status,
            },
            UpdateDishStatus
        )
    }

    #[instrument(skip(self))]
    pub async fn get_order_price(&self, table: TableNumber) -> Result<f64, OrderError> {
        debug!("Sending request");
        perform!(self, ManagerAction::GetOrderPrice(table), GetOrderPrice)
    }

    #[instrument(skip(self))]
    pub async fn get_order_status(&self, table: TableNumber) -> Result<OrderStatus, OrderError> {
        debug!("Sending request");
        perform!(self, ManagerAction::GetOrderStatus(table), GetOrderStatus)
    }

    #[instrument(skip(self))]
    pub async fn get_customer_name(&self, table: TableNumber) -> Result<Name, OrderError> {
        debug!("Sending request");
        perform!(self, ManagerAction::GetCustomerName(table), GetCustomerName)
    }

    #[instrument(skip(self))]
    pub async fn change_customer_name(
        &self,
        table: TableNumber,
        name: Name,
    ) -> Result<(), OrderError> {
        debug!("Sending request");
        perform!(
            self,
            ManagerAction::ChangeCustomerName { table, name },
            ChangeCustomerName
        )
    }

    #[instrument(skip(self))]
    pub async fn get_dish_price(
        &self,
        table: TableNumber,
        dish_name: Name,
    ) -> Result<UnitPrice, OrderError> {
        debug!("Sending request");
        perform!(self, ManagerAction::GetDishPrice { table, dish_name }, GetDishPrice)
    }

    #[instrument(skip(self))]
    pub async fn get_dish_status(
        &self,
        table: TableNumber,
        dish_name: Name,
    ) -> Result<DishStatus, OrderError> {
        debug!("Sending request");
        perform!(self, ManagerAction::GetDishStatus { table, dish_name }, GetDishStatus)
    }

    #[instrument(skip(self))]
    pub async fn get_table_numbers_by_order_status(
        &self,
        status: OrderStatus,
    ) -> Result<Vec<TableNumber>, OrderError> {
        debug!("Sending request");
        perform!(self, ManagerAction::TablesByOrderStatus(status), TablesByOrderStatus)
    }

    #[instrument(skip(self))]
    pub async fn total_orders_price_by_status(&self, filter: OrderFilter) -> Result<f64, OrderError> {
        debug!("Sending request");
        perform!(self, ManagerAction::TotalPriceByStatus(filter), TotalPriceByStatus)
    }

    #[instrument(skip(self))]
    pub async fn get_all_dishes_by_status(&self, filter: DishFilter) -> Result<Vec<Dish>, OrderError> {
        debug!("Sending request");
        perform!(self, ManagerAction::AllDishesByStatus(filter), AllDishesByStatus)
    }

    #[instrument(skip(self))]
    pub async fn get_table_dishes_by_status(
        &self,
        table: TableNumber,
        filter: DishFilter,
    ) -> Result<Vec<Dish>, OrderError> {
        debug!("Sending request");
        perform!(
            self,
            ManagerAction::TableDishesByStatus { table, filter },
            TableDishesByStatus
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::framework::mock::{create_mock_client, expect_action, expect_snapshot, MockClient};
    use crate::framework::FrameworkError;
    use crate::order_manager::{ErrorKind, ManagerView};

    fn table(n: i64) -> TableNumber {
        TableNumber::parse(n).unwrap()
    }

    #[tokio::test]
    async fn test_close_order_sends_table_and_returns_bill() {
        let (client, mut receiver) = create_mock_client::<OrderManager>(10);
        let order_client = OrderClient::new(client);

        let close_task = tokio::spawn(async move { order_client.close_order(table(3)).await });

        let (action, responder) = expect_action(&mut receiver)
            .await
            .expect("Expected Action request");
        assert!(matches!(action, ManagerAction::CloseOrder(t) if t.get() == 3));

        responder
            .send(Ok(ManagerActionResult::CloseOrder(12.0)))
            .unwrap();

        assert_eq!(close_task.await.unwrap().unwrap(), 12.0);
    }

    #[tokio::test]
    async fn test_domain_error_passes_through() {
        let (client, mut receiver) = create_mock_client::<OrderManager>(10);
        let order_client = OrderClient::new(client);

        let task = tokio::spawn(async move {
            order_client
                .add_dish_to_order(table(3), Dish::parse("Soup", 1, 5.0).unwrap())
                .await
        });

        let (action, responder) = expect_action(&mut receiver).await.unwrap();
        match action {
            ManagerAction::AddDish { table, dish } => {
                assert_eq!(table.get(), 3);
                assert_eq!(dish.name().as_str(), "Soup");
            }
            other => panic!("unexpected action {other:?}"),
        }
        responder
            .send(Err(OrderError::Conflict(
                "the dish 'Soup' already exists in the order".into(),
            )))
            .unwrap();

        let err = task.await.unwrap().unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Conflict);
    }

    #[tokio::test]
    async fn test_dropped_actor_is_unavailable() {
        let (client, receiver) = create_mock_client::<OrderManager>(10);
        let order_client = OrderClient::new(client);
        drop(receiver);

        let err = order_client.counters().await.unwrap_err();
        assert!(matches!(err, OrderError::Actor(FrameworkError::ActorClosed)));
        assert_eq!(err.kind(), ErrorKind::Unavailable);
    }

    #[tokio::test]
    async fn test_snapshot_via_actor_client_trait() {
        let (client, mut receiver) = create_mock_client::<OrderManager>(10);
        let order_client = OrderClient::new(client);

        let task = tokio::spawn(async move { order_client.snapshot().await });

        let responder = expect_snapshot(&mut receiver).await.unwrap();
        responder.send(OrderManager::new().to_view()).unwrap();

        let view: ManagerView = task.await.unwrap().unwrap();
        assert_eq!(view.created_orders_num, 0);
        assert!(view.orders.is_empty());
    }

    #[tokio::test]
    async fn test_expectation_builder() {
        let mut mock = MockClient::<OrderManager>::new();
        mock.expect_action()
            .return_ok(ManagerActionResult::GetOrderStatus(OrderStatus::Pending));
        mock.expect_action()
            .return_err(OrderError::NotFound("Order is not found".into()));

        let order_client = OrderClient::new(mock.client());
        assert_eq!(
            order_client.get_order_status(table(1)).await.unwrap(),
            OrderStatus::Pending
        );
        let err = order_client.get_order_price(table(2)).await.unwrap_err();
        assert_eq!(err.to_string(), "Order is not found");

        mock.verify();
    }
}
