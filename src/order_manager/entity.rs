//! [`ActorState`] implementation for [`OrderManager`].
//!
//! Dispatches each [`ManagerAction`] to the matching manager method and wraps the
//! return value in the corresponding [`ManagerActionResult`] variant.

use super::actions::{ManagerAction, ManagerActionResult};
use super::manager::{ManagerView, OrderManager};
use super::OrderError;
use crate::framework::ActorState;

impl ActorState for OrderManager {
    type Action = ManagerAction;
    type ActionResult = ManagerActionResult;
    type Snapshot = ManagerView;
    type Error = OrderError;

    fn handle_action(&mut self, action: ManagerAction) -> Result<ManagerActionResult, OrderError> {
        use ManagerAction as A;
        use ManagerActionResult as R;

        match action {
            A::Counters => Ok(R::Counters(self.counters())),
            A::FindOrder(lookup) => self.find_order(&lookup).cloned().map(R::FindOrder),
            A::AddOrder(params) => self.add_order(params).map(R::AddOrder),
            A::RemoveOrder(lookup) => self.remove_order(&lookup).map(R::RemoveOrder),
            A::CloseOrder(table) => self.close_order(table).map(R::CloseOrder),
            A::AddDish { table, dish } => self.add_dish_to_order(table, dish).map(R::AddDish),
            A::RemoveDish { table, dish_name } => self
                .remove_dish_from_order(table, &dish_name)
                .map(R::RemoveDish),
            A::UpdateDishQuantity {
                table,
                dish_name,
                quantity,
            } => self
                .update_dish_quantity(table, &dish_name, quantity)
                .map(R::UpdateDishQuantity),
            A::UpdateDishStatus {
                table,
                dish_name,
                status,
            } => self
                .update_dish_status(table, &dish_name, status)
                .map(R::UpdateDishStatus),
            A::GetOrderPrice(table) => self.get_order_price(table).map(R::GetOrderPrice),
            A::GetOrderStatus(table) => self.get_order_status(table).map(R::GetOrderStatus),
            A::GetCustomerName(table) => self.get_customer_name(table).map(R::GetCustomerName),
            A::ChangeCustomerName { table, name } => self
                .change_customer_name(table, name)
                .map(R::ChangeCustomerName),
            A::GetDishPrice { table, dish_name } => {
                self.get_dish_price(table, &dish_name).map(R::GetDishPrice)
            }
            A::GetDishStatus { table, dish_name } => {
                self.get_dish_status(table, &dish_name).map(R::GetDishStatus)
            }
            A::TablesByOrderStatus(status) => Ok(R::TablesByOrderStatus(
                self.get_table_numbers_by_order_status(status),
            )),
            A::TotalPriceByStatus(filter) => Ok(R::TotalPriceByStatus(
                self.total_orders_price_by_status(filter),
            )),
            A::AllDishesByStatus(filter) => {
                Ok(R::AllDishesByStatus(self.get_all_dishes_by_status(filter)))
            }
            A::TableDishesByStatus { table, filter } => self
                .get_table_dishes_by_status(table, filter)
                .map(R::TableDishesByStatus),
        }
    }

    fn snapshot(&self) -> ManagerView {
        self.to_view()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Dish, OrderCreate, OrderLookup, TableNumber};
    use crate::order_manager::ErrorKind;

    fn add_order(manager: &mut OrderManager, customer: &str, table: i64) -> ManagerActionResult {
        manager
            .handle_action(ManagerAction::AddOrder(OrderCreate {
                customer_name: Some(customer.into()),
                table_number: Some(table),
            }))
            .unwrap()
    }

    #[test]
    fn test_dispatch_matches_direct_calls() {
        let mut manager = OrderManager::new();
        let result = add_order(&mut manager, "Ana", 3);
        assert!(matches!(result, ManagerActionResult::AddOrder(id) if id.get() == 1));

        let table = TableNumber::parse(3).unwrap();
        manager
            .handle_action(ManagerAction::AddDish {
                table,
                dish: Dish::parse("Soup", 2, 5.0).unwrap(),
            })
            .unwrap();

        match manager.handle_action(ManagerAction::GetOrderPrice(table)).unwrap() {
            ManagerActionResult::GetOrderPrice(total) => assert_eq!(total, 10.0),
            other => panic!("unexpected result {other:?}"),
        }
        match manager.handle_action(ManagerAction::CloseOrder(table)).unwrap() {
            ManagerActionResult::CloseOrder(total) => assert_eq!(total, 10.0),
            other => panic!("unexpected result {other:?}"),
        }
        assert_eq!(manager.snapshot().active_orders_num, 0);
    }

    #[test]
    fn test_failed_action_returns_domain_error() {
        let mut manager = OrderManager::new();
        add_order(&mut manager, "Ana", 3);
        let err = manager
            .handle_action(ManagerAction::FindOrder(OrderLookup::Table(
                TableNumber::parse(9).unwrap(),
            )))
            .unwrap_err();
        assert_eq!(err.kind(), ErrorKind::NotFound);
        assert_eq!(manager.snapshot().stored_orders_num, 1);
    }

    #[test]
    fn test_label() {
        assert_eq!(OrderManager::label(), "OrderManager");
    }
}
