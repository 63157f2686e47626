use table_orders::clients::ActorClient;
use table_orders::lifecycle::{RestaurantSystem, SystemConfig};
use table_orders::model::{
    Dish, DishCreate, DishFilter, DishStatus, Name, OrderCreate, OrderFilter, OrderLookup,
    OrderStatus, Quantity, TableNumber,
};
use table_orders::order_manager::{ErrorKind, OrderCounters};

fn table(n: i64) -> TableNumber {
    TableNumber::parse(n).unwrap()
}

fn name(value: &str) -> Name {
    Name::parse(value, "dish_name").unwrap()
}

fn order(customer: &str, table_number: i64) -> OrderCreate {
    OrderCreate {
        customer_name: Some(customer.to_string()),
        table_number: Some(table_number),
    }
}

/// Full end-to-end run through the real actor: open, order, serve, close.
#[tokio::test]
async fn test_full_table_service() {
    let system = RestaurantSystem::new();
    let orders = system.order_client.clone();

    let id = orders.add_order(order("Ana", 3)).await.expect("Failed to add order");
    assert_eq!(id.get(), 1);
    assert_eq!(orders.get_order_status(table(3)).await.unwrap(), OrderStatus::Served);

    orders
        .add_dish_to_order(table(3), Dish::parse("Soup", 2, 5.0).unwrap())
        .await
        .expect("Failed to add Soup");
    orders
        .add_dish_to_order(table(3), Dish::parse("Bread", 1, 2.0).unwrap())
        .await
        .expect("Failed to add Bread");

    assert_eq!(orders.get_order_status(table(3)).await.unwrap(), OrderStatus::Pending);
    assert_eq!(orders.get_order_price(table(3)).await.unwrap(), 12.0);

    let total = orders.close_order(table(3)).await.expect("Failed to close order");
    assert_eq!(total, 12.0);

    let counters = orders.counters().await.unwrap();
    assert_eq!(
        counters,
        OrderCounters {
            created_orders_num: 1,
            stored_orders_num: 1,
            active_orders_num: 0,
        }
    );

    let closed = orders.find_order(OrderLookup::Id(id)).await.unwrap();
    assert_eq!(closed.status(), OrderStatus::Done);

    let err = orders
        .find_order(OrderLookup::Table(table(3)))
        .await
        .unwrap_err();
    assert_eq!(err.kind(), ErrorKind::NotFound);

    drop(orders);
    let manager = system.shutdown().await.expect("Shutdown failed");
    assert_eq!(manager.stored_orders_num(), 1);
}

#[tokio::test]
async fn test_dish_lifecycle_through_client() {
    let system = RestaurantSystem::new();
    let orders = &system.order_client;

    orders.add_order(order("Ana", 5)).await.unwrap();
    let soup = DishCreate {
        name: Some("Soup".into()),
        quantity: Some(1),
        unit_price: Some(4.5),
    };
    orders
        .add_dish_to_order(table(5), Dish::try_from(soup).unwrap())
        .await
        .unwrap();

    let err = orders
        .add_dish_to_order(table(5), Dish::parse("Soup", 3, 4.5).unwrap())
        .await
        .unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Conflict);

    orders
        .update_dish_status(table(5), name("Soup"), DishStatus::Served)
        .await
        .unwrap();
    assert_eq!(orders.get_order_status(table(5)).await.unwrap(), OrderStatus::Served);

    orders
        .update_dish_quantity(table(5), name("Soup"), Quantity::parse(2).unwrap())
        .await
        .unwrap();
    assert_eq!(
        orders.get_dish_status(table(5), name("Soup")).await.unwrap(),
        DishStatus::Pending
    );
    assert_eq!(
        orders.get_dish_price(table(5), name("Soup")).await.unwrap().get(),
        4.5
    );

    let pending = orders
        .get_table_dishes_by_status(table(5), DishFilter::Pending)
        .await
        .unwrap();
    assert_eq!(pending.len(), 1);

    let removed = orders
        .remove_dish_from_order(table(5), name("Soup"))
        .await
        .unwrap();
    assert!(removed, "emptied order should be removed");
    assert_eq!(orders.counters().await.unwrap().stored_orders_num, 0);
}

#[tokio::test]
async fn test_aggregates_and_customer_name() {
    let system = RestaurantSystem::new();
    let orders = &system.order_client;

    orders.add_order(order("Ana", 1)).await.unwrap();
    orders.add_order(order("Ben", 2)).await.unwrap();
    orders
        .add_dish_to_order(table(1), Dish::parse("Wine", 1, 9.0).unwrap())
        .await
        .unwrap();
    orders
        .add_dish_to_order(table(2), Dish::parse("Cake", 2, 3.0).unwrap())
        .await
        .unwrap();
    orders.close_order(table(2)).await.unwrap();

    orders
        .change_customer_name(table(1), Name::parse("Bea", "customer name").unwrap())
        .await
        .unwrap();
    assert_eq!(orders.get_customer_name(table(1)).await.unwrap().as_str(), "Bea");

    let pending_tables = orders
        .get_table_numbers_by_order_status(OrderStatus::Pending)
        .await
        .unwrap();
    assert_eq!(pending_tables, vec![table(1)]);

    assert_eq!(
        orders.total_orders_price_by_status(OrderFilter::All).await.unwrap(),
        15.0
    );
    assert_eq!(
        orders.total_orders_price_by_status(OrderFilter::Done).await.unwrap(),
        6.0
    );
    assert_eq!(
        orders.get_all_dishes_by_status(DishFilter::All).await.unwrap().len(),
        2
    );

    let removed = orders
        .remove_order(OrderLookup::Customer(Name::parse("Ben", "customer name").unwrap()))
        .await
        .unwrap();
    assert_eq!(removed.status(), OrderStatus::Done);
    let counters = orders.counters().await.unwrap();
    assert_eq!(counters.stored_orders_num, 1);
    assert_eq!(counters.active_orders_num, 1);
}

#[tokio::test]
async fn test_invalid_payloads_are_rejected() {
    let system = RestaurantSystem::new();
    let orders = &system.order_client;

    let err = orders
        .add_order(OrderCreate {
            customer_name: None,
            table_number: Some(1),
        })
        .await
        .unwrap_err();
    assert_eq!(err.kind(), ErrorKind::InvalidArgument);
    assert_eq!(err.to_string(), "customer name cannot be missing");

    let err = orders.add_order(order("Ana", 0)).await.unwrap_err();
    assert_eq!(err.kind(), ErrorKind::InvalidArgument);

    assert_eq!(orders.counters().await.unwrap().created_orders_num, 0);
}

/// Many tasks share clones of one client; every order must get a distinct id.
#[tokio::test]
async fn test_concurrent_clients_get_unique_ids() {
    let system = RestaurantSystem::with_config(SystemConfig { channel_capacity: 4 });

    let mut handles = Vec::new();
    for n in 1..=20 {
        let client = system.order_client.clone();
        handles.push(tokio::spawn(async move {
            client.add_order(order("Guest", n)).await.unwrap()
        }));
    }

    let mut ids = Vec::new();
    for handle in handles {
        ids.push(handle.await.unwrap().get());
    }
    ids.sort_unstable();
    assert_eq!(ids, (1..=20).collect::<Vec<u32>>());

    let view = system.order_client.snapshot().await.unwrap();
    assert_eq!(view.created_orders_num, 20);
    assert_eq!(view.active_orders_num, 20);
    assert_eq!(view.orders.len(), 20);
}

#[tokio::test]
async fn test_snapshot_serializes_with_wire_field_names() {
    let system = RestaurantSystem::new();
    let orders = &system.order_client;
    orders.add_order(order("Ana", 3)).await.unwrap();
    orders
        .add_dish_to_order(table(3), Dish::parse("Soup", 2, 5.0).unwrap())
        .await
        .unwrap();

    let view = orders.snapshot().await.unwrap();
    let json = serde_json::to_value(&view).unwrap();

    assert_eq!(json["created_orders_num"], 1);
    assert_eq!(json["stored_orders_num"], 1);
    assert_eq!(json["active_orders_num"], 1);

    let first = &json["orders"][0];
    assert_eq!(first["id"], 1);
    assert_eq!(first["customer_name"], "Ana");
    assert_eq!(first["table_number"], 3);
    assert_eq!(first["status"], "Pending");
    assert_eq!(first["total_price"], 10.0);

    let dish = &first["dishes"][0];
    assert_eq!(dish["name"], "Soup");
    assert_eq!(dish["unit_price"], 5.0);
    assert_eq!(dish["quantity"], 2);
    assert_eq!(dish["status"], "Pending");
    assert_eq!(dish["total_price"], 10.0);
}

#[tokio::test]
async fn test_dish_payload_accepts_price_alias() {
    let payload: DishCreate =
        serde_json::from_str(r#"{"name": "Tea", "quantity": 1, "price": 2.5}"#).unwrap();
    let dish = Dish::try_from(payload).unwrap();
    assert_eq!(dish.unit_price().get(), 2.5);

    let missing: DishCreate = serde_json::from_str(r#"{"name": "Tea", "quantity": 1}"#).unwrap();
    let err = Dish::try_from(missing).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::InvalidArgument);
}
