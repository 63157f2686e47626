//! Demo run of the order manager: open a table, order, serve, and settle the bill.

use table_orders::lifecycle::{setup_tracing, RestaurantSystem, SystemConfig};
use table_orders::model::{Dish, DishStatus, Name, OrderCreate, OrderLookup, TableNumber};
use tracing::{error, info, Instrument};

#[tokio::main]
async fn main() -> Result<(), String> {
    setup_tracing();

    let config = SystemConfig::from_env().map_err(|e| e.to_string())?;
    info!(?config, "Starting restaurant order system");

    let system = RestaurantSystem::with_config(config);
    let orders = &system.order_client;
    let table = TableNumber::parse(3).map_err(|e| e.to_string())?;

    let span = tracing::info_span!("table_service", %table);
    let service = async {
        let id = orders
            .add_order(OrderCreate {
                customer_name: Some("Ana".to_string()),
                table_number: Some(3),
            })
            .await?;
        info!(%id, "Order opened");

        orders
            .add_dish_to_order(table, Dish::parse("Soup", 2, 5.0)?)
            .await?;
        orders
            .add_dish_to_order(table, Dish::parse("Bread", 1, 2.0)?)
            .await?;

        for dish in ["Soup", "Bread"] {
            let name = Name::parse(dish, "dish_name")?;
            orders
                .update_dish_status(table, name, DishStatus::Served)
                .await?;
        }
        let status = orders.get_order_status(table).await?;
        info!(%status, "Dishes served");

        let bill = orders.close_order(table).await?;
        info!(bill, "Order closed");

        let closed = orders.find_order(OrderLookup::Id(id)).await?;
        info!(id = %closed.id(), status = %closed.status(), "Closed order still stored");
        Ok::<_, table_orders::order_manager::OrderError>(())
    }
    .instrument(span)
    .await;

    if let Err(e) = service {
        error!(error = %e, kind = ?e.kind(), "Table service failed");
    }

    let manager = system.shutdown().await?;
    info!(
        created = manager.created_orders_num(),
        active = manager.active_orders_num(),
        "Application completed successfully"
    );
    Ok(())
}
