//! Demo: start the admin core with the bundled fixtures, print the catalog and order views,
//! walk one order through its lifecycle and shut down.

use inventory_admin::aggregates::{total_stock, OrderFilter, Selection, VariationMatrix};
use inventory_admin::auth::Session;
use inventory_admin::config::AdminConfig;
use inventory_admin::forms::{OrderDraft, ValidationErrors};
use inventory_admin::framework::ActorClient;
use inventory_admin::lifecycle::{setup_tracing, AdminSystem};
use inventory_admin::model::{OrderId, OrderStatus, PaymentMethod, ProductId};
use tracing::{error, info, Instrument};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    setup_tracing();

    let config = AdminConfig::from_env()?;
    info!(?config, "Starting inventory admin");
    let system = AdminSystem::start(config).await?;

    let admin = Session::admin("Ana");
    let staff = Session::staff("Sam");

    // Catalog view
    for product in system.product_client.list().await? {
        let matrix = VariationMatrix::for_product(&product);
        println!(
            "{} [{}] {:.2} - {} in stock",
            product.name,
            product.category,
            product.price,
            total_stock(&product)
        );
        println!("      {}", matrix.colors.join("  "));
        for (size, cells) in matrix.rows() {
            let row: Vec<String> = cells.iter().map(ToString::to_string).collect();
            println!("  {:<4}{}  = {}", size, row.join("  "), matrix.row_total(&size));
        }
    }

    let stats = system.inventory_stats().await?;
    println!(
        "{} products, {} units, {} low, {} out of stock",
        stats.product_count,
        stats.total_stock,
        stats.low_stock_variations,
        stats.out_of_stock_variations
    );

    // Order lifecycle
    let order_id = OrderId::new("order-1");
    let span = tracing::info_span!("order_lifecycle", %order_id);
    async {
        if let Err(e) = system
            .order_client
            .apply_transition(&staff, order_id.clone(), OrderStatus::Processing)
            .await
        {
            info!(error = %e, "Staff cannot move orders");
        }
        for next in [OrderStatus::Processing, OrderStatus::Completed, OrderStatus::Cancelled] {
            match system
                .order_client
                .apply_transition(&admin, order_id.clone(), next)
                .await
            {
                Ok(order) => info!(status = %order.status, "Transition applied"),
                Err(e) => error!(error = %e, "Transition rejected"),
            }
        }
    }
    .instrument(span)
    .await;

    // New order through the form
    let tee = system.product_client.fetch(ProductId::new("1")).await?;
    let mut draft = OrderDraft {
        customer_name: "Paolo Lim".into(),
        customer_email: "paolo.lim@example.com".into(),
        customer_phone: "+63 917 555 0199".into(),
        shipping_address: "3 Katipunan Ave, Quezon City".into(),
        payment_method: PaymentMethod::Paypal,
        ..Default::default()
    };
    let black_m = tee
        .find_variation("M", "Black")
        .map(|v| v.id.clone())
        .ok_or("fixture tee has no M/Black variation")?;
    draft
        .add_item(&tee, &black_m, 3)
        .map_err(ValidationErrors::from)?;
    info!(preview = draft.preview_total(), "Order preview");
    let new_id = system
        .order_client
        .create_order(&staff, draft.validate()?)
        .await?;
    info!(%new_id, "Order created");

    let pending = system
        .order_client
        .filter_orders(&OrderFilter {
            search: String::new(),
            status: Selection::Only(OrderStatus::Pending),
        })
        .await?;
    for order in &pending {
        println!(
            "{} {} {} {:.2}",
            order.id,
            order.customer_name,
            order.status.display_name(),
            order.total_amount
        );
    }

    let order_stats = system.order_stats().await?;
    println!(
        "{} orders, revenue {:.2}",
        order_stats.order_count, order_stats.revenue
    );

    system.shutdown().await?;
    info!("Done");
    Ok(())
}
