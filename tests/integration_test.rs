use inventory_admin::aggregates::{OrderFilter, ProductFilter, Selection, VariationMatrix};
use inventory_admin::auth::{AccessError, Role, Session};
use inventory_admin::config::AdminConfig;
use inventory_admin::forms::{OrderDraft, ProductDraft, VariationDraft};
use inventory_admin::framework::ActorClient;
use inventory_admin::lifecycle::AdminSystem;
use inventory_admin::model::{
    OrderId, OrderItemId, OrderItemInput, OrderStatus, OrderUpdate, ProductId, ProductUpdate,
    VariationInput, VariationRef,
};
use inventory_admin::order_actor::OrderError;
use inventory_admin::product_actor::ProductError;
use std::time::{Duration, Instant};

fn fast_config() -> AdminConfig {
    AdminConfig::default().with_status_update_delay(Duration::ZERO)
}

async fn seeded() -> AdminSystem {
    AdminSystem::start(fast_config())
        .await
        .expect("Failed to start system")
}

fn admin() -> Session {
    Session::admin("Ana")
}

fn line(
    product_id: &str,
    name: &str,
    price: f64,
    size: &str,
    color: &str,
    quantity: u32,
) -> OrderItemInput {
    OrderItemInput {
        product_id: ProductId::new(product_id),
        product_name: name.into(),
        quantity,
        price,
        variation: VariationRef::new(size, color),
    }
}

/// Full end-to-end run with both real actors and the bundled fixtures.
#[tokio::test]
async fn test_full_admin_system_integration() {
    let system = seeded().await;
    let admin = admin();

    let products = system.product_client.list().await.unwrap();
    assert_eq!(products.len(), 4);
    let tee = &products[0];
    let matrix = VariationMatrix::for_product(tee);
    assert_eq!(matrix.overall_total(), 23);
    assert_eq!(matrix.cell("M", "White").to_string(), "N/A");

    let order_id = OrderId::new("order-1");
    let order = system.order_client.fetch(order_id.clone()).await.unwrap();
    assert_eq!(order.total_amount, 998.0);
    assert_eq!(order.status, OrderStatus::Pending);

    let processing = system
        .order_client
        .apply_transition(&admin, order_id.clone(), OrderStatus::Processing)
        .await
        .unwrap();
    assert_eq!(processing.status, OrderStatus::Processing);
    assert!(processing.updated_at > order.updated_at);

    let completed = system
        .order_client
        .apply_transition(&admin, order_id.clone(), OrderStatus::Completed)
        .await
        .unwrap();
    assert_eq!(completed.status, OrderStatus::Completed);

    // Same transition again: rejected, order untouched.
    let err = system
        .order_client
        .apply_transition(&admin, order_id.clone(), OrderStatus::Completed)
        .await
        .unwrap_err();
    assert_eq!(
        err,
        OrderError::InvalidTransition {
            from: OrderStatus::Completed,
            to: OrderStatus::Completed
        }
    );
    let stored = system.order_client.fetch(order_id).await.unwrap();
    assert_eq!(stored, completed);

    system.shutdown().await.expect("Shutdown failed");
}

#[tokio::test]
async fn test_terminal_orders_reject_every_transition() {
    let system = seeded().await;
    let cancelled = OrderId::new("order-4");

    for next in OrderStatus::ALL {
        let result = system
            .order_client
            .apply_transition(&admin(), cancelled.clone(), next)
            .await;
        assert!(
            matches!(result, Err(OrderError::InvalidTransition { from: OrderStatus::Cancelled, .. })),
            "cancelled -> {} should be rejected",
            next
        );
    }

    system.shutdown().await.unwrap();
}

#[tokio::test]
async fn test_role_gating() {
    let system = seeded().await;
    let staff = Session::staff("Sam");
    let manager = Session::new("Max", Role::Other("manager".into()));

    let draft = ProductDraft {
        name: "Cap".into(),
        category: "Accessories".into(),
        price: 199.0,
        variations: vec![VariationDraft::new("One Size", "Black", 10)],
        ..Default::default()
    };
    let create = draft.validate(chrono::Utc::now()).unwrap();

    let err = system
        .product_client
        .create_product(&staff, create.clone())
        .await
        .unwrap_err();
    assert!(matches!(err, ProductError::Forbidden(AccessError::Forbidden { .. })));

    let err = system
        .order_client
        .apply_transition(&staff, OrderId::new("order-1"), OrderStatus::Processing)
        .await
        .unwrap_err();
    assert!(matches!(err, OrderError::Forbidden(_)));
    let untouched = system
        .order_client
        .fetch(OrderId::new("order-1"))
        .await
        .unwrap();
    assert_eq!(untouched.status, OrderStatus::Pending);

    // Any non-staff role may change status.
    let moved = system
        .order_client
        .apply_transition(&manager, OrderId::new("order-1"), OrderStatus::Cancelled)
        .await
        .unwrap();
    assert_eq!(moved.status, OrderStatus::Cancelled);

    let id = system
        .product_client
        .create_product(&admin(), create)
        .await
        .unwrap();
    let cap = system.product_client.fetch(id).await.unwrap();
    assert!(cap.sku.unwrap().starts_with("ACC-CAP-"));

    system.shutdown().await.unwrap();
}

#[tokio::test]
async fn test_order_creation_checks_stock_without_reserving() {
    let system = seeded().await;
    let staff = Session::staff("Sam");
    let tee = system
        .product_client
        .fetch(ProductId::new("1"))
        .await
        .unwrap();

    let mut draft = OrderDraft {
        customer_name: "Paolo Lim".into(),
        customer_email: "paolo@example.com".into(),
        customer_phone: "555-0199".into(),
        shipping_address: "3 Katipunan Ave".into(),
        ..Default::default()
    };
    draft.add_item(&tee, &tee.variations[1].id, 8).unwrap();
    let create = draft.validate().unwrap();

    let id = system
        .order_client
        .create_order(&staff, create.clone())
        .await
        .unwrap();
    let order = system.order_client.fetch(id).await.unwrap();
    assert_eq!(order.status, OrderStatus::Pending);
    assert_eq!(order.total_amount, 8.0 * 499.0);
    assert_eq!(order.items[0].variation, VariationRef::new("L", "White"));

    // No reservation: stock is what it was.
    let stock = system
        .product_client
        .check_stock(ProductId::new("1"), "L", "White")
        .await
        .unwrap();
    assert_eq!(stock, 8);

    // Bypass the form's own check to exercise the actor's.
    let mut too_many = create;
    too_many.items[0].quantity = 9;
    let err = system
        .order_client
        .create_order(&staff, too_many)
        .await
        .unwrap_err();
    assert!(matches!(
        err,
        OrderError::InsufficientStock {
            requested: 9,
            available: 8,
            ..
        }
    ));
    assert_eq!(system.order_client.list().await.unwrap().len(), 5);

    system.shutdown().await.unwrap();
}

#[tokio::test]
async fn test_order_for_unknown_product_is_rejected() {
    let system = seeded().await;
    let mut draft = OrderDraft {
        customer_name: "Paolo Lim".into(),
        customer_email: "paolo@example.com".into(),
        customer_phone: "555-0199".into(),
        shipping_address: "3 Katipunan Ave".into(),
        ..Default::default()
    };
    draft.items.push(OrderItemInput {
        product_id: ProductId::new("ghost"),
        product_name: "Ghost".into(),
        quantity: 1,
        price: 1.0,
        variation: VariationRef::new("M", "Black"),
    });

    let err = system
        .order_client
        .create_order(&admin(), draft.validate().unwrap())
        .await
        .unwrap_err();
    assert!(matches!(err, OrderError::InvalidProduct(_)));

    system.shutdown().await.unwrap();
}

#[tokio::test]
async fn test_variation_editor() {
    let system = seeded().await;
    let admin = admin();
    let id = ProductId::new("3");

    let err = system
        .product_client
        .add_variation(&admin, id.clone(), VariationInput::new("S", "Blue", 1))
        .await
        .unwrap_err();
    assert!(matches!(err, ProductError::DuplicateVariation { .. }));

    let new_id = system
        .product_client
        .add_variation(&admin, id.clone(), VariationInput::new("L", "Blue", 2))
        .await
        .unwrap();

    let previous = system
        .product_client
        .set_stock(&admin, id.clone(), new_id.clone(), 7)
        .await
        .unwrap();
    assert_eq!(previous, 2);
    assert_eq!(
        system
            .product_client
            .check_stock(id.clone(), "L", "Blue")
            .await
            .unwrap(),
        7
    );

    let jacket = system.product_client.fetch(id.clone()).await.unwrap();
    for variation in &jacket.variations[..jacket.variations.len() - 1] {
        system
            .product_client
            .remove_variation(&admin, id.clone(), variation.id.clone())
            .await
            .unwrap();
    }
    let err = system
        .product_client
        .remove_variation(&admin, id.clone(), new_id)
        .await
        .unwrap_err();
    assert_eq!(err, ProductError::LastVariation);

    let err = system
        .product_client
        .update_product(
            &admin,
            id,
            ProductUpdate {
                variations: Some(vec![]),
                ..Default::default()
            },
        )
        .await
        .unwrap_err();
    assert!(matches!(err, ProductError::Validation(_)));

    system.shutdown().await.unwrap();
}

#[tokio::test]
async fn test_item_edits_keep_stored_total_until_recalculated() {
    let system = seeded().await;
    let admin = admin();
    let id = OrderId::new("order-2");
    let before = system.order_client.fetch(id.clone()).await.unwrap();
    assert_eq!(before.total_amount, 2497.0);

    let item_id = before.items[1].id.clone();
    let previous = system
        .order_client
        .update_item_quantity(&admin, id.clone(), item_id, 1)
        .await
        .unwrap();
    assert_eq!(previous, 2);

    let edited = system.order_client.fetch(id.clone()).await.unwrap();
    assert_eq!(edited.total_amount, 2497.0);
    assert_eq!(edited.computed_total(), 1898.0);

    let total = system
        .order_client
        .recalculate_total(&admin, id.clone())
        .await
        .unwrap();
    assert_eq!(total, 1898.0);

    let first = edited.items[0].id.clone();
    let second = edited.items[1].id.clone();
    system
        .order_client
        .remove_item(&admin, id.clone(), first)
        .await
        .unwrap();
    let err = system
        .order_client
        .remove_item(&admin, id, second)
        .await
        .unwrap_err();
    assert_eq!(err, OrderError::LastItem);

    system.shutdown().await.unwrap();
}

#[tokio::test]
async fn test_deleting_product_keeps_order_snapshot() {
    let system = seeded().await;
    let admin = admin();

    system
        .product_client
        .update_product(
            &admin,
            ProductId::new("1"),
            ProductUpdate {
                name: Some("Classic Tee v2".into()),
                price: Some(550.0),
                ..Default::default()
            },
        )
        .await
        .unwrap();
    system
        .product_client
        .delete_product(&admin, ProductId::new("1"))
        .await
        .unwrap();

    let order = system
        .order_client
        .fetch(OrderId::new("order-1"))
        .await
        .unwrap();
    assert_eq!(order.items[0].product_id, ProductId::new("1"));
    assert_eq!(order.items[0].product_name, "Classic Tee");
    assert_eq!(order.items[0].price, 499.0);

    let err = system
        .product_client
        .fetch(ProductId::new("1"))
        .await
        .unwrap_err();
    assert_eq!(err, ProductError::NotFound("1".into()));

    system.shutdown().await.unwrap();
}

#[tokio::test]
async fn test_growing_a_line_ignores_deleted_neighbours() {
    let system = seeded().await;
    let admin = admin();
    let id = OrderId::new("order-2");

    // order-2 holds a Zip Hoodie line (product 2) next to an Oversized Tee line (product 4).
    system
        .product_client
        .delete_product(&admin, ProductId::new("2"))
        .await
        .unwrap();

    let previous = system
        .order_client
        .update_item_quantity(&admin, id.clone(), OrderItemId::new("order-2-item-2"), 3)
        .await
        .unwrap();
    assert_eq!(previous, 2);

    let merged = system
        .order_client
        .add_item(&admin, id.clone(), line("4", "Oversized Tee", 599.0, "XL", "White", 1))
        .await
        .unwrap();
    assert_eq!(merged, OrderItemId::new("order-2-item-2"));

    let order = system.order_client.fetch(id.clone()).await.unwrap();
    assert_eq!(order.items[1].quantity, 4);

    // The line whose product is gone still cannot grow.
    let err = system
        .order_client
        .update_item_quantity(&admin, id, OrderItemId::new("order-2-item-1"), 2)
        .await
        .unwrap_err();
    assert_eq!(err, OrderError::InvalidProduct("2".into()));

    system.shutdown().await.unwrap();
}

#[tokio::test]
async fn test_replacing_items_recomputes_total() {
    let system = seeded().await;
    let id = OrderId::new("order-1");
    let before = system.order_client.fetch(id.clone()).await.unwrap();

    let updated = system
        .order_client
        .update_order(
            &Session::staff("Sam"),
            id.clone(),
            OrderUpdate {
                customer_name: Some("Maria S. Santos".into()),
                items: Some(vec![
                    line("1", "Classic Tee", 499.0, "M", "Black", 3),
                    line("4", "Oversized Tee", 599.0, "XL", "White", 1),
                ]),
                ..Default::default()
            },
        )
        .await
        .unwrap();
    assert_eq!(updated.customer_name, "Maria S. Santos");
    assert_eq!(updated.items.len(), 2);
    assert_eq!(updated.total_amount, 2096.0);
    assert_eq!(updated.status, OrderStatus::Pending);
    assert!(updated.updated_at > before.updated_at);

    // A replacement that exceeds stock is refused whole.
    let err = system
        .order_client
        .update_order(
            &admin(),
            id.clone(),
            OrderUpdate {
                customer_name: Some("Someone Else".into()),
                items: Some(vec![line("1", "Classic Tee", 499.0, "M", "Black", 16)]),
                ..Default::default()
            },
        )
        .await
        .unwrap_err();
    assert!(matches!(err, OrderError::InsufficientStock { requested: 16, available: 15, .. }));
    assert_eq!(system.order_client.fetch(id).await.unwrap(), updated);

    system.shutdown().await.unwrap();
}

#[tokio::test]
async fn test_add_item_merges_into_matching_line() {
    let system = seeded().await;
    let admin = admin();
    let id = OrderId::new("order-1");

    let item_id = system
        .order_client
        .add_item(&admin, id.clone(), line("1", "Classic Tee", 499.0, "M", "Black", 3))
        .await
        .unwrap();
    assert_eq!(item_id, OrderItemId::new("order-1-item-1"));

    let order = system.order_client.fetch(id.clone()).await.unwrap();
    assert_eq!(order.items.len(), 1);
    assert_eq!(order.items[0].quantity, 5);
    assert_eq!(order.total_amount, 998.0);

    let new_line = system
        .order_client
        .add_item(&admin, id.clone(), line("3", "Denim Jacket", 2499.0, "S", "Blue", 1))
        .await
        .unwrap();
    let order = system.order_client.fetch(id).await.unwrap();
    assert_eq!(order.items.len(), 2);
    assert_eq!(order.items[1].id, new_line);
    assert_eq!(order.computed_total(), 5.0 * 499.0 + 2499.0);

    system.shutdown().await.unwrap();
}

#[tokio::test]
async fn test_rejected_add_item_leaves_order_unchanged() {
    let system = seeded().await;
    let id = OrderId::new("order-1");
    let before = system.order_client.fetch(id.clone()).await.unwrap();

    // 2 already ordered + 14 more exceeds the 15 in stock.
    let err = system
        .order_client
        .add_item(&admin(), id.clone(), line("1", "Classic Tee", 499.0, "M", "Black", 14))
        .await
        .unwrap_err();
    assert_eq!(
        err,
        OrderError::InsufficientStock {
            product: "Classic Tee".into(),
            size: "M".into(),
            color: "Black".into(),
            requested: 16,
            available: 15,
        }
    );

    let after = system.order_client.fetch(id).await.unwrap();
    assert_eq!(
        serde_json::to_string(&after).unwrap(),
        serde_json::to_string(&before).unwrap()
    );

    system.shutdown().await.unwrap();
}

#[tokio::test]
async fn test_status_change_waits_for_configured_delay() {
    let config = AdminConfig::default().with_status_update_delay(Duration::from_millis(50));
    let system = AdminSystem::start(config).await.unwrap();

    let started = Instant::now();
    system
        .order_client
        .apply_transition(&admin(), OrderId::new("order-1"), OrderStatus::Processing)
        .await
        .unwrap();
    assert!(started.elapsed() >= Duration::from_millis(50));

    system.shutdown().await.unwrap();
}

#[tokio::test]
async fn test_filters_and_dashboard_over_fixtures() {
    let system = seeded().await;

    let all = system
        .product_client
        .filter_products(&ProductFilter::default())
        .await
        .unwrap();
    assert_eq!(all.len(), 4);

    let tees = system
        .product_client
        .filter_products(&ProductFilter {
            category: Selection::Only("T-Shirts".into()),
            color: Selection::Only("White".into()),
            ..Default::default()
        })
        .await
        .unwrap();
    let names: Vec<_> = tees.iter().map(|p| p.name.as_str()).collect();
    assert_eq!(names, vec!["Classic Tee", "Oversized Tee"]);

    assert_eq!(
        system.product_client.categories().await.unwrap(),
        vec!["T-Shirts", "Hoodies", "Jackets"]
    );

    let completed = system
        .order_client
        .filter_orders(&OrderFilter {
            search: "ana".into(),
            status: Selection::Only(OrderStatus::Completed),
        })
        .await
        .unwrap();
    assert_eq!(completed.len(), 1);
    assert_eq!(completed[0].id, OrderId::new("order-3"));

    let inventory = system.inventory_stats().await.unwrap();
    assert_eq!(inventory.product_count, 4);
    assert_eq!(inventory.total_stock, 68);
    assert_eq!(inventory.low_stock_variations, 2);
    assert_eq!(inventory.out_of_stock_variations, 1);

    let orders = system.order_stats().await.unwrap();
    assert_eq!(orders.order_count, 4);
    assert_eq!(orders.count(OrderStatus::Pending), 1);
    assert_eq!(orders.revenue, 2499.0);

    let recent = system.recent_orders(2).await.unwrap();
    let ids: Vec<_> = recent.iter().map(|o| o.id.as_str()).collect();
    assert_eq!(ids, vec!["order-2", "order-1"]);

    system.shutdown().await.unwrap();
}

#[tokio::test]
async fn test_unseeded_system_starts_empty() {
    let system = AdminSystem::start(fast_config().with_seed_fixtures(false))
        .await
        .unwrap();
    assert!(system.product_client.list().await.unwrap().is_empty());
    assert!(system.order_client.list().await.unwrap().is_empty());
    system.shutdown().await.unwrap();
}
