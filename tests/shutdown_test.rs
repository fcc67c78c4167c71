use std::time::Duration;

use tokio::time::timeout;
use tokio_util::sync::CancellationToken;

use coffeeshop_barista::{
    barista::Pace,
    shop::{CoffeeShop, ShopSettings},
    state::InventoryLevels,
    Order, SubmitError, TraceContext,
};

fn settings(workers: usize, speed: f64) -> ShopSettings {
    ShopSettings {
        workers,
        milk_ml: 1000,
        coffee_g: 200,
        pace: Pace::new(speed).unwrap(),
    }
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn every_admitted_order_finishes_before_the_pool_exits() {
    let shutdown = CancellationToken::new();
    // espresso takes 5-8ms at this speed
    let (shop, coordinator) = CoffeeShop::open(settings(2, 1000.0), shutdown.clone());
    let pool = tokio::spawn(coordinator.run());

    for _ in 0..5 {
        shop.intake
            .submit(Order::new("Espresso"), TraceContext::new())
            .await
            .unwrap();
    }
    shutdown.cancel();

    timeout(Duration::from_secs(5), pool)
        .await
        .expect("pool should terminate")
        .unwrap();

    let stats = shop.stats.snapshot();
    assert_eq!(stats.submitted, 5);
    assert_eq!(stats.completed, 5);
    assert_eq!(stats.in_flight(), 0);
    assert_eq!(shop.inventory.snapshot().coffee_g, 200 - 5 * 8);

    assert_eq!(
        shop.intake
            .submit(Order::new("Espresso"), TraceContext::new())
            .await,
        Err(SubmitError::ShuttingDown)
    );
    assert_eq!(shop.stats.snapshot().submitted, 5);
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn failures_do_not_stop_later_orders() {
    let shutdown = CancellationToken::new();
    let (shop, coordinator) = CoffeeShop::open(settings(1, 100_000.0), shutdown.clone());
    let pool = tokio::spawn(coordinator.run());

    for coffee in ["", "Mocha", "Latte", "Latte", "Latte", "Espresso"] {
        shop.intake
            .submit(Order::new(coffee), TraceContext::new())
            .await
            .unwrap();
    }
    shutdown.cancel();
    timeout(Duration::from_secs(5), pool).await.unwrap().unwrap();

    let stats = shop.stats.snapshot();
    // empty, unknown and the third latte (milk short) fail
    assert_eq!(stats.failed, 3);
    assert_eq!(stats.completed, 3);
    // the failed latte still used its coffee
    assert_eq!(
        shop.inventory.snapshot(),
        InventoryLevels { milk_ml: 300, coffee_g: 200 - 4 * 8 }
    );
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn idle_pool_exits_promptly_on_shutdown() {
    let shutdown = CancellationToken::new();
    let (shop, coordinator) = CoffeeShop::open(settings(4, 1.0), shutdown.clone());
    let pool = tokio::spawn(coordinator.run());

    tokio::time::sleep(Duration::from_millis(20)).await;
    assert!(!pool.is_finished());
    assert!(shop.intake.is_accepting());

    shutdown.cancel();
    timeout(Duration::from_secs(1), pool).await.unwrap().unwrap();
    assert!(!shop.intake.is_accepting());
}
