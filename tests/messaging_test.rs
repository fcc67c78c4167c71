use std::time::Duration;

use tokio::{sync::mpsc, time::timeout};
use tokio_util::sync::CancellationToken;

use coffeeshop_barista::{
    barista::Pace,
    shop::{CoffeeShop, ShopSettings},
    tasks::ShutdownCoordinator,
    transport::{Message, OrderSubscriber, DEFAULT_TOPIC},
};

fn open_shop(shutdown: &CancellationToken) -> (CoffeeShop, ShutdownCoordinator) {
    let settings = ShopSettings {
        workers: 2,
        milk_ml: 1000,
        coffee_g: 200,
        pace: Pace::new(100_000.0).unwrap(),
    };
    CoffeeShop::open(settings, shutdown.clone())
}

#[tokio::test]
async fn subscriber_submits_orders_from_its_topic_only() {
    let shutdown = CancellationToken::new();
    let (shop, coordinator) = open_shop(&shutdown);
    let (tx, rx) = mpsc::channel(8);

    let subscriber = OrderSubscriber::new(DEFAULT_TOPIC, shop.intake.clone(), shutdown.clone());
    let handle = tokio::spawn(subscriber.run(rx));

    tx.send(
        Message::new(DEFAULT_TOPIC, r#"{"type":"Cappuccino"}"#)
            .with_header("traceparent", "00-4bf92f3577b34da6a3ce929d0e0e4736-00f067aa0ba902b7-01"),
    )
    .await
    .unwrap();
    tx.send(Message::new("refund", r#"{"type":"Latte"}"#)).await.unwrap();
    tx.send(Message::new(DEFAULT_TOPIC, "not json")).await.unwrap();
    tx.send(Message::new(DEFAULT_TOPIC, r#"{"type":"Espresso"}"#)).await.unwrap();
    drop(tx);

    timeout(Duration::from_secs(5), handle).await.unwrap().unwrap();

    shutdown.cancel();
    timeout(Duration::from_secs(5), coordinator.run()).await.unwrap();

    let stats = shop.stats.snapshot();
    assert_eq!(stats.submitted, 2);
    assert_eq!(stats.completed, 2);
    let levels = shop.inventory.snapshot();
    assert_eq!(levels.milk_ml, 800);
    assert_eq!(levels.coffee_g, 184);
}

#[tokio::test]
async fn subscriber_stops_on_shutdown() {
    let shutdown = CancellationToken::new();
    let (shop, coordinator) = open_shop(&shutdown);
    let (_tx, rx) = mpsc::channel::<Message>(8);

    let subscriber = OrderSubscriber::new(DEFAULT_TOPIC, shop.intake.clone(), shutdown.clone());
    let handle = tokio::spawn(subscriber.run(rx));

    shutdown.cancel();

    timeout(Duration::from_secs(1), handle).await.unwrap().unwrap();
    timeout(Duration::from_secs(1), coordinator.run()).await.unwrap();
    assert_eq!(shop.stats.snapshot().submitted, 0);
}
