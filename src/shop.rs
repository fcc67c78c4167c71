//! Wiring of intake, inventory, worker pool and shutdown into one engine

use std::sync::Arc;

use tokio_util::sync::CancellationToken;
use tracing::info;

use crate::{
    barista::{Barista, Pace},
    queue::{handoff, OrderIntake},
    state::{InventoryStore, OrderStats},
    tasks::{ShutdownCoordinator, WorkerPool},
};

/// Engine sizing and simulation knobs
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ShopSettings {
    pub workers: usize,
    pub milk_ml: u32,
    pub coffee_g: u32,
    pub pace: Pace,
}

impl Default for ShopSettings {
    fn default() -> Self {
        Self {
            workers: 4,
            milk_ml: 10_000,
            coffee_g: 5_000,
            pace: Pace::default(),
        }
    }
}

/// Handles transports and status reporting need on a running engine
#[derive(Debug, Clone)]
pub struct CoffeeShop {
    pub intake: OrderIntake,
    pub inventory: Arc<InventoryStore>,
    pub stats: Arc<OrderStats>,
    pub workers: usize,
}

impl CoffeeShop {
    /// Start the worker pool
    ///
    /// Must be called inside a Tokio runtime. The returned coordinator has to
    /// be run for the pool to be shut down and joined when `shutdown` fires.
    pub fn open(settings: ShopSettings, shutdown: CancellationToken) -> (Self, ShutdownCoordinator) {
        let inventory = Arc::new(InventoryStore::new(settings.milk_ml, settings.coffee_g));
        let stats = Arc::new(OrderStats::new());

        let (intake, jobs) = handoff(shutdown.clone(), Arc::clone(&stats));
        let barista = Barista::new(Arc::clone(&inventory), settings.pace);
        let pool = WorkerPool::spawn(settings.workers, jobs, barista, Arc::clone(&stats));

        info!(
            "Coffee shop open: {} workers, {}ml milk, {}g coffee, speed x{}",
            settings.workers,
            settings.milk_ml,
            settings.coffee_g,
            settings.pace.speed()
        );

        let coordinator = ShutdownCoordinator::new(shutdown, intake.clone(), pool);
        let shop = Self {
            intake,
            inventory,
            stats,
            workers: settings.workers,
        };
        (shop, coordinator)
    }
}
