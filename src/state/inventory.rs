//! Shared ingredient inventory

use std::sync::{Mutex, MutexGuard, PoisonError};

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::{error::BrewError, model::Resource};

/// Point-in-time ingredient levels
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct InventoryLevels {
    pub milk_ml: u32,
    pub coffee_g: u32,
}

impl InventoryLevels {
    /// Current level of a single resource
    pub fn get(&self, resource: Resource) -> u32 {
        match resource {
            Resource::Milk => self.milk_ml,
            Resource::Coffee => self.coffee_g,
        }
    }

    fn slot_mut(&mut self, resource: Resource) -> &mut u32 {
        match resource {
            Resource::Milk => &mut self.milk_ml,
            Resource::Coffee => &mut self.coffee_g,
        }
    }
}

/// Mutex-guarded ingredient counters shared by all workers
///
/// A single lock guards both counters. `reserve` is the only mutator: the
/// availability check and the decrement happen under one hold of the lock, so
/// concurrent workers can never draw a counter below zero.
#[derive(Debug)]
pub struct InventoryStore {
    levels: Mutex<InventoryLevels>,
}

impl InventoryStore {
    /// Create a store with the given starting capacities
    pub fn new(milk_ml: u32, coffee_g: u32) -> Self {
        Self {
            levels: Mutex::new(InventoryLevels { milk_ml, coffee_g }),
        }
    }

    /// Take `amount` of `resource`, or reject without touching the store
    pub fn reserve(&self, resource: Resource, amount: u32) -> Result<(), BrewError> {
        let mut levels = self.lock();
        let slot = levels.slot_mut(resource);

        if *slot < amount {
            return Err(BrewError::InsufficientResource {
                resource,
                requested: amount,
                available: *slot,
            });
        }

        *slot -= amount;
        debug!(%resource, amount, remaining = *slot, "Reserved {}{}", amount, resource.unit());
        Ok(())
    }

    /// Copy of the current levels
    pub fn snapshot(&self) -> InventoryLevels {
        *self.lock()
    }

    // Nothing panics while the guard is held, so a poisoned lock still holds
    // consistent counters.
    fn lock(&self) -> MutexGuard<'_, InventoryLevels> {
        self.levels.lock().unwrap_or_else(PoisonError::into_inner)
    }
}
