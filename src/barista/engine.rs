//! The cook path: validate an order, then run its recipe against the inventory

use std::sync::Arc;

use tokio::time::sleep;
use tracing::debug;

use crate::{
    error::BrewError,
    model::{CoffeeType, Order},
    state::InventoryStore,
    utils::telemetry::{step_span, traced},
};

use super::recipe::{steps_for, CookStage, Pace, RecipeStep};

/// Turns orders into drinks by drawing on the shared inventory
#[derive(Debug, Clone)]
pub struct Barista {
    inventory: Arc<InventoryStore>,
    pace: Pace,
}

impl Barista {
    pub fn new(inventory: Arc<InventoryStore>, pace: Pace) -> Self {
        Self { inventory, pace }
    }

    #[cfg(test)]
    pub(crate) fn inventory(&self) -> &Arc<InventoryStore> {
        &self.inventory
    }

    /// Brew one order end to end
    ///
    /// Steps run strictly in sequence. A failed reservation ends the order
    /// without refunding what earlier steps already took.
    pub async fn cook(&self, order: &Order) -> Result<CoffeeType, BrewError> {
        debug!(stage = ?CookStage::Received, ?order, "Cook started");

        let result = self.run_recipe(order).await;
        match &result {
            Ok(coffee) => debug!(stage = ?CookStage::Completed, %coffee),
            Err(e) => debug!(stage = ?CookStage::Failed, error = %e),
        }
        result
    }

    async fn run_recipe(&self, order: &Order) -> Result<CoffeeType, BrewError> {
        let coffee = traced(step_span("validate"), async {
            debug!(stage = ?CookStage::Validating);
            order.coffee_type()
        })
        .await?;

        for step in steps_for(coffee) {
            traced(step_span(step.name), self.run_step(step)).await?;
        }

        Ok(coffee)
    }

    async fn run_step(&self, step: &RecipeStep) -> Result<(), BrewError> {
        debug!(stage = ?step.stage(), resource = %step.resource, amount = step.amount);

        traced(step_span("reserve"), async {
            self.inventory.reserve(step.resource, step.amount)
        })
        .await?;

        let wait = self.pace.sample(step.delay);
        debug!(?wait, "{} in progress", step.name);
        sleep(wait).await;
        Ok(())
    }
}
