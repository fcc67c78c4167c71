//! Recipes: which ingredients each drink takes and how long each step lasts

use std::time::Duration;

use rand::Rng;

use crate::model::{CoffeeType, Resource};

/// Grams of ground coffee in one espresso shot
pub const ESPRESSO_COFFEE_G: u32 = 8;
/// Millilitres of milk in a latte
pub const LATTE_MILK_ML: u32 = 350;
/// Millilitres of milk in a cappuccino
pub const CAPPUCCINO_MILK_ML: u32 = 200;

/// Inclusive processing-time window for a step, in milliseconds
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DelayRange {
    pub min_ms: u64,
    pub max_ms: u64,
}

impl DelayRange {
    pub const fn new(min_ms: u64, max_ms: u64) -> Self {
        Self { min_ms, max_ms }
    }
}

/// Where an order is in its cook path
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CookStage {
    Received,
    Validating,
    BrewingEspresso,
    MixingMilk,
    Completed,
    Failed,
}

/// One reservation followed by a simulated wait
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RecipeStep {
    pub name: &'static str,
    pub resource: Resource,
    pub amount: u32,
    pub delay: DelayRange,
}

impl RecipeStep {
    /// Stage an order is in while this step runs
    pub fn stage(&self) -> CookStage {
        match self.resource {
            Resource::Coffee => CookStage::BrewingEspresso,
            Resource::Milk => CookStage::MixingMilk,
        }
    }
}

const EXTRACTION: DelayRange = DelayRange::new(5000, 8000);
const MIXING: DelayRange = DelayRange::new(1000, 2000);

const ESPRESSO_SHOT: RecipeStep = RecipeStep {
    name: "brew_espresso",
    resource: Resource::Coffee,
    amount: ESPRESSO_COFFEE_G,
    delay: EXTRACTION,
};

const fn pour_milk(amount: u32) -> RecipeStep {
    RecipeStep {
        name: "pour_milk",
        resource: Resource::Milk,
        amount,
        delay: MIXING,
    }
}

const ESPRESSO: [RecipeStep; 1] = [ESPRESSO_SHOT];
const LATTE: [RecipeStep; 2] = [ESPRESSO_SHOT, pour_milk(LATTE_MILK_ML)];
const CAPPUCCINO: [RecipeStep; 2] = [ESPRESSO_SHOT, pour_milk(CAPPUCCINO_MILK_ML)];

/// Ordered steps for a drink
///
/// Milk drinks start with the espresso shot, so their coffee is already spent
/// if the milk reservation later fails.
pub fn steps_for(coffee: CoffeeType) -> &'static [RecipeStep] {
    match coffee {
        CoffeeType::Espresso => &ESPRESSO,
        CoffeeType::Latte => &LATTE,
        CoffeeType::Cappuccino => &CAPPUCCINO,
    }
}

/// Slowest simulation speed accepted
pub const MIN_SPEED: f64 = 1e-3;
/// Upper bound on a single step's wait
pub const MAX_STEP_WAIT: Duration = Duration::from_secs(24 * 60 * 60);

/// Simulation speed: sampled delays are divided by this factor
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Pace {
    speed: f64,
}

impl Pace {
    /// `None` unless `speed` is finite and at least [`MIN_SPEED`]
    pub fn new(speed: f64) -> Option<Self> {
        (speed.is_finite() && speed >= MIN_SPEED).then_some(Self { speed })
    }

    pub fn speed(&self) -> f64 {
        self.speed
    }

    /// Draw a duration uniformly from `range`, scaled by the speed factor
    ///
    /// Never longer than [`MAX_STEP_WAIT`].
    pub fn sample(&self, range: DelayRange) -> Duration {
        let (lo, hi) = (range.min_ms.min(range.max_ms), range.min_ms.max(range.max_ms));
        let ms = rand::thread_rng().gen_range(lo..=hi);
        Duration::try_from_secs_f64(ms as f64 / 1000.0 / self.speed)
            .map_or(MAX_STEP_WAIT, |wait| wait.min(MAX_STEP_WAIT))
    }
}

impl Default for Pace {
    fn default() -> Self {
        Self { speed: 1.0 }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn milk_drinks_begin_with_an_espresso_shot() {
        for coffee in [CoffeeType::Latte, CoffeeType::Cappuccino] {
            let steps = steps_for(coffee);
            assert_eq!(steps.len(), 2);
            assert_eq!(steps[0], ESPRESSO_SHOT);
            assert_eq!(steps[1].resource, Resource::Milk);
            assert_eq!(steps[1].stage(), CookStage::MixingMilk);
        }
        assert_eq!(steps_for(CoffeeType::Latte)[1].amount, 350);
        assert_eq!(steps_for(CoffeeType::Cappuccino)[1].amount, 200);
    }

    #[test]
    fn espresso_is_a_single_coffee_step() {
        let steps = steps_for(CoffeeType::Espresso);
        assert_eq!(steps.len(), 1);
        assert_eq!(steps[0].resource, Resource::Coffee);
        assert_eq!(steps[0].amount, 8);
        assert_eq!(steps[0].stage(), CookStage::BrewingEspresso);
    }

    #[test]
    fn pace_rejects_non_positive_speeds() {
        assert!(Pace::new(0.0).is_none());
        assert!(Pace::new(-2.0).is_none());
        assert!(Pace::new(f64::NAN).is_none());
        assert!(Pace::new(f64::INFINITY).is_none());
        assert_eq!(Pace::new(2.0).map(|p| p.speed()), Some(2.0));
    }

    #[test]
    fn pace_has_a_lower_speed_bound() {
        assert!(Pace::new(1e-20).is_none());
        assert!(Pace::new(MIN_SPEED / 2.0).is_none());
        assert_eq!(Pace::new(MIN_SPEED).map(|p| p.speed()), Some(MIN_SPEED));
    }

    #[test]
    fn slowest_pace_samples_without_overflow() {
        let pace = Pace::new(MIN_SPEED).unwrap();

        let d = pace.sample(EXTRACTION);
        assert!(d >= Duration::from_secs(4_999), "{:?}", d);
        assert!(d <= Duration::from_secs(8_001), "{:?}", d);

        // anything past the cap is clamped, including values Duration cannot hold
        let huge = DelayRange::new(u64::MAX, u64::MAX);
        assert_eq!(pace.sample(huge), MAX_STEP_WAIT);
    }

    #[test]
    fn samples_stay_within_the_scaled_window() {
        let pace = Pace::new(10.0).unwrap();
        for _ in 0..100 {
            let d = pace.sample(EXTRACTION);
            assert!(d >= Duration::from_millis(500), "{:?}", d);
            assert!(d <= Duration::from_millis(800), "{:?}", d);
        }
        assert_eq!(
            Pace::default().sample(DelayRange::new(500, 500)),
            Duration::from_millis(500)
        );
    }
}
