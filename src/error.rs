//! Error types for order intake and brewing

use thiserror::Error;

use crate::model::Resource;

/// Terminal failure of a single order's cook path
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BrewError {
    /// The order did not name a coffee type
    #[error("order has no coffee type")]
    Validation,

    /// The order named a coffee type that has no recipe
    #[error("we don't brew {0}")]
    UnsupportedRecipe(String),

    /// A reservation asked for more than the store holds
    #[error("not enough {resource}: requested {requested}, available {available}")]
    InsufficientResource {
        resource: Resource,
        requested: u32,
        available: u32,
    },
}

/// Refusal to admit an order into the queue
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SubmitError {
    #[error("barista is shutting down, order not accepted")]
    ShuttingDown,
}
