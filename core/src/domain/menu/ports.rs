use crate::domain::{common::entities::app_errors::CoreError, menu::entities::Dish};

/// Read-only access to the normalized menu dataset.
#[cfg_attr(test, mockall::automock)]
pub trait MenuCatalog: Send + Sync {
    /// Snapshot of every valid dish, in dataset order.
    fn dishes(&self) -> Vec<Dish>;
}

/// Service trait for menu diagnostics.
pub trait MenuService: Send + Sync {
    /// Returns the first `count` dishes of the catalog, or
    /// [`CoreError::MenuUnavailable`] when the dataset failed to load.
    fn sample(&self, count: usize) -> Result<Vec<Dish>, CoreError>;
}
