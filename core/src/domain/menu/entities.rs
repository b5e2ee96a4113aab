use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// One row of the normalized menu dataset.
///
/// Load-time validation guarantees a non-empty `dish_name` and a parseable
/// `price`; `is_vegetarian` is tri-state, `None` meaning the source data did
/// not say either way.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct Dish {
    pub dish_id: String,
    pub dish_name: String,
    pub price: f64,
    pub description: String,
    pub spice_level: String,
    pub is_vegetarian: Option<bool>,
    pub cuisine_origin: String,
    pub dish_type: String,
}
