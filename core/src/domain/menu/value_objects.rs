use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::menu::entities::Dish;

/// Structured preferences extracted from one user turn.
///
/// All fields are free-text as emitted by the LLM; unknown keys in the
/// payload are dropped during deserialization. A field that is `None` or an
/// empty string imposes no constraint on the filter.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct DishPreferences {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub spice_level: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_vegetarian: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cuisine_origin: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dish_type: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dish_name: Option<String>,
}

impl DishPreferences {
    pub fn is_empty(&self) -> bool {
        self.spice_level.is_none()
            && self.is_vegetarian.is_none()
            && self.cuisine_origin.is_none()
            && self.dish_type.is_none()
            && self.dish_name.is_none()
    }
}

/// Client-facing projection of a [`Dish`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct Recommendation {
    pub dish_id: String,
    pub dish_name: String,
    pub price: f64,
    pub description: String,
}

impl From<&Dish> for Recommendation {
    fn from(dish: &Dish) -> Self {
        Self {
            dish_id: dish.dish_id.clone(),
            dish_name: dish.dish_name.clone(),
            price: dish.price,
            description: dish.description.clone(),
        }
    }
}
