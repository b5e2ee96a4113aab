use std::cmp::Ordering;

use crate::domain::menu::{entities::Dish, value_objects::DishPreferences};

/// Applies `preferences` conjunctively over `dishes` and returns the
/// survivors sorted ascending by price. The sort is stable, so dishes with
/// equal prices keep their dataset order. Never fails: malformed or
/// unrecognized preference values simply match nothing.
pub fn filter_dishes<'a>(preferences: &DishPreferences, dishes: &'a [Dish]) -> Vec<&'a Dish> {
    let mut matches: Vec<&Dish> = dishes
        .iter()
        .filter(|dish| matches_preferences(preferences, dish))
        .collect();

    matches.sort_by(|a, b| a.price.partial_cmp(&b.price).unwrap_or(Ordering::Equal));
    matches
}

/// A preference field constrains only when present and non-empty.
fn constraint(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|v| !v.is_empty())
}

fn eq_ignore_case(a: &str, b: &str) -> bool {
    a.to_lowercase() == b.to_lowercase()
}

fn matches_preferences(preferences: &DishPreferences, dish: &Dish) -> bool {
    if let Some(level) = constraint(&preferences.spice_level) {
        if !eq_ignore_case(&dish.spice_level, level) {
            return false;
        }
    }

    if let Some(vegetarian) = constraint(&preferences.is_vegetarian) {
        // "yes" means vegetarian, any other value means non-vegetarian.
        // Dishes with unknown vegetarian status never match either way.
        let wanted = vegetarian.to_lowercase() == "yes";
        if dish.is_vegetarian != Some(wanted) {
            return false;
        }
    }

    if let Some(cuisine) = constraint(&preferences.cuisine_origin) {
        if !eq_ignore_case(&dish.cuisine_origin, cuisine) {
            return false;
        }
    }

    if let Some(dish_type) = constraint(&preferences.dish_type) {
        if !eq_ignore_case(&dish.dish_type, dish_type) {
            return false;
        }
    }

    if let Some(name) = constraint(&preferences.dish_name) {
        if !dish.dish_name.to_lowercase().contains(&name.to_lowercase()) {
            return false;
        }
    }

    true
}
