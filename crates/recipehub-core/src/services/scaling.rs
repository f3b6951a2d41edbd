//! Serving-size scaling
//!
//! Derived display data only; the recipe itself is never touched.

use recipehub_shared::EntityId;

use crate::domain::Recipe;

#[derive(Debug, Clone, PartialEq)]
pub struct ScaledIngredient {
    pub id: EntityId,
    pub name: String,
    pub unit: String,
    pub amount: f64,
}

impl ScaledIngredient {
    pub fn amount_label(&self) -> String {
        format_amount(self.amount)
    }
}

/// `amount * target / base`. A zero base is treated as one serving.
pub fn scale_amount(amount: f64, base_servings: u32, target_servings: u32) -> f64 {
    amount * f64::from(target_servings) / f64::from(base_servings.max(1))
}

pub fn scale_ingredients(recipe: &Recipe, target_servings: u32) -> Vec<ScaledIngredient> {
    recipe
        .ingredients
        .iter()
        .map(|ing| ScaledIngredient {
            id: ing.id,
            name: ing.name.clone(),
            unit: ing.unit.clone(),
            amount: scale_amount(ing.amount, recipe.servings, target_servings),
        })
        .collect()
}

/// Whole numbers without decimals, anything else to one decimal place.
pub fn format_amount(amount: f64) -> String {
    if amount.fract() == 0.0 {
        format!("{}", amount as i64)
    } else {
        format!("{:.1}", amount)
    }
}
