//! Mock recipe catalogue
//!
//! Seed data for the dashboard. Ids are fixed so a session is reproducible.

use recipehub_shared::{seeded_id, EntityId};

use super::recipe::{Ingredient, Recipe, Step};

fn ingredient(id: u128, name: &str, amount: f64, unit: &str) -> Ingredient {
    Ingredient {
        id: seeded_id(id),
        name: name.to_string(),
        amount,
        unit: unit.to_string(),
    }
}

fn step(id: u128, instruction: &str, timer_minutes: Option<u32>) -> Step {
    Step {
        id: seeded_id(id),
        instruction: instruction.to_string(),
        timer_minutes,
    }
}

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

pub const COOKIES_ID: EntityId = seeded_id(1);
pub const STIR_FRY_ID: EntityId = seeded_id(2);
pub const SOURDOUGH_ID: EntityId = seeded_id(3);

pub fn mock_recipes() -> Vec<Recipe> {
    vec![
        Recipe {
            id: COOKIES_ID,
            title: "Grandma's Chocolate Chip Cookies".into(),
            description: "The perfect chewy chocolate chip cookies with a secret ingredient that makes them irresistible.".into(),
            servings: 24,
            tags: strings(&["Dessert", "Baking", "Family"]),
            ingredients: vec![
                ingredient(101, "all-purpose flour", 2.25, "cups"),
                ingredient(102, "baking soda", 1.0, "tsp"),
                ingredient(103, "salt", 1.0, "tsp"),
                ingredient(104, "butter, softened", 1.0, "cups"),
                ingredient(105, "granulated sugar", 0.75, "cups"),
                ingredient(106, "brown sugar, packed", 0.75, "cups"),
                ingredient(107, "eggs", 2.0, "pieces"),
                ingredient(108, "semi-sweet chocolate chips", 2.0, "cups"),
                ingredient(109, "white miso paste", 1.0, "tbsp"),
            ],
            steps: vec![
                step(151, "Preheat the oven to 375°F and line two baking sheets.", Some(10)),
                step(152, "Cream the butter, both sugars and the miso until pale and fluffy.", None),
                step(153, "Beat in the eggs one at a time.", None),
                step(154, "Whisk flour, baking soda and salt, then fold into the butter mixture with the chocolate chips.", None),
                step(155, "Scoop rounded tablespoons onto the sheets and bake until the edges are golden.", Some(11)),
                step(156, "Cool on the sheet before moving to a rack.", Some(5)),
            ],
            author: "Alice Johnson".into(),
            collaborators: strings(&["sarah@email.com", "mike@email.com"]),
            last_modified: "2 hours ago".into(),
            cook_time: 45,
            rating: 4.8,
            is_public: true,
        },
        Recipe {
            id: STIR_FRY_ID,
            title: "Spicy Thai Basil Stir Fry".into(),
            description: "Authentic Thai flavors with fresh basil, chilies, and your choice of protein.".into(),
            servings: 4,
            tags: strings(&["Thai", "Spicy", "Quick"]),
            ingredients: vec![
                ingredient(201, "chicken thigh, minced", 1.0, "lbs"),
                ingredient(202, "Thai holy basil leaves", 2.0, "cups"),
                ingredient(203, "bird's eye chilies", 6.0, "pieces"),
                ingredient(204, "garlic cloves", 5.0, "pieces"),
                ingredient(205, "oyster sauce", 2.0, "tbsp"),
                ingredient(206, "fish sauce", 1.0, "tbsp"),
                ingredient(207, "palm sugar", 1.0, "tsp"),
            ],
            steps: vec![
                step(251, "Pound the garlic and chilies into a coarse paste.", None),
                step(252, "Fry the paste in a hot wok until fragrant.", Some(1)),
                step(253, "Add the chicken and stir fry until cooked through.", Some(4)),
                step(254, "Season with oyster sauce, fish sauce and palm sugar.", None),
                step(255, "Toss in the basil off the heat and serve over rice.", None),
            ],
            author: "Chen Wei".into(),
            collaborators: strings(&["tom@email.com"]),
            last_modified: "1 day ago".into(),
            cook_time: 25,
            rating: 4.6,
            is_public: false,
        },
        Recipe {
            id: SOURDOUGH_ID,
            title: "Rustic Sourdough Bread".into(),
            description: "A collaborative effort to perfect the art of sourdough with detailed fermentation notes.".into(),
            servings: 8,
            tags: strings(&["Bread", "Fermentation", "Advanced"]),
            ingredients: vec![
                ingredient(301, "bread flour", 500.0, "g"),
                ingredient(302, "water", 375.0, "ml"),
                ingredient(303, "active sourdough starter", 100.0, "g"),
                ingredient(304, "salt", 10.0, "g"),
            ],
            steps: vec![
                step(351, "Mix flour and water and leave to autolyse.", Some(60)),
                step(352, "Add starter and salt, squeezing until fully incorporated.", None),
                step(353, "Bulk ferment with a set of stretch and folds every half hour.", Some(240)),
                step(354, "Shape, place in a banneton and retard in the fridge overnight.", None),
                step(355, "Bake in a preheated Dutch oven, lid on then lid off.", Some(45)),
            ],
            author: "David Miller".into(),
            collaborators: strings(&["baker1@email.com", "baker2@email.com", "baker3@email.com"]),
            last_modified: "3 days ago".into(),
            cook_time: 720,
            rating: 4.9,
            is_public: true,
        },
    ]
}
