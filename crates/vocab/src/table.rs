//! Static synonym tables, one per category.
//!
//! Each row links the terms users actually type to the fragment that
//! identifies the concept inside a stored value, plus the canonical
//! identifier the term normalizes to. The vocabulary is fixed at build time;
//! this is deliberately not a runtime-extensible ontology.

use std::collections::HashMap;

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

/// Scope for synonym resolution. A term like "buffet" canonicalizes
/// differently as a cuisine than as a dining style.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Category {
    Cuisine,
    DiningType,
    RunnerClass,
}

/// One synonym rule: any of `terms` (already lowercase) identifies the
/// concept whose stored representation contains `fragment`.
#[derive(Debug, Clone, Copy)]
pub struct SynonymRow {
    pub terms: &'static [&'static str],
    pub fragment: &'static str,
    pub canonical: &'static str,
}

const CUISINE_ROWS: &[SynonymRow] = &[
    SynonymRow { terms: &["japanese"], fragment: "japanese", canonical: "japanese_type" },
    SynonymRow { terms: &["japanese"], fragment: "ramen", canonical: "japanese_type" },
    SynonymRow { terms: &["japanese"], fragment: "sushi", canonical: "japanese_type" },
    SynonymRow { terms: &["ramen"], fragment: "japanese", canonical: "ramen_type" },
    SynonymRow { terms: &["sushi"], fragment: "japanese", canonical: "sushi_type" },
    SynonymRow { terms: &["thai"], fragment: "thai", canonical: "thai_type" },
    SynonymRow { terms: &["fast food", "fastfood"], fragment: "fast", canonical: "fast_food_type" },
    SynonymRow { terms: &["grilled pork", "grilledpork"], fragment: "grilled", canonical: "grilled_pork_type" },
    SynonymRow { terms: &["noodles"], fragment: "noodle", canonical: "noodles_type" },
    SynonymRow { terms: &["burger"], fragment: "burger", canonical: "burger_type" },
    SynonymRow { terms: &["steak"], fragment: "steak", canonical: "steak_type" },
    SynonymRow { terms: &["bubble milk tea", "bubblemilktea"], fragment: "bubble", canonical: "bubble_milk_tea_type" },
    SynonymRow { terms: &["breakfast"], fragment: "breakfast", canonical: "breakfast_type" },
    SynonymRow { terms: &["shabu sukiyaki", "shabusukiyaki"], fragment: "shabu", canonical: "shabu_sukiyaki_type" },
    SynonymRow { terms: &["a la carte", "alacarte"], fragment: "carte", canonical: "a_la_carte_type" },
    SynonymRow { terms: &["vegetarian jay", "vegetarianjay"], fragment: "vegetarian", canonical: "vegetarian_jay_type" },
    SynonymRow { terms: &["vegetarian food", "vegetarianfood"], fragment: "vegetarian", canonical: "vegetarian_food_type" },
    SynonymRow { terms: &["buffet"], fragment: "buffet", canonical: "buffet_type" },
    SynonymRow { terms: &["omakase"], fragment: "omakase", canonical: "omakase_type" },
    SynonymRow { terms: &["pizza"], fragment: "pizza", canonical: "pizza_type" },
    SynonymRow { terms: &["seafood"], fragment: "seafood", canonical: "seafood_type" },
    SynonymRow { terms: &["grill"], fragment: "grill", canonical: "grill_type" },
    SynonymRow { terms: &["ice cream", "icecream"], fragment: "ice", canonical: "ice_cream_type" },
    SynonymRow { terms: &["drinks juice", "drinksjuice"], fragment: "drink", canonical: "drinks_juice_type" },
    SynonymRow { terms: &["one dish meal", "onedishmeal"], fragment: "dish", canonical: "one_dish_meal_type" },
    SynonymRow { terms: &["dimsum"], fragment: "dimsum", canonical: "dimsum_type" },
    SynonymRow { terms: &["dessert"], fragment: "dessert", canonical: "dessert_type" },
    SynonymRow { terms: &["clean food salad", "cleanfoodsalad"], fragment: "clean", canonical: "clean_food_salad_type" },
    SynonymRow { terms: &["bakery cake", "bakerycake"], fragment: "bakery", canonical: "bakery_cake_type" },
];

const DINING_ROWS: &[SynonymRow] = &[
    SynonymRow { terms: &["fast dining", "fastdining"], fragment: "fast", canonical: "fast_dining_type" },
    SynonymRow { terms: &["casual dining", "casualdining"], fragment: "casual", canonical: "casual_dining_type" },
    SynonymRow { terms: &["fine dining", "finedining"], fragment: "fine", canonical: "fine_dining_type" },
    SynonymRow { terms: &["buffet"], fragment: "buffet", canonical: "buffet_type" },
    SynonymRow { terms: &["street food", "streetfood"], fragment: "street", canonical: "street_food_type" },
    SynonymRow { terms: &["cafe"], fragment: "cafe", canonical: "cafe_type" },
    SynonymRow { terms: &["food court", "foodcourt"], fragment: "court", canonical: "food_court_type" },
    SynonymRow { terms: &["food truck", "foodtruck"], fragment: "truck", canonical: "food_truck_type" },
    SynonymRow { terms: &["family restaurant", "familyrestaurant"], fragment: "family", canonical: "family_restaurant_type" },
    SynonymRow { terms: &["bistro"], fragment: "bistro", canonical: "bistro_type" },
    SynonymRow { terms: &["pub"], fragment: "pub", canonical: "pub_type" },
    SynonymRow { terms: &["diner"], fragment: "diner", canonical: "diner_type" },
    SynonymRow { terms: &["kiosk"], fragment: "kiosk", canonical: "kiosk_type" },
];

const RUNNER_ROWS: &[SynonymRow] = &[
    SynonymRow { terms: &["fun run", "funrun"], fragment: "fun", canonical: "fun_run" },
    SynonymRow { terms: &["marathon"], fragment: "marathon", canonical: "marathon" },
    SynonymRow { terms: &["sprint"], fragment: "sprint", canonical: "sprint" },
    SynonymRow { terms: &["trail"], fragment: "trail", canonical: "trail" },
];

/// All synonym rows for a category, in declaration order.
pub fn rows(category: Category) -> &'static [SynonymRow] {
    match category {
        Category::Cuisine => CUISINE_ROWS,
        Category::DiningType => DINING_ROWS,
        Category::RunnerClass => RUNNER_ROWS,
    }
}

type ExactIndex = HashMap<&'static str, &'static str>;

fn build_index(rows: &'static [SynonymRow]) -> ExactIndex {
    let mut index = ExactIndex::new();
    for row in rows {
        for term in row.terms {
            // First mapping for a term wins; declaration order is priority.
            index.entry(term).or_insert(row.canonical);
        }
    }
    index
}

static CUISINE_INDEX: Lazy<ExactIndex> = Lazy::new(|| build_index(CUISINE_ROWS));
static DINING_INDEX: Lazy<ExactIndex> = Lazy::new(|| build_index(DINING_ROWS));
static RUNNER_INDEX: Lazy<ExactIndex> = Lazy::new(|| build_index(RUNNER_ROWS));

/// Exact term -> canonical id lookup for [`canonicalize`](crate::canonicalize).
pub(crate) fn exact_index(category: Category) -> &'static ExactIndex {
    match category {
        Category::Cuisine => &CUISINE_INDEX,
        Category::DiningType => &DINING_INDEX,
        Category::RunnerClass => &RUNNER_INDEX,
    }
}
