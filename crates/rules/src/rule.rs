//! The fixed compatibility rule set, expressed as data.

use kb::{Level, RestaurantRecord};
use vocab::Category;

use crate::facts::RunnerFacts;

/// Confidence attached to an edge when a firing rule does not carry an
/// explicit value.
pub const DEFAULT_CONFIDENCE: f32 = 100.0;

/// One condition over the runner facts and a candidate restaurant.
///
/// Every predicate is a pure function of `(facts, record)`; a [`Rule`] is a
/// conjunction of them.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Predicate {
    /// `record.budget <= facts.max_budget`.
    BudgetWithinLimit,
    /// The runner declared cuisine interests and at least one of them
    /// matches the restaurant's cuisine (synonym-aware).
    PreferredCuisine,
    /// Same, for dining style.
    PreferredDiningType,
    /// The restaurant has a complete nutrition profile equal to the
    /// runner's pre-run or post-run target.
    NutritionMatchesPreOrPost,
    /// The restaurant has nutrition data and its carb level equals the
    /// given level.
    RestaurantCarbIs(Level),
    /// The runner's canonical class equals the given id.
    RunnerClassIs(&'static str),
}

impl Predicate {
    pub fn eval(&self, facts: &RunnerFacts, record: &RestaurantRecord) -> bool {
        match self {
            Predicate::BudgetWithinLimit => record.budget <= facts.max_budget,
            Predicate::PreferredCuisine => facts
                .cuisine_interests
                .iter()
                .any(|term| vocab::terms_match(Category::Cuisine, term, &record.cuisine)),
            Predicate::PreferredDiningType => facts
                .dining_interests
                .iter()
                .any(|term| vocab::terms_match(Category::DiningType, term, &record.dining_type)),
            Predicate::NutritionMatchesPreOrPost => match record.nutrition {
                Some(actual) => {
                    facts.pre_run_nutrition == Some(actual)
                        || facts.post_run_nutrition == Some(actual)
                }
                None => false,
            },
            Predicate::RestaurantCarbIs(level) => {
                matches!(record.nutrition, Some(n) if n.carb == *level)
            }
            Predicate::RunnerClassIs(class) => facts.runner_class == *class,
        }
    }
}

/// A named conjunction of predicates with an optional explicit confidence.
#[derive(Debug, Clone, Copy)]
pub struct Rule {
    pub id: &'static str,
    pub confidence: Option<f32>,
    pub when: &'static [Predicate],
}

impl Rule {
    /// True when every predicate holds.
    pub fn fires(&self, facts: &RunnerFacts, record: &RestaurantRecord) -> bool {
        self.when.iter().all(|p| p.eval(facts, record))
    }

    pub fn confidence(&self) -> f32 {
        self.confidence.unwrap_or(DEFAULT_CONFIDENCE)
    }
}

/// The fixed rule set, in declaration (and therefore priority) order.
///
/// Every conjunction includes a nutrition-dependent predicate, so records
/// without nutrition data never surface through inference.
static RULES: &[Rule] = &[
    Rule {
        id: "complete-preference",
        confidence: None,
        when: &[
            Predicate::BudgetWithinLimit,
            Predicate::PreferredCuisine,
            Predicate::PreferredDiningType,
            Predicate::NutritionMatchesPreOrPost,
        ],
    },
    Rule {
        id: "cuisine-nutrition",
        confidence: Some(85.0),
        when: &[
            Predicate::BudgetWithinLimit,
            Predicate::PreferredCuisine,
            Predicate::NutritionMatchesPreOrPost,
        ],
    },
    Rule {
        id: "dining-nutrition",
        confidence: Some(70.0),
        when: &[
            Predicate::BudgetWithinLimit,
            Predicate::PreferredDiningType,
            Predicate::NutritionMatchesPreOrPost,
        ],
    },
    Rule {
        id: "marathon-carb-load",
        confidence: Some(65.0),
        when: &[
            Predicate::RunnerClassIs("marathon"),
            Predicate::BudgetWithinLimit,
            Predicate::RestaurantCarbIs(Level::High),
        ],
    },
];

pub fn rule_set() -> &'static [Rule] {
    RULES
}

#[cfg(test)]
mod tests {
    use super::*;
    use kb::{NutritionProfile, RunnerProfile};

    fn record(budget: f32, cuisine: &str, dining: &str) -> RestaurantRecord {
        RestaurantRecord {
            id: "r1".into(),
            name: "Test".into(),
            cuisine: cuisine.into(),
            dining_type: dining.into(),
            location: String::new(),
            nationality: String::new(),
            budget,
            phone: None,
            nutrition: Some(NutritionProfile::new(Level::Low, Level::High, Level::High)),
        }
    }

    fn facts() -> RunnerFacts {
        let mut profile = RunnerProfile::new("runner-1", 500.0);
        profile.runner_class = "Marathon".into();
        profile.preferred_cuisines = vec!["Japanese".into()];
        profile.preferred_dining_types = vec!["Fast Dining".into()];
        profile.pre_run_nutrition =
            Some(NutritionProfile::new(Level::Low, Level::High, Level::High));
        RunnerFacts::from_profile(&profile)
    }

    #[test]
    fn budget_predicate_is_inclusive() {
        let facts = facts();
        let at_limit = record(500.0, "japanese", "fast_dining_type");
        let over = record(500.01, "japanese", "fast_dining_type");
        assert!(Predicate::BudgetWithinLimit.eval(&facts, &at_limit));
        assert!(!Predicate::BudgetWithinLimit.eval(&facts, &over));
    }

    #[test]
    fn cuisine_predicate_bridges_synonyms() {
        let facts = facts();
        let ramen_shop = record(300.0, "ramen_type", "fast_dining_type");
        assert!(Predicate::PreferredCuisine.eval(&facts, &ramen_shop));
    }

    #[test]
    fn cuisine_predicate_needs_declared_interest() {
        let profile = RunnerProfile::new("runner-1", 500.0);
        let facts = RunnerFacts::from_profile(&profile);
        let shop = record(300.0, "japanese", "fast_dining_type");
        assert!(!Predicate::PreferredCuisine.eval(&facts, &shop));
    }

    #[test]
    fn nutrition_predicate_rejects_missing_data() {
        let facts = facts();
        let mut shop = record(300.0, "japanese", "fast_dining_type");
        shop.nutrition = None;
        assert!(!Predicate::NutritionMatchesPreOrPost.eval(&facts, &shop));
        assert!(!Predicate::RestaurantCarbIs(Level::High).eval(&facts, &shop));
    }

    #[test]
    fn nutrition_predicate_accepts_post_run_match() {
        let mut profile = RunnerProfile::new("runner-1", 500.0);
        profile.post_run_nutrition =
            Some(NutritionProfile::new(Level::High, Level::Low, Level::High));
        let facts = RunnerFacts::from_profile(&profile);

        let mut shop = record(300.0, "japanese", "fast_dining_type");
        shop.nutrition = Some(NutritionProfile::new(Level::High, Level::Low, Level::High));
        assert!(Predicate::NutritionMatchesPreOrPost.eval(&facts, &shop));
    }

    #[test]
    fn complete_preference_rule_fires_on_full_match() {
        let facts = facts();
        let shop = record(300.0, "japanese", "fast_dining_type");
        let rule = &rule_set()[0];
        assert_eq!(rule.id, "complete-preference");
        assert!(rule.fires(&facts, &shop));
        assert_eq!(rule.confidence(), DEFAULT_CONFIDENCE);
    }

    #[test]
    fn marathon_rule_requires_class_and_high_carb() {
        let facts = facts();
        let mut shop = record(300.0, "noodles_type", "street_food_type");
        shop.nutrition = Some(NutritionProfile::new(Level::High, Level::Low, Level::Low));
        let rule = &rule_set()[3];
        assert_eq!(rule.id, "marathon-carb-load");
        assert!(rule.fires(&facts, &shop));

        let mut sprinter = RunnerProfile::new("runner-2", 500.0);
        sprinter.runner_class = "Sprint".into();
        let sprint_facts = RunnerFacts::from_profile(&sprinter);
        assert!(!rule.fires(&sprint_facts, &shop));
    }

    #[test]
    fn every_rule_is_nutrition_dependent() {
        let facts = facts();
        let mut shop = record(100.0, "japanese", "fast_dining_type");
        shop.nutrition = None;
        for rule in rule_set() {
            assert!(!rule.fires(&facts, &shop), "rule {} fired", rule.id);
        }
    }
}
