use crate::{Error, Result};
use ahash::AHashMap;
use serde::{Deserialize, Serialize};

/// A catalog beverage with the attributes consumed by the similarity model
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Drink {
    pub name: String,
    pub category: String,
    pub temperature: String,
    pub milk_based: bool,
    pub price: f64,
    pub level: String,
}

/// A food item; only its identity participates in recommendations
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct FoodItem {
    pub name: String,
}

/// Links a beverage classification value to a compatible food item.
///
/// The classification value is overloaded: it is compared against both a
/// drink's category and its intensity level when pairing rules are joined.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PairingRule {
    pub classification: String,
    pub food_name: String,
}

/// Immutable catalog snapshot built once at startup.
///
/// Drink positions are stable for the process lifetime and shared with the
/// feature table and similarity matrix. After construction the snapshot is
/// read-only; concurrent readers share it behind an `Arc` with no locking.
#[derive(Debug, Clone)]
pub struct Catalog {
    drinks: Vec<Drink>,
    foods: Vec<FoodItem>,
    rules: Vec<PairingRule>,
    drink_index: AHashMap<String, usize>,
    pairing_index: AHashMap<String, Vec<usize>>,
}

impl Catalog {
    /// Build a snapshot from parsed tabular data.
    ///
    /// Fails on duplicate drink or food names and on non-positive prices.
    /// Rules that reference foods absent from the food table are dropped
    /// here; an unmatched rule simply contributes no pairings.
    pub fn new(drinks: Vec<Drink>, foods: Vec<FoodItem>, rules: Vec<PairingRule>) -> Result<Self> {
        let mut drink_index = AHashMap::with_capacity(drinks.len());
        for (pos, drink) in drinks.iter().enumerate() {
            if drink.price <= 0.0 {
                return Err(Error::NonPositivePrice(drink.name.clone()));
            }
            if drink_index.insert(drink.name.clone(), pos).is_some() {
                return Err(Error::DuplicateDrink(drink.name.clone()));
            }
        }

        let mut food_index = AHashMap::with_capacity(foods.len());
        for (pos, food) in foods.iter().enumerate() {
            if food_index.insert(food.name.clone(), pos).is_some() {
                return Err(Error::DuplicateFood(food.name.clone()));
            }
        }

        let mut pairing_index: AHashMap<String, Vec<usize>> = AHashMap::new();
        for rule in &rules {
            if let Some(&food_pos) = food_index.get(&rule.food_name) {
                pairing_index
                    .entry(rule.classification.clone())
                    .or_default()
                    .push(food_pos);
            }
        }

        Ok(Self {
            drinks,
            foods,
            rules,
            drink_index,
            pairing_index,
        })
    }

    /// Position of a drink by exact name match
    #[must_use]
    pub fn position(&self, name: &str) -> Option<usize> {
        self.drink_index.get(name).copied()
    }

    /// Look up a drink by exact name match
    #[must_use]
    pub fn drink(&self, name: &str) -> Option<&Drink> {
        self.position(name).map(|pos| &self.drinks[pos])
    }

    #[must_use]
    pub fn drinks(&self) -> &[Drink] {
        &self.drinks
    }

    #[must_use]
    pub fn foods(&self) -> &[FoodItem] {
        &self.foods
    }

    #[must_use]
    pub fn rules(&self) -> &[PairingRule] {
        &self.rules
    }

    #[must_use]
    pub fn drink_count(&self) -> usize {
        self.drinks.len()
    }

    /// Food positions indexed under a classification value.
    ///
    /// Returns an empty slice for values no rule references; callers treat
    /// that as "no pairing defined", never as an error.
    #[must_use]
    pub fn foods_for(&self, classification: &str) -> &[usize] {
        self.pairing_index
            .get(classification)
            .map_or(&[], Vec::as_slice)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn drink(name: &str, price: f64) -> Drink {
        Drink {
            name: name.to_string(),
            category: "coffee".to_string(),
            temperature: "hot".to_string(),
            milk_based: false,
            price,
            level: "strong".to_string(),
        }
    }

    #[test]
    fn test_positions_are_stable() {
        let catalog = Catalog::new(
            vec![drink("Espresso", 3.0), drink("Latte", 4.0)],
            vec![],
            vec![],
        )
        .unwrap();

        assert_eq!(catalog.position("Espresso"), Some(0));
        assert_eq!(catalog.position("Latte"), Some(1));
        assert_eq!(catalog.position("Mocha"), None);
        assert_eq!(catalog.drink("Latte").unwrap().price, 4.0);
    }

    #[test]
    fn test_duplicate_drink_rejected() {
        let result = Catalog::new(
            vec![drink("Espresso", 3.0), drink("Espresso", 5.0)],
            vec![],
            vec![],
        );
        assert!(matches!(result, Err(Error::DuplicateDrink(name)) if name == "Espresso"));
    }

    #[test]
    fn test_duplicate_food_rejected() {
        let result = Catalog::new(
            vec![],
            vec![
                FoodItem { name: "Croissant".to_string() },
                FoodItem { name: "Croissant".to_string() },
            ],
            vec![],
        );
        assert!(matches!(result, Err(Error::DuplicateFood(_))));
    }

    #[test]
    fn test_non_positive_price_rejected() {
        let result = Catalog::new(vec![drink("Espresso", 0.0)], vec![], vec![]);
        assert!(matches!(result, Err(Error::NonPositivePrice(_))));
    }

    #[test]
    fn test_rule_with_unknown_food_dropped() {
        let catalog = Catalog::new(
            vec![],
            vec![FoodItem { name: "Croissant".to_string() }],
            vec![
                PairingRule {
                    classification: "coffee".to_string(),
                    food_name: "Croissant".to_string(),
                },
                PairingRule {
                    classification: "coffee".to_string(),
                    food_name: "Unicorn Cake".to_string(),
                },
            ],
        )
        .unwrap();

        assert_eq!(catalog.foods_for("coffee"), &[0]);
        assert!(catalog.foods_for("tea").is_empty());
    }
}
