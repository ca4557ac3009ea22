//! Catalog loading from flat JSON files
//!
//! Reads the three tabular datasets (`drinks.json`, `food.json`,
//! `pairing.json`) from a data directory and builds the immutable
//! [`Catalog`] snapshot. The pairing table's classification column name
//! varies across deployments, so it is passed in rather than hardcoded.

use crate::{Catalog, Drink, Error, FoodItem, PairingRule, Result};
use serde::de::DeserializeOwned;
use serde_json::Value;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

/// Classification column name used by most deployments
pub const DEFAULT_PAIRING_COLUMN: &str = "drink_category";

const PAIRING_FILE: &str = "pairing.json";
const FOOD_COLUMN: &str = "food_name";

/// Load the catalog snapshot from a data directory.
///
/// `pairing_column` names the pairing table's classification column
/// (e.g. `drink_category` or `coffee_category`). Any malformed file or
/// missing column is fatal; no partial catalog is ever returned.
pub fn load_catalog(data_dir: &Path, pairing_column: &str) -> Result<Catalog> {
    let drinks: Vec<Drink> = read_json(&data_dir.join("drinks.json"))?;
    let foods: Vec<FoodItem> = read_json(&data_dir.join("food.json"))?;
    let rows: Vec<Value> = read_json(&data_dir.join(PAIRING_FILE))?;
    let rules = parse_rules(&rows, pairing_column)?;
    Catalog::new(drinks, foods, rules)
}

fn read_json<T: DeserializeOwned>(path: &Path) -> Result<T> {
    let file = File::open(path)?;
    Ok(serde_json::from_reader(BufReader::new(file))?)
}

fn parse_rules(rows: &[Value], pairing_column: &str) -> Result<Vec<PairingRule>> {
    rows.iter()
        .map(|row| {
            let classification = column_str(row, pairing_column)?;
            let food_name = column_str(row, FOOD_COLUMN)?;
            Ok(PairingRule {
                classification,
                food_name,
            })
        })
        .collect()
}

fn column_str(row: &Value, column: &str) -> Result<String> {
    row.get(column)
        .and_then(Value::as_str)
        .map(str::to_string)
        .ok_or_else(|| Error::MissingColumn {
            file: PAIRING_FILE.to_string(),
            column: column.to_string(),
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    fn write_fixture(dir: &Path, pairing_column: &str) {
        fs::write(
            dir.join("drinks.json"),
            r#"[
                {"name": "Espresso", "category": "coffee", "temperature": "hot",
                 "milk_based": false, "price": 3.0, "level": "strong"},
                {"name": "Latte", "category": "coffee", "temperature": "hot",
                 "milk_based": true, "price": 4.0, "level": "mild"}
            ]"#,
        )
        .unwrap();
        fs::write(
            dir.join("food.json"),
            r#"[{"name": "Croissant"}, {"name": "Biscotti"}]"#,
        )
        .unwrap();
        fs::write(
            dir.join("pairing.json"),
            format!(
                r#"[{{"{pairing_column}": "coffee", "food_name": "Croissant"}},
                    {{"{pairing_column}": "strong", "food_name": "Biscotti"}}]"#
            ),
        )
        .unwrap();
    }

    #[test]
    fn test_load_catalog() {
        let dir = tempfile::tempdir().unwrap();
        write_fixture(dir.path(), DEFAULT_PAIRING_COLUMN);

        let catalog = load_catalog(dir.path(), DEFAULT_PAIRING_COLUMN).unwrap();
        assert_eq!(catalog.drink_count(), 2);
        assert_eq!(catalog.foods().len(), 2);
        assert_eq!(catalog.foods_for("coffee"), &[0]);
        assert_eq!(catalog.foods_for("strong"), &[1]);
    }

    #[test]
    fn test_configured_pairing_column() {
        let dir = tempfile::tempdir().unwrap();
        write_fixture(dir.path(), "coffee_category");

        let catalog = load_catalog(dir.path(), "coffee_category").unwrap();
        assert_eq!(catalog.rules().len(), 2);

        // Reading the same files under the wrong column name must fail loudly
        let result = load_catalog(dir.path(), DEFAULT_PAIRING_COLUMN);
        assert!(matches!(
            result,
            Err(Error::MissingColumn { column, .. }) if column == DEFAULT_PAIRING_COLUMN
        ));
    }

    #[test]
    fn test_missing_file_is_fatal() {
        let dir = tempfile::tempdir().unwrap();
        assert!(matches!(
            load_catalog(dir.path(), DEFAULT_PAIRING_COLUMN),
            Err(Error::Io(_))
        ));
    }

    #[test]
    fn test_malformed_json_is_fatal() {
        let dir = tempfile::tempdir().unwrap();
        write_fixture(dir.path(), DEFAULT_PAIRING_COLUMN);
        fs::write(dir.path().join("drinks.json"), "not json").unwrap();

        assert!(matches!(
            load_catalog(dir.path(), DEFAULT_PAIRING_COLUMN),
            Err(Error::Parse(_))
        ));
    }
}
