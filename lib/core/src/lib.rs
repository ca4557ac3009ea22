//! # brewrec Core
//!
//! Core library for the brewrec recommendation service.
//!
//! This crate provides the catalog snapshot and its loading path:
//!
//! - [`Drink`], [`FoodItem`], [`PairingRule`] - the three tabular datasets
//! - [`Catalog`] - immutable in-memory snapshot with lookup indexes
//! - [`loader`] - JSON file loading with a configurable pairing column
//! - [`Error`] - the service-wide error taxonomy
//!
//! ## Example
//!
//! ```rust
//! use brewrec_core::{Catalog, Drink, FoodItem, PairingRule};
//!
//! let drinks = vec![Drink {
//!     name: "Espresso".to_string(),
//!     category: "coffee".to_string(),
//!     temperature: "hot".to_string(),
//!     milk_based: false,
//!     price: 3.0,
//!     level: "strong".to_string(),
//! }];
//! let foods = vec![FoodItem { name: "Croissant".to_string() }];
//! let rules = vec![PairingRule {
//!     classification: "coffee".to_string(),
//!     food_name: "Croissant".to_string(),
//! }];
//!
//! let catalog = Catalog::new(drinks, foods, rules).unwrap();
//! assert_eq!(catalog.position("Espresso"), Some(0));
//! ```

pub mod catalog;
pub mod error;
pub mod loader;

pub use catalog::{Catalog, Drink, FoodItem, PairingRule};
pub use error::{Error, Result};
pub use loader::{load_catalog, DEFAULT_PAIRING_COLUMN};
