//! # brewrec Engine
//!
//! The recommendation engine for the brewrec service.
//!
//! Given a drink name, [`Recommender`] consults the catalog snapshot and a
//! precomputed cosine similarity matrix to answer with three independent
//! rules:
//!
//! - **Similar drinks** - top 2 by similarity score, target excluded
//! - **Premium upsell** - up to 2 strictly costlier drinks matching the
//!   configured [`UpsellPolicy`], cheapest step-up first
//! - **Food pairings** - foods whose pairing rules match the target's
//!   category or intensity level, deduped, uncapped
//!
//! ## Example
//!
//! ```rust
//! use brewrec_core::{Catalog, Drink};
//! use brewrec_engine::{Recommender, UpsellPolicy};
//! use std::sync::Arc;
//!
//! let drinks = vec![
//!     Drink {
//!         name: "Espresso".to_string(),
//!         category: "coffee".to_string(),
//!         temperature: "hot".to_string(),
//!         milk_based: false,
//!         price: 3.0,
//!         level: "strong".to_string(),
//!     },
//!     Drink {
//!         name: "Americano".to_string(),
//!         category: "coffee".to_string(),
//!         temperature: "hot".to_string(),
//!         milk_based: false,
//!         price: 3.5,
//!         level: "strong".to_string(),
//!     },
//! ];
//! let catalog = Arc::new(Catalog::new(drinks, vec![], vec![]).unwrap());
//!
//! let engine = Recommender::build(catalog, UpsellPolicy::default()).unwrap();
//! let result = engine.recommend("Espresso").unwrap();
//! assert_eq!(result.premium_upsell, vec!["Americano"]);
//! ```

pub mod recommend;

pub use recommend::{Recommendation, Recommender, UpsellPolicy, MAX_SIMILAR, MAX_UPSELL};
