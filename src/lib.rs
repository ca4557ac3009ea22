//! # brewrec
//!
//! A beverage recommendation service.
//!
//! Given a drink name, brewrec recommends similar drinks, higher-priced
//! "upsell" alternatives, and compatible food items, serving a single
//! lookup over an in-memory catalog snapshot built once at startup.
//!
//! ## Quick Start
//!
//! ### As a Server
//!
//! ```bash
//! cargo install brewrec
//! brewrec --data-dir ./data --port 8080
//! ```
//!
//! ### As a Library
//!
//! ```rust,no_run
//! use brewrec::prelude::*;
//! use std::path::Path;
//! use std::sync::Arc;
//!
//! let catalog = load_catalog(Path::new("./data"), DEFAULT_PAIRING_COLUMN).unwrap();
//! let engine = Recommender::build(Arc::new(catalog), UpsellPolicy::default()).unwrap();
//!
//! let result = engine.recommend("Latte").unwrap();
//! println!("{:?}", result.premium_upsell);
//! ```
//!
//! ## Crate Structure
//!
//! brewrec is composed of several crates:
//!
//! - [`brewrec-core`](https://docs.rs/brewrec-core) - Catalog snapshot, loader, error taxonomy
//! - [`brewrec-model`](https://docs.rs/brewrec-model) - Feature encoding and cosine similarity matrix
//! - [`brewrec-engine`](https://docs.rs/brewrec-engine) - The three recommendation rules
//! - [`brewrec-api`](https://docs.rs/brewrec-api) - REST boundary
//!
//! ## Features
//!
//! - **Similar drinks**: top 2 by cosine similarity over encoded attributes
//! - **Premium upsell**: cheapest strictly-costlier alternatives, policy-configurable
//! - **Food pairings**: rule table joined against category and intensity level
//! - **Immutable snapshot**: built once at startup, lock-free concurrent reads

// Re-export core types
pub use brewrec_core::{
    load_catalog, Catalog, Drink, Error, FoodItem, PairingRule, Result, DEFAULT_PAIRING_COLUMN,
};

// Re-export model
pub use brewrec_model::{encode_catalog, LabelEncoder, SimilarityMatrix, Vector};

// Re-export engine
pub use brewrec_engine::{Recommendation, Recommender, UpsellPolicy};

// Re-export API
pub use brewrec_api::RestApi;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::{
        encode_catalog, load_catalog, Catalog, Drink, Error, FoodItem, PairingRule,
        Recommendation, Recommender, RestApi, Result, SimilarityMatrix, UpsellPolicy, Vector,
        DEFAULT_PAIRING_COLUMN,
    };
}
