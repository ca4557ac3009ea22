//! # brewrec Model
//!
//! Feature encoding and similarity scoring for the brewrec service.
//!
//! - [`LabelEncoder`] / [`encode_catalog`] - categorical attributes to
//!   integer codes, one feature vector per drink
//! - [`Vector`] - dense feature vector with cosine similarity
//! - [`SimilarityMatrix`] - symmetric pairwise score matrix, built once
//!   after the catalog loads
//!
//! ## Example
//!
//! ```rust
//! use brewrec_core::{Catalog, Drink};
//! use brewrec_model::{encode_catalog, SimilarityMatrix};
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
//!         name: "Latte".to_string(),
//!         category: "coffee".to_string(),
//!         temperature: "hot".to_string(),
//!         milk_based: true,
//!         price: 4.0,
//!         level: "mild".to_string(),
//!     },
//! ];
//! let catalog = Catalog::new(drinks, vec![], vec![]).unwrap();
//!
//! let vectors = encode_catalog(&catalog).unwrap();
//! let matrix = SimilarityMatrix::from_vectors(&vectors);
//! assert!((matrix.score(0, 0) - 1.0).abs() < 1e-6);
//! assert_eq!(matrix.score(0, 1), matrix.score(1, 0));
//! ```

pub mod encoder;
pub mod similarity;
pub mod vector;

pub use encoder::{encode_catalog, LabelEncoder, FEATURE_DIM};
pub use similarity::SimilarityMatrix;
pub use vector::Vector;
