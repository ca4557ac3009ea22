//! Categorical feature encoding
//!
//! Maps each drink's categorical attributes to small integer codes and
//! assembles one feature vector per drink. Each attribute gets its own
//! encoder, so codes for `category` and `temperature` live in unrelated
//! numeric spaces.
//!
//! Code assignment policy: codes are handed out in first-seen catalog
//! order, which is deterministic for a fixed input ordering.

use crate::Vector;
use ahash::AHashMap;
use brewrec_core::{Catalog, Error, Result};

/// Number of components in a drink feature vector:
/// {category, temperature, milk flag, price, level}
pub const FEATURE_DIM: usize = 5;

/// Assigns stable integer codes to distinct string values, first-seen order
#[derive(Debug, Default, Clone)]
pub struct LabelEncoder {
    codes: AHashMap<String, u32>,
}

impl LabelEncoder {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Code for a value, assigning the next free code on first sight
    pub fn encode(&mut self, value: &str) -> u32 {
        let next = self.codes.len() as u32;
        *self.codes.entry(value.to_string()).or_insert(next)
    }

    /// Number of distinct values seen so far
    #[must_use]
    pub fn len(&self) -> usize {
        self.codes.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.codes.is_empty()
    }
}

/// Encode the whole catalog into one feature vector per drink.
///
/// Component order is fixed: {category code, temperature code, milk code,
/// raw price, level code}. The returned table shares drink positions with
/// the catalog. An empty categorical value fails with
/// [`Error::MissingAttribute`]; this is fatal at startup.
pub fn encode_catalog(catalog: &Catalog) -> Result<Vec<Vector>> {
    let mut categories = LabelEncoder::new();
    let mut temperatures = LabelEncoder::new();
    let mut levels = LabelEncoder::new();

    catalog
        .drinks()
        .iter()
        .map(|drink| {
            let category = require(&drink.name, "category", &drink.category)?;
            let temperature = require(&drink.name, "temperature", &drink.temperature)?;
            let level = require(&drink.name, "level", &drink.level)?;

            Ok(Vector::new(vec![
                categories.encode(category) as f32,
                temperatures.encode(temperature) as f32,
                u32::from(drink.milk_based) as f32,
                drink.price as f32,
                levels.encode(level) as f32,
            ]))
        })
        .collect()
}

fn require<'a>(drink: &str, attribute: &'static str, value: &'a str) -> Result<&'a str> {
    if value.trim().is_empty() {
        return Err(Error::MissingAttribute {
            drink: drink.to_string(),
            attribute,
        });
    }
    Ok(value)
}
