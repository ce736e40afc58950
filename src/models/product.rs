use serde::Deserialize;

/// Size preselected when the backend lists no sizes for a product.
const FALLBACK_SIZE: f64 = 9.0;

/// Rating displayed for products the backend has not rated yet.
const FALLBACK_RATING: f64 = 4.5;

/// A sneaker in the catalogue. Fetched once per page load from
/// `GET /products` and never mutated client-side.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct Product {
    pub id: String,
    pub name: String,
    pub brand: String,
    pub description: String,
    pub price: f64,
    pub colorway: String,
    #[serde(default)]
    pub rating: Option<f64>,
    pub image: String,
    #[serde(default)]
    pub sizes: Vec<f64>,
}

impl Product {
    /// US size the card's picker starts on: the first listed size, or a
    /// US 9 when the product carries none.
    pub fn default_size(&self) -> f64 {
        self.sizes.first().copied().unwrap_or(FALLBACK_SIZE)
    }

    /// Sizes offered by the picker. A product with no listed sizes still
    /// offers the fallback size as its only option.
    pub fn size_options(&self) -> Vec<f64> {
        if self.sizes.is_empty() {
            vec![FALLBACK_SIZE]
        } else {
            self.sizes.clone()
        }
    }

    /// Star rating shown on the card.
    pub fn rating_or_default(&self) -> f64 {
        self.rating.unwrap_or(FALLBACK_RATING)
    }
}
