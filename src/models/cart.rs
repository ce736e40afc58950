use serde::Deserialize;

/// One line of the cart, priced by the backend. The client never builds
/// or edits these; they only arrive inside a [`Cart`] snapshot.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct CartItem {
    pub name: String,
    pub brand: String,
    pub image: String,
    pub price: f64,
    pub size: f64,
    pub quantity: u32,
}

impl CartItem {
    /// Extended price for the line (unit price × quantity).
    pub fn line_total(&self) -> f64 {
        self.price * f64::from(self.quantity)
    }
}

/// Server-authoritative cart snapshot. Every successful add replaces the
/// previous snapshot wholesale. The subtotal is displayed exactly as the
/// backend returned it, never recomputed from the lines.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct Cart {
    pub items: Vec<CartItem>,
    pub subtotal: f64,
}

impl Cart {
    /// Number of distinct lines. The navbar badge counts lines, not
    /// summed quantities.
    pub fn line_count(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}
