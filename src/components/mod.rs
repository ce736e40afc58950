pub mod cart_drawer;
pub mod footer;
pub mod hero;
pub mod navbar;
pub mod product_card;
pub mod product_grid;
pub mod star_rating;

pub use cart_drawer::CartDrawer;
pub use navbar::Navbar;
pub use product_grid::ProductGrid;
