#[cfg(test)]
mod tests {
    use sneaker_boutique::components::star_rating::{Star, star_states};
    use sneaker_boutique::hooks::use_products::ProductsState;
    use sneaker_boutique::models::{
        cart::{Cart, CartItem},
        error::AppError,
        product::Product,
    };
    use std::rc::Rc;

    // Helper function to create a test product
    fn create_test_product() -> Product {
        Product {
            id: "p1".to_string(),
            name: "Air Zoom Legacy".to_string(),
            brand: "Nike".to_string(),
            description: "Retro court icon with a modern foam stack".to_string(),
            price: 129.99,
            colorway: "White/University Red".to_string(),
            rating: Some(4.2),
            image: "https://img.example/legacy.jpg".to_string(),
            sizes: vec![8.0, 8.5, 9.0, 10.0],
        }
    }

    // Helper function to create a two-line cart
    fn create_test_cart() -> Cart {
        Cart {
            items: vec![
                CartItem {
                    name: "Air Zoom Legacy".to_string(),
                    brand: "Nike".to_string(),
                    image: "https://img.example/legacy.jpg".to_string(),
                    price: 129.99,
                    size: 9.5,
                    quantity: 1,
                },
                CartItem {
                    name: "Runner 990".to_string(),
                    brand: "New Balance".to_string(),
                    image: "https://img.example/990.jpg".to_string(),
                    price: 184.99,
                    size: 10.0,
                    quantity: 2,
                },
            ],
            subtotal: 499.97,
        }
    }

    // ===== Error Type Tests =====

    #[test]
    fn test_app_error_api_display() {
        let error = AppError::ApiError("Connection failed".to_string());
        assert_eq!(error.to_string(), "API error: Connection failed");
    }

    #[test]
    fn test_app_error_config_display() {
        let error = AppError::ConfigError("Invalid base URL".to_string());
        assert_eq!(error.to_string(), "Configuration error: Invalid base URL");
    }

    // ===== Product Model Tests =====

    #[test]
    fn test_product_deserialization() {
        let json = r#"{
            "id": "p1",
            "name": "Air Zoom Legacy",
            "brand": "Nike",
            "description": "Retro court icon",
            "price": 129.99,
            "colorway": "White/University Red",
            "rating": 4.2,
            "image": "https://img.example/legacy.jpg",
            "sizes": [8, 8.5, 9, 10]
        }"#;

        let product: Result<Product, _> = serde_json::from_str(json);
        assert!(product.is_ok());

        let product = product.unwrap();
        assert_eq!(product.id, "p1");
        assert_eq!(product.price, 129.99);
        assert_eq!(product.rating, Some(4.2));
        assert_eq!(product.sizes, vec![8.0, 8.5, 9.0, 10.0]);
    }

    #[test]
    fn test_product_deserialization_missing_optionals() {
        // Rating and sizes are optional in backend rows
        let json = r#"{
            "id": "p2",
            "name": "Runner 990",
            "brand": "New Balance",
            "description": "Heritage runner",
            "price": 184.99,
            "colorway": "Grey",
            "image": "https://img.example/990.jpg"
        }"#;

        let product: Product = serde_json::from_str(json).unwrap();
        assert_eq!(product.rating, None);
        assert!(product.sizes.is_empty());
    }

    #[test]
    fn test_default_size_prefers_first_listed() {
        let product = create_test_product();
        assert_eq!(product.default_size(), 8.0);
    }

    #[test]
    fn test_default_size_falls_back_to_nine() {
        let mut product = create_test_product();
        product.sizes.clear();
        assert_eq!(product.default_size(), 9.0);
    }

    #[test]
    fn test_size_options_cover_fallback() {
        let mut product = create_test_product();
        assert_eq!(product.size_options(), vec![8.0, 8.5, 9.0, 10.0]);

        // A sneaker with no listed sizes still gets a picker entry
        product.sizes.clear();
        assert_eq!(product.size_options(), vec![9.0]);
    }

    #[test]
    fn test_rating_or_default() {
        let mut product = create_test_product();
        assert_eq!(product.rating_or_default(), 4.2);

        product.rating = None;
        assert_eq!(product.rating_or_default(), 4.5);
    }

    // ===== Star Rating Tests =====

    #[test]
    fn test_star_states_whole_rating() {
        let states = star_states(3.0);
        assert_eq!(
            states,
            [Star::Full, Star::Full, Star::Full, Star::Empty, Star::Empty]
        );
    }

    #[test]
    fn test_star_states_half_rating() {
        let states = star_states(2.5);
        assert_eq!(
            states,
            [Star::Full, Star::Full, Star::Half, Star::Empty, Star::Empty]
        );
    }

    #[test]
    fn test_star_states_zero() {
        let states = star_states(0.0);
        assert_eq!(states, [Star::Empty; 5]);
    }

    #[test]
    fn test_star_states_full_five() {
        let states = star_states(5.0);
        assert_eq!(states, [Star::Full; 5]);
    }

    #[test]
    fn test_star_states_half_threshold() {
        // The half star appears at a remainder of 0.5, not before
        assert_eq!(
            star_states(4.4),
            [Star::Full, Star::Full, Star::Full, Star::Full, Star::Empty]
        );
        assert_eq!(
            star_states(4.5),
            [Star::Full, Star::Full, Star::Full, Star::Full, Star::Half]
        );
        assert_eq!(star_states(4.99)[4], Star::Half);
    }

    #[test]
    fn test_star_states_glyph_counts() {
        for tenths in 0..=50_u32 {
            let rating = f64::from(tenths) / 10.0;
            let states = star_states(rating);

            let full = states.iter().filter(|s| **s == Star::Full).count();
            let half = states.iter().filter(|s| **s == Star::Half).count();

            assert_eq!(full, rating.floor() as usize, "full count at {rating}");
            let expect_half = rating - rating.floor() >= 0.5 && full < 5;
            assert_eq!(half, usize::from(expect_half), "half count at {rating}");
        }
    }

    #[test]
    fn test_star_states_ordering() {
        // Full glyphs first, then at most one half, then empty
        for tenths in 0..=50_u32 {
            let rating = f64::from(tenths) / 10.0;
            let mut rank = 0;

            for state in star_states(rating) {
                let next = match state {
                    Star::Full => 0,
                    Star::Half => 1,
                    Star::Empty => 2,
                };
                assert!(next >= rank, "glyphs out of order at {rating}");
                rank = next;
            }
        }
    }

    // ===== Cart Model Tests =====

    #[test]
    fn test_cart_deserialization() {
        let json = r#"{
            "items": [
                {
                    "name": "Air Zoom Legacy",
                    "brand": "Nike",
                    "image": "https://img.example/legacy.jpg",
                    "price": 129.99,
                    "size": 9.5,
                    "quantity": 1
                },
                {
                    "name": "Court Classic",
                    "brand": "adidas",
                    "image": "https://img.example/court.jpg",
                    "price": 69.99,
                    "size": 8.0,
                    "quantity": 1
                }
            ],
            "subtotal": 199.98
        }"#;

        let cart: Result<Cart, _> = serde_json::from_str(json);
        assert!(cart.is_ok());

        let cart = cart.unwrap();
        assert_eq!(cart.items.len(), 2);
        assert_eq!(cart.items[1].size, 8.0);
        assert_eq!(cart.subtotal, 199.98);
    }

    #[test]
    fn test_cart_item_line_total() {
        let cart = create_test_cart();
        assert_eq!(cart.items[0].line_total(), 129.99);
        assert!((cart.items[1].line_total() - 369.98).abs() < 0.01);
    }

    #[test]
    fn test_line_count_counts_lines_not_quantities() {
        // Quantities sum to 3 but the badge shows distinct lines
        let cart = create_test_cart();
        assert_eq!(cart.line_count(), 2);
    }

    #[test]
    fn test_cart_is_empty() {
        let cart = Cart {
            items: vec![],
            subtotal: 0.0,
        };
        assert!(cart.is_empty());
        assert_eq!(cart.line_count(), 0);

        assert!(!create_test_cart().is_empty());
    }

    #[test]
    fn test_subtotal_comes_from_backend() {
        // The backend may price lines however it likes; its subtotal is
        // displayed verbatim rather than recomputed client-side
        let mut cart = create_test_cart();
        cart.subtotal = 450.00;
        assert_eq!(cart.subtotal, 450.00);
        assert!((cart.items.iter().map(CartItem::line_total).sum::<f64>() - 499.97).abs() < 0.01);
    }

    // ===== ProductsState Tests =====

    #[test]
    fn test_products_state_data_extraction() {
        let products = Rc::new(vec![create_test_product()]);
        let loaded = ProductsState::Loaded(products.clone());

        assert!(loaded.data().is_some());
        assert_eq!(loaded.data().unwrap(), &products);

        let loading = ProductsState::Loading;
        assert!(loading.data().is_none());

        let error = ProductsState::Error("Test error".to_string());
        assert!(error.data().is_none());
    }

    #[test]
    fn test_products_state_is_loading() {
        assert!(ProductsState::Loading.is_loading());
        assert!(!ProductsState::Error("Test error".to_string()).is_loading());
        assert!(!ProductsState::Loaded(Rc::new(vec![])).is_loading());
    }

    #[test]
    fn test_products_state_equality() {
        let state1 = ProductsState::Loading;
        let state2 = ProductsState::Loading;
        assert_eq!(state1, state2);

        let state3 = ProductsState::Error("Test error".to_string());
        let state4 = ProductsState::Error("Test error".to_string());
        assert_eq!(state3, state4);

        let state5 = ProductsState::Loaded(Rc::new(vec![create_test_product()]));
        let state6 = ProductsState::Loaded(Rc::new(vec![create_test_product()]));
        assert_eq!(state5, state6);
    }
}
