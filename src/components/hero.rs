use yew::prelude::*;

const HERO_IMAGE: &str = "https://images.unsplash.com/photo-1542291026-7eec264c27ff?w=1600&q=80";

/// Static landing section above the grid.
#[function_component(Hero)]
pub fn hero() -> Html {
    html! {
        <section class="hero">
            <div class="hero-inner">
                <div class="hero-copy">
                    <div class="hero-pill">{"NEW DROP"}</div>
                    <h1 class="hero-title">{"Find Your Next Pair of Heat"}</h1>
                    <p class="hero-text">
                        {"Discover iconic silhouettes and modern classics from Nike, \
                          adidas, New Balance and more. Curated drops, clean UI, \
                          instant vibes."}
                    </p>
                    <div class="hero-actions">
                        <a href="#shop" class="hero-shop-link">{"Shop Sneakers"}</a>
                        <a href="/test" class="hero-status-link">{"Check Status"}</a>
                    </div>
                </div>
                <div class="hero-media">
                    <div class="hero-glow"></div>
                    <img src={HERO_IMAGE} alt="Hero Sneaker" />
                </div>
            </div>
        </section>
    }
}
