use chrono::{Datelike, Utc};
use yew::prelude::*;

#[function_component(Footer)]
pub fn footer() -> Html {
    let year = Utc::now().year();

    html! {
        <footer class="footer">
            <div class="footer-inner">
                <p>{format!("© {year} Sneaker Boutique • All drops are imaginary")}</p>
                <div>{"Built live with vibes"}</div>
            </div>
        </footer>
    }
}
