use yew::prelude::*;

/// Standard five-point star outline used for every glyph; the CSS class
/// decides how it is painted.
const STAR_PATH: &str = "M9.049 2.927c.3-.921 1.603-.921 1.902 0l1.07 3.292a1 1 0 00.95.69h3.462c.969 0 1.371 1.24.588 1.81l-2.801 2.034a1 1 0 00-.364 1.118l1.07 3.292c.3.921-.755 1.688-1.54 1.118l-2.8-2.034a1 1 0 00-1.175 0l-2.8 2.034c-.785.57-1.84-.197-1.54-1.118l1.07-3.292a1 1 0 00-.364-1.118L2.88 8.72c-.783-.57-.38-1.81.588-1.81h3.461a1 1 0 00.951-.69l1.07-3.292z";

/// How a single star glyph is painted.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Star {
    Full,
    Half,
    Empty,
}

impl Star {
    /// Returns the CSS class painting this glyph.
    pub fn css_class(self) -> &'static str {
        match self {
            Self::Full => "star-full",
            Self::Half => "star-half",
            Self::Empty => "star-empty",
        }
    }
}

/// Maps a rating to the five glyphs: stars below the integer part are
/// full, one half star appears when the remainder reaches 0.5, the rest
/// stay empty. Always exactly five glyphs, whatever the input.
pub fn star_states(rating: f64) -> [Star; 5] {
    let full = rating.floor();
    let half = rating - full >= 0.5;

    std::array::from_fn(|i| {
        let position = i as f64;
        if position < full {
            Star::Full
        } else if position == full && half {
            Star::Half
        } else {
            Star::Empty
        }
    })
}

#[derive(Properties, PartialEq)]
pub struct StarRatingProps {
    #[prop_or(4.5)]
    pub rating: f64,
}

/// Five star glyphs plus the numeric rating, rounded to one decimal.
#[function_component(StarRating)]
pub fn star_rating(props: &StarRatingProps) -> Html {
    html! {
        <div class="star-rating">
            {
                star_states(props.rating).iter().map(|star| html! {
                    <svg
                        class={format!("star {}", star.css_class())}
                        viewBox="0 0 20 20"
                        fill="currentColor"
                        aria-hidden="true"
                    >
                        <path d={STAR_PATH} />
                    </svg>
                }).collect::<Html>()
            }
            <span class="star-label">{format!("{:.1}", props.rating)}</span>
        </div>
    }
}
