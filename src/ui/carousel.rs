//! Products carousel
//!
//! The slide state is owned by the page that mounts the carousel; this module
//! renders it and drives autoplay.

use leptos::prelude::*;

use crate::core::carousel::Carousel;
use crate::core::content::ProductEntry;

/// Advance `carousel` every autoplay interval while the calling component is mounted
///
/// Manual navigation does not reset the timer.
pub fn use_autoplay(carousel: RwSignal<Carousel>) {
    #[cfg(not(feature = "ssr"))]
    {
        use crate::core::carousel::AUTOPLAY_INTERVAL;
        use gloo_timers::callback::Interval;

        let interval = Interval::new(AUTOPLAY_INTERVAL.as_millis() as u32, move || {
            carousel.update(Carousel::tick);
        });
        leptos::logging::log!(
            "Carousel autoplay started ({}ms)",
            AUTOPLAY_INTERVAL.as_millis()
        );

        // Dropping the Interval cancels it
        let interval = StoredValue::new_local(Some(interval));
        on_cleanup(move || {
            drop(interval.try_update_value(Option::take));
            leptos::logging::log!("Carousel autoplay stopped");
        });
    }

    #[cfg(feature = "ssr")]
    {
        let _ = carousel;
    }
}

/// Sliding product cards with previous/next arrows and one indicator per slide
#[component]
pub fn ProductCarousel(
    /// Slides in display order
    products: &'static [ProductEntry],
    /// Current slide, shared with autoplay
    carousel: RwSignal<Carousel>,
) -> impl IntoView {
    let go_to = move |index: usize| {
        carousel.update(|c| {
            if let Err(e) = c.jump_to(index) {
                leptos::logging::warn!("Ignoring carousel jump: {}", e);
            }
        });
    };

    view! {
        <div class="carousel-wrapper">
            <button
                class="carousel-arrow carousel-arrow-left"
                on:click=move |_| carousel.update(Carousel::previous)
                aria-label="Previous product"
            >
                "‹"
            </button>

            <div class="carousel-viewport">
                <div
                    class="carousel-slides"
                    style:transform=move || carousel.with(Carousel::track_transform)
                >
                    {products
                        .iter()
                        .map(|product| view! { <ProductSlide product=*product /> })
                        .collect_view()}
                </div>
            </div>

            <button
                class="carousel-arrow carousel-arrow-right"
                on:click=move |_| carousel.update(Carousel::next)
                aria-label="Next product"
            >
                "›"
            </button>
        </div>

        <div class="carousel-indicators">
            {(0..products.len())
                .map(|index| {
                    view! {
                        <button
                            class="carousel-indicator"
                            class:active=move || carousel.with(|c| c.is_active(index))
                            on:click=move |_| go_to(index)
                            aria-label=format!("Go to product {}", index + 1)
                        />
                    }
                })
                .collect_view()}
        </div>
    }
}

#[component]
fn ProductSlide(product: ProductEntry) -> impl IntoView {
    view! {
        <div class="product-slide">
            <div class="product-card">
                <div class="product-image-wrapper">
                    <img src=product.image alt=product.name class="product-image" />
                </div>
                <div class="product-content">
                    <h3 class="product-name">{product.name}</h3>
                    <p class="product-type">{product.category}</p>
                    <p class="product-description">{product.description}</p>
                    <a
                        href=product.link
                        target=product.link_target()
                        rel=product.link_rel()
                        class="product-link"
                    >
                        {product.link_label()}
                    </a>
                </div>
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::content::{PRODUCT_COUNT, PRODUCTS};
    use leptos::tachys::view::RenderHtml;

    fn render_at_slide(index: usize) -> String {
        let owner = Owner::new();
        owner.with(|| {
            let mut state = Carousel::new(PRODUCT_COUNT);
            state.jump_to(index).unwrap();
            let carousel = RwSignal::new(state);
            view! { <ProductCarousel products=PRODUCTS carousel=carousel /> }.to_html()
        })
    }

    #[test]
    fn test_only_current_indicator_is_active() {
        for current in 0..PRODUCTS.len() {
            let html = render_at_slide(current);
            let indicators: Vec<_> = html
                .split("<button")
                .filter(|tag| tag.contains("Go to product"))
                .collect();
            assert_eq!(indicators.len(), PRODUCTS.len());
            for (index, tag) in indicators.iter().enumerate() {
                assert_eq!(tag.contains("active"), index == current, "slide {} indicator {}", current, index);
            }
        }
    }

    #[test]
    fn test_track_offset_follows_slide() {
        let html = render_at_slide(2);
        assert!(html.contains("translateX(-200%)"));
    }

    #[test]
    fn test_only_external_slides_open_new_context() {
        let html = render_at_slide(0);
        let slides: Vec<_> = html.split("class=\"product-slide\"").skip(1).collect();
        assert_eq!(slides.len(), PRODUCTS.len());

        for (slide, product) in slides.iter().zip(PRODUCTS) {
            assert!(slide.contains(&format!("href=\"{}\"", product.link)), "{}", product.name);
            assert_eq!(slide.contains("target=\"_blank\""), product.external, "{}", product.name);
            assert_eq!(
                slide.contains("rel=\"noopener noreferrer\""),
                product.external,
                "{}",
                product.name
            );
        }
    }
}
