use common::carousel::Carousel;
use common::model::category::Category;
use yew::prelude::*;

use super::messages::Msg;
use super::state::CarouselComponent;

pub fn view(component: &CarouselComponent, ctx: &Context<CarouselComponent>) -> Html {
    let Some(carousel) = &component.carousel else {
        return html! {};
    };
    let link = ctx.link();
    let slides = ctx
        .props()
        .items
        .iter()
        .enumerate()
        .map(|(index, category)| build_slide(carousel, index, category))
        .collect::<Html>();

    html! {
        <section class="carousel-section">
            <div class="carousel-stage">
                <div class="carousel-track">
                    { slides }
                </div>
                <button
                    class="carousel-nav carousel-nav-prev"
                    aria-label="Previous category"
                    onclick={link.callback(|_| Msg::Previous)}
                >
                    { "\u{2039}" }
                </button>
                <button
                    class="carousel-nav carousel-nav-next"
                    aria-label="Next category"
                    onclick={link.callback(|_| Msg::Next)}
                >
                    { "\u{203a}" }
                </button>
            </div>
        </section>
    }
}

/// One absolutely positioned slide. Only the active slide gets the overlay
/// and caption, and only once its reveal delay has elapsed.
fn build_slide(carousel: &Carousel, index: usize, category: &Category) -> Html {
    let layout = carousel.layout_of(index);
    let active = layout.is_active();
    let show_overlay = active && carousel.overlay_visible();

    html! {
        <div
            key={index}
            class="carousel-slide"
            style={layout.css()}
            aria-hidden={(!active).to_string()}
        >
            <img
                src={category.image_url}
                alt={category.name}
                loading={if index < 3 { "eager" } else { "lazy" }}
                class={classes!("carousel-image", if active { "is-active" } else { "is-dimmed" })}
            />
            if show_overlay {
                <>
                    <div class="carousel-overlay animate-fade-in-overlay" />
                    <div class="carousel-caption animate-slide-up-fade">
                        <h3>{ category.name }</h3>
                    </div>
                </>
            }
        </div>
    }
}
