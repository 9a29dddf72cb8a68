use common::carousel::OVERLAY_REVEAL_MS;
use gloo_timers::callback::Timeout;
use yew::prelude::*;

use super::messages::Msg;
use super::state::CarouselComponent;

pub fn update(component: &mut CarouselComponent, ctx: &Context<CarouselComponent>, msg: Msg) -> bool {
    let Some(carousel) = component.carousel.as_mut() else {
        return false;
    };

    match msg {
        Msg::Next => {
            let revision = carousel.advance();
            schedule_reveal(component, ctx, revision);
            true
        }
        Msg::Previous => {
            let revision = carousel.retreat();
            schedule_reveal(component, ctx, revision);
            true
        }
        Msg::RevealOverlay(revision) => {
            let revealed = carousel.reveal_overlay(revision);
            if revealed {
                component.reveal = None;
            }
            revealed
        }
    }
}

/// Cancels any pending reveal and schedules one for `revision`.
pub fn schedule_reveal(
    component: &mut CarouselComponent,
    ctx: &Context<CarouselComponent>,
    revision: u64,
) {
    component.reveal = None;
    let link = ctx.link().clone();
    component.reveal = Some(Timeout::new(OVERLAY_REVEAL_MS, move || {
        link.send_message(Msg::RevealOverlay(revision));
    }));
}
