//! Auto-rotating category carousel.
//!
//! Layout math and the active index live in `common::carousel`; this
//! component owns the two timers around it:
//! - an `Interval` advancing every `AUTO_ADVANCE_MS`, created on mount and
//!   dropped on teardown;
//! - a single-slot `Timeout` revealing the caption overlay
//!   `OVERLAY_REVEAL_MS` after each index change. Scheduling a new reveal
//!   drops the previous one.

use common::carousel::AUTO_ADVANCE_MS;
use gloo_timers::callback::Interval;
use yew::prelude::*;

mod messages;
mod props;
mod state;
mod update;
mod view;

pub use messages::Msg;
pub use props::CarouselProps;
pub use state::CarouselComponent;

impl Component for CarouselComponent {
    type Message = Msg;
    type Properties = CarouselProps;

    fn create(ctx: &Context<Self>) -> Self {
        let mut component = CarouselComponent::new(ctx.props().items.len());
        start_timers(&mut component, ctx);
        component
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        update::update(self, ctx, msg)
    }

    fn changed(&mut self, ctx: &Context<Self>, old_props: &Self::Properties) -> bool {
        if ctx.props().items.len() != old_props.items.len() {
            self.release_timers();
            *self = CarouselComponent::new(ctx.props().items.len());
            start_timers(self, ctx);
        }
        true
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        view::view(self, ctx)
    }

    fn destroy(&mut self, _ctx: &Context<Self>) {
        self.release_timers();
    }
}

fn start_timers(component: &mut CarouselComponent, ctx: &Context<CarouselComponent>) {
    let Some(revision) = component.carousel.as_ref().map(|c| c.revision()) else {
        return;
    };

    let link = ctx.link().clone();
    component.ticker = Some(Interval::new(AUTO_ADVANCE_MS, move || {
        link.send_message(Msg::Next);
    }));
    update::schedule_reveal(component, ctx, revision);
}
