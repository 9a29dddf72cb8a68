use yew::{html, Component, Context, Html};

use crate::chrome::hero::Hero;

pub struct NotFoundPage;

impl Component for NotFoundPage {
    type Message = ();
    type Properties = ();

    fn create(_ctx: &Context<Self>) -> Self {
        NotFoundPage
    }

    fn view(&self, _ctx: &Context<Self>) -> Html {
        html! {
            <>
                <Hero title="Page not found" subtitle="The page you are looking for does not exist." />
                <div class="text-center section">
                    <a href="/" class="btn btn-primary">{ "Back to home" }</a>
                </div>
            </>
        }
    }
}
