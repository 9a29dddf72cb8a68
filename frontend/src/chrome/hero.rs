use yew::{html, AttrValue, Component, Context, Html, Properties};

#[derive(Properties, PartialEq)]
pub struct HeroProps {
    pub title: AttrValue,
    pub subtitle: AttrValue,
    #[prop_or_default]
    pub compact: bool,
}

/// Centered page heading shown at the top of every page.
pub struct Hero;

impl Component for Hero {
    type Message = ();
    type Properties = HeroProps;

    fn create(_ctx: &Context<Self>) -> Self {
        Hero
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let props = ctx.props();
        let class = if props.compact { "hero hero-compact" } else { "hero" };
        html! {
            <section class={class}>
                <div class="container-narrow">
                    <h1 class="hero-title animate-fade-in">{ props.title.clone() }</h1>
                    <p class="hero-subtitle animate-fade-in-delay">{ props.subtitle.clone() }</p>
                </div>
            </section>
        }
    }
}
