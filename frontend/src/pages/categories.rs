use yew::{html, Component, Context, Html};

use crate::chrome::footer::Footer;
use crate::chrome::hero::Hero;
use crate::components::carousel::CarouselComponent;
use crate::route::Route;

pub struct CategoriesPage;

impl Component for CategoriesPage {
    type Message = ();
    type Properties = ();

    fn create(_ctx: &Context<Self>) -> Self {
        CategoriesPage
    }

    fn view(&self, _ctx: &Context<Self>) -> Html {
        html! {
            <>
                <Hero
                    title="Exhibition Categories"
                    subtitle="Explore 16 dynamic sectors representing diverse industries"
                    compact={true}
                />
                <CarouselComponent />
                <section class="section section-muted">
                    <div class="container-narrow text-center">
                        <h2 class="section-title">{ "Find Your Industry Sector" }</h2>
                        <p class="lead muted">
                            { "Register as an exhibitor in your category and connect with thousands of trade buyers from around the world." }
                        </p>
                        <a href={Route::Exhibition.href()} class="btn btn-primary btn-large">
                            { "Register Now" }
                        </a>
                    </div>
                </section>
                <Footer />
            </>
        }
    }
}
