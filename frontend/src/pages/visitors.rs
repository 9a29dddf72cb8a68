use common::model::registration::VisitorRegistration;
use yew::{html, Component, Context, Html};

use crate::chrome::footer::Footer;
use crate::chrome::hero::Hero;
use crate::components::registration::{FormVariant, VisitorForm};

pub struct VisitorsPage;

impl Component for VisitorsPage {
    type Message = ();
    type Properties = ();

    fn create(_ctx: &Context<Self>) -> Self {
        VisitorsPage
    }

    fn view(&self, _ctx: &Context<Self>) -> Html {
        html! {
            <>
                <Hero
                    title="Visit IGTF"
                    subtitle="Register now for exclusive access to India's premier B2B trade fair"
                />
                <section id={VisitorRegistration::ANCHOR_ID} class="section">
                    <div class="container-form">
                        <div class="text-center section-intro">
                            <h2 class="section-title">{ "Register as Visitor" }</h2>
                            <p class="lead muted">
                                { "Fill out the form below to register for the Indo Global Trade Fair" }
                            </p>
                        </div>
                        <VisitorForm />
                    </div>
                </section>
                <Footer />
            </>
        }
    }
}
