//! Exhibitions page: upcoming events, highlights and the exhibitor form.

use common::model::registration::ExhibitorRegistration;
use yew::prelude::*;

use crate::chrome::footer::Footer;
use crate::chrome::hero::Hero;
use crate::components::registration::{ExhibitorForm, FormVariant};
use crate::dom::scroll_into_view;

struct UpcomingEvent {
    title: &'static str,
    venue: &'static str,
    dates: &'static str,
}

const EVENTS: &[UpcomingEvent] = &[
    UpcomingEvent {
        title: "IGTF Mumbai 2025",
        venue: "Bombay Exhibitions Center, Mumbai, India",
        dates: "December 12-14, 2025",
    },
    UpcomingEvent {
        title: "IGTF Dubai 2025",
        venue: "Dubai Exhibition Center, Dubai, UAE",
        dates: "February 15-17, 2025",
    },
];

const DAILY_HOURS: &str = "10:00 AM - 7:00 PM";

const EVENT_STATS: &[(&str, &str)] = &[
    ("Exhibitors", "400+"),
    ("Trade Buyers", "6000+"),
    ("Countries", "40+"),
    ("Sectors", "16"),
];

const HIGHLIGHTS: &[(&str, &str)] = &[
    (
        "Prime Location",
        "Strategically hosted at Bombay Exhibitions Center with exceptional visibility and footfall, ensuring maximum exposure for exhibitors.",
    ),
    (
        "16 Dynamic Sectors",
        "Hardware & Tools, Toys, Chemical, Electronics, Auto Parts, Construction Material, Agriculture, and more representing diverse industries.",
    ),
    (
        "Global Participation",
        "Drawing exhibitors and buyers from more than 40 countries, offering opportunities for cross-border collaborations.",
    ),
    (
        "Extensive B2B Focus",
        "Premier platform bringing together manufacturers, exporters, distributors, and key decision-makers for meaningful business connections.",
    ),
    (
        "Hosted Buyer Program",
        "Exclusive initiative matching exhibitors with qualified buyers, ensuring focused meetings and higher conversion opportunities.",
    ),
    (
        "Networking Opportunities",
        "Platform for industry professionals to connect, collaborate, and grow their business through strategic partnerships.",
    ),
];

pub struct ExhibitionPage;

impl Component for ExhibitionPage {
    type Message = ();
    type Properties = ();

    fn create(_ctx: &Context<Self>) -> Self {
        ExhibitionPage
    }

    fn view(&self, _ctx: &Context<Self>) -> Html {
        html! {
            <>
                <Hero
                    title="Exhibitions"
                    subtitle="Join us at our upcoming trade fairs in Mumbai and Dubai"
                />
                <section class="section">
                    <div class="container">
                        <h2 class="section-title text-center">{ "Upcoming Events" }</h2>
                        <div class="event-grid">
                            { for EVENTS.iter().map(build_event_card) }
                        </div>
                    </div>
                </section>
                <section class="section section-muted">
                    <div class="container">
                        <div class="text-center section-intro">
                            <h2 class="section-title">{ "Exhibition Highlights" }</h2>
                            <p class="lead muted italic">{ "What makes IGTF the premier trade fair in India" }</p>
                        </div>
                        <div class="highlight-grid">
                            { for HIGHLIGHTS.iter().map(|(title, text)| html! {
                                <div class="card highlight-card">
                                    <h4 class="card-title">{ *title }</h4>
                                    <p class="muted">{ *text }</p>
                                </div>
                            }) }
                        </div>
                    </div>
                </section>
                <section id={ExhibitorRegistration::ANCHOR_ID} class="section">
                    <div class="container-form">
                        <div class="text-center section-intro">
                            <h2 class="section-title">{ "Register as Exhibitor" }</h2>
                            <p class="lead muted">
                                { "Fill out the form below to register your company for the Indo Global Trade Fair" }
                            </p>
                        </div>
                        <ExhibitorForm />
                    </div>
                </section>
                <Footer />
            </>
        }
    }
}

fn build_event_card(event: &UpcomingEvent) -> Html {
    let on_register = Callback::from(|_: MouseEvent| scroll_into_view(ExhibitorRegistration::ANCHOR_ID));

    html! {
        <div class="card event-card">
            <div class="event-header">
                <h3 class="event-title">{ event.title }</h3>
                <p class="muted">{ event.venue }</p>
            </div>
            <div class="event-schedule">
                <div>
                    <p class="strong">{ event.dates }</p>
                    <p class="muted small">{ "3-Day Exhibition" }</p>
                </div>
                <div>
                    <p class="strong">{ DAILY_HOURS }</p>
                    <p class="muted small">{ "Daily Schedule" }</p>
                </div>
            </div>
            <dl class="event-stats">
                { for EVENT_STATS.iter().map(|(label, value)| html! {
                    <div class="event-stat">
                        <dt>{ *label }</dt>
                        <dd>{ *value }</dd>
                    </div>
                }) }
            </dl>
            <button class="btn btn-primary btn-block" onclick={on_register}>
                { "Register as Exhibitor" }
            </button>
        </div>
    }
}
