use yew::{classes, html, Component, Context, Html, Properties};

use crate::route::Route;

const LINKS: &[(Route, &str)] = &[
    (Route::Exhibition, "Exhibitions"),
    (Route::Categories, "Categories"),
    (Route::Gallery, "Gallery"),
    (Route::Visitors, "Visitors"),
];

#[derive(Properties, PartialEq)]
pub struct NavbarProps {
    pub active: Route,
}

pub struct Navbar;

impl Component for Navbar {
    type Message = ();
    type Properties = NavbarProps;

    fn create(_ctx: &Context<Self>) -> Self {
        Navbar
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let active = ctx.props().active;
        html! {
            <nav class="navbar">
                <a href="/" class="navbar-brand">{ "Indo Global Trade Fair" }</a>
                <ul class="navbar-links">
                    { for LINKS.iter().map(|(route, label)| html! {
                        <li>
                            <a
                                href={route.href()}
                                class={classes!("navbar-link", (*route == active).then_some("active"))}
                            >
                                { *label }
                            </a>
                        </li>
                    }) }
                </ul>
            </nav>
        }
    }
}
