use yew::{html, Component, Context, Html};

use crate::route::Route;

pub struct Footer;

impl Component for Footer {
    type Message = ();
    type Properties = ();

    fn create(_ctx: &Context<Self>) -> Self {
        Footer
    }

    fn view(&self, _ctx: &Context<Self>) -> Html {
        html! {
            <footer class="footer">
                <div class="container">
                    <div class="footer-grid">
                        <div>
                            <h4 class="footer-title">{ "Indo Global Trade Fair" }</h4>
                            <p class="muted">
                                { "Connecting Indian Enterprise with the World through strategic B2B trade platforms." }
                            </p>
                        </div>
                        <div>
                            <h4 class="footer-heading">{ "Quick Links" }</h4>
                            <ul class="footer-links">
                                <li><a href="/">{ "Home" }</a></li>
                                <li><a href={Route::Exhibition.href()}>{ "Exhibitions" }</a></li>
                                <li><a href={Route::Categories.href()}>{ "Categories" }</a></li>
                                <li><a href={Route::Gallery.href()}>{ "Gallery" }</a></li>
                                <li><a href={Route::Visitors.href()}>{ "Visitors" }</a></li>
                            </ul>
                        </div>
                        <div>
                            <h4 class="footer-heading">{ "Contact" }</h4>
                            <ul class="footer-links">
                                <li>{ "Email: info@indoglobaltradefair.com" }</li>
                                <li>{ "Phone: +91 XXX XXX XXXX" }</li>
                            </ul>
                        </div>
                    </div>
                    <div class="footer-bottom">
                        <p>{ "© 2025 Indo Global Trade Fair. All rights reserved." }</p>
                    </div>
                </div>
            </footer>
        }
    }
}
