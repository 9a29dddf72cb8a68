use yew::{html, Component, Context, Html};

use crate::chrome::footer::Footer;
use crate::chrome::hero::Hero;

const PLACEHOLDER_TILES: usize = 6;

pub struct GalleryPage;

impl Component for GalleryPage {
    type Message = ();
    type Properties = ();

    fn create(_ctx: &Context<Self>) -> Self {
        GalleryPage
    }

    fn view(&self, _ctx: &Context<Self>) -> Html {
        html! {
            <>
                <Hero title="Gallery" subtitle="Explore highlights from our previous exhibitions" />
                <section class="section">
                    <div class="container-wide">
                        <div class="text-center section-intro">
                            <h2 class="section-title">{ "Exhibition Moments" }</h2>
                            <p class="muted">
                                { "Please upload your gallery images to showcase your exhibition highlights" }
                            </p>
                        </div>
                        <div class="gallery-grid">
                            { for (1..=PLACEHOLDER_TILES).map(|n| html! {
                                <div key={n} class="gallery-tile">
                                    <p class="muted">{ format!("Gallery Image {}", n) }</p>
                                </div>
                            }) }
                        </div>
                    </div>
                </section>
                <Footer />
            </>
        }
    }
}
