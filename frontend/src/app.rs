use yew::{html, Component, Context, Html};

use crate::chrome::navbar::Navbar;
use crate::pages::categories::CategoriesPage;
use crate::pages::exhibition::ExhibitionPage;
use crate::pages::gallery::GalleryPage;
use crate::pages::not_found::NotFoundPage;
use crate::pages::visitors::VisitorsPage;
use crate::route::Route;

pub struct App {
    route: Route,
}

impl Component for App {
    type Message = ();
    type Properties = ();

    fn create(_ctx: &Context<Self>) -> Self {
        Self {
            route: Route::current(),
        }
    }

    fn view(&self, _ctx: &Context<Self>) -> Html {
        let page = match self.route {
            Route::Exhibition => html! { <ExhibitionPage /> },
            Route::Categories => html! { <CategoriesPage /> },
            Route::Gallery => html! { <GalleryPage /> },
            Route::Visitors => html! { <VisitorsPage /> },
            Route::NotFound => html! { <NotFoundPage /> },
        };

        html! {
            <div class="page">
                <Navbar active={self.route} />
                <main class="page-body">
                    { page }
                </main>
            </div>
        }
    }
}
