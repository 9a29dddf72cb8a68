use crate::app::App;

mod app;
mod chrome;
mod components;
mod config;
mod dom;
mod pages;
mod route;

fn main() {
    yew::Renderer::<App>::new().render();
}
