use crate::app::App;

mod app;
mod components;
mod logger;
mod pages;
mod route;
mod services;

fn main() {
    console_error_panic_hook::set_once();
    logger::init();
    yew::Renderer::<App>::new().render();
}
