use yew::prelude::*;
use yew_router::prelude::*;

use common::navigation::Page;

use crate::pages::careers::CareersPage;
use crate::pages::device_details::DeviceDetailsPage;
use crate::pages::home::HomePage;
use crate::pages::not_found::NotFound;

#[derive(Clone, Routable, PartialEq, Debug)]
pub enum Route {
    #[at("/")]
    Home,
    #[at("/careers")]
    Careers,
    #[at("/device/:device_id")]
    Device { device_id: String },
    #[not_found]
    #[at("/404")]
    NotFound,
}

impl Route {
    pub fn page(&self) -> Page {
        match self {
            Route::Home => Page::Home,
            Route::Careers => Page::Careers,
            Route::Device { .. } => Page::Device,
            Route::NotFound => Page::NotFound,
        }
    }
}

pub fn switch(route: Route) -> Html {
    match route {
        Route::Home => html! { <HomePage /> },
        Route::Careers => html! { <CareersPage /> },
        Route::Device { device_id } => html! { <DeviceDetailsPage {device_id} /> },
        Route::NotFound => html! { <NotFound /> },
    }
}
