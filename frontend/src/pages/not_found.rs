use yew::prelude::*;
use yew_router::prelude::*;

use crate::components::navigation::Navigation;
use crate::route::Route;

#[function_component(NotFound)]
pub fn not_found() -> Html {
    html! {
        <>
            <Navigation />
            <main class="page not-found">
                <h1>{ "Page not found" }</h1>
                <p class="muted">{ "The page you are looking for does not exist." }</p>
                <Link<Route> to={Route::Home} classes="btn btn-primary">{ "Return to Home" }</Link<Route>>
            </main>
        </>
    }
}
