use yew::prelude::*;
use yew_router::prelude::*;

use common::config::{SALES_EMAIL, SALES_PHONE};

use crate::route::Route;

#[function_component(Footer)]
pub fn footer() -> Html {
    html! {
        <footer class="footer">
            <div class="footer-grid">
                <div>
                    <img class="footer-logo" src="/assets/logo_1.png" alt="Nukkad Shops Logo" />
                    <p>{ "Empowering retailers across India with innovative POS solutions. Join us in transforming the retail landscape." }</p>
                </div>
                <div>
                    <h4>{ "Company" }</h4>
                    <Link<Route> to={Route::Home}>{ "Home" }</Link<Route>>
                    <Link<Route> to={Route::Careers}>{ "Careers" }</Link<Route>>
                    <Link<Route> to={Route::Device { device_id: "aspire".to_string() }}>{ "Products" }</Link<Route>>
                </div>
                <div>
                    <h4>{ "Support" }</h4>
                    <span>{ "Help Center" }</span>
                    <span>{ "Privacy Policy" }</span>
                    <span>{ "Terms of Service" }</span>
                </div>
                <div>
                    <h4>{ "Contact" }</h4>
                    <a href={format!("mailto:{SALES_EMAIL}")}>{ SALES_EMAIL }</a>
                    <a href={format!("tel:{SALES_PHONE}")}>{ "+91 799 709 5678" }</a>
                    <span>{ "Hyderabad, Telangana, India" }</span>
                </div>
            </div>
            <p class="footer-copy">{ "© Nukkad Shops. All rights reserved." }</p>
        </footer>
    }
}
