use yew::prelude::*;
use yew_router::prelude::*;
use log::info;

mod config;
mod scroll {
    pub mod listener;
    pub mod navigation;
    pub mod parallax;
    pub mod reveal;
    pub mod visibility;
}
mod components {
    pub mod contact_form;
    pub mod contact_modal;
    pub mod footer;
    pub mod navbar;
}
mod pages {
    pub mod landing;
}

use components::{footer::Footer, navbar::Navbar};
use pages::landing::Landing;

#[derive(Clone, Routable, PartialEq)]
pub enum Route {
    #[at("/")]
    Home,
    #[not_found]
    #[at("/404")]
    NotFound,
}

fn switch(routes: Route) -> Html {
    match routes {
        Route::Home => {
            info!("Rendering landing page");
            html! { <Landing /> }
        },
        Route::NotFound => {
            info!("Unknown path, redirecting home");
            html! { <Redirect<Route> to={Route::Home} /> }
        },
    }
}

#[function_component]
fn App() -> Html {
    html! {
        <BrowserRouter>
            <Navbar />
            <main>
                <Switch<Route> render={switch} />
            </main>
            <Footer />
        </BrowserRouter>
    }
}

fn main() {
    // Initialize console error panic hook for better error messages
    console_error_panic_hook::set_once();

    // Initialize logging
    console_log::init_with_level(config::log_level()).expect("error initializing log");

    info!("Starting {}", config::BRAND_NAME);
    yew::Renderer::<App>::new().render();
}
