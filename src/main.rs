use yew::prelude::*;
use yew_router::prelude::*;
use log::info;

mod config;
mod content;
mod components {
    pub mod terminal;
}
mod effects {
    pub mod browser;
    pub mod hooks;
    pub mod host;
    pub mod parallax;
    pub mod reveal;
    #[cfg(test)]
    pub mod testing;
}
mod pages {
    pub mod not_found;
    pub mod portfolio;
}

use pages::{
    not_found::NotFound,
    portfolio::PortfolioTerminal,
};

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
            info!("Rendering portfolio");
            html! { <PortfolioTerminal /> }
        },
        Route::NotFound => {
            info!("Rendering not-found page");
            html! { <NotFound /> }
        },
    }
}

#[function_component]
fn App() -> Html {
    html! {
        <BrowserRouter>
            <Switch<Route> render={switch} />
        </BrowserRouter>
    }
}

fn main() {
    // Initialize console error panic hook for better error messages
    console_error_panic_hook::set_once();

    // Initialize logging
    console_log::init_with_level(config::log_level()).expect("error initializing log");

    info!("Starting portfolio");
    yew::Renderer::<App>::new().render();
}
