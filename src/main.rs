use yew::prelude::*;
use yew_router::prelude::*;
use log::info;

mod analytics;
mod animation;
mod audio;
mod config;
mod dom;
mod preorder;
mod components {
    pub mod hero;
    pub mod modal;
    pub mod nav_cards;
    pub mod packs;
    pub mod preorder_form;
}
mod pages {
    pub mod faq;
    pub mod landing;
}


use animation::PageVariant;
use pages::landing::Landing;

#[derive(Clone, Routable, PartialEq)]
pub enum Route {
    #[at("/")]
    Home,
    #[at("/schiusa")]
    Hatch,
    #[at("/vetrina")]
    Showcase,
    #[not_found]
    #[at("/404")]
    NotFound,
}

impl Route {
    pub fn variant(&self) -> PageVariant {
        match self {
            Route::Hatch => PageVariant::Hatch,
            Route::Showcase => PageVariant::Showcase,
            Route::Home | Route::NotFound => PageVariant::Classic,
        }
    }
}

fn switch(route: Route) -> Html {
    let variant = route.variant();
    info!("Rendering {:?} landing", variant);
    match route {
        Route::NotFound => html! { <Redirect<Route> to={Route::Home} /> },
        _ => html! { <Landing variant={variant} /> },
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

    if let Err(e) = console_log::init_with_level(config::log_level()) {
        gloo_console::error!("error initializing log:", e.to_string());
    }

    info!("Starting landing page");
    yew::Renderer::<App>::new().render();
}
