use log::info;
use stylist::css;
use stylist::yew::Global;
use yew::prelude::*;
use yew_router::prelude::*;

mod config;
mod intent;
mod timer;
mod visibility;
mod estimator {
    pub mod catalog;
    pub mod format;
    pub mod panel;
    pub mod state;
}
mod contact {
    pub mod clipboard;
    pub mod links;
    pub mod modal;
}
mod components {
    pub mod contact_modal;
    pub mod estimator_panel;
    pub mod service_card;
}
mod pages {
    pub mod landing;
}

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
            info!("Rendering Home page");
            html! { <Landing /> }
        },
        Route::NotFound => {
            info!("Rendering NotFound page");
            html! {
                <div class="not-found">
                    <h1>{"404"}</h1>
                    <p>{"This page doesn't exist."}</p>
                    <Link<Route> to={Route::Home}>{"Back to home"}</Link<Route>>
                </div>
            }
        },
    }
}

#[function_component]
fn App() -> Html {
    html! {
        <BrowserRouter>
            <Global css={css!(r#"
                html, body {
                    margin: 0;
                    padding: 0;
                    scroll-behavior: smooth;
                    font-family: -apple-system, BlinkMacSystemFont, "Segoe UI", Roboto, Helvetica, Arial, sans-serif;
                }
                *, *::before, *::after {
                    box-sizing: border-box;
                }
                .not-found {
                    min-height: 100vh;
                    display: flex;
                    flex-direction: column;
                    align-items: center;
                    justify-content: center;
                    color: #0F4C81;
                }
            "#)} />
            <Switch<Route> render={switch} />
        </BrowserRouter>
    }
}

fn main() {
    // Initialize console error panic hook for better error messages
    console_error_panic_hook::set_once();

    // Initialize logging
    console_log::init_with_level(config::log_level()).expect("error initializing log");

    info!("Starting application");
    yew::Renderer::<App>::new().render();
}
