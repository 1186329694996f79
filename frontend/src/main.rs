use leptos::*;
use logging::{error, log};
use thousand_recipes_frontend::{FrontendConfig, Router};

fn main() {
    _ = console_log::init_with_level(log::Level::Debug);
    console_error_panic_hook::set_once();
    log!("Starting");
    match FrontendConfig::load() {
        Ok(config) => mount_to_body(move || view! { <App config/> }),
        Err(err) => {
            error!("Failed to load frontend config: {err}");
            let message = err.to_string();
            mount_to_body(move || view! { <p class="status error">{message}</p> })
        }
    }
}

#[component]
fn App(config: FrontendConfig) -> impl IntoView {
    view! {
        <main class="shell">
            <Router config/>
        </main>
    }
}
