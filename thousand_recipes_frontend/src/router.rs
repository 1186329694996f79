use leptos::logging::{log, warn};
use leptos::*;
use thousand_recipes_model::pagination::PageNumber;
use thousand_recipes_model::route::{Route, RouteKind};

use crate::app_config::FrontendConfig;
use crate::components::{Header, NotFound};
use crate::detail_page::DetailPage;
use crate::list_page::ListPage;

fn current_route() -> Route {
    match window().location().hash() {
        Ok(hash) => Route::parse(&hash),
        Err(err) => {
            warn!("Failed to read location hash: {err:?}");
            Route::default()
        }
    }
}

pub fn navigate(route: &Route) {
    if let Err(err) = window().location().set_hash(&route.href()) {
        warn!("Failed to navigate to {route:?}: {err:?}");
    }
}

/// Steps back through the browser history, or to the listing when there is nothing to go back to.
pub fn go_back() {
    match window().history() {
        Ok(history) if history.length().unwrap_or_default() > 1 => {
            if let Err(err) = history.back() {
                warn!("Failed to go back: {err:?}");
                navigate(&Route::default());
            }
        }
        _ => navigate(&Route::default()),
    }
}

/// Keeps the last value `pick` produced, so a page being torn down never sees a foreign route.
fn retained<T>(route: ReadSignal<Route>, initial: T, pick: fn(&Route) -> Option<T>) -> Memo<T>
where
    T: Copy + PartialEq + 'static,
{
    create_memo(move |previous: Option<&T>| {
        route
            .with(pick)
            .or_else(|| previous.copied())
            .unwrap_or(initial)
    })
}

#[component]
pub fn Router(config: FrontendConfig) -> impl IntoView {
    let (route, set_route) = create_signal(current_route());
    let listener = window_event_listener(ev::hashchange, move |_| {
        let next = current_route();
        log!("Route changed to {next:?}");
        set_route.set(next);
    });
    on_cleanup(move || listener.remove());

    let kind = create_memo(move |_| route.with(Route::kind));
    move || {
        let config = config.clone();
        match kind.get() {
            RouteKind::List => {
                let page = retained(route, PageNumber::FIRST, Route::page);
                view! { <ListPage page config/> }.into_view()
            }
            RouteKind::Detail => match route.with_untracked(Route::recipe_id) {
                Some(initial) => {
                    let id = retained(route, initial, Route::recipe_id);
                    view! { <DetailPage id config/> }.into_view()
                }
                None => not_found(route, config.title),
            },
            RouteKind::NotFound => not_found(route, config.title),
        }
    }
}

fn not_found(route: ReadSignal<Route>, title: String) -> View {
    let path = route.with_untracked(Route::href);
    view! {
        <div class="wrap">
            <Header title/>
            <NotFound path/>
        </div>
    }
    .into_view()
}
