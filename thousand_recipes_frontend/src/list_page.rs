use leptos::*;
use thousand_recipes_model::pagination::{PageNumber, PageRequest, Pagination};
use thousand_recipes_model::route::Route;
use thousand_recipes_model::RecipeSummary;

use crate::api::get_recipes_page;
use crate::app_config::FrontendConfig;
use crate::components::{Badges, Header};
use crate::request::use_fetch;
use crate::router::navigate;

#[component]
pub fn ListPage(page: Memo<PageNumber>, config: FrontendConfig) -> impl IntoView {
    let FrontendConfig {
        title,
        api,
        listing,
    } = config;
    let state = use_fetch(
        move || page.get(),
        move |page, signal| {
            let api = api.clone();
            let request = PageRequest::for_page(page, listing.page_size);
            async move { get_recipes_page(&api, request, signal.as_ref()).await }
        },
    );

    let pager = create_memo(move |_| {
        let total = state.with(|state| state.value.as_ref().map(|page| page.total));
        listing.pagination(page.get(), total.unwrap_or_default())
    });
    let error = move || {
        state
            .with(|state| state.error.clone())
            .map(|error| view! { <div class="err">{error}</div> })
    };
    let tiles = move || {
        state.with(|state| {
            if state.loading {
                (0..listing.page_size)
                    .map(|_| view! { <PlaceholderTile/> })
                    .collect_view()
            } else {
                state
                    .value
                    .iter()
                    .flat_map(|page| page.recipes.iter().cloned())
                    .map(|recipe| view! { <RecipeTile recipe badges=listing.tile_badges/> })
                    .collect_view()
            }
        })
    };

    view! {
        <div class="wrap">
            <Header title/>
            {error}
            <div class="grid">{tiles}</div>
            <Pager pager/>
        </div>
    }
}

#[component]
fn RecipeTile(recipe: RecipeSummary, badges: usize) -> impl IntoView {
    let href = Route::detail(recipe.id).href();
    let tags = recipe.badges(badges).to_vec();
    let thumb = format!("background-image: url({})", recipe.image);
    view! {
        <a class="card" href=href>
            <div class="thumb" style=thumb/>
            <div class="card-body">
                <div class="ttl" title=recipe.name.clone()>{recipe.name.clone()}</div>
                <div class="chips">
                    <span class="chip chip--level">{recipe.difficulty}</span>
                    <Badges tags/>
                </div>
            </div>
        </a>
    }
}

#[component]
fn PlaceholderTile() -> impl IntoView {
    view! {
        <div class="card card--loading">
            <div class="thumb"/>
            <div class="card-body">
                <div class="ttl">" "</div>
            </div>
        </div>
    }
}

#[component]
fn Pager(pager: Memo<Pagination>) -> impl IntoView {
    let go = |page: PageNumber| navigate(&Route::list(page));
    let numbers = move || {
        let current = pager.get();
        current
            .visible_pages()
            .map(|number| {
                view! {
                    <button
                        class="btn"
                        class:active=current.is_current(number)
                        on:click=move |_| go(PageNumber::new(number))
                    >
                        {number}
                    </button>
                }
            })
            .collect_view()
    };

    view! {
        <div class="pg">
            <button
                class="btn"
                disabled=move || !pager.get().has_previous()
                on:click=move |_| go(pager.get_untracked().previous())
            >
                "이전"
            </button>
            {numbers}
            <button
                class="btn"
                disabled=move || !pager.get().has_next()
                on:click=move |_| go(pager.get_untracked().next())
            >
                "다음"
            </button>
        </div>
    }
}
