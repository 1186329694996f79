use leptos::*;
use thousand_recipes_model::{RecipeDetail, RecipeId};

use crate::api::get_recipe;
use crate::app_config::FrontendConfig;
use crate::components::{Badges, Header, Status};
use crate::request::use_fetch;
use crate::router::go_back;

#[component]
pub fn DetailPage(id: Memo<RecipeId>, config: FrontendConfig) -> impl IntoView {
    let FrontendConfig {
        title,
        api,
        listing,
    } = config;
    let state = use_fetch(
        move || id.get(),
        move |id, signal| {
            let api = api.clone();
            async move { get_recipe(&api, id, signal.as_ref()).await }
        },
    );

    let body = move || {
        let state = state.get();
        if state.loading {
            view! { <Status message="Loading…".to_string()/> }.into_view()
        } else if let Some(error) = state.error {
            view! { <Status message=format!("Error: {error}") error=true/> }.into_view()
        } else if let Some(recipe) = state.value {
            view! { <RecipeSheet recipe badges=listing.detail_badges/> }.into_view()
        } else {
            view! { <Status message="Not found.".to_string()/> }.into_view()
        }
    };

    view! {
        <div class="wrap">
            <Header title/>
            {body}
        </div>
    }
}

#[component]
fn RecipeSheet(recipe: RecipeDetail, badges: usize) -> impl IntoView {
    let tags = recipe.badges(badges).to_vec();
    let timing = format!(
        "총 {}분 · 준비 {}분 · 조리 {}분",
        recipe.total_minutes(),
        recipe.prep_time_minutes,
        recipe.cook_time_minutes
    );
    let ingredients = recipe.ingredient_line();
    let meal_types = recipe.meal_type_line();
    let reviews = recipe.review_count_label();
    let steps = recipe
        .instructions
        .iter()
        .map(|step| view! { <li>{step.clone()}</li> })
        .collect_view();

    view! {
        <div class="sheet">
            <button class="link" on:click=move |_| go_back()>"← 목록으로"</button>
            <div class="sheet-main">
                <div class="shot">
                    <img src=recipe.image.clone() alt=recipe.name.clone()/>
                </div>
                <div class="sheet-info">
                    <div class="head">
                        <h2>{recipe.name.clone()}</h2>
                        <span class="pill">{recipe.difficulty.clone()}</span>
                    </div>
                    <div class="timing">{timing}</div>
                    <div class="chips">
                        <Badges tags/>
                    </div>
                </div>
            </div>

            <div class="box">
                <b>"재료"</b>
                <p class="list">{ingredients}</p>
            </div>

            <div class="block">
                <b>"레시피"</b>
                <ol class="steps">{steps}</ol>
            </div>

            <div class="block">
                <b>"요리 정보"</b>
                <div class="info">
                    <div>"유형: "{recipe.cuisine.clone()}</div>
                    <div>"칼로리/1인분: "{recipe.calories_per_serving}</div>
                    <div>"평점: "{recipe.rating}</div>
                    <div>"리뷰 수: "{reviews}</div>
                    <div>"특징: "{meal_types}</div>
                </div>
            </div>
        </div>
    }
}
