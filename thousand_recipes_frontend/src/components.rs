use leptos::*;
use thousand_recipes_model::route::Route;

#[component]
pub fn Header(title: String) -> impl IntoView {
    view! {
        <header>
            <a class="brand" href=Route::default().href()>{title}</a>
        </header>
    }
}

#[component]
pub fn Badges(tags: Vec<String>) -> impl IntoView {
    tags.into_iter()
        .map(|tag| view! { <span class="chip">{tag}</span> })
        .collect_view()
}

#[component]
pub fn Status(message: String, #[prop(optional)] error: bool) -> impl IntoView {
    view! {
        <p class="status" class:error=error>{message}</p>
    }
}

#[component]
pub fn NotFound(path: String) -> impl IntoView {
    view! {
        <Status message=format!("{path} 페이지를 찾을 수 없습니다.") error=true/>
        <a class="link" href=Route::default().href()>"← 목록으로"</a>
    }
}
