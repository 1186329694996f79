use gloo_net::http::{self, Request};
use serde::de::DeserializeOwned;
use std::future::Future;
use std::pin::Pin;
use thousand_recipes_model::pagination::PageRequest;
use thousand_recipes_model::{RecipeDetail, RecipeId, RecipesResponse};
use url::Url;
use web_sys::AbortSignal;

use crate::app_config::ApiConfig;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Failed to do some HTTP: {0}")]
    Request(#[from] gloo_net::Error),
    #[error("Failed to do some JSON: {0}")]
    Serde(#[from] serde_json::Error),
    #[error("Failed to build request url: {0}")]
    Url(#[from] url::ParseError),
    #[error("HTTP {status} at {url}")]
    Http { status: u16, url: String },
}

impl Error {
    /// Requests cancelled through their `AbortSignal` surface as a JS `AbortError`.
    pub fn is_aborted(&self) -> bool {
        matches!(self, Error::Request(gloo_net::Error::JsError(err)) if err.name == "AbortError")
    }
}

trait HttpErr {
    fn http_ok_json<T: DeserializeOwned + 'static>(
        self,
    ) -> Pin<Box<dyn Future<Output = Result<T, Error>>>>;
}

async fn response_http_err<T: DeserializeOwned + 'static>(
    resp: http::Response,
) -> Result<T, Error> {
    if !resp.ok() {
        Err(Error::Http {
            status: resp.status(),
            url: resp.url(),
        })
    } else {
        let body = resp.text().await?;
        decode(&body)
    }
}

impl HttpErr for http::Response {
    fn http_ok_json<T: DeserializeOwned + 'static>(
        self,
    ) -> Pin<Box<dyn Future<Output = Result<T, Error>>>> {
        Box::pin(response_http_err(self))
    }
}

fn decode<T: DeserializeOwned>(body: &str) -> Result<T, Error> {
    Ok(serde_json::from_str::<T>(body)?)
}

pub fn recipes_page_url(base_url: &Url, page: PageRequest) -> Result<Url, Error> {
    let mut url = base_url.join("recipes")?;
    url.query_pairs_mut()
        .append_pair("limit", &page.limit.to_string())
        .append_pair("skip", &page.skip.to_string());
    Ok(url)
}

pub fn recipe_url(base_url: &Url, id: RecipeId) -> Result<Url, Error> {
    Ok(base_url.join(&format!("recipes/{id}"))?)
}

async fn get_json<T: DeserializeOwned + 'static>(
    url: Url,
    signal: Option<&AbortSignal>,
) -> Result<T, Error> {
    Request::get(url.as_str())
        .header("Accept", "application/json")
        .abort_signal(signal)
        .send()
        .await?
        .http_ok_json::<T>()
        .await
}

pub async fn get_recipes_page(
    api: &ApiConfig,
    page: PageRequest,
    signal: Option<&AbortSignal>,
) -> Result<RecipesResponse, Error> {
    get_json(recipes_page_url(&api.base_url, page)?, signal).await
}

pub async fn get_recipe(
    api: &ApiConfig,
    id: RecipeId,
    signal: Option<&AbortSignal>,
) -> Result<RecipeDetail, Error> {
    get_json(recipe_url(&api.base_url, id)?, signal).await
}

#[cfg(test)]
mod tests {
    use super::*;

    fn base() -> Url {
        Url::parse("https://dummyjson.com").unwrap()
    }

    #[test]
    fn page_url_carries_limit_and_skip() {
        let url = recipes_page_url(&base(), PageRequest { limit: 12, skip: 24 }).unwrap();
        assert_eq!(url.as_str(), "https://dummyjson.com/recipes?limit=12&skip=24");
    }

    #[test]
    fn detail_url() {
        let url = recipe_url(&base(), RecipeId(17)).unwrap();
        assert_eq!(url.as_str(), "https://dummyjson.com/recipes/17");
    }

    #[test]
    fn http_error_message() {
        let err = Error::Http {
            status: 404,
            url: "https://dummyjson.com/recipes/9999".to_string(),
        };
        assert_eq!(err.to_string(), "HTTP 404 at https://dummyjson.com/recipes/9999");
        assert!(!err.is_aborted());
    }

    #[test]
    fn malformed_body_is_a_serde_error() {
        let err = decode::<RecipeDetail>("{\"id\": \"seven\"}").unwrap_err();
        assert!(matches!(err, Error::Serde(_)));
    }

    #[test]
    fn decodes_detail_body() {
        let recipe = decode::<RecipeDetail>(
            r#"{"id": 3, "name": "Chicken Alfredo", "prepTimeMinutes": 15, "cookTimeMinutes": 20}"#,
        )
        .unwrap();
        assert_eq!(recipe.id, RecipeId(3));
        assert_eq!(recipe.total_minutes(), 35);
    }
}
