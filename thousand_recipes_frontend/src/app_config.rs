use config::{Config, ConfigError, File, FileFormat};
use serde::{Deserialize, Serialize};
use thiserror::Error as ThisError;
use thousand_recipes_model::pagination::{DEFAULT_PAGER_WINDOW, DEFAULT_PAGE_SIZE};
use thousand_recipes_model::pagination::{PageNumber, Pagination};
use url::Url;

const EMBEDDED_CONFIG: &str = include_str!("../config/frontend.toml");

#[derive(Debug, ThisError)]
pub enum Error {
    #[error("Config Error {0}")]
    Config(#[from] ConfigError),
    #[error("Invalid listing config: {0}")]
    Listing(&'static str),
    #[error("API base url can not carry a path: {0}")]
    BaseUrl(Url),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApiConfig {
    pub base_url: Url,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListingConfig {
    pub page_size: u32,
    pub pager_window: u32,
    pub tile_badges: usize,
    pub detail_badges: usize,
}

impl Default for ListingConfig {
    fn default() -> Self {
        ListingConfig {
            page_size: DEFAULT_PAGE_SIZE,
            pager_window: DEFAULT_PAGER_WINDOW,
            tile_badges: 2,
            detail_badges: 4,
        }
    }
}

impl ListingConfig {
    pub fn pagination(&self, page: PageNumber, total: u32) -> Pagination {
        Pagination::new(page, self.page_size, total).with_window(self.pager_window)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FrontendConfig {
    pub title: String,
    pub api: ApiConfig,
    pub listing: ListingConfig,
}

impl FrontendConfig {
    /// The browser has no filesystem, so the TOML ships inside the binary.
    pub fn load() -> Result<Self, Error> {
        Self::from_toml(EMBEDDED_CONFIG)
    }

    pub fn from_toml(source: &str) -> Result<Self, Error> {
        let conf = Config::builder()
            .add_source(File::from_str(source, FileFormat::Toml))
            .build()?;
        let title = conf.get::<String>("title")?;
        let api = conf.get::<ApiConfig>("api")?;
        let listing = conf.get::<ListingConfig>("listing")?;

        if listing.page_size == 0 {
            return Err(Error::Listing("page_size must be at least 1"));
        }
        if listing.pager_window == 0 {
            return Err(Error::Listing("pager_window must be at least 1"));
        }
        if api.base_url.path() != "/" {
            return Err(Error::BaseUrl(api.base_url));
        }

        Ok(FrontendConfig {
            title,
            api,
            listing,
        })
    }
}
