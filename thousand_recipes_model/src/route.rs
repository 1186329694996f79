use crate::pagination::PageNumber;
use crate::RecipeId;
use url::form_urlencoded;

const PAGE_KEYS: [&str; 2] = ["page", "p"];
const DETAIL_PREFIXES: [&str; 2] = ["recipe", "r"];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RouteKind {
    List,
    Detail,
    NotFound,
}

/// The views reachable through the location hash.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Route {
    List { page: PageNumber },
    Detail { id: RecipeId },
    NotFound { path: String },
}

impl Default for Route {
    fn default() -> Self {
        Route::List {
            page: PageNumber::FIRST,
        }
    }
}

impl Route {
    pub fn list(page: PageNumber) -> Self {
        Route::List { page }
    }

    pub fn detail(id: RecipeId) -> Self {
        Route::Detail { id }
    }

    pub fn kind(&self) -> RouteKind {
        match self {
            Route::List { .. } => RouteKind::List,
            Route::Detail { .. } => RouteKind::Detail,
            Route::NotFound { .. } => RouteKind::NotFound,
        }
    }

    pub fn page(&self) -> Option<PageNumber> {
        match self {
            Route::List { page } => Some(*page),
            _ => None,
        }
    }

    pub fn recipe_id(&self) -> Option<RecipeId> {
        match self {
            Route::Detail { id } => Some(*id),
            _ => None,
        }
    }

    /// Parses `#/`, `#/?page=N` (or `?p=N`), `#/recipe/N` and `#/r/N`.
    pub fn parse(hash: &str) -> Self {
        let hash = hash.strip_prefix('#').unwrap_or(hash);
        let (path, query) = hash.split_once('?').unwrap_or((hash, ""));
        let segments = path
            .split('/')
            .filter(|segment| !segment.is_empty())
            .collect::<Vec<_>>();

        match segments.as_slice() {
            [] => Route::List {
                page: PageNumber::from_query(query_value(query, &PAGE_KEYS).as_deref()),
            },
            [prefix, id] if DETAIL_PREFIXES.contains(prefix) => match id.parse::<RecipeId>() {
                Ok(id) => Route::Detail { id },
                Err(_) => Route::NotFound {
                    path: path.to_string(),
                },
            },
            _ => Route::NotFound {
                path: path.to_string(),
            },
        }
    }

    pub fn href(&self) -> String {
        match self {
            Route::List { page } if *page == PageNumber::FIRST => "#/".to_string(),
            Route::List { page } => format!("#/?page={page}"),
            Route::Detail { id } => format!("#/recipe/{id}"),
            Route::NotFound { path } => format!("#{path}"),
        }
    }
}

/// First non-empty decoded value among `keys`, in key order.
fn query_value(query: &str, keys: &[&str]) -> Option<String> {
    let pairs = form_urlencoded::parse(query.as_bytes()).collect::<Vec<_>>();
    keys.iter().find_map(|key| {
        pairs
            .iter()
            .find(|(name, value)| name == key && !value.is_empty())
            .map(|(_, value)| value.to_string())
    })
}
