//! Maps the browser location path to a page.
//!
//! The site has no client-side router: links are plain anchors and the
//! server answers every unknown path with `index.html`, so the page is
//! chosen once at startup from `window.location.pathname`.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Route {
    Exhibition,
    Categories,
    Gallery,
    Visitors,
    NotFound,
}

impl Route {
    pub fn from_path(path: &str) -> Self {
        let path = path.split(['?', '#']).next().unwrap_or_default();
        match path.trim_end_matches('/') {
            "" | "/exhibition" => Route::Exhibition,
            "/categories" => Route::Categories,
            "/gallery" => Route::Gallery,
            "/visitors" => Route::Visitors,
            _ => Route::NotFound,
        }
    }

    pub fn current() -> Self {
        web_sys::window()
            .and_then(|window| window.location().pathname().ok())
            .map(|path| Route::from_path(&path))
            .unwrap_or(Route::Exhibition)
    }

    pub fn href(&self) -> &'static str {
        match self {
            Route::Exhibition => "/exhibition",
            Route::Categories => "/categories",
            Route::Gallery => "/gallery",
            Route::Visitors => "/visitors",
            Route::NotFound => "/",
        }
    }
}
