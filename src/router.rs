/// Named views reachable by path
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Route {
    Home,
    Products,
    About,
}

impl Route {
    pub const ALL: [Route; 3] = [Route::Home, Route::Products, Route::About];

    /// Resolve a path such as `/products` or `/about/`
    pub fn resolve(path: &str) -> Option<Route> {
        let normalized = normalize(path);
        Self::ALL.into_iter().find(|route| route.path() == normalized)
    }

    pub fn path(&self) -> &'static str {
        match self {
            Route::Home => "/",
            Route::Products => "/products",
            Route::About => "/about",
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            Route::Home => "Home Page",
            Route::Products => "Menu",
            Route::About => "About Page",
        }
    }

    pub fn needs_catalog(&self) -> bool {
        matches!(self, Route::Products)
    }
}

fn normalize(path: &str) -> String {
    let trimmed = path.trim().trim_end_matches('/');
    if trimmed.is_empty() {
        "/".to_string()
    } else if trimmed.starts_with('/') {
        trimmed.to_string()
    } else {
        format!("/{}", trimmed)
    }
}
