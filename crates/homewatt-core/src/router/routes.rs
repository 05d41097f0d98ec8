/// Title shown when a route declares none
pub const APP_NAME: &str = "Home Energy System";

pub const LOGIN_PATH: &str = "/login";
pub const HOME_PATH: &str = "/index";
pub const DEVICES_PATH: &str = "/devices";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RouteDescriptor {
    pub path: String,
    pub title: Option<String>,
    pub requires_auth: bool,
    /// Navigating here continues to this path instead
    pub redirect: Option<String>,
}

impl RouteDescriptor {
    /// A public route with no title
    pub fn new(path: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            title: None,
            requires_auth: false,
            redirect: None,
        }
    }

    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn protected(mut self) -> Self {
        self.requires_auth = true;
        self
    }

    pub fn redirect_to(mut self, target: impl Into<String>) -> Self {
        self.redirect = Some(target.into());
        self
    }

    /// Title to display for this route
    pub fn display_title(&self) -> &str {
        self.title.as_deref().unwrap_or(APP_NAME)
    }
}

/// Static route configuration, fixed after startup.
#[derive(Debug, Clone)]
pub struct RouteTable {
    routes: Vec<RouteDescriptor>,
}

impl RouteTable {
    pub fn new(routes: Vec<RouteDescriptor>) -> Self {
        Self { routes }
    }

    /// Look up a route by path, ignoring any query string or trailing slash.
    pub fn find(&self, path: &str) -> Option<&RouteDescriptor> {
        let path = normalize(path);
        self.routes.iter().find(|r| r.path == path)
    }

    pub fn routes(&self) -> &[RouteDescriptor] {
        &self.routes
    }
}

impl Default for RouteTable {
    fn default() -> Self {
        Self::new(vec![
            RouteDescriptor::new("/").redirect_to(HOME_PATH),
            RouteDescriptor::new(HOME_PATH).protected(),
            RouteDescriptor::new(LOGIN_PATH).title("User Login & Registration"),
            RouteDescriptor::new(DEVICES_PATH).protected(),
        ])
    }
}

/// Strip the query, fragment and any trailing slash from `path`.
pub(crate) fn normalize(path: &str) -> &str {
    let path = path.split(['?', '#']).next().unwrap_or(path);
    if path.len() > 1 {
        path.trim_end_matches('/')
    } else {
        path
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_table() {
        let table = RouteTable::default();
        assert_eq!(table.routes().len(), 4);

        let root = table.find("/").unwrap();
        assert_eq!(root.redirect.as_deref(), Some(HOME_PATH));

        assert!(table.find(HOME_PATH).unwrap().requires_auth);
        assert!(table.find(DEVICES_PATH).unwrap().requires_auth);

        let login = table.find(LOGIN_PATH).unwrap();
        assert!(!login.requires_auth);
        assert_eq!(login.display_title(), "User Login & Registration");
    }

    #[test]
    fn test_find_normalizes_path() {
        let table = RouteTable::default();
        assert_eq!(table.find("/devices/").unwrap().path, DEVICES_PATH);
        assert_eq!(table.find("/devices?page=2").unwrap().path, DEVICES_PATH);
        assert_eq!(table.find("/login#top").unwrap().path, LOGIN_PATH);
        assert!(table.find("/nowhere").is_none());
    }

    #[test]
    fn test_display_title_defaults_to_app_name() {
        let route = RouteDescriptor::new(DEVICES_PATH).protected();
        assert_eq!(route.display_title(), APP_NAME);
    }
}
