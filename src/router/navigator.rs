use tracing::debug;

use super::route::Route;

/// The navigation location the board reads and redirects.
pub trait Navigator: Send {
    fn location(&self) -> &str;

    /// Moves to `route` on behalf of the board (redirects, post-login, ...).
    fn navigate(&mut self, route: &Route);

    /// Records a location change that came from outside, such as a clicked link.
    fn set_location(&mut self, fragment: &str);
}

/// Hash-fragment location kept in memory, with the list of locations visited.
#[derive(Debug, Clone)]
pub struct HashLocation {
    fragment: String,
    history: Vec<String>,
}

impl HashLocation {
    pub fn new(fragment: impl Into<String>) -> Self {
        let fragment = normalize(fragment.into());
        Self {
            history: vec![fragment.clone()],
            fragment,
        }
    }

    pub fn history(&self) -> &[String] {
        &self.history
    }
}

impl Default for HashLocation {
    fn default() -> Self {
        Self::new("#/")
    }
}

impl Navigator for HashLocation {
    fn location(&self) -> &str {
        &self.fragment
    }

    fn navigate(&mut self, route: &Route) {
        self.set_location(&route.fragment());
    }

    fn set_location(&mut self, fragment: &str) {
        let fragment = normalize(fragment.to_string());
        if fragment == self.fragment {
            return;
        }
        debug!(from = %self.fragment, to = %fragment, "Location changed");
        self.history.push(fragment.clone());
        self.fragment = fragment;
    }
}

fn normalize(fragment: String) -> String {
    if fragment.is_empty() || fragment == "#" {
        "#/".to_string()
    } else if fragment.starts_with('#') {
        fragment
    } else {
        format!("#{}", fragment)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_navigation_is_recorded() {
        let mut location = HashLocation::default();
        location.navigate(&Route::Login);
        location.set_location("/products");
        location.set_location("#/products");
        assert_eq!(location.location(), "#/products");
        assert_eq!(location.history(), ["#/", "#/login", "#/products"]);
    }

    #[test]
    fn test_empty_fragment_is_root() {
        assert_eq!(HashLocation::new("").location(), "#/");
        assert_eq!(HashLocation::new("#").location(), "#/");
    }
}
