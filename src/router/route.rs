use std::fmt;
use std::str::FromStr;

use crate::domain::User;
use crate::error::RouteError;

/// Every location the board knows how to render.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Route {
    Home,
    Products { category: Option<String> },
    ProductDetail { id: String },
    SubmitProduct,
    MySubmissions,
    Dashboard,
    Admin,
    Login,
    Signup,
}

/// Who may open a route.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Access {
    Public,
    SignedIn,
    /// Signed in and not an admin.
    Buyer,
    Admin,
}

impl Route {
    /// Parses a location fragment such as `#/product/craftnote`.
    ///
    /// The leading `#` is optional and an empty fragment means `/`.
    pub fn parse(fragment: &str) -> Result<Self, RouteError> {
        let path = fragment.strip_prefix('#').unwrap_or(fragment);
        let path = if path.is_empty() { "/" } else { path };

        if let Some(rest) = path.strip_prefix("/product/") {
            // only the first segment names the product
            let id = rest.split('/').next().unwrap_or_default();
            if id.is_empty() {
                return Err(RouteError::UnknownPath(path.to_string()));
            }
            return Ok(Route::ProductDetail { id: id.to_string() });
        }

        if let Some(category) = path.strip_prefix("/products#") {
            let category = (!category.is_empty()).then(|| category.to_string());
            return Ok(Route::Products { category });
        }

        match path {
            "/" => Ok(Route::Home),
            "/products" => Ok(Route::Products { category: None }),
            "/submit-product" => Ok(Route::SubmitProduct),
            "/my-submissions" => Ok(Route::MySubmissions),
            "/dashboard" => Ok(Route::Dashboard),
            "/admin" => Ok(Route::Admin),
            "/login" => Ok(Route::Login),
            "/signup" => Ok(Route::Signup),
            other => Err(RouteError::UnknownPath(other.to_string())),
        }
    }

    pub fn path(&self) -> String {
        match self {
            Route::Home => "/".to_string(),
            Route::Products { category: None } => "/products".to_string(),
            Route::Products { category: Some(category) } => format!("/products#{}", category),
            Route::ProductDetail { id } => format!("/product/{}", id),
            Route::SubmitProduct => "/submit-product".to_string(),
            Route::MySubmissions => "/my-submissions".to_string(),
            Route::Dashboard => "/dashboard".to_string(),
            Route::Admin => "/admin".to_string(),
            Route::Login => "/login".to_string(),
            Route::Signup => "/signup".to_string(),
        }
    }

    /// The route as a location fragment, e.g. `#/login`.
    pub fn fragment(&self) -> String {
        format!("#{}", self.path())
    }

    pub fn access(&self) -> Access {
        match self {
            Route::SubmitProduct | Route::MySubmissions => Access::SignedIn,
            Route::Dashboard => Access::Buyer,
            Route::Admin => Access::Admin,
            Route::Home
            | Route::Products { .. }
            | Route::ProductDetail { .. }
            | Route::Login
            | Route::Signup => Access::Public,
        }
    }

    /// Checks the route guard for `user`.
    ///
    /// # Errors
    /// `Unauthenticated` when a guarded route is opened without a user,
    /// `Forbidden` when the user lacks the required role.
    pub fn authorize(&self, user: Option<&User>) -> Result<(), RouteError> {
        match (self.access(), user) {
            (Access::Public, _) => Ok(()),
            (_, None) => Err(RouteError::Unauthenticated(self.clone())),
            (Access::SignedIn, Some(_)) => Ok(()),
            (Access::Buyer, Some(user)) if !user.is_admin => Ok(()),
            (Access::Admin, Some(user)) if user.is_admin => Ok(()),
            (Access::Buyer | Access::Admin, Some(_)) => Err(RouteError::Forbidden(self.clone())),
        }
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.path())
    }
}

impl FromStr for Route {
    type Err = RouteError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Route::parse(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_known_paths() {
        assert_eq!(Route::parse("#/"), Ok(Route::Home));
        assert_eq!(Route::parse(""), Ok(Route::Home));
        assert_eq!(Route::parse("#"), Ok(Route::Home));
        assert_eq!(Route::parse("/products"), Ok(Route::Products { category: None }));
        assert_eq!(
            Route::parse("#/products#dev-tools"),
            Ok(Route::Products { category: Some("dev-tools".to_string()) })
        );
        assert_eq!(
            Route::parse("#/product/craftnote/reviews"),
            Ok(Route::ProductDetail { id: "craftnote".to_string() })
        );
        assert_eq!(Route::parse("#/admin"), Ok(Route::Admin));
        assert_eq!("#/signup".parse::<Route>(), Ok(Route::Signup));
    }

    #[test]
    fn test_parse_unknown_paths() {
        assert!(matches!(Route::parse("#/nope"), Err(RouteError::UnknownPath(_))));
        assert!(matches!(Route::parse("#/product/"), Err(RouteError::UnknownPath(_))));
        assert!(matches!(Route::parse("#/products/"), Err(RouteError::UnknownPath(_))));
    }

    #[test]
    fn test_path_roundtrips_through_parse() {
        let routes = [
            Route::Home,
            Route::Products { category: Some("utilities".into()) },
            Route::ProductDetail { id: "flowstate".into() },
            Route::Dashboard,
        ];
        for route in routes {
            assert_eq!(Route::parse(&route.fragment()), Ok(route.clone()));
        }
    }

    #[test]
    fn test_authorize() {
        let buyer = User::new("Jane", "jane@doe.com");
        let admin = User::admin("Ada", "admin@realpick.com");

        assert_eq!(Route::Home.authorize(None), Ok(()));
        assert_eq!(Route::SubmitProduct.authorize(None), Err(RouteError::Unauthenticated(Route::SubmitProduct)));
        assert_eq!(Route::SubmitProduct.authorize(Some(&admin)), Ok(()));
        assert_eq!(Route::Dashboard.authorize(Some(&buyer)), Ok(()));
        assert_eq!(Route::Dashboard.authorize(Some(&admin)), Err(RouteError::Forbidden(Route::Dashboard)));
        assert_eq!(Route::Admin.authorize(Some(&buyer)), Err(RouteError::Forbidden(Route::Admin)));
        assert_eq!(Route::Admin.authorize(Some(&admin)), Ok(()));
        assert_eq!(Route::Admin.authorize(None), Err(RouteError::Unauthenticated(Route::Admin)));
    }
}
