use tracing::debug;

use super::route::Route;
use super::view::{DashboardEntry, ViewDescriptor};
use crate::catalog::{queries, CatalogSnapshot};
use crate::domain::User;
use crate::error::RouteError;
use crate::seed::TODAY_LAUNCH_ID;

/// Outcome of resolving a location.
#[derive(Debug, Clone, PartialEq)]
pub struct Resolution {
    /// The route whose view is rendered. Differs from the requested one after
    /// a fallback or redirect.
    pub route: Route,
    pub view: ViewDescriptor,
    /// Where the location must move to, if anywhere.
    pub redirect: Option<Route>,
}

impl Resolution {
    fn render(route: Route, view: ViewDescriptor) -> Self {
        Self { route, view, redirect: None }
    }

    fn redirect(route: Route, view: ViewDescriptor) -> Self {
        Self {
            redirect: Some(route.clone()),
            route,
            view,
        }
    }
}

/// Maps a location fragment to the view to render.
///
/// Unknown paths and unknown product ids fall back to the home view. Guarded
/// routes redirect to `/login` when nobody is signed in and to `/` when the
/// signed-in user lacks the role. Never fails and never touches the catalog.
pub fn resolve(path: &str, user: Option<&User>, catalog: &CatalogSnapshot) -> Resolution {
    let route = match Route::parse(path) {
        Ok(route) => route,
        Err(e) => {
            debug!(error = %e, "Falling back to home");
            return Resolution::render(Route::Home, home(catalog));
        }
    };

    match route.authorize(user) {
        Ok(()) => {}
        Err(RouteError::Unauthenticated(route)) => {
            debug!(route = %route, "Redirecting to login");
            return Resolution::redirect(Route::Login, ViewDescriptor::Login);
        }
        Err(e) => {
            debug!(error = %e, "Redirecting to home");
            return Resolution::redirect(Route::Home, home(catalog));
        }
    }

    let products = catalog.products.as_slice();
    let view = match (&route, user) {
        (Route::Home, _) => home(catalog),
        (Route::Products { category }, _) => ViewDescriptor::Products {
            category: category
                .as_deref()
                .map(|slug| queries::category_for_slug(products, slug).unwrap_or_else(|| slug.to_string())),
            categories: queries::all_categories(products),
            products: queries::listed(products, category.as_deref()),
        },
        (Route::ProductDetail { id }, _) => match queries::find(products, id) {
            Some(product) => ViewDescriptor::ProductDetail {
                product: product.clone(),
                can_review: user.is_some(),
            },
            None => {
                debug!(product_id = %id, "Unknown product, falling back to home");
                return Resolution::render(Route::Home, home(catalog));
            }
        },
        (Route::SubmitProduct, _) => ViewDescriptor::SubmitProduct,
        (Route::MySubmissions, Some(user)) => ViewDescriptor::MySubmissions {
            user: user.clone(),
            submissions: queries::by_vendor(products, &user.email),
        },
        (Route::Dashboard, Some(user)) => ViewDescriptor::Dashboard {
            user: user.clone(),
            subscriptions: queries::subscriptions_of(&catalog.subscriptions, products, &user.email)
                .into_iter()
                .map(|(subscription, product)| DashboardEntry { subscription, product })
                .collect(),
        },
        (Route::Admin, _) => ViewDescriptor::Admin {
            pending: queries::pending(products),
        },
        (Route::Login, _) => ViewDescriptor::Login,
        (Route::Signup, _) => ViewDescriptor::Signup,
        // authorize() already turned these away without a user
        (Route::MySubmissions | Route::Dashboard, None) => {
            return Resolution::redirect(Route::Login, ViewDescriptor::Login);
        }
    };

    Resolution::render(route, view)
}

fn home(catalog: &CatalogSnapshot) -> ViewDescriptor {
    let products = catalog.products.as_slice();
    ViewDescriptor::Home {
        featured: queries::find(products, TODAY_LAUNCH_ID)
            .filter(|p| p.is_listed())
            .cloned(),
        products: queries::top_listed(products),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::reducer::{apply_moderation, apply_submission};
    use crate::domain::{ModerationDecision, ProductSubmission};
    use crate::router::view::ViewTag;
    use crate::seed::Seed;
    use proptest::prelude::*;

    fn snapshot() -> CatalogSnapshot {
        let seed = Seed::load(chrono::Utc::now()).unwrap();
        CatalogSnapshot::new(seed.products, seed.subscriptions)
    }

    fn buyer() -> User {
        User::new("Jane Doe", "jane@doe.com")
    }

    fn admin() -> User {
        User::admin("Ada", "admin@realpick.com")
    }

    #[test]
    fn test_known_paths_resolve_to_their_views() {
        let catalog = snapshot();
        let jane = buyer();
        let ada = admin();
        let cases: [(&str, Option<&User>, ViewTag); 10] = [
            ("#/", None, ViewTag::Home),
            ("#/products", None, ViewTag::Products),
            ("#/product/craftnote", None, ViewTag::ProductDetail),
            ("#/submit-product", Some(&jane), ViewTag::SubmitProduct),
            ("#/my-submissions", Some(&jane), ViewTag::MySubmissions),
            ("#/dashboard", Some(&jane), ViewTag::Dashboard),
            ("#/admin", Some(&ada), ViewTag::Admin),
            ("#/login", None, ViewTag::Login),
            ("#/signup", None, ViewTag::Signup),
            ("#/products#dev-tools", None, ViewTag::Products),
        ];
        for (path, user, tag) in cases {
            let resolution = resolve(path, user, &catalog);
            assert_eq!(resolution.view.tag(), tag, "path {}", path);
            assert_eq!(resolution.redirect, None, "path {}", path);
        }
    }

    #[test]
    fn test_guarded_paths_redirect_to_login_without_user() {
        let catalog = snapshot();
        for path in ["#/submit-product", "#/my-submissions", "#/dashboard", "#/admin"] {
            let resolution = resolve(path, None, &catalog);
            assert_eq!(resolution.redirect, Some(Route::Login), "path {}", path);
            assert_eq!(resolution.view, ViewDescriptor::Login);
        }
    }

    #[test]
    fn test_role_mismatch_redirects_home() {
        let catalog = snapshot();
        let resolution = resolve("#/admin", Some(&buyer()), &catalog);
        assert_eq!(resolution.redirect, Some(Route::Home));
        assert_eq!(resolution.view.tag(), ViewTag::Home);

        let resolution = resolve("#/dashboard", Some(&admin()), &catalog);
        assert_eq!(resolution.redirect, Some(Route::Home));
        assert_eq!(resolution.view.tag(), ViewTag::Home);
    }

    #[test]
    fn test_unknown_product_falls_back_home_without_redirect() {
        let resolution = resolve("#/product/does-not-exist", None, &snapshot());
        assert_eq!(resolution.view.tag(), ViewTag::Home);
        assert_eq!(resolution.route, Route::Home);
        assert_eq!(resolution.redirect, None);
    }

    #[test]
    fn test_home_lists_only_approved_sorted_by_votes() {
        let jane = buyer();
        let seed = snapshot();
        let submission = ProductSubmission::named("Rocket");
        let products = apply_submission(&seed.products, Some(&jane), submission).unwrap();
        let catalog = CatalogSnapshot::new(products, seed.subscriptions.to_vec());

        match resolve("#/", None, &catalog).view {
            ViewDescriptor::Home { featured, products } => {
                assert_eq!(featured.map(|p| p.id), Some("craftnote".to_string()));
                assert!(products.iter().all(|p| p.is_listed()));
                assert_eq!(products.len(), 4);
                assert!(products.windows(2).all(|w| w[0].upvotes >= w[1].upvotes));
            }
            other => panic!("Unexpected view: {:?}", other),
        }
    }

    #[test]
    fn test_approved_submission_appears_in_products() {
        let jane = buyer();
        let seed = snapshot();
        let submission = ProductSubmission::named("Rocket");
        let products = apply_submission(&seed.products, Some(&jane), submission).unwrap();

        let pending = CatalogSnapshot::new(products.clone(), Vec::new());
        match resolve("#/admin", Some(&admin()), &pending).view {
            ViewDescriptor::Admin { pending } => assert_eq!(pending.len(), 1),
            other => panic!("Unexpected view: {:?}", other),
        }

        let approved = apply_moderation(&products, "rocket", ModerationDecision::Approved).unwrap();
        let catalog = CatalogSnapshot::new(approved, Vec::new());
        match resolve("#/products", None, &catalog).view {
            ViewDescriptor::Products { products, .. } => assert!(products.iter().any(|p| p.id == "rocket")),
            other => panic!("Unexpected view: {:?}", other),
        }
    }

    #[test]
    fn test_category_link_filters_products() {
        let catalog = snapshot();
        match resolve("#/products#dev-tools", None, &catalog).view {
            ViewDescriptor::Products { category, categories, products } => {
                assert_eq!(category.as_deref(), Some("Dev Tools"));
                assert_eq!(categories.len(), 7);
                let ids: Vec<&str> = products.iter().map(|p| p.id.as_str()).collect();
                assert_eq!(ids, ["craftnote", "querymaster"]);
            }
            other => panic!("Unexpected view: {:?}", other),
        }
    }

    #[test]
    fn test_dashboard_and_submissions_are_scoped_to_user() {
        let catalog = snapshot();
        match resolve("#/dashboard", Some(&buyer()), &catalog).view {
            ViewDescriptor::Dashboard { subscriptions, .. } => assert_eq!(subscriptions.len(), 3),
            other => panic!("Unexpected view: {:?}", other),
        }
        let bob = User::new("Bob", "bob@example.com");
        match resolve("#/my-submissions", Some(&bob), &catalog).view {
            ViewDescriptor::MySubmissions { submissions, user } => {
                assert!(submissions.is_empty());
                assert_eq!(user, bob);
            }
            other => panic!("Unexpected view: {:?}", other),
        }
    }

    #[test]
    fn test_product_detail_review_flag() {
        let catalog = snapshot();
        let anonymous = resolve("#/product/flowstate", None, &catalog);
        assert!(matches!(anonymous.view, ViewDescriptor::ProductDetail { can_review: false, .. }));
        let signed_in = resolve("#/product/flowstate", Some(&buyer()), &catalog);
        assert!(matches!(signed_in.view, ViewDescriptor::ProductDetail { can_review: true, .. }));
    }

    proptest! {
        #[test]
        fn prop_unknown_paths_fall_back_home(segment in "[a-z]{1,12}") {
            let known = ["products", "submit-product", "my-submissions", "dashboard", "admin", "login", "signup"];
            prop_assume!(!known.contains(&segment.as_str()));
            let resolution = resolve(&format!("#/{}", segment), None, &snapshot());
            prop_assert_eq!(resolution.view.tag(), ViewTag::Home);
            prop_assert_eq!(resolution.redirect, None);
        }
    }
}
