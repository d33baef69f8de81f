//! Hash-fragment routing: typed routes, guards and view resolution.

pub mod navigator;
pub mod resolve;
pub mod route;
pub mod view;

pub use navigator::*;
pub use resolve::*;
pub use route::*;
pub use view::*;
