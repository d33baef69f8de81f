pub mod product;
pub mod review;
pub mod slug;
pub mod subscription;
pub mod user;

pub use product::*;
pub use review::*;
pub use slug::*;
pub use subscription::*;
pub use user::*;
