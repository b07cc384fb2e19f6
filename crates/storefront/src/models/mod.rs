//! Domain models for the storefront.

pub mod cart;
pub mod content;
pub mod product;
pub mod session;

pub use cart::{Cart, CartItem};
pub use content::{
    AboutPageContent, BlogPost, DeliveryPageContent, SiteContent, SiteSettings,
};
pub use product::{CategoryCount, Toy};
pub use session::{CurrentUser, keys as session_keys};
