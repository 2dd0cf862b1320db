//! Typed wrappers over the gateway, one per backend resource
//!
//! Each service owns an `Arc<ApiClient>` and maps its operations onto fixed
//! endpoints. Endpoints that return nothing useful are decoded as
//! [`serde::de::IgnoredAny`] so any payload shape is accepted.

pub mod address;
pub mod auth;
pub mod demand;
pub mod product;
pub mod reel;
pub mod store;
pub mod user;

pub use address::AddressService;
pub use auth::AuthService;
pub use demand::DemandService;
pub use product::ProductService;
pub use reel::ReelService;
pub use store::StoreService;
pub use user::UserService;
