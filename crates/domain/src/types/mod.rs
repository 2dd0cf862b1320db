//! Domain types and models
//!
//! Session types come first (access levels, claims, the response envelope),
//! followed by the marketplace resources exchanged with the backend.

pub mod access;
pub mod address;
pub mod auth;
pub mod claims;
pub mod demand;
pub mod enums;
pub mod envelope;
pub mod product;
pub mod resource;
pub mod store;
pub mod user;

pub use access::AccessLevel;
pub use address::{AddressRequest, AddressResponse};
pub use auth::{LoginCredentials, LoginResponse};
pub use claims::Claims;
pub use demand::{DemandFilter, DemandRequest, DemandResponse, PostResponse};
pub use enums::{
    DemandStatus, GenderType, ProductType, StoreType, UnitType, UserVerificationStatus,
};
pub use envelope::Envelope;
pub use product::{ProductRequest, ProductResponse, ProductSearch};
pub use resource::{Page, ResourceMeta};
pub use store::{StoreRequest, StoreResponse};
pub use user::{UserProfileUpdateRequest, UserResponse, UserSignUpRequest};
