//! Record normalization and list state for the foodlist catalog.
//!
//! Sits between `foodlist-api` and the presentation layer:
//!
//! - **[`convert`]** turns loosely-shaped upstream records ([`RawFood`]) into
//!   canonical [`Food`] values. Total: malformed input yields defaults,
//!   never an error.
//!
//! - **[`ListController`]** owns a [`ListViewState`]: loads the collection,
//!   filters it by name, pages it out, and reloads after every
//!   [`Mutation`]. Stale load responses are dropped.
//!
//! - **[`ViewStream`]** follows state changes through a `watch` channel.
//!
//! - **[`FoodForm`]** validates add/edit input before it becomes a
//!   [`Mutation`].
//!
//! [`RawFood`]: foodlist_api::RawFood

pub mod backend;
pub mod command;
pub mod config;
pub mod controller;
pub mod convert;
pub mod error;
pub mod model;
pub mod store;
pub mod stream;

// ── Primary re-exports ──────────────────────────────────────────────
pub use backend::FoodBackend;
pub use command::{FieldError, FoodForm, FormField, Mutation, MutationKind, ValidationErrors};
pub use config::{CatalogConfig, DEFAULT_API_URL, DEFAULT_PAGE_SIZE};
pub use controller::ListController;
pub use convert::normalize;
pub use error::CoreError;
pub use model::{Food, FoodId, MAX_RATING, MIN_RATING, Restaurant, RestaurantStatus};
pub use store::ListViewState;
pub use stream::{ViewStream, ViewWatchStream};
