//! Test doubles for request, profile, and lifecycle scenarios.
//!
//! These simulate the hosting environment a handler or component normally
//! runs inside, without any real server:
//!
//! - [`SimulatedRequest`] - builder producing a full request context
//! - [`ProfileStub`] - in-memory per-user profile store with save tracking
//! - [`LifecycleDriver`] - drives a [`Lifecycle`] component through its
//!   phases in order
//!
//! # Example
//!
//! ```rust
//! use matchkit::web::SimulatedRequest;
//!
//! let ctx = SimulatedRequest::get("/orders?page=2")
//!     .user_agent("matchkit-tests")
//!     .session_value("user", "ada")
//!     .build()
//!     .unwrap();
//!
//! assert_eq!(ctx.query_value("page"), Some("2"));
//! assert_eq!(ctx.session.get("user").map(String::as_str), Some("ada"));
//! ```

mod context;
mod lifecycle;
mod profile;

pub use context::{SimulatedContext, SimulatedRequest};
pub use lifecycle::{Lifecycle, LifecycleDriver, Phase};
pub use profile::ProfileStub;
