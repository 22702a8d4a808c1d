//! Application Layer - Armature
//!
//! Declares the registration surfaces that connect components and providers
//! to the composition root:
//!
//! - `ports::registry`: linkme distributed slices through which capability
//!   providers register factories, and resolve functions the component
//!   selector uses to construct the default implementation for a runtime
//!   mode.
//! - `components`: the component manifest slice. Components describe their
//!   references, startup markers and declared text/script sources here
//!   explicitly, instead of being discovered by metadata scanning.
//!
//! ## Dependencies
//!
//! This crate depends only on `armature-domain`. Provider implementations
//! live downstream in `armature-providers`; linking that crate (directly or
//! through `armature-bootstrap`) is what populates the slices declared here.

pub mod components;
pub mod ports;

pub use components::{ComponentManifest, MarkerKind, StartupMarker, COMPONENTS};
pub use ports::*;
