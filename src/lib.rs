// -- Lint policy ---------------------------------------------------------
// This is the single source of truth for crate-wide lints.

// Broad lint groups
#![deny(clippy::all)]
#![deny(clippy::pedantic)]
#![deny(clippy::nursery)]
// Documentation
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]
#![deny(rustdoc::bare_urls)]
// No panicking in library code
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]
#![deny(clippy::todo)]
#![deny(clippy::unimplemented)]
// No debug/print artifacts
#![deny(clippy::dbg_macro)]
#![deny(clippy::print_stdout)]
#![deny(clippy::print_stderr)]
// Import hygiene
#![deny(clippy::wildcard_imports)]
// Complexity limits
#![deny(clippy::cognitive_complexity)]
#![deny(clippy::excessive_nesting)]
// Function signature hygiene
#![deny(clippy::fn_params_excessive_bools)]
// Clone / pass-by-value hygiene
#![deny(clippy::needless_pass_by_value)]
#![deny(clippy::implicit_clone)]
// String hygiene
#![deny(clippy::inefficient_to_string)]
#![deny(clippy::redundant_closure_for_method_calls)]
#![deny(clippy::manual_string_new)]
#![deny(clippy::str_to_string)]
// Cargo lints (warn, not deny since cargo lints can be noisy)
#![warn(clippy::cargo)]
// Unused / redundant code
#![deny(unused_qualifications)]
// Cast hygiene
#![deny(trivial_casts)]
#![deny(trivial_numeric_casts)]

//! Rigid-transform math and dynamic point/line geometry for real-time 3D
//! prototyping.
//!
//! The crate carries the two pieces of a small visualization toolkit that
//! need numerical care and allocation discipline; windowing, asset loading
//! and GUI panels stay with the host application.
//!
//! # Key entry points
//!
//! - [`math::Vec3`], [`math::Quat`], [`math::Transform`] - value types for
//!   poses and hierarchical composition
//! - [`geometry::DynamicPoints`] / [`geometry::DynamicLines`] - growable,
//!   version-tracked primitive buffers reconciled with a render resource
//!   once per frame
//! - [`geometry::VisDebug`] - a points + lines pair for debug drawing
//! - [`render_loop::RenderLoop`] - push-based frame driver with pre/post
//!   render hooks
//! - [`options::Options`] - buffer sizing and debug-draw defaults (TOML)
//!
//! # Frame protocol
//!
//! Application code computes poses with the math types, calls `reset` and
//! then `add` on its dynamic geometry, and finishes with a single `sync`.
//! `sync` either rebuilds the render resource (only when the CPU capacity
//! outgrew it) or pushes the changed element range in place, and always
//! leaves the draw range at exactly the active element count.

pub mod error;
pub mod geometry;
pub mod gpu;
pub mod math;
pub mod options;
pub mod render_loop;
pub mod util;

pub use error::GfxError;
