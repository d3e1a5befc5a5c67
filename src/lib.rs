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
#![deny(unused_results)]
#![deny(unused_qualifications)]
// Cast hygiene
#![deny(trivial_casts)]
#![deny(trivial_numeric_casts)]
// Graphics math casts and float compares are intentional
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_precision_loss)]
#![allow(clippy::cast_sign_loss)]
#![allow(clippy::cast_possible_wrap)]
#![allow(clippy::float_cmp)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_const_for_fn)]
#![cfg_attr(test, allow(clippy::unwrap_used))]

//! Point-of-interest camera navigation for interactive 3D model viewers.
//!
//! A viewer shows a model with clickable markers; selecting one flies the
//! camera to an authored viewpoint along an ease-in-out curve, re-targeting
//! smoothly when another marker is picked mid-flight.
//!
//! # Key entry points
//!
//! - [`Navigator`] - registry, input dispatch, markers and camera in one
//!   place; call [`Navigator::execute`] and [`Navigator::frame`]
//! - [`transition::TransitionController`] - the flight state machine
//! - [`points::PointRegistry`] - authored viewpoints, loadable from TOML
//! - [`options::Options`] - flight timing, camera, markers, framing and key
//!   bindings
//!
//! # Architecture
//!
//! Everything runs on the host's render thread. The host owns a
//! [`camera::CameraRig`] (eye position plus look-at controls) and advances
//! the navigator with a per-frame delta. A flight borrows the rig mutably
//! only inside [`Navigator::frame`], so a scripted transition and manual
//! navigation can never write the camera in the same frame.

pub mod camera;
pub mod error;
pub mod framing;
pub mod input;
pub mod navigator;
pub mod options;
pub mod points;
pub mod transition;
pub mod util;
#[cfg(feature = "web")]
pub mod web;

pub use error::VantageError;
pub use navigator::{NavCommand, Navigator};
