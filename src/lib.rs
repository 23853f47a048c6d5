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
#![deny(clippy::too_many_arguments)]
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
// Tests may unwrap and use wildcard imports.
#![cfg_attr(
    test,
    allow(
        clippy::unwrap_used,
        clippy::expect_used,
        clippy::wildcard_imports
    )
)]

//! Coin-toss animation core.
//!
//! A coin view spins a coin image around up to three axes, projects the
//! rotation through a perspective camera, swaps between the front and reverse
//! images as the coin turns edge-on, and lands on an outcome chosen before
//! the toss starts.
//!
//! The crate never draws. The host feeds frame instants to
//! [`toss::CoinView::tick`] and reads back the displayed image and a
//! [`animation::Transformation`] to apply when drawing it.
//!
//! # Key entry points
//!
//! - [`toss::CoinView`] - the coin view: faces, parameters, playback
//! - [`toss::TossAnimation`] - per-frame angle, face and matrix computation
//! - [`controller::TossController`] - tap handler: random outcome plus an
//!   up-and-down flight
//! - [`options::Options`] - TOML-backed configuration
//! - [`animation`] - timing, easing, and grouped playback
//!
//! # Example
//!
//! ```
//! use tosscoin::coin::Face;
//! use tosscoin::toss::CoinView;
//! use web_time::{Duration, Instant};
//!
//! let mut view = CoinView::with_image("heads");
//! view.set_reverse_image("tails");
//! view.set_size(128, 128);
//! view.set_circle_count(2)?;
//! view.set_outcome(Face::Reverse);
//! view.start_toss();
//!
//! let start = Instant::now();
//! let mut elapsed = Duration::ZERO;
//! while view.tick(start + elapsed) {
//!     elapsed += Duration::from_millis(16);
//! }
//! assert_eq!(view.image(), Some("tails"));
//! # Ok::<(), tosscoin::error::TossError>(())
//! ```

pub mod animation;
pub mod camera;
pub mod coin;
pub mod controller;
pub mod error;
pub mod options;
pub mod toss;
pub mod util;
