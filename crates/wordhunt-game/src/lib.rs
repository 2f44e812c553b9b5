//! Word-search game session management.
//!
//! [`PuzzleController`] runs a puzzle from start to solve: it generates the
//! grid, turns drag gestures into word matches through the
//! [`SelectionEngine`], keeps the [`PuzzleClock`] and reports progress as
//! [`PuzzleEvent`]s. Rendering layers read its view accessors and never
//! mutate the [`Session`] directly.
//!
//! All time-dependent operations take the current [`std::time::Instant`]
//! from the caller, so sessions can be replayed deterministically.
//!
//! # Examples
//!
//! ```
//! use std::time::Instant;
//!
//! use rand::SeedableRng as _;
//! use rand_pcg::Pcg64;
//! use wordhunt_game::PuzzleController;
//!
//! let mut controller = PuzzleController::default();
//! controller.start(&mut Pcg64::seed_from_u64(42), Instant::now())?;
//!
//! assert!(controller.state().is_active());
//! for entry in controller.words() {
//!     println!("{} {}", if entry.found { "x" } else { " " }, entry.text);
//! }
//! # Ok::<(), wordhunt_game::GameError>(())
//! ```

pub use self::{
    clock::{ElapsedTime, PuzzleClock},
    controller::{
        COLOR_KEY_COUNT, CellVisual, PuzzleController, PuzzleState, WordEntry, color_key,
    },
    error::GameError,
    event::PuzzleEvent,
    selection::{
        ExtendOutcome, ExtendRejection, SelectionEngine, SelectionOutcome, SelectionState,
    },
    session::Session,
};

mod clock;
mod controller;
mod error;
mod event;
mod selection;
mod session;
