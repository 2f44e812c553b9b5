//! Shared library module for the Wordhunt app crate.
#![allow(missing_docs, clippy::missing_errors_doc, clippy::missing_panics_doc)]

pub use self::app::WordhuntApp;

mod action;
mod action_handler;
mod app;
mod state;
mod ui;
pub mod version;
mod view_model_builder;
