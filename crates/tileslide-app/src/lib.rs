//! Shared library module for the Tileslide app crate.
#![allow(missing_docs, clippy::missing_errors_doc, clippy::missing_panics_doc)]

pub use self::app::TileslideApp;

mod action;
mod app;
mod persistence;
mod state;
mod ui;
pub mod version;
mod view_model_builder;
