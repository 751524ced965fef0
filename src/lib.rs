//! Settings shell components for the Tessera UI framework.
//!
//! This crate provides a modal settings dialog with category routing and a
//! 12-hour time input widget backed by a canonical 24-hour `"HH:MM"` value.
//!
//! # Example
//!
//! ```no_run
//! # use tessera_ui::tessera;
//! # #[tessera]
//! # fn component() {
//! use tessera_settings::time_input::{TimeInputArgs, time_input};
//!
//! time_input(
//!     &TimeInputArgs::default()
//!         .value("09:30")
//!         .on_change(|canonical| {
//!             // Store the new 24-hour "HH:MM" value.
//!             let _ = canonical;
//!         }),
//! );
//! # }
//! ```
//!
//! The caller owns the canonical value: the widget re-derives its editable
//! 12-hour projection whenever the supplied value changes, and reports every
//! committed edit back through `on_change` without ever mutating the value
//! directly.
#![deny(missing_docs, clippy::unwrap_used)]

pub mod settings_dialog;
pub mod time_input;
