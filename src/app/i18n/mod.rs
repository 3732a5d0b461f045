// SPDX-License-Identifier: MPL-2.0
//! Internationalization support backed by Fluent.
//!
//! Locale files live under `assets/i18n/` and are embedded into the binary;
//! see [`fluent::I18n`] for resolution order and lookup helpers.

pub mod fluent;

pub use fluent::I18n;
