// SPDX-License-Identifier: MPL-2.0
//! `iced_portal` is a report-subscription portal prototype built with the
//! Iced GUI framework.
//!
//! Subscribers browse and request access to report groups, an admin approves
//! or denies the requests, and an operations role moves incoming files into
//! destination folders. Everything is generated in memory at startup; the
//! only thing persisted is the user's preferences. The crate demonstrates
//! internationalization with Fluent, preference management, and modular
//! Elm-style UI design.

pub mod app;
pub mod catalog;
pub mod domain;
pub mod error;
pub mod ui;
