// SPDX-License-Identifier: MPL-2.0
//! User interface components and state management.
//!
//! This module organizes all UI-related code following a component-based
//! architecture with the Elm-style "state down, messages up" pattern. Each
//! screen module owns its collections and exposes `State`, `Message`,
//! `Event`, and free `update`/`view` functions; the application root routes
//! messages in and events out.
//!
//! # Screens
//!
//! - [`dashboard`] - Subscriber group management with the request flow
//! - [`reports`] - Per-group report listings and the batch download
//! - [`admin`] - Subscription request approvals
//! - [`ops`] - Remote file transfer queue
//! - [`settings`] - Language, theme, and transfer delay preferences
//!
//! # Shared Infrastructure
//!
//! - [`components`] - Reusable UI components (search bar, status tags)
//! - [`styles`] - Centralized styling (buttons, containers)
//! - [`design_tokens`] - Design system constants (colors, spacing, sizing)
//! - [`theming`] - Light/Dark/System theme mode management
//! - [`icons`] - SVG icon loading and rendering
//! - [`navbar`] - Shell header with navigation and the notification toggle
//! - [`notifications`] - Toast notification system for user feedback

pub mod admin;
pub mod components;
pub mod dashboard;
pub mod design_tokens;
pub mod icons;
pub mod navbar;
pub mod notifications;
pub mod ops;
pub mod reports;
pub mod settings;
pub mod styles;
pub mod theming;
