// SPDX-License-Identifier: MPL-2.0
//! Domain layer - Core value types with ZERO external dependencies.
//!
//! This module contains pure domain types and value objects. It has no
//! dependencies on external crates (except `std`) to ensure testability.
//!
//! # Modules
//!
//! - [`locale`]: Resolution identifiers ([`Locale`](locale::Locale),
//!   [`UserId`](locale::UserId))

pub mod locale;
