// SPDX-License-Identifier: MPL-2.0
//! Locale domain types.

pub mod newtypes;

pub use newtypes::{Locale, UserId, DEFAULT_LOCALE_CODE};
