// SPDX-License-Identifier: MPL-2.0
//! `locale_relay` picks the display locale for every inbound event of a
//! message-processing pipeline and prepares the Fluent resources used to
//! render replies.
//!
//! It provides per-user locale resolution backed by a persistent store, a
//! one-time normalization of flat `.ftl` files into the per-locale layout the
//! renderer reads, and a dispatch hook that attaches both to each event.

#![doc(html_root_url = "https://docs.rs/locale_relay/0.1.0")]

pub mod application;
pub mod config;
pub mod domain;
pub mod error;
pub mod i18n;
pub mod infrastructure;
pub mod pipeline;

#[cfg(test)]
mod test_utils;
