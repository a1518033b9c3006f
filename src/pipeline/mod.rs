// SPDX-License-Identifier: MPL-2.0
//! Event pipeline wiring.
//!
//! - [`context`]: Inbound events and the per-event value map
//! - [`middleware`]: The locale dispatch hook and the handler trait
//! - [`line_source`]: A line-per-event source used by the binary

pub mod context;
pub mod line_source;
pub mod middleware;

pub use context::{Event, EventContext, User};
pub use line_source::{parse_line, serve_lines};
pub use middleware::{Handler, LocaleMiddleware};
