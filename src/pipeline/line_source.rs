// SPDX-License-Identifier: MPL-2.0
//! Line-oriented event source.
//!
//! Each non-blank line is one event:
//!
//! ```text
//! 42:de /start      user 42, client language "de"
//! 42 /help          user 42, no client language
//! - channel post    no user
//! ```
//!
//! Events are dispatched concurrently; a slow store lookup for one user does
//! not hold back the others.

use super::context::Event;
use super::middleware::{Handler, LocaleMiddleware};
use super::EventContext;
use crate::application::port::LocalizationEngine;
use crate::domain::locale::UserId;
use crate::error::Result;
use std::sync::Arc;
use tokio::io::{AsyncBufRead, AsyncBufReadExt};
use tokio::task::JoinSet;

/// Parses one input line into an event. Returns `None` for blank or
/// malformed lines.
#[must_use]
pub fn parse_line(line: &str) -> Option<Event> {
    let line = line.trim();
    if line.is_empty() {
        return None;
    }

    let (head, text) = line.split_once(char::is_whitespace).unwrap_or((line, ""));
    let text = text.trim();
    if head == "-" {
        return Some(Event::anonymous(text));
    }

    let (id, language_code) = match head.split_once(':') {
        Some((id, lang)) => (id, Some(lang)),
        None => (head, None),
    };
    let id = id.parse::<i64>().ok()?;
    Some(Event::from_user(UserId::new(id), language_code, text))
}

/// Dispatches every event read from `reader` through `middleware` to
/// `handler`, returning how many events were handled successfully.
///
/// # Errors
///
/// Returns an error if reading from `reader` fails. Handler failures are
/// logged and do not stop the loop.
pub async fn serve_lines<R, E, H>(
    reader: R,
    middleware: LocaleMiddleware<E>,
    handler: Arc<H>,
) -> Result<usize>
where
    R: AsyncBufRead + Unpin,
    E: LocalizationEngine + 'static,
    H: Handler + 'static,
{
    let mut lines = reader.lines();
    let mut tasks = JoinSet::new();

    while let Some(line) = lines.next_line().await? {
        let Some(event) = parse_line(&line) else {
            if !line.trim().is_empty() {
                tracing::warn!(%line, "skipping malformed event line");
            }
            continue;
        };

        let middleware = middleware.clone();
        let handler = handler.clone();
        tasks.spawn(async move {
            middleware
                .dispatch(event, EventContext::new(), handler.as_ref())
                .await
        });
    }

    let mut handled = 0;
    while let Some(joined) = tasks.join_next().await {
        match joined {
            Ok(Ok(())) => handled += 1,
            Ok(Err(err)) => tracing::warn!(error = %err, "handler failed"),
            Err(err) => tracing::error!(error = %err, "dispatch task aborted"),
        }
    }
    Ok(handled)
}
