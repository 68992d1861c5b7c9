//! Logger boundary for the users domain.
//!
//! The service emits a message template plus an ordered list of positional
//! values; the concrete sink decides on formatting and output. Logging is
//! fire-and-forget: implementations never fail and never block materially.

use std::fmt;

use uuid::Uuid;

use crate::error::UserError;

/// A positional value carried alongside a log template.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LogValue {
    Id(Uuid),
    Text(String),
    Millis(u128),
}

impl fmt::Display for LogValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LogValue::Id(id) => write!(f, "{}", id),
            LogValue::Text(text) => f.write_str(text),
            LogValue::Millis(ms) => write!(f, "{}", ms),
        }
    }
}

/// Logger trait for the users domain
#[cfg_attr(test, mockall::automock)]
pub trait UserLogger: Send + Sync {
    /// Record an informational event
    fn log_information(&self, template: &'static str, args: &[LogValue]);

    /// Record an error event carrying the original error
    fn log_error(&self, error: &UserError, template: &'static str, args: &[LogValue]);
}

/// Production logger backed by the `tracing` ecosystem
#[derive(Debug, Default, Clone)]
pub struct TracingUserLogger;

impl TracingUserLogger {
    pub fn new() -> Self {
        Self
    }
}

impl UserLogger for TracingUserLogger {
    fn log_information(&self, template: &'static str, args: &[LogValue]) {
        tracing::info!("{}", render_template(template, args));
    }

    fn log_error(&self, error: &UserError, template: &'static str, args: &[LogValue]) {
        tracing::error!(error = %error, "{}", render_template(template, args));
    }
}

/// Substitute `{}` placeholders with the positional values, in order.
///
/// Placeholders without a matching value are kept verbatim; surplus values
/// are ignored.
fn render_template(template: &str, args: &[LogValue]) -> String {
    let mut rendered = String::with_capacity(template.len());
    let mut rest = template;
    let mut values = args.iter();

    while let Some(pos) = rest.find("{}") {
        let (head, tail) = rest.split_at(pos);
        rendered.push_str(head);
        match values.next() {
            Some(value) => rendered.push_str(&value.to_string()),
            None => rendered.push_str("{}"),
        }
        rest = &tail[2..];
    }
    rendered.push_str(rest);

    rendered
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_substitutes_values_in_order() {
        let id = Uuid::now_v7();
        let rendered = render_template(
            "User with id {} retrieved in {}ms",
            &[LogValue::Id(id), LogValue::Millis(42)],
        );

        assert_eq!(rendered, format!("User with id {} retrieved in 42ms", id));
    }

    #[test]
    fn test_render_without_placeholders_returns_template() {
        let rendered = render_template("Retrieving all users", &[]);
        assert_eq!(rendered, "Retrieving all users");
    }

    #[test]
    fn test_render_keeps_unmatched_placeholders() {
        let rendered = render_template("User {} deleted in {}ms", &[LogValue::Text("u1".into())]);
        assert_eq!(rendered, "User u1 deleted in {}ms");
    }

    #[test]
    fn test_render_ignores_surplus_values() {
        let rendered = render_template(
            "Creating user",
            &[LogValue::Text("ignored".into()), LogValue::Millis(1)],
        );
        assert_eq!(rendered, "Creating user");
    }

    #[test]
    fn test_log_value_display() {
        let id = Uuid::now_v7();
        assert_eq!(LogValue::Id(id).to_string(), id.to_string());
        assert_eq!(LogValue::Text("Daniel Aranda".into()).to_string(), "Daniel Aranda");
        assert_eq!(LogValue::Millis(7).to_string(), "7");
    }
}
