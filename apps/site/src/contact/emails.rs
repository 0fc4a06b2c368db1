//! Email templates for the contact flow, plus the rendering helpers that
//! fill them. Submitted values are HTML-escaped before substitution.

use chrono::NaiveDate;
use tera::escape_html;

use super::ContactSubmission;

pub const CONFIRMATION_SUBJECT: &str = "We received your inquiry — Laurel & Pine Events";

/// Confirmation email to the submitter.
/// Replace: `{name}`, `{detail_rows}`.
const CONFIRMATION_TEMPLATE: &str = r#"<div style="font-family: Georgia, serif; color: #3a3a3a; max-width: 560px;">
  <h2 style="font-weight: normal;">Thank you, {name}!</h2>
  <p>Your inquiry is in our inbox and we are already excited. A planner from
  our studio will reach out within two business days.</p>
  {detail_rows}
  <p>Warmly,<br>The Laurel &amp; Pine team</p>
</div>"#;

/// Internal notification to the studio inbox.
/// Replace: `{name}`, `{email}`, `{detail_rows}`, `{message_block}`.
const NOTIFICATION_TEMPLATE: &str = r#"<div style="font-family: sans-serif; color: #222;">
  <h2>New inquiry</h2>
  <p><strong>{name}</strong> &lt;{email}&gt;</p>
  {detail_rows}
  {message_block}
</div>"#;

pub fn notification_subject(name: &str) -> String {
    format!("New inquiry from {name}")
}

/// `2026-06-14` → `Sunday, June 14, 2026`. Anything that is not an ISO
/// date passes through verbatim rather than failing the submission.
pub fn format_wedding_date(raw: &str) -> String {
    match NaiveDate::parse_from_str(raw.trim(), "%Y-%m-%d") {
        Ok(date) => date.format("%A, %B %-d, %Y").to_string(),
        Err(_) => raw.to_string(),
    }
}

pub fn render_confirmation(submission: &ContactSubmission) -> String {
    CONFIRMATION_TEMPLATE
        .replace("{name}", &escape_html(submission.name.trim()))
        .replace("{detail_rows}", &detail_rows(submission))
}

pub fn render_notification(submission: &ContactSubmission) -> String {
    let message_block = match submission.message.as_deref().map(str::trim) {
        Some(message) if !message.is_empty() => {
            format!("<p><strong>Message</strong><br>{}</p>", escape_html(message))
        }
        _ => String::new(),
    };
    NOTIFICATION_TEMPLATE
        .replace("{name}", &escape_html(submission.name.trim()))
        .replace("{email}", &escape_html(submission.email.trim()))
        .replace("{detail_rows}", &detail_rows(submission))
        .replace("{message_block}", &message_block)
}

/// Optional submission fields as a list; empty string when none were given.
fn detail_rows(submission: &ContactSubmission) -> String {
    let mut rows = Vec::new();
    if let Some(date) = trimmed(&submission.date) {
        rows.push(format!(
            "<li><strong>Wedding date:</strong> {}</li>",
            escape_html(&format_wedding_date(date))
        ));
    }
    if let Some(venue) = trimmed(&submission.venue) {
        rows.push(format!("<li><strong>Venue:</strong> {}</li>", escape_html(venue)));
    }
    if let Some(phone) = trimmed(&submission.phone) {
        rows.push(format!("<li><strong>Phone:</strong> {}</li>", escape_html(phone)));
    }
    if rows.is_empty() {
        String::new()
    } else {
        format!("<ul>{}</ul>", rows.join(""))
    }
}

fn trimmed(field: &Option<String>) -> Option<&str> {
    field.as_deref().map(str::trim).filter(|s| !s.is_empty())
}
