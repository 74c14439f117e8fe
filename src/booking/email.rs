//! Booking notification email
//!
//! Builds the message sent to the site owner for each booking. All
//! user-supplied text is HTML-escaped.

use serde::Serialize;

use super::validation::ValidatedBooking;

/// Sender shown on booking notifications
pub const NOTIFICATION_FROM: &str =
    "\"3D Virtual Try-On Platform\" <noreply@virtualtryonplatform.com>";

/// A composed email ready for a mailer
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OutgoingEmail {
    pub from: String,
    pub to: String,
    pub subject: String,
    pub html: String,
}

/// Escape text for inclusion in HTML element content or attributes
pub fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

/// Compose the owner notification for a booking
pub fn compose_notification(booking: &ValidatedBooking, owner_email: &str) -> OutgoingEmail {
    let company = escape_html(&booking.company_name);
    let date = booking.preferred_date.format("%A, %B %-d, %Y");

    let services = if booking.services.is_empty() {
        String::new()
    } else {
        let labels: Vec<String> = booking.services.iter().map(|s| escape_html(s.label())).collect();
        format!("<p><strong>Selected Services:</strong><br>{}</p>\n", labels.join("<br>"))
    };

    let message = booking
        .message
        .as_deref()
        .map(|m| {
            format!(
                "<p><strong>Additional Message:</strong><br>{}</p>\n",
                escape_html(m).replace('\n', "<br>")
            )
        })
        .unwrap_or_default();

    let html = format!(
        "<h2>New Meeting Request</h2>\n\
         <p>You have received a new personalized pricing consultation request from {company}.</p>\n\
         <h3>Company Details</h3>\n\
         <p><strong>Company Name:</strong> {company}</p>\n\
         <p><strong>Company Size:</strong> {size}</p>\n\
         <h3>Contact Information</h3>\n\
         <p><strong>Contact Name:</strong> {contact}</p>\n\
         <p><strong>Email:</strong> {email}</p>\n\
         <p><strong>Phone:</strong> {phone}</p>\n\
         <h3>Meeting Details</h3>\n\
         <p><strong>Preferred Date:</strong> {date}</p>\n\
         <p><strong>Preferred Time:</strong> {time}</p>\n\
         <p><strong>Time Zone:</strong> {zone}</p>\n\
         {services}{message}\
         <p>Please respond to this inquiry within 24 hours.</p>\n",
        size = booking.company_size.as_str(),
        contact = escape_html(&booking.contact_name),
        email = escape_html(&booking.email),
        phone = escape_html(&booking.phone_number),
        time = booking.preferred_time,
        zone = booking.time_zone.as_str(),
    );

    OutgoingEmail {
        from: NOTIFICATION_FROM.to_string(),
        to: owner_email.to_string(),
        subject: format!("New Meeting Request: {}", booking.company_name),
        html,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::booking::types::{CompanySize, Service, TimeZone};
    use chrono::NaiveDate;

    fn booking() -> ValidatedBooking {
        ValidatedBooking {
            company_name: "Stitch & Co".to_string(),
            contact_name: "Ana <Admin>".to_string(),
            email: "ana@stitch.example".to_string(),
            phone_number: "5551234567".to_string(),
            company_size: CompanySize::Small,
            preferred_date: NaiveDate::from_ymd_opt(2026, 3, 5).unwrap(),
            time_zone: TimeZone::CentralEuropean,
            preferred_time: "14:00".parse().unwrap(),
            message: None,
            services: vec![Service::CustomMannequin, Service::ApiAccess],
        }
    }

    #[test]
    fn test_escape_html() {
        assert_eq!(escape_html(r#"<a href="x">'&'</a>"#), "&lt;a href=&quot;x&quot;&gt;&#39;&amp;&#39;&lt;/a&gt;");
    }

    #[test]
    fn test_compose_notification() {
        let email = compose_notification(&booking(), "owner@example.com");
        assert_eq!(email.to, "owner@example.com");
        assert_eq!(email.from, NOTIFICATION_FROM);
        assert_eq!(email.subject, "New Meeting Request: Stitch & Co");

        assert!(email.html.contains("request from Stitch &amp; Co."));
        assert!(email.html.contains("Ana &lt;Admin&gt;"));
        assert!(email.html.contains("<strong>Preferred Date:</strong> Thursday, March 5, 2026"));
        assert!(email.html.contains("<strong>Preferred Time:</strong> 14:00"));
        assert!(email.html.contains("<strong>Time Zone:</strong> UTC+1"));
        assert!(email.html.contains("Custom Mannequin Development<br>API Access &amp; Development"));
        assert!(!email.html.contains("Additional Message"));
    }

    #[test]
    fn test_optional_sections() {
        let mut b = booking();
        b.services.clear();
        b.message = Some("line one\nline <two>".to_string());
        let email = compose_notification(&b, "owner@example.com");
        assert!(!email.html.contains("Selected Services"));
        assert!(email.html.contains("<br>line one<br>line &lt;two&gt;</p>"));
    }
}
