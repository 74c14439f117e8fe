//! Booking intake
//!
//! Logs each validated booking, then attempts one notification send. The
//! booking is accepted whether or not the email goes out.

use std::sync::Arc;

use serde::Serialize;
use uuid::Uuid;

use super::email::compose_notification;
use super::mailer::Mailer;
use super::validation::ValidatedBooking;

pub const SENT_MESSAGE: &str = "Booking confirmation email sent successfully";
pub const SKIPPED_MESSAGE: &str =
    "Booking received. Email sending skipped - credentials not configured.";
pub const FAILED_MESSAGE: &str = "Booking received but email notification failed";

/// What happened to the notification email
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Delivery {
    Sent { message_id: String },
    /// No mailer configured
    Skipped,
    Failed { error: String },
}

/// Result of accepting a booking
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BookingOutcome {
    pub booking_id: Uuid,
    pub delivery: Delivery,
}

/// JSON body returned to the booking form
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BookingResponse {
    pub message: String,
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email_error: Option<String>,
    pub booking_id: Uuid,
}

impl From<&BookingOutcome> for BookingResponse {
    fn from(outcome: &BookingOutcome) -> Self {
        let (message, email_error) = match &outcome.delivery {
            Delivery::Sent { .. } => (SENT_MESSAGE, None),
            Delivery::Skipped => (SKIPPED_MESSAGE, None),
            Delivery::Failed { error } => (FAILED_MESSAGE, Some(error.clone())),
        };
        Self {
            message: message.to_string(),
            success: true,
            email_error,
            booking_id: outcome.booking_id,
        }
    }
}

/// Accepts bookings and relays notifications to the owner
#[derive(Clone)]
pub struct BookingService {
    mailer: Option<Arc<dyn Mailer>>,
    owner_email: String,
}

impl BookingService {
    pub fn new(mailer: Option<Arc<dyn Mailer>>, owner_email: impl Into<String>) -> Self {
        Self {
            mailer,
            owner_email: owner_email.into(),
        }
    }

    pub fn mail_enabled(&self) -> bool {
        self.mailer.is_some()
    }

    pub fn owner_email(&self) -> &str {
        &self.owner_email
    }

    pub async fn submit(&self, booking: &ValidatedBooking) -> BookingOutcome {
        let booking_id = Uuid::new_v4();
        tracing::info!(
            %booking_id,
            company = %booking.company_name,
            contact = %booking.contact_name,
            email = %booking.email,
            date = %booking.preferred_date,
            time = %booking.preferred_time,
            time_zone = booking.time_zone.as_str(),
            services = booking.services.len(),
            "Booking received"
        );

        let Some(mailer) = &self.mailer else {
            tracing::info!(%booking_id, "Mail credentials not configured, skipping notification");
            return BookingOutcome {
                booking_id,
                delivery: Delivery::Skipped,
            };
        };

        let email = compose_notification(booking, &self.owner_email);
        let delivery = match mailer.send(&email).await {
            Ok(message_id) => {
                tracing::info!(%booking_id, %message_id, "Booking notification sent");
                Delivery::Sent { message_id }
            }
            Err(e) => {
                tracing::warn!(%booking_id, error = %e, "Booking notification failed");
                Delivery::Failed {
                    error: e.to_string(),
                }
            }
        };

        BookingOutcome {
            booking_id,
            delivery,
        }
    }
}

#[cfg(test)]
pub(crate) mod testing {
    use std::sync::Mutex;

    use futures_util::future::BoxFuture;
    use futures_util::FutureExt;

    use crate::booking::email::OutgoingEmail;
    use crate::booking::mailer::{MailError, Mailer};

    /// Records sent emails; optionally fails every send
    #[derive(Default)]
    pub struct RecordingMailer {
        pub sent: Mutex<Vec<OutgoingEmail>>,
        pub fail: bool,
    }

    impl RecordingMailer {
        pub fn failing() -> Self {
            Self {
                sent: Mutex::new(Vec::new()),
                fail: true,
            }
        }

        pub fn sent_count(&self) -> usize {
            self.sent.lock().map(|s| s.len()).unwrap_or(0)
        }
    }

    impl Mailer for RecordingMailer {
        fn send<'a>(&'a self, email: &'a OutgoingEmail) -> BoxFuture<'a, Result<String, MailError>> {
            async move {
                if self.fail {
                    let bad: Result<lettre::Address, _> = "nope".parse();
                    return Err(MailError::from(bad.unwrap_err()));
                }
                self.sent.lock().unwrap().push(email.clone());
                Ok("<test@localhost>".to_string())
            }
            .boxed()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::testing::RecordingMailer;
    use super::*;
    use crate::booking::types::{CompanySize, TimeZone};
    use chrono::NaiveDate;

    fn booking() -> ValidatedBooking {
        ValidatedBooking {
            company_name: "Acme".to_string(),
            contact_name: "Sam".to_string(),
            email: "sam@acme.example".to_string(),
            phone_number: "5551234567".to_string(),
            company_size: CompanySize::Micro,
            preferred_date: NaiveDate::from_ymd_opt(2026, 11, 3).unwrap(),
            time_zone: TimeZone::Utc,
            preferred_time: "09:00".parse().unwrap(),
            message: None,
            services: Vec::new(),
        }
    }

    #[tokio::test]
    async fn test_sent() {
        let mailer = Arc::new(RecordingMailer::default());
        let service = BookingService::new(Some(mailer.clone() as Arc<dyn Mailer>), "owner@example.com");
        let outcome = service.submit(&booking()).await;

        assert!(matches!(outcome.delivery, Delivery::Sent { .. }));
        assert_eq!(mailer.sent_count(), 1);
        let sent = mailer.sent.lock().unwrap();
        assert_eq!(sent[0].to, "owner@example.com");
        assert_eq!(sent[0].subject, "New Meeting Request: Acme");

        let response = BookingResponse::from(&outcome);
        assert_eq!(response.message, SENT_MESSAGE);
        assert!(response.success);
    }

    #[tokio::test]
    async fn test_skipped_without_mailer() {
        let service = BookingService::new(None, "owner@example.com");
        assert!(!service.mail_enabled());
        let outcome = service.submit(&booking()).await;
        assert_eq!(outcome.delivery, Delivery::Skipped);

        let json = serde_json::to_value(BookingResponse::from(&outcome)).unwrap();
        assert_eq!(json["message"], SKIPPED_MESSAGE);
        assert_eq!(json["success"], true);
        assert!(json.get("emailError").is_none());
    }

    #[tokio::test]
    async fn test_failed_send_still_succeeds() {
        let mailer = Arc::new(RecordingMailer::failing());
        let service = BookingService::new(Some(mailer.clone() as Arc<dyn Mailer>), "owner@example.com");
        let outcome = service.submit(&booking()).await;

        assert!(matches!(outcome.delivery, Delivery::Failed { .. }));
        assert_eq!(mailer.sent_count(), 0);

        let json = serde_json::to_value(BookingResponse::from(&outcome)).unwrap();
        assert_eq!(json["message"], FAILED_MESSAGE);
        assert_eq!(json["success"], true);
        assert!(json["emailError"].as_str().is_some_and(|e| !e.is_empty()));
        assert!(json["bookingId"].is_string());
    }
}
