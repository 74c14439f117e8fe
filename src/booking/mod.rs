//! Booking form intake and owner notification

pub mod email;
pub mod mailer;
pub mod service;
pub mod types;
pub mod validation;

pub use email::{compose_notification, escape_html, OutgoingEmail, NOTIFICATION_FROM};
pub use mailer::{MailCredentials, MailError, Mailer, SmtpMailer};
pub use service::{BookingOutcome, BookingResponse, BookingService, Delivery};
pub use types::{BookingRequest, CompanySize, InvalidTimeSlot, Service, TimeSlot, TimeZone};
pub use validation::{validate, FieldError, ValidatedBooking, ValidationErrors};
