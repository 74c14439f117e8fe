//! Booking request validation
//!
//! Checks every field and reports all failures at once with the same
//! messages the booking form shows. Nothing is submitted unless every
//! field passes.

use chrono::{DateTime, NaiveDate};
use serde::Serialize;

use super::types::{BookingRequest, CompanySize, Service, TimeSlot, TimeZone};

pub const COMPANY_NAME_MESSAGE: &str = "Company name must be at least 2 characters.";
pub const CONTACT_NAME_MESSAGE: &str = "Contact name must be at least 2 characters.";
pub const EMAIL_MESSAGE: &str = "Please enter a valid email address.";
pub const PHONE_MESSAGE: &str = "Please enter a valid phone number.";
pub const COMPANY_SIZE_MESSAGE: &str = "Please select your company size.";
pub const DATE_MESSAGE: &str = "Please select a preferred date for the meeting.";
pub const TIME_ZONE_MESSAGE: &str = "Please select your time zone.";
pub const TIME_MESSAGE: &str = "Please select your preferred time.";
pub const SERVICES_MESSAGE: &str = "Please select services from the list provided.";

/// A single field failure
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldError {
    pub field: &'static str,
    pub message: &'static str,
}

/// All field failures for one request
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("booking request has {} invalid field(s)", .0.len())]
pub struct ValidationErrors(pub Vec<FieldError>);

impl ValidationErrors {
    pub fn fields(&self) -> &[FieldError] {
        &self.0
    }

    pub fn message_for(&self, field: &str) -> Option<&'static str> {
        self.0.iter().find(|e| e.field == field).map(|e| e.message)
    }
}

/// A booking whose every field passed validation
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ValidatedBooking {
    pub company_name: String,
    pub contact_name: String,
    pub email: String,
    pub phone_number: String,
    pub company_size: CompanySize,
    pub preferred_date: NaiveDate,
    pub time_zone: TimeZone,
    pub preferred_time: TimeSlot,
    pub message: Option<String>,
    pub services: Vec<Service>,
}

/// Validate a raw request
pub fn validate(request: &BookingRequest) -> Result<ValidatedBooking, ValidationErrors> {
    let mut errors = Vec::new();
    let mut fail = |field, message| errors.push(FieldError { field, message });

    let company_name = request.company_name.trim();
    let contact_name = request.contact_name.trim();
    let email = request.email.trim();
    let phone_number = request.phone_number.trim();

    if company_name.chars().count() < 2 {
        fail("companyName", COMPANY_NAME_MESSAGE);
    }
    if contact_name.chars().count() < 2 {
        fail("contactName", CONTACT_NAME_MESSAGE);
    }
    if !is_valid_email(email) {
        fail("email", EMAIL_MESSAGE);
    }
    if phone_number.chars().count() < 10 {
        fail("phoneNumber", PHONE_MESSAGE);
    }

    let company_size = lookup(&request.company_size, CompanySize::all(), CompanySize::as_str);
    if company_size.is_none() {
        fail("companySize", COMPANY_SIZE_MESSAGE);
    }
    let preferred_date = request.preferred_date.as_deref().and_then(parse_date);
    if preferred_date.is_none() {
        fail("preferredDate", DATE_MESSAGE);
    }
    let time_zone = lookup(&request.time_zone, TimeZone::all(), TimeZone::as_str);
    if time_zone.is_none() {
        fail("timeZone", TIME_ZONE_MESSAGE);
    }
    let preferred_time = request
        .preferred_time
        .as_deref()
        .and_then(|t| t.parse::<TimeSlot>().ok());
    if preferred_time.is_none() {
        fail("preferredTime", TIME_MESSAGE);
    }

    let requested = request.services.as_deref().unwrap_or_default();
    let services: Vec<Service> = requested.iter().filter_map(|s| Service::parse(s)).collect();
    if services.len() != requested.len() {
        fail("services", SERVICES_MESSAGE);
    }

    match (company_size, preferred_date, time_zone, preferred_time) {
        (Some(company_size), Some(preferred_date), Some(time_zone), Some(preferred_time))
            if errors.is_empty() =>
        {
            let message = request
                .message
                .as_deref()
                .map(str::trim)
                .filter(|m| !m.is_empty())
                .map(str::to_string);
            Ok(ValidatedBooking {
                company_name: company_name.to_string(),
                contact_name: contact_name.to_string(),
                email: email.to_string(),
                phone_number: phone_number.to_string(),
                company_size,
                preferred_date,
                time_zone,
                preferred_time,
                message,
                services,
            })
        }
        _ => Err(ValidationErrors(errors)),
    }
}

fn lookup<T: Copy>(value: &Option<String>, all: &[T], as_str: fn(&T) -> &'static str) -> Option<T> {
    let value = value.as_deref()?.trim();
    all.iter().copied().find(|v| as_str(v) == value)
}

/// Accept a full timestamp (date taken in its own offset) or a bare date
fn parse_date(value: &str) -> Option<NaiveDate> {
    let value = value.trim();
    DateTime::parse_from_rfc3339(value)
        .map(|dt| dt.date_naive())
        .or_else(|_| NaiveDate::parse_from_str(value, "%Y-%m-%d"))
        .ok()
}

/// `local@domain.tld` with no whitespace, checked by the mail address parser
fn is_valid_email(value: &str) -> bool {
    let value = value.trim();
    let Some((_, domain)) = value.rsplit_once('@') else {
        return false;
    };
    let has_tld = domain
        .rsplit_once('.')
        .is_some_and(|(host, tld)| !host.is_empty() && tld.len() >= 2);
    has_tld && value.parse::<lettre::Address>().is_ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_request() -> BookingRequest {
        BookingRequest {
            company_name: "Acme Apparel".to_string(),
            contact_name: "Sam Lee".to_string(),
            email: "sam@acme.example".to_string(),
            phone_number: "+1 555 123 4567".to_string(),
            company_size: Some("51-200".to_string()),
            preferred_date: Some("2026-11-03T00:00:00.000Z".to_string()),
            time_zone: Some("UTC-5".to_string()),
            preferred_time: Some("10:30".to_string()),
            message: Some("  Looking forward to it  ".to_string()),
            services: Some(vec![
                "3D Virtual Try-On Integration".to_string(),
                "api-access".to_string(),
            ]),
        }
    }

    #[test]
    fn test_valid_request() {
        let booking = validate(&valid_request()).unwrap();
        assert_eq!(booking.company_size, CompanySize::Medium);
        assert_eq!(booking.preferred_date, NaiveDate::from_ymd_opt(2026, 11, 3).unwrap());
        assert_eq!(booking.time_zone, TimeZone::Eastern);
        assert_eq!(booking.preferred_time.to_string(), "10:30");
        assert_eq!(booking.message.as_deref(), Some("Looking forward to it"));
        assert_eq!(booking.services, vec![Service::VirtualTryOn, Service::ApiAccess]);
    }

    #[test]
    fn test_empty_request_reports_every_required_field() {
        let err = validate(&BookingRequest::default()).unwrap_err();
        let fields: Vec<_> = err.fields().iter().map(|e| e.field).collect();
        assert_eq!(
            fields,
            vec![
                "companyName",
                "contactName",
                "email",
                "phoneNumber",
                "companySize",
                "preferredDate",
                "timeZone",
                "preferredTime",
            ]
        );
        assert_eq!(err.message_for("email"), Some(EMAIL_MESSAGE));
    }

    #[test]
    fn test_short_fields() {
        let mut req = valid_request();
        req.company_name = "A".to_string();
        req.phone_number = "555-1234".to_string();
        let err = validate(&req).unwrap_err();
        assert_eq!(err.message_for("companyName"), Some(COMPANY_NAME_MESSAGE));
        assert_eq!(err.message_for("phoneNumber"), Some(PHONE_MESSAGE));
        assert_eq!(err.fields().len(), 2);
    }

    #[test]
    fn test_whitespace_padding_not_counted() {
        let mut req = valid_request();
        req.company_name = "  ".to_string();
        req.contact_name = " S ".to_string();
        req.phone_number = "  555 1234  ".to_string();
        let err = validate(&req).unwrap_err();
        assert_eq!(err.message_for("companyName"), Some(COMPANY_NAME_MESSAGE));
        assert_eq!(err.message_for("contactName"), Some(CONTACT_NAME_MESSAGE));
        assert_eq!(err.message_for("phoneNumber"), Some(PHONE_MESSAGE));
        assert_eq!(err.fields().len(), 3);

        let mut req = valid_request();
        req.company_name = "  Acme  ".to_string();
        assert_eq!(validate(&req).unwrap().company_name, "Acme");
    }

    #[test]
    fn test_email_formats() {
        assert!(is_valid_email("a.b@example.com"));
        assert!(!is_valid_email("example.com"));
        assert!(!is_valid_email("a@localhost"));
        assert!(!is_valid_email("a b@example.com"));
        assert!(!is_valid_email("@example.com"));
    }

    #[test]
    fn test_plain_date_accepted() {
        let mut req = valid_request();
        req.preferred_date = Some("2026-12-24".to_string());
        assert_eq!(
            validate(&req).unwrap().preferred_date,
            NaiveDate::from_ymd_opt(2026, 12, 24).unwrap()
        );
        req.preferred_date = Some("next tuesday".to_string());
        assert_eq!(validate(&req).unwrap_err().message_for("preferredDate"), Some(DATE_MESSAGE));
    }

    #[test]
    fn test_unknown_vocabulary() {
        let mut req = valid_request();
        req.company_size = Some("1000+".to_string());
        req.time_zone = Some("UTC+3".to_string());
        req.preferred_time = Some("19:00".to_string());
        req.services = Some(vec!["consulting".to_string()]);
        let err = validate(&req).unwrap_err();
        assert_eq!(err.message_for("companySize"), Some(COMPANY_SIZE_MESSAGE));
        assert_eq!(err.message_for("timeZone"), Some(TIME_ZONE_MESSAGE));
        assert_eq!(err.message_for("preferredTime"), Some(TIME_MESSAGE));
        assert_eq!(err.message_for("services"), Some(SERVICES_MESSAGE));
    }

    #[test]
    fn test_blank_message_dropped() {
        let mut req = valid_request();
        req.message = Some("   ".to_string());
        req.services = None;
        let booking = validate(&req).unwrap();
        assert!(booking.message.is_none());
        assert!(booking.services.is_empty());
    }
}
