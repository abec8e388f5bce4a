//! Reservation domain entity

use chrono::{DateTime, Datelike, NaiveDateTime};
use serde::Serialize;

use crate::domain::{DomainError, DomainResult, SaveAction};

const INPUT_FORMATS: &[&str] = &[
    "%Y-%m-%dT%H:%M:%S",
    "%Y-%m-%d %H:%M:%S",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M",
];

/// A reservation for a party
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Reservation {
    id: Option<i32>,
    customer_id: Option<i32>,
    num_guests: i32,
    start_at: NaiveDateTime,
    notes: String,
}

impl Reservation {
    /// A new, unsaved reservation for `customer_id`.
    pub fn new(customer_id: i32, num_guests: i32, start_at: NaiveDateTime) -> DomainResult<Self> {
        let mut reservation = Self::unassigned(num_guests, start_at)?;
        reservation.customer_id = Some(customer_id);
        Ok(reservation)
    }

    /// A new reservation whose customer is assigned later with
    /// [`set_customer_id`](Self::set_customer_id).
    pub fn unassigned(num_guests: i32, start_at: NaiveDateTime) -> DomainResult<Self> {
        validate_num_guests(num_guests)?;
        Ok(Self {
            id: None,
            customer_id: None,
            num_guests,
            start_at,
            notes: String::new(),
        })
    }

    /// Rebuild a reservation from a stored row.
    pub fn from_row(
        id: i32,
        customer_id: i32,
        num_guests: i32,
        start_at: NaiveDateTime,
        notes: Option<String>,
    ) -> Self {
        Self {
            id: Some(id),
            customer_id: Some(customer_id),
            num_guests,
            start_at,
            notes: notes.unwrap_or_default(),
        }
    }

    pub fn with_notes(mut self, notes: &str) -> Self {
        self.set_notes(Some(notes));
        self
    }

    pub fn id(&self) -> Option<i32> {
        self.id
    }

    pub fn is_persisted(&self) -> bool {
        self.id.is_some()
    }

    pub fn save_action(&self) -> SaveAction {
        SaveAction::for_id(self.id)
    }

    pub(crate) fn mark_persisted(&mut self, id: i32) {
        self.id = Some(id);
    }

    pub fn customer_id(&self) -> Option<i32> {
        self.customer_id
    }

    /// Assign the owning customer. Only allowed once, even with the same value.
    pub fn set_customer_id(&mut self, customer_id: i32) -> DomainResult<()> {
        if self.customer_id.is_some() {
            return Err(DomainError::validation("Cannot reassign customer_id once set"));
        }
        self.customer_id = Some(customer_id);
        Ok(())
    }

    pub fn num_guests(&self) -> i32 {
        self.num_guests
    }

    pub fn set_num_guests(&mut self, num_guests: i32) -> DomainResult<()> {
        validate_num_guests(num_guests)?;
        self.num_guests = num_guests;
        Ok(())
    }

    pub fn start_at(&self) -> NaiveDateTime {
        self.start_at
    }

    pub fn set_start_at(&mut self, start_at: NaiveDateTime) {
        self.start_at = start_at;
    }

    /// Parse and assign a start time such as `2024-01-01T18:30:00`.
    pub fn set_start_at_str(&mut self, input: &str) -> DomainResult<()> {
        self.start_at = parse_start_at(input)?;
        Ok(())
    }

    pub fn notes(&self) -> &str {
        &self.notes
    }

    pub fn set_notes(&mut self, notes: Option<&str>) {
        self.notes = notes.unwrap_or_default().to_owned();
    }

    /// Start time for display, e.g. "January 1st 2024, 6:30 pm".
    pub fn formatted_start_at(&self) -> String {
        let day = self.start_at.day();
        format!(
            "{} {}{} {}",
            self.start_at.format("%B"),
            day,
            ordinal_suffix(day),
            self.start_at.format("%Y, %-I:%M %P"),
        )
    }
}

fn validate_num_guests(num_guests: i32) -> DomainResult<()> {
    if num_guests < 1 {
        return Err(DomainError::validation(format!(
            "Number of guests must be at least 1, got {}",
            num_guests
        )));
    }
    Ok(())
}

/// Parse a start time. Accepts ISO-8601 local times and RFC 3339 timestamps;
/// the latter keep their wall-clock time.
pub fn parse_start_at(input: &str) -> DomainResult<NaiveDateTime> {
    let input = input.trim();
    if let Ok(dt) = DateTime::parse_from_rfc3339(input) {
        return Ok(dt.naive_local());
    }
    INPUT_FORMATS
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(input, fmt).ok())
        .ok_or_else(|| DomainError::validation(format!("start_at must be a date, got {:?}", input)))
}

fn ordinal_suffix(day: u32) -> &'static str {
    match (day % 10, day % 100) {
        (_, 11..=13) => "th",
        (1, _) => "st",
        (2, _) => "nd",
        (3, _) => "rd",
        _ => "th",
    }
}

// ── Tests ──────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn at(y: i32, m: u32, d: u32, h: u32, min: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(y, m, d)
            .unwrap()
            .and_hms_opt(h, min, 0)
            .unwrap()
    }

    fn sample_reservation() -> Reservation {
        Reservation::new(1, 4, at(2024, 1, 1, 18, 30)).unwrap()
    }

    #[test]
    fn new_reservation_is_transient() {
        let r = sample_reservation();
        assert_eq!(r.id(), None);
        assert_eq!(r.save_action(), SaveAction::Insert);
        assert_eq!(r.customer_id(), Some(1));
        assert_eq!(r.num_guests(), 4);
        assert_eq!(r.notes(), "");
    }

    #[test]
    fn zero_or_negative_guests_rejected() {
        assert!(matches!(
            Reservation::new(1, 0, at(2024, 1, 1, 12, 0)),
            Err(DomainError::Validation(_))
        ));

        let mut r = sample_reservation();
        assert!(r.set_num_guests(0).is_err());
        assert!(r.set_num_guests(-3).is_err());
        assert_eq!(r.num_guests(), 4);

        r.set_num_guests(1).unwrap();
        assert_eq!(r.num_guests(), 1);
    }

    #[test]
    fn customer_id_cannot_be_reassigned() {
        let mut r = sample_reservation();
        let err = r.set_customer_id(1).unwrap_err();
        assert_eq!(err.status_code(), 400);
        assert!(r.set_customer_id(2).is_err());
        assert_eq!(r.customer_id(), Some(1));
    }

    #[test]
    fn unassigned_reservation_takes_customer_once() {
        let mut r = Reservation::unassigned(2, at(2024, 3, 2, 12, 0)).unwrap();
        assert_eq!(r.customer_id(), None);
        r.set_customer_id(5).unwrap();
        assert_eq!(r.customer_id(), Some(5));
        assert!(r.set_customer_id(5).is_err());
    }

    #[test]
    fn start_at_rejects_non_dates() {
        let mut r = sample_reservation();
        assert!(matches!(
            r.set_start_at_str("not a date"),
            Err(DomainError::Validation(_))
        ));
        assert!(r.set_start_at_str("2024-13-45T99:00:00").is_err());
        assert_eq!(r.start_at(), at(2024, 1, 1, 18, 30));
    }

    #[test]
    fn start_at_round_trips() {
        let mut r = sample_reservation();
        r.set_start_at_str("2024-02-29T07:05:00").unwrap();
        assert_eq!(r.start_at(), at(2024, 2, 29, 7, 5));

        r.set_start_at_str("2024-06-01T20:15:00+02:00").unwrap();
        assert_eq!(r.start_at(), at(2024, 6, 1, 20, 15));

        r.set_start_at(at(2025, 12, 31, 23, 59));
        assert_eq!(r.start_at(), at(2025, 12, 31, 23, 59));
    }

    #[test]
    fn notes_default_to_empty() {
        let mut r = sample_reservation().with_notes("birthday");
        assert_eq!(r.notes(), "birthday");
        r.set_notes(None);
        assert_eq!(r.notes(), "");
    }

    #[test]
    fn formatted_start_at() {
        let r = sample_reservation();
        assert_eq!(r.formatted_start_at(), "January 1st 2024, 6:30 pm");

        let r = Reservation::new(1, 2, at(2023, 11, 12, 9, 5)).unwrap();
        assert_eq!(r.formatted_start_at(), "November 12th 2023, 9:05 am");

        let r = Reservation::new(1, 2, at(2023, 3, 22, 0, 0)).unwrap();
        assert_eq!(r.formatted_start_at(), "March 22nd 2023, 12:00 am");

        let r = Reservation::new(1, 2, at(2023, 5, 23, 12, 45)).unwrap();
        assert_eq!(r.formatted_start_at(), "May 23rd 2023, 12:45 pm");
    }

    #[test]
    fn ordinal_suffixes() {
        let cases = [
            (1, "st"),
            (2, "nd"),
            (3, "rd"),
            (4, "th"),
            (11, "th"),
            (12, "th"),
            (13, "th"),
            (21, "st"),
            (22, "nd"),
            (23, "rd"),
            (31, "st"),
        ];
        for (day, suffix) in cases {
            assert_eq!(ordinal_suffix(day), suffix, "day {}", day);
        }
    }
}
