// Appointment module
// The agenda's appointment interface and its default data implementation

use std::fmt;
use std::ops::Deref;
use std::rc::Rc;

use chrono::{DateTime, Duration};
use chrono_tz::Tz;
use serde::{Deserialize, Serialize};

/// What an agenda needs to know about an appointment. Provide your own
/// implementation, or use [`AppointmentData`].
pub trait Appointment {
    fn start_time(&self) -> DateTime<Tz>;
    fn end_time(&self) -> DateTime<Tz>;
    fn whole_day(&self) -> bool;
    fn summary(&self) -> String;
    fn description(&self) -> Option<String>;
    fn location(&self) -> Option<String>;
    /// Appointments sharing a group are rendered alike by a host skin.
    fn group(&self) -> Option<String>;
}

/// Shared handle to an appointment, so appointments of any implementation
/// can live in an observable list. Equality is identity: two handles are
/// equal when they point at the same appointment.
#[derive(Clone)]
pub struct AppointmentRef(Rc<dyn Appointment>);

impl AppointmentRef {
    pub fn new(appointment: impl Appointment + 'static) -> Self {
        Self(Rc::new(appointment))
    }
}

impl Deref for AppointmentRef {
    type Target = dyn Appointment;

    fn deref(&self) -> &Self::Target {
        &*self.0
    }
}

impl PartialEq for AppointmentRef {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }
}

impl fmt::Debug for AppointmentRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("AppointmentRef")
            .field(&self.0.summary())
            .finish()
    }
}

/// Default appointment implementation: plain data with validation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AppointmentData {
    pub summary: String,
    pub description: Option<String>,
    pub location: Option<String>,
    #[serde(with = "crate::utils::zoned_serde")]
    pub start: DateTime<Tz>,
    #[serde(with = "crate::utils::zoned_serde")]
    pub end: DateTime<Tz>,
    pub whole_day: bool,
    pub group: Option<String>,
}

impl AppointmentData {
    /// Create an appointment with the required fields.
    ///
    /// # Examples
    /// ```
    /// use agenda_controls::models::appointment::AppointmentData;
    /// use chrono::TimeZone;
    /// use chrono_tz::Europe::Amsterdam;
    ///
    /// let start = Amsterdam.with_ymd_and_hms(2024, 3, 1, 9, 0, 0).unwrap();
    /// let end = Amsterdam.with_ymd_and_hms(2024, 3, 1, 10, 0, 0).unwrap();
    /// let appointment = AppointmentData::new("Standup", start, end).unwrap();
    /// ```
    pub fn new(
        summary: impl Into<String>,
        start: DateTime<Tz>,
        end: DateTime<Tz>,
    ) -> Result<Self, String> {
        let appointment = Self {
            summary: summary.into(),
            description: None,
            location: None,
            start,
            end,
            whole_day: false,
            group: None,
        };
        appointment.validate()?;
        Ok(appointment)
    }

    /// Create a builder for constructing appointments with optional fields.
    pub fn builder() -> AppointmentBuilder {
        AppointmentBuilder::new()
    }

    /// Validate the appointment.
    pub fn validate(&self) -> Result<(), String> {
        if self.summary.trim().is_empty() {
            return Err("Appointment summary cannot be empty".to_string());
        }
        if self.end <= self.start {
            return Err("Appointment end time must be after start time".to_string());
        }
        Ok(())
    }

    /// Get the duration of the appointment.
    pub fn duration(&self) -> Duration {
        self.end - self.start
    }
}

impl Appointment for AppointmentData {
    fn start_time(&self) -> DateTime<Tz> {
        self.start
    }

    fn end_time(&self) -> DateTime<Tz> {
        self.end
    }

    fn whole_day(&self) -> bool {
        self.whole_day
    }

    fn summary(&self) -> String {
        self.summary.clone()
    }

    fn description(&self) -> Option<String> {
        self.description.clone()
    }

    fn location(&self) -> Option<String> {
        self.location.clone()
    }

    fn group(&self) -> Option<String> {
        self.group.clone()
    }
}

/// Builder for creating appointments with optional fields
pub struct AppointmentBuilder {
    summary: Option<String>,
    description: Option<String>,
    location: Option<String>,
    start: Option<DateTime<Tz>>,
    end: Option<DateTime<Tz>>,
    whole_day: bool,
    group: Option<String>,
}

impl AppointmentBuilder {
    pub fn new() -> Self {
        Self {
            summary: None,
            description: None,
            location: None,
            start: None,
            end: None,
            whole_day: false,
            group: None,
        }
    }

    pub fn summary(mut self, summary: impl Into<String>) -> Self {
        self.summary = Some(summary.into());
        self
    }

    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn location(mut self, location: impl Into<String>) -> Self {
        self.location = Some(location.into());
        self
    }

    pub fn start(mut self, start: DateTime<Tz>) -> Self {
        self.start = Some(start);
        self
    }

    pub fn end(mut self, end: DateTime<Tz>) -> Self {
        self.end = Some(end);
        self
    }

    pub fn whole_day(mut self, whole_day: bool) -> Self {
        self.whole_day = whole_day;
        self
    }

    pub fn group(mut self, group: impl Into<String>) -> Self {
        self.group = Some(group.into());
        self
    }

    pub fn build(self) -> Result<AppointmentData, String> {
        let appointment = AppointmentData {
            summary: self.summary.ok_or("Appointment summary is required")?,
            description: self.description,
            location: self.location,
            start: self.start.ok_or("Appointment start time is required")?,
            end: self.end.ok_or("Appointment end time is required")?,
            whole_day: self.whole_day,
            group: self.group,
        };
        appointment.validate()?;
        Ok(appointment)
    }
}

impl Default for AppointmentBuilder {
    fn default() -> Self {
        Self::new()
    }
}
