// Agenda module
// Data model for an agenda control: appointments plus the displayed timeframe

use chrono::{DateTime, Duration, NaiveDate, NaiveTime, Utc};
use chrono_tz::Tz;

use crate::convert::ConversionContext;
use crate::models::appointment::{Appointment, AppointmentRef};
use crate::observable::{ObservableList, Slot};
use crate::utils::date;

/// The model side of an agenda control.
///
/// Holds the observable appointment list a skin renders, the conversion
/// context (time zone and first day of the week), and the date anchoring the
/// displayed timeframe: a week skin shows the week containing that date, a
/// month skin the month containing it.
pub struct Agenda {
    appointments: ObservableList<AppointmentRef>,
    context: Slot<ConversionContext>,
    displayed: Slot<DateTime<Tz>>,
}

impl Agenda {
    /// Create an agenda with a default context, displaying today.
    pub fn new() -> Self {
        Self {
            appointments: ObservableList::new(),
            context: Slot::with_value(ConversionContext::default()),
            displayed: Slot::with_value(Utc::now().with_timezone(&Tz::UTC)),
        }
    }

    pub fn with_context(self, context: ConversionContext) -> Self {
        self.context.set(Some(context));
        self
    }

    pub fn with_displayed(self, displayed: DateTime<Tz>) -> Self {
        self.displayed.set(Some(displayed));
        self
    }

    pub fn appointments(&self) -> &ObservableList<AppointmentRef> {
        &self.appointments
    }

    pub fn context(&self) -> &Slot<ConversionContext> {
        &self.context
    }

    pub fn set_context(&self, context: ConversionContext) {
        self.context.set(Some(context));
    }

    /// The date anchoring the displayed timeframe.
    pub fn displayed(&self) -> &Slot<DateTime<Tz>> {
        &self.displayed
    }

    pub fn set_displayed(&self, displayed: DateTime<Tz>) {
        self.displayed.set(Some(displayed));
    }

    /// Add an appointment and return the handle identifying it in the list.
    pub fn add_appointment(&self, appointment: impl Appointment + 'static) -> AppointmentRef {
        let handle = AppointmentRef::new(appointment);
        self.appointments.push(handle.clone());
        handle
    }

    pub fn remove_appointment(&self, appointment: &AppointmentRef) -> bool {
        self.appointments.remove_item(appointment)
    }

    /// The displayed day, or `None` when no date is displayed.
    pub fn displayed_day(&self) -> Option<NaiveDate> {
        Some(self.displayed.get()?.date_naive())
    }

    /// The seven days of the displayed week, honoring the context's first
    /// day of the week.
    pub fn displayed_week(&self) -> Option<Vec<NaiveDate>> {
        let displayed = self.displayed.get()?;
        let context = self.context.get().expect("agenda context is not set");
        Some(date::week_days(displayed.date_naive(), context.first_weekday))
    }

    /// Every day of the displayed month.
    pub fn displayed_month(&self) -> Option<Vec<NaiveDate>> {
        Some(date::month_days(self.displayed.get()?.date_naive()))
    }

    /// Appointments overlapping the given day, in list order.
    pub fn appointments_on(&self, day: NaiveDate) -> Vec<AppointmentRef> {
        self.appointments
            .snapshot()
            .into_iter()
            .filter(|appointment| {
                let start_day = appointment.start_time().date_naive();
                let end = appointment.end_time();
                // an appointment ending exactly at midnight does not spill
                // into the day it ends on
                let end_day = if end.time() == NaiveTime::MIN && end.date_naive() > start_day {
                    end.date_naive() - Duration::days(1)
                } else {
                    end.date_naive()
                };
                start_day <= day && day <= end_day
            })
            .collect()
    }
}

impl Default for Agenda {
    fn default() -> Self {
        Self::new()
    }
}
