// Picker module
// Data model for a date-time picker exposing both date representations

use std::rc::Rc;

use chrono::{DateTime, NaiveDateTime};
use chrono_tz::Tz;

use crate::convert::{ConversionContext, ConvertError};
use crate::mirror::{ContextProvider, ListMirror, ValueMirror};
use crate::observable::{ObservableList, Slot};

/// The model side of a date-time picker control.
///
/// The picked value and the selected dates exist in two representations at
/// once: zone-aware for callers that need anchored instants, wall-clock for
/// the rest. Writing either representation updates the other through the
/// mirrors; a UI binding can observe whichever side it prefers.
///
/// # Examples
/// ```
/// use agenda_controls::convert::ConversionContext;
/// use agenda_controls::models::picker::DateTimePicker;
/// use chrono::TimeZone;
/// use chrono_tz::Europe::Amsterdam;
///
/// let picker = DateTimePicker::new();
/// picker.set_context(ConversionContext::new(Amsterdam));
///
/// let picked = Amsterdam.with_ymd_and_hms(2024, 3, 1, 0, 0, 0).unwrap();
/// picker.set_zoned_value(Some(picked));
/// assert_eq!(picker.naive_value().get(), Some(picked.naive_local()));
/// ```
pub struct DateTimePicker {
    context: Slot<ConversionContext>,
    value: ValueMirror,
    dates: ListMirror,
}

impl DateTimePicker {
    /// Create a picker with a default context and nothing picked.
    pub fn new() -> Self {
        let context: Slot<ConversionContext> = Slot::with_value(ConversionContext::default());
        let provider: ContextProvider = {
            let context = context.clone();
            Rc::new(move || context.get().expect("picker conversion context is not set"))
        };
        let value = ValueMirror::attach(Slot::new(), Rc::clone(&provider));
        let dates = ListMirror::attach(ObservableList::new(), provider);
        Self { context, value, dates }
    }

    pub fn with_value(self, value: DateTime<Tz>) -> Self {
        self.set_zoned_value(Some(value));
        self
    }

    pub fn context(&self) -> &Slot<ConversionContext> {
        &self.context
    }

    pub fn set_context(&self, context: ConversionContext) {
        self.context.set(Some(context));
    }

    /// The picked value, zone-aware representation.
    pub fn zoned_value(&self) -> &Slot<DateTime<Tz>> {
        self.value.zoned()
    }

    /// The picked value, wall-clock representation.
    pub fn naive_value(&self) -> &Slot<NaiveDateTime> {
        self.value.naive()
    }

    pub fn set_zoned_value(&self, value: Option<DateTime<Tz>>) {
        self.value.set_zoned(value);
    }

    /// Set the picked value from the wall-clock side. Fails without touching
    /// either slot when the value does not exist in the context's time zone.
    pub fn set_naive_value(&self, value: Option<NaiveDateTime>) -> Result<(), ConvertError> {
        self.value.set_naive(value)
    }

    /// The selected dates, zone-aware representation.
    pub fn dates(&self) -> &ObservableList<DateTime<Tz>> {
        self.dates.zoned()
    }

    /// The selected dates, wall-clock representation.
    pub fn naive_dates(&self) -> &ObservableList<NaiveDateTime> {
        self.dates.naive()
    }

    /// Select a date unless already selected. Returns whether it was added.
    pub fn add_date(&self, date: DateTime<Tz>) -> bool {
        if self.dates.zoned().contains(&date) {
            return false;
        }
        self.dates.zoned().push(date);
        true
    }

    pub fn remove_date(&self, date: &DateTime<Tz>) -> bool {
        self.dates.zoned().remove_item(date)
    }

    /// Select a date given in the wall-clock representation.
    pub fn add_naive_date(&self, date: NaiveDateTime) -> Result<bool, ConvertError> {
        self.dates.add_naive(date)
    }

    pub fn remove_naive_date(&self, date: &NaiveDateTime) -> bool {
        self.dates.remove_naive(date)
    }
}

impl Default for DateTimePicker {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{NaiveDate, TimeZone};
    use chrono_tz::Europe::Amsterdam;

    fn naive(d: u32, h: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2024, 3, d)
            .unwrap()
            .and_hms_opt(h, 0, 0)
            .unwrap()
    }

    fn zoned(d: u32, h: u32) -> DateTime<Tz> {
        Amsterdam.with_ymd_and_hms(2024, 3, d, h, 0, 0).unwrap()
    }

    fn amsterdam_picker() -> DateTimePicker {
        let picker = DateTimePicker::new();
        picker.set_context(ConversionContext::new(Amsterdam));
        picker
    }

    #[test]
    fn test_value_is_mirrored_both_ways() {
        let picker = amsterdam_picker();

        picker.set_zoned_value(Some(zoned(1, 10)));
        assert_eq!(picker.naive_value().get(), Some(naive(1, 10)));

        picker.set_naive_value(Some(naive(2, 9))).unwrap();
        assert_eq!(picker.zoned_value().get(), Some(zoned(2, 9)));

        picker.set_zoned_value(None);
        assert!(picker.naive_value().is_none());
    }

    #[test]
    fn test_date_selection_is_mirrored() {
        let picker = amsterdam_picker();

        assert!(picker.add_date(zoned(1, 0)));
        assert!(!picker.add_date(zoned(1, 0)));
        assert_eq!(picker.naive_dates().snapshot(), vec![naive(1, 0)]);

        assert!(picker.add_naive_date(naive(2, 0)).unwrap());
        assert_eq!(picker.dates().len(), 2);

        assert!(picker.remove_date(&zoned(1, 0)));
        assert_eq!(picker.naive_dates().snapshot(), vec![naive(2, 0)]);

        assert!(picker.remove_naive_date(&naive(2, 0)));
        assert!(picker.dates().is_empty());
    }

    #[test]
    fn test_with_value_constructor() {
        let picker = amsterdam_picker().with_value(zoned(15, 14));
        assert_eq!(picker.naive_value().get(), Some(naive(15, 14)));
    }

    #[test]
    #[should_panic(expected = "picker conversion context is not set")]
    fn test_cleared_context_fails_fast() {
        let picker = amsterdam_picker();
        picker.context().clear();
        // forwarding needs the context and must not silently drop the value
        let _ = picker.set_naive_value(Some(naive(1, 10)));
    }
}
