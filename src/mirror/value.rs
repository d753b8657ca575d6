// Scalar mirror
// One zone-aware slot and one wall-clock slot holding the same moment

use std::cell::Cell;
use std::rc::Rc;

use chrono::{DateTime, NaiveDateTime};
use chrono_tz::Tz;

use super::ContextProvider;
use crate::convert::{self, ConvertError};
use crate::observable::Slot;

/// Keeps a zone-aware slot and a wall-clock slot equal under conversion.
///
/// The mirror owns the wall-clock side; the zone-aware slot is passed in by
/// the hosting control, which keeps managing its own notifications. Either
/// slot may also be written directly (e.g. by a UI binding) and the other
/// side follows.
///
/// Clearing either side clears the other: both slots are `None` or neither is.
pub struct ValueMirror {
    zoned: Slot<DateTime<Tz>>,
    naive: Slot<NaiveDateTime>,
    context: ContextProvider,
}

impl ValueMirror {
    /// Wire a mirror onto an existing zone-aware slot. The wall-clock slot is
    /// created here, initialized from the zoned slot's current value.
    ///
    /// A shared forwarding flag suppresses the echo: the write performed by
    /// one direction never triggers the opposite direction, so a single
    /// observed change produces exactly one downstream write.
    pub fn attach(zoned: Slot<DateTime<Tz>>, context: ContextProvider) -> Self {
        let naive: Slot<NaiveDateTime> = Slot::new();
        if let Some(initial) = zoned.get() {
            naive.set(Some(convert::naive_from_zoned(&initial)));
        }
        let forwarding = Rc::new(Cell::new(false));

        // zoned -> naive
        {
            let naive = naive.clone();
            let forwarding = Rc::clone(&forwarding);
            zoned.subscribe(move |_, new| {
                if forwarding.get() {
                    return;
                }
                forwarding.set(true);
                naive.set(new.map(convert::naive_from_zoned));
                forwarding.set(false);
            });
        }

        // naive -> zoned; clearing the wall-clock side clears the zoned side
        {
            let zoned = zoned.clone();
            let context = Rc::clone(&context);
            let forwarding = Rc::clone(&forwarding);
            naive.subscribe(move |_, new| {
                if forwarding.get() {
                    return;
                }
                let converted = new.map(|value| match convert::zoned_from_naive(*value, &context()) {
                    Ok(zoned) => zoned,
                    Err(err) => {
                        log::error!("cannot mirror wall-clock value into zoned slot: {err}");
                        panic!("unconvertible wall-clock value reached the mirror: {err}");
                    }
                });
                forwarding.set(true);
                zoned.set(converted);
                forwarding.set(false);
            });
        }

        Self { zoned, naive, context }
    }

    /// The zone-aware slot, as handed in by the host.
    pub fn zoned(&self) -> &Slot<DateTime<Tz>> {
        &self.zoned
    }

    /// The wall-clock slot owned by this mirror.
    pub fn naive(&self) -> &Slot<NaiveDateTime> {
        &self.naive
    }

    pub fn set_zoned(&self, value: Option<DateTime<Tz>>) {
        self.zoned.set(value);
    }

    /// Set the wall-clock side, validating convertibility under the current
    /// context BEFORE any slot is touched. On error neither slot changes.
    pub fn set_naive(&self, value: Option<NaiveDateTime>) -> Result<(), ConvertError> {
        if let Some(naive) = value {
            convert::zoned_from_naive(naive, &(self.context)())?;
        }
        self.naive.set(value.map(convert::truncate_to_seconds));
        Ok(())
    }
}
