// Collection mirror
// Two observable lists holding the same set of dates in both representations

use std::cell::Cell;
use std::rc::Rc;

use chrono::{DateTime, NaiveDateTime};
use chrono_tz::Tz;

use super::ContextProvider;
use crate::convert::{self, ConversionContext, ConvertError};
use crate::observable::ObservableList;

/// Keeps a zone-aware list and a wall-clock list equal as sets under
/// conversion.
///
/// Forwarding processes each incoming change event as the batch it is: all
/// removals first, then all additions, so removing and re-adding the same
/// date within one edit is not dropped. Only set-equality is maintained;
/// element order in the two lists need not correspond.
pub struct ListMirror {
    zoned: ObservableList<DateTime<Tz>>,
    naive: ObservableList<NaiveDateTime>,
    context: ContextProvider,
}

impl ListMirror {
    /// Wire a mirror onto an existing zone-aware list. The wall-clock list is
    /// created here, initialized from the zoned list's current contents.
    ///
    /// Echo suppression is twofold: a forwarding flag skips the opposite
    /// direction entirely, and every addition is presence-checked so a stray
    /// echo would still be a no-op. No duplicates are ever introduced.
    pub fn attach(zoned: ObservableList<DateTime<Tz>>, context: ContextProvider) -> Self {
        let naive: ObservableList<NaiveDateTime> = ObservableList::new();
        for item in zoned.snapshot() {
            let converted = convert::naive_from_zoned(&item);
            if !naive.contains(&converted) {
                naive.push(converted);
            }
        }
        let forwarding = Rc::new(Cell::new(false));

        // zoned -> naive
        {
            let naive = naive.clone();
            let forwarding = Rc::clone(&forwarding);
            zoned.subscribe(move |change| {
                if forwarding.get() {
                    return;
                }
                forwarding.set(true);
                for item in &change.removed {
                    naive.remove_item(&convert::naive_from_zoned(item));
                }
                for item in &change.added {
                    let converted = convert::naive_from_zoned(item);
                    if !naive.contains(&converted) {
                        naive.push(converted);
                    }
                }
                forwarding.set(false);
                log::trace!(
                    "mirrored {} removals and {} additions into the wall-clock list",
                    change.removed.len(),
                    change.added.len()
                );
            });
        }

        // naive -> zoned
        {
            let zoned = zoned.clone();
            let context = Rc::clone(&context);
            let forwarding = Rc::clone(&forwarding);
            naive.subscribe(move |change| {
                if forwarding.get() {
                    return;
                }
                // convert the whole batch up front: a failure leaves both
                // lists untouched instead of half-forwarded
                let ctx = context();
                let removed = convert_batch(&change.removed, &ctx);
                let added = convert_batch(&change.added, &ctx);
                forwarding.set(true);
                for item in &removed {
                    zoned.remove_item(item);
                }
                for item in &added {
                    if !zoned.contains(item) {
                        zoned.push(item.clone());
                    }
                }
                forwarding.set(false);
                log::trace!(
                    "mirrored {} removals and {} additions into the zoned list",
                    removed.len(),
                    added.len()
                );
            });
        }

        Self { zoned, naive, context }
    }

    /// The zone-aware list, as handed in by the host.
    pub fn zoned(&self) -> &ObservableList<DateTime<Tz>> {
        &self.zoned
    }

    /// The wall-clock list owned by this mirror.
    pub fn naive(&self) -> &ObservableList<NaiveDateTime> {
        &self.naive
    }

    /// Presence-checked addition on the wall-clock side, validated under the
    /// current context before anything is mutated. Returns whether the value
    /// was actually added.
    pub fn add_naive(&self, value: NaiveDateTime) -> Result<bool, ConvertError> {
        let value = convert::truncate_to_seconds(value);
        convert::zoned_from_naive(value, &(self.context)())?;
        if self.naive.contains(&value) {
            return Ok(false);
        }
        self.naive.push(value);
        Ok(true)
    }

    pub fn remove_naive(&self, value: &NaiveDateTime) -> bool {
        self.naive.remove_item(&convert::truncate_to_seconds(*value))
    }
}

fn convert_batch(items: &[NaiveDateTime], context: &ConversionContext) -> Vec<DateTime<Tz>> {
    items
        .iter()
        .map(|item| match convert::zoned_from_naive(*item, context) {
            Ok(zoned) => zoned,
            Err(err) => {
                log::error!("cannot mirror wall-clock batch into zoned list: {err}");
                panic!("unconvertible wall-clock value reached the mirror: {err}");
            }
        })
        .collect()
}
