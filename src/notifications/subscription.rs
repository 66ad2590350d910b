// SPDX-License-Identifier: MPL-2.0
//! Push-on-change observers of the visible toast.

use super::notification::Notification;
use std::fmt;

/// Callback invoked with the new visible toast (or `None` once cleared).
pub type Subscriber = Box<dyn FnMut(Option<&Notification>)>;

/// Identifies a registered subscriber, used to unsubscribe.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

/// Ordered list of subscribers. Callbacks run in registration order.
#[derive(Default)]
pub(crate) struct Subscribers {
    entries: Vec<(SubscriptionId, Subscriber)>,
    next_id: u64,
}

impl Subscribers {
    pub(crate) fn add(&mut self, subscriber: Subscriber) -> SubscriptionId {
        let id = SubscriptionId(self.next_id);
        self.next_id += 1;
        self.entries.push((id, subscriber));
        id
    }

    pub(crate) fn remove(&mut self, id: SubscriptionId) -> bool {
        let before = self.entries.len();
        self.entries.retain(|(entry_id, _)| *entry_id != id);
        self.entries.len() < before
    }

    pub(crate) fn len(&self) -> usize {
        self.entries.len()
    }

    pub(crate) fn notify(&mut self, current: Option<&Notification>) {
        for (_, subscriber) in &mut self.entries {
            subscriber(current);
        }
    }
}

impl fmt::Debug for Subscribers {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Subscribers")
            .field("count", &self.entries.len())
            .finish()
    }
}
