// Copyright 2026 the bindable-appbar contributors
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Change-notification primitives
//!
//! The platform this library was designed for drives its UI through property
//! change callbacks. This module models that contract explicitly:
//!
//! - [`Signal`]: a multicast callback list with persistent and one-shot
//!   subscriptions. One-shot subscriptions deregister themselves after the
//!   first emission, replacing the manual "handler removes itself" dance.
//! - [`ObservableField`]: a value cell that notifies listeners only when the
//!   value actually changes.
//!
//! Everything here is single-threaded (`Rc`/`RefCell`); these types are the
//! seam the rest of the crate plugs into instead of a real property system.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

thread_local! {
    static NEXT_SUBSCRIPTION_ID: Cell<u64> = const { Cell::new(1) };
}

/// Identifies one subscription on a [`Signal`].
///
/// Ids are unique per thread, so a handle can be passed around and later
/// offered to any signal for disconnection; signals ignore ids they do not
/// own.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub struct SubscriptionId(u64);

fn next_subscription_id() -> SubscriptionId {
    NEXT_SUBSCRIPTION_ID.with(|next| {
        let id = next.get();
        next.set(id + 1);
        SubscriptionId(id)
    })
}

enum Listener<T> {
    Persistent(Rc<dyn Fn(&T)>),
    /// Emptied once fired; the entry is removed during the same emission.
    Once(Option<Box<dyn FnOnce(&T)>>),
}

struct Entry<T> {
    id: SubscriptionId,
    listener: Listener<T>,
}

/// A multicast callback list.
///
/// Listeners run in subscription order. Emission snapshots the listener list
/// first, so a listener may connect or disconnect subscriptions while the
/// signal is firing without panicking; newly connected listeners only see
/// later emissions.
pub struct Signal<T> {
    entries: RefCell<Vec<Entry<T>>>,
}

impl<T> Signal<T> {
    pub fn new() -> Self {
        Self {
            entries: RefCell::new(Vec::new()),
        }
    }

    /// Registers a listener invoked on every emission until disconnected.
    pub fn connect(&self, listener: impl Fn(&T) + 'static) -> SubscriptionId {
        let id = next_subscription_id();
        self.entries.borrow_mut().push(Entry {
            id,
            listener: Listener::Persistent(Rc::new(listener)),
        });
        id
    }

    /// Registers a listener invoked on the next emission only.
    ///
    /// The subscription removes itself after firing; disconnecting it earlier
    /// via the returned id is also allowed.
    pub fn connect_once(&self, listener: impl FnOnce(&T) + 'static) -> SubscriptionId {
        let id = next_subscription_id();
        self.entries.borrow_mut().push(Entry {
            id,
            listener: Listener::Once(Some(Box::new(listener))),
        });
        id
    }

    /// Removes a subscription. Unknown ids are ignored.
    pub fn disconnect(&self, id: SubscriptionId) {
        self.entries.borrow_mut().retain(|entry| entry.id != id);
    }

    /// Invokes every current listener with `value`.
    pub fn emit(&self, value: &T) {
        let mut calls: Vec<Box<dyn FnOnce(&T)>> = Vec::new();
        {
            let mut entries = self.entries.borrow_mut();
            for entry in entries.iter_mut() {
                match &mut entry.listener {
                    Listener::Persistent(f) => {
                        let f = Rc::clone(f);
                        calls.push(Box::new(move |v| f(v)));
                    }
                    Listener::Once(slot) => {
                        if let Some(f) = slot.take() {
                            calls.push(f);
                        }
                    }
                }
            }
            entries.retain(|entry| !matches!(entry.listener, Listener::Once(None)));
        }
        for call in calls {
            call(value);
        }
    }

    /// Number of live subscriptions.
    pub fn listener_count(&self) -> usize {
        self.entries.borrow().len()
    }
}

impl<T> Default for Signal<T> {
    fn default() -> Self {
        Self::new()
    }
}

/// A value cell that emits a change signal when, and only when, the stored
/// value actually changes.
pub struct ObservableField<T> {
    value: RefCell<T>,
    changed: Signal<T>,
}

impl<T: Clone + PartialEq> ObservableField<T> {
    pub fn new(initial: T) -> Self {
        Self {
            value: RefCell::new(initial),
            changed: Signal::new(),
        }
    }

    pub fn get(&self) -> T {
        self.value.borrow().clone()
    }

    /// Stores `value`, notifying listeners if it differs from the current
    /// value. Listeners run after the store, outside any internal borrow.
    pub fn set(&self, value: T) {
        {
            let current = self.value.borrow();
            if *current == value {
                return;
            }
        }
        *self.value.borrow_mut() = value.clone();
        self.changed.emit(&value);
    }

    pub fn changed(&self) -> &Signal<T> {
        &self.changed
    }
}

impl<T: Clone + PartialEq + Default> Default for ObservableField<T> {
    fn default() -> Self {
        Self::new(T::default())
    }
}
