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

//! The bar conductor
//!
//! [`BarConductor`] keeps the host page's bar slot consistent with the bar
//! definition belonging to the currently active child of a tabbed or
//! carousel container.
//!
//! On every selection event it selects the applicable bar (last visible in
//! document order under the active view) and then applies one of four
//! outcomes:
//!
//! 1. bar found, slot empty, carousel mode: the assignment waits out the
//!    transition animation — putting a new bar into an empty slot mid-flight
//!    aborts it. A later event supersedes a pending wait.
//! 2. bar found, otherwise: invalidate (pick up changes made while hidden)
//!    and assign immediately.
//! 3. no bar, carousel mode: empty the current payload in place; the slot
//!    itself stays occupied, because removing it would also abort the
//!    transition.
//! 4. no bar, tabbed mode: clear the slot.
//!
//! Synchronization is best-effort per event, with no retries: a missed or
//! out-of-order event is corrected by the next one. The only ordering that
//! matters is that a later event always beats an earlier pending deferred
//! assignment, enforced by a generation counter checked at fire time.

use std::cell::{Cell, RefCell};
use std::rc::{Rc, Weak};
use std::time::Duration;

use tracing::{debug, warn};

use crate::conductor::container::{ConductedItem, ContainerKind, ItemContainer};
use crate::conductor::error::ConductorError;
use crate::conductor::gate;
use crate::conductor::scheduler::{DelayScheduler, ImmediateScheduler};
use crate::core::bar::HostBarSlot;
use crate::core::observable::SubscriptionId;
use crate::core::tree::{applicable_bar, find_container, ViewNode};

/// Default wait for a carousel transition before assigning into an empty
/// slot. Transitions typically take ~500ms; the margin absorbs jitter.
pub const DEFAULT_WAIT_THRESHOLD: Duration = Duration::from_millis(800);

/// Tuning knobs for [`BarConductor::attach_with`].
pub struct ConductorOptions {
    /// How long to hold back an empty-slot assignment in carousel mode.
    /// Match this to the host's transition duration.
    pub wait_threshold: Duration,
    /// Where the wait happens. GTK setups should pass `ui::GlibScheduler`;
    /// the default runs callbacks inline, which is only appropriate when
    /// there is no animation to wait out.
    pub scheduler: Rc<dyn DelayScheduler>,
}

impl Default for ConductorOptions {
    fn default() -> Self {
        Self {
            wait_threshold: DEFAULT_WAIT_THRESHOLD,
            scheduler: Rc::new(ImmediateScheduler),
        }
    }
}

/// Synchronizes the host bar slot with the active child of a container.
///
/// While a conductor is attached it is the slot's only writer; callers must
/// not assign the slot directly until [`detach`](BarConductor::detach).
pub struct BarConductor {
    inner: Rc<Inner>,
}

struct Inner {
    containers: Vec<Rc<dyn ItemContainer>>,
    carousel: bool,
    slot: Rc<HostBarSlot>,
    scheduler: Rc<dyn DelayScheduler>,
    wait_threshold: Duration,
    /// Advances on every synchronization; a pending deferred assignment
    /// applies only if its generation is still current when it fires.
    generation: Cell<u64>,
    subscriptions: RefCell<Vec<(Rc<dyn ItemContainer>, SubscriptionId)>>,
    detached: Cell<bool>,
}

impl BarConductor {
    /// Attaches with default options.
    pub fn attach(
        host: &Rc<dyn ViewNode>,
        slot: Rc<HostBarSlot>,
    ) -> Result<Self, ConductorError> {
        Self::attach_with(host, slot, ConductorOptions::default())
    }

    /// Scans `host` for tabbed and carousel containers, subscribes to their
    /// selection events, and applies the deferral gate.
    ///
    /// The container and its item list must exist at this point; individual
    /// child views may materialize later. Carousel timing rules are in
    /// effect if any carousel container was found. In carousel mode the
    /// first synchronization runs as soon as the active child's view is
    /// available — immediately, if it already is.
    ///
    /// # Errors
    ///
    /// [`ConductorError::MissingSelector`] if `host` contains neither
    /// container kind. This is a wiring bug in the caller, not a condition
    /// that resolves itself later.
    pub fn attach_with(
        host: &Rc<dyn ViewNode>,
        slot: Rc<HostBarSlot>,
        options: ConductorOptions,
    ) -> Result<Self, ConductorError> {
        let tabbed = find_container(host, ContainerKind::Tabbed);
        let carousel = find_container(host, ContainerKind::Carousel);

        if tabbed.is_none() && carousel.is_none() {
            return Err(ConductorError::MissingSelector);
        }

        let inner = Rc::new(Inner {
            containers: tabbed.into_iter().chain(carousel.clone()).collect(),
            carousel: carousel.is_some(),
            slot,
            scheduler: options.scheduler,
            wait_threshold: options.wait_threshold,
            generation: Cell::new(0),
            subscriptions: RefCell::new(Vec::new()),
            detached: Cell::new(false),
        });

        for container in &inner.containers {
            let loaded = {
                let weak = Rc::downgrade(&inner);
                container.connect_item_loaded(Rc::new(move |item| {
                    Inner::on_item_event(&weak, item);
                }))
            };
            let selected = {
                let weak = Rc::downgrade(&inner);
                container.connect_selection_changed(Rc::new(move |item| {
                    Inner::on_item_event(&weak, item);
                }))
            };
            inner
                .subscriptions
                .borrow_mut()
                .extend([(container.clone(), loaded), (container.clone(), selected)]);

            gate::defer_inactive(container, inner.carousel);
        }

        // All carousel bars are deferred, so nothing self-installs; run the
        // first sync ourselves once the active child's view is around.
        if let Some(carousel) = &carousel {
            if let Some(active) = carousel.active_item() {
                let weak = Rc::downgrade(&inner);
                active.when_view_available(Box::new(move |view| {
                    if let Some(inner) = weak.upgrade() {
                        Inner::synchronize(&inner, &view);
                    }
                }));
            }
        }

        Ok(Self { inner })
    }

    /// The wait applied before an empty-slot assignment in carousel mode.
    pub fn wait_threshold(&self) -> Duration {
        self.inner.wait_threshold
    }

    /// Unsubscribes from all container events. Idempotent; after the first
    /// call, container events and pending deferred assignments no longer
    /// mutate the slot.
    pub fn detach(&self) {
        if self.inner.detached.replace(true) {
            return;
        }
        let subscriptions: Vec<_> = self.inner.subscriptions.borrow_mut().drain(..).collect();
        for (container, id) in subscriptions {
            container.disconnect(id);
        }
        debug!("conductor detached");
    }
}

impl Inner {
    fn on_item_event(weak: &Weak<Inner>, item: &Rc<dyn ConductedItem>) {
        let Some(inner) = weak.upgrade() else {
            return;
        };
        if inner.detached.get() {
            return;
        }
        match item.view() {
            Some(view) => Self::synchronize(&inner, &view),
            // Expected early in the container's life; the next event
            // corrects it.
            None => warn!("active item has no materialized view yet, skipping sync"),
        }
    }

    fn synchronize(inner: &Rc<Inner>, view: &Rc<dyn ViewNode>) {
        // Covers every entry path, including the attach-time one-shot that
        // fires when the active view materializes after detach.
        if inner.detached.get() {
            return;
        }

        // Supersede any pending deferred assignment.
        let generation = inner.generation.get().wrapping_add(1);
        inner.generation.set(generation);

        match applicable_bar(view) {
            Some(bar) => {
                let apply = {
                    let bar = bar.clone();
                    let slot = inner.slot.clone();
                    move || {
                        // Refresh button state and colours in case they
                        // changed while the bar was hidden.
                        bar.invalidate();
                        slot.assign(bar.payload());
                    }
                };

                if inner.carousel && inner.slot.is_empty() {
                    // Assigning a new bar into an empty slot aborts the
                    // carousel transition, so hold it back until the
                    // animation has had time to finish.
                    debug!(?inner.wait_threshold, "deferring bar assignment");
                    let weak = Rc::downgrade(inner);
                    inner.scheduler.schedule(
                        inner.wait_threshold,
                        Box::new(move || {
                            let Some(inner) = weak.upgrade() else {
                                return;
                            };
                            if inner.detached.get() || inner.generation.get() != generation {
                                debug!("deferred bar assignment superseded");
                                return;
                            }
                            apply();
                        }),
                    );
                } else {
                    debug!("assigning bar");
                    apply();
                }
            }
            None if inner.carousel => {
                // Emptying the slot would abort the transition; emptying the
                // bar's contents does not.
                if let Some(payload) = inner.slot.current() {
                    debug!("no visible bar, clearing payload in place");
                    payload.clear_in_place();
                }
            }
            None => {
                debug!("no visible bar, clearing slot");
                inner.slot.clear();
            }
        }
    }
}
