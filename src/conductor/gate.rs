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

//! Deferral gate
//!
//! The platform's default bar behaviour is "last view to finish loading
//! wins": every bar installs itself into the page slot when its view loads.
//! With several children declaring bars that is a load-order race against
//! the conductor's policy, so at attach time the gate pre-marks bar
//! definitions as deferred:
//!
//! - tabbed mode: every child except the active one
//! - carousel mode: every child, the active one included — the carousel
//!   defers uniformly to avoid transition glitches, and the conductor's
//!   first synchronization installs the initial bar instead
//!
//! Pure bookkeeping: the gate never touches the host slot. Children whose
//! views are not yet materialized get a one-shot registration that applies
//! the mark on arrival.

use std::rc::Rc;

use tracing::debug;

use crate::conductor::container::{same_item, ItemContainer};
use crate::core::tree::{bar_definitions, ViewNode};

/// Marks every bar definition in the container's children per the rules
/// above. Called once per container at attach time.
pub(crate) fn defer_inactive(container: &Rc<dyn ItemContainer>, carousel: bool) {
    let active = container.active_item();
    for item in container.items() {
        let is_active = active
            .as_ref()
            .map(|a| same_item(a, &item))
            .unwrap_or(false);
        let defer = carousel || !is_active;
        item.when_view_available(Box::new(move |view| mark_subtree(&view, defer)));
    }
}

fn mark_subtree(view: &Rc<dyn ViewNode>, defer: bool) {
    for bar in bar_definitions(view) {
        bar.set_defer_load(defer);
        debug!(defer, "marked bar definition");
    }
}
