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

//! Container and item collaborator contracts
//!
//! The conductor is ignorant of any concrete toolkit; it synchronizes
//! against these traits. The `ui` module provides GTK4 implementations, and
//! the test suite drives the conductor through fakes.

use std::rc::Rc;

use crate::core::observable::SubscriptionId;
use crate::core::tree::ViewNode;

/// The two container styles a conductor can synchronize against.
///
/// A tabbed container switches synchronously; a carousel animates between
/// children, which is what the deferred-assignment and clear-in-place rules
/// exist for.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum ContainerKind {
    Tabbed,
    Carousel,
}

/// One child screen managed by a container.
///
/// The child's view may not exist yet when the conductor attaches;
/// `when_view_available` covers both cases with a single registration.
pub trait ConductedItem {
    /// The child's view, if materialized.
    fn view(&self) -> Option<Rc<dyn ViewNode>>;

    /// Runs `callback` with the view: immediately if it is already
    /// materialized, otherwise once, as soon as it becomes available.
    fn when_view_available(&self, callback: Box<dyn FnOnce(Rc<dyn ViewNode>)>);
}

/// A widget managing a set of child screens with exactly one active child.
///
/// `items` must return stable `Rc` identities — the conductor compares items
/// by pointer to tell the active child from the rest.
pub trait ItemContainer {
    fn kind(&self) -> ContainerKind;

    /// The children, in display order.
    fn items(&self) -> Vec<Rc<dyn ConductedItem>>;

    /// The currently active child, if any.
    fn active_item(&self) -> Option<Rc<dyn ConductedItem>>;

    /// Notifies when a child became active and its transition (if any) has
    /// completed.
    fn connect_item_loaded(
        &self,
        callback: Rc<dyn Fn(&Rc<dyn ConductedItem>)>,
    ) -> SubscriptionId;

    /// Notifies the moment the selection changes, before any transition
    /// animation finishes. Carousel containers fire this; tabbed containers
    /// may never emit it.
    fn connect_selection_changed(
        &self,
        callback: Rc<dyn Fn(&Rc<dyn ConductedItem>)>,
    ) -> SubscriptionId;

    /// Removes a subscription made by either connect method.
    fn disconnect(&self, id: SubscriptionId);
}

/// Pointer identity for trait-object items, ignoring vtable differences.
pub(crate) fn same_item(a: &Rc<dyn ConductedItem>, b: &Rc<dyn ConductedItem>) -> bool {
    std::ptr::eq(
        Rc::as_ptr(a) as *const (),
        Rc::as_ptr(b) as *const (),
    )
}
