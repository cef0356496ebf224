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

//! Bar definitions, payloads, and the host slot
//!
//! - [`BarDefinition`]: one declared application bar, owned by the view that
//!   declares it. Holds the ordered item list and bar-level settings, and
//!   rebuilds its [`BarPayload`] whenever an item changes.
//! - [`BarPayload`]: the renderable snapshot handed to the host page. Only
//!   items whose `visible` field is true survive a rebuild.
//! - [`HostBarSlot`]: the single per-page storage location for "the bar
//!   currently displayed", read by the platform renderer.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use tracing::debug;

use crate::core::observable::{ObservableField, Signal, SubscriptionId};
use crate::core::types::{BarButton, BarItem, BarMenuItem, BarMode, Color};

/// Rendered state of one visible button.
#[derive(Clone)]
pub struct PayloadButton {
    pub icon: String,
    pub label: String,
    pub enabled: bool,
    /// Source item, for routing renderer clicks back to the application.
    pub source: Rc<BarButton>,
}

/// Rendered state of one visible overflow-menu entry.
#[derive(Clone)]
pub struct PayloadMenuItem {
    pub label: String,
    pub enabled: bool,
    pub source: Rc<BarMenuItem>,
}

struct PayloadState {
    buttons: Vec<PayloadButton>,
    menu_items: Vec<PayloadMenuItem>,
    mode: BarMode,
    opacity: f64,
    background: Option<Color>,
    foreground: Option<Color>,
    visible: bool,
    menu_enabled: bool,
}

/// The renderable representation of a bar, as handed to the host page.
///
/// The payload outlives individual rebuilds: the renderer holds onto one
/// instance and listens on `changed` instead of being handed a fresh object.
/// That stability is what makes the carousel trick in
/// [`clear_in_place`](BarPayload::clear_in_place) possible.
pub struct BarPayload {
    state: RefCell<PayloadState>,
    changed: Signal<()>,
}

impl BarPayload {
    fn new() -> Rc<Self> {
        Rc::new(Self {
            state: RefCell::new(PayloadState {
                buttons: Vec::new(),
                menu_items: Vec::new(),
                mode: BarMode::Default,
                opacity: 1.0,
                background: None,
                foreground: None,
                visible: true,
                menu_enabled: true,
            }),
            changed: Signal::new(),
        })
    }

    pub fn buttons(&self) -> Vec<PayloadButton> {
        self.state.borrow().buttons.clone()
    }

    pub fn menu_items(&self) -> Vec<PayloadMenuItem> {
        self.state.borrow().menu_items.clone()
    }

    pub fn mode(&self) -> BarMode {
        self.state.borrow().mode
    }

    pub fn opacity(&self) -> f64 {
        self.state.borrow().opacity
    }

    pub fn background(&self) -> Option<Color> {
        self.state.borrow().background
    }

    pub fn foreground(&self) -> Option<Color> {
        self.state.borrow().foreground
    }

    pub fn is_visible(&self) -> bool {
        self.state.borrow().visible
    }

    pub fn is_menu_enabled(&self) -> bool {
        self.state.borrow().menu_enabled
    }

    /// Raised after every rebuild or in-place mutation.
    pub fn changed(&self) -> &Signal<()> {
        &self.changed
    }

    /// Empties the payload without detaching it from the slot.
    ///
    /// Used in carousel mode when the newly active view has no visible bar:
    /// replacing or removing the slot's bar aborts the in-flight transition
    /// animation, but mutating the current bar's contents does not. The
    /// background drops to a near-transparent colour so the emptied bar
    /// reads as "no bar" on screen.
    pub fn clear_in_place(&self) {
        {
            let mut state = self.state.borrow_mut();
            state.buttons.clear();
            state.menu_items.clear();
            state.background = Some(Color::from_argb(1, 0, 0, 0));
        }
        self.changed.emit(&());
    }

    fn replace_items(&self, buttons: Vec<PayloadButton>, menu_items: Vec<PayloadMenuItem>) {
        {
            let mut state = self.state.borrow_mut();
            state.buttons = buttons;
            state.menu_items = menu_items;
        }
        self.changed.emit(&());
    }

    fn write<F: FnOnce(&mut PayloadState)>(&self, f: F) {
        f(&mut self.state.borrow_mut());
        self.changed.emit(&());
    }
}

/// One declared application bar.
///
/// Created when its owning view is constructed and discarded with it. Within
/// one view subtree several definitions may coexist; only the last visible
/// one in document order is ever displayed, which allows hot-swapping between
/// two bars by toggling their visibility.
pub struct BarDefinition {
    is_visible: ObservableField<bool>,
    /// Suppresses self-installation on load; managed by the conductor.
    defer_load: Cell<bool>,
    mode: ObservableField<BarMode>,
    opacity: ObservableField<f64>,
    background: ObservableField<Option<Color>>,
    foreground: ObservableField<Option<Color>>,
    menu_enabled: ObservableField<bool>,
    items: RefCell<Vec<BarItem>>,
    payload: Rc<BarPayload>,
}

impl BarDefinition {
    pub fn new() -> Rc<Self> {
        let definition = Rc::new(Self {
            is_visible: ObservableField::new(true),
            defer_load: Cell::new(false),
            mode: ObservableField::new(BarMode::Default),
            opacity: ObservableField::new(1.0),
            background: ObservableField::new(None),
            foreground: ObservableField::new(None),
            menu_enabled: ObservableField::new(true),
            items: RefCell::new(Vec::new()),
            payload: BarPayload::new(),
        });

        // Bar-level settings write straight through to the payload; items go
        // through invalidate() so the visibility filter applies.
        let payload = definition.payload.clone();
        definition
            .is_visible
            .changed()
            .connect(move |visible: &bool| {
                let visible = *visible;
                payload.write(|s| s.visible = visible);
            });
        let payload = definition.payload.clone();
        definition.mode.changed().connect(move |mode: &BarMode| {
            let mode = *mode;
            payload.write(|s| s.mode = mode);
        });
        let payload = definition.payload.clone();
        definition.opacity.changed().connect(move |opacity: &f64| {
            let opacity = *opacity;
            payload.write(|s| s.opacity = opacity);
        });
        let payload = definition.payload.clone();
        definition
            .background
            .changed()
            .connect(move |colour: &Option<Color>| {
                let colour = *colour;
                payload.write(|s| s.background = colour);
            });
        let payload = definition.payload.clone();
        definition
            .foreground
            .changed()
            .connect(move |colour: &Option<Color>| {
                let colour = *colour;
                payload.write(|s| s.foreground = colour);
            });
        let payload = definition.payload.clone();
        definition
            .menu_enabled
            .changed()
            .connect(move |enabled: &bool| {
                let enabled = *enabled;
                payload.write(|s| s.menu_enabled = enabled);
            });

        definition
    }

    pub fn payload(&self) -> Rc<BarPayload> {
        self.payload.clone()
    }

    pub fn is_visible(&self) -> bool {
        self.is_visible.get()
    }

    pub fn set_visible(&self, visible: bool) {
        self.is_visible.set(visible);
    }

    pub fn visible_changed(&self) -> &Signal<bool> {
        self.is_visible.changed()
    }

    pub fn defer_load(&self) -> bool {
        self.defer_load.get()
    }

    pub fn set_defer_load(&self, defer: bool) {
        self.defer_load.set(defer);
    }

    pub fn mode(&self) -> BarMode {
        self.mode.get()
    }

    pub fn set_mode(&self, mode: BarMode) {
        self.mode.set(mode);
    }

    pub fn opacity(&self) -> f64 {
        self.opacity.get()
    }

    pub fn set_opacity(&self, opacity: f64) {
        self.opacity.set(opacity);
    }

    pub fn set_background(&self, colour: Option<Color>) {
        self.background.set(colour);
    }

    pub fn set_foreground(&self, colour: Option<Color>) {
        self.foreground.set(colour);
    }

    pub fn set_menu_enabled(&self, enabled: bool) {
        self.menu_enabled.set(enabled);
    }

    /// Appends a button. Item order is document order.
    pub fn add_button(self: &Rc<Self>, button: Rc<BarButton>) {
        self.add_item(BarItem::Button(button));
    }

    /// Appends an overflow-menu entry.
    pub fn add_menu_item(self: &Rc<Self>, item: Rc<BarMenuItem>) {
        self.add_item(BarItem::MenuItem(item));
    }

    fn add_item(self: &Rc<Self>, item: BarItem) {
        let weak = Rc::downgrade(self);
        item.invalidated().connect(move |_| {
            if let Some(definition) = weak.upgrade() {
                definition.invalidate();
            }
        });
        self.items.borrow_mut().push(item);
        self.invalidate();
    }

    pub fn items(&self) -> Vec<BarItem> {
        self.items.borrow().clone()
    }

    /// Rebuilds the payload from the current item list.
    ///
    /// Items marked not-visible are filtered out. The conductor also calls
    /// this right before assigning a previously hidden bar, so enabled-state
    /// and colour changes made while the bar was off-screen are picked up.
    pub fn invalidate(&self) {
        let mut buttons = Vec::new();
        let mut menu_items = Vec::new();
        for item in self.items.borrow().iter() {
            match item {
                BarItem::Button(b) if b.is_visible() => buttons.push(PayloadButton {
                    icon: b.icon(),
                    label: b.label(),
                    enabled: b.is_enabled(),
                    source: b.clone(),
                }),
                BarItem::MenuItem(m) if m.is_visible() => menu_items.push(PayloadMenuItem {
                    label: m.label(),
                    enabled: m.is_enabled(),
                    source: m.clone(),
                }),
                _ => {}
            }
        }
        debug!(
            buttons = buttons.len(),
            menu_items = menu_items.len(),
            "rebuilt bar payload"
        );
        self.payload.replace_items(buttons, menu_items);
    }

    /// Platform default behaviour on view load: the bar installs itself into
    /// the page slot — unless the conductor marked it deferred, in which case
    /// the conductor decides which bar becomes active instead of load order.
    pub fn handle_loaded(&self, slot: &HostBarSlot) {
        if !self.defer_load.get() {
            slot.assign(self.payload());
        }
    }
}

/// The single mutable "bar currently shown" reference held by the host page.
///
/// Written by the conductor while one is attached (callers must not assign it
/// directly during that time); read by the platform renderer, which listens
/// on `changed` for slot-level swaps and on the payload's own signal for
/// content mutations.
pub struct HostBarSlot {
    current: RefCell<Option<Rc<BarPayload>>>,
    changed: Signal<Option<Rc<BarPayload>>>,
}

impl HostBarSlot {
    pub fn new() -> Rc<Self> {
        Rc::new(Self {
            current: RefCell::new(None),
            changed: Signal::new(),
        })
    }

    pub fn current(&self) -> Option<Rc<BarPayload>> {
        self.current.borrow().clone()
    }

    pub fn is_empty(&self) -> bool {
        self.current.borrow().is_none()
    }

    /// Puts `payload` in the slot. Re-assigning the payload already present
    /// is a no-op.
    pub fn assign(&self, payload: Rc<BarPayload>) {
        {
            let current = self.current.borrow();
            if let Some(existing) = current.as_ref() {
                if Rc::ptr_eq(existing, &payload) {
                    return;
                }
            }
        }
        *self.current.borrow_mut() = Some(payload.clone());
        self.changed.emit(&Some(payload));
    }

    /// Empties the slot. A no-op if already empty.
    pub fn clear(&self) {
        if self.current.borrow().is_none() {
            return;
        }
        *self.current.borrow_mut() = None;
        self.changed.emit(&None);
    }

    pub fn connect_changed(
        &self,
        handler: impl Fn(&Option<Rc<BarPayload>>) + 'static,
    ) -> SubscriptionId {
        self.changed.connect(handler)
    }
}
