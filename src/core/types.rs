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

//! Bindable bar item types
//!
//! The building blocks an application declares its bars from:
//! - `BarButton`: an icon button on the bar surface
//! - `BarMenuItem`: a text entry in the bar's overflow menu
//! - `BarItem`: either of the two, in document order
//! - `BarMode` / `Color`: bar-level presentation settings
//!
//! Buttons and menu items expose their properties as observable fields; any
//! change to a field raises the item's `invalidated` signal, which the owning
//! bar definition uses to rebuild its renderable payload.

use std::fmt;
use std::rc::Rc;

use crate::core::observable::{ObservableField, Signal, SubscriptionId};

/// An ARGB colour.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub struct Color {
    pub alpha: u8,
    pub red: u8,
    pub green: u8,
    pub blue: u8,
}

impl Color {
    pub const fn from_argb(alpha: u8, red: u8, green: u8, blue: u8) -> Self {
        Self {
            alpha,
            red,
            green,
            blue,
        }
    }
}

/// Display mode of a bar.
///
/// - `Default`: full-height bar with icon buttons
/// - `Minimized`: collapsed strip, overflow menu still reachable
#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq)]
pub enum BarMode {
    #[default]
    Default,
    Minimized,
}

impl fmt::Display for BarMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BarMode::Default => write!(f, "default"),
            BarMode::Minimized => write!(f, "minimized"),
        }
    }
}

/// A bindable icon button declared on a bar.
///
/// Property changes raise `invalidated`; the owning bar rebuilds its payload
/// from the current item states, leaving out items whose `visible` field is
/// `false`.
pub struct BarButton {
    icon: ObservableField<String>,
    label: ObservableField<String>,
    enabled: ObservableField<bool>,
    visible: ObservableField<bool>,
    clicked: Signal<()>,
    invalidated: Signal<()>,
}

impl BarButton {
    pub fn new(icon: &str, label: &str) -> Rc<Self> {
        let button = Rc::new(Self {
            icon: ObservableField::new(icon.to_string()),
            label: ObservableField::new(label.to_string()),
            enabled: ObservableField::new(true),
            visible: ObservableField::new(true),
            clicked: Signal::new(),
            invalidated: Signal::new(),
        });

        let weak = Rc::downgrade(&button);
        button.icon.changed().connect({
            let weak = weak.clone();
            move |_| {
                if let Some(b) = weak.upgrade() {
                    b.invalidated.emit(&());
                }
            }
        });
        button.label.changed().connect({
            let weak = weak.clone();
            move |_| {
                if let Some(b) = weak.upgrade() {
                    b.invalidated.emit(&());
                }
            }
        });
        button.enabled.changed().connect({
            let weak = weak.clone();
            move |_| {
                if let Some(b) = weak.upgrade() {
                    b.invalidated.emit(&());
                }
            }
        });
        button.visible.changed().connect(move |_| {
            if let Some(b) = weak.upgrade() {
                b.invalidated.emit(&());
            }
        });

        button
    }

    pub fn icon(&self) -> String {
        self.icon.get()
    }

    pub fn set_icon(&self, icon: &str) {
        self.icon.set(icon.to_string());
    }

    pub fn label(&self) -> String {
        self.label.get()
    }

    pub fn set_label(&self, label: &str) {
        self.label.set(label.to_string());
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled.get()
    }

    pub fn set_enabled(&self, enabled: bool) {
        self.enabled.set(enabled);
    }

    pub fn is_visible(&self) -> bool {
        self.visible.get()
    }

    pub fn set_visible(&self, visible: bool) {
        self.visible.set(visible);
    }

    /// Registers a click handler.
    pub fn connect_clicked(&self, handler: impl Fn(&()) + 'static) -> SubscriptionId {
        self.clicked.connect(handler)
    }

    /// Raises the click signal. Called by the renderer when the user
    /// activates the rendered button.
    pub fn click(&self) {
        self.clicked.emit(&());
    }

    pub(crate) fn invalidated(&self) -> &Signal<()> {
        &self.invalidated
    }
}

/// A bindable text entry in the bar's overflow menu.
pub struct BarMenuItem {
    label: ObservableField<String>,
    enabled: ObservableField<bool>,
    visible: ObservableField<bool>,
    clicked: Signal<()>,
    invalidated: Signal<()>,
}

impl BarMenuItem {
    pub fn new(label: &str) -> Rc<Self> {
        let item = Rc::new(Self {
            label: ObservableField::new(label.to_string()),
            enabled: ObservableField::new(true),
            visible: ObservableField::new(true),
            clicked: Signal::new(),
            invalidated: Signal::new(),
        });

        let weak = Rc::downgrade(&item);
        item.label.changed().connect({
            let weak = weak.clone();
            move |_| {
                if let Some(i) = weak.upgrade() {
                    i.invalidated.emit(&());
                }
            }
        });
        item.enabled.changed().connect({
            let weak = weak.clone();
            move |_| {
                if let Some(i) = weak.upgrade() {
                    i.invalidated.emit(&());
                }
            }
        });
        item.visible.changed().connect(move |_| {
            if let Some(i) = weak.upgrade() {
                i.invalidated.emit(&());
            }
        });

        item
    }

    pub fn label(&self) -> String {
        self.label.get()
    }

    pub fn set_label(&self, label: &str) {
        self.label.set(label.to_string());
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled.get()
    }

    pub fn set_enabled(&self, enabled: bool) {
        self.enabled.set(enabled);
    }

    pub fn is_visible(&self) -> bool {
        self.visible.get()
    }

    pub fn set_visible(&self, visible: bool) {
        self.visible.set(visible);
    }

    pub fn connect_clicked(&self, handler: impl Fn(&()) + 'static) -> SubscriptionId {
        self.clicked.connect(handler)
    }

    pub fn click(&self) {
        self.clicked.emit(&());
    }

    pub(crate) fn invalidated(&self) -> &Signal<()> {
        &self.invalidated
    }
}

/// One declared bar item, in the order the application added it.
///
/// A bar keeps buttons and menu entries in a single ordered collection, so
/// "document order" within a bar is insertion order.
#[derive(Clone)]
pub enum BarItem {
    Button(Rc<BarButton>),
    MenuItem(Rc<BarMenuItem>),
}

impl BarItem {
    pub fn is_visible(&self) -> bool {
        match self {
            BarItem::Button(b) => b.is_visible(),
            BarItem::MenuItem(m) => m.is_visible(),
        }
    }

    pub(crate) fn invalidated(&self) -> &Signal<()> {
        match self {
            BarItem::Button(b) => b.invalidated(),
            BarItem::MenuItem(m) => m.invalidated(),
        }
    }
}
