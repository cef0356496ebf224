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

//! Slot renderer
//!
//! [`BarWidget`] is the platform-renderer role from the slot's point of
//! view: it re-renders on slot swaps and on in-place payload mutations, and
//! routes clicks back to the source items.

use std::cell::RefCell;
use std::rc::Rc;
use std::sync::atomic::{AtomicUsize, Ordering};

use gtk4::prelude::*;
use gtk4::Orientation;

use crate::core::bar::{BarPayload, HostBarSlot};
use crate::core::observable::SubscriptionId;
use crate::core::types::{BarMode, Color};

/// Distinguishes the per-instance CSS class of each renderer.
static NEXT_WIDGET_ID: AtomicUsize = AtomicUsize::new(0);

/// Renders the current bar payload as a horizontal strip of icon buttons
/// with an overflow menu at the trailing edge.
///
/// Bar-level background and foreground colours are applied through a
/// per-instance [`gtk4::CssProvider`], so the near-transparent background a
/// carousel clear leaves behind renders as "no bar" on screen.
pub struct BarWidget {
    container: gtk4::Box,
    slot: Rc<HostBarSlot>,
    css: gtk4::CssProvider,
    css_class: String,
    /// Subscription on the currently rendered payload's change signal.
    payload_watch: RefCell<Option<(Rc<BarPayload>, SubscriptionId)>>,
}

impl BarWidget {
    pub fn new(slot: Rc<HostBarSlot>) -> Rc<Self> {
        let container = gtk4::Box::new(Orientation::Horizontal, 6);
        container.add_css_class("appbar");
        let css_class = format!("appbar-{}", NEXT_WIDGET_ID.fetch_add(1, Ordering::Relaxed));
        container.add_css_class(&css_class);

        let css = gtk4::CssProvider::new();
        if let Some(display) = gtk4::gdk::Display::default() {
            gtk4::style_context_add_provider_for_display(
                &display,
                &css,
                gtk4::STYLE_PROVIDER_PRIORITY_APPLICATION,
            );
        }

        let widget = Rc::new(Self {
            container,
            slot: slot.clone(),
            css,
            css_class,
            payload_watch: RefCell::new(None),
        });

        let weak = Rc::downgrade(&widget);
        slot.connect_changed(move |_| {
            if let Some(widget) = weak.upgrade() {
                widget.watch_payload();
                widget.rebuild();
            }
        });

        widget.watch_payload();
        widget.rebuild();
        widget
    }

    pub fn widget(&self) -> &gtk4::Box {
        &self.container
    }

    /// Follows the slot's current payload: in-place mutations (the carousel
    /// clear trick) arrive on the payload's own signal, not the slot's.
    fn watch_payload(self: &Rc<Self>) {
        if let Some((payload, id)) = self.payload_watch.borrow_mut().take() {
            payload.changed().disconnect(id);
        }
        if let Some(payload) = self.slot.current() {
            let weak = Rc::downgrade(self);
            let id = payload.changed().connect(move |_| {
                if let Some(widget) = weak.upgrade() {
                    widget.rebuild();
                }
            });
            *self.payload_watch.borrow_mut() = Some((payload, id));
        }
    }

    fn rebuild(&self) {
        while let Some(child) = self.container.first_child() {
            self.container.remove(&child);
        }

        let Some(payload) = self.slot.current() else {
            self.container.set_visible(false);
            self.css.load_from_string("");
            return;
        };

        self.container.set_visible(payload.is_visible());
        self.container.set_opacity(payload.opacity());
        self.css.load_from_string(&colour_css(
            &self.css_class,
            payload.background(),
            payload.foreground(),
        ));

        if payload.mode() == BarMode::Default {
            for entry in payload.buttons() {
                let button = gtk4::Button::from_icon_name(&entry.icon);
                button.set_tooltip_text(Some(&entry.label));
                button.set_sensitive(entry.enabled);
                let source = entry.source.clone();
                button.connect_clicked(move |_| source.click());
                self.container.append(&button);
            }
        }

        let spacer = gtk4::Box::new(Orientation::Horizontal, 0);
        spacer.set_hexpand(true);
        self.container.append(&spacer);

        let menu_items = payload.menu_items();
        if !menu_items.is_empty() {
            let menu_button = gtk4::MenuButton::new();
            menu_button.set_icon_name("open-menu-symbolic");
            menu_button.set_sensitive(payload.is_menu_enabled());

            let popover = gtk4::Popover::new();
            let list = gtk4::Box::new(Orientation::Vertical, 4);
            for entry in menu_items {
                let item = gtk4::Button::with_label(&entry.label);
                item.add_css_class("flat");
                item.set_sensitive(entry.enabled);
                let source = entry.source.clone();
                let popover = popover.clone();
                item.connect_clicked(move |_| {
                    popover.popdown();
                    source.click();
                });
                list.append(&item);
            }
            popover.set_child(Some(&list));
            menu_button.set_popover(Some(&popover));
            self.container.append(&menu_button);
        }
    }
}

/// A stylesheet scoped to one renderer instance carrying the payload's
/// bar-level colours. Colours left unset fall through to the theme.
fn colour_css(class: &str, background: Option<Color>, foreground: Option<Color>) -> String {
    let mut rules = String::new();
    if let Some(colour) = background {
        rules.push_str(&format!("background-color: {};", rgba(colour)));
    }
    if let Some(colour) = foreground {
        rules.push_str(&format!("color: {};", rgba(colour)));
    }
    if rules.is_empty() {
        String::new()
    } else {
        format!(".{class} {{ {rules} }}")
    }
}

fn rgba(colour: Color) -> String {
    format!(
        "rgba({}, {}, {}, {:.3})",
        colour.red,
        colour.green,
        colour.blue,
        f64::from(colour.alpha) / 255.0
    )
}
