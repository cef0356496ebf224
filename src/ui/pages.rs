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

//! Container pages with declared bars

use std::rc::Rc;

use gtk4::prelude::*;

use crate::conductor::container::ConductedItem;
use crate::core::bar::{BarDefinition, HostBarSlot};
use crate::core::observable::Signal;
use crate::core::tree::{bar_definitions, Element, ViewNode};

/// One child of a container, together with the bars declared on it.
///
/// The page's view tree is synthetic: a root [`Element`] with one child per
/// registered bar, in registration order (which is therefore the document
/// order the applicable-bar rule sees). The widget's `map` signal stands in
/// for the platform's "view materialized" notification, and each map also
/// replays the platform's default self-install behaviour via
/// [`BarDefinition::handle_loaded`] — which is exactly what the conductor's
/// deferral gate exists to suppress.
pub struct BoundPage {
    widget: gtk4::Widget,
    root: Rc<Element>,
    materialized: Signal<()>,
}

impl BoundPage {
    pub fn new(widget: impl IsA<gtk4::Widget>, slot: Rc<HostBarSlot>) -> Rc<Self> {
        let widget = widget.upcast();
        let page = Rc::new(Self {
            widget: widget.clone(),
            root: Element::new(),
            materialized: Signal::new(),
        });

        let weak = Rc::downgrade(&page);
        widget.connect_map(move |_| {
            if let Some(page) = weak.upgrade() {
                // One-shot registrations (the deferral gate among them) run
                // before the bars' own load behaviour, mirroring the
                // platform's view-attached-then-loaded ordering.
                page.materialized.emit(&());
                let root: Rc<dyn ViewNode> = page.root.clone();
                for bar in bar_definitions(&root) {
                    bar.handle_loaded(&slot);
                }
            }
        });

        page
    }

    /// Declares a bar on this page. Registration order is document order.
    pub fn add_bar(&self, bar: Rc<BarDefinition>) {
        let child = Element::new();
        child.set_bar(bar);
        self.root.add_child(child);
    }

    pub fn widget(&self) -> &gtk4::Widget {
        &self.widget
    }
}

impl ConductedItem for BoundPage {
    fn view(&self) -> Option<Rc<dyn ViewNode>> {
        if self.widget.is_mapped() {
            Some(self.root.clone())
        } else {
            None
        }
    }

    fn when_view_available(&self, callback: Box<dyn FnOnce(Rc<dyn ViewNode>)>) {
        if self.widget.is_mapped() {
            callback(self.root.clone());
        } else {
            let root = self.root.clone();
            self.materialized.connect_once(move |_| {
                callback(root);
            });
        }
    }
}
