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

//! Container adapters
//!
//! [`NotebookContainer`] wraps a `gtk4::Notebook`: page switches are
//! synchronous, so `switch-page` maps to the "item loaded" event and the
//! immediate selection event is never emitted.
//!
//! [`StackContainer`] wraps a `gtk4::Stack` with animated transitions:
//! `notify::visible-child` fires the moment the selection changes (while the
//! animation is still running) and maps to "selection changed";
//! `transition-running` flipping back to false maps to "item loaded".

use std::cell::RefCell;
use std::rc::Rc;

use gtk4::prelude::*;

use crate::conductor::container::{ConductedItem, ContainerKind, ItemContainer};
use crate::core::observable::{Signal, SubscriptionId};
use crate::ui::pages::BoundPage;

/// `gtk4::Notebook` as the tabbed container.
pub struct NotebookContainer {
    notebook: gtk4::Notebook,
    pages: RefCell<Vec<Rc<BoundPage>>>,
    item_loaded: Signal<Rc<dyn ConductedItem>>,
    selection_changed: Signal<Rc<dyn ConductedItem>>,
}

impl NotebookContainer {
    pub fn new(notebook: gtk4::Notebook) -> Rc<Self> {
        let container = Rc::new(Self {
            notebook: notebook.clone(),
            pages: RefCell::new(Vec::new()),
            item_loaded: Signal::new(),
            selection_changed: Signal::new(),
        });

        let weak = Rc::downgrade(&container);
        notebook.connect_switch_page(move |_, _, page_index| {
            if let Some(container) = weak.upgrade() {
                let page = container.pages.borrow().get(page_index as usize).cloned();
                if let Some(page) = page {
                    container.item_loaded.emit(&(page as Rc<dyn ConductedItem>));
                }
            }
        });

        container
    }

    pub fn add_page(&self, page: Rc<BoundPage>, title: &str) {
        self.notebook
            .append_page(page.widget(), Some(&gtk4::Label::new(Some(title))));
        self.pages.borrow_mut().push(page);
    }

    pub fn notebook(&self) -> &gtk4::Notebook {
        &self.notebook
    }
}

impl ItemContainer for NotebookContainer {
    fn kind(&self) -> ContainerKind {
        ContainerKind::Tabbed
    }

    fn items(&self) -> Vec<Rc<dyn ConductedItem>> {
        self.pages
            .borrow()
            .iter()
            .map(|page| page.clone() as Rc<dyn ConductedItem>)
            .collect()
    }

    fn active_item(&self) -> Option<Rc<dyn ConductedItem>> {
        let index = self.notebook.current_page()? as usize;
        let page = self.pages.borrow().get(index).cloned()?;
        Some(page)
    }

    fn connect_item_loaded(
        &self,
        callback: Rc<dyn Fn(&Rc<dyn ConductedItem>)>,
    ) -> SubscriptionId {
        self.item_loaded.connect(move |item| callback(item))
    }

    fn connect_selection_changed(
        &self,
        callback: Rc<dyn Fn(&Rc<dyn ConductedItem>)>,
    ) -> SubscriptionId {
        self.selection_changed.connect(move |item| callback(item))
    }

    fn disconnect(&self, id: SubscriptionId) {
        self.item_loaded.disconnect(id);
        self.selection_changed.disconnect(id);
    }
}

/// `gtk4::Stack` with animated transitions as the carousel container.
pub struct StackContainer {
    stack: gtk4::Stack,
    pages: RefCell<Vec<Rc<BoundPage>>>,
    item_loaded: Signal<Rc<dyn ConductedItem>>,
    selection_changed: Signal<Rc<dyn ConductedItem>>,
}

impl StackContainer {
    pub fn new(stack: gtk4::Stack) -> Rc<Self> {
        let container = Rc::new(Self {
            stack: stack.clone(),
            pages: RefCell::new(Vec::new()),
            item_loaded: Signal::new(),
            selection_changed: Signal::new(),
        });

        let weak = Rc::downgrade(&container);
        stack.connect_visible_child_notify(move |_| {
            if let Some(container) = weak.upgrade() {
                if let Some(page) = container.visible_page() {
                    container
                        .selection_changed
                        .emit(&(page as Rc<dyn ConductedItem>));
                }
            }
        });

        let weak = Rc::downgrade(&container);
        stack.connect_transition_running_notify(move |stack| {
            if stack.is_transition_running() {
                return;
            }
            if let Some(container) = weak.upgrade() {
                if let Some(page) = container.visible_page() {
                    container.item_loaded.emit(&(page as Rc<dyn ConductedItem>));
                }
            }
        });

        container
    }

    pub fn add_page(&self, page: Rc<BoundPage>, name: &str) {
        self.stack.add_named(page.widget(), Some(name));
        self.pages.borrow_mut().push(page);
    }

    pub fn stack(&self) -> &gtk4::Stack {
        &self.stack
    }

    fn visible_page(&self) -> Option<Rc<BoundPage>> {
        let visible = self.stack.visible_child()?;
        self.pages
            .borrow()
            .iter()
            .find(|page| page.widget() == &visible)
            .cloned()
    }
}

impl ItemContainer for StackContainer {
    fn kind(&self) -> ContainerKind {
        ContainerKind::Carousel
    }

    fn items(&self) -> Vec<Rc<dyn ConductedItem>> {
        self.pages
            .borrow()
            .iter()
            .map(|page| page.clone() as Rc<dyn ConductedItem>)
            .collect()
    }

    fn active_item(&self) -> Option<Rc<dyn ConductedItem>> {
        let page = self.visible_page()?;
        Some(page)
    }

    fn connect_item_loaded(
        &self,
        callback: Rc<dyn Fn(&Rc<dyn ConductedItem>)>,
    ) -> SubscriptionId {
        self.item_loaded.connect(move |item| callback(item))
    }

    fn connect_selection_changed(
        &self,
        callback: Rc<dyn Fn(&Rc<dyn ConductedItem>)>,
    ) -> SubscriptionId {
        self.selection_changed.connect(move |item| callback(item))
    }

    fn disconnect(&self, id: SubscriptionId) {
        self.item_loaded.disconnect(id);
        self.selection_changed.disconnect(id);
    }
}
