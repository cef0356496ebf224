//! Fakes for conducting tests without a toolkit.

use std::cell::{Cell, RefCell};
use std::rc::Rc;
use std::time::Duration;

use crate::conductor::container::{ConductedItem, ContainerKind, ItemContainer};
use crate::conductor::scheduler::DelayScheduler;
use crate::core::bar::BarDefinition;
use crate::core::observable::{Signal, SubscriptionId};
use crate::core::tree::{Element, ViewNode};

/// A child screen whose view may materialize after the container exists.
pub(super) struct FakeItem {
    view: RefCell<Option<Rc<dyn ViewNode>>>,
    materialized: Signal<Rc<dyn ViewNode>>,
}

impl FakeItem {
    /// An item with no view yet.
    pub fn unmaterialized() -> Rc<Self> {
        Rc::new(Self {
            view: RefCell::new(None),
            materialized: Signal::new(),
        })
    }

    /// An item whose view already exists.
    pub fn with_view(view: Rc<dyn ViewNode>) -> Rc<Self> {
        Rc::new(Self {
            view: RefCell::new(Some(view)),
            materialized: Signal::new(),
        })
    }

    /// Late materialization: stores the view and runs the registered
    /// callbacks.
    pub fn materialize(&self, view: Rc<dyn ViewNode>) {
        *self.view.borrow_mut() = Some(view.clone());
        self.materialized.emit(&view);
    }
}

impl ConductedItem for FakeItem {
    fn view(&self) -> Option<Rc<dyn ViewNode>> {
        self.view.borrow().clone()
    }

    fn when_view_available(&self, callback: Box<dyn FnOnce(Rc<dyn ViewNode>)>) {
        let existing = self.view.borrow().clone();
        match existing {
            Some(view) => callback(view),
            None => {
                self.materialized
                    .connect_once(move |view: &Rc<dyn ViewNode>| callback(view.clone()));
            }
        }
    }
}

/// A scripted container: tests call [`select`](FakeContainer::select) and
/// [`load`](FakeContainer::load) to emit the events a real widget would.
pub(super) struct FakeContainer {
    kind: ContainerKind,
    items: RefCell<Vec<Rc<FakeItem>>>,
    active: Cell<Option<usize>>,
    item_loaded: Signal<Rc<dyn ConductedItem>>,
    selection_changed: Signal<Rc<dyn ConductedItem>>,
}

impl FakeContainer {
    pub fn new(kind: ContainerKind) -> Rc<Self> {
        Rc::new(Self {
            kind,
            items: RefCell::new(Vec::new()),
            active: Cell::new(None),
            item_loaded: Signal::new(),
            selection_changed: Signal::new(),
        })
    }

    pub fn add_item(&self, item: Rc<FakeItem>) {
        let mut items = self.items.borrow_mut();
        items.push(item);
        if self.active.get().is_none() {
            self.active.set(Some(items.len() - 1));
        }
    }

    pub fn item(&self, index: usize) -> Rc<FakeItem> {
        self.items.borrow()[index].clone()
    }

    /// Changes the active child and fires the pre-transition event.
    pub fn select(&self, index: usize) {
        self.active.set(Some(index));
        let item: Rc<dyn ConductedItem> = self.item(index);
        self.selection_changed.emit(&item);
    }

    /// Changes the active child and fires the post-transition event.
    pub fn load(&self, index: usize) {
        self.active.set(Some(index));
        let item: Rc<dyn ConductedItem> = self.item(index);
        self.item_loaded.emit(&item);
    }
}

impl ItemContainer for FakeContainer {
    fn kind(&self) -> ContainerKind {
        self.kind
    }

    fn items(&self) -> Vec<Rc<dyn ConductedItem>> {
        self.items
            .borrow()
            .iter()
            .map(|item| item.clone() as Rc<dyn ConductedItem>)
            .collect()
    }

    fn active_item(&self) -> Option<Rc<dyn ConductedItem>> {
        self.active.get().map(|index| {
            self.item(index) as Rc<dyn ConductedItem>
        })
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

/// Records scheduled callbacks instead of running them, so tests control
/// exactly when a deferred assignment fires.
pub(super) struct TestScheduler {
    pending: RefCell<Vec<Box<dyn FnOnce()>>>,
    last_delay: Cell<Option<Duration>>,
}

impl TestScheduler {
    pub fn new() -> Rc<Self> {
        Rc::new(Self {
            pending: RefCell::new(Vec::new()),
            last_delay: Cell::new(None),
        })
    }

    pub fn pending_count(&self) -> usize {
        self.pending.borrow().len()
    }

    pub fn last_delay(&self) -> Option<Duration> {
        self.last_delay.get()
    }

    /// Runs every pending callback, in scheduling order. Callbacks scheduled
    /// while firing are held for the next call.
    pub fn fire_all(&self) {
        let pending: Vec<_> = self.pending.borrow_mut().drain(..).collect();
        for callback in pending {
            callback();
        }
    }
}

impl DelayScheduler for TestScheduler {
    fn schedule(&self, delay: Duration, callback: Box<dyn FnOnce()>) {
        self.last_delay.set(Some(delay));
        self.pending.borrow_mut().push(callback);
    }
}

/// A materialized page view carrying one bar definition.
pub(super) fn page_with_bar() -> (Rc<dyn ViewNode>, Rc<BarDefinition>) {
    let bar = BarDefinition::new();
    let page = Element::new();
    let holder = Element::new();
    holder.set_bar(bar.clone());
    page.add_child(holder);
    (page, bar)
}

/// A materialized page view with no bar at all.
pub(super) fn bare_page() -> Rc<dyn ViewNode> {
    Element::new()
}

/// A host view whose only content is `container`.
pub(super) fn host_with(container: Rc<FakeContainer>) -> Rc<dyn ViewNode> {
    let host = Element::new();
    host.set_container(container);
    host
}
