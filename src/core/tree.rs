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

//! View-tree traversal
//!
//! The conductor never talks to a real widget tree; it sees views through the
//! [`ViewNode`] trait and walks them with the lazy iterators here:
//!
//! - [`descendants`]: breadth-first, used for locating a container inside a
//!   host view
//! - [`descendants_document_order`]: pre-order, used for the applicable-bar
//!   tie-break ("last visible bar in document order wins")
//!
//! Both are finite, restartable sequences; call the function again for a
//! fresh walk. [`Element`] is a concrete node for tests, demos, and adapter
//! glue.

use std::collections::VecDeque;
use std::rc::Rc;

use crate::conductor::container::ItemContainer;
use crate::core::bar::BarDefinition;

/// A node in a view tree.
///
/// Implementations expose their children in document order. The default
/// `bar`/`container` accessors return `None`; nodes carrying a bar definition
/// or hosting a tab/carousel container override them.
pub trait ViewNode {
    fn child_nodes(&self) -> Vec<Rc<dyn ViewNode>>;

    fn bar(&self) -> Option<Rc<BarDefinition>> {
        None
    }

    fn container(&self) -> Option<Rc<dyn ItemContainer>> {
        None
    }
}

/// All descendants of `root` (excluding `root`), breadth-first.
pub fn descendants(root: &Rc<dyn ViewNode>) -> impl Iterator<Item = Rc<dyn ViewNode>> {
    let mut queue: VecDeque<Rc<dyn ViewNode>> = root.child_nodes().into();
    std::iter::from_fn(move || {
        let node = queue.pop_front()?;
        queue.extend(node.child_nodes());
        Some(node)
    })
}

/// `root` followed by all its descendants, breadth-first.
pub fn descendants_and_self(root: &Rc<dyn ViewNode>) -> impl Iterator<Item = Rc<dyn ViewNode>> {
    std::iter::once(root.clone()).chain(descendants(root))
}

/// All descendants of `root` (excluding `root`) in document order
/// (pre-order, children in declaration order).
pub fn descendants_document_order(
    root: &Rc<dyn ViewNode>,
) -> impl Iterator<Item = Rc<dyn ViewNode>> {
    let mut stack: Vec<Rc<dyn ViewNode>> = root.child_nodes();
    stack.reverse();
    std::iter::from_fn(move || {
        let node = stack.pop()?;
        let mut children = node.child_nodes();
        children.reverse();
        stack.extend(children);
        Some(node)
    })
}

/// Every bar definition below `view`, in document order.
pub fn bar_definitions(view: &Rc<dyn ViewNode>) -> impl Iterator<Item = Rc<BarDefinition>> {
    descendants_document_order(view).filter_map(|node| node.bar())
}

/// The bar to display for `view`: the last visible definition in document
/// order, or `None` when no visible bar exists (which is not an error).
///
/// "Last visible wins" is what makes hot-swapping work: a view may declare
/// two bars and toggle their visibility, and only one is ever live.
pub fn applicable_bar(view: &Rc<dyn ViewNode>) -> Option<Rc<BarDefinition>> {
    bar_definitions(view).filter(|bar| bar.is_visible()).last()
}

/// The first container of `kind` at or below `root`, breadth-first.
pub fn find_container(
    root: &Rc<dyn ViewNode>,
    kind: crate::conductor::container::ContainerKind,
) -> Option<Rc<dyn ItemContainer>> {
    descendants_and_self(root)
        .filter_map(|node| node.container())
        .find(|container| container.kind() == kind)
}

/// A plain tree node for building view structures in code.
///
/// Adapters and tests compose these; an `Element` may carry a bar
/// definition, a container, child elements, or any mix.
pub struct Element {
    children: std::cell::RefCell<Vec<Rc<dyn ViewNode>>>,
    bar: std::cell::RefCell<Option<Rc<BarDefinition>>>,
    container: std::cell::RefCell<Option<Rc<dyn ItemContainer>>>,
}

impl Element {
    pub fn new() -> Rc<Self> {
        Rc::new(Self {
            children: std::cell::RefCell::new(Vec::new()),
            bar: std::cell::RefCell::new(None),
            container: std::cell::RefCell::new(None),
        })
    }

    pub fn add_child(&self, child: Rc<dyn ViewNode>) {
        self.children.borrow_mut().push(child);
    }

    pub fn set_bar(&self, bar: Rc<BarDefinition>) {
        *self.bar.borrow_mut() = Some(bar);
    }

    pub fn set_container(&self, container: Rc<dyn ItemContainer>) {
        *self.container.borrow_mut() = Some(container);
    }
}

impl ViewNode for Element {
    fn child_nodes(&self) -> Vec<Rc<dyn ViewNode>> {
        self.children.borrow().clone()
    }

    fn bar(&self) -> Option<Rc<BarDefinition>> {
        self.bar.borrow().clone()
    }

    fn container(&self) -> Option<Rc<dyn ItemContainer>> {
        self.container.borrow().clone()
    }
}
