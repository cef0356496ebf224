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

//! Bindable Application Bar
//!
//! Bindable bar models plus a conductor that keeps a page's application bar
//! in sync with the currently active child of a tabbed or carousel
//! container.
//!
//! # Features
//!
//! - **Bindable bars:** buttons and menu items driven by observable fields;
//!   any property change rebuilds the bar's renderable payload
//! - **One live bar per view:** several bars may be declared in one view and
//!   hot-swapped by toggling visibility — the last visible one wins
//! - **Carousel-safe switching:** assignments into an empty slot wait out
//!   the transition animation, and "no bar" empties the current payload in
//!   place instead of aborting the animation
//! - **Deferral gate:** suppresses the "last view to load wins" race by
//!   pre-marking inactive children's bars as deferred
//! - **Toolkit-neutral core:** containers, views, and timing are trait
//!   collaborators; GTK4 adapters live behind the `gtk` feature
//!
//! # Architecture
//!
//! - **`core`:** observable fields, bar items, bar definitions/payloads, the
//!   host slot, view-tree traversal
//! - **`conductor`:** the synchronization state machine, deferral gate, and
//!   the collaborator contracts it drives
//! - **`ui`** (feature `gtk`): `Notebook`/`Stack` containers, a slot
//!   renderer widget, and a main-loop scheduler
//!
//! # Example
//!
//! Declaring a bar and reading its payload:
//!
//! ```
//! use bindable_appbar::{BarButton, BarDefinition, BarMenuItem};
//!
//! let bar = BarDefinition::new();
//! let refresh = BarButton::new("view-refresh-symbolic", "refresh");
//! refresh.connect_clicked(|_| println!("refresh"));
//! bar.add_button(refresh.clone());
//! bar.add_menu_item(BarMenuItem::new("about"));
//!
//! assert_eq!(bar.payload().buttons().len(), 1);
//!
//! // Hiding an item drops it from the payload on the next rebuild.
//! refresh.set_visible(false);
//! assert!(bar.payload().buttons().is_empty());
//! ```
//!
//! Attaching a conductor (the container comes from the `ui` adapters or
//! your own [`conductor::ItemContainer`] implementation):
//!
//! ```no_run
//! # use std::rc::Rc;
//! # use bindable_appbar::core::tree::{Element, ViewNode};
//! # use bindable_appbar::{BarConductor, HostBarSlot};
//! # fn container() -> Rc<dyn bindable_appbar::conductor::ItemContainer> { unimplemented!() }
//! let host = Element::new();
//! host.set_container(container());
//! let host: Rc<dyn ViewNode> = host;
//!
//! let slot = HostBarSlot::new();
//! let conductor = BarConductor::attach(&host, slot.clone())?;
//! // ... later ...
//! conductor.detach();
//! # Ok::<(), bindable_appbar::ConductorError>(())
//! ```

pub mod conductor;
pub mod core;
#[cfg(feature = "gtk")]
pub mod ui;

// Re-export commonly used types for convenience
pub use crate::conductor::{BarConductor, ConductorError, ConductorOptions};
pub use crate::core::bar::{BarDefinition, BarPayload, HostBarSlot};
pub use crate::core::types::{BarButton, BarItem, BarMenuItem, BarMode, Color};
