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

//! Platform-neutral bar model
//!
//! This module contains the data model and the notification/traversal
//! primitives it is built on:
//! - Observable fields and signals (`observable`)
//! - Bindable buttons, menu items, and bar settings (`types`)
//! - Bar definitions, payloads, and the host slot (`bar`)
//! - View-tree traversal and the applicable-bar rule (`tree`)
//!
//! Nothing here knows about GTK or any other toolkit, so the whole model is
//! unit-testable without a display server.

pub mod bar;
pub mod observable;
pub mod tree;
pub mod types;

pub use bar::{BarDefinition, BarPayload, HostBarSlot, PayloadButton, PayloadMenuItem};
pub use observable::{ObservableField, Signal, SubscriptionId};
pub use tree::{applicable_bar, bar_definitions, descendants, Element, ViewNode};
pub use types::{BarButton, BarItem, BarMenuItem, BarMode, Color};

#[cfg(test)]
mod tests;
