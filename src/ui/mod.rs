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

//! GTK4 adapters
//!
//! Maps the conductor's collaborator contracts onto real widgets:
//!
//! - [`NotebookContainer`]: `gtk4::Notebook` as the tabbed container
//! - [`StackContainer`]: `gtk4::Stack` with animated transitions as the
//!   carousel container
//! - [`BoundPage`]: one container child plus the bars declared on it
//! - [`BarWidget`]: renders the host slot's payload
//! - [`GlibScheduler`]: the deferred-assignment wait on the GLib main loop

mod bar_widget;
mod containers;
mod pages;
mod scheduler;

pub use bar_widget::BarWidget;
pub use containers::{NotebookContainer, StackContainer};
pub use pages::BoundPage;
pub use scheduler::GlibScheduler;
