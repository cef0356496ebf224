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

//! Bar synchronization
//!
//! The conductor observes a container's selection events and decides which
//! bar occupies the host page's slot:
//! - `container`: the collaborator contracts the conductor syncs against
//! - `sync`: the conductor itself
//! - `gate`: attach-time deferral of self-installing bars
//! - `scheduler`: the carousel-transition timing seam
//! - `error`: attach-time configuration errors

pub mod container;
pub mod error;
pub(crate) mod gate;
pub mod scheduler;
pub mod sync;

pub use container::{ConductedItem, ContainerKind, ItemContainer};
pub use error::ConductorError;
pub use scheduler::{DelayScheduler, ImmediateScheduler};
pub use sync::{BarConductor, ConductorOptions, DEFAULT_WAIT_THRESHOLD};

#[cfg(test)]
mod tests;
