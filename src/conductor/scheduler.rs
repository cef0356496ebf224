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

//! Deferred-assignment timing seam
//!
//! In carousel mode the conductor waits out the transition animation before
//! assigning a bar into an empty slot. How that wait happens is a platform
//! concern, so it sits behind [`DelayScheduler`]:
//!
//! - the GTK adapter arms a main-context timeout (`ui::GlibScheduler`)
//! - an embedder with a worker thread can sleep there and marshal the
//!   callback back through its own channel
//! - tests record callbacks and fire them by hand
//!
//! Two contract points regardless of implementation: the callback must run
//! on the UI thread, and the wait must not block it. Cancellation is not the
//! scheduler's job — the conductor checks its own generation counter when
//! the callback fires, so a superseded callback wakes once and does nothing.

use std::time::Duration;

pub trait DelayScheduler {
    /// Runs `callback` on the UI thread after roughly `delay`.
    fn schedule(&self, delay: Duration, callback: Box<dyn FnOnce()>);
}

/// Runs callbacks inline, ignoring the delay.
///
/// Suitable when no transition animation exists to wait out (pure tabbed
/// setups, headless use); the deferred assignment degenerates to an
/// immediate one.
pub struct ImmediateScheduler;

impl DelayScheduler for ImmediateScheduler {
    fn schedule(&self, _delay: Duration, callback: Box<dyn FnOnce()>) {
        callback();
    }
}
