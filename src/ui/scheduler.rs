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

use std::time::Duration;

use crate::conductor::scheduler::DelayScheduler;

/// Runs deferred callbacks on the GLib main loop.
///
/// `timeout_add_local_once` keeps the callback on the UI thread without
/// blocking it during the wait, which is the whole of the scheduler
/// contract; superseded callbacks still fire and are discarded by the
/// conductor's generation check.
pub struct GlibScheduler;

impl DelayScheduler for GlibScheduler {
    fn schedule(&self, delay: Duration, callback: Box<dyn FnOnce()>) {
        glib::timeout_add_local_once(delay, callback);
    }
}
