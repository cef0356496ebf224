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

use thiserror::Error;

/// Errors raised when attaching a conductor.
///
/// These are caller-configuration bugs surfaced at attach time, not runtime
/// conditions to recover from; a missing view or bar definition during
/// synchronization is handled silently instead.
#[derive(Debug, Error)]
pub enum ConductorError {
    /// The host view contains neither a tabbed nor a carousel container.
    #[error("the conductor must have a tabbed or carousel container to sync with")]
    MissingSelector,
}
