// Copyright 2021-2022 Clemens Lutz
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

//! Generates the shell script that runs the memory transfer microbenchmarks.
//!
//! The sweep covers CMA and shared memory transfers for all combinations of
//! buffer reuse, socket placement, and payload size. After the sweep, the
//! script runs the CUDA copy benchmark once per payload size and the cache
//! benchmark once.

pub mod data_point;
pub mod error;
pub mod script;
pub mod sweep;
pub mod types;
