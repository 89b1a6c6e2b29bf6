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

//! The axes of the benchmark sweep and their command-line encodings.

use serde_derive::Serialize;
use std::fmt;

const MB: u64 = 1024 * 1024;

/// Buffer reuse policy
///
/// `Reuse` transfers repeatedly from a buffer that was allocated and mapped
/// once. `NoReuse` allocates a fresh buffer for each transfer.
#[derive(Copy, Clone, Debug, Eq, Hash, PartialEq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Temperature {
    Reuse,
    NoReuse,
}

impl Temperature {
    pub const ALL: [Temperature; 2] = [Temperature::Reuse, Temperature::NoReuse];

    pub fn label(self) -> &'static str {
        match self {
            Temperature::Reuse => "reuse",
            Temperature::NoReuse => "noreuse",
        }
    }

    pub fn flag(self) -> &'static str {
        match self {
            Temperature::Reuse => "-T",
            Temperature::NoReuse => "-t",
        }
    }
}

/// Transfer benchmark program
///
/// Selects the binary that the script runs, i.e., `./cma` or `./shmem`.
#[derive(Copy, Clone, Debug, Eq, Hash, PartialEq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Program {
    /// Cross memory attach (`process_vm_readv`)
    Cma,
    /// POSIX shared memory
    Shmem,
}

impl Program {
    pub const ALL: [Program; 2] = [Program::Cma, Program::Shmem];

    pub fn label(self) -> &'static str {
        match self {
            Program::Cma => "cma",
            Program::Shmem => "shmem",
        }
    }
}

/// Placement of the communicating processes
#[derive(Copy, Clone, Debug, Eq, Hash, PartialEq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Mode {
    /// Both processes run on cores of the same CPU socket
    IntraSocket,
    /// The processes run on different CPU sockets
    InterSocket,
}

impl Mode {
    pub const ALL: [Mode; 2] = [Mode::IntraSocket, Mode::InterSocket];

    pub fn label(self) -> &'static str {
        match self {
            Mode::IntraSocket => "intrasocket",
            Mode::InterSocket => "intersocket",
        }
    }

    pub fn flag(self) -> &'static str {
        match self {
            Mode::IntraSocket => "-i",
            Mode::InterSocket => "-I",
        }
    }
}

/// Transfer payload size
#[derive(Copy, Clone, Debug, Eq, Hash, PartialEq, Serialize)]
pub enum PayloadSize {
    #[serde(rename = "1MB")]
    Mb1,
    #[serde(rename = "25MB")]
    Mb25,
    #[serde(rename = "200MB")]
    Mb200,
}

impl PayloadSize {
    pub const ALL: [PayloadSize; 3] = [PayloadSize::Mb1, PayloadSize::Mb25, PayloadSize::Mb200];

    pub fn label(self) -> &'static str {
        match self {
            PayloadSize::Mb1 => "1MB",
            PayloadSize::Mb25 => "25MB",
            PayloadSize::Mb200 => "200MB",
        }
    }

    pub fn bytes(self) -> Bytes {
        match self {
            PayloadSize::Mb1 => Bytes(MB),
            PayloadSize::Mb25 => Bytes(25 * MB),
            PayloadSize::Mb200 => Bytes(200 * MB),
        }
    }
}

/// Payload size in bytes
#[derive(Copy, Clone, Debug, Default, Eq, Hash, Ord, PartialEq, PartialOrd, Serialize)]
pub struct Bytes(pub u64);

impl fmt::Display for Bytes {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Number of times a benchmark repeats the transfer
#[derive(Copy, Clone, Debug, Default, Eq, Hash, Ord, PartialEq, PartialOrd, Serialize)]
pub struct Repetitions(pub u32);

impl fmt::Display for Repetitions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}
