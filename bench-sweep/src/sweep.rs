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

use crate::types::{Mode, PayloadSize, Program, Repetitions, Temperature};
use itertools::iproduct;
use log::debug;

const BASE_REPETITIONS: Repetitions = Repetitions(100);

/// Small transfers that reuse their buffer finish quickly, thus we repeat
/// them more often to reduce noise.
const SMALL_REUSE_REPETITIONS: Repetitions = Repetitions(100_000);

/// Large transfers don't fit into memory with more repetitions.
const LARGE_REPETITIONS: Repetitions = Repetitions(10);

/// Size that separates small transfers from large transfers
///
/// Transfers of exactly this size are neither small nor large.
const THRESHOLD: PayloadSize = PayloadSize::Mb25;

/// Derives how often a benchmark repeats the transfer.
pub fn repetitions(size: PayloadSize, temperature: Temperature) -> Repetitions {
    let mut reps = BASE_REPETITIONS;

    if size.bytes() < THRESHOLD.bytes() && temperature != Temperature::NoReuse {
        reps = SMALL_REUSE_REPETITIONS;
    }

    if size.bytes() > THRESHOLD.bytes() {
        reps = LARGE_REPETITIONS;
    }

    reps
}

/// One benchmark run of the sweep
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub struct Combination {
    pub temperature: Temperature,
    pub program: Program,
    pub mode: Mode,
    pub size: PayloadSize,
    pub repetitions: Repetitions,
}

impl Combination {
    pub fn new(temperature: Temperature, program: Program, mode: Mode, size: PayloadSize) -> Self {
        Self {
            temperature,
            program,
            mode,
            size,
            repetitions: repetitions(size, temperature),
        }
    }

    /// Name of the file that captures the benchmark's output
    pub fn log_file(&self) -> String {
        format!(
            "{}-{}-{}-{}.log",
            self.program.label(),
            self.mode.label(),
            self.temperature.label(),
            self.size.label()
        )
    }
}

/// The complete set of benchmark runs
///
/// Combinations are ordered by temperature, then program, then mode, then
/// size. The script executes them in this order.
#[derive(Clone, Debug)]
pub struct SweepPlan {
    combinations: Vec<Combination>,
    cuda_sizes: Vec<PayloadSize>,
}

impl SweepPlan {
    pub fn new() -> Self {
        let combinations: Vec<_> = iproduct!(
            Temperature::ALL.iter(),
            Program::ALL.iter(),
            Mode::ALL.iter(),
            PayloadSize::ALL.iter()
        )
        .map(|(&temperature, &program, &mode, &size)| {
            let combination = Combination::new(temperature, program, mode, size);
            debug!(
                "Planned {} {} {} {} with {} repetitions",
                program.label(),
                mode.label(),
                temperature.label(),
                size.label(),
                combination.repetitions
            );
            combination
        })
        .collect();

        Self {
            combinations,
            cuda_sizes: PayloadSize::ALL.to_vec(),
        }
    }

    pub fn combinations(&self) -> &[Combination] {
        &self.combinations
    }

    /// Sizes for the CUDA benchmark, which runs once per size after the sweep
    pub fn cuda_sizes(&self) -> &[PayloadSize] {
        &self.cuda_sizes
    }
}

impl Default for SweepPlan {
    fn default() -> Self {
        Self::new()
    }
}
