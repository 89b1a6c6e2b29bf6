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

//! Renders a sweep plan as a bash script.
//!
//! The script creates the `results` directory, builds the benchmarks with
//! `make`, and then runs each benchmark with its output redirected into a log
//! file in `results`. Each run is preceded by an `echo` that announces it.

use crate::error::Result;
use crate::sweep::{Combination, SweepPlan};
use crate::types::PayloadSize;
use log::info;
use std::io::Write;

const SHEBANG: &str = "#!/bin/bash";
const RESULTS_DIR: &str = "results";
const BUILD_COMMAND: &str = "make";

fn announce(message: &str) -> String {
    format!("echo '{}'", message)
}

fn redirect(command: &str, log_file: &str) -> String {
    format!("{} > ./{}/{} 2>&1", command, RESULTS_DIR, log_file)
}

fn preamble() -> Vec<String> {
    vec![
        SHEBANG.to_string(),
        format!("mkdir -p {}", RESULTS_DIR),
        BUILD_COMMAND.to_string(),
    ]
}

fn transfer_run(c: &Combination) -> [String; 2] {
    let announcement = announce(&format!(
        "{} {} {} {} ({})",
        c.program.label(),
        c.mode.label(),
        c.temperature.label(),
        c.size.label(),
        c.repetitions
    ));
    let command = format!(
        "./{} {} {} -s {} -r {}",
        c.program.label(),
        c.mode.flag(),
        c.temperature.flag(),
        c.size.bytes(),
        c.repetitions
    );

    [announcement, redirect(&command, &c.log_file())]
}

fn cuda_run(size: PayloadSize) -> [String; 2] {
    [
        announce(&format!("./cuda {}", size.label())),
        redirect(
            &format!("./cuda {}", size.bytes()),
            &format!("cuda-{}.log", size.label()),
        ),
    ]
}

fn cache_run() -> [String; 2] {
    [announce("Caching perf"), redirect("./cache", "caches.log")]
}

/// Returns the script's lines in execution order, without line terminators.
pub fn script_lines(plan: &SweepPlan) -> Vec<String> {
    let mut lines = preamble();

    for c in plan.combinations() {
        lines.extend(transfer_run(c).iter().cloned());
    }

    for &size in plan.cuda_sizes() {
        lines.extend(cuda_run(size).iter().cloned());
    }

    lines.extend(cache_run().iter().cloned());
    lines
}

/// Returns the complete script for the default sweep.
///
/// The output only depends on constants, thus every call returns the same
/// string.
pub fn generate_script() -> String {
    script_lines(&SweepPlan::new())
        .iter()
        .map(|line| format!("{}\n", line))
        .collect()
}

/// Writes the script for a sweep plan line by line.
pub struct ScriptWriter<W: Write> {
    writer: W,
}

impl<W: Write> ScriptWriter<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    pub fn write(&mut self, plan: &SweepPlan) -> Result<()> {
        for line in script_lines(plan) {
            writeln!(self.writer, "{}", line)?;
        }
        self.writer.flush()?;

        info!(
            "Wrote {} benchmark runs and {} trailing runs",
            plan.combinations().len(),
            plan.cuda_sizes().len() + 1
        );

        Ok(())
    }

    pub fn into_inner(self) -> W {
        self.writer
    }
}
