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

use crate::error::Result;
use crate::sweep::{Combination, SweepPlan};
use crate::types::*;
use serde_derive::Serialize;
use std::io::Write;

/// A row of the sweep plan export
#[derive(Clone, Debug, Serialize)]
pub struct DataPoint {
    pub program: Program,
    pub mode: Mode,
    pub temperature: Temperature,
    pub size: PayloadSize,
    pub bytes: Bytes,
    pub repetitions: Repetitions,
    pub log_file: String,
}

impl From<&Combination> for DataPoint {
    fn from(c: &Combination) -> Self {
        Self {
            program: c.program,
            mode: c.mode,
            temperature: c.temperature,
            size: c.size,
            bytes: c.size.bytes(),
            repetitions: c.repetitions,
            log_file: c.log_file(),
        }
    }
}

/// Writes one CSV row per combination, in sweep order.
pub fn write_csv<W: Write>(plan: &SweepPlan, writer: W) -> Result<()> {
    let mut csv = csv::Writer::from_writer(writer);
    plan.combinations()
        .iter()
        .map(DataPoint::from)
        .try_for_each(|row| csv.serialize(row))?;
    csv.flush()?;
    Ok(())
}
