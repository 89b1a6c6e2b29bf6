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

use bench_sweep::data_point;
use bench_sweep::error::Result;
use bench_sweep::script::ScriptWriter;
use bench_sweep::sweep::SweepPlan;
use log::info;
use std::io;
use std::path::PathBuf;
use structopt::StructOpt;

#[derive(StructOpt)]
#[structopt(
    name = "bench-sweep",
    about = "Prints a bash script that runs the memory transfer benchmark sweep"
)]
struct Options {
    #[structopt(long = "csv", parse(from_os_str))]
    /// Also write the sweep plan to a CSV file
    csv: Option<PathBuf>,
}

fn main() -> Result<()> {
    env_logger::init();

    let options = Options::from_args();
    let plan = SweepPlan::new();

    if let Some(ref path) = options.csv {
        info!("Writing sweep plan to {}", path.display());
        let csv_file = std::fs::File::create(path)?;
        data_point::write_csv(&plan, csv_file)?;
    }

    let stdout = io::stdout();
    let mut script = ScriptWriter::new(stdout.lock());
    script.write(&plan)?;

    Ok(())
}
