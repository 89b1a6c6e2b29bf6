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

use bench_sweep::script::{generate_script, script_lines, ScriptWriter};
use bench_sweep::sweep::SweepPlan;
use std::collections::HashSet;
use std::error::Error;

const SWEEP_LEN: usize = 24;
const PREAMBLE_LEN: usize = 3;

#[test]
fn starts_with_preamble() {
    let lines = script_lines(&SweepPlan::new());

    assert_eq!(lines[0], "#!/bin/bash");
    assert_eq!(lines[1], "mkdir -p results");
    assert_eq!(lines[2], "make");
    assert!(lines[3].starts_with("echo "));
}

#[test]
fn every_combination_is_announced_and_run_once() {
    let lines = script_lines(&SweepPlan::new());
    let sweep = &lines[PREAMBLE_LEN..PREAMBLE_LEN + 2 * SWEEP_LEN];

    let announcements: Vec<_> = sweep.iter().step_by(2).collect();
    let runs: Vec<_> = sweep.iter().skip(1).step_by(2).collect();

    assert_eq!(announcements.len(), SWEEP_LEN);
    assert_eq!(runs.len(), SWEEP_LEN);
    assert!(announcements.iter().all(|l| l.starts_with("echo '")));
    assert!(runs
        .iter()
        .all(|l| l.starts_with("./cma ") || l.starts_with("./shmem ")));

    let unique: HashSet<_> = announcements.iter().collect();
    assert_eq!(unique.len(), SWEEP_LEN);
}

#[test]
fn log_files_are_unique() {
    let lines = script_lines(&SweepPlan::new());
    let log_files: Vec<_> = lines
        .iter()
        .filter_map(|l| l.split(" > ").nth(1))
        .map(|redirect| redirect.trim_end_matches(" 2>&1"))
        .collect();

    let unique: HashSet<_> = log_files.iter().collect();
    assert_eq!(log_files.len(), SWEEP_LEN + 3 + 1);
    assert_eq!(unique.len(), log_files.len());
    assert!(log_files.iter().all(|f| f.starts_with("./results/")));
}

#[test]
fn first_and_last_runs_match() {
    let lines = script_lines(&SweepPlan::new());

    assert_eq!(lines[3], "echo 'cma intrasocket reuse 1MB (100000)'");
    assert_eq!(
        lines[4],
        "./cma -i -T -s 1048576 -r 100000 > ./results/cma-intrasocket-reuse-1MB.log 2>&1"
    );

    let last_run = PREAMBLE_LEN + 2 * SWEEP_LEN - 1;
    assert_eq!(
        lines[last_run - 1],
        "echo 'shmem intersocket noreuse 200MB (10)'"
    );
    assert_eq!(
        lines[last_run],
        "./shmem -I -t -s 209715200 -r 10 > ./results/shmem-intersocket-noreuse-200MB.log 2>&1"
    );
}

#[test]
fn sweep_is_followed_by_cuda_and_cache() {
    let lines = script_lines(&SweepPlan::new());
    let trailer = &lines[PREAMBLE_LEN + 2 * SWEEP_LEN..];

    let expected = [
        "echo './cuda 1MB'",
        "./cuda 1048576 > ./results/cuda-1MB.log 2>&1",
        "echo './cuda 25MB'",
        "./cuda 26214400 > ./results/cuda-25MB.log 2>&1",
        "echo './cuda 200MB'",
        "./cuda 209715200 > ./results/cuda-200MB.log 2>&1",
        "echo 'Caching perf'",
        "./cache > ./results/caches.log 2>&1",
    ];
    assert_eq!(trailer, &expected[..]);
}

#[test]
fn generate_is_deterministic() {
    let first = generate_script();
    let second = generate_script();

    assert_eq!(first, second);
    assert!(first.ends_with("./cache > ./results/caches.log 2>&1\n"));
    assert_eq!(first.lines().count(), PREAMBLE_LEN + 2 * SWEEP_LEN + 8);
}

#[test]
fn writer_matches_generated_script() -> Result<(), Box<dyn Error>> {
    let mut writer = ScriptWriter::new(Vec::new());
    writer.write(&SweepPlan::new())?;
    let written = String::from_utf8(writer.into_inner())?;

    assert_eq!(written, generate_script());
    Ok(())
}
