//! Benchmark suite for dataset parsing and ZIP lookup
//!
//! ```bash
//! cargo bench
//! ```
//!
//! The dataset is generated in memory: `n` branches spread over 60 ZIP codes,
//! roughly the shape of the real export scaled up.

use chilib::core::{search, SearchHistory};
use chilib::io::parse_dataset;
use chrono::Local;

fn main() {
    divan::main();
}

fn synthetic_csv(n: usize) -> String {
    let mut body = String::from("BRANCH,SERVICE HOURS,ADDRESS,CITY,STATE,ZIP,PHONE,WEBSITE\n");
    for i in 0..n {
        body.push_str(&format!(
            "Branch {i},\"Mon. - Thurs., 9-8; Fri. & Sat., 9-5\",{i} W. Main St.,Chicago,IL,{zip},(312) 555-{i:04},https://example.org/{i}/\n",
            i = i,
            zip = 60601 + (i % 60),
        ));
    }
    body
}

#[divan::bench(args = [100, 10_000])]
fn parse(bencher: divan::Bencher, n: usize) {
    let body = synthetic_csv(n);
    bencher.bench_local(|| parse_dataset(divan::black_box(&body)).expect("Parsing failed"));
}

#[divan::bench(args = [100, 10_000])]
fn linear_lookup(bencher: divan::Bencher, n: usize) {
    let dataset = parse_dataset(&synthetic_csv(n)).expect("Parsing failed").dataset;
    bencher.bench_local(|| search(dataset.records(), divan::black_box("60616")).len());
}

#[divan::bench]
fn record_into_full_history(bencher: divan::Bencher) {
    let dataset = parse_dataset(&synthetic_csv(600)).expect("Parsing failed").dataset;
    let matches = search(dataset.records(), "60616");
    let mut history = SearchHistory::default();
    let now = Local::now();

    bencher.bench_local(|| history.record(matches.iter().copied(), now));
}
