use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use serde::Deserialize;
use std::collections::BTreeMap;
use std::fs;
use std::io::Write;
use std::path::Path;
use std::process::Command;
use std::time::Instant;

#[derive(Parser)]
#[command(name = "xtask")]
#[command(about = "ringdeque workspace automation", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the deque benchmarks against std::collections::VecDeque
    Bench {
        /// Run quickly (lower sample size/time)
        #[arg(long, default_value_t = false)]
        quick: bool,

        /// Generate report only (skip running benchmarks)
        #[arg(long, default_value_t = false)]
        report_only: bool,
    },
    /// Run the test suite with default features and with every optional feature
    Test,
}

const BENCH: &str = "ring_deque_benchmark";
const BASELINE: &str = "std::VecDeque";
const CANDIDATE: &str = "RingDeque";

/// Subset of criterion's `benchmark.json`.
#[derive(Deserialize)]
struct BenchmarkId {
    group_id: String,
    function_id: Option<String>,
    throughput: Option<serde_json::Value>,
}

/// Subset of criterion's `estimates.json`.
#[derive(Deserialize)]
struct Estimates {
    mean: Estimate,
}

#[derive(Deserialize)]
struct Estimate {
    point_estimate: f64,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Bench { quick, report_only } => {
            if !report_only {
                run_benchmarks(quick)?;
            }
            generate_report()?;
        }
        Commands::Test => run_tests()?,
    }

    Ok(())
}

/// Feature sets the test suite must pass under.
const FEATURE_SETS: &[&[&str]] = &[&[], &["--features", "tracing"]];

fn run_tests() -> Result<()> {
    for features in FEATURE_SETS {
        println!(">>> cargo test -p ringdeque {}", features.join(" "));
        let status = Command::new("cargo")
            .args(["test", "-p", "ringdeque"])
            .args(*features)
            .status()
            .context("Failed to launch cargo test")?;
        if !status.success() {
            anyhow::bail!("Tests failed with features {features:?}: {status}");
        }
    }
    Ok(())
}

fn run_benchmarks(quick: bool) -> Result<()> {
    println!("Running {BENCH}...");
    let start = Instant::now();

    let mut cmd = Command::new("cargo");
    cmd.env("CARGO_INCREMENTAL", "0");
    cmd.args(["bench", "--bench", BENCH]);

    // Args for the test runner (Criterion) go after --
    cmd.arg("--");
    if quick {
        cmd.arg("--measurement-time").arg("0.1");
        cmd.arg("--noplot");
        cmd.arg("--sample-size").arg("10");
    }

    let status = cmd.status().context("Failed to launch cargo bench")?;
    if !status.success() {
        anyhow::bail!("Benchmark run failed: {status}");
    }
    println!("Finished in {:.2?}", start.elapsed());
    Ok(())
}

fn generate_report() -> Result<()> {
    println!("\n>>> Generating Report...");
    let criterion_dir = Path::new("target/criterion");
    if !criterion_dir.exists() {
        eprintln!("No criterion output found at {}", criterion_dir.display());
        return Ok(());
    }

    // group -> function -> ops/s
    let mut results: BTreeMap<String, BTreeMap<String, f64>> = BTreeMap::new();
    collect_results(criterion_dir, &mut results)?;

    let report_path = Path::new("benchmark_results/report.md");
    if let Some(parent) = report_path.parent() {
        fs::create_dir_all(parent)?;
    }
    let mut file = fs::File::create(report_path)
        .with_context(|| format!("Failed to create {}", report_path.display()))?;

    writeln!(file, "# RingDeque Benchmark Report")?;
    writeln!(file)?;
    writeln!(file, "| Workload | {BASELINE} (Ops/s) | {CANDIDATE} (Ops/s) | vs {BASELINE} |")?;
    writeln!(file, "|---|---|---|---|")?;

    for (group, functions) in &results {
        let baseline = functions.get(BASELINE).copied();
        let candidate = functions.get(CANDIDATE).copied();
        let rel = match (baseline, candidate) {
            (Some(b), Some(c)) if b > 0.0 => format!("**{:.2}x**", c / b),
            _ => "-".to_string(),
        };
        writeln!(
            file,
            "| {} | {} | {} | {} |",
            group,
            baseline.map_or_else(|| "N/A".to_string(), format_ops),
            candidate.map_or_else(|| "N/A".to_string(), format_ops),
            rel
        )?;
    }

    println!("Report written to {}", report_path.display());
    Ok(())
}

fn format_ops(ops: f64) -> String {
    if ops > 1_000_000.0 {
        format!("{:.2}M", ops / 1_000_000.0)
    } else if ops > 1_000.0 {
        format!("{:.2}K", ops / 1_000.0)
    } else {
        format!("{ops:.0}")
    }
}

/// Walks criterion output looking for `new/benchmark.json` + `new/estimates.json` pairs.
fn collect_results(dir: &Path, results: &mut BTreeMap<String, BTreeMap<String, f64>>) -> Result<()> {
    let entries = match fs::read_dir(dir) {
        Ok(e) => e,
        Err(_) => return Ok(()),
    };

    for entry in entries.flatten() {
        let path = entry.path();
        if !path.is_dir() {
            continue;
        }
        if path.file_name().and_then(|s| s.to_str()) != Some("new") {
            collect_results(&path, results)?;
            continue;
        }

        let bench_json = path.join("benchmark.json");
        let estimates_json = path.join("estimates.json");
        if !bench_json.exists() || !estimates_json.exists() {
            continue;
        }

        let id: BenchmarkId = serde_json::from_str(&fs::read_to_string(&bench_json)?)
            .with_context(|| format!("Malformed {}", bench_json.display()))?;
        let estimates: Estimates = serde_json::from_str(&fs::read_to_string(&estimates_json)?)
            .with_context(|| format!("Malformed {}", estimates_json.display()))?;

        let Some(function) = id.function_id else { continue };
        let time_ns = estimates.mean.point_estimate;
        if time_ns <= 0.0 {
            continue;
        }

        let elements = id
            .throughput
            .as_ref()
            .and_then(|t| t.get("Elements"))
            .and_then(serde_json::Value::as_f64)
            .unwrap_or(1.0);
        results
            .entry(id.group_id)
            .or_default()
            .insert(function, (elements * 1e9) / time_ns);
    }

    Ok(())
}
