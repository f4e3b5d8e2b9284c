use std::path::Path;
use std::sync::Arc;

use anyhow::Context;
use chrono::Utc;
use futures::FutureExt;
use serde::Serialize;
use serde_json::json;
use tokio::sync::Notify;
use tracing::info;

use crate::cli::RunConfig;
use crate::hub;
use crate::jobs::{DatasetJob, INTERPRETER, JOBS};
use crate::runner::{CommandRunner, Invocation};
use crate::util::{create_run_dir, timestamp, write_artifact};

/// Manifest written into the run directory before the first job starts.
#[derive(Serialize)]
struct RunManifest<'a> {
    started: String,
    push_to_hub: bool,
    hub_user: &'a str,
    jobs: &'a [DatasetJob],
}

/// Public entry used by main.rs. Runs the four dataset jobs in fixed order,
/// stopping at the first failure. Output already written by earlier jobs is
/// left on disk; there is no rollback.
pub async fn run_pipeline(
    base: &Path,
    config: &RunConfig,
    runner: &dyn CommandRunner,
) -> anyhow::Result<()> {
    if config.push_to_hub {
        let tool = hub::check_credentials(runner).await?;
        println!(
            "Hub login verified via '{}'; datasets will upload under '{}/'",
            tool, config.hub_user
        );
    }

    info!("starting data processing run");

    let run_dir = create_run_dir(base)?;
    let manifest = RunManifest {
        started: Utc::now().to_rfc3339(),
        push_to_hub: config.push_to_hub,
        hub_user: &config.hub_user,
        jobs: &JOBS,
    };
    write_artifact(&run_dir, "run.yaml", &serde_yaml::to_string(&manifest)?)?;

    // graceful shutdown notify
    let shutdown = Arc::new(Notify::new());
    {
        let shutdown = shutdown.clone();
        tokio::spawn(async move {
            let _ = tokio::signal::ctrl_c().await;
            eprintln!("Received Ctrl+C; finishing current job and stopping");
            shutdown.notify_one();
        });
    }

    for (idx, job) in JOBS.iter().enumerate() {
        if shutdown.notified().now_or_never().is_some() {
            anyhow::bail!(
                "shutdown requested after {} of {} jobs; skipping the rest",
                idx,
                JOBS.len()
            );
        }

        print_banner(idx, job);
        run_job(job, config, runner).await?;
        record_job(&run_dir, job, config)?;
        println!("{} processing complete -> {}/", job.name, job.output_dir);
        println!();
    }

    print_summary(config);
    info!("data processing run finished");
    Ok(())
}

/// Invoke one processor script. In push mode the processor also uploads,
/// so it gets the upload flag and its hub destination.
async fn run_job(
    job: &DatasetJob,
    config: &RunConfig,
    runner: &dyn CommandRunner,
) -> anyhow::Result<()> {
    let mut args = vec![job.script.to_string()];
    if config.push_to_hub {
        args.push("--push_to_hub".to_string());
        args.push("--hub_name".to_string());
        args.push(job.hub_repo(&config.hub_user));
    }

    let inv = Invocation::new(INTERPRETER, args);
    runner
        .run(&inv)
        .await
        .with_context(|| format!("{} processing failed", job.name))?;
    Ok(())
}

fn record_job(run_dir: &Path, job: &DatasetJob, config: &RunConfig) -> anyhow::Result<()> {
    let meta = json!({
        "job": job.name,
        "script": job.script,
        "output_dir": job.output_dir,
        "hub_repo": config.push_to_hub.then(|| job.hub_repo(&config.hub_user)),
        "timestamp": Utc::now().to_rfc3339(),
    });
    let name = format!("{}_{}.json", job.short_name, timestamp());
    write_artifact(run_dir, &name, &meta.to_string())
}

fn print_banner(idx: usize, job: &DatasetJob) {
    println!("{}", "=".repeat(70));
    println!("[{}/{}] Processing {}", idx + 1, JOBS.len(), job.name);
    println!("{}", "=".repeat(70));
}

fn print_summary(config: &RunConfig) {
    println!("{}", "=".repeat(70));
    println!("All dataset processing finished");
    println!("{}", "=".repeat(70));
    println!("Local outputs:");
    for job in &JOBS {
        println!("  {}/", job.output_dir);
    }
    if config.push_to_hub {
        println!("Uploaded datasets:");
        for job in &JOBS {
            for name in job.hub_datasets(&config.hub_user) {
                println!("  {}", name);
            }
        }
    }
}
