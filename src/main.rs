use std::time::Duration;

use anyhow::{Result, bail};
use clap::{Parser, Subcommand};
use tokio_util::sync::CancellationToken;

use taskbench_aggregator::ParallelAggregator;
use taskbench_benchmark::BenchmarkRunner;
use taskbench_executor::{ExecutionStrategy, ExecutorConfig, TaskExecutor};

/// Taskbench - concurrent task execution and parallel aggregation demos
#[derive(Parser)]
#[command(name = "taskbench")]
#[command(version, about, long_about = None)]
struct Cli {
  /// Artificial per-task delay in milliseconds
  #[arg(long, global = true, default_value_t = 100)]
  task_delay_ms: u64,

  #[command(subcommand)]
  command: Commands,
}

#[derive(Subcommand)]
enum Commands {
  /// Execute a batch of concurrent tasks
  Execute {
    /// Number of tasks to run (1 to 10000)
    #[arg(long, default_value_t = 10)]
    tasks: i64,

    /// Run the batch on the bounded worker pool instead of unbounded tasks
    #[arg(long)]
    bounded: bool,
  },

  /// Compare the unbounded strategy against the bounded worker pool
  Benchmark {
    /// Number of tasks per run (1 to 5000)
    #[arg(long, default_value_t = 100)]
    tasks: i64,
  },

  /// Run a single simulated blocking I/O operation
  SimulateIo {
    /// Delay in milliseconds (0 to 30000)
    #[arg(long, default_value_t = 1000)]
    delay_ms: i64,
  },

  /// Fetch from three simulated sources in parallel and aggregate
  FetchParallel,
}

fn main() -> Result<()> {
  tracing_subscriber::fmt()
    .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
    .init();

  let cli = Cli::parse();
  let rt = tokio::runtime::Runtime::new()?;
  rt.block_on(run(cli))
}

async fn run(cli: Cli) -> Result<()> {
  let config = ExecutorConfig {
    task_delay: Duration::from_millis(cli.task_delay_ms),
  };
  let cancel = CancellationToken::new();

  match cli.command {
    Commands::Execute { tasks, bounded } => {
      if !(1..=10_000).contains(&tasks) {
        bail!("number of tasks must be between 1 and 10000");
      }
      let count = tasks as usize;
      let strategy = if bounded {
        ExecutionStrategy::bounded_for(count)
      } else {
        ExecutionStrategy::Unbounded
      };

      let executor = TaskExecutor::new(config);
      let results = executor.execute_batch(count, strategy, cancel).await?;
      println!("{}", serde_json::to_string_pretty(&results)?);
    }

    Commands::Benchmark { tasks } => {
      if !(1..=5_000).contains(&tasks) {
        bail!("number of tasks must be between 1 and 5000");
      }

      let runner = BenchmarkRunner::new(TaskExecutor::new(config));
      let result = runner.run(tasks as usize, cancel).await?;
      eprintln!("{}", result.summary());
      println!("{}", serde_json::to_string_pretty(&result)?);
    }

    Commands::SimulateIo { delay_ms } => {
      if !(0..=30_000).contains(&delay_ms) {
        bail!("delay must be between 0 and 30000ms");
      }

      let executor = TaskExecutor::new(config);
      let result = executor
        .simulate_blocking_io(Duration::from_millis(delay_ms as u64), cancel)
        .await?;
      println!("{}", serde_json::to_string_pretty(&result)?);
    }

    Commands::FetchParallel => {
      let aggregator = ParallelAggregator::with_stock_sources();
      let result = aggregator.fetch_all(cancel).await;
      println!("{}", serde_json::to_string_pretty(&result)?);
    }
  }

  Ok(())
}
