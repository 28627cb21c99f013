/*!
Command-line front end for pqcd.

`pqcd bench` runs full key-generation / encapsulation / signature cycles for
each selected algorithm across concurrent workers and prints the collected
metrics. `pqcd serve` answers JSON-lines requests on stdin, one reply line
per request on stdout, in request order.
*/

use std::process::ExitCode;
use std::time::Instant;

use clap::{Parser, Subcommand};
use rand::Rng;
use rand::distr::Alphanumeric;
use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt, BufReader};
use tokio::task::JoinSet;

use pqcd::api::{
    DecapsulateRequest, EncapsulateRequest, Reply, SignRequest, VerifyRequest, parse_line,
};
use pqcd::core::constants::bench;
use pqcd::{Algorithm, AsyncCryptoHandler, BenchConfig, Capability, CryptoHandler, Error, Result};

#[derive(Parser)]
#[command(
    name = "pqcd",
    version,
    about = "Post-quantum vs classical crypto benchmarking"
)]
struct Cli {
    /// Log filter, e.g. "info" or "pqcd=debug" (overrides RUST_LOG)
    #[arg(long, global = true)]
    log_level: Option<String>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Run operation cycles for each algorithm and report metrics
    Bench {
        /// Full cycles per algorithm
        #[arg(long, default_value_t = bench::DEFAULT_ITERATIONS)]
        iterations: usize,
        /// Concurrent workers
        #[arg(long, default_value_t = bench::DEFAULT_WORKERS)]
        workers: usize,
        /// Bytes of random text signed per signature cycle
        #[arg(long, default_value_t = bench::DEFAULT_MESSAGE_SIZE)]
        message_size: usize,
        /// Comma-separated algorithm tags (default: all)
        #[arg(long, value_delimiter = ',')]
        algorithms: Vec<Algorithm>,
        /// Print the raw JSON report instead of a table
        #[arg(long, default_value_t = false)]
        json: bool,
    },
    /// Answer JSON-lines requests on stdin
    Serve,
}

fn init_logging(filter: Option<&str>) {
    let mut builder = env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"));
    if let Some(filter) = filter {
        builder.parse_filters(filter);
    }
    builder.format_timestamp_millis().init();
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(cli.log_level.as_deref());

    let result = match cli.command {
        Command::Bench {
            iterations,
            workers,
            message_size,
            algorithms,
            json,
        } => {
            let mut config = BenchConfig {
                iterations,
                workers,
                message_size,
                algorithms,
            };
            if config.algorithms.is_empty() {
                config.algorithms = Algorithm::ALL.to_vec();
            }
            run_bench(config, json).await
        }
        Command::Serve => serve().await,
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            log::error!("{}", e);
            eprintln!("error: {}", e);
            ExitCode::FAILURE
        }
    }
}

async fn run_bench(config: BenchConfig, json: bool) -> Result<()> {
    config.validate()?;
    log::info!(
        "benchmark starting: iterations={} workers={} message_size={} algorithms={:?}",
        config.iterations,
        config.workers,
        config.message_size,
        config.algorithms
    );

    let handler = AsyncCryptoHandler::new(CryptoHandler::with_defaults());

    for &algorithm in &config.algorithms {
        let started = Instant::now();
        let mut workers = JoinSet::new();

        for worker in 0..config.workers {
            let share = worker_share(worker, config.iterations, config.workers);
            let handler = handler.clone();
            let message_size = config.message_size;
            workers.spawn(async move {
                for _ in 0..share {
                    run_cycle(&handler, algorithm, message_size).await?;
                }
                Ok::<_, Error>(())
            });
        }

        while let Some(joined) = workers.join_next().await {
            joined.map_err(|e| Error::Internal(format!("benchmark worker failed: {}", e)))??;
        }

        log::info!(
            "{} done: {} cycles in {:.1?}",
            algorithm.display_name(),
            config.iterations,
            started.elapsed()
        );
    }

    let metrics = handler.handler().metrics();
    if json {
        println!("{}", metrics.report_json()?);
    } else {
        println!(
            "{:<12} {:<12} {:>8} {:>12} {:>12} {:>12} {:>10} {:>10} {:>8}",
            "algorithm", "operation", "count", "avg_us", "min_us", "max_us", "in_bytes", "out_bytes", "success"
        );
        for stat in handler.stats() {
            println!(
                "{:<12} {:<12} {:>8} {:>12.1} {:>12.0} {:>12.0} {:>10.0} {:>10.0} {:>8.3}",
                stat.algorithm.display_name(),
                stat.operation.as_str(),
                stat.count,
                stat.avg_latency_micros,
                stat.min_latency_micros,
                stat.max_latency_micros,
                stat.avg_input_bytes,
                stat.avg_output_bytes,
                stat.success_rate
            );
        }
    }
    Ok(())
}

/// Iterations assigned to `worker` when `total` are spread over `workers`
fn worker_share(worker: usize, total: usize, workers: usize) -> usize {
    total / workers + usize::from(worker < total % workers)
}

/// One keygen plus encapsulate/decapsulate or sign/verify round
async fn run_cycle(handler: &AsyncCryptoHandler, algorithm: Algorithm, message_size: usize) -> Result<()> {
    let tag = algorithm.as_str().to_string();
    let keys = handler.keygen(tag.clone()).await?;

    match algorithm.capability() {
        Capability::Kem => {
            let encapsulated = handler
                .encapsulate(EncapsulateRequest {
                    public_key: keys.public_key,
                    algorithm: tag.clone(),
                })
                .await?;
            let decapsulated = handler
                .decapsulate(DecapsulateRequest {
                    private_key: keys.private_key,
                    ciphertext: encapsulated.ciphertext,
                    algorithm: tag,
                })
                .await?;
            if decapsulated.shared_secret != encapsulated.shared_secret {
                log::warn!("{} shared secrets diverged", algorithm);
            }
        }
        Capability::Signature => {
            let message = random_message(message_size);
            let signed = handler
                .sign(
                    tag.clone(),
                    SignRequest {
                        private_key: keys.private_key,
                        message: message.clone(),
                    },
                )
                .await?;
            let verified = handler
                .verify(
                    tag,
                    VerifyRequest {
                        public_key: keys.public_key,
                        message,
                        signature: signed.signature,
                    },
                )
                .await?;
            if !verified.valid {
                log::warn!("{} rejected its own signature", algorithm);
            }
        }
    }
    Ok(())
}

fn random_message(len: usize) -> String {
    rand::rng()
        .sample_iter(&Alphanumeric)
        .take(len)
        .map(char::from)
        .collect()
}

async fn serve() -> Result<()> {
    let handler = AsyncCryptoHandler::new(CryptoHandler::with_defaults());
    log::info!("serving JSON-lines requests on stdin");
    serve_lines(&handler, BufReader::new(tokio::io::stdin()), tokio::io::stdout()).await?;
    log::info!("stdin closed, shutting down");
    Ok(())
}

/// Answer each request line in turn.
///
/// Requests run one at a time so the n-th reply line always belongs to the
/// n-th request line; replies carry no request id. The provider call still
/// runs on the blocking pool.
async fn serve_lines<R, W>(handler: &AsyncCryptoHandler, reader: R, mut writer: W) -> Result<()>
where
    R: AsyncBufRead + Unpin,
    W: AsyncWrite + Unpin,
{
    let mut lines = reader.lines();
    while let Some(line) = lines.next_line().await? {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }

        let reply = match parse_line(line) {
            Ok(request) => Reply::from_result(handler.handle(request).await),
            Err(reply) => reply,
        };

        let mut out = reply.to_line();
        out.push('\n');
        writer.write_all(out.as_bytes()).await?;
        writer.flush().await?;
    }
    Ok(())
}
