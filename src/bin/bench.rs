//! ingest-bench - 对摄取服务反复发送大请求体并统计吞吐

use anyhow::{bail, Context};
use bytes::Bytes;
use clap::Parser;
use ingest::domain::ingestion::{ByteSize, Elapsed};
use rand::Rng;
use std::time::{Duration, Instant};
use tracing::{info, Level};

#[derive(Parser, Debug)]
#[command(name = "ingest-bench")]
#[command(about = "Measures POST throughput against an ingest server", long_about = None)]
struct Args {
    /// IP address to send data to
    #[arg(short, long, default_value = "127.0.0.1")]
    address: String,

    /// Port to send data to
    #[arg(short, long, default_value_t = 5003)]
    port: u16,

    /// Url path to send data to
    #[arg(short, long, default_value = "/")]
    url: String,

    /// Payload size of every send, in bytes
    #[arg(short, long, default_value_t = 100 * 1024 * 1024)]
    size_bytes: usize,

    /// Sends before measuring
    #[arg(short, long, default_value_t = 40)]
    warmup: usize,

    /// Measured sends
    #[arg(short = 'n', long, default_value_t = 100, value_parser = clap::value_parser!(u32).range(1..))]
    iterations: u32,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_target(false)
        .compact()
        .with_max_level(Level::DEBUG)
        .init();

    let args = Args::parse();

    benchmark(&args).await
}

#[tracing::instrument(skip_all)]
async fn benchmark(args: &Args) -> anyhow::Result<()> {
    let client = reqwest::Client::new();
    let target = format!("http://{}:{}{}", args.address, args.port, args.url);
    let payload = random_payload(args.size_bytes);
    let size = ByteSize::new(args.size_bytes as u64);

    info!("benchmarking {}", target);

    for iteration in 1..=args.warmup {
        info!("[{} / {}] warming up", iteration, args.warmup);
        send_and_measure(&client, &target, payload.clone()).await?;
    }

    let mut sum = Duration::ZERO;
    for iteration in 1..=args.iterations {
        let time = send_and_measure(&client, &target, payload.clone()).await?;
        info!(
            "[{} / {}] send {} took {} ({}/s)",
            iteration,
            args.iterations,
            size,
            Elapsed::new(time),
            ByteSize::new(bytes_per_second(args.size_bytes as u64, time))
        );

        sum += time;
    }

    let average = sum / args.iterations;
    info!(
        "{} sends, average response {} (total {} at {}/s)",
        args.iterations,
        Elapsed::new(average),
        ByteSize::new((args.size_bytes as u64).saturating_mul(u64::from(args.iterations))),
        ByteSize::new(bytes_per_second(args.size_bytes as u64, average))
    );

    Ok(())
}

fn random_payload(size: usize) -> Bytes {
    let mut buf = vec![0u8; size];
    rand::thread_rng().fill(&mut buf[..]);
    Bytes::from(buf)
}

async fn send_and_measure(
    client: &reqwest::Client,
    target: &str,
    payload: Bytes,
) -> anyhow::Result<Duration> {
    let start_time = Instant::now();

    let response = client
        .post(target)
        .body(payload)
        .send()
        .await
        .with_context(|| format!("could not send to {}", target))?;

    let elapsed = start_time.elapsed();

    if !response.status().is_success() {
        bail!("expected a success response but got {}", response.status());
    }

    Ok(elapsed)
}

fn bytes_per_second(data_bytes: u64, time: Duration) -> u64 {
    let secs = time.as_secs_f64();
    if secs == 0.0 {
        return 0;
    }
    (data_bytes as f64 / secs) as u64
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let args = Args::try_parse_from(["ingest-bench"]).unwrap();
        assert_eq!(args.port, 5003);
        assert_eq!(args.size_bytes, 100 * 1024 * 1024);
        assert_eq!(args.warmup, 40);
        assert_eq!(args.iterations, 100);
    }

    #[test]
    fn test_iterations_beyond_u32_are_rejected() {
        assert!(Args::try_parse_from(["ingest-bench", "-n", "4294967296"]).is_err());
        assert!(Args::try_parse_from(["ingest-bench", "-n", "0"]).is_err());

        let args = Args::try_parse_from(["ingest-bench", "-n", "4294967295"]).unwrap();
        assert_eq!(Duration::from_secs(8_589_934_590) / args.iterations, Duration::from_secs(2));
    }

    #[test]
    fn test_bytes_per_second() {
        assert_eq!(bytes_per_second(1024, Duration::from_millis(500)), 2048);
        assert_eq!(bytes_per_second(1024, Duration::ZERO), 0);
    }
}
