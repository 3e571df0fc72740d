//! CLI for comparing hash function distribution over a text corpus

use clap::{ArgAction, CommandFactory, Parser, Subcommand, ValueEnum};
use hashbench::bench::{self, build_table};
use hashbench::config::DEFAULT_BUCKET_COUNT;
use hashbench::hashing::Algorithm;
use hashbench::inspect::{render_graph, render_html, render_text};
use hashbench::table::compute_load_factor_from_path;
use hashbench::{text, BenchConfig};
use std::path::PathBuf;
use tracing_subscriber::{
    filter::{EnvFilter, LevelFilter},
    prelude::*,
    registry::Registry,
};

macro_rules! die {
    ($fmt:literal, $($arg:tt)*) => {{
        eprintln!($fmt, $($arg)*);
        std::process::exit(1);
    }};

    ($msg:literal) => {{
        eprintln!($msg);
        std::process::exit(1);
    }};
}

use tracing::{debug, info};

pub fn init_tracing(quiet: bool, verbose: u8) -> LevelFilter {
    let level_filter = if quiet {
        LevelFilter::ERROR
    } else {
        match verbose {
            0 => LevelFilter::WARN,
            1 => LevelFilter::INFO,
            2 => LevelFilter::DEBUG,
            _ => LevelFilter::TRACE,
        }
    };

    // Bridge log crate macros to tracing (the library logs through `log`)
    if tracing_log::LogTracer::init().is_err() {
        die!("INTERNAL ERROR: setting log tracer failed");
    }

    let env_filter = EnvFilter::builder()
        .with_default_directive(level_filter.into())
        .with_env_var("HASHBENCH_LOG")
        .from_env_lossy();

    let subscriber = Registry::default().with(env_filter).with(
        tracing_subscriber::fmt::layer()
            .with_writer(std::io::stderr)
            .compact(),
    );

    if tracing::subscriber::set_global_default(subscriber).is_err() {
        die!("INTERNAL ERROR: setting default tracing::subscriber failed");
    }

    level_filter
}

/// Compare how evenly hash functions spread a corpus across buckets
#[derive(Parser, Debug)]
#[command(name = "hashbench")]
#[command(about = "Compare how evenly hash functions spread a corpus across buckets")]
struct ToolArgs {
    /// Suppress all output except errors
    #[arg(short, long, global = true)]
    quiet: bool,

    /// Use verbose output (-v for info, -vv for debug, -vvv for trace)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug, Clone)]
enum Command {
    /// Build one table per hash function and append a report line for each
    Run {
        /// Text file to tokenize
        #[arg(short, long)]
        corpus: PathBuf,

        /// Report file to append to
        #[arg(short, long)]
        output: PathBuf,

        /// Number of buckets per table
        #[arg(short, long, default_value_t = DEFAULT_BUCKET_COUNT)]
        buckets: usize,

        /// Hash function to include (repeatable, defaults to all)
        #[arg(short, long = "algorithm")]
        algorithms: Vec<Algorithm>,
    },

    /// Print the contents of one bucket
    Dump {
        #[arg(short, long)]
        corpus: PathBuf,

        #[arg(short, long)]
        algorithm: Algorithm,

        /// Index of the bucket to print
        bucket: usize,

        #[arg(short, long, default_value_t = DEFAULT_BUCKET_COUNT)]
        buckets: usize,

        #[arg(short, long, value_enum, default_value_t = DumpFormat::Text)]
        format: DumpFormat,
    },

    /// Print the load factor of a corpus
    #[command(visible_alias = "lf")]
    LoadFactor {
        #[arg(short, long)]
        corpus: PathBuf,

        #[arg(short, long, default_value_t = DEFAULT_BUCKET_COUNT)]
        buckets: usize,

        #[arg(short, long, default_value_t = Algorithm::Crc32)]
        algorithm: Algorithm,
    },
}

#[derive(ValueEnum, Debug, Clone, Copy)]
enum DumpFormat {
    Text,
    Graph,
    Html,
}

fn execute(cmd: Command) -> hashbench::Result<()> {
    match cmd {
        Command::Run {
            corpus,
            output,
            buckets,
            algorithms,
        } => {
            let mut builder = BenchConfig::builder()
                .with_bucket_count(buckets)
                .with_corpus(corpus)
                .with_report(output);
            if !algorithms.is_empty() {
                builder = builder.with_algorithms(algorithms);
            }
            let config = builder.build()?;

            for record in bench::run(&config)? {
                println!("{record}");
            }
        }
        Command::Dump {
            corpus,
            algorithm,
            bucket,
            buckets,
            format,
        } => {
            let elements = text::read_corpus(&corpus)?;
            let table = build_table(buckets, algorithm, &elements)?;
            let chain = table.bucket(bucket)?;
            debug!("bucket {bucket} of {algorithm} holds {} elements", chain.len());

            match format {
                DumpFormat::Text => print!("{}", render_text(chain)),
                DumpFormat::Graph => print!("{}", render_graph(chain)),
                DumpFormat::Html => print!("{}", render_html(chain)),
            }
        }
        Command::LoadFactor {
            corpus,
            buckets,
            algorithm,
        } => {
            let lf = compute_load_factor_from_path(buckets, algorithm, &corpus)?;
            println!("{lf:.6}");
        }
    }
    Ok(())
}

fn main() {
    let args = ToolArgs::parse();
    let level_filter = init_tracing(args.quiet, args.verbose);

    let cmd = ToolArgs::command();
    info!(
        "starting {} ({} {}), log level: {level_filter}",
        cmd.get_name(),
        env!("CARGO_PKG_NAME"),
        env!("CARGO_PKG_VERSION")
    );

    if let Err(e) = execute(args.command) {
        die!("Error: {}", e);
    }
}
