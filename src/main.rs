use std::io::{self, BufWriter, Write};
use std::path::PathBuf;

use anyhow::Context;
use clap::{Args, Parser, Subcommand, ValueEnum};
use env_logger::Env;
use log::{debug, info, warn};
use rand::SeedableRng;
use rand::rngs::StdRng;
use serde::Serialize;

use periodic_lattice::config::LatticeSpec;
use periodic_lattice::lattice::{Lattice, create_lattice};

#[derive(Parser)]
#[command(name = "periodic-lattice")]
#[command(about = "Inspect periodic lattices used by Monte Carlo simulations")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Number of threads to use (default: all available cores)
    #[arg(short, long, global = true)]
    threads: Option<usize>,
}

#[derive(Args)]
struct LatticeArgs {
    /// Lattice topology (square, chain, cubic)
    #[arg(short = 'l', long, default_value = "square")]
    topology: String,

    /// Number of sites along each axis, comma separated
    #[arg(short, long, value_delimiter = ',', default_values_t = [4usize, 4])]
    sizes: Vec<usize>,

    /// JSON lattice description; takes precedence over --topology and --sizes
    #[arg(short, long)]
    config: Option<PathBuf>,
}

#[derive(Clone, Copy, ValueEnum)]
enum DumpFormat {
    Text,
    Json,
}

#[derive(Subcommand)]
enum Commands {
    /// Print a summary of the lattice, optionally with the neighbourhood of one site
    Info {
        #[command(flatten)]
        lattice: LatticeArgs,

        /// Site to describe
        #[arg(long)]
        site: Option<usize>,
    },
    /// Print minimum-image distances and vectors for every ordered pair of sites
    Dump {
        #[command(flatten)]
        lattice: LatticeArgs,

        /// Output format
        #[arg(short, long, value_enum, default_value = "text")]
        format: DumpFormat,
    },
    /// Draw random trial displacements
    Sample {
        #[command(flatten)]
        lattice: LatticeArgs,

        /// Number of displacements to draw
        #[arg(short = 'n', long, default_value = "10")]
        count: usize,

        /// Seed of the random number generator
        #[arg(long, default_value = "0")]
        seed: u64,
    },
}

#[derive(Serialize)]
struct PairRecord {
    i: usize,
    j: usize,
    distance: f64,
    vector: Vec<f64>,
    winding: Vec<i64>,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let log_level = if cli.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(Env::default().default_filter_or(log_level)).init();

    // Set thread pool size if specified
    if let Some(threads) = cli.threads {
        #[cfg(feature = "parallel")]
        {
            rayon::ThreadPoolBuilder::new()
                .num_threads(threads)
                .build_global()
                .context("Failed to set thread pool size")?;
            info!("Using {} threads", threads);
        }
        #[cfg(not(feature = "parallel"))]
        {
            warn!("Thread count {threads} specified but parallel feature not enabled. Ignoring.");
        }
    }

    debug!("Starting periodic-lattice v{}", periodic_lattice::VERSION);

    match cli.command {
        Commands::Info { lattice, site } => {
            let lattice = build_lattice(&lattice)?;
            print_info(lattice.as_ref(), site)
        }
        Commands::Dump { lattice, format } => {
            let lattice = build_lattice(&lattice)?;
            info!("Dumping {} site pairs", lattice.num_sites().pow(2));
            dump_pairs(lattice.as_ref(), format)
        }
        Commands::Sample {
            lattice,
            count,
            seed,
        } => {
            let lattice = build_lattice(&lattice)?;
            sample_displacements(lattice.as_ref(), count, seed)
        }
    }
}

fn build_lattice(args: &LatticeArgs) -> anyhow::Result<Box<dyn Lattice>> {
    let lattice = match &args.config {
        Some(path) => LatticeSpec::from_json_file(path)
            .with_context(|| format!("Failed to load lattice description {}", path.display()))?
            .build()?,
        None => create_lattice(&args.topology, &args.sizes)?,
    };
    info!(
        "Built {} lattice {:?} with {} sites",
        lattice.topology(),
        lattice.size(),
        lattice.num_sites()
    );
    Ok(lattice)
}

fn print_info(lattice: &dyn Lattice, site: Option<usize>) -> anyhow::Result<()> {
    println!("topology:     {}", lattice.topology());
    println!("dimensions:   {}", lattice.dim());
    println!("sizes:        {:?}", lattice.size());
    println!("sites:        {}", lattice.num_sites());
    println!("coordination: {}", lattice.coordination());

    if let Some(site) = site {
        let coords = lattice.checked_coordinates(site)?;
        println!("site {site}:");
        println!("  coordinates: {coords:?}");
        println!("  neighbors:   {:?}", lattice.neighbors(site));
        println!("  momentum:    {:?}", lattice.momentum(site).as_slice());
    }
    Ok(())
}

fn format_pair(
    lattice: &dyn Lattice,
    i: usize,
    j: usize,
    format: DumpFormat,
) -> anyhow::Result<String> {
    let vector = lattice.distance_vector(i, j);
    match format {
        DumpFormat::Text => {
            let mut line = format!("{} {} {}", i, j, lattice.distance(i, j));
            for x in vector.iter() {
                line.push_str(&format!(" {x}"));
            }
            Ok(line)
        }
        DumpFormat::Json => {
            let record = PairRecord {
                i,
                j,
                distance: vector.norm(),
                vector: vector.iter().copied().collect(),
                winding: lattice.winding(i, j),
            };
            Ok(serde_json::to_string(&record)?)
        }
    }
}

fn format_row(lattice: &dyn Lattice, i: usize, format: DumpFormat) -> anyhow::Result<String> {
    let mut block = String::new();
    for j in 0..lattice.num_sites() {
        block.push_str(&format_pair(lattice, i, j, format)?);
        block.push('\n');
    }
    Ok(block)
}

/// Write one line per ordered site pair, row by row, as rows are formatted.
fn write_pairs(
    lattice: &dyn Lattice,
    format: DumpFormat,
    out: &mut impl Write,
) -> anyhow::Result<()> {
    let n = lattice.num_sites();

    #[cfg(feature = "parallel")]
    {
        use rayon::prelude::*;

        // Rows formatted concurrently before each write
        const BATCH_ROWS: usize = 64;

        for start in (0..n).step_by(BATCH_ROWS) {
            let end = (start + BATCH_ROWS).min(n);
            let rows: Vec<anyhow::Result<String>> = (start..end)
                .into_par_iter()
                .map(|i| format_row(lattice, i, format))
                .collect();
            for row in rows {
                out.write_all(row?.as_bytes())?;
            }
        }
    }
    #[cfg(not(feature = "parallel"))]
    {
        for i in 0..n {
            out.write_all(format_row(lattice, i, format)?.as_bytes())?;
        }
    }
    Ok(())
}

fn dump_pairs(lattice: &dyn Lattice, format: DumpFormat) -> anyhow::Result<()> {
    let stdout = io::stdout();
    let mut out = BufWriter::new(stdout.lock());
    write_pairs(lattice, format, &mut out)?;
    out.flush()?;
    Ok(())
}

fn sample_displacements(lattice: &dyn Lattice, count: usize, seed: u64) -> anyhow::Result<()> {
    let mut rng = StdRng::seed_from_u64(seed);
    debug!("Drawing {count} displacements with seed {seed}");
    for _ in 0..count {
        let displacement = lattice.random_distance(&mut rng);
        let line: Vec<String> = displacement.iter().map(|d| d.to_string()).collect();
        println!("{}", line.join(" "));
    }
    Ok(())
}
