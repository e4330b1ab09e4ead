use std::path::PathBuf;
use std::process;

use clap::Parser;
use heap_tree::{render, BinaryTree};
use rand::prelude::*;

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Number of values to insert.
    #[arg(short, long, default_value_t = 9)]
    count: usize,

    /// Insert random values in [0, 100) instead of 0..count.
    #[arg(short, long)]
    random: bool,

    /// Seed for --random. Picked from the OS when unset.
    #[arg(short, long, required = false)]
    seed: Option<u64>,

    /// Reorder the tree into a max-heap before printing it.
    #[arg(long)]
    heap: bool,

    /// Directory to write `tree_<timestamp>.dot` into.
    ///
    /// If unset, the graph is printed to stdout.
    #[arg(short, long, required = false)]
    output_dir: Option<PathBuf>,
}

fn main() {
    pretty_env_logger::init();
    let args = Args::parse();

    let mut tree: BinaryTree<f64> = if args.random {
        let mut rng = match args.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        (0..args.count)
            .map(|_| (rng.gen_range(0.0..100.0_f64) * 100.0).round() / 100.0)
            .collect()
    } else {
        (0..args.count).map(|i| i as f64).collect()
    };

    if args.heap {
        tree.build_max_heap();
    }

    log::info!("values: {:?}", tree.values());
    log::info!("edges: {:?}", tree.edges());

    match args.output_dir {
        Some(dir) => match render::write_dot(&mut tree, &dir) {
            Ok(path) => println!("{}", path.display()),
            Err(e) => {
                eprintln!("failed to write tree to {}: {}", dir.display(), e);
                process::exit(1);
            }
        },
        None => print!("{}", render::to_dot(&mut tree)),
    }
}
