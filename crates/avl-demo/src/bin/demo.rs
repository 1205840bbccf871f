//! `avl-demo` — insert and remove a random sample, rendering the tree after
//! every step.
//!
//! Usage:
//!   avl-demo [seed]
//!
//! With a numeric seed the run is reproducible; without one the PRNG is
//! seeded from the OS. If the output wraps, widen the terminal and rerun
//! the round with `r`.

use std::io::{self, BufRead, Write};

use avl_demo::{render, sample};
use avl_tree::AvlTree;
use rand::{rngs::OsRng, RngCore, SeedableRng};
use rand_xoshiro::Xoshiro256StarStar;

const SAMPLE_LEN: usize = 20;
const SAMPLE_MAX: u32 = 100;

fn main() {
    let args: Vec<String> = std::env::args().collect();
    let mut rng = match args.get(1) {
        Some(raw) => match raw.parse::<u64>() {
            Ok(seed) => Xoshiro256StarStar::seed_from_u64(seed),
            Err(_) => {
                eprintln!("Seed must be an unsigned integer.");
                std::process::exit(1);
            }
        },
        None => {
            let mut seed = [0u8; 32];
            OsRng.fill_bytes(&mut seed);
            Xoshiro256StarStar::from_seed(seed)
        }
    };

    println!("AVL tree demonstration.");
    println!("{SAMPLE_LEN} numbers below {SAMPLE_MAX} are inserted into an empty tree, then removed.");
    println!();

    let stdin = io::stdin();
    loop {
        run_round(&mut rng);

        println!("Type r + Enter to run again with a fresh sample; anything else quits.");
        print!("> ");
        let _ = io::stdout().flush();

        let mut line = String::new();
        match stdin.lock().read_line(&mut line) {
            Ok(0) | Err(_) => break,
            Ok(_) if line.trim().eq_ignore_ascii_case("r") => continue,
            Ok(_) => break,
        }
    }
}

fn run_round(rng: &mut Xoshiro256StarStar) {
    let numbers = sample::random_unique(rng, SAMPLE_LEN, SAMPLE_MAX);
    let mut tree = AvlTree::new();

    println!("Inserting into an empty tree.");
    for &n in &numbers {
        println!("insert {n}");
        tree.insert(n);
        println!("{}", render::horizontal(&tree));
    }

    println!("Removing every number again.");
    for &n in &numbers {
        println!("remove {n}");
        tree.remove(&n);
        println!("{}", render::horizontal(&tree));
    }
}
