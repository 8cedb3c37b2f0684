#[macro_use]
extern crate log;
extern crate bimatch;
extern crate env_logger;

use bimatch::parse::problem_from_str;
use std::env;
use std::io::Read;

/// Reads the problem text from the file named by the first argument, or
/// from stdin when no argument is given
fn read_input() -> Result<String, std::io::Error> {
    match env::args().nth(1) {
        Some(path) => std::fs::read_to_string(path),
        None => {
            let mut buffer = String::new();
            std::io::stdin().read_to_string(&mut buffer)?;
            Ok(buffer)
        }
    }
}

pub fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();
    let input = read_input()?;
    let matcher = problem_from_str(&input)?;
    info!(
        "Parsed problem with |A| = {} and |B| = {}",
        matcher.size_a(),
        matcher.size_b()
    );
    let matching = matcher.compute();
    println!("Size of maximum matching: {}", matching.len());
    for pair in &matching.pairs {
        println!("A{} B{}", pair.a, pair.b);
    }
    Ok(())
}
