// HashMeter - Free and Open Source Software Statement
//
// This project, hashmeter, is Free and Open Source Software (FOSS) licensed
// under the MIT License. You are free to use, modify, and distribute this
// software in accordance with the license terms. Contributions are welcome
// via pull requests to the project repository.
//
// File: src/help/mod.rs
// Version: 1.0.1
//
// This file implements the banner, fun facts, and algorithm listing for
// hashmeter. It holds the presentation-only content the CLI prints around a
// run, separate from the measuring code.

use rand::seq::SliceRandom;

use crate::core::types::HashAlgorithm;

/// ASCII banner shown at startup
pub const BANNER: &str = r#"
 _               _                    _
| |__   __ _ ___| |__  _ __ ___   ___| |_ ___ _ __
| '_ \ / _` / __| '_ \| '_ ` _ \ / _ \ __/ _ \ '__|
| | | | (_| \__ \ | | | | | | | |  __/ ||  __/ |
|_| |_|\__,_|___/_| |_|_| |_| |_|\___|\__\___|_|
"#;

/// Fun facts shown with the banner
const FUN_FACTS: [&str; 7] = [
    "SHA-256 is used by Bitcoin for proof-of-work. ⛏️",
    "MD5 is broken for security but still common for checksums. 🔑",
    "SHA-1 collisions were demonstrated in practice in 2017. ⚠️",
    "BLAKE2b is faster than MD5 on 64-bit CPUs while being far stronger. 🚀",
    "SHA-3 is built on the Keccak sponge, a different design from SHA-2. 🧽",
    "The Earth's circumference is about 40,075 km at the equator! 🌍",
    "The first computer 'bug' was an actual moth found in a relay. 🦋",
];

/// Pick a random fun fact
pub fn random_fun_fact() -> &'static str {
    FUN_FACTS
        .choose(&mut rand::thread_rng())
        .copied()
        .unwrap_or(FUN_FACTS[0])
}

/// Print the startup banner with a fun fact
pub fn display_banner() {
    println!("{}", BANNER);
    println!("Here's a fun fact! 🤓");
    println!("➡️  {}\n", random_fun_fact());
}

/// Print the supported algorithm list with usage examples
pub fn display_algorithm_list() {
    println!("SUPPORTED ALGORITHMS:");
    println!("=====================");
    for algorithm in HashAlgorithm::ALL {
        println!("  {:<10} {}", algorithm.name(), algorithm_blurb(algorithm));
    }
    println!();
    println!("DISPLAY-ONLY NAMES (listed for completeness, not runnable):");
    println!("  gpu_sha256, gpu_blake2b");
    println!();
    println!("Names are case-insensitive; '-' and '_' are interchangeable.");
    println!();
    println!("EXAMPLES:");
    for (description, command) in get_usage_examples() {
        println!("  {}:", description);
        println!("    {}", command);
    }
}

fn algorithm_blurb(algorithm: HashAlgorithm) -> &'static str {
    match algorithm {
        HashAlgorithm::Md5 => "128-bit legacy digest, checksum workloads",
        HashAlgorithm::Sha1 => "160-bit legacy digest",
        HashAlgorithm::Sha256 => "SHA-2 family, 256-bit",
        HashAlgorithm::Sha512 => "SHA-2 family, 512-bit, wide datapath",
        HashAlgorithm::Blake2b => "BLAKE2b-512, modern high-throughput digest",
        HashAlgorithm::Sha3_256 => "SHA-3 (Keccak sponge), 256-bit",
    }
}

/// Usage examples for the algorithm listing
pub fn get_usage_examples() -> Vec<(&'static str, &'static str)> {
    vec![
        ("Quick SHA-256 test (10 seconds)", "hashmeter --algo sha256"),
        (
            "Saturate every core with BLAKE2b",
            "hashmeter --algo blake2b --threads 0 --duration 30",
        ),
        (
            "Sweep all algorithms and export",
            "hashmeter --all --duration 5 --export results.json",
        ),
        ("Single-threaded baseline", "hashmeter --algo sha512 --threads 1"),
    ]
}


// Changelog:
// - v1.0.1 (2025-08-02): Listing covers display-only names.
//   - --list now shows the gpu_* entries alongside the runnable algorithms
//     and appends the usage examples.
// - v1.0.0 (2025-07-22): Initial help module creation.
//   - Purpose: Banner, random fun facts, and the supported algorithm list,
//     kept apart from the measuring code.
