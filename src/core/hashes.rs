// HashMeter - Free and Open Source Software Statement
//
// This project, hashmeter, is Free and Open Source Software (FOSS) licensed
// under the MIT License. You are free to use, modify, and distribute this
// software in accordance with the license terms. Contributions are welcome
// via pull requests to the project repository.
//
// File: src/core/hashes.rs
// Version: 1.0.2
//
// This file implements the hot hashing loop, located in the core subdirectory
// of the hashmeter source tree. It dispatches a generic digest spin to the
// concrete RustCrypto hash implementations and counts iterations until an
// absolute deadline.
//
// Tree Location:
// - src/core/hashes.rs (hot hashing loop)
// - Depends on: md-5, sha1, sha2, sha3, blake2 crates

use std::hint::black_box;
use std::time::Instant;

use blake2::Blake2b512;
use md5::Md5;
use sha1::Sha1;
use sha2::{Digest, Sha256, Sha512};
use sha3::Sha3_256;

use crate::core::types::HashAlgorithm;

/// Constant prefix of the synthetic benchmark input
pub const BENCH_INPUT_PREFIX: &[u8] = b"BenchmarkTestData";

/// Iterations hashed between deadline checks. Polling the clock per hash
/// would dominate the fast algorithms; polling per batch bounds overshoot
/// to one batch worth of work.
const DEADLINE_CHECK_BATCH: u32 = 512;

/// Hash synthetic input with `algorithm` until `deadline`, returning the
/// number of digests computed.
///
/// One full batch always runs before the first deadline check, so the count
/// is positive even when the deadline has already passed. Each iteration
/// hashes a distinct input (the prefix plus the running count), and the
/// digest is routed through `black_box` so the work cannot be optimized away.
pub fn hash_until_deadline(algorithm: HashAlgorithm, deadline: Instant) -> u64 {
    match algorithm {
        HashAlgorithm::Md5 => spin_digest::<Md5>(deadline),
        HashAlgorithm::Sha1 => spin_digest::<Sha1>(deadline),
        HashAlgorithm::Sha256 => spin_digest::<Sha256>(deadline),
        HashAlgorithm::Sha512 => spin_digest::<Sha512>(deadline),
        HashAlgorithm::Blake2b => spin_digest::<Blake2b512>(deadline),
        HashAlgorithm::Sha3_256 => spin_digest::<Sha3_256>(deadline),
    }
}

fn spin_digest<D: Digest>(deadline: Instant) -> u64 {
    const PREFIX_LEN: usize = BENCH_INPUT_PREFIX.len();
    let mut input = [0u8; PREFIX_LEN + 8];
    input[..PREFIX_LEN].copy_from_slice(BENCH_INPUT_PREFIX);

    let mut count: u64 = 0;
    loop {
        for _ in 0..DEADLINE_CHECK_BATCH {
            input[PREFIX_LEN..].copy_from_slice(&count.to_le_bytes());
            black_box(D::digest(&input));
            count += 1;
        }
        if Instant::now() >= deadline {
            return count;
        }
    }
}


// Changelog:
// - v1.0.2 (2025-07-26): Batched the deadline checks.
//   - Clock polling moved from per-hash to per-512 iterations; the overshoot
//     stays bounded by one batch and shows up in the measured elapsed time.
// - v1.0.0 (2025-07-20): Initial version.
//   - Generic digest spin over the RustCrypto trait, dispatched per
//     algorithm, with a counter-varied input and black_box on the output.
