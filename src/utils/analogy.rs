// HashMeter - Free and Open Source Software Statement
//
// This project, hashmeter, is Free and Open Source Software (FOSS) licensed
// under the MIT License. You are free to use, modify, and distribute this
// software in accordance with the license terms. Contributions are welcome
// via pull requests to the project repository.
//
// File: src/utils/analogy.rs
// Version: 1.0.0
//
// This file turns a hash total into a travel-distance comparison for the
// end-of-run summary, located in the utils subdirectory. One hash counts as
// one meter, and the total is measured against well-known distances.

/// A reference distance for the travel comparison
pub struct DistanceReference {
    pub name: &'static str,
    pub distance_km: f64,
}

/// Known distances, nearest first (one hash = one meter traveled)
pub const DISTANCE_REFERENCES: [DistanceReference; 9] = [
    DistanceReference { name: "the ISS orbit altitude (~400 km)", distance_km: 400.0 },
    DistanceReference { name: "the length of Germany (~876 km)", distance_km: 876.0 },
    DistanceReference { name: "Berlin to Istanbul (~1,738 km)", distance_km: 1_738.0 },
    DistanceReference { name: "the length of Africa (~8,000 km)", distance_km: 8_000.0 },
    DistanceReference { name: "Earth's equator (~40,075 km)", distance_km: 40_075.0 },
    DistanceReference { name: "Earth to the Moon (~384,400 km)", distance_km: 384_400.0 },
    DistanceReference { name: "Earth to the Sun (~150 million km)", distance_km: 150_000_000.0 },
    DistanceReference { name: "Earth to Jupiter (~588 million km)", distance_km: 588_000_000.0 },
    DistanceReference { name: "Earth to Pluto (~5.9 billion km)", distance_km: 5_900_000_000.0 },
];

/// Describe how far the run traveled if every hash covered one meter.
///
/// Lists every reference the total passed; below the first milestone and
/// beyond the last one get their own closing lines.
pub fn distance_analogy(total_hashes: u64) -> String {
    let km = total_hashes as f64 / 1000.0;
    let mut message = format!("If each hash was 1 meter, you traveled {:.2} km.\n", km);

    let reached: Vec<&DistanceReference> = DISTANCE_REFERENCES
        .iter()
        .filter(|reference| km >= reference.distance_km)
        .collect();

    if reached.is_empty() {
        message.push_str("🚶 You haven't reached the first milestone yet. Keep hashing to go further!\n");
    } else {
        message.push_str("You've gone beyond:\n");
        for reference in &reached {
            message.push_str(&format!(" - {}\n", reference.name));
        }
        if reached.len() == DISTANCE_REFERENCES.len() {
            message.push_str("You've even surpassed our largest reference! You're unstoppable! 🚀\n");
        }
    }

    message
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn small_totals_have_no_milestone() {
        // 100k hashes = 100 km, below the nearest reference
        let message = distance_analogy(100_000);
        assert!(message.contains("you traveled 100.00 km"));
        assert!(message.contains("haven't reached the first milestone"));
        assert!(!message.contains("You've gone beyond"));
    }

    #[test]
    fn milestones_accumulate_in_order() {
        // 2 billion hashes = 2 million km, past the Moon but short of the Sun
        let message = distance_analogy(2_000_000_000);
        assert!(message.contains("You've gone beyond:"));
        assert!(message.contains("Earth to the Moon"));
        assert!(message.contains("Earth's equator"));
        assert!(!message.contains("Earth to the Sun"));
        assert!(!message.contains("unstoppable"));
    }

    #[test]
    fn surpassing_everything_gets_the_extra_line() {
        // 6 trillion km worth of hashes clears Pluto
        let message = distance_analogy(6_000_000_000_000_000);
        assert!(message.contains("Earth to Pluto"));
        assert!(message.contains("unstoppable"));
    }

    #[test]
    fn references_are_sorted_ascending() {
        for window in DISTANCE_REFERENCES.windows(2) {
            assert!(window[0].distance_km < window[1].distance_km);
        }
    }
}

// Changelog:
// - v1.0.0 (2025-08-02): Initial version.
//   - Nine reference distances from the ISS altitude out to Pluto, with
//     below-first and beyond-last closing lines.
