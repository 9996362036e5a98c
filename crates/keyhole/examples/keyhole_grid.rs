//! Draw a few random keyhole samples and show what the extractor recovers.
//!
//! Usage:
//!   cargo run -p keyhole --example keyhole_grid -- [seed]
//!
//! Prints, per sample: flattened loop length, holes drawn vs. holes found,
//! and the net area against the rectangle areas it was built from.

use keyhole::prelude::*;

fn main() {
    let seed = std::env::args()
        .nth(1)
        .and_then(|s| s.parse().ok())
        .unwrap_or(2025_u64);
    let cfg = GridCfg {
        origin: vector![1000.0, -250.0],
        ..GridCfg::default()
    };
    for index in 0..5 {
        let sample = draw_keyhole_grid(cfg, ReplayToken { seed, index });
        let expected: f64 = signed_area(&sample.outer)
            + sample.holes.iter().map(|h| signed_area(h)).sum::<f64>();
        match extract_holes(&sample.flattened) {
            Ok(dec) => println!(
                "sample {index}: n={} holes drawn={} found={} net_area={:.3} expected={:.3}",
                sample.flattened.len(),
                sample.holes.len(),
                dec.holes.len(),
                dec.net_area(),
                expected
            ),
            Err(err) => eprintln!("sample {index}: {err}"),
        }
    }
}
