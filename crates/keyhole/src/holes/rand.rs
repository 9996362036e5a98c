//! Reproducible keyhole samples (rectangle with rectangular holes).
//!
//! Purpose
//! - Produce flattened keyhole loops together with the decomposition they
//!   encode, for property tests, benches and demos.
//!
//! Model
//! - The outer rectangle is split into `n` vertical strips; each strip gets one
//!   hole whose x-range stays inside the strip, so bridges never cross a hole.
//! - Every hole is reached by a vertical bridge from the bottom edge at the
//!   hole's left x, entering at its bottom-left corner.
//! - Determinism uses a replay token `(seed, index)` mixed into a single RNG.
//! - `nested_squares` builds the deterministic counterpart for nesting:
//!   concentric squares of alternating winding, each bridged into the next.
//!
//! Code cross-refs: `extract_holes`, `Decomposition`.

use nalgebra::vector;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::geom::Point;

/// Axis-aligned rectangle `min..max`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Rect {
    pub min: Point,
    pub max: Point,
}

impl Rect {
    #[inline]
    pub fn new(min: Point, max: Point) -> Self {
        Self { min, max }
    }
    /// Corners counter-clockwise, starting bottom-left.
    pub fn ccw(&self) -> Vec<Point> {
        vec![
            self.min,
            vector![self.max.x, self.min.y],
            self.max,
            vector![self.min.x, self.max.y],
        ]
    }
    /// Corners clockwise, starting bottom-left.
    pub fn cw(&self) -> Vec<Point> {
        vec![
            self.min,
            vector![self.min.x, self.max.y],
            self.max,
            vector![self.max.x, self.min.y],
        ]
    }
}

/// Hole count distribution.
#[derive(Clone, Copy, Debug)]
pub enum HoleCount {
    Fixed(usize),
    Uniform { min: usize, max: usize },
}

impl HoleCount {
    fn sample<R: Rng>(&self, rng: &mut R) -> usize {
        match *self {
            HoleCount::Fixed(n) => n,
            HoleCount::Uniform { min, max } => rng.gen_range(min..=max.max(min)),
        }
    }
}

/// Sampler configuration.
#[derive(Clone, Copy, Debug)]
pub struct GridCfg {
    pub holes: HoleCount,
    /// Bottom-left corner of the outer rectangle.
    pub origin: Point,
    pub width: f64,
    pub height: f64,
    /// Minimum gap between a hole and its strip border, as a fraction of the
    /// strip size. Clamped to [0.05, 0.3].
    pub margin_frac: f64,
}

impl Default for GridCfg {
    fn default() -> Self {
        Self {
            holes: HoleCount::Uniform { min: 0, max: 6 },
            origin: vector![0.0, 0.0],
            width: 100.0,
            height: 40.0,
            margin_frac: 0.1,
        }
    }
}

/// Replay token to make draws reproducible and indexable.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ReplayToken {
    pub seed: u64,
    pub index: u64,
}

impl ReplayToken {
    #[inline]
    fn to_std_rng(self) -> StdRng {
        // SplitMix64 finalizer
        fn mix(mut x: u64) -> u64 {
            x ^= x >> 30;
            x = x.wrapping_mul(0xbf58476d1ce4e5b9);
            x ^= x >> 27;
            x = x.wrapping_mul(0x94d049bb133111eb);
            x ^ (x >> 31)
        }
        StdRng::seed_from_u64(mix(self.seed ^ mix(self.index.wrapping_add(0x9e3779b97f4a7c15))))
    }
}

/// A flattened loop and the decomposition it was built from.
#[derive(Clone, Debug)]
pub struct KeyholeSample {
    pub flattened: Vec<Point>,
    /// Outer rectangle, CCW.
    pub outer: Vec<Point>,
    /// Holes, CW, in left-to-right order.
    pub holes: Vec<Vec<Point>>,
}

/// Flatten `outer` with `holes` into one keyhole loop.
///
/// The loop starts at the outer bottom-left corner and runs CCW; each hole is
/// entered by a vertical bridge from the bottom edge and traversed CW from its
/// bottom-left corner. Holes must lie strictly inside `outer` with pairwise
/// disjoint x-ranges (no bridge may cross another hole).
pub fn flatten_bottom_bridges(outer: &Rect, holes: &[Rect]) -> Vec<Point> {
    let mut sorted: Vec<Rect> = holes.to_vec();
    sorted.sort_by(|a, b| a.min.x.total_cmp(&b.min.x));
    let mut out = Vec::with_capacity(4 + 7 * sorted.len());
    out.push(outer.min);
    for h in &sorted {
        let foot = vector![h.min.x, outer.min.y];
        out.push(foot);
        out.extend(h.cw());
        out.push(h.min);
        out.push(foot);
    }
    out.extend(outer.ccw().into_iter().skip(1));
    out
}

/// Draw a random keyhole sample.
pub fn draw_keyhole_grid(cfg: GridCfg, tok: ReplayToken) -> KeyholeSample {
    let mut rng = tok.to_std_rng();
    let n = cfg.holes.sample(&mut rng);
    let width = cfg.width.abs().max(1e-6);
    let height = cfg.height.abs().max(1e-6);
    let mf = cfg.margin_frac.clamp(0.05, 0.3);
    let outer = Rect::new(cfg.origin, cfg.origin + vector![width, height]);

    let strip = width / (n.max(1) as f64);
    let holes: Vec<Rect> = (0..n)
        .map(|k| {
            let sx = cfg.origin.x + strip * (k as f64);
            // lower corner in [mf, 0.4], upper corner in [0.6, 1 - mf] of the strip/height
            let x0 = sx + strip * (mf + rng.gen::<f64>() * (0.4 - mf));
            let x1 = sx + strip * (0.6 + rng.gen::<f64>() * (0.4 - mf));
            let y0 = cfg.origin.y + height * (mf + rng.gen::<f64>() * (0.4 - mf));
            let y1 = cfg.origin.y + height * (0.6 + rng.gen::<f64>() * (0.4 - mf));
            Rect::new(vector![x0, y0], vector![x1, y1])
        })
        .collect();

    KeyholeSample {
        flattened: flatten_bottom_bridges(&outer, &holes),
        outer: outer.ccw(),
        holes: holes.iter().map(Rect::cw).collect(),
    }
}

/// Concentric squares with alternating orientation, each bridged into the next
/// one from its bottom edge.
///
/// `depth` loops nest inside the outer square (side `4 * depth + 4`); loop `k`
/// spans `2k..size - 2k` and runs CW for odd `k`. Every bridge leaves a loop
/// at the corner-adjacent vertex `(2k + 2, 2k)`.
pub fn nested_squares(depth: usize) -> Vec<Point> {
    fn walk(k: usize, depth: usize, size: f64, out: &mut Vec<Point>) {
        let lo = 2.0 * k as f64;
        let hi = size - lo;
        let bridge = |out: &mut Vec<Point>| {
            if k < depth {
                let next = lo + 2.0;
                let foot = vector![next, lo];
                out.push(foot);
                walk(k + 1, depth, size, out);
                out.push(vector![next, next]);
                out.push(foot);
            }
        };
        out.push(vector![lo, lo]);
        if k % 2 == 0 {
            bridge(out);
            out.extend([vector![hi, lo], vector![hi, hi], vector![lo, hi]]);
        } else {
            out.extend([vector![lo, hi], vector![hi, hi], vector![hi, lo]]);
            bridge(out);
        }
    }
    let mut out = Vec::with_capacity(4 + 7 * depth);
    walk(0, depth, 4.0 * depth as f64 + 4.0, &mut out);
    out
}
