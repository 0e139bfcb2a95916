//! Annular placement sampling around the reference point.

use rand::Rng;
use rand_chacha::ChaCha8Rng;

use driftfield_core::types::Position;

/// Draw a random point in the annulus between `inner_radius` and
/// `outer_radius` around `reference`.
///
/// Distance and angle are each drawn uniformly, so samples cluster toward
/// the inner rim rather than spreading uniformly over the annulus area.
/// That distribution is part of the placement contract.
pub fn sample(
    rng: &mut ChaCha8Rng,
    reference: Position,
    inner_radius: f64,
    outer_radius: f64,
) -> Position {
    let distance: f64 = rng.gen_range(inner_radius..=outer_radius);
    let angle: f64 = rng.gen_range(0.0..std::f64::consts::TAU);
    Position::new(
        reference.x + distance * angle.cos(),
        reference.y + distance * angle.sin(),
    )
}
