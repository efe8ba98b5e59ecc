//! Rotation tour
//!
//! A small walkthrough of the rotation layer: build rotations from axis-angle
//! and vector pairs, interpolate between them, split off the twist about an
//! axis, and print the matrices in the bracketed text layout.
//!
//! Run with: `cargo run --example rotation_tour`

use std::f32::consts::PI;

use rotix::rot::{chapply4, chrot4_quat, chtrans4, crot3_arc};
use rotix::{Quat, Vec3};

fn main() {
    env_logger::init();

    // a quarter turn about Z takes X to Y
    let quarter = Quat::from_axis_angle(Vec3::Z, PI / 2.0);
    log::info!("quarter turn about Z: {}", quarter.to_vec4());
    log::info!("X rotated: {}", quarter.rotate(Vec3::X));

    // the same rotation built from the vector pair
    let arc = crot3_arc(Vec3::X, Vec3::Y);
    log::info!("shortest-arc matrix X->Y:\n{}", arc);

    // slerp sweep between two orientations
    let a = Quat::from_axis_angle(Vec3::X, 0.4);
    let b = Quat::from_axis_angle(Vec3::new(0.0, 0.6, 0.8), 2.0).aligned(a);
    for k in 0..=4 {
        let s = k as f32 / 4.0;
        let q = a.slerp(b, s);
        log::info!("slerp({s:.2}) angle = {:.3} rad about {}", q.angle(), q.axis());
    }

    // twist/swing split about the vertical axis
    let q = Quat::from_axis_angle(Vec3::new(0.48, 0.6, 0.64), 1.2);
    let (twist, swing) = q.decompose_twist(Vec3::Z);
    log::info!("twist angle about Z: {:.3} rad", twist.angle());
    log::info!("swing angle: {:.3} rad", swing.angle());
    log::info!(
        "recomposed matches: {}",
        twist.then(swing).aligned(q).to_vec4()
    );

    // a rigid motion in homogeneous form
    let m = chtrans4(Vec3::new(0.0, 0.0, 5.0)) * chrot4_quat(quarter);
    log::info!("rigid motion applied to X: {}", chapply4(&m, Vec3::X));
}
