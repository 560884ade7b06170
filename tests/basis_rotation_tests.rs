use approx::assert_relative_eq;
use glam::Vec3;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use scanline_engine::geometry::{Spin, EDGES};
use scanline_engine::*;

const PLANES: [RotationPlane; 3] = [RotationPlane::XY, RotationPlane::YZ, RotationPlane::XZ];

fn assert_orthonormal(volume: &BasisVolume) {
    let axes = [volume.right, volume.up, volume.forward];
    for (i, a) in axes.iter().enumerate() {
        assert_relative_eq!(a.length(), 1.0, epsilon = 1e-4);
        for b in &axes[i + 1..] {
            assert!(a.dot(*b).abs() < 1e-4, "axes not orthogonal: {a} . {b}");
        }
    }
}

#[test]
fn random_rotations_keep_the_basis_orthonormal() {
    let mut rng = ChaCha8Rng::seed_from_u64(99);
    let mut volume = BasisVolume::axis_aligned(Vec3::new(0.0, 5.0, 30.0), 4.0);

    for step in 0..2000 {
        let plane = PLANES[rng.gen_range(0..PLANES.len())];
        let rate = rng.gen_range(-3.0..3.0);
        let dt = rng.gen_range(0.0..0.05);
        volume.rotate(plane, rate, dt);

        if step % 100 == 0 {
            assert_orthonormal(&volume);
        }
    }
    assert_orthonormal(&volume);
    assert_eq!(volume.center, Vec3::new(0.0, 5.0, 30.0));
}

#[test]
fn full_turn_returns_to_start() {
    let mut volume = BasisVolume::axis_aligned(Vec3::ZERO, 1.0);
    for _ in 0..4 {
        volume.rotate(RotationPlane::YZ, std::f32::consts::FRAC_PI_2, 1.0);
    }
    assert!(volume.right.abs_diff_eq(Vec3::X, 1e-5));
    assert!(volume.up.abs_diff_eq(Vec3::Y, 1e-5));
    assert!(volume.forward.abs_diff_eq(Vec3::Z, 1e-5));
}

#[test]
fn rotation_preserves_edge_lengths() {
    let mut volume = BasisVolume::axis_aligned(Vec3::new(1.0, 2.0, 3.0), 2.5);
    volume.rotate(RotationPlane::XY, 0.7, 1.0);
    volume.rotate(RotationPlane::XZ, -1.1, 1.0);

    let corners = volume.corners();
    for (a, b) in EDGES {
        assert_relative_eq!(corners[a].distance(corners[b]), 5.0, epsilon = 1e-4);
    }
}

#[test]
fn animated_volume_applies_each_spin() {
    let volume = BasisVolume::axis_aligned(Vec3::ZERO, 1.0);
    let mut animated = AnimatedVolume::new(volume, Color::YELLOW).with_spin(RotationPlane::XZ, 2.0);
    assert_eq!(
        animated.spins,
        vec![Spin {
            plane: RotationPlane::XZ,
            rate: 2.0
        }]
    );

    animated.update(0.25);

    let mut expected = volume;
    expected.rotate(RotationPlane::XZ, 2.0, 0.25);
    assert_eq!(animated.volume, expected);
    assert_eq!(animated.color, Color::YELLOW);
}
