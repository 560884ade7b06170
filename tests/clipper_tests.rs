use glam::Vec3;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use scanline_engine::rendering::{populate, ClipStats};
use scanline_engine::*;

/// Unindexed mesh: every triangle gets its own three vertices.
fn triangle_soup(triangles: &[[Vec3; 3]]) -> Mesh {
    let vertices: Vec<Vec3> = triangles.iter().flatten().copied().collect();
    let indices = (0..vertices.len() as u32).collect();
    let colors = vec![Color::GREEN; vertices.len()];
    Mesh::new(vertices, indices, colors).expect("soup mesh is well formed")
}

fn facing_triangle(z: f32) -> [Vec3; 3] {
    [
        Vec3::new(-1.0, 0.0, z),
        Vec3::new(1.0, 0.0, z),
        Vec3::new(0.0, 1.0, z),
    ]
}

#[test]
fn triangles_behind_the_camera_never_enter_the_queue() {
    let mut rng = ChaCha8Rng::seed_from_u64(42);
    let camera = Camera::new(Vec3::ZERO);

    let behind: Vec<[Vec3; 3]> = (0..200)
        .map(|_| {
            std::array::from_fn(|_| {
                Vec3::new(
                    rng.gen_range(-50.0..50.0),
                    rng.gen_range(-50.0..50.0),
                    rng.gen_range(-100.0..0.09),
                )
            })
        })
        .collect();
    let mesh = triangle_soup(&behind);

    let mut queue = RenderQueue::with_capacity(256);
    let stats = populate(&camera, &mesh, &mut queue);

    assert!(queue.is_empty());
    assert_eq!(
        stats,
        ClipStats {
            submitted: 200,
            culled: 200,
            queued: 0,
            rejected: 0
        }
    );
}

#[test]
fn queued_corners_are_in_camera_space() {
    let camera = Camera::new(Vec3::new(0.0, 0.0, -10.0));
    let mesh = triangle_soup(&[facing_triangle(5.0)]);

    let mut queue = RenderQueue::with_capacity(4);
    populate(&camera, &mesh, &mut queue);

    let queued = queue.triangle(0);
    assert_eq!(queued.positions[0], Vec3::new(-1.0, 0.0, 15.0));
    assert_eq!(queued.positions[2], Vec3::new(0.0, 1.0, 15.0));
    assert_eq!(queued.colors, [Color::GREEN; 3]);
}

#[test]
fn queue_never_exceeds_capacity() {
    let camera = Camera::new(Vec3::ZERO);
    let soup: Vec<[Vec3; 3]> = (1..=5).map(|i| facing_triangle(i as f32)).collect();
    let mesh = triangle_soup(&soup);

    let mut queue = RenderQueue::with_capacity(3);
    let first = populate(&camera, &mesh, &mut queue);
    assert_eq!(queue.len(), 3);
    assert_eq!(first.queued, 3);
    assert_eq!(first.rejected, 2);
    assert_eq!(first.submitted, 5);

    // Without a clear the queue stays full and nothing more is written.
    let second = populate(&camera, &mesh, &mut queue);
    assert_eq!(queue.len(), 3);
    assert_eq!(second.queued, 0);
    assert_eq!(second.rejected, 5);
    assert_eq!(queue.triangle(2).positions[0].z, 3.0);
}

#[test]
fn culled_triangles_do_not_consume_capacity() {
    let camera = Camera::new(Vec3::ZERO);
    let mesh = triangle_soup(&[
        facing_triangle(-4.0),
        facing_triangle(2.0),
        facing_triangle(-1.0),
        facing_triangle(3.0),
    ]);

    let mut queue = RenderQueue::with_capacity(2);
    let stats = populate(&camera, &mesh, &mut queue);

    assert_eq!(stats.culled, 2);
    assert_eq!(stats.queued, 2);
    assert_eq!(stats.rejected, 0);
    assert_eq!(queue.depths()[0], &[2.0, 3.0]);
}

#[test]
fn straddling_triangle_is_queued_whole() {
    let camera = Camera::new(Vec3::ZERO);
    let straddler = [
        Vec3::new(-1.0, 0.0, -1.0),
        Vec3::new(1.0, 0.0, 2.0),
        Vec3::new(0.0, 1.0, 3.0),
    ];
    let mesh = triangle_soup(&[straddler]);

    let mut queue = RenderQueue::with_capacity(1);
    let stats = populate(&camera, &mesh, &mut queue);

    assert_eq!(stats.queued, 1);
    // No partial clipping: the corner behind the camera keeps its depth.
    assert_eq!(queue.triangle(0).positions[0].z, -1.0);
}

#[test]
fn near_plane_boundary_is_kept() {
    let mut camera = Camera::new(Vec3::ZERO);
    camera.near_plane = 1.0;
    let mesh = triangle_soup(&[facing_triangle(1.0), facing_triangle(0.999)]);

    let mut queue = RenderQueue::with_capacity(4);
    let stats = populate(&camera, &mesh, &mut queue);

    assert_eq!(stats.queued, 1);
    assert_eq!(stats.culled, 1);
}

#[test]
fn pitched_camera_culls_ground_behind_it() {
    let mut camera = Camera::new(Vec3::new(0.0, 20.0, 0.0));
    camera.pitch = -0.8;
    let mesh = Platform::default().build_mesh().expect("default platform");

    let mut queue = RenderQueue::with_capacity(4096);
    let stats = populate(&camera, &mesh, &mut queue);

    assert_eq!(stats.submitted, mesh.triangle_count());
    assert_eq!(stats.queued + stats.culled, stats.submitted);
    assert!(stats.culled > 0 && stats.queued > 0);
    for depths in queue.iter().map(|t| t.positions.map(|p| p.z)) {
        assert!(depths.iter().any(|&z| z >= camera.near_plane));
    }
}

#[test]
fn corner_colours_follow_the_index_list() {
    let camera = Camera::new(Vec3::ZERO);
    let vertices = vec![
        Vec3::new(-1.0, 0.0, 4.0),
        Vec3::new(1.0, 0.0, 4.0),
        Vec3::new(1.0, 1.0, 6.0),
        Vec3::new(-1.0, 1.0, 6.0),
    ];
    let colors = vec![Color::RED, Color::GREEN, Color::BLUE, Color::YELLOW];
    let mesh = Mesh::new(vertices.clone(), vec![2, 0, 3, 3, 1, 2], colors).expect("shared-vertex mesh");

    let mut queue = RenderQueue::with_capacity(4);
    let stats = populate(&camera, &mesh, &mut queue);
    assert_eq!(stats.queued, 2);

    let first = queue.triangle(0);
    assert_eq!(first.colors, [Color::BLUE, Color::RED, Color::YELLOW]);
    assert_eq!(first.positions, [vertices[2], vertices[0], vertices[3]]);

    let second = queue.triangle(1);
    assert_eq!(second.colors, [Color::YELLOW, Color::GREEN, Color::BLUE]);
    assert_eq!(second.positions, [vertices[3], vertices[1], vertices[2]]);
}
