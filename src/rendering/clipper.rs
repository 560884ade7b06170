//! Near-plane cull and render queue population.
//!
//! Culling is all-or-nothing per triangle: only triangles with every
//! corner behind the near plane are dropped. A triangle
//! straddling the plane is queued whole and may project badly; no partial
//! polygon clipping is performed.

use super::render_queue::RenderQueue;
use crate::camera::Camera;
use crate::perf::FUNCTION_COUNTERS;
use crate::scene::Mesh;
use crate::{count_add, count_call};

/// Outcome of one [`populate`] call.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct ClipStats {
    /// Triangles examined (queued + culled + rejected).
    pub submitted: usize,
    /// Entirely behind the near plane.
    pub culled: usize,
    pub queued: usize,
    /// The triangle that found the queue full plus every later one in the mesh.
    pub rejected: usize,
}

/// True when every camera-space depth lies strictly below `near_plane`.
#[inline]
pub fn is_behind_near_plane(depths: [f32; 3], near_plane: f32) -> bool {
    depths.iter().all(|&z| z < near_plane)
}

/// Transform every triangle of `mesh` into camera space and append the
/// survivors to `queue`.
///
/// The caller clears the queue once per frame; this appends after whatever
/// is already queued. Once the queue fills, the remaining triangles of the
/// mesh are counted as rejected and never written.
pub fn populate(camera: &Camera, mesh: &Mesh, queue: &mut RenderQueue) -> ClipStats {
    count_call!(FUNCTION_COUNTERS.populate_calls);

    let near_plane = camera.near_plane;
    let mut stats = ClipStats::default();

    for (tri_idx, indices) in mesh.indices.chunks_exact(3).enumerate() {
        let [i1, i2, i3] = [indices[0] as usize, indices[1] as usize, indices[2] as usize];

        let positions = [
            camera.transform(mesh.vertices[i1]),
            camera.transform(mesh.vertices[i2]),
            camera.transform(mesh.vertices[i3]),
        ];

        stats.submitted += 1;

        if is_behind_near_plane([positions[0].z, positions[1].z, positions[2].z], near_plane) {
            stats.culled += 1;
            continue;
        }

        let colors = [mesh.colors[i1], mesh.colors[i2], mesh.colors[i3]];

        if let Err(full) = queue.try_push(positions, colors) {
            let remaining = mesh.triangle_count() - tri_idx;
            stats.submitted += remaining - 1;
            stats.rejected += remaining;
            log::warn!(
                "{full}; dropping {remaining} remaining triangle(s) of this mesh for the frame"
            );
            break;
        }

        stats.queued += 1;
    }

    count_add!(FUNCTION_COUNTERS.triangles_culled, stats.culled as u64);
    count_add!(FUNCTION_COUNTERS.triangles_queued, stats.queued as u64);
    count_add!(FUNCTION_COUNTERS.triangles_rejected, stats.rejected as u64);

    log::trace!(
        "populate: submitted={} culled={} queued={} rejected={}",
        stats.submitted,
        stats.culled,
        stats.queued,
        stats.rejected
    );

    stats
}
