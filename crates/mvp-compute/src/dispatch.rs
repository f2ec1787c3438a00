//! Compute dispatch and synchronisation.

use gl::types::GLuint;

/// Number of `tile`-wide workgroups needed to cover `extent` invocations.
///
/// Rounds up, so the last group may run past the edge; shaders must
/// bounds-check against the image size. A zero `tile` yields zero groups.
pub fn workgroup_count(extent: u32, tile: u32) -> u32 {
    if tile == 0 {
        return 0;
    }
    extent.div_ceil(tile)
}

/// A 3D workgroup grid for `glDispatchCompute`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WorkgroupGrid {
    pub x: u32,
    pub y: u32,
    pub z: u32,
}

impl WorkgroupGrid {
    /// The grid that covers a `width` x `height` image with square tiles of
    /// `tile` invocations per side.
    pub fn covering(width: u32, height: u32, tile: u32) -> Self {
        Self {
            x: workgroup_count(width, tile),
            y: workgroup_count(height, tile),
            z: 1,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.x == 0 || self.y == 0 || self.z == 0
    }
}

/// Run the active compute program over `grid`. An empty grid is skipped.
pub fn dispatch(grid: WorkgroupGrid) {
    if grid.is_empty() {
        return;
    }
    unsafe {
        gl::DispatchCompute(grid.x as GLuint, grid.y as GLuint, grid.z as GLuint);
    }
}

/// Make image stores from earlier dispatches visible to later image and
/// texture reads.
pub fn image_access_barrier() {
    unsafe {
        gl::MemoryBarrier(gl::SHADER_IMAGE_ACCESS_BARRIER_BIT);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exact_multiple() {
        assert_eq!(workgroup_count(800, 16), 50);
        assert_eq!(workgroup_count(16, 16), 1);
    }

    #[test]
    fn partial_tile_rounds_up() {
        assert_eq!(workgroup_count(600, 16), 38);
        assert_eq!(workgroup_count(1, 16), 1);
        assert_eq!(workgroup_count(17, 16), 2);
    }

    #[test]
    fn zero_extent_or_tile() {
        assert_eq!(workgroup_count(0, 16), 0);
        assert_eq!(workgroup_count(800, 0), 0);
    }

    #[test]
    fn window_grid() {
        let grid = WorkgroupGrid::covering(800, 600, 16);
        assert_eq!(grid, WorkgroupGrid { x: 50, y: 38, z: 1 });
        assert!(!grid.is_empty());
        assert!(grid.x * 16 >= 800 && grid.y * 16 >= 600);
    }

    #[test]
    fn degenerate_grid_is_empty() {
        assert!(WorkgroupGrid::covering(0, 600, 16).is_empty());
    }
}
