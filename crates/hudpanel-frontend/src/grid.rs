use hudpanel_bridge::world::Vec3;

/// Number of grid cells along each horizontal axis.
pub const GRID_CELLS: u32 = 26;

/// Grid cell of `position` on a square world `world_size` units wide and
/// centered on the origin. Columns count from the west edge (0-based), rows
/// from the north edge (1-based). Positions past the world edge clamp to the
/// boundary cell.
pub fn grid_cell(position: Vec3, world_size: f32) -> (u32, u32) {
    if !(world_size.is_finite() && world_size > 0.0) {
        return (0, 1);
    }

    let cell = world_size / GRID_CELLS as f32;
    let half = world_size / 2.0;
    let max = (GRID_CELLS - 1) as f32;

    let column = ((position.x + half) / cell).floor().clamp(0.0, max) as u32;
    let row = ((world_size - (position.z + half)) / cell).floor().clamp(0.0, max) as u32 + 1;
    (column, row)
}

/// Letter + number label of the grid cell, e.g. `"M13"`.
pub fn grid_label(position: Vec3, world_size: f32) -> String {
    let (column, row) = grid_cell(position, world_size);
    let letter = char::from(b'A' + column as u8);
    format!("{letter}{row}")
}
