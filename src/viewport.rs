use crate::BoardSize;
use log::debug;

/// Bounds on the cell size and the minimal pan distance.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ViewportLimits {
    min_cell_size: i64,
    max_cell_size: i64,
    min_pan_step_px: i64,
}

impl ViewportLimits {
    /// Cell sizes are at least one pixel; swapped bounds are put back in order.
    ///
    /// Panning never moves by fewer than `min_pan_step_px` pixels (rounded
    /// down to whole cells, at least 1).
    pub fn new(min_cell_size: i64, max_cell_size: i64, min_pan_step_px: i64) -> Self {
        let (low, high) = if min_cell_size <= max_cell_size {
            (min_cell_size, max_cell_size)
        } else {
            (max_cell_size, min_cell_size)
        };
        Self {
            min_cell_size: low.max(1),
            max_cell_size: high.max(1),
            min_pan_step_px,
        }
    }

    pub fn min_cell_size(&self) -> i64 {
        self.min_cell_size
    }

    pub fn max_cell_size(&self) -> i64 {
        self.max_cell_size
    }

    pub fn min_pan_step_px(&self) -> i64 {
        self.min_pan_step_px
    }
}

impl Default for ViewportLimits {
    fn default() -> Self {
        Self::new(2, 64, 48)
    }
}

/// Camera over a board: which cells are visible and how large they are drawn.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Viewport {
    camera_x: i64, // Board coordinates of the top left visible cell.
    camera_y: i64,
    cell_pixel_size: i64,
    visible_rows: i64,
    visible_columns: i64,
    window_width_px: i64,
    window_height_px: i64,
    pan_step: i64, // Minimal pan distance in cells.
    limits: ViewportLimits,
}

impl Viewport {
    pub fn new(
        window_width_px: i64,
        window_height_px: i64,
        cell_pixel_size: i64,
        limits: ViewportLimits,
    ) -> Self {
        let cell_pixel_size = cell_pixel_size.clamp(limits.min_cell_size, limits.max_cell_size);
        let mut viewport = Self {
            camera_x: 0,
            camera_y: 0,
            cell_pixel_size,
            visible_rows: 0,
            visible_columns: 0,
            window_width_px: 0,
            window_height_px: 0,
            pan_step: pan_step(limits.min_pan_step_px, cell_pixel_size),
            limits,
        };
        viewport.resize_window(window_width_px, window_height_px);
        viewport
    }

    pub fn camera_x(&self) -> i64 {
        self.camera_x
    }

    pub fn camera_y(&self) -> i64 {
        self.camera_y
    }

    pub fn cell_pixel_size(&self) -> i64 {
        self.cell_pixel_size
    }

    pub fn visible_rows(&self) -> i64 {
        self.visible_rows
    }

    pub fn visible_columns(&self) -> i64 {
        self.visible_columns
    }

    pub fn pan_step(&self) -> i64 {
        self.pan_step
    }

    pub fn limits(&self) -> ViewportLimits {
        self.limits
    }

    /// Recompute the visible extent for a new window size. The camera stays where it is.
    pub fn resize_window(&mut self, window_width_px: i64, window_height_px: i64) {
        self.window_width_px = window_width_px.max(0);
        self.window_height_px = window_height_px.max(0);
        self.visible_columns = self.window_width_px / self.cell_pixel_size;
        self.visible_rows = self.window_height_px / self.cell_pixel_size;
    }

    /// Whether the camera satisfies the bounds for `board`.
    ///
    /// A dimension that fits must lie within the board, a dimension that
    /// exceeds the board must be centered on it.
    pub fn is_in_bounds(&self, board: BoardSize) -> bool {
        let (rows, columns) = (board.rows as i64, board.columns as i64);
        axis_in_bounds(self.camera_x, columns, self.visible_columns)
            && axis_in_bounds(self.camera_y, rows, self.visible_rows)
    }

    /// Move the camera into bounds for `board`.
    pub fn clamp_to(&mut self, board: BoardSize) {
        let (rows, columns) = (board.rows as i64, board.columns as i64);
        self.camera_x = clamp_axis(self.camera_x, columns, self.visible_columns);
        self.camera_y = clamp_axis(self.camera_y, rows, self.visible_rows);
    }

    /// Change the cell size by `delta` pixels, keeping the view center.
    ///
    /// Returns `false` and leaves the viewport unchanged when the new size
    /// would leave the configured limits.
    pub fn zoom(&mut self, delta: i64, board: BoardSize) -> bool {
        let limits = self.limits.min_cell_size..=self.limits.max_cell_size;
        let new_size = self
            .cell_pixel_size
            .checked_add(delta)
            .filter(|size| limits.contains(size));
        let Some(new_size) = new_size else {
            debug!(
                "zoom by {} from cell size {} refused",
                delta, self.cell_pixel_size
            );
            return false;
        };
        let (rows, columns) = (board.rows as i64, board.columns as i64);
        let center_x = self.camera_x + self.visible_columns / 2;
        let center_y = self.camera_y + self.visible_rows / 2;

        self.cell_pixel_size = new_size;
        self.resize_window(self.window_width_px, self.window_height_px);

        self.camera_x = if self.visible_columns > columns {
            centered(columns, self.visible_columns)
        } else {
            center_x - self.visible_columns / 2
        };
        self.camera_y = if self.visible_rows > rows {
            centered(rows, self.visible_rows)
        } else {
            center_y - self.visible_rows / 2
        };
        self.pan_step = pan_step(self.limits.min_pan_step_px, new_size);
        self.clamp_to(board);
        true
    }

    /// Move the camera by `(dx, dy)` cells and clamp it.
    ///
    /// An out-of-bounds camera refuses to move at all; returns whether it moved.
    pub fn pan_by(&mut self, dx: i64, dy: i64, board: BoardSize) -> bool {
        if !self.is_in_bounds(board) {
            debug!(
                "pan refused, camera ({}, {}) is out of bounds",
                self.camera_x, self.camera_y
            );
            return false;
        }
        self.camera_x = self.camera_x.saturating_add(dx);
        self.camera_y = self.camera_y.saturating_add(dy);
        self.clamp_to(board);
        true
    }

    /// `pan_by` in multiples of the pan step.
    pub fn pan_steps(&mut self, steps_x: i64, steps_y: i64, board: BoardSize) -> bool {
        self.pan_by(
            steps_x.saturating_mul(self.pan_step),
            steps_y.saturating_mul(self.pan_step),
            board,
        )
    }

    /// Put the board cell `(board_x, board_y)` in the middle of the view.
    pub fn center_on(&mut self, board_x: i64, board_y: i64) {
        self.camera_x = board_x - self.visible_columns / 2;
        self.camera_y = board_y - self.visible_rows / 2;
    }

    /// Board cell under a window pixel.
    pub fn screen_to_board(&self, pixel_x: i64, pixel_y: i64) -> (i64, i64) {
        (
            self.camera_x + pixel_x.div_euclid(self.cell_pixel_size),
            self.camera_y + pixel_y.div_euclid(self.cell_pixel_size),
        )
    }

    /// Every visible cell as `(row, column, board_x, board_y)`, row-major.
    pub fn visible_cells(&self) -> impl Iterator<Item = (i64, i64, i64, i64)> + '_ {
        (0..self.visible_rows).flat_map(move |row| {
            (0..self.visible_columns).map(move |column| {
                (row, column, column + self.camera_x, row + self.camera_y)
            })
        })
    }
}

fn pan_step(min_pan_step_px: i64, cell_pixel_size: i64) -> i64 {
    (min_pan_step_px / cell_pixel_size).max(1)
}

fn centered(extent: i64, visible: i64) -> i64 {
    (extent - visible) / 2
}

fn axis_in_bounds(camera: i64, extent: i64, visible: i64) -> bool {
    if visible > extent {
        camera == centered(extent, visible)
    } else {
        (0..=extent - visible).contains(&camera)
    }
}

fn clamp_axis(camera: i64, extent: i64, visible: i64) -> i64 {
    if visible > extent {
        centered(extent, visible)
    } else {
        camera.clamp(0, extent - visible)
    }
}
