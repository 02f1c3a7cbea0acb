//! Shared input handling: normalized events, click targets, and coordinate math.
//!
//! The renderer re-registers click targets on every frame, so the hit-test
//! registry always matches what is currently on screen.

use ratzilla::ratatui::layout::Rect;

/// All input the wizard reacts to, normalized from keyboard, mouse, and touch.
#[derive(Debug, Clone, PartialEq)]
pub enum InputEvent {
    /// A printable key press.
    Char(char),
    /// Enter / Return.
    Enter,
    /// Escape.
    Escape,
    /// A click/tap on a registered target, identified by a semantic action ID
    /// (see `wizard::actions`).
    Click(u16),
}

/// A rectangular screen region (in terminal cell coordinates) that triggers
/// an action when tapped.
#[derive(Debug, Clone)]
pub struct ClickTarget {
    pub rect: Rect,
    pub action_id: u16,
}

/// Shared state between the render loop and the mouse handler.
pub struct ClickState {
    pub targets: Vec<ClickTarget>,
    pub terminal_cols: u16,
    pub terminal_rows: u16,
}

impl ClickState {
    pub fn new() -> Self {
        Self {
            targets: Vec::new(),
            terminal_cols: 0,
            terminal_rows: 0,
        }
    }

    pub fn clear_targets(&mut self) {
        self.targets.clear();
    }

    /// Register a click target with a rectangular hit region.
    pub fn add_target(&mut self, rect: Rect, action_id: u16) {
        self.targets.push(ClickTarget { rect, action_id });
    }

    /// Convenience: register a full-width target on one row of `area`.
    /// Rows outside the area are silently dropped.
    pub fn add_row_target(&mut self, area: Rect, row: u16, action_id: u16) {
        if row >= area.y && row < area.y + area.height {
            self.targets.push(ClickTarget {
                rect: Rect::new(area.x, row, area.width, 1),
                action_id,
            });
        }
    }

    /// Hit-test a terminal cell against all registered targets.
    ///
    /// Later-registered targets win when regions overlap, matching UI
    /// layering: the detail overlay registers after the card grid behind it.
    pub fn hit_test(&self, col: u16, row: u16) -> Option<u16> {
        self.targets.iter().rev().find_map(|t| {
            let r = &t.rect;
            if col >= r.x && col < r.x + r.width && row >= r.y && row < r.y + r.height {
                Some(t.action_id)
            } else {
                None
            }
        })
    }
}

/// Whether a screen width (in columns) should use the stacked narrow layout.
pub fn is_narrow_layout(width: u16) -> bool {
    width < 60
}

/// Convert a pixel coordinate inside the grid container to a cell index.
///
/// `px` is relative to the container edge, `extent` is the container's pixel
/// size along that axis, `cells` the terminal size along the same axis.
/// Returns `None` for clicks outside the grid or degenerate inputs.
pub fn pixel_to_cell(px: f64, extent: f64, cells: u16) -> Option<u16> {
    if extent <= 0.0 || cells == 0 || px < 0.0 {
        return None;
    }
    let cell_size = extent / cells as f64;
    let index = (px / cell_size) as u16;
    if index >= cells {
        None
    } else {
        Some(index)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // ── hit_test ────────────────────────────────────────────────────

    #[test]
    fn hit_test_single_row_targets() {
        let mut cs = ClickState::new();
        cs.add_target(Rect::new(0, 4, 60, 1), 20);
        cs.add_target(Rect::new(0, 5, 60, 1), 21);

        assert_eq!(cs.hit_test(12, 4), Some(20));
        assert_eq!(cs.hit_test(12, 5), Some(21));
        assert_eq!(cs.hit_test(12, 6), None);
    }

    #[test]
    fn hit_test_card_rect_spans_rows() {
        let mut cs = ClickState::new();
        // A result card covering rows 8..12
        cs.add_target(Rect::new(2, 8, 56, 4), 80);

        assert_eq!(cs.hit_test(10, 7), None);
        assert_eq!(cs.hit_test(10, 8), Some(80));
        assert_eq!(cs.hit_test(10, 11), Some(80));
        assert_eq!(cs.hit_test(10, 12), None);
        assert_eq!(cs.hit_test(1, 9), None); // left of the card
    }

    #[test]
    fn hit_test_overlay_registered_last_wins() {
        let mut cs = ClickState::new();
        // Background close target for the whole content area...
        cs.add_target(Rect::new(0, 0, 80, 30), 100);
        // ...then the overlay body on top of it.
        cs.add_target(Rect::new(10, 5, 60, 20), 101);

        assert_eq!(cs.hit_test(40, 10), Some(101));
        assert_eq!(cs.hit_test(5, 10), Some(100)); // outside the overlay
        assert_eq!(cs.hit_test(40, 28), Some(100)); // below the overlay
    }

    #[test]
    fn hit_test_empty_registry() {
        let cs = ClickState::new();
        assert_eq!(cs.hit_test(0, 0), None);
    }

    // ── add_row_target ──────────────────────────────────────────────

    #[test]
    fn row_target_inside_area() {
        let mut cs = ClickState::new();
        let area = Rect::new(4, 10, 40, 6);
        cs.add_row_target(area, 13, 31);

        assert_eq!(cs.targets.len(), 1);
        assert_eq!(cs.hit_test(20, 13), Some(31));
        assert_eq!(cs.hit_test(3, 13), None); // left of area
    }

    #[test]
    fn row_target_outside_area_dropped() {
        let mut cs = ClickState::new();
        let area = Rect::new(0, 10, 40, 4);
        cs.add_row_target(area, 9, 1); // above
        cs.add_row_target(area, 14, 2); // below
        assert!(cs.targets.is_empty());
    }

    #[test]
    fn clear_resets_registry() {
        let mut cs = ClickState::new();
        cs.add_target(Rect::new(0, 0, 10, 1), 1);
        cs.clear_targets();
        assert!(cs.targets.is_empty());
        assert_eq!(cs.hit_test(0, 0), None);
    }

    // ── pixel conversion ────────────────────────────────────────────

    #[test]
    fn pixel_to_cell_rows() {
        // 30 rows over 450px → 15px per row
        assert_eq!(pixel_to_cell(0.0, 450.0, 30), Some(0));
        assert_eq!(pixel_to_cell(14.9, 450.0, 30), Some(0));
        assert_eq!(pixel_to_cell(15.0, 450.0, 30), Some(1));
        assert_eq!(pixel_to_cell(449.0, 450.0, 30), Some(29));
    }

    #[test]
    fn pixel_to_cell_out_of_bounds() {
        assert_eq!(pixel_to_cell(450.0, 450.0, 30), None);
        assert_eq!(pixel_to_cell(-0.5, 450.0, 30), None);
    }

    #[test]
    fn pixel_to_cell_degenerate_inputs() {
        assert_eq!(pixel_to_cell(10.0, 0.0, 30), None);
        assert_eq!(pixel_to_cell(10.0, 450.0, 0), None);
    }

    #[test]
    fn pixel_to_cell_fractional_cell_size() {
        // 24 cells over 400px → 16.67px per cell
        assert_eq!(pixel_to_cell(16.0, 400.0, 24), Some(0));
        assert_eq!(pixel_to_cell(17.0, 400.0, 24), Some(1));
        assert_eq!(pixel_to_cell(399.0, 400.0, 24), Some(23));
    }

    #[test]
    fn narrow_layout_threshold() {
        assert!(is_narrow_layout(36));
        assert!(is_narrow_layout(59));
        assert!(!is_narrow_layout(60));
        assert!(!is_narrow_layout(100));
    }

    // ── full tap pipeline ───────────────────────────────────────────

    #[test]
    fn tap_resolves_through_pixel_and_hit_test() {
        let mut cs = ClickState::new();
        cs.terminal_cols = 80;
        cs.terminal_rows = 40;
        cs.add_target(Rect::new(0, 22, 80, 1), 71);

        let grid_w = 800.0;
        let grid_h = 600.0; // 15px per row
        let col = pixel_to_cell(410.0, grid_w, cs.terminal_cols).unwrap();
        let row = pixel_to_cell(22.0 * 15.0 + 7.0, grid_h, cs.terminal_rows).unwrap();
        assert_eq!(row, 22);
        assert_eq!(cs.hit_test(col, row), Some(71));
    }
}
