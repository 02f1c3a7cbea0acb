//! Reusable clickable UI pieces.
//!
//! [`ClickableList`] pairs rendered [`Line`]s with click actions so targets
//! land on the right rows without hand-counting offsets, including when long
//! lines wrap. [`meter_bar`] renders the filled/empty bar used by both the
//! wizard progress indicator and the per-result match bar.

use ratzilla::ratatui::layout::Rect;
use ratzilla::ratatui::text::Line;

use crate::input::ClickState;

/// Render a horizontal meter, `percent` filled, `width` cells wide.
///
/// `percent` is clamped to 0–100; values straight off the wire are safe.
pub fn meter_bar(percent: u16, width: u16) -> String {
    let pct = percent.min(100) as usize;
    let width = width as usize;
    let filled = (pct * width + 50) / 100;
    "█".repeat(filled) + &"░".repeat(width - filled)
}

/// A builder that annotates lines as clickable while they are added, then
/// registers every target in one pass after rendering.
pub struct ClickableList<'a> {
    lines: Vec<Line<'a>>,
    /// `(line_index, action_id)` pairs into `lines`.
    actions: Vec<(u16, u16)>,
}

impl<'a> ClickableList<'a> {
    pub fn new() -> Self {
        Self {
            lines: Vec::new(),
            actions: Vec::new(),
        }
    }

    /// Add a non-clickable line.
    pub fn push(&mut self, line: Line<'a>) {
        self.lines.push(line);
    }

    /// Add a clickable line bound to a semantic action ID.
    ///
    /// The target follows the line's final row: inserting or removing lines
    /// above it moves the hit region automatically.
    pub fn push_clickable(&mut self, line: Line<'a>, action_id: u16) {
        let idx = self.lines.len() as u16;
        self.actions.push((idx, action_id));
        self.lines.push(line);
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Borrow the lines, e.g. to probe wrapped height before consuming.
    pub fn lines(&self) -> &[Line<'a>] {
        &self.lines
    }

    /// Consume the builder, returning the lines for rendering.
    pub fn into_lines(self) -> Vec<Line<'a>> {
        self.lines
    }

    /// Register click targets for all clickable lines.
    ///
    /// * `area` — the widget area (including borders).
    /// * `top_offset` / `bottom_offset` — rows taken by borders or padding.
    /// * `inner_width` — content width for wrap calculation; pass `0` when
    ///   the widget does not wrap, in which case one logical line is one row.
    pub fn register_targets(
        &self,
        area: Rect,
        cs: &mut ClickState,
        top_offset: u16,
        bottom_offset: u16,
        inner_width: u16,
    ) {
        let content_y = area.y + top_offset;
        let content_end = area.y + area.height.saturating_sub(bottom_offset);

        if inner_width == 0 {
            for &(line_idx, action_id) in &self.actions {
                let row = content_y + line_idx;
                if row >= content_end {
                    continue;
                }
                cs.add_row_target(area, row, action_id);
            }
            return;
        }

        // Wrap-aware path: a line wider than inner_width occupies several
        // visual rows, and every one of them must stay tappable.
        let w = inner_width as usize;
        let mut cursor: u16 = 0;
        let mut visual_starts = Vec::with_capacity(self.lines.len());
        let mut visual_heights = Vec::with_capacity(self.lines.len());
        for line in &self.lines {
            visual_starts.push(cursor);
            let lw = line.width();
            let h = if lw <= w { 1 } else { lw.div_ceil(w) as u16 };
            visual_heights.push(h);
            cursor += h;
        }

        for &(line_idx, action_id) in &self.actions {
            let li = line_idx as usize;
            if li >= self.lines.len() {
                continue;
            }
            for r in 0..visual_heights[li] {
                let row = content_y + visual_starts[li] + r;
                if row >= content_end {
                    break;
                }
                cs.add_row_target(area, row, action_id);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratzilla::ratatui::layout::Rect;

    // ── meter_bar ──────────────────────────────────────────────────

    #[test]
    fn meter_bar_endpoints() {
        assert_eq!(meter_bar(0, 10), "░".repeat(10));
        assert_eq!(meter_bar(100, 10), "█".repeat(10));
    }

    #[test]
    fn meter_bar_rounds_to_nearest_cell() {
        // 33% of 10 cells → 3.3 → 3 filled
        assert_eq!(meter_bar(33, 10), format!("{}{}", "█".repeat(3), "░".repeat(7)));
        // 67% of 10 cells → 6.7 → 7 filled
        assert_eq!(meter_bar(67, 10), format!("{}{}", "█".repeat(7), "░".repeat(3)));
    }

    #[test]
    fn meter_bar_clamps_overrange_input() {
        assert_eq!(meter_bar(250, 8), "█".repeat(8));
    }

    #[test]
    fn meter_bar_width_is_stable() {
        for pct in [0u16, 1, 49, 50, 99, 100, 180] {
            assert_eq!(meter_bar(pct, 20).chars().count(), 20);
        }
    }

    // ── ClickableList ──────────────────────────────────────────────

    #[test]
    fn clickable_rows_land_after_border() {
        let mut cl = ClickableList::new();
        cl.push(Line::from("question"));
        cl.push_clickable(Line::from(" [1] ( ) B.Tech"), 40);
        cl.push_clickable(Line::from(" [2] ( ) B.A."), 41);

        let area = Rect::new(0, 5, 60, 10);
        let mut cs = ClickState::new();
        cl.register_targets(area, &mut cs, 1, 1, 0);

        // border row 5, question row 6, options on rows 7 and 8
        assert_eq!(cs.hit_test(10, 6), None);
        assert_eq!(cs.hit_test(10, 7), Some(40));
        assert_eq!(cs.hit_test(10, 8), Some(41));
    }

    #[test]
    fn targets_clipped_to_area() {
        let mut cl = ClickableList::new();
        for i in 0..10 {
            cl.push_clickable(Line::from(format!("skill {i}")), 20 + i as u16);
        }

        // Borders top+bottom leave 3 content rows
        let area = Rect::new(0, 0, 60, 5);
        let mut cs = ClickState::new();
        cl.register_targets(area, &mut cs, 1, 1, 0);

        assert_eq!(cs.targets.len(), 3);
        assert_eq!(cs.hit_test(5, 1), Some(20));
        assert_eq!(cs.hit_test(5, 3), Some(22));
        assert_eq!(cs.hit_test(5, 4), None); // bottom border
    }

    #[test]
    fn inserted_header_shifts_targets() {
        let mut cl = ClickableList::new();
        cl.push(Line::from("section title"));
        cl.push(Line::from(""));
        cl.push_clickable(Line::from("Proceed to Apply"), 101);

        let area = Rect::new(0, 0, 60, 10);
        let mut cs = ClickState::new();
        cl.register_targets(area, &mut cs, 1, 1, 0);

        assert_eq!(cs.hit_test(5, 3), Some(101));
        assert_eq!(cs.hit_test(5, 1), None);
    }

    #[test]
    fn wrapped_line_pushes_later_targets_down() {
        let mut cl = ClickableList::new();
        // 25 chars in a 10-wide area → 3 visual rows
        cl.push(Line::from("a".repeat(25)));
        cl.push_clickable(Line::from("tap me"), 7);

        let area = Rect::new(0, 0, 10, 10);
        let mut cs = ClickState::new();
        cl.register_targets(area, &mut cs, 0, 0, 10);

        assert_eq!(cs.hit_test(3, 2), None); // last wrapped row of the header
        assert_eq!(cs.hit_test(3, 3), Some(7));
    }

    #[test]
    fn wrapped_clickable_line_tappable_on_every_row() {
        let mut cl = ClickableList::new();
        cl.push_clickable(Line::from("b".repeat(22)), 80); // 3 rows at width 10

        let area = Rect::new(0, 0, 10, 10);
        let mut cs = ClickState::new();
        cl.register_targets(area, &mut cs, 0, 0, 10);

        assert_eq!(cs.hit_test(4, 0), Some(80));
        assert_eq!(cs.hit_test(4, 1), Some(80));
        assert_eq!(cs.hit_test(4, 2), Some(80));
        assert_eq!(cs.hit_test(4, 3), None);
    }

    #[test]
    fn empty_list_registers_nothing() {
        let cl = ClickableList::new();
        assert!(cl.is_empty());

        let mut cs = ClickState::new();
        cl.register_targets(Rect::new(0, 0, 40, 8), &mut cs, 1, 1, 0);
        assert!(cs.targets.is_empty());
    }

    #[test]
    fn into_lines_preserves_order() {
        let mut cl = ClickableList::new();
        cl.push(Line::from("a"));
        cl.push_clickable(Line::from("b"), 1);
        cl.push(Line::from("c"));
        let lines = cl.into_lines();
        assert_eq!(lines.len(), 3);
    }
}
