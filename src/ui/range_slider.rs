use eframe::egui::{Align2, FontId, Pos2, Response, Sense, Stroke, Ui, Widget, pos2, vec2};

use crate::config::SliderDomain;
use crate::data::model::PayloadRange;

const HANDLE_RADIUS: f32 = 7.0;
const TRACK_Y: f32 = 12.0;
const HEIGHT: f32 = 44.0;
/// Minimum horizontal room a tick label needs before labels are thinned out.
const LABEL_SPACING: f32 = 34.0;

// ---------------------------------------------------------------------------
// Dual-handle range slider
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Handle {
    Low,
    High,
}

/// Which handle a press at `pointer_x` grabs: the nearer one; when both sit
/// on the same spot, the side of the press decides.
pub fn nearest_handle(low_x: f32, high_x: f32, pointer_x: f32) -> Handle {
    let to_low = (pointer_x - low_x).abs();
    let to_high = (pointer_x - high_x).abs();
    if to_low < to_high {
        Handle::Low
    } else if to_high < to_low {
        Handle::High
    } else if pointer_x < low_x {
        Handle::Low
    } else {
        Handle::High
    }
}

/// Move one end of `range` to `value`, never past the other end.
pub fn move_handle(range: PayloadRange, handle: Handle, value: f64) -> PayloadRange {
    match handle {
        Handle::Low => PayloadRange::new(value.min(range.high()), range.high()),
        Handle::High => PayloadRange::new(range.low(), value.max(range.low())),
    }
}

/// A slider with two handles over a fixed [`SliderDomain`].
///
/// The bound range may start outside the domain (or off-step); it is only
/// snapped once the user drags a handle.
pub struct RangeSlider<'a> {
    range: &'a mut PayloadRange,
    domain: SliderDomain,
}

impl<'a> RangeSlider<'a> {
    pub fn new(range: &'a mut PayloadRange, domain: SliderDomain) -> Self {
        Self { range, domain }
    }
}

impl Widget for RangeSlider<'_> {
    fn ui(self, ui: &mut Ui) -> Response {
        let size = vec2(ui.available_width(), HEIGHT);
        let (rect, mut response) = ui.allocate_exact_size(size, Sense::click_and_drag());

        let domain = self.domain;
        let left = rect.left() + HANDLE_RADIUS;
        let right = rect.right() - HANDLE_RADIUS;
        let track_y = rect.top() + TRACK_Y;
        let x_of = |v: f64| left + (right - left) * domain.fraction(v) as f32;
        let value_at = |x: f32| {
            let t = ((x - left) / (right - left)) as f64;
            domain.snap(domain.value_at(t))
        };

        let drag_id = response.id.with("active_handle");

        if response.drag_started() || response.clicked() {
            if let Some(pos) = response.interact_pointer_pos() {
                let handle = nearest_handle(x_of(self.range.low()), x_of(self.range.high()), pos.x);
                ui.data_mut(|d| d.insert_temp(drag_id, handle));
            }
        }

        if response.dragged() || response.clicked() {
            let handle = ui.data(|d| d.get_temp::<Handle>(drag_id));
            if let (Some(handle), Some(pos)) = (handle, response.interact_pointer_pos()) {
                let moved = move_handle(*self.range, handle, value_at(pos.x));
                if moved != *self.range {
                    *self.range = moved;
                    response.mark_changed();
                }
            }
        }

        if response.drag_stopped() || response.clicked() {
            ui.data_mut(|d| d.remove::<Handle>(drag_id));
        }

        if ui.is_rect_visible(rect) {
            paint(ui, &response, track_y, &domain, *self.range, &x_of);
        }

        response
    }
}

fn paint(
    ui: &Ui,
    response: &Response,
    track_y: f32,
    domain: &SliderDomain,
    range: PayloadRange,
    x_of: &dyn Fn(f64) -> f32,
) {
    let visuals = ui.visuals();
    let painter = ui.painter();
    let left = x_of(domain.min);
    let right = x_of(domain.max);

    // Track and selected span.
    painter.line_segment(
        [pos2(left, track_y), pos2(right, track_y)],
        Stroke::new(4.0, visuals.widgets.inactive.bg_fill),
    );
    let (lo_x, hi_x) = (x_of(range.low()), x_of(range.high()));
    painter.line_segment(
        [pos2(lo_x, track_y), pos2(hi_x, track_y)],
        Stroke::new(4.0, visuals.selection.bg_fill),
    );

    // Tick marks, labels thinned when the slider is narrow.
    let marks = domain.marks();
    let spacing = (right - left) / (marks.len().max(2) - 1) as f32;
    let label_every = (LABEL_SPACING / spacing).ceil().max(1.0) as usize;
    let text_color = visuals.text_color();
    for (i, &mark) in marks.iter().enumerate() {
        let x = x_of(mark);
        painter.line_segment(
            [pos2(x, track_y + 5.0), pos2(x, track_y + 9.0)],
            Stroke::new(1.0, visuals.weak_text_color()),
        );
        if i % label_every == 0 {
            painter.text(
                pos2(x, track_y + 11.0),
                Align2::CENTER_TOP,
                format!("{mark}"),
                FontId::proportional(10.0),
                text_color,
            );
        }
    }

    // Handles.
    let stroke = visuals.widgets.style(response).fg_stroke;
    for x in [lo_x, hi_x] {
        let center = Pos2::new(x, track_y);
        painter.circle(center, HANDLE_RADIUS, visuals.extreme_bg_color, stroke);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn nearest_handle_prefers_closer_end() {
        assert_eq!(nearest_handle(10.0, 100.0, 30.0), Handle::Low);
        assert_eq!(nearest_handle(10.0, 100.0, 80.0), Handle::High);
    }

    #[test]
    fn overlapping_handles_split_by_side() {
        assert_eq!(nearest_handle(50.0, 50.0, 40.0), Handle::Low);
        assert_eq!(nearest_handle(50.0, 50.0, 60.0), Handle::High);
    }

    #[test]
    fn handles_cannot_cross() {
        let range = PayloadRange::new(2000.0, 5000.0);
        assert_eq!(
            move_handle(range, Handle::Low, 7000.0),
            PayloadRange::new(5000.0, 5000.0)
        );
        assert_eq!(
            move_handle(range, Handle::High, 1000.0),
            PayloadRange::new(2000.0, 2000.0)
        );
        assert_eq!(
            move_handle(range, Handle::High, 9000.0),
            PayloadRange::new(2000.0, 9000.0)
        );
    }

    #[test]
    fn moving_low_keeps_out_of_domain_high() {
        let range = PayloadRange::new(0.0, 15600.0);
        let moved = move_handle(range, Handle::Low, 3000.0);
        assert_eq!(moved.high(), 15600.0);
    }
}
