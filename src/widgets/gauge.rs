//! Gauge widget: a horizontal progress bar with an optional overlay.

use crate::screen::Screen;
use crate::ui::Ui;

impl<S: Screen> Ui<S> {
    /// Draw a bar inside a `w`×`h` box labelled `label`, filled from the left
    /// to `percent` (0.0 to 1.0, clamped) of the interior width.
    ///
    /// Filled columns use `gauge.bar.on`, the rest `gauge.bar.off`. `overlay`
    /// is centered on interior row `height / 2`, each character taking the
    /// style of the column it lands in.
    pub fn gauge(&mut self, w: i32, h: i32, label: &str, percent: f32, overlay: &str) {
        let placed = self.place(label, w, h);
        let region = placed.region;
        let inner = region.shrink(1);

        self.draw_frame(region, label, "gauge.border");
        if inner.is_empty() {
            return;
        }

        let on_cols = filled_columns(percent, inner.width);
        let on = self.style("gauge.bar.on");
        let off = self.style("gauge.bar.off");
        let overlay: Vec<char> = overlay.chars().collect();
        let overlay_row = inner.height / 2;
        let overlay_start = inner.width / 2 - overlay.len() as i32 / 2;

        for col in 0..inner.width {
            let style = if col < on_cols { on } else { off };
            for row in 0..inner.height {
                let ch = if row == overlay_row {
                    usize::try_from(col - overlay_start)
                        .ok()
                        .and_then(|i| overlay.get(i).copied())
                        .unwrap_or(' ')
                } else {
                    ' '
                };
                self.put(inner.x + col, inner.y + row, ch, style);
            }
        }
    }
}

/// Columns of a `width`-wide bar lit at `percent`, rounded to nearest.
fn filled_columns(percent: f32, width: i32) -> i32 {
    let percent = if percent.is_nan() {
        0.0
    } else {
        percent.clamp(0.0, 1.0)
    };
    (percent * width as f32).round() as i32
}
