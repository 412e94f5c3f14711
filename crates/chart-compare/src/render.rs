//! Per-track change images.
//!
//! Draws one PNG per changed track: time in ticks along the x-axis, one row
//! per note number touched by a diff record along the y-axis (plus a text
//! row when lyrics or section markers changed), with removed, added, and
//! text-changed events in three marker styles and a legend naming each style
//! once. Everything is drawn into a per-call [`RenderContext`]; identical
//! requests produce byte-identical files.

use crate::font;
use crate::Result;
use chart_diff::{names, DiffRecord, TextDiffRecord, TrackKind};
use image::{Rgb, RgbImage};
use std::collections::BTreeSet;
use std::path::Path;

pub const IMAGE_WIDTH: u32 = 1200;
pub const IMAGE_HEIGHT: u32 = 800;

const MARGIN_LEFT: i64 = 230;
const MARGIN_RIGHT: i64 = 40;
const MARGIN_TOP: i64 = 50;
const MARGIN_BOTTOM: i64 = 70;

const BACKGROUND: Rgb<u8> = Rgb([255, 255, 255]);
const FRAME: Rgb<u8> = Rgb([0, 0, 0]);
const GRID: Rgb<u8> = Rgb([205, 205, 205]);
const LABEL: Rgb<u8> = Rgb([40, 40, 40]);

/// One track's differences, ready to draw.
#[derive(Debug, Clone, Copy)]
pub struct RenderRequest<'a> {
    pub track_name: &'a str,
    /// Kind resolved from the track name; `None` falls back to numeric
    /// note labels.
    pub kind: Option<TrackKind>,
    pub note_diffs: &'a [DiffRecord],
    pub text_diffs: &'a [TextDiffRecord],
}

/// Render one track's change image to `out_path`.
pub fn render_track_changes(request: &RenderRequest, out_path: &Path) -> Result<()> {
    let mut ctx = RenderContext::new(request);
    ctx.draw_frame(request);
    ctx.plot_markers(request);
    ctx.draw_legend();
    ctx.canvas.save(out_path)?;
    Ok(())
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Row {
    Note(u8),
    Text,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Marker {
    Removed,
    Added,
    TextChange,
}

impl Marker {
    fn label(self) -> &'static str {
        match self {
            Marker::Removed => "Removed",
            Marker::Added => "Added",
            Marker::TextChange => "Text Change",
        }
    }

    fn fill(self) -> Rgb<u8> {
        match self {
            Marker::Removed => Rgb([214, 39, 40]),
            Marker::Added => Rgb([44, 160, 44]),
            Marker::TextChange => Rgb([31, 119, 180]),
        }
    }
}

/// Per-call drawing state: canvas, plot geometry, and the legend entries
/// emitted so far. Nothing outlives the render call.
struct RenderContext {
    canvas: RgbImage,
    rows: Vec<Row>,
    tick_min: u64,
    tick_span: u64,
    legend: Vec<Marker>,
}

impl RenderContext {
    fn new(request: &RenderRequest) -> Self {
        let notes: BTreeSet<u8> = request
            .note_diffs
            .iter()
            .flat_map(|d| d.removed.iter().chain(d.added.iter()))
            .map(|e| e.note)
            .collect();

        let mut rows: Vec<Row> = notes.into_iter().map(Row::Note).collect();
        if !request.text_diffs.is_empty() {
            rows.push(Row::Text);
        }

        let ticks = request
            .note_diffs
            .iter()
            .map(|d| d.tick)
            .chain(request.text_diffs.iter().map(|d| d.tick));
        let tick_min = ticks.clone().min().unwrap_or(0);
        let tick_max = ticks.max().unwrap_or(0);

        Self {
            canvas: RgbImage::from_pixel(IMAGE_WIDTH, IMAGE_HEIGHT, BACKGROUND),
            rows,
            tick_min,
            tick_span: (tick_max - tick_min).max(1),
            legend: Vec::new(),
        }
    }

    fn plot_right(&self) -> i64 {
        IMAGE_WIDTH as i64 - MARGIN_RIGHT
    }

    fn plot_bottom(&self) -> i64 {
        IMAGE_HEIGHT as i64 - MARGIN_BOTTOM
    }

    fn x_px(&self, tick: u64) -> i64 {
        let frac = (tick - self.tick_min) as f64 / self.tick_span as f64;
        let width = (self.plot_right() - MARGIN_LEFT) as f64;
        // 5% padding inside both plot edges
        MARGIN_LEFT + (width * (0.05 + 0.9 * frac)).round() as i64
    }

    fn row_y(&self, index: usize) -> i64 {
        let count = self.rows.len().max(1) as f64;
        let height = (self.plot_bottom() - MARGIN_TOP) as f64;
        self.plot_bottom() - (height * (index as f64 + 0.5) / count).round() as i64
    }

    fn row_index(&self, row: Row) -> Option<usize> {
        self.rows.iter().position(|&r| r == row)
    }

    fn draw_frame(&mut self, request: &RenderRequest) {
        let right = self.plot_right();
        let bottom = self.plot_bottom();

        let title = format!("{} changes", request.track_name);
        let title_x = (IMAGE_WIDTH as i64 - font::text_width(&title, 2) as i64) / 2;
        font::draw_text(&mut self.canvas, title_x, 14, &title, FRAME, 2);

        // Row gridlines and labels
        for (index, row) in self.rows.clone().into_iter().enumerate() {
            let y = self.row_y(index);
            dashed_hline(&mut self.canvas, MARGIN_LEFT, right, y, GRID);

            let label = match row {
                Row::Note(note) => note_label(request.kind, note),
                Row::Text => "Text Events".to_string(),
            };
            let label = fit_label(&label, (MARGIN_LEFT - 16) as u32);
            let x = MARGIN_LEFT - 8 - font::text_width(&label, 1) as i64;
            font::draw_text(&mut self.canvas, x, y - 3, &label, LABEL, 1);
        }

        // Tick gridlines and labels along the x-axis
        for step in 0..=4u64 {
            let tick = self.tick_min + self.tick_span * step / 4;
            let x = self.x_px(tick);
            dashed_vline(&mut self.canvas, x, MARGIN_TOP, bottom, GRID);
            vline(&mut self.canvas, x, bottom, bottom + 4, FRAME);

            let label = tick.to_string();
            let label_x = x - font::text_width(&label, 1) as i64 / 2;
            font::draw_text(&mut self.canvas, label_x, bottom + 8, &label, LABEL, 1);
        }

        let axis_label = "Time (ticks)";
        let axis_x =
            MARGIN_LEFT + (right - MARGIN_LEFT) / 2 - font::text_width(axis_label, 1) as i64 / 2;
        font::draw_text(
            &mut self.canvas,
            axis_x,
            IMAGE_HEIGHT as i64 - 24,
            axis_label,
            FRAME,
            1,
        );

        rect_outline(&mut self.canvas, MARGIN_LEFT, MARGIN_TOP, right, bottom, FRAME);
    }

    fn plot_markers(&mut self, request: &RenderRequest) {
        for record in request.note_diffs {
            for event in &record.removed {
                self.mark(Marker::Removed, record.tick, Row::Note(event.note));
            }
            for event in &record.added {
                self.mark(Marker::Added, record.tick, Row::Note(event.note));
            }
        }
        for record in request.text_diffs {
            self.mark(Marker::TextChange, record.tick, Row::Text);
        }
    }

    fn mark(&mut self, marker: Marker, tick: u64, row: Row) {
        let Some(index) = self.row_index(row) else {
            return;
        };
        if !self.legend.contains(&marker) {
            self.legend.push(marker);
        }

        let x = self.x_px(tick);
        let y = self.row_y(index);
        draw_marker(&mut self.canvas, marker, x, y, 12);
    }

    fn draw_legend(&mut self) {
        if self.legend.is_empty() {
            return;
        }

        let entry_h: i64 = 16;
        let label_w = self
            .legend
            .iter()
            .map(|m| font::text_width(m.label(), 1) as i64)
            .max()
            .unwrap_or(0);
        let box_w = 10 + 14 + 6 + label_w + 10;
        let box_h = entry_h * self.legend.len() as i64 + 8;
        let x1 = self.plot_right() - 10;
        let x0 = x1 - box_w;
        let y0 = MARGIN_TOP + 10;

        fill_rect(&mut self.canvas, x0, y0, x1, y0 + box_h, BACKGROUND);
        rect_outline(&mut self.canvas, x0, y0, x1, y0 + box_h, FRAME);

        for (index, marker) in self.legend.clone().into_iter().enumerate() {
            let entry_y = y0 + 4 + entry_h * index as i64;
            draw_marker(&mut self.canvas, marker, x0 + 17, entry_y + 8, 10);
            font::draw_text(
                &mut self.canvas,
                x0 + 10 + 14 + 6,
                entry_y + 5,
                marker.label(),
                FRAME,
                1,
            );
        }
    }
}

fn note_label(kind: Option<TrackKind>, note: u8) -> String {
    kind.and_then(|k| names::note_name(k, note))
        .map(str::to_owned)
        .unwrap_or_else(|| format!("Note {note}"))
}

fn fit_label(label: &str, max_px: u32) -> String {
    let max_chars = (max_px / font::GLYPH_ADVANCE) as usize;
    if label.chars().count() <= max_chars {
        label.to_string()
    } else {
        label.chars().take(max_chars).collect()
    }
}

fn put_px(canvas: &mut RgbImage, x: i64, y: i64, color: Rgb<u8>) {
    if x >= 0 && y >= 0 && (x as u32) < canvas.width() && (y as u32) < canvas.height() {
        canvas.put_pixel(x as u32, y as u32, color);
    }
}

fn hline(canvas: &mut RgbImage, x0: i64, x1: i64, y: i64, color: Rgb<u8>) {
    for x in x0..=x1 {
        put_px(canvas, x, y, color);
    }
}

fn vline(canvas: &mut RgbImage, x: i64, y0: i64, y1: i64, color: Rgb<u8>) {
    for y in y0..=y1 {
        put_px(canvas, x, y, color);
    }
}

fn dashed_hline(canvas: &mut RgbImage, x0: i64, x1: i64, y: i64, color: Rgb<u8>) {
    for x in x0..=x1 {
        if (x - x0) % 8 < 4 {
            put_px(canvas, x, y, color);
        }
    }
}

fn dashed_vline(canvas: &mut RgbImage, x: i64, y0: i64, y1: i64, color: Rgb<u8>) {
    for y in y0..=y1 {
        if (y - y0) % 8 < 4 {
            put_px(canvas, x, y, color);
        }
    }
}

fn fill_rect(canvas: &mut RgbImage, x0: i64, y0: i64, x1: i64, y1: i64, color: Rgb<u8>) {
    for y in y0..=y1 {
        hline(canvas, x0, x1, y, color);
    }
}

fn rect_outline(canvas: &mut RgbImage, x0: i64, y0: i64, x1: i64, y1: i64, color: Rgb<u8>) {
    hline(canvas, x0, x1, y0, color);
    hline(canvas, x0, x1, y1, color);
    vline(canvas, x0, y0, y1, color);
    vline(canvas, x1, y0, y1, color);
}

/// Draw a marker centered at `(x, y)` with the given edge length.
fn draw_marker(canvas: &mut RgbImage, marker: Marker, x: i64, y: i64, size: i64) {
    let half = size / 2;
    match marker {
        Marker::Removed | Marker::Added => {
            fill_rect(canvas, x - half, y - half, x + half, y + half, marker.fill());
            rect_outline(canvas, x - half, y - half, x + half, y + half, FRAME);
        }
        Marker::TextChange => {
            // Upward triangle: apex at the top, base at the bottom
            for dy in 0..=size {
                let reach = dy * half / size;
                hline(canvas, x - reach, x + reach, y - half + dy, marker.fill());
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chart_diff::{NoteEvent, NoteKind};
    use pretty_assertions::assert_eq;
    use std::collections::BTreeSet;
    use std::fs;

    fn ev(note: u8, kind: NoteKind, velocity: u8) -> NoteEvent {
        NoteEvent {
            note,
            kind,
            velocity,
        }
    }

    fn sample_request<'a>(
        note_diffs: &'a [DiffRecord],
        text_diffs: &'a [TextDiffRecord],
    ) -> RenderRequest<'a> {
        RenderRequest {
            track_name: "PART GUITAR",
            kind: Some(TrackKind::PartGuitar),
            note_diffs,
            text_diffs,
        }
    }

    #[test]
    fn renders_a_decodable_png_of_fixed_size() {
        let diffs = vec![DiffRecord {
            tick: 960,
            removed: BTreeSet::from([ev(96, NoteKind::On, 100)]),
            added: BTreeSet::from([ev(97, NoteKind::On, 100)]),
        }];
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("guitar.png");

        render_track_changes(&sample_request(&diffs, &[]), &path).unwrap();

        let (width, height) = image::image_dimensions(&path).unwrap();
        assert_eq!((width, height), (IMAGE_WIDTH, IMAGE_HEIGHT));
    }

    #[test]
    fn rendering_is_pure_across_calls() {
        // Legend bookkeeping must not leak between renders: two calls with
        // the same input produce byte-identical files.
        let diffs = vec![DiffRecord {
            tick: 100,
            removed: BTreeSet::from([ev(60, NoteKind::On, 100)]),
            added: BTreeSet::new(),
        }];
        let texts = vec![TextDiffRecord {
            tick: 500,
            before: "Verse 1".into(),
            after: "[No Event]".into(),
        }];
        let dir = tempfile::tempdir().unwrap();
        let first = dir.path().join("first.png");
        let second = dir.path().join("second.png");

        render_track_changes(&sample_request(&diffs, &texts), &first).unwrap();
        render_track_changes(&sample_request(&diffs, &texts), &second).unwrap();

        assert_eq!(fs::read(&first).unwrap(), fs::read(&second).unwrap());
    }

    #[test]
    fn text_only_diffs_render_without_note_rows() {
        let texts = vec![
            TextDiffRecord {
                tick: 0,
                before: "[No Event]".into(),
                after: "[section verse]".into(),
            },
            TextDiffRecord {
                tick: 1920,
                before: "[section outro]".into(),
                after: "[No Event]".into(),
            },
        ];
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("events.png");

        let request = RenderRequest {
            track_name: "EVENTS",
            kind: Some(TrackKind::Events),
            note_diffs: &[],
            text_diffs: &texts,
        };
        render_track_changes(&request, &path).unwrap();
        assert!(path.exists());
    }

    #[test]
    fn write_failure_surfaces_as_error() {
        let diffs = vec![DiffRecord {
            tick: 0,
            removed: BTreeSet::new(),
            added: BTreeSet::from([ev(60, NoteKind::On, 100)]),
        }];
        let missing = Path::new("/nonexistent-dir/out.png");
        assert!(render_track_changes(&sample_request(&diffs, &[]), missing).is_err());
    }
}
