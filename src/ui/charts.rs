// src/ui/charts.rs
use eframe::egui;
use std::f32::consts::TAU;

use crate::report::chart::{
    format_value, pie_slice_label, slice_color, smooth_points, ChartKind, ChartSpec,
};

const CHART_HEIGHT: f32 = 260.0;
const PIE_DIAMETER: f32 = 240.0;

/// Draws a chart spec into the current layout. An empty dataset renders
/// a placeholder label instead of an empty plot frame.
pub fn draw_chart(ui: &mut egui::Ui, spec: &ChartSpec) {
    if spec.data.values.is_empty() {
        ui.label("No data for this period");
        return;
    }

    match spec.kind {
        ChartKind::Bar => draw_bar(ui, spec),
        ChartKind::Line => draw_line(ui, spec),
        ChartKind::Pie => draw_pie(ui, spec),
    }
}

fn draw_bar(ui: &mut egui::Ui, spec: &ChartSpec) {
    let bars: Vec<egui_plot::Bar> = spec
        .data
        .values
        .iter()
        .zip(spec.data.labels.iter())
        .enumerate()
        .map(|(i, (value, label))| {
            egui_plot::Bar::new(i as f64, *value)
                .name(label)
                .width(0.6)
                .fill(spec.color)
        })
        .collect();

    let value_format = spec.value_format;
    let chart = egui_plot::BarChart::new(bars)
        .name(&spec.series_label)
        .element_formatter(Box::new(move |bar, _chart| {
            format!("{}: {}", bar.name, format_value(value_format, bar.value))
        }));

    let mut plot = egui_plot::Plot::new(spec.id)
        .height(CHART_HEIGHT)
        .allow_zoom(false)
        .allow_drag(false)
        .show_background(false)
        .show_axes([false, true])
        .y_axis_formatter(move |value, _max_chars, _range| format_value(value_format, value))
        .legend(egui_plot::Legend::default());
    if spec.begin_at_zero {
        plot = plot.include_y(0.0);
    }

    plot.show(ui, |plot_ui| {
        plot_ui.bar_chart(chart);
    });
}

fn draw_line(ui: &mut egui::Ui, spec: &ChartSpec) {
    let raw: Vec<[f64; 2]> = spec
        .data
        .values
        .iter()
        .enumerate()
        .map(|(i, value)| [i as f64, *value])
        .collect();

    let mut line = egui_plot::Line::new(smooth_points(&raw, spec.tension))
        .name(&spec.series_label)
        .color(spec.color)
        .width(2.0);
    if spec.fill {
        line = line.fill(0.0);
    }

    let value_format = spec.value_format;
    let labels = spec.data.labels.clone();
    let series_label = spec.series_label.clone();
    let mut plot = egui_plot::Plot::new(spec.id)
        .height(CHART_HEIGHT)
        .allow_zoom(false)
        .allow_drag(false)
        .show_background(false)
        .show_axes([false, true])
        .y_axis_formatter(move |value, _max_chars, _range| format_value(value_format, value))
        .label_formatter(move |_name, point| {
            let day = labels
                .get(point.x.round().max(0.0) as usize)
                .map(String::as_str)
                .unwrap_or("");
            format!("{} {}: {}", day, series_label, format_value(value_format, point.y))
        })
        .legend(egui_plot::Legend::default());
    if spec.begin_at_zero {
        plot = plot.include_y(0.0);
    }

    plot.show(ui, |plot_ui| {
        plot_ui.line(line);
    });
}

fn draw_pie(ui: &mut egui::Ui, spec: &ChartSpec) {
    let total: f64 = spec.data.values.iter().sum();

    ui.horizontal(|ui| {
        let (response, painter) =
            ui.allocate_painter(egui::Vec2::splat(PIE_DIAMETER), egui::Sense::hover());
        let rect = response.rect;
        let center = rect.center();
        let radius = rect.width().min(rect.height()) / 2.0 - 8.0;

        // Wedges start at twelve o'clock and run clockwise. Each wedge is
        // a fan of small triangles so slices wider than a half turn stay
        // well-formed.
        let mut start_angle = -TAU / 4.0;
        for (i, value) in spec.data.values.iter().enumerate() {
            let fraction = if total > 0.0 { (value / total) as f32 } else { 0.0 };
            let sweep = fraction * TAU;
            if sweep <= 0.0 {
                continue;
            }

            let steps = ((sweep / 0.05).ceil() as usize).max(2);
            let point_at = |angle: f32| center + egui::Vec2::angled(angle) * radius;
            for step in 0..steps {
                let a0 = start_angle + sweep * step as f32 / steps as f32;
                let a1 = start_angle + sweep * (step + 1) as f32 / steps as f32;
                painter.add(egui::Shape::convex_polygon(
                    vec![center, point_at(a0), point_at(a1)],
                    slice_color(i),
                    egui::Stroke::NONE,
                ));
            }
            // Radial separator at the slice boundary.
            painter.line_segment(
                [center, point_at(start_angle)],
                egui::Stroke::new(1.0, egui::Color32::WHITE),
            );
            start_angle += sweep;
        }

        if let Some(pos) = response.hover_pos() {
            let offset = pos - center;
            if offset.length() <= radius {
                // Angle back to a slice index via cumulative sweep.
                let mut pointer_angle = offset.y.atan2(offset.x) + TAU / 4.0;
                while pointer_angle < 0.0 {
                    pointer_angle += TAU;
                }

                let mut acc = 0.0_f32;
                for (i, value) in spec.data.values.iter().enumerate() {
                    let fraction = if total > 0.0 { (value / total) as f32 } else { 0.0 };
                    let sweep = fraction * TAU;
                    if pointer_angle >= acc && pointer_angle < acc + sweep {
                        let label = spec.data.labels.get(i).map(String::as_str).unwrap_or("");
                        egui::show_tooltip_at_pointer(ui.ctx(), response.id.with(i), |ui| {
                            ui.label(pie_slice_label(label, *value, total));
                        });
                        break;
                    }
                    acc += sweep;
                }
            }
        }

        // Legend column.
        ui.vertical(|ui| {
            for (i, label) in spec.data.labels.iter().enumerate() {
                ui.horizontal(|ui| {
                    let (swatch, painter) =
                        ui.allocate_painter(egui::Vec2::splat(12.0), egui::Sense::hover());
                    painter.rect_filled(swatch.rect, 2.0, slice_color(i));
                    ui.label(label);
                });
            }
        });
    });
}
