// src/report/chart.rs
use eframe::egui::Color32;

/// Category labels plus one value per label. Callers hand this over to a
/// chart spec as-is; nothing here validates that the lengths match.
#[derive(Debug, Clone, Default)]
pub struct ChartData {
    pub labels: Vec<String>,
    pub values: Vec<f64>,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ChartKind {
    Bar,
    Line,
    Pie,
}

/// How a chart labels its values in tooltips and on the value axis.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ValueFormat {
    Currency,
    Units,
}

pub const BRAND_COLOR: Color32 = Color32::from_rgb(78, 115, 223);

/// Slice palette, cycled when a dataset has more than eight categories.
pub const PALETTE: [Color32; 8] = [
    Color32::from_rgb(78, 115, 223),
    Color32::from_rgb(28, 200, 138),
    Color32::from_rgb(54, 185, 204),
    Color32::from_rgb(246, 194, 62),
    Color32::from_rgb(231, 74, 59),
    Color32::from_rgb(133, 135, 150),
    Color32::from_rgb(105, 70, 180),
    Color32::from_rgb(253, 126, 20),
];

pub const LINE_TENSION: f64 = 0.4;

#[derive(Debug, Clone)]
pub struct ChartSpec {
    pub id: &'static str,
    pub kind: ChartKind,
    pub series_label: String,
    pub color: Color32,
    pub fill: bool,
    pub tension: f64,
    pub begin_at_zero: bool,
    pub value_format: ValueFormat,
    pub data: ChartData,
}

/// Single constructor for all three chart kinds; the visual options per
/// kind are fixed here rather than at the call sites.
pub fn build_chart(kind: ChartKind, data: ChartData) -> ChartSpec {
    match kind {
        ChartKind::Bar => ChartSpec {
            id: "profit_chart",
            kind,
            series_label: "Profit (KES)".to_string(),
            color: BRAND_COLOR,
            fill: false,
            tension: 0.0,
            begin_at_zero: true,
            value_format: ValueFormat::Currency,
            data,
        },
        ChartKind::Line => ChartSpec {
            id: "trend_chart",
            kind,
            series_label: "Daily Profit (KES)".to_string(),
            color: BRAND_COLOR,
            fill: true,
            tension: LINE_TENSION,
            begin_at_zero: true,
            value_format: ValueFormat::Currency,
            data,
        },
        ChartKind::Pie => ChartSpec {
            id: "distribution_chart",
            kind,
            series_label: "Units Sold".to_string(),
            color: PALETTE[0],
            fill: false,
            tension: 0.0,
            begin_at_zero: false,
            value_format: ValueFormat::Units,
            data,
        },
    }
}

pub fn slice_color(index: usize) -> Color32 {
    PALETTE[index % PALETTE.len()]
}

fn format_units(value: f64) -> String {
    if value.is_finite() && value.fract() == 0.0 {
        format!("{}", value as i64)
    } else {
        format!("{}", value)
    }
}

/// Value rendering for tooltips and the value axis, picked by the
/// spec's formatting strategy.
pub fn format_value(format: ValueFormat, value: f64) -> String {
    match format {
        ValueFormat::Currency => crate::utils::format_currency(value),
        ValueFormat::Units => format_units(value),
    }
}

/// Tooltip text for one pie slice. The percentage rounds half-up to a
/// whole number; an all-zero dataset divides by zero and the non-finite
/// result is rendered as-is.
pub fn pie_slice_label(label: &str, value: f64, total: f64) -> String {
    let percent = (value / total * 100.0).round();
    format!("{}: {} units ({:.0}%)", label, format_units(value), percent)
}

/// Interpolates a polyline as a cardinal spline. `tension` 0 returns the
/// points unchanged; the fixed factor used by the trend chart rounds the
/// corners without overshooting between dense samples.
pub fn smooth_points(points: &[[f64; 2]], tension: f64) -> Vec<[f64; 2]> {
    if points.len() < 3 || tension <= 0.0 {
        return points.to_vec();
    }

    const STEPS: usize = 8;
    let mut out = Vec::with_capacity((points.len() - 1) * STEPS + 1);

    for i in 0..points.len() - 1 {
        let p0 = points[i.saturating_sub(1)];
        let p1 = points[i];
        let p2 = points[i + 1];
        let p3 = points[(i + 2).min(points.len() - 1)];

        let m1 = [tension * (p2[0] - p0[0]), tension * (p2[1] - p0[1])];
        let m2 = [tension * (p3[0] - p1[0]), tension * (p3[1] - p1[1])];

        for step in 0..STEPS {
            let t = step as f64 / STEPS as f64;
            let t2 = t * t;
            let t3 = t2 * t;
            let h00 = 2.0 * t3 - 3.0 * t2 + 1.0;
            let h10 = t3 - 2.0 * t2 + t;
            let h01 = -2.0 * t3 + 3.0 * t2;
            let h11 = t3 - t2;

            out.push([
                h00 * p1[0] + h10 * m1[0] + h01 * p2[0] + h11 * m2[0],
                h00 * p1[1] + h10 * m1[1] + h01 * p2[1] + h11 * m2[1],
            ]);
        }
    }

    if let Some(last) = points.last() {
        out.push(*last);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_chart_fixed_options() {
        let bar = build_chart(ChartKind::Bar, ChartData::default());
        assert_eq!(bar.series_label, "Profit (KES)");
        assert!(bar.begin_at_zero);
        assert_eq!(bar.value_format, ValueFormat::Currency);

        let line = build_chart(ChartKind::Line, ChartData::default());
        assert_eq!(line.series_label, "Daily Profit (KES)");
        assert!(line.fill);
        assert_eq!(line.tension, LINE_TENSION);

        let pie = build_chart(ChartKind::Pie, ChartData::default());
        assert_eq!(pie.value_format, ValueFormat::Units);
    }

    #[test]
    fn test_pie_slice_label() {
        assert_eq!(pie_slice_label("B", 1.0, 4.0), "B: 1 units (25%)");
    }

    #[test]
    fn test_format_value_by_strategy() {
        assert_eq!(format_value(ValueFormat::Currency, 1234.5), "KES 1,234.50");
        assert_eq!(format_value(ValueFormat::Units, 3.0), "3");
        assert_eq!(format_value(ValueFormat::Units, 2.5), "2.5");
    }

    #[test]
    fn test_pie_slice_label_rounds_half_up() {
        // 24.5% rounds up, not to even.
        assert_eq!(pie_slice_label("A", 49.0, 200.0), "A: 49 units (25%)");
        assert_eq!(pie_slice_label("A", 1.0, 3.0), "A: 1 units (33%)");
    }

    #[test]
    fn test_pie_slice_label_zero_total() {
        assert_eq!(pie_slice_label("A", 0.0, 0.0), "A: 0 units (NaN%)");
    }

    #[test]
    fn test_slice_color_cycles_palette() {
        assert_eq!(slice_color(0), slice_color(8));
        assert_eq!(slice_color(3), slice_color(11));
    }

    #[test]
    fn test_smooth_points_keeps_endpoints() {
        let points = vec![[0.0, 0.0], [1.0, 2.0], [2.0, 1.0], [3.0, 3.0]];
        let smoothed = smooth_points(&points, LINE_TENSION);
        assert_eq!(smoothed.first(), Some(&[0.0, 0.0]));
        assert_eq!(smoothed.last(), Some(&[3.0, 3.0]));
        assert!(smoothed.len() > points.len());
    }

    #[test]
    fn test_smooth_points_zero_tension_is_identity() {
        let points = vec![[0.0, 0.0], [1.0, 2.0], [2.0, 1.0]];
        assert_eq!(smooth_points(&points, 0.0), points);
    }

    #[test]
    fn test_smooth_points_short_input_unchanged() {
        let points = vec![[0.0, 0.0], [1.0, 1.0]];
        assert_eq!(smooth_points(&points, LINE_TENSION), points);
    }
}
