//! Chart widgets for sales visualization.
//!
//! Callers own the point buffers; the charts only borrow them for one frame.

use ratatui::{
    prelude::*,
    symbols::Marker,
    widgets::{Axis, Bar, BarChart, BarGroup, Block, Borders, Chart, Dataset, GraphType},
};

use forecast_facade::format_amount;

/// `(x, y)` pairs with x starting at `offset`.
pub fn to_points(values: &[f64], offset: usize) -> Vec<(f64, f64)> {
    values
        .iter()
        .enumerate()
        .map(|(i, &v)| ((offset + i) as f64, v))
        .collect()
}

/// Y bounds for non-negative sales, with headroom above the peak.
fn y_bounds<'a>(series: impl IntoIterator<Item = &'a [(f64, f64)]>) -> [f64; 2] {
    let max = series
        .into_iter()
        .flatten()
        .map(|&(_, y)| y)
        .fold(0.0_f64, f64::max);
    [0.0, if max > 0.0 { max * 1.1 } else { 1.0 }]
}

fn value_axis<'a>(title: &'a str, bounds: [f64; 2]) -> Axis<'a> {
    Axis::default()
        .title(title)
        .style(Style::default().fg(Color::Gray))
        .bounds(bounds)
        .labels(vec![
            Span::raw(format_amount(bounds[0])),
            Span::raw(format_amount((bounds[0] + bounds[1]) / 2.0)),
            Span::raw(format_amount(bounds[1])),
        ])
}

/// Line chart of the observed sales.
pub fn create_sales_chart<'a>(
    points: &'a [(f64, f64)],
    title: &'a str,
    y_title: &'a str,
    color: Color,
) -> Chart<'a> {
    let dataset = Dataset::default()
        .name(title)
        .marker(Marker::Braille)
        .graph_type(GraphType::Line)
        .style(Style::default().fg(color))
        .data(points);

    let x_max = (points.len().saturating_sub(1) as f64).max(1.0);

    Chart::new(vec![dataset])
        .block(Block::default().borders(Borders::ALL).title(format!(" {} ", title)))
        .x_axis(
            Axis::default()
                .style(Style::default().fg(Color::Gray))
                .bounds([0.0, x_max])
                .labels(vec![
                    Span::raw("1"),
                    Span::raw(format!("{}", points.len())),
                ]),
        )
        .y_axis(value_axis(y_title, y_bounds([points])))
}

/// Historical and projected sales on one chart.
pub fn create_forecast_chart<'a>(
    historical: &'a [(f64, f64)],
    forecast: &'a [(f64, f64)],
    names: [&'a str; 2],
    title: String,
) -> Chart<'a> {
    let datasets = vec![
        Dataset::default()
            .name(names[0])
            .marker(Marker::Braille)
            .graph_type(GraphType::Line)
            .style(Style::default().fg(Color::Cyan))
            .data(historical),
        Dataset::default()
            .name(names[1])
            .marker(Marker::Braille)
            .graph_type(GraphType::Line)
            .style(Style::default().fg(Color::Yellow))
            .data(forecast),
    ];

    let x_max = ((historical.len() + forecast.len()).saturating_sub(1) as f64).max(1.0);

    Chart::new(datasets)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(format!(" {} ", title)),
        )
        .x_axis(
            Axis::default()
                .style(Style::default().fg(Color::Gray))
                .bounds([0.0, x_max])
                .labels(vec![
                    Span::raw(names[0]),
                    Span::styled("|", Style::default().fg(Color::Yellow)),
                    Span::raw(names[1]),
                ]),
        )
        .y_axis(value_axis("", y_bounds([historical, forecast])))
}

/// One bar per labelled amount, values shown with thousands separators.
pub fn create_comparison_chart<'a>(rows: &[(&'a str, f64)], title: &'a str) -> BarChart<'a> {
    let bars: Vec<Bar> = rows
        .iter()
        .map(|&(label, value)| {
            Bar::default()
                .value(value.max(0.0).round() as u64)
                .label(Line::from(label))
                .text_value(format_amount(value))
        })
        .collect();

    BarChart::default()
        .block(Block::default().borders(Borders::ALL).title(format!(" {} ", title)))
        .data(BarGroup::default().bars(&bars))
        .bar_width(8)
        .bar_gap(2)
        .bar_style(Style::default().fg(Color::Yellow))
        .value_style(Style::default().fg(Color::Black).bg(Color::Yellow))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_to_points_offsets_x() {
        let points = to_points(&[5.0, 7.0], 6);
        assert_eq!(points, vec![(6.0, 5.0), (7.0, 7.0)]);
    }

    #[test]
    fn test_y_bounds() {
        let a = [(0.0, 10.0), (1.0, 40.0)];
        let b = [(2.0, 100.0)];
        let bounds = y_bounds([&a[..], &b[..]]);
        assert_eq!(bounds[0], 0.0);
        assert!((bounds[1] - 110.0).abs() < 1e-9);
        assert_eq!(y_bounds([&[][..]]), [0.0, 1.0]);
    }
}
