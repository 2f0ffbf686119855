//! Plotters-powered chart widget for Ratatui.
//!
//! One widget serves both panels: the rate curve is a line with the live
//! sample highlighted, the confidence density is a filled area over zero.
//! Output goes into the Ratatui buffer through `plotters-ratatui-backend`.

use plotters::prelude::*;
use plotters::style::Color as _;
use plotters_ratatui_backend::widget_fn;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Style},
    widgets::Widget,
};

/// How the series is drawn.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SeriesStyle {
    Line,
    /// Filled down to `y = 0`.
    Area,
}

/// A render-only chart description. Series and bounds are computed by the caller.
pub struct RulePlottersChart<'a> {
    pub series: &'a [(f64, f64)],
    pub style: SeriesStyle,
    /// Highlighted point, drawn with a drop line to the bottom of the plot.
    pub marker: Option<(f64, f64)>,
    pub x_bounds: [f64; 2],
    pub y_bounds: [f64; 2],
    pub x_label: &'a str,
    pub y_label: &'a str,
    pub fmt_x: fn(f64) -> String,
    pub fmt_y: fn(f64) -> String,
}

impl<'a> Widget for RulePlottersChart<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        // Plotters may fail to lay out axes in very small areas.
        if area.width < 20 || area.height < 8 {
            buf.set_string(
                area.x,
                area.y,
                "Chart area too small (resize terminal).",
                Style::default().fg(Color::Yellow),
            );
            return;
        }

        let [x0, x1] = self.x_bounds;
        let [y0, y1] = self.y_bounds;

        if !(x0.is_finite() && x1.is_finite() && y0.is_finite() && y1.is_finite()) || x1 <= x0 || y1 <= y0 {
            return;
        }

        let widget = widget_fn(move |root| {
            let mut chart = ChartBuilder::on(&root)
                .margin(1)
                .set_label_area_size(LabelAreaPosition::Left, 6)
                .set_label_area_size(LabelAreaPosition::Bottom, 3)
                .build_cartesian_2d(x0..x1, y0..y1)?;

            chart
                .configure_mesh()
                .disable_x_mesh()
                .disable_y_mesh()
                .x_desc(self.x_label)
                .y_desc(self.y_label)
                .x_labels(5)
                .y_labels(4)
                .x_label_formatter(&|v| (self.fmt_x)(*v))
                .y_label_formatter(&|v| (self.fmt_y)(*v))
                .label_style(("sans-serif", 10).into_font().color(&WHITE))
                .axis_style(&WHITE)
                .bold_line_style(&WHITE)
                .draw()?;

            let series_color = RGBColor(0, 255, 255); // cyan
            let marker_color = RGBColor(255, 255, 0); // yellow

            match self.style {
                SeriesStyle::Line => {
                    chart.draw_series(LineSeries::new(self.series.iter().copied(), &series_color))?;
                }
                SeriesStyle::Area => {
                    chart.draw_series(
                        AreaSeries::new(self.series.iter().copied(), 0.0, series_color.mix(0.3))
                            .border_style(&series_color),
                    )?;
                }
            }

            // `Circle` radii are mis-scaled by the ratatui backend; a drop line
            // plus a pixel reads well at terminal resolution.
            if let Some((mx, my)) = self.marker {
                chart.draw_series(LineSeries::new([(mx, y0), (mx, my)], &marker_color))?;
                chart.draw_series(std::iter::once(Pixel::new((mx, my), marker_color)))?;
            }

            Ok(())
        });

        widget.render(area, buf);
    }
}
