//! Statistics bar chart drawn with `plotters` onto a `<canvas>`.

use std::error::Error;

use leptos::prelude::*;
use leptos::task::spawn_local;
use plotters::coord::combinators::BindKeyPoints;
use plotters::prelude::{
    ChartBuilder, Color, IntoDrawingArea, IntoFont, RGBColor, Rectangle, SeriesLabelPosition,
};
use plotters_canvas::CanvasBackend;
use trackerdash_app::services::stats_service::StatsService;
use trackerdash_domain::stats::{ChartData, ChartPalette, ChartView, Rgb};

use crate::context::use_dashboard;

/// Id of the canvas element the chart is drawn on.
pub const CANVAS_ID: &str = "stats-chart";

/// Fraction of each label slot covered by its bar group.
const GROUP_WIDTH: f64 = 0.8;

fn color(rgb: Rgb) -> RGBColor {
    RGBColor(rgb.0, rgb.1, rgb.2)
}

/// Draw grouped bars, one group per label. Returns `false` when the canvas
/// is not in the document.
#[allow(
    clippy::cast_precision_loss,
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss
)]
fn draw(data: &ChartData, palette: ChartPalette) -> Result<bool, Box<dyn Error>> {
    let Some(backend) = CanvasBackend::new(CANVAS_ID) else {
        return Ok(false);
    };
    let root = backend.into_drawing_area();
    root.fill(&color(palette.background))?;

    let slots = data.labels.len().max(1);
    let centers: Vec<f64> = (0..slots).map(|i| i as f64 + 0.5).collect();
    let y_max = data.max_value() as f64 * 1.1;
    let text = color(palette.text);
    let grid = color(palette.grid);

    let mut chart = ChartBuilder::on(&root)
        .margin(12)
        .x_label_area_size(28)
        .y_label_area_size(36)
        .build_cartesian_2d((0f64..slots as f64).with_key_points(centers), 0f64..y_max)?;

    let labels = &data.labels;
    chart
        .configure_mesh()
        .disable_x_mesh()
        .bold_line_style(grid)
        .light_line_style(grid.mix(0.3))
        .axis_style(grid)
        .label_style(("sans-serif", 12).into_font().color(&text))
        .x_label_formatter(&|x| {
            labels
                .get(x.floor() as usize)
                .cloned()
                .unwrap_or_default()
        })
        .y_label_formatter(&|y| format!("{y:.0}"))
        .draw()?;

    let series_count = data.series.len().max(1) as f64;
    let bar = GROUP_WIDTH / series_count;
    for (index, series) in data.series.iter().enumerate() {
        let fill = color(series.color);
        let offset = (1.0 - GROUP_WIDTH) / 2.0 + index as f64 * bar;
        chart
            .draw_series(series.values.iter().enumerate().map(|(slot, value)| {
                let x0 = slot as f64 + offset;
                Rectangle::new([(x0, 0.0), (x0 + bar * 0.9, *value as f64)], fill.filled())
            }))?
            .label(series.name)
            .legend(move |(x, y)| Rectangle::new([(x, y - 5), (x + 10, y + 5)], fill.filled()));
    }

    chart
        .configure_series_labels()
        .position(SeriesLabelPosition::UpperLeft)
        .label_font(("sans-serif", 12).into_font().color(&text))
        .background_style(color(palette.background).mix(0.8))
        .border_style(grid)
        .draw()?;

    root.present()?;
    Ok(true)
}

/// Chart card with the daily/hourly switch.
///
/// Switching the view refetches `/api/stats`; switching the theme only
/// recolours.
#[component]
pub fn StatsChart() -> impl IntoView {
    let dashboard = use_dashboard();
    let chart_view = dashboard.select(|s| s.chart_view);
    let theme = dashboard.select(|s| s.theme);
    let chart = dashboard.chart;

    Effect::new(move |_| {
        let selected = chart_view.get();
        spawn_local(async move {
            if let Some(data) = StatsService::new(dashboard.api).load(selected).await {
                chart.set(Some(data));
            }
        });
    });

    Effect::new(move |_| {
        let palette = ChartPalette::for_theme(theme.get());
        chart.with(|data| {
            let Some(data) = data else {
                return;
            };
            if let Err(err) = draw(data, palette) {
                tracing::warn!(error = %err, "failed to draw stats chart");
            }
        });
    });

    view! {
        <section class="card chart-card">
            <div class="card-header">
                <h2 class="card-title">
                    <i class="bi bi-bar-chart"></i>
                    " Statistics"
                </h2>
                <div class="btn-group">
                    {ChartView::ALL
                        .into_iter()
                        .map(|option| {
                            view! {
                                <button
                                    class=move || {
                                        if chart_view.get() == option { "btn btn-sm btn-primary" } else { "btn btn-sm btn-secondary" }
                                    }
                                    on:click=move |_| dashboard.state.update(|s| s.chart_view = option)
                                >
                                    {option.label()}
                                </button>
                            }
                        })
                        .collect_view()}
                </div>
            </div>
            <canvas id=CANVAS_ID width="800" height="300"></canvas>
        </section>
    }
}
