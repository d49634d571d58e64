//! Native window showing a [`ChartSpec`] as a horizontal bar chart.

use anyhow::Result;
use eframe::{egui, NativeOptions};
use egui_plot::{Bar, BarChart, GridMark, Plot};
use log::info;
use std::ops::RangeInclusive;

use pinstats_core::{ChartPresenter, ChartSpec};

const BAR_WIDTH: f64 = 0.6;

/// Opens one eframe window per chart. `present` returns once it is closed.
#[derive(Debug, Clone, Default)]
pub struct EguiChartPresenter;

impl EguiChartPresenter {
    pub fn new() -> Self {
        Self
    }
}

impl ChartPresenter for EguiChartPresenter {
    fn present(&self, spec: &ChartSpec) -> Result<()> {
        info!("Opening chart window: {}", spec.title);

        let native_options = NativeOptions {
            viewport: egui::ViewportBuilder::default()
                .with_title(spec.title.clone())
                .with_inner_size([800.0, 480.0]),
            ..Default::default()
        };

        let app = ChartApp::new(spec.clone());
        eframe::run_native(
            &spec.title,
            native_options,
            Box::new(|_cc| Ok(Box::new(app))),
        )
        .map_err(|e| anyhow::anyhow!("Failed to show chart window: {}", e))?;

        info!("Chart window closed");
        Ok(())
    }
}

struct ChartApp {
    spec: ChartSpec,
}

impl ChartApp {
    fn new(spec: ChartSpec) -> Self {
        Self { spec }
    }

    fn bars(&self) -> Vec<Bar> {
        self.spec
            .bars
            .iter()
            .enumerate()
            .map(|(index, bar)| {
                Bar::new(index as f64, bar.value as f64)
                    .name(&bar.label)
                    .width(BAR_WIDTH)
            })
            .collect()
    }
}

impl eframe::App for ChartApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::CentralPanel::default().show(ctx, |ui| {
            ui.heading(&self.spec.title);

            let labels: Vec<String> = self.spec.bars.iter().map(|bar| bar.label.clone()).collect();
            let chart = BarChart::new(self.bars())
                .name(&self.spec.x_label)
                .horizontal();

            Plot::new("top_posts_chart")
                .x_axis_label(self.spec.x_label.clone())
                .y_axis_label(self.spec.y_label.clone())
                .y_axis_formatter(move |mark: GridMark, _range: &RangeInclusive<f64>| {
                    title_at(&labels, mark.value)
                })
                .include_x(0.0)
                .allow_drag(false)
                .allow_zoom(false)
                .allow_scroll(false)
                .show(ui, |plot_ui| plot_ui.bar_chart(chart));
        });
    }
}

/// Axis text for a grid mark: the bar title when the mark sits on a bar.
fn title_at(labels: &[String], position: f64) -> String {
    if position < 0.0 || position.fract() != 0.0 {
        return String::new();
    }
    labels.get(position as usize).cloned().unwrap_or_default()
}
