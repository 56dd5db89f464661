use eframe::egui;
use poll_promise::Promise;
use std::time::Duration;

use crate::analysis::{AnalysisError, AnalysisReport, run_analysis};
#[cfg(debug_assertions)]
use crate::config::DEBUG_FLAGS;
use crate::data::SourceSelection;
use crate::domain::AnalysisRequest;
use crate::ui::app::{BandSniperApp, DataState};
use crate::utils::app_time::now;

pub(super) struct AsyncAnalysisResult {
    pub(super) result: Result<AnalysisReport, AnalysisError>,
    elapsed_time: Duration,
}

impl BandSniperApp {
    /// Kick off one analysis for the current inputs. Ignored while a run is in flight.
    pub(super) fn start_analysis(&mut self) {
        if self.is_analyzing() {
            return;
        }

        let request = match self.inputs.to_request() {
            Ok(request) => request,
            Err(e) => {
                self.data_state = DataState::from_error(e);
                return;
            }
        };

        #[cfg(debug_assertions)]
        if DEBUG_FLAGS.print_ui_interactions {
            log::info!("Analyze: {}", request);
        }

        let selection = self.source_selection.clone();

        #[cfg(not(target_arch = "wasm32"))]
        let promise = Promise::spawn_thread("band_analysis", move || {
            match tokio::runtime::Builder::new_current_thread()
                .enable_all()
                .build()
            {
                Ok(rt) => rt.block_on(run_job(selection, request)),
                Err(e) => AsyncAnalysisResult {
                    result: Err(AnalysisError::DataUnavailable(format!(
                        "failed to start async runtime: {}",
                        e
                    ))),
                    elapsed_time: Duration::ZERO,
                },
            }
        });

        #[cfg(target_arch = "wasm32")]
        let promise = Promise::spawn_local(run_job(selection, request));

        self.analysis_promise = Some(promise);
    }

    pub(super) fn poll_analysis(&mut self, ctx: &egui::Context) {
        let Some(promise) = self.analysis_promise.take() else {
            return;
        };

        match promise.try_take() {
            Ok(outcome) => {
                let elapsed = outcome.elapsed_time;
                match outcome.result {
                    Ok(report) => {
                        #[cfg(debug_assertions)]
                        if DEBUG_FLAGS.print_analysis_summary {
                            log::info!(
                                "✅ {} via {}: {} raw rows -> {} banded, {} buy / {} sell in {:.2}s",
                                report.request.symbol,
                                report.source_signature,
                                report.raw_rows,
                                report.series.len(),
                                report.series.buy_count(),
                                report.series.sell_count(),
                                elapsed.as_secs_f32()
                            );
                        }
                        #[cfg(not(debug_assertions))]
                        let _ = elapsed;

                        self.data_state = DataState::from_report(report);
                        self.plot_view.reset_view();
                    }
                    Err(error) => {
                        log::error!("❌ Analysis failed: {}", error);
                        self.data_state = DataState::from_error(error);
                    }
                }
            }
            Err(pending) => {
                self.analysis_promise = Some(pending);
                ctx.request_repaint();
            }
        }
    }

    pub(super) fn is_analyzing(&self) -> bool {
        self.analysis_promise.is_some()
    }
}

async fn run_job(selection: SourceSelection, request: AnalysisRequest) -> AsyncAnalysisResult {
    let started = now();
    let sources = selection.build();
    let result = run_analysis(&sources, request).await;

    AsyncAnalysisResult {
        result,
        elapsed_time: started.elapsed(),
    }
}
