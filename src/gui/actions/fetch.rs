// src/gui/actions/fetch.rs
use std::thread;

use eframe::egui;
use tracing::{debug, info};

use crate::gui::app::{App, FetchMsg, ResultsView};

/// Kick off a directory fetch for the current filter selections.
///
/// The blocking request runs on a worker thread; the outcome comes back
/// through the app's channel and is applied in `App::absorb_results`.
/// Nothing is cancelled: a newer fetch just takes over the generation
/// counter and the older result is dropped on receipt.
pub fn fetch(app: &mut App, ctx: &egui::Context) {
    app.fetch_seq += 1;
    let seq = app.fetch_seq;

    let opts = app.state.options.fetch.clone();
    info!(
        "Fetch: seq {} begin (region={:?}, category={:?})",
        seq, opts.region, opts.category
    );

    // Loading state: spinner on, previous results cleared right away.
    app.running = true;
    app.view = ResultsView::Blank;
    app.status("Fetching breweries…");

    let client = app.client.clone();
    let tx = app.results_tx.clone();
    let ctx2 = ctx.clone();

    thread::spawn(move || {
        let outcome = client.fetch(opts.region.as_deref(), opts.category.as_deref());
        if tx.send(FetchMsg { seq, outcome }).is_err() {
            debug!("Fetch: seq {} finished after UI shutdown", seq);
        }
        ctx2.request_repaint();
    });
}
