// src/gui/app.rs
use std::{
    error::Error,
    sync::{
        Arc, Mutex,
        mpsc::{self, Receiver, Sender},
    },
    time::{Duration, Instant},
};

use eframe::egui;
use tracing::{debug, error, info};

use crate::{
    cards::{Card, build_cards},
    config::{
        consts::HOVER_ARM_DELAY_MS,
        state::AppState,
    },
    directory::{Brewery, DirectoryClient, FetchError},
    motion::CardMotion,
};

pub fn run(state: AppState, options: eframe::NativeOptions) -> Result<(), Box<dyn Error>> {
    let client = Arc::new(DirectoryClient::new(&state.options.api_base)?);

    eframe::run_native(
        "Brewery Browser",
        options,
        Box::new(move |cc| {
            let mut app = App::new(state, client);
            // Initial load: one fetch with the default selections, so
            // the first frame already shows the loading state.
            super::actions::fetch(&mut app, &cc.egui_ctx);
            Ok(Box::new(app))
        }),
    )?;
    Ok(())
}

/// One card plus its animation state. Dropped together when the next
/// fetch replaces the results, which also drops any motion still in
/// flight against the old cards.
pub struct CardSlot {
    pub card: Card,
    pub motion: CardMotion,
}

/// What the results panel currently shows.
pub enum ResultsView {
    Blank,
    Cards(Vec<CardSlot>),
    NoResults,
    Failed,
}

/// Outcome of one fetch worker, tagged with its request generation.
pub struct FetchMsg {
    pub seq: u64,
    pub outcome: Result<Vec<Brewery>, FetchError>,
}

pub struct App {
    // single source of truth (UI thread only)
    pub state: AppState,

    pub client: Arc<DirectoryClient>,
    pub view: ResultsView,

    // status line (workers never write it directly; they send a
    // FetchMsg and the receipt path updates it)
    pub status: Arc<Mutex<String>>,
    pub running: bool,

    // request generation; receipts from older fetches are dropped
    pub fetch_seq: u64,
    pub results_tx: Sender<FetchMsg>,
    results_rx: Receiver<FetchMsg>,

    // hover springs stay inert until this deadline passes
    hover_armed_at: Option<Instant>,
    motion_active: bool,
}

impl App {
    pub fn new(state: AppState, client: Arc<DirectoryClient>) -> Self {
        let (results_tx, results_rx) = mpsc::channel();

        info!("Init: directory at {}", state.options.api_base);

        Self {
            state,
            client,
            view: ResultsView::Blank,
            status: Arc::new(Mutex::new("Idle".into())),
            running: false,
            fetch_seq: 0,
            results_tx,
            results_rx,
            hover_armed_at: None,
            motion_active: false,
        }
    }

    /* ---------- tiny helpers ---------- */

    #[inline]
    pub fn status<T: Into<String>>(&self, msg: T) {
        *self.status.lock().unwrap() = msg.into();
    }

    /// Hover effects attach a beat after a fetch settles; until then
    /// pointer traffic over the cards is ignored.
    #[inline]
    pub fn hover_armed(&self) -> bool {
        self.hover_armed_at.is_some_and(|t| Instant::now() >= t)
    }

    /// Drain finished fetches. Only the newest generation applies;
    /// stragglers from superseded requests are logged and dropped, so
    /// an out-of-order arrival can neither replace a newer view nor
    /// clear a newer request's loading flag.
    pub fn absorb_results(&mut self, ctx: &egui::Context) {
        while let Ok(msg) = self.results_rx.try_recv() {
            if msg.seq != self.fetch_seq {
                debug!(
                    "Fetch: dropping stale result (seq {}, current {})",
                    msg.seq, self.fetch_seq
                );
                continue;
            }

            // Loading ends on every outcome.
            self.running = false;

            // Hover effects arm shortly after completion, success or not.
            let arm_delay = Duration::from_millis(HOVER_ARM_DELAY_MS);
            self.hover_armed_at = Some(Instant::now() + arm_delay);
            ctx.request_repaint_after(arm_delay);

            match msg.outcome {
                Ok(records) => {
                    if records.is_empty() {
                        info!("Fetch: seq {} returned no records", msg.seq);
                        self.view = ResultsView::NoResults;
                    } else {
                        info!("Fetch: seq {} ok, {} record(s)", msg.seq, records.len());
                        let slots = build_cards(&records)
                            .into_iter()
                            .map(|card| CardSlot {
                                card,
                                motion: CardMotion::at_rest(),
                            })
                            .collect::<Vec<_>>();
                        self.view = ResultsView::Cards(slots);
                    }
                    self.status(format!("Ready: {} breweries", records.len()));
                }
                Err(e) => {
                    // Diagnostic detail stays in the log; the UI gets
                    // the generic message.
                    error!("Fetch: seq {} failed: {}", msg.seq, e);
                    self.view = ResultsView::Failed;
                    self.status("Fetch failed");
                }
            }
        }
    }

    /// Advance card springs by the frame delta.
    fn tick_motion(&mut self, ctx: &egui::Context) {
        let dt = ctx.input(|i| i.stable_dt);

        let mut animating = false;
        if let ResultsView::Cards(slots) = &mut self.view {
            for slot in slots.iter_mut() {
                slot.motion.tick(dt);
                animating |= slot.motion.is_animating();
            }
        }

        if self.motion_active && !animating {
            debug!("Animate: all cards settled");
        }
        self.motion_active = animating;
    }

    fn any_motion(&self) -> bool {
        match &self.view {
            ResultsView::Cards(slots) => slots.iter().any(|s| s.motion.is_animating()),
            _ => false,
        }
    }
}

impl eframe::App for App {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.absorb_results(ctx);
        self.tick_motion(ctx);

        egui::TopBottomPanel::top("filters").show(ctx, |ui| {
            crate::gui::components::filter_bar::draw(ui, self);
        });

        egui::CentralPanel::default().show(ctx, |ui| {
            crate::gui::components::card_grid::draw(ui, self);
        });

        // Springs keep their own schedule; a hover edge during draw may
        // also have started one after the tick above.
        if self.any_motion() {
            ctx.request_repaint();
        }
    }
}
