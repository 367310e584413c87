// tests/app_flow.rs
//
// Fetch wiring end to end, minus the window: the action spawns its
// worker, the worker posts a tagged result, and absorb_results folds
// it into the view. A default egui context stands in for the frame.

use std::{sync::Arc, thread, time::Duration};

use brew_browse::{
    config::state::AppState,
    directory::DirectoryClient,
    gui::{
        actions,
        app::{App, FetchMsg, ResultsView},
    },
};
use eframe::egui;
use httpmock::prelude::*;

fn app_against(server: &MockServer) -> App {
    let base = server.url("/v1/breweries");
    let mut state = AppState::default();
    state.options.api_base = base.clone();
    let client = Arc::new(DirectoryClient::new(&base).unwrap());
    App::new(state, client)
}

/// Poll absorb_results until the in-flight fetch lands.
fn wait_for_result(app: &mut App, ctx: &egui::Context) {
    for _ in 0..200 {
        app.absorb_results(ctx);
        if !app.running {
            return;
        }
        thread::sleep(Duration::from_millis(10));
    }
    panic!("fetch never completed");
}

#[test]
fn fetch_success_builds_cards_at_rest() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(GET).path("/v1/breweries");
        then.status(200)
            .header("Content-Type", "application/json")
            .json_body(serde_json::json!([
                {"name": "Zeta Works", "brewery_type": "micro",
                 "city": "Columbus", "state": "Ohio"},
                {"name": "Alpha Tap", "brewery_type": "micro",
                 "city": "Dayton", "state": "Ohio"}
            ]));
    });

    let ctx = egui::Context::default();
    let mut app = app_against(&server);

    actions::fetch(&mut app, &ctx);
    assert!(app.running);
    assert!(matches!(app.view, ResultsView::Blank));

    wait_for_result(&mut app, &ctx);

    assert!(!app.running);
    assert_eq!(*app.status.lock().unwrap(), "Ready: 2 breweries");
    match &app.view {
        ResultsView::Cards(slots) => {
            assert_eq!(slots.len(), 2);
            assert_eq!(slots[0].card.title, "Zeta Works");
            assert_eq!(slots[1].card.title, "Alpha Tap");
            // Cards land at rest; entrance only runs on demand.
            for slot in slots {
                assert!(!slot.motion.is_animating());
                assert_eq!(slot.motion.offset_y(), 0.0);
                assert_eq!(slot.motion.scale(), 1.0);
                assert_eq!(slot.motion.opacity(), 1.0);
            }
        }
        _ => panic!("expected cards"),
    }
}

#[test]
fn fetch_empty_shows_no_results() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(GET).path("/v1/breweries");
        then.status(200)
            .header("Content-Type", "application/json")
            .json_body(serde_json::json!([]));
    });

    let ctx = egui::Context::default();
    let mut app = app_against(&server);

    actions::fetch(&mut app, &ctx);
    wait_for_result(&mut app, &ctx);

    assert!(matches!(app.view, ResultsView::NoResults));
    assert_eq!(*app.status.lock().unwrap(), "Ready: 0 breweries");
}

#[test]
fn fetch_failure_clears_loading_and_reports() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(GET).path("/v1/breweries");
        then.status(500);
    });

    let ctx = egui::Context::default();
    let mut app = app_against(&server);

    actions::fetch(&mut app, &ctx);
    wait_for_result(&mut app, &ctx);

    assert!(!app.running);
    assert!(matches!(app.view, ResultsView::Failed));
    assert_eq!(*app.status.lock().unwrap(), "Fetch failed");
}

#[test]
fn stale_results_are_dropped() {
    let server = MockServer::start();
    let ctx = egui::Context::default();
    let mut app = app_against(&server);

    // A newer request is in flight when an older receipt shows up.
    app.fetch_seq = 3;
    app.running = true;
    app.results_tx
        .send(FetchMsg { seq: 2, outcome: Ok(Vec::new()) })
        .unwrap();

    app.absorb_results(&ctx);

    // The straggler neither ends the newer load nor touches the view.
    assert!(app.running);
    assert!(matches!(app.view, ResultsView::Blank));
    assert!(!app.hover_armed());
}

#[test]
fn newest_fetch_wins_when_overlapping() {
    let server = MockServer::start();
    // The superseded request answers late, after its replacement.
    server.mock(|when, then| {
        when.method(GET)
            .path("/v1/breweries")
            .query_param("by_state", "Ohio");
        then.status(200)
            .header("Content-Type", "application/json")
            .delay(Duration::from_millis(300))
            .json_body(serde_json::json!([
                {"name": "Stale House", "brewery_type": "micro",
                 "city": "Columbus", "state": "Ohio"}
            ]));
    });
    server.mock(|when, then| {
        when.method(GET)
            .path("/v1/breweries")
            .query_param("by_state", "Texas");
        then.status(200)
            .header("Content-Type", "application/json")
            .json_body(serde_json::json!([]));
    });

    let ctx = egui::Context::default();
    let mut app = app_against(&server);

    app.state.options.fetch.region = Some("Ohio".into());
    actions::fetch(&mut app, &ctx);
    app.state.options.fetch.region = Some("Texas".into());
    actions::fetch(&mut app, &ctx);

    wait_for_result(&mut app, &ctx);
    assert!(matches!(app.view, ResultsView::NoResults));

    // Let the Ohio straggler land, then drain it.
    thread::sleep(Duration::from_millis(400));
    app.absorb_results(&ctx);
    assert!(!app.running);
    assert!(matches!(app.view, ResultsView::NoResults));
}

#[test]
fn hover_arms_after_fetch_settles() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(GET).path("/v1/breweries");
        then.status(200)
            .header("Content-Type", "application/json")
            .json_body(serde_json::json!([]));
    });

    let ctx = egui::Context::default();
    let mut app = app_against(&server);
    assert!(!app.hover_armed());

    actions::fetch(&mut app, &ctx);
    wait_for_result(&mut app, &ctx);

    thread::sleep(Duration::from_millis(150));
    assert!(app.hover_armed());
}
