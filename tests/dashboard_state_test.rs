//! Integration tests for the dashboard state machine and file picker.

use std::thread;
use std::time::Duration;

use dqscope::config::DqscopeConfig;
use dqscope::tui::app::{App, Phase};

fn app_with_delay(delay_ms: u64) -> App {
    let mut config = DqscopeConfig::default();
    config.analysis.delay_ms = delay_ms;
    App::new(config, None)
}

#[test]
fn full_lifecycle_idle_loading_analyzed_idle() {
    let mut app = app_with_delay(200);
    assert_eq!(app.phase(), Phase::Idle);

    app.begin_analysis();
    assert_eq!(app.phase(), Phase::Loading);

    // Not done yet: the fixed delay has to elapse first.
    app.tick();
    assert_eq!(app.phase(), Phase::Loading);

    thread::sleep(Duration::from_millis(250));
    app.tick();
    assert_eq!(app.phase(), Phase::Analyzed);

    let report = app.report.as_ref().expect("report swapped in");
    assert_eq!(report.overall_score, 85);
    assert_eq!(report.dimensions.len(), 7);

    app.reset();
    assert_eq!(app.phase(), Phase::Idle);
    assert!(app.report.is_none());
}

#[test]
fn report_records_selected_file_name() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("q3-transactions.csv");
    std::fs::write(&path, b"a,b\n1,2\n").unwrap();

    let mut config = DqscopeConfig::default();
    config.analysis.delay_ms = 0;
    let mut app = App::new(config, Some(dir.path()));

    app.select_candidate();
    app.begin_analysis();
    app.tick();

    let report = app.report.as_ref().unwrap();
    assert_eq!(report.source_file.as_deref(), Some("q3-transactions.csv"));
}

#[test]
fn analysis_runs_without_a_selected_file() {
    let mut app = app_with_delay(0);
    assert!(app.selected_file.is_none());
    app.begin_analysis();
    app.tick();
    assert_eq!(app.phase(), Phase::Analyzed);
    assert!(app.report.as_ref().unwrap().source_file.is_none());
}

#[test]
fn picker_ignores_unsupported_files() {
    let dir = tempfile::tempdir().unwrap();
    for name in ["data.csv", "notes.txt", "image.png", "sheet.xlsx"] {
        std::fs::write(dir.path().join(name), b"x").unwrap();
    }
    let app = App::new(DqscopeConfig::default(), Some(dir.path()));
    assert_eq!(app.candidates.len(), 2);
}

#[test]
fn loading_progress_moves_toward_one() {
    let mut app = app_with_delay(50);
    app.begin_analysis();
    let early = app.loading_progress();
    thread::sleep(Duration::from_millis(20));
    let later = app.loading_progress();
    assert!(later >= early);
    assert!(later <= 1.0);
}
