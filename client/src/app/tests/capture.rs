use super::*;
use crate::app::events::{CaptureMessage, ConfigMessage, ExportMessage, Topic, UiMessage};
use crate::core::GENERIC_ERROR_MESSAGE;

#[tokio::test]
async fn test_capture_test_pairs_frame_and_status() {
    let backend = MockBackend::new();
    let app = started_app(&backend).await;
    let recorder = Recorder::watch(app.bus(), &[Topic::CaptureTestResult, Topic::CaptureError]);

    app.test_capture();
    app.settle().await;

    match recorder.messages().as_slice() {
        [Message::Capture(CaptureMessage::TestResult { frame, status })] => {
            assert_eq!(frame.width, 1280);
            assert!(status.mumu_detected);
            assert!(!status.region_configured);
        }
        other => panic!("unexpected messages: {:?}", other),
    }
    assert_eq!(backend.call_count("capture_test_frame"), 1);
    assert_eq!(backend.call_count("get_capture_status"), 1);
}

#[tokio::test]
async fn test_capture_status_failure_fails_the_pair() {
    let backend = MockBackend::new();
    backend.fail(
        "get_capture_status",
        BackendError::Rejected("MuMu window not found".to_string()),
    );
    let app = started_app(&backend).await;
    let recorder = Recorder::watch(app.bus(), &[Topic::CaptureTestResult, Topic::CaptureError]);

    app.test_capture();
    app.settle().await;

    assert_eq!(recorder.topics(), vec![Topic::CaptureError]);
    assert_eq!(recorder.messages()[0].error_text(), Some("MuMu window not found"));
}

#[tokio::test]
async fn test_region_selection_returns_fresh_config() {
    let backend = MockBackend::new();
    let app = started_app(&backend).await;
    let recorder = Recorder::watch(app.bus(), &[Topic::ConfigRegionSelected]);

    app.select_capture_region();
    app.settle().await;

    match recorder.messages().as_slice() {
        [Message::Config(ConfigMessage::RegionSelected(config))] => {
            assert_eq!(config.mumu_region.map(|r| r.width), Some(1280));
        }
        other => panic!("unexpected messages: {:?}", other),
    }
}

#[tokio::test]
async fn test_failed_region_selection_skips_config_reload() {
    let backend = MockBackend::new();
    let app = started_app(&backend).await;
    backend.fail(
        "start_region_selection",
        BackendError::Transport("broken pipe".to_string()),
    );
    let config_reads = backend.call_count("get_config");
    let recorder = Recorder::watch(app.bus(), &[Topic::ConfigRegionSelected, Topic::ConfigError]);

    app.select_capture_region();
    app.settle().await;

    assert_eq!(recorder.topics(), vec![Topic::ConfigError]);
    assert_eq!(recorder.messages()[0].error_text(), Some(GENERIC_ERROR_MESSAGE));
    assert_eq!(backend.call_count("get_config"), config_reads);
}

#[tokio::test]
async fn test_calibration_refreshes_status() {
    let backend = MockBackend::new();
    let app = started_app(&backend).await;
    let recorder = Recorder::watch(app.bus(), &[Topic::CalibrationStatusLoaded]);

    app.calibrate(CalibrationState::InCombat);
    app.settle().await;

    match recorder.messages().as_slice() {
        [Message::Calibration(crate::app::events::CalibrationMessage::StatusLoaded(status))] => {
            assert!(status.is_calibrated(CalibrationState::InCombat));
            assert!(!status.is_complete());
        }
        other => panic!("unexpected messages: {:?}", other),
    }
}

#[tokio::test]
async fn test_export_reports_path() {
    let backend = MockBackend::new();
    let app = started_app(&backend).await;
    let recorder = Recorder::watch(app.bus(), &[Topic::ExportCsvCompleted]);

    app.export_csv();
    app.settle().await;

    assert_eq!(
        recorder.messages(),
        vec![Message::from(ExportMessage::CsvCompleted {
            path: "exports/matches.csv".to_string()
        })]
    );
}

#[tokio::test]
async fn test_update_page_needs_a_notice() {
    let backend = MockBackend::new();
    let app = started_app(&backend).await;
    assert!(!app.open_update_page());

    app.publish(UiMessage::UpdateAvailable {
        version: "1.4.0".to_string(),
        url: "https://example.org/releases/1.4.0".to_string(),
    });
    assert_eq!(app.update_notice().map(|n| n.version), Some("1.4.0".to_string()));

    assert!(app.open_update_page());
    app.settle().await;
    assert!(app.bus().was_published(Topic::UrlOpened));
    assert_eq!(backend.call_count("open_external_url"), 1);
}
