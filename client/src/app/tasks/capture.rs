//! # Capture Tasks

use super::{ErrorScope, TaskContext};
use crate::app::events::CaptureMessage;

/// Grab a test frame and the capture status together.
pub(crate) fn test(ctx: &TaskContext) {
    let backend = ctx.backend.clone();
    ctx.spawn("capture_test_frame", ErrorScope::Capture, async move {
        let (frame, status) = futures::join!(
            backend.capture_test_frame(),
            backend.get_capture_status()
        );
        Ok(CaptureMessage::TestResult {
            frame: frame?,
            status: status?,
        }
        .into())
    });
}
