//! # Calibration Tasks

use shared::CalibrationState;

use super::{ErrorScope, TaskContext};
use crate::app::events::CalibrationMessage;

pub(crate) fn calibrate(ctx: &TaskContext, state: CalibrationState) {
    let backend = ctx.backend.clone();
    ctx.spawn("calibrate_state", ErrorScope::Calibration, async move {
        backend.calibrate_state(state).await?;
        Ok(CalibrationMessage::Calibrated { state }.into())
    });
}

pub(crate) fn status(ctx: &TaskContext) {
    let backend = ctx.backend.clone();
    ctx.spawn("get_calibration_status", ErrorScope::Calibration, async move {
        let status = backend.get_calibration_status().await?;
        Ok(CalibrationMessage::StatusLoaded(status).into())
    });
}
