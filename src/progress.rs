//! Heads-up display frames.
//!
//! Combines the duration, distance and maneuver formatters into one
//! [`HudFrame`] per progress update from the navigation engine. This is
//! also where the display's fallback policy lives: a maneuver the icon
//! table doesn't know shows the starting icon instead of failing the
//! whole frame.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::config::HudConfig;
use crate::distance::{format_route_distance_remaining, format_step_distance_remaining};
use crate::duration::{format_arrival, format_remaining};
use crate::error::HudError;
use crate::maneuver::{self, ManeuverDescriptor, ManeuverIcon};

/// Full scale of the step progress bar.
pub const STEP_PROGRESS_MAX: i32 = 10_000;

/// Route progress reported by the navigation engine on a location update.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ProgressSnapshot {
    /// Distance to the end of the current step, in meters.
    pub distance_remaining_to_step_m: f64,
    /// Distance to the destination, in meters.
    pub distance_remaining_to_destination_m: f64,
    /// Duration to the destination, in seconds.
    pub duration_remaining_s: f64,
    /// Fraction of the current step already travelled, 0.0 to 1.0.
    pub step_fraction_traveled: f32,
}

/// The step following the current one.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UpcomingStep {
    /// Road name of the step.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Spoken-style instruction, e.g. "Turn left onto Main Street".
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub instruction: Option<String>,
    pub maneuver: ManeuverDescriptor,
}

/// A progress update as sent by the app over JNI.
#[derive(Debug, Clone, Deserialize)]
pub struct FrameRequest {
    pub progress: ProgressSnapshot,
    #[serde(default)]
    pub upcoming: Option<UpcomingStep>,
}

impl FrameRequest {
    pub fn from_json(json: &str) -> Result<Self, HudError> {
        Ok(serde_json::from_str(json)?)
    }
}

/// Everything the display shows for one progress update.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HudFrame {
    /// `None` leaves the previous step text on screen.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub step_text: Option<String>,
    pub maneuver_icon: ManeuverIcon,
    pub step_distance: String,
    pub route_distance: String,
    pub time_remaining: String,
    pub arrival: String,
    /// Step progress bar position, 0 to [`STEP_PROGRESS_MAX`].
    pub step_progress: i32,
}

impl HudFrame {
    pub fn to_json(&self) -> Result<String, HudError> {
        Ok(serde_json::to_string(self)?)
    }
}

/// Text for the step line: the road name, else the instruction.
pub fn step_text(step: &UpcomingStep) -> Option<&str> {
    [step.name.as_deref(), step.instruction.as_deref()]
        .into_iter()
        .flatten()
        .find(|text| !text.is_empty())
}

/// Progress bar position for the fraction of the step travelled.
pub fn step_progress(fraction_traveled: f32) -> i32 {
    (fraction_traveled.clamp(0.0, 1.0) * STEP_PROGRESS_MAX as f32).round() as i32
}

/// Icon for the upcoming step, falling back to the starting icon when
/// the maneuver has no entry in the icon table.
pub fn icon_or_default(upcoming: Option<&UpcomingStep>) -> ManeuverIcon {
    match maneuver::resolve(upcoming.map(|step| &step.maneuver)) {
        Ok(icon) => icon,
        Err(err) => {
            log::warn!("{err}, showing {}", ManeuverIcon::Starting);
            ManeuverIcon::Starting
        }
    }
}

/// Format a progress update for display.
///
/// `now` is the local wall-clock time used for the arrival estimate.
pub fn compose_frame(
    progress: &ProgressSnapshot,
    upcoming: Option<&UpcomingStep>,
    now: NaiveDateTime,
    config: &HudConfig,
) -> Result<HudFrame, HudError> {
    let frame = HudFrame {
        step_text: upcoming.and_then(step_text).map(str::to_string),
        maneuver_icon: icon_or_default(upcoming),
        step_distance: format_step_distance_remaining(progress.distance_remaining_to_step_m),
        route_distance: format_route_distance_remaining(
            progress.distance_remaining_to_destination_m,
        ),
        time_remaining: format_remaining(progress.duration_remaining_s)?,
        arrival: format_arrival(progress.duration_remaining_s, now, config.time_format)?,
        step_progress: step_progress(progress.step_fraction_traveled),
    };
    log::debug!(
        "frame: {} | {} | {}",
        frame.step_distance,
        frame.time_remaining,
        frame.maneuver_icon
    );
    Ok(frame)
}
