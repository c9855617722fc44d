//! JNI bindings for the Android app.
//!
//! Each public function here corresponds to an `external fun` declaration
//! in RustBridge.kt. The function names follow JNI naming conventions:
//! Java_<package>_<class>_<method> with dots replaced by underscores.
//!
//! Formatting errors are thrown as Java exceptions (see
//! [`HudError::java_exception_class`]) and the function returns null.

use std::ptr;

use chrono::{DateTime, NaiveDateTime};
use jni::objects::{JClass, JString};
use jni::sys::{jboolean, jdouble, jfloat, jint, jlong, jstring, JNI_TRUE};
use jni::JNIEnv;

use crate::config::{HudConfig, TimeFormat};
use crate::distance;
use crate::duration;
use crate::error::HudError;
use crate::maneuver::{self, ManeuverDescriptor};
use crate::progress::{self, FrameRequest};

/// Installs the Android logger. Safe to call more than once.
/// Maps to: RustBridge.init()
#[unsafe(no_mangle)]
pub extern "system" fn Java_com_navhud_app_RustBridge_init(_env: JNIEnv, _class: JClass) {
    android_logger::init_once(
        android_logger::Config::default()
            .with_max_level(log::LevelFilter::Debug)
            .with_tag("navhud"),
    );
    log::info!("navhud core {} ready", crate::VERSION);
}

/// Returns the rust-core library version.
/// Maps to: RustBridge.version() -> String
#[unsafe(no_mangle)]
pub extern "system" fn Java_com_navhud_app_RustBridge_version(
    mut env: JNIEnv,
    _class: JClass,
) -> jstring {
    to_jstring(&mut env, Ok(crate::VERSION.to_string()))
}

/// Maps to: RustBridge.formatTimeRemaining(durationS: Double) -> String
#[unsafe(no_mangle)]
pub extern "system" fn Java_com_navhud_app_RustBridge_formatTimeRemaining(
    mut env: JNIEnv,
    _class: JClass,
    duration_s: jdouble,
) -> jstring {
    to_jstring(&mut env, duration::format_remaining(duration_s))
}

/// Maps to: RustBridge.formatArrivalTime(durationS: Double,
/// localEpochMillis: Long, twentyFourHours: Boolean) -> String
///
/// `localEpochMillis` is the epoch time shifted by the device's UTC offset,
/// so its UTC calendar fields are the local wall-clock fields.
#[unsafe(no_mangle)]
pub extern "system" fn Java_com_navhud_app_RustBridge_formatArrivalTime(
    mut env: JNIEnv,
    _class: JClass,
    duration_s: jdouble,
    local_epoch_millis: jlong,
    twenty_four_hours: jboolean,
) -> jstring {
    let format = TimeFormat::from_device_flag(twenty_four_hours == JNI_TRUE);
    let result = local_time(local_epoch_millis)
        .and_then(|now| duration::format_arrival(duration_s, now, format));
    to_jstring(&mut env, result)
}

/// Maps to: RustBridge.formatStepDistance(meters: Double) -> String
#[unsafe(no_mangle)]
pub extern "system" fn Java_com_navhud_app_RustBridge_formatStepDistance(
    mut env: JNIEnv,
    _class: JClass,
    meters: jdouble,
) -> jstring {
    to_jstring(&mut env, Ok(distance::format_step_distance_remaining(meters)))
}

/// Maps to: RustBridge.formatRouteDistance(meters: Double) -> String
#[unsafe(no_mangle)]
pub extern "system" fn Java_com_navhud_app_RustBridge_formatRouteDistance(
    mut env: JNIEnv,
    _class: JClass,
    meters: jdouble,
) -> jstring {
    to_jstring(&mut env, Ok(distance::format_route_distance_remaining(meters)))
}

/// Maps to: RustBridge.speedMph(speedMps: Float, hasSpeed: Boolean) -> Int
#[unsafe(no_mangle)]
pub extern "system" fn Java_com_navhud_app_RustBridge_speedMph(
    _env: JNIEnv,
    _class: JClass,
    speed_mps: jfloat,
    has_speed: jboolean,
) -> jint {
    distance::speed_mph((has_speed == JNI_TRUE).then_some(speed_mps))
}

/// Drawable resource name for a maneuver, or null when the table has no
/// entry so the app can pick its own default.
/// Maps to: RustBridge.maneuverIcon(type: String, modifier: String) -> String?
#[unsafe(no_mangle)]
pub extern "system" fn Java_com_navhud_app_RustBridge_maneuverIcon(
    mut env: JNIEnv,
    _class: JClass,
    kind: JString,
    modifier: JString,
) -> jstring {
    let (Some(kind), Some(modifier)) = (read_string(&mut env, &kind), read_string(&mut env, &modifier))
    else {
        return ptr::null_mut();
    };
    let descriptor = ManeuverDescriptor::new(&kind, &modifier);
    match maneuver::resolve(Some(&descriptor)) {
        Ok(icon) => to_jstring(&mut env, Ok(icon.resource_name().to_string())),
        Err(err) => {
            log::debug!("{err}");
            ptr::null_mut()
        }
    }
}

/// Formats a whole progress update and returns the frame as JSON.
/// Maps to: RustBridge.composeFrame(requestJson: String,
/// localEpochMillis: Long, configJson: String) -> String
#[unsafe(no_mangle)]
pub extern "system" fn Java_com_navhud_app_RustBridge_composeFrame(
    mut env: JNIEnv,
    _class: JClass,
    request_json: JString,
    local_epoch_millis: jlong,
    config_json: JString,
) -> jstring {
    let (Some(request_json), Some(config_json)) = (
        read_string(&mut env, &request_json),
        read_string(&mut env, &config_json),
    ) else {
        return ptr::null_mut();
    };
    let result = compose_frame_json(&request_json, local_epoch_millis, &config_json);
    to_jstring(&mut env, result)
}

fn compose_frame_json(
    request_json: &str,
    local_epoch_millis: i64,
    config_json: &str,
) -> Result<String, HudError> {
    let request = FrameRequest::from_json(request_json)?;
    let config = HudConfig::from_json(config_json)?;
    let now = local_time(local_epoch_millis)?;
    progress::compose_frame(&request.progress, request.upcoming.as_ref(), now, &config)?.to_json()
}

fn local_time(local_epoch_millis: i64) -> Result<NaiveDateTime, HudError> {
    DateTime::from_timestamp_millis(local_epoch_millis)
        .map(|utc| utc.naive_utc())
        .ok_or(HudError::ArrivalOutOfRange)
}

fn read_string(env: &mut JNIEnv, value: &JString) -> Option<String> {
    match env.get_string(value) {
        Ok(text) => Some(text.into()),
        Err(err) => {
            log::error!("failed to read Java string: {err}");
            None
        }
    }
}

fn to_jstring(env: &mut JNIEnv, result: Result<String, HudError>) -> jstring {
    match result {
        Ok(text) => match env.new_string(text) {
            Ok(s) => s.into_raw(),
            Err(err) => {
                log::error!("failed to create Java string: {err}");
                ptr::null_mut()
            }
        },
        Err(err) => {
            if let Err(throw_err) = env.throw_new(err.java_exception_class(), err.to_string()) {
                log::error!("failed to throw {err}: {throw_err}");
            }
            ptr::null_mut()
        }
    }
}
