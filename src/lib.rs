pub mod android_jni;
pub mod config;
pub mod distance;
pub mod duration;
pub mod error;
pub mod maneuver;
pub mod progress;

pub use error::HudError;

pub const VERSION: &str = env!("CARGO_PKG_VERSION");
