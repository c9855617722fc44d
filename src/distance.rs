//! Distance and speed formatting in imperial units.
//!
//! Step distances ("In 400 feet") and route distances ("Distance: 12.4 mi")
//! use different rounding, tuned separately for how the display reads
//! them. Both derive from the same meters-to-miles constant.

/// Miles per meter.
pub const METER_MULTIPLIER: f64 = 0.000_621_37;

/// Miles per hour per meter/second.
pub const MPH_MULTIPLIER: f64 = 2.2369;

const FEET_PER_MILE: f64 = 5280.0;

/// Largest step distance, in feet, still shown in feet.
const STEP_FEET_LIMIT: f64 = 1099.0;

pub fn meters_to_miles(meters: f64) -> f64 {
    meters * METER_MULTIPLIER
}

pub fn meters_to_feet(meters: f64) -> f64 {
    meters_to_miles(meters) * FEET_PER_MILE
}

/// Format the distance to the destination, in miles to one decimal.
pub fn format_route_distance_remaining(meters: f64) -> String {
    let miles = (meters_to_miles(meters) * 10.0).round() / 10.0;
    format!("Distance: {miles} mi")
}

/// Format the distance to the next step.
///
/// Anything over 1099 feet switches to miles. Both branches floor to the
/// nearest hundred; the miles branch does it in floating point, so steps
/// shorter than 100 miles read "In 0 miles".
pub fn format_step_distance_remaining(meters: f64) -> String {
    let feet = meters_to_feet(meters);
    if feet > STEP_FEET_LIMIT {
        let miles = meters_to_miles(meters);
        let hundreds = (miles / 100.0).floor() * 100.0;
        format!("In {} miles", hundreds as i64)
    } else {
        let rounded = feet.round() as i64;
        format!("In {} feet", rounded / 100 * 100)
    }
}

/// Current speed in whole miles per hour, truncated.
///
/// `None` when the location fix carries no speed, which reads as 0.
pub fn speed_mph(speed_mps: Option<f32>) -> i32 {
    match speed_mps {
        Some(speed) => (f64::from(speed) * MPH_MULTIPLIER) as i32,
        None => 0,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn meters_for_feet(feet: f64) -> f64 {
        feet / (METER_MULTIPLIER * FEET_PER_MILE)
    }

    #[test]
    fn route_distance_one_mile() {
        assert_eq!(format_route_distance_remaining(1609.34), "Distance: 1 mi");
    }

    #[test]
    fn route_distance_one_decimal() {
        // 20 km is 12.4274 mi
        assert_eq!(format_route_distance_remaining(20_000.0), "Distance: 12.4 mi");
        // 500 m is 0.3107 mi
        assert_eq!(format_route_distance_remaining(500.0), "Distance: 0.3 mi");
    }

    #[test]
    fn route_distance_zero() {
        assert_eq!(format_route_distance_remaining(0.0), "Distance: 0 mi");
    }

    #[test]
    fn step_distance_feet_floor_to_hundred() {
        // 150 m is 492 ft
        assert_eq!(format_step_distance_remaining(150.0), "In 400 feet");
        assert_eq!(format_step_distance_remaining(10.0), "In 0 feet");
        assert_eq!(format_step_distance_remaining(0.0), "In 0 feet");
    }

    #[test]
    fn step_distance_stays_in_feet_below_limit() {
        assert_eq!(format_step_distance_remaining(meters_for_feet(1098.6)), "In 1000 feet");
        assert_eq!(format_step_distance_remaining(meters_for_feet(1099.0)), "In 1000 feet");
    }

    #[test]
    fn step_distance_switches_to_miles_above_limit() {
        assert_eq!(format_step_distance_remaining(meters_for_feet(1101.0)), "In 0 miles");
        assert_eq!(format_step_distance_remaining(meters_for_feet(1100.0)), "In 0 miles");
    }

    #[test]
    fn step_distance_long_miles() {
        // 500 km is 310.7 mi
        assert_eq!(format_step_distance_remaining(500_000.0), "In 300 miles");
    }

    #[test]
    fn step_distance_is_idempotent() {
        assert_eq!(
            format_step_distance_remaining(321.0),
            format_step_distance_remaining(321.0)
        );
    }

    #[test]
    fn speed_truncates() {
        // 10 m/s is 22.369 mph
        assert_eq!(speed_mph(Some(10.0)), 22);
        assert_eq!(speed_mph(Some(0.0)), 0);
    }

    #[test]
    fn speed_missing_is_zero() {
        assert_eq!(speed_mph(None), 0);
    }
}
