//! Maneuver icon resolution.
//!
//! The navigation engine describes each upcoming step with a maneuver
//! type ("turn", "off ramp") and an optional modifier ("sharp left").
//! The display picks its arrow icon from a fixed table keyed by the two
//! strings glued together without a separator ("turnsharp left"), the
//! key format the engine's own icon map uses. The pair is kept typed
//! here and only joined at lookup.

use std::collections::HashMap;
use std::fmt;
use std::sync::LazyLock;

use serde::{Deserialize, Serialize};

use crate::error::HudError;

/// Maneuver categories from the navigation engine's step vocabulary.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ManeuverType {
    Turn,
    NewName,
    Depart,
    Arrive,
    Merge,
    OnRamp,
    OffRamp,
    Fork,
    EndOfRoad,
    UseLane,
    Continue,
    Roundabout,
    Rotary,
    RoundaboutTurn,
    Notification,
    ExitRoundabout,
    ExitRotary,
    Other(String),
}

impl ManeuverType {
    pub fn parse(raw: &str) -> Self {
        match raw {
            "turn" => ManeuverType::Turn,
            "new name" => ManeuverType::NewName,
            "depart" => ManeuverType::Depart,
            "arrive" => ManeuverType::Arrive,
            "merge" => ManeuverType::Merge,
            "on ramp" => ManeuverType::OnRamp,
            "off ramp" => ManeuverType::OffRamp,
            "fork" => ManeuverType::Fork,
            "end of road" => ManeuverType::EndOfRoad,
            "use lane" => ManeuverType::UseLane,
            "continue" => ManeuverType::Continue,
            "roundabout" => ManeuverType::Roundabout,
            "rotary" => ManeuverType::Rotary,
            "roundabout turn" => ManeuverType::RoundaboutTurn,
            "notification" => ManeuverType::Notification,
            "exit roundabout" => ManeuverType::ExitRoundabout,
            "exit rotary" => ManeuverType::ExitRotary,
            other => ManeuverType::Other(other.to_string()),
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            ManeuverType::Turn => "turn",
            ManeuverType::NewName => "new name",
            ManeuverType::Depart => "depart",
            ManeuverType::Arrive => "arrive",
            ManeuverType::Merge => "merge",
            ManeuverType::OnRamp => "on ramp",
            ManeuverType::OffRamp => "off ramp",
            ManeuverType::Fork => "fork",
            ManeuverType::EndOfRoad => "end of road",
            ManeuverType::UseLane => "use lane",
            ManeuverType::Continue => "continue",
            ManeuverType::Roundabout => "roundabout",
            ManeuverType::Rotary => "rotary",
            ManeuverType::RoundaboutTurn => "roundabout turn",
            ManeuverType::Notification => "notification",
            ManeuverType::ExitRoundabout => "exit roundabout",
            ManeuverType::ExitRotary => "exit rotary",
            ManeuverType::Other(raw) => raw,
        }
    }
}

/// Direction qualifier of a maneuver.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ManeuverModifier {
    UTurn,
    SharpRight,
    Right,
    SlightRight,
    Straight,
    SlightLeft,
    Left,
    SharpLeft,
    Other(String),
}

impl ManeuverModifier {
    pub fn parse(raw: &str) -> Self {
        match raw {
            "uturn" => ManeuverModifier::UTurn,
            "sharp right" => ManeuverModifier::SharpRight,
            "right" => ManeuverModifier::Right,
            "slight right" => ManeuverModifier::SlightRight,
            "straight" => ManeuverModifier::Straight,
            "slight left" => ManeuverModifier::SlightLeft,
            "left" => ManeuverModifier::Left,
            "sharp left" => ManeuverModifier::SharpLeft,
            other => ManeuverModifier::Other(other.to_string()),
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            ManeuverModifier::UTurn => "uturn",
            ManeuverModifier::SharpRight => "sharp right",
            ManeuverModifier::Right => "right",
            ManeuverModifier::SlightRight => "slight right",
            ManeuverModifier::Straight => "straight",
            ManeuverModifier::SlightLeft => "slight left",
            ManeuverModifier::Left => "left",
            ManeuverModifier::SharpLeft => "sharp left",
            ManeuverModifier::Other(raw) => raw,
        }
    }
}

/// The maneuver of an upcoming step.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "RawManeuver", into = "RawManeuver")]
pub struct ManeuverDescriptor {
    pub kind: ManeuverType,
    pub modifier: Option<ManeuverModifier>,
}

impl ManeuverDescriptor {
    /// Build from the engine's raw strings. A blank modifier means none.
    pub fn new(kind: &str, modifier: &str) -> Self {
        let modifier = match modifier.trim() {
            "" => None,
            trimmed => Some(ManeuverModifier::parse(trimmed)),
        };
        ManeuverDescriptor {
            kind: ManeuverType::parse(kind),
            modifier,
        }
    }

    /// The icon table key: type and modifier joined with no separator.
    pub fn lookup_key(&self) -> String {
        match &self.modifier {
            Some(modifier) => format!("{}{}", self.kind.as_str(), modifier.as_str()),
            None => self.kind.as_str().to_string(),
        }
    }
}

/// Wire form of [`ManeuverDescriptor`], as the engine reports it.
#[derive(Serialize, Deserialize)]
struct RawManeuver {
    #[serde(rename = "type")]
    kind: String,
    #[serde(default)]
    modifier: String,
}

impl From<RawManeuver> for ManeuverDescriptor {
    fn from(raw: RawManeuver) -> Self {
        ManeuverDescriptor::new(&raw.kind, &raw.modifier)
    }
}

impl From<ManeuverDescriptor> for RawManeuver {
    fn from(descriptor: ManeuverDescriptor) -> Self {
        RawManeuver {
            kind: descriptor.kind.as_str().to_string(),
            modifier: descriptor
                .modifier
                .as_ref()
                .map(|m| m.as_str().to_string())
                .unwrap_or_default(),
        }
    }
}

/// Maneuver arrow icons available to the display.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ManeuverIcon {
    /// Shown before the first step and when no upcoming step exists.
    Starting,
    Depart,
    DepartLeft,
    DepartRight,
    Arrive,
    ArriveLeft,
    ArriveRight,
    ArriveStraight,
    Straight,
    UTurn,
    TurnSharpRight,
    TurnRight,
    TurnSlightRight,
    TurnSlightLeft,
    TurnLeft,
    TurnSharpLeft,
    MergeLeft,
    MergeRight,
    MergeStraight,
    OnRampLeft,
    OnRampRight,
    OnRampStraight,
    OffRampLeft,
    OffRampRight,
    Fork,
    ForkLeft,
    ForkRight,
    EndOfRoadLeft,
    EndOfRoadRight,
    Roundabout,
    RoundaboutSharpRight,
    RoundaboutRight,
    RoundaboutSlightRight,
    RoundaboutStraight,
    RoundaboutSlightLeft,
    RoundaboutLeft,
    RoundaboutSharpLeft,
}

impl ManeuverIcon {
    /// Android drawable resource name.
    pub fn resource_name(self) -> &'static str {
        match self {
            ManeuverIcon::Starting => "maneuver_starting",
            ManeuverIcon::Depart => "maneuver_depart",
            ManeuverIcon::DepartLeft => "maneuver_depart_left",
            ManeuverIcon::DepartRight => "maneuver_depart_right",
            ManeuverIcon::Arrive => "maneuver_arrive",
            ManeuverIcon::ArriveLeft => "maneuver_arrive_left",
            ManeuverIcon::ArriveRight => "maneuver_arrive_right",
            ManeuverIcon::ArriveStraight => "maneuver_arrive_straight",
            ManeuverIcon::Straight => "maneuver_straight",
            ManeuverIcon::UTurn => "maneuver_uturn",
            ManeuverIcon::TurnSharpRight => "maneuver_turn_sharp_right",
            ManeuverIcon::TurnRight => "maneuver_turn_right",
            ManeuverIcon::TurnSlightRight => "maneuver_turn_slight_right",
            ManeuverIcon::TurnSlightLeft => "maneuver_turn_slight_left",
            ManeuverIcon::TurnLeft => "maneuver_turn_left",
            ManeuverIcon::TurnSharpLeft => "maneuver_turn_sharp_left",
            ManeuverIcon::MergeLeft => "maneuver_merge_left",
            ManeuverIcon::MergeRight => "maneuver_merge_right",
            ManeuverIcon::MergeStraight => "maneuver_merge_straight",
            ManeuverIcon::OnRampLeft => "maneuver_on_ramp_left",
            ManeuverIcon::OnRampRight => "maneuver_on_ramp_right",
            ManeuverIcon::OnRampStraight => "maneuver_on_ramp_straight",
            ManeuverIcon::OffRampLeft => "maneuver_off_ramp_left",
            ManeuverIcon::OffRampRight => "maneuver_off_ramp_right",
            ManeuverIcon::Fork => "maneuver_fork",
            ManeuverIcon::ForkLeft => "maneuver_fork_left",
            ManeuverIcon::ForkRight => "maneuver_fork_right",
            ManeuverIcon::EndOfRoadLeft => "maneuver_end_of_road_left",
            ManeuverIcon::EndOfRoadRight => "maneuver_end_of_road_right",
            ManeuverIcon::Roundabout => "maneuver_roundabout",
            ManeuverIcon::RoundaboutSharpRight => "maneuver_roundabout_sharp_right",
            ManeuverIcon::RoundaboutRight => "maneuver_roundabout_right",
            ManeuverIcon::RoundaboutSlightRight => "maneuver_roundabout_slight_right",
            ManeuverIcon::RoundaboutStraight => "maneuver_roundabout_straight",
            ManeuverIcon::RoundaboutSlightLeft => "maneuver_roundabout_slight_left",
            ManeuverIcon::RoundaboutLeft => "maneuver_roundabout_left",
            ManeuverIcon::RoundaboutSharpLeft => "maneuver_roundabout_sharp_left",
        }
    }
}

impl Serialize for ManeuverIcon {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.resource_name())
    }
}

impl fmt::Display for ManeuverIcon {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.resource_name())
    }
}

/// Icons for the plain directional turns, shared by every maneuver type
/// that draws an ordinary arrow.
const TURN_ARROWS: &[(&str, ManeuverIcon)] = &[
    ("", ManeuverIcon::Straight),
    ("uturn", ManeuverIcon::UTurn),
    ("sharp right", ManeuverIcon::TurnSharpRight),
    ("right", ManeuverIcon::TurnRight),
    ("slight right", ManeuverIcon::TurnSlightRight),
    ("straight", ManeuverIcon::Straight),
    ("slight left", ManeuverIcon::TurnSlightLeft),
    ("left", ManeuverIcon::TurnLeft),
    ("sharp left", ManeuverIcon::TurnSharpLeft),
];

const ROUNDABOUT_ARROWS: &[(&str, ManeuverIcon)] = &[
    ("", ManeuverIcon::Roundabout),
    ("sharp right", ManeuverIcon::RoundaboutSharpRight),
    ("right", ManeuverIcon::RoundaboutRight),
    ("slight right", ManeuverIcon::RoundaboutSlightRight),
    ("straight", ManeuverIcon::RoundaboutStraight),
    ("slight left", ManeuverIcon::RoundaboutSlightLeft),
    ("left", ManeuverIcon::RoundaboutLeft),
    ("sharp left", ManeuverIcon::RoundaboutSharpLeft),
];

/// Keys whose icon is specific to the maneuver type.
const SPECIFIC_ICONS: &[(&str, ManeuverIcon)] = &[
    ("depart", ManeuverIcon::Depart),
    ("departleft", ManeuverIcon::DepartLeft),
    ("departright", ManeuverIcon::DepartRight),
    ("departstraight", ManeuverIcon::Depart),
    ("arrive", ManeuverIcon::Arrive),
    ("arriveleft", ManeuverIcon::ArriveLeft),
    ("arriveright", ManeuverIcon::ArriveRight),
    ("arrivestraight", ManeuverIcon::ArriveStraight),
    ("merge", ManeuverIcon::MergeStraight),
    ("mergeleft", ManeuverIcon::MergeLeft),
    ("mergeslight left", ManeuverIcon::MergeLeft),
    ("mergeright", ManeuverIcon::MergeRight),
    ("mergeslight right", ManeuverIcon::MergeRight),
    ("mergestraight", ManeuverIcon::MergeStraight),
    ("on ramp", ManeuverIcon::OnRampStraight),
    ("on rampsharp left", ManeuverIcon::OnRampLeft),
    ("on rampleft", ManeuverIcon::OnRampLeft),
    ("on rampslight left", ManeuverIcon::OnRampLeft),
    ("on rampsharp right", ManeuverIcon::OnRampRight),
    ("on rampright", ManeuverIcon::OnRampRight),
    ("on rampslight right", ManeuverIcon::OnRampRight),
    ("on rampstraight", ManeuverIcon::OnRampStraight),
    ("off ramp", ManeuverIcon::OffRampRight),
    ("off rampleft", ManeuverIcon::OffRampLeft),
    ("off rampslight left", ManeuverIcon::OffRampLeft),
    ("off rampright", ManeuverIcon::OffRampRight),
    ("off rampslight right", ManeuverIcon::OffRampRight),
    ("fork", ManeuverIcon::Fork),
    ("forkleft", ManeuverIcon::ForkLeft),
    ("forkslight left", ManeuverIcon::ForkLeft),
    ("forkright", ManeuverIcon::ForkRight),
    ("forkslight right", ManeuverIcon::ForkRight),
    ("forkstraight", ManeuverIcon::Fork),
    ("end of roadleft", ManeuverIcon::EndOfRoadLeft),
    ("end of road", ManeuverIcon::EndOfRoadRight),
    ("end of roadright", ManeuverIcon::EndOfRoadRight),
    ("roundabout turn", ManeuverIcon::Straight),
    ("roundabout turnleft", ManeuverIcon::TurnLeft),
    ("roundabout turnright", ManeuverIcon::TurnRight),
    ("roundabout turnstraight", ManeuverIcon::Straight),
];

/// Lookup key to icon, built once for the whole process.
static ICON_TABLE: LazyLock<HashMap<String, ManeuverIcon>> = LazyLock::new(|| {
    let mut table = HashMap::new();
    for kind in ["turn", "continue", "new name"] {
        for &(modifier, icon) in TURN_ARROWS {
            table.insert(format!("{kind}{modifier}"), icon);
        }
    }
    for kind in ["roundabout", "rotary"] {
        for &(modifier, icon) in ROUNDABOUT_ARROWS {
            table.insert(format!("{kind}{modifier}"), icon);
        }
    }
    for &(key, icon) in SPECIFIC_ICONS {
        table.insert(key.to_string(), icon);
    }
    table
});

/// Resolve the icon for the upcoming maneuver.
///
/// `None` (no upcoming step) yields [`ManeuverIcon::Starting`]. A key
/// missing from the table is reported as
/// [`HudError::ManeuverNotFound`]; picking a substitute is up to the
/// caller.
pub fn resolve(descriptor: Option<&ManeuverDescriptor>) -> Result<ManeuverIcon, HudError> {
    let Some(descriptor) = descriptor else {
        return Ok(ManeuverIcon::Starting);
    };
    let key = descriptor.lookup_key();
    ICON_TABLE
        .get(&key)
        .copied()
        .ok_or(HudError::ManeuverNotFound(key))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn icon(kind: &str, modifier: &str) -> Result<ManeuverIcon, HudError> {
        resolve(Some(&ManeuverDescriptor::new(kind, modifier)))
    }

    #[test]
    fn absent_step_is_starting() {
        assert_eq!(resolve(None).unwrap(), ManeuverIcon::Starting);
    }

    #[test]
    fn turn_left() {
        assert_eq!(icon("turn", "left").unwrap(), ManeuverIcon::TurnLeft);
    }

    #[test]
    fn bare_turn() {
        assert_eq!(icon("turn", "").unwrap(), ManeuverIcon::Straight);
        assert_eq!(icon("turn", "  ").unwrap(), ManeuverIcon::Straight);
    }

    #[test]
    fn every_modifier_resolves_for_turn() {
        for modifier in [
            "uturn",
            "sharp right",
            "right",
            "slight right",
            "straight",
            "slight left",
            "left",
            "sharp left",
        ] {
            assert!(icon("turn", modifier).is_ok(), "turn{modifier}");
            assert!(icon("continue", modifier).is_ok(), "continue{modifier}");
        }
    }

    #[test]
    fn roundabout_and_rotary_share_arrows() {
        assert_eq!(icon("roundabout", "left").unwrap(), ManeuverIcon::RoundaboutLeft);
        assert_eq!(icon("rotary", "left").unwrap(), ManeuverIcon::RoundaboutLeft);
        assert_eq!(icon("rotary", "").unwrap(), ManeuverIcon::Roundabout);
    }

    #[test]
    fn ramps_and_forks() {
        assert_eq!(icon("off ramp", "slight right").unwrap(), ManeuverIcon::OffRampRight);
        assert_eq!(icon("on ramp", "left").unwrap(), ManeuverIcon::OnRampLeft);
        assert_eq!(icon("fork", "slight left").unwrap(), ManeuverIcon::ForkLeft);
        assert_eq!(icon("end of road", "right").unwrap(), ManeuverIcon::EndOfRoadRight);
        assert_eq!(icon("arrive", "").unwrap(), ManeuverIcon::Arrive);
    }

    #[test]
    fn unknown_key_is_not_found() {
        match icon("notification", "left") {
            Err(HudError::ManeuverNotFound(key)) => assert_eq!(key, "notificationleft"),
            other => panic!("expected ManeuverNotFound, got {other:?}"),
        }
        assert!(matches!(icon("teleport", ""), Err(HudError::ManeuverNotFound(_))));
    }

    #[test]
    fn lookup_key_has_no_separator() {
        let descriptor = ManeuverDescriptor::new("off ramp", "slight right");
        assert_eq!(descriptor.kind, ManeuverType::OffRamp);
        assert_eq!(descriptor.modifier, Some(ManeuverModifier::SlightRight));
        assert_eq!(descriptor.lookup_key(), "off rampslight right");
        assert_eq!(ManeuverDescriptor::new("turn", "").lookup_key(), "turn");
    }

    #[test]
    fn every_type_resolves_bare() {
        for kind in [
            "turn",
            "new name",
            "continue",
            "depart",
            "arrive",
            "merge",
            "on ramp",
            "off ramp",
            "fork",
            "end of road",
            "roundabout",
            "rotary",
            "roundabout turn",
        ] {
            assert!(icon(kind, "").is_ok(), "{kind}");
        }
        assert_eq!(icon("off ramp", "").unwrap(), ManeuverIcon::OffRampRight);
        assert_eq!(icon("end of road", "").unwrap(), ManeuverIcon::EndOfRoadRight);
        assert_eq!(icon("roundabout turn", "").unwrap(), ManeuverIcon::Straight);
    }

    #[test]
    fn modifier_whitespace_is_trimmed() {
        let descriptor = ManeuverDescriptor::new("turn", " left ");
        assert_eq!(descriptor.modifier, Some(ManeuverModifier::Left));
        assert_eq!(descriptor.lookup_key(), "turnleft");
        assert_eq!(resolve(Some(&descriptor)).unwrap(), ManeuverIcon::TurnLeft);
    }

    #[test]
    fn unknown_strings_survive_in_key() {
        let descriptor = ManeuverDescriptor::new("hover", "up");
        assert_eq!(descriptor.kind, ManeuverType::Other("hover".into()));
        assert_eq!(descriptor.lookup_key(), "hoverup");
    }

    #[test]
    fn descriptor_from_engine_json() {
        let descriptor: ManeuverDescriptor =
            serde_json::from_str(r#"{"type":"turn","modifier":"sharp left"}"#).unwrap();
        assert_eq!(descriptor.modifier, Some(ManeuverModifier::SharpLeft));

        let bare: ManeuverDescriptor = serde_json::from_str(r#"{"type":"depart"}"#).unwrap();
        assert_eq!(bare.modifier, None);
        assert_eq!(resolve(Some(&bare)).unwrap(), ManeuverIcon::Depart);
    }

    #[test]
    fn resolve_is_idempotent() {
        let descriptor = ManeuverDescriptor::new("merge", "slight left");
        assert_eq!(
            resolve(Some(&descriptor)).unwrap(),
            resolve(Some(&descriptor)).unwrap()
        );
    }

    #[test]
    fn icon_resource_names() {
        assert_eq!(ManeuverIcon::Starting.resource_name(), "maneuver_starting");
        assert_eq!(ManeuverIcon::TurnLeft.to_string(), "maneuver_turn_left");
    }
}
