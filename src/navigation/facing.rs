// navigation/facing.rs

// Eight-point compass label for a heading, used in the position read-outs.

use std::fmt;

use crate::core::angles::heading_degrees;

/// Compass direction a robot is facing
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum CompassLabel {
    /// 0°
    East,
    /// 90°
    North,
    /// 180°
    West,
    /// 270°
    South,
    /// Strictly between East and North
    Northeast,
    /// Strictly between North and West
    Northwest,
    /// Strictly between West and South
    Southwest,
    /// Strictly between South and East
    Southeast,
    /// Heading missing or not a number
    Unknown,
}

impl CompassLabel {
    /// Human-readable name
    pub fn as_str(&self) -> &'static str {
        match self {
            CompassLabel::East => "East",
            CompassLabel::North => "North",
            CompassLabel::West => "West",
            CompassLabel::South => "South",
            CompassLabel::Northeast => "Northeast",
            CompassLabel::Northwest => "Northwest",
            CompassLabel::Southwest => "Southwest",
            CompassLabel::Southeast => "Southeast",
            CompassLabel::Unknown => "Unknown",
        }
    }
}

impl fmt::Display for CompassLabel {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Maps a heading in radians to its compass label.
///
/// Cardinal headings match exactly; anything strictly between two cardinals
/// gets the diagonal of that quadrant.
pub fn facing_label(theta: Option<f64>) -> CompassLabel {
    let theta = match theta {
        Some(theta) if theta.is_finite() => theta,
        _ => return CompassLabel::Unknown,
    };

    let degrees = heading_degrees(theta);
    if degrees == 0.0 {
        CompassLabel::East
    } else if degrees == 90.0 {
        CompassLabel::North
    } else if degrees == 180.0 {
        CompassLabel::West
    } else if degrees == 270.0 {
        CompassLabel::South
    } else if degrees < 90.0 {
        CompassLabel::Northeast
    } else if degrees < 180.0 {
        CompassLabel::Northwest
    } else if degrees < 270.0 {
        CompassLabel::Southwest
    } else if degrees < 360.0 {
        CompassLabel::Southeast
    } else {
        CompassLabel::Unknown
    }
}
