//! Core type definitions for diagram generation
//!
//! This module contains the option types shared between the formatter and the
//! remote renderer: diagram style, flow direction, and field label selection.

use std::fmt;
use std::str::FromStr;

use crate::core::YumlError;

/// Visual style for the rendered diagram
///
/// Maps directly onto the style segment of the yuml.me request URL.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash)]
pub enum Style {
    /// Plain text, geometric box, plain lines
    #[default]
    Nofunky,
    /// Plain text, geometric box, shadowed lines
    Plain,
    /// Hand-written text, paper box, shadowed lines
    Scruffy,
}

impl Style {
    /// Get all valid style names
    pub fn variants() -> &'static [&'static str] {
        &["nofunky", "plain", "scruffy"]
    }

    /// Human-readable description, used in CLI help text
    pub fn description(&self) -> &'static str {
        match self {
            Style::Nofunky => "Plain text, geometric box, plain lines",
            Style::Plain => "Plain text, geometric box, shadowed lines",
            Style::Scruffy => "Hand-written text, paper box, shadowed lines",
        }
    }
}

impl FromStr for Style {
    type Err = YumlError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "nofunky" => Ok(Style::Nofunky),
            "plain" => Ok(Style::Plain),
            "scruffy" => Ok(Style::Scruffy),
            _ => Err(YumlError::config_error(format!("Invalid style - \"{}\"", s))),
        }
    }
}

impl fmt::Display for Style {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Style::Nofunky => write!(f, "nofunky"),
            Style::Plain => write!(f, "plain"),
            Style::Scruffy => write!(f, "scruffy"),
        }
    }
}

/// Chart flow direction
///
/// Maps onto the `dir:` segment of the yuml.me request URL.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash)]
pub enum Direction {
    /// Top down (TB)
    #[default]
    TopBottom,
    /// Left to right (LR)
    LeftRight,
    /// Right to left (RL)
    RightLeft,
}

impl Direction {
    /// Get all valid direction names
    pub fn variants() -> &'static [&'static str] {
        &["LR", "RL", "TB"]
    }

    /// Human-readable description, used in CLI help text
    pub fn description(&self) -> &'static str {
        match self {
            Direction::TopBottom => "Top down",
            Direction::LeftRight => "Left to right",
            Direction::RightLeft => "Right to left",
        }
    }
}

impl FromStr for Direction {
    type Err = YumlError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_uppercase().as_str() {
            "TB" => Ok(Direction::TopBottom),
            "LR" => Ok(Direction::LeftRight),
            "RL" => Ok(Direction::RightLeft),
            _ => Err(YumlError::config_error(format!(
                "Invalid direction - \"{}\"",
                s
            ))),
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Direction::TopBottom => write!(f, "TB"),
            Direction::LeftRight => write!(f, "LR"),
            Direction::RightLeft => write!(f, "RL"),
        }
    }
}

/// Optional field annotations added to node statements
///
/// Each requested label is checked against the field flags; only fields that
/// carry the matching flag render the annotation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FieldLabel {
    /// Annotate indexed fields with `indexed`
    DbIndex,
    /// Annotate nullable fields with `null`
    Null,
    /// Annotate defaulted fields with `Default: <value>`
    Default,
}

impl FieldLabel {
    /// Get all valid label names
    pub fn variants() -> &'static [&'static str] {
        &["db_index", "null", "default"]
    }
}

impl FromStr for FieldLabel {
    type Err = YumlError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "db_index" => Ok(FieldLabel::DbIndex),
            "null" => Ok(FieldLabel::Null),
            "default" => Ok(FieldLabel::Default),
            _ => Err(YumlError::config_error(format!("Invalid label - \"{}\"", s))),
        }
    }
}

impl fmt::Display for FieldLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FieldLabel::DbIndex => write!(f, "db_index"),
            FieldLabel::Null => write!(f, "null"),
            FieldLabel::Default => write!(f, "default"),
        }
    }
}

/// Options for the remote rendering request
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RenderOptions {
    pub style: Style,
    pub direction: Direction,
    /// Scale percentage
    pub scale: u32,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            style: Style::default(),
            direction: Direction::default(),
            scale: 100,
        }
    }
}

impl RenderOptions {
    pub fn new(style: Style, direction: Direction, scale: u32) -> Self {
        Self {
            style,
            direction,
            scale,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_style_parsing() {
        assert_eq!(Style::from_str("nofunky").unwrap(), Style::Nofunky);
        assert_eq!(Style::from_str("plain").unwrap(), Style::Plain);
        assert_eq!(Style::from_str("SCRUFFY").unwrap(), Style::Scruffy);
        assert!(Style::from_str("fancy").is_err());
    }

    #[test]
    fn test_style_error_message() {
        let err = Style::from_str("fancy").unwrap_err();
        let msg = format!("{}", err);
        assert!(msg.contains("Invalid style"));
        assert!(msg.contains("fancy"));
    }

    #[test]
    fn test_direction_parsing() {
        assert_eq!(Direction::from_str("TB").unwrap(), Direction::TopBottom);
        assert_eq!(Direction::from_str("lr").unwrap(), Direction::LeftRight);
        assert_eq!(Direction::from_str("RL").unwrap(), Direction::RightLeft);
        assert!(Direction::from_str("BT").is_err());
    }

    #[test]
    fn test_field_label_parsing() {
        assert_eq!(FieldLabel::from_str("db_index").unwrap(), FieldLabel::DbIndex);
        assert_eq!(FieldLabel::from_str("null").unwrap(), FieldLabel::Null);
        assert_eq!(FieldLabel::from_str("default").unwrap(), FieldLabel::Default);
        assert!(FieldLabel::from_str("unique").is_err());
    }

    #[test]
    fn test_display_round_trip() {
        for name in Style::variants() {
            let style: Style = name.parse().unwrap();
            assert_eq!(style.to_string(), *name);
        }
        for name in Direction::variants() {
            let direction: Direction = name.parse().unwrap();
            assert_eq!(direction.to_string(), *name);
        }
        for name in FieldLabel::variants() {
            let label: FieldLabel = name.parse().unwrap();
            assert_eq!(label.to_string(), *name);
        }
    }

    #[test]
    fn test_render_options_default() {
        let options = RenderOptions::default();
        assert_eq!(options.style, Style::Nofunky);
        assert_eq!(options.direction, Direction::TopBottom);
        assert_eq!(options.scale, 100);
    }
}
