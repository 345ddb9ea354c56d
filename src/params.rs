//! Image transformation parameters
//!
//! Holds the closed vocabularies understood by the proxy (fit modes and
//! alignments) and the accumulated transformation state that the builder
//! serializes into URL path segments.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// How the image is fitted within the requested box
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum FitInType {
    /// Fit within the box, never cropping
    #[default]
    Default,
    /// Fit so the smaller side matches the box
    Full,
    /// Swap width and height when that yields a better fit
    Adaptive,
}

impl FitInType {
    /// Path segment emitted for this mode.
    ///
    /// `adaptative-fit-in` is the proxy's own spelling.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Default => "fit-in",
            Self::Full => "full-fit-in",
            Self::Adaptive => "adaptative-fit-in",
        }
    }
}

impl fmt::Display for FitInType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Horizontal alignment used when cropping
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum HorizontalPosition {
    Left,
    Center,
    Right,
}

impl HorizontalPosition {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Left => "LEFT",
            Self::Center => "CENTER",
            Self::Right => "RIGHT",
        }
    }
}

impl fmt::Display for HorizontalPosition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for HorizontalPosition {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "left" => Ok(HorizontalPosition::Left),
            "center" => Ok(HorizontalPosition::Center),
            "right" => Ok(HorizontalPosition::Right),
            _ => Err(format!("unknown horizontal position: {}", s)),
        }
    }
}

/// Vertical alignment used when cropping
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum VerticalPosition {
    Top,
    Middle,
    Bottom,
}

impl VerticalPosition {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Top => "TOP",
            Self::Middle => "MIDDLE",
            Self::Bottom => "BOTTOM",
        }
    }
}

impl fmt::Display for VerticalPosition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for VerticalPosition {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "top" => Ok(VerticalPosition::Top),
            "middle" => Ok(VerticalPosition::Middle),
            "bottom" => Ok(VerticalPosition::Bottom),
            _ => Err(format!("unknown vertical position: {}", s)),
        }
    }
}

/// Target dimension: a pixel count or the source image's original size
///
/// Pixel values are not validated; negative numbers are serialized as given.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Dimension {
    Pixels(i64),
    /// Serialized as `orig`
    Original,
}

impl Default for Dimension {
    fn default() -> Self {
        Dimension::Pixels(0)
    }
}

impl fmt::Display for Dimension {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Dimension::Pixels(px) => write!(f, "{}", px),
            Dimension::Original => f.write_str("orig"),
        }
    }
}

impl FromStr for Dimension {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s == "orig" {
            return Ok(Dimension::Original);
        }
        s.parse::<i64>()
            .map(Dimension::Pixels)
            .map_err(|_| format!("invalid dimension: {}", s))
    }
}

impl From<i32> for Dimension {
    fn from(px: i32) -> Self {
        Dimension::Pixels(i64::from(px))
    }
}

impl From<i64> for Dimension {
    fn from(px: i64) -> Self {
        Dimension::Pixels(px)
    }
}

impl From<u32> for Dimension {
    fn from(px: u32) -> Self {
        Dimension::Pixels(i64::from(px))
    }
}

/// Manual crop window, in source image pixels
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct WindowSizeAndPosition {
    pub top: i64,
    pub bottom: i64,
    pub left: i64,
    pub right: i64,
}

impl WindowSizeAndPosition {
    pub fn new(top: i64, bottom: i64, left: i64, right: i64) -> Self {
        Self {
            top,
            bottom,
            left,
            right,
        }
    }

    /// Crop segment in the proxy's `left x top : right x bottom` order.
    pub fn segment(&self) -> String {
        format!("{}x{}:{}x{}", self.left, self.top, self.right, self.bottom)
    }
}

/// Accumulated transformation state
///
/// `width`/`height` default to `Some(Pixels(0))`, which still counts as a
/// requested size. `None` is only reachable by assigning the field directly.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Parameters {
    pub image_path: String,
    pub width: Option<Dimension>,
    pub height: Option<Dimension>,
    pub smart: bool,
    pub trim_flag: bool,
    pub fit_in_type: Option<FitInType>,
    pub with_flip_horizontally: bool,
    pub with_flip_vertically: bool,
    pub halign_value: Option<HorizontalPosition>,
    pub valign_value: Option<VerticalPosition>,
    pub crop_values: Option<WindowSizeAndPosition>,
    pub filters_calls: Vec<String>,
}

impl Default for Parameters {
    fn default() -> Self {
        Self {
            image_path: String::new(),
            width: Some(Dimension::default()),
            height: Some(Dimension::default()),
            smart: false,
            trim_flag: false,
            fit_in_type: None,
            with_flip_horizontally: false,
            with_flip_vertically: false,
            halign_value: None,
            valign_value: None,
            crop_values: None,
            filters_calls: Vec::new(),
        }
    }
}

impl Parameters {
    /// Linearize the state into ordered path segments.
    ///
    /// Order: trim, crop, fit mode, size (with flip signs), halign, valign,
    /// smart, filters.
    pub fn url_parts(&self) -> Vec<String> {
        let mut parts = Vec::new();

        if self.trim_flag {
            parts.push("trim".to_string());
        }

        if let Some(crop) = &self.crop_values {
            parts.push(crop.segment());
        }

        if let Some(fit_in) = self.fit_in_type {
            parts.push(fit_in.as_str().to_string());
        }

        if self.width.is_some()
            || self.height.is_some()
            || self.with_flip_horizontally
            || self.with_flip_vertically
        {
            parts.push(self.size_segment());
        }

        if let Some(halign) = self.halign_value {
            parts.push(halign.as_str().to_string());
        }

        if let Some(valign) = self.valign_value {
            parts.push(valign.as_str().to_string());
        }

        if self.smart {
            parts.push("smart".to_string());
        }

        if !self.filters_calls.is_empty() {
            parts.push(format!("filters:{}", self.filters_calls.join(":")));
        }

        parts
    }

    /// Operation path: the segments joined with `/`, empty when there are none
    pub fn operation_path(&self) -> String {
        self.url_parts().join("/")
    }

    // Flips are a sign prefix on each axis, e.g. `-100x-200`.
    fn size_segment(&self) -> String {
        let mut size = String::new();

        if self.with_flip_horizontally {
            size.push('-');
        }
        if let Some(width) = self.width {
            size.push_str(&width.to_string());
        }

        size.push('x');

        if self.with_flip_vertically {
            size.push('-');
        }
        if let Some(height) = self.height {
            size.push_str(&height.to_string());
        }

        size
    }
}
