//! Knife model: kinds, materials, blade lengths, and the render-facing style.
//!
//! Per-kind render data (engraving anchor; the silhouette path in
//! [`crate::render`]) is dispatched on [`KnifeKind`] so the geometry for one
//! kind stays in one place. Pricing and the full configuration live in the
//! client crate; only fields that change pixels cross into this one.

#[cfg(test)]
#[path = "knife_test.rs"]
mod knife_test;

use serde::{Deserialize, Serialize};

use crate::consts::REFERENCE_LENGTH_CM;

/// The six knife silhouettes offered by the customizer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum KnifeKind {
    /// Wide curved general-purpose blade.
    #[default]
    Chef,
    /// Straight Japanese-style blade with a dropped tip.
    Santoku,
    /// Small pointed paring blade.
    Paring,
    /// Tall rectangular cleaver profile with an angled tip.
    Butcher,
    /// Long serrated bread blade.
    Bread,
    /// Long thin tapered fillet blade.
    Fillet,
}

impl KnifeKind {
    /// All kinds in customizer display order.
    pub const ALL: [Self; 6] = [
        Self::Chef,
        Self::Santoku,
        Self::Paring,
        Self::Butcher,
        Self::Bread,
        Self::Fillet,
    ];

    /// Local offset where blade-face engraving text is anchored so it sits on
    /// the blade for this silhouette.
    #[must_use]
    pub fn engraving_anchor(self) -> (f64, f64) {
        match self {
            Self::Chef => (-85.0, -8.0),
            Self::Santoku => (-85.0, -6.0),
            Self::Paring => (-65.0, 0.0),
            Self::Butcher => (-90.0, -2.0),
            Self::Bread => (-100.0, -6.0),
            Self::Fillet => (-100.0, -3.0),
        }
    }
}

/// Blade steel options.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BladeMaterial {
    /// Stainless steel.
    #[default]
    Steel,
    /// High-carbon steel.
    Carbon,
    /// Pattern-welded damascus steel.
    Damascus,
}

/// Handle material options.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HandleMaterial {
    #[default]
    Wood,
    Carbon,
    Bone,
    Steel,
}

impl HandleMaterial {
    /// Base fill color for this material.
    #[must_use]
    pub fn color(self) -> &'static str {
        match self {
            Self::Wood => "#8B4513",
            Self::Carbon => "#2C2C2C",
            Self::Bone => "#F5F5DC",
            Self::Steel => "#708090",
        }
    }
}

/// Offered blade lengths.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum BladeLength {
    #[serde(rename = "15cm")]
    Cm15,
    #[default]
    #[serde(rename = "20cm")]
    Cm20,
    #[serde(rename = "25cm")]
    Cm25,
    #[serde(rename = "30cm")]
    Cm30,
}

impl BladeLength {
    /// All lengths in ascending order.
    pub const ALL: [Self; 4] = [Self::Cm15, Self::Cm20, Self::Cm25, Self::Cm30];

    /// Length in centimeters.
    #[must_use]
    pub fn cm(self) -> f64 {
        match self {
            Self::Cm15 => 15.0,
            Self::Cm20 => 20.0,
            Self::Cm25 => 25.0,
            Self::Cm30 => 30.0,
        }
    }

    /// Display label, e.g. `"20cm"`.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Cm15 => "15cm",
            Self::Cm20 => "20cm",
            Self::Cm25 => "25cm",
            Self::Cm30 => "30cm",
        }
    }

    /// Horizontal render scale; the 20cm blade is the unit reference.
    #[must_use]
    pub fn scale_factor(self) -> f64 {
        self.cm() / REFERENCE_LENGTH_CM
    }
}

/// Where engraving text is placed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EngravingPosition {
    /// On the blade face, tilted to follow the blade.
    #[default]
    Blade,
    /// On the handle, horizontal.
    Handle,
}

/// The render-facing subset of a knife configuration.
///
/// The client crate holds the full configuration (accessories, pricing,
/// wizard step); only the fields that change pixels cross into this crate.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct KnifeStyle {
    /// Which silhouette to draw.
    pub kind: KnifeKind,
    /// Blade material; selects the blade gradient and damascus overlay.
    pub blade_material: BladeMaterial,
    /// Blade length; drives horizontal scale and engraving font size.
    pub blade_length: BladeLength,
    /// Handle material; selects handle and pommel colors and wood grain.
    pub handle_material: HandleMaterial,
    /// Engraving text; empty means no engraving is drawn.
    pub engraving_text: String,
    /// Engraving placement.
    pub engraving_position: EngravingPosition,
    /// Engraving fill color as a CSS hex color.
    pub engraving_color: String,
}

impl Default for KnifeStyle {
    fn default() -> Self {
        Self {
            kind: KnifeKind::default(),
            blade_material: BladeMaterial::default(),
            blade_length: BladeLength::default(),
            handle_material: HandleMaterial::default(),
            engraving_text: String::new(),
            engraving_position: EngravingPosition::default(),
            engraving_color: "#000000".to_owned(),
        }
    }
}

impl KnifeStyle {
    /// Engraving font size in pixels, scaled with blade length and floored.
    #[must_use]
    pub fn engraving_font_px(&self) -> f64 {
        use crate::consts::{BASE_ENGRAVING_FONT_PX, MIN_ENGRAVING_FONT_PX};
        MIN_ENGRAVING_FONT_PX.max(BASE_ENGRAVING_FONT_PX * self.blade_length.scale_factor())
    }
}
