//! The read-only preset catalog.
//!
//! Presets approximate the look of common phone-camera filters. Each entry
//! carries its base parameters (what the preset is "about", shown to the
//! UI) and a recipe (how it is rendered as intensity varies). The recipe
//! constants are hand-tuned per preset and intentionally not derived from
//! the base parameters.
//!
//! Slice order is the user-facing display order.

use serde::Serialize;
use std::f32::consts::PI;

use crate::recipe::Step;
use crate::FilterError;

/// Name of the no-op baseline preset.
pub const ORIGINAL: &str = "original";

/// Base parameters of a preset.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PresetSettings {
    /// Multiplicative, identity 1.0.
    pub contrast: f32,
    /// Multiplicative, identity 1.0.
    pub saturation: f32,
    /// Multiplicative, identity 1.0.
    pub brightness: f32,
    /// Radians, identity 0.0.
    pub hue_rotation: f32,
    /// -1.0 (cool) to 1.0 (warm), identity 0.0.
    pub warmth: f32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub highlights: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub shadows: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub clarity: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tint: Option<f32>,
}

impl PresetSettings {
    /// All-identity parameters.
    pub const IDENTITY: PresetSettings = PresetSettings::base(1.0, 1.0, 1.0, 0.0, 0.0);

    const fn base(
        contrast: f32,
        saturation: f32,
        brightness: f32,
        hue_rotation: f32,
        warmth: f32,
    ) -> Self {
        Self {
            contrast,
            saturation,
            brightness,
            hue_rotation,
            warmth,
            highlights: None,
            shadows: None,
            clarity: None,
            tint: None,
        }
    }

    /// Check if every parameter is at its identity value.
    pub fn is_identity(&self) -> bool {
        *self == Self::IDENTITY
    }
}

/// A named filter preset.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct FilterPreset {
    /// Stable key.
    pub name: &'static str,
    /// Display label.
    pub label: &'static str,
    pub settings: PresetSettings,
    /// Ordered steps emitted by the compiler.
    #[serde(skip)]
    pub recipe: &'static [Step],
}

impl FilterPreset {
    /// Check if this is the no-op baseline.
    pub fn is_original(&self) -> bool {
        self.name == ORIGINAL
    }
}

const VIVID: &[Step] = &[
    Step::saturate(1.3),
    Step::contrast(1.25),
    Step::brightness(1.05),
];

const VIVID_WARM: &[Step] = &[
    Step::saturate(1.3),
    Step::contrast(1.25),
    Step::hue_rotate(0.03),
    Step::sepia(0.2),
];

const VIVID_COOL: &[Step] = &[
    Step::saturate(1.3),
    Step::contrast(1.25),
    Step::hue_rotate(-0.03),
];

const DRAMATIC: &[Step] = &[
    Step::contrast(1.35),
    Step::saturate(0.8),
    Step::brightness(0.9),
];

const DRAMATIC_WARM: &[Step] = &[
    Step::contrast(1.4),
    Step::brightness(0.93),
    Step::saturate(0.85),
    Step::sepia(0.12),
];

// 15 degrees toward cyan
const DRAMATIC_COOL: &[Step] = &[
    Step::contrast(1.35),
    Step::saturate(0.75),
    Step::brightness(0.9),
    Step::hue_rotate(15.0 * PI / 180.0),
];

const MONO: &[Step] = &[Step::grayscale(1.0)];

const SILVERTONE: &[Step] = &[
    Step::grayscale(1.0).starting_at(0.1),
    Step::contrast(1.1),
    Step::brightness(1.05),
];

const NOIR: &[Step] = &[
    Step::grayscale(1.0),
    Step::contrast(1.25),
    Step::brightness(0.95),
];

static PRESETS: [FilterPreset; 10] = [
    FilterPreset {
        name: ORIGINAL,
        label: "Original",
        settings: PresetSettings::IDENTITY,
        recipe: &[],
    },
    FilterPreset {
        name: "vivid",
        label: "Vivid",
        settings: PresetSettings::base(1.25, 1.3, 1.05, 0.0, 0.0),
        recipe: VIVID,
    },
    FilterPreset {
        name: "vivid-warm",
        label: "Vivid Warm",
        settings: PresetSettings::base(1.25, 1.3, 1.0, 0.03, 0.2),
        recipe: VIVID_WARM,
    },
    FilterPreset {
        name: "vivid-cool",
        label: "Vivid Cool",
        settings: PresetSettings::base(1.25, 1.3, 1.0, -0.03, -0.2),
        recipe: VIVID_COOL,
    },
    FilterPreset {
        name: "dramatic",
        label: "Dramatic",
        settings: PresetSettings::base(1.35, 0.8, 0.9, 0.0, 0.0),
        recipe: DRAMATIC,
    },
    FilterPreset {
        name: "dramaticWarm",
        label: "Dramatic Warm",
        settings: PresetSettings {
            highlights: Some(0.88),
            shadows: Some(1.1),
            clarity: Some(1.07),
            tint: Some(-0.02),
            ..PresetSettings::base(1.4, 0.85, 0.93, 5.0, 0.25)
        },
        recipe: DRAMATIC_WARM,
    },
    FilterPreset {
        name: "dramatic-cool",
        label: "Dramatic Cool",
        settings: PresetSettings::base(1.35, 0.8, 0.9, 0.0, -0.2),
        recipe: DRAMATIC_COOL,
    },
    FilterPreset {
        name: "mono",
        label: "Mono",
        settings: PresetSettings::base(1.0, 0.0, 1.0, 0.0, 0.0),
        recipe: MONO,
    },
    FilterPreset {
        name: "silvertone",
        label: "Silvertone",
        settings: PresetSettings::base(1.1, 0.1, 1.05, 0.0, 0.0),
        recipe: SILVERTONE,
    },
    FilterPreset {
        name: "noir",
        label: "Noir",
        settings: PresetSettings::base(1.25, 0.0, 0.95, 0.0, 0.0),
        recipe: NOIR,
    },
];

/// Find a preset by its stable name.
pub fn lookup(name: &str) -> Result<&'static FilterPreset, FilterError> {
    PRESETS
        .iter()
        .find(|p| p.name == name)
        .ok_or_else(|| FilterError::NotFound(name.to_string()))
}

/// All presets in display order.
pub fn list_all() -> &'static [FilterPreset] {
    &PRESETS
}

/// The identity baseline preset.
pub fn original() -> &'static FilterPreset {
    &PRESETS[0]
}
