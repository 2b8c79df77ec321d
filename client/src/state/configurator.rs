//! Knife configurator state: the wizard step machine, the configuration
//! itself, and its derived price and summary.
//!
//! DESIGN
//! ======
//! The configuration is a plain value mutated through typed setters; each
//! setter merges one field into one section without touching siblings. Price
//! and summary are pure functions of the value, recomputed on every read —
//! there is nothing to invalidate. Committing to the cart synthesizes a line
//! item and leaves the configuration untouched so the user can keep
//! customizing (or retry after a failure).
//!
//! The render-facing subset of these types exists independently in the
//! `preview` crate; the `PreviewHost` bridge converts between the two.

#[cfg(test)]
#[path = "configurator_test.rs"]
mod configurator_test;

use serde::{Deserialize, Serialize};

use crate::state::cart::{LineItemId, NewLineItem};

/// Engraving text length cap enforced at the input boundary.
pub const MAX_ENGRAVING_CHARS: usize = 20;

/// Placeholder image attached to customized knives in the cart.
pub const CUSTOM_KNIFE_IMAGE: &str = "https://img.freepik.com/vector-gratis/ilustracion-icono-vector-dibujos-animados-cuchillo-flotante-concepto-icono-objeto-comida-aislado-vector-premium_138676-5784.jpg?semt=ais_hybrid&w=740";

// =============================================================
// Wizard steps
// =============================================================

/// The six customizer steps, in order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum WizardStep {
    #[default]
    KnifeType,
    Blade,
    Handle,
    Engraving,
    Accessories,
    Summary,
}

impl WizardStep {
    /// All steps in wizard order.
    pub const ALL: [Self; 6] = [
        Self::KnifeType,
        Self::Blade,
        Self::Handle,
        Self::Engraving,
        Self::Accessories,
        Self::Summary,
    ];

    /// Position of this step in the sequence.
    #[must_use]
    pub fn index(self) -> usize {
        match self {
            Self::KnifeType => 0,
            Self::Blade => 1,
            Self::Handle => 2,
            Self::Engraving => 3,
            Self::Accessories => 4,
            Self::Summary => 5,
        }
    }

    /// Jump to an arbitrary step; out-of-range indices clamp to the last
    /// step. Jumps are unconstrained — no validation gates forward progress.
    #[must_use]
    pub fn from_index(index: usize) -> Self {
        let clamped = index.min(Self::ALL.len() - 1);
        Self::ALL[clamped]
    }

    /// The following step; a no-op at the end (clamped, not cyclic).
    #[must_use]
    pub fn next(self) -> Self {
        Self::from_index(self.index() + 1)
    }

    /// The preceding step; a no-op at the start.
    #[must_use]
    pub fn previous(self) -> Self {
        Self::from_index(self.index().saturating_sub(1))
    }

    /// Step pill title.
    #[must_use]
    pub fn title(self) -> &'static str {
        match self {
            Self::KnifeType => "Tipo de Cuchillo",
            Self::Blade => "Hoja",
            Self::Handle => "Mango",
            Self::Engraving => "Grabado",
            Self::Accessories => "Accesorios",
            Self::Summary => "Resumen",
        }
    }

    /// Step pill icon.
    #[must_use]
    pub fn icon(self) -> &'static str {
        match self {
            Self::KnifeType => "🔪",
            Self::Blade => "⚔️",
            Self::Handle => "🎨",
            Self::Engraving => "✒️",
            Self::Accessories => "📦",
            Self::Summary => "✅",
        }
    }
}

// =============================================================
// Configuration enums
// =============================================================

/// The six knife types on offer. Each carries its base price.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum KnifeKind {
    #[default]
    Chef,
    Santoku,
    Paring,
    Butcher,
    Bread,
    Fillet,
}

impl KnifeKind {
    /// All kinds in display order.
    pub const ALL: [Self; 6] = [
        Self::Chef,
        Self::Santoku,
        Self::Paring,
        Self::Butcher,
        Self::Bread,
        Self::Fillet,
    ];

    /// Base price before customization surcharges.
    #[must_use]
    pub fn base_price(self) -> u32 {
        match self {
            Self::Chef => 450,
            Self::Santoku => 480,
            Self::Paring => 320,
            Self::Butcher => 550,
            Self::Bread => 380,
            Self::Fillet => 420,
        }
    }

    /// Lowercase name used in summaries.
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Self::Chef => "chef",
            Self::Santoku => "santoku",
            Self::Paring => "paring",
            Self::Butcher => "butcher",
            Self::Bread => "bread",
            Self::Fillet => "fillet",
        }
    }

    /// Capitalized name used in cart line titles.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Chef => "Chef",
            Self::Santoku => "Santoku",
            Self::Paring => "Paring",
            Self::Butcher => "Butcher",
            Self::Bread => "Bread",
            Self::Fillet => "Fillet",
        }
    }

    /// Card description shown in the type step.
    #[must_use]
    pub fn description(self) -> &'static str {
        match self {
            Self::Chef => "Versátil para todo uso",
            Self::Santoku => "Estilo japonés",
            Self::Paring => "Para tareas precisas",
            Self::Butcher => "Para carnes",
            Self::Bread => "Hoja serrada",
            Self::Fillet => "Pescados y aves",
        }
    }
}

/// Blade steel options, each with its surcharge.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BladeMaterial {
    #[default]
    Steel,
    Carbon,
    Damascus,
}

impl BladeMaterial {
    pub const ALL: [Self; 3] = [Self::Steel, Self::Carbon, Self::Damascus];

    /// Price added on top of the base price.
    #[must_use]
    pub fn surcharge(self) -> u32 {
        match self {
            Self::Steel => 0,
            Self::Carbon => 100,
            Self::Damascus => 200,
        }
    }

    /// Lowercase name used in summaries.
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Self::Steel => "steel",
            Self::Carbon => "carbon",
            Self::Damascus => "damascus",
        }
    }

    /// Option card title.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Steel => "Acero Inoxidable",
            Self::Carbon => "Acero al Carbono",
            Self::Damascus => "Damasco",
        }
    }
}

/// Handle material options, each with its surcharge.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HandleMaterial {
    #[default]
    Wood,
    Carbon,
    Bone,
    Steel,
}

impl HandleMaterial {
    pub const ALL: [Self; 4] = [Self::Wood, Self::Carbon, Self::Bone, Self::Steel];

    /// Price added on top of the base price.
    #[must_use]
    pub fn surcharge(self) -> u32 {
        match self {
            Self::Wood | Self::Steel => 0,
            Self::Carbon => 150,
            Self::Bone => 100,
        }
    }

    /// Lowercase name used in summaries.
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Self::Wood => "wood",
            Self::Carbon => "carbon",
            Self::Bone => "bone",
            Self::Steel => "steel",
        }
    }

    /// Option card title.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Wood => "Madera",
            Self::Carbon => "Fibra de Carbono",
            Self::Bone => "Hueso",
            Self::Steel => "Acero",
        }
    }

    /// Swatch color shown on the option card.
    #[must_use]
    pub fn swatch(self) -> &'static str {
        match self {
            Self::Wood => "#8B4513",
            Self::Carbon => "#2C2C2C",
            Self::Bone => "#F5F5DC",
            Self::Steel => "#708090",
        }
    }
}

/// Offered blade lengths.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default, Serialize, Deserialize)]
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
    pub const ALL: [Self; 4] = [Self::Cm15, Self::Cm20, Self::Cm25, Self::Cm30];

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
}

/// Where engraving text is placed.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EngravingPosition {
    #[default]
    Blade,
    Handle,
}

impl EngravingPosition {
    /// Summary-page phrasing ("en la hoja" / "en el mango").
    #[must_use]
    pub fn phrase(self) -> &'static str {
        match self {
            Self::Blade => "la hoja",
            Self::Handle => "el mango",
        }
    }
}

/// The optional extras. Toggled individually via [`KnifeConfig::set_accessory`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Accessory {
    Sheath,
    Box,
    Certificate,
}

// =============================================================
// Configuration sections
// =============================================================

/// Blade section of the configuration.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct BladeConfig {
    pub material: BladeMaterial,
    pub length: BladeLength,
    /// Surface finish; cosmetic, never affects price.
    pub finish: String,
}

impl Default for BladeConfig {
    fn default() -> Self {
        Self {
            material: BladeMaterial::default(),
            length: BladeLength::default(),
            finish: "satin".to_owned(),
        }
    }
}

/// Handle section of the configuration.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct HandleConfig {
    pub material: HandleMaterial,
    /// Tint name; cosmetic, never affects price.
    pub color: String,
    /// Grip profile; cosmetic, never affects price.
    pub grip: String,
}

impl Default for HandleConfig {
    fn default() -> Self {
        Self {
            material: HandleMaterial::default(),
            color: "walnut".to_owned(),
            grip: "traditional".to_owned(),
        }
    }
}

/// Engraving section of the configuration.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct EngravingConfig {
    /// At most [`MAX_ENGRAVING_CHARS`] characters; empty means no engraving.
    pub text: String,
    pub position: EngravingPosition,
    pub font: String,
    /// Hex color of the engraved text.
    pub color: String,
}

impl Default for EngravingConfig {
    fn default() -> Self {
        Self {
            text: String::new(),
            position: EngravingPosition::default(),
            font: "script".to_owned(),
            color: "#000000".to_owned(),
        }
    }
}

/// Accessories section of the configuration.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccessoriesConfig {
    pub sheath: bool,
    #[serde(rename = "box")]
    pub presentation_box: bool,
    pub certificate: bool,
}

impl Default for AccessoriesConfig {
    fn default() -> Self {
        Self { sheath: false, presentation_box: false, certificate: true }
    }
}

impl AccessoriesConfig {
    /// Display names of the included accessories, in fixed order.
    #[must_use]
    pub fn included_names(&self) -> Vec<&'static str> {
        let mut names = Vec::new();
        if self.sheath {
            names.push("Funda de cuero");
        }
        if self.presentation_box {
            names.push("Caja de presentación");
        }
        if self.certificate {
            names.push("Certificado");
        }
        names
    }
}

// =============================================================
// The configuration
// =============================================================

/// The full set of user-chosen customization parameters for a custom knife.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct KnifeConfig {
    #[serde(rename = "type")]
    pub kind: KnifeKind,
    pub blade: BladeConfig,
    pub handle: HandleConfig,
    pub engraving: EngravingConfig,
    pub accessories: AccessoriesConfig,
}

impl KnifeConfig {
    // --- Field setters: each merges into one section, siblings untouched ---

    pub fn set_kind(&mut self, kind: KnifeKind) {
        self.kind = kind;
    }

    pub fn set_blade_material(&mut self, material: BladeMaterial) {
        self.blade.material = material;
    }

    pub fn set_blade_length(&mut self, length: BladeLength) {
        self.blade.length = length;
    }

    pub fn set_blade_finish(&mut self, finish: &str) {
        self.blade.finish = finish.to_owned();
    }

    pub fn set_handle_material(&mut self, material: HandleMaterial) {
        self.handle.material = material;
    }

    pub fn set_handle_color(&mut self, color: &str) {
        self.handle.color = color.to_owned();
    }

    pub fn set_handle_grip(&mut self, grip: &str) {
        self.handle.grip = grip.to_owned();
    }

    /// Set the engraving text, truncated to [`MAX_ENGRAVING_CHARS`] at this
    /// boundary so over-length input is never stored.
    pub fn set_engraving_text(&mut self, text: &str) {
        self.engraving.text = text.chars().take(MAX_ENGRAVING_CHARS).collect();
    }

    pub fn set_engraving_position(&mut self, position: EngravingPosition) {
        self.engraving.position = position;
    }

    pub fn set_engraving_font(&mut self, font: &str) {
        self.engraving.font = font.to_owned();
    }

    pub fn set_engraving_color(&mut self, color: &str) {
        self.engraving.color = color.to_owned();
    }

    pub fn set_accessory(&mut self, accessory: Accessory, included: bool) {
        match accessory {
            Accessory::Sheath => self.accessories.sheath = included,
            Accessory::Box => self.accessories.presentation_box = included,
            Accessory::Certificate => self.accessories.certificate = included,
        }
    }

    // --- Derived values ---

    /// Current price: pure, deterministic, and side-effect-free.
    ///
    /// The certificate accessory, blade finish, and handle color/grip never
    /// affect the price.
    #[must_use]
    pub fn price(&self) -> u32 {
        let mut price = self.kind.base_price();
        price += self.blade.material.surcharge();
        price += self.handle.material.surcharge();
        if !self.engraving.text.is_empty() {
            price += 75;
        }
        if self.accessories.sheath {
            price += 120;
        }
        if self.accessories.presentation_box {
            price += 80;
        }
        price
    }

    /// Human-readable customization summary, `" | "`-joined.
    #[must_use]
    pub fn summary(&self) -> String {
        let mut parts = vec![
            format!("Cuchillo {}", self.kind.name()),
            format!("Hoja: {} {}", self.blade.material.name(), self.blade.length.label()),
            format!("Mango: {}", self.handle.material.name()),
        ];
        if !self.engraving.text.is_empty() {
            parts.push(format!("Grabado: \"{}\"", self.engraving.text));
        }
        let included = self.accessories.included_names();
        if !included.is_empty() {
            parts.push(format!("Incluye: {}", included.join(", ")));
        }
        parts.join(" | ")
    }

    /// Synthesize the cart line for this configuration. The caller supplies
    /// the timestamp so the configuration stays a pure value; committing does
    /// not reset it.
    #[must_use]
    pub fn line_item(&self, now_ms: i64) -> NewLineItem {
        NewLineItem {
            id: LineItemId::Custom(format!("custom-knife-{now_ms}")),
            title: format!("Cuchillo {} Personalizado", self.kind.label()),
            price: f64::from(self.price()),
            image: CUSTOM_KNIFE_IMAGE.to_owned(),
            is_custom: true,
            custom_summary: Some(self.summary()),
        }
    }
}

/// Configurator state provided as a context signal to the customizer page.
#[derive(Clone, Debug, Default)]
pub struct ConfiguratorState {
    pub step: WizardStep,
    pub config: KnifeConfig,
    /// True while an add-to-cart commit is in flight.
    pub adding: bool,
}
