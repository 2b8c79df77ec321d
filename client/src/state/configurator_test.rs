use super::*;
use crate::state::cart::{CartState, LineItemId};

// =============================================================
// Wizard steps
// =============================================================

#[test]
fn steps_run_in_wizard_order() {
    let titles: Vec<_> = WizardStep::ALL.iter().map(|s| s.title()).collect();
    assert_eq!(
        titles,
        vec!["Tipo de Cuchillo", "Hoja", "Mango", "Grabado", "Accesorios", "Resumen"]
    );
}

#[test]
fn index_round_trips_through_from_index() {
    for step in WizardStep::ALL {
        assert_eq!(WizardStep::from_index(step.index()), step);
    }
}

#[test]
fn from_index_clamps_out_of_range_jumps() {
    assert_eq!(WizardStep::from_index(5), WizardStep::Summary);
    assert_eq!(WizardStep::from_index(6), WizardStep::Summary);
    assert_eq!(WizardStep::from_index(usize::MAX), WizardStep::Summary);
}

#[test]
fn next_clamps_at_the_last_step() {
    let mut step = WizardStep::KnifeType;
    for _ in 0..10 {
        step = step.next();
    }
    assert_eq!(step, WizardStep::Summary);
    assert_eq!(WizardStep::Summary.next(), WizardStep::Summary);
}

#[test]
fn previous_clamps_at_the_first_step() {
    assert_eq!(WizardStep::KnifeType.previous(), WizardStep::KnifeType);
    assert_eq!(WizardStep::Blade.previous(), WizardStep::KnifeType);
}

#[test]
fn next_and_previous_are_inverse_mid_sequence() {
    assert_eq!(WizardStep::Handle.next().previous(), WizardStep::Handle);
}

// =============================================================
// Defaults
// =============================================================

#[test]
fn default_config_matches_the_wizard_seed() {
    let config = KnifeConfig::default();
    assert_eq!(config.kind, KnifeKind::Chef);
    assert_eq!(config.blade.material, BladeMaterial::Steel);
    assert_eq!(config.blade.length, BladeLength::Cm20);
    assert_eq!(config.blade.finish, "satin");
    assert_eq!(config.handle.material, HandleMaterial::Wood);
    assert_eq!(config.handle.color, "walnut");
    assert_eq!(config.handle.grip, "traditional");
    assert!(config.engraving.text.is_empty());
    assert_eq!(config.engraving.position, EngravingPosition::Blade);
    assert_eq!(config.engraving.font, "script");
    assert_eq!(config.engraving.color, "#000000");
    assert!(!config.accessories.sheath);
    assert!(!config.accessories.presentation_box);
    assert!(config.accessories.certificate);
}

#[test]
fn default_configuration_prices_at_450() {
    // chef, steel 20cm, wood handle, no engraving, certificate only.
    assert_eq!(KnifeConfig::default().price(), 450);
}

// =============================================================
// Price derivation
// =============================================================

#[test]
fn base_prices_per_kind() {
    for (kind, expected) in [
        (KnifeKind::Chef, 450),
        (KnifeKind::Santoku, 480),
        (KnifeKind::Paring, 320),
        (KnifeKind::Butcher, 550),
        (KnifeKind::Bread, 380),
        (KnifeKind::Fillet, 420),
    ] {
        let mut config = KnifeConfig::default();
        config.set_kind(kind);
        assert_eq!(config.price(), expected, "base price of {kind:?}");
    }
}

#[test]
fn fully_loaded_butcher_prices_at_1045() {
    let mut config = KnifeConfig::default();
    config.set_kind(KnifeKind::Butcher);
    config.set_blade_material(BladeMaterial::Damascus);
    config.set_handle_material(HandleMaterial::Bone);
    config.set_engraving_text("X");
    config.set_accessory(Accessory::Sheath, true);
    config.set_accessory(Accessory::Box, false);
    config.set_accessory(Accessory::Certificate, true);

    // 550 + 200 + 100 + 75 + 120
    assert_eq!(config.price(), 1045);
}

#[test]
fn blade_material_surcharges() {
    let mut config = KnifeConfig::default();
    config.set_blade_material(BladeMaterial::Carbon);
    assert_eq!(config.price(), 550);
    config.set_blade_material(BladeMaterial::Damascus);
    assert_eq!(config.price(), 650);
}

#[test]
fn handle_material_surcharges() {
    let mut config = KnifeConfig::default();
    config.set_handle_material(HandleMaterial::Carbon);
    assert_eq!(config.price(), 600);
    config.set_handle_material(HandleMaterial::Bone);
    assert_eq!(config.price(), 550);
    // Steel handles carry no surcharge.
    config.set_handle_material(HandleMaterial::Steel);
    assert_eq!(config.price(), 450);
}

#[test]
fn engraving_adds_75_only_when_text_present() {
    let mut config = KnifeConfig::default();
    config.set_engraving_text("Chef Rodriguez");
    assert_eq!(config.price(), 525);
    config.set_engraving_text("");
    assert_eq!(config.price(), 450);
}

#[test]
fn certificate_never_affects_price() {
    let mut config = KnifeConfig::default();
    let with_certificate = config.price();
    config.set_accessory(Accessory::Certificate, false);
    assert_eq!(config.price(), with_certificate);
    config.set_accessory(Accessory::Certificate, true);
    assert_eq!(config.price(), with_certificate);
}

#[test]
fn cosmetic_fields_never_affect_price() {
    let mut config = KnifeConfig::default();
    let baseline = config.price();
    config.set_blade_finish("mirror");
    config.set_handle_color("ebony");
    config.set_handle_grip("ergonomic");
    config.set_engraving_font("block");
    config.set_engraving_color("#ffd700");
    assert_eq!(config.price(), baseline);
}

#[test]
fn price_is_idempotent() {
    let mut config = KnifeConfig::default();
    config.set_accessory(Accessory::Sheath, true);
    let first = config.price();
    assert_eq!(config.price(), first);
    assert_eq!(config.price(), first);
}

// =============================================================
// Engraving boundary
// =============================================================

#[test]
fn engraving_text_is_truncated_to_20_chars() {
    let mut config = KnifeConfig::default();
    config.set_engraving_text("una frase demasiado larga para caber");
    assert_eq!(config.engraving.text.chars().count(), 20);
    assert_eq!(config.engraving.text, "una frase demasiado ");
}

#[test]
fn engraving_truncation_respects_char_boundaries() {
    let mut config = KnifeConfig::default();
    config.set_engraving_text("ñañañañañañañañañañañaña");
    assert_eq!(config.engraving.text.chars().count(), 20);
}

#[test]
fn exact_limit_text_is_kept_verbatim() {
    let text = "12345678901234567890";
    let mut config = KnifeConfig::default();
    config.set_engraving_text(text);
    assert_eq!(config.engraving.text, text);
}

// =============================================================
// Setters merge without touching siblings
// =============================================================

#[test]
fn blade_setters_leave_sibling_fields_alone() {
    let mut config = KnifeConfig::default();
    config.set_blade_material(BladeMaterial::Damascus);
    assert_eq!(config.blade.length, BladeLength::Cm20);
    assert_eq!(config.blade.finish, "satin");

    config.set_blade_length(BladeLength::Cm30);
    assert_eq!(config.blade.material, BladeMaterial::Damascus);
}

#[test]
fn engraving_setters_leave_sibling_sections_alone() {
    let mut config = KnifeConfig::default();
    config.set_engraving_text("Mi cocina");
    assert_eq!(config.handle, HandleConfig::default());
    assert_eq!(config.accessories, AccessoriesConfig::default());
}

// =============================================================
// Summary derivation
// =============================================================

#[test]
fn minimal_summary_lists_type_blade_handle_and_certificate() {
    let summary = KnifeConfig::default().summary();
    assert_eq!(
        summary,
        "Cuchillo chef | Hoja: steel 20cm | Mango: wood | Incluye: Certificado"
    );
}

#[test]
fn full_summary_includes_engraving_and_accessories() {
    let mut config = KnifeConfig::default();
    config.set_kind(KnifeKind::Santoku);
    config.set_blade_material(BladeMaterial::Damascus);
    config.set_blade_length(BladeLength::Cm25);
    config.set_handle_material(HandleMaterial::Bone);
    config.set_engraving_text("Chef Rodriguez");
    config.set_accessory(Accessory::Sheath, true);
    config.set_accessory(Accessory::Box, true);

    assert_eq!(
        config.summary(),
        "Cuchillo santoku | Hoja: damascus 25cm | Mango: bone | \
         Grabado: \"Chef Rodriguez\" | \
         Incluye: Funda de cuero, Caja de presentación, Certificado"
    );
}

#[test]
fn summary_omits_empty_sections() {
    let mut config = KnifeConfig::default();
    config.set_accessory(Accessory::Certificate, false);
    let summary = config.summary();
    assert!(!summary.contains("Grabado"));
    assert!(!summary.contains("Incluye"));
}

// =============================================================
// Commit to cart
// =============================================================

#[test]
fn line_item_carries_config_derived_fields() {
    let mut config = KnifeConfig::default();
    config.set_kind(KnifeKind::Butcher);
    config.set_blade_material(BladeMaterial::Damascus);

    let item = config.line_item(1_700_000_000_000);
    assert_eq!(item.id, LineItemId::Custom("custom-knife-1700000000000".to_owned()));
    assert_eq!(item.title, "Cuchillo Butcher Personalizado");
    assert!((item.price - 750.0).abs() < f64::EPSILON);
    assert_eq!(item.image, CUSTOM_KNIFE_IMAGE);
    assert!(item.is_custom);
    assert_eq!(item.custom_summary.as_deref(), Some(config.summary().as_str()));
}

#[test]
fn committing_does_not_reset_the_configuration() {
    let mut config = KnifeConfig::default();
    config.set_engraving_text("Mi cocina");
    let before = config.clone();

    let _item = config.line_item(1);
    assert_eq!(config, before);
}

#[test]
fn committed_line_merges_into_the_cart() {
    let config = KnifeConfig::default();
    let mut cart = CartState::default();
    cart.add_item(config.line_item(42));

    assert_eq!(cart.total_items(), 1);
    assert!((cart.total_price() - 450.0).abs() < f64::EPSILON);

    // The same synthesized id merges rather than duplicating.
    cart.add_item(config.line_item(42));
    assert_eq!(cart.items.len(), 1);
    assert_eq!(cart.total_items(), 2);
}

// =============================================================
// ConfiguratorState
// =============================================================

#[test]
fn configurator_starts_on_the_first_step() {
    let state = ConfiguratorState::default();
    assert_eq!(state.step, WizardStep::KnifeType);
    assert!(!state.adding);
    assert_eq!(state.config, KnifeConfig::default());
}

// =============================================================
// Config serde
// =============================================================

#[test]
fn config_serializes_with_original_field_names() {
    let json = serde_json::to_value(KnifeConfig::default()).unwrap();
    assert_eq!(json["type"], "chef");
    assert_eq!(json["blade"]["length"], "20cm");
    assert_eq!(json["accessories"]["box"], false);
    assert_eq!(json["accessories"]["certificate"], true);
}
