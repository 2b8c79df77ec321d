use super::*;

// =============================================================
// KnifeKind
// =============================================================

#[test]
fn default_kind_is_chef() {
    assert_eq!(KnifeKind::default(), KnifeKind::Chef);
}

#[test]
fn all_lists_six_distinct_kinds() {
    let mut seen = KnifeKind::ALL.to_vec();
    seen.dedup();
    assert_eq!(seen.len(), 6);
}

// =============================================================
// KnifeKind: engraving anchors
// =============================================================

#[test]
fn engraving_anchor_per_kind() {
    assert_eq!(KnifeKind::Chef.engraving_anchor(), (-85.0, -8.0));
    assert_eq!(KnifeKind::Santoku.engraving_anchor(), (-85.0, -6.0));
    assert_eq!(KnifeKind::Paring.engraving_anchor(), (-65.0, 0.0));
    assert_eq!(KnifeKind::Butcher.engraving_anchor(), (-90.0, -2.0));
    assert_eq!(KnifeKind::Bread.engraving_anchor(), (-100.0, -6.0));
    assert_eq!(KnifeKind::Fillet.engraving_anchor(), (-100.0, -3.0));
}

// =============================================================
// KnifeKind: serde
// =============================================================

#[test]
fn kind_serializes_lowercase() {
    assert_eq!(serde_json::to_string(&KnifeKind::Chef).unwrap(), "\"chef\"");
    assert_eq!(serde_json::to_string(&KnifeKind::Butcher).unwrap(), "\"butcher\"");
}

#[test]
fn kind_round_trips_serde() {
    for kind in KnifeKind::ALL {
        let json = serde_json::to_string(&kind).unwrap();
        let back: KnifeKind = serde_json::from_str(&json).unwrap();
        assert_eq!(back, kind);
    }
}

// =============================================================
// HandleMaterial colors
// =============================================================

#[test]
fn handle_material_colors() {
    assert_eq!(HandleMaterial::Wood.color(), "#8B4513");
    assert_eq!(HandleMaterial::Carbon.color(), "#2C2C2C");
    assert_eq!(HandleMaterial::Bone.color(), "#F5F5DC");
    assert_eq!(HandleMaterial::Steel.color(), "#708090");
}

// =============================================================
// BladeLength
// =============================================================

#[test]
fn blade_length_default_is_20cm() {
    assert_eq!(BladeLength::default(), BladeLength::Cm20);
}

#[test]
fn reference_length_renders_at_unit_scale() {
    assert!((BladeLength::Cm20.scale_factor() - 1.0).abs() < f64::EPSILON);
}

#[test]
fn scale_factor_is_proportional() {
    assert!((BladeLength::Cm15.scale_factor() - 0.75).abs() < f64::EPSILON);
    assert!((BladeLength::Cm25.scale_factor() - 1.25).abs() < f64::EPSILON);
    assert!((BladeLength::Cm30.scale_factor() - 1.5).abs() < f64::EPSILON);
}

#[test]
fn blade_length_labels_round_trip_serde() {
    for length in BladeLength::ALL {
        let json = serde_json::to_string(&length).unwrap();
        assert_eq!(json, format!("\"{}\"", length.label()));
        let back: BladeLength = serde_json::from_str(&json).unwrap();
        assert_eq!(back, length);
    }
}

// =============================================================
// KnifeStyle
// =============================================================

#[test]
fn default_style_is_plain_chef() {
    let style = KnifeStyle::default();
    assert_eq!(style.kind, KnifeKind::Chef);
    assert_eq!(style.blade_material, BladeMaterial::Steel);
    assert_eq!(style.blade_length, BladeLength::Cm20);
    assert_eq!(style.handle_material, HandleMaterial::Wood);
    assert!(style.engraving_text.is_empty());
    assert_eq!(style.engraving_position, EngravingPosition::Blade);
    assert_eq!(style.engraving_color, "#000000");
}

#[test]
fn engraving_font_scales_with_length() {
    let mut style = KnifeStyle::default();
    assert!((style.engraving_font_px() - 14.0).abs() < f64::EPSILON);

    style.blade_length = BladeLength::Cm30;
    assert!((style.engraving_font_px() - 21.0).abs() < f64::EPSILON);
}

#[test]
fn engraving_font_is_floored_at_10px() {
    let mut style = KnifeStyle::default();
    style.blade_length = BladeLength::Cm15;
    // 14 * 0.75 = 10.5, still above the floor.
    assert!((style.engraving_font_px() - 10.5).abs() < f64::EPSILON);
    assert!(style.engraving_font_px() >= 10.0);
}
