//! Per-menu-slot styling, generated from the declared slot list.
//!
//! The original UI repeats an identical block of controls for every named
//! menu slot; here one parameterized install produces the section, settings,
//! fragments and preview bindings for each slot, keyed by the slot
//! identifier. Slot `main` yields keys like `menu_main_text_color` scoped to
//! the `.menu-main` class family.

use veneer_emit::{EmitRule, FragmentGroup};
use veneer_settings::{ControlHint, Sanitizer, Section, SettingDef, ValueKind};

use crate::theme::ThemeBuilder;

use super::choices::{sanitizers, ALIGN_CHOICES, FONT_CHOICES, YES_NO_CHOICES};

pub(super) fn install(mut builder: ThemeBuilder, slots: &[String]) -> ThemeBuilder {
    builder = builder
        .sanitizer(sanitizers::ALIGN, Sanitizer::choice(&ALIGN_CHOICES))
        .sanitizer(sanitizers::YES_NO, Sanitizer::choice(&YES_NO_CHOICES))
        .sanitizer(sanitizers::FONT, Sanitizer::choice(&FONT_CHOICES));
    for slot in slots {
        builder = install_slot(builder, slot);
    }
    builder
}

fn install_slot(builder: ThemeBuilder, slot: &str) -> ThemeBuilder {
    let section = format!("menu_{}_styles", slot);
    let group = || FragmentGroup::Menu(slot.to_string());
    let key = |suffix: &str| format!("menu_{}_{}", slot, suffix);

    builder
        .section(Section::new(&section, format!("Menu {} Styles", slot), 100))
        .setting(SettingDef::new(
            key("text_color"),
            ValueKind::Color,
            "",
            &section,
        ))
        .rule(EmitRule::when_set(
            key("text_color"),
            group(),
            format!(".menu-{} .navbar-menu-link {{\n\tcolor: {{{{ value }}}}!important;\n}}", slot),
        ))
        .setting(SettingDef::new(
            format!("submenu_{}_text_color", slot),
            ValueKind::Color,
            "",
            &section,
        ))
        .rule(EmitRule::when_set(
            format!("submenu_{}_text_color", slot),
            group(),
            format!(
                "@media screen and (min-width: 992px) {{\n\t.navbar-menu .menu-{} .sub-menu li a {{\n\t\tcolor: {{{{ value }}}}!important;\n\t}}\n}}",
                slot
            ),
        ))
        .setting(SettingDef::new(
            key("text_color_hover"),
            ValueKind::Color,
            "",
            &section,
        ))
        .rule(EmitRule::when_set(
            key("text_color_hover"),
            group(),
            format!(
                ".navbar-menu .menu-{} li:hover > a {{\n\tcolor: {{{{ value }}}}!important;\n}}",
                slot
            ),
        ))
        .setting(SettingDef::new(
            key("text_background_hover"),
            ValueKind::Color,
            "",
            &section,
        ))
        .rule(EmitRule::when_set(
            key("text_background_hover"),
            group(),
            format!(
                ".navbar-menu .menu-{} li:hover > a {{\n\tbackground-color: {{{{ value }}}}!important;\n}}",
                slot
            ),
        ))
        .setting(
            SettingDef::new(key("text_background"), ValueKind::Color, "", &section)
                .control(ControlHint::AlphaColorPicker),
        )
        .rule(EmitRule::when_set(
            key("text_background"),
            group(),
            format!(
                "@media screen and (min-width: 993px) {{\n\t.navbar-menu .menu-{} > li > a {{\n\t\tbackground-color: {{{{ value }}}}!important;\n\t}}\n}}",
                slot
            ),
        ))
        .setting(
            SettingDef::new(
                format!("submenu_{}_text_background", slot),
                ValueKind::Color,
                "",
                &section,
            )
            .control(ControlHint::AlphaColorPicker),
        )
        .rule(EmitRule::when_set(
            format!("submenu_{}_text_background", slot),
            group(),
            format!(
                "@media screen and (min-width: 993px) {{\n\t.navbar-menu .menu-{} .sub-menu li {{\n\t\tbackground-color: {{{{ value }}}}!important;\n\t}}\n}}",
                slot
            ),
        ))
        .setting(
            SettingDef::new(key("navbar_background"), ValueKind::Color, "", &section)
                .control(ControlHint::AlphaColorPicker),
        )
        .rule(EmitRule::when_set(
            key("navbar_background"),
            group(),
            format!(
                ".navbar .menu-{slot}-container, .navbar-center .menu-{slot}-container {{\n\tbackground-color: {{{{ value }}}}!important;\n}}",
                slot = slot
            ),
        ))
        .setting(
            SettingDef::new(key("mobile_background"), ValueKind::Color, "", &section)
                .control(ControlHint::AlphaColorPicker),
        )
        .rule(EmitRule::when_set(
            key("mobile_background"),
            group(),
            format!(
                "@media screen and (max-width: 993px) {{\n\t.menu-{}-container .navbar-menu {{\n\t\tbackground-color: {{{{ value }}}}!important;\n\t}}\n}}",
                slot
            ),
        ))
        .setting(SettingDef::new(
            format!("mobile_icon_color_{}", slot),
            ValueKind::Color,
            "",
            &section,
        ))
        .rule(EmitRule::when_set(
            format!("mobile_icon_color_{}", slot),
            group(),
            format!(
                ".menu-{}-container .navbar-burger-line {{\n\tbackground: {{{{ value }}}}!important;\n}}",
                slot
            ),
        ))
        .setting(SettingDef::new(
            format!("mobile_separator_color_{}", slot),
            ValueKind::Color,
            "",
            &section,
        ))
        .rule(EmitRule::when_set(
            format!("mobile_separator_color_{}", slot),
            group(),
            format!(
                "@media screen and (max-width: 993px) {{\n\t.menu-{}-items .navbar-menu li a {{\n\t\tborder-bottom: 1px solid {{{{ value }}}}!important;\n\t}}\n}}",
                slot
            ),
        ))
        .setting(
            SettingDef::new(key("letter_spacing"), ValueKind::Dimension, "0", &section).control(
                ControlHint::NumberInput {
                    min: 0.0,
                    max: 10_000.0,
                    step: 0.1,
                },
            ),
        )
        .rule(EmitRule::when_changed(
            key("letter_spacing"),
            group(),
            format!(
                ".menu-{} .navbar-menu-link {{\n\tletter-spacing: {{{{ value }}}}px!important;\n}}",
                slot
            ),
        ))
        .setting(SettingDef::new(
            key("item_padding"),
            ValueKind::Dimension,
            "15",
            &section,
        ))
        .rule(EmitRule::when_changed(
            key("item_padding"),
            group(),
            format!(
                ".menu-{} .navbar-menu-link {{\n\tpadding-left: {{{{ value }}}}px!important;\n\tpadding-right: {{{{ value }}}}px!important;\n}}",
                slot
            ),
        ))
        .setting(SettingDef::new(
            key("top_margin"),
            ValueKind::Dimension,
            "10",
            &section,
        ))
        .rule(EmitRule::when_changed(
            key("top_margin"),
            group(),
            format!(".menu-{} .navbar {{\n\tmargin-top: {{{{ value }}}}px!important;\n}}", slot),
        ))
        .setting(SettingDef::new(
            key("font_size"),
            ValueKind::Dimension,
            "18",
            &section,
        ))
        .rule(EmitRule::when_changed(
            key("font_size"),
            group(),
            format!(
                ".menu-{} .navbar-menu-link {{\n\tfont-size: {{{{ value }}}}px!important;\n}}",
                slot
            ),
        ))
        .setting(SettingDef::new(
            key("text_shadow"),
            ValueKind::Text,
            "#323232 0px 0px 5px",
            &section,
        ))
        .rule(EmitRule::when_changed(
            key("text_shadow"),
            group(),
            format!(
                ".menu-{} .navbar-menu-link {{\n\ttext-shadow: {{{{ value }}}}!important;\n}}",
                slot
            ),
        ))
        .setting(
            SettingDef::new(key("font"), ValueKind::Choice, "", &section)
                .sanitizer(sanitizers::FONT),
        )
        .rule(EmitRule::when_set(
            key("font"),
            group(),
            format!(
                ".menu-{} .navbar-menu-link {{\n\tfont-family: {{{{ value }}}}!important;\n}}",
                slot
            ),
        ))
        .setting(
            SettingDef::new(key("align"), ValueKind::Choice, "", &section)
                .sanitizer(sanitizers::ALIGN),
        )
        .rule(EmitRule::variants(
            key("align"),
            group(),
            [
                (
                    "right",
                    format!(".menu-{}-items.navbar-items {{\n\tfloat: right!important;\n}}", slot),
                ),
                (
                    "left",
                    format!(".menu-{}-items.navbar-items {{\n\tfloat: left!important;\n}}", slot),
                ),
                (
                    "center",
                    format!(
                        ".menu-{slot}-items.navbar-items {{\n\tdisplay: inline-block;\n\tfloat: none!important;\n}}\n.menu-{slot}-container {{\n\ttext-align: center!important;\n}}",
                        slot = slot
                    ),
                ),
            ],
        ))
        .bind_preview(key("align"), format!("#menu-{}-navbar-block", slot))
        .setting(
            SettingDef::new(key("mobile_align"), ValueKind::Choice, "", &section)
                .sanitizer(sanitizers::ALIGN),
        )
        .rule(EmitRule::variants(
            key("mobile_align"),
            group(),
            [
                (
                    "right",
                    format!(".menu-{}-mobile {{\n\tfloat: right!important;\n}}", slot),
                ),
                (
                    "left",
                    format!(".menu-{}-mobile {{\n\tfloat: left!important;\n}}", slot),
                ),
                (
                    "center",
                    format!(
                        ".menu-{}-mobile {{\n\tfloat: none!important;\n\tmargin: 0 auto;\n}}",
                        slot
                    ),
                ),
            ],
        ))
        .bind_preview(key("mobile_align"), format!("#menu-{}-mobile-block", slot))
        .setting(
            SettingDef::new(key("vertical"), ValueKind::Choice, "", &section)
                .sanitizer(sanitizers::YES_NO),
        )
        .rule(EmitRule::variants(
            key("vertical"),
            group(),
            [(
                "yes",
                format!(
                    "@media screen and (min-width: 993px) {{\n\t.menu-{slot}-container .navbar-menu li {{\n\t\twidth: 100%;\n\t}}\n\t.menu-{slot}-container .navbar-items {{\n\t\tdisplay: block!important;\n\t}}\n\t.menu-{slot}-container .navbar-burger {{\n\t\tdisplay: none!important;\n\t}}\n\t.menu-{slot}-container .navbar-menu .sub-menu {{\n\t\tposition: relative;\n\t\tleft: unset;\n\t}}\n}}",
                    slot = slot
                ),
            )],
        ))
        .bind_preview(key("vertical"), format!("#menu-{}-mobile-block", slot))
}
