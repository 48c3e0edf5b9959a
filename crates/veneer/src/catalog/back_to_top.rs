//! The back-to-top widget: visibility, placement, colors, opacity.

use veneer_emit::{EmitRule, FragmentGroup};
use veneer_settings::{ControlHint, SettingDef, ValueKind};

use crate::theme::ThemeBuilder;

pub(super) fn install(builder: ThemeBuilder) -> ThemeBuilder {
    builder
        .setting(SettingDef::new(
            "show_back_to_top",
            ValueKind::Toggle,
            "true",
            "layout",
        ))
        .rule(EmitRule::toggle(
            "show_back_to_top",
            FragmentGroup::BackToTop,
            "#back-to-top.show {\n\topacity: 1;\n\tvisibility: visible;\n}",
            "#back-to-top.show {\n\topacity: 0;\n\tvisibility: hidden;\n}",
        ))
        .setting(SettingDef::new(
            "back_to_top_align_left",
            ValueKind::Toggle,
            "",
            "layout",
        ))
        .rule(EmitRule::toggle(
            "back_to_top_align_left",
            FragmentGroup::BackToTop,
            "#back-to-top {\n\tleft: 30px;\n\tright: auto;\n}",
            "#back-to-top {\n\tright: 30px;\n}",
        ))
        .setting(SettingDef::new(
            "back_to_top_arrow_color",
            ValueKind::Color,
            "",
            "layout",
        ))
        .rule(EmitRule::when_set(
            "back_to_top_arrow_color",
            FragmentGroup::BackToTop,
            "#back-to-top::after {\n\tcolor: {{ value }}!important;\n}",
        ))
        .setting(SettingDef::new(
            "back_to_top_background",
            ValueKind::Color,
            "",
            "layout",
        ))
        .rule(EmitRule::when_set(
            "back_to_top_background",
            FragmentGroup::BackToTop,
            "#back-to-top {\n\tbackground-color: {{ value }};\n}",
        ))
        .setting(SettingDef::new(
            "back_to_top_hover",
            ValueKind::Color,
            "",
            "layout",
        ))
        .rule(EmitRule::when_set(
            "back_to_top_hover",
            FragmentGroup::BackToTop,
            "#back-to-top:hover {\n\tbackground-color: {{ value }};\n}",
        ))
        .setting(
            SettingDef::new("back_to_top_opacity", ValueKind::Dimension, "1", "layout").control(
                ControlHint::NumberInput {
                    min: 0.0,
                    max: 1.0,
                    step: 0.1,
                },
            ),
        )
        .rule(EmitRule::when_changed(
            "back_to_top_opacity",
            FragmentGroup::BackToTop,
            "#back-to-top.show {\n\topacity: {{ value }}!important;\n}",
        ))
}
