//! Page and post title styling: color, size, weight, font.

use veneer_emit::{EmitRule, FragmentGroup};
use veneer_settings::{Sanitizer, SettingDef, ValueKind};

use crate::theme::ThemeBuilder;

use super::choices::{sanitizers, FONT_CHOICES, WEIGHT_CHOICES};

pub(super) fn install(builder: ThemeBuilder) -> ThemeBuilder {
    builder
        .sanitizer(sanitizers::WEIGHT, Sanitizer::choice(&WEIGHT_CHOICES))
        .sanitizer(sanitizers::FONT, Sanitizer::choice(&FONT_CHOICES))
        .setting(SettingDef::new(
            "page_title_color",
            ValueKind::Color,
            "",
            "layout",
        ))
        .rule(EmitRule::when_set(
            "page_title_color",
            FragmentGroup::Typography,
            "body.page:not(.front-page) .entry-title {\n\tcolor: {{ value }}!important;\n}",
        ))
        .setting(SettingDef::new(
            "post_title_color",
            ValueKind::Color,
            "",
            "layout",
        ))
        .rule(EmitRule::when_set(
            "post_title_color",
            FragmentGroup::Typography,
            "body.single:not(.front-page) .entry-title {\n\tcolor: {{ value }}!important;\n}",
        ))
        .setting(SettingDef::new(
            "page_title_size",
            ValueKind::Dimension,
            "26",
            "layout",
        ))
        .rule(EmitRule::when_changed(
            "page_title_size",
            FragmentGroup::Typography,
            "body.page:not(.front-page) .entry-title {\n\tfont-size: {{ value }}px!important;\n}",
        ))
        .setting(SettingDef::new(
            "post_title_size",
            ValueKind::Dimension,
            "26",
            "layout",
        ))
        .rule(EmitRule::when_changed(
            "post_title_size",
            FragmentGroup::Typography,
            "body.single:not(.front-page) .entry-title {\n\tfont-size: {{ value }}px!important;\n}",
        ))
        .setting(
            SettingDef::new("page_title_weight", ValueKind::Choice, "400", "layout")
                .sanitizer(sanitizers::WEIGHT),
        )
        .rule(EmitRule::when_changed(
            "page_title_weight",
            FragmentGroup::Typography,
            "body.page:not(.front-page) .entry-title {\n\tfont-weight: {{ value }}!important;\n}",
        ))
        .setting(
            SettingDef::new("post_title_weight", ValueKind::Choice, "400", "layout")
                .sanitizer(sanitizers::WEIGHT),
        )
        .rule(EmitRule::when_changed(
            "post_title_weight",
            FragmentGroup::Typography,
            "body.single:not(.front-page) .entry-title {\n\tfont-weight: {{ value }}!important;\n}",
        ))
        .setting(
            SettingDef::new("page_title_font", ValueKind::Choice, "", "layout")
                .sanitizer(sanitizers::FONT),
        )
        .rule(EmitRule::when_set(
            "page_title_font",
            FragmentGroup::Typography,
            "body.page:not(.front-page) .entry-title {\n\tfont-family: {{ value }}!important;\n}",
        ))
        .setting(
            SettingDef::new("post_title_font", ValueKind::Choice, "", "layout")
                .sanitizer(sanitizers::FONT),
        )
        .rule(EmitRule::when_set(
            "post_title_font",
            FragmentGroup::Typography,
            "body.single:not(.front-page) .entry-title {\n\tfont-family: {{ value }}!important;\n}",
        ))
}
