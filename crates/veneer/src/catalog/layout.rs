//! Main layout options: content sizing, footer widget area, excerpts.

use veneer_emit::{EmitRule, FragmentGroup};
use veneer_settings::{ControlHint, Section, SettingDef, ValueKind};

use crate::theme::ThemeBuilder;

pub(super) fn install(builder: ThemeBuilder) -> ThemeBuilder {
    builder
        .section(Section::new("layout", "Main Options", 100))
        .setting(SettingDef::new(
            "content_min_height",
            ValueKind::Dimension,
            "588",
            "layout",
        ))
        .rule(EmitRule::when_changed(
            "content_min_height",
            FragmentGroup::Layout,
            "body:not(.home) .site-content {\n\tmin-height: {{ value }}px;\n}",
        ))
        .setting(SettingDef::new(
            "content_max_width",
            ValueKind::Dimension,
            "1400",
            "layout",
        ))
        .rule(EmitRule::when_changed(
            "content_max_width",
            FragmentGroup::Layout,
            "body:not(.home) .wrap {\n\tmax-width: {{ value }}px;\n\tmargin: 0 auto;\n}",
        ))
        .setting(SettingDef::new(
            "footer_widgets_max_width",
            ValueKind::Dimension,
            "1280",
            "layout",
        ))
        .rule(EmitRule::when_changed(
            "footer_widgets_max_width",
            FragmentGroup::Layout,
            ".home .site-footer .widget-area {\n\tmax-width: {{ value }}px!important;\n}",
        ))
        .setting(SettingDef::new(
            "footer_widgets_padding_x",
            ValueKind::Dimension,
            "30",
            "layout",
        ))
        .rule(EmitRule::when_changed(
            "footer_widgets_padding_x",
            FragmentGroup::Layout,
            ".site-footer .widget-column {\n\tpadding-left: {{ value }}px!important;\n\tpadding-right: {{ value }}px!important;\n}",
        ))
        .setting(SettingDef::new(
            "footer_widgets_padding_y",
            ValueKind::Dimension,
            "35",
            "layout",
        ))
        .rule(EmitRule::when_changed(
            "footer_widgets_padding_y",
            FragmentGroup::Layout,
            ".site-footer .widget-column {\n\tpadding-top: {{ value }}px!important;\n\tpadding-bottom: {{ value }}px!important;\n}",
        ))
        // Consumed by the host's excerpt filter; registered for the UI and
        // resolve, no style fragment.
        .setting(SettingDef::new(
            "post_excerpt_length",
            ValueKind::Dimension,
            "55",
            "layout",
        ))
        .setting(SettingDef::new(
            "full_width_footer_widgets",
            ValueKind::Toggle,
            "false",
            "layout",
        ))
        .rule(EmitRule::toggle(
            "full_width_footer_widgets",
            FragmentGroup::Layout,
            ".site-footer .widget-column {\n\twidth: 100%!important;\n}",
            ".site-footer .widget-column {\n\twidth: 36%;\n}",
        ))
        .setting(
            SettingDef::new(
                "footer_widgets_background",
                ValueKind::Color,
                "rgba(238,238,238,1)",
                "layout",
            )
            .control(ControlHint::AlphaColorPicker),
        )
        .rule(EmitRule::when_changed(
            "footer_widgets_background",
            FragmentGroup::Layout,
            ".site-footer {\n\tbackground-color: {{ value }}!important;\n}",
        ))
}
