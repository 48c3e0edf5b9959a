//! Additional code: an operator-supplied tracking snippet for the footer.

use veneer_emit::EmitRule;
use veneer_settings::{sanitizer_names, ControlHint, Section, SettingDef, ValueKind};

use crate::theme::ThemeBuilder;

pub(super) fn install(builder: ThemeBuilder) -> ThemeBuilder {
    builder
        .section(Section::new("custom_scripts", "Additional Code", 190))
        .setting(
            SettingDef::new("custom_js", ValueKind::Text, "", "custom_scripts")
                .sanitizer(sanitizer_names::CODE)
                .control(ControlHint::CodeEditor),
        )
        .rule(EmitRule::script_when_set("custom_js", "{{ value }}"))
}
