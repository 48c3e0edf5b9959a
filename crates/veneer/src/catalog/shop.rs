//! Shop styles: cart, price and button colors plus cart placement.

use veneer_emit::{EmitRule, FragmentGroup};
use veneer_settings::{ControlHint, Section, SettingDef, ValueKind};

use crate::theme::ThemeBuilder;

pub(super) fn install(builder: ThemeBuilder) -> ThemeBuilder {
    builder
        .section(Section::new("shop_styles", "Shop Styles", 100))
        .setting(SettingDef::new(
            "cart_color",
            ValueKind::Color,
            "#444444",
            "shop_styles",
        ))
        .rule(EmitRule::when_changed(
            "cart_color",
            FragmentGroup::Shop,
            ".cart-contents:before {\n\tcolor: {{ value }};\n}",
        ))
        .setting(SettingDef::new(
            "cart_count_background",
            ValueKind::Color,
            "#2ecc71",
            "shop_styles",
        ))
        .rule(EmitRule::when_changed(
            "cart_count_background",
            FragmentGroup::Shop,
            ".cart-contents-count {\n\tbackground-color: {{ value }};\n}",
        ))
        .setting(SettingDef::new(
            "cart_count_text",
            ValueKind::Color,
            "#ffffff",
            "shop_styles",
        ))
        .rule(EmitRule::when_changed(
            "cart_count_text",
            FragmentGroup::Shop,
            ".cart-contents-count {\n\tcolor: {{ value }};\n}",
        ))
        .setting(SettingDef::new(
            "price_color",
            ValueKind::Color,
            "#77a464",
            "shop_styles",
        ))
        .rule(EmitRule::when_changed(
            "price_color",
            FragmentGroup::Shop,
            ".shop .product .price {\n\tcolor: {{ value }};\n}",
        ))
        .setting(SettingDef::new(
            "buttons_text",
            ValueKind::Color,
            "#ffffff",
            "shop_styles",
        ))
        .rule(EmitRule::when_changed(
            "buttons_text",
            FragmentGroup::Shop,
            ".shop .button {\n\tcolor: {{ value }};\n}",
        ))
        .setting(SettingDef::new(
            "buttons_background",
            ValueKind::Color,
            "#a46497",
            "shop_styles",
        ))
        .rule(EmitRule::when_changed(
            "buttons_background",
            FragmentGroup::Shop,
            ".shop .button {\n\tbackground-color: {{ value }};\n}",
        ))
        .setting(SettingDef::new(
            "buttons_text_hover",
            ValueKind::Color,
            "#e6e6e6",
            "shop_styles",
        ))
        .rule(EmitRule::when_changed(
            "buttons_text_hover",
            FragmentGroup::Shop,
            ".shop .button:hover {\n\tcolor: {{ value }};\n}",
        ))
        .setting(SettingDef::new(
            "buttons_background_hover",
            ValueKind::Color,
            "#935386",
            "shop_styles",
        ))
        .rule(EmitRule::when_changed(
            "buttons_background_hover",
            FragmentGroup::Shop,
            ".shop .button:hover {\n\tbackground-color: {{ value }};\n}",
        ))
        .setting(SettingDef::new(
            "show_cart_in_menu",
            ValueKind::Toggle,
            "true",
            "shop_styles",
        ))
        .rule(EmitRule::toggle(
            "show_cart_in_menu",
            FragmentGroup::Shop,
            ".cart-contents {\n\tdisplay: inline-block;\n}",
            ".cart-contents {\n\tdisplay: none;\n}",
        ))
        .setting(SettingDef::new(
            "show_cart_count",
            ValueKind::Toggle,
            "true",
            "shop_styles",
        ))
        .rule(EmitRule::toggle(
            "show_cart_count",
            FragmentGroup::Shop,
            ".cart-contents-count {\n\tvisibility: visible;\n}",
            ".cart-contents-count {\n\tvisibility: hidden;\n}",
        ))
        // Which menu slot carries the cart link; consumed by the host's
        // header template, no style fragment of its own.
        .setting(
            SettingDef::new("cart_menu_location", ValueKind::Dimension, "1", "shop_styles")
                .control(ControlHint::NumberInput {
                    min: 1.0,
                    max: 999.0,
                    step: 1.0,
                }),
        )
}
