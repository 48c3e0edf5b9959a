//! Operator-editable content slots: text blocks, images, links, backgrounds.
//!
//! These settings emit no CSS; they exist so the host templates can resolve
//! their values and so the editing surface can refresh the affected region
//! in place. Text blocks go through the markup allow-list; image and link
//! slots are attribute-escaped references.

use veneer_settings::{Panel, Section, SettingDef, ValueKind};

use crate::theme::ThemeBuilder;

pub(super) fn install(
    mut builder: ThemeBuilder,
    text_blocks: usize,
    images: usize,
    links: usize,
    backgrounds: usize,
) -> ThemeBuilder {
    builder = builder.panel(Panel::new("text_blocks", "Text Blocks", 69));
    for n in 1..=text_blocks {
        let section = format!("text_block_{}", n);
        let key = format!("tgtext-{}", n);
        builder = builder
            .section(
                Section::new(&section, format!("Change Text {}", n), 19).in_panel("text_blocks"),
            )
            .setting(SettingDef::new(&key, ValueKind::Markup, "", &section))
            .bind_preview(&key, format!("#{}", key));
    }

    builder = builder.panel(Panel::new("images", "Images", 70));
    for n in 1..=images {
        let section = format!("image_{}", n);
        let key = format!("tgimg-{}", n);
        builder = builder
            .section(Section::new(&section, format!("Change Image {}", n), 20).in_panel("images"))
            .setting(SettingDef::new(&key, ValueKind::ImageRef, "", &section))
            .bind_preview(&key, format!("#{}", key));
    }

    builder = builder.panel(Panel::new("links", "Links", 70));
    for n in 1..=links {
        let section = format!("link_{}", n);
        let key = format!("tglink-{}", n);
        builder = builder
            .section(Section::new(&section, format!("Change Link {}", n), 20).in_panel("links"))
            .setting(SettingDef::new(&key, ValueKind::Url, "", &section));
    }

    builder = builder.panel(Panel::new("backgrounds", "Backgrounds", 70));
    for n in 1..=backgrounds {
        let section = format!("background_{}", n);
        let key = format!("tgback-{}", n);
        builder = builder
            .section(
                Section::new(&section, format!("Change Background {}", n), 20)
                    .in_panel("backgrounds"),
            )
            .setting(SettingDef::new(&key, ValueKind::ImageRef, "", &section))
            .bind_preview(&key, format!("#{}", key));
    }

    builder
}
