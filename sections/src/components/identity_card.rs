//! Identity card: a compact access-card panel with three image slots,
//! metadata rows, and action buttons.
//!
//! In preview mode the image slots are upload targets: they carry
//! `data-upload-slot` markers and a hidden file input that the page script
//! wires to a client-side preview. The authoritative replacement goes
//! through [`crate::upload::on_file_selected`]. Published pages render the
//! slots inert.

use leptos::prelude::*;

use super::{GuardedLink, UploadIcon};
use crate::types::{DesignTokens, IdentityData, IdentityOverrides, ImageSlot, MediaShape};
use crate::RenderContext;

/// Identity card section.
#[component]
pub fn IdentityCard(
    id: String,
    overrides: IdentityOverrides,
    tokens: DesignTokens,
    ctx: RenderContext,
) -> impl IntoView {
    let data = overrides.data.clone().unwrap_or_default();
    let layout = overrides.layout.clone().unwrap_or_default();
    let style_ovr = overrides.style.clone().unwrap_or_default();

    let padding_y = layout.padding_y.unwrap_or(40.0);
    let title_size = layout.title_size.unwrap_or(18.0);
    let subtitle_size = layout.subtitle_size.unwrap_or(10.0);
    let text_size = layout.text_size.unwrap_or(12.0);
    let text_line_height = layout.text_line_height.unwrap_or(1.2);
    let text_spacing = layout.text_spacing.unwrap_or(0.0);

    let accent = tokens.colors.accent.clone();
    let text_prim = tokens.colors.text_primary.clone();
    let border = tokens.colors.border.clone();
    let preview = ctx.preview;

    let section_style = format!("padding-top:{padding_y}px;padding-bottom:{padding_y}px;");
    let card_style = format!(
        "background-color:{bg};border-color:{accent}20;border-radius:{radius}px;box-shadow:0 20px 50px -12px {accent}15;",
        bg = style_ovr
            .bg_fill
            .clone()
            .unwrap_or_else(|| "rgba(255,255,255,0.02)".to_string()),
        radius = tokens.radius.panel,
    );
    let corner_style = format!("border-color:{accent};");

    let images = data.images.clone().unwrap_or_else(IdentityData::stock_images);
    let primary = images.get(1).cloned().unwrap_or_default();
    let primary_radius = match primary.shape {
        MediaShape::Circle => "999px".to_string(),
        _ => format!("{}px", tokens.radius.small),
    };
    let portrait_style = format!("border-color:{accent}40;border-radius:{primary_radius};");

    let title = data.title.clone().unwrap_or_default();
    let subtitle = data.subtitle.clone().unwrap_or_default();
    let serial: String = id.chars().take(8).collect();
    let title_style = format!("color:{text_prim};font-size:{title_size}px;");
    let row_style = format!("border-color:{border}20;");
    let subtitle_style = format!("color:{accent};font-size:{subtitle_size}px;");
    let thumb_style = format!("border-color:{border}40;");
    let footnote = data
        .text
        .clone()
        .unwrap_or_else(|| "ENCRYPTED_STREAM_ID: 0x9942".to_string());
    let footnote_style = format!(
        "color:{text_prim};font-size:{text_size}px;line-height:{text_line_height};letter-spacing:{text_spacing}em;",
    );

    let buttons = data.buttons.clone().unwrap_or_default();
    let btn_style = format!("background-color:{accent};color:#FFFFFF;");
    let block_id = id.clone();

    view! {
        <section id=id class="dna-card-section" style=section_style>
            <div class="dna-card" style=card_style>
                <div class="card-corner tl" style=corner_style.clone()></div>
                <div class="card-corner tr" style=corner_style.clone()></div>
                <div class="card-corner bl" style=corner_style.clone()></div>
                <div class="card-corner br" style=corner_style.clone()></div>
                <div class="card-scanlines"></div>

                <div class="card-header">
                    <div>
                        <span class="card-tag">"SYS://ID"</span>
                        <h3 class="card-title" style=title_style>{title}</h3>
                    </div>
                    <div class="card-serial">"#" {serial}</div>
                </div>

                <div class="card-portrait-wrap">
                    <SlotImage
                        slot_index=1
                        image=primary.clone()
                        block_id=block_id.clone()
                        preview=preview
                        class="card-portrait"
                        style=portrait_style
                    />
                    <div class="card-ring" style=corner_style.clone()></div>
                </div>

                <div class="card-rows">
                    <div class="card-row" style=row_style.clone()>
                        <span class="card-row-label">"Classification"</span>
                        <span class="card-row-value" style=subtitle_style>{subtitle}</span>
                    </div>
                    <div class="card-row" style=row_style>
                        <span class="card-row-label">"Visual Hash"</span>
                        <div class="card-thumbs">
                            {images
                                .iter()
                                .enumerate()
                                .filter(|(i, _)| *i != 1)
                                .map(|(i, image)| {
                                    view! {
                                        <SlotImage
                                            slot_index=i
                                            image=image.clone()
                                            block_id=block_id.clone()
                                            preview=preview
                                            class="card-thumb"
                                            style=thumb_style.clone()
                                        />
                                    }
                                })
                                .collect::<Vec<_>>()}
                        </div>
                    </div>
                </div>

                <div class="card-actions">
                    {buttons
                        .into_iter()
                        .map(|btn| {
                            view! {
                                <GuardedLink
                                    href=btn.url
                                    label=btn.label
                                    preview=preview
                                    class="card-btn"
                                    style=btn_style.clone()
                                />
                            }
                        })
                        .collect::<Vec<_>>()}

                    <div class="card-footnote" style=footnote_style>{footnote}</div>
                </div>

                {preview.then(|| view! {
                    <input
                        type="file"
                        accept="image/*"
                        style="display:none"
                        data-upload-input=block_id.clone()
                    />
                })}
            </div>
        </section>
    }
}

/// One image slot. Uploadable (marker attributes + hover overlay) only in
/// preview mode.
#[component]
fn SlotImage(
    slot_index: usize,
    image: ImageSlot,
    block_id: String,
    preview: bool,
    class: &'static str,
    #[prop(into)] style: String,
) -> impl IntoView {
    if preview {
        view! {
            <div
                class=format!("{class} uploadable")
                style=style
                data-upload-slot=slot_index.to_string()
                data-upload-block=block_id
            >
                <img src=image.url alt="Identity slot" />
                <div class="card-upload-overlay">
                    <UploadIcon color="#FFFFFF" />
                </div>
            </div>
        }
        .into_any()
    } else {
        view! {
            <div class=class style=style>
                <img src=image.url alt="Identity slot" />
            </div>
        }
        .into_any()
    }
}
