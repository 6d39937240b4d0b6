//! Article block: subtitle / title / body copy, or the loader face shown
//! while block content syncs.

use leptos::prelude::*;
use time::macros::format_description;

use crate::types::{ArticleOverrides, ArticleVariant, DesignTokens};

/// Article section.
#[component]
pub fn ArticleSection(
    id: String,
    overrides: ArticleOverrides,
    tokens: DesignTokens,
) -> impl IntoView {
    let layout = overrides.layout.clone().unwrap_or_default();
    let padding_y = layout.padding_y.unwrap_or(120.0);

    if overrides.variant == ArticleVariant::Loader {
        return loader(id, &overrides, &tokens, padding_y);
    }

    let data = overrides.data.clone().unwrap_or_default();
    let style_ovr = overrides.style.clone().unwrap_or_default();

    let max_width = layout.max_width.unwrap_or(850.0);
    let text_align = layout.text_align.unwrap_or_default().as_css();
    let font_size = style_ovr.font_size.unwrap_or(18.0);
    let line_height = style_ovr.line_height.unwrap_or(1.8);

    let section_style = format!(
        "padding-top:{padding_y}px;padding-bottom:{padding_y}px;font-family:var(--dna-font-family);",
    );
    let inner_style = format!("max-width:{max_width}px;text-align:{text_align};");
    let heading_style = format!("color:{};", tokens.colors.text_primary);
    let body_style = format!(
        "color:{};font-size:{font_size}px;line-height:{line_height};",
        tokens.colors.text_secondary,
    );

    let subtitle = data.texts.get("subtitle").to_string();
    let title = data.texts.get("title").to_string();
    let body = data.texts.get("body").to_string();

    view! {
        <section id=id class="dna-article" style=section_style>
            <div class="article-inner" style=inner_style>
                {(!subtitle.is_empty()).then(|| view! {
                    <div class="article-subtitle" style=heading_style.clone()>{subtitle}</div>
                })}
                {(!title.is_empty()).then(|| view! {
                    <h2 class="article-title" style=heading_style.clone()>{title}</h2>
                })}
                {(!body.is_empty()).then(|| view! {
                    <div class="article-body" style=body_style>{body}</div>
                })}
            </div>
        </section>
    }
    .into_any()
}

/// The sync-loader face: spinner, pulsing caption, timestamp line.
fn loader(
    id: String,
    overrides: &ArticleOverrides,
    tokens: &DesignTokens,
    padding_y: f32,
) -> AnyView {
    let style_ovr = overrides.style.clone().unwrap_or_default();
    let accent = tokens.colors.accent.clone();
    let text_prim = tokens.colors.text_primary.clone();
    let background = style_ovr
        .background_color
        .clone()
        .unwrap_or_else(|| "transparent".to_string());

    let section_style = format!(
        "padding-top:{padding_y}px;padding-bottom:{padding_y}px;background-color:{background};",
    );
    let spinner_style = format!("border-color:{accent}33;border-top-color:{accent};");
    let caption_style = format!("color:{accent};");
    let stamp_style = format!("color:{text_prim};");

    let stamp = time::OffsetDateTime::now_utc()
        .format(format_description!("[day]/[month]/[year] [hour]:[minute]"))
        .map(|ts| format!("Last update date: {ts}"))
        .unwrap_or_else(|_| "Last update date: pending".to_string());

    view! {
        <section id=id class="dna-article article-loader" style=section_style>
            <div class="loader-spinner" style=spinner_style></div>
            <div class="loader-caption" style=caption_style>"LOADING DATA..."</div>
            <div class="loader-stamp" style=stamp_style.clone()>{stamp}</div>
            <div class="loader-status" style=stamp_style>"Status: Sync_Active"</div>
        </section>
    }
    .into_any()
}
