//! Page footer: navigation links plus company and copyright lines.

use leptos::prelude::*;

use super::GuardedLink;
use crate::resolve::resolve;
use crate::types::{DesignTokens, FooterLink, FooterOverrides};
use crate::RenderContext;

fn default_links() -> Vec<FooterLink> {
    vec![
        FooterLink::new("Privacy Policy", "#privacy"),
        FooterLink::new("Terms of Service", "#terms"),
        FooterLink::new("Contact", "#contact"),
        FooterLink {
            label: "GitHub".into(),
            url: "https://github.com".into(),
            external: true,
        },
    ]
}

/// Footer section.
#[component]
pub fn FooterSection(
    id: String,
    overrides: FooterOverrides,
    tokens: DesignTokens,
    ctx: RenderContext,
) -> impl IntoView {
    let data = overrides.data.clone().unwrap_or_default();
    let layout = overrides.layout.clone().unwrap_or_default();
    let style_ovr = overrides.style.clone().unwrap_or_default();

    let padding_top = layout.padding_top.unwrap_or(100.0);
    let padding_bottom = layout.padding_bottom.unwrap_or(60.0);
    // `bg_fill` and `background` are aliases; `bg_fill` wins.
    let background = resolve(
        style_ovr.bg_fill.clone(),
        style_ovr.background.clone(),
        "transparent".to_string(),
    );
    let color = resolve(
        style_ovr.text_color.clone(),
        Some(tokens.colors.text_primary.clone()),
        "#ffffff".to_string(),
    );

    let style = format!(
        "padding-top:{padding_top}px;padding-bottom:{padding_bottom}px;background-color:{background};color:{color};border-top:1px solid {border}15;",
        border = tokens.colors.border,
    );

    let links = data.links.clone().unwrap_or_else(default_links);
    let company = data
        .company_name
        .clone()
        .unwrap_or_else(|| "Studio Protocol".to_string());
    let company_line = match data.tagline.as_deref() {
        Some(tagline) if !tagline.is_empty() => format!("{company} / {tagline}"),
        _ => company.clone(),
    };
    let year = time::OffsetDateTime::now_utc().year();
    let copyright = format!("© {year} {company}. All rights reserved.");
    let preview = ctx.preview;

    view! {
        <footer id=id class="dna-footer" style=style>
            <div class="footer-links">
                {links
                    .into_iter()
                    .map(|link| {
                        view! {
                            <GuardedLink
                                href=link.url
                                label=link.label
                                preview=preview
                                external=link.external
                                class="footer-link"
                            />
                        }
                    })
                    .collect::<Vec<_>>()}
            </div>

            <div class="footer-meta">
                <div class="footer-company">{company_line}</div>
                <div class="footer-copyright">{copyright}</div>
            </div>
        </footer>
    }
}
