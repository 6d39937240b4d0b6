//! CSS for rendered pages.
//!
//! Two layers compose the final stylesheet:
//!
//! - [`token_css`] - a `:root` block generated from the page's
//!   [`DesignTokens`](crate::types::DesignTokens), exposing the DNA as
//!   custom properties (`--dna-*`) for the static rules below.
//! - [`PAGE_CSS`] - the static section styling: layout scaffolding, card
//!   chrome, hover states, and the shared keyframes.
//!
//! Per-block entrance keyframes are emitted by the hero component itself,
//! scoped by block id.
//!
//! # Customization
//!
//! ```rust
//! use sections_leptos::styles::PAGE_CSS;
//!
//! let my_css = ".dna-hero { outline: 1px solid red; }";
//! let combined = format!("{}\n{}", PAGE_CSS, my_css);
//! ```

use crate::types::DesignTokens;

/// Generate the `:root` custom-property block from a token set.
pub fn token_css(tokens: &DesignTokens) -> String {
    format!(
        ":root {{\n    \
         --dna-font-family: '{font}', system-ui, -apple-system, sans-serif;\n    \
         --dna-unit: {unit}px;\n    \
         --dna-accent: {accent};\n    \
         --dna-text-prim: {text_prim};\n    \
         --dna-text-sec: {text_sec};\n    \
         --dna-border: {border};\n    \
         --dna-radius-panel: {radius_panel}px;\n    \
         --dna-radius-small: {radius_small}px;\n}}",
        font = tokens.typography.font_family,
        unit = tokens.spacing.unit,
        accent = tokens.colors.accent,
        text_prim = tokens.colors.text_primary,
        text_sec = tokens.colors.text_secondary,
        border = tokens.colors.border,
        radius_panel = tokens.radius.panel,
        radius_small = tokens.radius.small,
    )
}

/// Static CSS for every section component.
pub const PAGE_CSS: &str = r#"
*, *::before, *::after {
    box-sizing: border-box;
}

html {
    scroll-behavior: smooth;
}

body {
    font-family: var(--dna-font-family);
    background: #09090B;
    color: var(--dna-text-prim);
    line-height: 1.6;
    margin: 0;
    min-height: 100vh;
}

img {
    display: block;
    max-width: 100%;
}

a {
    color: inherit;
    text-decoration: none;
}

/* Hero */
.dna-hero {
    width: 100%;
    position: relative;
    overflow: hidden;
    display: flex;
    align-items: center;
}

.hero-inner {
    position: relative;
    z-index: 10;
    max-width: 1280px;
    margin: 0 auto;
    width: 100%;
    display: flex;
    align-items: center;
    gap: 48px;
}

.hero-bg-layer {
    position: absolute;
    inset: 0;
    z-index: 0;
    pointer-events: none;
    transition: opacity 0.7s;
}

.hero-bg-layer img {
    width: 100%;
    height: 100%;
    object-fit: cover;
}

.hero-bg-scrim {
    position: absolute;
    inset: 0;
    background: rgba(0, 0, 0, 0.3);
}

.hero-glow {
    position: absolute;
    inset: 0;
    z-index: -1;
    pointer-events: none;
}

.hero-glow::before,
.hero-glow::after {
    content: "";
    position: absolute;
    width: 40%;
    height: 40%;
    border-radius: 999px;
    filter: blur(120px);
}

.hero-glow::before {
    top: -10%;
    left: -10%;
    background: rgba(59, 130, 246, 0.2);
}

.hero-glow::after {
    bottom: -10%;
    right: -10%;
    background: rgba(139, 92, 246, 0.1);
}

.hero-media {
    position: relative;
    overflow: hidden;
}

.hero-media img {
    width: 100%;
    height: 100%;
    object-fit: cover;
    transition: transform 1s;
}

.hero-media-fade {
    position: absolute;
    bottom: 0;
    left: 0;
    width: 100%;
    height: 96px;
    background: linear-gradient(to top, rgba(9, 9, 11, 0.5), transparent);
}

.hero-text {
    display: flex;
    flex-direction: column;
}

.hero-title {
    margin: 0 0 24px 0;
    white-space: pre-line;
    font-family: var(--dna-font-family);
}

.hero-desc {
    margin: 0 0 32px 0;
    max-width: 42rem;
    opacity: 0.8;
    white-space: pre-line;
    font-family: var(--dna-font-family);
}

.hero-actions {
    display: flex;
    align-items: center;
    gap: 16px;
}

.hero-btn {
    font-weight: 600;
    font-family: var(--dna-font-family);
    white-space: nowrap;
    cursor: pointer;
    transition: transform 0.3s;
}

.hero-btn:active {
    transform: scale(0.95);
}

/* Article */
.dna-article {
    width: 100%;
    display: flex;
    flex-direction: column;
    align-items: center;
    position: relative;
}

.article-inner {
    width: 100%;
    padding: 0 32px;
    z-index: 10;
}

.article-subtitle {
    font-size: 12px;
    font-weight: 700;
    text-transform: uppercase;
    letter-spacing: 0.2em;
    opacity: 0.5;
    margin-bottom: 16px;
}

.article-title {
    font-size: 42px;
    font-weight: 900;
    letter-spacing: -0.02em;
    line-height: 1.2;
    margin: 0 0 32px 0;
}

.article-body {
    white-space: pre-wrap;
    opacity: 0.8;
}

/* Article loader variant */
.article-loader {
    min-height: 400px;
    justify-content: center;
    font-family: ui-monospace, monospace;
    overflow: hidden;
}

.loader-spinner {
    width: 48px;
    height: 48px;
    border-width: 2px;
    border-style: solid;
    border-radius: 999px;
    animation: dna-spin 1.5s linear infinite;
    margin: 0 auto 32px auto;
}

.loader-caption {
    font-size: 13px;
    font-weight: 900;
    text-transform: uppercase;
    letter-spacing: 0.6em;
    text-align: center;
    animation: dna-pulse 2s ease-in-out infinite;
}

.loader-stamp {
    font-size: 10px;
    text-transform: uppercase;
    letter-spacing: 0.2em;
    opacity: 0.4;
    font-weight: 700;
    text-align: center;
    margin-top: 12px;
}

.loader-status {
    position: absolute;
    bottom: 24px;
    right: 40px;
    font-size: 8px;
    opacity: 0.1;
    text-transform: uppercase;
    letter-spacing: 0.2em;
}

/* Footer */
.dna-footer {
    width: 100%;
    display: flex;
    flex-direction: column;
    align-items: center;
    gap: 48px;
    padding-left: 32px;
    padding-right: 32px;
    font-family: var(--dna-font-family);
}

.footer-links {
    display: flex;
    flex-wrap: wrap;
    justify-content: center;
    align-items: center;
    column-gap: 48px;
    row-gap: 16px;
}

.footer-link {
    font-size: 10px;
    font-weight: 700;
    text-transform: uppercase;
    letter-spacing: 0.2em;
    opacity: 0.4;
    transition: opacity 0.3s, letter-spacing 0.3s;
}

.footer-link:hover {
    opacity: 1;
    letter-spacing: 0.3em;
}

.footer-meta {
    display: flex;
    flex-direction: column;
    align-items: center;
    gap: 8px;
}

.footer-company {
    font-size: 9px;
    text-transform: uppercase;
    letter-spacing: 0.4em;
    opacity: 0.2;
    font-weight: 900;
}

.footer-copyright {
    font-size: 8px;
    text-transform: uppercase;
    letter-spacing: 0.2em;
    opacity: 0.1;
}

/* Identity card */
.dna-card-section {
    width: 100%;
    display: flex;
    justify-content: center;
    padding-left: 16px;
    padding-right: 16px;
}

.dna-card {
    max-width: 384px;
    width: 100%;
    padding: 32px;
    border: 1px solid;
    position: relative;
    overflow: hidden;
    backdrop-filter: blur(20px);
    font-family: var(--dna-font-family);
}

.card-corner {
    position: absolute;
    width: 8px;
    height: 8px;
}

.card-corner.tl { top: 0; left: 0; border-left: 1px solid; border-top: 1px solid; }
.card-corner.tr { top: 0; right: 0; border-right: 1px solid; border-top: 1px solid; }
.card-corner.bl { bottom: 0; left: 0; border-left: 1px solid; border-bottom: 1px solid; }
.card-corner.br { bottom: 0; right: 0; border-right: 1px solid; border-bottom: 1px solid; }

.card-scanlines {
    position: absolute;
    inset: 0;
    pointer-events: none;
    opacity: 0.03;
    background:
        linear-gradient(rgba(18, 16, 16, 0) 50%, rgba(0, 0, 0, 0.25) 50%),
        linear-gradient(90deg, rgba(255, 0, 0, 0.06), rgba(0, 255, 0, 0.02), rgba(0, 0, 255, 0.06));
    background-size: 100% 2px, 3px 100%;
}

.card-header {
    width: 100%;
    display: flex;
    justify-content: space-between;
    align-items: flex-start;
    margin-bottom: 32px;
}

.card-tag {
    font-size: 8px;
    font-weight: 900;
    letter-spacing: 0.3em;
    opacity: 0.3;
    line-height: 1;
    margin-bottom: 4px;
    display: block;
}

.card-title {
    font-weight: 900;
    text-transform: uppercase;
    letter-spacing: -0.02em;
    line-height: 1;
    margin: 0;
}

.card-serial {
    font-size: 10px;
    font-family: ui-monospace, monospace;
    opacity: 0.2;
}

.card-portrait-wrap {
    position: relative;
    margin-bottom: 32px;
}

.card-portrait {
    position: relative;
    width: 96px;
    height: 96px;
    overflow: hidden;
    border: 2px solid;
    transition: transform 0.5s;
}

.card-portrait img {
    width: 100%;
    height: 100%;
    object-fit: cover;
}

.card-portrait.uploadable {
    cursor: pointer;
}

.card-portrait.uploadable:hover {
    transform: scale(1.05);
}

.card-upload-overlay {
    position: absolute;
    inset: 0;
    background: rgba(0, 0, 0, 0.6);
    opacity: 0;
    display: flex;
    align-items: center;
    justify-content: center;
    transition: opacity 0.3s;
}

.card-portrait.uploadable:hover .card-upload-overlay {
    opacity: 1;
}

.card-ring {
    position: absolute;
    inset: -8px;
    border: 1px dashed;
    border-radius: 999px;
    opacity: 0.1;
    animation: dna-spin 20s linear infinite;
}

.card-rows {
    width: 100%;
    margin-bottom: 32px;
}

.card-row {
    display: flex;
    justify-content: space-between;
    border-bottom: 1px solid;
    padding-bottom: 8px;
    margin-bottom: 16px;
}

.card-row-label {
    font-size: 9px;
    font-weight: 900;
    opacity: 0.3;
    text-transform: uppercase;
    letter-spacing: 0.1em;
}

.card-row-value {
    font-size: 10px;
    font-weight: 700;
    text-transform: uppercase;
    letter-spacing: 0.05em;
}

.card-thumbs {
    display: flex;
    gap: 8px;
}

.card-thumb {
    width: 24px;
    height: 24px;
    border: 1px solid;
    border-radius: 2px;
    background: rgba(0, 0, 0, 0.1);
    overflow: hidden;
}

.card-thumb img {
    width: 100%;
    height: 100%;
    object-fit: cover;
    filter: grayscale(1);
    opacity: 0.5;
}

.card-thumb.uploadable {
    cursor: pointer;
}

.card-actions {
    width: 100%;
    display: flex;
    flex-direction: column;
    gap: 16px;
}

.card-btn {
    width: 100%;
    padding: 16px 0;
    font-size: 10px;
    font-weight: 900;
    text-transform: uppercase;
    letter-spacing: 0.3em;
    text-align: center;
    border-radius: 4px;
    display: block;
    transition: filter 0.3s;
}

.card-btn:hover {
    filter: brightness(1.15);
}

.card-footnote {
    font-size: 9px;
    text-align: center;
    opacity: 0.4;
    font-family: ui-monospace, monospace;
    letter-spacing: -0.02em;
}

/* Tech stack */
.dna-stack {
    width: 100%;
    padding-left: 24px;
    padding-right: 24px;
}

.stack-inner {
    max-width: 1280px;
    margin: 0 auto;
}

.stack-header {
    text-align: center;
    margin-bottom: 64px;
}

.stack-title {
    font-size: 42px;
    font-weight: 900;
    text-transform: uppercase;
    margin: 0 0 24px 0;
    font-family: var(--dna-font-family);
}

.stack-desc {
    font-size: 18px;
    opacity: 0.5;
    max-width: 42rem;
    margin: 0 auto;
}

.stack-grid {
    display: flex;
    flex-wrap: wrap;
    justify-content: center;
    gap: 24px;
}

.stack-cell {
    flex: 1;
    min-width: 130px;
    max-width: 200px;
}

.stack-card {
    width: 100%;
    padding: 24px;
    border: 1px solid;
    display: flex;
    flex-direction: column;
    align-items: center;
    position: relative;
    overflow: hidden;
    backdrop-filter: blur(10px);
    cursor: pointer;
    transition: border-color 0.5s, background-color 0.5s, transform 0.5s;
    font-family: inherit;
}

.stack-card:hover {
    transform: translateY(-4px);
}

.stack-card-icon {
    margin-bottom: 16px;
    display: flex;
    justify-content: center;
    transform: scale(1.1);
    transition: color 0.5s, opacity 0.5s;
}

.stack-card-name {
    font-size: 11px;
    font-weight: 900;
    text-transform: uppercase;
    letter-spacing: 0.2em;
    text-align: center;
    transition: color 0.5s, opacity 0.5s;
}

.stack-card-count {
    font-size: 9px;
    font-weight: 700;
    text-transform: uppercase;
    letter-spacing: 0.1em;
    opacity: 0.2;
    margin-top: 8px;
}

.stack-panel {
    margin-top: 32px;
    padding: 32px;
    border: 2px solid;
}

.stack-panel-title {
    font-size: 24px;
    font-weight: 900;
    text-transform: uppercase;
    margin: 0 0 24px 0;
    font-family: var(--dna-font-family);
}

.stack-chips {
    display: flex;
    flex-wrap: wrap;
    gap: 12px;
}

.stack-chip {
    padding: 8px 16px;
    border: 1px solid;
    font-weight: 700;
    font-size: 14px;
    background: rgba(255, 255, 255, 0.05);
}

/* Shared keyframes */
@keyframes dna-spin {
    from { transform: rotate(0deg); }
    to { transform: rotate(360deg); }
}

@keyframes dna-pulse {
    0%, 100% { opacity: 0.3; }
    50% { opacity: 1; }
}
"#;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn token_css_reflects_the_tokens() {
        let mut tokens = DesignTokens::default();
        tokens.colors.accent = "#FF0044".into();
        tokens.spacing.unit = 18.0;
        let css = token_css(&tokens);
        assert!(css.contains("--dna-accent: #FF0044;"));
        assert!(css.contains("--dna-unit: 18px;"));
        assert!(css.starts_with(":root {"));
    }
}
