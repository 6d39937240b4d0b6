//! # sections-leptos
//!
//! Leptos SSR components for DNA-driven page sections.
//!
//! This crate renders the section blocks of a website-constructor page -
//! hero banner, article, footer, identity card, tech stack - from two
//! inputs: the global design-system tokens (the "DNA") and each block's
//! sparse local overrides. Rendering is a pure function: the same tokens,
//! overrides, viewport, and language always produce the same HTML.
//!
//! ## Features
//!
//! - **Zero JavaScript Runtime** - Pure SSR; a small static page script
//!   wires the in-browser affordances (navigation guard, category toggle,
//!   upload preview)
//! - **Component-Based** - One Leptos component per section
//! - **Type-Safe** - Named token fields instead of positional parameter
//!   groups; sparse overrides as typed records
//!
//! ## Quick Start
//!
//! ```rust
//! use sections_leptos::{render_page, RenderContext};
//! use sections_leptos::types::{Block, DesignTokens, HeroOverrides, Page, Section};
//!
//! let page = Page {
//!     blocks: vec![Block {
//!         id: "hero-01".into(),
//!         section: Section::Hero(HeroOverrides::default()),
//!     }],
//! };
//!
//! let html = render_page(&page, &DesignTokens::default(), &RenderContext::default());
//! assert!(html.starts_with("<!DOCTYPE html>"));
//!
//! // Write to file
//! // std::fs::write("page.html", html).unwrap();
//! ```
//!
//! ## Architecture
//!
//! - [`types`] - design tokens, sparse overrides, the page model
//! - [`resolve`] - the precedence rules (three-tier fallback, typography
//!   bundle, motion config, viewport mode, media placement)
//! - [`components`] - Leptos UI components
//! - [`styles`] - CSS constants and the generated token sheet
//! - [`store`] - the settings store and its override-write entrypoint
//! - [`upload`] - image-slot upload completion
//! - [`selection`] - ephemeral category selection
//!
//! ## Leptos 0.8 SSR
//!
//! Rendering uses Leptos 0.8's `RenderHtml` trait - no reactive runtime or
//! hydration, pure static HTML generation:
//!
//! ```rust,ignore
//! use leptos::tachys::view::RenderHtml;
//!
//! let view = view! { <MyComponent /> };
//! let html: String = view.to_html();
//! ```

#![doc(html_root_url = "https://docs.rs/sections-leptos/0.4.2")]
#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod components;
pub mod resolve;
pub mod selection;
pub mod store;
pub mod styles;
pub mod types;
pub mod upload;

use components::PageDocument;
use leptos::prelude::*;
use leptos::tachys::view::RenderHtml;
use resolve::Viewport;
use types::{DesignTokens, Page};

/// Everything a render pass needs besides the page itself: the viewport,
/// the language tag, and whether the page is being edited.
///
/// Passed explicitly into every component - there is no ambient store
/// lookup during rendering.
#[derive(Clone, Debug)]
pub struct RenderContext {
    /// Observed width plus the store's viewport-mode flag.
    pub viewport: Viewport,
    /// Language tag; empty or `"en"` means source-language passthrough.
    pub lang: String,
    /// Constructor/preview mode: navigation is guarded and upload
    /// affordances are active. Published pages render plain markup.
    pub preview: bool,
}

impl Default for RenderContext {
    fn default() -> Self {
        Self {
            viewport: Viewport::default(),
            lang: "en".into(),
            preview: true,
        }
    }
}

impl RenderContext {
    /// A published (non-preview) context.
    pub fn published() -> Self {
        Self {
            preview: false,
            ..Default::default()
        }
    }

    /// Replace the viewport.
    pub fn with_viewport(mut self, viewport: Viewport) -> Self {
        self.viewport = viewport;
        self
    }

    /// Replace the language tag.
    pub fn with_lang(mut self, lang: impl Into<String>) -> Self {
        self.lang = lang.into();
        self
    }
}

/// Render a complete HTML page from a block list.
///
/// This is the main entry point. Style resolution happens synchronously
/// inside each component on every call; nothing is memoized or persisted,
/// so repeated calls with the same inputs are idempotent.
///
/// # Example
///
/// ```rust
/// use sections_leptos::{render_page, RenderContext};
/// use sections_leptos::types::{Block, DesignTokens, Page, Section, TechStackOverrides};
///
/// let page = Page {
///     blocks: vec![Block {
///         id: "stack-01".into(),
///         section: Section::TechStack(TechStackOverrides::default()),
///     }],
/// };
/// let html = render_page(&page, &DesignTokens::default(), &RenderContext::default());
/// assert!(html.contains("Technology Stack"));
/// ```
pub fn render_page(page: &Page, tokens: &DesignTokens, ctx: &RenderContext) -> String {
    let doc = view! {
        <PageDocument page=page.clone() tokens=tokens.clone() ctx=ctx.clone() />
    };

    let html = doc.to_html();

    // Leptos doesn't include DOCTYPE, so we add it
    format!("<!DOCTYPE html>\n{}", html)
}

#[cfg(test)]
mod tests {
    use super::*;
    use resolve::ViewportMode;
    use types::{
        ArticleData, ArticleOverrides, ArticleVariant, Block, FooterOverrides, HeroData,
        HeroOverrides, IdentityOverrides, Section, TechStackOverrides, TextMap,
    };

    fn full_page() -> Page {
        Page {
            blocks: vec![
                Block {
                    id: "hero-01".into(),
                    section: Section::Hero(HeroOverrides::default()),
                },
                Block {
                    id: "article-01".into(),
                    section: Section::Article(ArticleOverrides {
                        data: Some(ArticleData {
                            texts: TextMap::from_pairs([
                                ("subtitle", "Manifesto"),
                                ("title", "Built From Tokens"),
                                ("body", "Every attribute resolves on its own."),
                            ]),
                        }),
                        ..Default::default()
                    }),
                },
                Block {
                    id: "card-01".into(),
                    section: Section::IdentityCard(IdentityOverrides::default()),
                },
                Block {
                    id: "stack-01".into(),
                    section: Section::TechStack(TechStackOverrides::default()),
                },
                Block {
                    id: "footer-01".into(),
                    section: Section::Footer(FooterOverrides::default()),
                },
            ],
        }
    }

    #[test]
    fn renders_empty_page() {
        let html = render_page(
            &Page::default(),
            &DesignTokens::default(),
            &RenderContext::default(),
        );
        assert!(html.starts_with("<!DOCTYPE html>"));
        assert!(html.contains("<html"));
        assert!(html.contains("--dna-accent"));
    }

    #[test]
    fn renders_every_section_kind() {
        let html = render_page(
            &full_page(),
            &DesignTokens::default(),
            &RenderContext::default(),
        );

        assert!(html.contains("DESIGN DRIVEN BY DNA"));
        assert!(html.contains("Built From Tokens"));
        assert!(html.contains("IDENTITY PROFILE"));
        assert!(html.contains("Technology Stack"));
        assert!(html.contains("Privacy Policy"));
    }

    #[test]
    fn preview_mode_guards_navigation_and_enables_upload() {
        let html = render_page(
            &full_page(),
            &DesignTokens::default(),
            &RenderContext::default(),
        );
        // Attribute-with-value forms, so the selectors inside the page
        // script don't satisfy the assertion on their own.
        assert!(html.contains("data-nav-guard=\"true\""));
        assert!(html.contains("data-upload-slot=\"1\""));
        assert!(html.contains("data-upload-input=\"card-01\""));
    }

    #[test]
    fn published_mode_renders_inert_markup() {
        let html = render_page(
            &full_page(),
            &DesignTokens::default(),
            &RenderContext::published(),
        );
        assert!(!html.contains("data-nav-guard=\"true\""));
        assert!(!html.contains("data-upload-slot=\"1\""));
        assert!(!html.contains("data-upload-input=\"card-01\""));
    }

    #[test]
    fn forced_mobile_switches_the_hero_layout() {
        let ctx = RenderContext::default()
            .with_viewport(Viewport::new(None, ViewportMode::ForcedMobile));
        let html = render_page(&full_page(), &DesignTokens::default(), &ctx);
        // Mobile pins the hero title size and stacks the inner column.
        assert!(html.contains("font-size:3.5rem"));
        assert!(html.contains("flex-direction:column"));
    }

    #[test]
    fn translation_flows_into_the_hero() {
        let mut data = HeroData::default();
        data.texts.insert("title", "Hello");
        data.texts.insert("title_fr", "Bonjour");
        let page = Page {
            blocks: vec![Block {
                id: "hero-01".into(),
                section: Section::Hero(HeroOverrides {
                    data: Some(data),
                    ..Default::default()
                }),
            }],
        };

        let en = render_page(
            &page,
            &DesignTokens::default(),
            &RenderContext::default(),
        );
        assert!(en.contains("Hello"));
        assert!(!en.contains("Bonjour"));

        let fr = render_page(
            &page,
            &DesignTokens::default(),
            &RenderContext::default().with_lang("fr"),
        );
        assert!(fr.contains("Bonjour"));
    }

    #[test]
    fn loader_variant_renders_the_sync_face() {
        let page = Page {
            blocks: vec![Block {
                id: "article-02".into(),
                section: Section::Article(ArticleOverrides {
                    variant: ArticleVariant::Loader,
                    ..Default::default()
                }),
            }],
        };
        let html = render_page(
            &page,
            &DesignTokens::default(),
            &RenderContext::default(),
        );
        assert!(html.contains("LOADING DATA..."));
        assert!(html.contains("loader-spinner"));
    }

    #[test]
    fn token_accent_reaches_rendered_styles() {
        let mut tokens = DesignTokens::default();
        tokens.colors.accent = "#C2185B".into();
        let html = render_page(&full_page(), &tokens, &RenderContext::default());
        assert!(html.contains("#C2185B"));
    }
}
