//! Data model for pages, blocks, and the design DNA.
//!
//! These types define everything a render pass consumes. They're designed
//! to be:
//!
//! - **Serializable** - page documents and token sets travel as JSON
//! - **Clone-friendly** - components can share data without borrowing issues
//! - **Default-able** - a bare [`DesignTokens::default()`] renders a
//!   complete page; sparse overrides use `..Default::default()`
//!
//! Design tokens are named fields, never positional lists: the schema
//! cannot be partially populated or reordered out from under a consumer,
//! and a missing group is unrepresentable.
//!
//! # Example
//!
//! ```rust
//! use sections_leptos::types::{Block, HeroOverrides, HeroStyle, Page, Section};
//!
//! let page = Page {
//!     blocks: vec![Block {
//!         id: "hero-01".into(),
//!         section: Section::Hero(HeroOverrides {
//!             style: Some(HeroStyle {
//!                 title_color: Some("#F4F4F5".into()),
//!                 ..Default::default()
//!             }),
//!             ..Default::default()
//!         }),
//!     }],
//! };
//! assert_eq!(page.blocks.len(), 1);
//! ```

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Number of image slots on an identity card. The slot list is replaced by
/// index and never resized.
pub const IMAGE_SLOTS: usize = 3;

// ---------------------------------------------------------------------------
// Design tokens ("DNA")
// ---------------------------------------------------------------------------

/// The complete set of design-system tokens a page falls back to when a
/// block carries no local override.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct DesignTokens {
    /// Typography group (title weight/spacing, casing, base font).
    pub typography: TypographyTokens,
    /// Color group (accent, text tiers, borders).
    pub colors: ColorTokens,
    /// Spacing group (base unit, section padding).
    pub spacing: SpacingTokens,
    /// Button group (scale, padding, stroke, radius, shadow).
    pub buttons: ButtonTokens,
    /// Effect group (media shadows, hairline borders).
    pub effects: EffectTokens,
    /// Corner radius group.
    pub radius: RadiusTokens,
    /// Entrance animation group.
    pub animation: AnimationTokens,
}

/// Typography tokens.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(default)]
pub struct TypographyTokens {
    /// Base font family applied to every section.
    pub font_family: String,
    /// CSS font-weight for titles.
    pub title_weight: String,
    /// Title letter spacing in `em`.
    pub title_spacing: f32,
    /// Force titles to uppercase.
    pub uppercase: bool,
    /// Antialiased font smoothing.
    pub antialias: bool,
}

impl Default for TypographyTokens {
    fn default() -> Self {
        Self {
            font_family: "Inter".into(),
            title_weight: "800".into(),
            title_spacing: -0.03,
            uppercase: false,
            antialias: true,
        }
    }
}

/// Color tokens. Values are CSS colors; hex values may be suffixed with a
/// two-digit alpha when composed into borders and glows.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(default)]
pub struct ColorTokens {
    /// Accent used for primary buttons, selection states and card chrome.
    pub accent: String,
    /// Primary text color (titles).
    pub text_primary: String,
    /// Secondary text color (body copy, descriptions).
    pub text_secondary: String,
    /// Border base color.
    pub border: String,
}

impl Default for ColorTokens {
    fn default() -> Self {
        Self {
            accent: "#3B82F6".into(),
            text_primary: "#ffffff".into(),
            text_secondary: "#A1A1AA".into(),
            border: "#52525B".into(),
        }
    }
}

/// Spacing tokens, in pixels.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(default)]
pub struct SpacingTokens {
    /// Base sizing unit exposed to the stylesheet as `--dna-unit`.
    pub unit: f32,
    /// Default horizontal section padding.
    pub padding_x: f32,
    /// Default vertical section padding.
    pub padding_y: f32,
}

impl Default for SpacingTokens {
    fn default() -> Self {
        Self {
            unit: 16.0,
            padding_x: 80.0,
            padding_y: 96.0,
        }
    }
}

/// Button tokens. Padding and font size are multiplied by `scale` when a
/// button is rendered.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(default)]
pub struct ButtonTokens {
    /// Uniform size multiplier.
    pub scale: f32,
    /// Horizontal padding in px (pre-scale).
    pub pad_x: f32,
    /// Vertical padding in px (pre-scale).
    pub pad_y: f32,
    /// Label font size in px (pre-scale).
    pub font_size: f32,
    /// Border stroke width in px (secondary buttons).
    pub stroke: f32,
    /// Corner radius in px.
    pub radius: f32,
    /// Drop shadow under primary buttons.
    pub shadow: bool,
}

impl Default for ButtonTokens {
    fn default() -> Self {
        Self {
            scale: 1.0,
            pad_x: 28.0,
            pad_y: 14.0,
            font_size: 13.0,
            stroke: 1.0,
            radius: 8.0,
            shadow: true,
        }
    }
}

/// Effect tokens for media framing.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(default)]
pub struct EffectTokens {
    /// Vertical shadow offset under split-layout media, in px.
    pub shadow_offset: f32,
    /// Shadow blur radius in px.
    pub shadow_blur: f32,
    /// Hairline border width around media, in px.
    pub border_width: f32,
}

impl Default for EffectTokens {
    fn default() -> Self {
        Self {
            shadow_offset: 10.0,
            shadow_blur: 40.0,
            border_width: 1.0,
        }
    }
}

/// Corner radius tokens, in pixels.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(default)]
pub struct RadiusTokens {
    /// Radius for panels and cards.
    pub panel: f32,
    /// Radius for small inline elements (thumbnails, chips).
    pub small: f32,
}

impl Default for RadiusTokens {
    fn default() -> Self {
        Self {
            panel: 16.0,
            small: 6.0,
        }
    }
}

/// Entrance animation tokens.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(default)]
pub struct AnimationTokens {
    /// Entrance duration in seconds.
    pub duration: f32,
    /// Delay between staggered siblings, in seconds.
    pub stagger: f32,
    /// Vertical entrance offset in px.
    pub entrance_y: f32,
    /// Initial scale factor.
    pub scale: f32,
    /// Initial blur in px.
    pub blur: f32,
}

impl Default for AnimationTokens {
    fn default() -> Self {
        Self {
            duration: 0.8,
            stagger: 0.12,
            entrance_y: 24.0,
            scale: 0.96,
            blur: 8.0,
        }
    }
}

// ---------------------------------------------------------------------------
// Translatable text
// ---------------------------------------------------------------------------

/// Ordered map of translatable text fields.
///
/// The key `k` holds the source-language text; `k_<lang>` holds the
/// translation for `<lang>`. Lookup falls back from the suffixed key to the
/// source key to the empty string - a missing translation silently degrades
/// to source-language text.
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct TextMap(pub BTreeMap<String, String>);

impl TextMap {
    /// Source-language text for `key`, or `""`.
    pub fn get(&self, key: &str) -> &str {
        self.0.get(key).map(String::as_str).unwrap_or("")
    }

    /// Text for `key` in `lang`.
    ///
    /// An empty tag or `"en"` means source-language passthrough: the base
    /// key is returned even if a `key_en` entry exists.
    pub fn translated(&self, key: &str, lang: &str) -> &str {
        if lang.is_empty() || lang == "en" {
            return self.get(key);
        }
        let suffixed = format!("{key}_{lang}");
        let result = self
            .0
            .get(&suffixed)
            .or_else(|| self.0.get(key))
            .map(String::as_str)
            .unwrap_or("");
        tracing::trace!(key, lang, %suffixed, result, "translation lookup");
        result
    }

    /// Insert or replace an entry.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.0.insert(key.into(), value.into());
    }

    /// Build a map from `(key, value)` pairs.
    pub fn from_pairs<K, V>(pairs: impl IntoIterator<Item = (K, V)>) -> Self
    where
        K: Into<String>,
        V: Into<String>,
    {
        Self(
            pairs
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        )
    }
}

// ---------------------------------------------------------------------------
// Shared override sub-records
// ---------------------------------------------------------------------------

/// Typography override bundle.
///
/// Resolves as a unit: unless `use_global` is explicitly `false`, the whole
/// computed default bundle applies verbatim and every other field here is
/// ignored. See [`crate::resolve::resolve_typography`].
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct TypoOverride {
    /// `Some(false)` opts this element out of the default bundle.
    pub use_global: Option<bool>,
    /// Font size in px.
    pub font_size: Option<f32>,
    /// CSS font-weight.
    pub font_weight: Option<String>,
    /// Letter spacing in em.
    pub letter_spacing: Option<f32>,
    /// CSS line-height.
    pub line_height: Option<String>,
    /// Force uppercase; unset falls back to the global uppercase token.
    pub uppercase: Option<bool>,
}

/// Entrance animation override.
///
/// When `use_global` is `false`, `duration`/`stagger`/`entrance_y` are taken
/// from here unconditionally while `scale`/`blur` still fall back to the
/// global tokens. See [`crate::resolve::resolve_motion`].
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct MotionOverride {
    /// `Some(false)` switches the block to this local config.
    pub use_global: Option<bool>,
    /// Entrance duration in seconds.
    pub duration: Option<f32>,
    /// Delay between staggered siblings, in seconds.
    pub stagger: Option<f32>,
    /// Vertical entrance offset in px.
    pub entrance_y: Option<f32>,
    /// Initial scale factor.
    pub scale: Option<f32>,
    /// Initial blur in px.
    pub blur: Option<f32>,
}

/// Where a hero image sits relative to the text column.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MediaPosition {
    /// Image column left of the text.
    Left,
    /// Image column right of the text.
    #[default]
    Right,
    /// Image stacked above the text.
    Top,
    /// Image stacked below the text.
    Bottom,
    /// Full-bleed background behind the text. Desktop only; on mobile the
    /// image stacks on top instead.
    Background,
}

/// Aspect/crop preset for media.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MediaShape {
    /// 1:1 crop, square corners.
    #[default]
    Square,
    /// 1:1 crop, fully rounded.
    Circle,
    /// 3:4 crop.
    Portrait,
    /// 16:9 crop.
    Landscape,
}

/// Hero media override.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct MediaOverride {
    /// Master switch; without it no image renders at all.
    pub show_image: bool,
    /// Image source URL (plain or `data:`).
    pub image_url: Option<String>,
    /// Placement relative to the text column.
    pub image_position: Option<MediaPosition>,
    /// Opacity percentage, 0-100.
    pub image_opacity: Option<f32>,
    /// Scale percentage applied to the image inside its frame.
    pub image_scale: Option<f32>,
    /// Aspect/crop preset; unset picks a position-dependent default.
    pub shape: Option<MediaShape>,
    /// Slow vertical float on desktop.
    pub levitation: bool,
    /// Levitation period in seconds.
    pub levitation_speed: Option<f32>,
}

/// Background lock: pins the section background to a fixed color regardless
/// of the style override.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct BackgroundOverride {
    /// Engage the lock.
    pub lock_background: bool,
    /// The pinned background color.
    pub fixed_color: Option<String>,
}

/// Local button styling, used when a block opts out of the global button
/// tokens. The record substitutes as a whole: an absent record means the
/// stock bundle below, and fields missing from a supplied record take the
/// stock values.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ButtonStyleOverride {
    /// Uniform size multiplier.
    pub scale: f32,
    /// Horizontal padding in px (pre-scale).
    pub pad_x: f32,
    /// Vertical padding in px (pre-scale).
    pub pad_y: f32,
    /// Label font size in px (pre-scale).
    pub font_size: f32,
    /// Border stroke width in px.
    pub stroke: f32,
    /// Corner radius in px.
    pub radius: f32,
    /// Drop shadow under primary buttons.
    pub shadow: bool,
}

impl Default for ButtonStyleOverride {
    fn default() -> Self {
        Self {
            scale: 1.0,
            pad_x: 24.0,
            pad_y: 12.0,
            font_size: 12.0,
            stroke: 1.0,
            radius: 4.0,
            shadow: false,
        }
    }
}

/// Horizontal alignment of hero content.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Alignment {
    /// Left-aligned text and actions.
    Left,
    /// Centered text and actions.
    #[default]
    Center,
}

impl Alignment {
    /// CSS `text-align` value.
    pub fn as_css(self) -> &'static str {
        match self {
            Alignment::Left => "left",
            Alignment::Center => "center",
        }
    }
}

/// CSS text alignment for article bodies.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TextAlign {
    /// Left-aligned body copy.
    #[default]
    Left,
    /// Centered body copy.
    Center,
    /// Right-aligned body copy.
    Right,
}

impl TextAlign {
    /// CSS `text-align` value.
    pub fn as_css(self) -> &'static str {
        match self {
            TextAlign::Left => "left",
            TextAlign::Center => "center",
            TextAlign::Right => "right",
        }
    }
}

// ---------------------------------------------------------------------------
// Hero
// ---------------------------------------------------------------------------

/// Hero content. Text fields live in [`TextMap`] so they can carry
/// per-language variants (`title`, `title_fr`, ...).
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(default)]
pub struct HeroData {
    /// Translatable text: `title`, `description`, `primary_btn`,
    /// `secondary_btn`.
    pub texts: TextMap,
    /// Hide the primary button with `Some(false)`.
    pub primary_btn_visible: Option<bool>,
    /// Hide the secondary button with `Some(false)`.
    pub secondary_btn_visible: Option<bool>,
    /// Title typography bundle.
    pub title_typo: Option<TypoOverride>,
    /// Description typography bundle.
    pub description_typo: Option<TypoOverride>,
}

impl Default for HeroData {
    fn default() -> Self {
        Self {
            texts: TextMap::from_pairs([
                ("title", "DESIGN DRIVEN BY DNA"),
                (
                    "description",
                    "Configure your interface through global genetic parameters or local overrides.",
                ),
                ("primary_btn", "Get Started"),
                ("secondary_btn", "Documentation"),
            ]),
            primary_btn_visible: None,
            secondary_btn_visible: None,
            title_typo: None,
            description_typo: None,
        }
    }
}

/// Hero layout override.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct HeroLayout {
    /// CSS min-height of the section.
    pub height: Option<String>,
    /// Horizontal alignment of the text column.
    pub alignment: Option<Alignment>,
    /// Horizontal padding in px (desktop).
    pub padding_x: Option<f32>,
    /// Vertical padding in px (desktop).
    pub padding_y: Option<f32>,
}

/// Hero style override. Each color resolves independently;
/// `text_color` is a shared fallback for both title and description.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct HeroStyle {
    /// Title color.
    pub title_color: Option<String>,
    /// Description color.
    pub desc_color: Option<String>,
    /// Shared fallback for title and description.
    pub text_color: Option<String>,
    /// Section background fill.
    pub bg_fill: Option<String>,
}

/// Sparse hero override record. Any absent field inherits the global DNA.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct HeroOverrides {
    /// Content and per-element typography.
    pub data: Option<HeroData>,
    /// Height, alignment, padding.
    pub layout: Option<HeroLayout>,
    /// Colors and background fill.
    pub style: Option<HeroStyle>,
    /// Image placement and framing.
    pub media: Option<MediaOverride>,
    /// Entrance animation config.
    pub animation: Option<MotionOverride>,
    /// Background lock.
    pub background: Option<BackgroundOverride>,
    /// `Some(false)` opts the block out of the global button tokens.
    pub btn_use_global: Option<bool>,
    /// Local button bundle used when opted out.
    pub btn_styles: Option<ButtonStyleOverride>,
}

// ---------------------------------------------------------------------------
// Article
// ---------------------------------------------------------------------------

/// Which face the article block shows.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ArticleVariant {
    /// Subtitle / title / body copy.
    #[default]
    Standard,
    /// Sync spinner with a status caption, shown while block content loads.
    Loader,
}

/// Article content (`subtitle`, `title`, `body`).
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ArticleData {
    /// Text fields: `subtitle`, `title`, `body`.
    pub texts: TextMap,
}

/// Article layout override.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ArticleLayout {
    pub padding_y: Option<f32>,
    pub max_width: Option<f32>,
    pub text_align: Option<TextAlign>,
}

/// Article style override.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ArticleStyle {
    /// Section background (loader variant).
    pub background_color: Option<String>,
    /// Body font size in px.
    pub font_size: Option<f32>,
    /// Unitless body line-height.
    pub line_height: Option<f32>,
}

/// Sparse article override record.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ArticleOverrides {
    /// Which face to render.
    pub variant: ArticleVariant,
    /// Text content.
    pub data: Option<ArticleData>,
    /// Width, alignment, padding.
    pub layout: Option<ArticleLayout>,
    /// Colors and body sizing.
    pub style: Option<ArticleStyle>,
}

// ---------------------------------------------------------------------------
// Footer
// ---------------------------------------------------------------------------

/// A footer navigation link.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct FooterLink {
    /// Visible label.
    pub label: String,
    /// Target URL.
    pub url: String,
    /// External links open in a new tab and are never navigation-guarded.
    pub external: bool,
}

impl FooterLink {
    /// An internal (guarded) link.
    pub fn new(label: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            url: url.into(),
            external: false,
        }
    }
}

/// Footer content.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct FooterData {
    /// Company line; also printed in the copyright notice.
    pub company_name: Option<String>,
    /// Optional suffix for the company line.
    pub tagline: Option<String>,
    /// Navigation links; unset renders the stock set.
    pub links: Option<Vec<FooterLink>>,
}

/// Footer layout override.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct FooterLayout {
    /// Top padding in px.
    pub padding_top: Option<f32>,
    /// Bottom padding in px.
    pub padding_bottom: Option<f32>,
}

/// Footer style override. `bg_fill` and `background` are aliases from two
/// generations of the editing UI; `bg_fill` wins when both are set.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct FooterStyle {
    /// Background fill (preferred alias).
    pub bg_fill: Option<String>,
    /// Background fill (legacy alias).
    pub background: Option<String>,
    /// Footer text color.
    pub text_color: Option<String>,
}

/// Sparse footer override record.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct FooterOverrides {
    /// Links and company line.
    pub data: Option<FooterData>,
    /// Vertical padding.
    pub layout: Option<FooterLayout>,
    /// Colors.
    pub style: Option<FooterStyle>,
}

// ---------------------------------------------------------------------------
// Identity card
// ---------------------------------------------------------------------------

/// One of the three image slots on an identity card.
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct ImageSlot {
    /// Image source URL (plain or `data:`).
    pub url: String,
    /// Crop preset; `Circle` rounds the slot fully.
    pub shape: MediaShape,
}

/// An action button on an identity card.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct CardButton {
    /// Visible label.
    pub label: String,
    /// Target URL; guarded in preview mode.
    pub url: String,
}

/// Identity card content.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(default)]
pub struct IdentityData {
    /// Card heading.
    pub title: Option<String>,
    /// Classification line.
    pub subtitle: Option<String>,
    /// Exactly [`IMAGE_SLOTS`] entries; slot 1 is the primary portrait.
    pub images: Option<Vec<ImageSlot>>,
    /// Action buttons.
    pub buttons: Option<Vec<CardButton>>,
    /// Footer text line.
    pub text: Option<String>,
}

impl IdentityData {
    /// The stock three-slot list used when no override is present.
    pub fn stock_images() -> Vec<ImageSlot> {
        vec![
            ImageSlot {
                url: "https://placehold.co/100".into(),
                shape: MediaShape::Circle,
            },
            ImageSlot {
                url: "https://placehold.co/100x100".into(),
                shape: MediaShape::Square,
            },
            ImageSlot {
                url: "https://placehold.co/100".into(),
                shape: MediaShape::Circle,
            },
        ]
    }
}

impl Default for IdentityData {
    fn default() -> Self {
        Self {
            title: Some("IDENTITY PROFILE".into()),
            subtitle: Some("Digital Access Card".into()),
            images: Some(Self::stock_images()),
            buttons: Some(vec![CardButton {
                label: "Contact".into(),
                url: "#".into(),
            }]),
            text: Some("Identity Block V1.0".into()),
        }
    }
}

/// Identity card layout override. Sizes in px unless noted.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct IdentityLayout {
    /// Section vertical padding.
    pub padding_y: Option<f32>,
    /// Card heading size.
    pub title_size: Option<f32>,
    /// Classification value size.
    pub subtitle_size: Option<f32>,
    /// Footer text line size.
    pub text_size: Option<f32>,
    /// Unitless line-height for the footer text line.
    pub text_line_height: Option<f32>,
    /// Letter spacing in em for the footer text line.
    pub text_spacing: Option<f32>,
}

/// Identity card style override.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct IdentityStyle {
    /// Card background fill.
    pub bg_fill: Option<String>,
}

/// Sparse identity card override record.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct IdentityOverrides {
    /// Content: images, buttons, text lines.
    pub data: Option<IdentityData>,
    /// Sizing.
    pub layout: Option<IdentityLayout>,
    /// Colors.
    pub style: Option<IdentityStyle>,
}

// ---------------------------------------------------------------------------
// Tech stack
// ---------------------------------------------------------------------------

/// A technology category card.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Category {
    /// Stable identifier used by the selection state.
    pub id: String,
    /// Display name.
    pub name: String,
    /// Icon key: `code`, `database`, `palette`, `zap`, `cloud`, `shield`.
    /// Unknown keys fall back to `code`.
    pub icon: String,
    /// Tint color for the card and its detail panel.
    pub color: String,
    /// Technology names listed in the detail panel.
    pub technologies: Vec<String>,
}

impl Category {
    fn new(
        id: &str,
        name: &str,
        icon: &str,
        color: &str,
        technologies: &[&str],
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            icon: icon.into(),
            color: color.into(),
            technologies: technologies.iter().map(|t| (*t).into()).collect(),
        }
    }
}

/// Tech-stack content.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(default)]
pub struct TechStackData {
    /// Section heading.
    pub title: Option<String>,
    /// Subheading under the title.
    pub description: Option<String>,
    /// Category cards; unset renders the stock set.
    pub categories: Option<Vec<Category>>,
}

impl Default for TechStackData {
    fn default() -> Self {
        Self {
            title: Some("Technology Stack".into()),
            description: Some(
                "Cutting-edge tools and frameworks powering our solutions".into(),
            ),
            categories: Some(vec![
                Category::new(
                    "frontend",
                    "Frontend",
                    "code",
                    "#3B82F6",
                    &["React", "Next.js", "TypeScript", "Tailwind CSS", "Framer Motion"],
                ),
                Category::new(
                    "backend",
                    "Backend",
                    "database",
                    "#10B981",
                    &["Node.js", "Python", "PostgreSQL", "MongoDB", "Redis"],
                ),
                Category::new(
                    "design",
                    "Design",
                    "palette",
                    "#F59E0B",
                    &["Figma", "Adobe XD", "Sketch", "Blender", "After Effects"],
                ),
                Category::new(
                    "devops",
                    "DevOps",
                    "cloud",
                    "#8B5CF6",
                    &["Docker", "Kubernetes", "AWS", "Vercel", "GitHub Actions"],
                ),
                Category::new(
                    "tools",
                    "Tools",
                    "zap",
                    "#EC4899",
                    &["Git", "VS Code", "Postman", "Jira", "Notion"],
                ),
                Category::new(
                    "security",
                    "Security",
                    "shield",
                    "#EF4444",
                    &["OAuth", "JWT", "SSL/TLS", "OWASP", "Cloudflare"],
                ),
            ]),
        }
    }
}

/// Tech-stack layout override.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct TechStackLayout {
    /// Section vertical padding.
    pub padding_y: Option<f32>,
}

/// Sparse tech-stack override record.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct TechStackOverrides {
    /// Heading and categories.
    pub data: Option<TechStackData>,
    /// Vertical padding.
    pub layout: Option<TechStackLayout>,
}

// ---------------------------------------------------------------------------
// Page model
// ---------------------------------------------------------------------------

/// A page section with its local overrides.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Section {
    /// Hero banner.
    Hero(HeroOverrides),
    /// Article block.
    Article(ArticleOverrides),
    /// Page footer.
    Footer(FooterOverrides),
    /// Identity card.
    IdentityCard(IdentityOverrides),
    /// Tech-stack showcase.
    TechStack(TechStackOverrides),
}

/// One block instance on a page.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Block {
    /// Stable block identifier, also used as the DOM id.
    pub id: String,
    /// The section kind and its overrides.
    #[serde(flatten)]
    pub section: Section,
}

/// A page document: an ordered list of blocks.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Page {
    /// Blocks in render order.
    pub blocks: Vec<Block>,
}

impl Page {
    /// Find a block by id.
    pub fn block(&self, id: &str) -> Option<&Block> {
        self.blocks.iter().find(|b| b.id == id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn translated_passes_through_for_en() {
        let texts = TextMap::from_pairs([("title", "Source"), ("title_en", "Shadowed")]);
        assert_eq!(texts.translated("title", "en"), "Source");
        assert_eq!(texts.translated("title", ""), "Source");
    }

    #[test]
    fn translated_falls_back_to_source() {
        let texts = TextMap::from_pairs([("title", "Source")]);
        assert_eq!(texts.translated("title", "fr"), "Source");
    }

    #[test]
    fn translated_prefers_suffixed_key() {
        let texts = TextMap::from_pairs([("title", "Source"), ("title_fr", "Origine")]);
        assert_eq!(texts.translated("title", "fr"), "Origine");
    }

    #[test]
    fn translated_missing_everywhere_is_empty() {
        let texts = TextMap::default();
        assert_eq!(texts.translated("title", "fr"), "");
    }

    #[test]
    fn page_round_trips_through_json() {
        let page = Page {
            blocks: vec![
                Block {
                    id: "hero-01".into(),
                    section: Section::Hero(HeroOverrides::default()),
                },
                Block {
                    id: "footer-01".into(),
                    section: Section::Footer(FooterOverrides {
                        data: Some(FooterData {
                            company_name: Some("Acme".into()),
                            ..Default::default()
                        }),
                        ..Default::default()
                    }),
                },
            ],
        };

        let json = serde_json::to_string(&page).unwrap();
        assert!(json.contains("\"kind\":\"hero\""));
        let back: Page = serde_json::from_str(&json).unwrap();
        assert_eq!(back.blocks.len(), 2);
        assert_eq!(back.blocks[1].id, "footer-01");
    }

    #[test]
    fn sparse_override_deserializes_with_defaults() {
        let ovr: HeroOverrides =
            serde_json::from_str(r##"{"style": {"title_color": "#fff"}}"##).unwrap();
        assert_eq!(ovr.style.as_ref().unwrap().title_color.as_deref(), Some("#fff"));
        assert!(ovr.data.is_none());
        assert!(ovr.btn_use_global.is_none());
    }

    #[test]
    fn stock_images_has_three_slots() {
        assert_eq!(IdentityData::stock_images().len(), IMAGE_SLOTS);
    }
}
