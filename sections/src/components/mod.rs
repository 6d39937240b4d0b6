//! Leptos UI components for the page sections.
//!
//! Each section is a Leptos `#[component]` function, a pure function of
//! its inputs: the block's sparse overrides, the global design tokens,
//! and the render context (viewport, language, preview flag). Components
//! compute their resolved presentation up front and emit a `view!` tree
//! with `format!`-built inline styles for everything token-driven.
//!
//! # Component hierarchy
//!
//! ```text
//! PageDocument
//! ├── HeroSection      (typography/motion/media resolution)
//! ├── ArticleSection   (standard + loader variants)
//! ├── FooterSection    (guarded nav links)
//! ├── IdentityCard     (image slots, upload affordances)
//! └── TechStack        (category cards + detail panel)
//! ```

mod article;
mod document;
mod footer;
mod hero;
mod icons;
mod identity_card;
mod nav_guard;
mod tech_stack;

pub use article::ArticleSection;
pub use document::PageDocument;
pub use footer::FooterSection;
pub use hero::HeroSection;
pub use icons::{CategoryIcon, UploadIcon};
pub use identity_card::IdentityCard;
pub use nav_guard::GuardedLink;
pub use tech_stack::TechStack;
