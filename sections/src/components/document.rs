//! Root document component - the complete HTML page.
//!
//! Composes the block list into a single document: generated token CSS,
//! the static section stylesheet, one component per block, and the page
//! script that wires the browser-side affordances (navigation guard,
//! category toggling, upload preview).

use leptos::prelude::*;

use super::{ArticleSection, FooterSection, HeroSection, IdentityCard, TechStack};
use crate::styles::{token_css, PAGE_CSS};
use crate::types::{DesignTokens, Page, Section};
use crate::RenderContext;

/// The complete HTML document for a page.
#[component]
pub fn PageDocument(page: Page, tokens: DesignTokens, ctx: RenderContext) -> impl IntoView {
    let css = format!("{}\n{}", token_css(&tokens), PAGE_CSS);

    view! {
        <html>
            <head>
                <meta charset="UTF-8" />
                <meta name="viewport" content="width=device-width, initial-scale=1" />
                <title>"Page Preview"</title>
                <style>{css}</style>
            </head>
            <body>
                <main>
                    {page
                        .blocks
                        .into_iter()
                        .map(|block| {
                            let id = block.id;
                            match block.section {
                                Section::Hero(overrides) => view! {
                                    <HeroSection
                                        id=id
                                        overrides=overrides
                                        tokens=tokens.clone()
                                        ctx=ctx.clone()
                                    />
                                }
                                .into_any(),
                                Section::Article(overrides) => view! {
                                    <ArticleSection
                                        id=id
                                        overrides=overrides
                                        tokens=tokens.clone()
                                    />
                                }
                                .into_any(),
                                Section::Footer(overrides) => view! {
                                    <FooterSection
                                        id=id
                                        overrides=overrides
                                        tokens=tokens.clone()
                                        ctx=ctx.clone()
                                    />
                                }
                                .into_any(),
                                Section::IdentityCard(overrides) => view! {
                                    <IdentityCard
                                        id=id
                                        overrides=overrides
                                        tokens=tokens.clone()
                                        ctx=ctx.clone()
                                    />
                                }
                                .into_any(),
                                Section::TechStack(overrides) => view! {
                                    <TechStack
                                        id=id
                                        overrides=overrides
                                        tokens=tokens.clone()
                                    />
                                }
                                .into_any(),
                            }
                        })
                        .collect::<Vec<_>>()}
                </main>
                <script>{PAGE_SCRIPT}</script>
            </body>
        </html>
    }
}

/// Browser-side wiring (navigation guard, category toggle, upload preview).
///
/// Guard markers and upload inputs only exist in preview-mode markup, so
/// the script is inert on published pages.
const PAGE_SCRIPT: &str = r#"
(() => {
  // 1. Navigation guard (constructor/preview mode)
  document.querySelectorAll('a[data-nav-guard]').forEach(a => {
      a.addEventListener('click', (e) => {
          e.preventDefault();
          console.info('Navigation blocked in constructor mode.');
      });
  });

  // 2. Tech stack: single-select toggle with toggle-off
  document.querySelectorAll('.dna-stack').forEach(scope => {
      const reset = () => {
          scope.querySelectorAll('.stack-card').forEach(b => {
              b.classList.remove('active');
              b.style.borderColor = '';
              b.style.backgroundColor = '';
              b.style.boxShadow = '';
          });
          scope.querySelectorAll('[data-panel-for]').forEach(p => {
              p.style.display = 'none';
          });
      };
      scope.querySelectorAll('.stack-card[data-category]').forEach(btn => {
          btn.addEventListener('click', () => {
              const wasActive = btn.classList.contains('active');
              reset();
              if (wasActive) return;
              const color = btn.dataset.color;
              btn.classList.add('active');
              btn.style.borderColor = color;
              btn.style.backgroundColor = color + '15';
              btn.style.boxShadow = '0 10px 30px -10px ' + color + '40';
              const panel = scope.querySelector('[data-panel-for="' + btn.dataset.category + '"]');
              if (panel) panel.style.display = 'block';
          });
      });
  });

  // 3. Identity card: upload trigger + local preview of the decoded file
  document.querySelectorAll('input[data-upload-input]').forEach(input => {
      const card = input.closest('.dna-card');
      if (!card) return;
      let activeSlot = null;
      card.querySelectorAll('[data-upload-slot]').forEach(slot => {
          slot.addEventListener('click', () => {
              activeSlot = slot;
              input.click();
          });
      });
      input.addEventListener('change', () => {
          const file = input.files && input.files[0];
          if (!file || !activeSlot) return;
          const reader = new FileReader();
          reader.onloadend = () => {
              const img = activeSlot.querySelector('img');
              if (img && reader.result) img.src = reader.result;
          };
          reader.readAsDataURL(file);
          input.value = '';
      });
  });
})();
"#;
