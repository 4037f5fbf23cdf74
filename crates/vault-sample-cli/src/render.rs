//! Code block dispatch: find fenced blocks in a note and hand each one to the
//! processor registered for its language tag.

use pulldown_cmark::{CodeBlockKind, Event, Parser, Tag, TagEnd};
use relative_path::RelativePathBuf;
use vault_sample_plugin::{Element, ProcessorContext, Registry};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FencedBlock {
    pub language: String,
    pub source: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedBlock {
    pub language: String,
    pub html: String,
}

impl std::fmt::Display for RenderedBlock {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "<!-- {} -->\n{}", self.language, self.html)
    }
}

/// Fenced code blocks with a language tag, in document order.
pub fn fenced_blocks(markdown: &str) -> Vec<FencedBlock> {
    let mut blocks = Vec::new();
    let mut current: Option<FencedBlock> = None;

    for event in Parser::new(markdown) {
        match event {
            Event::Start(Tag::CodeBlock(CodeBlockKind::Fenced(info))) => {
                // The info string may carry attributes after the language.
                if let Some(language) = info.split_whitespace().next() {
                    current = Some(FencedBlock {
                        language: language.to_string(),
                        source: String::new(),
                    });
                }
            }
            Event::Text(text) => {
                if let Some(block) = current.as_mut() {
                    block.source.push_str(&text);
                }
            }
            Event::End(TagEnd::CodeBlock) => {
                if let Some(block) = current.take() {
                    blocks.push(block);
                }
            }
            _ => {}
        }
    }

    blocks
}

/// Render every block that has a registered processor. Blocks without one are
/// left to the host's default code rendering and skipped here.
pub fn render_note(
    registry: &Registry,
    markdown: &str,
    source_path: Option<RelativePathBuf>,
) -> Vec<RenderedBlock> {
    let ctx = ProcessorContext { source_path };
    fenced_blocks(markdown)
        .into_iter()
        .filter_map(|block| {
            let processor = registry.processor_for(&block.language)?;
            let mut el = Element::new("div");
            el.add_class(format!("block-language-{}", block.language));
            processor.process(&block.source, &mut el, &ctx);
            Some(RenderedBlock {
                language: block.language,
                html: el.to_html(),
            })
        })
        .collect()
}
