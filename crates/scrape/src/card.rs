// ABOUTME: Card Locator: finds a section's heading and resolves its card container.
// ABOUTME: Falls back from the exact title to alias patterns, and from the card marker to the parent.

use scraper::{ElementRef, Html};

use crate::layout::{class_contains, element_text, CARD_CLASS_MARKER, CARD_SEARCH_DEPTH, HEADINGS};
use crate::section::Section;

/// Finds the first heading whose text contains `title`, ignoring case.
pub fn find_heading<'a>(doc: &'a Html, title: &str) -> Option<ElementRef<'a>> {
    let needle = title.to_lowercase();
    doc.select(&HEADINGS)
        .find(|h| element_text(h).to_lowercase().contains(&needle))
}

/// Finds the heading for `section`: title first, then its alias patterns.
pub fn find_section_heading<'a>(doc: &'a Html, section: Section) -> Option<ElementRef<'a>> {
    if let Some(h) = find_heading(doc, section.title()) {
        return Some(h);
    }
    doc.select(&HEADINGS).find(|h| {
        let text = element_text(h);
        section.aliases().iter().any(|re| re.is_match(&text))
    })
}

/// Resolves the card around a heading.
///
/// Walks up to [`CARD_SEARCH_DEPTH`] ancestors looking for the card class
/// marker and otherwise settles for the immediate parent element.
pub fn card_for_heading<'a>(heading: ElementRef<'a>) -> Option<ElementRef<'a>> {
    let mut ancestors = heading.ancestors().filter_map(ElementRef::wrap);
    let parent = ancestors.next()?;
    if class_contains(&parent, CARD_CLASS_MARKER) {
        return Some(parent);
    }
    ancestors
        .take(CARD_SEARCH_DEPTH - 1)
        .find(|el| class_contains(el, CARD_CLASS_MARKER))
        .or(Some(parent))
}

/// Locates the card for `section`, or `None` when the page has no such heading.
pub fn locate_card<'a>(doc: &'a Html, section: Section) -> Option<ElementRef<'a>> {
    let heading = find_section_heading(doc, section)?;
    card_for_heading(heading)
}

#[cfg(test)]
mod tests {
    use super::*;

    const PAGE: &str = r#"
        <html><body>
          <div class="rounded-xl border p-6">
            <div class="flex items-center"><h3>Best LLM - Code</h3></div>
            <div class="space-y-3"><p>rows</p></div>
          </div>
          <section>
            <h2>Aider Polyglot</h2>
            <p>other</p>
          </section>
        </body></html>
    "#;

    #[test]
    fn test_find_heading_case_insensitive() {
        let doc = Html::parse_document(PAGE);
        let h = find_heading(&doc, "best llm - CODE").unwrap();
        assert_eq!(element_text(&h), "Best LLM - Code");
    }

    #[test]
    fn test_missing_heading_returns_none() {
        let doc = Html::parse_document(PAGE);
        assert!(find_heading(&doc, "Fastest API Provider").is_none());
        assert!(locate_card(&doc, Section::Fastest).is_none());
    }

    #[test]
    fn test_card_resolves_to_marked_ancestor() {
        let doc = Html::parse_document(PAGE);
        let card = locate_card(&doc, Section::Code).unwrap();
        assert!(card.value().attr("class").unwrap().contains("p-6"));
        assert!(element_text(&card).contains("rows"));
    }

    #[test]
    fn test_card_falls_back_to_parent() {
        let doc = Html::parse_document(
            r#"<section id="ctx"><h2>Longest Context Model</h2><p>10M</p></section>"#,
        );
        let card = locate_card(&doc, Section::LongestContext).unwrap();
        assert_eq!(card.value().name(), "section");
        assert_eq!(card.value().attr("id"), Some("ctx"));
    }

    #[test]
    fn test_alias_used_when_title_absent() {
        let doc = Html::parse_document(PAGE);
        let h = find_section_heading(&doc, Section::Code).unwrap();
        // exact title wins over alias
        assert_eq!(element_text(&h), "Best LLM - Code");

        let doc = Html::parse_document(r#"<div><h2>MMMU Benchmark</h2></div>"#);
        let h = find_section_heading(&doc, Section::Multimodal).unwrap();
        assert_eq!(element_text(&h), "MMMU Benchmark");
    }

    #[test]
    fn test_marker_beyond_search_depth_is_ignored() {
        let doc = Html::parse_document(
            r#"<div class="p-6"><div><div><div><div><div><div id="near">
                 <h3>Best LLM - Knowledge</h3>
               </div></div></div></div></div></div></div>"#,
        );
        let card = locate_card(&doc, Section::Knowledge).unwrap();
        assert_eq!(card.value().attr("id"), Some("near"));
    }
}
