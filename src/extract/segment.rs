// src/extract/segment.rs

use once_cell::sync::Lazy;
use scraper::{ElementRef, Html, Node, Selector};
use tracing::trace;
use url::Url;

use crate::roster::NamedLink;

static LINK_SELECTOR: Lazy<Selector> =
    Lazy::new(|| Selector::parse("a[href]").expect("Invalid CSS selector for links"));

/// Clean visible text and first link target of a markup fragment.
///
/// `<sup>` citation markers are dropped along with any text or link inside
/// them. Site-relative links are resolved against `base`. Empty or broken
/// markup gives an empty `NamedLink`.
pub fn extract_named_link(fragment: &str, base: &Url) -> NamedLink {
    if fragment.trim().is_empty() {
        return NamedLink::default();
    }
    let doc = Html::parse_fragment(fragment);
    let root = doc.root_element();

    let name = visible_text(root);
    let link = first_link(root, base);
    trace!(name = %name, link = %link, "extracted segment");
    NamedLink { name, link }
}

/// Like [`extract_named_link`] but only text inside hyperlinks counts.
///
/// Country header cells carry flags and notes next to the linked name; only
/// the anchor text is the country.
pub fn extract_anchor_link(fragment: &str, base: &Url) -> NamedLink {
    if fragment.trim().is_empty() {
        return NamedLink::default();
    }
    let doc = Html::parse_fragment(fragment);
    let root = doc.root_element();

    // flag icons are links too, but without text
    let anchors: Vec<(String, &str)> = root
        .select(&LINK_SELECTOR)
        .filter(|a| !inside_citation(a))
        .map(|a| (visible_text(a), a.value().attr("href").unwrap_or_default()))
        .filter(|(text, _)| !text.is_empty())
        .collect();

    let name: String = anchors.iter().map(|(text, _)| text.as_str()).collect();
    let link = anchors
        .first()
        .map(|(_, href)| absolute_link(href, base))
        .unwrap_or_default();
    NamedLink {
        name: name.trim().to_string(),
        link,
    }
}

/// Resolve `href` against the site base; unparseable targets are kept as-is.
pub fn absolute_link(href: &str, base: &Url) -> String {
    base.join(href)
        .map(|u| u.to_string())
        .unwrap_or_else(|_| href.to_string())
}

fn visible_text(el: ElementRef<'_>) -> String {
    let mut out = String::new();
    push_visible_text(el, &mut out);
    out.trim().to_string()
}

fn push_visible_text(el: ElementRef<'_>, out: &mut String) {
    for child in el.children() {
        match child.value() {
            Node::Text(text) => out.push_str(text),
            Node::Element(e) if e.name() == "sup" => {}
            Node::Element(_) => {
                if let Some(child_el) = ElementRef::wrap(child) {
                    push_visible_text(child_el, out);
                }
            }
            _ => {}
        }
    }
}

fn first_link(root: ElementRef<'_>, base: &Url) -> String {
    root.select(&LINK_SELECTOR)
        .filter(|a| !inside_citation(a))
        .find_map(|a| a.value().attr("href"))
        .map(|href| absolute_link(href, base))
        .unwrap_or_default()
}

fn inside_citation(el: &ElementRef<'_>) -> bool {
    el.ancestors()
        .any(|n| matches!(n.value(), Node::Element(e) if e.name() == "sup"))
}
