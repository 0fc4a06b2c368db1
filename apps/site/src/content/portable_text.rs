//! Portable-text renderer — block-structured rich text to HTML.
//!
//! Fixed handler set: `normal`/`h2`/`h3`/`blockquote` blocks, bullet list
//! items, `strong`/`em`/`underline` marks, `link` mark defs, inline image
//! blocks. Unknown block styles render as paragraphs; unknown marks are
//! ignored. All text and hrefs are HTML-escaped.

use tera::escape_html;

use super::image;
use super::models::{AssetPointer, Block, ImageRef, MarkDef, Span};

pub fn render(blocks: &[Block], project_id: &str, dataset: &str) -> String {
    let mut out = String::new();
    let mut in_list = false;

    for block in blocks {
        match block {
            Block::Text {
                style,
                list_item,
                children,
                mark_defs,
            } => {
                if list_item.is_some() {
                    if !in_list {
                        out.push_str("<ul>");
                        in_list = true;
                    }
                    out.push_str("<li>");
                    render_spans(&mut out, children, mark_defs);
                    out.push_str("</li>");
                } else {
                    close_list(&mut out, &mut in_list);
                    let tag = match style.as_deref() {
                        Some("h2") => "h2",
                        Some("h3") => "h3",
                        Some("blockquote") => "blockquote",
                        _ => "p",
                    };
                    out.push_str(&format!("<{tag}>"));
                    render_spans(&mut out, children, mark_defs);
                    out.push_str(&format!("</{tag}>"));
                }
            }
            Block::Image { asset, alt } => {
                close_list(&mut out, &mut in_list);
                let image = ImageRef {
                    asset: asset.as_ref().map(|a| AssetPointer {
                        asset_ref: a.asset_ref.clone(),
                    }),
                    alt: alt.clone(),
                    caption: None,
                };
                let src = image::resolve(project_id, dataset, &image, Some((1200, 800)));
                let alt = escape_html(alt.as_deref().unwrap_or(""));
                out.push_str(&format!(
                    "<figure><img src=\"{src}\" alt=\"{alt}\" loading=\"lazy\"></figure>"
                ));
            }
        }
    }

    close_list(&mut out, &mut in_list);
    out
}

fn close_list(out: &mut String, in_list: &mut bool) {
    if *in_list {
        out.push_str("</ul>");
        *in_list = false;
    }
}

fn render_spans(out: &mut String, children: &[Span], mark_defs: &[MarkDef]) {
    for span in children {
        let mut html = escape_html(&span.text);
        for mark in &span.marks {
            html = match mark.as_str() {
                "strong" => format!("<strong>{html}</strong>"),
                "em" => format!("<em>{html}</em>"),
                "underline" => format!("<u>{html}</u>"),
                key => match mark_defs
                    .iter()
                    .find(|def| def.key == key && def.def_type == "link")
                    .and_then(|def| def.href.as_deref())
                {
                    Some(href) => {
                        format!("<a href=\"{}\">{html}</a>", escape_html(href))
                    }
                    None => html,
                },
            };
        }
        out.push_str(&html);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn text_block(style: Option<&str>, list_item: Option<&str>, spans: Vec<Span>) -> Block {
        Block::Text {
            style: style.map(String::from),
            list_item: list_item.map(String::from),
            children: spans,
            mark_defs: vec![],
        }
    }

    fn span(text: &str, marks: &[&str]) -> Span {
        Span {
            text: text.to_string(),
            marks: marks.iter().map(|m| m.to_string()).collect(),
        }
    }

    #[test]
    fn test_paragraph_and_headings() {
        let html = render(
            &[
                text_block(Some("h2"), None, vec![span("Planning", &[])]),
                text_block(Some("normal"), None, vec![span("Start early.", &[])]),
            ],
            "p",
            "d",
        );
        assert_eq!(html, "<h2>Planning</h2><p>Start early.</p>");
    }

    #[test]
    fn test_unknown_style_falls_back_to_paragraph() {
        let html = render(
            &[text_block(Some("h7"), None, vec![span("x", &[])])],
            "p",
            "d",
        );
        assert_eq!(html, "<p>x</p>");
    }

    #[test]
    fn test_marks_nest_and_unknown_marks_are_ignored() {
        let html = render(
            &[text_block(
                None,
                None,
                vec![span("vows", &["strong", "em", "sparkle"])],
            )],
            "p",
            "d",
        );
        assert_eq!(html, "<p><em><strong>vows</strong></em></p>");
    }

    #[test]
    fn test_link_mark_uses_escaped_href() {
        let block = Block::Text {
            style: None,
            list_item: None,
            children: vec![span("the venue", &["l1"])],
            mark_defs: vec![MarkDef {
                key: "l1".to_string(),
                def_type: "link".to_string(),
                href: Some("https://example.com/?a=1&b=2".to_string()),
            }],
        };
        let html = render(&[block], "p", "d");
        assert_eq!(
            html,
            "<p><a href=\"https:&#x2F;&#x2F;example.com&#x2F;?a=1&amp;b=2\">the venue</a></p>"
        );
    }

    #[test]
    fn test_consecutive_list_items_group_into_one_list() {
        let html = render(
            &[
                text_block(None, Some("bullet"), vec![span("one", &[])]),
                text_block(None, Some("bullet"), vec![span("two", &[])]),
                text_block(None, None, vec![span("after", &[])]),
            ],
            "p",
            "d",
        );
        assert_eq!(html, "<ul><li>one</li><li>two</li></ul><p>after</p>");
    }

    #[test]
    fn test_span_text_is_escaped() {
        let html = render(
            &[text_block(None, None, vec![span("<script>alert(1)</script>", &[])])],
            "p",
            "d",
        );
        assert!(!html.contains("<script>"));
        assert!(html.contains("&lt;script&gt;"));
    }

    #[test]
    fn test_image_block_without_asset_uses_fallback() {
        let html = render(
            &[Block::Image {
                asset: None,
                alt: Some("First dance".to_string()),
            }],
            "p",
            "d",
        );
        assert!(html.contains(crate::content::image::FALLBACK_IMAGE_URL));
        assert!(html.contains("alt=\"First dance\""));
    }
}
