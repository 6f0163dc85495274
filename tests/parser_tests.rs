use action_wiring::html::{DocumentModel, NodeId, parse};

// ============================================================================
// Helpers
// ============================================================================

fn tags_of(doc: &DocumentModel) -> Vec<String> {
    doc.elements()
        .iter()
        .filter_map(|&id| doc.tag(id).map(|t| t.to_string()))
        .collect()
}

fn find_tag(doc: &DocumentModel, tag: &str) -> Option<NodeId> {
    doc.elements().into_iter().find(|&id| doc.tag(id) == Some(tag))
}

// ============================================================================
// Well-formed input
// ============================================================================

#[test]
fn parses_nested_elements_in_document_order() {
    let doc = parse("<div><form id=\"f\"><input type=\"text\"></form><button>Go</button></div>");

    assert_eq!(
        tags_of(&doc),
        vec!["div", "form", "input", "button"],
        "Elements must appear in document order"
    );

    let form = find_tag(&doc, "form").unwrap();
    assert_eq!(doc.attr(form, "id"), Some("f"));

    let input = find_tag(&doc, "input").unwrap();
    assert_eq!(doc.parent(input), Some(form), "Input must nest under form");
}

#[test]
fn text_content_collapses_whitespace() {
    let doc = parse("<button>  Sign\n   In  </button>");
    let button = find_tag(&doc, "button").unwrap();
    assert_eq!(doc.text_content(button), "Sign In");
}

#[test]
fn uppercase_tags_and_attributes_are_lowercased() {
    let doc = parse("<BUTTON ID=\"save\" Data-Action=\"persist\">Save</BUTTON>");
    let button = find_tag(&doc, "button").expect("uppercase tag must parse");
    assert_eq!(doc.attr(button, "id"), Some("save"));
    assert_eq!(doc.attr(button, "data-action"), Some("persist"));
}

// ============================================================================
// Attribute forms
// ============================================================================

#[test]
fn attribute_quoting_variants() {
    let doc = parse("<input id='a' name=b type=\"text\" required>");
    let input = find_tag(&doc, "input").unwrap();

    assert_eq!(doc.attr(input, "id"), Some("a"));
    assert_eq!(doc.attr(input, "name"), Some("b"));
    assert_eq!(doc.attr(input, "type"), Some("text"));
    assert_eq!(
        doc.attr(input, "required"),
        Some(""),
        "Valueless attribute resolves to empty string"
    );
}

#[test]
fn duplicate_attribute_first_wins() {
    let doc = parse("<input id=\"first\" id=\"second\">");
    let input = find_tag(&doc, "input").unwrap();
    assert_eq!(doc.attr(input, "id"), Some("first"));
}

#[test]
fn entities_decoded_in_text_and_attributes() {
    let doc = parse("<button aria-label=\"Save &amp; close\">Less &lt; more &#33;</button>");
    let button = find_tag(&doc, "button").unwrap();

    assert_eq!(doc.attr(button, "aria-label"), Some("Save & close"));
    assert_eq!(doc.text_content(button), "Less < more !");
}

// ============================================================================
// Malformed input — must recover, never fail
// ============================================================================

#[test]
fn empty_input_yields_empty_document() {
    assert!(parse("").is_empty());
    assert!(parse("   \n  ").is_empty());
}

#[test]
fn plain_text_yields_no_elements() {
    let doc = parse("just some text, no markup");
    assert!(doc.elements().is_empty());
}

#[test]
fn unclosed_tags_recover() {
    let doc = parse("<div><button>One<button>Two");
    let buttons: Vec<_> = tags_of(&doc)
        .into_iter()
        .filter(|t| t == "button")
        .collect();
    assert_eq!(buttons.len(), 2, "Both buttons must survive unclosed tags");
}

#[test]
fn stray_close_tags_are_ignored() {
    let doc = parse("</div><button>Ok</button></span>");
    assert_eq!(tags_of(&doc), vec!["button"]);
}

#[test]
fn implicit_close_of_list_items() {
    let doc = parse("<ul><li>one<li>two<li>three</ul>");
    let ul = find_tag(&doc, "ul").unwrap();
    let items = doc
        .descendant_elements(ul)
        .into_iter()
        .filter(|&id| doc.tag(id) == Some("li"))
        .count();
    assert_eq!(items, 3);

    // Items must be siblings, not nested inside each other
    for id in doc.descendant_elements(ul) {
        if doc.tag(id) == Some("li") {
            assert_eq!(doc.parent(id), Some(ul), "li must not nest under li");
        }
    }
}

#[test]
fn void_elements_do_not_swallow_siblings() {
    let doc = parse("<form id=\"f\"><input name=\"a\"><input name=\"b\"></form>");
    let form = find_tag(&doc, "form").unwrap();
    let inputs = doc
        .descendant_elements(form)
        .into_iter()
        .filter(|&id| doc.tag(id) == Some("input"))
        .count();
    assert_eq!(inputs, 2, "Both inputs must be direct children of the form");
}

#[test]
fn lone_angle_bracket_is_text() {
    let doc = parse("<button>a < b</button>");
    let button = find_tag(&doc, "button").unwrap();
    assert_eq!(doc.text_content(button), "a < b");
}

// ============================================================================
// Skipped constructs
// ============================================================================

#[test]
fn comments_and_doctype_are_skipped() {
    let doc = parse("<!DOCTYPE html><!-- a <button>fake</button> --><button>Real</button>");
    assert_eq!(tags_of(&doc), vec!["button"]);
    let button = find_tag(&doc, "button").unwrap();
    assert_eq!(doc.text_content(button), "Real");
}

#[test]
fn script_bodies_never_surface() {
    let doc = parse(
        "<div><script>var x = \"<button>ghost</button>\";</script><button>Real</button></div>",
    );

    let buttons: Vec<_> = tags_of(&doc)
        .into_iter()
        .filter(|t| t == "button")
        .collect();
    assert_eq!(buttons.len(), 1, "Markup inside script must not parse");

    let div = find_tag(&doc, "div").unwrap();
    assert_eq!(
        doc.text_content(div),
        "Real",
        "Script text must not surface as content"
    );
}

#[test]
fn style_bodies_are_discarded() {
    let doc = parse("<style>.a { color: red; }</style><button>Ok</button>");
    assert_eq!(tags_of(&doc), vec!["style", "button"]);
    let style = find_tag(&doc, "style").unwrap();
    assert_eq!(doc.text_content(style), "");
}

#[test]
fn unterminated_script_consumes_to_end() {
    let doc = parse("<button>Before</button><script>var x = 1;");
    assert_eq!(tags_of(&doc), vec!["button", "script"]);
}
