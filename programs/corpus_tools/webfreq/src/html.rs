use once_cell::sync::Lazy;
use regex::Regex;

static COMMENT: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?s)<!--.*?-->").unwrap());

static SCRIPT: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?is)<script\b[^>]*>.*?</script\s*>").unwrap());

static STYLE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?is)<style\b[^>]*>.*?</style\s*>").unwrap());

// start/end tags, doctype and processing instructions. Quoted attribute values
// may hold ">". A bare "<" followed by anything else is text.
static TAG: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r#"(?s)</?[a-zA-Z](?:[^>"']|"[^"]*"|'[^']*')*>|<[!?][^>]*>"#).unwrap()
});

/// Decodes every html5 character reference, named or numeric.
pub fn unescape(text: &str) -> String {
    html_escape::decode_html_entities(text).into_owned()
}

/// Text content of an html document, text nodes glued together as they are.
/// Markup, comments and the bodies of script/style elements are dropped.
pub fn extract_text(html: &str) -> String {
    let text = COMMENT.replace_all(html, "");
    let text = SCRIPT.replace_all(&text, "");
    let text = STYLE.replace_all(&text, "");
    let text = TAG.replace_all(&text, "");
    unescape(&text)
}

#[test]
fn test_extract_text() {
    let page = r#"<!DOCTYPE html>
<html><head><title>Preface</title>
<style type="text/css">body { color: red; }</style>
<script>var x = "<b>not text</b>";</script>
</head>
<body><!-- nav --><p class="lead">Hello <b>web2py</b>&nbsp;world</p><p>a &lt; b &amp;&amp; c</p></body></html>"#;
    let text = extract_text(page);
    assert!(text.contains("Preface"));
    assert!(text.contains("Hello web2py\u{a0}world"));
    assert!(text.contains("a < b && c"));
    assert!(!text.contains("color"));
    assert!(!text.contains("not text"));
    assert!(!text.contains("nav"));
}

#[test]
fn test_adjacent_nodes_are_not_separated() {
    assert_eq!(extract_text("<p>one</p><p>two</p>"), "onetwo");
    assert_eq!(extract_text("<ul>\n<li>one</li>\n<li>two</li>\n</ul>"), "\none\ntwo\n");
}

#[test]
fn test_unescape() {
    assert_eq!(unescape("&#65;&#x42;&#67;"), "ABC");
    assert_eq!(unescape("&quot;hi&quot; &apos;there&apos;"), "\"hi\" 'there'");
    assert_eq!(unescape("&bogus; & x"), "&bogus; & x");
}

#[test]
fn test_lone_angle_bracket_is_text() {
    assert_eq!(extract_text("1 < 2 and 3 > 2"), "1 < 2 and 3 > 2");
}

#[test]
fn test_named_references_are_not_words() {
    let text = extract_text("a &raquo; b &copy; c &mdash; d&hellip;");
    assert_eq!(text, "a \u{bb} b \u{a9} c \u{2014} d\u{2026}");
    let counts = crate::count::count_words(&text);
    assert_eq!(counts.get("raquo"), None);
    assert_eq!(counts.get("copy"), None);
    assert_eq!(counts.get("d\u{2026}"), Some(1));
}

#[test]
fn test_quoted_gt_inside_attribute() {
    assert_eq!(
        extract_text(r#"<a title="x>y" href='p>q'>link</a> text"#),
        "link text"
    );
}
