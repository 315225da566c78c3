use super::*;

#[test]
fn escapes_markup_metacharacters() {
    assert_eq!(
        escape_html(r#"<a href="x">&'</a>"#),
        "&lt;a href=&quot;x&quot;&gt;&amp;&#039;&lt;/a&gt;"
    );
}

#[test]
fn script_tag_becomes_literal_text() {
    let escaped = escape_html("<script>alert(1)</script>");
    assert!(!escaped.contains('<'));
    assert!(!escaped.contains('>'));
    assert_eq!(escaped, "&lt;script&gt;alert(1)&lt;/script&gt;");
}

#[test]
fn ampersand_is_escaped_first() {
    // "&lt;" must not be produced by escaping the '&' of an earlier
    // replacement; plain text survives untouched.
    assert_eq!(escape_html("&lt;"), "&amp;lt;");
    assert_eq!(escape_html("plain text 123"), "plain text 123");
}
