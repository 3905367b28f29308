//! Contexts that are never matched.

#![allow(clippy::expect_used)]

use replace_in_html::{replace_in_html, replace_in_html_with_options, Options};

#[test]
fn attributes_are_not_matched() {
    let html = r#"<p class="meow"><a href="https://meow.meow">yay</a></p>"#;
    let output = replace_in_html(html, "meow", "<span>cat</span>").expect("replace failed");
    assert_eq!(output, html);
}

#[test]
fn attribute_untouched_while_text_replaced() {
    let output = replace_in_html(r#"<p class="meow">meow</p>"#, "meow", "cat").expect("replace failed");
    assert_eq!(output, r#"<p class="meow">cat</p>"#);
}

#[test]
fn script_is_not_matched() {
    let html = r#"<script>var meow = "(=^_^=)";</script>"#;
    let output = replace_in_html(html, "meow", "cattttt").expect("replace failed");
    assert_eq!(output, html);
}

#[test]
fn style_is_not_matched() {
    let html = r#"<style>.meow::before { content: "(=^_^=)"; }</style>"#;
    let output = replace_in_html(html, "meow", "cattttt").expect("replace failed");
    assert_eq!(output, html);
}

#[test]
fn textarea_is_not_matched() {
    let html = "<textarea>meow</textarea>";
    let output = replace_in_html(html, "meow", "cat").expect("replace failed");
    assert_eq!(output, html);
}

#[test]
fn text_after_raw_text_element_is_matched() {
    let output = replace_in_html("<script>meow()</script>meow<style>meow</style>", "meow", "cat")
        .expect("replace failed");
    assert_eq!(output, "<script>meow()</script>cat<style>meow</style>");
}

#[test]
fn only_the_immediate_parent_counts() {
    let mut skip_tags = Options::default().skip_tags;
    skip_tags.push("code".to_string());
    let options = Options { skip_tags };

    let output = replace_in_html_with_options(
        "<code>meow</code><code><b>meow</b></code>",
        "meow",
        "cat",
        &options,
    )
    .expect("replace failed");
    assert_eq!(output, "<code>meow</code><code><b>cat</b></code>");
}

#[test]
fn empty_skip_list_matches_script_text() {
    let options = Options {
        skip_tags: Vec::new(),
    };

    let output = replace_in_html_with_options("<script>meow</script>", "meow", "cat", &options)
        .expect("replace failed");
    assert_eq!(output, "<script>cat</script>");
}
