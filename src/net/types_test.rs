use super::*;

#[test]
fn post_content_uses_camel_case_tags() {
    let text: PostContent =
        serde_json::from_str(r#"{"text":{"text":"hello"}}"#).expect("text block");
    assert_eq!(text, PostContent::Text(TextContent { text: "hello".to_owned() }));

    let md: PostContent =
        serde_json::from_str(r##"{"markdown":{"text":"# hi"}}"##).expect("markdown block");
    assert_eq!(md, PostContent::Markdown(MarkdownContent { text: "# hi".to_owned() }));
}

#[test]
fn post_content_serializes_back_to_camel_case() {
    let block = PostContent::Markdown(MarkdownContent { text: "x".to_owned() });
    let raw = serde_json::to_string(&block).expect("serialize");
    assert_eq!(raw, r#"{"markdown":{"text":"x"}}"#);
}

#[test]
fn comment_is_a_post_with_a_parent() {
    let parent = Uuid::nil();
    let comment = Post {
        id: Uuid::nil(),
        community: "general".to_owned(),
        parent: Some(parent),
        author: User { username: "alice".to_owned(), host: "local".to_owned() },
        title: String::new(),
        content: vec![PostContent::Text(TextContent { text: "agreed".to_owned() })],
        created: 0,
        modified: 0,
    };
    assert_eq!(comment.parent, Some(parent));
}
