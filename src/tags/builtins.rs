/// A built-in tag template compiled into the binary.
pub struct BuiltinTemplate {
    pub name: &'static str,
    pub template: &'static str,
}

/// Return all built-in tag templates.
pub fn all() -> Vec<BuiltinTemplate> {
    vec![
        BuiltinTemplate {
            name: "tags/research.html",
            template: include_str!("builtins/research.html"),
        },
        BuiltinTemplate {
            name: "tags/homepage.html",
            template: include_str!("builtins/homepage.html"),
        },
        BuiltinTemplate {
            name: "tags/papers.html",
            template: include_str!("builtins/papers.html"),
        },
    ]
}
