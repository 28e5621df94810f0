use serde::Serialize;

/// Description of the input form a presentation layer renders.
/// 展示层渲染的输入表单描述。
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FormDescription {
    pub title: &'static str,
    pub description: &'static str,
    pub fields: Vec<FormField>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FormField {
    /// Key under which the value is submitted
    pub name: &'static str,
    pub label: &'static str,
    pub hint: &'static str,
    pub required: bool,
}

pub const ARTICLE_ID_FIELD: &str = "article_id";
pub const OLD_IMAGE_FIELD: &str = "old_image";
pub const NEW_IMAGE_FIELD: &str = "new_image";

/// Form for one replacement run. All three fields are required.
pub fn initialize() -> FormDescription {
    FormDescription {
        title: "Replace an image in an article",
        description: "Every image in the article that looks like the reference image \
is pointed at the new image URL.",
        fields: vec![
            FormField {
                name: ARTICLE_ID_FIELD,
                label: "Article ID",
                hint: "Identifier of the article in the content store",
                required: true,
            },
            FormField {
                name: OLD_IMAGE_FIELD,
                label: "Reference image URL",
                hint: "URL of the image to look for",
                required: true,
            },
            FormField {
                name: NEW_IMAGE_FIELD,
                label: "New image URL",
                hint: "URL written in place of every matching image",
                required: true,
            },
        ],
    }
}
