use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

#[derive(Clone, Serialize, Deserialize, Debug, PartialEq)]
pub struct Photo {
    pub id: i32,
    pub viewpoint_id: i32,
    #[serde(default)]
    pub filename: String,
    pub original_filename: Option<String>,
    pub url: String,
    pub caption: Option<String>,
    #[serde(default)]
    pub is_primary: bool,
    pub created_at: Option<NaiveDateTime>,
}

/// A file picked in the upload widget, forwarded to the backend as multipart.
#[derive(Clone, Debug)]
pub struct PhotoUpload {
    pub file_name: String,
    pub content_type: Option<mime::Mime>,
    pub bytes: Vec<u8>,
    pub caption: Option<String>,
}

impl PhotoUpload {
    pub fn new(file_name: impl Into<String>, bytes: Vec<u8>) -> Self {
        PhotoUpload {
            file_name: file_name.into(),
            content_type: None,
            bytes,
            caption: None,
        }
    }

    pub fn with_content_type(mut self, content_type: mime::Mime) -> Self {
        self.content_type = Some(content_type);
        self
    }

    pub fn with_caption(mut self, caption: impl Into<String>) -> Self {
        self.caption = Some(caption.into());
        self
    }

    /// Caption to send, if any. Blank captions are dropped.
    pub fn caption_part(&self) -> Option<&str> {
        self.caption.as_deref().filter(|c| !c.is_empty())
    }
}
