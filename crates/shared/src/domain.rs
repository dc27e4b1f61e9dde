use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

macro_rules! id_newtype {
    ($name:ident) => {
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(pub i64);

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                write!(f, "{}", self.0)
            }
        }
    };
}

id_newtype!(PhotoId);

impl PhotoId {
    /// Id implied by a slide position when photo ids run `1..=N` in array order.
    pub fn from_slide_index(index: usize) -> Self {
        Self(index as i64 + 1)
    }
}

/// One slide of the gallery, in server-provided order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Photo {
    pub id: PhotoId,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub caption: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub src: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub likes: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub favorites: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
    /// Display fields this client does not model explicitly.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Photo {
    pub fn new(id: PhotoId) -> Self {
        Self {
            id,
            title: None,
            caption: None,
            src: None,
            likes: None,
            favorites: None,
            created_at: None,
            extra: Map::new(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Comment {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub photo_id: Option<PhotoId>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub body: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Comment {
    pub fn new(photo_id: PhotoId, name: impl Into<String>, body: impl Into<String>) -> Self {
        Self {
            photo_id: Some(photo_id),
            name: Some(name.into()),
            body: Some(body.into()),
            date: None,
            extra: Map::new(),
        }
    }
}
