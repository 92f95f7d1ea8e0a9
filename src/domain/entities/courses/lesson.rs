//! Lesson Entity Implementation
//!
//! 레슨은 정렬된 콘텐츠 블록 목록을 가지며 하나의 코스에 속합니다.
//! 코스 내 `order` 값의 유일성은 저장소에서 강제하지 않습니다.

use mongodb::bson::oid::ObjectId;
use serde::{Deserialize, Serialize};

use crate::domain::entities::impl_entity;

/// 콘텐츠 블록 종류
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BlockType {
    Text,
    Image,
}

/// 레슨 본문을 구성하는 블록
///
/// `Text` 블록의 `content`는 본문, `Image` 블록의 `content`는 이미지 URL 입니다.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContentBlock {
    #[serde(rename = "type")]
    pub kind: BlockType,
    pub content: String,
    pub order: i32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub caption: Option<String>,
}

impl ContentBlock {
    pub fn text(content: impl Into<String>, order: i32) -> Self {
        Self {
            kind: BlockType::Text,
            content: content.into(),
            order,
            caption: None,
        }
    }

    pub fn image(url: impl Into<String>, order: i32, caption: impl Into<String>) -> Self {
        Self {
            kind: BlockType::Image,
            content: url.into(),
            order,
            caption: Some(caption.into()),
        }
    }
}

/// 레슨 엔티티
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Lesson {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<ObjectId>,
    pub title: String,
    pub description: String,
    #[serde(default)]
    pub content_blocks: Vec<ContentBlock>,
    /// 상위 코스
    pub course: ObjectId,
    /// 코스 내 순서 (1부터 시작)
    pub order: i32,
}

impl_entity!(Lesson, "lessons");

#[cfg(test)]
mod tests {
    use super::*;
    use mongodb::bson;

    #[test]
    fn test_content_block_document_shape() {
        let lesson = Lesson {
            id: None,
            title: "Урок 1".to_string(),
            description: "desc".to_string(),
            content_blocks: vec![
                ContentBlock::text("body", 1),
                ContentBlock::image("https://example.com/image1.jpg", 2, "caption"),
            ],
            course: ObjectId::new(),
            order: 1,
        };

        let document = bson::to_document(&lesson).unwrap();
        let blocks = document.get_array("contentBlocks").unwrap();
        let first = blocks[0].as_document().unwrap();
        let second = blocks[1].as_document().unwrap();

        assert_eq!(first.get_str("type").unwrap(), "text");
        assert!(!first.contains_key("caption"));
        assert_eq!(second.get_str("type").unwrap(), "image");
        assert_eq!(second.get_str("caption").unwrap(), "caption");
        assert!(document.get_object_id("course").is_ok());
    }
}
