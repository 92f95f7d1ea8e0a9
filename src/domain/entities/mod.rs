//! # Domain Entities Module
//!
//! MongoDB 문서와 직접 매핑되는 플랫폼의 핵심 엔티티들을 정의합니다.
//!
//! ## 컬렉션 구성
//!
//! ```text
//! users ◄──── courses.createdBy ◄──── lessons.course
//!   ▲  ◄──── events.createdBy
//!   └──────── posts.author ◄──── comments.post
//!                               comments.author ──► users
//! ```
//!
//! 참조 필드는 `ObjectId`만 보관하며 저장소가 무결성을 강제하지 않습니다.
//! 부모 문서를 먼저 저장한 뒤 할당된 `_id`로 자식을 만드는 것은 호출자의 책임입니다.
//!
//! 필드 이름은 기존 데이터베이스와 호환되도록 camelCase로 저장됩니다.

/// `Entity` 구현을 생성하는 내부 매크로
macro_rules! impl_entity {
    ($ty:ty, $collection:literal) => {
        impl $crate::domain::entities::Entity for $ty {
            const COLLECTION: &'static str = $collection;

            fn id(&self) -> Option<mongodb::bson::oid::ObjectId> {
                self.id
            }

            fn set_id(&mut self, id: mongodb::bson::oid::ObjectId) {
                self.id = Some(id);
            }
        }
    };
}

pub(crate) use impl_entity;

pub mod users;
pub mod courses;
pub mod events;
pub mod posts;

pub use users::user::{Gender, Role, User};
pub use courses::course::{Course, Level};
pub use courses::lesson::{BlockType, ContentBlock, Lesson};
pub use events::event::Event;
pub use posts::post::{Post, PostCategory};
pub use posts::comment::Comment;

use mongodb::bson::oid::ObjectId;
use serde::{de::DeserializeOwned, Serialize};

/// 컬렉션에 저장되는 모든 문서 타입의 공통 인터페이스
///
/// 리포지토리와 시드 작업은 이 trait을 통해 컬렉션 이름과 `_id`에 접근합니다.
pub trait Entity: Serialize + DeserializeOwned + Send + Sync + Unpin + 'static {
    /// 문서가 저장되는 MongoDB 컬렉션 이름
    const COLLECTION: &'static str;

    /// 저장소가 할당한 식별자 (저장 전에는 `None`)
    fn id(&self) -> Option<ObjectId>;

    fn set_id(&mut self, id: ObjectId);

    /// 16진수 문자열 형태의 식별자
    fn id_string(&self) -> String {
        self.id().map(|id| id.to_hex()).unwrap_or_default()
    }
}

/// 시드 작업이 초기화하는 전체 컬렉션 목록 (삭제 순서)
pub const ALL_COLLECTIONS: [&str; 6] = [
    User::COLLECTION,
    Course::COLLECTION,
    Lesson::COLLECTION,
    Event::COLLECTION,
    Post::COLLECTION,
    Comment::COLLECTION,
];
