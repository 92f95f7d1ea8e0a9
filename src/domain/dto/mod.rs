//! # Data Transfer Objects (DTO) Module
//!
//! API 경계에서 주고받는 요청/응답 객체를 정의합니다.
//!
//! - 요청 DTO는 `validator`로 검증되며 필드 이름은 저장 형식과 같은 camelCase입니다.
//! - 수정 요청 DTO는 모든 필드가 선택적이며, 값이 있는 필드만 `$set` 문서로 변환됩니다.
//! - 응답 DTO는 `ObjectId`를 16진수 문자열로, 날짜를 RFC 3339 문자열로 내보냅니다.
//!
//! ```text
//! dto/
//! ├── common.rs   - ObjectId 파싱, `$set` 문서 변환
//! ├── users/      - 가입, 로그인, 사용자 수정 / 사용자, 로그인 응답
//! ├── courses/    - 코스, 레슨
//! ├── events/     - 행사
//! └── posts/      - 게시글, 댓글
//! ```

pub mod common;
pub mod users;
pub mod courses;
pub mod events;
pub mod posts;

pub use common::*;
pub use users::*;
pub use courses::*;
pub use events::*;
pub use posts::*;
