//! 고정 데이터셋 레시피와 엔티티 빌더
//!
//! 모든 열거형 값은 인덱스의 나머지 연산으로 순환 할당되므로
//! 개수를 늘려도 범위를 벗어나는 조회가 발생하지 않습니다.

use mongodb::bson::{oid::ObjectId, DateTime};

use crate::domain::entities::{
    ContentBlock, Course, Event, Gender, Lesson, Level, Post, PostCategory, Role, User, Comment,
};
use crate::errors::{AppError, AppResult};

/// 일반 사용자에게 순서대로 할당되는 역할
pub const USER_ROLES: [Role; 3] = [Role::Student, Role::Teacher, Role::Moderator];

const DAY_MILLIS: i64 = 24 * 60 * 60 * 1000;

/// 생성할 문서 수와 기본 비밀번호
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SeedRecipe {
    pub users: usize,
    pub courses: usize,
    pub lessons_per_course: usize,
    pub events: usize,
    pub posts: usize,
    pub comments_per_post: usize,
    pub admin_password: String,
    pub user_password: String,
}

impl Default for SeedRecipe {
    fn default() -> Self {
        Self {
            users: 5,
            courses: 3,
            lessons_per_course: 3,
            events: 4,
            posts: 5,
            comments_per_post: 2,
            admin_password: "123".to_string(),
            user_password: "password123".to_string(),
        }
    }
}

impl SeedRecipe {
    /// 게시글/댓글 작성자를 고를 사용자가 있는지 확인합니다.
    pub fn validate(&self) -> AppResult<()> {
        if self.users == 0 && self.posts > 0 {
            return Err(AppError::ValidationError(
                "게시글 작성자로 사용할 일반 사용자가 최소 1명 필요합니다".to_string(),
            ));
        }
        Ok(())
    }
}

/// 위치 기반 순환 할당 (`labels[index mod len]`)
pub fn cycle<T: Copy>(labels: &[T], index: usize) -> T {
    labels[index % labels.len()]
}

/// 게시글 `post_index`의 `comment_index`번째 댓글 작성자 위치
pub fn comment_author_index(post_index: usize, comment_index: usize, user_count: usize) -> usize {
    (post_index + comment_index) % user_count
}

/// 관리자 계정 (로그인 111 / 비밀번호 123)
pub fn admin_user(password_hash: String) -> User {
    User {
        id: None,
        username: "111".to_string(),
        password_hash,
        first_name: "Admin".to_string(),
        last_name: "User".to_string(),
        phone: "111".to_string(),
        country: "Kazakhstan".to_string(),
        language: "ru".to_string(),
        role: Role::Admin,
        active: true,
        email: "admin@example.com".to_string(),
        gender: Some(Gender::Male),
        created_at: DateTime::now(),
    }
}

/// `index`번째 일반 사용자. 역할은 3개 주기로, 성별은 짝/홀에 따라 번갈아 할당됩니다.
pub fn fixture_user(index: usize, password_hash: String) -> User {
    let n = index + 1;

    User {
        id: None,
        username: format!("user{}", n),
        password_hash,
        first_name: format!("First{}", n),
        last_name: format!("Last{}", n),
        phone: format!("77777777{}1", n),
        country: "Kazakhstan".to_string(),
        language: "ru".to_string(),
        role: cycle(&USER_ROLES, index),
        active: true,
        email: format!("user{}@example.com", n),
        gender: Some(if index % 2 == 0 { Gender::Male } else { Gender::Female }),
        created_at: DateTime::now(),
    }
}

pub fn fixture_course(index: usize, created_by: ObjectId) -> Course {
    let n = index + 1;

    Course {
        id: None,
        name: format!("Курс {}", n),
        image: format!("https://example.com/course{}.jpg", n),
        level: cycle(&Level::ALL, index),
        duration: 30 + (index as i32) * 10,
        content: format!("Описание курса {} на уйгурском языке", n),
        created_by,
    }
}

/// 코스 `course_index`의 `index`번째 레슨. 텍스트 블록과 이미지 블록을 하나씩 가집니다.
pub fn fixture_lesson(course_index: usize, index: usize, course: ObjectId) -> Lesson {
    let (c, n) = (course_index + 1, index + 1);

    Lesson {
        id: None,
        title: format!("Урок {} курса {}", n, c),
        description: format!("Описание урока {} курса {}", n, c),
        content_blocks: vec![
            ContentBlock::text(format!("Содержание урока {} курса {}", n, c), 1),
            ContentBlock::image(
                format!("https://example.com/image{}.jpg", n),
                2,
                format!("Изображение для урока {}", n),
            ),
        ],
        course,
        order: n as i32,
    }
}

/// `index`번째 행사. 기준 시각으로부터 (index + 1)일 뒤로 잡힙니다.
pub fn fixture_event(index: usize, created_by: ObjectId, now: DateTime) -> Event {
    let n = index + 1;

    Event {
        id: None,
        title: format!("Событие {}", n),
        description: format!("Описание события {}", n),
        date: DateTime::from_millis(now.timestamp_millis() + n as i64 * DAY_MILLIS),
        location: format!("Место {}", n),
        image: format!("https://example.com/event{}.jpg", n),
        created_by,
    }
}

pub fn fixture_post(index: usize, author: ObjectId) -> Post {
    let n = index + 1;

    Post {
        id: None,
        title: format!("Пост {}", n),
        content: format!("Содержание поста {} от пользователя", n),
        category: cycle(&PostCategory::ALL, index),
        author,
    }
}

pub fn fixture_comment(post_index: usize, index: usize, author: ObjectId, post: ObjectId) -> Comment {
    Comment {
        id: None,
        content: format!("Комментарий {} к посту {}", index + 1, post_index + 1),
        author,
        post,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_role_rotation() {
        let roles: Vec<Role> = (0..5).map(|i| fixture_user(i, String::new()).role).collect();

        assert_eq!(
            roles,
            vec![Role::Student, Role::Teacher, Role::Moderator, Role::Student, Role::Teacher]
        );
    }

    #[test]
    fn test_gender_alternates_by_parity() {
        assert_eq!(fixture_user(0, String::new()).gender, Some(Gender::Male));
        assert_eq!(fixture_user(1, String::new()).gender, Some(Gender::Female));
        assert_eq!(fixture_user(4, String::new()).gender, Some(Gender::Male));
    }

    #[test]
    fn test_course_level_cycles_past_three_courses() {
        let admin = ObjectId::new();
        let levels: Vec<Level> = (0..5).map(|i| fixture_course(i, admin).level).collect();

        assert_eq!(
            levels,
            vec![
                Level::Beginner,
                Level::Intermediate,
                Level::Advanced,
                Level::Beginner,
                Level::Intermediate
            ]
        );
        assert_eq!(fixture_course(2, admin).duration, 50);
    }

    #[test]
    fn test_post_category_rotation() {
        let author = ObjectId::new();
        let categories: Vec<PostCategory> = (0..5).map(|i| fixture_post(i, author).category).collect();

        assert_eq!(
            categories,
            vec![
                PostCategory::Question,
                PostCategory::Discussion,
                PostCategory::News,
                PostCategory::History,
                PostCategory::Question
            ]
        );
    }

    #[test]
    fn test_comment_author_wraps_around_user_list() {
        assert_eq!(comment_author_index(0, 0, 5), 0);
        assert_eq!(comment_author_index(0, 1, 5), 1);
        assert_eq!(comment_author_index(4, 1, 5), 0);
    }

    #[test]
    fn test_event_dates_are_one_day_apart() {
        let now = DateTime::from_millis(1_700_000_000_000);
        let admin = ObjectId::new();

        let first = fixture_event(0, admin, now);
        let second = fixture_event(1, admin, now);

        assert_eq!(first.date.timestamp_millis() - now.timestamp_millis(), DAY_MILLIS);
        assert_eq!(second.date.timestamp_millis() - first.date.timestamp_millis(), DAY_MILLIS);
    }

    #[test]
    fn test_lesson_labels_and_order() {
        let lesson = fixture_lesson(1, 2, ObjectId::new());

        assert_eq!(lesson.title, "Урок 3 курса 2");
        assert_eq!(lesson.order, 3);
        assert_eq!(lesson.content_blocks.len(), 2);
        assert_eq!(lesson.content_blocks[1].caption.as_deref(), Some("Изображение для урока 3"));
    }

    #[test]
    fn test_recipe_requires_authors_for_posts() {
        let recipe = SeedRecipe { users: 0, ..SeedRecipe::default() };
        assert!(recipe.validate().is_err());

        let recipe = SeedRecipe { users: 0, posts: 0, ..SeedRecipe::default() };
        assert!(recipe.validate().is_ok());
    }
}
