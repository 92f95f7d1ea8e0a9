//! 코스/레슨 서비스
//!
//! 레슨은 존재하는 코스에만 추가할 수 있고, 코스를 삭제하면 소속 레슨도 함께 삭제됩니다.

use mongodb::bson::oid::ObjectId;

use crate::domain::dto::{
    parse_object_id, to_changes, CreateCourseRequest, CreateLessonRequest, UpdateCourseRequest,
    UpdateLessonRequest,
};
use crate::domain::entities::{Course, Lesson};
use crate::domain::models::auth::AuthenticatedUser;
use crate::errors::{AppError, AppResult};
use crate::repositories::{CourseRepository, LessonRepository};

use super::COURSE_EDITORS;

#[derive(Clone)]
pub struct CourseService {
    courses: CourseRepository,
    lessons: LessonRepository,
}

impl CourseService {
    pub fn new(courses: CourseRepository, lessons: LessonRepository) -> Self {
        Self { courses, lessons }
    }

    pub async fn list_courses(&self) -> AppResult<Vec<Course>> {
        self.courses.find_all().await
    }

    pub async fn get_course(&self, id: ObjectId) -> AppResult<Course> {
        self.courses.get(id).await
    }

    pub async fn create_course(&self, actor: &AuthenticatedUser, request: CreateCourseRequest) -> AppResult<Course> {
        actor.require_any_role(&COURSE_EDITORS)?;

        let course = self.courses.create(request.into_entity(actor.object_id()?)).await?;
        log::info!("📚 코스 생성: {} ({})", course.name, actor.username);

        Ok(course)
    }

    pub async fn update_course(
        &self,
        actor: &AuthenticatedUser,
        id: ObjectId,
        request: UpdateCourseRequest,
    ) -> AppResult<Course> {
        actor.require_any_role(&COURSE_EDITORS)?;

        self.courses
            .update(id, to_changes(&request)?)
            .await?
            .ok_or_else(|| course_not_found(id))
    }

    pub async fn delete_course(&self, actor: &AuthenticatedUser, id: ObjectId) -> AppResult<()> {
        actor.require_any_role(&COURSE_EDITORS)?;

        if !self.courses.delete(id).await? {
            return Err(course_not_found(id));
        }

        let lessons = self.lessons.delete_by_course(id).await?;
        log::info!("🗑️ 코스 삭제: {} (레슨 {}개 함께 삭제)", id, lessons);

        Ok(())
    }

    /// 코스의 레슨을 `order` 순으로 반환합니다.
    pub async fn course_lessons(&self, id: ObjectId) -> AppResult<Vec<Lesson>> {
        self.ensure_course(id).await?;
        self.lessons.find_by_course(id).await
    }

    pub async fn list_lessons(&self, course: Option<ObjectId>) -> AppResult<Vec<Lesson>> {
        self.lessons.find_all(course).await
    }

    pub async fn get_lesson(&self, id: ObjectId) -> AppResult<Lesson> {
        self.lessons.get(id).await
    }

    pub async fn create_lesson(&self, actor: &AuthenticatedUser, request: CreateLessonRequest) -> AppResult<Lesson> {
        actor.require_any_role(&COURSE_EDITORS)?;

        let course = parse_object_id(&request.course, "course")?;
        self.ensure_course(course).await?;

        let lesson = self.lessons.create(request.into_entity(course)).await?;
        log::info!("📖 레슨 생성: {} (코스 {})", lesson.title, course);

        Ok(lesson)
    }

    pub async fn update_lesson(
        &self,
        actor: &AuthenticatedUser,
        id: ObjectId,
        request: UpdateLessonRequest,
    ) -> AppResult<Lesson> {
        actor.require_any_role(&COURSE_EDITORS)?;

        if let Some(course) = request.course_id()? {
            self.ensure_course(course).await?;
        }

        self.lessons
            .update(id, request.changes()?)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("레슨을 찾을 수 없습니다: {}", id)))
    }

    pub async fn delete_lesson(&self, actor: &AuthenticatedUser, id: ObjectId) -> AppResult<()> {
        actor.require_any_role(&COURSE_EDITORS)?;

        if !self.lessons.delete(id).await? {
            return Err(AppError::NotFound(format!("레슨을 찾을 수 없습니다: {}", id)));
        }
        Ok(())
    }

    async fn ensure_course(&self, id: ObjectId) -> AppResult<()> {
        if self.courses.exists(id).await? {
            Ok(())
        } else {
            Err(course_not_found(id))
        }
    }
}

fn course_not_found(id: ObjectId) -> AppError {
    AppError::NotFound(format!("코스를 찾을 수 없습니다: {}", id))
}
