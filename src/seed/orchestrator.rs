//! 시드 오케스트레이터
//!
//! 초기화 후 사용자 → 코스 → 레슨 → 행사 → 게시글 → 댓글 순으로 문서를 생성합니다.
//! 부모 문서가 저장되어 `_id`를 받은 뒤에만 자식 문서가 그 `_id`를 참조합니다.

use std::future::Future;

use log::{debug, info};
use mongodb::bson::{self, oid::ObjectId, DateTime};

use crate::domain::entities::{Entity, ALL_COLLECTIONS};
use crate::errors::{AppResult, ErrorContext};

use super::fixtures::{self, SeedRecipe};
use super::store::SeedStore;
use super::{SeedError, SeedPhase, SeedReport};

/// 연결을 수립한 뒤 전체 시드 작업을 실행합니다.
///
/// 연결에 실패하면 어떤 쓰기도 시도하지 않고 `SeedError::Connection`을 반환합니다.
pub async fn seed_with<S, F, Fut>(connect: F, recipe: SeedRecipe, bcrypt_cost: u32) -> Result<SeedReport, SeedError>
where
    S: SeedStore,
    F: FnOnce() -> Fut,
    Fut: Future<Output = AppResult<S>>,
{
    info!("🔌 [{}] 데이터베이스 연결 중...", SeedPhase::Connecting);

    let store = connect().await.map_err(|e| {
        debug!("[{}] 연결 실패: {}", SeedPhase::Connecting, e);
        SeedError::Connection(e.to_string())
    })?;

    info!("✅ 시드 작업을 위한 MongoDB 연결 성공");

    Seeder::new(store, recipe, bcrypt_cost).run().await
}

/// 단일 패스, 재시도 없는 선형 시드 실행기
pub struct Seeder<S> {
    store: S,
    recipe: SeedRecipe,
    bcrypt_cost: u32,
    phase: SeedPhase,
}

impl<S: SeedStore> Seeder<S> {
    pub fn new(store: S, recipe: SeedRecipe, bcrypt_cost: u32) -> Self {
        Self {
            store,
            recipe,
            bcrypt_cost,
            phase: SeedPhase::Connecting,
        }
    }

    /// 현재 (또는 마지막) 단계
    pub fn phase(&self) -> SeedPhase {
        self.phase
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// 초기화와 모든 생성 단계를 순서대로 실행합니다.
    ///
    /// 실패 시 실패한 단계를 담은 `SeedError::Stage`를 반환하며 이미 기록된 문서는 그대로 둡니다.
    pub async fn run(&mut self) -> Result<SeedReport, SeedError> {
        match self.run_stages().await {
            Ok(report) => {
                self.phase = SeedPhase::Done;
                info!("🎉 Data seeding completed successfully! ({})", report);
                Ok(report)
            }
            Err(source) => {
                let phase = self.phase;
                self.phase = SeedPhase::Failed;
                debug!("[{}] 단계에서 중단: {}", phase, source);
                Err(SeedError::Stage { phase, source })
            }
        }
    }

    async fn run_stages(&mut self) -> AppResult<SeedReport> {
        self.enter(SeedPhase::Resetting);
        self.recipe.validate()?;
        self.reset().await?;

        self.enter(SeedPhase::CreatingUsers);
        let admin = self.create_admin().await?;
        let users = self.create_users().await?;

        self.enter(SeedPhase::CreatingCourses);
        let courses = self.create_courses(admin).await?;

        self.enter(SeedPhase::CreatingLessons);
        let lessons = self.create_lessons(&courses).await?;

        self.enter(SeedPhase::CreatingEvents);
        let events = self.create_events(admin).await?;

        self.enter(SeedPhase::CreatingPosts);
        let posts = self.create_posts(&users).await?;

        self.enter(SeedPhase::CreatingComments);
        let comments = self.create_comments(&posts, &users).await?;

        Ok(SeedReport {
            admins: 1,
            users: users.len(),
            courses: courses.len(),
            lessons: lessons.len(),
            events: events.len(),
            posts: posts.len(),
            comments: comments.len(),
        })
    }

    fn enter(&mut self, phase: SeedPhase) {
        self.phase = phase;
        info!("→ [{}]", phase);
    }

    /// 6개 컬렉션을 모두 비웁니다. 생성 단계보다 반드시 먼저 끝나야 합니다.
    async fn reset(&self) -> AppResult<()> {
        for collection in ALL_COLLECTIONS {
            let deleted = self.store.clear(collection).await?;
            info!("   ├─ {}: {}개 문서 삭제", collection, deleted);
        }
        Ok(())
    }

    async fn create_admin(&self) -> AppResult<ObjectId> {
        let password_hash = self.hash_password(&self.recipe.admin_password)?;
        let admin = fixtures::admin_user(password_hash);
        let id = self.insert(&admin).await?;

        info!("👤 Admin user created ({})", admin.username);
        Ok(id)
    }

    async fn create_users(&self) -> AppResult<Vec<ObjectId>> {
        let mut ids = Vec::with_capacity(self.recipe.users);

        for i in 0..self.recipe.users {
            let password_hash = self.hash_password(&self.recipe.user_password)?;
            let user = fixtures::fixture_user(i, password_hash);
            ids.push(self.insert(&user).await?);

            info!("👤 {} {} created", user.role, user.username);
        }

        Ok(ids)
    }

    async fn create_courses(&self, admin: ObjectId) -> AppResult<Vec<ObjectId>> {
        let mut ids = Vec::with_capacity(self.recipe.courses);

        for i in 0..self.recipe.courses {
            let course = fixtures::fixture_course(i, admin);
            ids.push(self.insert(&course).await?);

            info!("📚 Course {} created", i + 1);
        }

        Ok(ids)
    }

    async fn create_lessons(&self, courses: &[ObjectId]) -> AppResult<Vec<ObjectId>> {
        let mut ids = Vec::with_capacity(courses.len() * self.recipe.lessons_per_course);

        for (i, course) in courses.iter().enumerate() {
            for j in 0..self.recipe.lessons_per_course {
                let lesson = fixtures::fixture_lesson(i, j, *course);
                ids.push(self.insert(&lesson).await?);

                info!("📖 Lesson {} for Course {} created", j + 1, i + 1);
            }
        }

        Ok(ids)
    }

    async fn create_events(&self, admin: ObjectId) -> AppResult<Vec<ObjectId>> {
        let now = DateTime::now();
        let mut ids = Vec::with_capacity(self.recipe.events);

        for i in 0..self.recipe.events {
            let event = fixtures::fixture_event(i, admin, now);
            ids.push(self.insert(&event).await?);

            info!("📅 Event {} created", i + 1);
        }

        Ok(ids)
    }

    async fn create_posts(&self, users: &[ObjectId]) -> AppResult<Vec<ObjectId>> {
        let mut ids = Vec::with_capacity(self.recipe.posts);

        for i in 0..self.recipe.posts {
            let post = fixtures::fixture_post(i, users[i % users.len()]);
            ids.push(self.insert(&post).await?);

            info!("📝 Post {} created", i + 1);
        }

        Ok(ids)
    }

    async fn create_comments(&self, posts: &[ObjectId], users: &[ObjectId]) -> AppResult<Vec<ObjectId>> {
        let mut ids = Vec::with_capacity(posts.len() * self.recipe.comments_per_post);

        for (i, post) in posts.iter().enumerate() {
            for j in 0..self.recipe.comments_per_post {
                let author = users[fixtures::comment_author_index(i, j, users.len())];
                let comment = fixtures::fixture_comment(i, j, author, *post);
                ids.push(self.insert(&comment).await?);

                info!("💬 Comment {} to Post {} created", j + 1, i + 1);
            }
        }

        Ok(ids)
    }

    async fn insert<T: Entity>(&self, entity: &T) -> AppResult<ObjectId> {
        let document = bson::to_document(entity)
            .with_context(|| format!("{} 문서 직렬화 실패", T::COLLECTION))?;

        self.store.insert(T::COLLECTION, document).await
    }

    fn hash_password(&self, password: &str) -> AppResult<String> {
        bcrypt::hash(password, self.bcrypt_cost).context("비밀번호 해싱 실패")
    }
}
