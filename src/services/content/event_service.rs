use mongodb::bson::oid::ObjectId;

use crate::domain::dto::{CreateEventRequest, UpdateEventRequest};
use crate::domain::entities::Event;
use crate::domain::models::auth::AuthenticatedUser;
use crate::errors::{AppError, AppResult};
use crate::repositories::EventRepository;

use super::EVENT_EDITORS;

#[derive(Clone)]
pub struct EventService {
    events: EventRepository,
}

impl EventService {
    pub fn new(events: EventRepository) -> Self {
        Self { events }
    }

    pub async fn list_events(&self) -> AppResult<Vec<Event>> {
        self.events.find_all().await
    }

    pub async fn get_event(&self, id: ObjectId) -> AppResult<Event> {
        self.events.get(id).await
    }

    pub async fn create_event(&self, actor: &AuthenticatedUser, request: CreateEventRequest) -> AppResult<Event> {
        actor.require_any_role(&EVENT_EDITORS)?;

        let event = self.events.create(request.into_entity(actor.object_id()?)).await?;
        log::info!("📅 행사 생성: {} ({})", event.title, actor.username);

        Ok(event)
    }

    pub async fn update_event(
        &self,
        actor: &AuthenticatedUser,
        id: ObjectId,
        request: UpdateEventRequest,
    ) -> AppResult<Event> {
        actor.require_any_role(&EVENT_EDITORS)?;

        self.events
            .update(id, request.changes()?)
            .await?
            .ok_or_else(|| event_not_found(id))
    }

    pub async fn delete_event(&self, actor: &AuthenticatedUser, id: ObjectId) -> AppResult<()> {
        actor.require_any_role(&EVENT_EDITORS)?;

        if !self.events.delete(id).await? {
            return Err(event_not_found(id));
        }
        Ok(())
    }
}

fn event_not_found(id: ObjectId) -> AppError {
    AppError::NotFound(format!("행사를 찾을 수 없습니다: {}", id))
}
