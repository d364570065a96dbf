use std::sync::Arc;

use axum::{
    Router,
    extract::{Path, State},
    routing::{get, post},
};
use serde::Serialize;

use crate::{
    db::entities::favorite,
    response::{ApiResult, JsonResponse, MessageBody},
    routes::extract::UserIdQuery,
    services::{ServiceContext, favorite_service::FavoriteService},
    state::AppState,
};

#[derive(Debug, Serialize)]
pub struct FavoriteResponse {
    pub id: i32,
    pub user_id: i32,
    pub planet_id: Option<i32>,
    pub people_id: Option<i32>,
}

pub fn router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/users/{user_id}/favorites", get(list_user_favorites))
        .route(
            "/favorite/planet/{planet_id}",
            post(add_favorite_planet).delete(remove_favorite_planet),
        )
        .route(
            "/favorite/people/{people_id}",
            post(add_favorite_people).delete(remove_favorite_people),
        )
        .with_state(state)
}

async fn list_user_favorites(
    State(state): State<Arc<AppState>>,
    Path(user_id): Path<i32>,
) -> ApiResult<Vec<FavoriteResponse>> {
    let favorites = favorite_service_from_state(state.as_ref())
        .list_for_user(user_id)
        .await?;
    JsonResponse::ok(favorites.into_iter().map(FavoriteResponse::from).collect())
}

async fn add_favorite_planet(
    State(state): State<Arc<AppState>>,
    Path(planet_id): Path<i32>,
    UserIdQuery(user_id): UserIdQuery,
) -> ApiResult<FavoriteResponse> {
    let created = favorite_service_from_state(state.as_ref())
        .add_planet(user_id, planet_id)
        .await?;
    JsonResponse::created(created.into())
}

async fn add_favorite_people(
    State(state): State<Arc<AppState>>,
    Path(people_id): Path<i32>,
    UserIdQuery(user_id): UserIdQuery,
) -> ApiResult<FavoriteResponse> {
    let created = favorite_service_from_state(state.as_ref())
        .add_people(user_id, people_id)
        .await?;
    JsonResponse::created(created.into())
}

async fn remove_favorite_planet(
    State(state): State<Arc<AppState>>,
    Path(planet_id): Path<i32>,
    UserIdQuery(user_id): UserIdQuery,
) -> ApiResult<MessageBody> {
    favorite_service_from_state(state.as_ref())
        .remove_planet(user_id, planet_id)
        .await?;
    JsonResponse::ok(MessageBody {
        msg: "Favorite planet removed",
    })
}

async fn remove_favorite_people(
    State(state): State<Arc<AppState>>,
    Path(people_id): Path<i32>,
    UserIdQuery(user_id): UserIdQuery,
) -> ApiResult<MessageBody> {
    favorite_service_from_state(state.as_ref())
        .remove_people(user_id, people_id)
        .await?;
    JsonResponse::ok(MessageBody {
        msg: "Favorite person removed",
    })
}

impl From<favorite::Model> for FavoriteResponse {
    fn from(model: favorite::Model) -> Self {
        Self {
            id: model.id,
            user_id: model.user_id,
            planet_id: model.planet_id,
            people_id: model.people_id,
        }
    }
}

fn favorite_service_from_state(state: &AppState) -> FavoriteService {
    ServiceContext::from_state(state).favorite()
}
