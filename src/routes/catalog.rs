use std::sync::Arc;

use axum::{
    Router,
    extract::{Path, State},
    routing::get,
};
use serde::Serialize;

use crate::{
    db::entities::{people, planet, user},
    response::{ApiResult, JsonResponse},
    services::{ServiceContext, catalog_service::CatalogService},
    state::AppState,
};

/// Public view of a user. The password column never leaves the database.
#[derive(Debug, Serialize)]
pub struct UserResponse {
    pub id: i32,
    pub email: String,
    pub is_active: bool,
}

#[derive(Debug, Serialize)]
pub struct PeopleResponse {
    pub id: i32,
    pub name: String,
    pub gender: String,
}

#[derive(Debug, Serialize)]
pub struct PlanetResponse {
    pub id: i32,
    pub name: String,
    pub climate: String,
    pub terrain: String,
}

pub fn router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/users", get(list_users))
        .route("/people", get(list_people))
        .route("/people/{people_id}", get(get_person))
        .route("/planets", get(list_planets))
        .route("/planets/{planet_id}", get(get_planet))
        .with_state(state)
}

async fn list_users(State(state): State<Arc<AppState>>) -> ApiResult<Vec<UserResponse>> {
    let users = catalog_service_from_state(state.as_ref()).list_users().await?;
    JsonResponse::ok(users.into_iter().map(UserResponse::from).collect())
}

async fn list_people(State(state): State<Arc<AppState>>) -> ApiResult<Vec<PeopleResponse>> {
    let people = catalog_service_from_state(state.as_ref()).list_people().await?;
    JsonResponse::ok(people.into_iter().map(PeopleResponse::from).collect())
}

// Detail reads answer with a list of zero or one element; an unknown id is
// an empty list with 200.
async fn get_person(
    State(state): State<Arc<AppState>>,
    Path(people_id): Path<i32>,
) -> ApiResult<Vec<PeopleResponse>> {
    let people = catalog_service_from_state(state.as_ref())
        .people_by_id(people_id)
        .await?;
    JsonResponse::ok(people.into_iter().map(PeopleResponse::from).collect())
}

async fn list_planets(State(state): State<Arc<AppState>>) -> ApiResult<Vec<PlanetResponse>> {
    let planets = catalog_service_from_state(state.as_ref()).list_planets().await?;
    JsonResponse::ok(planets.into_iter().map(PlanetResponse::from).collect())
}

async fn get_planet(
    State(state): State<Arc<AppState>>,
    Path(planet_id): Path<i32>,
) -> ApiResult<Vec<PlanetResponse>> {
    let planets = catalog_service_from_state(state.as_ref())
        .planets_by_id(planet_id)
        .await?;
    JsonResponse::ok(planets.into_iter().map(PlanetResponse::from).collect())
}

impl From<user::Model> for UserResponse {
    fn from(model: user::Model) -> Self {
        Self {
            id: model.id,
            email: model.email,
            is_active: model.is_active,
        }
    }
}

impl From<people::Model> for PeopleResponse {
    fn from(model: people::Model) -> Self {
        Self {
            id: model.id,
            name: model.name,
            gender: model.gender,
        }
    }
}

impl From<planet::Model> for PlanetResponse {
    fn from(model: planet::Model) -> Self {
        Self {
            id: model.id,
            name: model.name,
            climate: model.climate,
            terrain: model.terrain,
        }
    }
}

fn catalog_service_from_state(state: &AppState) -> CatalogService {
    ServiceContext::from_state(state).catalog()
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::{PlanetResponse, UserResponse};
    use crate::db::entities::{planet, user};

    #[test]
    fn user_serialization_omits_password() {
        let response = UserResponse::from(user::Model {
            id: 1,
            email: "luke@rebellion.org".to_string(),
            password: "use-the-force".to_string(),
            is_active: true,
        });

        let value = serde_json::to_value(&response).expect("user should serialize");
        assert_eq!(
            value,
            json!({ "id": 1, "email": "luke@rebellion.org", "is_active": true })
        );
        assert!(!value.to_string().contains("use-the-force"));
    }

    #[test]
    fn planet_serialization_keeps_every_column() {
        let response = PlanetResponse::from(planet::Model {
            id: 2,
            name: "Dagobah".to_string(),
            climate: "murky".to_string(),
            terrain: "swamp".to_string(),
        });

        let value = serde_json::to_value(&response).expect("planet should serialize");
        assert_eq!(
            value,
            json!({ "id": 2, "name": "Dagobah", "climate": "murky", "terrain": "swamp" })
        );
    }
}
