//! Generic HTTP handlers shared by every resource
//!
//! Handlers only translate between HTTP and [`EntityService`]; every rule
//! lives in the resource's validation chains.

use crate::core::entity::{Removable, Resource};
use crate::core::error::{Fault, RequestError};
use crate::core::extractors::{DataResponse, Envelope};
use crate::core::service::EntityService;
use axum::Json;
use axum::extract::{Path, State};
use axum::http::{Method, StatusCode, Uri};

/// GET /{resource}
pub async fn list_entities<T: Resource>(
    State(service): State<EntityService<T>>,
) -> Result<Json<DataResponse<Vec<T>>>, Fault> {
    let entities = service.list().await?;
    Ok(Json(DataResponse::new(entities)))
}

/// POST /{resource}
pub async fn create_entity<T: Resource>(
    State(service): State<EntityService<T>>,
    Envelope(data): Envelope,
) -> Result<(StatusCode, Json<DataResponse<T>>), Fault> {
    let created = service.create(data).await?;
    Ok((StatusCode::CREATED, Json(DataResponse::new(created))))
}

/// GET /{resource}/{id}
pub async fn get_entity<T: Resource>(
    State(service): State<EntityService<T>>,
    Path(id): Path<String>,
) -> Result<Json<DataResponse<T>>, Fault> {
    let entity = service.read(&id).await?;
    Ok(Json(DataResponse::new(entity)))
}

/// PUT /{resource}/{id}
pub async fn update_entity<T: Resource>(
    State(service): State<EntityService<T>>,
    Path(id): Path<String>,
    Envelope(data): Envelope,
) -> Result<Json<DataResponse<T>>, Fault> {
    let updated = service.update(&id, data).await?;
    Ok(Json(DataResponse::new(updated)))
}

/// DELETE /{resource}/{id}
pub async fn delete_entity<T: Removable>(
    State(service): State<EntityService<T>>,
    Path(id): Path<String>,
) -> Result<StatusCode, Fault> {
    service.delete(&id).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// Fallback for any verb a known path does not accept
pub async fn method_not_allowed(method: Method, uri: Uri) -> Fault {
    RequestError::MethodNotAllowed {
        method: method.to_string(),
        path: uri.path().to_string(),
    }
    .into()
}

/// Fallback for paths no route matches
pub async fn route_not_found(uri: Uri) -> Fault {
    RequestError::RouteNotFound {
        path: uri.path().to_string(),
    }
    .into()
}
