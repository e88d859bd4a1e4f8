//! Policy handlers
//!
//! Thin adapters over the registry port: parse and validate the wire
//! shapes, hand the caller token to the domain, and map outcomes onto
//! status codes. No policy rule lives here.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use uuid::Uuid;
use validator::Validate;

use core_kernel::{PartyId, PolicyId, Timestamp};
use domain_policy::PolicyRegistry;

use crate::auth::Caller;
use crate::dto::policy::*;
use crate::error::ApiError;
use crate::AppState;

/// Creates a new policy with its two fixed identities
pub async fn create_policy(
    State(state): State<AppState>,
    Json(request): Json<CreatePolicyRequest>,
) -> Result<(StatusCode, Json<CreatePolicyResponse>), ApiError> {
    let id = state
        .registry
        .create(
            PartyId::from(request.insurant_id),
            PartyId::from(request.oracle_id),
        )
        .await?;

    Ok((
        StatusCode::CREATED,
        Json(CreatePolicyResponse { id: *id.as_uuid() }),
    ))
}

/// Gets a policy by ID
pub async fn get_policy(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<PolicyResponse>, ApiError> {
    let policy = state.registry.get(PolicyId::from(id)).await?;
    Ok(Json(PolicyResponse::from(&policy)))
}

/// Gets the current lifecycle state
pub async fn get_state(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<StateResponse>, ApiError> {
    let policy_state = state.registry.state(PolicyId::from(id)).await?;
    Ok(Json(StateResponse::of(policy_state)))
}

/// Configures the acceptance range for one measure (insurant only)
pub async fn set_threshold(
    State(state): State<AppState>,
    Path((id, measure_index)): Path<(Uuid, u8)>,
    Caller(caller): Caller,
    Json(request): Json<SetThresholdRequest>,
) -> Result<StatusCode, ApiError> {
    request.validate()?;

    state
        .registry
        .set_measured_value(
            PolicyId::from(id),
            caller,
            measure_index,
            request.min,
            request.max,
        )
        .await?;

    Ok(StatusCode::NO_CONTENT)
}

/// Reads the threshold slot for one measure
pub async fn get_threshold(
    State(state): State<AppState>,
    Path((id, measure_index)): Path<(Uuid, u8)>,
) -> Result<Json<ThresholdResponse>, ApiError> {
    let slot = state
        .registry
        .measured_value(PolicyId::from(id), measure_index)
        .await?;

    let measure = domain_policy::MeasureType::from_index(measure_index)
        .ok_or_else(|| ApiError::Validation(format!("Invalid measure index: {measure_index}")))?;

    Ok(Json(ThresholdResponse {
        measure: measure.name().to_string(),
        measure_index,
        min: slot.min,
        max: slot.max,
        is_set: slot.is_set,
    }))
}

/// Submits the policy, locking in location and coverage window (insurant only)
pub async fn submit_policy(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Caller(caller): Caller,
    Json(request): Json<SubmitPolicyRequest>,
) -> Result<Json<StateResponse>, ApiError> {
    request.validate()?;

    let id = PolicyId::from(id);
    state
        .registry
        .submit(
            id,
            caller,
            request.lat,
            request.lon,
            Timestamp::from_millis(request.period_start),
            Timestamp::from_millis(request.period_end),
        )
        .await?;

    let policy_state = state.registry.state(id).await?;
    Ok(Json(StateResponse::of(policy_state)))
}

/// Applies one oracle reading (oracle only)
pub async fn report_conditions(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Caller(caller): Caller,
    Json(request): Json<ConditionReadingRequest>,
) -> Result<Json<StateResponse>, ApiError> {
    request.validate()?;

    let id = PolicyId::from(id);
    state
        .registry
        .update_measured_conditions(
            id,
            caller,
            request.measure_index,
            request.value,
            Timestamp::from_millis(request.observed_at),
        )
        .await?;

    let policy_state = state.registry.state(id).await?;
    Ok(Json(StateResponse::of(policy_state)))
}

/// Returns the policy's fact log in recording order
pub async fn get_facts(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<Vec<FactResponse>>, ApiError> {
    let log = state.registry.facts(PolicyId::from(id)).await?;
    Ok(Json(log.into_iter().map(FactResponse::from).collect()))
}
