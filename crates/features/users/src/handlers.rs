use crate::{EmailQuery, NewUser, ProfilePatch, User, UserDirectory, Users};
use axum::extract::State;
use sledger_derive::api_handler;
use sledger_domain::constants::USERS_TAG;
use sledger_kernel::prelude::*;
use sledger_kernel::server::ErrorBody;
use utoipa_axum::router::OpenApiRouter;
use utoipa_axum::routes;

fn directory(state: &ApiState) -> ApiResult<&UserDirectory> {
    Ok(&state.try_get_slice::<Users>()?.directory)
}

#[api_handler(
    post,
    path = "/users/register",
    request_body = NewUser,
    responses(
        (status = OK, description = "Registered user", body = User),
        (status = BAD_REQUEST, description = "Email taken or malformed", body = ErrorBody),
    ),
    tag = USERS_TAG,
)]
async fn register_handler(
    State(state): State<ApiState>,
    ApiJson(new): ApiJson<NewUser>,
) -> ApiResult<ApiJson<User>> {
    Ok(ApiJson(directory(&state)?.register(new)?))
}

#[api_handler(
    get,
    path = "/users/profile/{user_id}",
    params(("user_id" = u64, Path, description = "User id")),
    responses(
        (status = OK, description = "Profile", body = User),
        (status = NOT_FOUND, description = "Unknown user", body = ErrorBody),
    ),
    tag = USERS_TAG,
)]
async fn profile_handler(
    State(state): State<ApiState>,
    ApiPath(user_id): ApiPath<u64>,
) -> ApiResult<ApiJson<User>> {
    Ok(ApiJson(directory(&state)?.profile(user_id)?))
}

#[api_handler(
    put,
    path = "/users/profile/{user_id}",
    params(("user_id" = u64, Path, description = "User id")),
    request_body = ProfilePatch,
    responses(
        (status = OK, description = "Updated profile", body = User),
        (status = NOT_FOUND, description = "Unknown user", body = ErrorBody),
    ),
    tag = USERS_TAG,
)]
async fn update_profile_handler(
    State(state): State<ApiState>,
    ApiPath(user_id): ApiPath<u64>,
    ApiJson(patch): ApiJson<ProfilePatch>,
) -> ApiResult<ApiJson<User>> {
    Ok(ApiJson(directory(&state)?.update_profile(user_id, patch)?))
}

#[api_handler(
    get,
    path = "/users/search",
    params(("email" = Option<String>, Query, description = "Exact email, case-insensitive")),
    responses(
        (status = OK, description = "Matching user", body = User),
        (status = BAD_REQUEST, description = "No email given", body = ErrorBody),
        (status = NOT_FOUND, description = "Nobody registered it", body = ErrorBody),
    ),
    tag = USERS_TAG,
)]
async fn search_handler(
    State(state): State<ApiState>,
    ApiQuery(EmailQuery { email }): ApiQuery<EmailQuery>,
) -> ApiResult<ApiJson<User>> {
    Ok(ApiJson(directory(&state)?.search(email.as_deref())?))
}

/// `/users/*` routes.
pub fn router() -> OpenApiRouter<ApiState> {
    OpenApiRouter::new()
        .routes(routes!(register_handler))
        .routes(routes!(profile_handler, update_profile_handler))
        .routes(routes!(search_handler))
}
