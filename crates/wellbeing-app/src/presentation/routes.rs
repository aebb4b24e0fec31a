use axum::{
    extract::{
        rejection::{JsonRejection, QueryRejection},
        Path, Query, State,
    },
    Json,
};

use super::auth::AuthenticatedUser;
use super::error::ApiError;
use super::state::AppState;
use crate::application::commands::{
    CommandHandler, LoginCommand, RegisterUserCommand, SaveChecklistCommand,
};
use crate::application::dtos::{
    ChecklistDto, ChecklistInput, LoginInput, MessageDto, RegisterUserInput, StreakDto,
    StreakParams, TokenDto,
};

pub async fn root() -> Json<MessageDto> {
    Json(MessageDto::new("Well-Being Tracker API is running!"))
}

pub async fn register(
    State(state): State<AppState>,
    payload: Result<Json<RegisterUserInput>, JsonRejection>,
) -> Result<Json<MessageDto>, ApiError> {
    let Json(input) = payload?;

    state
        .commands
        .register_user
        .handle(RegisterUserCommand {
            username: input.username,
            email: input.email,
            password: input.password,
        })
        .await?;

    Ok(Json(MessageDto::new("User registered successfully")))
}

pub async fn login(
    State(state): State<AppState>,
    payload: Result<Json<LoginInput>, JsonRejection>,
) -> Result<Json<TokenDto>, ApiError> {
    let Json(input) = payload?;

    let result = state
        .commands
        .login
        .handle(LoginCommand {
            username: input.username,
            password: input.password,
        })
        .await?;

    Ok(Json(TokenDto::bearer(result.access_token)))
}

pub async fn save_checklist(
    State(state): State<AppState>,
    AuthenticatedUser(username): AuthenticatedUser,
    payload: Result<Json<ChecklistInput>, JsonRejection>,
) -> Result<Json<MessageDto>, ApiError> {
    let Json(input) = payload?;

    state
        .commands
        .save_checklist
        .handle(SaveChecklistCommand {
            username,
            flags: input.flags(),
            date: input.date,
            cigarettes: input.cigarettes,
            steps: input.steps,
        })
        .await?;

    Ok(Json(MessageDto::new("Checklist saved successfully")))
}

pub async fn get_checklist(
    State(state): State<AppState>,
    AuthenticatedUser(username): AuthenticatedUser,
    Path(date): Path<String>,
) -> Result<Json<ChecklistDto>, ApiError> {
    let dto = state.queries.checklist.get_for_date(&username, &date).await?;
    Ok(Json(dto))
}

pub async fn get_streaks(
    State(state): State<AppState>,
    AuthenticatedUser(username): AuthenticatedUser,
    params: Result<Query<StreakParams>, QueryRejection>,
) -> Result<Json<StreakDto>, ApiError> {
    let Query(params) = params?;

    let dto = state
        .queries
        .streak
        .get_streaks(&username, params.date.as_deref())
        .await?;
    Ok(Json(dto))
}
