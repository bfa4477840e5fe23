use crate::{error::ApiResult, service::GameService, service_from_request};
use axum_valid::Garde;
#[allow(unused_imports)]
use gamedex_dal::game::{CreateGame, Game};

use axum::{
    Json,
    extract::Path,
    response::IntoResponse,
    routing::{get, post},
};
use http::StatusCode;

use crate::state::AppState;

service_from_request!(GameService);

#[cfg(feature = "openapi")]
#[derive(utoipa::OpenApi)]
#[openapi(paths(
    add_game,
    get_game,
    update_game,
    delete_game,
    find_by_name,
    find_by_developer,
    find_by_platform
))]
struct ModuleDocs;

#[cfg(feature = "openapi")]
pub fn api_docs() -> utoipa::openapi::OpenApi {
    use utoipa::OpenApi as _;
    ModuleDocs::openapi()
}

#[cfg_attr(feature = "openapi", utoipa::path(post, path = "", tag = "Games", operation_id = "addNewGame",
    responses((status = StatusCode::CREATED, description = "Create new Game", body = Game))))]
async fn add_game(
    games: GameService,
    Garde(Json(payload)): Garde<Json<CreateGame>>,
) -> ApiResult<impl IntoResponse> {
    let game = games.save_game(payload).await?;

    Ok((StatusCode::CREATED, Json(game)))
}

#[cfg_attr(feature = "openapi", utoipa::path(get, path = "/{id}", tag = "Games", operation_id = "getGameById",
    responses((status = StatusCode::OK, description = "Get Game by id", body = Game))))]
async fn get_game(Path(id): Path<i64>, games: GameService) -> ApiResult<impl IntoResponse> {
    let game = games.get_game_by_id(id).await?;

    Ok((StatusCode::OK, Json(game)))
}

#[cfg_attr(feature = "openapi", utoipa::path(put, path = "/{id}", tag = "Games", operation_id = "updateGame",
    responses((status = StatusCode::OK, description = "Update existing Game", body = Game))))]
async fn update_game(
    Path(id): Path<i64>,
    games: GameService,
    Garde(Json(payload)): Garde<Json<CreateGame>>,
) -> ApiResult<impl IntoResponse> {
    let game = games.update_game(id, payload).await?;

    Ok((StatusCode::OK, Json(game)))
}

#[cfg_attr(feature = "openapi", utoipa::path(delete, path = "/{id}", tag = "Games", operation_id = "deleteGame",
    responses((status = StatusCode::NO_CONTENT, description = "Deleted successfully"))))]
async fn delete_game(Path(id): Path<i64>, games: GameService) -> ApiResult<impl IntoResponse> {
    games.delete_game_by_id(id).await?;

    Ok((StatusCode::NO_CONTENT, ()))
}

#[cfg_attr(feature = "openapi", utoipa::path(get, path = "/name/{name}", tag = "Games", operation_id = "findAllGameByName",
    responses((status = StatusCode::OK, description = "Games with given name", body = Vec<Game>))))]
async fn find_by_name(Path(name): Path<String>, games: GameService) -> ApiResult<impl IntoResponse> {
    let found = games.find_all_by_name(&name).await?;

    Ok((StatusCode::OK, Json(found)))
}

#[cfg_attr(feature = "openapi", utoipa::path(get, path = "/developer/{developer}", tag = "Games", operation_id = "findAllGameByDeveloper",
    responses((status = StatusCode::OK, description = "Games from given developer", body = Vec<Game>))))]
async fn find_by_developer(
    Path(developer): Path<String>,
    games: GameService,
) -> ApiResult<impl IntoResponse> {
    let found = games.find_all_by_developer(&developer).await?;

    Ok((StatusCode::OK, Json(found)))
}

#[cfg_attr(feature = "openapi", utoipa::path(get, path = "/platform/{platform}", tag = "Games", operation_id = "findAllGameByPlatform",
    responses((status = StatusCode::OK, description = "Games for given platform", body = Vec<Game>))))]
async fn find_by_platform(
    Path(platform): Path<String>,
    games: GameService,
) -> ApiResult<impl IntoResponse> {
    let found = games.find_all_by_platform(&platform).await?;

    Ok((StatusCode::OK, Json(found)))
}

pub fn router() -> axum::Router<AppState> {
    axum::Router::new()
        .route("/", post(add_game))
        .route(
            "/{id}",
            get(get_game).put(update_game).delete(delete_game),
        )
        .route("/name/{name}", get(find_by_name))
        .route("/developer/{developer}", get(find_by_developer))
        .route("/platform/{platform}", get(find_by_platform))
}
