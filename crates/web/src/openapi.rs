use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    paths(crate::dispatch::handle_action),
    components(
        schemas(
            crate::dispatch::Action,
            crate::dispatch::ActionRequest,
            storage::dto::prediction::SubmitPredictionRequest,
            storage::dto::prediction::PredictionWithPoints,
            storage::dto::matches::SetMatchResultRequest,
            storage::dto::matches::MatchResponse,
            storage::dto::matches::MatchWithPredictions,
            storage::dto::leaderboard::LeaderboardEntry,
            storage::models::Match,
            storage::models::MatchId,
            storage::models::Prediction,
        )
    ),
    tags(
        (name = "actions", description = "Prediction pool action entry point"),
    )
)]
pub struct ApiDoc;
