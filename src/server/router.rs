use axum::Router;
use utoipa::{
    openapi::security::{HttpAuthScheme, HttpBuilder, SecurityScheme},
    Modify, OpenApi,
};
use utoipa_axum::{router::OpenApiRouter, routes};
use utoipa_swagger_ui::SwaggerUi;

use crate::server::{
    controller::{account, auth, availability, call_up, due, event, statistic, team},
    state::AppState,
};

#[derive(OpenApi)]
#[openapi(
    info(title = "Clubhouse API", description = "Sports club management backend"),
    modifiers(&BearerAuth),
    tags(
        (name = "auth", description = "Login and self-registration"),
        (name = "account", description = "Club accounts"),
        (name = "team", description = "Teams and rosters"),
        (name = "event", description = "Trainings, matches and meetings"),
        (name = "call_up", description = "Players called up for events"),
        (name = "availability", description = "Attendance answers"),
        (name = "statistic", description = "Per-player match statistics"),
        (name = "due", description = "Membership dues")
    )
)]
struct ApiDoc;

/// Registers the bearer token scheme referenced by protected endpoints.
struct BearerAuth;

impl Modify for BearerAuth {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        let components = openapi.components.get_or_insert_with(Default::default);
        components.add_security_scheme(
            "bearer",
            SecurityScheme::Http(
                HttpBuilder::new()
                    .scheme(HttpAuthScheme::Bearer)
                    .bearer_format("JWT")
                    .build(),
            ),
        );
    }
}

/// Builds the API router together with its OpenAPI document and Swagger UI.
pub fn router() -> Router<AppState> {
    let (router, api) = OpenApiRouter::with_openapi(ApiDoc::openapi())
        .routes(routes!(auth::login))
        .routes(routes!(auth::register))
        .routes(routes!(account::get_accounts, account::create_account))
        .routes(routes!(account::get_me))
        .routes(routes!(account::change_password))
        .routes(routes!(
            account::get_account,
            account::update_account,
            account::delete_account
        ))
        .routes(routes!(team::get_teams, team::create_team))
        .routes(routes!(team::get_team, team::update_team, team::delete_team))
        .routes(routes!(team::get_team_members))
        .routes(routes!(event::get_events, event::create_event))
        .routes(routes!(
            event::get_event,
            event::update_event,
            event::delete_event
        ))
        .routes(routes!(call_up::get_call_ups, call_up::create_call_up))
        .routes(routes!(
            call_up::get_call_up,
            call_up::update_call_up,
            call_up::delete_call_up
        ))
        .routes(routes!(
            availability::get_availabilities,
            availability::create_availability
        ))
        .routes(routes!(
            availability::get_availability,
            availability::update_availability,
            availability::delete_availability
        ))
        .routes(routes!(statistic::get_statistics, statistic::save_statistic))
        .routes(routes!(
            statistic::get_statistic,
            statistic::update_statistic,
            statistic::delete_statistic
        ))
        .routes(routes!(due::get_dues, due::create_due))
        .routes(routes!(due::get_due, due::update_due, due::delete_due))
        .split_for_parts();

    router.merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", api))
}
