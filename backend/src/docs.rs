#![allow(dead_code)] // OpenAPI doc stubs are only referenced by utoipa macros.

use crate::{
    auth::{AuthUser, Invitation, Organization, Team, TeamMember},
    handlers::{
        games::ListGamesQuery,
        organizations::{AcceptInvitationPayload, CreateOrganizationPayload},
        seasons::ListSeasonsQuery,
        teams::{CreateTeamPayload, InvitePlayerPayload, UpdateTeamPayload},
    },
    models::{
        contact_info::{PlayerContactInfo, PlayerWithContactInfo, UpsertContactInfoPayload},
        feedback::{CreateFeedbackPayload, FeedbackResponse},
        game::{CreateGamePayload, GameResponse, UpdateGamePayload},
        player::{
            AddPlayerToTeamPayload, BulkPlayerIdsPayload, CreatePlayerPayload, PlayerResponse,
            RosterEntry, TeamPlayer, UpdatePlayerPayload, UpdateTeamPlayerPayload,
        },
        season::{CreateSeasonPayload, SeasonResponse, SeasonStatus, UpdateSeasonPayload},
    },
    services::organization::CreatedOrganization,
};
use utoipa::{
    openapi::security::{ApiKey, ApiKeyValue, SecurityScheme},
    Modify, OpenApi,
};

#[derive(OpenApi)]
#[openapi(
    paths(
        health_doc,
        create_feedback_doc,
        list_players_doc,
        create_player_doc,
        update_player_doc,
        delete_player_doc,
        bulk_delete_players_doc,
        player_contact_info_doc,
        upsert_player_contact_info_doc,
        get_roster_doc,
        add_to_roster_doc,
        update_roster_member_doc,
        remove_from_roster_doc,
        bulk_remove_from_roster_doc,
        list_seasons_doc,
        get_season_doc,
        create_season_doc,
        update_season_doc,
        delete_season_doc,
        list_games_doc,
        get_game_doc,
        create_game_doc,
        update_game_doc,
        delete_game_doc,
        create_organization_doc,
        accept_invitation_doc,
        create_team_doc,
        update_team_doc,
        delete_team_doc,
        list_team_members_doc,
        invite_player_doc,
        remove_team_member_doc
    ),
    components(
        schemas(
            // players & roster
            PlayerResponse,
            CreatePlayerPayload,
            UpdatePlayerPayload,
            BulkPlayerIdsPayload,
            AddPlayerToTeamPayload,
            UpdateTeamPlayerPayload,
            TeamPlayer,
            RosterEntry,
            PlayerContactInfo,
            PlayerWithContactInfo,
            UpsertContactInfoPayload,
            // seasons & games
            SeasonResponse,
            SeasonStatus,
            CreateSeasonPayload,
            UpdateSeasonPayload,
            GameResponse,
            CreateGamePayload,
            UpdateGamePayload,
            // feedback
            CreateFeedbackPayload,
            FeedbackResponse,
            // engine-backed resources
            AuthUser,
            Organization,
            Team,
            TeamMember,
            Invitation,
            CreatedOrganization,
            CreateOrganizationPayload,
            AcceptInvitationPayload,
            CreateTeamPayload,
            UpdateTeamPayload,
            InvitePlayerPayload
        )
    ),
    modifiers(&SecuritySchemes),
    tags(
        (name = "Players", description = "Organization players and team rosters"),
        (name = "Seasons", description = "Season management"),
        (name = "Games", description = "Game scheduling and results"),
        (name = "Feedback", description = "Product feedback intake"),
        (name = "Organizations", description = "Organization and team administration")
    ),
    security(("SessionCookie" = []))
)]
pub struct ApiDoc;

struct SecuritySchemes;

impl Modify for SecuritySchemes {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        let components = openapi.components.get_or_insert_default();
        components.add_security_scheme(
            "SessionCookie",
            SecurityScheme::ApiKey(ApiKey::Cookie(ApiKeyValue::new("laxdb.session_token"))),
        );
    }
}

#[utoipa::path(
    get,
    path = "/api/health",
    responses((status = 200, description = "Service and database reachable")),
    security(())
)]
fn health_doc() {}

#[utoipa::path(
    post,
    path = "/api/feedback",
    request_body = CreateFeedbackPayload,
    responses(
        (status = 201, description = "Feedback stored; notification follows after commit", body = FeedbackResponse),
        (status = 400, description = "Unknown rating or invalid payload")
    ),
    tag = "Feedback",
    security(())
)]
fn create_feedback_doc() {}

#[utoipa::path(
    get,
    path = "/api/players",
    responses((status = 200, body = Vec<PlayerResponse>)),
    tag = "Players"
)]
fn list_players_doc() {}

#[utoipa::path(
    post,
    path = "/api/players",
    request_body = CreatePlayerPayload,
    responses((status = 201, body = PlayerResponse)),
    tag = "Players"
)]
fn create_player_doc() {}

#[utoipa::path(
    patch,
    path = "/api/players/{id}",
    request_body = UpdatePlayerPayload,
    responses((status = 200, body = PlayerResponse), (status = 404)),
    tag = "Players"
)]
fn update_player_doc() {}

#[utoipa::path(
    delete,
    path = "/api/players/{id}",
    responses((status = 204, description = "Player soft-deleted"), (status = 404)),
    tag = "Players"
)]
fn delete_player_doc() {}

#[utoipa::path(
    post,
    path = "/api/players/bulk-delete",
    request_body = BulkPlayerIdsPayload,
    responses((status = 200, description = "Number of players soft-deleted")),
    tag = "Players"
)]
fn bulk_delete_players_doc() {}

#[utoipa::path(
    get,
    path = "/api/players/{id}/contact-info",
    responses((status = 200, body = PlayerWithContactInfo), (status = 404)),
    tag = "Players"
)]
fn player_contact_info_doc() {}

#[utoipa::path(
    put,
    path = "/api/players/{id}/contact-info",
    request_body = UpsertContactInfoPayload,
    responses((status = 200, body = PlayerContactInfo), (status = 404)),
    tag = "Players"
)]
fn upsert_player_contact_info_doc() {}

#[utoipa::path(
    get,
    path = "/api/teams/{team_id}/roster",
    responses((status = 200, body = Vec<RosterEntry>)),
    tag = "Players"
)]
fn get_roster_doc() {}

#[utoipa::path(
    post,
    path = "/api/teams/{team_id}/roster",
    request_body = AddPlayerToTeamPayload,
    responses((status = 201, body = TeamPlayer), (status = 409, description = "Player already rostered")),
    tag = "Players"
)]
fn add_to_roster_doc() {}

#[utoipa::path(
    patch,
    path = "/api/teams/{team_id}/roster/{player_id}",
    request_body = UpdateTeamPlayerPayload,
    responses((status = 200, body = TeamPlayer), (status = 404)),
    tag = "Players"
)]
fn update_roster_member_doc() {}

#[utoipa::path(
    delete,
    path = "/api/teams/{team_id}/roster/{player_id}",
    responses((status = 204, description = "Membership removed"), (status = 404)),
    tag = "Players"
)]
fn remove_from_roster_doc() {}

#[utoipa::path(
    post,
    path = "/api/teams/{team_id}/roster/bulk-remove",
    request_body = BulkPlayerIdsPayload,
    responses((status = 200, description = "Number of memberships removed")),
    tag = "Players"
)]
fn bulk_remove_from_roster_doc() {}

#[utoipa::path(
    get,
    path = "/api/seasons",
    params(ListSeasonsQuery),
    responses((status = 200, body = Vec<SeasonResponse>)),
    tag = "Seasons"
)]
fn list_seasons_doc() {}

#[utoipa::path(
    get,
    path = "/api/seasons/{id}",
    responses((status = 200, body = SeasonResponse), (status = 404)),
    tag = "Seasons"
)]
fn get_season_doc() {}

#[utoipa::path(
    post,
    path = "/api/seasons",
    request_body = CreateSeasonPayload,
    responses((status = 201, body = SeasonResponse)),
    tag = "Seasons"
)]
fn create_season_doc() {}

#[utoipa::path(
    patch,
    path = "/api/seasons/{id}",
    request_body = UpdateSeasonPayload,
    responses((status = 200, body = SeasonResponse), (status = 404)),
    tag = "Seasons"
)]
fn update_season_doc() {}

#[utoipa::path(
    delete,
    path = "/api/seasons/{id}",
    responses((status = 204, description = "Season soft-deleted"), (status = 404)),
    tag = "Seasons"
)]
fn delete_season_doc() {}

#[utoipa::path(
    get,
    path = "/api/games",
    params(ListGamesQuery),
    responses((status = 200, body = Vec<GameResponse>)),
    tag = "Games"
)]
fn list_games_doc() {}

#[utoipa::path(
    get,
    path = "/api/games/{id}",
    responses((status = 200, body = GameResponse), (status = 404)),
    tag = "Games"
)]
fn get_game_doc() {}

#[utoipa::path(
    post,
    path = "/api/games",
    request_body = CreateGamePayload,
    responses((status = 201, body = GameResponse), (status = 404, description = "Referenced season not found")),
    tag = "Games"
)]
fn create_game_doc() {}

#[utoipa::path(
    patch,
    path = "/api/games/{id}",
    request_body = UpdateGamePayload,
    responses((status = 200, body = GameResponse), (status = 404)),
    tag = "Games"
)]
fn update_game_doc() {}

#[utoipa::path(
    delete,
    path = "/api/games/{id}",
    responses((status = 204, description = "Game soft-deleted"), (status = 404)),
    tag = "Games"
)]
fn delete_game_doc() {}

#[utoipa::path(
    post,
    path = "/api/organizations",
    request_body = CreateOrganizationPayload,
    responses(
        (status = 201, body = CreatedOrganization),
        (status = 409, description = "Slug is not available")
    ),
    tag = "Organizations"
)]
fn create_organization_doc() {}

#[utoipa::path(
    post,
    path = "/api/organizations/accept-invitation",
    request_body = AcceptInvitationPayload,
    responses((status = 204, description = "Invitation accepted")),
    tag = "Organizations"
)]
fn accept_invitation_doc() {}

#[utoipa::path(
    post,
    path = "/api/teams",
    request_body = CreateTeamPayload,
    responses((status = 201, body = Team)),
    tag = "Organizations"
)]
fn create_team_doc() {}

#[utoipa::path(
    patch,
    path = "/api/teams/{team_id}",
    request_body = UpdateTeamPayload,
    responses((status = 200, body = Team)),
    tag = "Organizations"
)]
fn update_team_doc() {}

#[utoipa::path(
    delete,
    path = "/api/teams/{team_id}",
    responses((status = 204, description = "Team removed")),
    tag = "Organizations"
)]
fn delete_team_doc() {}

#[utoipa::path(
    get,
    path = "/api/teams/{team_id}/members",
    responses((status = 200, body = Vec<TeamMember>)),
    tag = "Organizations"
)]
fn list_team_members_doc() {}

#[utoipa::path(
    post,
    path = "/api/teams/{team_id}/invitations",
    request_body = InvitePlayerPayload,
    responses((status = 201, body = Invitation)),
    tag = "Organizations"
)]
fn invite_player_doc() {}

#[utoipa::path(
    delete,
    path = "/api/teams/{team_id}/members/{member_id}",
    responses((status = 204, description = "Member removed")),
    tag = "Organizations"
)]
fn remove_team_member_doc() {}
