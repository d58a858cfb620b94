//! Season and game flows against a real database.

use chrono::NaiveDate;
use uuid::Uuid;

use laxdb_backend::error::AppError;
use laxdb_backend::models::game::{CreateGamePayload, UpdateGamePayload};
use laxdb_backend::models::season::{CreateSeasonPayload, SeasonStatus, UpdateSeasonPayload};
use laxdb_backend::services::{GameService, SeasonService};

mod support;

fn unique_org() -> String {
    format!("org-{}", Uuid::new_v4())
}

fn season_payload(team_id: &str, name: &str) -> CreateSeasonPayload {
    CreateSeasonPayload {
        team_id: team_id.to_string(),
        name: name.to_string(),
        start_date: NaiveDate::from_ymd_opt(2026, 3, 1).unwrap(),
        end_date: Some(NaiveDate::from_ymd_opt(2026, 6, 15).unwrap()),
        status: None,
        division: Some("Division II".to_string()),
    }
}

#[tokio::test]
async fn seasons_filter_by_team_and_soft_delete() {
    let Some(db) = support::test_database().await else {
        eprintln!("TEST_DATABASE_URL not set; skipping");
        return;
    };
    let session = db.session();
    let service = SeasonService::new();
    let org = unique_org();
    let team_a = format!("team-{}", Uuid::new_v4());
    let team_b = format!("team-{}", Uuid::new_v4());

    let spring = service
        .create(&session, &org, season_payload(&team_a, "Spring 2026"))
        .await
        .expect("season created");
    service
        .create(&session, &org, season_payload(&team_b, "Fall 2026"))
        .await
        .expect("second season created");

    let all = service.list(&session, &org, None).await.expect("list all");
    assert_eq!(all.len(), 2);

    let only_a = service
        .list(&session, &org, Some(&team_a))
        .await
        .expect("list filtered");
    assert_eq!(only_a.len(), 1);
    assert_eq!(only_a[0].name, "Spring 2026");

    service
        .delete(&session, &org, spring.id)
        .await
        .expect("season soft-deleted");
    let remaining = service.list(&session, &org, None).await.expect("list again");
    assert_eq!(remaining.len(), 1);
    assert_eq!(remaining[0].name, "Fall 2026");
}

#[tokio::test]
async fn season_update_applies_partial_changes() {
    let Some(db) = support::test_database().await else {
        eprintln!("TEST_DATABASE_URL not set; skipping");
        return;
    };
    let session = db.session();
    let service = SeasonService::new();
    let org = unique_org();
    let team = format!("team-{}", Uuid::new_v4());

    let created = service
        .create(&session, &org, season_payload(&team, "Spring 2026"))
        .await
        .expect("season created");
    assert_eq!(created.status, SeasonStatus::Upcoming);

    let updated = service
        .update(
            &session,
            &org,
            created.id,
            UpdateSeasonPayload {
                name: None,
                start_date: None,
                end_date: None,
                status: Some(SeasonStatus::Active),
                division: None,
            },
        )
        .await
        .expect("season updated");
    assert_eq!(updated.status, SeasonStatus::Active);
    assert_eq!(updated.name, "Spring 2026");
}

#[tokio::test]
async fn game_creation_verifies_season_ownership() {
    let Some(db) = support::test_database().await else {
        eprintln!("TEST_DATABASE_URL not set; skipping");
        return;
    };
    let session = db.session();
    let seasons = SeasonService::new();
    let games = GameService::new();
    let org = unique_org();
    let team = format!("team-{}", Uuid::new_v4());
    let other_team = format!("team-{}", Uuid::new_v4());

    let season = seasons
        .create(&session, &org, season_payload(&team, "Spring 2026"))
        .await
        .expect("season created");

    // Season belongs to `team`, so a game for `other_team` must be rejected
    // and leave nothing behind.
    let result = games
        .create(
            &session,
            &org,
            CreateGamePayload {
                team_id: other_team.clone(),
                season_id: Some(season.id),
                opponent_name: "Ridge High".to_string(),
                scheduled_at: None,
            },
        )
        .await;
    assert!(matches!(result, Err(AppError::BadRequest(_))));
    let listed = games
        .list(&session, &org, Some(&other_team), None)
        .await
        .expect("list games");
    assert!(listed.is_empty());

    let game = games
        .create(
            &session,
            &org,
            CreateGamePayload {
                team_id: team.clone(),
                season_id: Some(season.id),
                opponent_name: "Ridge High".to_string(),
                scheduled_at: None,
            },
        )
        .await
        .expect("game created");
    assert_eq!(game.season_id, Some(season.id));

    let by_season = games
        .list(&session, &org, None, Some(season.id))
        .await
        .expect("list by season");
    assert_eq!(by_season.len(), 1);
}

#[tokio::test]
async fn game_scores_update_and_delete() {
    let Some(db) = support::test_database().await else {
        eprintln!("TEST_DATABASE_URL not set; skipping");
        return;
    };
    let session = db.session();
    let games = GameService::new();
    let org = unique_org();
    let team = format!("team-{}", Uuid::new_v4());

    let game = games
        .create(
            &session,
            &org,
            CreateGamePayload {
                team_id: team.clone(),
                season_id: None,
                opponent_name: "Lakeside".to_string(),
                scheduled_at: None,
            },
        )
        .await
        .expect("game created");

    let updated = games
        .update(
            &session,
            &org,
            game.id,
            UpdateGamePayload {
                opponent_name: None,
                season_id: None,
                scheduled_at: None,
                home_score: Some(12),
                away_score: Some(9),
            },
        )
        .await
        .expect("game updated");
    assert_eq!(updated.home_score, Some(12));
    assert_eq!(updated.away_score, Some(9));

    games
        .delete(&session, &org, game.id)
        .await
        .expect("game soft-deleted");
    let result = games.get(&session, &org, game.id).await;
    assert!(matches!(result, Err(AppError::NotFound(_))));
}
