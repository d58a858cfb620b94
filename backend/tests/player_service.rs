//! Player and roster flows against a real database.

use uuid::Uuid;

use laxdb_backend::error::AppError;
use laxdb_backend::models::contact_info::UpsertContactInfoPayload;
use laxdb_backend::models::player::{AddPlayerToTeamPayload, UpdatePlayerPayload, UpdateTeamPlayerPayload};
use laxdb_backend::services::PlayerService;

mod support;

fn unique_org() -> String {
    format!("org-{}", Uuid::new_v4())
}

#[tokio::test]
async fn create_with_team_rosters_the_player_atomically() {
    let Some(db) = support::test_database().await else {
        eprintln!("TEST_DATABASE_URL not set; skipping");
        return;
    };
    let session = db.session();
    let service = PlayerService::new();
    let org = unique_org();
    let team = format!("team-{}", Uuid::new_v4());

    let mut payload = support::player_payload("Attack One");
    payload.team_id = Some(team.clone());
    let created = service
        .create(&session, &org, payload)
        .await
        .expect("player created");

    let roster = service.roster(&session, &team).await.expect("roster loads");
    assert_eq!(roster.len(), 1);
    assert_eq!(roster[0].player_id, created.id);
    assert_eq!(roster[0].name, "Attack One");
}

#[tokio::test]
async fn duplicate_roster_membership_is_a_conflict() {
    let Some(db) = support::test_database().await else {
        eprintln!("TEST_DATABASE_URL not set; skipping");
        return;
    };
    let session = db.session();
    let service = PlayerService::new();
    let org = unique_org();
    let team = format!("team-{}", Uuid::new_v4());

    let created = service
        .create(&session, &org, support::player_payload("Middie"))
        .await
        .expect("player created");

    let add = AddPlayerToTeamPayload {
        player_id: created.id,
        jersey_number: Some(7),
        position: Some("midfield".to_string()),
    };
    service
        .add_to_team(&session, &org, &team, add.clone())
        .await
        .expect("first roster add");

    let result = service.add_to_team(&session, &org, &team, add).await;
    assert!(matches!(result, Err(AppError::Conflict(_))));
}

#[tokio::test]
async fn update_membership_and_remove() {
    let Some(db) = support::test_database().await else {
        eprintln!("TEST_DATABASE_URL not set; skipping");
        return;
    };
    let session = db.session();
    let service = PlayerService::new();
    let org = unique_org();
    let team = format!("team-{}", Uuid::new_v4());

    let created = service
        .create(&session, &org, support::player_payload("Goalie"))
        .await
        .expect("player created");
    service
        .add_to_team(
            &session,
            &org,
            &team,
            AddPlayerToTeamPayload {
                player_id: created.id,
                jersey_number: None,
                position: None,
            },
        )
        .await
        .expect("rostered");

    let membership = service
        .update_membership(
            &session,
            &org,
            &team,
            created.id,
            UpdateTeamPlayerPayload {
                jersey_number: Some(30),
                position: Some("goalie".to_string()),
            },
        )
        .await
        .expect("membership updated");
    assert_eq!(membership.jersey_number, Some(30));
    assert_eq!(membership.position.as_deref(), Some("goalie"));

    service
        .remove_from_team(&session, &org, &team, created.id)
        .await
        .expect("removed from roster");
    let roster = service.roster(&session, &team).await.expect("roster loads");
    assert!(roster.is_empty());
}

#[tokio::test]
async fn soft_deleted_players_disappear_from_listings() {
    let Some(db) = support::test_database().await else {
        eprintln!("TEST_DATABASE_URL not set; skipping");
        return;
    };
    let session = db.session();
    let service = PlayerService::new();
    let org = unique_org();

    let created = service
        .create(&session, &org, support::player_payload("Bench Player"))
        .await
        .expect("player created");

    service
        .delete(&session, &org, created.id)
        .await
        .expect("player soft-deleted");

    let listed = service.list(&session, &org).await.expect("list loads");
    assert!(listed.is_empty());

    let result = service
        .update(
            &session,
            &org,
            created.id,
            UpdatePlayerPayload {
                name: Some("Renamed".to_string()),
                email: None,
                phone: None,
                date_of_birth: None,
            },
        )
        .await;
    assert!(matches!(result, Err(AppError::NotFound(_))));
}

#[tokio::test]
async fn players_are_scoped_to_their_organization() {
    let Some(db) = support::test_database().await else {
        eprintln!("TEST_DATABASE_URL not set; skipping");
        return;
    };
    let session = db.session();
    let service = PlayerService::new();
    let org_a = unique_org();
    let org_b = unique_org();

    let created = service
        .create(&session, &org_a, support::player_payload("Defender"))
        .await
        .expect("player created");

    let result = service.delete(&session, &org_b, created.id).await;
    assert!(matches!(result, Err(AppError::NotFound(_))));

    let listed = service.list(&session, &org_b).await.expect("list loads");
    assert!(listed.is_empty());
}

#[tokio::test]
async fn contact_info_upsert_replaces_previous_values() {
    let Some(db) = support::test_database().await else {
        eprintln!("TEST_DATABASE_URL not set; skipping");
        return;
    };
    let session = db.session();
    let service = PlayerService::new();
    let org = unique_org();

    let created = service
        .create(&session, &org, support::player_payload("Faceoff Specialist"))
        .await
        .expect("player created");

    service
        .upsert_contact_info(
            &session,
            &org,
            created.id,
            UpsertContactInfoPayload {
                phone: Some("555-0100".to_string()),
                ..Default::default()
            },
        )
        .await
        .expect("first upsert");

    service
        .upsert_contact_info(
            &session,
            &org,
            created.id,
            UpsertContactInfoPayload {
                phone: Some("555-0199".to_string()),
                instagram: Some("@fogo".to_string()),
                ..Default::default()
            },
        )
        .await
        .expect("second upsert");

    let info = service
        .contact_info(&session, &org, created.id)
        .await
        .expect("contact info loads");
    assert_eq!(info.phone.as_deref(), Some("555-0199"));
    assert_eq!(info.instagram.as_deref(), Some("@fogo"));
}
