use std::sync::Arc;

use rstest::rstest;
use uuid::Uuid;

use crate::modules::sport_events::adapters::outbound::event_store_in_memory::InMemoryEventStore;
use crate::modules::sport_events::application::errors::ApplicationError;
use crate::shell::state::AppState;
use crate::tests::fixtures::commands::{CreateEventBuilder, UpdateScoreBuilder};

fn state() -> AppState {
    AppState::new(Arc::new(InMemoryEventStore::new()))
}

#[rstest]
#[case("World Cup", "England", "France")]
#[case("", "", "")]
#[case("Derby", "Same Team", "Same Team")]
#[case("Coupe d'Europe ⚽", "Åland", "Ísland")]
#[tokio::test]
async fn creates_then_gets_an_unscored_event(
    #[case] title: &str,
    #[case] home: &str,
    #[case] away: &str,
) {
    let state = state();
    let command = CreateEventBuilder::new()
        .match_title(title)
        .home_team_name(home)
        .away_team_name(away)
        .build();

    let event_id = state.create_event_handler.handle(command).await.unwrap();
    let event = state.get_event_handler.handle(event_id).await.unwrap();

    assert_eq!(event.event_id, event_id);
    assert_eq!(event.match_title, title);
    assert_eq!(event.home_team_name, home);
    assert_eq!(event.away_team_name, away);
    assert_eq!((event.home_team_score, event.away_team_score), (0, 0));
    assert_eq!(event.score_last_updated_timestamp, None);
}

#[tokio::test]
async fn lists_every_created_event_with_its_input() {
    let state = state();
    let inputs: Vec<_> = (0..5)
        .map(|i| {
            CreateEventBuilder::new()
                .match_title(format!("match-{i}"))
                .home_team_name(format!("home-{i}"))
                .away_team_name(format!("away-{i}"))
                .build()
        })
        .collect();

    let mut ids = Vec::new();
    for command in inputs.iter().cloned() {
        ids.push(state.create_event_handler.handle(command).await.unwrap());
    }

    let listed = state.list_events_handler.handle().await.unwrap();
    assert_eq!(listed.len(), inputs.len());
    for ((event, input), id) in listed.iter().zip(&inputs).zip(&ids) {
        assert_eq!(event.event_id, *id);
        assert_eq!(event.match_title, input.match_title);
        assert_eq!(event.home_team_name, input.home_team_name);
        assert_eq!(event.away_team_name, input.away_team_name);
        assert_eq!((event.home_team_score, event.away_team_score), (0, 0));
    }
}

#[tokio::test]
async fn never_created_ids_are_not_found() {
    let state = state();
    state
        .create_event_handler
        .handle(CreateEventBuilder::new().build())
        .await
        .unwrap();
    let unknown = Uuid::now_v7();

    let get = state.get_event_handler.handle(unknown).await;
    let update = state
        .update_score_handler
        .handle(unknown, UpdateScoreBuilder::new().build())
        .await;

    assert!(matches!(get, Err(ApplicationError::NotFound(id)) if id == unknown));
    assert!(matches!(update, Err(ApplicationError::NotFound(id)) if id == unknown));
    assert_eq!(state.list_events_handler.handle().await.unwrap().len(), 1);
}
