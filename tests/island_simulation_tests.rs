//! End-to-end scenarios through the session: walking into buildings,
//! talking to residents, shopping and coming back out.

use island_horizons::{
    apply_input, DialogueLine, Direction, GameEvent, IslandError, Location, Panel, PlayerInput,
    Position, Session, Settings,
};
use std::time::Duration;

fn started_session() -> Session {
    let mut session = Session::new(&Settings {
        seed: Some(99),
        ..Settings::default()
    });
    session.start_game();
    session.drain_events();
    session
}

fn settle(session: &mut Session) {
    for _ in 0..70 {
        session.tick(Duration::from_millis(16));
    }
}

#[test]
fn test_round_trip_through_able_sisters() {
    let mut session = started_session();
    session.state.player_pos = Position::new(22.0, 24.0);

    assert!(session.interact());
    assert_eq!(session.transition_destination(), Some(Location::Shop));
    settle(&mut session);
    assert_eq!(session.state.location, Location::Shop);
    assert_eq!(session.player_pos(), Position::new(6.0, 11.0));

    // walk up to Mable and open the shop
    for _ in 0..11 {
        session.move_player(Direction::NORTH);
    }
    for _ in 0..3 {
        session.move_player(Direction::WEST);
    }
    assert!(session.interact());
    assert!(session.overlays.is_open(Panel::Shop));

    let entry = session.buy("🧥").expect("shop stocks coats");
    assert_eq!(entry.price, 500);
    assert!(session.close_top());

    assert!(session.leave_location());
    settle(&mut session);
    assert_eq!(session.state.location, Location::Main);
    assert_eq!(session.player_pos(), Position::new(22.0, 24.0));
    assert_eq!(session.state.bells, 4500);

    let arrivals = session
        .drain_events()
        .into_iter()
        .filter(|e| matches!(e, GameEvent::Arrived(_)))
        .count();
    assert_eq!(arrivals, 2);
}

#[test]
fn test_every_interior_returns_to_its_door() {
    let expected = [
        (Location::Shop, Position::new(22.0, 24.0)),
        (Location::NookCranny, Position::new(8.0, 14.0)),
        (Location::ResidentServices, Position::new(15.0, 11.0)),
        (Location::Museum, Position::new(24.0, 18.0)),
    ];
    for (location, door) in expected {
        let mut session = started_session();
        session.state.location = location;
        session.state.player_pos = location.entry_point();
        assert!(session.leave_location(), "{:?}", location);
        settle(&mut session);
        assert_eq!(session.state.location, Location::Main);
        assert_eq!(session.player_pos(), door, "{:?}", location);
    }
}

#[test]
fn test_input_locked_for_whole_transition() {
    let mut session = started_session();
    session.state.player_pos = Position::new(15.0, 10.0);
    assert!(session.interact());
    assert_eq!(session.transition_destination(), Some(Location::ResidentServices));

    for _ in 0..60 {
        session.tick(Duration::from_millis(16));
        assert!(!session.move_player(Direction::SOUTH));
        assert!(!session.interact());
        assert!(!session.toggle(Panel::Map));
    }
    session.tick(Duration::from_millis(100));
    assert!(!session.is_transitioning());
    assert!(session.move_player(Direction::SOUTH));
}

#[test]
fn test_blathers_conversation_survives_fallback() {
    let mut session = started_session();
    session.state.location = Location::Museum;
    session.state.player_pos = Position::new(15.0, 21.0);

    assert!(session.interact());
    let (ticket, request) = session
        .drain_events()
        .into_iter()
        .find_map(|e| match e {
            GameEvent::DialogueRequested { ticket, request } => Some((ticket, request)),
            _ => None,
        })
        .expect("dialogue requested");
    assert_eq!(request.name, "Blathers");
    assert_eq!(request.message, "Tell me about the museum!");

    assert!(session.accept_dialogue(ticket, DialogueLine::fallback()));
    let panel = session.overlays.dialogue.as_ref().expect("panel open");
    assert!(!panel.is_loading());
    assert_eq!(panel.line.as_ref().map(|l| l.emotion.as_str()), Some("happy"));

    // dialogue does not lock walking
    assert!(session.move_player(Direction::EAST));
}

#[test]
fn test_map_blocks_interaction_but_inventory_does_not() {
    let mut session = started_session();
    session.state.player_pos = Position::new(5.5, 5.5);

    assert!(apply_input(&mut session, PlayerInput::ToggleMap).unwrap());
    assert!(!apply_input(&mut session, PlayerInput::Interact).unwrap());
    assert!(apply_input(&mut session, PlayerInput::ToggleMap).unwrap());

    assert!(apply_input(&mut session, PlayerInput::ToggleInventory).unwrap());
    assert!(apply_input(&mut session, PlayerInput::Interact).unwrap());
    assert!(session.overlays.dialogue.is_some());
}

#[test]
fn test_spending_every_bell() {
    let mut session = started_session();
    let mut bought = 0;
    for index in 0.. {
        match session.buy_at(index) {
            Ok(_) => bought += 1,
            Err(IslandError::AlreadyOwned(_)) => continue,
            Err(IslandError::InsufficientBells { balance, .. }) => {
                assert_eq!(balance, 0);
                break;
            }
            Err(e) => panic!("unexpected error: {}", e),
        }
    }
    assert_eq!(bought, 10);
    assert_eq!(session.state.bells, 0);
}
