use console_invaders::entities::*;

#[test]
fn entity_clone_and_eq() {
    // Enums derive PartialEq — equality comparisons must work
    assert_eq!(Mode::Playing, Mode::Playing);
    assert_ne!(Mode::Playing, Mode::GameOver);
    assert_eq!(Action::Shoot, Action::Shoot);
    assert_ne!(Action::MoveLeft, Action::MoveRight);
    assert_eq!(Cell::Alien, Cell::Alien);
    assert_ne!(Cell::Laser, Cell::Empty);

    let alien = Alien { x: 3, y: 1, is_hit: false };
    assert_eq!(alien.clone(), alien);
}

#[test]
fn game_state_clone_is_independent() {
    let original = GameState {
        width: 20,
        height: 10,
        player_x: 10,
        aliens: Vec::new(),
        laser_active: false,
        explosions: Vec::new(),
        big_explosion: None,
        direction: 1,
        score: 0,
        level: 1,
        mode: Mode::Playing,
        needs_render: false,
    };
    let mut cloned = original.clone();

    // Mutating the clone must not affect the original
    cloned.player_x = 0;
    cloned.score = 999;
    cloned.aliens.push(Alien { x: 5, y: 5, is_hit: false });

    assert_eq!(original.player_x, 10);
    assert_eq!(original.score, 0);
    assert!(original.aliens.is_empty());
}

#[test]
fn player_row_is_the_bottom_row() {
    let s = GameState {
        width: 20,
        height: 10,
        player_x: 10,
        aliens: Vec::new(),
        laser_active: false,
        explosions: Vec::new(),
        big_explosion: None,
        direction: 1,
        score: 0,
        level: 1,
        mode: Mode::NotStarted,
        needs_render: false,
    };
    assert_eq!(s.player_row(), 9);
}
