use super::*;

#[test]
fn never_collides_anywhere() {
    assert!(!NeverCollides.is_colliding(&Position::ORIGIN));
    assert!(!NeverCollides.is_colliding(&Position::new(1e9, -1e9, 3.0)));
}

#[test]
fn always_collides_anywhere() {
    assert!(AlwaysCollides.is_colliding(&Position::ORIGIN));
    assert!(AlwaysCollides.is_colliding(&Position::new(5.0, 3.0, -2.0)));
}

#[test]
fn toggle_clones_share_flag() {
    let t = Toggle::default();
    let host = t.clone();
    assert!(!t.is_colliding(&Position::ORIGIN));
    host.set(true);
    assert!(t.get());
    assert!(t.is_colliding(&Position::ORIGIN));
}

#[test]
fn closure_sees_position() {
    let below_floor = |p: &Position| p.y < 0.0;
    assert!(below_floor.is_colliding(&Position::new(0.0, -0.5, 0.0)));
    assert!(!below_floor.is_colliding(&Position::new(0.0, 0.5, 0.0)));
}
