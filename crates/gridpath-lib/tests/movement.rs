mod common;

use common::{bridge_map, flat_map, tile, two_level_map};
use gridpath_lib::can_step;

#[test]
fn step_onto_level_ground_keeps_elevation() {
    let terrain = flat_map(5);
    assert_eq!(can_step(&terrain, tile(1, 1), 0, tile(1, 2)), Some(0));
}

#[test]
fn step_out_of_bounds_is_rejected() {
    let terrain = flat_map(5);
    assert_eq!(can_step(&terrain, tile(0, 0), 0, tile(-1, 0)), None);
    assert_eq!(can_step(&terrain, tile(4, 4), 0, tile(4, 5)), None);
}

#[test]
fn step_into_wall_is_rejected() {
    let mut terrain = flat_map(5);
    terrain.add_wall(tile(2, 2));
    assert_eq!(can_step(&terrain, tile(2, 1), 0, tile(2, 2)), None);
}

#[test]
fn step_onto_void_is_rejected() {
    let mut terrain = flat_map(5);
    terrain.remove_ground(tile(3, 3));
    assert_eq!(can_step(&terrain, tile(3, 2), 0, tile(3, 3)), None);
}

#[test]
fn cliff_is_rejected_without_a_stair() {
    let mut terrain = flat_map(5);
    terrain.set_elevation(tile(2, 3), 1);
    assert_eq!(can_step(&terrain, tile(2, 2), 0, tile(2, 3)), None);
    assert_eq!(can_step(&terrain, tile(2, 3), 1, tile(2, 2)), None);
}

#[test]
fn stair_ascent_from_low_access_raises_elevation() {
    let terrain = two_level_map();
    assert_eq!(can_step(&terrain, tile(3, 4), 0, tile(3, 5)), Some(1));
}

#[test]
fn stair_ascent_requires_standing_on_low_access() {
    let terrain = two_level_map();
    // Approaching the stair sideways never triggers the climb rule, and the
    // bare stair tile offers no ground to walk on instead.
    assert_eq!(can_step(&terrain, tile(2, 5), 0, tile(3, 5)), None);
}

#[test]
fn stair_ascent_requires_valid_high_access() {
    let mut terrain = two_level_map();
    terrain.add_wall(tile(3, 6));
    assert_eq!(can_step(&terrain, tile(3, 4), 0, tile(3, 5)), None);
}

#[test]
fn stair_descent_from_high_access_lowers_elevation() {
    let terrain = two_level_map();
    assert_eq!(can_step(&terrain, tile(3, 6), 1, tile(3, 5)), Some(0));
}

#[test]
fn leaving_a_stair_continues_on_plain_rules() {
    let terrain = two_level_map();
    // Up the stair, then off onto the plateau.
    assert_eq!(can_step(&terrain, tile(3, 5), 1, tile(3, 6)), Some(1));
    // Down the stair, then off onto the ground row.
    assert_eq!(can_step(&terrain, tile(3, 5), 0, tile(3, 4)), Some(0));
}

#[test]
fn bridge_carries_upper_level_traffic() {
    let terrain = bridge_map();
    assert_eq!(can_step(&terrain, tile(5, 4), 1, tile(5, 5)), Some(1));
    assert_eq!(can_step(&terrain, tile(5, 5), 1, tile(5, 6)), Some(1));
    assert_eq!(can_step(&terrain, tile(5, 8), 1, tile(5, 9)), Some(1));
}

#[test]
fn bridge_tile_with_ground_below_is_a_tunnel() {
    let terrain = bridge_map();
    assert_eq!(can_step(&terrain, tile(4, 6), 0, tile(5, 6)), Some(0));
    assert_eq!(can_step(&terrain, tile(5, 6), 0, tile(6, 6)), Some(0));
}

#[test]
fn bridge_tile_without_ground_rejects_entry_from_below() {
    let terrain = bridge_map();
    // (5, 5) carries only the bridge deck; an elevation-0 agent cannot
    // climb onto it from the tunnel.
    assert_eq!(can_step(&terrain, tile(5, 6), 0, tile(5, 5)), None);
}

#[test]
fn bridge_deck_does_not_drop_to_the_tunnel() {
    let terrain = bridge_map();
    // An agent on the deck stays on the deck: stepping to the tunnel tile
    // keeps elevation 1 rather than falling through.
    assert_eq!(can_step(&terrain, tile(5, 5), 1, tile(5, 6)), Some(1));
}
