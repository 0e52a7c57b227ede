//! Action leaves for the survival tree, grouped by concern.

pub mod items;
pub mod locomotion;
pub mod structures;
pub mod sweep;
pub mod vitals;

pub use items::{pickup_item, set_item_as_target, spot_new_item};
pub use locomotion::{arrive_at_target, go_to_target, look_around_go_to_target, wander_around};
pub use structures::{
    check_structure_center, check_structure_corner, leave_structure, mark_structure_checked,
    set_structure_as_target, set_target_structure,
};
pub use sweep::{check_world_corner, reset_structures};
pub use vitals::{
    start_sprinting, stop_sprinting, use_any_food, use_any_health_kit, use_best_food,
    use_best_health_kit,
};
