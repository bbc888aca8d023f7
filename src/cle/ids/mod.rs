mod movement_id;

pub use movement_id::MovementId;
