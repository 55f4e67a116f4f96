pub mod aircraft;
pub mod camera;
pub mod controls;
pub mod physics;
pub mod world;

pub use aircraft::{
    AircraftConfig, AircraftState, EulerAngles, PlayerAircraft, BODY_FORWARD, BODY_UP,
};
pub use camera::{CameraTarget, FollowCamera, FollowStrategy};
pub use controls::ControlInput;
pub use physics::{Force, ForceBalance, ForceCategory, ReferenceFrame};
pub use world::{
    Bounds, CloudPuff, EntityId, EntityKind, Interval, Motion, PuffShape, RenderAttributes,
    WorldEntity,
};
