mod view_angle;
pub use view_angle::{wrap_degrees, ViewAngles};
pub use view_angle::{PITCH, ROLL, YAW};

mod vec3;
pub use vec3::Vec3;
