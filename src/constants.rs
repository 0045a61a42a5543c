//! Fixed physical constants (SI), matching the values used by the reference
//! simulator. Models work in geometric units built from these.

/// Solar mass in seconds, G M☉ / c³.
pub const MTSUN_SI: f64 = 4.925490947641266978197229498498379006e-6;

/// Solar mass in metres, G M☉ / c².
pub const MRSUN_SI: f64 = 1.476625038050124729627979840144936351e3;

/// Solar mass in kilograms.
pub const MSUN_SI: f64 = 1.988409870698050731911960804878414216e30;

/// Parsec in metres.
pub const PC_SI: f64 = 3.085677581491367278913937957796471611e16;

/// Megaparsec in metres.
pub const MPC_SI: f64 = 1e6 * PC_SI;

pub const EULER_GAMMA: f64 = 0.577215664901532860606512090082402431;

