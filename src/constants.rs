pub const G: f64 = 6.673e-11; // Gravitational constant (m³/kg/s²)
pub const M_MARS: f64 = 6.42e23; // Mass of Mars (kg)
pub const R_MARS: f64 = 3_386_000.0; // Radius of Mars (m)
pub const EXOSPHERE: f64 = 200_000.0; // Edge of the atmosphere (m)

// Atmosphere
pub const SURFACE_DENSITY: f64 = 0.017; // kg/m³
pub const SCALE_HEIGHT: f64 = 11_000.0; // m

// Lander properties
pub const UNLOADED_LANDER_MASS: f64 = 100.0; // kg
pub const FUEL_CAPACITY: f64 = 100.0; // l
pub const FUEL_DENSITY: f64 = 1.0; // kg/l
pub const FUEL_RATE_AT_MAX_THRUST: f64 = 0.5; // l/s
pub const LANDER_SIZE: f64 = 1.0; // m
pub const DRAG_COEF_LANDER: f64 = 1.0;
pub const DRAG_COEF_CHUTE: f64 = 2.0;

// Operating limits
pub const MAX_PARACHUTE_DRAG: f64 = 20_000.0; // N
pub const MAX_PARACHUTE_SPEED: f64 = 500.0; // m/s
pub const MAX_IMPACT_GROUND_SPEED: f64 = 1.0; // m/s
pub const MAX_IMPACT_DESCENT_RATE: f64 = 1.0; // m/s

// Math
pub const PI: f64 = std::f64::consts::PI;
