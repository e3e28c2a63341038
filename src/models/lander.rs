pub trait LanderProperties {
    /// Total mass for a fuel fraction in [0, 1]. Values outside that range are not rejected.
    fn mass(&self, fuel: f64) -> f64;
    fn drag_coefficient(&self) -> f64;
    fn reference_area(&self) -> f64;
    fn chute_drag_coefficient(&self) -> f64;
    fn chute_reference_area(&self) -> f64;
}
