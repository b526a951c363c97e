#[derive(Clone, Copy, Debug)]
pub struct Config {
    pub grid_cols: usize,
    pub grid_rows: usize,
    pub neighbor_count: usize,
    pub drift_range: f32,
    pub drift_duration_min: f32,
    pub drift_duration_max: f32,
    pub radius_min: f32,
    pub radius_max: f32,
    pub near_dist_sq: f32,
    pub mid_dist_sq: f32,
    pub far_dist_sq: f32,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            grid_cols: 20,
            grid_rows: 20,
            neighbor_count: 5,
            drift_range: 50.0,
            drift_duration_min: 1.0,
            drift_duration_max: 2.0,
            radius_min: 2.0,
            radius_max: 6.0,
            near_dist_sq: 4000.0,
            mid_dist_sq: 20000.0,
            far_dist_sq: 40000.0,
        }
    }
}
