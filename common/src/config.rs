use std::ops::Range;

#[derive(Debug, Clone)]
pub struct Config {
    /// Prefix of generated cable ids, e.g. `cable-` in `cable-42`.
    pub cable_id_prefix: String,
    /// Numbers drawn for generated cable ids (end exclusive).
    pub cable_id_range: Range<u32>,
    /// Random draws attempted before falling back to the lowest free number.
    pub max_random_id_attempts: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            cable_id_prefix: String::from("cable-"),
            cable_id_range: 9..9999,
            max_random_id_attempts: 64,
        }
    }
}
