pub struct DefaultsConfig {
    pub species: String,
    pub filter: bool,
    pub sum: bool,
    pub dx: String,
    pub dy: String,
    pub dz: String,
    pub tag: String,
    pub output_dir: String,
}

impl Default for DefaultsConfig {
    fn default() -> Self {
        Self {
            species: "H+ H2+ H3+".to_string(),
            filter: false,
            sum: false,
            dx: "-7.0 7.0".to_string(),
            dy: "8 9.5".to_string(),
            dz: "164.0 165.6".to_string(),
            tag: String::new(),
            output_dir: ".".to_string(),
        }
    }
}
