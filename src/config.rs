// Tue Aug 25 2026 - Alex

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    pub input_file: Option<PathBuf>,
    pub output_file: Option<PathBuf>,
    pub verbosity: usize,
    pub use_color: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            input_file: None,
            output_file: None,
            verbosity: 0,
            use_color: true,
        }
    }
}

impl Config {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_input_file(mut self, input: PathBuf) -> Self {
        self.input_file = Some(input);
        self
    }

    pub fn with_output_file(mut self, output: PathBuf) -> Self {
        self.output_file = Some(output);
        self
    }

    pub fn with_verbosity(mut self, verbosity: usize) -> Self {
        self.verbosity = verbosity;
        self
    }

    pub fn with_color(mut self, use_color: bool) -> Self {
        self.use_color = use_color;
        self
    }

    pub fn validate(&self) -> Result<(), String> {
        if self.input_file.is_none() {
            return Err("input_file must be set".to_string());
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_requires_input() {
        assert!(Config::new().validate().is_err());

        let config = Config::new().with_input_file(PathBuf::from("defs.txt"));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_config_builder() {
        let config = Config::new()
            .with_input_file(PathBuf::from("defs.txt"))
            .with_output_file(PathBuf::from("checker.c"))
            .with_verbosity(2)
            .with_color(false);

        assert_eq!(config.output_file, Some(PathBuf::from("checker.c")));
        assert_eq!(config.verbosity, 2);
        assert!(!config.use_color);
    }
}
