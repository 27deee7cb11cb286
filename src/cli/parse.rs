use graphstep_core::format::OutputFormat;
use graphstep_core::graph::{Algorithm, RepresentationKind};

/// Parse output format from string
pub fn parse_output_format(s: &str) -> std::result::Result<OutputFormat, String> {
    s.parse::<OutputFormat>().map_err(|e| e.to_string())
}

/// Parse algorithm id from string
pub fn parse_algorithm(s: &str) -> std::result::Result<Algorithm, String> {
    s.parse::<Algorithm>().map_err(|e| e.to_string())
}

/// Parse representation kind from string
pub fn parse_representation(s: &str) -> std::result::Result<RepresentationKind, String> {
    s.parse::<RepresentationKind>().map_err(|e| e.to_string())
}

/// Parse a positive animation interval in milliseconds
pub fn parse_speed(s: &str) -> std::result::Result<u64, String> {
    match s.parse::<u64>() {
        Ok(0) => Err("speed must be greater than 0".to_string()),
        Ok(ms) => Ok(ms),
        Err(e) => Err(format!("invalid speed '{}': {}", s, e)),
    }
}
