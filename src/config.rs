use std::net::{Ipv4Addr, SocketAddr};
use std::path::PathBuf;

use serde::Serialize;

/// Dataset file name looked up in the working directory.
pub const DEFAULT_DATA_FILE: &str = "spacex_launch_dash.csv";

/// Port the dashboard listens on (the Dash default).
pub const DEFAULT_PORT: u16 = 8050;

/// Static dashboard settings. There are no flags or environment overrides;
/// only `RUST_LOG` is read, by the logger.
#[derive(Debug, Clone)]
pub struct DashConfig {
    pub data_path: PathBuf,
    pub bind_addr: SocketAddr,
    pub slider: SliderConfig,
}

impl Default for DashConfig {
    fn default() -> Self {
        Self {
            data_path: PathBuf::from(DEFAULT_DATA_FILE),
            bind_addr: SocketAddr::from((Ipv4Addr::LOCALHOST, DEFAULT_PORT)),
            slider: SliderConfig::default(),
        }
    }
}

/// Display bounds of the payload range control. The selected range itself
/// starts at the observed min/max, which need not sit on a step.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SliderConfig {
    pub min: f64,
    pub max: f64,
    pub step: f64,
}

impl Default for SliderConfig {
    fn default() -> Self {
        Self {
            min: 0.0,
            max: 10_000.0,
            step: 1_000.0,
        }
    }
}

impl SliderConfig {
    /// Tick marks `(value, "{value} kg")` at every step.
    pub fn marks(&self) -> Vec<(f64, String)> {
        let mut marks = Vec::new();
        if self.step <= 0.0 {
            return marks;
        }
        let mut value = self.min;
        while value <= self.max {
            marks.push((value, format!("{value} kg")));
            value += self.step;
        }
        marks
    }
}
