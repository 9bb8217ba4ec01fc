// Common types used across multiple domains and layers
//
// These types are shared between the kernel and domain layers to avoid
// circular dependencies while maintaining type safety.

use anyhow::Result;
use serde::{Deserialize, Serialize};

/// A geographic point in decimal degrees.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinates {
    pub latitude: f64,
    pub longitude: f64,
}

impl Coordinates {
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }

    /// Both components are real numbers (not NaN, not infinite).
    pub fn is_finite(&self) -> bool {
        self.latitude.is_finite() && self.longitude.is_finite()
    }

    /// Validate that the point is a plausible Earth coordinate.
    ///
    /// This runs where coordinates enter the system (help request creation,
    /// availability reports). The distance formula itself stays unchecked.
    pub fn ensure_valid(&self) -> Result<()> {
        if !self.is_finite() {
            anyhow::bail!("Coordinates must be finite numbers");
        }
        if !(-90.0..=90.0).contains(&self.latitude) {
            anyhow::bail!("Latitude {} is out of range [-90, 90]", self.latitude);
        }
        if !(-180.0..=180.0).contains(&self.longitude) {
            anyhow::bail!("Longitude {} is out of range [-180, 180]", self.longitude);
        }
        Ok(())
    }
}

/// Role enum for the user directory
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    Patient,
    Volunteer,
    Admin,
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Role::Patient => write!(f, "patient"),
            Role::Volunteer => write!(f, "volunteer"),
            Role::Admin => write!(f, "admin"),
        }
    }
}

impl std::str::FromStr for Role {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "patient" => Ok(Role::Patient),
            "volunteer" => Ok(Role::Volunteer),
            "admin" => Ok(Role::Admin),
            _ => Err(anyhow::anyhow!("Invalid role: {}", s)),
        }
    }
}
