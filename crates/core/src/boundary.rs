//! Elliptical summary of a flooded area for map rendering
//!
//! Floods run out along the slope, so the extent is drawn as an ellipse
//! stretched along its longer axis and compressed along the shorter one.
//! The ellipse is always oriented along the fixed downhill bearing, whatever
//! shape the flooded cells actually have.

use crate::core_types::{Degrees, FloodCell, GeoPoint, Kilometers};
use serde::{Deserialize, Serialize, Serializer};

/// Kilometers per degree of latitude (and of longitude at the equator)
pub const KM_PER_DEGREE: f64 = 111.0;

/// Stretch applied to the longer spread axis
pub const MAJOR_AXIS_STRETCH: f64 = 1.5;
/// Compression applied to the shorter spread axis
pub const MINOR_AXIS_COMPRESSION: f64 = 0.7;

/// Drawn when no cell is flooded
pub const FALLBACK_RADIUS: Kilometers = Kilometers::new(0.3);
pub const FALLBACK_MAJOR_AXIS: Kilometers = Kilometers::new(0.4);
pub const FALLBACK_MINOR_AXIS: Kilometers = Kilometers::new(0.2);

/// Shape tag expected by map layers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BoundaryShape {
    #[default]
    Ellipse,
}

/// Ellipse enclosing a flooded area
///
/// Serializes with the keys map layers read:
/// `{center: [lat, lng], radius, type: "ellipse", major_axis, minor_axis, rotation}`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BoundaryEllipse {
    /// `[lat, lng]`
    pub center: [f64; 2],
    /// Mean of the two axes, for plain circle layers
    #[serde(rename = "radius")]
    pub radius_km: Kilometers,
    #[serde(rename = "type")]
    pub shape: BoundaryShape,
    #[serde(rename = "major_axis")]
    pub major_axis_km: Kilometers,
    #[serde(rename = "minor_axis")]
    pub minor_axis_km: Kilometers,
    /// Whole degrees serialize as an integer (`200`), as map layers expect
    #[serde(rename = "rotation", serialize_with = "serialize_rotation")]
    pub rotation_deg: Degrees,
}

#[allow(clippy::trivially_copy_pass_by_ref)]
fn serialize_rotation<S: Serializer>(rotation: &Degrees, serializer: S) -> Result<S::Ok, S::Error> {
    let value = **rotation;
    if value.fract() == 0.0 && value.abs() <= i64::MAX as f64 {
        serializer.serialize_i64(value as i64)
    } else {
        serializer.serialize_f64(value)
    }
}

/// Reduces flooded cells to a [`BoundaryEllipse`]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoundaryEstimator {
    origin: GeoPoint,
    downhill_angle: Degrees,
}

impl BoundaryEstimator {
    #[must_use]
    pub fn new(origin: GeoPoint, downhill_angle: Degrees) -> Self {
        Self {
            origin,
            downhill_angle,
        }
    }

    /// Ellipse returned for an empty cell set
    #[must_use]
    pub fn fallback(&self) -> BoundaryEllipse {
        BoundaryEllipse {
            center: [self.origin.lat, self.origin.lng],
            radius_km: FALLBACK_RADIUS,
            shape: BoundaryShape::Ellipse,
            major_axis_km: FALLBACK_MAJOR_AXIS,
            minor_axis_km: FALLBACK_MINOR_AXIS,
            rotation_deg: self.downhill_angle,
        }
    }

    /// Summarize `cells`.
    ///
    /// Center is the middle of the bounding box (not the centroid). The
    /// per-axis spread in kilometers uses 111 km per degree of latitude and
    /// `111 × cos(center latitude)` per degree of longitude.
    #[must_use]
    pub fn estimate(&self, cells: &[FloodCell]) -> BoundaryEllipse {
        let Some(first) = cells.first() else {
            return self.fallback();
        };

        let (mut min_lat, mut max_lat) = (first.lat, first.lat);
        let (mut min_lng, mut max_lng) = (first.lng, first.lng);
        for cell in &cells[1..] {
            min_lat = min_lat.min(cell.lat);
            max_lat = max_lat.max(cell.lat);
            min_lng = min_lng.min(cell.lng);
            max_lng = max_lng.max(cell.lng);
        }

        let center_lat = (max_lat + min_lat) / 2.0;
        let center_lng = (max_lng + min_lng) / 2.0;

        let lat_spread_km = (max_lat - min_lat) * KM_PER_DEGREE;
        let lng_spread_km = (max_lng - min_lng) * KM_PER_DEGREE * center_lat.to_radians().cos();

        let major = lat_spread_km.max(lng_spread_km) * MAJOR_AXIS_STRETCH;
        let minor = lat_spread_km.min(lng_spread_km) * MINOR_AXIS_COMPRESSION;

        BoundaryEllipse {
            center: [center_lat, center_lng],
            radius_km: Kilometers::new((major + minor) / 2.0),
            shape: BoundaryShape::Ellipse,
            major_axis_km: Kilometers::new(major),
            minor_axis_km: Kilometers::new(minor),
            rotation_deg: self.downhill_angle,
        }
    }
}
