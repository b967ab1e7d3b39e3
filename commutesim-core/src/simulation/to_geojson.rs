use geojson::{Feature, FeatureCollection, Geometry, Value as GeoJsonValue};
use serde_json::{Map, Value as JsonValue, json};

use super::plan::{Leg, TravelPlan};
use crate::model::Path;
use crate::Error;

impl Path {
    /// Converts the path to a `GeoJSON` `LineString` feature
    pub fn to_feature(&self, properties: Map<String, JsonValue>) -> Result<Feature, Error> {
        let value = json!({
            "type": "Feature",
            "geometry": Geometry::new(GeoJsonValue::from(&self.to_line_string())),
            "properties": properties,
        });

        serde_json::from_value::<Feature>(value).map_err(|e| Error::GeoJsonError(e.to_string()))
    }
}

impl Leg {
    fn to_feature(&self, leg_idx: usize) -> Result<Feature, Error> {
        let properties = json!({
            "leg": leg_idx,
            "mode": self.mode.as_str(),
            "points": self.path.len(),
            "length_km": self.length_km(),
            "wait_minutes": self.wait_minutes,
            "travel_minutes": self.travel_minutes,
        });
        let JsonValue::Object(properties) = properties else {
            return Err(Error::GeoJsonError("Leg properties are not an object".into()));
        };
        self.path.to_feature(properties)
    }
}

impl TravelPlan {
    /// Converts the plan to a `GeoJSON` `FeatureCollection` with one
    /// feature per leg
    pub fn to_geojson(&self) -> Result<FeatureCollection, Error> {
        let features = self
            .legs()
            .iter()
            .enumerate()
            .map(|(idx, leg)| leg.to_feature(idx))
            .collect::<Result<Vec<_>, _>>()?;

        Ok(FeatureCollection {
            features,
            bbox: None,
            foreign_members: None,
        })
    }

    pub fn to_geojson_string(&self) -> Result<String, Error> {
        serde_json::to_string(&self.to_geojson()?).map_err(|e| Error::GeoJsonError(e.to_string()))
    }
}
