use serde::Serialize;

/// A named farm work site (`locations` row).
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SiteLocation {
    pub id: i64,
    pub name: String,
    pub description: Option<String>,
    pub lat: Option<f64>,
    pub long: Option<f64>,
    pub year_purchased: Option<i32>,
    pub size: Option<String>,
}

impl SiteLocation {
    pub fn new(name: &str) -> Self {
        Self {
            id: 0,
            name: name.to_string(),
            description: None,
            lat: None,
            long: None,
            year_purchased: None,
            size: None,
        }
    }

    /// "lat, long" when both coordinates are known.
    pub fn coordinates(&self) -> Option<String> {
        match (self.lat, self.long) {
            (Some(lat), Some(long)) => Some(format!("{:.5}, {:.5}", lat, long)),
            _ => None,
        }
    }
}
