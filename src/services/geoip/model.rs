//! Geo lookup result model
//!
//! Flattens the nested GeoLite2 city record into the shape the HTTP layer
//! serves. Display names always use the English localization; entities the
//! database has no English name for come back as empty strings.

use maxminddb::geoip2;
use serde::Serialize;

/// 行政区划（州/省等），保留数据库返回的顺序
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct SubdivisionInfo {
    pub name: String,
    pub iso: String,
}

/// 一次城市级查询的完整地理信息
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct GeoLocation {
    pub continent: String,
    pub continent_code: String,
    pub country: String,
    pub country_code: String,
    pub subdivisions: Vec<SubdivisionInfo>,
    pub city: String,
    pub location_accuracy: u16,
    pub latitude: f64,
    pub longitude: f64,
    pub time_zone: String,
}

impl GeoLocation {
    /// Map a decoded GeoLite2 city record into the flat response model.
    ///
    /// Subdivision order is kept exactly as stored (largest to smallest
    /// region); reordering would conflate e.g. state and county.
    pub fn from_city_record(record: &geoip2::City<'_>) -> Self {
        let subdivisions = record
            .subdivisions
            .iter()
            .map(|subdivision| SubdivisionInfo {
                name: subdivision.names.english.unwrap_or_default().to_string(),
                iso: subdivision.iso_code.unwrap_or_default().to_string(),
            })
            .collect();

        GeoLocation {
            continent: record.continent.names.english.unwrap_or_default().to_string(),
            continent_code: record.continent.code.unwrap_or_default().to_string(),
            country: record.country.names.english.unwrap_or_default().to_string(),
            country_code: record.country.iso_code.unwrap_or_default().to_string(),
            subdivisions,
            city: record.city.names.english.unwrap_or_default().to_string(),
            location_accuracy: record.location.accuracy_radius.unwrap_or_default(),
            latitude: record.location.latitude.unwrap_or_default(),
            longitude: record.location.longitude.unwrap_or_default(),
            time_zone: record.location.time_zone.unwrap_or_default().to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_record() -> geoip2::City<'static> {
        geoip2::City {
            city: geoip2::city::City {
                geoname_id: Some(2643743),
                names: geoip2::Names {
                    english: Some("London"),
                    ..Default::default()
                },
                ..Default::default()
            },
            continent: geoip2::city::Continent {
                code: Some("EU"),
                names: geoip2::Names {
                    english: Some("Europe"),
                    ..Default::default()
                },
                ..Default::default()
            },
            country: geoip2::city::Country {
                iso_code: Some("GB"),
                names: geoip2::Names {
                    english: Some("United Kingdom"),
                    ..Default::default()
                },
                ..Default::default()
            },
            location: geoip2::city::Location {
                accuracy_radius: Some(10),
                latitude: Some(51.5142),
                longitude: Some(-0.0931),
                time_zone: Some("Europe/London"),
                ..Default::default()
            },
            subdivisions: vec![
                geoip2::city::Subdivision {
                    iso_code: Some("ENG"),
                    names: geoip2::Names {
                        english: Some("England"),
                        ..Default::default()
                    },
                    ..Default::default()
                },
                geoip2::city::Subdivision {
                    iso_code: Some("TOB"),
                    names: geoip2::Names {
                        english: Some("Tower Hamlets"),
                        ..Default::default()
                    },
                    ..Default::default()
                },
            ],
            ..Default::default()
        }
    }

    #[test]
    fn test_from_city_record_full() {
        let location = GeoLocation::from_city_record(&sample_record());

        assert_eq!(location.continent, "Europe");
        assert_eq!(location.continent_code, "EU");
        assert_eq!(location.country, "United Kingdom");
        assert_eq!(location.country_code, "GB");
        assert_eq!(location.city, "London");
        assert_eq!(location.location_accuracy, 10);
        assert_eq!(location.latitude, 51.5142);
        assert_eq!(location.longitude, -0.0931);
        assert_eq!(location.time_zone, "Europe/London");
    }

    #[test]
    fn test_subdivision_order_preserved() {
        let location = GeoLocation::from_city_record(&sample_record());

        assert_eq!(
            location.subdivisions,
            vec![
                SubdivisionInfo {
                    name: "England".to_string(),
                    iso: "ENG".to_string(),
                },
                SubdivisionInfo {
                    name: "Tower Hamlets".to_string(),
                    iso: "TOB".to_string(),
                },
            ]
        );
    }

    #[test]
    fn test_missing_english_names_become_empty_strings() {
        let record = geoip2::City {
            country: geoip2::city::Country {
                iso_code: Some("CN"),
                names: geoip2::Names {
                    simplified_chinese: Some("中国"),
                    ..Default::default()
                },
                ..Default::default()
            },
            ..Default::default()
        };

        let location = GeoLocation::from_city_record(&record);
        assert_eq!(location.country, "");
        assert_eq!(location.country_code, "CN");
        assert_eq!(location.city, "");
        assert_eq!(location.time_zone, "");
        assert_eq!(location.location_accuracy, 0);
        assert_eq!(location.latitude, 0.0);
        assert_eq!(location.longitude, 0.0);
        assert!(location.subdivisions.is_empty());
    }
}
