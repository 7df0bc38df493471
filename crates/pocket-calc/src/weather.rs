//! JMA forecast data
//!
//! Models for the two documents the weather lookup reads from the Japan
//! Meteorological Agency: the area index (`common/const/area.json`) and a
//! per-office forecast (`forecast/data/forecast/{code}.json`). Fetching is
//! left to the caller; everything here works on already-downloaded JSON.

use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Result type for weather operations
pub type WeatherResult<T> = Result<T, WeatherError>;

/// Weather lookup errors
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum WeatherError {
    /// No office matches the query
    #[error("Unknown area: {0:?}")]
    UnknownArea(String),

    /// Forecast document has no headline weather text
    #[error("Forecast has no weather text at {0}")]
    MissingForecast(&'static str),
}

// ===== area.json =====

/// One entry of `centers` or `offices`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AreaEntry {
    /// Japanese name
    pub name: String,
    /// English name
    #[serde(default)]
    pub en_name: Option<String>,
    /// Codes of the areas below this one
    #[serde(default)]
    pub children: Vec<String>,
}

/// The parts of `area.json` the lookup uses
///
/// Codes are fixed-width, so the sorted maps list centers north to south
/// just like the source document.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AreaIndex {
    /// Regional centers, keyed by code
    pub centers: BTreeMap<String, AreaEntry>,
    /// Forecast offices, keyed by code
    pub offices: BTreeMap<String, AreaEntry>,
}

/// A forecast office
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Office {
    /// Office code, used in the forecast URL
    pub code: String,
    /// Japanese name
    pub name: String,
}

/// A regional center and its offices
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Region {
    /// Center code
    pub code: String,
    /// Japanese name
    pub name: String,
    /// Offices under this center
    pub offices: Vec<Office>,
}

/// Builds the center → office hierarchy
///
/// Children of a center that are not listed under `offices` are skipped.
#[must_use]
pub fn build_area_tree(index: &AreaIndex) -> Vec<Region> {
    index
        .centers
        .iter()
        .map(|(code, center)| Region {
            code: code.clone(),
            name: center.name.clone(),
            offices: center
                .children
                .iter()
                .filter_map(|child| {
                    index.offices.get(child).map(|office| Office {
                        code: child.clone(),
                        name: office.name.clone(),
                    })
                })
                .collect(),
        })
        .collect()
}

/// Finds an office by exact code or name
pub fn find_office<'a>(regions: &'a [Region], query: &str) -> WeatherResult<&'a Office> {
    let query = query.trim();
    regions
        .iter()
        .flat_map(|region| region.offices.iter())
        .find(|office| office.code == query || office.name == query)
        .ok_or_else(|| WeatherError::UnknownArea(query.to_string()))
}

// ===== forecast/{code}.json =====

/// Name and code of a forecast area
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AreaRef {
    /// Japanese name
    pub name: String,
    /// Area code
    pub code: String,
}

/// Forecast for one area within a time series
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AreaForecast {
    /// Which area
    pub area: AreaRef,
    /// Weather text per time slot; absent in precipitation series
    #[serde(default)]
    pub weathers: Vec<String>,
}

/// One block of time slots
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TimeSeries {
    /// Slot start times
    #[serde(default)]
    pub time_defines: Vec<String>,
    /// Per-area forecasts
    pub areas: Vec<AreaForecast>,
}

/// One forecast report; the document is an array of these
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ForecastReport {
    /// Issuing office
    #[serde(default)]
    pub publishing_office: String,
    /// Issue time
    #[serde(default)]
    pub report_datetime: String,
    /// Time series, the first one carrying weather text
    pub time_series: Vec<TimeSeries>,
}

/// Headline weather text: first report, first series, first area, first slot
pub fn headline_forecast(reports: &[ForecastReport]) -> WeatherResult<&str> {
    let report = reports.first().ok_or(WeatherError::MissingForecast("report"))?;
    let series = report
        .time_series
        .first()
        .ok_or(WeatherError::MissingForecast("timeSeries"))?;
    let area = series
        .areas
        .first()
        .ok_or(WeatherError::MissingForecast("areas"))?;
    area.weathers
        .first()
        .map(String::as_str)
        .ok_or(WeatherError::MissingForecast("weathers"))
}

// ===== Classification =====

/// Icon class for a forecast
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Sky {
    /// Contains 晴
    Sunny,
    /// Contains 雨
    Rain,
    /// Contains 雪
    Snow,
    /// Anything else
    Cloud,
}

impl Sky {
    /// Terminal glyph
    #[must_use]
    pub const fn symbol(self) -> &'static str {
        match self {
            Self::Sunny => "☀",
            Self::Rain => "☂",
            Self::Snow => "❄",
            Self::Cloud => "☁",
        }
    }

    /// Lowercase name
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Sunny => "sunny",
            Self::Rain => "rain",
            Self::Snow => "snow",
            Self::Cloud => "cloud",
        }
    }
}

impl fmt::Display for Sky {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Picks the icon class for forecast text
///
/// The first match wins, so "晴れ 時々 雨" is sunny.
#[must_use]
pub fn classify_forecast(text: &str) -> Sky {
    if text.contains('晴') {
        Sky::Sunny
    } else if text.contains('雨') {
        Sky::Rain
    } else if text.contains('雪') {
        Sky::Snow
    } else {
        Sky::Cloud
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const AREA_JSON: &str = r#"{
        "centers": {
            "010300": {
                "name": "関東甲信地方",
                "enName": "Kanto Koshin",
                "officeName": "気象庁",
                "children": ["130000", "140000", "999999"]
            },
            "010100": {
                "name": "北海道地方",
                "enName": "Hokkaido",
                "officeName": "札幌管区気象台",
                "children": ["011000"]
            }
        },
        "offices": {
            "011000": {"name": "宗谷地方", "enName": "Soya", "officeName": "稚内地方気象台", "parent": "010100", "children": ["011000"]},
            "130000": {"name": "東京都", "enName": "Tokyo", "officeName": "気象庁", "parent": "010300", "children": ["130010"]},
            "140000": {"name": "神奈川県", "enName": "Kanagawa", "officeName": "横浜地方気象台", "parent": "010300", "children": ["140010"]}
        },
        "class10s": {}
    }"#;

    const FORECAST_JSON: &str = r#"[
        {
            "publishingOffice": "気象庁",
            "reportDatetime": "2026-10-19T11:00:00+09:00",
            "timeSeries": [
                {
                    "timeDefines": ["2026-10-19T11:00:00+09:00", "2026-10-20T00:00:00+09:00"],
                    "areas": [
                        {
                            "area": {"name": "東京地方", "code": "130010"},
                            "weatherCodes": ["101", "200"],
                            "weathers": ["晴れ　時々　くもり", "くもり　後　雨"],
                            "winds": ["北の風", "北の風　後　南の風"]
                        }
                    ]
                },
                {
                    "timeDefines": ["2026-10-19T12:00:00+09:00"],
                    "areas": [
                        {"area": {"name": "東京地方", "code": "130010"}, "pops": ["10"]}
                    ]
                }
            ]
        },
        {
            "publishingOffice": "気象庁",
            "reportDatetime": "2026-10-19T11:00:00+09:00",
            "timeSeries": []
        }
    ]"#;

    fn index() -> AreaIndex {
        serde_json::from_str(AREA_JSON).unwrap()
    }

    fn reports() -> Vec<ForecastReport> {
        serde_json::from_str(FORECAST_JSON).unwrap()
    }

    // ===== Area tree =====

    #[test]
    fn test_parse_area_index() {
        let index = index();
        assert_eq!(index.centers.len(), 2);
        assert_eq!(index.offices["130000"].name, "東京都");
        assert_eq!(index.offices["130000"].en_name.as_deref(), Some("Tokyo"));
    }

    #[test]
    fn test_area_tree_is_ordered_by_code() {
        let tree = build_area_tree(&index());
        let names: Vec<_> = tree.iter().map(|r| r.name.as_str()).collect();
        assert_eq!(names, ["北海道地方", "関東甲信地方"]);
    }

    #[test]
    fn test_area_tree_skips_unknown_children() {
        let tree = build_area_tree(&index());
        let kanto = &tree[1];
        let codes: Vec<_> = kanto.offices.iter().map(|o| o.code.as_str()).collect();
        assert_eq!(codes, ["130000", "140000"]);
    }

    #[test]
    fn test_area_tree_empty_index() {
        assert!(build_area_tree(&AreaIndex::default()).is_empty());
    }

    #[test]
    fn test_find_office_by_code_and_name() {
        let tree = build_area_tree(&index());
        assert_eq!(find_office(&tree, "140000").unwrap().name, "神奈川県");
        assert_eq!(find_office(&tree, " 東京都 ").unwrap().code, "130000");
    }

    #[test]
    fn test_find_office_unknown() {
        let tree = build_area_tree(&index());
        assert_eq!(
            find_office(&tree, "関東甲信地方"),
            Err(WeatherError::UnknownArea("関東甲信地方".into()))
        );
    }

    // ===== Forecast =====

    #[test]
    fn test_headline_forecast() {
        let reports = reports();
        assert_eq!(headline_forecast(&reports).unwrap(), "晴れ　時々　くもり");
        assert_eq!(reports[0].report_datetime, "2026-10-19T11:00:00+09:00");
    }

    #[test]
    fn test_series_without_weathers_parses() {
        let reports = reports();
        assert!(reports[0].time_series[1].areas[0].weathers.is_empty());
    }

    #[test]
    fn test_headline_forecast_missing_parts() {
        assert_eq!(
            headline_forecast(&[]),
            Err(WeatherError::MissingForecast("report"))
        );
        let reports = reports();
        assert_eq!(
            headline_forecast(&reports[1..]),
            Err(WeatherError::MissingForecast("timeSeries"))
        );
        let mut no_text = reports[0].clone();
        no_text.time_series.remove(0);
        assert_eq!(
            headline_forecast(&[no_text]),
            Err(WeatherError::MissingForecast("weathers"))
        );
    }

    // ===== Classification =====

    #[test]
    fn test_classify_forecast() {
        assert_eq!(classify_forecast("晴れ"), Sky::Sunny);
        assert_eq!(classify_forecast("くもり　時々　雨"), Sky::Rain);
        assert_eq!(classify_forecast("雪　後　くもり"), Sky::Snow);
        assert_eq!(classify_forecast("くもり"), Sky::Cloud);
        assert_eq!(classify_forecast(""), Sky::Cloud);
    }

    #[test]
    fn test_classify_first_match_wins() {
        assert_eq!(classify_forecast("雨　後　晴れ"), Sky::Sunny);
        assert_eq!(classify_forecast("雪　か　雨"), Sky::Rain);
    }

    #[test]
    fn test_sky_names() {
        assert_eq!(Sky::Sunny.to_string(), "sunny");
        assert_eq!(serde_json::to_value(Sky::Cloud).unwrap(), "cloud");
        assert_eq!(Sky::Rain.symbol(), "☂");
    }
}
