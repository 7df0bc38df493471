//! Weather lookup
//!
//! Fetches the JMA area index and forecasts over HTTP, then renders them.
//! Rendering only needs parsed documents, so it is tested offline.

use std::io::Write;

use pocket_calc::weather::{classify_forecast, headline_forecast, ForecastReport, Office, Region, Sky};
use serde::Serialize;

use crate::config::OutputFormat;
use crate::error::CliResult;

/// Forecast summary for one office
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WeatherReport {
    /// Office code
    pub code: String,
    /// Office name
    pub name: String,
    /// Icon class
    pub sky: Sky,
    /// Headline forecast text
    pub forecast: String,
    /// When JMA issued the forecast
    pub reported_at: String,
}

impl WeatherReport {
    /// Summarizes a downloaded forecast
    pub fn new(office: &Office, reports: &[ForecastReport]) -> CliResult<Self> {
        let forecast = headline_forecast(reports)?.to_string();
        Ok(Self {
            code: office.code.clone(),
            name: office.name.clone(),
            sky: classify_forecast(&forecast),
            forecast,
            reported_at: reports
                .first()
                .map(|r| r.report_datetime.clone())
                .unwrap_or_default(),
        })
    }
}

/// Prints every center and its offices
pub fn render_areas(regions: &[Region], format: OutputFormat, out: &mut impl Write) -> CliResult<()> {
    match format {
        OutputFormat::Text => {
            for region in regions {
                writeln!(out, "{} ({})", region.name, region.code)?;
                for office in &region.offices {
                    writeln!(out, "  {}  {}", office.code, office.name)?;
                }
            }
        }
        OutputFormat::Json => {
            serde_json::to_writer_pretty(&mut *out, regions)?;
            writeln!(out)?;
        }
    }
    Ok(())
}

/// Prints one forecast summary
pub fn render_report(report: &WeatherReport, format: OutputFormat, out: &mut impl Write) -> CliResult<()> {
    match format {
        OutputFormat::Text => {
            writeln!(out, "{} ({})", report.name, report.code)?;
            writeln!(out, "{} {}  {}", report.sky.symbol(), report.sky, report.forecast)?;
            if !report.reported_at.is_empty() {
                writeln!(out, "reported {}", report.reported_at)?;
            }
        }
        OutputFormat::Json => {
            serde_json::to_writer_pretty(&mut *out, report)?;
            writeln!(out)?;
        }
    }
    Ok(())
}

#[cfg(feature = "network")]
pub use client::JmaClient;

#[cfg(feature = "network")]
mod client {
    use std::time::Duration;

    use pocket_calc::weather::{AreaIndex, ForecastReport};
    use serde::de::DeserializeOwned;
    use tracing::debug;

    use crate::error::CliResult;

    /// Blocking client for the JMA data service
    #[derive(Debug)]
    pub struct JmaClient {
        base_url: String,
        http: reqwest::blocking::Client,
    }

    impl JmaClient {
        /// Creates a client rooted at `base_url`
        pub fn new(base_url: &str) -> CliResult<Self> {
            let http = reqwest::blocking::Client::builder()
                .timeout(Duration::from_secs(10))
                .user_agent(concat!("pocket-calc/", env!("CARGO_PKG_VERSION")))
                .build()?;
            Ok(Self {
                base_url: base_url.trim_end_matches('/').to_string(),
                http,
            })
        }

        /// URL of a document under the base
        #[must_use]
        pub fn url(&self, path: &str) -> String {
            format!("{}/{}", self.base_url, path)
        }

        fn get<T: DeserializeOwned>(&self, path: &str) -> CliResult<T> {
            let url = self.url(path);
            debug!(%url, "fetching");
            let body = self.http.get(&url).send()?.error_for_status()?.json()?;
            Ok(body)
        }

        /// Downloads `area.json`
        pub fn areas(&self) -> CliResult<AreaIndex> {
            self.get("common/const/area.json")
        }

        /// Downloads the forecast for an office code
        pub fn forecast(&self, code: &str) -> CliResult<Vec<ForecastReport>> {
            self.get(&format!("forecast/data/forecast/{code}.json"))
        }
    }

}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;
    use pocket_calc::weather::{build_area_tree, AreaIndex, WeatherError};

    use crate::error::CliError;

    const AREA_JSON: &str = r#"{
        "centers": {
            "010100": {"name": "北海道地方", "children": ["011000", "012000"]},
            "010300": {"name": "関東甲信地方", "children": ["130000"]}
        },
        "offices": {
            "011000": {"name": "宗谷地方"},
            "130000": {"name": "東京都"}
        }
    }"#;

    const FORECAST_JSON: &str = r#"[{
        "publishingOffice": "気象庁",
        "reportDatetime": "2026-10-19T05:00:00+09:00",
        "timeSeries": [{
            "timeDefines": ["2026-10-19T05:00:00+09:00"],
            "areas": [{"area": {"name": "東京地方", "code": "130010"}, "weathers": ["くもり　夜　雨"]}]
        }]
    }]"#;

    fn regions() -> Vec<Region> {
        let index: AreaIndex = serde_json::from_str(AREA_JSON).unwrap();
        build_area_tree(&index)
    }

    fn tokyo() -> Office {
        Office {
            code: "130000".into(),
            name: "東京都".into(),
        }
    }

    fn rendered(f: impl FnOnce(&mut Vec<u8>) -> CliResult<()>) -> String {
        let mut out = Vec::new();
        f(&mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn test_report_from_forecast() {
        let reports: Vec<ForecastReport> = serde_json::from_str(FORECAST_JSON).unwrap();
        let report = WeatherReport::new(&tokyo(), &reports).unwrap();
        assert_eq!(report.sky, Sky::Rain);
        assert_eq!(report.forecast, "くもり　夜　雨");
        assert_eq!(report.reported_at, "2026-10-19T05:00:00+09:00");
    }

    #[test]
    fn test_report_from_empty_forecast() {
        let err = WeatherReport::new(&tokyo(), &[]).unwrap_err();
        assert!(matches!(
            err,
            CliError::Weather(WeatherError::MissingForecast("report"))
        ));
    }

    #[test]
    fn test_render_areas_text() {
        let text = rendered(|out| render_areas(&regions(), OutputFormat::Text, out));
        assert_eq!(
            text,
            "北海道地方 (010100)\n  011000  宗谷地方\n関東甲信地方 (010300)\n  130000  東京都\n"
        );
    }

    #[test]
    fn test_render_areas_json() {
        let text = rendered(|out| render_areas(&regions(), OutputFormat::Json, out));
        let json: serde_json::Value = serde_json::from_str(&text).unwrap();
        assert_eq!(json[0]["offices"].as_array().unwrap().len(), 1);
        assert_eq!(json[1]["offices"][0]["code"], "130000");
    }

    #[test]
    fn test_render_report_text() {
        let reports: Vec<ForecastReport> = serde_json::from_str(FORECAST_JSON).unwrap();
        let report = WeatherReport::new(&tokyo(), &reports).unwrap();
        let text = rendered(|out| render_report(&report, OutputFormat::Text, out));
        let lines: Vec<_> = text.lines().collect();
        assert_eq!(lines[0], "東京都 (130000)");
        assert_eq!(lines[1], "☂ rain  くもり　夜　雨");
        assert!(lines[2].starts_with("reported "));
    }

    #[test]
    fn test_render_report_json() {
        let report = WeatherReport {
            code: "011000".into(),
            name: "宗谷地方".into(),
            sky: Sky::Snow,
            forecast: "雪".into(),
            reported_at: String::new(),
        };
        let text = rendered(|out| render_report(&report, OutputFormat::Json, out));
        let json: serde_json::Value = serde_json::from_str(&text).unwrap();
        assert_eq!(json["sky"], "snow");
        assert_eq!(json["name"], "宗谷地方");
    }
}
