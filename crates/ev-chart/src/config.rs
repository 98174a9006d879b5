//! Chart configuration.
//!
//! Everything a render depends on besides the dataset and the surface size.
//! Configurations are plain serde values so a page can embed them as JSON or
//! YAML; always call [`ChartConfig::validate`] (the `from_*_str` loaders do).

use crate::dataset::DEFAULT_DATASET;
use crate::error::{ChartError, ChartResult};
use crate::scale::MAX_TICKS;
use chrono::format::{Item, StrftimeItems};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ChartConfig {
    /// Selector of the surface to draw on.
    #[serde(default = "default_selector")]
    pub selector: String,
    /// Outer width used when the surface has no size of its own.
    #[serde(default = "default_width")]
    pub width: f64,
    /// Outer height used when the surface has no size of its own.
    #[serde(default = "default_height")]
    pub height: f64,
    #[serde(default)]
    pub margin: Margin,
    /// Fraction of each band left empty, in `[0, 1)`.
    #[serde(default = "default_band_padding")]
    pub band_padding: f64,
    /// Pixels subtracted from the band width for every drawn bar.
    #[serde(default = "default_bar_padding")]
    pub bar_padding: f64,
    /// Fixed upper bound of the y domain. Falls back to the dataset maximum.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_expected_value: Option<f64>,
    #[serde(default)]
    pub bar_height_mode: BarHeightMode,
    #[serde(default)]
    pub x_axis: XAxisKind,
    #[serde(default = "default_y_tick_count")]
    pub y_tick_count: usize,
    #[serde(default)]
    pub data_source: DataSource,
}

/// Space reserved around the plotting area, in pixels.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct Margin {
    pub top: f64,
    pub right: f64,
    pub bottom: f64,
    pub left: f64,
}

impl Default for Margin {
    fn default() -> Self {
        Self {
            top: 20.0,
            right: 20.0,
            bottom: 70.0,
            left: 40.0,
        }
    }
}

/// How bar height and vertical position are derived from a magnitude.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "snake_case")]
pub enum BarHeightMode {
    /// One pixel per unit: `y = usable_height - value`, `height = value`.
    /// The linear scale only drives the y axis.
    #[default]
    Raw,
    /// `y = y_scale(value)`, `height = usable_height - y`.
    Scaled,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
#[serde(tag = "type")]
pub enum XAxisKind {
    /// One tick per bar, labelled with the datum label or its index.
    #[default]
    Categorical,
    /// One tick per bar, labelled with the datum date.
    Temporal {
        #[serde(default = "default_tick_format")]
        tick_format: String,
    },
}

/// Where the initial dataset comes from.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type")]
pub enum DataSource {
    Literal {
        values: Vec<f64>,
    },
    /// CSV text with a `date,value` header.
    ExternalFile {
        path: PathBuf,
        #[serde(default = "default_date_format")]
        date_format: String,
    },
}

impl Default for DataSource {
    fn default() -> Self {
        DataSource::Literal {
            values: DEFAULT_DATASET.to_vec(),
        }
    }
}

fn default_selector() -> String {
    "svg".to_string()
}

fn default_width() -> f64 {
    600.0
}

fn default_height() -> f64 {
    300.0
}

fn default_band_padding() -> f64 {
    0.1
}

fn default_bar_padding() -> f64 {
    5.0
}

fn default_y_tick_count() -> usize {
    10
}

fn default_tick_format() -> String {
    "%Y-%m".to_string()
}

fn default_date_format() -> String {
    "%Y-%m-%d".to_string()
}

impl Default for ChartConfig {
    fn default() -> Self {
        Self {
            selector: default_selector(),
            width: default_width(),
            height: default_height(),
            margin: Margin::default(),
            band_padding: default_band_padding(),
            bar_padding: default_bar_padding(),
            max_expected_value: None,
            bar_height_mode: BarHeightMode::default(),
            x_axis: XAxisKind::default(),
            y_tick_count: default_y_tick_count(),
            data_source: DataSource::default(),
        }
    }
}

impl ChartConfig {
    pub fn from_json_str(text: &str) -> ChartResult<Self> {
        let config: ChartConfig = serde_json::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    pub fn from_yaml_str(text: &str) -> ChartResult<Self> {
        let config: ChartConfig = serde_yaml::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> ChartResult<()> {
        if self.selector.trim().is_empty() {
            return Err(invalid("selector must not be empty"));
        }
        positive(self.width, "width")?;
        positive(self.height, "height")?;
        for (value, what) in [
            (self.margin.top, "margin.top"),
            (self.margin.right, "margin.right"),
            (self.margin.bottom, "margin.bottom"),
            (self.margin.left, "margin.left"),
        ] {
            non_negative(value, what)?;
        }
        if !(0.0..1.0).contains(&self.band_padding) {
            return Err(invalid(format!(
                "band_padding = {} (must be in [0, 1))",
                self.band_padding
            )));
        }
        non_negative(self.bar_padding, "bar_padding")?;
        if let Some(max) = self.max_expected_value {
            positive(max, "max_expected_value")?;
        }
        if !(1..=MAX_TICKS).contains(&self.y_tick_count) {
            return Err(invalid(format!(
                "y_tick_count = {} (must be in 1..={MAX_TICKS})",
                self.y_tick_count
            )));
        }
        if let XAxisKind::Temporal { tick_format } = &self.x_axis {
            check_strftime(tick_format, "x_axis.tick_format")?;
        }
        match &self.data_source {
            DataSource::Literal { values } => {
                for (index, &value) in values.iter().enumerate() {
                    if !value.is_finite() || value < 0.0 {
                        return Err(ChartError::InvalidDataset { index, value });
                    }
                }
            }
            DataSource::ExternalFile { path, date_format } => {
                if path.as_os_str().is_empty() {
                    return Err(invalid("data_source.path must not be empty"));
                }
                check_strftime(date_format, "data_source.date_format")?;
            }
        }
        Ok(())
    }
}

fn invalid(what: impl Into<String>) -> ChartError {
    ChartError::InvalidConfig { what: what.into() }
}

fn positive(value: f64, what: &str) -> ChartResult<()> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(invalid(format!("{what} = {value} (must be finite and positive)")))
    }
}

fn non_negative(value: f64, what: &str) -> ChartResult<()> {
    if value.is_finite() && value >= 0.0 {
        Ok(())
    } else {
        Err(invalid(format!("{what} = {value} (must be finite and non-negative)")))
    }
}

fn check_strftime(format: &str, what: &str) -> ChartResult<()> {
    if format.is_empty() || StrftimeItems::new(format).any(|item| matches!(item, Item::Error)) {
        return Err(invalid(format!("{what} '{format}' is not a valid date format")));
    }
    Ok(())
}
