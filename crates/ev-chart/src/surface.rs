//! Drawable SVG surfaces and the document that holds them.

use crate::axis::{Axis, AxisOrient};
use crate::geometry::BarGeometry;
use std::fmt::Write;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SurfaceSize {
    pub width: f64,
    pub height: f64,
}

impl SurfaceSize {
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    pub fn is_drawable(&self) -> bool {
        self.width.is_finite() && self.height.is_finite() && self.width > 0.0 && self.height > 0.0
    }
}

/// Everything one render puts on a surface.
#[derive(Debug, Clone, PartialEq)]
pub struct ChartScene {
    pub size: SurfaceSize,
    pub class: String,
    /// Translation of the margin group.
    pub origin: (f64, f64),
    pub x_axis: Axis,
    pub y_axis: Axis,
    pub bars: Vec<BarGeometry>,
}

impl ChartScene {
    pub fn to_svg(&self) -> String {
        let mut out = String::new();
        // Writing into a String cannot fail.
        let _ = self.write_svg(&mut out);
        out
    }

    fn write_svg(&self, out: &mut String) -> std::fmt::Result {
        write!(
            out,
            r#"<svg width="{}" height="{}" class="{}">"#,
            self.size.width,
            self.size.height,
            escape(&self.class)
        )?;
        write!(
            out,
            r#"<g transform="translate({},{})">"#,
            self.origin.0, self.origin.1
        )?;
        write_axis(out, &self.x_axis)?;
        write_axis(out, &self.y_axis)?;
        for bar in &self.bars {
            write!(
                out,
                r#"<rect y="{}" height="{}" width="{}" transform="translate({},0)"></rect>"#,
                bar.y, bar.height, bar.width, bar.x
            )?;
        }
        out.push_str("</g></svg>");
        Ok(())
    }
}

fn write_axis(out: &mut String, axis: &Axis) -> std::fmt::Result {
    let (class, path) = match axis.orient {
        AxisOrient::Bottom => (
            "x axis",
            format!("M{},6V0H{}V6", axis.extent.0, axis.extent.1),
        ),
        AxisOrient::Left => (
            "y axis",
            format!("M-6,{}H0V{}H-6", axis.extent.0, axis.extent.1),
        ),
    };
    write!(
        out,
        r#"<g class="{class}" transform="translate({},{})"><path class="domain" d="{path}"></path>"#,
        axis.translate.0, axis.translate.1
    )?;
    for tick in &axis.ticks {
        match axis.orient {
            AxisOrient::Bottom => write!(
                out,
                r#"<g class="tick" transform="translate({},0)"><line y2="6"></line><text y="9" dy="0.71em">{}</text></g>"#,
                tick.offset,
                escape(&tick.label)
            )?,
            AxisOrient::Left => write!(
                out,
                r#"<g class="tick" transform="translate(0,{})"><line x2="-6"></line><text x="-9" dy="0.32em">{}</text></g>"#,
                tick.offset,
                escape(&tick.label)
            )?,
        }
    }
    out.push_str("</g>");
    Ok(())
}

fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            _ => out.push(c),
        }
    }
    out
}

/// An `<svg>` element. Holds at most one chart scene.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SvgSurface {
    size: Option<SurfaceSize>,
    scene: Option<ChartScene>,
    redraws: usize,
}

impl SvgSurface {
    /// Surface without explicit dimensions; renders use the configured size.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_size(width: f64, height: f64) -> Self {
        Self {
            size: Some(SurfaceSize::new(width, height)),
            ..Self::default()
        }
    }

    pub fn size(&self) -> Option<SurfaceSize> {
        self.size
    }

    pub fn scene(&self) -> Option<&ChartScene> {
        self.scene.as_ref()
    }

    /// Number of full redraws performed on this surface.
    pub fn redraws(&self) -> usize {
        self.redraws
    }

    /// Drop the previous scene and install `scene`.
    pub fn replace_scene(&mut self, scene: ChartScene) {
        self.scene = Some(scene);
        self.redraws += 1;
    }

    /// Markup of the current scene; an empty `<svg>` before the first render.
    pub fn to_svg(&self) -> String {
        match &self.scene {
            Some(scene) => scene.to_svg(),
            None => match self.size {
                Some(size) => {
                    format!(r#"<svg width="{}" height="{}"></svg>"#, size.width, size.height)
                }
                None => "<svg></svg>".to_string(),
            },
        }
    }
}

/// Page-level registry of surfaces, addressed by selector.
///
/// Lookup returns the first surface attached under a selector.
#[derive(Debug, Clone, Default)]
pub struct Document {
    surfaces: Vec<(String, SvgSurface)>,
}

impl Document {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_surface(mut self, selector: impl Into<String>, surface: SvgSurface) -> Self {
        self.attach(selector, surface);
        self
    }

    pub fn attach(&mut self, selector: impl Into<String>, surface: SvgSurface) {
        self.surfaces.push((selector.into(), surface));
    }

    pub fn select(&self, selector: &str) -> Option<&SvgSurface> {
        self.surfaces
            .iter()
            .find(|(s, _)| s == selector)
            .map(|(_, surface)| surface)
    }

    pub fn select_mut(&mut self, selector: &str) -> Option<&mut SvgSurface> {
        self.surfaces
            .iter_mut()
            .find(|(s, _)| s == selector)
            .map(|(_, surface)| surface)
    }

    pub fn svg_markup(&self, selector: &str) -> Option<String> {
        self.select(selector).map(SvgSurface::to_svg)
    }
}
