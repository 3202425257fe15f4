//! Visualization utilities for dubins_routing
//!
//! Plots pose sets and tour visiting order using gnuplot. Only poses and
//! visiting order are drawn; the solver produces scalar lengths, not arc
//! geometry.

use gnuplot::{AutoOption, AxesCommon, Caption, Color, Figure, LineWidth, PointSize, PointSymbol};

use crate::common::{Configuration, Point2D};
use crate::geometry::heading_to_angle;

/// Color palette for consistent styling
pub mod colors {
    pub const BLACK: &str = "#000000";
    pub const RED: &str = "#FF0000";
    pub const BLUE: &str = "#0000FF";
    pub const CYAN: &str = "#00FFFF";
    pub const GRAY: &str = "#808080";

    // Semantic colors
    pub const POSE: &str = CYAN;
    pub const HEADING: &str = BLACK;
    pub const TOUR: &str = RED;
    pub const START: &str = BLUE;
}

/// Style for tour polyline rendering
#[derive(Debug, Clone)]
pub struct TourStyle {
    pub color: String,
    pub line_width: f64,
    pub caption: String,
}

impl Default for TourStyle {
    fn default() -> Self {
        Self {
            color: colors::TOUR.to_string(),
            line_width: 2.0,
            caption: "Tour order".to_string(),
        }
    }
}

/// Style for point rendering
#[derive(Debug, Clone)]
pub struct PointStyle {
    pub color: String,
    pub size: f64,
    pub symbol: char,
    pub caption: String,
}

impl PointStyle {
    pub fn new(color: &str, caption: &str) -> Self {
        Self {
            color: color.to_string(),
            size: 1.0,
            symbol: 'O',
            caption: caption.to_string(),
        }
    }

    pub fn with_size(mut self, size: f64) -> Self {
        self.size = size;
        self
    }
}

/// Main visualizer struct
pub struct Visualizer {
    figure: Figure,
    title: String,
    x_label: String,
    y_label: String,
    aspect_ratio: Option<f64>,
}

impl Visualizer {
    pub fn new() -> Self {
        Self {
            figure: Figure::new(),
            title: String::new(),
            x_label: "X [m]".to_string(),
            y_label: "Y [m]".to_string(),
            aspect_ratio: Some(1.0),
        }
    }

    /// Set the plot title
    pub fn set_title(&mut self, title: &str) -> &mut Self {
        self.title = title.to_string();
        self
    }

    /// Plot a single point
    pub fn plot_point(&mut self, point: Point2D, style: &PointStyle) -> &mut Self {
        self.figure.axes2d().points(
            &[point.x],
            &[point.y],
            &[
                Caption(&style.caption),
                Color(&style.color),
                PointSymbol(style.symbol),
                PointSize(style.size),
            ],
        );
        self
    }

    /// Plot poses as points with heading arrows
    pub fn plot_configurations(
        &mut self,
        configurations: &[Configuration],
        arrow_length: f64,
    ) -> &mut Self {
        let x: Vec<f64> = configurations.iter().map(|c| c.x).collect();
        let y: Vec<f64> = configurations.iter().map(|c| c.y).collect();

        self.figure.axes2d().points(
            &x,
            &y,
            &[
                Caption("Poses"),
                Color(colors::POSE),
                PointSymbol('O'),
                PointSize(1.2),
            ],
        );

        for c in configurations {
            let angle = heading_to_angle(c.heading);
            let end_x = c.x + arrow_length * angle.cos();
            let end_y = c.y + arrow_length * angle.sin();
            self.figure.axes2d().lines(
                &[c.x, end_x],
                &[c.y, end_y],
                &[Color(colors::HEADING), LineWidth(1.5)],
            );
        }
        self
    }

    /// Plot the visiting order of a tour as a polyline through the pose
    /// positions, optionally closed back to the first node
    pub fn plot_tour(
        &mut self,
        tour: &[usize],
        points: &[Point2D],
        closed: bool,
        style: &TourStyle,
    ) -> &mut Self {
        if tour.len() < 2 {
            return self;
        }

        let mut x: Vec<f64> = tour.iter().map(|&id| points[id].x).collect();
        let mut y: Vec<f64> = tour.iter().map(|&id| points[id].y).collect();
        if closed {
            x.push(points[tour[0]].x);
            y.push(points[tour[0]].y);
        }

        self.figure.axes2d().lines(
            &x,
            &y,
            &[
                Caption(&style.caption),
                Color(&style.color),
                LineWidth(style.line_width),
            ],
        );
        self
    }

    /// Finalize and show the plot
    pub fn show(&mut self) -> Result<(), String> {
        self.apply_settings();
        self.figure.show().map_err(|e| e.to_string()).map(|_| ())
    }

    /// Save plot to SVG file
    pub fn save_svg(&mut self, path: &str) -> Result<(), String> {
        self.apply_settings();
        self.figure.save_to_svg(path, 800, 600).map_err(|e| e.to_string())
    }

    fn apply_settings(&mut self) {
        let axes = self.figure.axes2d();

        if !self.title.is_empty() {
            axes.set_title(&self.title, &[]);
        }
        axes.set_x_label(&self.x_label, &[]);
        axes.set_y_label(&self.y_label, &[]);

        if let Some(ratio) = self.aspect_ratio {
            axes.set_aspect_ratio(AutoOption::Fix(ratio));
        }
    }
}

impl Default for Visualizer {
    fn default() -> Self {
        Self::new()
    }
}
