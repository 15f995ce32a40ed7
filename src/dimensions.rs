//! Dimension tracking for carousel slides.
//!
//! The [`Tracker`] keeps the container (viewport) size and one extent per slide
//! along each axis. Extents include the slide's margins on that axis. Hosts
//! either hand it raw measurements through [`Tracker::remeasure`] or supply
//! finished extents through [`Tracker::set_geometry`].
//!
//! Lengths are pixels for graphical hosts and cells for terminal hosts; the
//! tracker does not care which, as long as container and items agree.
//!
//! ```rust
//! use bubbletea_carousel::config::Orientation;
//! use bubbletea_carousel::dimensions::{ItemBox, Margins, Size, Tracker};
//!
//! let items = vec![
//!     ItemBox::new(Size::new(180.0, 90.0)).with_margins(Margins::symmetric(0.0, 10.0)),
//!     ItemBox::new(Size::new(180.0, 90.0)).with_margins(Margins::symmetric(0.0, 10.0)),
//! ];
//!
//! let mut tracker = Tracker::new();
//! tracker.remeasure(Size::new(300.0, 90.0), &items, Orientation::Horizontal, false);
//! assert_eq!(tracker.item_widths(), &[200.0, 200.0]);
//! assert_eq!(tracker.track_extent(Orientation::Horizontal, 2, 0.0), 400.0);
//! ```

use crate::config::Orientation;
use unicode_width::UnicodeWidthStr;

/// A width/height pair.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Size {
    /// Horizontal extent.
    pub width: f64,
    /// Vertical extent.
    pub height: f64,
}

impl Size {
    /// Creates a size.
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    /// Extent along the axis of travel.
    pub fn primary(&self, orientation: Orientation) -> f64 {
        match orientation {
            Orientation::Horizontal => self.width,
            Orientation::Vertical => self.height,
        }
    }

    /// Extent across the axis of travel.
    pub fn cross(&self, orientation: Orientation) -> f64 {
        match orientation {
            Orientation::Horizontal => self.height,
            Orientation::Vertical => self.width,
        }
    }

    /// Whether either side is zero (an unlaid-out or hidden element).
    pub fn is_empty(&self) -> bool {
        self.width <= 0.0 || self.height <= 0.0
    }
}

/// Outer margins of a slide.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Margins {
    /// Top margin.
    pub top: f64,
    /// Right margin.
    pub right: f64,
    /// Bottom margin.
    pub bottom: f64,
    /// Left margin.
    pub left: f64,
}

impl Margins {
    /// Same vertical margin above and below, same horizontal margin left and right.
    pub fn symmetric(vertical: f64, horizontal: f64) -> Self {
        Self {
            top: vertical,
            right: horizontal,
            bottom: vertical,
            left: horizontal,
        }
    }

    /// Left plus right.
    pub fn horizontal(&self) -> f64 {
        self.left + self.right
    }

    /// Top plus bottom.
    pub fn vertical(&self) -> f64 {
        self.top + self.bottom
    }
}

/// Anything the tracker can measure: a slide's own box plus its margins.
pub trait Measurable {
    /// Intrinsic size, excluding margins.
    fn outer_size(&self) -> Size;

    /// Margins around the slide. None by default.
    fn margins(&self) -> Margins {
        Margins::default()
    }

    /// Width including left and right margins.
    fn measured_width(&self) -> f64 {
        self.outer_size().width + self.margins().horizontal()
    }

    /// Height including top and bottom margins.
    fn measured_height(&self) -> f64 {
        self.outer_size().height + self.margins().vertical()
    }
}

impl<T: Measurable + ?Sized> Measurable for &T {
    fn outer_size(&self) -> Size {
        (**self).outer_size()
    }

    fn margins(&self) -> Margins {
        (**self).margins()
    }
}

/// Text slides measure in terminal cells: the widest line by display width and
/// the number of lines.
impl Measurable for str {
    fn outer_size(&self) -> Size {
        let width = self.lines().map(UnicodeWidthStr::width).max().unwrap_or(0);
        Size::new(width as f64, self.lines().count() as f64)
    }
}

impl Measurable for String {
    fn outer_size(&self) -> Size {
        self.as_str().outer_size()
    }
}

/// A pre-measured slide box, for hosts that lay out slides themselves.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ItemBox {
    /// Intrinsic size.
    pub size: Size,
    /// Margins around the box.
    pub margins: Margins,
}

impl ItemBox {
    /// Creates a box with no margins.
    pub fn new(size: Size) -> Self {
        Self {
            size,
            margins: Margins::default(),
        }
    }

    /// Sets the margins (builder pattern).
    pub fn with_margins(mut self, margins: Margins) -> Self {
        self.margins = margins;
        self
    }
}

impl Measurable for ItemBox {
    fn outer_size(&self) -> Size {
        self.size
    }

    fn margins(&self) -> Margins {
        self.margins
    }
}

/// Container size and per-slide extents.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Tracker {
    container: Size,
    item_widths: Vec<f64>,
    item_heights: Vec<f64>,
    measured: bool,
}

impl Tracker {
    /// Creates a tracker with no measurements.
    pub fn new() -> Self {
        Self::default()
    }

    /// Re-reads the container and slide sizes.
    ///
    /// In single-item mode every slide's extent along the axis of travel is
    /// forced to the container's extent on that axis, so each slide fills the
    /// viewport; the cross axis is measured normally. In continuous mode both
    /// axes are measured.
    ///
    /// The container size is always taken. With no items the per-slide arrays
    /// are left untouched, so a transient empty slide set does not collapse
    /// the layout. Returns whether the arrays were updated.
    pub fn remeasure<M: Measurable>(
        &mut self,
        container: Size,
        items: &[M],
        orientation: Orientation,
        single_item_mode: bool,
    ) -> bool {
        self.container = container;

        if items.is_empty() {
            log::debug!("remeasure skipped: no items (container {container:?})");
            return false;
        }

        let measured_widths = items.iter().map(Measurable::measured_width);
        let measured_heights = items.iter().map(Measurable::measured_height);

        if single_item_mode {
            match orientation {
                Orientation::Horizontal => {
                    self.item_widths = vec![container.width; items.len()];
                    self.item_heights = measured_heights.collect();
                }
                Orientation::Vertical => {
                    self.item_heights = vec![container.height; items.len()];
                    self.item_widths = measured_widths.collect();
                }
            }
        } else {
            self.item_widths = measured_widths.collect();
            self.item_heights = measured_heights.collect();
        }
        self.measured = true;

        log::debug!(
            "remeasured {} items in {:?} container ({:?}, single_item_mode={})",
            items.len(),
            container,
            orientation,
            single_item_mode
        );
        true
    }

    /// Installs extents measured elsewhere.
    ///
    /// `widths` and `heights` are the full per-slide extents (margins
    /// included). Empty vectors keep the previous arrays, like
    /// [`Tracker::remeasure`] with no items.
    pub fn set_geometry(&mut self, container: Size, widths: Vec<f64>, heights: Vec<f64>) {
        self.container = container;
        if widths.is_empty() && heights.is_empty() {
            return;
        }
        self.item_widths = widths;
        self.item_heights = heights;
        self.measured = true;
    }

    /// Updates only the container size.
    pub fn set_container(&mut self, container: Size) {
        self.container = container;
    }

    /// Drops all measurements.
    pub fn clear(&mut self) {
        *self = Self::default();
    }

    /// Whether slide extents have been measured at least once.
    pub fn is_measured(&self) -> bool {
        self.measured
    }

    /// Whether both extent arrays have exactly one entry per slide.
    pub fn is_consistent(&self, slide_count: usize) -> bool {
        self.item_widths.len() == slide_count && self.item_heights.len() == slide_count
    }

    /// The container size.
    pub fn container(&self) -> Size {
        self.container
    }

    /// The container extent along the axis of travel.
    pub fn container_extent(&self, orientation: Orientation) -> f64 {
        self.container.primary(orientation)
    }

    /// Per-slide widths.
    pub fn item_widths(&self) -> &[f64] {
        &self.item_widths
    }

    /// Per-slide heights.
    pub fn item_heights(&self) -> &[f64] {
        &self.item_heights
    }

    /// Per-slide extents along the axis of travel.
    pub fn extents(&self, orientation: Orientation) -> &[f64] {
        match orientation {
            Orientation::Horizontal => &self.item_widths,
            Orientation::Vertical => &self.item_heights,
        }
    }

    /// Extent of one slide along the axis of travel; zero when it has not
    /// been measured.
    pub fn extent_at(&self, index: usize, orientation: Orientation) -> f64 {
        self.extents(orientation).get(index).copied().unwrap_or(0.0)
    }

    /// Offset of slide `index` from the start of the track: the sum of
    /// `extent + gap` over every slide before it. Slide 0 is always at 0.
    pub fn offset_of(&self, index: usize, orientation: Orientation, gap: f64) -> f64 {
        (0..index)
            .map(|i| self.extent_at(i, orientation) + gap)
            .sum()
    }

    /// Total length of the first `slide_count` slides and the gaps between them.
    pub fn track_extent(&self, orientation: Orientation, slide_count: usize, gap: f64) -> f64 {
        if slide_count == 0 {
            return 0.0;
        }
        let items: f64 = (0..slide_count)
            .map(|i| self.extent_at(i, orientation))
            .sum();
        items + gap * (slide_count - 1) as f64
    }

    /// How far the track can be shifted before its end meets the container's
    /// end. Never negative.
    pub fn max_translate(&self, orientation: Orientation, slide_count: usize, gap: f64) -> f64 {
        (self.track_extent(orientation, slide_count, gap) - self.container_extent(orientation))
            .max(0.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn boxes() -> Vec<ItemBox> {
        vec![
            ItemBox::new(Size::new(100.0, 50.0)).with_margins(Margins {
                top: 1.0,
                right: 5.0,
                bottom: 2.0,
                left: 5.0,
            }),
            ItemBox::new(Size::new(150.0, 60.0)),
            ItemBox::new(Size::new(120.0, 40.0)).with_margins(Margins::symmetric(4.0, 0.0)),
        ]
    }

    #[test]
    fn test_continuous_measures_both_axes_with_margins() {
        let mut tracker = Tracker::new();
        assert!(tracker.remeasure(
            Size::new(300.0, 80.0),
            &boxes(),
            Orientation::Horizontal,
            false
        ));
        assert_eq!(tracker.item_widths(), &[110.0, 150.0, 120.0]);
        assert_eq!(tracker.item_heights(), &[53.0, 60.0, 48.0]);
        assert!(tracker.is_measured());
        assert!(tracker.is_consistent(3));
    }

    #[test]
    fn test_single_item_mode_fills_primary_axis() {
        let mut tracker = Tracker::new();
        tracker.remeasure(Size::new(300.0, 80.0), &boxes(), Orientation::Horizontal, true);
        assert_eq!(tracker.item_widths(), &[300.0, 300.0, 300.0]);
        assert_eq!(tracker.item_heights(), &[53.0, 60.0, 48.0]);

        tracker.remeasure(Size::new(300.0, 80.0), &boxes(), Orientation::Vertical, true);
        assert_eq!(tracker.item_heights(), &[80.0, 80.0, 80.0]);
        assert_eq!(tracker.item_widths(), &[110.0, 150.0, 120.0]);
    }

    #[test]
    fn test_empty_items_preserve_previous_measurement() {
        let mut tracker = Tracker::new();
        tracker.remeasure(Size::new(300.0, 80.0), &boxes(), Orientation::Horizontal, false);
        let before = tracker.item_widths().to_vec();

        let none: Vec<ItemBox> = Vec::new();
        assert!(!tracker.remeasure(Size::new(320.0, 80.0), &none, Orientation::Horizontal, false));
        assert_eq!(tracker.item_widths(), before.as_slice());
        assert_eq!(tracker.container().width, 320.0);
    }

    #[test]
    fn test_remeasure_is_idempotent() {
        let mut tracker = Tracker::new();
        tracker.remeasure(Size::new(300.0, 80.0), &boxes(), Orientation::Horizontal, false);
        let first = tracker.clone();
        tracker.remeasure(Size::new(300.0, 80.0), &boxes(), Orientation::Horizontal, false);
        assert_eq!(tracker, first);
    }

    #[test]
    fn test_offsets_and_track_extent() {
        let mut tracker = Tracker::new();
        tracker.set_geometry(
            Size::new(200.0, 100.0),
            vec![50.0, 50.0, 50.0],
            vec![100.0, 150.0, 120.0],
        );
        assert_eq!(tracker.offset_of(0, Orientation::Vertical, 10.0), 0.0);
        assert_eq!(tracker.offset_of(2, Orientation::Vertical, 10.0), 270.0);
        assert_eq!(tracker.track_extent(Orientation::Vertical, 3, 10.0), 390.0);
        assert_eq!(tracker.max_translate(Orientation::Vertical, 3, 10.0), 290.0);
        assert_eq!(tracker.max_translate(Orientation::Horizontal, 3, 0.0), 0.0);
    }

    #[test]
    fn test_mismatched_arrays_are_detected() {
        let mut tracker = Tracker::new();
        tracker.set_geometry(Size::new(100.0, 100.0), vec![40.0], vec![40.0]);
        assert!(tracker.is_measured());
        assert!(!tracker.is_consistent(3));

        tracker.set_geometry(Size::new(100.0, 100.0), vec![40.0; 3], vec![40.0; 2]);
        assert!(!tracker.is_consistent(3));

        tracker.set_geometry(Size::new(100.0, 100.0), vec![40.0; 3], vec![40.0; 3]);
        assert!(tracker.is_consistent(3));
        assert_eq!(tracker.track_extent(Orientation::Horizontal, 3, 5.0), 130.0);
    }

    #[test]
    fn test_text_measures_in_cells() {
        let slide = "wide 字\nab";
        let size = slide.outer_size();
        assert_eq!(size, Size::new(7.0, 2.0));
        assert_eq!(String::from("").outer_size(), Size::new(0.0, 0.0));
    }
}
