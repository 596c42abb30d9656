use std::fmt;

/// A RGB color value.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Color {
    /// Red channel.
    pub red: u16,

    /// Green channel.
    pub green: u16,

    /// Blue channel.
    pub blue: u16,
}

impl Color {
    /// Creates a new color.
    ///
    /// # Examples
    ///
    /// ```
    /// use las_validate::Color;
    /// let color = Color::new(1, 2, 3);
    /// assert_eq!(1, color.red);
    /// assert_eq!(2, color.green);
    /// assert_eq!(3, color.blue);
    /// ```
    pub fn new(red: u16, green: u16, blue: u16) -> Color {
        Color { red, green, blue }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}/{}/{})", self.red, self.green, self.blue)
    }
}

/// Per-channel minimum and maximum of the colors seen so far.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ColorRange {
    /// Smallest value of each channel.
    pub min: Color,
    /// Largest value of each channel.
    pub max: Color,
}

impl ColorRange {
    /// Starts a range at a single color.
    pub fn new(color: Color) -> ColorRange {
        ColorRange {
            min: color,
            max: color,
        }
    }

    /// Widens the range to include this color.
    ///
    /// # Examples
    ///
    /// ```
    /// use las_validate::{Color, ColorRange};
    /// let mut range = ColorRange::new(Color::new(10, 10, 10));
    /// range.add(Color::new(5, 20, 10));
    /// assert_eq!(Color::new(5, 10, 10), range.min);
    /// assert_eq!(Color::new(10, 20, 10), range.max);
    /// ```
    pub fn add(&mut self, color: Color) {
        self.min.red = self.min.red.min(color.red);
        self.min.green = self.min.green.min(color.green);
        self.min.blue = self.min.blue.min(color.blue);
        self.max.red = self.max.red.max(color.red);
        self.max.green = self.max.green.max(color.green);
        self.max.blue = self.max.blue.max(color.blue);
    }

    /// Is every channel constant?
    pub fn is_uniform(&self) -> bool {
        self.min == self.max
    }
}
