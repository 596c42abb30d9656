/// An xyz collection.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Vector<T> {
    /// X
    pub x: T,
    /// Y
    pub y: T,
    /// Z
    pub z: T,
}

impl<T> Vector<T> {
    /// Returns the three components labelled with their lowercase axis name.
    ///
    /// Checks that treat each axis the same way iterate over this.
    ///
    /// # Examples
    ///
    /// ```
    /// # use las_validate::Vector;
    /// let vector = Vector { x: 1, y: 2, z: 3 };
    /// let labels: Vec<_> = vector.labelled().iter().map(|(label, _)| *label).collect();
    /// assert_eq!(vec!["x", "y", "z"], labels);
    /// ```
    pub fn labelled(&self) -> [(&'static str, &T); 3] {
        [("x", &self.x), ("y", &self.y), ("z", &self.z)]
    }
}
