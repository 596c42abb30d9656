use crate::{Transform, Vector};

/// Minimum and maximum bounds in three dimensions.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Bounds {
    /// The minimum values.
    pub min: Vector<f64>,

    /// The maximum values.
    pub max: Vector<f64>,
}

impl Bounds {
    /// Grows these bounds outwards by half of each axis' scale factor.
    ///
    /// A point whose coordinates were rounded onto the quantization grid can land up to half a
    /// scale step outside of the true extent, so this is the box points are checked against.
    ///
    /// # Examples
    ///
    /// ```
    /// use las_validate::{Bounds, Transform, Vector};
    /// let bounds = Bounds {
    ///     min: Vector { x: 0., y: 0., z: 0. },
    ///     max: Vector { x: 1., y: 1., z: 1. },
    /// };
    /// let transforms = Vector {
    ///     x: Transform { scale: 0.1, offset: 0. },
    ///     y: Transform { scale: 0.1, offset: 0. },
    ///     z: Transform { scale: 0.1, offset: 0. },
    /// };
    /// let tolerant = bounds.with_half_scale_tolerance(&transforms);
    /// assert_eq!(-0.05, tolerant.min.x);
    /// assert!((tolerant.max.z - 1.05).abs() < 1e-12);
    /// ```
    pub fn with_half_scale_tolerance(&self, transforms: &Vector<Transform>) -> Bounds {
        Bounds {
            min: Vector {
                x: self.min.x - 0.5 * transforms.x.scale,
                y: self.min.y - 0.5 * transforms.y.scale,
                z: self.min.z - 0.5 * transforms.z.scale,
            },
            max: Vector {
                x: self.max.x + 0.5 * transforms.x.scale,
                y: self.max.y + 0.5 * transforms.y.scale,
                z: self.max.z + 0.5 * transforms.z.scale,
            },
        }
    }

    /// Returns true if the xyz coordinates lie inside these bounds, edges included.
    ///
    /// # Examples
    ///
    /// ```
    /// use las_validate::{Bounds, Vector};
    /// let bounds = Bounds {
    ///     min: Vector { x: 0., y: 0., z: 0. },
    ///     max: Vector { x: 1., y: 1., z: 1. },
    /// };
    /// assert!(bounds.contains(1., 0., 0.5));
    /// assert!(!bounds.contains(1.5, 0., 0.5));
    /// ```
    pub fn contains(&self, x: f64, y: f64, z: f64) -> bool {
        x >= self.min.x
            && x <= self.max.x
            && y >= self.min.y
            && y <= self.max.y
            && z >= self.min.z
            && z <= self.max.z
    }

    /// Returns the minimum and maximum of each axis, labelled with the axis name.
    ///
    /// # Examples
    ///
    /// ```
    /// use las_validate::{Bounds, Vector};
    /// let bounds = Bounds {
    ///     min: Vector { x: 0., y: 1., z: 2. },
    ///     max: Vector { x: 3., y: 4., z: 5. },
    /// };
    /// assert_eq!(("y", 1., 4.), bounds.labelled()[1]);
    /// ```
    pub fn labelled(&self) -> [(&'static str, f64, f64); 3] {
        [
            ("x", self.min.x, self.max.x),
            ("y", self.min.y, self.max.y),
            ("z", self.min.z, self.max.z),
        ]
    }
}

impl Default for Bounds {
    fn default() -> Bounds {
        Bounds {
            min: Vector {
                x: f64::INFINITY,
                y: f64::INFINITY,
                z: f64::INFINITY,
            },
            max: Vector {
                x: f64::NEG_INFINITY,
                y: f64::NEG_INFINITY,
                z: f64::NEG_INFINITY,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_contains_nothing() {
        let bounds = Bounds::default();
        assert!(!bounds.contains(0., 0., 0.));
    }

    #[test]
    fn tolerance_is_per_axis() {
        let bounds = Bounds {
            min: Vector {
                x: 10.,
                y: 20.,
                z: 30.,
            },
            max: Vector {
                x: 11.,
                y: 21.,
                z: 31.,
            },
        };
        let transforms = Vector {
            x: Transform {
                scale: 1.,
                offset: 0.,
            },
            y: Transform {
                scale: 0.01,
                offset: 0.,
            },
            z: Transform {
                scale: 0.001,
                offset: 0.,
            },
        };
        let tolerant = bounds.with_half_scale_tolerance(&transforms);
        assert!(tolerant.contains(9.5, 20., 30.));
        assert!(!tolerant.contains(11., 19.99, 30.));
        assert!(tolerant.contains(11., 19.996, 31.0004));
    }
}
