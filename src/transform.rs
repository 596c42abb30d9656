use std::fmt;

/// A scale and an offset that transforms quantized xyz coordinates into real coordinates.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Transform {
    /// The scale.
    pub scale: f64,
    /// The offset.
    pub offset: f64,
}

impl Transform {
    /// Applies this transform to an i32, returning a float.
    ///
    /// # Examples
    ///
    /// ```
    /// # use las_validate::Transform;
    /// let transform = Transform { scale: 2., offset: 1. };
    /// assert_eq!(3., transform.direct(1));
    /// ```
    pub fn direct(&self, n: i32) -> f64 {
        self.scale * f64::from(n) + self.offset
    }

    /// Snaps the offset onto the grid defined by the scale.
    ///
    /// The offset divided by the scale is rounded half away from zero and multiplied back. A
    /// well-formed offset survives this unchanged.
    ///
    /// # Examples
    ///
    /// ```
    /// # use las_validate::Transform;
    /// let transform = Transform { scale: 0.01, offset: 1.2345 };
    /// assert!((transform.quantized_offset() - 1.23).abs() < 1e-9);
    /// ```
    pub fn quantized_offset(&self) -> f64 {
        self.scale * (self.offset / self.scale).round()
    }

    /// Returns true if the offset carries decimal digits that the scale cannot express.
    ///
    /// Returns false if the scale is not positive, since then there is no grid to compare with.
    ///
    /// # Examples
    ///
    /// ```
    /// # use las_validate::Transform;
    /// assert!(!Transform { scale: 0.01, offset: 100.0 }.has_offset_fluff());
    /// assert!(Transform { scale: 0.01, offset: 100.005 }.has_offset_fluff());
    /// ```
    pub fn has_offset_fluff(&self) -> bool {
        if self.scale <= 0. {
            return false;
        }
        (self.offset - self.quantized_offset()).abs() > crate::utils::TOLERANCE
    }
}

impl Default for Transform {
    fn default() -> Transform {
        Transform {
            scale: 0.001,
            offset: 0.,
        }
    }
}

impl fmt::Display for Transform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "`{} * x + {}`", self.scale, self.offset)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn negative_offsets_round_away_from_zero() {
        let transform = Transform {
            scale: 0.01,
            offset: -3.005,
        };
        assert!(transform.has_offset_fluff());
        let transform = Transform {
            scale: 0.01,
            offset: -3.01,
        };
        assert!(!transform.has_offset_fluff());
    }

    #[test]
    fn zero_scale_is_not_fluff() {
        let transform = Transform {
            scale: 0.,
            offset: 1.5,
        };
        assert!(!transform.has_offset_fluff());
    }
}
