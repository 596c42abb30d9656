//! Streaming statistics over the point records of one file.

use crate::{Bounds, ColorRange, Header, Point, Transform, Vector};

/// The three severities of resolution fluff.
///
/// A file has fluff on an axis if every quantized coordinate on that axis is a multiple of the
/// tier's divisor, i.e. the scale factor claims more precision than the data carries.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Fluff {
    /// Every value is a multiple of ten.
    X10,
    /// Every value is a multiple of one hundred.
    X100,
    /// Every value is a multiple of one thousand.
    X1000,
}

impl Fluff {
    /// All tiers, mildest first.
    pub const ALL: [Fluff; 3] = [Fluff::X10, Fluff::X100, Fluff::X1000];

    /// The divisor of this tier.
    pub fn divisor(&self) -> i32 {
        match self {
            Fluff::X10 => 10,
            Fluff::X100 => 100,
            Fluff::X1000 => 1000,
        }
    }

    fn index(&self) -> usize {
        match self {
            Fluff::X10 => 0,
            Fluff::X100 => 1,
            Fluff::X1000 => 2,
        }
    }
}

/// The smallest and largest value seen.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Extent<T> {
    /// The smallest value.
    pub min: T,
    /// The largest value.
    pub max: T,
}

impl<T: PartialOrd + Copy> Extent<T> {
    /// Creates an extent holding a single value.
    pub fn new(value: T) -> Extent<T> {
        Extent {
            min: value,
            max: value,
        }
    }

    /// Grows the extent to include a value.
    pub fn add(&mut self, value: T) {
        if value < self.min {
            self.min = value;
        }
        if value > self.max {
            self.max = value;
        }
    }

    /// Were all values equal?
    pub fn is_uniform(&self) -> bool {
        self.min == self.max
    }
}

fn extend<T: PartialOrd + Copy>(extent: &mut Option<Extent<T>>, value: T) {
    match extent {
        Some(extent) => extent.add(value),
        None => *extent = Some(Extent::new(value)),
    }
}

/// An inventory of the points of a file.
///
/// Return numbers and numbers of returns are masked to four bits, so the histograms have
/// sixteen slots.
///
/// # Examples
///
/// ```
/// use las_validate::{Header, Inventory, Point};
/// let header = Header::default();
/// let mut inventory = Inventory::new(&header);
/// inventory.add(&Point { return_number: 1, number_of_returns: 1, ..Default::default() });
/// assert_eq!(1, inventory.number_of_point_records);
/// assert_eq!(1, inventory.number_of_points_by_return[1]);
/// ```
#[derive(Clone, Debug)]
pub struct Inventory {
    bounds: Bounds,
    transforms: Vector<Transform>,
    /// The number of points added.
    pub number_of_point_records: u64,
    /// Histogram of return numbers.
    pub number_of_points_by_return: [u64; 16],
    /// Histogram of the number of returns of given pulse.
    pub number_of_returns: [u64; 16],
    /// `return_count_for_return_number[i][j]` counts points with `i` returns and return number `j`.
    pub return_count_for_return_number: [[u64; 16]; 16],
    /// The number of points outside of the header's bounding box, with a tolerance of half the
    /// scale factor.
    pub points_outside_bounding_box: u64,
    /// The quantized coordinate extent.
    pub coordinates: Option<Extent<Vector<i32>>>,
    /// GPS time extent, for formats with GPS time.
    pub gps_time: Option<Extent<f64>>,
    /// Intensity extent.
    pub intensity: Option<Extent<u16>>,
    /// Scan angle rank extent, legacy formats.
    pub scan_angle_rank: Option<Extent<i8>>,
    /// Scan angle extent, extended formats.
    pub scan_angle: Option<Extent<i16>>,
    /// Point source id extent.
    pub point_source_id: Option<Extent<u16>>,
    /// Color extent, for formats with color.
    pub color: Option<ColorRange>,
    fluff: [Vector<bool>; 3],
    wave_packet_indices: [u64; 4],
    extended: bool,
}

impl Inventory {
    /// Creates an empty inventory for the points of a file with this header.
    pub fn new(header: &Header) -> Inventory {
        Inventory {
            bounds: header.bounds.with_half_scale_tolerance(&header.transforms),
            transforms: header.transforms,
            number_of_point_records: 0,
            number_of_points_by_return: [0; 16],
            number_of_returns: [0; 16],
            return_count_for_return_number: [[0; 16]; 16],
            points_outside_bounding_box: 0,
            coordinates: None,
            gps_time: None,
            intensity: None,
            scan_angle_rank: None,
            scan_angle: None,
            point_source_id: None,
            color: None,
            fluff: [Vector {
                x: true,
                y: true,
                z: true,
            }; 3],
            wave_packet_indices: [0; 4],
            extended: header.format().is_extended(),
        }
    }

    /// Adds a point.
    pub fn add(&mut self, point: &Point) {
        self.number_of_point_records += 1;

        let return_number = usize::from(point.return_number & 0x0f);
        let number_of_returns = usize::from(point.number_of_returns & 0x0f);
        self.number_of_points_by_return[return_number] += 1;
        self.number_of_returns[number_of_returns] += 1;
        self.return_count_for_return_number[number_of_returns][return_number] += 1;

        let x = self.transforms.x.direct(point.x);
        let y = self.transforms.y.direct(point.y);
        let z = self.transforms.z.direct(point.z);
        if !self.bounds.contains(x, y, z) {
            self.points_outside_bounding_box += 1;
        }

        let xyz = Vector {
            x: point.x,
            y: point.y,
            z: point.z,
        };
        match &mut self.coordinates {
            Some(extent) => {
                extent.min.x = extent.min.x.min(xyz.x);
                extent.min.y = extent.min.y.min(xyz.y);
                extent.min.z = extent.min.z.min(xyz.z);
                extent.max.x = extent.max.x.max(xyz.x);
                extent.max.y = extent.max.y.max(xyz.y);
                extent.max.z = extent.max.z.max(xyz.z);
            }
            None => self.coordinates = Some(Extent { min: xyz, max: xyz }),
        }
        for tier in Fluff::ALL {
            let divisor = tier.divisor();
            let fluff = &mut self.fluff[tier.index()];
            fluff.x &= xyz.x % divisor == 0;
            fluff.y &= xyz.y % divisor == 0;
            fluff.z &= xyz.z % divisor == 0;
        }

        extend(&mut self.intensity, point.intensity);
        if self.extended {
            extend(&mut self.scan_angle, point.scan_angle);
        } else {
            extend(&mut self.scan_angle_rank, point.scan_angle_rank);
        }
        extend(&mut self.point_source_id, point.point_source_id);
        if let Some(gps_time) = point.gps_time {
            extend(&mut self.gps_time, gps_time);
        }
        if let Some(color) = point.color {
            match &mut self.color {
                Some(range) => range.add(color),
                None => self.color = Some(ColorRange::new(color)),
            }
        }
        let index = point.wave_packet_descriptor_index;
        self.wave_packet_indices[usize::from(index / 64)] |= 1 << (index % 64);
    }

    /// Has at least one point been added?
    pub fn is_active(&self) -> bool {
        self.number_of_point_records > 0
    }

    /// Returns, per axis, whether that axis has fluff of the given tier.
    ///
    /// An empty inventory has no fluff.
    ///
    /// # Examples
    ///
    /// ```
    /// use las_validate::{Header, Inventory, Point};
    /// use las_validate::inventory::Fluff;
    /// let mut inventory = Inventory::new(&Header::default());
    /// inventory.add(&Point { x: 1200, y: 1000, z: 7, ..Default::default() });
    /// let fluff = inventory.fluff(Fluff::X100);
    /// assert!(fluff.x && fluff.y && !fluff.z);
    /// assert!(!inventory.fluff(Fluff::X1000).x);
    /// ```
    pub fn fluff(&self, tier: Fluff) -> Vector<bool> {
        if self.is_active() {
            self.fluff[tier.index()]
        } else {
            Vector::default()
        }
    }

    /// Does any point reference this wave packet descriptor index?
    pub fn has_wave_packet_index(&self, index: u8) -> bool {
        self.wave_packet_indices[usize::from(index / 64)] & (1 << (index % 64)) != 0
    }

    /// The smallest and largest coordinates, in real units.
    pub fn bounds(&self) -> Option<Bounds> {
        self.coordinates.map(|extent| Bounds {
            min: Vector {
                x: self.transforms.x.direct(extent.min.x),
                y: self.transforms.y.direct(extent.min.y),
                z: self.transforms.z.direct(extent.min.z),
            },
            max: Vector {
                x: self.transforms.x.direct(extent.max.x),
                y: self.transforms.y.direct(extent.max.y),
                z: self.transforms.z.direct(extent.max.z),
            },
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Color;

    fn header() -> Header {
        Header {
            bounds: Bounds {
                min: Vector {
                    x: 0.,
                    y: 0.,
                    z: 0.,
                },
                max: Vector {
                    x: 10.,
                    y: 10.,
                    z: 10.,
                },
            },
            ..Default::default()
        }
    }

    #[test]
    fn histograms_and_tally() {
        let mut inventory = Inventory::new(&header());
        for (return_number, number_of_returns) in [(1, 2), (2, 2), (3, 2), (0, 0)] {
            inventory.add(&Point {
                return_number,
                number_of_returns,
                ..Default::default()
            });
        }
        assert_eq!(4, inventory.number_of_point_records);
        assert_eq!([1, 1, 1, 1], inventory.number_of_points_by_return[..4]);
        assert_eq!(3, inventory.number_of_returns[2]);
        assert_eq!(1, inventory.return_count_for_return_number[2][3]);
        assert_eq!(1, inventory.return_count_for_return_number[0][0]);
    }

    #[test]
    fn outside_bounding_box() {
        let mut inventory = Inventory::new(&header());
        inventory.add(&Point {
            x: 10_000,
            ..Default::default()
        });
        inventory.add(&Point {
            x: 10_001,
            ..Default::default()
        });
        inventory.add(&Point {
            y: 10_000,
            ..Default::default()
        });
        assert_eq!(1, inventory.points_outside_bounding_box);
        inventory.add(&Point {
            z: 10_002,
            ..Default::default()
        });
        assert_eq!(2, inventory.points_outside_bounding_box);
    }

    #[test]
    fn empty_inventory_has_no_fluff() {
        let inventory = Inventory::new(&header());
        assert!(!inventory.is_active());
        assert!(!inventory.fluff(Fluff::X10).x);
        assert!(inventory.bounds().is_none());
    }

    #[test]
    fn fluff_is_cleared_by_one_value() {
        let mut inventory = Inventory::new(&header());
        inventory.add(&Point {
            x: 1000,
            y: 1000,
            z: 1000,
            ..Default::default()
        });
        assert!(inventory.fluff(Fluff::X1000).y);
        inventory.add(&Point {
            x: 1000,
            y: 1010,
            z: 1000,
            ..Default::default()
        });
        let x1000 = inventory.fluff(Fluff::X1000);
        assert!(x1000.x && !x1000.y && x1000.z);
        assert!(inventory.fluff(Fluff::X10).y);
    }

    #[test]
    fn extents() {
        let mut inventory = Inventory::new(&header());
        for (i, intensity) in [5u16, 3, 9].into_iter().enumerate() {
            inventory.add(&Point {
                x: i32::try_from(i).unwrap(),
                intensity,
                gps_time: Some(100.0 + intensity as f64),
                color: Some(Color::new(1, 2, 3)),
                ..Default::default()
            });
        }
        let intensity = inventory.intensity.unwrap();
        assert_eq!((3, 9), (intensity.min, intensity.max));
        assert_eq!(103.0, inventory.gps_time.unwrap().min);
        assert!(inventory.color.unwrap().is_uniform());
        assert!(inventory.scan_angle_rank.unwrap().is_uniform());
        assert!(inventory.scan_angle.is_none());
        let bounds = inventory.bounds().unwrap();
        assert_eq!(0.002, bounds.max.x);
    }

    #[test]
    fn wave_packet_indices() {
        let mut inventory = Inventory::new(&header());
        for index in [0, 63, 64, 255] {
            inventory.add(&Point {
                wave_packet_descriptor_index: index,
                ..Default::default()
            });
        }
        assert!(inventory.has_wave_packet_index(63));
        assert!(inventory.has_wave_packet_index(64));
        assert!(inventory.has_wave_packet_index(255));
        assert!(!inventory.has_wave_packet_index(1));
    }
}
