use crate::models::Coordinates;

/// Source of the current GPS reading.
///
/// Never fails: an unavailable sensor or a denied permission is `None`, and
/// the record is stored without coordinates.
pub trait CoordinateProvider {
    fn current_coordinates(&self) -> Option<Coordinates>;
}

/// Reading supplied up front by the caller (CLI flags, tests).
#[derive(Debug, Default, Clone, Copy)]
pub struct ManualCoordinates(pub Option<Coordinates>);

impl CoordinateProvider for ManualCoordinates {
    fn current_coordinates(&self) -> Option<Coordinates> {
        self.0
    }
}
