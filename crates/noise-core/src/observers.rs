//! Fixed observer sites around East Hampton (KJPX).

use crate::models::ObserverLocation;

pub const KJPX_LAT: f64 = 40.9590;
pub const KJPX_LON: f64 = -72.2516;

/// Default monitoring sites. The first entry is the primary observer used
/// for whole-track summaries.
pub fn default_observers() -> Vec<ObserverLocation> {
    vec![
        ObserverLocation::new("wainscott-main", "Wainscott Main Street", 40.9445, -72.2337),
        ObserverLocation::new("sagaponack-south", "Sagaponack South", 40.9234, -72.2567),
        ObserverLocation::new("runway-approach", "Runway 28 Approach", 40.9589, -72.2312),
        ObserverLocation::new("runway-departure", "Runway 10 Departure", 40.9591, -72.2720),
        ObserverLocation::new("northwest-residential", "Northwest Residential", 40.9678, -72.2612),
        ObserverLocation::new("georgica-pond", "Georgica Pond Area", 40.9412, -72.2234),
        ObserverLocation::new("daniels-hole-road", "Daniels Hole Road", 40.9512, -72.2445),
        ObserverLocation::new("beach-lane", "Beach Lane", 40.9312, -72.2389),
    ]
}
