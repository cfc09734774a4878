//! Built-in region conditions used by the CLI and tests.

use crate::region::{GlobeRect, Region, RegionCondition, Terrain};

pub fn nyc() -> RegionCondition {
    RegionCondition::new(
        Region::new(
            GlobeRect::new(40.0, 41.0, -74.0, -73.0),
            "New York City",
            Terrain::Other,
        ),
        2025,
        8_478_000.0,
        92_000_000.0,
    )
}

pub fn tokyo() -> RegionCondition {
    RegionCondition::new(
        Region::new(GlobeRect::new(35.0, 36.0, 139.0, 140.0), "Tokyo", Terrain::Other),
        2025,
        37_000_000.0,
        59_200_000.0,
    )
}

pub fn pacific() -> RegionCondition {
    RegionCondition::new(
        Region::new(
            GlobeRect::new(21.0, 48.0, 164.0, -133.0),
            "Pacific Ocean",
            Terrain::Ocean,
        ),
        2025,
        0.0,
        0.0,
    )
}

pub fn cal_poly() -> RegionCondition {
    RegionCondition::new(
        Region::new(
            GlobeRect::new(35.2964, 35.309, -120.67, -120.652),
            "Cal Poly",
            Terrain::Other,
        ),
        2025,
        22_000.0,
        47_114.0,
    )
}

pub fn example_region_conditions() -> Vec<RegionCondition> {
    vec![nyc(), tokyo(), pacific(), cal_poly()]
}
