use approx::assert_abs_diff_eq;
use ghg_outlook::{
    project_condition, project_condition_as,
    samples::{nyc, pacific, tokyo},
    GlobeRect, Region, RegionCondition, Terrain,
};

fn unit_region(name: &str, terrain: Terrain, pop: f64, ghg_rate: f64) -> RegionCondition {
    RegionCondition::new(
        Region::new(GlobeRect::new(1.0, 1.0, 1.0, 1.0), name, terrain),
        2025,
        pop,
        ghg_rate,
    )
}

#[test]
fn ocean_growth() {
    let atlantic = unit_region("Atlantic", Terrain::Ocean, 5.0, 4.0);
    let projected = project_condition(&atlantic, 7);
    assert_abs_diff_eq!(projected.pop, 5.360677, epsilon = 0.01);
    assert_abs_diff_eq!(projected.ghg_rate, 4.2885, epsilon = 0.01);
    assert_eq!(projected.year, 2032);

    let empty = project_condition(&pacific(), 5);
    assert_eq!(empty.pop, 0.0);
    assert_eq!(empty.ghg_rate, 0.0);
    assert_eq!(empty.year, 2030);
}

#[test]
fn mountain_growth() {
    let everest = unit_region("Everest", Terrain::Mountains, 800.0, 2.0);
    let projected = project_condition(&everest, 20);
    assert_abs_diff_eq!(projected.pop, 2122.6382, epsilon = 0.01);
    assert_abs_diff_eq!(projected.ghg_rate, 5.3065, epsilon = 0.01);
    assert_eq!(projected.year, 2045);

    let k2 = unit_region("K2", Terrain::Mountains, 250.0, 2.0);
    let projected = project_condition(&k2, 10);
    assert_abs_diff_eq!(projected.pop, 407.22366, epsilon = 0.01);
    assert_abs_diff_eq!(projected.ghg_rate, 3.25779, epsilon = 0.01);
    assert_eq!(projected.year, 2035);
}

#[test]
fn forest_shrinks_slowly() {
    let amazon = unit_region("Amazon", Terrain::Forest, 4000.0, 0.0);
    let projected = project_condition(&amazon, 30);
    assert_abs_diff_eq!(projected.pop, 3881.7239, epsilon = 0.01);
    assert_eq!(projected.ghg_rate, 0.0);
    assert_eq!(projected.year, 2055);
}

#[test]
fn other_growth_for_cities() {
    let projected = project_condition(&nyc(), 5);
    assert_abs_diff_eq!(projected.pop, 8_605_935.3125, epsilon = 0.01);
    assert_abs_diff_eq!(projected.ghg_rate, 93_388_304.877, epsilon = 0.01);
    assert_eq!(projected.year, 2030);

    let projected = project_condition(&tokyo(), 7);
    assert_abs_diff_eq!(projected.pop, 37_784_028.0701, epsilon = 0.01);
    assert_abs_diff_eq!(projected.ghg_rate, 60_454_444.9121, epsilon = 0.01);
    assert_eq!(projected.year, 2032);
}

#[test]
fn explicit_terrain_overrides_region_terrain() {
    let amazon = unit_region("Amazon", Terrain::Forest, 4000.0, 0.0);
    let projected = project_condition_as(&amazon, Terrain::Mountains, 30);
    assert_abs_diff_eq!(projected.pop, 17_287.7695, epsilon = 0.01);
    assert_eq!(projected.region.terrain, Terrain::Forest);

    let congo = unit_region("Congo Basin", Terrain::Forest, 950.0, 7.0);
    let projected = project_condition_as(&congo, Terrain::Mountains, 16);
    assert_abs_diff_eq!(projected.pop, 2073.7309, epsilon = 0.01);
    assert_abs_diff_eq!(projected.ghg_rate, 15.280122, epsilon = 0.01);
    assert_eq!(projected.year, 2041);
}

#[test]
fn zero_years_is_identity() {
    for terrain in Terrain::ALL {
        let cond = unit_region("Same", terrain, 1234.5, 67.8);
        assert_eq!(project_condition(&cond, 0), cond);
    }
}

#[test]
fn negative_years_project_backwards() {
    let amazon = unit_region("Amazon", Terrain::Forest, 4000.0, 0.0);
    let past = project_condition(&amazon, -10);
    assert_abs_diff_eq!(past.pop, 4040.2209, epsilon = 0.01);
    assert_eq!(past.year, 2015);

    let round_trip = project_condition(&project_condition(&nyc(), 12), -12);
    assert_abs_diff_eq!(round_trip.pop, nyc().pop, epsilon = 0.01);
}

#[test]
fn growth_law_matches_terrain_rate() {
    let rates = [
        (Terrain::Ocean, 1.01),
        (Terrain::Mountains, 1.05),
        (Terrain::Forest, 0.999),
        (Terrain::Other, 1.003),
    ];
    for (terrain, factor) in rates {
        let cond = unit_region("Law", terrain, 1_000.0, 10.0);
        let projected = project_condition(&cond, 9);
        assert_abs_diff_eq!(projected.pop, 1_000.0 * f64::powf(factor, 9.0), epsilon = 1e-9);
        assert_abs_diff_eq!(projected.ghg_rate, 10.0 * f64::powf(factor, 9.0), epsilon = 1e-9);
    }
}

#[test]
fn unknown_terrain_label_uses_default_rate() {
    let cond = unit_region("Tundra", "tundra".parse().unwrap(), 1_000.0, 10.0);
    let projected = project_condition(&cond, 4);
    assert_abs_diff_eq!(projected.pop, 1_000.0 * 1.003_f64.powf(4.0), epsilon = 1e-9);
}

#[test]
fn projection_leaves_input_untouched() {
    let original = tokyo();
    let before = original.clone();
    let projected = project_condition(&original, 25);
    assert_eq!(original, before);
    assert_ne!(projected, original);
    assert_eq!(projected.region, original.region);
    assert_eq!(projected.year, original.year + 25);
}

#[test]
fn long_horizons_use_real_exponentiation() {
    let peak = unit_region("Peak", Terrain::Mountains, 1.0, 1.0);
    let projected = project_condition(&peak, 1000);
    assert_eq!(projected.pop.to_bits(), 1.05_f64.powf(1000.0).to_bits());
    assert_eq!(projected.ghg_rate.to_bits(), 1.05_f64.powf(1000.0).to_bits());
    assert_eq!(projected.year, 3025);
}

#[test]
fn extreme_years_saturate_instead_of_overflowing() {
    let city = unit_region("City", Terrain::Other, 1_000.0, 10.0);
    assert_eq!(project_condition(&city, i32::MAX).year, i32::MAX);
    assert_eq!(project_condition(&city, i32::MIN).year, i32::MIN);
}
