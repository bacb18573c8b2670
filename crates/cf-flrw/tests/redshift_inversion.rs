//! Forward/inverse round trips through the root finder.

use cf_core::units::{gyr, gyr_value, mpc_value};
use cf_flrw::{CosmologyOptions, FlrwCosmology, FlrwError, ZBracket};

fn no_radiation() -> CosmologyOptions {
    CosmologyOptions {
        tcmb0: 0.0,
        neff: 3.04,
    }
}

#[test]
fn age_roundtrips_across_models() {
    let models = [
        FlrwCosmology::flat_lambda_cdm(70.0, 0.3, &no_radiation()).unwrap(),
        FlrwCosmology::flat_lambda_cdm(67.66, 0.30966, &CosmologyOptions::default()).unwrap(),
        FlrwCosmology::flat_w_cdm(70.0, 0.3, -0.9, &no_radiation()).unwrap(),
        FlrwCosmology::w0wa_cdm(70.0, 0.3, 0.7, -0.9, 0.2, &no_radiation()).unwrap(),
        FlrwCosmology::lambda_cdm(70.0, 0.3, 0.6, &no_radiation()).unwrap(),
    ];
    for cosmo in &models {
        for z0 in [0.05, 0.5, 2.0, 8.0] {
            let target = cosmo.age(z0).unwrap();
            let z = cosmo.z_at_age(target, &ZBracket::default()).unwrap();
            assert!(
                (z - z0).abs() < 1e-6,
                "age inversion: z0 = {z0}, recovered {z}"
            );
        }
    }
}

#[test]
fn distance_roundtrips() {
    let cosmo = FlrwCosmology::flat_lambda_cdm(70.0, 0.3, &no_radiation()).unwrap();
    for z0 in [0.1, 1.0, 3.0, 20.0] {
        let dc = cosmo.comoving_distance(z0).unwrap();
        let z = cosmo
            .z_at_comoving_distance(dc, &ZBracket::default())
            .unwrap();
        assert!((z - z0).abs() < 1e-6, "D_C inversion at z0 = {z0} gave {z}");

        let dl = cosmo.luminosity_distance(z0).unwrap();
        let z = cosmo
            .z_at_luminosity_distance(dl, &ZBracket::default())
            .unwrap();
        assert!((z - z0).abs() < 1e-6, "D_L inversion at z0 = {z0} gave {z}");
    }
}

#[test]
fn lookback_roundtrip_through_quadrature_model() {
    let cosmo = FlrwCosmology::wpwa_cdm(70.0, 0.3, 0.7, -0.9, 0.2, 0.5, &no_radiation()).unwrap();
    let z0 = 1.3;
    let target = cosmo.lookback_time(z0).unwrap();
    let z = cosmo.z_at_lookback_time(target, &ZBracket::default()).unwrap();
    assert!((z - z0).abs() < 1e-6);
}

#[test]
fn target_outside_bracket_is_no_solution() {
    let cosmo = FlrwCosmology::flat_lambda_cdm(70.0, 0.3, &no_radiation()).unwrap();
    // Older than the universe ever gets
    let result = cosmo.z_at_age(gyr(20.0), &ZBracket::default());
    assert!(matches!(result, Err(FlrwError::NoSolution { .. })));

    // Distance beyond the bracket's reach
    let far = cf_core::units::mpc(1.0e6);
    let result = cosmo.z_at_comoving_distance(far, &ZBracket::default());
    assert!(matches!(result, Err(FlrwError::NoSolution { .. })));
}

#[test]
fn narrowed_bracket_still_converges() {
    let cosmo = FlrwCosmology::flat_lambda_cdm(70.0, 0.3, &no_radiation()).unwrap();
    let target = cosmo.age(0.5).unwrap();
    let bracket = ZBracket {
        zmin: 0.4,
        zmax: 0.6,
    };
    let z = cosmo.z_at_age(target, &bracket).unwrap();
    assert!((z - 0.5).abs() < 1e-8);
}

#[test]
fn inverse_agrees_with_forward_tables() {
    // Recover redshifts on a grid from tabulated forward values, the way a
    // survey pipeline would
    let cosmo = FlrwCosmology::flat_lambda_cdm(67.74, 0.3075, &CosmologyOptions::default()).unwrap();
    let grid: Vec<f64> = (1..=10).map(|i| 0.3 * i as f64).collect();
    for &z0 in &grid {
        let t = cosmo.lookback_time(z0).unwrap();
        let z = cosmo.z_at_lookback_time(t, &ZBracket::default()).unwrap();
        assert!((z - z0).abs() < 1e-6);
    }
    // Shape sanity on the same grid
    let ages: Vec<f64> = grid
        .iter()
        .map(|&z| gyr_value(cosmo.age(z).unwrap()))
        .collect();
    assert!(ages.windows(2).all(|w| w[1] < w[0]), "age must decrease");
    let dists: Vec<f64> = grid
        .iter()
        .map(|&z| mpc_value(cosmo.comoving_distance(z).unwrap()))
        .collect();
    assert!(dists.windows(2).all(|w| w[1] > w[0]), "D_C must increase");
}
