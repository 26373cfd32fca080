//! Nominal scenarios for the three calculators.

use tc_cycles::{
    CycleModel, CycleParameters, CycleResult, CycleType, DieselParameters, OttoParameters,
    RankineParameters, calculate_diesel_cycle, calculate_otto_cycle, calculate_rankine_cycle,
};

const TOL: f64 = 1e-6;

#[test]
fn otto_nominal() {
    let params = OttoParameters {
        initial_pressure: 0.1,
        initial_temperature: 25.0,
        compression_ratio: 8.0,
        heat_input: 1800.0,
    };
    let r = calculate_otto_cycle(&params);

    assert!((r.efficiency - (1.0 - 8.0_f64.powf(-0.4))).abs() < TOL);
    assert!((r.efficiency - 0.5647).abs() < 1e-4);
    assert!((r.ts_data[1].y - 298.15 * 8.0_f64.powf(0.4)).abs() < TOL);

    assert!(r.work_output > 0.0);
    assert!(r.heat_input > 0.0);
    assert!(r.heat_rejected > 0.0);
    assert!(r.efficiency > 0.0 && r.efficiency < 1.0);
    assert_eq!(r.steam_quality, 0.0);
}

#[test]
fn diesel_nominal() {
    let params = DieselParameters {
        initial_pressure: 0.1,
        initial_temperature: 25.0,
        compression_ratio: 16.0,
        cutoff_ratio: 2.0,
        heat_input: 1800.0,
    };
    let r = calculate_diesel_cycle(&params);

    let t2 = 298.15 * 16.0_f64.powf(0.4);
    assert!((r.ts_data[1].y - t2).abs() < TOL);
    assert!((r.ts_data[2].y - 2.0 * t2).abs() < TOL);
    assert!((r.max_temperature - 2.0 * t2).abs() < TOL);

    let expected = 1.0 - 16.0_f64.powf(-0.4) * ((2.0_f64.powf(1.4) - 1.0) / (1.4 * 1.0));
    assert!((r.efficiency - expected).abs() < TOL);

    // constant-pressure heat input uses cp
    assert!((r.heat_input - 1.005 * t2).abs() < TOL);
    assert!(r.heat_rejected > 0.0);

    // expansion raises T4 above T3 at these inputs, so the energy balance
    // goes negative while the textbook efficiency stays positive
    let t4 = 2.0 * t2 * (2.0_f64 / 16.0).powf(1.0 - 1.4);
    assert!((r.ts_data[3].y - t4).abs() < 1e-6);
    assert!(r.work_output < 0.0);
    assert!((r.work_output - (r.heat_input - r.heat_rejected)).abs() < TOL);
    assert!((r.work_output - -1859.4).abs() < 0.5);
}

#[test]
fn rankine_nominal() {
    let params = RankineParameters {
        boiler_pressure: 8.0,
        boiler_temperature: 500.0,
        condenser_pressure: 0.008,
        pump_efficiency: 0.85,
        turbine_efficiency: 0.87,
    };
    let r = calculate_rankine_cycle(&params);

    let pump_work: f64 = 0.001 * (8.0 - 0.008) * 1000.0 / 0.85;
    assert!((pump_work - 9.4024).abs() < 1e-4);
    let h2 = 200.0 + pump_work;
    assert!((h2 - 209.41).abs() < 1e-2);

    let h4s = 200.0 + (3400.0 - 200.0) * (1.0 - 0.8);
    let h4 = 3400.0 - 0.87 * (3400.0 - h4s);

    assert!((r.max_temperature - 773.15).abs() < TOL);
    assert!((r.efficiency - (3400.0 - h4 - pump_work) / (3400.0 - h2)).abs() < TOL);
    assert!((r.work_output - (3400.0 - h4 - pump_work)).abs() < TOL);
    assert_eq!(r.steam_quality, 0.85);
}

#[test]
fn every_cycle_produces_closed_five_point_loops() {
    for cycle in CycleType::ALL {
        let r = CycleParameters::default_for(cycle).evaluate();
        assert_eq!(r.pv_data.len(), 5, "{cycle}");
        assert_eq!(r.ts_data.len(), 5, "{cycle}");
        assert_eq!(r.pv_data[0], r.pv_data[4], "{cycle}");
        assert_eq!(r.ts_data[0], r.ts_data[4], "{cycle}");
        assert!(r.is_closed());
        assert!(r.all_finite());
    }
}

#[test]
fn faults_return_the_zeroed_result() {
    let bad_otto = OttoParameters {
        compression_ratio: -2.0,
        ..OttoParameters::default()
    };
    let bad_diesel = DieselParameters {
        compression_ratio: 0.0,
        ..DieselParameters::default()
    };
    let bad_rankine = RankineParameters {
        boiler_temperature: f64::NAN,
        ..RankineParameters::default()
    };

    let zero_otto = calculate_otto_cycle(&bad_otto);
    assert_eq!(zero_otto, CycleResult::zeroed());
    assert!(zero_otto.pv_data.is_empty() && zero_otto.ts_data.is_empty());
    assert_eq!(zero_otto.efficiency, 0.0);

    assert_eq!(
        calculate_diesel_cycle(&bad_diesel),
        CycleResult::zeroed()
    );
    assert_eq!(
        calculate_rankine_cycle(&bad_rankine),
        CycleResult::zeroed()
    );
}

#[test]
fn compute_exposes_the_fault() {
    let bad = OttoParameters {
        compression_ratio: 0.0,
        ..OttoParameters::default()
    };
    assert!(bad.compute().is_err());
}

#[test]
fn calculators_are_safe_to_run_concurrently() {
    let handles: Vec<_> = CycleType::ALL
        .into_iter()
        .map(|cycle| std::thread::spawn(move || CycleParameters::default_for(cycle).evaluate()))
        .collect();

    for (cycle, handle) in CycleType::ALL.into_iter().zip(handles) {
        let threaded = handle.join().expect("calculator thread panicked");
        assert_eq!(threaded, CycleParameters::default_for(cycle).evaluate());
    }
}
