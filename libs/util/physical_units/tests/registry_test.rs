// This file is part of Nitrogen.
//
// Nitrogen is free software: you can redistribute it and/or modify
// it under the terms of the GNU General Public License as published by
// the Free Software Foundation, either version 3 of the License, or
// (at your option) any later version.
//
// Nitrogen is distributed in the hope that it will be useful,
// but WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
// GNU General Public License for more details.
//
// You should have received a copy of the GNU General Public License
// along with Nitrogen.  If not, see <http://www.gnu.org/licenses/>.
use approx::assert_abs_diff_eq;
use physical_units::{
    ErrorKind, IdentifierKind, Registry, RegistryBuilder, UnitError, UnitItem,
};
use std::thread;

fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

// Meter and Foot over the same [0, 1000] span, converting both ways.
fn scenario_a() -> Result<Registry, UnitError> {
    let mut builder = RegistryBuilder::new();
    let length = builder.declare_quantity(UnitItem::new("Length", "L", "L", "distance"))?;
    builder.declare_unit(UnitItem::new("Meter", "m", "m", "meters"), length, 0., 1000.)?;
    builder.declare_unit(UnitItem::new("Foot", "ft", "ft", "feet"), length, 0., 1000.)?;
    builder.declare_conversion("Meter", "Foot", |v| v * 3.28084)?;
    builder.declare_conversion("Foot", "Meter", |v| v / 3.28084)?;
    Ok(builder.build())
}

#[test]
fn test_meter_foot_round_trip() -> Result<(), UnitError> {
    init_logging();
    let r = scenario_a()?;
    let ft = r.convert_name_to_name("Meter", 10., "Foot")?;
    assert_abs_diff_eq!(ft, 32.8084, epsilon = 1e-9);
    let m = r.convert_name_to_name("Foot", 32.8084, "Meter")?;
    assert_abs_diff_eq!(m, 10., epsilon = 1e-9);

    let meter = r.unit_by_name("Meter").expect("meter");
    let foot = r.unit_by_name("Foot").expect("foot");
    let tolerance = meter.epsilon() + foot.epsilon();
    for v in [0., 1., 250., 999.] {
        let there = r.convert(meter, v, foot)?;
        assert_abs_diff_eq!(r.convert(foot, there, meter)?, v, epsilon = tolerance);
    }
    Ok(())
}

#[test]
fn test_lookup_by_case_folded_symbol() -> Result<(), UnitError> {
    init_logging();
    let r = physical_units::initialize()?;
    let amp = r.lookup_unit("Amp").expect("amp");
    assert_eq!(amp.name(), "Ampere");
    assert_eq!(amp.symbol(), "amp");
    assert!(r.lookup_unit("nonexistent").is_none());
    Ok(())
}

#[test]
fn test_audit_reports_missing_pairs() -> Result<(), UnitError> {
    init_logging();
    let mut builder = RegistryBuilder::new();
    let q = builder.declare_quantity(UnitItem::new("Length", "L", "L", "distance"))?;
    builder.declare_unit(UnitItem::new("Meter", "m", "m", "meters"), q, 0., 1000.)?;
    builder.declare_unit(UnitItem::new("Foot", "ft", "ft", "feet"), q, 0., 3280.84)?;
    builder.declare_unit(UnitItem::new("Yard", "yd", "yd", "yards"), q, 0., 1093.61)?;
    builder.declare_conversion("m", "ft", |v| v * 3.28084)?;
    builder.declare_conversion("ft", "m", |v| v / 3.28084)?;
    builder.declare_conversion("ft", "yd", |v| v / 3.)?;
    builder.declare_conversion("yd", "ft", |v| v * 3.)?;
    let r = builder.build();

    let audit = r.audit_missing_conversions(r.search_quantity("Length").expect("length"));
    assert!(!audit.complete);
    assert_eq!(
        audit.missing,
        vec![
            "Missing conversion from Meter(m) to Yard(yd)".to_owned(),
            "Missing conversion from Yard(yd) to Meter(m)".to_owned(),
        ]
    );
    Ok(())
}

#[test]
fn test_duplicates_leave_catalog_unchanged() -> Result<(), UnitError> {
    let mut builder = RegistryBuilder::new();
    let q = builder.declare_quantity(UnitItem::new("Length", "L", "L", "distance"))?;
    builder.declare_unit(UnitItem::new("Meter", "m", "m", "meters"), q, 0., 1000.)?;
    let names_before = builder.registry().unit_names();
    let symbols_before = builder.registry().unit_symbols();
    let names_before = names_before.iter().map(|s| s.to_string()).collect::<Vec<_>>();
    let symbols_before = symbols_before.iter().map(|s| s.to_string()).collect::<Vec<_>>();

    let err = builder
        .declare_unit(UnitItem::new("Meter", "mm", "mm", "x"), q, 0., 1.)
        .unwrap_err();
    assert_eq!(err.kind(), ErrorKind::DuplicateName);
    let err = builder
        .declare_unit(UnitItem::new("Millimeter", "m", "m", "x"), q, 0., 1.)
        .unwrap_err();
    assert_eq!(err.kind(), ErrorKind::DuplicateSymbol);
    let err = builder
        .declare_quantity(UnitItem::new("Length", "D", "D", "again"))
        .unwrap_err();
    assert_eq!(err.kind(), ErrorKind::DuplicateName);

    let r = builder.build();
    assert_eq!(r.unit_names(), names_before);
    assert_eq!(r.unit_symbols(), symbols_before);
    assert!(r.lookup_unit("Millimeter").is_none());
    assert!(r.lookup_unit("mm").is_none());
    assert_eq!(r.quantities().len(), 1);
    Ok(())
}

#[test]
fn test_lookup_kinds() -> Result<(), UnitError> {
    let r = scenario_a()?;
    let f = r.lookup_conversion(IdentifierKind::Symbol, "m", IdentifierKind::Name, "Foot")?;
    assert_abs_diff_eq!(f(1.), 3.28084);
    assert!(r
        .lookup_conversion(IdentifierKind::Name, "m", IdentifierKind::Name, "Foot")
        .is_err());
    Ok(())
}

#[test]
fn test_initialize_is_idempotent() -> Result<(), UnitError> {
    let a = physical_units::initialize()?;
    let b = physical_units::initialize()?;
    assert!(std::ptr::eq(a, b));
    assert!(std::ptr::eq(physical_units::registry().expect("initialized"), a));
    Ok(())
}

#[test]
fn test_builtin_catalog_audits_complete() -> Result<(), UnitError> {
    let r = physical_units::initialize()?;
    for q in r.quantities() {
        let audit = r.audit_missing_conversions(q);
        assert!(audit.complete, "{} is missing {:?}", q.name(), audit.missing);
    }
    Ok(())
}

#[test]
fn test_concurrent_reads_after_freeze() -> Result<(), UnitError> {
    physical_units::initialize()?;
    let workers = (0..8)
        .map(|i| {
            thread::spawn(move || -> Result<f64, UnitError> {
                let r = physical_units::registry().expect("initialized before spawning");
                let mut total = 0.;
                for step in 0..1000 {
                    let c = (i * 10 + step % 50) as f64;
                    let f = r.convert_symbol_to_symbol("degC", c, "degF")?;
                    total += r.convert_name_to_name("Fahrenheit", f, "Celsius")? - c;
                    assert!(r.lookup_unit("psia").is_some());
                }
                Ok(total)
            })
        })
        .collect::<Vec<_>>();
    for worker in workers {
        let drift = worker.join().expect("worker panicked")?;
        assert_abs_diff_eq!(drift, 0., epsilon = 1e-6);
    }
    Ok(())
}
