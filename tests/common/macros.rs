/// Asserts the flora and fauna head counts of an ecosystem.
#[macro_export]
macro_rules! assert_population {
    ($eco:expr, $flora:expr, $fauna:expr) => {
        assert_eq!(
            ($eco.flora.len(), $eco.fauna.len()),
            ($flora, $fauna),
            "Population (flora, fauna) mismatch"
        );
    };
}

/// Asserts that an organism is alive according to its own liveness rule.
#[macro_export]
macro_rules! assert_alive {
    ($organism:expr) => {{
        use islandsim_lib::model::Lifeform;
        assert!(
            $organism.is_alive(),
            "{} {} should be alive",
            $organism.species,
            $organism.id
        );
    }};
}

/// Asserts that an organism is no longer alive.
#[macro_export]
macro_rules! assert_dead {
    ($organism:expr) => {{
        use islandsim_lib::model::Lifeform;
        assert!(
            !$organism.is_alive(),
            "{} {} should be dead but is alive",
            $organism.species,
            $organism.id
        );
    }};
}

/// Asserts two floats are within `1e-9` of each other.
#[macro_export]
macro_rules! assert_approx {
    ($left:expr, $right:expr) => {
        let (l, r): (f64, f64) = ($left, $right);
        assert!((l - r).abs() < 1e-9, "{} is not approximately {}", l, r);
    };
}
