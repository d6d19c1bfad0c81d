use islandsim_lib::app::settings::{load_config, parse_population, validate};
use islandsim_lib::app::{AppError, PauseSignal, SimulationRunner};
use islandsim_lib::model::state::Species;
use std::fs;

const ISLAND_TOML: &str = r#"
[island]
rounds = 6
seed = 2024

[population]
eucalyptus = 5
mango_tree = 5
elderberry = 5
grass = 20
rabbit = 8
koala = 3
fox = 2
leopard = 1

[run]
speed = "instant"
mode = "step"
format = "json"
"#;

async fn run_to_string(path: &std::path::Path) -> String {
    let config = load_config(path).unwrap();
    validate(&config).unwrap();
    let mut runner = SimulationRunner::new(config, PauseSignal::new(), Vec::new()).unwrap();
    runner.run().await.unwrap();
    String::from_utf8(runner.into_output()).unwrap()
}

#[tokio::test]
async fn test_config_file_drives_json_run() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("island.toml");
    fs::write(&path, ISLAND_TOML).unwrap();

    let out = run_to_string(&path).await;
    let lines: Vec<serde_json::Value> = out
        .lines()
        .map(|line| serde_json::from_str(line).unwrap())
        .collect();

    let finished = lines.last().unwrap();
    assert_eq!(finished["event"], "finished");
    let days = finished["days"].as_u64().unwrap() as usize;
    assert_eq!(lines.len(), days + 1);

    for (i, day) in lines[..days].iter().enumerate() {
        assert_eq!(day["event"], "day");
        assert_eq!(day["day"].as_u64().unwrap() as usize, i + 1);
        let temperature = day["temperature"].as_i64().unwrap();
        assert!((22..40).contains(&temperature));
        // Every species is listed, even at zero.
        assert_eq!(day["species_counts"].as_object().unwrap().len(), 8);
    }
}

#[tokio::test]
async fn test_same_seed_same_report() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("island.toml");
    fs::write(&path, ISLAND_TOML).unwrap();

    let first = run_to_string(&path).await;
    let second = run_to_string(&path).await;
    assert_eq!(first, second);
}

#[tokio::test]
async fn test_text_report_names_every_species() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("island.toml");
    fs::write(&path, ISLAND_TOML.replace("format = \"json\"", "format = \"text\"")).unwrap();

    let out = run_to_string(&path).await;
    assert!(out.starts_with("Day 1:\nWeather = "));
    for name in ["Eucalyptus", "Mango", "Elderberry", "Grass", "Rabbit", "Koala", "Fox", "Leopard"] {
        assert!(out.contains(&format!("{name}=")), "missing {name}");
    }
    assert!(out.contains("Simulation complete after "));
    assert!(out.contains("Final result: "));
}

#[test]
fn test_population_override_and_bounds() {
    let dir = tempfile::tempdir().unwrap();
    let mut config = load_config(&dir.path().join("missing.toml")).unwrap();

    let (species, count) = parse_population("mango-tree=12").unwrap();
    assert_eq!(species, Species::MangoTree);
    config.population.set(species, count);
    assert!(validate(&config).is_ok());
    assert_eq!(config.population.count(Species::MangoTree), 12);

    let (species, count) = parse_population("leopard=51").unwrap();
    config.population.set(species, count);
    assert!(matches!(validate(&config), Err(AppError::Validation(_))));

    assert!(matches!(parse_population("dragon=1"), Err(AppError::Config(_))));
    assert!(matches!(parse_population("fox"), Err(AppError::Config(_))));
}

#[test]
fn test_small_island_rejected() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("island.toml");
    fs::write(&path, "[island]\ncapacity = 500.0\n").unwrap();
    let config = load_config(&path).unwrap();
    let err = validate(&config).unwrap_err();
    assert!(err.to_string().contains("capacity"));
}
