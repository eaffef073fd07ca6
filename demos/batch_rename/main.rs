use log::{error, info};
use portmap::core::persistence::DirStorage;
use portmap::{Language, Layout, NewEquipment, PortStore, StoreConfig, StoreError};
use std::env;

fn run() -> Result<(), StoreError> {
    let mut args = env::args().skip(1);
    let state_dir = args.next().unwrap_or_else(|| "portmap-state".to_string());
    let pattern = args.next().unwrap_or_else(|| "Gi{row}/0/{col}".to_string());

    let config = StoreConfig::new().with_default_language(Language::English);
    let mut store = PortStore::open(config, Box::new(DirStorage::open(&state_dir)?))?;

    let selected = store.selected_equipment().map(|equipment| equipment.id.clone());
    let id = match selected {
        Some(id) => id,
        None => store.add_equipment(
            NewEquipment::new("Switch-01", Layout::new(2, 12)?)
                .with_location("Server Room A Rack")
                .with_kind("Switch"),
        )?,
    };

    match store.apply_name_pattern(&id, &pattern) {
        Ok(count) => info!("Renamed {} ports", count),
        Err(StoreError::Pattern(err)) => {
            error!("{}", store.messages().describe_pattern_error(&err));
            return Ok(());
        }
        Err(err) => return Err(err),
    }

    if let Some(equipment) = store.equipment(&id) {
        let layout = equipment.layout();
        println!("{} ({}x{})", equipment.name, layout.rows(), layout.cols());
        for row in 0..layout.rows() {
            let line: Vec<&str> = equipment
                .ports()
                .iter()
                .filter(|port| port.row() == row)
                .map(|port| port.name.as_str())
                .collect();
            println!("  {}", line.join("  "));
        }
    }
    Ok(())
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    if let Err(err) = run() {
        error!("{}", err);
        std::process::exit(1);
    }
}
