use anyhow::Result;
use energykit::{ConstructionSetCatalog, Folders};

fn main() -> Result<()> {
    let folders = Folders::discover();
    println!("install:    {}", folders.install_folder.display());
    match &folders.engine_path {
        Some(path) => println!("engine:     {}", path.display()),
        None => println!("engine:     (not found)"),
    }
    println!("data:       {}", folders.data_folder.display());
    println!("simulation: {}", folders.simulation_folder.display());

    // Remaining arguments are search keywords over the built-in catalog.
    let keywords: Vec<String> = std::env::args().skip(1).collect();
    let catalog = ConstructionSetCatalog::builtin();
    let hits = catalog.search(&keywords, true);
    println!(
        "\n{} of {} construction sets match:",
        hits.len(),
        catalog.len()
    );
    for hit in hits {
        println!("  {hit}");
    }
    Ok(())
}
