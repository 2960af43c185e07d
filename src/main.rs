//! Terrain generator demo: one generation pass against a headless renderer.
//!
//! Usage: cargo run --release -- [OPTIONS]
//!
//! Options:
//!   --config <PATH>    Load a full TerrainConfig from JSON (other flags ignored)
//!   --size <CELLS>     Grid side length (default: 100)
//!   --height <SCALE>   Vertical scale (default: 10)
//!   --seed <SEED>      Noise seed (default: 12345)
//!   --variant <NAME>   perlin|fbm|warp|turbulence|ridge|random (default: fbm)
//!   --separate         Skip batching, one renderable per cell
//!   --collision        Also build collision copies

use terravox::core::logging;
use terravox::render::HeadlessRenderer;
use terravox::terrain::assembly::TerrainAssembly;
use terravox::terrain::config::{NoiseVariant, TerrainConfig};

fn main() {
    logging::init();

    let args: Vec<String> = std::env::args().collect();
    let config = match build_config(&args) {
        Ok(config) => config,
        Err(message) => {
            eprintln!("{}", message);
            std::process::exit(1);
        }
    };

    println!("=== Terravox Terrain Generator ===");
    println!("Grid:    {} x {} cells (y scale {})",
        config.grid.x_cells, config.grid.z_cells, config.grid.y_scale);
    println!("Noise:   {:?}, seed {}, {} octaves",
        config.noise.variant, config.noise.seed, config.noise.octaves);
    println!("Bands:   {}", config.bands.len());
    println!("Mode:    {}", if config.combine_meshes { "combined" } else { "per-cell" });
    println!();

    let mut assembly = TerrainAssembly::new(HeadlessRenderer::new());
    let (meshes, cubes, bounds) = match assembly.regenerate(&config) {
        Ok(instance) => (
            instance.renderable_count(),
            instance.cube_count(),
            instance.bounds(),
        ),
        Err(err) => {
            log::error!("Generation failed: {}", err);
            std::process::exit(1);
        }
    };

    println!("=== Generation Complete ===");
    println!("Meshes:   {}", meshes);
    println!("Cubes:    {}", cubes);
    println!("Vertices: {}", assembly.renderer().uploaded_vertices());
    println!("Bounds:   {:?} .. {:?} (center {:?})",
        bounds.min, bounds.max, bounds.center());
}

fn build_config(args: &[String]) -> Result<TerrainConfig, String> {
    if let Some(path) = parse_str_arg(args, "--config") {
        let text = std::fs::read_to_string(&path)
            .map_err(|err| format!("failed to read {}: {}", path, err))?;
        return serde_json::from_str(&text)
            .map_err(|err| format!("failed to parse {}: {}", path, err));
    }

    let mut config = TerrainConfig::default();
    if let Some(size) = parse_u32_arg(args, "--size") {
        config.grid.x_cells = size;
        config.grid.z_cells = size;
    }
    if let Some(height) = parse_u32_arg(args, "--height") {
        config.grid.y_scale = height;
    }
    if let Some(seed) = parse_u32_arg(args, "--seed") {
        config.noise.seed = seed;
    }
    if let Some(name) = parse_str_arg(args, "--variant") {
        config.noise.variant = parse_variant(&name)?;
    }
    if args.iter().any(|a| a == "--separate") {
        config.combine_meshes = false;
    }
    if args.iter().any(|a| a == "--collision") {
        config.generate_collision = true;
    }
    Ok(config)
}

fn parse_variant(name: &str) -> Result<NoiseVariant, String> {
    match name.to_ascii_lowercase().as_str() {
        "perlin" => Ok(NoiseVariant::Perlin),
        "fbm" => Ok(NoiseVariant::Fbm),
        "warp" => Ok(NoiseVariant::Warp),
        "turbulence" => Ok(NoiseVariant::Turbulence),
        "ridge" => Ok(NoiseVariant::Ridge),
        "random" => Ok(NoiseVariant::Random),
        other => Err(format!("unknown noise variant: {}", other)),
    }
}

fn parse_u32_arg(args: &[String], flag: &str) -> Option<u32> {
    args.iter().position(|a| a == flag)
        .and_then(|i| args.get(i + 1))
        .and_then(|s| s.parse().ok())
}

fn parse_str_arg(args: &[String], flag: &str) -> Option<String> {
    args.iter().position(|a| a == flag)
        .and_then(|i| args.get(i + 1))
        .map(|s| s.clone())
}
