use log::info;
use mosaic_index::kdtree::{Element, KDTreeBuilder, KDTreeIndex, SquaredEuclidean};
use mosaic_index::{Rgb, Result};

/// A few named swatches standing in for a library of tile images.
const SWATCHES: [(&str, [u8; 3]); 8] = [
    ("black", [0, 0, 0]),
    ("white", [255, 255, 255]),
    ("red", [220, 20, 60]),
    ("green", [34, 139, 34]),
    ("blue", [30, 144, 255]),
    ("orange", [255, 140, 0]),
    ("purple", [128, 0, 128]),
    ("grey", [128, 128, 128]),
];

fn main() -> Result<()> {
    env_logger::init();

    let mut builder = KDTreeBuilder::with_capacity(SquaredEuclidean::new(), SWATCHES.len())
        .allow_empty(false);
    builder.extend(
        SWATCHES
            .iter()
            .map(|(name, rgb)| Element::new(Rgb::from(*rgb), *name)),
    );
    let tree = builder.finish()?;

    // Representative colours of a 2x3 grid of output cells
    let cells = [
        Rgb::new(204, 85, 0),
        Rgb::new(10, 10, 40),
        Rgb::new(240, 240, 230),
        Rgb::new(100, 110, 120),
        Rgb::new(60, 160, 60),
        Rgb::new(150, 20, 140),
    ];

    for (cell, tile) in cells.iter().zip(tree.nearest_neighbors(&cells)?) {
        info!("cell {:?} -> {}", cell.coords(), tile.payload);
        println!("{:?} -> {}", cell.coords(), tile.payload);
    }

    Ok(())
}
