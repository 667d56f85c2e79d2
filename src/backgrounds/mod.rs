// Background image rendering for grid slide states
//
// This module renders the PNG backgrounds that the reveal.js theme attaches
// to each `data-state` value written by the annotator. Every image is a dark
// 1920x1080 canvas with faint white grid lines.
//
// # Outputs
//
// | File | Spacing | Opacity |
// |------|---------|---------|
// | grid_dense.png | 25 | 18 |
// | grid_fine.png | 40 | 15 |
// | grid_medium.png | 60 | 10 |
// | grid_coarse.png | 80 | 5 |
// | grid_sparse.png | 100 | 8 |
// | grid_none.png | - | - |
// | grid_diagonal.png | 70 | 8 |
// | grid_random.png | 50 | 5-19 |
//
// The annotator never calls into this module; it only relies on the file
// names matching `GridPattern::background_file_name`.
pub mod config;
pub mod generator;
pub mod render;

pub use config::{GridConfig, HEIGHT, OUTPUT_DIR, WIDTH};
pub use generator::{CanvasSize, generate_backgrounds, generate_backgrounds_sized};
pub use render::{render_diagonal_grid, render_grid, render_random_opacity_grid};
