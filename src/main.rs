use bevy::prelude::*;

use gridsight::spatial::direction::vec_to_dir8;
use gridsight::spatial::grid::SparseGrid2D;
use gridsight::spatial::pathfinding::find_path_in;
use gridsight::spatial::{SpatialConfig, SpatialConfigPlugin};

use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use std::fs;
use std::path::PathBuf;

/// Built-in demo map. `#` blocks, `@` is the viewer, `X` the path target.
const DEMO_MAP: &[&str] = &[
    "####################",
    "#@.....#...........#",
    "#......#...####....#",
    "#..##..#......#....#",
    "#..##.........#....#",
    "#......#####..#....#",
    "#......#...........#",
    "#......#....##.....#",
    "#..........#.....X.#",
    "####################",
];

fn setup_file_logging() -> String {
    // Create logs directory if it doesn't exist
    let log_dir = PathBuf::from("logs");
    if !log_dir.exists() {
        fs::create_dir_all(&log_dir).expect("Failed to create logs directory");
    }

    // Keep only the last 25 runs
    cleanup_old_logs(&log_dir, 25);

    let now = chrono::Local::now();
    let log_filename = format!("gridsight_{}.log", now.format("%Y%m%d_%H%M%S"));
    let log_path_str = log_dir.join(&log_filename).to_string_lossy().to_string();

    let file_appender = RollingFileAppender::new(Rotation::NEVER, &log_dir, &log_filename);

    let file_layer = fmt::layer()
        .with_writer(file_appender)
        .with_ansi(false);

    let stdout_layer = fmt::layer()
        .compact()
        .with_writer(std::io::stdout)
        .with_target(false);

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("gridsight=info"));

    tracing_subscriber::registry()
        .with(filter)
        .with(file_layer)
        .with(stdout_layer)
        .init();

    log_path_str
}

fn cleanup_old_logs(log_dir: &PathBuf, keep_count: usize) {
    if let Ok(entries) = fs::read_dir(log_dir) {
        let mut log_files: Vec<_> = entries
            .filter_map(|e| e.ok())
            .filter(|e| {
                e.path()
                    .file_name()
                    .and_then(|n| n.to_str())
                    .map(|s| s.starts_with("gridsight") && s.ends_with(".log"))
                    .unwrap_or(false)
            })
            .collect();

        // Oldest first
        log_files.sort_by_key(|e| e.metadata().ok().and_then(|m| m.modified().ok()));

        if log_files.len() > keep_count {
            for file in log_files.iter().take(log_files.len() - keep_count) {
                let _ = fs::remove_file(file.path());
            }
        }
    }
}

/// Parsed demo map. Row 0 of the text is the top, so y grows upward.
struct DemoMap {
    walls: SparseGrid2D<bool>,
    viewer: IVec2,
    target: IVec2,
}

fn parse_map(lines: &[&str]) -> DemoMap {
    let mut walls = SparseGrid2D::new(false);
    let mut viewer = IVec2::ZERO;
    let mut target = IVec2::ZERO;
    let top = lines.len() as i32 - 1;

    for (row, line) in lines.iter().enumerate() {
        let y = top - row as i32;
        for (col, ch) in line.chars().enumerate() {
            let pos = IVec2::new(col as i32, y);
            match ch {
                '#' => {
                    walls.set(pos.x, pos.y, true);
                }
                '@' => viewer = pos,
                'X' => target = pos,
                _ => {}
            }
        }
    }

    DemoMap { walls, viewer, target }
}

fn run_demo(config: Res<SpatialConfig>) {
    let map = parse_map(DEMO_MAP);
    info!(
        "[DEMO] Map loaded: {} wall cells in {} rows, viewer {:?}, target {:?}",
        map.walls.len(),
        map.walls.row_count(),
        map.viewer,
        map.target
    );

    let is_wall = |p: IVec2| *map.walls.get(p.x, p.y);

    let mut fov = config.visibility_map();
    fov.recompute(map.viewer, config.fov_shape, is_wall);
    info!(
        "[VISIBILITY] {} cells visible from {:?} (radius {}, {:?})",
        fov.count(),
        map.viewer,
        config.fov_radius,
        config.fov_shape
    );

    let mut graph = config.grid_graph(is_wall);
    let path = find_path_in(&mut graph, map.viewer, map.target, config.pathfinding_max_iterations);

    match &path {
        Some(path) => {
            info!(
                "[PATHFINDING] {} steps, cost {}",
                path.len().saturating_sub(1),
                path.total_cost()
            );
            let facings: Vec<usize> = path
                .positions()
                .windows(2)
                .map(|w| vec_to_dir8(w[1] - w[0]))
                .collect();
            debug!("[PATHFINDING] Facings along path: {:?}", facings);
        }
        None => warn!("[PATHFINDING] No path from {:?} to {:?}", map.viewer, map.target),
    }

    let on_path = |p: IVec2| path.as_ref().is_some_and(|path| path.positions().contains(&p));
    let top = DEMO_MAP.len() as i32 - 1;
    for (row, line) in DEMO_MAP.iter().enumerate() {
        let y = top - row as i32;
        let rendered: String = line
            .chars()
            .enumerate()
            .map(|(col, ch)| {
                let pos = IVec2::new(col as i32, y);
                match ch {
                    '@' | 'X' => ch,
                    _ if on_path(pos) => '*',
                    _ if !fov.is_visible_world(pos) => ' ',
                    _ => ch,
                }
            })
            .collect();
        info!("[DEMO] {}", rendered);
    }
}

fn main() {
    let log_file = setup_file_logging();
    println!("gridsight demo - logging to {}", log_file);

    App::new()
        .add_plugins(SpatialConfigPlugin::default())
        .add_systems(PostStartup, run_demo)
        .run();
}
