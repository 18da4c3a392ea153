use macroquad::prelude::*;

use crate::application::{FlyCamera, GameState, Simulation};
use crate::domain::CellState;
use crate::ui::{Button, PANEL_WIDTH, panel_x};

/// Anything that can draw a unit cube with a transform and a color.
/// The simulation only ever talks to the screen through this.
pub trait CubeRenderer {
    /// Solid cube centered at `center`, uniformly scaled
    fn draw_cube(&mut self, center: Vec3, scale: f32, color: Color);

    /// Wireframe box centered at `center`
    fn draw_cube_outline(&mut self, center: Vec3, size: Vec3, color: Color);
}

/// Draws straight to the current macroquad camera
pub struct MacroquadRenderer;

impl CubeRenderer for MacroquadRenderer {
    fn draw_cube(&mut self, center: Vec3, scale: f32, color: Color) {
        draw_cube(center, Vec3::splat(scale), None, color);
    }

    fn draw_cube_outline(&mut self, center: Vec3, size: Vec3, color: Color) {
        draw_cube_wires(center, size, color);
    }
}

/// Slight shrink so neighboring cubes keep a visible seam
pub const CELL_SCALE: f32 = 0.997;

pub const OUTLINE_COLOR: Color = Color::new(0.1, 0.1, 0.1, 1.0);
pub const BORDER_COLOR: Color = Color::new(0.0, 1.0, 0.0, 1.0);
pub const BACKGROUND_COLOR: Color = Color::new(0.1, 0.1, 0.1, 1.0);

/// Fill color by age: embers at 1 up to bright amber at 4
pub fn state_color(state: CellState) -> Option<Color> {
    match state.value() {
        1 => Some(Color::new(0.589, 0.082, 0.0, 1.0)),
        2 => Some(Color::new(1.0, 0.501, 0.0, 1.0)),
        3 => Some(Color::new(1.0, 0.647, 0.0, 1.0)),
        4 => Some(Color::new(1.0, 0.749, 0.0, 1.0)),
        _ => None,
    }
}

/// Issue one cube (plus outline) per live cell. Returns the number of cells drawn.
pub fn draw_simulation(sim: &Simulation, renderer: &mut impl CubeRenderer) -> usize {
    let mut drawn = 0;
    for (x, y, z, state) in sim.live_cells() {
        let Some(color) = state_color(state) else {
            continue;
        };
        let center = vec3(x as f32, y as f32, z as f32);
        renderer.draw_cube(center, CELL_SCALE, color);
        renderer.draw_cube_outline(center, Vec3::splat(CELL_SCALE), OUTLINE_COLOR);
        drawn += 1;
    }
    drawn
}

/// Wireframe enclosing the interior 1..=edge on every axis
pub fn draw_border(edge: usize, renderer: &mut impl CubeRenderer) {
    let mid = (edge as f32 + 1.0) / 2.0;
    renderer.draw_cube_outline(Vec3::splat(mid), Vec3::splat(edge as f32), BORDER_COLOR);
}

/// Render the lattice from the fly camera, then return to screen space
pub fn draw_scene(state: &GameState, camera: &FlyCamera) {
    set_camera(&camera.to_camera3d());
    let mut renderer = MacroquadRenderer;
    draw_border(state.simulation.edge(), &mut renderer);
    draw_simulation(&state.simulation, &mut renderer);
    set_default_camera();
}

/// Format large numbers with K/M suffixes
fn format_number(n: usize) -> String {
    if n >= 1_000_000 {
        format!("{:.1}M", n as f64 / 1_000_000.0)
    } else if n >= 1_000 {
        format!("{:.1}K", n as f64 / 1_000.0)
    } else {
        format!("{}", n)
    }
}

/// Green under budget, yellow, orange, then red
fn timing_color(ms: f32, budget_ms: f32) -> Color {
    if ms < budget_ms {
        Color::from_rgba(0, 255, 0, 255)
    } else if ms < budget_ms * 4.0 {
        Color::from_rgba(255, 255, 0, 255)
    } else if ms < budget_ms * 10.0 {
        Color::from_rgba(255, 165, 0, 255)
    } else {
        Color::from_rgba(255, 0, 0, 255)
    }
}

/// Draw the side panel: buttons, controls help and live statistics
pub fn draw_controls(state: &GameState, camera: &FlyCamera, buttons: &[Button], mouse_pos: (f32, f32)) {
    let px = panel_x();
    draw_rectangle(px, 0.0, PANEL_WIDTH, screen_height(), Color::from_rgba(30, 30, 30, 220));

    buttons.iter().for_each(|btn| btn.draw(mouse_pos));

    let sim = &state.simulation;
    let edge = sim.edge();
    let dim_gray = Color::from_rgba(150, 150, 150, 255);

    let help = [
        ("Controls:", 14.0, WHITE),
        ("Enter/Space: Play", 12.0, GRAY),
        ("N: Step  R: Reset", 12.0, GRAY),
        ("Tab: Next rule  X: Random", 12.0, GRAY),
        ("T: Next seed  P: Threads", 12.0, GRAY),
        ("WASD/QE: Fly", 12.0, GRAY),
        ("RMB drag: Look", 12.0, GRAY),
        ("Wheel: Zoom  H: Home", 12.0, GRAY),
    ];
    help.iter().enumerate().for_each(|(i, (text, size, color))| {
        draw_text(text, px, 400.0 + i as f32 * 14.0, *size, *color);
    });

    let tick_ms = state.last_tick_time_ms;
    let render_ms = state.last_render_time_ms;
    let stats = [
        (format!("Rule: {}", sim.rule().name()), 14.0, WHITE),
        (format!("Seed: {}", sim.seed().name()), 12.0, dim_gray),
        (sim.rule().description().to_owned(), 12.0, dim_gray),
        (format!("Grid: {0}x{0}x{0}", edge), 12.0, dim_gray),
        (format!("Cells: {}", format_number(edge * edge * edge)), 12.0, dim_gray),
        (format!("Tick: {:.2}ms ({})", tick_ms, sim.algorithm().name()), 13.0, timing_color(tick_ms, 5.0)),
        (format!("Render: {:.1}ms", render_ms), 13.0, timing_color(render_ms, 5.0)),
        (format!("FPS: {}", get_fps()), 12.0, GRAY),
        (format!("Interval: {:.2}s", state.tick_interval), 14.0, WHITE),
        (format!("Generation: {}", sim.generation()), 16.0, WHITE),
        (format!("Alive: {}", format_number(sim.population())), 16.0, Color::from_rgba(255, 191, 0, 255)),
        (format!("FOV: {:.0}", camera.fov), 12.0, GRAY),
    ];
    stats.iter().enumerate().for_each(|(i, (text, size, color))| {
        draw_text(text, px, 530.0 + i as f32 * 18.0, *size, *color);
    });

    let (status, color) = if state.is_running {
        ("Running", Color::from_rgba(0, 255, 0, 255))
    } else {
        ("Paused", Color::from_rgba(255, 165, 0, 255))
    };
    draw_text(status, px, 530.0 + stats.len() as f32 * 18.0 + 10.0, 18.0, color);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::SimulationConfig;
    use crate::domain::Seed;

    /// Records draw calls instead of touching a window
    #[derive(Default)]
    struct Recorder {
        cubes: Vec<(Vec3, f32, Color)>,
        outlines: Vec<(Vec3, Vec3, Color)>,
    }

    impl CubeRenderer for Recorder {
        fn draw_cube(&mut self, center: Vec3, scale: f32, color: Color) {
            self.cubes.push((center, scale, color));
        }

        fn draw_cube_outline(&mut self, center: Vec3, size: Vec3, color: Color) {
            self.outlines.push((center, size, color));
        }
    }

    #[test]
    fn test_one_cube_per_live_cell() {
        let sim = Simulation::new(&SimulationConfig::default()).unwrap();
        let mut recorder = Recorder::default();

        let drawn = draw_simulation(&sim, &mut recorder);

        assert_eq!(drawn, 27);
        assert_eq!(recorder.cubes.len(), 27);
        assert_eq!(recorder.outlines.len(), 27);
        assert_eq!(recorder.cubes[0], (vec3(24.0, 24.0, 24.0), CELL_SCALE, state_color(CellState::new(4)).unwrap()));
    }

    #[test]
    fn test_cube_color_follows_state() {
        let config = SimulationConfig::default()
            .with_grid_size(4)
            .with_seed(Seed::Cells(vec![(1, 1, 1, 1), (2, 1, 1, 3)]));
        let sim = Simulation::new(&config).unwrap();
        let mut recorder = Recorder::default();

        draw_simulation(&sim, &mut recorder);

        let colors: Vec<Color> = recorder.cubes.iter().map(|c| c.2).collect();
        assert_eq!(colors, vec![Color::new(0.589, 0.082, 0.0, 1.0), Color::new(1.0, 0.647, 0.0, 1.0)]);
    }

    #[test]
    fn test_empty_state_has_no_color() {
        assert_eq!(state_color(CellState::EMPTY), None);
        for v in 1..=4 {
            assert!(state_color(CellState::new(v)).is_some());
        }
    }

    #[test]
    fn test_border_encloses_interior() {
        let mut recorder = Recorder::default();
        draw_border(50, &mut recorder);
        assert_eq!(recorder.outlines, vec![(Vec3::splat(25.5), Vec3::splat(50.0), BORDER_COLOR)]);
    }

    #[test]
    fn test_format_number() {
        assert_eq!(format_number(999), "999");
        assert_eq!(format_number(125_000), "125.0K");
        assert_eq!(format_number(8_000_000), "8.0M");
    }
}
