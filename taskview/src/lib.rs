pub mod config;
pub mod error;
pub mod json;
pub mod model;
pub mod nav;
pub mod render;
pub mod svg;
pub mod geometry {
    pub mod limits;
    pub mod math;
    pub mod tolerance;
}
pub mod algorithms {
    pub mod halfedge;
    pub mod viewport;
}

pub use config::ViewerConfig;
pub use error::{Error, Result};
pub use model::{Capabilities, Mesh, NamedTask, Point, Polygon, Segment, Task};
pub use nav::{Command, ViewState};
pub use render::{Frame, Surface};
pub use svg::SvgSurface;

use algorithms::viewport::task_bounds;

/// The loaded task list plus the current position in it.
pub struct Viewer {
    tasks: Vec<NamedTask>,
    state: ViewState,
    config: ViewerConfig,
}

impl Viewer {
    pub fn new(tasks: Vec<NamedTask>, config: ViewerConfig) -> Result<Viewer> {
        if tasks.is_empty() {
            return Err(Error::EmptyTaskList);
        }
        Ok(Viewer { tasks, state: ViewState::default(), config })
    }

    pub fn from_json_str(s: &str, config: ViewerConfig) -> Result<Viewer> {
        Viewer::new(json::tasks_from_str(s)?, config)
    }

    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    pub fn tasks(&self) -> &[NamedTask] {
        &self.tasks
    }

    pub fn config(&self) -> &ViewerConfig {
        &self.config
    }

    pub fn current_index(&self) -> usize {
        self.state.current_index()
    }

    pub fn current(&self) -> &NamedTask {
        &self.tasks[self.state.current_index()]
    }

    /// Applies a navigation command; returns whether the index moved.
    pub fn handle(&mut self, command: Command) -> bool {
        let next = self.state.apply(command, self.tasks.len());
        let moved = next != self.state;
        self.state = next;
        moved
    }

    /// Caption of the current task, without laying out a frame.
    pub fn caption(&self) -> String {
        let i = self.state.current_index();
        let named = &self.tasks[i];
        let size = self.config.show_size.then(|| {
            let task = named.display_task(self.config.prefer_subdivided);
            task_bounds(task, self.config.viewport.bounds_source, self.config.prefer_subdivided).size()
        });
        render::caption(&named.name, i, self.tasks.len(), size)
    }

    pub fn frame(&self, size: (f64, f64), random: &mut dyn FnMut() -> f64) -> Result<Frame> {
        let i = self.state.current_index();
        Frame::build(&self.tasks[i], i, self.tasks.len(), size, &self.config, random)
    }

    /// Redraws the current task. The frame is laid out before the surface is
    /// touched, so a failing task leaves the previous picture in place.
    pub fn render(&self, surface: &mut dyn Surface, random: &mut dyn FnMut() -> f64) -> Result<()> {
        let frame = self.frame(surface.size(), random)?;
        log::debug!(
            "render '{}' ({}/{}): {} faces, {} skeleton segments, scale {}",
            self.current().name,
            self.current_index() + 1,
            self.len(),
            frame.faces.len(),
            frame.skeleton.len(),
            frame.viewport.scale
        );
        frame.draw(surface);
        Ok(())
    }

    /// Applies `command`, then redraws.
    pub fn step(&mut self, command: Command, surface: &mut dyn Surface, random: &mut dyn FnMut() -> f64) -> Result<()> {
        self.handle(command);
        self.render(surface, random)
    }

    /// Current task as a standalone SVG document sized by the config.
    pub fn to_svg(&self, random: &mut dyn FnMut() -> f64) -> Result<String> {
        let mut surface = SvgSurface::new(self.config.svg_width, self.config.svg_height);
        self.render(&mut surface, random)?;
        Ok(surface.finish())
    }
}
