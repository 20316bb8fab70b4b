/*
 * Skill Graph
 *
 * Opens a window showing the skills graph: labels drift at constant speed,
 * bounce off the window edges and link up with fading lines when they pass
 * within reach of each other. Resizing the window reseeds the graph.
 *
 * Tunables are read from `skillgraph.yaml` in the working directory if present.
 * Set RUST_LOG to change the log level (default: info).
 */

use skillgraph::app;

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    nannou::app(app::model)
        .update(app::update)
        .exit(app::exit)
        .run();
}
