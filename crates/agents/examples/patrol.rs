//! Drives a guard agent for a few simulated seconds and prints what it did.
//!
//! Run with logging to watch the node lifecycle:
//!
//! ```sh
//! RUST_LOG=behaviour_tree=trace cargo run -p agents --example patrol
//! ```

use agents::presets::guard_tree;
use agents::{AgentContext, Position};
use behaviour_tree::TreeError;
use tracing_subscriber::EnvFilter;

fn main() -> Result<(), TreeError> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let mut tree = guard_tree(2.0, 1.0)?;
    let mut ctx = AgentContext::new(1, Position::new(0.0, 0.0), Position::new(6.0, 2.0));

    let dt = 0.1;
    for frame in 0..120 {
        if frame == 40 {
            println!("-- intruder spotted, raising the alert --");
            tree.blackboard_mut().set("alerted", true);
        }
        tree.tick(dt, &mut ctx);
        if frame % 20 == 0 {
            println!(
                "t={:>5.1}s position=({:.2}, {:.2})",
                frame as f32 * dt,
                ctx.position.x,
                ctx.position.y
            );
        }
    }

    let contact = tree.blackboard().get_or_default::<bool>("contact");
    println!("contact reported: {contact}");
    Ok(())
}
