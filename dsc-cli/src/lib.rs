//! # DSC Command-Line Front End (dsc-cli)
//!
//! Everything that talks to a human: menus, prompting with retry on malformed
//! input, and rendering engine results as text or JSON.
//!
//! **Modes:**
//! - Interactive: `SessionController` drives the menu loop over any
//!   `BufRead`/`Write` pair (stdin/stdout in production, buffers in tests)
//! - One-shot: `run::run_commands` applies a list of textual commands to a
//!   single session

pub mod controller;
pub mod prompt;
pub mod render;
pub mod run;

pub use controller::SessionController;
pub use prompt::{PromptError, Prompter};
pub use render::Renderer;
