//! Command handler modules for the pazaak CLI.
//!
//! One module per subcommand, each exposing a single
//! `handle_COMMAND_command(...) -> Result<(), CliError>` function with
//! output streams injected as `&mut dyn Write`.

mod cfg;
mod deal;
mod eval;
mod play;
mod rng;
mod sim;

pub use cfg::handle_cfg_command;
pub use deal::handle_deal_command;
pub use eval::handle_eval_command;
pub use play::handle_play_command;
pub use rng::handle_rng_command;
pub use sim::handle_sim_command;
