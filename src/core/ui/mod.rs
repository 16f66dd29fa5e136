//! Core domain: full-screen UI owned by the game flow.

mod complete;

pub(crate) use complete::{spawn_complete_screen, stop_run_clock};
