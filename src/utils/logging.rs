use env_logger::{Builder, Env, Target};

/// Route log output to stdout alongside the printed progress.
///
/// Defaults to `info`; `RUST_LOG` overrides it. Safe to call more than once.
pub fn init() {
    let env = Env::default().default_filter_or("info");
    let _ = Builder::from_env(env)
        .target(Target::Stdout)
        .format_timestamp(None)
        .format_target(false)
        .try_init();
}
