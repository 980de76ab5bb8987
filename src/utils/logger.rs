use std::io::Write;

use chrono::Utc;
use log::info;

/// Sets up `env_logger` with a timestamped format. `RUST_LOG`, when set,
/// wins over `default_level`. Calling it twice is harmless.
pub fn init_logger(default_level: &str) {
    let env = env_logger::Env::default().default_filter_or(default_level);
    let result = env_logger::Builder::from_env(env)
        .format(|buf, record| {
            writeln!(
                buf,
                "[{}] [{}] [{}:{}] {}",
                Utc::now().format("%Y-%m-%d %H:%M:%S UTC"),
                record.level(),
                record.file().unwrap_or("unknown"),
                record.line().unwrap_or(0),
                record.args()
            )
        })
        .try_init();
    if result.is_ok() {
        info!("Logger initialized (default level: {})", default_level);
    }
}
