// Installs a terminal logger. Admitting `Trace` also turns on the
// per-operation trace of the arithmetic engine.
pub fn init_simple_logger(l: log::LevelFilter) -> Result<(), log::SetLoggerError> {
    use simplelog::*;

    let mut cb = ConfigBuilder::new();
    cb.set_location_level(LevelFilter::Off);
    cb.set_target_level(LevelFilter::Off);
    cb.set_thread_level(LevelFilter::Off);
    cb.set_level_color(Level::Trace, Some(Color::Green));
    let cfg = cb.build();

    TermLogger::init(l, cfg, TerminalMode::Mixed, ColorChoice::Auto)?;

    if l >= LevelFilter::Trace {
        crate::config::set_trace_enabled(true);
    }

    Ok(())
}
