use std::{io::Write, sync, thread};

pub fn init() {
    static ONCE: sync::Once = sync::Once::new();

    ONCE.call_once(|| {
        color_backtrace::install();

        env_logger::Builder::from_default_env()
            .format(|buf, record| {
                let style = buf.default_level_style(record.level());
                writeln!(
                    buf,
                    "{} {:?} {}:{:>03} {} {style}{}{style:#} {}",
                    buf.timestamp_nanos(),
                    thread::current().id(),
                    record.file().unwrap_or("?"),
                    record.line().unwrap_or(0),
                    thread::current().name().unwrap_or("UNNAMED"),
                    record.level(),
                    record.args()
                )
            })
            .init();
    });
}
