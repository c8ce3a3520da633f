use spc_oxide::constants::config::CONFIG_FILE;
use spc_oxide::data::DataSource;
use spc_oxide::report::save_report;
use spc_oxide::state::{AnalysisSession, WindowedSeriesStore};
use spc_oxide::ui::{self, Command};
use spc_oxide::widgets::BoundInputs;
use spc_oxide::{AnalysisConfig, Result};
use std::fs::File;
use std::io::{self, BufRead, Write};
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use std::sync::Mutex;
use tracing_subscriber::fmt::MakeWriter;
use tracing_subscriber::util::SubscriberInitExt;

/// Subscriber for logging onto the terminal; stderr shares it with the prompt,
/// so per-edit info events are filtered out
fn console_subscriber<W>(writer: W) -> impl tracing::Subscriber + Send + Sync + 'static
where
    W: for<'w> MakeWriter<'w> + Send + Sync + 'static,
{
    tracing_subscriber::fmt()
        .with_writer(writer)
        .with_max_level(tracing::Level::WARN)
        .finish()
}

fn init_logging(log_file: Option<&Path>) -> Result<()> {
    match log_file {
        Some(path) => {
            let file = File::create(path)?;
            tracing_subscriber::fmt()
                .with_writer(Mutex::new(file))
                .with_ansi(false)
                .init();
        }
        None => console_subscriber(io::stderr).init(),
    }
    Ok(())
}

fn print_window(session: &AnalysisSession, inputs: &BoundInputs) {
    let shown: Vec<String> = spc_oxide::BoundField::ALL
        .into_iter()
        .map(|field| format!("{}={}", field, inputs.text(field)))
        .collect();
    println!("[{}] {} points", shown.join(" "), session.filtered_view().len());
}

fn run(config: AnalysisConfig) -> Result<()> {
    let source = DataSource::load(&config.data_file)?;
    let series = source.samples(&config.x_column, &config.y_column)?;
    let store = WindowedSeriesStore::new(series, config.thresholds());
    let mut session = AnalysisSession::new(config.title.clone(), store, config.precision);
    let mut inputs = BoundInputs::new(&session);

    println!("{}", session.title());
    print_window(&session, &inputs);
    print!("{}", ui::render_table(session.statistics()));

    let stdin = io::stdin();
    let mut stdout = io::stdout();
    loop {
        print!("> ");
        stdout.flush()?;

        let mut line = String::new();
        if stdin.lock().read_line(&mut line)? == 0 {
            break;
        }

        let command = match line.parse::<Command>() {
            Ok(command) => command,
            Err(msg) => {
                println!("{} (type 'help')", msg);
                continue;
            }
        };

        match command {
            Command::Edit { field, raw } => match inputs.submit(&mut session, field, &raw) {
                Ok(_) => {
                    print_window(&session, &inputs);
                    print!("{}", ui::render_table(session.statistics()));
                }
                Err(rejection) => {
                    println!("rejected: {}", rejection);
                    print_window(&session, &inputs);
                }
            },
            Command::Partition(plan) => match session.select_partitions(plan) {
                Ok(_) => {
                    inputs.sync(&session);
                    print_window(&session, &inputs);
                    print!("{}", ui::render_table(session.statistics()));
                }
                Err(rejection) => println!("rejected: {}", rejection),
            },
            Command::Sections(sections) => {
                session.set_sections(sections);
                print!("{}", ui::render_table(session.statistics()));
            }
            Command::Reset => {
                session.reset();
                inputs.sync(&session);
                print_window(&session, &inputs);
                print!("{}", ui::render_table(session.statistics()));
            }
            Command::Table => print!("{}", ui::render_table(session.statistics())),
            Command::Lines => print!("{}", ui::render_lines(&session.reference_lines())),
            Command::Points => print!("{}", ui::render_points(&session.filtered_view())),
            Command::Bounds => print_window(&session, &inputs),
            Command::Save => match &config.report_file {
                Some(path) => match save_report(path, &session.snapshot()) {
                    Ok(()) => println!("saved to {}", path.display()),
                    Err(e) => println!("{}: {}", e.title(), e.user_message()),
                },
                None => println!("no \"report file path\" configured"),
            },
            Command::Help => println!("{}", ui::HELP),
            Command::Quit => break,
        }

        profiling::finish_frame!();
    }

    Ok(())
}

fn main() -> ExitCode {
    let config_path = std::env::args()
        .nth(1)
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from(CONFIG_FILE));

    let config = match AnalysisConfig::load(&config_path) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("{}: {}", e.title(), e.user_message());
            return ExitCode::FAILURE;
        }
    };

    if let Err(e) = init_logging(config.log_file.as_deref()) {
        eprintln!("{}: {}", e.title(), e.user_message());
        return ExitCode::FAILURE;
    }

    #[cfg(feature = "profile-with-puffin")]
    let _puffin_server = {
        puffin::set_scopes_on(true);
        puffin_http::Server::new(&format!("127.0.0.1:{}", puffin_http::DEFAULT_PORT)).ok()
    };

    tracing::info!(config = %config_path.display(), "starting analysis");
    match run(config) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!("{}", e);
            eprintln!("{}: {}", e.title(), e.user_message());
            ExitCode::FAILURE
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    #[derive(Clone, Default)]
    struct Captured(Arc<Mutex<Vec<u8>>>);

    impl Write for Captured {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            self.0.lock().unwrap().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn test_console_logging_skips_edit_events() {
        let captured = Captured::default();
        let writer = captured.clone();
        let subscriber = console_subscriber(move || writer.clone());

        tracing::subscriber::with_default(subscriber, || {
            tracing::info!("edit accepted");
            tracing::warn!("edit rejected");
        });

        let output = String::from_utf8(captured.0.lock().unwrap().clone()).unwrap();
        assert!(!output.contains("edit accepted"));
        assert!(output.contains("edit rejected"));
    }
}
