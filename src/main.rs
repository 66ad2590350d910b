// SPDX-License-Identifier: MPL-2.0
//! Replays a booking scenario against the toast queue and prints every
//! change of the visible toast.

use docliq_toasts::appointments::StatusChangeWatcher;
use docliq_toasts::config;
use docliq_toasts::diagnostics::DiagnosticsCollector;
use docliq_toasts::domain::toast::ToastDuration;
use docliq_toasts::error::{Error, Result};
use docliq_toasts::i18n::I18n;
use docliq_toasts::notifications::{Kind, Notification, NotificationInput, ToastQueue, TokioTimer};
use docliq_toasts::scenario::{Scenario, Step};
use std::collections::HashMap;
use std::path::PathBuf;
use std::process::ExitCode;
use std::time::Instant;

const HELP: &str = "\
Usage: docliq-toasts [OPTIONS] <SCENARIO>

Options:
  --lang <LOCALE>       Locale for toast titles (e.g. en-US, de)
  --duration-ms <MS>    Auto-dismiss window (overrides settings.toml)
  --report <PATH>       Write a JSON diagnostics report after the run
  -v, --verbose         Log queue internals
  -h, --help            Print help
";

struct Flags {
    lang: Option<String>,
    duration_ms: Option<u64>,
    report: Option<PathBuf>,
    verbose: bool,
    scenario: PathBuf,
}

fn parse_flags() -> Result<Option<Flags>> {
    let mut args = pico_args::Arguments::from_env();
    if args.contains(["-h", "--help"]) {
        return Ok(None);
    }

    let flags = Flags {
        lang: args.opt_value_from_str("--lang")?,
        duration_ms: args.opt_value_from_str("--duration-ms")?,
        report: args.opt_value_from_str("--report")?,
        verbose: args.contains(["-v", "--verbose"]),
        scenario: args.free_from_str()?,
    };

    let rest = args.finish();
    if !rest.is_empty() {
        return Err(Error::Args(format!("unexpected arguments: {rest:?}")));
    }
    Ok(Some(flags))
}

fn main() -> ExitCode {
    let flags = match parse_flags() {
        Ok(Some(flags)) => flags,
        Ok(None) => {
            print!("{HELP}");
            return ExitCode::SUCCESS;
        }
        Err(err) => {
            eprintln!("{err}\n\n{HELP}");
            return ExitCode::FAILURE;
        }
    };

    let level = if flags.verbose {
        log::LevelFilter::Debug
    } else {
        log::LevelFilter::Warn
    };
    if let Err(err) = simple_logger::SimpleLogger::new().with_level(level).init() {
        eprintln!("logger unavailable: {err}");
    }

    let runtime = match tokio::runtime::Builder::new_current_thread()
        .enable_time()
        .build()
    {
        Ok(runtime) => runtime,
        Err(err) => {
            log::error!("failed to start runtime: {err}");
            return ExitCode::FAILURE;
        }
    };

    match runtime.block_on(run(flags)) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            log::error!("{err}");
            ExitCode::FAILURE
        }
    }
}

async fn run(flags: Flags) -> Result<()> {
    let settings = config::load().unwrap_or_else(|err| {
        log::warn!("using default settings: {err}");
        config::Config::default()
    });
    let scenario = Scenario::load(&flags.scenario)?;

    let i18n = I18n::new(flags.lang, &settings);
    let duration = flags
        .duration_ms
        .map(ToastDuration::from_millis)
        .unwrap_or_else(|| settings.toast_duration());

    let mut collector = DiagnosticsCollector::new(settings.diagnostics_capacity());
    let (timer, mut expired) = TokioTimer::new();
    let mut queue = ToastQueue::new(timer, duration);
    queue.set_diagnostics(collector.handle());
    queue.subscribe(printer(&i18n));

    let mut watcher = StatusChangeWatcher::new(&i18n);
    watcher.set_diagnostics(collector.handle());

    for step in scenario.steps {
        match step {
            Step::Observe(appointments) => {
                watcher.observe(&appointments, &mut queue);
            }
            Step::Toast {
                title_key,
                kind,
                subject_id,
            } => {
                let mut input = NotificationInput::new(kind, i18n.tr(&title_key));
                if let Some(subject_id) = subject_id {
                    input = input.with_subject(subject_id);
                }
                queue.enqueue(input);
            }
            Step::Dismiss => {
                if let Some(id) = queue.current().map(Notification::id) {
                    queue.dismiss(id);
                    let id = id.to_string();
                    println!("{}", i18n.tr_with_args("cli-toast-dismissed", &[("id", &id)]));
                }
            }
            Step::Wait(pause) => {
                let sleep = tokio::time::sleep(pause);
                tokio::pin!(sleep);
                loop {
                    tokio::select! {
                        () = &mut sleep => break,
                        Some(id) = expired.recv() => {
                            queue.expire(id);
                            collector.process_pending();
                        }
                    }
                }
            }
        }
        collector.process_pending();
    }

    // Let the remaining toasts run out.
    while !queue.is_empty() {
        match expired.recv().await {
            Some(id) => {
                queue.expire(id);
                collector.process_pending();
            }
            None => break,
        }
    }
    println!("{}", i18n.tr("cli-scenario-finished"));

    collector.process_pending();
    if let Some(path) = flags.report {
        let written = collector.export_to_file(&path)?;
        println!("{}", written.display());
    }
    Ok(())
}

/// Builds the subscriber that renders the visible toast as a terminal line.
fn printer(i18n: &I18n) -> Box<dyn FnMut(Option<&Notification>)> {
    let labels: HashMap<Kind, String> = Kind::ALL
        .into_iter()
        .map(|kind| (kind, i18n.tr(kind.i18n_key())))
        .collect();
    let cleared = i18n.tr("cli-toast-cleared");
    let started = Instant::now();

    Box::new(move |current| {
        let elapsed = started.elapsed().as_secs_f32();
        match current {
            Some(toast) => {
                let label = labels.get(&toast.kind()).map_or("", String::as_str);
                let mut line =
                    format!("[{elapsed:6.1}s] {} [{label}] {}", toast.id(), toast.title());
                if let Some(action) = toast.action() {
                    line.push_str(&format!(" -> {} ({})", action.label, action.target));
                }
                println!("{line}");
            }
            None => println!("[{elapsed:6.1}s] {cleared}"),
        }
    })
}
