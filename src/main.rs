#[macro_use]
extern crate log;

mod app_config;
mod args;
mod event_log;

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::Instant;

use analog_keypad::keypad::IioAdc;
use analog_keypad::{AnalogKeypad, Channel};

use self::app_config::AppConfig;
use self::args::Args;
use self::event_log::EventLog;

const EXITCODE_SUCCESS: i32 = 0;
const EXITCODE_CONFIG_FAILS: i32 = 1;
const EXITCODE_KEYPAD_FAILS: i32 = 2;

type Keypad = AnalogKeypad<IioAdc, EventLog>;

fn main() {
    let exit_status = real_main();
    if exit_status != EXITCODE_SUCCESS {
        std::process::exit(exit_status);
    }
}

fn real_main() -> i32 {
    let args: Args = argh::from_env();
    env_logger::Builder::new()
        .filter_level(args.log_level.into())
        .init();

    let config = match AppConfig::load_from_file(&args.config) {
        Ok(cfg) => cfg,
        Err(e) => {
            error!("Could not load configuration: {e}");
            return EXITCODE_CONFIG_FAILS;
        }
    };

    let mut keypad = match build_keypad(&config) {
        Ok(keypad) => keypad,
        Err(e) => {
            error!("Could not set up keypad: {e}");
            return EXITCODE_KEYPAD_FAILS;
        }
    };

    let exit = Arc::new(AtomicBool::new(false));
    let exit_handler = exit.clone();
    if let Err(e) = ctrlc::set_handler(move || exit_handler.store(true, Ordering::SeqCst)) {
        error!("Could not install signal handler: {e}");
        return EXITCODE_KEYPAD_FAILS;
    }

    if args.calibrate {
        run_calibration(&mut keypad, &exit);
    } else {
        run_keypad(&mut keypad, &exit);
    }

    EXITCODE_SUCCESS
}

fn build_keypad(config: &AppConfig) -> anyhow::Result<Keypad> {
    let channels = config
        .channels
        .iter()
        .map(|ch| {
            let adc = IioAdc::try_new(&ch.device, ch.index, ch.resolution_bits)?;
            Ok::<_, anyhow::Error>(Channel::new(adc, ch.layout()))
        })
        .collect::<anyhow::Result<Vec<_>>>()?;

    AnalogKeypad::new(config.keypad_config(), channels, EventLog::default())
}

/// Poll the keypad at the configured cadence until exit is requested
fn run_keypad(keypad: &mut Keypad, exit: &AtomicBool) {
    let poll_interval = keypad.config().poll_interval;
    let start = Instant::now();

    while !exit.load(Ordering::SeqCst) {
        if keypad.poll_once(start.elapsed()) {
            debug!("Event handled, redraw needed");
        }
        std::thread::sleep(poll_interval);
    }

    info!("Exiting after {} handled events", keypad.listener().handled());
}

/// Log the raw reading and decoded key of every channel at the configured cadence
fn run_calibration(keypad: &mut Keypad, exit: &AtomicBool) {
    let poll_interval = keypad.config().poll_interval;

    while !exit.load(Ordering::SeqCst) {
        for (index, channel) in keypad.channels_mut().iter_mut().enumerate() {
            let keys = channel.layout().keys().len();
            match channel.sample() {
                Ok((raw, key)) => info!("Channel {index} ({keys} keys): {raw:5} => {key:?}"),
                Err(e) => error!("Channel {index}: {e}"),
            }
        }
        std::thread::sleep(poll_interval);
    }
}
