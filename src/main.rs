use std::env;
use std::fs;
use std::io::{self, Read};
use std::process::ExitCode;

use serde::Serialize;
use serde_json::json;
use tallies_core::color::{Rgb, hex_to_rgb};
use tallies_core::constants::{
    COUNTER_TEMPLATES, DARK_THEME, DEFAULT_COUNTER_COLOR, DESIGN_TOKENS, EXTENDED_PALETTE,
    LIGHT_THEME, PRESET_SWATCHES,
};
use tallies_core::error::{Result, TallyError};
use tallies_core::{CounterDraft, check_drafts};

const USAGE: &str = "tallies <contrast HEX... | check FILE | templates | palette | tokens>";

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args: Vec<String> = env::args().skip(1).collect();
    let result = run(&args);
    if let Err(e) = &result {
        log::error!("{e}");
    }
    ExitCode::from(exit_code(&result))
}

/// 0 when everything passed, 1 when some input was invalid, 2 on usage or I/O errors.
fn exit_code(result: &Result<bool>) -> u8 {
    match result {
        Ok(true) => 0,
        Ok(false) => 1,
        Err(_) => 2,
    }
}

/// Returns `Ok(false)` when the command ran but found invalid input.
fn run(args: &[String]) -> Result<bool> {
    let (command, rest) = args
        .split_first()
        .ok_or_else(|| TallyError::Usage(USAGE.to_owned()))?;

    match command.as_str() {
        "contrast" if !rest.is_empty() => {
            rest.iter().for_each(|hex| print_contrast(hex));
            Ok(true)
        }
        "check" if rest.len() == 1 => check(&rest[0]),
        "templates" => print_json(&COUNTER_TEMPLATES).map(|()| true),
        "palette" => print_json(&json!({
            "default": DEFAULT_COUNTER_COLOR,
            "presets": *PRESET_SWATCHES,
            "extended": EXTENDED_PALETTE,
            "light": LIGHT_THEME,
            "dark": DARK_THEME,
        }))
        .map(|()| true),
        "tokens" => print_json(&DESIGN_TOKENS).map(|()| true),
        _ => Err(TallyError::Usage(USAGE.to_owned())),
    }
}

fn print_contrast(hex: &str) {
    let rgb = match Rgb::from_hex(hex) {
        Ok(rgb) => rgb,
        Err(e) => {
            log::warn!("{hex}: {e}, treated as black");
            hex_to_rgb(hex)
        }
    };
    println!(
        "{hex}\t{rgb}\trgb({}, {}, {})\tL={:.4}\ttext={}",
        rgb.r,
        rgb.g,
        rgb.b,
        rgb.luminance(),
        rgb.contrast_color()
    );
}

fn check(path: &str) -> Result<bool> {
    let raw = if path == "-" {
        let mut buf = String::new();
        io::stdin().read_to_string(&mut buf)?;
        buf
    } else {
        fs::read_to_string(path)?
    };

    let drafts: Vec<CounterDraft> = serde_json::from_str(&raw)?;
    log::info!("Checking {} draft(s) from {path}", drafts.len());

    let reports = check_drafts(&drafts);
    let invalid = reports.iter().filter(|r| !r.valid).count();
    print_json(&reports)?;

    if invalid > 0 {
        log::warn!("{invalid} of {} draft(s) failed validation", reports.len());
    }
    Ok(invalid == 0)
}

fn print_json<T: Serialize + ?Sized>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}
