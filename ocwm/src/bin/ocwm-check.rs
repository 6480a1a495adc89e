use anyhow::{bail, Result};
use clap::{arg, command};
use ocwm::{load_from_file, ConfigFile};
use ocwm_core::hooks::HOOK_EVENTS;
use ocwm_core::{Config as _, Registrations};
use std::path::PathBuf;

fn main() -> Result<()> {
    let matches = command!("ocwm Check")
        .about("Checks syntax of the configuration file")
        .help_template(ocwm::utils::get_help_template())
        .args(&[
            arg!(-v --verbose "Outputs received configuration file."),
            arg!([INPUT] "Sets the input file to use. Uses first in the search path otherwise."),
        ])
        .get_matches();

    let input = matches.get_one::<String>("INPUT").map(PathBuf::from);
    let verbose = matches.get_flag("verbose");

    println!("\x1b[0;94m::\x1b[0m ocwm version: {}", ocwm_core::VERSION);

    let locator = ConfigFile::new(input);
    if verbose {
        for path in locator.search_paths() {
            println!("Searching {}", path.display());
        }
    }
    let Some(path) = locator.locate() else {
        bail!("No readable configuration file found");
    };
    println!("\x1b[0;94m::\x1b[0m Loading configuration {} . . .", path.display());

    let config = load_from_file(&path)?;
    if verbose {
        dbg!(&config);
    }

    let mut problems = config.check_workspace_ids();
    println!("\x1b[0;94m::\x1b[0m Checking keybinds . . .");
    problems.extend(config.check_keybinds(verbose));
    println!("\x1b[0;94m::\x1b[0m Checking hooks . . .");
    problems.extend(config.check_hooks());

    if !problems.is_empty() {
        for problem in &problems {
            println!("\x1b[1;91mERROR:\x1b[0m\x1b[1m {problem} \x1b[0m");
        }
        bail!("{} problems found", problems.len());
    }

    let mut registrations = Registrations::default();
    locator.load(&path, &mut registrations)?;
    for keybind in &config.keybind {
        println!(
            "    {} -> {:?} {}",
            keybind.binding(&config.modkey),
            keybind.command,
            keybind.value
        );
    }
    for event in HOOK_EVENTS {
        if registrations.hooks.subscriber(event).is_some() {
            println!("    hook {event}");
        }
    }
    for command in &registrations.commands {
        println!("    startup {command:?}");
    }
    println!("\x1b[0;92m    -> Configuration loaded OK \x1b[0m");
    Ok(())
}
