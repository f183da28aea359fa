//! Entry point for the dashtop TUI. Parses args and runs the App.

use anyhow::Context;
use dashtop::app::App;
use dashtop::logging::init_file_logging;
use dashtop::profiles::{
    load_profiles, save_profiles, ProfileEntry, ProfileRequest, ResolveProfile,
};
use std::env;
use std::io::{self, Write};
use url::Url;

struct ParsedArgs {
    url: Option<String>,
    profile: Option<String>,
    save: bool,
    dry_run: bool,
}

fn parse_args<I: IntoIterator<Item = String>>(args: I) -> Result<ParsedArgs, String> {
    let mut it = args.into_iter();
    let prog = it.next().unwrap_or_else(|| "dashtop".into());
    let mut url: Option<String> = None;
    let mut profile: Option<String> = None;
    let mut save = false; // --save
    let mut dry_run = false; // --dry-run: resolve/persist profile, then exit

    while let Some(arg) = it.next() {
        match arg.as_str() {
            "-h" | "--help" => {
                return Err(format!(
                    "Usage: {prog} [--profile NAME|-P NAME] [--save] [--dry-run] [http://HOST:PORT]"
                ));
            }
            "--profile" | "-P" => {
                profile = it.next();
            }
            "--save" => {
                save = true;
            }
            "--dry-run" => {
                dry_run = true;
            }
            _ if arg.starts_with("--profile=") => {
                if let Some((_, v)) = arg.split_once('=') {
                    if !v.is_empty() {
                        profile = Some(v.to_string());
                    }
                }
            }
            _ => {
                if url.is_none() {
                    url = Some(arg);
                } else {
                    return Err(format!(
                        "Unexpected argument. Usage: {prog} [--profile NAME|-P NAME] [--save] [--dry-run] [http://HOST:PORT]"
                    ));
                }
            }
        }
    }
    Ok(ParsedArgs {
        url,
        profile,
        save,
        dry_run,
    })
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let parsed = match parse_args(env::args()) {
        Ok(v) => v,
        Err(msg) => {
            eprintln!("{msg}");
            return Ok(());
        }
    };

    let profiles_file = load_profiles();
    let req = ProfileRequest {
        profile_name: parsed.profile.clone(),
        url: parsed.url.clone(),
    };
    let resolved = req.resolve(&profiles_file);

    // Determine the server URL (and maybe mutated profiles to persist)
    let mut profiles_mut = profiles_file.clone();
    let url: String = match resolved {
        ResolveProfile::Direct(u) => {
            if let Some(name) = parsed.profile.as_ref() {
                let entry = ProfileEntry { url: u.clone() };
                match profiles_mut.profiles.get(name) {
                    None => {
                        // New profile: auto-save immediately
                        profiles_mut.profiles.insert(name.clone(), entry);
                        let _ = save_profiles(&profiles_mut);
                    }
                    Some(existing) => {
                        if *existing != entry {
                            let overwrite = parsed.save
                                || prompt_yes_no(&format!(
                                    "Overwrite existing profile '{name}'? [y/N]: "
                                ));
                            if overwrite {
                                profiles_mut.profiles.insert(name.clone(), entry);
                                let _ = save_profiles(&profiles_mut);
                            }
                        }
                    }
                }
            }
            u
        }
        ResolveProfile::Loaded(u) => u,
        ResolveProfile::PromptSelect(names) => {
            eprintln!("Select profile:");
            for (i, n) in names.iter().enumerate() {
                eprintln!("  {}. {}", i + 1, n);
            }
            eprint!("Enter number (or blank to abort): ");
            let _ = io::stderr().flush();
            let mut line = String::new();
            if io::stdin().read_line(&mut line).is_ok() {
                if let Ok(idx) = line.trim().parse::<usize>() {
                    if idx >= 1 && idx <= names.len() {
                        match profiles_mut.profiles.get(&names[idx - 1]) {
                            Some(entry) => entry.url.clone(),
                            None => return Ok(()),
                        }
                    } else {
                        return Ok(());
                    }
                } else {
                    return Ok(());
                }
            } else {
                return Ok(());
            }
        }
        ResolveProfile::PromptCreate(name) => {
            eprintln!("Profile '{name}' does not exist yet.");
            let url = prompt_string("Enter URL (http://HOST:PORT): ")?;
            if url.trim().is_empty() {
                return Ok(());
            }
            profiles_mut.profiles.insert(
                name.clone(),
                ProfileEntry {
                    url: url.trim().to_string(),
                },
            );
            let _ = save_profiles(&profiles_mut);
            url.trim().to_string()
        }
        ResolveProfile::None => {
            eprintln!("No URL provided and no profiles to select.");
            return Ok(());
        }
    };

    if parsed.dry_run {
        eprintln!("Resolved server: {url}");
        return Ok(());
    }

    let base = Url::parse(&url).with_context(|| format!("invalid server URL '{url}'"))?;

    let _log_guard = init_file_logging();
    tracing::info!(%base, "starting dashtop");

    let mut app = App::new(base);
    app.run().await
}

fn prompt_yes_no(prompt: &str) -> bool {
    eprint!("{prompt}");
    let _ = io::stderr().flush();
    let mut line = String::new();
    if io::stdin().read_line(&mut line).is_ok() {
        matches!(line.trim().to_ascii_lowercase().as_str(), "y" | "yes")
    } else {
        false
    }
}

fn prompt_string(prompt: &str) -> io::Result<String> {
    eprint!("{prompt}");
    let _ = io::stderr().flush();
    let mut line = String::new();
    io::stdin().read_line(&mut line)?;
    Ok(line)
}
