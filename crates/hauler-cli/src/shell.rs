//! Interactive shell.
//!
//! Renders whichever view the route gate yields and loops: the login
//! prompt, the profile setup form, or the dashboard with its commands.

use std::str::FromStr;

use anyhow::Result;
use colored::{ColoredString, Colorize};
use hauler_application::{
    ProfileForm, ProfileSetupFlow, RequestForm, RequestHistory, Route, RouteGate, SetupEntry,
    format_submitted_at,
};
use hauler_core::HaulerError;
use hauler_core::request::{PickupRequest, RequestStatus, StatusTone, WasteType};
use rustyline::DefaultEditor;
use rustyline::error::ReadlineError;
use strum::IntoEnumIterator;

use crate::bootstrap::Services;

/// Outcome of one prompt read.
enum Input {
    Line(String),
    Cancelled,
    Quit,
}

pub async fn run(services: Services) -> Result<()> {
    let mut rl = DefaultEditor::new()?;

    println!("{}", "=== Hauler ===".bright_magenta().bold());
    println!("{}", "Waste pickup requests from your terminal.".bright_black());
    println!();

    // ===== Main View Loop =====
    loop {
        // The gate renders nothing until the first resolution lands
        services.auth.ready().await;
        let state = services.auth.state();
        let Some(route) = RouteGate::resolve(&state, Route::Dashboard) else {
            continue;
        };

        let keep_going = match route {
            Route::Login => login_view(&mut rl, &services).await?,
            Route::ProfileSetup => setup_view(&mut rl, &services).await?,
            Route::Dashboard => dashboard_view(&mut rl, &services).await?,
        };
        if !keep_going {
            break;
        }
    }

    println!("{}", "Goodbye!".bright_green());
    services.auth.shutdown();
    Ok(())
}

// ===== Views =====

async fn login_view(rl: &mut DefaultEditor, services: &Services) -> Result<bool> {
    println!("{}", "Sign in to continue.".bold());
    println!(
        "{}",
        "Press Enter to sign in with Google, or type 'quit'.".bright_black()
    );

    match read_line(rl, "login> ")? {
        Input::Quit => Ok(false),
        Input::Cancelled => {
            println!("{}", "Type 'quit' to exit.".yellow());
            Ok(true)
        }
        Input::Line(_) => {
            println!("{}", "Signing in...".bright_black());
            match services.auth.sign_in().await {
                Ok(account) => {
                    println!("{}", format!("Welcome, {}!", account.display_name).green());
                }
                Err(e) => report(&e),
            }
            Ok(true)
        }
    }
}

async fn setup_view(rl: &mut DefaultEditor, services: &Services) -> Result<bool> {
    let flow = ProfileSetupFlow::new(
        services.auth.clone(),
        services.profiles.clone(),
        services.directory.clone(),
    );

    let providers = match flow.enter().await {
        Ok(SetupEntry::AlreadyComplete) => return Ok(true),
        Ok(SetupEntry::Form(providers)) => providers,
        Err(e) => {
            report(&e);
            return match read_line(rl, "retry> ")? {
                Input::Quit => Ok(false),
                _ => Ok(true),
            };
        }
    };

    println!();
    println!("{}", "=== Profile Setup ===".bright_magenta().bold());
    println!(
        "{}",
        "A few details before your first pickup request.".bright_black()
    );

    let address = match read_line(rl, "home address> ")? {
        Input::Quit => return Ok(false),
        Input::Cancelled => return Ok(true),
        Input::Line(value) => value,
    };
    let phone = match read_line(rl, "phone number> ")? {
        Input::Quit => return Ok(false),
        Input::Cancelled => return Ok(true),
        Input::Line(value) => value,
    };

    println!("Choose a service provider:");
    for (index, provider) in providers.iter().enumerate() {
        println!("  {}. {}", index + 1, provider.name);
    }
    let service_provider = match read_line(rl, "provider> ")? {
        Input::Quit => return Ok(false),
        Input::Cancelled => return Ok(true),
        Input::Line(choice) => match choice.parse::<usize>() {
            Ok(n) if (1..=providers.len()).contains(&n) => providers[n - 1].name.clone(),
            _ => choice,
        },
    };

    match flow
        .submit(&ProfileForm {
            address,
            phone,
            service_provider,
        })
        .await
    {
        Ok(()) => println!("{}", "Profile saved.".green()),
        Err(e) => report(&e),
    }
    Ok(true)
}

async fn dashboard_view(rl: &mut DefaultEditor, services: &Services) -> Result<bool> {
    let history = RequestHistory::new(services.auth.clone(), services.requests.clone());
    let mut feed = match history.subscribe().await {
        Ok(feed) => feed,
        Err(e) => {
            report(&e);
            return match read_line(rl, "retry> ")? {
                Input::Quit => Ok(false),
                _ => Ok(true),
            };
        }
    };

    let state = services.auth.state();
    let name = state
        .account
        .as_ref()
        .map(|account| account.display_name.clone())
        .unwrap_or_default();
    println!();
    println!(
        "{}",
        format!("=== Dashboard - {} ===", name).bright_magenta().bold()
    );
    render_requests(&feed.borrow_and_update());
    println!(
        "{}",
        "Commands: new, requests, profile, refresh, logout, help, quit".bright_black()
    );

    // ===== Command Loop =====
    loop {
        // Pick up live changes before prompting again
        if feed.has_changed().unwrap_or(false) {
            render_requests(&feed.borrow_and_update());
        }

        match read_line(rl, "hauler> ")? {
            Input::Quit => return Ok(false),
            Input::Cancelled => {
                println!("{}", "Type 'quit' to exit.".yellow());
            }
            Input::Line(command) => match command.as_str() {
                "" => {}
                "new" => {
                    if !request_wizard(rl, services).await? {
                        return Ok(false);
                    }
                }
                "requests" | "list" => match history.load().await {
                    Ok(entries) => render_requests(&entries),
                    Err(e) => report(&e),
                },
                "refresh" => {
                    services.auth.refresh_profile().await;
                    match history.load().await {
                        Ok(entries) => render_requests(&entries),
                        Err(e) => report(&e),
                    }
                }
                "profile" => render_profile(services),
                "logout" => match services.auth.sign_out().await {
                    Ok(()) => {
                        println!("{}", "Signed out.".green());
                        history.release();
                        return Ok(true);
                    }
                    Err(e) => report(&e),
                },
                "help" | "?" => help(),
                other => {
                    println!("{}", format!("Unknown command: {}", other).bright_black());
                }
            },
        }
    }
}

async fn request_wizard(rl: &mut DefaultEditor, services: &Services) -> Result<bool> {
    let form = RequestForm::new(
        services.auth.clone(),
        services.requests.clone(),
        services.camera.clone(),
        services.locator.clone(),
    );

    println!();
    println!("{}", "=== New Pickup Request ===".bright_magenta().bold());

    // Address comes prefilled from the profile; Enter keeps it
    let current = form.snapshot().address;
    let prompt = format!("address [{}]> ", current);
    match read_line(rl, &prompt)? {
        Input::Quit => return Ok(false),
        Input::Cancelled => return cancelled(),
        Input::Line(line) => {
            if !line.is_empty() {
                form.set_address(line);
            }
        }
    }

    let types: Vec<WasteType> = WasteType::iter().collect();
    println!("Waste type:");
    for (index, waste_type) in types.iter().enumerate() {
        println!("  {}. {}", index + 1, waste_type);
    }
    match read_line(rl, "waste type> ")? {
        Input::Quit => return Ok(false),
        Input::Cancelled => return cancelled(),
        Input::Line(choice) => {
            let selected = match choice.parse::<usize>() {
                Ok(n) if (1..=types.len()).contains(&n) => Some(types[n - 1]),
                _ => WasteType::from_str(&choice).ok(),
            };
            match selected {
                Some(waste_type) => form.set_waste_type(waste_type),
                None => println!("{}", "No such waste type, pick one from the list.".yellow()),
            }
        }
    }

    println!(
        "{}",
        "Photo: 'f <path>' attaches a file, 'c' captures from the camera, Enter skips."
            .bright_black()
    );
    match read_line(rl, "photo> ")? {
        Input::Quit => return Ok(false),
        Input::Cancelled => return cancelled(),
        Input::Line(line) => {
            if let Some(path) = line.strip_prefix("f ") {
                attach_file(&form, path.trim());
            } else if line == "c" {
                if !capture_from_camera(rl, &form).await? {
                    return Ok(false);
                }
            }
        }
    }

    match read_line(rl, "attach current location? [y/N]> ")? {
        Input::Quit => return Ok(false),
        Input::Cancelled => return cancelled(),
        Input::Line(answer) => {
            if answer.eq_ignore_ascii_case("y") {
                println!("{}", "Getting a fix...".bright_black());
                match form.fetch_location().await {
                    Ok(point) => println!("{}", point.maps_url().cyan()),
                    Err(e) => report(&e),
                }
            }
        }
    }

    match form.submit().await {
        Ok(request) => {
            println!(
                "{}",
                format!("Request {} submitted.", short_id(&request.id)).green()
            );
        }
        Err(e) => report(&e),
    }
    Ok(true)
}

/// Runs an open-capture-close pass on the camera, offering another shot
/// while the session survives a failed capture.
async fn capture_from_camera(rl: &mut DefaultEditor, form: &RequestForm) -> Result<bool> {
    if let Err(e) = form.open_camera().await {
        report(&e);
        return Ok(true);
    }
    loop {
        match form.capture_photo() {
            Ok(()) => {
                println!("{}", "Photo captured.".green());
                return Ok(true);
            }
            Err(e) => {
                report(&e);
                if !form.snapshot().camera_active {
                    return Ok(true);
                }
                match read_line(rl, "try another shot? [y/N]> ")? {
                    Input::Line(answer) if answer.eq_ignore_ascii_case("y") => {}
                    Input::Quit => {
                        form.cancel_camera();
                        return Ok(false);
                    }
                    _ => {
                        form.cancel_camera();
                        return Ok(true);
                    }
                }
            }
        }
    }
}

// ===== Rendering =====

fn render_requests(entries: &[PickupRequest]) {
    println!();
    if entries.is_empty() {
        println!(
            "{}",
            "No requests yet. Type 'new' to submit your first pickup.".bright_black()
        );
        println!();
        return;
    }
    println!("{}", format!("Your requests ({}):", entries.len()).bold());
    for request in entries {
        for line in entry_lines(request) {
            println!("  {}", line);
        }
    }
    println!();
}

/// Formatted lines for one history entry: the summary line, then one
/// indented detail line each for the provider, the photo note, and the
/// map link.
fn entry_lines(request: &PickupRequest) -> Vec<String> {
    let mut lines = vec![format!(
        "{}  {:<14}  {}  {}",
        status_badge(request.status),
        request.waste_type.to_string(),
        format_submitted_at(&request.created_at).bright_black(),
        request.address,
    )];
    lines.push(format!(
        "             {}",
        format!("via {}", request.service_provider).bright_black()
    ));
    if request.image.is_some() {
        lines.push(format!("             {}", "photo attached".bright_black()));
    }
    if let Some(location) = &request.location {
        lines.push(format!("             {}", location.maps_url().cyan()));
    }
    lines
}

fn render_profile(services: &Services) {
    let state = services.auth.state();
    let Some(profile) = state.profile else {
        println!("{}", "No profile on this session.".bright_black());
        return;
    };
    println!();
    println!("{}", "Profile".bold());
    println!("  name      {}", profile.display_name);
    println!("  email     {}", profile.email);
    println!("  address   {}", profile.address);
    println!("  phone     {}", profile.phone);
    println!("  provider  {}", profile.service_provider);
    println!();
}

fn status_badge(status: RequestStatus) -> ColoredString {
    let label = format!("{:<11}", status.to_string());
    match status.tone() {
        StatusTone::Warning => label.yellow(),
        StatusTone::Info => label.blue(),
        StatusTone::Success => label.green(),
        StatusTone::Danger => label.red(),
    }
}

fn help() {
    println!("Commands:");
    println!("  new       submit a new pickup request");
    println!("  requests  list your requests, newest first");
    println!("  profile   show the service profile");
    println!("  refresh   re-read the profile and request list");
    println!("  logout    sign out");
    println!("  quit      exit");
}

// ===== Helpers =====

fn read_line(rl: &mut DefaultEditor, prompt: &str) -> Result<Input> {
    match rl.readline(prompt) {
        Ok(line) => {
            let trimmed = line.trim().to_string();
            if !trimmed.is_empty() {
                let _ = rl.add_history_entry(&line);
            }
            if trimmed == "quit" || trimmed == "exit" {
                return Ok(Input::Quit);
            }
            Ok(Input::Line(trimmed))
        }
        Err(ReadlineError::Interrupted) => Ok(Input::Cancelled),
        Err(ReadlineError::Eof) => Ok(Input::Quit),
        Err(err) => Err(err.into()),
    }
}

fn cancelled() -> Result<bool> {
    println!("{}", "Cancelled.".yellow());
    Ok(true)
}

fn attach_file(form: &RequestForm, path: &str) {
    let content_type = mime_guess::from_path(path).first_or_octet_stream();
    match std::fs::read(path) {
        Ok(bytes) => match form.attach_photo_bytes(content_type.essence_str(), &bytes) {
            Ok(()) => {
                println!(
                    "{}",
                    format!("Attached {} ({} bytes).", path, bytes.len()).green()
                );
            }
            Err(e) => report(&e),
        },
        Err(e) => println!("{}", format!("Could not read {}: {}", path, e).red()),
    }
}

fn report(err: &HaulerError) {
    println!("{}", err.to_string().red());
    if err.is_retryable() {
        println!(
            "{}",
            "The backend may be down; try again in a moment.".bright_black()
        );
    }
}

fn short_id(id: &str) -> &str {
    id.get(..8).unwrap_or(id)
}

#[cfg(test)]
mod tests {
    use super::*;
    use hauler_core::account::UserAccount;
    use hauler_core::request::GeoPoint;

    fn entry() -> PickupRequest {
        let account = UserAccount {
            uid: "u-1".to_string(),
            email: "u1@example.com".to_string(),
            display_name: "U One".to_string(),
            photo_url: None,
        };
        PickupRequest::new(
            &account,
            "GreenCycle Waste Services",
            "5 River Rd",
            WasteType::Organic,
            None,
            Some(GeoPoint::new(7.539487, 8.514175)),
        )
    }

    #[test]
    fn test_entry_lines_cover_every_display_field() {
        let request = entry();
        let rendered = entry_lines(&request).join("\n");
        assert!(rendered.contains("pending"));
        assert!(rendered.contains("Organic"));
        assert!(rendered.contains(&format_submitted_at(&request.created_at)));
        assert!(rendered.contains("5 River Rd"));
        assert!(rendered.contains("via GreenCycle Waste Services"));
        assert!(rendered.contains("https://www.google.com/maps?q=7.539487,8.514175"));
    }

    #[test]
    fn test_entry_lines_skip_absent_photo_and_fix() {
        let mut request = entry();
        request.location = None;
        let rendered = entry_lines(&request).join("\n");
        assert!(!rendered.contains("photo attached"));
        assert!(!rendered.contains("maps"));
        assert!(rendered.contains("via GreenCycle Waste Services"));
    }

    #[test]
    fn test_short_id_truncates_uuids_only() {
        assert_eq!(short_id("0c7a1ff0-3a4e-4d5f-9df0-000000000000"), "0c7a1ff0");
        assert_eq!(short_id("abc"), "abc");
    }
}
