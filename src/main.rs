use clap::{Parser, Subcommand};
use serde_json::json;
use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use std::process::ExitCode;

use exhibition_registry::config::AppConfig;
use exhibition_registry::{
    logging, startup, validation, AppError, AppResult, ParticipantForm, Registry,
};

#[derive(Parser, Debug)]
#[command(name = "exhibition-registry")]
#[command(about = "Register, search, update and delete exhibition participants")]
struct Args {
    /// Configuration file path (default: config.yaml)
    #[arg(short, long, default_value = "config.yaml")]
    config: String,

    /// Database URL (overrides config file)
    #[arg(long)]
    db: Option<String>,

    /// Managed image directory (overrides config file)
    #[arg(long)]
    images: Option<PathBuf>,

    /// Log debug output to stderr
    #[arg(short, long)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Register a new participant
    Register(FormArgs),
    /// Show a participant by registration ID
    Search {
        id: String,
        /// Print the record as JSON
        #[arg(long)]
        json: bool,
    },
    /// Overwrite all fields of an existing participant
    Update {
        #[command(flatten)]
        form: FormArgs,
        /// Remove the stored image instead of keeping it
        #[arg(long, conflicts_with = "image")]
        clear_image: bool,
    },
    /// Delete a participant (the image file is kept)
    Delete {
        id: String,
        /// Skip the confirmation prompt
        #[arg(short, long)]
        yes: bool,
    },
}

/// Form fields; blanks are accepted here and rejected by validation
#[derive(clap::Args, Debug)]
struct FormArgs {
    #[arg(long, default_value = "")]
    id: String,
    #[arg(long, default_value = "")]
    name: String,
    #[arg(long, default_value = "")]
    faculty: String,
    #[arg(long, default_value = "")]
    project: String,
    #[arg(long, default_value = "")]
    contact: String,
    #[arg(long, default_value = "")]
    email: String,
    /// Image to copy into the managed directory (jpg, jpeg, png, gif)
    #[arg(long)]
    image: Option<PathBuf>,
}

impl FormArgs {
    fn to_form(&self, image_path: Option<String>) -> ParticipantForm {
        ParticipantForm {
            registration_id: self.id.clone(),
            name: self.name.clone(),
            faculty: self.faculty.clone(),
            project_title: self.project.clone(),
            contact: self.contact.clone(),
            email: self.email.clone(),
            image_path,
        }
    }
}

fn load_config(args: &Args) -> Result<AppConfig, String> {
    let mut app_config =
        if args.config == "config.yaml" && !std::path::Path::new("config.yaml").exists() {
            AppConfig::default_config()
        } else {
            AppConfig::load_from_file(&args.config)
                .map_err(|e| format!("Failed to load configuration: {}", e))?
        };

    if let Some(db) = &args.db {
        app_config.database.url = db.clone();
    }
    if let Some(images) = &args.images {
        app_config.images.dir = images.clone();
    }

    Ok(app_config)
}

fn confirm(prompt: &str) -> bool {
    print!("{} [y/N] ", prompt);
    let _ = io::stdout().flush();

    let mut answer = String::new();
    if io::stdin().lock().read_line(&mut answer).is_err() {
        return false;
    }
    matches!(answer.trim().to_ascii_lowercase().as_str(), "y" | "yes")
}

/// Image path an update should carry over when no new image is given
///
/// The stored image is kept unless `clear_image` is set. Lookup failures that
/// the update itself reports (blank or unknown ID) carry nothing over.
fn carried_image(
    registry: &Registry,
    form: &FormArgs,
    clear_image: bool,
) -> AppResult<Option<String>> {
    if clear_image || form.image.is_some() {
        return Ok(None);
    }
    match registry.search(&form.id) {
        Ok(view) => Ok(view.participant.image_path),
        Err(e) if e.is_validation() || matches!(e, AppError::NotFound(_)) => Ok(None),
        Err(e) => Err(e),
    }
}

/// Delete after confirmation; returns whether the record was deleted
fn delete_confirmed<F>(registry: &Registry, id: &str, confirmed: F) -> AppResult<bool>
where
    F: FnOnce() -> bool,
{
    validation::validate_registration_id(id.trim())?;
    if !confirmed() {
        return Ok(false);
    }
    registry.delete(id)?;
    Ok(true)
}

fn run(registry: &Registry, command: Command) -> AppResult<()> {
    match command {
        Command::Register(form) => {
            registry.register(&form.to_form(None), form.image.as_deref())?;
            println!("Participant registered successfully.");
        }
        Command::Search { id, json } => {
            let view = registry.search(&id)?;
            if json {
                let body = json!({
                    "participant": view.participant,
                    "image": view.image.label(),
                    "imageAvailable": view.image.path().is_some(),
                });
                println!("{}", serde_json::to_string_pretty(&body)?);
            } else {
                let p = &view.participant;
                println!("Registration ID: {}", p.registration_id);
                println!("Student Name:    {}", p.name);
                println!("Faculty:         {}", p.faculty);
                println!("Project Title:   {}", p.project_title);
                println!("Contact Number:  {}", p.contact);
                println!("Email Address:   {}", p.email);
                println!("Project Image:   {}", view.image.label());
            }
        }
        Command::Update { form, clear_image } => {
            let current_image = carried_image(registry, &form, clear_image)?;
            registry.update(&form.to_form(current_image), form.image.as_deref())?;
            println!("Participant updated successfully.");
        }
        Command::Delete { id, yes } => {
            let deleted = delete_confirmed(registry, &id, || {
                yes || confirm("Are you sure you want to delete this participant?")
            })?;
            if deleted {
                println!("Participant deleted.");
            } else {
                println!("Delete cancelled.");
            }
        }
    }
    Ok(())
}

fn main() -> ExitCode {
    let args = Args::parse();

    logging::init(args.verbose);

    let app_config = match load_config(&args) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("{}", e);
            return ExitCode::FAILURE;
        }
    };

    // Storage that cannot be opened is fatal.
    let registry = match startup::initialize(&app_config) {
        Ok(registry) => registry,
        Err(e) => {
            eprintln!("Failed to initialize registry: {}", e);
            return ExitCode::FAILURE;
        }
    };

    match run(&registry, args.command) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::debug!(error = %e, "operation failed");
            eprintln!("{}", e.user_message());
            ExitCode::FAILURE
        }
    }
}
