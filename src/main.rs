//! Entry point of the `skeletons` binary.

use std::path::Path;

use skeletons::{
    cli::{get_args, Args, Command},
    create_site, create_theme,
    emitter::config_file_name,
    error::{default_error_handler, Result},
    format::Format,
    fs::OsFilesystem,
    logger::init_logger,
};

/// Main application entry point.
fn main() {
    let args = get_args();
    init_logger(args.verbose);

    if let Err(err) = run(args) {
        default_error_handler(err);
    }
}

fn run(args: Args) -> Result<()> {
    let fs = OsFilesystem::new();

    match args.command {
        Command::Site { output_dir, force, format } => {
            create_site(&fs, &output_dir, force, &format)?;
            let config_file = Format::parse(&format).map(config_file_name)?;
            print_site_next_steps(&output_dir, &config_file);
        }
        Command::Theme { output_dir, format } => {
            create_theme(&fs, &output_dir, &format)?;
            println!("Created new theme in {}", output_dir.display());
        }
    }
    Ok(())
}

fn print_site_next_steps(output_dir: &Path, config_file: &str) {
    println!("Congratulations! Your new Hugo site was created in {}.", output_dir.display());
    println!();
    println!("Just a few more steps...");
    println!();
    println!("1. Change the current directory to {}.", output_dir.display());
    println!("2. Create or install a theme:");
    println!("   - Create a new theme with the command \"skeletons theme themes/<THEMENAME>\"");
    println!("   - Or, install a theme from https://themes.gohugo.io/");
    println!("3. Edit {config_file}, setting the \"theme\" property to the theme name.");
    println!("4. Create new content with the command \"hugo new content <SECTIONNAME>/<FILENAME>.<FORMAT>\".");
    println!("5. Start the embedded web server with the command \"hugo server --buildDrafts\".");
}
