//! Init command - Create the .syllabi data directory

use std::path::Path;

use crate::errors::Result;
use crate::fs;
use crate::schemas::Config;

/// Create `.syllabi/` with a default config.json
pub async fn run(cwd: Option<&Path>, force: bool, dry_run: bool) -> Result<()> {
    let root = fs::resolve_cwd(cwd);
    println!("{}", init_at(&root, force, dry_run)?);
    Ok(())
}

fn init_at(root: &Path, force: bool, dry_run: bool) -> Result<String> {
    let config_path = fs::get_config_path(root);
    if config_path.exists() && !force {
        return Ok(format!(
            "{} already exists; use --force to overwrite",
            config_path.display()
        ));
    }

    if dry_run {
        tracing::info!("[DRY RUN] would write {}", config_path.display());
        return Ok(format!("[DRY RUN] would write {}", config_path.display()));
    }

    std::fs::create_dir_all(fs::get_data_dir(root))?;
    fs::write_config(root, &Config::default())?;
    Ok(format!("Initialized {}", fs::get_data_dir(root).display()))
}
