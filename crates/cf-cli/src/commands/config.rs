//! Config command implementations

use std::path::Path;

use anyhow::{Context, Result};

use crate::output::{print_error, print_info, print_success, print_warning};

/// Print the resolved config file path
pub fn config_path(path: &Path) -> Result<()> {
    println!("{}", path.display());
    Ok(())
}

/// Show current configuration
pub fn config_show(path: &Path) -> Result<()> {
    if !path.exists() {
        print_warning(&format!("No configuration file found at {:?}", path));
        print_info("Run 'cf config init' to create one");
        return Ok(());
    }

    print_info(&format!("Configuration file: {:?}", path));
    println!();

    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read config file: {:?}", path))?;

    println!("{}", content);

    Ok(())
}

/// Write a commented configuration template
pub fn config_init(path: &Path, force: bool) -> Result<()> {
    if let Some(config_dir) = path.parent().filter(|dir| !dir.as_os_str().is_empty()) {
        if !config_dir.exists() {
            std::fs::create_dir_all(config_dir).with_context(|| {
                format!("Failed to create config directory: {:?}", config_dir)
            })?;
            print_success(&format!("Created config directory: {:?}", config_dir));
        }
    }

    if path.exists() && !force {
        print_error(&format!("Config file already exists: {:?}", path));
        print_info("Use --force to overwrite");
        return Ok(());
    }

    std::fs::write(path, default_config())
        .with_context(|| format!("Failed to write config file: {:?}", path))?;

    print_success(&format!("Created configuration file: {:?}", path));
    print_info("Fill in [session] and [target] to run 'cf app'");

    Ok(())
}

/// Template written by `config init`
fn default_config() -> &'static str {
    r#"# cf client configuration

[api]
# Cloud controller endpoint
endpoint = "https://api.example.com"

# Request timeout in seconds
timeout = 30

# Accept self-signed certificates
skip_ssl_validation = false

[session]
# Bearer token sent with every request
# access_token = "bearer ..."
# user = "some-user"

# Targeted organization and space
# [target.organization]
# guid = "..."
# name = "some-org"
#
# [target.space]
# guid = "..."
# name = "some-space"
"#
}
