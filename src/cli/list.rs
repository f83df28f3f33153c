use crate::config::Config;
use crate::discovery;
use crate::errors::Result;
use crate::tree::TreePrinter;

/// Discover repositories under the configured root and print them as a tree
pub fn run(config: &Config, color: bool) -> Result<()> {
    let repos = discovery::find_repos(&config.root, &config.discovery_options())?;
    log::info!(
        "Found {} repositories under {}",
        repos.len(),
        config.root.display()
    );

    let root = config.root.display().to_string();
    let output = TreePrinter::new(color).print(&root, &repos);
    println!("{}", output.trim_end());

    Ok(())
}
