//! HRP - HR Platform Permission CLI
//!
//! Command-line interface for inspecting scope configuration and managing
//! role permission grants against a file-backed store.

use anyhow::{anyhow, Context};
use clap::{Parser, Subcommand};
use colored::Colorize;
use hrp_core::{
    Capability, DependencyGraph, FilePermissionStore, PermissionEditor, PermissionScope,
    PermissionStore, RoleGrants,
};
use std::path::PathBuf;
use uuid::Uuid;

#[derive(Parser)]
#[command(name = "hrp")]
#[command(version = "0.4.2")]
#[command(about = "HR Platform Permission Core", long_about = None)]
struct Cli {
    /// Role store directory
    #[arg(long, global = true, default_value = ".hrp/roles")]
    store: PathBuf,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List the modules of a permission scope
    Catalog {
        /// Permission scope (organization | platform)
        #[arg(long, default_value = "organization")]
        scope: String,
    },
    /// Inspect dependency graphs (show, check)
    Graph {
        #[command(subcommand)]
        command: GraphCommands,
    },
    /// Manage role permission grants (list, create, show, grant, revoke)
    Role {
        #[command(subcommand)]
        command: RoleCommands,
    },
}

#[derive(Subcommand)]
enum GraphCommands {
    /// Show dependency rules in declaration order
    Show {
        /// Permission scope (organization | platform)
        #[arg(long, default_value = "organization")]
        scope: String,
        /// Read the graph from a YAML file instead of the built-in scope
        #[arg(long)]
        file: Option<PathBuf>,
    },
    /// Check a dependency graph for cycles
    Check {
        /// Permission scope (organization | platform)
        #[arg(long, default_value = "organization")]
        scope: String,
        /// Read the graph from a YAML file instead of the built-in scope
        #[arg(long)]
        file: Option<PathBuf>,
    },
}

#[derive(Subcommand)]
enum RoleCommands {
    /// List stored roles
    List,
    /// Create a role with no grants yet
    Create {
        /// Role display name
        name: String,
        /// Permission scope (organization | platform)
        #[arg(long, default_value = "organization")]
        scope: String,
    },
    /// Show a role's permission table
    Show {
        /// Role name or id
        role: String,
    },
    /// Grant one capability on a module
    Grant {
        /// Role name or id
        role: String,
        /// Module code
        module: String,
        /// Capability (read|write|update|delete|approve|export)
        capability: String,
    },
    /// Revoke one capability on a module
    Revoke {
        /// Role name or id
        role: String,
        /// Module code
        module: String,
        /// Capability (read|write|update|delete|approve|export)
        capability: String,
    },
    /// Grant all capabilities on a module
    GrantAll {
        /// Role name or id
        role: String,
        /// Module code
        module: String,
    },
    /// Revoke all capabilities on a module
    RevokeAll {
        /// Role name or id
        role: String,
        /// Module code
        module: String,
    },
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();
    let store = FilePermissionStore::new(&cli.store);

    match cli.command {
        Commands::Catalog { scope } => {
            let scope: PermissionScope = scope.parse()?;
            let catalog = scope.module_catalog();

            println!("Modules in {} scope:\n", scope.to_string().bold());
            for module in catalog.modules() {
                println!(
                    "  {:<24} {:<24} {}",
                    module.code.to_string().cyan(),
                    module.name,
                    module.description.dimmed()
                );
            }
        }

        Commands::Graph { command } => match command {
            GraphCommands::Show { scope, file } => {
                let graph = resolve_graph(&scope, file.as_deref())?;

                for rule in graph.rules() {
                    let requires: Vec<&str> =
                        rule.requires.iter().map(|m| m.as_str()).collect();
                    println!(
                        "  {} -> [{}]",
                        rule.module.to_string().cyan(),
                        requires.join(", ")
                    );
                }
            }

            GraphCommands::Check { scope, file } => {
                let graph = resolve_graph(&scope, file.as_deref())?;

                match graph.find_cycle() {
                    Some(cycle) => {
                        let path: Vec<&str> = cycle.iter().map(|m| m.as_str()).collect();
                        println!("{} cycle found: {}", "✗".red(), path.join(" -> "));
                        std::process::exit(1);
                    }
                    None => {
                        println!(
                            "{} no cycles across {} rules",
                            "✓".green(),
                            graph.len()
                        );
                    }
                }
            }
        },

        Commands::Role { command } => match command {
            RoleCommands::List => {
                let roles = store.list_roles()?;
                if roles.is_empty() {
                    println!("No roles stored under {:?}", store.root());
                    return Ok(());
                }

                for grants in roles {
                    println!(
                        "  {:<24} {:<14} {} {}",
                        grants.role_name.bold(),
                        grants.scope.to_string(),
                        grants.role_id.to_string().dimmed(),
                        grants.updated_at.dimmed()
                    );
                }
            }

            RoleCommands::Create { name, scope } => {
                let scope: PermissionScope = scope.parse()?;
                let editor = PermissionEditor::empty(scope);
                let grants = RoleGrants::new(&name, scope, editor.into_records());
                let saved = store.save_role(&grants)?;

                println!("\n{} Role created", "✓".green());
                println!("  Name: {}", saved.role_name);
                println!("  Id: {}", saved.role_id);
                println!("  Scope: {}", saved.scope);
            }

            RoleCommands::Show { role } => {
                let grants = find_role(&store, &role)?;
                print_role(&grants);
            }

            RoleCommands::Grant {
                role,
                module,
                capability,
            } => {
                let capability: Capability = capability.parse()?;
                edit_role(&store, &role, |editor| {
                    editor.set_capability(&module.as_str().into(), capability, true);
                })?;
            }

            RoleCommands::Revoke {
                role,
                module,
                capability,
            } => {
                let capability: Capability = capability.parse()?;
                edit_role(&store, &role, |editor| {
                    editor.set_capability(&module.as_str().into(), capability, false);
                })?;
            }

            RoleCommands::GrantAll { role, module } => {
                edit_role(&store, &role, |editor| {
                    editor.grant_all(&module.as_str().into());
                })?;
            }

            RoleCommands::RevokeAll { role, module } => {
                edit_role(&store, &role, |editor| {
                    editor.revoke_all(&module.as_str().into());
                })?;
            }
        },
    }

    Ok(())
}

/// Built-in scope graph, or a YAML file when --file is given
fn resolve_graph(scope: &str, file: Option<&std::path::Path>) -> anyhow::Result<DependencyGraph> {
    match file {
        Some(path) => DependencyGraph::load(path)
            .with_context(|| format!("Failed to load graph from {:?}", path)),
        None => {
            let scope: PermissionScope = scope.parse()?;
            Ok(scope.dependency_graph().clone())
        }
    }
}

/// Find a role by id or display name
fn find_role(store: &FilePermissionStore, role: &str) -> anyhow::Result<RoleGrants> {
    if let Ok(id) = Uuid::parse_str(role) {
        return Ok(store.load_role(&id)?);
    }

    store
        .list_roles()?
        .into_iter()
        .find(|g| g.role_name == role)
        .ok_or_else(|| anyhow!("Role not found: {}", role))
}

/// Run one editing session against a stored role and persist the result
fn edit_role(
    store: &FilePermissionStore,
    role: &str,
    mutate: impl FnOnce(&mut PermissionEditor),
) -> anyhow::Result<()> {
    let grants = find_role(store, role)?;

    let mut editor = PermissionEditor::open(grants.scope, &grants.permissions);
    mutate(&mut editor);

    let updated = RoleGrants {
        permissions: editor.into_records(),
        ..grants
    };
    let saved = store.save_role(&updated)?;

    print_role(&saved);
    Ok(())
}

/// Render a role's permission table with locked read markers
fn print_role(grants: &RoleGrants) {
    let editor = PermissionEditor::open(grants.scope, &grants.permissions);

    println!(
        "\n{} ({} scope, updated {})",
        grants.role_name.bold(),
        grants.scope,
        grants.updated_at.dimmed()
    );
    println!(
        "  {:<24} {:>7} {:>7} {:>7} {:>7} {:>8} {:>7}",
        "module", "read", "write", "update", "delete", "approve", "export"
    );

    for code in editor.mapping().modules_sorted() {
        let set = editor.permissions_of(code.as_str());
        let locked = editor.is_locked(code.as_str());

        let read_cell = if set.can_read && locked {
            "✓*".yellow().to_string()
        } else if set.can_read {
            "✓".green().to_string()
        } else {
            "-".dimmed().to_string()
        };

        println!(
            "  {:<24} {:>7} {:>7} {:>7} {:>7} {:>8} {:>7}",
            code.as_str(),
            read_cell,
            cell(set.can_write),
            cell(set.can_update),
            cell(set.can_delete),
            cell(set.can_approve),
            cell(set.can_export)
        );
    }
    println!("  {} auto-selected (read locked by a dependent module)", "✓*".yellow());
}

fn cell(enabled: bool) -> String {
    if enabled {
        "✓".green().to_string()
    } else {
        "-".dimmed().to_string()
    }
}
