//! Subcommand execution

use crate::auth::rbac::{PermissionEvaluator, ProfileRecord, Role, gate};
use crate::config::Config;
use crate::utils::error::Result;
use std::io::Write;
use std::path::Path;
use tracing::{debug, info};

use super::Command;

/// Read a profile record, as YAML for `.yaml`/`.yml` files and JSON otherwise
pub async fn load_profile(path: &Path) -> Result<ProfileRecord> {
    debug!("Loading profile from: {:?}", path);

    let content = tokio::fs::read_to_string(path).await?;
    let is_yaml = path
        .extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case("yaml") || ext.eq_ignore_ascii_case("yml"));

    if is_yaml {
        ProfileRecord::from_yaml(&content)
    } else {
        ProfileRecord::from_json(&content)
    }
}

/// Run `command`, writing the report to `out`
///
/// Returns whether everything asked for was granted. A profile without a role
/// is reported as denied, not as an error.
pub async fn execute<W: Write>(command: &Command, config: &Config, out: &mut W) -> Result<bool> {
    match command {
        Command::Check {
            profile,
            permissions,
        } => {
            let role = load_profile(profile).await?.into_role();
            check(role.as_ref(), config, permissions, out)
        }
        Command::Gate { profile, page } => {
            let requirement = config.gate(page)?;
            let role = load_profile(profile).await?.into_role();
            let evaluator = PermissionEvaluator::with_config(role.as_ref(), &config.rbac);

            let decision = gate(&evaluator, requirement);
            match decision.denial_reason() {
                None => writeln!(out, "granted {}", page)?,
                Some(reason) => writeln!(out, "denied  {}: {}", page, reason)?,
            }
            Ok(decision.is_granted())
        }
        Command::Whoami { profile } => {
            let role = load_profile(profile).await?.into_role();
            whoami(role.as_ref(), config, out)?;
            Ok(role.is_some())
        }
    }
}

fn check<W: Write>(
    role: Option<&Role>,
    config: &Config,
    permissions: &[String],
    out: &mut W,
) -> Result<bool> {
    let evaluator = PermissionEvaluator::with_config(role, &config.rbac);
    let mut all_granted = true;

    for permission in permissions {
        let check = evaluator.check_permission_detailed(permission);
        match (&check.matched_by, &check.denial_reason) {
            (Some(grant), _) => writeln!(out, "granted {} ({})", permission, grant)?,
            (None, reason) => {
                all_granted = false;
                writeln!(
                    out,
                    "denied  {} ({})",
                    permission,
                    reason.as_deref().unwrap_or("denied")
                )?;
            }
        }
    }

    info!(
        role = evaluator.role_name().unwrap_or("<not loaded>"),
        checked = permissions.len(),
        all_granted,
        "Permission check finished"
    );
    Ok(all_granted)
}

fn whoami<W: Write>(role: Option<&Role>, config: &Config, out: &mut W) -> Result<()> {
    let evaluator = PermissionEvaluator::with_config(role, &config.rbac);

    let Some(role) = role else {
        writeln!(out, "role: <not loaded>")?;
        writeln!(out, "admin: false")?;
        writeln!(out, "super_admin: false")?;
        return Ok(());
    };

    writeln!(out, "role: {}", role.name)?;
    writeln!(out, "admin: {}", evaluator.is_admin())?;
    writeln!(out, "super_admin: {}", evaluator.is_super_admin())?;
    writeln!(out, "permissions:")?;
    for permission in role.permissions.sorted() {
        writeln!(out, "  - {}", permission)?;
    }
    Ok(())
}

